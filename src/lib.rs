//! # lsb_conceal 库
//!
//! 本库包含 LSB 隐写工具的核心逻辑：比特访问、嵌入与提取算法，以及 PPM 图像和消息文件的读写。

// 声明库包含的所有模块。

pub mod bits;
pub mod cli;
pub mod constants;
pub mod depth;
pub mod error;
pub mod handler;
pub mod message;
pub mod raster;
pub mod steganography;
