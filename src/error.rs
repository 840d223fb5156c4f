//! # 错误类型
//!
//! 库内部各模块共用的错误枚举。命令层在此基础上使用 `anyhow` 附加文件路径等上下文。

use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid number of bits: {0:?} (expected 1..=8)")]
    InvalidBitDepth(String),

    #[error("Invalid image file: malformed header")]
    MalformedHeader,

    #[error("Invalid image file: expected format tag \"P6\", found {found:?}")]
    FormatTag { found: String },

    #[error("Invalid image file: maximum intensity must be 255, found {found}")]
    MaxIntensity { found: u64 },

    #[error("Invalid image file: dimensions {width}x{height} are not positive")]
    Dimensions { width: u64, height: u64 },

    #[error("Invalid image file: expected {expected} bytes of pixel data, found {found}")]
    PayloadLength { expected: u64, found: u64 },

    #[error(
        "Too few pixels to conceal message: {required} bits required, {available} bits available"
    )]
    TooFewPixels { required: usize, available: usize },

    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
