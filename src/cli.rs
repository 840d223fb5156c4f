//! # 命令行接口模块
//!
//! 使用 `clap` 定义了程序的命令行结构，包括子命令和参数。
//! 解析得到的参数结构体即为经过校验的配置，直接传递给各处理函数。

use crate::depth::BitDepth;
use clap::Parser;
use std::path::PathBuf;

/// 一款基于 LSB (最低有效位) 隐写术的命令行工具，用于在二进制 PPM (P6) 图像中隐藏或提取消息。
#[derive(Parser, Debug)]
#[command(
    version,
    about,
    long_about = "一款基于 LSB (最低有效位) 隐写术的命令行工具，用于在二进制 PPM (P6) 图像中隐藏或提取消息。\n每个颜色通道字节的低 BITS 位用于承载消息比特，BITS 取值范围为 1 到 8。"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令：conceal (隐藏)、extract (提取) 和 capacity (容量查询)。
#[derive(Parser, Debug)]
pub enum Commands {
    /// 将消息文件的内容隐藏到 PPM 图像中。
    Conceal(ConcealArgs),

    /// 从经过隐写的 PPM 图像中提取消息。
    Extract(ExtractArgs),

    /// 显示图像在给定比特深度下最多能隐藏多少字节。
    Capacity(CapacityArgs),
}

/// 'conceal' 命令所需的参数。
#[derive(Parser, Debug)]
pub struct ConcealArgs {
    /// 要隐藏的消息文件路径。
    pub message: PathBuf,

    /// 用于隐写的输入 PPM 图像路径。
    pub image: PathBuf,

    /// 隐写完成后，保存结果图像的输出路径。
    pub dest: PathBuf,

    /// 每个颜色通道使用的低位比特数 (1-8)。
    pub bits: BitDepth,

    /// 输出文件已存在时拒绝覆盖 (默认直接覆盖)。
    #[arg(short, long)]
    pub no_clobber: bool,
}

/// 'extract' 命令所需的参数。
#[derive(Parser, Debug)]
pub struct ExtractArgs {
    /// 已隐藏消息的 PPM 图像路径。
    pub image: PathBuf,

    /// 提取消息后，保存消息内容的输出路径。
    pub text: PathBuf,

    /// 隐藏时使用的低位比特数 (1-8)。
    pub bits: BitDepth,

    /// 输出文件已存在时拒绝覆盖 (默认直接覆盖)。
    #[arg(short, long)]
    pub no_clobber: bool,
}

/// 'capacity' 命令所需的参数。
#[derive(Parser, Debug)]
pub struct CapacityArgs {
    /// 要查询的 PPM 图像路径。
    pub image: PathBuf,

    /// 每个颜色通道使用的低位比特数 (1-8)。
    pub bits: BitDepth,
}
