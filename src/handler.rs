//! # 命令处理逻辑模块
//!
//! 包含处理 `conceal`、`extract` 和 `capacity` 子命令的高级业务逻辑。
//! 本模块负责协调文件 I/O、调用核心隐写算法以及向用户报告结果。

use crate::cli::{CapacityArgs, ConcealArgs, ExtractArgs};
use crate::constants::BITS_PER_BYTE;
use crate::message::{read_message_file, write_message_file};
use crate::raster::RasterImage;
use crate::steganography::{embed, extract};
use anyhow::{Context, Result};
use colored::Colorize;
use log::{debug, warn};
use std::path::Path;

/// 处理 'Conceal' 命令的执行逻辑。
///
/// 负责读取图像和消息文件、检查隐写空间是否足够、调用嵌入算法写入消息并清零剩余容量，
/// 最后将结果写入目标图像文件。
///
/// # Arguments
///
/// * `args` - 包含输入/输出路径与比特深度的 `ConcealArgs` 结构体。
///
/// # Errors
///
/// 如果发生以下任一情况，将返回错误：
/// * 指定了 `--no-clobber` 且目标文件已存在。
/// * 无法读取输入的图像或消息文件，或图像格式无效。
/// * 图像在给定比特深度下没有足够的空间来隐藏消息。
/// * 无法写入到目标图像文件。
pub fn handle_conceal(args: ConcealArgs) -> Result<()> {
    ensure_writable(&args.dest, args.no_clobber)?;

    let mut image = RasterImage::open(&args.image).with_context(|| {
        format!(
            "Unable to read image file: {}",
            args.image.to_string_lossy().red().bold()
        )
    })?;

    let message = read_message_file(&args.message).with_context(|| {
        format!(
            "Unable to read message file: {}",
            args.message.to_string_lossy().red().bold()
        )
    })?;

    if message.contains(&0) {
        warn!("message contains a NUL byte; extraction will stop at the first one");
    }

    let required_bits = message.len() * BITS_PER_BYTE;
    let available_bits = image.capacity_bits(args.bits);
    debug!(
        "{}x{} image, depth {}: {required_bits} bits required, {available_bits} available",
        image.cols(),
        image.rows(),
        args.bits
    );

    anyhow::ensure!(
        required_bits <= available_bits,
        "Too few pixels to conceal message. \nRequired: {} bits, Available: {} bits",
        required_bits.to_string().red().bold(),
        available_bits.to_string().green().bold()
    );

    embed(&message, image.channels_mut(), args.bits)
        .context("Failed to conceal the message in the image.")?;

    image.save(&args.dest).with_context(|| {
        format!(
            "Unable to write to target image file: {}",
            args.dest.to_string_lossy().red().bold()
        )
    })?;

    println!(
        "The message has been successfully concealed and saved: {}",
        args.dest.to_string_lossy().green().bold()
    );

    Ok(())
}

/// 处理 'Extract' 命令的执行逻辑。
///
/// 负责读取经过隐写的图像文件、按给定比特深度重组消息字节，
/// 最后将提取的消息写入目标文件。
///
/// # Errors
///
/// 如果发生以下任一情况，将返回错误：
/// * 指定了 `--no-clobber` 且目标文件已存在。
/// * 无法读取输入的图像文件，或图像格式无效。
/// * 无法写入到目标消息文件。
pub fn handle_extract(args: ExtractArgs) -> Result<()> {
    ensure_writable(&args.text, args.no_clobber)?;

    let image = RasterImage::open(&args.image).with_context(|| {
        format!(
            "Unable to read image file: {}",
            args.image.to_string_lossy().red().bold()
        )
    })?;

    let message = extract(image.channels(), args.bits);

    write_message_file(&message, &args.text).with_context(|| {
        format!(
            "Unable to write to target message file: {}",
            args.text.to_string_lossy().red().bold()
        )
    })?;

    println!(
        "The message has been successfully extracted and saved: {}",
        args.text.to_string_lossy().green().bold()
    );

    Ok(())
}

/// 处理 'Capacity' 命令：报告图像在给定比特深度下可隐藏的字节数。
pub fn handle_capacity(args: CapacityArgs) -> Result<()> {
    let image = RasterImage::open(&args.image).with_context(|| {
        format!(
            "Unable to read image file: {}",
            args.image.to_string_lossy().red().bold()
        )
    })?;

    let bits = image.capacity_bits(args.bits);

    println!(
        "{} ({}x{}) can conceal {} bytes ({} bits) at {} bits per channel",
        args.image.to_string_lossy().green().bold(),
        image.cols(),
        image.rows(),
        (bits / BITS_PER_BYTE).to_string().green().bold(),
        bits,
        args.bits
    );

    Ok(())
}

/// 指定 `--no-clobber` 时，在执行任何处理之前确认输出路径尚不存在。
fn ensure_writable(path: &Path, no_clobber: bool) -> Result<()> {
    anyhow::ensure!(
        !no_clobber || !path.exists(),
        "Output file already exists: {}. \nDrop --no-clobber to overwrite it.",
        path.to_string_lossy().red().bold()
    );
    Ok(())
}
