//! # 栅格图像
//!
//! 二进制 PPM (P6) 文件的读取与写出。文件头格式为
//! `P6\n<宽> <高>\n255\n`，其后紧跟恰好 `宽 * 高 * 3` 个像素字节 (行优先，RGB 顺序)。

use crate::constants::{FORMAT_TAG, MAX_INTENSITY, PIXEL_WIDTH};
use crate::depth::BitDepth;
use crate::error::{Error, Result};
use crate::steganography;
use log::debug;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Read, Seek, SeekFrom, Write};
use std::path::Path;

/// 数值字段的最大字符数，防止畸形文件头导致无界读取。
const MAX_TOKEN_LEN: usize = 20;

/// 内存中的图像：尺寸与扁平化的通道字节。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterImage {
    rows: usize,
    cols: usize,
    color: Vec<u8>,
}

impl RasterImage {
    /// 由尺寸与通道字节构造图像，`color` 的长度必须等于 `rows * cols * 3`。
    pub fn new(rows: usize, cols: usize, color: Vec<u8>) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(Error::Dimensions {
                width: cols as u64,
                height: rows as u64,
            });
        }

        let expected = channel_count(cols as u64, rows as u64)?;
        if color.len() as u64 != expected {
            return Err(Error::PayloadLength {
                expected,
                found: color.len() as u64,
            });
        }

        Ok(Self { rows, cols, color })
    }

    /// 打开并解析 `path` 处的图像文件。
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        Self::read_from(BufReader::new(File::open(path)?))
    }

    /// 从可定位的读取器中解析图像。
    ///
    /// 文件头的全部校验 (格式标识、最大强度、尺寸、像素字节数) 都在分配像素缓冲区之前完成。
    pub fn read_from<R: BufRead + Seek>(mut reader: R) -> Result<Self> {
        let tag = read_token(&mut reader)?;
        let width = parse_number(&read_token(&mut reader)?)?;
        let height = parse_number(&read_token(&mut reader)?)?;
        let max_intensity = parse_number(&read_token(&mut reader)?)?;

        // 最大强度之后恰好有一个空白字节，随后即为像素数据。
        match next_byte(&mut reader)? {
            Some(byte) if byte.is_ascii_whitespace() => {}
            _ => return Err(Error::MalformedHeader),
        }

        if tag != FORMAT_TAG.as_bytes() {
            return Err(Error::FormatTag {
                found: String::from_utf8_lossy(&tag).into_owned(),
            });
        }

        if max_intensity != u64::from(MAX_INTENSITY) {
            return Err(Error::MaxIntensity {
                found: max_intensity,
            });
        }

        if width == 0 || height == 0 {
            return Err(Error::Dimensions { width, height });
        }

        let expected = channel_count(width, height)?;

        let header_len = reader.stream_position()?;
        let end = reader.seek(SeekFrom::End(0))?;
        let found = end.saturating_sub(header_len);
        if found != expected {
            return Err(Error::PayloadLength { expected, found });
        }
        reader.seek(SeekFrom::Start(header_len))?;

        let len = usize::try_from(expected).map_err(|_| Error::PayloadLength {
            expected,
            found,
        })?;
        let mut color = vec![0u8; len];
        reader.read_exact(&mut color)?;

        debug!("read {width}x{height} image ({len} channel bytes)");

        Ok(Self {
            rows: height as usize,
            cols: width as usize,
            color,
        })
    }

    /// 将图像写入 `path`，已存在的文件会被截断。
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let mut writer = BufWriter::new(File::create(path)?);
        self.write_to(&mut writer)?;
        writer.flush()?;
        Ok(())
    }

    /// 按与 [`RasterImage::read_from`] 相同的格式输出文件头与像素字节。
    pub fn write_to<W: Write>(&self, mut writer: W) -> Result<()> {
        write!(
            writer,
            "{FORMAT_TAG}\n{} {}\n{MAX_INTENSITY}\n",
            self.cols, self.rows
        )?;
        writer.write_all(&self.color)?;
        Ok(())
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn channels(&self) -> &[u8] {
        &self.color
    }

    pub fn channels_mut(&mut self) -> &mut [u8] {
        &mut self.color
    }

    /// 在给定深度下可承载的消息比特数：`rows * cols * 3 * depth`。
    pub fn capacity_bits(&self, depth: BitDepth) -> usize {
        steganography::capacity_bits(self.color.len(), depth)
    }
}

fn channel_count(width: u64, height: u64) -> Result<u64> {
    width
        .checked_mul(height)
        .and_then(|pixels| pixels.checked_mul(PIXEL_WIDTH as u64))
        .ok_or(Error::Dimensions { width, height })
}

fn next_byte<R: BufRead>(reader: &mut R) -> Result<Option<u8>> {
    let byte = match reader.fill_buf()?.first() {
        Some(&byte) => byte,
        None => return Ok(None),
    };
    reader.consume(1);
    Ok(Some(byte))
}

/// 跳过前导空白，读取下一个以空白结尾的字段。字段后的那个空白字节不被消费。
fn read_token<R: BufRead>(reader: &mut R) -> Result<Vec<u8>> {
    let mut token = Vec::new();

    loop {
        let byte = match reader.fill_buf()?.first() {
            Some(&byte) => byte,
            None => break,
        };

        if byte.is_ascii_whitespace() {
            if !token.is_empty() {
                break;
            }
        } else {
            if token.len() == MAX_TOKEN_LEN {
                return Err(Error::MalformedHeader);
            }
            token.push(byte);
        }

        reader.consume(1);
    }

    if token.is_empty() {
        return Err(Error::MalformedHeader);
    }

    Ok(token)
}

fn parse_number(token: &[u8]) -> Result<u64> {
    std::str::from_utf8(token)
        .ok()
        .filter(|s| s.bytes().all(|b| b.is_ascii_digit()))
        .and_then(|s| s.parse().ok())
        .ok_or(Error::MalformedHeader)
}
