//! # 消息文件
//!
//! 消息按原始字节读写，不做任何解释或编码转换。

use std::fs::File;
use std::io::{self, BufWriter, Read, Write};
use std::path::Path;

/// 读取直到输入结束的全部字节。
pub fn read_message<R: Read>(mut reader: R) -> io::Result<Vec<u8>> {
    let mut message = Vec::new();
    reader.read_to_end(&mut message)?;
    Ok(message)
}

/// 原样写出消息字节。
pub fn write_message<W: Write>(message: &[u8], mut writer: W) -> io::Result<()> {
    writer.write_all(message)?;
    writer.flush()
}

pub fn read_message_file(path: impl AsRef<Path>) -> io::Result<Vec<u8>> {
    read_message(File::open(path)?)
}

pub fn write_message_file(message: &[u8], path: impl AsRef<Path>) -> io::Result<()> {
    write_message(message, BufWriter::new(File::create(path)?))
}
