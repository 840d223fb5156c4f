/// 二进制 PPM 文件头中的格式标识。
pub const FORMAT_TAG: &str = "P6";

/// 文件头中唯一接受的最大颜色强度。
pub const MAX_INTENSITY: u32 = 255;

/// 每个像素的颜色通道数 (R, G, B)。
pub const PIXEL_WIDTH: usize = 3;

/// 每个消息字节包含的比特数。
pub const BITS_PER_BYTE: usize = 8;

/// 每个通道字节可替换的低位比特数的下限与上限。
pub const MIN_BITS: u8 = 1;
pub const MAX_BITS: u8 = 8;
