//! # 比特访问
//!
//! 读取或改写单个字节中的某一位，位编号 0 表示最低有效位。

/// 返回 `byte` 的第 `n` 位是否为 1。调用方需保证 `n` 位于 0..=7。
pub fn get_bit(byte: u8, n: usize) -> bool {
    byte & (1 << n) != 0
}

/// 返回将第 `n` 位设为 `value` 后的 `byte`，其余各位保持不变。
pub fn put_bit(byte: u8, n: usize, value: bool) -> u8 {
    let mask = 1 << n;
    if value { byte | mask } else { byte & !mask }
}
