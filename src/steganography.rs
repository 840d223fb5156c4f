use crate::bits::{get_bit, put_bit};
use crate::constants::BITS_PER_BYTE;
use crate::depth::BitDepth;
use crate::error::{Error, Result};
use log::debug;

/// 按嵌入顺序依次给出每个载体比特的位置 `(通道下标, 通道内位下标)`。
///
/// 通道内位下标从 0 递增到 `depth - 1` 后归零，通道下标随之加一，直到缓冲区末尾。
pub fn carrier_positions(
    channels: usize,
    depth: BitDepth,
) -> impl Iterator<Item = (usize, usize)> {
    let depth = usize::from(depth.get());
    (0..channels).flat_map(move |channel| (0..depth).map(move |bit| (channel, bit)))
}

/// `channels` 个通道字节在给定深度下可承载的比特总数。
pub fn capacity_bits(channels: usize, depth: BitDepth) -> usize {
    channels * usize::from(depth.get())
}

/// 将 `message` 的各比特 (每字节从最低位开始) 依次写入 `channels` 的低位，
/// 然后把剩余容量全部清零。返回写入的消息比特数。
///
/// 容量不足时在修改任何字节之前返回 [`Error::TooFewPixels`]。
pub fn embed(message: &[u8], channels: &mut [u8], depth: BitDepth) -> Result<usize> {
    let required = message.len() * BITS_PER_BYTE;
    let available = capacity_bits(channels.len(), depth);

    if required > available {
        return Err(Error::TooFewPixels {
            required,
            available,
        });
    }

    let message_bits = message
        .iter()
        .flat_map(|&byte| (0..BITS_PER_BYTE).map(move |k| get_bit(byte, k)));
    let padding = std::iter::repeat(false);

    for ((channel, bit), value) in
        carrier_positions(channels.len(), depth).zip(message_bits.chain(padding))
    {
        channels[channel] = put_bit(channels[channel], bit, value);
    }

    debug!(
        "embedded {required} message bits, zero-padded {} bits at depth {depth}",
        available - required
    );

    Ok(required)
}

/// 按与 [`embed`] 相同的顺序读取低位比特并重组字节。
///
/// 读到值为 0 的字节或容量耗尽时停止，返回值不包含终止的 0 字节。
/// 容量在某个字节中途耗尽时，该字节未读到的比特保持为 0。
pub fn extract(channels: &[u8], depth: BitDepth) -> Vec<u8> {
    let mut positions = carrier_positions(channels.len(), depth);
    let mut message = Vec::new();

    loop {
        let mut byte = 0u8;
        let mut read = 0;

        for (k, (channel, bit)) in (0..BITS_PER_BYTE).zip(positions.by_ref()) {
            byte = put_bit(byte, k, get_bit(channels[channel], bit));
            read += 1;
        }

        if read == 0 || byte == 0 {
            break;
        }

        message.push(byte);

        if read < BITS_PER_BYTE {
            break;
        }
    }

    debug!(
        "extracted {} bytes at depth {depth} from {} channel bytes",
        message.len(),
        channels.len()
    );

    message
}
