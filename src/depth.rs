//! # 比特深度
//!
//! 每个通道字节中用于承载消息的低位比特数，在边界处一次性校验。

use crate::constants::{MAX_BITS, MIN_BITS};
use crate::error::Error;
use std::fmt;
use std::str::FromStr;

/// 取值保证位于 `MIN_BITS..=MAX_BITS` 的比特深度。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BitDepth(u8);

impl BitDepth {
    pub fn new(bits: u8) -> Result<Self, Error> {
        if (MIN_BITS..=MAX_BITS).contains(&bits) {
            Ok(Self(bits))
        } else {
            Err(Error::InvalidBitDepth(bits.to_string()))
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl FromStr for BitDepth {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u8>()
            .map_err(|_| Error::InvalidBitDepth(s.to_owned()))
            .and_then(Self::new)
    }
}

impl fmt::Display for BitDepth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
