// crates/spiadc-core/src/signal/word24.rs

use crate::error::{AcqError, Result};
use crate::signal::sample::ChannelSample;

/// Bytes per channel field.
pub const WIDTH: usize = 3;

const SIGN_BIT: u32 = 0x0080_0000;

/// Byte order of a 24-bit field inside a frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Endian {
    /// `bytes[0]` is the most significant byte (MSB-first on the wire).
    #[default]
    Big,
    /// `bytes[0]` is the least significant byte.
    Little,
}

impl Endian {
    /// One-byte tag used by capture files: 0 = big, 1 = little.
    pub fn tag(self) -> u8 {
        match self {
            Endian::Big => 0,
            Endian::Little => 1,
        }
    }

    pub fn from_tag(tag: u8) -> Result<Self> {
        match tag {
            0 => Ok(Endian::Big),
            1 => Ok(Endian::Little),
            other => Err(AcqError::Config(format!("unknown endian tag: {other}"))),
        }
    }
}

/// Assemble three bytes into the low 24 bits of a u32. The top byte is always zero.
#[inline]
pub fn decode24(b: [u8; WIDTH], endian: Endian) -> u32 {
    match endian {
        Endian::Big => u32::from(b[0]) << 16 | u32::from(b[1]) << 8 | u32::from(b[2]),
        Endian::Little => u32::from(b[2]) << 16 | u32::from(b[1]) << 8 | u32::from(b[0]),
    }
}

/// Widen a 24-bit two's-complement value to i32, treating bit 23 as the sign.
///
/// `0x000000..=0x7FFFFF` stay positive, `0x800000..=0xFFFFFF` map to `-8388608..=-1`.
#[inline]
pub fn sign_extend24(u: u32) -> i32 {
    (u ^ SIGN_BIT).wrapping_sub(SIGN_BIT) as i32
}

/// decode24 followed by sign_extend24.
#[inline]
pub fn decode_i24(b: [u8; WIDTH], endian: Endian) -> ChannelSample {
    sign_extend24(decode24(b, endian))
}
