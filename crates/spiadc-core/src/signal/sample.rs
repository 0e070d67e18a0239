/// Contract: a channel sample is a 24-bit two's-complement field widened to i32,
/// so it always lies in `MIN_I24..=MAX_I24`.
pub type ChannelSample = i32;

pub const MAX_U24: u32 = 0x00FF_FFFF;
pub const MAX_I24: i32 = (MAX_U24 >> 1) as i32;
pub const MIN_I24: i32 = -MAX_I24 - 1;

/// Counts per volt denominator: a full-scale positive sample is `vref`.
const FULL_SCALE: f64 = (1u32 << 23) as f64;

/// Convert a raw channel sample into volts against a full-scale reference.
///
/// With `vref = 2.5` one count is ~0.298 uV.
#[inline]
pub fn to_volts(sample: ChannelSample, vref: f64) -> f64 {
    sample as f64 * vref / FULL_SCALE
}
