// crates/spiadc-core/src/signal/mapper.rs

use crate::error::{AcqError, Result};
use crate::signal::sample::{MAX_I24, MIN_I24};

/// Affine rescale from one signed integer range to another.
///
/// Both ranges are shifted so that their lower bound sits at zero, which keeps the
/// scaled intermediate non-negative for every input inside the configured domain.
/// The scale is single precision and the result is truncated toward zero, so
/// `remap(0)` for a 24-bit to 16-bit mapper is `-1`, not `0`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Mapper {
    in_delta: i32,
    out_delta: i32,
    scale: f32,
}

impl Mapper {
    /// Build a mapper for `in_min..=in_max -> out_min..=out_max`.
    ///
    /// Only ranges with a non-negative upper bound are supported.
    pub fn new(in_min: i32, in_max: i32, out_min: i32, out_max: i32) -> Result<Self> {
        if out_max < 0 {
            return Err(AcqError::Config(format!(
                "unsupported range: out_max < 0 (out_max={out_max})"
            )));
        }
        if in_max < 0 {
            return Err(AcqError::Config(format!(
                "unsupported range: in_max < 0 (in_max={in_max})"
            )));
        }
        if in_max == in_min {
            return Err(AcqError::Config(format!(
                "degenerate input range: in_min == in_max == {in_max}"
            )));
        }
        if in_min > in_max {
            return Err(AcqError::Config(format!(
                "inverted input range: in_min={in_min} > in_max={in_max}"
            )));
        }
        if out_min > out_max {
            return Err(AcqError::Config(format!(
                "inverted output range: out_min={out_min} > out_max={out_max}"
            )));
        }

        let in_delta = delta(in_min);
        let out_delta = delta(out_min);

        let u_in_min = in_min.wrapping_add(in_delta) as u32;
        let u_in_max = in_max.wrapping_add(in_delta) as u32;
        let u_out_min = out_min.wrapping_add(out_delta) as u32;
        let u_out_max = out_max.wrapping_add(out_delta) as u32;

        let scale =
            u_out_max.wrapping_sub(u_out_min) as f32 / u_in_max.wrapping_sub(u_in_min) as f32;

        let m = Self {
            in_delta,
            out_delta,
            scale,
        };

        // f32 scale plus truncation can land one step short of a bound.
        let (lo, hi) = (m.remap(in_min), m.remap(in_max));
        if lo != out_min || hi != out_max {
            return Err(AcqError::Config(format!(
                "inexact range endpoints: {in_min}..={in_max} maps to {lo}..={hi}, \
                 not {out_min}..={out_max}"
            )));
        }
        Ok(m)
    }

    /// Full 24-bit signed range onto i16.
    pub fn i24_to_i16() -> Result<Self> {
        Self::new(MIN_I24, MAX_I24, i16::MIN.into(), i16::MAX.into())
    }

    /// Full 24-bit signed range onto i8.
    pub fn i24_to_i8() -> Result<Self> {
        Self::new(MIN_I24, MAX_I24, i8::MIN.into(), i8::MAX.into())
    }

    /// Rescale one sample.
    ///
    /// Inputs outside the configured domain are not validated: the arithmetic wraps
    /// and the float-to-int cast saturates, which is deterministic but meaningless.
    #[inline]
    pub fn remap(&self, i: i32) -> i32 {
        ((i.wrapping_add(self.in_delta) as f32 * self.scale) as i32).wrapping_sub(self.out_delta)
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn in_delta(&self) -> i32 {
        self.in_delta
    }

    pub fn out_delta(&self) -> i32 {
        self.out_delta
    }
}

/// Shift that moves `low` to zero.
#[inline]
fn delta(low: i32) -> i32 {
    if low == 0 {
        0
    } else {
        low.wrapping_neg()
    }
}
