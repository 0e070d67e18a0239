use crate::error::{AcqError, Result};
use crate::signal::word24::WIDTH;

/// Fixed shape of a daisy-chained frame: `channels` consecutive 24-bit fields.
///
/// The channel count is derived once from the frame length and never changes for
/// the lifetime of a run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FrameLayout {
    frame_len: usize,
    channels: usize,
}

impl FrameLayout {
    pub fn new(frame_len: usize) -> Result<Self> {
        if frame_len == 0 {
            return Err(AcqError::Config("frame length must be non-zero".into()));
        }
        if frame_len % WIDTH != 0 {
            return Err(AcqError::Config(format!(
                "frame length {frame_len} is not a multiple of {WIDTH} bytes per channel"
            )));
        }
        Ok(Self {
            frame_len,
            channels: frame_len / WIDTH,
        })
    }

    pub fn with_channels(channels: usize) -> Result<Self> {
        let frame_len = channels
            .checked_mul(WIDTH)
            .ok_or_else(|| AcqError::Config(format!("channel count overflow: {channels}")))?;
        Self::new(frame_len)
    }

    #[inline]
    pub fn frame_len(&self) -> usize {
        self.frame_len
    }

    #[inline]
    pub fn channels(&self) -> usize {
        self.channels
    }
}
