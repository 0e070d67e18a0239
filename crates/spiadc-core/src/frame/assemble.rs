// crates/spiadc-core/src/frame/assemble.rs

use crate::error::{AcqError, Result};
use crate::signal::sample::ChannelSample;
use crate::signal::word24::{decode_i24, Endian, WIDTH};

/// Decode every 3-byte field of `frame`, in frame order, into `out`.
///
/// Fields are taken at offsets 0, 3, 6, ... while a whole field fits, so the
/// number written is `frame.len() / 3`. Fails without writing anything when `out`
/// cannot hold every channel. Returns the number of samples written.
pub fn assemble(frame: &[u8], endian: Endian, out: &mut [ChannelSample]) -> Result<usize> {
    let channels = frame.len() / WIDTH;
    if out.len() < channels {
        return Err(AcqError::Config(format!(
            "output holds {} samples, frame has {channels} channels",
            out.len()
        )));
    }
    for (field, slot) in frame.chunks_exact(WIDTH).zip(out.iter_mut()) {
        *slot = decode_i24([field[0], field[1], field[2]], endian);
    }
    Ok(channels)
}

/// Allocating variant of `assemble`.
pub fn assemble_vec(frame: &[u8], endian: Endian) -> Vec<ChannelSample> {
    frame
        .chunks_exact(WIDTH)
        .map(|field| decode_i24([field[0], field[1], field[2]], endian))
        .collect()
}
