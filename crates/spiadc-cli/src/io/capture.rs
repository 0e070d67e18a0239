use anyhow::Context;
use spiadc_core::{Endian, FrameLayout};

const MAGIC: &[u8; 4] = b"SPC1";

/// MAGIC + frame_len + endian + frame_count
const HEADER_LEN: usize = 4 + 4 + 1 + 8;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CaptureHeader {
    pub layout: FrameLayout,
    pub endian: Endian,
    pub frame_count: u64,
}

/// .spc layout (little-endian):
/// MAGIC[4]
/// frame_len:u32
/// endian:u8                  (0 = big, 1 = little)
/// frame_count:u64
/// frames[frame_count * frame_len]
/// crc32:u32                  (over everything before crc32)
pub fn write_capture(
    path: &str,
    layout: FrameLayout,
    endian: Endian,
    frames: &[u8],
) -> anyhow::Result<()> {
    if frames.len() % layout.frame_len() != 0 {
        anyhow::bail!(
            "capture payload {} is not a whole number of {}-byte frames",
            frames.len(),
            layout.frame_len()
        );
    }
    let frame_count = (frames.len() / layout.frame_len()) as u64;

    let mut out = Vec::with_capacity(HEADER_LEN + frames.len() + 4);
    out.extend_from_slice(MAGIC);
    out.extend_from_slice(&(layout.frame_len() as u32).to_le_bytes());
    out.push(endian.tag());
    out.extend_from_slice(&frame_count.to_le_bytes());
    out.extend_from_slice(frames);

    let crc = crc32(&out);
    out.extend_from_slice(&crc.to_le_bytes());

    std::fs::write(path, out).with_context(|| format!("write capture {path}"))?;
    Ok(())
}

/// Read a capture and return (header, raw frame bytes).
/// Validates:
/// - SPC1 magic
/// - crc32
/// - frame_len is a whole number of channels
/// - payload length == frame_count * frame_len
pub fn read_capture(path: &str) -> anyhow::Result<(CaptureHeader, Vec<u8>)> {
    let bytes = std::fs::read(path).with_context(|| format!("read capture {path}"))?;
    if bytes.len() < HEADER_LEN + 4 {
        anyhow::bail!("capture too small");
    }
    if &bytes[0..4] != MAGIC {
        anyhow::bail!("bad capture magic");
    }

    let crc_off = bytes.len() - 4;
    let crc_expected = u32::from_le_bytes(read_array(&bytes, crc_off)?);
    let crc_actual = crc32(&bytes[..crc_off]);
    if crc_expected != crc_actual {
        anyhow::bail!("capture crc32 mismatch");
    }

    let frame_len = u32::from_le_bytes(read_array(&bytes, 4)?) as usize;
    let layout = FrameLayout::new(frame_len).context("capture frame_len")?;
    let endian = Endian::from_tag(bytes[8]).context("capture endian")?;
    let frame_count = u64::from_le_bytes(read_array(&bytes, 9)?);

    let payload = &bytes[HEADER_LEN..crc_off];
    let expected = frame_count
        .checked_mul(frame_len as u64)
        .ok_or_else(|| anyhow::anyhow!("capture frame_count overflow"))?;
    if payload.len() as u64 != expected {
        anyhow::bail!(
            "capture length mismatch: header says {} frames of {} bytes, payload is {} bytes",
            frame_count,
            frame_len,
            payload.len()
        );
    }

    let header = CaptureHeader {
        layout,
        endian,
        frame_count,
    };
    Ok((header, payload.to_vec()))
}

fn crc32(bytes: &[u8]) -> u32 {
    let mut h = crc32fast::Hasher::new();
    h.update(bytes);
    h.finalize()
}

fn read_array<const N: usize>(bytes: &[u8], at: usize) -> anyhow::Result<[u8; N]> {
    bytes
        .get(at..at + N)
        .and_then(|s| s.try_into().ok())
        .ok_or_else(|| anyhow::anyhow!("unexpected eof"))
}
