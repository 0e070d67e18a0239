use clap::Args;

use crate::io::capture;

#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Input capture path (.spc)
    #[arg(long)]
    pub r#in: String,

    /// If set, dump the raw frame bytes to this file path
    #[arg(long)]
    pub dump_frames: Option<String>,
}

pub fn run(args: InspectArgs) -> anyhow::Result<()> {
    let (header, frames) = capture::read_capture(&args.r#in)?;

    eprintln!("--- inspect ---");
    eprintln!("file          = {}", args.r#in);
    eprintln!("capture_ok    = true (magic + crc32 verified)");
    eprintln!("frame_len     = {}", header.layout.frame_len());
    eprintln!("channels      = {}", header.layout.channels());
    eprintln!("endian        = {:?}", header.endian);
    eprintln!("frame_count   = {}", header.frame_count);
    eprintln!("payload_bytes = {}", frames.len());

    if let Some(out) = args.dump_frames.as_deref() {
        std::fs::write(out, &frames)?;
        eprintln!("dump_frames   = {} ({} bytes)", out, frames.len());
    }

    Ok(())
}
