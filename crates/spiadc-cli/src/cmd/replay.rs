use anyhow::Context;
use clap::Args;
use spiadc_core::acquire::source::ReadSource;
use spiadc_core::{Acquisition, RunConfig};
use std::io::Cursor;

use crate::cmd::acquire::drive;
use crate::cmd::output::OutputArgs;
use crate::io::capture;

#[derive(Args, Debug)]
pub struct ReplayArgs {
    /// Input capture path (.spc)
    #[arg(long)]
    pub r#in: String,

    /// Frames to decode; defaults to every frame in the capture
    #[arg(short = 'n', long)]
    pub count: Option<u64>,

    #[command(flatten)]
    pub output: OutputArgs,
}

pub fn run(args: ReplayArgs) -> anyhow::Result<()> {
    let (header, frames) = capture::read_capture(&args.r#in)?;
    let count = args.count.unwrap_or(header.frame_count);
    if count == 0 {
        anyhow::bail!("nothing to replay: {} holds no frames", args.r#in);
    }
    if count > header.frame_count {
        anyhow::bail!(
            "asked for {} frames but capture holds {} frames: {}",
            count,
            header.frame_count,
            args.r#in
        );
    }

    let config = RunConfig::new(count, header.layout).with_endian(header.endian);
    let mapper = args.output.mapper()?;
    let source = ReadSource::new(Cursor::new(frames));

    let report = drive(
        Acquisition::free_running(config, mapper, source)?,
        &args.output,
        None,
    )
    .with_context(|| format!("replay {}", args.r#in))?;

    eprintln!(
        "replay ok: in={} frames={}/{} channels={}",
        args.r#in,
        report.frames,
        header.frame_count,
        header.layout.channels()
    );
    Ok(())
}
