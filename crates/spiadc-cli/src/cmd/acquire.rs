use std::time::Duration;

use anyhow::Context;
use clap::Args;
use spiadc_core::acquire::gate::{EdgeWait, NoEdge, Ticker};
use spiadc_core::acquire::source::{ByteSource, ReadSource};
use spiadc_core::{defaults, Acquisition, FrameLayout, RunConfig, RunReport};

use crate::cmd::output::{ByteOrder, OutputArgs};
use crate::io::{capture, out::Printer};

#[derive(Args, Debug)]
pub struct AcquireArgs {
    /// Device or file to read frames from with read(2)
    #[arg(short = 'd', long, default_value = "/dev/spidev2.0")]
    pub dev: String,

    /// Frame length in bytes (3 per daisy-chained channel)
    #[arg(short = 'l', long, default_value_t = defaults::FRAME_LEN)]
    pub len: usize,

    /// Number of frames to read
    #[arg(short = 'n', long, default_value_t = defaults::READ_COUNT)]
    pub count: u64,

    /// Byte order of each 24-bit field
    #[arg(long, value_enum, default_value_t = ByteOrder::Be)]
    pub endian: ByteOrder,

    /// Gate reads on an emulated data-ready line with this period (microseconds)
    #[arg(long)]
    pub drdy_period_us: Option<u64>,

    /// Edge wait timeout in milliseconds; on expiry the read happens anyway
    #[arg(long, default_value_t = defaults::EDGE_TIMEOUT.as_millis() as u64)]
    pub timeout_ms: u64,

    /// Save the raw frames to a capture file (.spc)
    #[arg(long)]
    pub record: Option<String>,

    #[command(flatten)]
    pub output: OutputArgs,
}

pub fn run(args: AcquireArgs) -> anyhow::Result<()> {
    let layout = FrameLayout::new(args.len)?;
    let mut config = RunConfig::new(args.count, layout).with_endian(args.endian.into());
    let edge: Box<dyn EdgeWait> = match args.drdy_period_us {
        Some(us) => {
            config = config.with_gate(Duration::from_millis(args.timeout_ms));
            Box::new(Ticker::new(Duration::from_micros(us)))
        }
        None => Box::new(NoEdge),
    };
    let mapper = args.output.mapper()?;

    let file = std::fs::File::open(&args.dev).with_context(|| format!("open {}", args.dev))?;
    log::debug!("reading frames from {}", args.dev);

    let mut recorded = args.record.as_ref().map(|_| Vec::new());
    let result = drive(
        Acquisition::new(config, mapper, ReadSource::new(file), edge)?,
        &args.output,
        recorded.as_mut(),
    );

    // Keep whatever was read before a failure.
    if let (Some(path), Some(frames)) = (args.record.as_deref(), recorded.as_ref()) {
        capture::write_capture(path, layout, config.endian, frames)?;
        eprintln!(
            "recorded: {} ({} frames)",
            path,
            frames.len() / layout.frame_len()
        );
    }

    let report = result.with_context(|| format!("acquire from {}", args.dev))?;
    eprintln!(
        "acquire ok: dev={} frames={} channels={} edges={} timeouts={} cancelled={}",
        args.dev,
        report.frames,
        layout.channels(),
        report.edges,
        report.timeouts,
        report.cancelled
    );
    Ok(())
}

/// Run an acquisition, printing each reading to stdout and optionally keeping raw frames.
pub(crate) fn drive<S: ByteSource, E: EdgeWait>(
    mut acq: Acquisition<S, E>,
    output: &OutputArgs,
    mut recorded: Option<&mut Vec<u8>>,
) -> spiadc_core::error::Result<RunReport> {
    let stdout = std::io::stdout();
    let mut printer = Printer::new(stdout.lock(), output.format, output.vref, output.raw);

    let report = acq.run(|r| {
        if let Some(buf) = recorded.as_deref_mut() {
            buf.extend_from_slice(r.frame);
        }
        printer.print(r)?;
        Ok(())
    })?;
    printer.flush()?;
    Ok(report)
}
