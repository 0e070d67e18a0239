// crates/spiadc-core/src/acquire/sequencer.rs

use log::{debug, info, trace};

use crate::acquire::cancel::CancelToken;
use crate::acquire::config::RunConfig;
use crate::acquire::gate::{EdgeWait, NoEdge};
use crate::acquire::source::ByteSource;
use crate::error::{AcqError, Result};
use crate::frame::assemble::assemble;
use crate::signal::mapper::Mapper;
use crate::signal::sample::ChannelSample;
use crate::validate::validate_run_config;

/// One decoded read, handed to the host in channel order.
///
/// Borrows the sequencer's buffers; copy out anything that must outlive the callback.
#[derive(Clone, Copy, Debug)]
pub struct Reading<'a> {
    /// Zero-based read index within the run.
    pub index: u64,
    /// Raw frame bytes as clocked out.
    pub frame: &'a [u8],
    /// Sign-extended 24-bit channel samples.
    pub samples: &'a [ChannelSample],
    /// Samples after the mapper.
    pub mapped: &'a [i32],
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunReport {
    /// Frames read, decoded and emitted.
    pub frames: u64,
    /// Gated waits that saw an edge.
    pub edges: u64,
    /// Gated waits that ran out and read anyway.
    pub timeouts: u64,
    /// The run stopped early on the cancel token.
    pub cancelled: bool,
}

/// Drives `count` reads from a byte source through the frame assembler and mapper.
///
/// The first read is always unsynchronized. When gating is on, every later read
/// waits for a rising edge or the timeout, whichever comes first, then reads
/// regardless. Reads are strictly sequential: frame N is emitted before the read
/// of frame N+1 is issued.
pub struct Acquisition<S, E = NoEdge> {
    config: RunConfig,
    mapper: Mapper,
    source: S,
    edge: E,
    cancel: Option<CancelToken>,
    frame: Vec<u8>,
    samples: Vec<ChannelSample>,
    mapped: Vec<i32>,
}

impl<S: ByteSource> Acquisition<S, NoEdge> {
    /// Free-running acquisition; `config.gated` must be false.
    pub fn free_running(config: RunConfig, mapper: Mapper, source: S) -> Result<Self> {
        if config.gated {
            return Err(AcqError::Config("gated run needs an edge source".into()));
        }
        Self::new(config, mapper, source, NoEdge)
    }
}

impl<S: ByteSource, E: EdgeWait> Acquisition<S, E> {
    pub fn new(config: RunConfig, mapper: Mapper, source: S, edge: E) -> Result<Self> {
        validate_run_config(&config)?;

        let frame_len = config.layout.frame_len();
        let channels = config.layout.channels();
        Ok(Self {
            config,
            mapper,
            source,
            edge,
            cancel: None,
            frame: vec![0u8; frame_len],
            samples: vec![0; channels],
            mapped: vec![0; channels],
        })
    }

    pub fn with_cancel(mut self, cancel: CancelToken) -> Self {
        self.cancel = Some(cancel);
        self
    }

    /// Perform the run, calling `emit` once per decoded frame.
    ///
    /// A short read or a source error aborts the run; readings already emitted
    /// stand. An error returned by `emit` aborts the run as well.
    pub fn run<F>(&mut self, mut emit: F) -> Result<RunReport>
    where
        F: FnMut(&Reading<'_>) -> Result<()>,
    {
        let mut report = RunReport::default();
        info!(
            "acquire start: count={} frame_len={} channels={} endian={:?} gated={}",
            self.config.count,
            self.config.layout.frame_len(),
            self.config.layout.channels(),
            self.config.endian,
            self.config.gated
        );

        for index in 0..self.config.count {
            if self.cancelled() {
                report.cancelled = true;
                break;
            }

            if index > 0 && self.config.gated {
                if self.edge.wait_rising_edge(self.config.edge_timeout) {
                    report.edges += 1;
                } else {
                    report.timeouts += 1;
                    debug!(
                        "frame {index}: no ready edge within {:?}, reading anyway",
                        self.config.edge_timeout
                    );
                }
                if self.cancelled() {
                    report.cancelled = true;
                    break;
                }
            }

            self.read_frame(index)?;
            self.decode()?;

            emit(&Reading {
                index,
                frame: &self.frame,
                samples: &self.samples,
                mapped: &self.mapped,
            })?;
            report.frames += 1;
        }

        info!(
            "acquire done: frames={} edges={} timeouts={} cancelled={}",
            report.frames, report.edges, report.timeouts, report.cancelled
        );
        Ok(report)
    }

    fn cancelled(&self) -> bool {
        self.cancel.as_ref().is_some_and(CancelToken::is_cancelled)
    }

    fn read_frame(&mut self, index: u64) -> Result<()> {
        let got = self.source.fill(&mut self.frame)?;
        if got < self.frame.len() {
            return Err(AcqError::ShortRead {
                index,
                expected: self.frame.len(),
                got,
            });
        }
        trace!("frame {index}: {:02X?}", self.frame);
        Ok(())
    }

    fn decode(&mut self) -> Result<()> {
        assemble(&self.frame, self.config.endian, &mut self.samples)?;
        for (m, &s) in self.mapped.iter_mut().zip(self.samples.iter()) {
            *m = self.mapper.remap(s);
        }
        Ok(())
    }
}
