use std::time::Duration;

use crate::defaults;
use crate::frame::layout::FrameLayout;
use crate::signal::word24::Endian;

/// Plain values handed to the sequencer by the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunConfig {
    /// Total reads in the run, the unsynchronized prime read included.
    pub count: u64,
    pub layout: FrameLayout,
    pub endian: Endian,
    /// Wait for a data-ready edge before every read after the first.
    pub gated: bool,
    /// Upper bound on each edge wait. Expiry is not an error.
    pub edge_timeout: Duration,
}

impl RunConfig {
    pub fn new(count: u64, layout: FrameLayout) -> Self {
        Self {
            count,
            layout,
            endian: Endian::Big,
            gated: false,
            edge_timeout: defaults::EDGE_TIMEOUT,
        }
    }

    pub fn with_endian(mut self, endian: Endian) -> Self {
        self.endian = endian;
        self
    }

    pub fn with_gate(mut self, edge_timeout: Duration) -> Self {
        self.gated = true;
        self.edge_timeout = edge_timeout;
        self
    }
}
