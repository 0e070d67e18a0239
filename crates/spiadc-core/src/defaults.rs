// crates/spiadc-core/src/defaults.rs

use std::time::Duration;

/// Reference device: 8 daisy-chained channels, 3 bytes each.
pub const FRAME_LEN: usize = 24;

/// Bounded wait for the data-ready edge before reading anyway.
pub const EDGE_TIMEOUT: Duration = Duration::from_millis(3);

pub const READ_COUNT: u64 = 1;

/// Full-scale reference voltage of the front-end.
pub const VREF_VOLTS: f64 = 2.5;
