pub mod error;
pub mod validate;

pub mod defaults;
pub mod signal;
pub mod frame;
pub mod acquire;

pub use crate::acquire::sequencer::{Acquisition, Reading, RunReport};
pub use crate::acquire::config::RunConfig;
pub use crate::frame::layout::FrameLayout;
pub use crate::signal::mapper::Mapper;
pub use crate::signal::word24::Endian;
