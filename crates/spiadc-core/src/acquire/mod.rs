// crates/spiadc-core/src/acquire/mod.rs

pub mod cancel;
pub mod config;
pub mod gate;
pub mod sequencer;
pub mod source;
