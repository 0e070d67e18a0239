// crates/spiadc-core/src/signal/mod.rs

pub mod mapper;
pub mod sample;
pub mod word24;
