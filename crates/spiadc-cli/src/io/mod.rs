// crates/spiadc-cli/src/io/mod.rs

pub mod capture;
pub mod out;
