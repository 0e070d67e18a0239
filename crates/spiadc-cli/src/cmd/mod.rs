// crates/spiadc-cli/src/cmd/mod.rs

pub mod acquire;
pub mod inspect;
pub mod output;
pub mod replay;
