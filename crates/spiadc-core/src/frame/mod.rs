// crates/spiadc-core/src/frame/mod.rs

pub mod assemble;
pub mod layout;
