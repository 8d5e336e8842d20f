// crates/shared-kernel/src/application/mod.rs

pub mod ports;
