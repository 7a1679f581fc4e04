//! JSON config loading for the demo binaries.

pub mod batch;
pub mod demo;
