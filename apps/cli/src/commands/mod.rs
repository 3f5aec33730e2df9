//! Command implementations for the clipfile CLI.

pub mod create;
pub mod suggest;
