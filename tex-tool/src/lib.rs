//! tex-tool library
//!
//! Command implementations behind the `tex-tool` binary.

pub mod cli;
pub mod commands;
pub mod utils;
