//! Shared utilities for the tex-tool CLI

pub mod format;
pub mod progress;

pub use format::*;
pub use progress::*;
