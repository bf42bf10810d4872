pub mod abi;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod math;

pub use error::{Error, Result};

/// Fixed-point scale shared by every input and output word: 1 WAD = 10^18.
pub const WAD: f64 = 1e18;
