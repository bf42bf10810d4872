//! Normal CDF evaluator.
//!
//! Arguments are WAD (1e18-scaled) decimal integers. Missing arguments fall
//! back to the real values x=0, mean=0, std=1. Output is
//! uint256(round(Phi((x - mean) / std) * 1e18)).
//!
//! Usage:
//!   cargo run --release --bin cdf -- [x] [mean] [std]
//!
//! Example:
//!   cargo run --release --bin cdf -- 1000000000000000000 0 1000000000000000000
//!
//! Prints one `0x`-prefixed 32-byte ABI word on stdout. Diagnostics go to
//! stderr; set GAUSS_FFI_LOG=debug to see the intermediate values.

use gauss_ffi::cli::Args;
use gauss_ffi::commands;
use gauss_ffi::config::Config;

fn main() -> anyhow::Result<()> {
    let config = Config::from_env();
    config.init_logging();

    let word = commands::cdf(&Args::from_env())?;
    println!("{}", word);
    Ok(())
}
