//! Normal quantile (percent-point function) evaluator.
//!
//! All three arguments are required WAD integers. Output is
//! int256(floor(ppf(p, mean, std) * 1e18)) in two's complement.
//!
//! Usage:
//!   cargo run --release --bin ppf -- <p> <mean> <std>
//!
//! Example:
//!   cargo run --release --bin ppf -- 975000000000000000 0 1000000000000000000
//!
//! Prints one `0x`-prefixed 32-byte ABI word on stdout. Diagnostics go to
//! stderr; set GAUSS_FFI_LOG=debug to see the intermediate values.

use gauss_ffi::cli::Args;
use gauss_ffi::commands;
use gauss_ffi::config::Config;

fn main() -> anyhow::Result<()> {
    let config = Config::from_env();
    config.init_logging();

    let word = commands::ppf(&Args::from_env())?;
    println!("{}", word);
    Ok(())
}
