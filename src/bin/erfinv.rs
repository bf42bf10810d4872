//! Inverse error function evaluator.
//!
//! Output is int256(floor(erfinv(y / 1e18) * 1e18)) in two's complement.
//! Inputs at or beyond +/-1 WAD have no finite inverse and print zero.
//!
//! Usage:
//!   cargo run --release --bin erfinv -- <y>
//!
//! Example:
//!   cargo run --release --bin erfinv -- -500000000000000000
//!
//! Prints one `0x`-prefixed 32-byte ABI word on stdout. Diagnostics go to
//! stderr; set GAUSS_FFI_LOG=debug to see the intermediate values.

use gauss_ffi::cli::Args;
use gauss_ffi::commands;
use gauss_ffi::config::Config;

fn main() -> anyhow::Result<()> {
    let config = Config::from_env();
    config.init_logging();

    let word = commands::erfinv(&Args::from_env())?;
    println!("{}", word);
    Ok(())
}
