//! Inverse complementary error function evaluator.
//!
//! Output is int256(floor(erfcinv(q / 1e18) * 1e18)) in two's complement.
//! Inputs at or beyond 0 and 2 WAD have no finite inverse and print zero.
//!
//! Usage:
//!   cargo run --release --bin erfcinv -- <q>
//!
//! Example:
//!   cargo run --release --bin erfcinv -- 1
//!
//! Prints one `0x`-prefixed 32-byte ABI word on stdout. Diagnostics go to
//! stderr; set GAUSS_FFI_LOG=debug to see the intermediate values.

use gauss_ffi::cli::Args;
use gauss_ffi::commands;
use gauss_ffi::config::Config;

fn main() -> anyhow::Result<()> {
    let config = Config::from_env();
    config.init_logging();

    let word = commands::erfcinv(&Args::from_env())?;
    println!("{}", word);
    Ok(())
}
