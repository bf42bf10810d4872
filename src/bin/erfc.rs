//! Complementary error function evaluator (Numerical Recipes approximation).
//!
//! Output is uint256(round(erfc(x / 1e18) * 1e18)). The argument is required;
//! without it the run fails instead of printing a word.
//!
//! Usage:
//!   cargo run --release --bin erfc -- <x>
//!
//! Example:
//!   cargo run --release --bin erfc -- 500000000000000000
//!
//! Prints one `0x`-prefixed 32-byte ABI word on stdout. Diagnostics go to
//! stderr; set GAUSS_FFI_LOG=debug to see the intermediate values.

use gauss_ffi::cli::Args;
use gauss_ffi::commands;
use gauss_ffi::config::Config;

fn main() -> anyhow::Result<()> {
    let config = Config::from_env();
    config.init_logging();

    let word = commands::erfc(&Args::from_env())?;
    println!("{}", word);
    Ok(())
}
