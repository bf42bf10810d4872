//! One function per evaluator binary: positional arguments in, ABI word out.

use crate::abi::{self, Rounding};
use crate::cli::Args;
use crate::math::{erfc, erfinv, normal};
use crate::Result;

/// `cdf [x] [mean] [std]`, defaults 0, 0, 1 (real, not WAD).
pub fn cdf(args: &Args) -> Result<String> {
    let x = args.wad_or(0, 0.0);
    let mean = args.wad_or(1, 0.0);
    let std = args.wad_or(2, 1.0);
    let p = normal::cdf(x, mean, std)?;
    log::debug!("[CDF] x={} mean={} std={} -> p={}", x, mean, std, p);
    abi::encode_uint256(p, Rounding::Nearest)
}

/// `erfc <x>`. A missing `x` is NaN and fails in the encoder; an empty one reads as 0.
pub fn erfc(args: &Args) -> Result<String> {
    let x = args.wad_or_nan(0);
    let v = erfc::erfc(x);
    log::debug!("[ERFC] x={} -> {}", x, v);
    abi::encode_uint256(v, Rounding::Nearest)
}

/// `erfinv <y>`, signed word, floored. Poles and out-of-domain inputs encode 0.
pub fn erfinv(args: &Args) -> Result<String> {
    let y = args.wad_required(0, "y")?;
    let v = zero_if_unbounded(erfinv::erfinv(y), y);
    log::debug!("[ERFINV] y={} -> {}", y, v);
    abi::encode_int256(v, Rounding::Floor)
}

/// `erfcinv <q>`, signed word, floored. Poles and out-of-domain inputs encode 0.
pub fn erfcinv(args: &Args) -> Result<String> {
    let q = args.wad_required(0, "q")?;
    let v = zero_if_unbounded(erfinv::erfcinv(q), q);
    log::debug!("[ERFCINV] q={} -> {}", q, v);
    abi::encode_int256(v, Rounding::Floor)
}

/// `ppf <p> <mean> <std>`, all required, signed word, floored.
pub fn ppf(args: &Args) -> Result<String> {
    let p = args.wad_required(0, "p")?;
    let mean = args.wad_required(1, "mean")?;
    let std = args.wad_required(2, "std")?;
    let q = normal::ppf(p, mean, std)?;
    log::debug!("[PPF] p={} mean={} std={} -> {}", p, mean, std, q);
    abi::encode_int256(q, Rounding::Floor)
}

/// A numeric input whose inverse is unbounded maps to 0; a NaN input (unparseable) stays NaN.
fn zero_if_unbounded(v: f64, input: f64) -> f64 {
    if input.is_nan() || v.is_finite() {
        v
    } else {
        log::info!("[INV] no finite inverse at {}, encoding 0", input);
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use alloy::primitives::{I256, U256};
    use pretty_assertions::assert_eq;

    const HALF_WAD_WORD: &str =
        "0x00000000000000000000000000000000000000000000000006f05b59d3b20000";

    fn args(v: &[&str]) -> Args {
        Args::new(v.iter().copied())
    }

    /// Scenario: cdf(0, 0, 1 WAD).
    /// Expected: Encodes exactly 0.5 WAD.
    #[test]
    fn test_cdf_standard_at_zero() {
        assert_eq!(cdf(&args(&["0", "0", "1000000000000000000"])).unwrap(), HALF_WAD_WORD);
    }

    /// Scenario: cdf with no arguments at all.
    /// Expected: Defaults 0, 0, 1 are real values, giving 0.5 WAD.
    #[test]
    fn test_cdf_defaults() {
        assert_eq!(cdf(&Args::default()).unwrap(), HALF_WAD_WORD);
        // x and mean given, std defaulted to the real value 1.
        assert_eq!(
            cdf(&args(&["7000000000000000000", "7000000000000000000"])).unwrap(),
            HALF_WAD_WORD
        );
    }

    /// Scenario: cdf one sigma above the mean of N(2, 3^2), all in WAD.
    /// Expected: Within a few wei of Phi(1) = 0.841344746068542948...
    #[test]
    fn test_cdf_one_sigma() {
        let word = cdf(&args(&[
            "5000000000000000000",
            "2000000000000000000",
            "3000000000000000000",
        ]))
        .unwrap();
        let got = abi::decode_uint256(&word).unwrap();
        let want = U256::from(841_344_746_068_542_948u64);
        let diff = if got > want { got - want } else { want - got };
        assert!(diff < U256::from(1_000u64), "got {}", got);
    }

    #[test]
    fn test_cdf_errors() {
        assert!(matches!(
            cdf(&args(&["0", "0", "0"])),
            Err(Error::InvalidStd(_))
        ));
        assert!(matches!(
            cdf(&args(&["0", "0", "-1000000000000000000"])),
            Err(Error::InvalidStd(_))
        ));
        assert!(matches!(cdf(&args(&["nope"])), Err(Error::NotFinite(_))));
    }

    /// Scenario: erfc(0).
    /// Expected: 1 WAD within the 1.2e-7 approximation error.
    #[test]
    fn test_erfc_zero() {
        let got = abi::decode_uint256(&erfc(&args(&["0"])).unwrap()).unwrap();
        let one = U256::from(1_000_000_000_000_000_000u64);
        let tol = U256::from(120_000_000_000u64);
        assert!(got >= one - tol && got <= one + tol, "got {}", got);
    }

    /// Scenario: Outputs above 2^53 wei for erfc(0) and cdf one sigma above the mean.
    /// Expected: Exact words built from the shortest decimal of the scaled result,
    /// 1000000030000000500 and 841344746068543000.
    #[test]
    fn test_exact_words() {
        assert_eq!(
            erfc(&args(&["0"])).unwrap(),
            "0x0000000000000000000000000000000000000000000000000de0b6baa387adf4"
        );
        assert_eq!(
            cdf(&args(&["1000000000000000000", "0", "1000000000000000000"])).unwrap(),
            "0x0000000000000000000000000000000000000000000000000bad0e96c30e8618"
        );
    }

    /// Scenario: erfc with an empty-string argument.
    /// Expected: Reads as 0, same word as erfc(0).
    #[test]
    fn test_erfc_empty_argument_is_zero() {
        assert_eq!(erfc(&args(&[""])).unwrap(), erfc(&args(&["0"])).unwrap());
    }

    /// Scenario: cdf with empty-string arguments.
    /// Expected: Each one takes its default, giving 0.5 WAD.
    #[test]
    fn test_cdf_empty_arguments_default() {
        assert_eq!(cdf(&args(&["", "", ""])).unwrap(), HALF_WAD_WORD);
    }

    /// Scenario: erfc(5).
    /// Expected: Close to zero, around 1.537e-12 WAD.
    #[test]
    fn test_erfc_saturates() {
        let got = abi::decode_uint256(&erfc(&args(&["5000000000000000000"])).unwrap()).unwrap();
        assert!(got > U256::from(1_500_000u64) && got < U256::from(1_600_000u64), "got {}", got);
    }

    /// Scenario: erfc invoked without its argument.
    /// Expected: NaN reaches the encoder and surfaces as an error.
    #[test]
    fn test_erfc_missing_argument() {
        assert!(matches!(erfc(&Args::default()), Err(Error::NotFinite(_))));
    }

    /// Scenario: erfinv(-0.5 WAD).
    /// Expected: Negative result as a two's complement word, floored.
    #[test]
    fn test_erfinv_negative() {
        let word = erfinv(&args(&["-500000000000000000"])).unwrap();
        let got = abi::decode_int256(&word).unwrap();
        let want = I256::try_from(-476_936_276_204_469_874i64).unwrap();
        let diff = (got - want).unsigned_abs();
        assert!(diff < U256::from(1_000u64), "got {}", got);
        assert!(word.starts_with("0xffff"));
    }

    /// Scenario: erfinv at the pole and past the domain.
    /// Expected: Encodes 0 rather than failing.
    #[test]
    fn test_erfinv_unbounded_is_zero() {
        let zero = format!("0x{}", "0".repeat(64));
        assert_eq!(erfinv(&args(&["1000000000000000000"])).unwrap(), zero);
        assert_eq!(erfinv(&args(&["3000000000000000000"])).unwrap(), zero);
        assert_eq!(erfcinv(&args(&["0"])).unwrap(), zero);
        assert!(matches!(
            erfinv(&Args::default()),
            Err(Error::MissingArgument("y"))
        ));
        assert!(matches!(erfinv(&args(&["zz"])), Err(Error::NotFinite(_))));
    }

    #[test]
    fn test_erfcinv_one_wei() {
        let got = abi::decode_int256(&erfcinv(&args(&["1"])).unwrap()).unwrap();
        let want = I256::try_from(6_247_366_043_746_464_000i64).unwrap();
        assert!((got - want).unsigned_abs() < U256::from(100_000u64), "got {}", got);
    }

    /// Scenario: ppf at the median and at 0.975 of a standard normal.
    /// Expected: The mean exactly, then ~1.96 WAD.
    #[test]
    fn test_ppf() {
        let word = ppf(&args(&[
            "500000000000000000",
            "-3000000000000000000",
            "2000000000000000000",
        ]))
        .unwrap();
        assert_eq!(
            abi::decode_int256(&word).unwrap(),
            I256::try_from(-3_000_000_000_000_000_000i64).unwrap()
        );

        let word = ppf(&args(&["975000000000000000", "0", "1000000000000000000"])).unwrap();
        let got = abi::decode_int256(&word).unwrap();
        let want = I256::try_from(1_959_963_984_540_054_000i64).unwrap();
        assert!((got - want).unsigned_abs() < U256::from(100_000u64), "got {}", got);
    }

    #[test]
    fn test_ppf_errors() {
        assert!(matches!(
            ppf(&args(&["500000000000000000", "0"])),
            Err(Error::MissingArgument("std"))
        ));
        assert!(matches!(
            ppf(&args(&["500000000000000000", "", "1000000000000000000"])),
            Err(Error::MissingArgument("mean"))
        ));
        assert!(matches!(
            ppf(&args(&["0", "0", "1000000000000000000"])),
            Err(Error::NotFinite(_))
        ));
        assert!(matches!(
            ppf(&args(&["500000000000000000", "0", "0"])),
            Err(Error::InvalidStd(_))
        ));
    }
}
