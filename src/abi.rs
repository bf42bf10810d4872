//! Fixed-point ABI encoder.
//!
//! Turns a real result into the 32-byte word a contract test reads back:
//! scale by 10^18, round, then ABI-encode as `uint256` or `int256`.
//! Anything that would not survive the trip (NaN, infinities, negatives for
//! `uint256`, magnitudes past 256 bits) is an error, never a wrapped word.

use alloy::primitives::{hex, I256, U256};
use alloy::sol_types::SolValue;

use crate::{Error, Result, WAD};

/// How the scaled value is brought to an integer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rounding {
    /// Nearest integer, ties away from zero.
    Nearest,
    /// Toward negative infinity.
    Floor,
}

impl Rounding {
    #[inline]
    pub fn apply(self, v: f64) -> f64 {
        match self {
            Rounding::Nearest => v.round(),
            Rounding::Floor => v.floor(),
        }
    }
}

/// 2^256 and 2^255 as f64; both are exact.
const TWO_POW_256: f64 = 1.157_920_892_373_162e77;
const TWO_POW_255: f64 = 5.789_604_461_865_81e76;

/// Encode `value * 10^18` as a `0x`-prefixed `uint256` word.
pub fn encode_uint256(value: f64, rounding: Rounding) -> Result<String> {
    let word = to_uint256(value, rounding)?;
    Ok(encode_word(word))
}

/// Encode `value * 10^18` as a `0x`-prefixed `int256` word (two's complement).
pub fn encode_int256(value: f64, rounding: Rounding) -> Result<String> {
    let word = to_int256(value, rounding)?;
    Ok(encode_word(word.into_raw()))
}

/// Scale, round and range-check a real value into a `U256`.
///
/// The integer is read from the shortest decimal that round-trips the scaled
/// f64, zero-padded (e.g. 1000000030000000512.0 becomes 1000000030000000500).
/// These are the digits `Number.prototype.toString` hands to an ABI coder, so
/// words match the JavaScript harness byte for byte above 2^53.
pub fn to_uint256(value: f64, rounding: Rounding) -> Result<U256> {
    let scaled = scale(value, rounding)?;
    if scaled < 0.0 {
        return Err(Error::Negative(scaled));
    }
    if scaled >= TWO_POW_256 {
        return Err(Error::Overflow {
            value: scaled,
            ty: "uint256",
        });
    }
    shortest_decimal_to_u256(scaled)
}

/// Scale, round and range-check a real value into an `I256`.
///
/// Unlike `to_uint256` this keeps the exact integer value of the f64.
pub fn to_int256(value: f64, rounding: Rounding) -> Result<I256> {
    let scaled = scale(value, rounding)?;
    if scaled >= TWO_POW_255 || scaled < -TWO_POW_255 {
        return Err(Error::Overflow {
            value: scaled,
            ty: "int256",
        });
    }
    let magnitude = integral_to_u256(scaled.abs());
    let raw = if scaled < 0.0 {
        magnitude.wrapping_neg()
    } else {
        magnitude
    };
    Ok(I256::from_raw(raw))
}

/// ABI-encode a single word and render it as lowercase hex.
pub fn encode_word(word: U256) -> String {
    hex::encode_prefixed(word.abi_encode())
}

/// Parse a `0x`-prefixed 64-digit word back into a `U256`.
pub fn decode_uint256(word: &str) -> Result<U256> {
    let digits = word
        .strip_prefix("0x")
        .ok_or_else(|| Error::InvalidWord(word.to_string()))?;
    if digits.len() != 64 {
        return Err(Error::InvalidWord(word.to_string()));
    }
    let bytes = hex::decode(digits).map_err(|_| Error::InvalidWord(word.to_string()))?;
    Ok(U256::from_be_slice(&bytes))
}

/// Parse a two's complement `int256` word.
pub fn decode_int256(word: &str) -> Result<I256> {
    decode_uint256(word).map(I256::from_raw)
}

fn scale(value: f64, rounding: Rounding) -> Result<f64> {
    let scaled = rounding.apply(value * WAD);
    if !scaled.is_finite() {
        return Err(Error::NotFinite(value));
    }
    log::trace!("[ABI] {} -> {}", value, scaled);
    Ok(scaled)
}

/// `Display` for f64 never switches to exponent notation, so integral values
/// print as plain digits.
fn shortest_decimal_to_u256(v: f64) -> Result<U256> {
    let digits = format!("{}", v.abs());
    U256::from_str_radix(&digits, 10).map_err(|_| Error::Overflow {
        value: v,
        ty: "uint256",
    })
}

/// Exact conversion of a non-negative integral f64 below 2^256.
fn integral_to_u256(v: f64) -> U256 {
    let bits = v.to_bits();
    let exponent = ((bits >> 52) & 0x7ff) as i64;
    if exponent == 0 {
        // Zero or subnormal; integral, so zero.
        return U256::ZERO;
    }
    let mantissa = (bits & ((1u64 << 52) - 1)) | (1u64 << 52);
    let shift = exponent - 1075;
    if shift >= 0 {
        U256::from(mantissa) << (shift as usize)
    } else {
        U256::from(mantissa >> ((-shift) as u32))
    }
}
