use std::f64::consts::SQRT_2;

use super::erfinv::erfcinv;
use crate::{Error, Result};

/// CDF of N(mean, std^2) at `x`: erfc(-(x - mean) / (std * sqrt(2))) / 2.
/// Full double precision via libm, so the CDF at the mean is exactly 0.5.
///
/// `std` must be strictly positive. NaN inputs are not rejected here; they
/// come out as NaN and fail at the encoder.
pub fn cdf(x: f64, mean: f64, std: f64) -> Result<f64> {
    if std <= 0.0 {
        return Err(Error::InvalidStd(std));
    }
    Ok(0.5 * libm::erfc(-(x - mean) / (std * SQRT_2)))
}

/// Quantile (percent-point function) of N(mean, std^2).
///
/// ppf(p) = mean - std * sqrt(2) * erfcinv(2p). Going through erfcinv keeps
/// lower-tail probabilities like 1e-18 accurate. p outside (0, 1) gives an
/// infinite or NaN quantile.
pub fn ppf(p: f64, mean: f64, std: f64) -> Result<f64> {
    if std <= 0.0 {
        return Err(Error::InvalidStd(std));
    }
    Ok(mean - std * SQRT_2 * erfcinv(2.0 * p))
}
