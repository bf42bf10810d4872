use std::f64::consts::{FRAC_2_SQRT_PI, PI};

const MAX_NEWTON_STEPS: usize = 16;

/// Inverse error function on [-1, 1].
///
/// `erfinv(±1) = ±inf`; NaN outside the domain.
pub fn erfinv(y: f64) -> f64 {
    if y.is_nan() || y.abs() > 1.0 {
        return f64::NAN;
    }
    if y == 0.0 {
        return y;
    }
    let a = y.abs();
    let x = if a == 1.0 {
        f64::INFINITY
    } else {
        solve(a, 1.0 - a)
    };
    x.copysign(y)
}

/// Inverse complementary error function on [0, 2].
///
/// Works from `q = erfc(x)` directly, so tail inputs like 1e-18 keep full
/// precision instead of collapsing through `erfinv(1 - q)`.
pub fn erfcinv(q: f64) -> f64 {
    if q.is_nan() || !(0.0..=2.0).contains(&q) {
        return f64::NAN;
    }
    if q == 0.0 {
        return f64::INFINITY;
    }
    if q == 2.0 {
        return f64::NEG_INFINITY;
    }
    if q <= 1.0 {
        solve(1.0 - q, q)
    } else {
        -solve(q - 1.0, 2.0 - q)
    }
}

/// Solve `erf(x) = a` for `x >= 0`, where `q = 1 - a` is supplied separately
/// so the upper tail is not limited by the spacing of doubles near 1.
fn solve(a: f64, q: f64) -> f64 {
    if a == 0.0 {
        return 0.0;
    }
    let w = -(q * (1.0 + a)).ln();
    let mut x = if w < 36.0 {
        a * giles(w)
    } else {
        // Beyond the fitted range: invert erfc(x) ~ exp(-x^2) / (x sqrt(pi)).
        let x0 = (-q.ln()).sqrt();
        (-q.ln() - (x0 * PI.sqrt()).ln()).sqrt()
    };

    // Newton refinement. In the upper tail iterate on ln(erfc), which stays
    // well conditioned where erfc itself is tiny.
    for _ in 0..MAX_NEWTON_STEPS {
        let slope = FRAC_2_SQRT_PI * (-x * x).exp();
        let step = if a <= 0.5 {
            (libm::erf(x) - a) / slope
        } else {
            let tail = libm::erfc(x);
            if tail == 0.0 || slope == 0.0 {
                break;
            }
            (q.ln() - tail.ln()) * tail / slope
        };
        x -= step;
        if step.abs() <= f64::EPSILON * x.abs() {
            break;
        }
    }
    x
}

/// Giles' single-precision erfinv polynomial in `w = -ln(1 - a^2)`, without the
/// trailing factor of `a`.
#[inline]
fn giles(w: f64) -> f64 {
    if w < 5.0 {
        let w = w - 2.5;
        let mut p = 2.810_226_36e-8;
        p = 3.432_739_39e-7 + p * w;
        p = -3.523_387_7e-6 + p * w;
        p = -4.391_506_54e-6 + p * w;
        p = 0.000_218_580_87 + p * w;
        p = -0.001_253_725_03 + p * w;
        p = -0.004_177_681_64 + p * w;
        p = 0.246_640_727 + p * w;
        1.501_409_41 + p * w
    } else {
        let w = w.sqrt() - 3.0;
        let mut p = -0.000_200_214_257;
        p = 0.000_100_950_558 + p * w;
        p = 0.001_349_343_22 + p * w;
        p = -0.003_673_428_44 + p * w;
        p = 0.005_739_507_73 + p * w;
        p = -0.007_622_461_3 + p * w;
        p = 0.009_438_870_47 + p * w;
        p = 1.001_674_06 + p * w;
        2.832_976_82 + p * w
    }
}
