//! Pure transforms from uniform streams to target distributions.
//!
//! Nothing here draws randomness; every output is a function of the input
//! streams. Inputs are expected in [0, 1) (Lehmer output), which the
//! functions do not re-check.

use super::mode::TriangleMode;
use crate::streams::StreamSet;
use lehmer_core::{LehmerError, Result, Sequence};

/// Rescales uniforms to `[a, b)`: `a + (b - a) * u`.
pub fn uniform_from(u: &[f64], a: f64, b: f64) -> Sequence {
    let width = b - a;
    u.iter().map(|&x| a + width * x).collect()
}

/// Irwin-Hall approximation of `N(avg, sigma^2)` from `k` aligned streams.
///
/// Per index: `avg + sigma * sqrt(12 / k) * (sum - k / 2)`.
pub fn normal_from(streams: &StreamSet, avg: f64, sigma: f64) -> Sequence {
    let k = streams.stream_count() as f64;
    let scale = sigma * (12.0 / k).sqrt();
    let half = k / 2.0;

    let mut sums = vec![0.0; streams.len()];
    for stream in streams.streams() {
        for (acc, &u) in sums.iter_mut().zip(stream) {
            *acc += u;
        }
    }
    sums.into_iter().map(|s| avg + scale * (s - half)).collect()
}

/// Inverse-CDF exponential sampling: `-ln(1 - u) / lambda`.
///
/// `u` close to 1 is legal and yields large values.
///
/// # Errors
///
/// Returns [`LehmerError::InvalidParameters`] if `lambda` is 0 or not finite.
pub fn exp_from(u: &[f64], lambda: f64) -> Result<Sequence> {
    check_rate(lambda)?;
    Ok(u.iter().map(|&x| -(1.0 - x).ln() / lambda).collect())
}

/// Erlang construction: `-ln(prod_j u_j) / lambda` over every stream.
///
/// The shape is the number of streams. A product of exactly 0 maps to
/// `+inf`.
///
/// # Errors
///
/// Returns [`LehmerError::InvalidParameters`] if `lambda` is 0 or not finite.
pub fn gamma_from(streams: &StreamSet, lambda: f64) -> Result<Sequence> {
    check_rate(lambda)?;

    let mut products = vec![1.0; streams.len()];
    for stream in streams.streams() {
        for (acc, &u) in products.iter_mut().zip(stream) {
            *acc *= u;
        }
    }
    Ok(products.into_iter().map(|p| -p.ln() / lambda).collect())
}

/// Triangular sample from two aligned uniform streams.
///
/// The output is as long as the shorter input.
pub fn triangle_from(u0: &[f64], u1: &[f64], a: f64, b: f64, mode: TriangleMode) -> Sequence {
    let width = b - a;
    u0.iter()
        .zip(u1)
        .map(|(&x, &y)| a + width * mode.combine(x, y))
        .collect()
}

/// Element-wise sum of two sequences (Simpson convolution of two uniforms).
pub fn simpson_from(first: &[f64], second: &[f64]) -> Sequence {
    first.iter().zip(second).map(|(&x, &y)| x + y).collect()
}

fn check_rate(lambda: f64) -> Result<()> {
    if lambda == 0.0 || !lambda.is_finite() {
        return Err(LehmerError::invalid(
            "lambda",
            format!("{} must be finite and non-zero", lambda),
        ));
    }
    Ok(())
}
