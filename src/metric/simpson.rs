//! Simpson Integration on Equally Spaced Samples
//!
//! Composite Simpson's rule needs an even number of intervals. For an odd
//! number of intervals the result is the average of two splits: Simpson on
//! all but the last interval plus a trapezoid on the last, and a trapezoid
//! on the first interval plus Simpson on the rest.

use std::f64::consts::PI;

/// Integrate samples `y` spaced `dx` apart
pub fn simpson_uniform(y: &[f64], dx: f64) -> f64 {
    let n = y.len();
    if n < 2 {
        return 0.0;
    }
    if n % 2 == 1 {
        return basic_simpson(y, dx);
    }

    let first_trapezoid = 0.5 * dx * (y[0] + y[1]);
    let last_trapezoid = 0.5 * dx * (y[n - 1] + y[n - 2]);

    let simpson_then_trapezoid = basic_simpson(&y[..n - 1], dx) + last_trapezoid;
    let trapezoid_then_simpson = first_trapezoid + basic_simpson(&y[1..], dx);

    0.5 * (simpson_then_trapezoid + trapezoid_then_simpson)
}

/// Simpson's rule over an odd number of samples
fn basic_simpson(y: &[f64], dx: f64) -> f64 {
    let sum: f64 = y.windows(3)
        .step_by(2)
        .map(|w| w[0] + 4.0 * w[1] + w[2])
        .sum();
    sum * dx / 3.0
}

/// Integral over [0, 2π] of the closed curve sampled at `values`.
///
/// `values[i]` is the value at angle 2πi/N; the first value is repeated at
/// 2π to close the curve before integrating.
pub fn closed_curve_integral(values: &[f64]) -> f64 {
    let n = values.len();
    if n == 0 {
        return 0.0;
    }
    let mut closed = Vec::with_capacity(n + 1);
    closed.extend_from_slice(values);
    closed.push(values[0]);
    simpson_uniform(&closed, 2.0 * PI / n as f64)
}
