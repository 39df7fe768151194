//! Equally Spaced Directions on the Circle
//!
//! Direction i of a 2D transform is the unit vector at angle 2πi/n. The
//! axis directions (±1, 0) and (0, ±1) come out exact whenever n is a
//! multiple of 4, so a quarter turn of the shape is an exact shift.

use std::f64::consts::PI;

use crate::error::{NphtError, Result};
use crate::lebedev::snap_unit;

/// The `n` unit vectors (cos 2πi/n, sin 2πi/n), i = 0..n
pub fn circle_directions(n: usize) -> Result<Vec<[f64; 2]>> {
    if n == 0 {
        return Err(NphtError::InvalidDirection {
            reason: "a planar transform needs at least one direction".into(),
        });
    }

    Ok((0..n)
        .map(|i| {
            let angle = 2.0 * PI * i as f64 / n as f64;
            [snap_unit(angle.cos()), snap_unit(angle.sin())]
        })
        .collect())
}
