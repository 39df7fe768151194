//! NPHT Distance in the Plane
//!
//! Directions are N equally spaced angles on S¹, so a rotation of the shape
//! by a multiple of 2π/N is a circular shift of the transform. For a shift s
//! the per-direction distance
//!
//!   y_s(i) = Σ_{d ∈ dims} W_p(t₁[i][d], t₂[(i + s) mod N][d])
//!
//! is integrated over the closed curve [0, 2π] with Simpson's rule. The
//! distance is the minimum over all N shifts, or the shift-0 value when
//! rotation search is disabled.

use rayon::prelude::*;
use tracing::{debug, trace};

use super::simpson::closed_curve_integral;
use crate::config::DistanceConfig;
use crate::diagram::{checked_distance, DiagramDistance, DiagramSet};
use crate::error::{NphtError, Result};

/// A 2D transform: one diagram set per direction, direction i at angle 2πi/N
pub type PlanarTransform = Vec<DiagramSet>;

/// NPHT distance between 2D transforms
#[derive(Debug, Clone)]
pub struct NphtDistance2d<O> {
    oracle: O,
    config: DistanceConfig,
}

impl<O: DiagramDistance> NphtDistance2d<O> {
    pub fn new(oracle: O, config: DistanceConfig) -> Result<Self> {
        config.validate(None)?;
        Ok(Self { oracle, config })
    }

    pub fn config(&self) -> &DistanceConfig {
        &self.config
    }

    /// Minimum over the tested shifts of the integrated distance curve
    pub fn distance(&self, t_1: &[DiagramSet], t_2: &[DiagramSet]) -> Result<f64> {
        let profile = self.shift_profile(t_1, t_2)?;
        let minimum = profile.iter().map(|(_, v)| *v).fold(f64::INFINITY, f64::min);

        debug!(
            directions = t_1.len(),
            shifts = profile.len(),
            distance = minimum,
            "planar NPHT distance"
        );

        Ok(minimum)
    }

    /// Integrated distance for every tested shift, in shift order
    pub fn shift_profile(
        &self,
        t_1: &[DiagramSet],
        t_2: &[DiagramSet],
    ) -> Result<Vec<(usize, f64)>> {
        self.check_inputs(t_1, t_2)?;

        let n_shifts = if self.config.minimize_over_rotations { t_1.len() } else { 1 };

        (0..n_shifts)
            .into_par_iter()
            .map(|shift| Ok((shift, self.shifted_integral(t_1, t_2, shift)?)))
            .collect()
    }

    /// Integral of the distance curve with t₂ shifted by `shift` directions
    pub fn shifted_integral(
        &self,
        t_1: &[DiagramSet],
        t_2: &[DiagramSet],
        shift: usize,
    ) -> Result<f64> {
        self.check_inputs(t_1, t_2)?;
        let n = t_1.len();

        let ordinates: Vec<f64> = (0..n)
            .into_par_iter()
            .map(|i| self.direction_distance(&t_1[i], &t_2[(i + shift) % n], i))
            .collect::<Result<_>>()?;

        let integral = closed_curve_integral(&ordinates);
        trace!(shift, integral, "planar shift evaluated");
        Ok(integral)
    }

    fn direction_distance(&self, a: &DiagramSet, b: &DiagramSet, direction: usize) -> Result<f64> {
        self.config
            .included_dimensions
            .iter()
            .map(|&dim| {
                let missing = || NphtError::MissingDimension {
                    direction: direction.to_string(),
                    dimension: dim,
                };
                let dgm_a = a.dim(dim).ok_or_else(missing)?;
                let dgm_b = b.dim(dim).ok_or_else(missing)?;
                checked_distance(&self.oracle, dgm_a, dgm_b, self.config.degree)
            })
            .sum()
    }

    fn check_inputs(&self, t_1: &[DiagramSet], t_2: &[DiagramSet]) -> Result<()> {
        if t_1.len() != t_2.len() {
            return Err(NphtError::LengthMismatch { left: t_1.len(), right: t_2.len() });
        }
        if t_1.is_empty() {
            return Err(NphtError::EmptyTransform);
        }
        Ok(())
    }
}
