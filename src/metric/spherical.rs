//! NPHT Distance on the Sphere
//!
//! Directions are the 26 points of the Lebedev grid, so a 3D transform is a
//! grid function whose values are diagram sets. For two transforms the
//! per-direction distance
//!
//!   f(v) = Σ_{d ∈ dims} W_p(t₁(v)[d], t₂(v)[d])
//!
//! is itself a grid function and is integrated with the degree-7 Lebedev
//! rule. With rotation search, t₂ is first moved by each of the 24 rotations
//! of the octahedral group (all of which permute the grid) and the smallest
//! integral is kept.

use std::sync::Arc;

use rayon::prelude::*;
use tracing::{debug, trace};

use crate::config::DistanceConfig;
use crate::diagram::{checked_distance, DiagramDistance, DiagramSet};
use crate::error::{NphtError, Result};
use crate::group::Word;
use crate::lebedev::{GridFunction, Lebedev26, LebedevPoint};

/// A 3D transform: one diagram set per Lebedev-26 direction
pub type SphericalTransform = GridFunction<DiagramSet>;

/// Highest homology dimension a 3D filtration can carry, plus one
const SPHERICAL_DIMENSIONS: usize = 3;

/// NPHT distance between 3D transforms
#[derive(Debug, Clone)]
pub struct NphtDistance3d<O> {
    oracle: O,
    config: DistanceConfig,
    lebedev: Arc<Lebedev26>,
}

impl<O: DiagramDistance> NphtDistance3d<O> {
    /// Uses the process-wide Lebedev-26 context
    pub fn new(oracle: O, config: DistanceConfig) -> Result<Self> {
        Self::with_context(oracle, config, Lebedev26::shared()?)
    }

    pub fn with_context(
        oracle: O,
        config: DistanceConfig,
        lebedev: Arc<Lebedev26>,
    ) -> Result<Self> {
        config.validate(Some(SPHERICAL_DIMENSIONS))?;
        Ok(Self { oracle, config, lebedev })
    }

    pub fn config(&self) -> &DistanceConfig {
        &self.config
    }

    pub fn context(&self) -> &Lebedev26 {
        &self.lebedev
    }

    /// Integrated distance, minimised over the octahedral group if configured
    pub fn distance(&self, t_1: &SphericalTransform, t_2: &SphericalTransform) -> Result<f64> {
        self.check_inputs(t_1, t_2)?;

        if !self.config.minimize_over_rotations {
            let value = self.unrotated_distance(t_1, t_2)?;
            debug!(distance = value, rotations = 1, "spherical NPHT distance");
            return Ok(value);
        }

        let profile = self.rotation_profile(t_1, t_2)?;
        let (best, minimum) = profile
            .iter()
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(w, v)| (w.to_string(), *v))
            .ok_or(NphtError::EmptyTransform)?;

        debug!(
            distance = minimum,
            rotations = profile.len(),
            best_rotation = %best,
            "spherical NPHT distance"
        );

        Ok(minimum)
    }

    /// Integrated distance for each group element applied to t₂, in group order
    pub fn rotation_profile(
        &self,
        t_1: &SphericalTransform,
        t_2: &SphericalTransform,
    ) -> Result<Vec<(Word, f64)>> {
        self.check_inputs(t_1, t_2)?;

        self.lebedev
            .group
            .elements()
            .par_iter()
            .map(|word| {
                let rotated = self.lebedev.action.apply(t_2, word)?;
                let value = self.unrotated_distance(t_1, &rotated)?;
                trace!(rotation = %word, integral = value, "spherical rotation evaluated");
                Ok((word.clone(), value))
            })
            .collect()
    }

    /// Integral of the per-direction distance with t₂ left in place
    pub fn unrotated_distance(
        &self,
        t_1: &SphericalTransform,
        t_2: &SphericalTransform,
    ) -> Result<f64> {
        self.check_inputs(t_1, t_2)?;

        let pairs: Vec<(&LebedevPoint, &DiagramSet, &DiagramSet)> = t_1
            .iter()
            .zip(t_2.values())
            .map(|((point, a), b)| (point, a, b))
            .collect();

        let values: Vec<(LebedevPoint, f64)> = pairs
            .par_iter()
            .map(|&(point, a, b)| Ok((*point, self.direction_distance(a, b, point)?)))
            .collect::<Result<_>>()?;

        let function: GridFunction<f64> = values.into_iter().collect();
        self.lebedev.integrator.integrate(&function)
    }

    fn direction_distance(
        &self,
        a: &DiagramSet,
        b: &DiagramSet,
        point: &LebedevPoint,
    ) -> Result<f64> {
        self.config
            .included_dimensions
            .iter()
            .map(|&dim| {
                let missing = || NphtError::MissingDimension {
                    direction: point.to_string(),
                    dimension: dim,
                };
                let dgm_a = a.dim(dim).ok_or_else(missing)?;
                let dgm_b = b.dim(dim).ok_or_else(missing)?;
                checked_distance(&self.oracle, dgm_a, dgm_b, self.config.degree)
            })
            .sum()
    }

    fn check_inputs(&self, t_1: &SphericalTransform, t_2: &SphericalTransform) -> Result<()> {
        if !t_1.same_domain(t_2) {
            return Err(NphtError::KeySetMismatch);
        }
        t_1.check_domain(self.lebedev.grid())
    }
}
