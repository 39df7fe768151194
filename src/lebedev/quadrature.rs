//! Lebedev Quadrature on the 26-Point Grid
//!
//! Surface integrals over S² are approximated by
//!
//!   ∫_{S²} f dΩ ≈ 4π Σᵢ wᵢ f(pᵢ)
//!
//! where the weight wᵢ only depends on the orbit of pᵢ. The weights are
//! those of the degree-7 Lebedev rule; they sum to 1 over the grid.
//!
//! ## Reference
//!
//! Lebedev & Laikov (1999). "A quadrature formula for the sphere of the
//! 131st algebraic order of accuracy". Doklady Mathematics 59(3).

use std::f64::consts::PI;

use super::function::GridFunction;
use super::grid::LebedevGrid;
use super::orbit::{LebedevOrbit, LebedevPoint};
use crate::error::Result;

const WEIGHT_A1: f64 = 0.047619047619048;
const WEIGHT_A2: f64 = 0.038095238095238;
const WEIGHT_A3: f64 = 0.032142857142857;

/// Integrator for functions on the 26-point Lebedev grid
#[derive(Debug, Clone)]
pub struct LebedevIntegrator {
    grid: LebedevGrid,
}

impl LebedevIntegrator {
    pub fn new() -> Self {
        Self { grid: LebedevGrid::lebedev_26() }
    }

    pub fn grid(&self) -> &LebedevGrid {
        &self.grid
    }

    /// Quadrature weight shared by all points of an orbit
    pub fn orbit_weight(orbit: LebedevOrbit) -> f64 {
        match orbit {
            LebedevOrbit::A1 => WEIGHT_A1,
            LebedevOrbit::A2 => WEIGHT_A2,
            LebedevOrbit::A3 => WEIGHT_A3,
        }
    }

    pub fn weight(point: &LebedevPoint) -> f64 {
        Self::orbit_weight(point.orbit)
    }

    /// 4π Σ w(p) f(p). The function must cover exactly the 26 grid points.
    pub fn integrate(&self, function: &GridFunction<f64>) -> Result<f64> {
        function.check_domain(&self.grid)?;
        let weighted: f64 = function.iter().map(|(p, v)| Self::weight(p) * v).sum();
        Ok(4.0 * PI * weighted)
    }
}

impl Default for LebedevIntegrator {
    fn default() -> Self {
        Self::new()
    }
}

/// Integrate a function over the 26-point Lebedev grid
pub fn lebedev_26_integration(function: &GridFunction<f64>) -> Result<f64> {
    LebedevIntegrator::new().integrate(function)
}
