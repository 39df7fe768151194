//! Lebedev Module: Sampling Directions on the Sphere
//!
//! A 3D transform samples persistence diagrams along finitely many
//! directions. This module provides the direction set and everything that
//! acts on functions defined over it:
//!
//! - Lebedev orbits a1, a2, a3 (6 + 12 + 8 points) and their union, the
//!   26-point grid
//! - The permutation each group generator induces on grid points
//! - The right action of the rotation group on grid functions
//! - Lebedev quadrature for surface integrals
//!
//! ## Mathematical Background
//!
//! Each orbit is the image of one typical point under the octahedral group,
//! so rotating the grid by a group element permutes its points. For a grid
//! function f and a rotation ρ, the rotated function is f(ρ(·)); comparing
//! f₁ with every rotation of f₂ lets the distance ignore orientation.
//!
//! ## Reference
//!
//! Lebedev (1976). "Quadratures on a sphere". USSR Computational
//! Mathematics and Mathematical Physics 16(2).

mod orbit;
mod grid;
mod function;
mod action;
mod quadrature;
mod context;

pub use orbit::{
    LebedevOrbit,
    LebedevPoint,
    PointPermutation,
    SphericalCoordinates,
    MATCH_TOLERANCE,
};
pub(crate) use orbit::snap_unit;
pub use grid::LebedevGrid;
pub use function::GridFunction;
pub use action::GridAction;
pub use quadrature::{LebedevIntegrator, lebedev_26_integration};
pub use context::Lebedev26;
