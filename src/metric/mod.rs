//! Metric Module: Distances Between Persistent Homology Transforms
//!
//! A transform records, for every sampling direction, the persistence
//! diagrams of the height filtration along that direction. The distance
//! between two transforms integrates the per-direction diagram distance over
//! the direction sphere:
//!
//! - 2D: N equally spaced directions on S¹, closed-curve Simpson rule,
//!   optionally minimised over the N circular shifts
//! - 3D: the 26 Lebedev directions on S², Lebedev quadrature, optionally
//!   minimised over the 24 octahedral rotations
//!
//! ## Mathematical Background
//!
//! For transforms T₁, T₂ and a diagram distance W_p,
//!
//!   d(T₁, T₂) = min_ρ ∫_{S^{n-1}} Σ_d W_p(T₁(v)_d, T₂(ρv)_d) dv
//!
//! where ρ ranges over the rotations that map the sample set onto itself.
//! Restricting to these rotations keeps the search exact on the samples.
//!
//! ## Reference
//!
//! Turner, Mukherjee & Boyer (2014). "Persistent homology transform for
//! modeling shapes and surfaces". Information and Inference 3(4).

mod simpson;
mod planar;
mod spherical;

pub use simpson::{closed_curve_integral, simpson_uniform};
pub use planar::{NphtDistance2d, PlanarTransform};
pub use spherical::{NphtDistance3d, SphericalTransform};
