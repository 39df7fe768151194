//! # NPHT-Metric
//!
//! Rotation-Invariant Distances Between Normalized Persistent Homology
//! Transforms
//!
//! ## Theoretical Framework
//!
//! The persistent homology transform describes a shape by the persistence
//! diagrams of its height filtrations, one per direction on the sphere. Two
//! shapes are compared by integrating a diagram distance over all
//! directions. Shapes that differ only by orientation should be close, so
//! the integral is minimised over rotations that map the finite direction
//! set onto itself.
//!
//! ### Sampling
//!
//! 1. **Planar shapes**: N equally spaced directions on S¹; a rotation by
//!    2πk/N is a circular shift by k
//!
//! 2. **Solid shapes**: the 26 directions of the degree-7 Lebedev grid on
//!    S²; the 24 rotations of the octahedral group permute them
//!
//! ### Integration
//!
//! - Closed-curve Simpson rule over [0, 2π] in 2D
//! - Lebedev quadrature over S² in 3D
//!
//! ## Key Result
//!
//! For transforms T₁ and T₂ = T₁ ∘ ρ with ρ a grid-preserving rotation,
//!
//!   d(T₁, T₂) = 0
//!
//! whenever rotation search is enabled.
//!
//! ## References
//!
//! - Turner, Mukherjee & Boyer, "Persistent homology transform for modeling
//!   shapes and surfaces" (2014)
//! - Lebedev, "Quadratures on a sphere" (1976)
//! - Edelsbrunner & Harer, "Computational Topology" (2010)
//!
//! ## Author
//!
//! Avermex Research Division

pub mod error;
pub mod config;
pub mod diagram;
pub mod group;
pub mod lebedev;
pub mod metric;
pub mod transform;

pub use error::{ErrorCategory, NphtError, Result};
pub use config::DistanceConfig;

// Re-exports from diagram
pub use diagram::{
    DiagramDistance,
    DiagramSet,
    PersistenceDiagram,
    PersistencePair,
};

// Re-exports from group
pub use group::{Generator, RotationGroup, Word};

// Re-exports from lebedev
pub use lebedev::{
    // Orbits and points
    LebedevOrbit,
    LebedevPoint,
    SphericalCoordinates,
    // Grid and functions on it
    LebedevGrid,
    GridFunction,
    GridAction,
    // Integration
    LebedevIntegrator,
    lebedev_26_integration,
    Lebedev26,
};

// Re-exports from metric
pub use metric::{
    NphtDistance2d,
    NphtDistance3d,
    PlanarTransform,
    SphericalTransform,
};

// Re-exports from transform
pub use transform::{
    circle_directions,
    BarycentricHeight,
    NormalizedBarycentricHeight,
};
