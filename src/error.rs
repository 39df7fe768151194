//! Error types for NPHT distance computations
//!
//! Every failure is raised at the point of detection and handed back to the
//! caller. Nothing in this crate retries: all computations are deterministic,
//! so a retry would reproduce the same failure.
//!
//! Errors fall into four categories:
//! - `Shape`: two inputs being compared do not line up (lengths, domains, keys)
//! - `Configuration`: an out-of-range parameter or an unknown identifier
//! - `Construction`: a grid or orbit definition violates its own invariants
//! - `Oracle`: the external diagram-distance oracle misbehaved

use thiserror::Error;

/// Result type alias for NPHT operations
pub type Result<T> = std::result::Result<T, NphtError>;

/// Error category for grouping related errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Mismatched lengths, domains or key sets between compared inputs
    Shape,
    /// Invalid parameter, generator, or point identifier
    Configuration,
    /// A grid/orbit definition failed its construction-time invariants
    Construction,
    /// The diagram-distance oracle returned an unusable value
    Oracle,
}

/// Errors that can occur while building grids or evaluating distances
#[derive(Error, Debug, Clone, PartialEq)]
pub enum NphtError {
    // ═══════════════════════════════════════════════════════════════════════
    // Shape errors
    // ═══════════════════════════════════════════════════════════════════════

    /// Two directional transforms have different numbers of directions
    #[error("Length mismatch: t_1 has {left} directions, t_2 has {right}")]
    LengthMismatch { left: usize, right: usize },

    /// A grid function is not defined on exactly the grid's point set
    #[error("Domain mismatch: function has {actual} points, grid has {expected}")]
    DomainMismatch { expected: usize, actual: usize },

    /// Two 3D transforms are keyed by different sets of grid points
    #[error("Key set mismatch: t_1 and t_2 are not defined on the same grid points")]
    KeySetMismatch,

    /// A direction carries no diagram for a requested homology dimension
    #[error("Direction {direction} has no diagram in dimension {dimension}")]
    MissingDimension { direction: String, dimension: usize },

    /// Geometric inputs of different dimensionality
    #[error("Dimension mismatch: expected {expected}-dimensional input, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// A transform without any direction
    #[error("Empty transform: at least one direction is required")]
    EmptyTransform,

    /// A height filtration over a shape without vertices
    #[error("Shape has no vertices")]
    NoVertices,

    // ═══════════════════════════════════════════════════════════════════════
    // Configuration errors
    // ═══════════════════════════════════════════════════════════════════════

    /// Distance degree outside [1, ∞]
    #[error("Invalid degree {degree}: expected a value in [1, inf]")]
    InvalidDegree { degree: f64 },

    /// Homology dimension outside the supported range
    #[error("Invalid homology dimension {dimension}: supported dimensions are 0..{max}")]
    InvalidDimension { dimension: usize, max: usize },

    /// Group word containing a character outside the generator alphabet
    #[error("Unknown generator '{symbol}' in word '{word}': expected one of 'A', 'D'")]
    UnknownGenerator { symbol: char, word: String },

    /// Point identifier that does not belong to the addressed orbit
    #[error("Point {point} does not belong to orbit {orbit}")]
    PointNotInOrbit { point: String, orbit: String },

    /// Point identifier that does not belong to the addressed grid
    #[error("Point {point} does not belong to this grid")]
    PointNotInGrid { point: String },

    /// Direction count or vector that cannot produce sampling directions
    #[error("Invalid direction: {reason}")]
    InvalidDirection { reason: String },

    // ═══════════════════════════════════════════════════════════════════════
    // Construction invariant failures
    // ═══════════════════════════════════════════════════════════════════════

    /// Two orbits of a grid share a point
    #[error("Orbits are not disjoint: generator {generator} maps {point} twice")]
    OrbitsNotDisjoint { generator: char, point: String },

    /// A generator produced no permutation on some orbit
    #[error("Generator {generator} does not act on orbit {orbit}")]
    GeneratorNotActing { generator: char, orbit: String },

    /// A rotated point does not land on any orbit point
    #[error("Generator {generator} maps {point} outside its orbit")]
    NoMatchingPoint { generator: char, point: String },

    /// A rotated point lands on several orbit points within tolerance
    #[error("Generator {generator} maps {point} onto {matches} orbit points")]
    AmbiguousMatch { generator: char, point: String, matches: usize },

    /// A generator's induced map is not injective
    #[error("Generator {generator} does not induce a bijection on orbit {orbit}")]
    NotABijection { generator: char, orbit: String },

    // ═══════════════════════════════════════════════════════════════════════
    // Oracle errors
    // ═══════════════════════════════════════════════════════════════════════

    /// The diagram-distance oracle failed or returned a negative/NaN value
    #[error("Diagram distance oracle failed: {reason}")]
    OracleFailure { reason: String },
}

impl NphtError {
    /// Category this error belongs to
    pub fn category(&self) -> ErrorCategory {
        match self {
            NphtError::LengthMismatch { .. }
            | NphtError::DomainMismatch { .. }
            | NphtError::KeySetMismatch
            | NphtError::MissingDimension { .. }
            | NphtError::DimensionMismatch { .. }
            | NphtError::EmptyTransform
            | NphtError::NoVertices => ErrorCategory::Shape,

            NphtError::InvalidDegree { .. }
            | NphtError::InvalidDimension { .. }
            | NphtError::UnknownGenerator { .. }
            | NphtError::PointNotInOrbit { .. }
            | NphtError::PointNotInGrid { .. }
            | NphtError::InvalidDirection { .. } => ErrorCategory::Configuration,

            NphtError::OrbitsNotDisjoint { .. }
            | NphtError::GeneratorNotActing { .. }
            | NphtError::NoMatchingPoint { .. }
            | NphtError::AmbiguousMatch { .. }
            | NphtError::NotABijection { .. } => ErrorCategory::Construction,

            NphtError::OracleFailure { .. } => ErrorCategory::Oracle,
        }
    }

    /// Whether retrying the same call could succeed. Never: the core is pure.
    pub fn is_recoverable(&self) -> bool {
        false
    }
}
