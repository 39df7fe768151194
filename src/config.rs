//! Distance Configuration
//!
//! Parameters shared by the planar and spherical NPHT distances:
//!
//! - `degree`: degree p forwarded to the diagram-distance oracle
//! - `included_dimensions`: homology dimensions summed per direction
//! - `minimize_over_rotations`: search over circular shifts (2D) or the
//!   octahedral group (3D)

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::error::{NphtError, Result};

/// Configuration of an NPHT distance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DistanceConfig {
    /// Degree of the diagram distance, in [1, ∞]
    pub degree: f64,
    /// Homology dimensions to include (ascending, no duplicates)
    pub included_dimensions: BTreeSet<usize>,
    /// Minimise over rotations of the second argument
    pub minimize_over_rotations: bool,
}

impl Default for DistanceConfig {
    fn default() -> Self {
        Self::planar_default()
    }
}

impl DistanceConfig {
    pub fn new<I>(degree: f64, included_dimensions: I, minimize_over_rotations: bool) -> Self
    where
        I: IntoIterator<Item = usize>,
    {
        Self {
            degree,
            included_dimensions: included_dimensions.into_iter().collect(),
            minimize_over_rotations,
        }
    }

    /// Degree 2, dimensions {0, 1}, rotation search on
    pub fn planar_default() -> Self {
        Self::new(2.0, [0, 1], true)
    }

    /// Degree 2, dimensions {0, 1, 2}, rotation search on
    pub fn spherical_default() -> Self {
        Self::new(2.0, [0, 1, 2], true)
    }

    pub fn with_degree(mut self, degree: f64) -> Self {
        self.degree = degree;
        self
    }

    pub fn with_dimensions<I: IntoIterator<Item = usize>>(mut self, dims: I) -> Self {
        self.included_dimensions = dims.into_iter().collect();
        self
    }

    pub fn with_rotation_search(mut self, enabled: bool) -> Self {
        self.minimize_over_rotations = enabled;
        self
    }

    /// Check the degree and, if given, that every dimension is below `max_dimension`
    pub fn validate(&self, max_dimension: Option<usize>) -> Result<()> {
        if self.degree.is_nan() || self.degree < 1.0 {
            return Err(NphtError::InvalidDegree { degree: self.degree });
        }
        if let Some(max) = max_dimension {
            if let Some(&dimension) = self.included_dimensions.iter().find(|&&d| d >= max) {
                return Err(NphtError::InvalidDimension { dimension, max });
            }
        }
        Ok(())
    }

    /// Load from a JSON document; missing fields take their defaults
    pub fn from_json(json: &str) -> std::result::Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
