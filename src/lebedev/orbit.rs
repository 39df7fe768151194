//! Lebedev Orbits: Octahedrally Invariant Point Sets on S²
//!
//! Orbit names follow the usual Lebedev construction:
//!
//! - a1: orbit of (1, 0, 0), 6 points (octahedron vertices)
//! - a2: orbit of (1, 1, 0)/√2, 12 points (cuboctahedron vertices)
//! - a3: orbit of (1, 1, 1)/√3, 8 points (cube vertices)
//!
//! A point is addressed by its orbit and a 1-based number inside the orbit.
//! Coordinates are tabulated in spherical form (degrees) and converted to
//! cartesian on demand. Conversions snap values that are numerically ±1 or 0
//! so that rotated points can be matched back to grid points exactly.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::str::FromStr;

use ndarray::{Array1, Array2};
use serde::{Deserialize, Serialize};

use crate::error::{NphtError, Result};
use crate::group::{Generator, RotationGroup};

/// Absolute per-coordinate tolerance when matching a rotated point to an orbit point
pub const MATCH_TOLERANCE: f64 = 1e-8;

/// Distance below which a cartesian coordinate is snapped to -1, 0 or 1
const SNAP_TOLERANCE: f64 = 1e-8;

/// Polar angle of the a3 points in the upper hemisphere: arccos(1/√3) in degrees
const A3_POLAR_UPPER: f64 = 54.735610317245346;
const A3_POLAR_LOWER: f64 = 125.264389682754654;

/// (azimuth, polar) in degrees, indexed by point number - 1
const A1_SPHERICAL: [(f64, f64); 6] = [
    (0.0, 90.0),
    (180.0, 90.0),
    (90.0, 90.0),
    (-90.0, 90.0),
    (90.0, 0.0),
    (90.0, 180.0),
];

const A2_SPHERICAL: [(f64, f64); 12] = [
    (90.0, 45.0),
    (90.0, 135.0),
    (-90.0, 45.0),
    (-90.0, 135.0),
    (0.0, 45.0),
    (0.0, 135.0),
    (180.0, 45.0),
    (180.0, 135.0),
    (45.0, 90.0),
    (-45.0, 90.0),
    (135.0, 90.0),
    (-135.0, 90.0),
];

const A3_SPHERICAL: [(f64, f64); 8] = [
    (45.0, A3_POLAR_UPPER),
    (45.0, A3_POLAR_LOWER),
    (-45.0, A3_POLAR_UPPER),
    (-45.0, A3_POLAR_LOWER),
    (135.0, A3_POLAR_UPPER),
    (135.0, A3_POLAR_LOWER),
    (-135.0, A3_POLAR_UPPER),
    (-135.0, A3_POLAR_LOWER),
];

/// Spherical coordinates in degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SphericalCoordinates {
    /// Azimuth θ ∈ [-180, 180]
    pub azimuth: f64,
    /// Polar angle φ ∈ [0, 180], measured from +z
    pub polar: f64,
}

impl SphericalCoordinates {
    pub fn new(azimuth: f64, polar: f64) -> Self {
        Self { azimuth, polar }
    }

    /// Unit vector (x, y, z) with near-integral components snapped
    pub fn to_cartesian(&self) -> [f64; 3] {
        let theta = self.azimuth.to_radians();
        let phi = self.polar.to_radians();
        [
            snap_unit(theta.cos() * phi.sin()),
            snap_unit(theta.sin() * phi.sin()),
            snap_unit(phi.cos()),
        ]
    }
}

/// Snap values within tolerance of -1, 0 or 1 onto that value
pub(crate) fn snap_unit(value: f64) -> f64 {
    for target in [-1.0, 0.0, 1.0] {
        if (value - target).abs() < SNAP_TOLERANCE {
            return target;
        }
    }
    value
}

/// Permutation of points induced by one generator
pub type PointPermutation = BTreeMap<LebedevPoint, LebedevPoint>;

/// The three Lebedev orbit types used by the 26-point grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum LebedevOrbit {
    A1,
    A2,
    A3,
}

impl LebedevOrbit {
    pub const ALL: [LebedevOrbit; 3] = [LebedevOrbit::A1, LebedevOrbit::A2, LebedevOrbit::A3];

    /// String identifier ("a1", "a2", "a3")
    pub fn id(self) -> &'static str {
        match self {
            LebedevOrbit::A1 => "a1",
            LebedevOrbit::A2 => "a2",
            LebedevOrbit::A3 => "a3",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        match id {
            "a1" => Some(LebedevOrbit::A1),
            "a2" => Some(LebedevOrbit::A2),
            "a3" => Some(LebedevOrbit::A3),
            _ => None,
        }
    }

    fn spherical_table(self) -> &'static [(f64, f64)] {
        match self {
            LebedevOrbit::A1 => &A1_SPHERICAL,
            LebedevOrbit::A2 => &A2_SPHERICAL,
            LebedevOrbit::A3 => &A3_SPHERICAL,
        }
    }

    /// Number of points in the orbit
    pub fn point_count(self) -> usize {
        self.spherical_table().len()
    }

    /// Points of the orbit in numbering order
    pub fn points(self) -> Vec<LebedevPoint> {
        (1..=self.point_count())
            .map(|number| LebedevPoint { orbit: self, number })
            .collect()
    }

    pub fn contains(self, point: &LebedevPoint) -> bool {
        point.orbit == self && (1..=self.point_count()).contains(&point.number)
    }

    fn check_point(self, point: &LebedevPoint) -> Result<()> {
        if self.contains(point) {
            Ok(())
        } else {
            Err(NphtError::PointNotInOrbit {
                point: point.to_string(),
                orbit: self.id().to_string(),
            })
        }
    }

    pub fn to_spherical(self, point: &LebedevPoint) -> Result<SphericalCoordinates> {
        self.check_point(point)?;
        let (azimuth, polar) = self.spherical_table()[point.number - 1];
        Ok(SphericalCoordinates::new(azimuth, polar))
    }

    pub fn to_cartesian(self, point: &LebedevPoint) -> Result<[f64; 3]> {
        Ok(self.to_spherical(point)?.to_cartesian())
    }

    /// Permutation of this orbit's points induced by each generator.
    ///
    /// Each point is rotated by the generator matrix and matched against
    /// the orbit within `MATCH_TOLERANCE`. Exactly one match is required per
    /// point, and the resulting map must be injective.
    pub fn point_permutation_by_generator(
        self,
        group: &RotationGroup,
    ) -> Result<BTreeMap<Generator, PointPermutation>> {
        let points = self.points();
        let cartesian: Vec<[f64; 3]> = points
            .iter()
            .map(|p| self.to_cartesian(p))
            .collect::<Result<_>>()?;

        group
            .generators()
            .into_iter()
            .map(|generator| {
                let matrix = group.word_to_matrix(&generator.into());
                let mapping =
                    induced_permutation(&points, &cartesian, &matrix, generator, self.id())?;
                Ok((generator, mapping))
            })
            .collect()
    }
}

/// Permutation of `points` induced by `matrix`, matching rotated coordinates
/// against `cartesian` (same order as `points`).
fn induced_permutation(
    points: &[LebedevPoint],
    cartesian: &[[f64; 3]],
    matrix: &Array2<f64>,
    generator: Generator,
    orbit: &str,
) -> Result<PointPermutation> {
    let mut mapping = PointPermutation::new();

    for (point, coords) in points.iter().zip(cartesian) {
        let rotated = matrix.dot(&Array1::from(coords.to_vec()));
        let idx = match_point(&rotated, cartesian, generator, point)?;
        mapping.insert(*point, points[idx]);
    }

    let images: BTreeSet<&LebedevPoint> = mapping.values().collect();
    if images.len() != points.len() {
        return Err(NphtError::NotABijection {
            generator: generator.symbol(),
            orbit: orbit.to_string(),
        });
    }
    Ok(mapping)
}

/// Index of the single candidate within `MATCH_TOLERANCE` of `rotated` on
/// every coordinate
fn match_point(
    rotated: &Array1<f64>,
    candidates: &[[f64; 3]],
    generator: Generator,
    point: &LebedevPoint,
) -> Result<usize> {
    let matches: Vec<usize> = candidates
        .iter()
        .enumerate()
        .filter(|(_, candidate)| {
            candidate
                .iter()
                .zip(rotated.iter())
                .all(|(a, b)| (a - b).abs() <= MATCH_TOLERANCE)
        })
        .map(|(idx, _)| idx)
        .collect();

    match matches.as_slice() {
        [idx] => Ok(*idx),
        [] => Err(NphtError::NoMatchingPoint {
            generator: generator.symbol(),
            point: point.to_string(),
        }),
        _ => Err(NphtError::AmbiguousMatch {
            generator: generator.symbol(),
            point: point.to_string(),
            matches: matches.len(),
        }),
    }
}

impl fmt::Display for LebedevOrbit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

/// A point of a Lebedev grid: orbit plus 1-based number inside the orbit.
///
/// Serialized as `"a2:7"` so that grid functions map to JSON objects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct LebedevPoint {
    pub orbit: LebedevOrbit,
    pub number: usize,
}

impl LebedevPoint {
    /// Checked constructor
    pub fn new(orbit: LebedevOrbit, number: usize) -> Result<Self> {
        let point = Self { orbit, number };
        orbit.check_point(&point)?;
        Ok(point)
    }
}

impl fmt::Display for LebedevPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.orbit.id(), self.number)
    }
}

impl FromStr for LebedevPoint {
    type Err = NphtError;

    fn from_str(s: &str) -> Result<Self> {
        let not_a_point = || NphtError::PointNotInGrid { point: s.to_string() };

        let (orbit, number) = s.split_once(':').ok_or_else(not_a_point)?;
        let orbit = LebedevOrbit::from_id(orbit).ok_or_else(not_a_point)?;
        let number: usize = number.parse().map_err(|_| not_a_point())?;
        LebedevPoint::new(orbit, number)
    }
}

impl From<LebedevPoint> for String {
    fn from(point: LebedevPoint) -> Self {
        point.to_string()
    }
}

impl TryFrom<String> for LebedevPoint {
    type Error = NphtError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}
