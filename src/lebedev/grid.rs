//! Lebedev Grids: Unions of Disjoint Orbits
//!
//! A grid is a fixed list of orbits. Coordinates of a point are delegated to
//! the orbit that owns it, and the permutation a generator induces on the
//! grid is the union of its per-orbit permutations.

use std::collections::{BTreeMap, BTreeSet};

use tracing::debug;

use super::orbit::{LebedevOrbit, LebedevPoint, PointPermutation, SphericalCoordinates};
use crate::error::{NphtError, Result};
use crate::group::{Generator, RotationGroup};

/// A sampling grid on S² built from Lebedev orbits
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LebedevGrid {
    orbits: Vec<LebedevOrbit>,
}

impl LebedevGrid {
    /// Grid made of the given orbits. Disjointness is verified when the
    /// generator permutations are computed.
    pub fn new(orbits: &[LebedevOrbit]) -> Self {
        Self { orbits: orbits.to_vec() }
    }

    /// The 26-point grid a1 ∪ a2 ∪ a3
    pub fn lebedev_26() -> Self {
        Self::new(&LebedevOrbit::ALL)
    }

    pub fn orbits(&self) -> &[LebedevOrbit] {
        &self.orbits
    }

    /// All grid points, orbit by orbit
    pub fn points(&self) -> Vec<LebedevPoint> {
        self.orbits.iter().flat_map(|o| o.points()).collect()
    }

    pub fn len(&self) -> usize {
        self.orbits.iter().map(|o| o.point_count()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn contains(&self, point: &LebedevPoint) -> bool {
        self.orbits.iter().any(|o| o.contains(point))
    }

    fn owning_orbit(&self, point: &LebedevPoint) -> Result<LebedevOrbit> {
        self.orbits
            .iter()
            .copied()
            .find(|o| *o == point.orbit)
            .ok_or_else(|| NphtError::PointNotInGrid { point: point.to_string() })
    }

    pub fn to_spherical(&self, point: &LebedevPoint) -> Result<SphericalCoordinates> {
        self.owning_orbit(point)?.to_spherical(point)
    }

    pub fn to_cartesian(&self, point: &LebedevPoint) -> Result<[f64; 3]> {
        self.owning_orbit(point)?.to_cartesian(point)
    }

    /// Every grid point with its unit direction vector
    pub fn directions(&self) -> Result<Vec<(LebedevPoint, [f64; 3])>> {
        self.points()
            .into_iter()
            .map(|p| Ok((p, self.to_cartesian(&p)?)))
            .collect()
    }

    /// Permutation of the whole grid induced by each generator.
    ///
    /// Fails if two orbits contribute the same source or target point, or if
    /// some orbit yields no permutation for a generator.
    pub fn point_permutation_by_generator(
        &self,
        group: &RotationGroup,
    ) -> Result<BTreeMap<Generator, PointPermutation>> {
        let per_orbit = self
            .orbits
            .iter()
            .map(|orbit| Ok((*orbit, orbit.point_permutation_by_generator(group)?)))
            .collect::<Result<Vec<_>>>()?;
        let union = union_permutations(&group.generators(), per_orbit)?;

        debug!(
            points = self.len(),
            orbits = self.orbits.len(),
            "computed generator permutations on Lebedev grid"
        );

        Ok(union)
    }
}

/// Merge per-orbit generator permutations into one permutation per generator.
///
/// Every orbit must supply a permutation for each of `generators`, and no
/// two orbits may share a source or target point.
fn union_permutations(
    generators: &[Generator],
    per_orbit: Vec<(LebedevOrbit, BTreeMap<Generator, PointPermutation>)>,
) -> Result<BTreeMap<Generator, PointPermutation>> {
    let mut union: BTreeMap<Generator, PointPermutation> =
        generators.iter().map(|g| (*g, PointPermutation::new())).collect();
    let mut images: BTreeMap<Generator, BTreeSet<LebedevPoint>> = BTreeMap::new();

    for (orbit, permutations) in &per_orbit {
        for generator in generators {
            let permutation = permutations.get(generator).ok_or_else(|| {
                NphtError::GeneratorNotActing {
                    generator: generator.symbol(),
                    orbit: orbit.id().to_string(),
                }
            })?;

            let target = union.entry(*generator).or_default();
            let seen = images.entry(*generator).or_default();

            for (from, to) in permutation {
                if target.insert(*from, *to).is_some() || !seen.insert(*to) {
                    return Err(NphtError::OrbitsNotDisjoint {
                        generator: generator.symbol(),
                        point: from.to_string(),
                    });
                }
            }
        }
    }

    Ok(union)
}

impl Default for LebedevGrid {
    fn default() -> Self {
        Self::lebedev_26()
    }
}
