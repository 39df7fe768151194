//! Grid Functions: Total Maps from Grid Points to Values
//!
//! A grid function assigns a value to every point of a Lebedev grid. Real
//! valued functions are integrated by the quadrature rule; a 3D transform is
//! a grid function whose values are per-dimension diagram sets. Grid
//! functions are never mutated by the group action, which always returns a
//! fresh function.

use std::collections::btree_map;
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::grid::LebedevGrid;
use super::orbit::LebedevPoint;
use crate::error::{NphtError, Result};

/// A map from grid points to values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GridFunction<V> {
    values: BTreeMap<LebedevPoint, V>,
}

impl<V> GridFunction<V> {
    pub fn new() -> Self {
        Self { values: BTreeMap::new() }
    }

    pub fn from_map(values: BTreeMap<LebedevPoint, V>) -> Self {
        Self { values }
    }

    /// Evaluate `f` at every point of `grid`
    pub fn from_fn<F>(grid: &LebedevGrid, mut f: F) -> Self
    where
        F: FnMut(&LebedevPoint) -> V,
    {
        grid.points().into_iter().map(|p| (p, f(&p))).collect()
    }

    /// Fallible variant of `from_fn`
    pub fn try_from_fn<F>(grid: &LebedevGrid, mut f: F) -> Result<Self>
    where
        F: FnMut(&LebedevPoint) -> Result<V>,
    {
        grid.points()
            .into_iter()
            .map(|p| Ok((p, f(&p)?)))
            .collect()
    }

    pub fn insert(&mut self, point: LebedevPoint, value: V) -> Option<V> {
        self.values.insert(point, value)
    }

    pub fn get(&self, point: &LebedevPoint) -> Option<&V> {
        self.values.get(point)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, LebedevPoint, V> {
        self.values.iter()
    }

    pub fn points(&self) -> btree_map::Keys<'_, LebedevPoint, V> {
        self.values.keys()
    }

    pub fn values(&self) -> btree_map::Values<'_, LebedevPoint, V> {
        self.values.values()
    }

    pub fn map<W, F>(&self, mut f: F) -> GridFunction<W>
    where
        F: FnMut(&LebedevPoint, &V) -> W,
    {
        self.values.iter().map(|(p, v)| (*p, f(p, v))).collect()
    }

    /// Whether both functions are defined on the same points
    pub fn same_domain<W>(&self, other: &GridFunction<W>) -> bool {
        self.values.len() == other.values.len()
            && self.values.keys().zip(other.values.keys()).all(|(a, b)| a == b)
    }

    /// Ensure the domain is exactly the point set of `grid`
    pub fn check_domain(&self, grid: &LebedevGrid) -> Result<()> {
        let expected = grid.len();
        if self.values.len() != expected || !self.values.keys().all(|p| grid.contains(p)) {
            return Err(NphtError::DomainMismatch { expected, actual: self.values.len() });
        }
        Ok(())
    }

    pub fn into_inner(self) -> BTreeMap<LebedevPoint, V> {
        self.values
    }
}

impl<V> Default for GridFunction<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> FromIterator<(LebedevPoint, V)> for GridFunction<V> {
    fn from_iter<I: IntoIterator<Item = (LebedevPoint, V)>>(iter: I) -> Self {
        Self { values: iter.into_iter().collect() }
    }
}

impl<V> IntoIterator for GridFunction<V> {
    type Item = (LebedevPoint, V);
    type IntoIter = btree_map::IntoIter<LebedevPoint, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}

impl<'a, V> IntoIterator for &'a GridFunction<V> {
    type Item = (&'a LebedevPoint, &'a V);
    type IntoIter = btree_map::Iter<'a, LebedevPoint, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lebedev::LebedevOrbit;

    #[test]
    fn test_from_fn_covers_grid() {
        let grid = LebedevGrid::lebedev_26();
        let f = GridFunction::from_fn(&grid, |p| p.number as f64);
        assert_eq!(f.len(), 26);
        assert!(f.check_domain(&grid).is_ok());
        assert_eq!(f.get(&"a3:8".parse().unwrap()), Some(&8.0));
    }

    #[test]
    fn test_partial_function_rejected() {
        let grid = LebedevGrid::lebedev_26();
        let mut f = GridFunction::from_fn(&grid, |_| 1.0);
        let mut values = f.clone().into_inner();
        values.remove(&"a1:1".parse().unwrap());
        f = GridFunction::from_map(values);

        let err = f.check_domain(&grid).unwrap_err();
        assert_eq!(err, NphtError::DomainMismatch { expected: 26, actual: 25 });
    }

    #[test]
    fn test_foreign_points_rejected() {
        let grid = LebedevGrid::lebedev_26();
        let mut values = GridFunction::from_fn(&grid, |_| 0.0).into_inner();
        values.remove(&"a1:1".parse().unwrap());
        values.insert(LebedevPoint { orbit: LebedevOrbit::A1, number: 7 }, 0.0);

        let f = GridFunction::from_map(values);
        assert_eq!(f.len(), 26);
        assert!(f.check_domain(&grid).is_err());
    }

    #[test]
    fn test_same_domain_and_map() {
        let grid = LebedevGrid::lebedev_26();
        let f = GridFunction::from_fn(&grid, |p| p.number);
        let g = f.map(|_, n| *n as f64 * 0.5);
        assert!(f.same_domain(&g));
        assert_eq!(g.get(&"a2:4".parse().unwrap()), Some(&2.0));
    }

    #[test]
    fn test_json_keys_are_point_labels() {
        let grid = LebedevGrid::new(&[LebedevOrbit::A1]);
        let f = GridFunction::from_fn(&grid, |p| p.number);
        let json = serde_json::to_string(&f).unwrap();
        assert!(json.contains("\"a1:1\":1"));

        let back: GridFunction<usize> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, f);
    }
}
