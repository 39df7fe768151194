//! Action of the Rotation Group on Grid Functions
//!
//! Each generator g permutes the grid points, p ↦ π_g(p). It acts on a grid
//! function f by moving every value along the permutation:
//!
//!   (f · g)(π_g(p)) = f(p)
//!
//! A word acts generator by generator from left to right, so that
//! f · (g₁g₂…gₖ) = ((f · g₁) · g₂) … · gₖ (a right action).
//!
//! Values are opaque: the action only changes which point a value sits at,
//! which lets the same machinery rotate real functions and whole transforms.

use std::collections::BTreeMap;

use super::function::GridFunction;
use super::grid::LebedevGrid;
use super::orbit::PointPermutation;
use crate::error::{NphtError, Result};
use crate::group::{Generator, RotationGroup, Word};

/// Precomputed per-generator actions on functions over one grid
#[derive(Debug, Clone)]
pub struct GridAction {
    grid: LebedevGrid,
    permutations: BTreeMap<Generator, PointPermutation>,
}

impl GridAction {
    pub fn new(grid: LebedevGrid, group: &RotationGroup) -> Result<Self> {
        let permutations = grid.point_permutation_by_generator(group)?;
        Ok(Self { grid, permutations })
    }

    pub fn grid(&self) -> &LebedevGrid {
        &self.grid
    }

    /// Point permutation induced by a generator
    pub fn permutation(&self, generator: Generator) -> Option<&PointPermutation> {
        self.permutations.get(&generator)
    }

    /// Apply a group element to a grid function, returning a new function.
    ///
    /// The function must be defined on exactly the grid's points.
    pub fn apply<V: Clone>(
        &self,
        function: &GridFunction<V>,
        word: &Word,
    ) -> Result<GridFunction<V>> {
        function.check_domain(&self.grid)?;
        self.check_word(word)?;
        Ok(self.execute(function, word.generators()))
    }

    /// `apply` with the word given as text, e.g. `"DAD"`
    pub fn apply_str<V: Clone>(
        &self,
        function: &GridFunction<V>,
        word: &str,
    ) -> Result<GridFunction<V>> {
        let word = Word::parse(word)?;
        self.apply(function, &word)
    }

    fn check_word(&self, word: &Word) -> Result<()> {
        match word.generators().iter().find(|g| !self.permutations.contains_key(g)) {
            Some(g) => Err(NphtError::UnknownGenerator {
                symbol: g.symbol(),
                word: word.to_string(),
            }),
            None => Ok(()),
        }
    }

    fn execute<V: Clone>(&self, function: &GridFunction<V>, word: &[Generator]) -> GridFunction<V> {
        match word.split_first() {
            None => function.clone(),
            Some((first, [])) => self.apply_generator(function, *first),
            Some((first, rest)) => self.execute(&self.apply_generator(function, *first), rest),
        }
    }

    fn apply_generator<V: Clone>(
        &self,
        function: &GridFunction<V>,
        generator: Generator,
    ) -> GridFunction<V> {
        // domain and word were checked, so every point has an image
        let permutation = &self.permutations[&generator];
        function
            .iter()
            .filter_map(|(point, value)| {
                permutation.get(point).map(|image| (*image, value.clone()))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lebedev::{LebedevOrbit, LebedevPoint};

    fn action() -> GridAction {
        GridAction::new(LebedevGrid::lebedev_26(), &RotationGroup::new()).unwrap()
    }

    fn labels(grid: &LebedevGrid) -> GridFunction<LebedevPoint> {
        GridFunction::from_fn(grid, |p| *p)
    }

    #[test]
    fn test_identity_leaves_function_unchanged() {
        let action = action();
        let f = GridFunction::from_fn(action.grid(), |p| p.number as f64 * 1.5 - 3.0);
        let g = action.apply(&f, &Word::identity()).unwrap();
        assert_eq!(f, g);
    }

    #[test]
    fn test_generator_moves_values_forward() {
        let action = action();
        let f = labels(action.grid());
        let g = action.apply_str(&f, "D").unwrap();

        // D sends a1:1 (+x) to a1:3 (+y), so the value of a1:1 now sits at a1:3
        let a1_3: LebedevPoint = "a1:3".parse().unwrap();
        assert_eq!(g.get(&a1_3), Some(&"a1:1".parse().unwrap()));
    }

    #[test]
    fn test_word_acts_left_to_right() {
        let action = action();
        let f = labels(action.grid());

        let step = action.apply_str(&action.apply_str(&f, "A").unwrap(), "D").unwrap();
        let word = action.apply_str(&f, "AD").unwrap();
        assert_eq!(step, word);
    }

    #[test]
    fn test_generator_orders() {
        let action = action();
        let f = labels(action.grid());
        assert_eq!(action.apply_str(&f, "DDD").unwrap(), f);
        assert_eq!(action.apply_str(&f, "AAAA").unwrap(), f);
        assert_ne!(action.apply_str(&f, "AA").unwrap(), f);
    }

    #[test]
    fn test_all_elements_act_distinctly() {
        let action = action();
        let group = RotationGroup::new();
        let f = labels(action.grid());

        let images: Vec<_> = group.iter().map(|w| action.apply(&f, w).unwrap()).collect();
        for i in 0..images.len() {
            for j in i + 1..images.len() {
                assert_ne!(images[i], images[j], "elements {} and {} coincide", i, j);
            }
        }
    }

    #[test]
    fn test_action_compatible_with_composition() {
        let action = action();
        let group = RotationGroup::new();
        let f = labels(action.grid());

        for w1 in group.iter().take(8) {
            for w2 in group.iter().skip(16) {
                let sequential = action.apply(&action.apply(&f, w1).unwrap(), w2).unwrap();
                let composed = action.apply(&f, &w1.concat(w2)).unwrap();
                assert_eq!(sequential, composed);
            }
        }
    }

    #[test]
    fn test_orbit_values_stay_in_orbit() {
        let action = action();
        let f = GridFunction::from_fn(action.grid(), |p| p.orbit);
        let g = action.apply_str(&f, "DADAD").unwrap();
        assert_eq!(f, g);
    }

    #[test]
    fn test_input_not_mutated() {
        let action = action();
        let f = labels(action.grid());
        let before = f.clone();
        let _ = action.apply_str(&f, "ADD").unwrap();
        assert_eq!(f, before);
    }

    #[test]
    fn test_bad_inputs_rejected() {
        let action = action();
        let f = labels(action.grid());
        assert!(matches!(
            action.apply_str(&f, "AXD").unwrap_err(),
            NphtError::UnknownGenerator { symbol: 'X', .. }
        ));

        let partial = labels(&LebedevGrid::new(&[LebedevOrbit::A1, LebedevOrbit::A2]));
        assert!(matches!(
            action.apply_str(&partial, "A").unwrap_err(),
            NphtError::DomainMismatch { expected: 26, actual: 18 }
        ));
    }
}
