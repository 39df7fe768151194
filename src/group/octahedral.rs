//! Octahedral Rotation Group with Two Generators
//!
//! The group is presented on the alphabet {A, D}:
//!
//!   G = ⟨ A, D | D³ = A⁴ = e, ... ⟩ ≅ S₄
//!
//! with the matrix representation
//!
//! ```text
//!       ┌ 0 0 1 ┐        ┌  0 1 0 ┐
//!   D = │ 1 0 0 │    A = │ -1 0 0 │
//!       └ 0 1 0 ┘        └  0 0 1 ┘
//! ```
//!
//! D cycles the coordinate axes, A is a quarter turn about z.
//!
//! ## Reference
//!
//! Lenz (2009). "Octahedral Filters for 3D Image Processing".
//! Proceedings SSBA 2009, pp. 109-112.

use std::fmt;
use std::str::FromStr;

use ndarray::{array, Array2};
use serde::{Deserialize, Serialize};

use crate::error::{NphtError, Result};

/// One of the two group generators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Generator {
    /// Quarter turn about the z axis
    A,
    /// Cyclic permutation of the axes
    D,
}

impl Generator {
    /// Generator alphabet, in the order the permutation tables are built
    pub const ALL: [Generator; 2] = [Generator::D, Generator::A];

    /// Character used for this generator inside a word
    pub fn symbol(self) -> char {
        match self {
            Generator::A => 'A',
            Generator::D => 'D',
        }
    }

    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'A' => Some(Generator::A),
            'D' => Some(Generator::D),
            _ => None,
        }
    }

    /// 3×3 rotation matrix of this generator
    pub fn matrix(self) -> Array2<f64> {
        match self {
            Generator::A => array![
                [0.0, 1.0, 0.0],
                [-1.0, 0.0, 0.0],
                [0.0, 0.0, 1.0]
            ],
            Generator::D => array![
                [0.0, 0.0, 1.0],
                [1.0, 0.0, 0.0],
                [0.0, 1.0, 0.0]
            ],
        }
    }
}

/// A group element written as a word over the generators.
///
/// The empty word is the identity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Word(Vec<Generator>);

impl Word {
    pub fn identity() -> Self {
        Self(Vec::new())
    }

    pub fn from_generators(generators: Vec<Generator>) -> Self {
        Self(generators)
    }

    /// Parse a word such as `"DADA"`. The empty string is the identity.
    pub fn parse(word: &str) -> Result<Self> {
        word.chars()
            .map(|c| {
                Generator::from_symbol(c).ok_or_else(|| NphtError::UnknownGenerator {
                    symbol: c,
                    word: word.to_string(),
                })
            })
            .collect::<Result<Vec<_>>>()
            .map(Self)
    }

    pub fn generators(&self) -> &[Generator] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn is_identity(&self) -> bool {
        self.0.is_empty()
    }

    /// Word for `self` followed by `other`
    pub fn concat(&self, other: &Word) -> Word {
        let mut generators = self.0.clone();
        generators.extend_from_slice(&other.0);
        Word(generators)
    }
}

/// Generator symbols in order; the identity prints as the empty string
impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for g in &self.0 {
            write!(f, "{}", g.symbol())?;
        }
        Ok(())
    }
}

impl FromStr for Word {
    type Err = NphtError;

    fn from_str(s: &str) -> Result<Self> {
        Word::parse(s)
    }
}

impl From<Generator> for Word {
    fn from(generator: Generator) -> Self {
        Word(vec![generator])
    }
}

/// Shortest-word representatives of all 24 group elements
const CANONICAL_WORDS: [&str; 24] = [
    "", "A", "D", "AA", "AD", "DA", "DD", "AAA", "AAD", "ADA", "ADD", "DAA", "DAD", "DDA",
    "AADA", "AADD", "ADAA", "ADAD", "DADA", "DADD", "DDAA", "DDAD", "DADAA", "DADAD",
];

/// The octahedral rotation group in its two-generator matrix representation
#[derive(Debug, Clone)]
pub struct RotationGroup {
    elements: Vec<Word>,
}

impl RotationGroup {
    pub fn new() -> Self {
        let elements = CANONICAL_WORDS
            .iter()
            .map(|w| Word(w.chars().filter_map(Generator::from_symbol).collect()))
            .collect();
        Self { elements }
    }

    /// Generator alphabet
    pub fn generators(&self) -> [Generator; 2] {
        Generator::ALL
    }

    /// The 24 canonical words, identity first
    pub fn elements(&self) -> &[Word] {
        &self.elements
    }

    /// Group order (24)
    pub fn order(&self) -> usize {
        self.elements.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Word> {
        self.elements.iter()
    }

    /// Matrix of a word: product of generator matrices in word order
    pub fn word_to_matrix(&self, word: &Word) -> Array2<f64> {
        word.generators()
            .iter()
            .fold(Array2::<f64>::eye(3), |acc, g| acc.dot(&g.matrix()))
    }

    /// Parse and evaluate a word given as text
    pub fn matrix_of(&self, word: &str) -> Result<Array2<f64>> {
        Word::parse(word).map(|w| self.word_to_matrix(&w))
    }

    /// Canonical words paired with their matrices
    pub fn element_matrices(&self) -> Vec<(Word, Array2<f64>)> {
        self.elements
            .iter()
            .map(|w| (w.clone(), self.word_to_matrix(w)))
            .collect()
    }

    /// Canonical shortest word representing the same rotation as `word`.
    ///
    /// `None` only if the canonical table fails to cover the group.
    pub fn canonical(&self, word: &Word) -> Option<&Word> {
        let key = matrix_key(&self.word_to_matrix(word));
        self.elements
            .iter()
            .find(|w| matrix_key(&self.word_to_matrix(w)) == key)
    }
}

impl Default for RotationGroup {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> IntoIterator for &'a RotationGroup {
    type Item = &'a Word;
    type IntoIter = std::slice::Iter<'a, Word>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

/// Exact integer key of a signed permutation matrix
fn matrix_key(m: &Array2<f64>) -> [i8; 9] {
    let mut key = [0i8; 9];
    for (k, v) in m.iter().enumerate() {
        key[k] = v.round() as i8;
    }
    key
}
