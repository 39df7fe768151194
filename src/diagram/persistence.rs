//! Persistence Diagrams
//!
//! A persistence pair (b, d) records a topological feature that is "born"
//! at filtration value b and "dies" at d. Features that never die inside
//! the observed filtration are essential and carry d = +∞.
//!
//! Diagrams are produced upstream, one per homology dimension and sampling
//! direction. This crate only stores and forwards them.

use serde::{Deserialize, Serialize};

/// A (birth, death) pair
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PersistencePair {
    pub birth: f64,
    /// +∞ for essential classes; serialized as `null`
    #[serde(with = "death_value")]
    pub death: f64,
}

impl PersistencePair {
    pub fn new(birth: f64, death: f64) -> Self {
        Self { birth, death }
    }

    /// Lifetime of the feature
    pub fn persistence(&self) -> f64 {
        self.death - self.birth
    }

    /// Is this an essential feature (infinite persistence)?
    pub fn is_essential(&self) -> bool {
        self.death.is_infinite()
    }
}

impl From<(f64, f64)> for PersistencePair {
    fn from((birth, death): (f64, f64)) -> Self {
        Self { birth, death }
    }
}

/// JSON has no infinity, so essential deaths travel as `null`
mod death_value {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(death: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        if death.is_infinite() {
            serializer.serialize_none()
        } else {
            serializer.serialize_f64(*death)
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::INFINITY))
    }
}

/// Persistence diagram of one homology dimension
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PersistenceDiagram {
    pairs: Vec<PersistencePair>,
}

impl PersistenceDiagram {
    pub fn new() -> Self {
        Self { pairs: Vec::new() }
    }

    pub fn from_pairs<I, P>(pairs: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PersistencePair>,
    {
        Self { pairs: pairs.into_iter().map(Into::into).collect() }
    }

    pub fn add(&mut self, pair: PersistencePair) {
        self.pairs.push(pair);
    }

    pub fn pairs(&self) -> &[PersistencePair] {
        &self.pairs
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PersistencePair> {
        self.pairs.iter()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Number of essential classes
    pub fn essential_count(&self) -> usize {
        self.pairs.iter().filter(|p| p.is_essential()).count()
    }

    /// Total persistence of the finite pairs
    pub fn total_persistence(&self) -> f64 {
        self.pairs.iter()
            .filter(|p| !p.is_essential())
            .map(|p| p.persistence())
            .sum()
    }

    /// Maximum persistence of the finite pairs
    pub fn max_persistence(&self) -> f64 {
        self.pairs.iter()
            .filter(|p| !p.is_essential())
            .map(|p| p.persistence())
            .fold(0.0, f64::max)
    }

    /// Cap essential classes at `max_filtration_value`.
    ///
    /// Finite pairs keep their order and come first, followed by the capped
    /// essential pairs in their original order:
    /// `[(1, 2), (0, ∞)]` capped at 10 becomes `[(1, 2), (0, 10)]`.
    pub fn de_essentialize(&self, max_filtration_value: f64) -> Self {
        let finite = self.pairs.iter().filter(|p| !p.is_essential()).copied();
        let capped = self.pairs.iter()
            .filter(|p| p.is_essential())
            .map(|p| PersistencePair::new(p.birth, max_filtration_value));
        Self { pairs: finite.chain(capped).collect() }
    }
}

impl FromIterator<PersistencePair> for PersistenceDiagram {
    fn from_iter<I: IntoIterator<Item = PersistencePair>>(iter: I) -> Self {
        Self { pairs: iter.into_iter().collect() }
    }
}

/// Diagrams of one sampling direction, indexed by homology dimension
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DiagramSet {
    diagrams: Vec<PersistenceDiagram>,
}

impl DiagramSet {
    pub fn new(diagrams: Vec<PersistenceDiagram>) -> Self {
        Self { diagrams }
    }

    /// `n_dimensions` empty diagrams
    pub fn empty(n_dimensions: usize) -> Self {
        Self { diagrams: vec![PersistenceDiagram::new(); n_dimensions] }
    }

    /// Diagram of homology dimension `d`
    pub fn dim(&self, d: usize) -> Option<&PersistenceDiagram> {
        self.diagrams.get(d)
    }

    pub fn n_dimensions(&self) -> usize {
        self.diagrams.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PersistenceDiagram> {
        self.diagrams.iter()
    }

    /// Cap essential classes of every dimension at `max_filtration_value`
    pub fn de_essentialize(&self, max_filtration_value: f64) -> Self {
        Self {
            diagrams: self.diagrams.iter()
                .map(|d| d.de_essentialize(max_filtration_value))
                .collect(),
        }
    }
}

impl From<Vec<PersistenceDiagram>> for DiagramSet {
    fn from(diagrams: Vec<PersistenceDiagram>) -> Self {
        Self::new(diagrams)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_essential_pairs() {
        let pair = PersistencePair::new(0.5, f64::INFINITY);
        assert!(pair.is_essential());
        assert!(!PersistencePair::new(0.5, 1.0).is_essential());
        assert!((PersistencePair::new(0.5, 1.75).persistence() - 1.25).abs() < 1e-12);
    }

    #[test]
    fn test_de_essentialize() {
        let dgm = PersistenceDiagram::from_pairs([
            (0.0, f64::INFINITY),
            (1.0, 2.0),
            (3.0, f64::INFINITY),
        ]);
        let capped = dgm.de_essentialize(10.0);
        assert_eq!(
            capped,
            PersistenceDiagram::from_pairs([(1.0, 2.0), (0.0, 10.0), (3.0, 10.0)])
        );
        assert_eq!(capped.essential_count(), 0);
        assert_eq!(dgm.essential_count(), 2);
    }

    #[test]
    fn test_de_essentialize_empty() {
        let empty = PersistenceDiagram::new();
        assert!(empty.de_essentialize(1.0).is_empty());
    }

    #[test]
    fn test_persistence_statistics() {
        let dgm = PersistenceDiagram::from_pairs([(0.0, 1.0), (0.5, 3.0), (0.0, f64::INFINITY)]);
        assert_eq!(dgm.len(), 3);
        assert!((dgm.total_persistence() - 3.5).abs() < 1e-12);
        assert!((dgm.max_persistence() - 2.5).abs() < 1e-12);
    }

    #[test]
    fn test_diagram_set_dimensions() {
        let set = DiagramSet::new(vec![
            PersistenceDiagram::from_pairs([(0.0, f64::INFINITY)]),
            PersistenceDiagram::new(),
        ]);
        assert_eq!(set.n_dimensions(), 2);
        assert_eq!(set.dim(0).map(|d| d.len()), Some(1));
        assert!(set.dim(2).is_none());

        let capped = set.de_essentialize(4.0);
        assert_eq!(capped.dim(0).unwrap().pairs()[0].death, 4.0);
    }

    #[test]
    fn test_json_infinity_as_null() {
        let dgm = PersistenceDiagram::from_pairs([(0.0, 1.0), (0.0, f64::INFINITY)]);
        let json = serde_json::to_string(&dgm).unwrap();
        assert_eq!(json, r#"[{"birth":0.0,"death":1.0},{"birth":0.0,"death":null}]"#);

        let back: PersistenceDiagram = serde_json::from_str(&json).unwrap();
        assert_eq!(back, dgm);
    }
}
