//! Height Filtrations Along a Direction
//!
//! For a vertex set V ⊂ ℝᵈ with barycenter b and a direction e (normalised
//! to unit length), the barycentric height of a vertex is
//!
//!   h(v) = ⟨v − b, e⟩
//!
//! Centering at b removes translations. The normalised variant also
//! removes scale by mapping onto [0, 1]:
//!
//!   ĥ(v) = (⟨v − b, e⟩ + r) / 2r,   r = max_{u ∈ V} ‖u − b‖
//!
//! Sublevel sets of these functions give the filtration whose persistence
//! diagrams make up one direction of the transform.

use ndarray::{Array1, Array2, ArrayView1, Axis};

use crate::error::{NphtError, Result};

/// Centered height ⟨v − b, e⟩
#[derive(Debug, Clone)]
pub struct BarycentricHeight {
    barycenter: Array1<f64>,
    direction: Array1<f64>,
}

impl BarycentricHeight {
    /// `vertices` holds one vertex per row
    pub fn new(vertices: &Array2<f64>, direction: &[f64]) -> Result<Self> {
        let direction = unit_direction(vertices, direction)?;
        let barycenter = vertices.mean_axis(Axis(0)).ok_or(NphtError::NoVertices)?;
        Ok(Self { barycenter, direction })
    }

    pub fn barycenter(&self) -> &Array1<f64> {
        &self.barycenter
    }

    pub fn direction(&self) -> &Array1<f64> {
        &self.direction
    }

    pub fn value(&self, vertex: ArrayView1<f64>) -> f64 {
        (&vertex - &self.barycenter).dot(&self.direction)
    }

    /// Height of every row of `vertices`
    pub fn values(&self, vertices: &Array2<f64>) -> Array1<f64> {
        vertices.rows().into_iter().map(|v| self.value(v)).collect()
    }
}

/// Height rescaled onto [0, 1] by the radius of the vertex set
#[derive(Debug, Clone)]
pub struct NormalizedBarycentricHeight {
    height: BarycentricHeight,
    radius: f64,
}

impl NormalizedBarycentricHeight {
    pub fn new(vertices: &Array2<f64>, direction: &[f64]) -> Result<Self> {
        let height = BarycentricHeight::new(vertices, direction)?;
        let radius = vertices
            .rows()
            .into_iter()
            .map(|v| {
                let offset = &v - &height.barycenter;
                offset.dot(&offset).sqrt()
            })
            .fold(0.0, f64::max);
        Ok(Self { height, radius })
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn value(&self, vertex: ArrayView1<f64>) -> f64 {
        if self.radius == 0.0 {
            return 0.5;
        }
        (self.height.value(vertex) + self.radius) / (2.0 * self.radius)
    }

    pub fn values(&self, vertices: &Array2<f64>) -> Array1<f64> {
        vertices.rows().into_iter().map(|v| self.value(v)).collect()
    }
}

fn unit_direction(vertices: &Array2<f64>, direction: &[f64]) -> Result<Array1<f64>> {
    if vertices.ncols() != direction.len() {
        return Err(NphtError::DimensionMismatch {
            expected: vertices.ncols(),
            actual: direction.len(),
        });
    }
    if vertices.nrows() == 0 {
        return Err(NphtError::NoVertices);
    }

    let direction = Array1::from(direction.to_vec());
    let norm = direction.dot(&direction).sqrt();
    if norm == 0.0 || !norm.is_finite() {
        return Err(NphtError::InvalidDirection {
            reason: format!("direction {:?} cannot be normalised", direction.to_vec()),
        });
    }
    Ok(direction / norm)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    fn square() -> Array2<f64> {
        array![[0.0, 0.0], [2.0, 0.0], [2.0, 2.0], [0.0, 2.0]]
    }

    #[test]
    fn test_barycentric_centered() {
        let h = BarycentricHeight::new(&square(), &[3.0, 0.0]).unwrap();
        assert_eq!(h.barycenter(), &array![1.0, 1.0]);
        assert_eq!(h.values(&square()), array![-1.0, 1.0, 1.0, -1.0]);
    }

    #[test]
    fn test_translation_invariant() {
        let shifted = square() + 5.0;
        let a = BarycentricHeight::new(&square(), &[1.0, 1.0]).unwrap().values(&square());
        let b = BarycentricHeight::new(&shifted, &[1.0, 1.0]).unwrap().values(&shifted);
        for (x, y) in a.iter().zip(b.iter()) {
            assert!((x - y).abs() < 1e-12);
        }
    }

    #[test]
    fn test_normalized_in_unit_interval() {
        let vertices = array![[0.0, 0.0, 0.0], [4.0, 1.0, 0.0], [1.0, 3.0, 2.0], [-2.0, 0.5, 1.0]];
        let h = NormalizedBarycentricHeight::new(&vertices, &[0.3, -0.2, 0.9]).unwrap();
        for v in h.values(&vertices).iter() {
            assert!((0.0..=1.0).contains(v));
        }
    }

    #[test]
    fn test_normalized_square_diagonal() {
        // radius √2 along the diagonal reaches both ends of [0, 1]
        let h = NormalizedBarycentricHeight::new(&square(), &[1.0, 1.0]).unwrap();
        let values = h.values(&square());
        assert!((values[0] - 0.0).abs() < 1e-12);
        assert!((values[2] - 1.0).abs() < 1e-12);
        assert!((values[1] - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_single_vertex_maps_to_half() {
        let vertices = array![[1.0, 2.0]];
        let h = NormalizedBarycentricHeight::new(&vertices, &[0.0, 1.0]).unwrap();
        assert_eq!(h.radius(), 0.0);
        assert_eq!(h.value(vertices.row(0)), 0.5);
    }

    #[test]
    fn test_invalid_inputs() {
        assert!(matches!(
            BarycentricHeight::new(&square(), &[1.0, 0.0, 0.0]),
            Err(NphtError::DimensionMismatch { expected: 2, actual: 3 })
        ));
        assert!(matches!(
            BarycentricHeight::new(&square(), &[0.0, 0.0]),
            Err(NphtError::InvalidDirection { .. })
        ));
        assert!(matches!(
            NormalizedBarycentricHeight::new(&Array2::zeros((0, 2)), &[1.0, 0.0]),
            Err(NphtError::NoVertices)
        ));
    }
}
