//! Diagram Distance Oracle
//!
//! The distance between two persistence diagrams (Wasserstein, bottleneck,
//! ...) is computed outside this crate. Metrics receive it as a
//! `DiagramDistance` implementation and call it once per direction and
//! homology dimension, possibly from several threads at once.

use super::persistence::PersistenceDiagram;
use crate::error::{NphtError, Result};

/// Distance between two persistence diagrams
pub trait DiagramDistance: Sync {
    /// Distance of degree `degree` between `a` and `b`.
    ///
    /// Must handle empty diagrams and essential pairs (death = +∞).
    fn distance(&self, a: &PersistenceDiagram, b: &PersistenceDiagram, degree: f64) -> Result<f64>;
}

impl<F> DiagramDistance for F
where
    F: Fn(&PersistenceDiagram, &PersistenceDiagram, f64) -> f64 + Sync,
{
    fn distance(&self, a: &PersistenceDiagram, b: &PersistenceDiagram, degree: f64) -> Result<f64> {
        Ok(self(a, b, degree))
    }
}

/// Call the oracle and reject values that are not a distance
pub(crate) fn checked_distance<O: DiagramDistance + ?Sized>(
    oracle: &O,
    a: &PersistenceDiagram,
    b: &PersistenceDiagram,
    degree: f64,
) -> Result<f64> {
    let value = oracle.distance(a, b, degree)?;
    if value.is_nan() || value < 0.0 {
        return Err(NphtError::OracleFailure {
            reason: format!("returned {} for diagrams of sizes {} and {}", value, a.len(), b.len()),
        });
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn size_gap(a: &PersistenceDiagram, b: &PersistenceDiagram, _degree: f64) -> f64 {
        (a.len() as f64 - b.len() as f64).abs()
    }

    #[test]
    fn test_function_as_oracle() {
        let a = PersistenceDiagram::from_pairs([(0.0, 1.0), (0.0, 2.0)]);
        let b = PersistenceDiagram::new();
        assert_eq!(checked_distance(&size_gap, &a, &b, 2.0).unwrap(), 2.0);
    }

    #[test]
    fn test_negative_and_nan_rejected() {
        let a = PersistenceDiagram::new();
        let negative = |_: &PersistenceDiagram, _: &PersistenceDiagram, _: f64| -1.0;
        let nan = |_: &PersistenceDiagram, _: &PersistenceDiagram, _: f64| f64::NAN;

        assert!(matches!(
            checked_distance(&negative, &a, &a, 1.0),
            Err(NphtError::OracleFailure { .. })
        ));
        assert!(checked_distance(&nan, &a, &a, 1.0).is_err());
    }

    #[test]
    fn test_oracle_error_propagates() {
        struct Failing;
        impl DiagramDistance for Failing {
            fn distance(
                &self,
                _: &PersistenceDiagram,
                _: &PersistenceDiagram,
                _: f64,
            ) -> Result<f64> {
                Err(NphtError::OracleFailure { reason: "backend unavailable".into() })
            }
        }

        let a = PersistenceDiagram::new();
        let err = checked_distance(&Failing, &a, &a, 2.0).unwrap_err();
        assert!(err.to_string().contains("backend unavailable"));
    }
}
