//! Diagram Module: Persistence Diagrams and the Distance Oracle
//!
//! For each sampling direction v, the transform stores one persistence
//! diagram per homology dimension of the sublevel filtration of the height
//! function ⟨·, v⟩. Computing these diagrams, and the distance between two
//! of them, is delegated to external engines:
//!
//! - diagrams arrive as `DiagramSet`s (index = homology dimension)
//! - distances come from a `DiagramDistance` oracle, typically a
//!   Wasserstein distance of degree p
//!
//! Essential classes may be kept at +∞ or capped with `de_essentialize`,
//! depending on what the oracle expects.

mod persistence;
mod oracle;

pub use persistence::{DiagramSet, PersistenceDiagram, PersistencePair};
pub use oracle::DiagramDistance;
pub(crate) use oracle::checked_distance;
