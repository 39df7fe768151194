//! Transform Module: Directions and Height Filtrations
//!
//! Producing a transform takes a shape, a set of directions, and for each
//! direction the persistence diagrams of a height filtration. Diagram
//! computation itself happens upstream; this module supplies the two
//! geometric ingredients:
//!
//! - sampling directions: `circle_directions` for 2D, `LebedevGrid::directions`
//!   for 3D
//! - height functions along a direction, plain or normalised to [0, 1]
//!
//! After computing diagrams, essential classes are usually capped at the
//! maximum height with `DiagramSet::de_essentialize`.

mod directions;
mod height;

pub use directions::circle_directions;
pub use height::{BarycentricHeight, NormalizedBarycentricHeight};
