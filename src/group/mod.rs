//! Group Module: the Octahedral Rotation Group
//!
//! The 24 rotations preserving a cube act on every direction grid used by
//! the 3D transform. Shapes that differ only by one of these rotations
//! produce transforms that differ only by a permutation of directions, so
//! minimising over the group makes the distance orientation-invariant
//! (up to the grid's resolution).
//!
//! Elements are words over two generators. The 24 shortest words are fixed
//! and enumerated in a canonical order starting with the identity.

mod octahedral;

pub use octahedral::{Generator, RotationGroup, Word};
