//! Frame-tagged geometric algebra for orbital mechanics
//!
//! Coordinates never travel bare: vectors, bivectors and trivectors carry the
//! reference frame they are expressed in as a type parameter, so mixing two
//! coordinate systems is a compile error rather than a silent bug. Linear maps
//! (axis permutations, rotations, general orthogonal maps) are the only way to
//! move data between frames.

pub mod frames;
pub mod grassmann;
pub mod linear_map;
pub mod orthogonal;
pub mod permutation;
pub mod rotation;
pub mod sign;

pub use frames::Frame;
pub use grassmann::{commutator, Bivector, Trivector, Vector, Wedge};
pub use linear_map::LinearMap;
pub use orthogonal::OrthogonalMap;
pub use permutation::{CoordinatePermutation, Permutation};
pub use rotation::Rotation;
pub use sign::Sign;

#[cfg(test)]
mod tests;
