//! Common interface of the maps between frames

use crate::frames::Frame;
use crate::grassmann::{Bivector, Trivector, Vector};
use crate::sign::Sign;

/// A linear map taking multivectors expressed in `FromFrame` to multivectors
/// expressed in `ToFrame`.
///
/// Vectors transform by the map's coordinate action alone. Bivectors and
/// trivectors are pseudo-vectors: they additionally pick up the map's
/// determinant, so an improper map (determinant -1) flips them relative to a
/// true vector.
pub trait LinearMap<FromFrame: Frame, ToFrame: Frame>: Sized {
    /// The same kind of map with the frame endpoints swapped.
    type Inverse: LinearMap<ToFrame, FromFrame>;

    fn determinant(&self) -> Sign;

    fn inverse(&self) -> Self::Inverse;

    fn apply_vector(&self, vector: &Vector<FromFrame>) -> Vector<ToFrame>;

    fn apply_bivector(&self, bivector: &Bivector<FromFrame>) -> Bivector<ToFrame>;

    fn apply_trivector(&self, trivector: &Trivector<FromFrame>) -> Trivector<ToFrame>;
}
