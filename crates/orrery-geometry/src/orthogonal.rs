//! General orthogonal maps between frames

use crate::frames::Frame;
use crate::grassmann::{Bivector, Trivector, Vector};
use crate::linear_map::LinearMap;
use crate::rotation::Rotation;
use crate::sign::Sign;
use std::ops::Mul;

/// An orthogonal map taking coordinates from `FromFrame` to `ToFrame`,
/// decomposed as a rotation composed with a central inversion when the
/// determinant is negative.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrthogonalMap<FromFrame: Frame, ToFrame: Frame> {
    determinant: Sign,
    rotation: Rotation<FromFrame, ToFrame>,
}

impl<FromFrame: Frame, ToFrame: Frame> OrthogonalMap<FromFrame, ToFrame> {
    pub fn new(determinant: Sign, rotation: Rotation<FromFrame, ToFrame>) -> Self {
        Self {
            determinant,
            rotation,
        }
    }

    pub fn identity() -> Self {
        Self::new(Sign::POSITIVE, Rotation::identity())
    }

    /// The rotation part of the decomposition.
    pub fn rotation(&self) -> Rotation<FromFrame, ToFrame> {
        self.rotation
    }
}

impl<FromFrame: Frame, ToFrame: Frame> LinearMap<FromFrame, ToFrame>
    for OrthogonalMap<FromFrame, ToFrame>
{
    type Inverse = OrthogonalMap<ToFrame, FromFrame>;

    fn determinant(&self) -> Sign {
        self.determinant
    }

    fn inverse(&self) -> OrthogonalMap<ToFrame, FromFrame> {
        // The inversion commutes with the rotation, so the decomposition of
        // the inverse keeps the same determinant.
        OrthogonalMap::new(self.determinant, self.rotation.inverse())
    }

    fn apply_vector(&self, vector: &Vector<FromFrame>) -> Vector<ToFrame> {
        Vector::new(self.determinant * self.rotation.rotate(&vector.coordinates()))
    }

    fn apply_bivector(&self, bivector: &Bivector<FromFrame>) -> Bivector<ToFrame> {
        // Pseudo-vector: the determinant from the inversion and the one from
        // the pseudo-vector rule cancel.
        Bivector::new(self.rotation.rotate(&bivector.coordinates()))
    }

    fn apply_trivector(&self, trivector: &Trivector<FromFrame>) -> Trivector<ToFrame> {
        Trivector::new(self.determinant * trivector.value())
    }
}

impl<FromFrame: Frame, ThroughFrame: Frame, ToFrame: Frame>
    Mul<OrthogonalMap<FromFrame, ThroughFrame>> for OrthogonalMap<ThroughFrame, ToFrame>
{
    type Output = OrthogonalMap<FromFrame, ToFrame>;

    fn mul(
        self,
        right: OrthogonalMap<FromFrame, ThroughFrame>,
    ) -> OrthogonalMap<FromFrame, ToFrame> {
        OrthogonalMap::new(
            self.determinant * right.determinant,
            self.rotation * right.rotation,
        )
    }
}
