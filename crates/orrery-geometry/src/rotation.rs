//! Rotations between frames

use crate::frames::Frame;
use crate::grassmann::{Bivector, Trivector, Vector};
use crate::linear_map::LinearMap;
use crate::sign::Sign;
use nalgebra::{Unit, UnitQuaternion, Vector3};
use std::marker::PhantomData;
use std::ops::Mul;

/// A proper rotation taking coordinates from `FromFrame` to `ToFrame`,
/// represented by a unit quaternion.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rotation<FromFrame: Frame, ToFrame: Frame> {
    quaternion: UnitQuaternion<f64>,
    frames: PhantomData<(FromFrame, ToFrame)>,
}

impl<FromFrame: Frame, ToFrame: Frame> Rotation<FromFrame, ToFrame> {
    pub fn new(quaternion: UnitQuaternion<f64>) -> Self {
        Self {
            quaternion,
            frames: PhantomData,
        }
    }

    pub fn identity() -> Self {
        Self::new(UnitQuaternion::identity())
    }

    /// Rotation by `angle` radians about `axis` (need not be normalized).
    pub fn from_axis_angle(axis: Vector3<f64>, angle: f64) -> Self {
        Self::new(UnitQuaternion::from_axis_angle(
            &Unit::new_normalize(axis),
            angle,
        ))
    }

    pub fn quaternion(&self) -> UnitQuaternion<f64> {
        self.quaternion
    }

    /// The rotation's action on raw coordinates.
    pub fn rotate(&self, coordinates: &Vector3<f64>) -> Vector3<f64> {
        self.quaternion.transform_vector(coordinates)
    }
}

impl<FromFrame: Frame, ToFrame: Frame> LinearMap<FromFrame, ToFrame>
    for Rotation<FromFrame, ToFrame>
{
    type Inverse = Rotation<ToFrame, FromFrame>;

    fn determinant(&self) -> Sign {
        Sign::POSITIVE
    }

    fn inverse(&self) -> Rotation<ToFrame, FromFrame> {
        Rotation::new(self.quaternion.inverse())
    }

    fn apply_vector(&self, vector: &Vector<FromFrame>) -> Vector<ToFrame> {
        Vector::new(self.rotate(&vector.coordinates()))
    }

    fn apply_bivector(&self, bivector: &Bivector<FromFrame>) -> Bivector<ToFrame> {
        Bivector::new(self.rotate(&bivector.coordinates()))
    }

    fn apply_trivector(&self, trivector: &Trivector<FromFrame>) -> Trivector<ToFrame> {
        Trivector::new(trivector.value())
    }
}

impl<FromFrame: Frame, ThroughFrame: Frame, ToFrame: Frame>
    Mul<Rotation<FromFrame, ThroughFrame>> for Rotation<ThroughFrame, ToFrame>
{
    type Output = Rotation<FromFrame, ToFrame>;

    fn mul(self, right: Rotation<FromFrame, ThroughFrame>) -> Rotation<FromFrame, ToFrame> {
        Rotation::new(self.quaternion * right.quaternion)
    }
}
