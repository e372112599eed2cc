//! Axis permutations between frames
//!
//! The six permutations of the coordinate axes form the symmetric group on
//! three elements. Composition and inversion are table-driven: the group is
//! small enough that the tables are exhaustive, and looking them up is both
//! faster and less error-prone than recomputing index arithmetic.

use crate::frames::Frame;
use crate::grassmann::{Bivector, Trivector, Vector};
use crate::linear_map::LinearMap;
use crate::orthogonal::OrthogonalMap;
use crate::rotation::Rotation;
use crate::sign::Sign;
use nalgebra::{Quaternion, UnitQuaternion, Vector3};
use serde::{Deserialize, Serialize};
use std::f64::consts::FRAC_1_SQRT_2;
use std::marker::PhantomData;
use std::ops::Mul;

/// The six permutations of the coordinate axes, named by where the axes end
/// up: `Yzx` maps (x, y, z) to (y, z, x).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CoordinatePermutation {
    Xyz,
    Yzx,
    Zxy,
    Xzy,
    Zyx,
    Yxz,
}

use CoordinatePermutation::{Xyz, Xzy, Yxz, Yzx, Zxy, Zyx};

/// Source index of each result component.
const INDICES: [[usize; 3]; 6] = [
    [0, 1, 2], // Xyz
    [1, 2, 0], // Yzx
    [2, 0, 1], // Zxy
    [0, 2, 1], // Xzy
    [2, 1, 0], // Zyx
    [1, 0, 2], // Yxz
];

/// Group inverses. The two 3-cycles invert to each other, everything else is
/// an involution.
const INVERSE: [CoordinatePermutation; 6] = [Xyz, Zxy, Yzx, Xzy, Zyx, Yxz];

/// Composition table, indexed `[left][right]` where `right` is applied first.
const MULTIPLICATION: [[CoordinatePermutation; 6]; 6] = [
    [Xyz, Yzx, Zxy, Xzy, Zyx, Yxz],
    [Yzx, Zxy, Xyz, Zyx, Yxz, Xzy],
    [Zxy, Xyz, Yzx, Yxz, Xzy, Zyx],
    [Xzy, Yxz, Zyx, Xyz, Zxy, Yzx],
    [Zyx, Xzy, Yxz, Yzx, Xyz, Zxy],
    [Yxz, Zyx, Xzy, Zxy, Yzx, Xyz],
];

impl CoordinatePermutation {
    pub const ALL: [CoordinatePermutation; 6] = [Xyz, Yzx, Zxy, Xzy, Zyx, Yxz];

    /// Even permutations are the identity and the two 3-cycles.
    pub fn is_even(&self) -> bool {
        matches!(self, Xyz | Yzx | Zxy)
    }
}

/// An axis permutation taking coordinates from `FromFrame` to `ToFrame`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Permutation<FromFrame: Frame, ToFrame: Frame> {
    permutation: CoordinatePermutation,
    frames: PhantomData<(FromFrame, ToFrame)>,
}

impl<FromFrame: Frame, ToFrame: Frame> Permutation<FromFrame, ToFrame> {
    pub fn new(permutation: CoordinatePermutation) -> Self {
        Self {
            permutation,
            frames: PhantomData,
        }
    }

    /// The neutral element.
    pub fn identity() -> Self {
        Self::new(Xyz)
    }

    pub fn coordinate_permutation(&self) -> CoordinatePermutation {
        self.permutation
    }

    /// The permutation's action on raw coordinates.
    pub fn permute(&self, coordinates: &Vector3<f64>) -> Vector3<f64> {
        let indices = &INDICES[self.permutation as usize];
        Vector3::new(
            coordinates[indices[0]],
            coordinates[indices[1]],
            coordinates[indices[2]],
        )
    }

    /// Widens the permutation into the equivalent general orthogonal map,
    /// for callers written against that interface.
    ///
    /// Each permutation is represented by a fixed unit quaternion (composed
    /// with a central inversion when the permutation is odd, which the
    /// orthogonal map records in its determinant).
    pub fn forget(&self) -> OrthogonalMap<FromFrame, ToFrame> {
        let quaternion = match self.permutation {
            Xyz => Quaternion::new(1.0, 0.0, 0.0, 0.0),
            Yzx => Quaternion::new(0.5, -0.5, -0.5, -0.5),
            Zxy => Quaternion::new(0.5, 0.5, 0.5, 0.5),
            Xzy => Quaternion::new(0.0, 0.0, -FRAC_1_SQRT_2, FRAC_1_SQRT_2),
            Zyx => Quaternion::new(0.0, -FRAC_1_SQRT_2, 0.0, FRAC_1_SQRT_2),
            Yxz => Quaternion::new(0.0, -FRAC_1_SQRT_2, FRAC_1_SQRT_2, 0.0),
        };
        OrthogonalMap::new(
            self.determinant(),
            Rotation::new(UnitQuaternion::new_unchecked(quaternion)),
        )
    }
}

impl<FromFrame: Frame, ToFrame: Frame> LinearMap<FromFrame, ToFrame>
    for Permutation<FromFrame, ToFrame>
{
    type Inverse = Permutation<ToFrame, FromFrame>;

    fn determinant(&self) -> Sign {
        if self.permutation.is_even() {
            Sign::POSITIVE
        } else {
            Sign::NEGATIVE
        }
    }

    fn inverse(&self) -> Permutation<ToFrame, FromFrame> {
        Permutation::new(INVERSE[self.permutation as usize])
    }

    fn apply_vector(&self, vector: &Vector<FromFrame>) -> Vector<ToFrame> {
        Vector::new(self.permute(&vector.coordinates()))
    }

    fn apply_bivector(&self, bivector: &Bivector<FromFrame>) -> Bivector<ToFrame> {
        Bivector::new(self.determinant() * self.permute(&bivector.coordinates()))
    }

    fn apply_trivector(&self, trivector: &Trivector<FromFrame>) -> Trivector<ToFrame> {
        Trivector::new(self.determinant() * trivector.value())
    }
}

impl<FromFrame: Frame, ThroughFrame: Frame, ToFrame: Frame>
    Mul<Permutation<FromFrame, ThroughFrame>> for Permutation<ThroughFrame, ToFrame>
{
    type Output = Permutation<FromFrame, ToFrame>;

    fn mul(self, right: Permutation<FromFrame, ThroughFrame>) -> Permutation<FromFrame, ToFrame> {
        Permutation::new(MULTIPLICATION[self.permutation as usize][right.permutation as usize])
    }
}
