//! Graded algebra of vectors, bivectors and trivectors
//!
//! All three grades are tagged with the frame their coordinates are expressed
//! in; operations are only defined between operands sharing that frame. A
//! bivector is the wedge of two vectors (the strongly-typed replacement for
//! the cross product), a trivector is the wedge of a vector and a bivector.
//! Keeping the grades distinct is what lets improper maps treat true vectors
//! and pseudo-vectors differently.

use crate::frames::Frame;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};
use std::marker::PhantomData;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// A grade-1 multivector: an ordinary vector expressed in frame `F`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct Vector<F: Frame> {
    coordinates: Vector3<f64>,
    #[serde(skip)]
    frame: PhantomData<F>,
}

/// A grade-2 multivector (pseudo-vector) expressed in frame `F`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct Bivector<F: Frame> {
    coordinates: Vector3<f64>,
    #[serde(skip)]
    frame: PhantomData<F>,
}

/// A grade-3 multivector (pseudo-scalar) expressed in frame `F`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct Trivector<F: Frame> {
    value: f64,
    #[serde(skip)]
    frame: PhantomData<F>,
}

impl<F: Frame> Vector<F> {
    pub fn new(coordinates: Vector3<f64>) -> Self {
        Self {
            coordinates,
            frame: PhantomData,
        }
    }

    pub fn zero() -> Self {
        Self::new(Vector3::zeros())
    }

    pub fn coordinates(&self) -> Vector3<f64> {
        self.coordinates
    }

    /// Inner product of two vectors sharing a frame.
    pub fn dot(&self, right: &Vector<F>) -> f64 {
        self.coordinates.dot(&right.coordinates)
    }

    pub fn norm(&self) -> f64 {
        self.coordinates.norm()
    }
}

impl<F: Frame> Bivector<F> {
    pub fn new(coordinates: Vector3<f64>) -> Self {
        Self {
            coordinates,
            frame: PhantomData,
        }
    }

    pub fn zero() -> Self {
        Self::new(Vector3::zeros())
    }

    pub fn coordinates(&self) -> Vector3<f64> {
        self.coordinates
    }

    /// Inner product of two bivectors sharing a frame.
    pub fn dot(&self, right: &Bivector<F>) -> f64 {
        self.coordinates.dot(&right.coordinates)
    }

    pub fn norm(&self) -> f64 {
        self.coordinates.norm()
    }
}

impl<F: Frame> Trivector<F> {
    pub fn new(value: f64) -> Self {
        Self {
            value,
            frame: PhantomData,
        }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    /// Inner product of two trivectors sharing a frame.
    pub fn dot(&self, right: &Trivector<F>) -> f64 {
        self.value * right.value
    }
}

/// The exterior product.
///
/// Bilinear and alternating; the grade of the result is the sum of the
/// grades of the operands, which must not exceed 3.
pub trait Wedge<Right> {
    type Output;

    fn wedge(self, right: Right) -> Self::Output;
}

impl<F: Frame> Wedge<Vector<F>> for Vector<F> {
    type Output = Bivector<F>;

    fn wedge(self, right: Vector<F>) -> Bivector<F> {
        Bivector::new(self.coordinates.cross(&right.coordinates))
    }
}

impl<F: Frame> Wedge<Bivector<F>> for Vector<F> {
    type Output = Trivector<F>;

    fn wedge(self, right: Bivector<F>) -> Trivector<F> {
        Trivector::new(self.coordinates.dot(&right.coordinates))
    }
}

impl<F: Frame> Wedge<Vector<F>> for Bivector<F> {
    type Output = Trivector<F>;

    fn wedge(self, right: Vector<F>) -> Trivector<F> {
        Trivector::new(self.coordinates.dot(&right.coordinates))
    }
}

/// Lie bracket on bivectors, i.e. on so(3).
pub fn commutator<F: Frame>(left: &Bivector<F>, right: &Bivector<F>) -> Bivector<F> {
    Bivector::new(left.coordinates.cross(&right.coordinates))
}

// Duality actions. A bivector acts on a vector as the cross product of their
// coordinates, and multiplying a bivector by a trivector lowers its grade to
// a vector. These are the pieces of the Lagrange identity
//   a * commutator(β, γ) == β * wedge(a, γ) - γ * wedge(a, β).

impl<F: Frame> Mul<Bivector<F>> for Vector<F> {
    type Output = Vector<F>;

    fn mul(self, right: Bivector<F>) -> Vector<F> {
        Vector::new(self.coordinates.cross(&right.coordinates))
    }
}

impl<F: Frame> Mul<Vector<F>> for Bivector<F> {
    type Output = Vector<F>;

    fn mul(self, right: Vector<F>) -> Vector<F> {
        Vector::new(self.coordinates.cross(&right.coordinates))
    }
}

impl<F: Frame> Mul<Trivector<F>> for Bivector<F> {
    type Output = Vector<F>;

    fn mul(self, right: Trivector<F>) -> Vector<F> {
        Vector::new(self.coordinates * right.value)
    }
}

macro_rules! vector_space {
    ($name:ident, $field:ident, $zero:expr) => {
        impl<F: Frame> Add for $name<F> {
            type Output = $name<F>;

            fn add(self, right: $name<F>) -> $name<F> {
                $name::new(self.$field + right.$field)
            }
        }

        impl<F: Frame> Sub for $name<F> {
            type Output = $name<F>;

            fn sub(self, right: $name<F>) -> $name<F> {
                $name::new(self.$field - right.$field)
            }
        }

        impl<F: Frame> Neg for $name<F> {
            type Output = $name<F>;

            fn neg(self) -> $name<F> {
                $name::new(-self.$field)
            }
        }

        impl<F: Frame> Mul<f64> for $name<F> {
            type Output = $name<F>;

            fn mul(self, right: f64) -> $name<F> {
                $name::new(self.$field * right)
            }
        }

        impl<F: Frame> Mul<$name<F>> for f64 {
            type Output = $name<F>;

            fn mul(self, right: $name<F>) -> $name<F> {
                $name::new(right.$field * self)
            }
        }

        impl<F: Frame> Div<f64> for $name<F> {
            type Output = $name<F>;

            fn div(self, right: f64) -> $name<F> {
                $name::new(self.$field / right)
            }
        }

        impl<F: Frame> Default for $name<F> {
            fn default() -> Self {
                $name::new($zero)
            }
        }
    };
}

vector_space!(Vector, coordinates, Vector3::zeros());
vector_space!(Bivector, coordinates, Vector3::zeros());
vector_space!(Trivector, value, 0.0);
