//! Signs for orientation and parity

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Mul;

/// A sign, +1 or -1, closed under multiplication.
///
/// Serializes as its single `negative` flag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Sign {
    negative: bool,
}

impl Sign {
    pub const POSITIVE: Sign = Sign { negative: false };
    pub const NEGATIVE: Sign = Sign { negative: true };

    /// Sign of a scalar; zero counts as positive.
    pub fn of<T: PartialOrd + Default>(scalar: T) -> Self {
        Self {
            negative: scalar < T::default(),
        }
    }

    pub fn is_positive(&self) -> bool {
        !self.negative
    }

    pub fn is_negative(&self) -> bool {
        self.negative
    }
}

impl Mul for Sign {
    type Output = Sign;

    fn mul(self, right: Sign) -> Sign {
        Sign {
            negative: self.negative != right.negative,
        }
    }
}

impl Mul<f64> for Sign {
    type Output = f64;

    fn mul(self, right: f64) -> f64 {
        if self.negative {
            -right
        } else {
            right
        }
    }
}

impl Mul<Vector3<f64>> for Sign {
    type Output = Vector3<f64>;

    fn mul(self, right: Vector3<f64>) -> Vector3<f64> {
        if self.negative {
            -right
        } else {
            right
        }
    }
}

impl fmt::Display for Sign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(if self.negative { "-" } else { "+" })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn construction() {
        assert!(Sign::of(42.0).is_positive());
        assert!(Sign::of(-0.1).is_negative());
        assert!(Sign::of(0.0).is_positive());
        assert!(Sign::of(-7_i64).is_negative());
    }

    #[test]
    fn multiplication() {
        let plus = Sign::of(1.0);
        let minus = Sign::of(-1.0);

        assert_eq!(plus, plus * plus);
        assert_eq!(minus, plus * minus);
        assert_eq!(minus, minus * plus);
        assert_eq!(plus, minus * minus);

        // Commutative and associative.
        for a in [plus, minus] {
            for b in [plus, minus] {
                assert_eq!(a * b, b * a);
                for c in [plus, minus] {
                    assert_eq!((a * b) * c, a * (b * c));
                }
            }
        }
    }

    #[test]
    fn applied_to_scalars() {
        assert_eq!(3.5, Sign::POSITIVE * 3.5);
        assert_eq!(-3.5, Sign::NEGATIVE * 3.5);
    }

    #[test]
    fn message_round_trip() {
        let json = serde_json::to_string(&Sign::NEGATIVE).unwrap();
        assert_eq!(json, r#"{"negative":true}"#);
        let back: Sign = serde_json::from_str(&json).unwrap();
        assert_eq!(Sign::NEGATIVE, back);
    }
}
