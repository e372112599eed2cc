//! Bodies, reduced to what gravity needs

use serde::{Deserialize, Serialize};

/// A body participating in the integration.
///
/// Everything about a body except its standard gravitational parameter is
/// somebody else's concern; the parameter is all the acceleration sum reads.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Body {
    /// μ = GM (m³/s²); zero for a massless body.
    gravitational_parameter: f64,
}

impl Body {
    /// Panics on a non-finite or negative parameter.
    pub fn new(gravitational_parameter: f64) -> Self {
        assert!(
            gravitational_parameter.is_finite() && gravitational_parameter >= 0.0,
            "invalid gravitational parameter {gravitational_parameter}"
        );
        Self {
            gravitational_parameter,
        }
    }

    /// A body that feels gravity but exerts none (probes, spacecraft).
    pub fn massless() -> Self {
        Self {
            gravitational_parameter: 0.0,
        }
    }

    pub fn gravitational_parameter(&self) -> f64 {
        self.gravitational_parameter
    }

    pub fn is_massless(&self) -> bool {
        self.gravitational_parameter == 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_masslessness() {
        assert!(Body::massless().is_massless());
        assert!(!Body::new(3.986e14).is_massless());
    }

    #[test]
    #[should_panic(expected = "invalid gravitational parameter")]
    fn test_negative_parameter() {
        Body::new(-1.0);
    }
}
