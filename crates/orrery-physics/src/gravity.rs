//! Pairwise gravitational accelerations

use nalgebra::Vector3;

/// Accumulates Newtonian gravitational accelerations into `accelerations`.
///
/// Bodies are laid out massive-first: indices below `massive_count` both
/// exert and feel gravity, the rest only feel it. Massive pairs are walked
/// once, writing both directions; massless bodies then collect the field of
/// every massive body. Gravity from a massless body is never computed, so
/// adding one leaves the massive bodies' arithmetic untouched.
pub(crate) fn accumulate_accelerations(
    gravitational_parameters: &[f64],
    positions: &[Vector3<f64>],
    massive_count: usize,
    accelerations: &mut [Vector3<f64>],
) {
    for acceleration in accelerations.iter_mut() {
        *acceleration = Vector3::zeros();
    }

    for i in 0..massive_count {
        for j in (i + 1)..massive_count {
            let displacement = positions[j] - positions[i];
            let distance_squared = displacement.norm_squared();
            let inverse_cube = 1.0 / (distance_squared * distance_squared.sqrt());
            accelerations[i] += gravitational_parameters[j] * inverse_cube * displacement;
            accelerations[j] -= gravitational_parameters[i] * inverse_cube * displacement;
        }
    }

    for i in massive_count..positions.len() {
        for j in 0..massive_count {
            let displacement = positions[j] - positions[i];
            let distance_squared = displacement.norm_squared();
            let inverse_cube = 1.0 / (distance_squared * distance_squared.sqrt());
            accelerations[i] += gravitational_parameters[j] * inverse_cube * displacement;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opposite_pulls() {
        let mu = [2.0, 8.0];
        let positions = [Vector3::new(0.0, 0.0, 0.0), Vector3::new(2.0, 0.0, 0.0)];
        let mut accelerations = [Vector3::zeros(); 2];
        accumulate_accelerations(&mu, &positions, 2, &mut accelerations);

        // a_0 = μ_1 / d², toward body 1; a_1 = μ_0 / d², toward body 0.
        assert!((accelerations[0] - Vector3::new(2.0, 0.0, 0.0)).norm() < 1e-15);
        assert!((accelerations[1] - Vector3::new(-0.5, 0.0, 0.0)).norm() < 1e-15);
    }

    #[test]
    fn test_massless_feels_but_does_not_pull() {
        let mu = [4.0, 0.0];
        let positions = [Vector3::zeros(), Vector3::new(0.0, 2.0, 0.0)];
        let mut accelerations = [Vector3::zeros(); 2];
        accumulate_accelerations(&mu, &positions, 1, &mut accelerations);

        assert_eq!(Vector3::zeros(), accelerations[0]);
        assert!((accelerations[1] - Vector3::new(0.0, -1.0, 0.0)).norm() < 1e-15);
    }
}
