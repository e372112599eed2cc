//! Fixed-step symplectic integration
//!
//! A symplectic partitioned scheme alternates kinematic stages (positions
//! advance along current velocities) with force stages (velocities absorb
//! the gravitational accelerations at the current positions). The
//! composition conserves a shadow Hamiltonian exactly, so energy and angular
//! momentum drift stay bounded by a power of the step size over arbitrarily
//! long spans instead of growing with the number of steps.

use crate::gravity::accumulate_accelerations;
use crate::trajectory::{DegreesOfFreedom, Trajectory};
use hifitime::{Duration, Epoch};
use nalgebra::Vector3;
use orrery_geometry::{Frame, Vector};

/// A symplectic partitioned scheme: per-stage drift (position) and kick
/// (velocity) weights, each summing to one step.
#[derive(Clone, Debug, PartialEq)]
pub struct SymplecticIntegrator {
    order: u32,
    drift_weights: Vec<f64>,
    kick_weights: Vec<f64>,
}

impl SymplecticIntegrator {
    /// Second-order leapfrog: drift a half step, kick a full step at the
    /// midpoint positions, drift the other half. One force evaluation per
    /// step.
    pub fn leapfrog() -> Self {
        Self {
            order: 2,
            drift_weights: vec![0.5, 0.5],
            kick_weights: vec![1.0, 0.0],
        }
    }

    /// Fourth-order Yoshida composition of three leapfrog steps, the middle
    /// one taken backwards.
    pub fn yoshida4() -> Self {
        let cbrt2 = 2.0_f64.cbrt();
        let w1 = 1.0 / (2.0 - cbrt2);
        let w0 = -cbrt2 * w1;
        Self {
            order: 4,
            drift_weights: vec![w1 / 2.0, (w0 + w1) / 2.0, (w0 + w1) / 2.0, w1 / 2.0],
            kick_weights: vec![w1, w0, w1, 0.0],
        }
    }

    /// An arbitrary drift/kick scheme, for schemes not provided here.
    ///
    /// Panics unless both weight sequences have the same, nonzero length and
    /// each sums to 1 (the stages must compose to exactly one step).
    pub fn from_coefficients(order: u32, drift_weights: Vec<f64>, kick_weights: Vec<f64>) -> Self {
        assert!(!drift_weights.is_empty(), "a scheme needs at least one stage");
        assert_eq!(
            drift_weights.len(),
            kick_weights.len(),
            "drift and kick stages must pair up"
        );
        for (name, weights) in [("drift", &drift_weights), ("kick", &kick_weights)] {
            let sum: f64 = weights.iter().sum();
            assert!(
                (sum - 1.0).abs() <= 1e-12,
                "{name} weights sum to {sum}, not 1"
            );
        }
        Self {
            order,
            drift_weights,
            kick_weights,
        }
    }

    pub fn order(&self) -> u32 {
        self.order
    }

    pub fn stages(&self) -> usize {
        self.drift_weights.len()
    }

    /// Advances every trajectory to `t₀ + k·Δt` for the largest `k` with
    /// `t₀ + k·Δt ≤ tmax`, where `t₀` is the trajectories' common last time.
    ///
    /// Bodies with a nonzero gravitational parameter attract everything;
    /// massless bodies attract nothing, and their presence does not perturb
    /// the massive bodies in any way, down to the rounding of individual
    /// operations. Every `sampling_period`-th computed state is appended to
    /// the trajectories, plus always the final one, so that all trajectories
    /// leave with the same last time they entered with, advanced.
    ///
    /// Panics if the trajectory set is empty, if any trajectory is empty or
    /// disagrees on the last time, if `Δt` is not positive, or if
    /// `sampling_period` is zero; each of those is a caller bug.
    pub fn integrate<F: Frame>(
        &self,
        trajectories: &mut [Trajectory<F>],
        tmax: Epoch,
        dt: Duration,
        sampling_period: usize,
    ) {
        assert!(!trajectories.is_empty(), "nothing to integrate");
        assert!(dt > Duration::ZERO, "time step must be positive");
        assert!(sampling_period >= 1, "sampling period must be at least 1");
        let t_initial = trajectories[0].last_time();
        for trajectory in trajectories.iter() {
            assert!(!trajectory.is_empty(), "cannot integrate an empty trajectory");
            assert_eq!(
                t_initial,
                trajectory.last_time(),
                "all trajectories must share the same last time"
            );
        }

        // Massive bodies first, so the pairwise loops see contiguous ranges
        // and the massive-body arithmetic is independent of how many
        // massless bodies tag along.
        let mut order: Vec<usize> = (0..trajectories.len()).collect();
        order.sort_by_key(|&i| trajectories[i].body().is_massless());
        let massive_count = order
            .iter()
            .filter(|&&i| !trajectories[i].body().is_massless())
            .count();

        let gravitational_parameters: Vec<f64> = order
            .iter()
            .map(|&i| trajectories[i].body().gravitational_parameter())
            .collect();
        let mut positions: Vec<Vector3<f64>> = order
            .iter()
            .map(|&i| trajectories[i].last_state().position.coordinates())
            .collect();
        let mut velocities: Vec<Vector3<f64>> = order
            .iter()
            .map(|&i| trajectories[i].last_state().velocity.coordinates())
            .collect();
        let mut accelerations = vec![Vector3::zeros(); order.len()];

        let steps = ((tmax - t_initial).to_seconds() / dt.to_seconds()).floor() as u64;
        let h = dt.to_seconds();
        let mut retained = 0_u64;

        for step in 1..=steps {
            for stage in 0..self.stages() {
                let drift = self.drift_weights[stage];
                if drift != 0.0 {
                    for (position, velocity) in positions.iter_mut().zip(&velocities) {
                        *position += drift * h * *velocity;
                    }
                }
                let kick = self.kick_weights[stage];
                if kick != 0.0 {
                    accumulate_accelerations(
                        &gravitational_parameters,
                        &positions,
                        massive_count,
                        &mut accelerations,
                    );
                    for (velocity, acceleration) in velocities.iter_mut().zip(&accelerations) {
                        *velocity += kick * h * *acceleration;
                    }
                }
            }

            if step % sampling_period as u64 == 0 || step == steps {
                let t = t_initial + dt * step as f64;
                for (slot, &i) in order.iter().enumerate() {
                    trajectories[i].append(
                        t,
                        DegreesOfFreedom {
                            position: Vector::new(positions[slot]),
                            velocity: Vector::new(velocities[slot]),
                        },
                    );
                }
                retained += 1;
            }
        }

        tracing::debug!(
            bodies = trajectories.len(),
            massive = massive_count,
            steps,
            retained,
            "integrated system to {}",
            trajectories[0].last_time()
        );
    }
}
