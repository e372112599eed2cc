//! Time-ordered motion of one body

use crate::body::Body;
use hifitime::Epoch;
use orrery_geometry::{Frame, Vector};

/// Position and velocity at one instant, expressed in frame `F`
/// (meters, meters per second).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DegreesOfFreedom<F: Frame> {
    pub position: Vector<F>,
    pub velocity: Vector<F>,
}

/// An append-only, strictly time-increasing sequence of states for one body.
///
/// The trajectory owns its [`Body`], so a set of trajectories is a set of
/// distinct bodies by construction. The integrator extends trajectories in
/// place; nothing ever removes or rewrites a sample.
#[derive(Clone, Debug)]
pub struct Trajectory<F: Frame> {
    body: Body,
    times: Vec<Epoch>,
    states: Vec<DegreesOfFreedom<F>>,
}

impl<F: Frame> Trajectory<F> {
    pub fn new(body: Body) -> Self {
        Self {
            body,
            times: Vec::new(),
            states: Vec::new(),
        }
    }

    pub fn body(&self) -> &Body {
        &self.body
    }

    /// Appends a state. Panics unless `t` is strictly after the last sample.
    pub fn append(&mut self, t: Epoch, state: DegreesOfFreedom<F>) {
        if let Some(&last) = self.times.last() {
            assert!(last < t, "samples must be appended in increasing time order");
        }
        self.times.push(t);
        self.states.push(state);
    }

    pub fn len(&self) -> usize {
        self.times.len()
    }

    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// Time of the newest sample. Panics on an empty trajectory.
    pub fn last_time(&self) -> Epoch {
        *self.times.last().expect("trajectory has no samples")
    }

    /// Newest sample. Panics on an empty trajectory.
    pub fn last_state(&self) -> DegreesOfFreedom<F> {
        *self.states.last().expect("trajectory has no samples")
    }

    pub fn times(&self) -> &[Epoch] {
        &self.times
    }

    pub fn states(&self) -> &[DegreesOfFreedom<F>] {
        &self.states
    }

    pub fn iter(&self) -> impl Iterator<Item = (Epoch, &DegreesOfFreedom<F>)> {
        self.times.iter().copied().zip(self.states.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frames::Barycentric;
    use nalgebra::Vector3;
    use orrery_geometry::Vector;

    fn state(x: f64) -> DegreesOfFreedom<Barycentric> {
        DegreesOfFreedom {
            position: Vector::new(Vector3::new(x, 0.0, 0.0)),
            velocity: Vector::new(Vector3::zeros()),
        }
    }

    #[test]
    fn test_append_and_query() {
        let mut trajectory = Trajectory::new(Body::new(1.0));
        let t0 = Epoch::from_tai_seconds(0.0);
        let t1 = Epoch::from_tai_seconds(10.0);
        trajectory.append(t0, state(1.0));
        trajectory.append(t1, state(2.0));

        assert_eq!(2, trajectory.len());
        assert_eq!(t1, trajectory.last_time());
        assert_eq!(state(2.0), trajectory.last_state());
        assert_eq!(
            vec![(t0, &state(1.0)), (t1, &state(2.0))],
            trajectory.iter().collect::<Vec<_>>()
        );
    }

    #[test]
    #[should_panic(expected = "increasing time order")]
    fn test_append_out_of_order() {
        let mut trajectory = Trajectory::new(Body::new(1.0));
        trajectory.append(Epoch::from_tai_seconds(10.0), state(1.0));
        trajectory.append(Epoch::from_tai_seconds(10.0), state(2.0));
    }

    #[test]
    #[should_panic(expected = "no samples")]
    fn test_empty_last_time() {
        Trajectory::<Barycentric>::new(Body::massless()).last_time();
    }
}
