//! Gravitational N-body integration
//!
//! Massive and massless bodies move under mutual Newtonian gravity; a
//! fixed-step symplectic integrator advances their frame-tagged trajectories
//! with long-term energy drift bounded by the step size, not by the number of
//! steps. The retained samples are what the fitting layer downstream
//! compresses into Chebyshev segments.

pub mod body;
pub mod frames;
mod gravity;
pub mod integrator;
pub mod trajectory;

pub use body::Body;
pub use frames::Barycentric;
pub use integrator::SymplecticIntegrator;
pub use trajectory::{DegreesOfFreedom, Trajectory};
