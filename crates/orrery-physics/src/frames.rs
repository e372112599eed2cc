//! Frames used by the integration

use orrery_geometry::Frame;

/// The inertial frame of the system barycenter, in which the equations of
/// motion take their force-free form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Barycentric;

impl Frame for Barycentric {}
