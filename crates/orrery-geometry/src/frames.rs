//! Reference frame tags
//!
//! A frame is a compile-time identity only. It is never constructed and has
//! no runtime representation; it exists solely as a type parameter on the
//! algebra so that quantities expressed in different coordinate systems
//! cannot be combined by accident.

use std::fmt::Debug;

/// Marker for a reference frame.
///
/// Implementors are zero-sized unit structs:
///
/// ```
/// use orrery_geometry::Frame;
///
/// #[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// struct Ecliptic;
/// impl Frame for Ecliptic {}
/// ```
pub trait Frame: Copy + Clone + Debug + PartialEq + Eq + 'static {}
