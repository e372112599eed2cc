//! Polynomial compression of time series
//!
//! Long integrations are expensive to replay; a Chebyshev series fitted over
//! a bounded time window answers position/velocity queries in O(degree) with
//! no integration at all. This crate holds the series representation, its
//! Clenshaw evaluator, the fixed-matrix Newhall fitting constructor that
//! turns 9 integrated samples into coefficients with a single matrix-vector
//! product, and the piecewise container the fitted segments are stored in.

pub mod chebyshev;
mod newhall;
pub mod piecewise;

pub use chebyshev::ChebyshevSeries;
pub use piecewise::{PiecewiseChebyshev, PiecewiseError};
