//! Chebyshev series over a closed time interval

use crate::newhall;
use hifitime::Epoch;
use serde::{Deserialize, Serialize};

/// Number of equal divisions of the fit interval used by
/// [`ChebyshevSeries::newhall_approximation`]; the fit consumes
/// `DIVISIONS + 1` position and velocity samples.
pub const DIVISIONS: usize = 8;

/// A polynomial in the Chebyshev basis, valid on `[t_min, t_max]`.
///
/// Coefficient `k` multiplies the degree-`k` Chebyshev polynomial of the
/// normalized time. The series is immutable once built; evaluation and
/// serialization are the only consumers. Equality is structural (same
/// coefficients, same bounds), not functional.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(from = "SeriesMessage", into = "SeriesMessage")]
pub struct ChebyshevSeries {
    coefficients: Vec<f64>,
    t_min: Epoch,
    t_max: Epoch,
    // Cached to save operations at the expense of some accuracy loss.
    t_mean: Epoch,
    two_over_duration: f64, // 1 / s
}

/// Wire shape of a series: the plain coefficients and the interval bounds,
/// each bound round-tripped through [`Epoch`]'s own serialization.
#[derive(Serialize, Deserialize)]
struct SeriesMessage {
    coefficient: Vec<f64>,
    t_min: Epoch,
    t_max: Epoch,
}

impl ChebyshevSeries {
    /// Builds a series from its coefficients.
    ///
    /// Panics if `coefficients` is empty or the interval is degenerate;
    /// both indicate a bug in the caller.
    pub fn new(coefficients: Vec<f64>, t_min: Epoch, t_max: Epoch) -> Self {
        assert!(
            !coefficients.is_empty(),
            "a series needs at least one coefficient"
        );
        assert!(t_min < t_max, "time interval must not be empty");
        let duration = t_max - t_min;
        Self {
            coefficients,
            t_min,
            t_max,
            t_mean: t_min + duration * 0.5,
            two_over_duration: 2.0 / duration.to_seconds(),
        }
    }

    /// Fits a degree-`degree` series to `DIVISIONS + 1` equally spaced
    /// position samples `p` and velocity samples `v` spanning
    /// `[t_min, t_max]`, as a single product against a constant per-degree
    /// matrix (the closed-form solution of the endpoint-constrained
    /// least-squares fit, derived once offline).
    ///
    /// `p[0]` and `v[0]` are the samples at `t_min`. Velocities are in
    /// position units per second; they are rescaled internally to the
    /// normalized time derivative. The fit reproduces position and velocity
    /// exactly at both endpoints and is a least-squares compromise at the
    /// interior samples.
    ///
    /// Panics unless `degree` is in `3..=17` and both sample slices have
    /// exactly `DIVISIONS + 1` entries.
    pub fn newhall_approximation(
        degree: usize,
        p: &[f64],
        v: &[f64],
        t_min: Epoch,
        t_max: Epoch,
    ) -> Self {
        assert!(
            (3..=17).contains(&degree),
            "unsupported fit degree {degree}"
        );
        assert_eq!(DIVISIONS + 1, p.len(), "expected {} position samples", DIVISIONS + 1);
        assert_eq!(DIVISIONS + 1, v.len(), "expected {} velocity samples", DIVISIONS + 1);
        assert!(t_min < t_max, "time interval must not be empty");

        let duration_over_two = (t_max - t_min).to_seconds() * 0.5;

        // Interleave the samples, latest first, velocities converted to
        // d/ds where s is the time normalized to [-1, 1].
        let mut pv = [0.0; 2 * DIVISIONS + 2];
        for (i, (&p_i, &v_i)) in p.iter().zip(v).enumerate() {
            let j = 2 * (DIVISIONS - i);
            pv[j] = p_i;
            pv[j + 1] = v_i * duration_over_two;
        }

        let coefficients = newhall::c_matrix(degree)
            .iter()
            .map(|row| row.iter().zip(&pv).map(|(c, s)| c * s).sum())
            .collect();
        Self::new(coefficients, t_min, t_max)
    }

    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    pub fn degree(&self) -> usize {
        self.coefficients.len() - 1
    }

    pub fn t_min(&self) -> Epoch {
        self.t_min
    }

    pub fn t_max(&self) -> Epoch {
        self.t_max
    }

    /// Whether `t` lies within the validity interval.
    pub fn contains(&self, t: Epoch) -> bool {
        self.t_min <= t && t <= self.t_max
    }

    /// Evaluates the series at `t` by Clenshaw's backward recurrence:
    /// O(degree) time, no explicit Chebyshev polynomials, and none of the
    /// instability of the power basis at high degree.
    ///
    /// `t` may overshoot the validity interval by a small slack to absorb
    /// floating-point roundoff at the boundaries; anything further out
    /// panics, since it means the caller lost track of which segment is
    /// valid when.
    pub fn evaluate(&self, t: Epoch) -> f64 {
        let scaled_t = (t - self.t_mean).to_seconds() * self.two_over_duration;
        let two_scaled_t = scaled_t + scaled_t;
        assert!(
            (-1.1..=1.1).contains(&scaled_t),
            "evaluation outside the validity interval: normalized time {scaled_t}"
        );

        let mut b_kplus2 = 0.0;
        let mut b_kplus1 = 0.0;
        for k in (1..self.coefficients.len()).rev() {
            let b_k = self.coefficients[k] + two_scaled_t * b_kplus1 - b_kplus2;
            b_kplus2 = b_kplus1;
            b_kplus1 = b_k;
        }
        self.coefficients[0] + scaled_t * b_kplus1 - b_kplus2
    }
}

impl PartialEq for ChebyshevSeries {
    fn eq(&self, right: &Self) -> bool {
        self.coefficients == right.coefficients
            && self.t_min == right.t_min
            && self.t_max == right.t_max
    }
}

impl From<SeriesMessage> for ChebyshevSeries {
    fn from(message: SeriesMessage) -> Self {
        ChebyshevSeries::new(message.coefficient, message.t_min, message.t_max)
    }
}

impl From<ChebyshevSeries> for SeriesMessage {
    fn from(series: ChebyshevSeries) -> Self {
        SeriesMessage {
            coefficient: series.coefficients,
            t_min: series.t_min,
            t_max: series.t_max,
        }
    }
}
