//! Piecewise series covering a long time span
//!
//! The fitting loop upstream produces one [`ChebyshevSeries`] per time
//! window; this container keeps the pieces sorted and answers lookups. It is
//! the serializable shape the rest of the system queries instead of
//! re-running the integration.

use crate::chebyshev::ChebyshevSeries;
use anyhow::Result;
use hifitime::Epoch;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PiecewiseError {
    #[error("no segment covers {0}")]
    OutOfRange(Epoch),
}

/// An ordered sequence of Chebyshev segments.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PiecewiseChebyshev {
    segments: Vec<ChebyshevSeries>,
}

impl PiecewiseChebyshev {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a segment, keeping the sequence sorted by start time for lookup.
    pub fn add_segment(&mut self, segment: ChebyshevSeries) {
        self.segments.push(segment);
        self.segments.sort_by_key(|s| s.t_min());
    }

    pub fn segments(&self) -> &[ChebyshevSeries] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Earliest covered instant, if any segment is present.
    pub fn t_min(&self) -> Option<Epoch> {
        self.segments.first().map(|s| s.t_min())
    }

    /// Latest covered instant, if any segment is present.
    pub fn t_max(&self) -> Option<Epoch> {
        self.segments.iter().map(|s| s.t_max()).max()
    }

    /// The segment whose validity interval covers `t`, if any.
    pub fn find(&self, t: Epoch) -> Option<&ChebyshevSeries> {
        // Few segments are active at typical spans; a scan beats keeping an
        // index structure up to date.
        self.segments.iter().find(|s| s.contains(t))
    }

    /// Evaluates the covering segment at `t`; `None` outside every segment.
    pub fn evaluate(&self, t: Epoch) -> Option<f64> {
        self.find(t).map(|s| s.evaluate(t))
    }

    /// Like [`Self::evaluate`], with a typed error for callers that treat a
    /// gap as failure rather than absence.
    pub fn try_evaluate(&self, t: Epoch) -> Result<f64, PiecewiseError> {
        self.find(t)
            .map(|s| s.evaluate(t))
            .ok_or(PiecewiseError::OutOfRange(t))
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(seconds: f64) -> Epoch {
        Epoch::from_tai_seconds(seconds)
    }

    fn constant_segment(value: f64, t_min: f64, t_max: f64) -> ChebyshevSeries {
        ChebyshevSeries::new(vec![value], t(t_min), t(t_max))
    }

    #[test]
    fn test_lookup_picks_covering_segment() {
        let mut pieces = PiecewiseChebyshev::new();
        // Inserted out of order; lookup must not care.
        pieces.add_segment(constant_segment(2.0, 10.0, 20.0));
        pieces.add_segment(constant_segment(1.0, 0.0, 10.0));

        assert_eq!(Some(1.0), pieces.evaluate(t(5.0)));
        assert_eq!(Some(2.0), pieces.evaluate(t(15.0)));
        assert_eq!(Some(t(0.0)), pieces.t_min());
        assert_eq!(Some(t(20.0)), pieces.t_max());
    }

    #[test]
    fn test_gap_is_absence() {
        let mut pieces = PiecewiseChebyshev::new();
        pieces.add_segment(constant_segment(1.0, 0.0, 10.0));
        pieces.add_segment(constant_segment(2.0, 20.0, 30.0));

        assert_eq!(None, pieces.evaluate(t(15.0)));
        assert!(matches!(
            pieces.try_evaluate(t(15.0)),
            Err(PiecewiseError::OutOfRange(_))
        ));
    }

    #[test]
    fn test_round_trip() {
        let mut pieces = PiecewiseChebyshev::new();
        pieces.add_segment(constant_segment(1.5, 0.0, 10.0));
        let json = serde_json::to_string(&pieces).unwrap();
        let back: PiecewiseChebyshev = serde_json::from_str(&json).unwrap();
        assert_eq!(pieces, back);
    }
}
