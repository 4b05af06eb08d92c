//! Fraction of a circular filter aperture lying on the positive side of a line.
//!
//! Three strategies share the [`Coverage`] interface:
//! - [`ExactPeriodic`]: the line is first quantized onto a periodic raster, then the aperture is
//!   integrated exactly against the resulting staircase. This is the canonical path.
//! - [`SegmentEstimate`]: closed-form circular segment against the un-quantized line.
//! - [`AngleSupersampled`]: [`ExactPeriodic`] averaged over several raster orientations.
//!
//! [`CoverageStrategy`] selects one of them at runtime.

use {
  crate::{
    error::{Error, Result},
    geometry::{Circle, Line}
  }
};
#[cfg(feature = "serde")]
use serde::{Serialize, Deserialize};

mod exact;
mod segment;
mod supersample;
#[cfg(test)] mod tests;

pub use {
  exact::{ExactPeriodic, filter_line},
  segment::{SegmentEstimate, estimate_circle_segment_area},
  supersample::AngleSupersampled
};

pub trait Coverage: Send + Sync {
  /// Fraction in `[0, 1]` of `filter` on the positive side of `line`.
  ///
  /// A filter with zero radius degenerates into a point membership test.
  fn coverage(&self, line: &Line, filter: &Circle) -> f64;

  /// Check the strategy for filters of `radius`.
  fn validate(&self, _radius: f64) -> Result<()> { Ok(()) }
}

#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CoverageStrategy {
  ExactPeriodic(ExactPeriodic),
  SegmentEstimate(SegmentEstimate),
  AngleSupersampled(AngleSupersampled)
}

impl Coverage for CoverageStrategy {
  #[inline]
  fn coverage(&self, line: &Line, filter: &Circle) -> f64 {
    use CoverageStrategy::*;
    match self {
      ExactPeriodic(c) => c.coverage(line, filter),
      SegmentEstimate(c) => c.coverage(line, filter),
      AngleSupersampled(c) => c.coverage(line, filter)
    }
  }

  fn validate(&self, radius: f64) -> Result<()> {
    use CoverageStrategy::*;
    match self {
      ExactPeriodic(c) => c.validate(radius),
      SegmentEstimate(c) => c.validate(radius),
      AngleSupersampled(c) => c.validate(radius)
    }
  }
}

impl From<ExactPeriodic> for CoverageStrategy {
  fn from(c: ExactPeriodic) -> Self { CoverageStrategy::ExactPeriodic(c) } }
impl From<SegmentEstimate> for CoverageStrategy {
  fn from(c: SegmentEstimate) -> Self { CoverageStrategy::SegmentEstimate(c) } }
impl From<AngleSupersampled> for CoverageStrategy {
  fn from(c: AngleSupersampled) -> Self { CoverageStrategy::AngleSupersampled(c) } }

/// Upper bound on the raster columns a single filter may span.
pub const MAX_FILTER_COLUMNS: f64 = 65536.0;

pub(crate) fn validate_period(period: f64) -> Result<()> {
  if period > 0.0 && period.is_finite() { Ok(()) } else { Err(Error::InvalidPeriod(period)) }
}

/// The period must be positive, and a filter of `radius` must span at most
/// [`MAX_FILTER_COLUMNS`] raster columns.
pub(crate) fn validate_raster(period: f64, radius: f64) -> Result<()> {
  validate_period(period)?;
  if 2.0 * radius.max(0.0) / period > MAX_FILTER_COLUMNS {
    return Err(Error::InvalidPeriod(period));
  }
  Ok(())
}
