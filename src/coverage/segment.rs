use {
  super::Coverage,
  crate::geometry::{circle_segment_area, Circle, Line}
};
#[cfg(feature = "serde")]
use serde::{Serialize, Deserialize};

/// Closed-form coverage against the continuous line, without raster quantization.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SegmentEstimate;

impl Coverage for SegmentEstimate {
  fn coverage(&self, line: &Line, filter: &Circle) -> f64 {
    if filter.area() <= 0.0 {
      return if line.signed_distance(filter.center) < 0.0 { 1.0 } else { 0.0 };
    }
    (estimate_circle_segment_area(line, filter) / filter.area()).clamp(0.0, 1.0)
  }
}

/// Area of `filter` on the positive side of `line`.
pub fn estimate_circle_segment_area(line: &Line, filter: &Circle) -> f64 {
  circle_segment_area(line.signed_distance(filter.center), filter.radius)
}
