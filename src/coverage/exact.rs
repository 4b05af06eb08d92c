use {
  super::{Coverage, validate_raster},
  crate::{
    error::Result,
    geometry::{box_circle_area, Circle, Line, P2, Rect},
    raster::{rasterize, rasterize_line_y}
  }
};
#[cfg(feature = "serde")]
use serde::{Serialize, Deserialize};

// below this, the slope of a line is treated as infinite
const VERTICAL_EPSILON: f64 = 1e-9;

/// Exact coverage against the raster-quantized line.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ExactPeriodic {
  pub period: f64
}

impl ExactPeriodic {
  pub fn new(period: f64) -> Self {
    ExactPeriodic { period }
  }
}

impl Coverage for ExactPeriodic {
  #[inline]
  fn coverage(&self, line: &Line, filter: &Circle) -> f64 {
    filter_line(line, self.period, filter)
  }

  fn validate(&self, radius: f64) -> Result<()> {
    validate_raster(self.period, radius)
  }
}

/// Fraction of `filter` on the positive side of `line` quantized onto a raster of `period`.
///
/// Samples farther than `radius + period` from the line are fully on one side, since the
/// quantized staircase never strays that far from the line. The filter is integrated over
/// `2·radius / period` raster columns; see [`Coverage::validate`].
pub fn filter_line(line: &Line, period: f64, filter: &Circle) -> f64 {
  let reach = filter.radius.max(0.0) + period;
  let distance = line.signed_distance(filter.center);
  if distance > reach { return 0.0; }
  if distance < -reach { return 1.0; }

  // keep the slope finite
  let (line, filter) = if line.normal.y.abs() < VERTICAL_EPSILON {
    (line.transpose(), filter.transpose())
  } else {
    (*line, *filter)
  };

  let below = fraction_below_staircase(&line, period, &filter);
  if line.normal.y > 0.0 { below } else { 1.0 - below }
}

// fraction of the filter with `y` less than the quantized line
fn fraction_below_staircase(line: &Line, period: f64, filter: &Circle) -> f64 {
  let (k, d) = line.slope_intercept();
  let Circle { center, radius } = *filter;
  let half_period = period * 0.5;
  let first = rasterize(period, center.x - radius.max(0.0));

  // radius zero, or small enough for the area to underflow
  if filter.area() <= 0.0 {
    let r1 = rasterize_line_y(period, k, d, first + half_period);
    return if center.y < r1 { 1.0 } else { 0.0 };
  }

  // columns are indexed rather than accumulated: `c0 + period` may round back onto `c0`
  let columns = ((center.x + radius - first) / period).floor().max(0.0) as u64 + 1;
  let r0 = center.y - radius;
  let area = (0..columns)
    .map(|i| {
      let c0 = first + i as f64 * period;
      let r1 = rasterize_line_y(period, k, d, c0 + half_period).max(r0);
      box_circle_area(&Rect::new(P2::new(c0, r0), P2::new(c0 + period, r1)), filter)
    })
    .sum::<f64>();

  (area / filter.area()).clamp(0.0, 1.0)
}
