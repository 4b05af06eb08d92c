//! Periodic square raster of side `period`.
//!
//! Cell boundaries sit on integer multiples of the period. A slanted line is quantized onto the
//! raster one column at a time, which turns it into a staircase of whole cells.

/// Largest multiple of `period` that is `≤ value`.
#[inline]
pub fn rasterize(period: f64, value: f64) -> f64 {
  let result = (value / period).floor() * period;
  // the division may round up onto the next boundary
  if result <= value { result } else { result - period }
}

/// Center of the raster cell containing `value`.
#[inline]
pub fn cell_center(period: f64, value: f64) -> f64 {
  rasterize(period, value) + period * 0.5
}

/// Raster row boundary nearest to the line `y = slope·x + intercept` at `x`.
///
/// Ties go to the lower boundary only when the line is strictly closer to it.
#[inline]
pub fn rasterize_line_y(period: f64, slope: f64, intercept: f64, x: f64) -> f64 {
  let y = slope * x + intercept;
  let y0 = rasterize(period, y);
  if y - y0 < period * 0.5 { y0 } else { y0 + period }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test] fn rasterize_floors_to_grid() {
    assert_eq!(rasterize(8.0, 0.0), 0.0);
    assert_eq!(rasterize(8.0, 7.999), 0.0);
    assert_eq!(rasterize(8.0, 8.0), 8.0);
    assert_eq!(rasterize(8.0, 17.5), 16.0);
    assert_eq!(rasterize(1.0, 3.25), 3.0);
  }

  #[test] fn rasterize_negative_values() {
    assert_eq!(rasterize(8.0, -0.5), -8.0);
    assert_eq!(rasterize(8.0, -8.0), -8.0);
    assert_eq!(rasterize(8.0, -8.5), -16.0);
  }

  #[test] fn rasterize_never_exceeds_value() {
    for i in -1000..1000 {
      let value = i as f64 * 0.37;
      for period in [0.1, 0.3, 1.0, 3.0, 7.0] {
        let r = rasterize(period, value);
        assert!(r <= value, "{} > {}", r, value);
        assert!(value - r < period + 1e-9);
      }
    }
  }

  #[test] fn cell_centers() {
    assert_eq!(cell_center(4.0, 0.0), 2.0);
    assert_eq!(cell_center(4.0, 5.0), 6.0);
    assert_eq!(cell_center(4.0, -1.0), -2.0);
  }

  #[test] fn line_y_picks_nearest_boundary() {
    // horizontal lines
    assert_eq!(rasterize_line_y(8.0, 0.0, 32.0, 0.0), 32.0);
    assert_eq!(rasterize_line_y(8.0, 0.0, 35.9, 0.0), 32.0);
    assert_eq!(rasterize_line_y(8.0, 0.0, 36.0, 0.0), 40.0);
    assert_eq!(rasterize_line_y(8.0, 0.0, 39.0, 123.0), 40.0);
    // slope 1/2 through the origin
    assert_eq!(rasterize_line_y(4.0, 0.5, 0.0, 2.0), 0.0);
    assert_eq!(rasterize_line_y(4.0, 0.5, 0.0, 6.0), 4.0);
    assert_eq!(rasterize_line_y(4.0, 0.5, 0.0, 14.0), 8.0);
  }

  #[test] fn line_y_is_a_staircase() {
    let (period, slope, intercept) = (5.0, 0.3, 2.0);
    let mut previous = f64::MIN;
    for column in 0..100 {
      let y = rasterize_line_y(period, slope, intercept, column as f64 * period + period / 2.0);
      assert_eq!(y % period, 0.0);
      assert!(y >= previous);
      assert!((y - (slope * (column as f64 * period + period / 2.0) + intercept)).abs() <= period / 2.0);
      previous = y;
    }
  }
}
