//! Exact area of intersection between an axis-aligned box and a circle.
//!
//! The box is moved into the frame of the circle and cut into horizontal halves, so that the
//! area above a horizontal line `y = h ≥ 0` can be written as a definite integral of the upper
//! half of the circle:
//! ```text
//! F(x) = ½·(√(1 - x²/r²)·x·r + r²·asin(x/r) - 2·h·x)
//! ```
//! evaluated between the strip bounds clipped to the chord at height `h`.

use {
  super::{Circle, Rect},
  std::f64::consts::PI
};

// positive root of the intersection of `y = h` with the circle of radius `r` centered at the origin
#[inline]
fn half_chord(h: f64, r: f64) -> f64 {
  if h < r { (r * r - h * h).sqrt() } else { 0.0 }
}

// indefinite integral of the circle's upper arc, measured from `y = h`
#[inline]
fn arc_integral(x: f64, h: f64, r: f64) -> f64 {
  let t = (x / r).clamp(-1.0, 1.0);
  0.5 * ((1.0 - t * t).sqrt() * x * r + r * r * t.asin() - 2.0 * h * x)
}

// intersection of the strip [x0, x1] × [h, ∞) with the centered circle, h ≥ 0
fn strip_area(x0: f64, x1: f64, h: f64, r: f64) -> f64 {
  if h >= r { return 0.0; }
  let w = half_chord(h, r);
  arc_integral(x1.clamp(-w, w), h, r) - arc_integral(x0.clamp(-w, w), h, r)
}

fn centered_area(x0: f64, x1: f64, y0: f64, y1: f64, r: f64) -> f64 {
  if y0 < 0.0 {
    if y1 <= 0.0 {
      // entirely under the center line, mirror it above
      return centered_area(x0, x1, -y1, -y0, r);
    }
    return centered_area(x0, x1, 0.0, -y0, r) + centered_area(x0, x1, 0.0, y1, r);
  }
  strip_area(x0, x1, y0, r) - strip_area(x0, x1, y1, r)
}

/// Area of `rect ∩ circle`.
///
/// Reversed box bounds are accepted. A circle with `radius ≤ 0` has no area.
pub fn box_circle_area(rect: &Rect, circle: &Circle) -> f64 {
  let r = circle.radius;
  if !(r > 0.0) { return 0.0; }

  let (x0, x1) = ordered(rect.min.x, rect.max.x);
  let (y0, y1) = ordered(rect.min.y, rect.max.y);
  let c = circle.center;
  let area = centered_area(x0 - c.x, x1 - c.x, y0 - c.y, y1 - c.y, r);

  area.max(0.0).min(((x1 - x0) * (y1 - y0)).min(PI * r * r))
}

/// Area of the part of a circle lying beyond a chord at signed `distance` from its center.
///
/// `distance ≥ radius` gives `0`, `distance ≤ -radius` the whole disk.
pub fn circle_segment_area(distance: f64, radius: f64) -> f64 {
  if !(radius > 0.0) { return 0.0; }
  let d = distance.clamp(-radius, radius);
  radius * radius * (d / radius).acos() - d * (radius * radius - d * d).sqrt()
}

#[inline]
fn ordered(a: f64, b: f64) -> (f64, f64) {
  if a <= b { (a, b) } else { (b, a) }
}
