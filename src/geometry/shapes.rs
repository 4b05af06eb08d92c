use {
  super::{P2, V2, Rotation, rotate_about, transpose},
  euclid::Angle,
  std::f64::consts::PI
};

/// Circular filter aperture.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Circle {
  pub center: P2,
  pub radius: f64
}

impl Circle {
  pub fn new(center: P2, radius: f64) -> Self {
    Circle { center, radius }
  }

  /// Zero for degenerate (non-positive) radii.
  pub fn area(&self) -> f64 {
    if self.radius > 0.0 { PI * self.radius * self.radius } else { 0.0 }
  }

  pub fn transpose(&self) -> Self {
    Circle { center: transpose(self.center), ..*self }
  }
}

/// Infinite straight line through `point`, with unit `normal`.
///
/// The *positive* side of the line is the half-plane where [`Line::signed_distance`] is negative.
/// For a line at angle `θ` the normal is `(-sin θ, cos θ)`, so a horizontal line (`θ = 0`) has
/// its positive side at smaller `y`, i.e. towards the top of the image.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Line {
  pub point: P2,
  pub normal: V2
}

impl Line {
  pub fn new(point: P2, angle: Angle<f64>) -> Self {
    let (sin, cos) = angle.sin_cos();
    Line { point, normal: V2::new(-sin, cos) }
  }

  /// Distance of the line from the origin, along the normal.
  pub fn offset(&self) -> f64 {
    self.point.to_vector().dot(self.normal)
  }

  pub fn signed_distance(&self, p: P2) -> f64 {
    p.to_vector().dot(self.normal) - self.offset()
  }

  /// `(k, d)` of `y = k·x + d`. Infinite slope for vertical lines.
  pub fn slope_intercept(&self) -> (f64, f64) {
    let k = -self.normal.x / self.normal.y;
    (k, self.point.y - k * self.point.x)
  }

  pub fn rotate_about(&self, pivot: P2, rotation: &Rotation) -> Self {
    Line {
      point: rotate_about(self.point, pivot, rotation),
      normal: rotation.transform_vector(self.normal)
    }
  }

  /// Mirror through the diagonal `x = y`. Signed distances are preserved.
  pub fn transpose(&self) -> Self {
    Line {
      point: transpose(self.point),
      normal: V2::new(self.normal.y, self.normal.x)
    }
  }
}
