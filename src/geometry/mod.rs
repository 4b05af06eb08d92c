//! .
//!
//! The origin of coordinate system is in top-left corner, `x` grows to the right and `y` grows
//! downwards. One unit is one pixel; integer coordinates are the sample positions of the output
//! image.

use euclid::{Point2D, Box2D, Vector2D, Rotation2D};

pub mod shapes;
mod box_circle;

pub use {
  shapes::*,
  box_circle::{box_circle_area, circle_segment_area}
};

/// Pixel coordinate basis
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PixelSpace;

pub type P2 = Point2D<f64, PixelSpace>;
pub type V2 = Vector2D<f64, PixelSpace>;
pub type Rect = Box2D<f64, PixelSpace>;
pub type Rotation = Rotation2D<f64, PixelSpace, PixelSpace>;

/// Rotate `point` around `pivot`.
pub fn rotate_about(point: P2, pivot: P2, rotation: &Rotation) -> P2 {
  rotation.transform_point((point - pivot).to_point()) + pivot.to_vector()
}

/// Mirror a point through the diagonal `x = y`.
#[inline]
pub fn transpose(point: P2) -> P2 {
  P2::new(point.y, point.x)
}
