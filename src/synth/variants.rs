//! Scalar-argument entry points, one per artifact variant.
//!
//! Angles are in radians, lengths and positions in pixels.

use {
  super::{ArtifactSpec, FilterSpec, Synthesizer},
  crate::{
    buffer::Image,
    coverage::{AngleSupersampled, SegmentEstimate},
    error::Result,
    geometry::P2,
    noise::{NoiseSpec, Seed},
    pixel::Pixel
  }
};

/// Line quantized onto a raster of `artifact_size`, then filtered exactly.
///
/// The bright side, at the pixel maximum, is where the signed distance to the line is negative,
/// against the normal `(-sin angle, cos angle)`; the other side is zero. For `angle = 0` that
/// is the rows above the line, `r < y`. Filter noise only touches the transition band.
///
/// ```
/// # use artifact_synth::{artifact_line, error::Result, Seed};
/// # fn main() -> Result<()> {
/// let image = artifact_line::<u8>(8, 8, 4.0, 4.0, 0.0, 2.0, 0.0, 0, 0.0, Seed::Fixed(0))?;
/// assert_eq!(image[(2, 1)], u8::MAX);
/// assert_eq!(image[(2, 6)], 0);
/// # Ok(())
/// # }
/// ```
#[allow(clippy::too_many_arguments)]
pub fn artifact_line<P: Pixel>(
  width: u32,
  height: u32,
  x: f64,
  y: f64,
  angle: f64,
  artifact_size: f64,
  radius: f64,
  filter_noise: u32,
  image_angle: f64,
  seed: Seed
) -> Result<Image<P>> {
  let filter = FilterSpec::new(radius, artifact_size);
  Synthesizer::new(ArtifactSpec::line(x, y, angle), filter.exact())
    .radius(filter.radius)
    .noise(NoiseSpec::filter(filter_noise))
    .image_angle(image_angle)
    .seed(seed)
    .render(width, height)
}

/// [`artifact_line`] with an extra background noise term in the flat regions.
///
/// The boundary is still the straight raster-quantized edge, not a circular silhouette.
#[allow(clippy::too_many_arguments)]
pub fn disk<P: Pixel>(
  width: u32,
  height: u32,
  x: f64,
  y: f64,
  angle: f64,
  artifact_size: f64,
  radius: f64,
  filter_noise: u32,
  bg_noise: u32,
  image_angle: f64,
  seed: Seed
) -> Result<Image<P>> {
  let filter = FilterSpec::new(radius, artifact_size);
  Synthesizer::new(ArtifactSpec::line(x, y, angle), filter.exact())
    .radius(filter.radius)
    .noise(NoiseSpec::filter(filter_noise).with_background(bg_noise))
    .image_angle(image_angle)
    .seed(seed)
    .render(width, height)
}

/// [`disk`] averaged over `angle_samples` raster orientations around the image center.
#[allow(clippy::too_many_arguments)]
pub fn disk_supersampled<P: Pixel>(
  width: u32,
  height: u32,
  x: f64,
  y: f64,
  angle: f64,
  artifact_size: f64,
  angle_samples: u32,
  radius: f64,
  filter_noise: u32,
  bg_noise: u32,
  image_angle: f64,
  seed: Seed
) -> Result<Image<P>> {
  let pivot = P2::new(width as f64 / 2.0, height as f64 / 2.0);
  let coverage = AngleSupersampled::new(artifact_size, angle_samples, pivot);
  Synthesizer::new(ArtifactSpec::line(x, y, angle), coverage)
    .radius(radius)
    .noise(NoiseSpec::filter(filter_noise).with_background(bg_noise))
    .image_angle(image_angle)
    .seed(seed)
    .render(width, height)
}

/// Anti-aliased line without raster quantization, filtered by the circular segment estimate.
#[allow(clippy::too_many_arguments)]
pub fn line<P: Pixel>(
  width: u32,
  height: u32,
  x: f64,
  y: f64,
  angle: f64,
  radius: f64,
  filter_noise: u32,
  image_angle: f64,
  seed: Seed
) -> Result<Image<P>> {
  Synthesizer::new(ArtifactSpec::line(x, y, angle), SegmentEstimate)
    .radius(radius)
    .noise(NoiseSpec::filter(filter_noise))
    .image_angle(image_angle)
    .seed(seed)
    .render(width, height)
}
