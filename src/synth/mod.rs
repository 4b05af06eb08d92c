//! Per-pixel synthesis of an artifact image.
//!
//! Every output sample `(c, r)` is rotated about the image center by the global image angle,
//! a filter aperture is placed at the rotated point and its coverage against the artifact
//! boundary is quantized into the pixel range. Noise is applied last.
//!
//! Rows are independent and rendered in parallel, each with its own generator stream, so a
//! fixed [`Seed`] reproduces the image bit for bit.

use {
  crate::{
    buffer::Image,
    coverage::{Coverage, CoverageStrategy, ExactPeriodic},
    error::{Error, Result, ensure_finite},
    geometry::{rotate_about, Circle, Line, P2, Rotation},
    noise::{row_rng, NoiseModel, NoiseSpec, Seed},
    pixel::Pixel,
    util::profile
  },
  euclid::Angle,
  log::debug,
  rayon::prelude::*
};
#[cfg(feature = "serde")]
use serde::{Serialize, Deserialize};

mod stepped;
mod variants;

pub use {
  stepped::stepped_line,
  variants::{artifact_line, disk, disk_supersampled, line}
};

/// Straight artifact boundary through `point` at `angle`.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ArtifactSpec {
  pub point: P2,
  pub angle: Angle<f64>
}

impl Default for ArtifactSpec {
  fn default() -> Self {
    ArtifactSpec { point: P2::origin(), angle: Angle::zero() }
  }
}

impl ArtifactSpec {
  pub fn line(x: f64, y: f64, angle: f64) -> Self {
    ArtifactSpec { point: P2::new(x, y), angle: Angle::radians(angle) }
  }

  pub fn to_line(&self) -> Line {
    Line::new(self.point, self.angle)
  }
}

/// Filter aperture and raster period of the exact periodic path.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FilterSpec {
  pub radius: f64,
  pub artifact_size: f64
}

impl Default for FilterSpec {
  fn default() -> Self {
    FilterSpec { radius: 0.0, artifact_size: 1.0 }
  }
}

impl FilterSpec {
  pub fn new(radius: f64, artifact_size: f64) -> Self {
    FilterSpec { radius, artifact_size }
  }

  pub fn exact(&self) -> ExactPeriodic {
    ExactPeriodic::new(self.artifact_size)
  }
}

/// Global rotation of the sample grid about the image center.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ImageTransform {
  pub rotation: Angle<f64>
}

impl Default for ImageTransform {
  fn default() -> Self {
    ImageTransform { rotation: Angle::zero() }
  }
}

/// Renders one artifact with a chosen coverage strategy.
///
/// ```
/// # use artifact_synth::{
/// #   error::Result,
/// #   coverage::SegmentEstimate,
/// #   noise::{NoiseSpec, Seed},
/// #   synth::{ArtifactSpec, Synthesizer}
/// # };
/// # fn main() -> Result<()> {
/// let image = Synthesizer::new(ArtifactSpec::line(16.0, 16.0, 0.2), SegmentEstimate)
///   .radius(2.0)
///   .noise(NoiseSpec::filter(3))
///   .seed(Seed::Fixed(7))
///   .render::<u8>(32, 32)?;
/// assert_eq!(image[(16, 0)], 255);
/// assert_eq!(image[(16, 31)], 0);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Synthesizer<C = CoverageStrategy> {
  pub artifact: ArtifactSpec,
  pub coverage: C,
  pub radius: f64,
  pub noise: NoiseSpec,
  pub transform: ImageTransform,
  pub seed: Seed
}

impl Synthesizer<CoverageStrategy> {
  /// Exact periodic coverage with the raster and aperture of `filter`.
  pub fn from_filter(artifact: ArtifactSpec, filter: FilterSpec) -> Self {
    Synthesizer::new(artifact, filter.exact().into()).radius(filter.radius)
  }
}

impl<C: Coverage> Synthesizer<C> {
  /// Hard edge, no noise, no image rotation, entropy seed.
  pub fn new(artifact: ArtifactSpec, coverage: C) -> Self {
    Synthesizer {
      artifact,
      coverage,
      radius: 0.0,
      noise: NoiseSpec::default(),
      transform: ImageTransform::default(),
      seed: Seed::default()
    }
  }

  pub fn radius(self, radius: f64) -> Self {
    Synthesizer { radius, ..self }
  }

  pub fn noise(self, noise: NoiseSpec) -> Self {
    Synthesizer { noise, ..self }
  }

  pub fn image_angle(self, angle: f64) -> Self {
    Synthesizer { transform: ImageTransform { rotation: Angle::radians(angle) }, ..self }
  }

  pub fn seed(self, seed: Seed) -> Self {
    Synthesizer { seed, ..self }
  }

  /// Check every parameter against the output pixel type.
  pub fn validate<P: Pixel>(&self, width: u32, height: u32) -> Result<()> {
    validate_dimensions(width, height)?;
    ensure_finite("x", self.artifact.point.x)?;
    ensure_finite("y", self.artifact.point.y)?;
    ensure_finite("angle", self.artifact.angle.radians)?;
    ensure_finite("image_angle", self.transform.rotation.radians)?;
    if !(self.radius >= 0.0 && self.radius.is_finite()) {
      return Err(Error::InvalidRadius(self.radius));
    }
    self.coverage.validate(self.radius)?;
    self.noise.validate::<P>()
  }

  pub fn render<P: Pixel>(&self, width: u32, height: u32) -> Result<Image<P>> {
    self.validate::<P>(width, height)?;

    let seed = self.seed.resolve();
    debug!(
      "render {}x{} {}: {:?}, radius {}, {:?}, {:?}, seed {}",
      width, height, std::any::type_name::<P>(),
      self.artifact, self.radius, self.noise, self.transform, seed
    );

    let line = self.artifact.to_line();
    let noise = NoiseModel::new(&self.noise);
    let center = P2::new(width as f64 / 2.0, height as f64 / 2.0);
    let rotation = Rotation::new(self.transform.rotation);
    let mut data = vec![P::default(); width as usize * height as usize];

    profile!("render", {
      data.par_chunks_mut(width as usize)
        .enumerate()
        .for_each(|(r, row)| {
          let mut rng = row_rng(seed, r as u64);
          row.iter_mut().enumerate().for_each(|(c, sample)| {
            let point = rotate_about(P2::new(c as f64, r as f64), center, &rotation);
            let coverage = self.coverage.coverage(&line, &Circle::new(point, self.radius));
            *sample = noise.apply(P::quantize(coverage), &mut rng);
          });
        });
    });

    Ok(Image::from_raw(width, height, data))
  }
}

pub(crate) fn validate_dimensions(width: u32, height: u32) -> Result<()> {
  if width == 0 || height == 0 {
    return Err(Error::InvalidDimension { width, height });
  }
  Ok(())
}
