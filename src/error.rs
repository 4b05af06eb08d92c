//! Parameter errors.
//!
//! Every failure is a parameter error detected before any pixel is computed: a synthesis call
//! either returns a complete image or one of these. Degenerate geometry (zero radius, a box that
//! misses the circle entirely) is never an error.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
  /// Width or height is zero.
  #[error("invalid image dimension {width}x{height}")]
  InvalidDimension { width: u32, height: u32 },
  /// Negative or non-finite filter radius.
  #[error("invalid filter radius {0}")]
  InvalidRadius(f64),
  /// Raster period (`artifact_size`) must be positive, finite, and coarse enough for the
  /// filter to span a bounded number of raster columns.
  #[error("invalid raster period {0}")]
  InvalidPeriod(f64),
  /// Angle supersampling needs at least one raster orientation.
  #[error("invalid number of angle samples {0}")]
  InvalidSamples(u32),
  /// Noise amplitude does not fit in the output pixel range.
  #[error("noise amplitude {noise} exceeds pixel range [0, {max}]")]
  UnsupportedPixelWidth { noise: u32, max: u64 },
  /// A position or angle is NaN or infinite.
  #[error("parameter `{0}` is not finite")]
  NonFinite(&'static str),
}

/// Convenient wrapper around `std::Result`.
pub type Result<T> = ::std::result::Result<T, Error>;

pub(crate) fn ensure_finite(name: &'static str, value: f64) -> Result<()> {
  if value.is_finite() { Ok(()) } else { Err(Error::NonFinite(name)) }
}
