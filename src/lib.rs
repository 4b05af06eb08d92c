//! Synthesis of calibrated edge-artifact images.
//!
//! Every image holds a single straight artifact boundary, anti-aliased by integrating a circular
//! filter aperture exactly against the boundary, optionally after quantizing the boundary onto a
//! periodic square raster. Samples are mapped linearly into an unsigned integer pixel range and
//! perturbed by saturating noise. Output is meant as ground truth for calibrating image analysis.
//!
//! The crate is layered bottom-up:
//! - [`geometry`]: exact area of a box intersected with a circle, lines and apertures.
//! - [`raster`]: periodic raster mapping, staircase quantization of a line.
//! - [`coverage`]: fraction of an aperture on the positive side of a line.
//! - [`noise`]: saturating noise and per-row generator streams.
//! - [`synth`]: per-pixel synthesis and the scalar entry points.
//!
//! # Basic usage
//! ```
//! # use artifact_synth::{error::Result, Seed};
//! # fn main() -> Result<()> {
//! // 64x64 image, edge through the center, raster of 8 px, aperture radius 2,
//! // noise of ±3 levels in the transition band
//! let image = artifact_synth::artifact_line::<u8>(
//!   64, 64,
//!   32.0, 32.0, 0.25,
//!   8.0, 2.0, 3,
//!   0.0, Seed::Fixed(42)
//! )?;
//! assert_eq!(image.dimensions(), (64, 64));
//! // positive side of the line, far from the boundary
//! assert_eq!(image[(32, 0)], 255);
//! assert_eq!(image[(32, 63)], 0);
//! # Ok(())
//! # }
//! ```
//!
//! The entry points are thin wrappers around [`Synthesizer`](synth::Synthesizer), which takes
//! any [`Coverage`](coverage::Coverage) strategy and renders rows in parallel.
//! With a fixed [`Seed`] the result does not depend on the thread pool.
//!
//! Enable the `image` feature to hand a result over as an `image::ImageBuffer`,
//! and `serde` to (de)serialize parameter sets.

#![cfg_attr(docsrs, feature(doc_cfg))]

mod util;
mod buffer;

pub mod error;
pub mod geometry;
pub mod raster;
pub mod coverage;
pub mod noise;
pub mod pixel;
pub mod synth;

pub use {
  buffer::Image,
  error::{Error, Result},
  noise::{NoiseSpec, Seed},
  pixel::Pixel,
  synth::{artifact_line, disk, disk_supersampled, line, stepped_line}
};
