//! Saturating noise.
//!
//! Noise draws are uniform integers in `[-N, N]`. A draw that would push a sample outside the
//! pixel range is clipped at the range instead of wrapped or re-drawn, the same way a sensor
//! clips. This biases samples near the extremes on purpose.

use {
  crate::{
    error::{Error, Result},
    pixel::Pixel
  },
  rand::{Rng, distributions::{Distribution, Uniform}},
  rand_pcg::Pcg64
};
#[cfg(feature = "serde")]
use serde::{Serialize, Deserialize};


/// Default distance (in levels) from either extreme within which background noise is applied.
pub const BG_NOISE_MARGIN: u32 = 32;

/// Apply `noise` to `sample`, clipping against `[0, max]`.
#[inline]
pub fn saturate(sample: u64, noise: i64, max: u64) -> u64 {
  let sample = sample.min(max);
  if noise < 0 {
    sample - noise.unsigned_abs().min(sample)
  } else {
    sample + (noise as u64).min(max - sample)
  }
}

/// [`saturate`] over the full range of the pixel type.
#[inline]
pub fn saturating_noise<P: Pixel>(sample: P, noise: i64) -> P {
  P::from_level(saturate(sample.level(), noise, P::max_level()))
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NoiseSpec {
  /// Amplitude of noise in the transition band, where `0 < sample < max`.
  pub filter_noise: u32,
  /// Amplitude of noise in the flat regions near either extreme.
  pub bg_noise: u32,
  pub bg_margin: u32
}

impl Default for NoiseSpec {
  fn default() -> Self {
    NoiseSpec { filter_noise: 0, bg_noise: 0, bg_margin: BG_NOISE_MARGIN }
  }
}

impl NoiseSpec {
  pub fn filter(filter_noise: u32) -> Self {
    NoiseSpec { filter_noise, ..Default::default() }
  }

  pub fn with_background(self, bg_noise: u32) -> Self {
    NoiseSpec { bg_noise, ..self }
  }

  /// Both amplitudes must be representable by `P`.
  pub fn validate<P: Pixel>(&self) -> Result<()> {
    let max = P::max_level();
    for noise in [self.filter_noise, self.bg_noise] {
      if noise as u64 > max {
        return Err(Error::UnsupportedPixelWidth { noise, max });
      }
    }
    Ok(())
  }
}

/// Where the generator comes from.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Seed {
  /// Fresh seed from the thread-local generator on every call.
  Entropy,
  Fixed(u64)
}

impl Default for Seed {
  fn default() -> Self { Seed::Entropy }
}

impl Seed {
  pub fn resolve(self) -> u64 {
    match self {
      Seed::Entropy => rand::thread_rng().gen(),
      Seed::Fixed(seed) => seed
    }
  }
}

const STATE_MIX: u128 = 0xcafe_f00d_d15e_a5e5_a02b_dbf7_bb3c_0a7a;

/// Independent generator for one image row.
///
/// Rows use distinct PCG streams of the same seed, so rows rendered on different threads never
/// share a generator and a fixed seed reproduces the image regardless of scheduling.
pub fn row_rng(seed: u64, row: u64) -> Pcg64 {
  Pcg64::new(STATE_MIX ^ u128::from(seed), u128::from(row))
}

/// Noise terms of one synthesis call, ready to sample.
#[derive(Debug, Clone)]
pub struct NoiseModel {
  filter: Option<Uniform<i64>>,
  background: Option<Uniform<i64>>,
  bg_margin: u64
}

impl NoiseModel {
  pub fn new(spec: &NoiseSpec) -> Self {
    let uniform = |n: u32| (n > 0).then(|| Uniform::new_inclusive(-(n as i64), n as i64));
    NoiseModel {
      filter: uniform(spec.filter_noise),
      background: uniform(spec.bg_noise),
      bg_margin: spec.bg_margin as u64
    }
  }

  /// Perturb a quantized sample.
  ///
  /// Filter noise only touches samples strictly between the extremes. Background noise only
  /// touches samples within `bg_margin` levels of either extreme, with an independent draw.
  pub fn apply<P: Pixel, R: Rng + ?Sized>(&self, sample: P, rng: &mut R) -> P {
    let (level, max) = (sample.level(), P::max_level());
    let mut out = sample;
    if let Some(filter) = &self.filter {
      if 0 < level && level < max {
        out = saturating_noise(out, filter.sample(rng));
      }
    }
    if let Some(background) = &self.background {
      if level <= self.bg_margin || max - level <= self.bg_margin {
        out = saturating_noise(out, background.sample(rng));
      }
    }
    out
  }
}
