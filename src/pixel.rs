use {
  num_traits::{PrimInt, Unsigned},
  std::fmt::Debug
};

/// Unsigned integer sample type of an output image.
///
/// Levels are handled as `u64` so that noise arithmetic never overflows the sample type itself.
pub trait Pixel: PrimInt + Unsigned + Default + Debug + Send + Sync + 'static {
  fn level(self) -> u64;
  /// Saturates at `max_value()`.
  fn from_level(level: u64) -> Self;

  fn max_level() -> u64 {
    Self::max_value().level()
  }

  /// `round(min + coverage·(max - min))`, coverage clamped into `[0, 1]`.
  fn quantize(coverage: f64) -> Self {
    let (min, max) = (Self::min_value().level() as f64, Self::max_level() as f64);
    let coverage = if coverage.is_nan() { 0.0 } else { coverage.clamp(0.0, 1.0) };
    Self::from_level((min + coverage * (max - min)).round() as u64)
  }
}

macro_rules! impl_pixel {
  ($($t: ty),*) => {$(
    impl Pixel for $t {
      #[inline]
      fn level(self) -> u64 { self as u64 }
      #[inline]
      fn from_level(level: u64) -> Self { level.min(<$t>::MAX as u64) as $t }
    }
  )*}
}

impl_pixel!(u8, u16, u32);
