use {
  super::{Coverage, filter_line, validate_raster},
  crate::{
    error::{Error, Result},
    geometry::{rotate_about, Circle, Line, P2, Rotation}
  },
  euclid::Angle,
  std::f64::consts::FRAC_PI_2
};
#[cfg(feature = "serde")]
use serde::{Serialize, Deserialize};

/// [`filter_line`] averaged over `samples` raster orientations.
///
/// The `k`-th raster (`k = 1..=samples`) is rotated by `π / 2k` around `pivot`: a quarter turn,
/// then 45°, 30°, ... Rotating the raster is done by rotating line and filter the opposite way.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AngleSupersampled {
  pub period: f64,
  pub samples: u32,
  pub pivot: P2
}

impl AngleSupersampled {
  pub fn new(period: f64, samples: u32, pivot: P2) -> Self {
    AngleSupersampled { period, samples, pivot }
  }

  fn orientations(&self) -> impl Iterator<Item = Rotation> {
    (1..=self.samples).map(|k| Rotation::new(Angle::radians(-FRAC_PI_2 / k as f64)))
  }
}

impl Coverage for AngleSupersampled {
  fn coverage(&self, line: &Line, filter: &Circle) -> f64 {
    let total = self.orientations()
      .map(|rotation| {
        let line = line.rotate_about(self.pivot, &rotation);
        let filter = Circle {
          center: rotate_about(filter.center, self.pivot, &rotation),
          ..*filter
        };
        filter_line(&line, self.period, &filter)
      })
      .sum::<f64>();
    total / self.samples.max(1) as f64
  }

  fn validate(&self, radius: f64) -> Result<()> {
    validate_raster(self.period, radius)?;
    if self.samples == 0 { return Err(Error::InvalidSamples(self.samples)); }
    if !(self.pivot.x.is_finite() && self.pivot.y.is_finite()) {
      return Err(Error::NonFinite("pivot"));
    }
    Ok(())
  }
}
