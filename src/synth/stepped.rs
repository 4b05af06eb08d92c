use {
  super::{validate_dimensions, ArtifactSpec},
  crate::{
    buffer::Image,
    coverage::validate_period,
    error::{Result, ensure_finite},
    geometry::{P2, Rotation},
    pixel::Pixel,
    raster::{cell_center, rasterize}
  },
  euclid::Angle,
  rayon::prelude::*
};

/// Non-antialiased line from two raster votes per pixel.
///
/// One vote comes from the corner of the axis-aligned raster cell holding the pixel, the other
/// from the center of the cell holding it in a raster turned by 45°. A vote counts when its
/// point lies on the side the line normal points to (`signed_distance ≥ 0`) and is worth half
/// the pixel range, so a pixel with both votes is one level short of `max` for odd ranges.
/// No filter, no noise.
pub fn stepped_line<P: Pixel>(
  width: u32,
  height: u32,
  x: f64,
  y: f64,
  angle: f64,
  artifact_size: f64
) -> Result<Image<P>> {
  validate_dimensions(width, height)?;
  ensure_finite("x", x)?;
  ensure_finite("y", y)?;
  ensure_finite("angle", angle)?;
  validate_period(artifact_size)?;

  let line = ArtifactSpec::line(x, y, angle).to_line();
  let vote = P::from_level(P::max_level() / 2);
  let diagonal = Rotation::new(Angle::frac_pi_4());
  let inverse = diagonal.inverse();

  let mut data = vec![P::default(); width as usize * height as usize];
  data.par_chunks_mut(width as usize)
    .enumerate()
    .for_each(|(r, row)| row.iter_mut().enumerate().for_each(|(c, sample)| {
      let pixel = P2::new(c as f64, r as f64);
      let corner = P2::new(rasterize(artifact_size, pixel.x), rasterize(artifact_size, pixel.y));
      let turned = diagonal.transform_point(pixel);
      let center = inverse.transform_point(P2::new(
        cell_center(artifact_size, turned.x),
        cell_center(artifact_size, turned.y)
      ));
      *sample = [corner, center].iter()
        .filter(|&&p| line.signed_distance(p) >= 0.0)
        .fold(P::default(), |acc, _| acc + vote);
    }));

  Ok(Image::from_raw(width, height, data))
}
