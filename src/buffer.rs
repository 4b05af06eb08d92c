use {
  crate::pixel::Pixel,
  std::{
    fmt::{self, Debug, Formatter},
    ops::Index
  }
};

/// Row-major grayscale sample buffer, `width × height`.
#[derive(Clone, PartialEq, Eq)]
pub struct Image<P> {
  width: u32,
  height: u32,
  data: Vec<P>
}

impl<P: Pixel> Image<P> {
  /// `data.len()` must be `width * height`.
  pub(crate) fn from_raw(width: u32, height: u32, data: Vec<P>) -> Self {
    debug_assert_eq!(data.len(), width as usize * height as usize);
    Image { width, height, data }
  }

  pub fn width(&self) -> u32 { self.width }
  pub fn height(&self) -> u32 { self.height }
  pub fn dimensions(&self) -> (u32, u32) { (self.width, self.height) }

  pub fn get(&self, x: u32, y: u32) -> Option<P> {
    (x < self.width && y < self.height)
      .then(|| self.data[y as usize * self.width as usize + x as usize])
  }

  pub fn row(&self, y: u32) -> &[P] {
    let w = self.width as usize;
    &self.data[y as usize * w..(y as usize + 1) * w]
  }

  pub fn rows(&self) -> impl Iterator<Item = &[P]> + '_ {
    self.data.chunks_exact(self.width as usize)
  }

  /// `(x, y, sample)` in row-major order.
  pub fn enumerate_pixels(&self) -> impl Iterator<Item = (u32, u32, P)> + '_ {
    itertools::iproduct!(0..self.height, 0..self.width)
      .map(move |(y, x)| (x, y, self[(x, y)]))
  }

  pub fn as_raw(&self) -> &[P] { &self.data }
  pub fn into_raw(self) -> Vec<P> { self.data }

  /// Hand the buffer over to the `image` crate without copying the samples.
  ///
  /// `None` only if the sample count disagrees with the dimensions, which a rendered
  /// image never does.
  #[cfg(feature = "image")]
  #[cfg_attr(docsrs, doc(cfg(feature = "image")))]
  pub fn into_luma(self) -> Option<image::ImageBuffer<image::Luma<P>, Vec<P>>>
    where P: image::Primitive {
    let Image { width, height, data } = self;
    image::ImageBuffer::from_raw(width, height, data)
  }
}

/// `image[(x, y)]`
impl<P: Pixel> Index<(u32, u32)> for Image<P> {
  type Output = P;

  fn index(&self, (x, y): (u32, u32)) -> &P {
    assert!(x < self.width && y < self.height, "pixel ({}, {}) out of bounds", x, y);
    &self.data[y as usize * self.width as usize + x as usize]
  }
}

impl<P> Debug for Image<P> {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    use humansize::{FileSize, file_size_opts as options};

    let size = self.data.len() * std::mem::size_of::<P>();
    f.debug_struct("Image")
      .field("width", &self.width)
      .field("height", &self.height)
      .field("sample", &std::any::type_name::<P>())
      .field("size", &size.file_size(options::BINARY).unwrap_or_else(|e| e))
      .finish()
  }
}
