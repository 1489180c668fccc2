//! Owned single-channel image in row-major layout (stride == width).
//!
//! One generic container serves every supported pixel type; the filter
//! engine is monomorphized over [`Pixel`](crate::image::Pixel) rather than
//! duplicated per element type.
use crate::image::pixel::Pixel;
use crate::image::traits::{ImageView, ImageViewMut};

#[derive(Clone, Debug, PartialEq)]
pub struct Image<T: Pixel> {
    /// Image width in pixels
    pub w: usize,
    /// Image height in pixels
    pub h: usize,
    /// Number of elements between consecutive rows (equals `w`)
    pub stride: usize,
    /// Backing storage in row-major order
    pub data: Vec<T>,
}

impl<T: Pixel> Image<T> {
    /// Construct a zero-initialized buffer of size `w × h`.
    pub fn new(w: usize, h: usize) -> Self {
        Self::filled(w, h, T::ZERO)
    }

    /// Construct a buffer of size `w × h` with every pixel set to `v`.
    pub fn filled(w: usize, h: usize, v: T) -> Self {
        Self {
            w,
            h,
            stride: w,
            data: vec![v; w * h],
        }
    }

    /// Wrap an existing row-major buffer; `data.len()` must equal `w * h`.
    pub fn from_vec(w: usize, h: usize, data: Vec<T>) -> Self {
        assert_eq!(data.len(), w * h, "buffer length does not match w*h");
        Self {
            w,
            h,
            stride: w,
            data,
        }
    }

    #[inline]
    /// Convert (x, y) to a linear index into `data`.
    pub fn idx(&self, x: usize, y: usize) -> usize {
        y * self.stride + x
    }

    #[inline]
    /// Get the pixel value at (x, y).
    pub fn get(&self, x: usize, y: usize) -> T {
        self.data[self.idx(x, y)]
    }

    #[inline]
    /// Set the pixel value at (x, y).
    pub fn set(&mut self, x: usize, y: usize, v: T) {
        let i = self.idx(x, y);
        self.data[i] = v;
    }
}

impl<T: Pixel> ImageView for Image<T> {
    type Pixel = T;

    #[inline]
    fn width(&self) -> usize {
        self.w
    }
    #[inline]
    fn height(&self) -> usize {
        self.h
    }
    #[inline]
    fn stride(&self) -> usize {
        self.stride
    }
    #[inline]
    fn row(&self, y: usize) -> &[T] {
        let start = y * self.stride;
        &self.data[start..start + self.w]
    }
    #[inline]
    fn as_slice(&self) -> Option<&[T]> {
        (self.stride == self.w).then_some(&self.data[..self.w * self.h])
    }
}

impl<T: Pixel> ImageViewMut for Image<T> {
    #[inline]
    fn row_mut(&mut self, y: usize) -> &mut [T] {
        let start = y * self.stride;
        let end = start + self.w;
        &mut self.data[start..end]
    }

    #[inline]
    fn as_mut_slice(&mut self) -> Option<&mut [T]> {
        if self.stride == self.w {
            let n = self.w * self.h;
            Some(&mut self.data[..n])
        } else {
            None
        }
    }
}
