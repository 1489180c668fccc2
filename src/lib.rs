#![doc = include_str!("../README.md")]

pub mod filter;
pub mod image;

// --- High-level re-exports -------------------------------------------------

// Main entry points and their parameter/error types.
pub use crate::filter::{median_filter, median_filter_into, BorderMode, FilterError, MedianParams};

// Pixel containers.
pub use crate::image::{Image, ImageView, ImageViewMut, Pixel};

/// Small prelude for quick experiments.
///
/// ```
/// use fastmedian::prelude::*;
///
/// let img: Image<f32> = Image::filled(16, 16, 1.0);
/// let out = fastmedian::median_filter(&img, &MedianParams::default()).unwrap();
/// assert_eq!(out.get(8, 8), 1.0);
/// ```
pub mod prelude {
    pub use crate::filter::{median_filter, median_filter_into, BorderMode, MedianParams};
    pub use crate::image::{Image, Pixel};
}
