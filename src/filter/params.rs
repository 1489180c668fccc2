//! Parameter types for the median filter.
//!
//! Defaults give the common 3×3 FILTER-mode smoothing. `rx`/`ry` are
//! half-sizes: the full window is `(2rx+1) × (2ry+1)` and its pixel count
//! is always odd, so the median is unique.

use serde::Deserialize;

/// Policy for output pixels whose full window does not fit in the image.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BorderMode {
    /// Median of the in-bounds window cells, via the parity halo.
    Filter,
    /// Border cells are set to zero.
    Zero,
    /// Output shrinks by `2rx × 2ry`; no border cells exist.
    Crop,
    /// Border cells are left untouched.
    Nop,
    /// Border cells are copied verbatim from the input.
    Copy,
}

/// Window geometry and border policy.
#[derive(Clone, Copy, Debug, Deserialize)]
pub struct MedianParams {
    /// Horizontal window half-size.
    pub rx: usize,
    /// Vertical window half-size.
    pub ry: usize,
    pub border: BorderMode,
}

impl Default for MedianParams {
    fn default() -> Self {
        Self {
            rx: 1,
            ry: 1,
            border: BorderMode::Filter,
        }
    }
}

impl MedianParams {
    /// Full window width `2rx + 1`.
    #[inline]
    pub fn window_width(&self) -> usize {
        2 * self.rx + 1
    }

    /// Full window height `2ry + 1`.
    #[inline]
    pub fn window_height(&self) -> usize {
        2 * self.ry + 1
    }

    /// Output dimensions for a `w × h` input (assumes the window fits).
    pub fn output_dims(&self, w: usize, h: usize) -> (usize, usize) {
        match self.border {
            BorderMode::Crop => (w - 2 * self.rx, h - 2 * self.ry),
            _ => (w, h),
        }
    }
}
