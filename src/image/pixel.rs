//! Scalar pixel types accepted by the filter engine.
//!
//! The engine only needs a copyable value with a native total order plus
//! three distinguished constants: a zero for `BorderMode::Zero`, and the
//! low/high sentinels used by the `BorderMode::Filter` halo. Integers use
//! `MIN`/`MAX`, floating types use ±∞.
//!
//! Floating comparisons go through `PartialOrd`; feeding NaN pixels to the
//! engine yields unspecified (but memory-safe) output, matching the usual
//! comparison-sort caveat.

/// Pixel element type: `i32`, `f32` or `f64`.
pub trait Pixel: Copy + PartialOrd + core::fmt::Debug + Send + Sync + 'static {
    /// Additive zero, written to border cells in `BorderMode::Zero`.
    const ZERO: Self;
    /// Sentinel ordered below every finite pixel value.
    const LO: Self;
    /// Sentinel ordered above every finite pixel value.
    const HI: Self;
}

impl Pixel for i32 {
    const ZERO: Self = 0;
    const LO: Self = i32::MIN;
    const HI: Self = i32::MAX;
}

impl Pixel for f32 {
    const ZERO: Self = 0.0;
    const LO: Self = f32::NEG_INFINITY;
    const HI: Self = f32::INFINITY;
}

impl Pixel for f64 {
    const ZERO: Self = 0.0;
    const LO: Self = f64::NEG_INFINITY;
    const HI: Self = f64::INFINITY;
}
