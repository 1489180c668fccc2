//! Parity halo for `BorderMode::Filter`.
//!
//! The image is embedded in an `(Nx+2rx) × (Ny+2ry)` scratch buffer whose
//! frame alternates the type's high and low sentinels in a checkerboard.
//! Any window straddling the real border then contains an (almost) equal
//! count of +∞ and −∞ fillers, which cancel under median selection: the
//! median of the enlarged window is an in-bounds pixel value. When a window
//! holds an even number of real pixels the leftover filler decides between
//! the two central values — low or high by checkerboard parity — giving a
//! fixed, repeatable tie rule rather than an arbitrary one.
//!
//! Border handling thereby reduces to one CROP-mode run of the interior
//! engine over the scratch buffer; no separate border code path exists in
//! the general engine.
use crate::image::{Image, Pixel};

/// Sentinel for the halo cell at image coordinates (gx, gy); coordinates
/// outside the image are negative or ≥ the dimension. The 3×3 fast path
/// substitutes through the same function, so the two FILTER border
/// implementations cannot diverge on the convention.
#[inline]
pub(crate) fn sentinel_for<T: Pixel>(gx: i64, gy: i64) -> T {
    if (gx + gy).rem_euclid(2) == 0 {
        T::HI
    } else {
        T::LO
    }
}

/// Build the enlarged scratch image: sentinels in the frame, the source
/// copied into the interior.
pub(crate) fn build<T: Pixel>(src: &Image<T>, rx: usize, ry: usize) -> Image<T> {
    let hw = src.w + 2 * rx;
    let hh = src.h + 2 * ry;
    let mut halo = Image::new(hw, hh);
    for hy in 0..hh {
        let gy = hy as i64 - ry as i64;
        let inside_y = gy >= 0 && (gy as usize) < src.h;
        for hx in 0..hw {
            let gx = hx as i64 - rx as i64;
            let v = if inside_y && gx >= 0 && (gx as usize) < src.w {
                src.get(gx as usize, gy as usize)
            } else {
                sentinel_for(gx, gy)
            };
            halo.set(hx, hy, v);
        }
    }
    halo
}
