//! Closed-form 3×3 fast path.
//!
//! For a 9-element window the double heap's bookkeeping costs more than it
//! saves, so `rx == ry == 1` uses a fixed comparison network instead:
//! take the min, median and max of each row triple, then the median is
//! `med3(max-of-mins, med-of-meds, min-of-maxs)` — exact for nine elements.
//!
//! FILTER borders substitute checkerboard sentinels on the fly through
//! [`halo::sentinel_for`] instead of allocating the enlarged buffer; a unit
//! test on the parent module pins bit-for-bit agreement with the general
//! engine's halo path.
use crate::filter::halo;
use crate::filter::params::BorderMode;
use crate::image::{Image, Pixel};

#[inline]
fn min2<T: Pixel>(a: T, b: T) -> T {
    if b < a {
        b
    } else {
        a
    }
}

#[inline]
fn max2<T: Pixel>(a: T, b: T) -> T {
    if a < b {
        b
    } else {
        a
    }
}

#[inline]
fn med3<T: Pixel>(a: T, b: T, c: T) -> T {
    max2(min2(a, b), min2(max2(a, b), c))
}

#[inline]
fn min3<T: Pixel>(a: T, b: T, c: T) -> T {
    min2(min2(a, b), c)
}

#[inline]
fn max3<T: Pixel>(a: T, b: T, c: T) -> T {
    max2(max2(a, b), c)
}

/// Exact median of nine values.
#[inline]
pub(crate) fn med9<T: Pixel>(v: [T; 9]) -> T {
    let lo = max3(min3(v[0], v[1], v[2]), min3(v[3], v[4], v[5]), min3(v[6], v[7], v[8]));
    let mid = med3(med3(v[0], v[1], v[2]), med3(v[3], v[4], v[5]), med3(v[6], v[7], v[8]));
    let hi = min3(max3(v[0], v[1], v[2]), max3(v[3], v[4], v[5]), max3(v[6], v[7], v[8]));
    med3(lo, mid, hi)
}

#[inline]
fn med9_interior<T: Pixel>(img: &Image<T>, x: usize, y: usize) -> T {
    let up = img.idx(x - 1, y - 1);
    let mid = img.idx(x - 1, y);
    let dn = img.idx(x - 1, y + 1);
    let d = &img.data;
    med9([
        d[up], d[up + 1], d[up + 2], //
        d[mid], d[mid + 1], d[mid + 2], //
        d[dn], d[dn + 1], d[dn + 2],
    ])
}

/// Border pixel under FILTER: out-of-bounds neighbors become checkerboard
/// sentinels, same convention as the general engine's halo.
fn med9_with_sentinels<T: Pixel>(img: &Image<T>, x: usize, y: usize) -> T {
    let mut v = [T::ZERO; 9];
    let mut k = 0;
    for dy in -1..=1i64 {
        for dx in -1..=1i64 {
            let gx = x as i64 + dx;
            let gy = y as i64 + dy;
            let in_bounds = gx >= 0 && gy >= 0 && (gx as usize) < img.w && (gy as usize) < img.h;
            v[k] = if in_bounds {
                img.get(gx as usize, gy as usize)
            } else {
                halo::sentinel_for(gx, gy)
            };
            k += 1;
        }
    }
    med9(v)
}

/// Run the 3×3 filter. Writes interior pixels for every mode; FILTER also
/// writes the border frame. COPY/ZERO border passes and validation belong
/// to the caller.
pub(crate) fn run<T: Pixel>(input: &Image<T>, out: &mut Image<T>, border: BorderMode) {
    let w = input.w;
    let h = input.h;
    debug_assert!(w >= 3 && h >= 3);

    if border == BorderMode::Crop {
        for y in 1..h - 1 {
            for x in 1..w - 1 {
                out.set(x - 1, y - 1, med9_interior(input, x, y));
            }
        }
        return;
    }

    for y in 1..h - 1 {
        for x in 1..w - 1 {
            out.set(x, y, med9_interior(input, x, y));
        }
    }

    if border == BorderMode::Filter {
        for x in 0..w {
            out.set(x, 0, med9_with_sentinels(input, x, 0));
            out.set(x, h - 1, med9_with_sentinels(input, x, h - 1));
        }
        for y in 1..h - 1 {
            out.set(0, y, med9_with_sentinels(input, 0, y));
            out.set(w - 1, y, med9_with_sentinels(input, w - 1, y));
        }
    }
}
