//! Deterministic partition sort and selection over pixel-index slices.
//!
//! Both routines order image indices by the pixel value they point at,
//! using a three-way (Dutch flag) partition around a median-of-three pivot.
//! The pivot choice is intentionally **not** randomized: the filter must be
//! bit-reproducible, and production inputs are natural images. Sorted or
//! otherwise adversarial value sequences can therefore degrade to O(n²);
//! results stay correct, only the constant suffers.
use crate::image::Pixel;

const INSERTION_CUTOFF: usize = 12;

#[inline]
fn value_of_three<T: Pixel>(buf: &[T], a: usize, b: usize, c: usize) -> T {
    // Median of the three pixel values, by value.
    let (va, vb, vc) = (buf[a], buf[b], buf[c]);
    let (lo, hi) = if vb < va { (vb, va) } else { (va, vb) };
    if vc < lo {
        lo
    } else if hi < vc {
        hi
    } else {
        vc
    }
}

/// Three-way partition of `idx` around a median-of-three pivot value.
///
/// Returns `(lt, gt)`: indices in `idx[..lt]` point at values below the
/// pivot, `idx[gt..]` above it, and the middle band equals the pivot.
fn partition3<T: Pixel>(idx: &mut [usize], buf: &[T]) -> (usize, usize) {
    let n = idx.len();
    let pivot = value_of_three(buf, idx[0], idx[n / 2], idx[n - 1]);
    let mut lt = 0;
    let mut i = 0;
    let mut gt = n;
    while i < gt {
        let v = buf[idx[i]];
        if v < pivot {
            idx.swap(lt, i);
            lt += 1;
            i += 1;
        } else if pivot < v {
            gt -= 1;
            idx.swap(i, gt);
        } else {
            i += 1;
        }
    }
    (lt, gt)
}

fn insertion<T: Pixel>(idx: &mut [usize], buf: &[T]) {
    for i in 1..idx.len() {
        let mut j = i;
        while j > 0 && buf[idx[j]] < buf[idx[j - 1]] {
            idx.swap(j, j - 1);
            j -= 1;
        }
    }
}

/// Sort `idx` ascending by pixel value.
pub(crate) fn sort_by_value<T: Pixel>(idx: &mut [usize], buf: &[T]) {
    if idx.len() <= INSERTION_CUTOFF {
        insertion(idx, buf);
        return;
    }
    let (lt, gt) = partition3(idx, buf);
    sort_by_value(&mut idx[..lt], buf);
    sort_by_value(&mut idx[gt..], buf);
}

/// Quickselect: place the rank-`n` index (by pixel value) at `idx[n]`, with
/// smaller values to its left and larger to its right.
pub(crate) fn select_nth<T: Pixel>(idx: &mut [usize], buf: &[T], n: usize) {
    debug_assert!(n < idx.len());
    let mut lo = 0;
    let mut hi = idx.len();
    loop {
        if hi - lo <= INSERTION_CUTOFF {
            insertion(&mut idx[lo..hi], buf);
            return;
        }
        let (lt, gt) = partition3(&mut idx[lo..hi], buf);
        let (lt, gt) = (lo + lt, lo + gt);
        if n < lt {
            hi = lt;
        } else if n >= gt {
            lo = gt;
        } else {
            // n lands in the pivot band; every element there is equal.
            return;
        }
    }
}
