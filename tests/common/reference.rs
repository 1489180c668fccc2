//! Brute-force sort-and-pick reference for every border mode, including
//! the FILTER parity tie rule.

use fastmedian::{BorderMode, Image, MedianParams, Pixel};

fn sorted_window<T: Pixel>(img: &Image<T>, cx: usize, cy: usize, rx: usize, ry: usize) -> Vec<T> {
    let mut v = Vec::with_capacity((2 * rx + 1) * (2 * ry + 1));
    for y in cy - ry..=cy + ry {
        for x in cx - rx..=cx + rx {
            v.push(img.get(x, y));
        }
    }
    v.sort_by(|a, b| a.partial_cmp(b).unwrap());
    v
}

fn interior_median<T: Pixel>(img: &Image<T>, cx: usize, cy: usize, rx: usize, ry: usize) -> T {
    let v = sorted_window(img, cx, cy, rx, ry);
    v[v.len() / 2]
}

/// FILTER-mode value at any position: out-of-bounds window cells count as
/// low/high sentinels by checkerboard parity of their image coordinates,
/// so the median slot lands on an in-bounds value picked by the fixed tie
/// rule.
fn filter_median<T: Pixel>(img: &Image<T>, cx: usize, cy: usize, rx: usize, ry: usize) -> T {
    let mut reals = Vec::new();
    let mut n_low = 0usize;
    let mut n_high = 0usize;
    for dy in -(ry as i64)..=ry as i64 {
        for dx in -(rx as i64)..=rx as i64 {
            let gx = cx as i64 + dx;
            let gy = cy as i64 + dy;
            if gx >= 0 && gy >= 0 && (gx as usize) < img.w && (gy as usize) < img.h {
                reals.push(img.get(gx as usize, gy as usize));
            } else if (gx + gy).rem_euclid(2) == 0 {
                n_high += 1;
            } else {
                n_low += 1;
            }
        }
    }
    reals.sort_by(|a, b| a.partial_cmp(b).unwrap());
    let m = (2 * rx + 1) * (2 * ry + 1) / 2;
    assert!(
        m >= n_low && m - n_low < reals.len(),
        "median slot fell on a sentinel: m={m} low={n_low} high={n_high}"
    );
    reals[m - n_low]
}

/// Brute-force expected output for `params`. NOP border cells are produced
/// as `T::ZERO`; compare only the interior for that mode.
pub fn expected<T: Pixel>(input: &Image<T>, params: &MedianParams) -> Image<T> {
    let rx = params.rx;
    let ry = params.ry;
    let (ow, oh) = params.output_dims(input.w, input.h);
    let mut out = Image::new(ow, oh);

    match params.border {
        BorderMode::Crop => {
            for cy in ry..input.h - ry {
                for cx in rx..input.w - rx {
                    out.set(cx - rx, cy - ry, interior_median(input, cx, cy, rx, ry));
                }
            }
        }
        BorderMode::Filter => {
            for cy in 0..input.h {
                for cx in 0..input.w {
                    out.set(cx, cy, filter_median(input, cx, cy, rx, ry));
                }
            }
        }
        BorderMode::Zero | BorderMode::Nop | BorderMode::Copy => {
            for cy in ry..input.h - ry {
                for cx in rx..input.w - rx {
                    out.set(cx, cy, interior_median(input, cx, cy, rx, ry));
                }
            }
            if params.border == BorderMode::Copy {
                for cy in 0..input.h {
                    for cx in 0..input.w {
                        let inside =
                            cx >= rx && cx < input.w - rx && cy >= ry && cy < input.h - ry;
                        if !inside {
                            out.set(cx, cy, input.get(cx, cy));
                        }
                    }
                }
            }
        }
    }
    out
}
