//! Boustrophedon sliding-window driver.
//!
//! The scan alternates left→right and right→left by rows, with a one-row
//! down-step at each turn, so consecutive window positions always differ by
//! exactly one column (or one row of columns at the turn) — the double heap
//! is never rebuilt after the first window.
//!
//! Horizontal steps pair the incoming column's sorted indices with the
//! outgoing column's rank by rank. Matched ranks tend to land near the slot
//! they evict, which keeps the expected heap bubble distance near zero on
//! natural images; it is a heuristic, not an invariant.
use crate::filter::columns::SortedColumns;
use crate::filter::dheap::DoubleHeap;
use crate::image::Pixel;

/// Output mapping: the window centered at source (x, y) writes
/// `data[(y - ry + y0) * stride + (x - rx + x0)]`. CROP uses zero offsets;
/// full-size modes pass `x0 = rx, y0 = ry` to write the interior in place.
pub(crate) struct SlideOutput<'o, T> {
    pub data: &'o mut [T],
    pub stride: usize,
    pub x0: usize,
    pub y0: usize,
}

impl<T: Copy> SlideOutput<'_, T> {
    #[inline]
    fn emit(&mut self, ox: usize, oy: usize, v: T) {
        self.data[(oy + self.y0) * self.stride + ox + self.x0] = v;
    }
}

/// One horizontal step: refresh the incoming column's cache, then feed the
/// heap rank-matched replacement pairs.
fn advance<T: Pixel>(
    heap: &mut DoubleHeap<'_, T>,
    cache: &mut SortedColumns,
    buf: &[T],
    stride: usize,
    ry_full: usize,
    row: usize,
    col_in: usize,
    col_out: usize,
) {
    if row == 0 {
        cache.init(buf, stride, col_in, 0);
    } else {
        let old = (row - 1) * stride + col_in;
        let new = (row + ry_full - 1) * stride + col_in;
        cache.replace(buf, col_in, old, new);
    }
    let incoming = cache.column(col_in);
    let outgoing = cache.column(col_out);
    for k in 0..ry_full {
        heap.replace(incoming[k], outgoing[k]);
    }
}

/// Run the general engine over `buf` (dense, `stride == nx`), emitting one
/// median per valid window position. Geometry must be pre-validated:
/// `nx >= 2*rx + 1`, `ny >= 2*ry + 1`, window size ≥ 3.
pub(crate) fn slide<T: Pixel>(
    buf: &[T],
    nx: usize,
    ny: usize,
    rx: usize,
    ry: usize,
    mut out: SlideOutput<'_, T>,
) {
    let rx_full = 2 * rx + 1;
    let ry_full = 2 * ry + 1;
    debug_assert!(nx >= rx_full && ny >= ry_full);
    debug_assert_eq!(buf.len(), nx * ny);

    let cols_out = nx - 2 * rx;
    let rows_out = ny - 2 * ry;

    let mut cache = SortedColumns::new(nx, ry_full);
    for c in 0..rx_full {
        cache.init(buf, nx, c, 0);
    }
    let first_window: Vec<usize> = (0..ry_full)
        .flat_map(|r| (0..rx_full).map(move |c| r * nx + c))
        .collect();
    let mut heap = DoubleHeap::new(buf, first_window);

    // `x` is the output column of the current window position.
    let mut x = 0usize;
    for row in 0..rows_out {
        if row == 0 {
            out.emit(0, 0, heap.median());
        } else {
            // Down-step: every window column trades its top row for the new
            // bottom row. Each cache is exactly one row stale here.
            for c in x..x + rx_full {
                let old = (row - 1) * nx + c;
                let new = (row + ry_full - 1) * nx + c;
                cache.replace(buf, c, old, new);
                heap.replace(new, old);
            }
            out.emit(x, row, heap.median());
        }

        if row % 2 == 0 {
            for ox in x + 1..cols_out {
                advance(
                    &mut heap,
                    &mut cache,
                    buf,
                    nx,
                    ry_full,
                    row,
                    ox + rx_full - 1,
                    ox - 1,
                );
                out.emit(ox, row, heap.median());
            }
            x = cols_out - 1;
        } else {
            for ox in (0..x).rev() {
                advance(
                    &mut heap,
                    &mut cache,
                    buf,
                    nx,
                    ry_full,
                    row,
                    ox,
                    ox + rx_full,
                );
                out.emit(ox, row, heap.median());
            }
            x = 0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn brute(buf: &[i32], nx: usize, rx: usize, ry: usize, cx: usize, cy: usize) -> i32 {
        let mut v = Vec::new();
        for y in cy - ry..=cy + ry {
            for x in cx - rx..=cx + rx {
                v.push(buf[y * nx + x]);
            }
        }
        v.sort_unstable();
        v[v.len() / 2]
    }

    fn run(buf: &[i32], nx: usize, ny: usize, rx: usize, ry: usize) -> Vec<i32> {
        let cols = nx - 2 * rx;
        let rows = ny - 2 * ry;
        let mut out = vec![0; cols * rows];
        slide(
            buf,
            nx,
            ny,
            rx,
            ry,
            SlideOutput {
                data: &mut out,
                stride: cols,
                x0: 0,
                y0: 0,
            },
        );
        out
    }

    #[test]
    fn matches_brute_force_5x5_window() {
        let nx = 11;
        let ny = 9;
        // Deterministic scrambled values.
        let buf: Vec<i32> = (0..nx * ny).map(|i| ((i as i64 * 37) % 101) as i32).collect();
        let (rx, ry) = (2, 2);
        let out = run(&buf, nx, ny, rx, ry);
        let cols = nx - 2 * rx;
        for cy in ry..ny - ry {
            for cx in rx..nx - rx {
                assert_eq!(
                    out[(cy - ry) * cols + (cx - rx)],
                    brute(&buf, nx, rx, ry, cx, cy),
                    "mismatch at ({cx}, {cy})"
                );
            }
        }
    }

    #[test]
    fn matches_brute_force_asymmetric_window() {
        let nx = 10;
        let ny = 12;
        let buf: Vec<i32> = (0..nx * ny).map(|i| ((i as i64 * 53) % 97) as i32).collect();
        for &(rx, ry) in &[(3usize, 1usize), (1, 3), (0, 2), (2, 0)] {
            let out = run(&buf, nx, ny, rx, ry);
            let cols = nx - 2 * rx;
            for cy in ry..ny - ry {
                for cx in rx..nx - rx {
                    assert_eq!(
                        out[(cy - ry) * cols + (cx - rx)],
                        brute(&buf, nx, rx, ry, cx, cy),
                        "rx={rx} ry={ry} mismatch at ({cx}, {cy})"
                    );
                }
            }
        }
    }

    #[test]
    fn window_as_wide_as_image() {
        let nx = 5;
        let ny = 7;
        let buf: Vec<i32> = (0..nx * ny).map(|i| ((i as i64 * 29) % 83) as i32).collect();
        let (rx, ry) = (2, 1);
        let out = run(&buf, nx, ny, rx, ry);
        assert_eq!(out.len(), ny - 2 * ry);
        for cy in ry..ny - ry {
            assert_eq!(out[cy - ry], brute(&buf, nx, rx, ry, rx, cy));
        }
    }
}
