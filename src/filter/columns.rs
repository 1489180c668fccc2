//! Sorted Column Array: per-column caches of image indices ordered by
//! pixel value, restricted to the window's current vertical span.
//!
//! The sliding driver keeps every column exactly one row stale between
//! visits, so `replace` swaps a single index and bubbles it a short
//! distance; `init` re-sorts a column from scratch and is only needed on
//! the first traversal row.
use crate::filter::select;
use crate::image::Pixel;

pub(crate) struct SortedColumns {
    /// `ry_full` slots per column, one column after another.
    slots: Vec<usize>,
    ry_full: usize,
}

impl SortedColumns {
    pub fn new(nx: usize, ry_full: usize) -> Self {
        Self {
            slots: vec![0; nx * ry_full],
            ry_full,
        }
    }

    #[inline]
    pub fn column(&self, x: usize) -> &[usize] {
        &self.slots[x * self.ry_full..(x + 1) * self.ry_full]
    }

    #[inline]
    fn column_mut(&mut self, x: usize) -> &mut [usize] {
        &mut self.slots[x * self.ry_full..(x + 1) * self.ry_full]
    }

    /// Gather the column's vertical span starting at `y_top` and sort it
    /// by pixel value.
    pub fn init<T: Pixel>(&mut self, buf: &[T], stride: usize, x: usize, y_top: usize) {
        let ry_full = self.ry_full;
        let col = self.column_mut(x);
        for (k, slot) in col.iter_mut().enumerate() {
            *slot = (y_top + k) * stride + x;
        }
        debug_assert_eq!(col.len(), ry_full);
        select::sort_by_value(col, buf);
    }

    /// Replace `old` by `new` in column `x`, restoring order by adjacent
    /// swaps. Linear in the window height in the worst case, O(1) when the
    /// incoming value has a nearby rank.
    pub fn replace<T: Pixel>(&mut self, buf: &[T], x: usize, old: usize, new: usize) {
        let col = self.column_mut(x);
        let mut p = 0;
        while col[p] != old {
            p += 1;
        }
        col[p] = new;
        while p + 1 < col.len() && buf[col[p + 1]] < buf[col[p]] {
            col.swap(p, p + 1);
            p += 1;
        }
        while p > 0 && buf[col[p]] < buf[col[p - 1]] {
            col.swap(p, p - 1);
            p -= 1;
        }
    }
}
