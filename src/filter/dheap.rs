//! Double-heap median structure.
//!
//! Layout of `heaps` (slots hold linear pixel-buffer indices):
//!
//! ```text
//! [0 .. m)      max-heap of the below-median half, root at slot 0
//! [m]           the current median
//! (m .. size)   min-heap of the above-median half, root at slot m+1
//! ```
//!
//! `slot` is the inverse map: `slot[heaps[i]] == i` for every index
//! currently in the window, giving O(1) lookup of the element a sliding
//! step evicts. After every completed `replace` the global ordering
//! `max(lower) ≤ value(heaps[m]) ≤ min(upper)` holds.
//!
//! All storage is plain owned arrays addressed by integer handles, built
//! once per filter invocation and dropped with the structure.
use crate::filter::select;
use crate::image::Pixel;

pub(crate) struct DoubleHeap<'a, T: Pixel> {
    buf: &'a [T],
    heaps: Vec<usize>,
    /// Inverse map, sized to the whole pixel buffer.
    slot: Vec<usize>,
    /// Median slot; also the element count of the lower heap.
    m: usize,
    /// Predictor state: did the previous replacement grow the value?
    grew: bool,
}

impl<'a, T: Pixel> DoubleHeap<'a, T> {
    /// Build from the indices of the first window position. `window.len()`
    /// must be odd and at least 3; the 1×1 case never reaches the heap.
    pub fn new(buf: &'a [T], mut window: Vec<usize>) -> Self {
        debug_assert!(window.len() >= 3 && window.len() % 2 == 1);
        let m = window.len() / 2;
        select::select_nth(&mut window, buf, m);

        let mut slot = vec![0usize; buf.len()];
        for (i, &ix) in window.iter().enumerate() {
            slot[ix] = i;
        }
        let mut heap = Self {
            buf,
            heaps: window,
            slot,
            m,
            grew: false,
        };
        // The partition already separates the halves; heapify each side.
        for i in (0..heap.m / 2).rev() {
            heap.sift_down_lower(i);
        }
        let upper = heap.heaps.len() - heap.m - 1;
        for j in (0..upper / 2).rev() {
            heap.sift_down_upper(j);
        }
        heap
    }

    /// Current median value, O(1).
    #[inline]
    pub fn median(&self) -> T {
        self.buf[self.heaps[self.m]]
    }

    /// Swap `old` (in the window) for `new` (entering it) and restore the
    /// double-heap invariant.
    pub fn replace(&mut self, new: usize, old: usize) {
        let pos = self.slot[old];
        debug_assert_eq!(self.heaps[pos], old);
        let grew_now = self.buf[old] < self.buf[new];
        self.heaps[pos] = new;
        self.slot[new] = pos;

        let predicted_grow = self.grew;
        self.grew = grew_now;

        if pos < self.m {
            self.fix_lower(pos, predicted_grow);
        } else if pos > self.m {
            self.fix_upper(pos - self.m - 1, predicted_grow);
        } else {
            self.fix_median();
        }
    }

    #[inline]
    fn val(&self, slot: usize) -> T {
        self.buf[self.heaps[slot]]
    }

    #[inline]
    fn swap_slots(&mut self, a: usize, b: usize) {
        self.heaps.swap(a, b);
        self.slot[self.heaps[a]] = a;
        self.slot[self.heaps[b]] = b;
    }

    // --- lower (max) heap over slots [0, m) --------------------------------

    fn sift_up_lower(&mut self, mut i: usize) -> bool {
        let mut moved = false;
        while i > 0 {
            let p = (i - 1) / 2;
            if self.val(p) < self.val(i) {
                self.swap_slots(p, i);
                i = p;
                moved = true;
            } else {
                break;
            }
        }
        moved
    }

    fn sift_down_lower(&mut self, mut i: usize) -> bool {
        let mut moved = false;
        loop {
            let l = 2 * i + 1;
            if l >= self.m {
                break;
            }
            let mut big = l;
            let r = l + 1;
            if r < self.m && self.val(big) < self.val(r) {
                big = r;
            }
            if self.val(i) < self.val(big) {
                self.swap_slots(i, big);
                i = big;
                moved = true;
            } else {
                break;
            }
        }
        moved
    }

    // --- upper (min) heap over slots (m, size), local indexing -------------

    fn sift_up_upper(&mut self, mut j: usize) -> bool {
        let o = self.m + 1;
        let mut moved = false;
        while j > 0 {
            let p = (j - 1) / 2;
            if self.val(o + j) < self.val(o + p) {
                self.swap_slots(o + j, o + p);
                j = p;
                moved = true;
            } else {
                break;
            }
        }
        moved
    }

    fn sift_down_upper(&mut self, mut j: usize) -> bool {
        let o = self.m + 1;
        let count = self.heaps.len() - o;
        let mut moved = false;
        loop {
            let l = 2 * j + 1;
            if l >= count {
                break;
            }
            let mut small = l;
            let r = l + 1;
            if r < count && self.val(o + r) < self.val(o + small) {
                small = r;
            }
            if self.val(o + small) < self.val(o + j) {
                self.swap_slots(o + j, o + small);
                j = small;
                moved = true;
            } else {
                break;
            }
        }
        moved
    }

    // --- invariant repair ---------------------------------------------------

    /// A slot in the lower heap changed. Reheap locally, then check the
    /// boundary: if the lower maximum now exceeds the median, rotate it in
    /// and cascade the check onto the upper heap.
    fn fix_lower(&mut self, i: usize, predicted_grow: bool) {
        if predicted_grow {
            if !self.sift_up_lower(i) {
                self.sift_down_lower(i);
            }
        } else if !self.sift_down_lower(i) {
            self.sift_up_lower(i);
        }

        if self.val(self.m) < self.val(0) {
            // The new element reached the lower root and outgrew the median.
            // The old median dominates every remaining lower element, so it
            // is a valid max-root as-is.
            self.swap_slots(0, self.m);
            let o = self.m + 1;
            if self.val(o) < self.val(self.m) {
                self.swap_slots(self.m, o);
                self.sift_down_upper(0);
            }
        }
    }

    /// Mirror image of `fix_lower` for the min-heap side.
    fn fix_upper(&mut self, j: usize, predicted_grow: bool) {
        if predicted_grow {
            if !self.sift_down_upper(j) {
                self.sift_up_upper(j);
            }
        } else if !self.sift_up_upper(j) {
            self.sift_down_upper(j);
        }

        let o = self.m + 1;
        if self.val(o) < self.val(self.m) {
            self.swap_slots(self.m, o);
            if self.val(self.m) < self.val(0) {
                self.swap_slots(0, self.m);
                self.sift_down_lower(0);
            }
        }
    }

    /// The median slot itself was replaced: push the new value into
    /// whichever heap it violates. At most one side can be violated.
    fn fix_median(&mut self) {
        let o = self.m + 1;
        if self.val(self.m) < self.val(0) {
            self.swap_slots(0, self.m);
            self.sift_down_lower(0);
        } else if self.val(o) < self.val(self.m) {
            self.swap_slots(self.m, o);
            self.sift_down_upper(0);
        }
    }
}
