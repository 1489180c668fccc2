//! Deterministic synthetic images for the filter tests.

use fastmedian::Image;

/// Tiny xorshift64 generator; deterministic across platforms, no crates.
pub struct XorShift64(pub u64);

impl XorShift64 {
    pub fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
}

pub fn noise_i32(w: usize, h: usize, seed: u64) -> Image<i32> {
    let mut rng = XorShift64(seed | 1);
    let data = (0..w * h)
        .map(|_| (rng.next_u64() % 2001) as i32 - 1000)
        .collect();
    Image::from_vec(w, h, data)
}

pub fn noise_f32(w: usize, h: usize, seed: u64) -> Image<f32> {
    let mut rng = XorShift64(seed | 1);
    let data = (0..w * h)
        .map(|_| (rng.next_u64() % 100_000) as f32 / 37.0 - 1000.0)
        .collect();
    Image::from_vec(w, h, data)
}

pub fn noise_f64(w: usize, h: usize, seed: u64) -> Image<f64> {
    let mut rng = XorShift64(seed | 1);
    let data = (0..w * h)
        .map(|_| (rng.next_u64() % 1_000_000) as f64 / 997.0 - 500.0)
        .collect();
    Image::from_vec(w, h, data)
}

/// High-contrast checkerboard with `cell × cell` tiles.
pub fn checkerboard_i32(w: usize, h: usize, cell: usize, lo: i32, hi: i32) -> Image<i32> {
    assert!(cell > 0, "cell size must be positive");
    let mut img = Image::filled(w, h, lo);
    for y in 0..h {
        for x in 0..w {
            if (x / cell + y / cell) % 2 == 1 {
                img.set(x, y, hi);
            }
        }
    }
    img
}

/// Strictly ascending values, the classic worst case for a deterministic
/// median-of-three pivot.
pub fn ascending_i32(w: usize, h: usize) -> Image<i32> {
    Image::from_vec(w, h, (0..(w * h) as i32).collect())
}

pub fn descending_i32(w: usize, h: usize) -> Image<i32> {
    Image::from_vec(w, h, (0..(w * h) as i32).rev().collect())
}
