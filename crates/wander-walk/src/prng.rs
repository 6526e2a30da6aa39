//! Mulberry32: a 32-bit state permutation PRNG.
//!
//! Small, fast, and fully reproducible for a given seed. Not
//! cryptographically secure. The stream can only be restarted by
//! constructing a new generator with the same seed.

use rand::rand_core::impls;
use rand::{RngCore, SeedableRng};

/// Odd Weyl increment applied to the state on each draw.
const INCREMENT: u32 = 0x6D2B_79F5;

/// Scale mapping a `u32` onto `[0, 1)`.
const TWO_POW_32: f64 = 4_294_967_296.0;

/// Seeded Mulberry32 generator.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Mulberry32 {
    state: u32,
}

impl Mulberry32 {
    /// Create a generator from a 32-bit seed.
    pub fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    /// Next raw 32-bit output.
    #[inline]
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_add(INCREMENT);
        let mut t = self.state;
        t = (t ^ (t >> 15)).wrapping_mul(t | 1);
        t ^= t.wrapping_add((t ^ (t >> 7)).wrapping_mul(t | 61));
        t ^ (t >> 14)
    }

    /// Next value in `[0, 1)`.
    #[inline]
    pub fn next_f64(&mut self) -> f64 {
        f64::from(self.next_u32()) / TWO_POW_32
    }

    /// Uniform index in `0..n`, via `floor(next_f64() * n)`.
    ///
    /// `n` must be non-zero.
    #[inline]
    pub fn next_index(&mut self, n: usize) -> usize {
        debug_assert!(n > 0, "next_index called with n == 0");
        ((self.next_f64() * n as f64) as usize).min(n - 1)
    }
}

impl RngCore for Mulberry32 {
    fn next_u32(&mut self) -> u32 {
        Mulberry32::next_u32(self)
    }

    fn next_u64(&mut self) -> u64 {
        impls::next_u64_via_u32(self)
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        impls::fill_bytes_via_next(self, dst)
    }
}

impl SeedableRng for Mulberry32 {
    type Seed = [u8; 4];

    fn from_seed(seed: Self::Seed) -> Self {
        Self::new(u32::from_le_bytes(seed))
    }
}
