//! Seed-locked randomness for tree construction and noise frames.
//!
//! Every random draw in the crate flows through an explicit [`SeededRng`]
//! handle so that a single `u64` seed reproduces an image exactly. The
//! generator is a self-contained xorshift64* with integer-only math; no
//! external RNG crate.

use std::time::{SystemTime, UNIX_EPOCH};

/// Deterministic xorshift64* generator.
#[derive(Debug, Clone, Copy)]
pub struct SeededRng {
    state: u64,
}

impl SeededRng {
    /// Build a generator from a 64-bit seed.
    ///
    /// `seed = 0` is remapped to a fixed non-zero state so the generator
    /// cannot lock into an all-zero sequence.
    pub const fn from_seed(seed: u64) -> Self {
        let mixed = seed ^ 0x9E37_79B9_7F4A_7C15;
        let state = if mixed == 0 {
            0xA076_1D64_78BD_642F
        } else {
            mixed
        };
        Self { state }
    }

    /// Build a generator seeded from wall-clock time.
    ///
    /// Returns the seed alongside the generator so callers can report it
    /// and make the run reproducible after the fact.
    pub fn from_entropy() -> (u64, Self) {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(ENTROPY_FALLBACK);
        // One splitmix64 round so consecutive launches diverge even when
        // the clock resolution is coarse.
        let mut z = nanos.wrapping_add(0x9E37_79B9_7F4A_7C15);
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        let seed = z ^ (z >> 31);
        (seed, Self::from_seed(seed))
    }

    /// Next pseudo-random `u64`.
    #[inline(always)]
    pub fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x >> 12;
        x ^= x << 25;
        x ^= x >> 27;
        self.state = x;
        x.wrapping_mul(0x2545_F491_4F6C_DD1D)
    }

    /// Uniform value in `[lo, hi]` inclusive, via rejection sampling.
    ///
    /// Precondition: `lo <= hi` (checked upstream by the tree builder).
    #[inline]
    pub fn range_inclusive(&mut self, lo: u32, hi: u32) -> u32 {
        debug_assert!(lo <= hi);
        let span = u64::from(hi - lo) + 1;
        let zone = u64::MAX - (u64::MAX % span);
        loop {
            let sample = self.next_u64();
            if sample < zone {
                return lo + (sample % span) as u32;
            }
        }
    }

    /// Uniform index in `[0, len)`.
    #[inline]
    pub fn pick_index(&mut self, len: usize) -> usize {
        debug_assert!(len > 0);
        self.range_inclusive(0, (len - 1) as u32) as usize
    }

    /// Uniform byte, used by the noise test image.
    #[inline]
    pub fn next_byte(&mut self) -> u8 {
        (self.next_u64() >> 56) as u8
    }
}

const ENTROPY_FALLBACK: u64 = 0xACED;
