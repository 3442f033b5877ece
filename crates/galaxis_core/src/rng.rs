//! # Seeded Generators
//!
//! Two independent deterministic generators drive all procedural content:
//!
//! - [`XorshiftRand`]: 4-word xorshift128, seeded from sector coordinates.
//!   Drives system enumeration and naming.
//! - [`BodyRng`]: ChaCha8 seeded from a 6-word key. Drives star and orbit
//!   synthesis inside one system.
//!
//! ## Determinism Guarantee
//!
//! Both generators expose only the raw 32-bit stream through [`SeededRng`].
//! Every derived draw (ranges, floats, fixed point) is computed here with
//! plain modulo and IEEE multiplies, so upgrading `rand` can never reshuffle
//! the galaxy.

use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::fixed_point::Fixed;

/// 2^-32, maps a raw word onto [0, 1).
const INV_2_POW_32: f64 = 1.0 / 4_294_967_296.0;

/// Outputs discarded after seeding. Seeds near the origin correlate for the
/// first few draws.
const DISCARD_DRAWS: usize = 5;

/// Offset that maps signed coordinates onto a strictly positive range.
const SIGNED_REMAP: u32 = 0x7FFF_FFFF;

/// Common interface of the seeded generators.
///
/// Implementors provide the raw stream; every other draw is derived from it.
pub trait SeededRng {
    /// Returns the next raw 32-bit word.
    fn next_u32(&mut self) -> u32;

    /// Raw 32-bit draw.
    #[inline]
    fn int32(&mut self) -> u32 {
        self.next_u32()
    }

    /// Integer in the closed interval `[min, max]`.
    #[inline]
    fn int32_range(&mut self, min: i32, max: i32) -> i32 {
        debug_assert!(min <= max, "int32_range: min {min} > max {max}");
        #[allow(clippy::cast_sign_loss)]
        let span = max.wrapping_sub(min).wrapping_add(1) as u32;
        let raw = self.next_u32();
        let offset = if span == 0 { raw } else { raw % span };
        #[allow(clippy::cast_possible_wrap)]
        let offset = offset as i32;
        offset.wrapping_add(min)
    }

    /// Integer in the half-open interval `[0, max)`.
    ///
    /// # Panics
    ///
    /// Panics if `max <= 0`.
    #[inline]
    fn int32_below(&mut self, max: i32) -> u32 {
        assert!(max > 0, "int32_below: max must be positive, got {max}");
        #[allow(clippy::cast_sign_loss)]
        let bound = max as u32;
        self.next_u32() % bound
    }

    /// Float in `[0, 1)`.
    #[inline]
    fn double(&mut self) -> f64 {
        f64::from(self.next_u32()) * INV_2_POW_32
    }

    /// Float in `[0, max)`.
    #[inline]
    fn double_max(&mut self, max: f64) -> f64 {
        max * self.double()
    }

    /// Fixed-point value in `[0, 1)`; the raw word becomes the fraction.
    #[inline]
    fn fixed(&mut self) -> Fixed {
        Fixed::from_raw(i64::from(self.next_u32()))
    }

    /// Product of `n` [`fixed`](Self::fixed) draws: values in `[0, 1)`
    /// concentrated toward zero.
    ///
    /// # Panics
    ///
    /// Panics if `n` is zero.
    #[inline]
    fn n_fixed(&mut self, n: u32) -> Fixed {
        assert!(n > 0, "n_fixed: at least one draw required");
        let mut value = self.fixed();
        for _ in 1..n {
            value *= self.fixed();
        }
        value
    }

    /// Discards `n` draws.
    #[inline]
    fn skip(&mut self, n: usize) {
        for _ in 0..n {
            self.next_u32();
        }
    }
}

/// Sector-level xorshift128 generator (period 2^128 - 1).
///
/// # Example
///
/// ```rust
/// use galaxis_core::{SeededRng, XorshiftRand};
///
/// let mut a = XorshiftRand::from_sector_seed([0, 0, 0, 0xabcd_1234_u32 as i32]);
/// let mut b = XorshiftRand::from_sector_seed([0, 0, 0, 0xabcd_1234_u32 as i32]);
/// assert_eq!(a.int32(), b.int32());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct XorshiftRand {
    /// The four state words.
    s: [u32; 4],
}

impl XorshiftRand {
    /// Seeds from `[sector_x, sector_y, sector_z, universe_seed]`.
    ///
    /// The three coordinates are remapped from the signed range onto
    /// `[1, 2^32 - 1]`, the universe seed is used as-is. The raw inputs are
    /// then mixed into the state and the first outputs discarded.
    #[must_use]
    pub fn from_sector_seed(seed: [i32; 4]) -> Self {
        #[allow(clippy::cast_sign_loss)]
        let raw = [
            (seed[0] as u32).wrapping_add(SIGNED_REMAP),
            (seed[1] as u32).wrapping_add(SIGNED_REMAP),
            (seed[2] as u32).wrapping_add(SIGNED_REMAP),
            seed[3] as u32,
        ];
        let mut rng = Self { s: raw };
        rng.generate_state(raw);
        rng.skip(DISCARD_DRAWS);
        rng
    }

    /// Seeds directly from four state words. The fourth word should be
    /// non-zero.
    #[must_use]
    pub fn from_state(state: [u32; 4]) -> Self {
        let mut rng = Self { s: state };
        rng.skip(DISCARD_DRAWS);
        rng
    }

    /// Expands a single word into the four state words with a 32-bit
    /// xorshift (shifts 13/17/5). A zero seed is not allowed.
    #[must_use]
    pub fn from_seed(seed: u32) -> Self {
        debug_assert!(seed != 0, "xorshift seed must be non-zero");
        let mut t = seed;
        let mut s = [0u32; 4];
        for word in &mut s {
            t ^= t << 13;
            t >>= 17;
            t ^= t << 5;
            *word = t;
        }
        Self::from_state(s)
    }

    /// Two-round non-linear state mixing against the raw seed words.
    fn generate_state(&mut self, a: [u32; 4]) {
        const N: usize = 4;
        let s = &mut self.s;
        let mut i = 1usize;
        let mut j = 0usize;

        for _ in 0..N {
            let prev = s[i - 1];
            s[i] = (s[i] ^ (prev ^ (prev >> 30)).wrapping_mul(1_664_525))
                .wrapping_add(a[j])
                .wrapping_add(j as u32);
            j = (j + 1) % N;
            i += 1;
            if i == N {
                s[0] = s[N - 1];
                i = 1;
            }
        }
        for _ in 1..N {
            let prev = s[i - 1];
            s[i] = (s[i] ^ (prev ^ (prev >> 30)).wrapping_mul(1_566_083_941))
                .wrapping_sub(i as u32);
            i += 1;
            if i == N {
                s[0] = s[N - 1];
                i = 1;
            }
        }

        // xorshift128 never leaves the all-zero state
        if (s[0] | s[3]) == 0 {
            s[0] = a.iter().fold(0u32, |acc, v| acc.wrapping_add(*v)) | 1;
            s[3] = a.iter().fold(0u32, |acc, v| acc ^ v) | 1;
        }
    }

    /// Returns a copy of the internal state.
    #[must_use]
    pub const fn state(&self) -> [u32; 4] {
        self.s
    }
}

impl SeededRng for XorshiftRand {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        let t = self.s[0] ^ (self.s[0] << 11);
        self.s[0] = self.s[1];
        self.s[1] = self.s[2];
        self.s[2] = self.s[3];
        self.s[3] = self.s[3] ^ (self.s[3] >> 19) ^ (t ^ (t >> 8));
        self.s[3]
    }
}

/// Body-level generator: ChaCha8 keyed by a 6-word seed.
///
/// The key is `{system_index, sector_x, sector_y, sector_z, universe_seed,
/// system_seed}`, each word little-endian, zero padded to 32 bytes.
#[derive(Clone, Debug)]
pub struct BodyRng {
    /// The ChaCha stream.
    inner: ChaCha8Rng,
}

impl BodyRng {
    /// Creates the generator from its 6-word key.
    #[must_use]
    pub fn from_key(key: [u32; 6]) -> Self {
        let mut seed = [0u8; 32];
        for (chunk, word) in seed.chunks_exact_mut(4).zip(key.iter()) {
            chunk.copy_from_slice(&word.to_le_bytes());
        }
        Self {
            inner: ChaCha8Rng::from_seed(seed),
        }
    }
}

impl SeededRng for BodyRng {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        self.inner.next_u32()
    }
}
