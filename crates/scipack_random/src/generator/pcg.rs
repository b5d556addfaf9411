//! PCG 64-bit insecure (`pcg_output_rxs_m_xs_64_64`).
//!
//! The PCG family is the work of Melissa O'Neill (<https://www.pcg-random.org/>).
//! State advances by a 64-bit linear congruential step; the output is a
//! random-xorshift, multiply, xorshift permutation of the *pre-advance*
//! state. Seeding replaces PCG's original entropy sources with the SplitMix64
//! finaliser (deterministic) or the hardware entropy source.

use std::num::NonZeroU64;

use crate::entropy::{draw_entropy, EntropySource};
use crate::error::Result;
use crate::seed::mix;

use super::BitStream;

/// LCG multiplier.
pub const PCG_MULTIPLIER: u64 = 0x5851_F42D_4C95_7F2D;

/// Output permutation multiplier.
pub const PCG_OUTPUT_MULTIPLIER: u64 = 0xAEF1_7502_108E_F2D9;

/// State of a PCG 64-bit insecure generator.
///
/// The increment is always odd, which gives the underlying LCG its full
/// period of 2^64.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pcg64i {
    state: u64,
    increment: u64,
}

impl Pcg64i {
    /// Builds a generator from raw parts, forcing the increment odd.
    #[inline]
    pub fn from_parts(state: u64, increment: u64) -> Self {
        Self {
            state,
            increment: increment | 1,
        }
    }

    /// Derives state and increment from two successive mixes of `seed`.
    pub fn seeded(seed: NonZeroU64) -> Self {
        let mut chain = seed.get();
        let state = mix(&mut chain);
        let increment = mix(&mut chain);
        Self::from_parts(state, increment)
    }

    /// Draws state and increment from an entropy source.
    ///
    /// # Errors
    ///
    /// Propagates [`GeneratorError::HardwareEntropyExhausted`](crate::GeneratorError)
    /// from either draw.
    pub fn from_entropy<E>(source: &mut E) -> Result<Self>
    where
        E: EntropySource + ?Sized,
    {
        let state = draw_entropy(source)?;
        let increment = draw_entropy(source)?;
        Ok(Self::from_parts(state, increment))
    }

    /// Current LCG state.
    #[inline]
    pub fn state(&self) -> u64 {
        self.state
    }

    /// LCG increment (always odd).
    #[inline]
    pub fn increment(&self) -> u64 {
        self.increment
    }
}

impl BitStream for Pcg64i {
    #[inline]
    fn advance(&mut self) -> u64 {
        let x = self.state;

        self.state = x
            .wrapping_mul(PCG_MULTIPLIER)
            .wrapping_add(self.increment);

        let fx = ((x >> ((x >> 59) + 5)) ^ x).wrapping_mul(PCG_OUTPUT_MULTIPLIER);
        (fx >> 43) ^ fx
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded(seed: u64) -> Pcg64i {
        Pcg64i::seeded(NonZeroU64::new(seed).unwrap())
    }

    #[test]
    fn test_seeding_known_state() {
        let pcg = seeded(1);
        assert_eq!(pcg.state(), 0x5692_161d_100b_05e5);
        assert_eq!(pcg.increment(), 0x7ab4_0e09_0f36_3a7d);
    }

    #[test]
    fn test_known_output_seed_1() {
        let mut pcg = seeded(1);
        let expected = [
            0x575c_9ef2_b858_0b68,
            0x010f_7513_6ca3_8d96,
            0x0e74_b3b4_4ff6_30f3,
            0x9751_3b63_8f9f_f130,
        ];
        for value in expected {
            assert_eq!(pcg.advance(), value);
        }
    }

    #[test]
    fn test_known_output_seed_42() {
        let mut pcg = seeded(42);
        let expected = [
            0xc2d8_5bb1_1df4_0d83,
            0x2cec_8217_f0ad_5b0d,
            0xd265_8b16_977d_2337,
            0x9841_82e8_fe91_130b,
        ];
        for value in expected {
            assert_eq!(pcg.advance(), value);
        }
    }

    #[test]
    fn test_increment_forced_odd() {
        let pcg = Pcg64i::from_parts(0, 0);
        assert_eq!(pcg.increment(), 1);

        let pcg = Pcg64i::from_parts(0, 7);
        assert_eq!(pcg.increment(), 7);
    }

    #[test]
    fn test_state_update_is_lcg() {
        let mut pcg = Pcg64i::from_parts(3, 5);
        pcg.advance();
        assert_eq!(pcg.state(), 3u64.wrapping_mul(PCG_MULTIPLIER).wrapping_add(5));
    }

    #[test]
    fn test_from_entropy_uses_two_draws() {
        let mut values = vec![10u64, 20].into_iter();
        let mut source = move || values.next();
        let pcg = Pcg64i::from_entropy(&mut source).unwrap();
        assert_eq!(pcg.state(), 10);
        assert_eq!(pcg.increment(), 21);
    }
}
