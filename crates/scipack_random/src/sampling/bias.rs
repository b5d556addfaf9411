//! Biased bit-vectors from the binary expansion of a dyadic probability.
//!
//! Consider a binary tree rooted at 0.5 where the left child of a node with
//! value `P` is `P / 2` (AND with a fresh fair word) and the right child is
//! `P + (1 - P) / 2` (OR with a fresh fair word):
//!
//! ```text
//!                      0.5
//!            AND ______|______ OR
//!               |             |
//!              .25           .75
//!        AND __|__ OR   AND __|__ OR
//!           |     |        |      |
//!         .125  .625     .375   .875
//! ```
//!
//! The path from the root to `n / 2^m` is exactly the binary expansion of
//! `n`, read from its lowest set bit up to bit `m - 1`, with 0 meaning AND and
//! 1 meaning OR. Walking that path over 64-bit words produces 64 independent
//! trials per word using at most `m` raw draws and no arithmetic rounding.

use crate::error::{GeneratorError, Result};
use crate::generator::BitStream;

/// A probability `numerator / 2^exponent` with `0 < numerator < 2^exponent`
/// and `1 <= exponent <= 64`.
///
/// # Examples
///
/// ```rust
/// use scipack_random::Dyadic;
///
/// let p = Dyadic::new(3, 3).unwrap(); // 3/8
/// assert_eq!(p.probability(), 0.375);
/// assert_eq!(p.span(), 3);
///
/// assert!(Dyadic::new(0, 8).is_err());
/// assert!(Dyadic::new(1, 65).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Dyadic {
    numerator: u64,
    exponent: u32,
}

impl Dyadic {
    /// Largest supported exponent.
    pub const MAX_EXPONENT: u32 = 64;

    /// Validates and builds a dyadic probability.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::ArgumentOutOfBounds`] if `exponent` is
    /// outside `[1, 64]`, `numerator` is zero, or `numerator >= 2^exponent`.
    pub fn new(numerator: u64, exponent: u32) -> Result<Self> {
        if exponent == 0 || exponent > Self::MAX_EXPONENT {
            return Err(GeneratorError::ArgumentOutOfBounds {
                name: "exponent",
                value: format!("{} is outside [1, 64]", exponent),
            });
        }
        if numerator == 0 {
            return Err(GeneratorError::ArgumentOutOfBounds {
                name: "numerator",
                value: "must be positive".to_string(),
            });
        }
        if exponent < Self::MAX_EXPONENT && numerator >> exponent != 0 {
            return Err(GeneratorError::ArgumentOutOfBounds {
                name: "numerator",
                value: format!("{} is not below 2^{}", numerator, exponent),
            });
        }
        Ok(Self {
            numerator,
            exponent,
        })
    }

    /// Rounds a real probability to the nearest numerator at the given
    /// resolution, clamped to `[1, 2^exponent - 1]`.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::ArgumentOutOfBounds`] if `p` is not strictly
    /// inside `(0, 1)` or `exponent` is outside `[1, 64]`.
    pub fn from_probability(p: f64, exponent: u32) -> Result<Self> {
        if !(p > 0.0 && p < 1.0) {
            return Err(GeneratorError::ArgumentOutOfBounds {
                name: "probability",
                value: format!("{} is outside (0, 1)", p),
            });
        }
        if exponent == 0 || exponent > Self::MAX_EXPONENT {
            return Err(GeneratorError::ArgumentOutOfBounds {
                name: "exponent",
                value: format!("{} is outside [1, 64]", exponent),
            });
        }

        let max = u64::MAX >> (Self::MAX_EXPONENT - exponent);
        let scaled = (p * 2f64.powi(exponent as i32)).round();
        // Float-to-int casts saturate, so the clamp handles both ends.
        let numerator = (scaled as u64).clamp(1, max);
        Self::new(numerator, exponent)
    }

    /// Numerator of the fraction.
    #[inline]
    pub fn numerator(&self) -> u64 {
        self.numerator
    }

    /// Power of two in the denominator.
    #[inline]
    pub fn exponent(&self) -> u32 {
        self.exponent
    }

    /// Index of the first tree step (lowest set bit of the numerator).
    #[inline]
    pub fn offset(&self) -> u32 {
        self.numerator.trailing_zeros()
    }

    /// Number of raw draws consumed per biased word.
    #[inline]
    pub fn span(&self) -> u32 {
        self.exponent - self.offset()
    }

    /// The probability as a real number.
    pub fn probability(&self) -> f64 {
        self.numerator as f64 / 2f64.powi(self.exponent as i32)
    }
}

/// Builds one word of 64 independent trials at probability `p`.
#[inline]
pub fn biased_word<S>(stream: &mut S, p: Dyadic) -> u64
where
    S: BitStream + ?Sized,
{
    let mut accumulator = 0u64;

    for position in p.offset()..p.exponent() {
        let draw = stream.advance();
        if (p.numerator() >> position) & 1 == 1 {
            accumulator |= draw;
        } else {
            accumulator &= draw;
        }
    }

    accumulator
}

/// Fills `dest` with biased words, each starting from an empty accumulator.
pub fn fill_biased<S>(stream: &mut S, dest: &mut [u64], p: Dyadic)
where
    S: BitStream + ?Sized,
{
    for value in dest.iter_mut() {
        *value = biased_word(stream, p);
    }
}

/// Counts successes in `trials` Bernoulli trials at probability `p`.
///
/// Full words contribute all 64 trials; the final partial word keeps only
/// its top `trials % 64` bits. No draws are made when `trials` is zero.
pub fn binomial_count<S>(stream: &mut S, trials: u64, p: Dyadic) -> u64
where
    S: BitStream + ?Sized,
{
    let mut successes = 0u64;
    let mut remaining = trials;

    while remaining > 64 {
        successes += u64::from(biased_word(stream, p).count_ones());
        remaining -= 64;
    }

    if remaining > 0 {
        let tail = biased_word(stream, p) >> (64 - remaining);
        successes += u64::from(tail.count_ones());
    }

    successes
}
