//! Seed expansion.
//!
//! A single 64-bit seed is expanded into independent sub-seeds with the
//! SplitMix64 finaliser (Vigna's version of Java `SplittableRandom`). The
//! Weyl increment of the full SplitMix64 generator is replaced by writing the
//! output back through the reference, so each call on the same variable
//! continues the chain.

use std::num::NonZeroU64;

/// Avalanche-mixes `value` in place and returns the new value.
///
/// Repeated calls on the same variable yield a sequence of independent
/// sub-seeds. The function is a bijection with `mix(0) == 0`, so a non-zero
/// input never mixes to zero.
///
/// # Examples
///
/// ```rust
/// use scipack_random::mix;
///
/// let mut seed = 1;
/// let first = mix(&mut seed);
/// assert_eq!(seed, first);
///
/// let second = mix(&mut seed);
/// assert_ne!(first, second);
/// ```
#[inline]
pub fn mix(value: &mut u64) -> u64 {
    let mut i = *value;

    i ^= i >> 30;
    i = i.wrapping_mul(0xbf58_476d_1ce4_e5b9);
    i ^= i >> 27;
    i = i.wrapping_mul(0x94d0_49bb_1331_11eb);
    i ^= i >> 31;

    *value = i;
    i
}

/// How a generator obtains its initial state.
///
/// The raw `u64` seed accepted at the API boundary maps onto this type with
/// [`SeedMode::from_raw`]: zero selects hardware seeding, so a deterministic
/// seed of zero cannot be expressed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SeedMode {
    /// Draw the initial state from the hardware entropy source.
    Hardware,
    /// Derive the initial state from the seed through [`mix`].
    Deterministic(NonZeroU64),
}

impl SeedMode {
    /// Interprets a raw seed, treating `0` as the hardware sentinel.
    #[inline]
    pub fn from_raw(seed: u64) -> Self {
        match NonZeroU64::new(seed) {
            Some(seed) => Self::Deterministic(seed),
            None => Self::Hardware,
        }
    }

    /// Returns the raw seed, `0` for hardware seeding.
    #[inline]
    pub fn raw(&self) -> u64 {
        match self {
            Self::Hardware => 0,
            Self::Deterministic(seed) => seed.get(),
        }
    }

    /// Returns `true` if the stream will be reproducible.
    #[inline]
    pub fn is_deterministic(&self) -> bool {
        matches!(self, Self::Deterministic(_))
    }
}

impl From<u64> for SeedMode {
    fn from(seed: u64) -> Self {
        Self::from_raw(seed)
    }
}
