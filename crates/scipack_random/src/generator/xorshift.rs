//! Xorshift 64-bit by George Marsaglia, triple (13, 7, 17).
//!
//! Zero is an absorbing state of the recurrence: a zero state produces an
//! all-zero stream forever. Every constructor therefore guarantees a
//! non-zero state, and the shift-xor steps are invertible, so a non-zero
//! state never advances to zero.

use std::num::NonZeroU64;

use tracing::warn;

use crate::entropy::{draw_nonzero_entropy, EntropySource};
use crate::error::{GeneratorError, Result};
use crate::seed::mix;

use super::BitStream;

/// Replacement state installed if a mixed seed is ever zero.
///
/// The SplitMix64 golden gamma. The mixer maps non-zero seeds to non-zero
/// values, so this is a guard for an unreachable case.
const ZERO_GUARD_STATE: u64 = 0x9E37_79B9_7F4A_7C15;

/// State of a xorshift64 generator. Never zero.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Xorshift64 {
    state: u64,
}

impl Xorshift64 {
    /// Builds a generator from an explicit state.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::ArgumentOutOfBounds`] for a zero state.
    pub fn from_state(state: u64) -> Result<Self> {
        if state == 0 {
            return Err(GeneratorError::ArgumentOutOfBounds {
                name: "state",
                value: "xorshift64 state must be non-zero".to_string(),
            });
        }
        Ok(Self { state })
    }

    /// Derives the state from one mix of `seed`.
    pub fn seeded(seed: NonZeroU64) -> Self {
        let mut chain = seed.get();
        let mut state = mix(&mut chain);
        if state == 0 {
            warn!(seed = seed.get(), "mixed seed is zero, installing guard state");
            state = ZERO_GUARD_STATE;
        }
        Self { state }
    }

    /// Draws a non-zero state from an entropy source.
    ///
    /// Zero draws are discarded and count against the retry limit.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::HardwareEntropyExhausted`] if no attempt
    /// yields a usable state.
    pub fn from_entropy<E>(source: &mut E) -> Result<Self>
    where
        E: EntropySource + ?Sized,
    {
        let state = draw_nonzero_entropy(source)?;
        Ok(Self { state })
    }

    /// Current state, which is also the most recent output.
    #[inline]
    pub fn state(&self) -> u64 {
        self.state
    }
}

impl BitStream for Xorshift64 {
    #[inline]
    fn advance(&mut self) -> u64 {
        self.state ^= self.state << 13;
        self.state ^= self.state >> 7;
        self.state ^= self.state << 17;
        self.state
    }
}
