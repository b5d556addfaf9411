//! # Generator Core
//!
//! Concrete bit-stream generators and the uniform [`Generator`] handle that
//! exposes the operation table `{next, rand, bias, unid}` over them.
//!
//! ## Design Rationale
//!
//! - **Tagged dispatch**: the kind-specific state lives in a private enum and
//!   every operation is a `match` on the tag; there is no erased handle from
//!   which the state has to be recovered.
//! - **Static dispatch in sampling**: sampling algorithms are generic over
//!   [`BitStream`], so the per-draw call is inlined for each generator.
//! - **Batch and slice forms**: every operation is available as an
//!   allocating batch call and as a zero-allocation fill of a caller buffer.
//!
//! ## Module Structure
//!
//! - [`pcg`]: PCG 64-bit insecure
//! - [`xorshift`]: xorshift64
//! - `interop`: [`rand::RngCore`] implementation for [`Generator`]

use std::fmt;
use std::str::FromStr;

use crate::error::{GeneratorError, Result};
use crate::sampling::{self, bias, bounded, uniform, Dyadic};
use crate::seed::SeedMode;

mod interop;
pub mod pcg;
pub mod xorshift;

pub use pcg::Pcg64i;
pub use xorshift::Xorshift64;

/// A source of raw 64-bit outputs.
///
/// Advancement must be a pure function of the implementor's own state.
pub trait BitStream {
    /// Advances the state and returns the next raw output.
    fn advance(&mut self) -> u64;

    /// Fills `dest` with consecutive raw outputs.
    #[inline]
    fn fill(&mut self, dest: &mut [u64]) {
        for value in dest.iter_mut() {
            *value = self.advance();
        }
    }
}

/// Available generator algorithms.
///
/// Identifiers encode `family << 8 | output_bits`.
///
/// # Examples
///
/// ```rust
/// use scipack_random::GeneratorKind;
///
/// let kind: GeneratorKind = "xsh64".parse().unwrap();
/// assert_eq!(kind, GeneratorKind::Xorshift64);
/// assert_eq!(GeneratorKind::from_identifier(0x140).unwrap(), GeneratorKind::Pcg64i);
/// assert!(GeneratorKind::from_identifier(0x180).is_err());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum GeneratorKind {
    /// PCG 64-bit insecure; the default.
    #[default]
    Pcg64i,
    /// Marsaglia xorshift 64-bit.
    #[cfg_attr(feature = "serde", serde(alias = "xsh64"))]
    Xorshift64,
}

impl GeneratorKind {
    /// Every supported kind.
    pub const ALL: [GeneratorKind; 2] = [GeneratorKind::Pcg64i, GeneratorKind::Xorshift64];

    /// Numeric identifier of the kind.
    #[inline]
    pub fn identifier(&self) -> u32 {
        match self {
            Self::Pcg64i => (1 << 8) | 64,
            Self::Xorshift64 => (2 << 8) | 64,
        }
    }

    /// Resolves a numeric identifier.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::InvalidKind`] for unknown identifiers.
    pub fn from_identifier(identifier: u32) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.identifier() == identifier)
            .ok_or_else(|| GeneratorError::InvalidKind(format!("{:#x}", identifier)))
    }

    /// Canonical lowercase name.
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Pcg64i => "pcg64i",
            Self::Xorshift64 => "xorshift64",
        }
    }

    /// Number of 64-bit words in the kind's state block.
    #[inline]
    pub fn state_words(&self) -> usize {
        match self {
            Self::Pcg64i => 2,
            Self::Xorshift64 => 1,
        }
    }
}

impl fmt::Display for GeneratorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for GeneratorKind {
    type Err = GeneratorError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "pcg64i" | "pcg64" | "pcg" => Ok(Self::Pcg64i),
            "xorshift64" | "xsh64" | "xorshift" => Ok(Self::Xorshift64),
            other => Err(GeneratorError::InvalidKind(other.to_string())),
        }
    }
}

impl TryFrom<u32> for GeneratorKind {
    type Error = GeneratorError;

    fn try_from(identifier: u32) -> Result<Self> {
        Self::from_identifier(identifier)
    }
}

/// Kind-specific state block.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum Engine {
    Pcg64i(Pcg64i),
    Xorshift64(Xorshift64),
}

impl BitStream for Engine {
    #[inline]
    fn advance(&mut self) -> u64 {
        match self {
            Engine::Pcg64i(pcg) => pcg.advance(),
            Engine::Xorshift64(xsh) => xsh.advance(),
        }
    }

    // Dispatch once per batch rather than once per element.
    #[inline]
    fn fill(&mut self, dest: &mut [u64]) {
        match self {
            Engine::Pcg64i(pcg) => pcg.fill(dest),
            Engine::Xorshift64(xsh) => xsh.fill(dest),
        }
    }
}

/// A seeded generator instance.
///
/// Created by [`construct`](crate::construct) and mutated in place by every
/// draw. Exclusively owned: all operations take `&mut self`, so a single
/// instance can never be driven from two threads at once.
///
/// # Examples
///
/// ```rust
/// use scipack_random::{construct, GeneratorKind};
///
/// let mut a = construct(GeneratorKind::Xorshift64, 7).unwrap();
/// let mut b = construct(GeneratorKind::Xorshift64, 7).unwrap();
///
/// assert_eq!(a.next(16).unwrap(), b.next(16).unwrap());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Generator {
    engine: Engine,
    seed: SeedMode,
}

impl Generator {
    pub(crate) fn from_engine(engine: Engine, seed: SeedMode) -> Self {
        Self { engine, seed }
    }

    /// Returns the generator algorithm.
    #[inline]
    pub fn kind(&self) -> GeneratorKind {
        match self.engine {
            Engine::Pcg64i(_) => GeneratorKind::Pcg64i,
            Engine::Xorshift64(_) => GeneratorKind::Xorshift64,
        }
    }

    /// Returns how this instance was seeded.
    #[inline]
    pub fn seed_mode(&self) -> SeedMode {
        self.seed
    }

    /// Returns the next raw output.
    #[inline]
    pub fn next_u64(&mut self) -> u64 {
        self.engine.advance()
    }

    /// Returns `count` raw outputs.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::AllocationFailure`] if the output buffer
    /// cannot be reserved.
    pub fn next(&mut self, count: usize) -> Result<Vec<u64>> {
        let mut dest = sampling::allocate(count)?;
        self.engine.fill(&mut dest);
        Ok(dest)
    }

    /// Fills `dest` with raw outputs.
    #[inline]
    pub fn fill_next(&mut self, dest: &mut [u64]) {
        self.engine.fill(dest);
    }

    /// Returns `count` integers uniformly distributed over `[min, max]`.
    ///
    /// Uses bitmask rejection, so there is no modulo bias. The request
    /// `[0, u64::MAX]` reproduces [`next`](Self::next) exactly.
    ///
    /// # Errors
    ///
    /// - [`GeneratorError::ArgumentOutOfBounds`] if `min > max`
    /// - [`GeneratorError::AllocationFailure`] if the buffer cannot be reserved
    pub fn rand(&mut self, count: usize, min: u64, max: u64) -> Result<Vec<u64>> {
        bounded::check_bounds(min, max)?;
        let mut dest = sampling::allocate(count)?;
        bounded::fill_bounded(&mut self.engine, &mut dest, min, max)?;
        Ok(dest)
    }

    /// Fills `dest` with integers uniformly distributed over `[min, max]`.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::ArgumentOutOfBounds`] if `min > max`; `dest`
    /// is left untouched.
    pub fn fill_rand(&mut self, dest: &mut [u64], min: u64, max: u64) -> Result<()> {
        bounded::fill_bounded(&mut self.engine, dest, min, max)
    }

    /// Returns `count` words of 64 independent trials, each bit set with
    /// probability `numerator / 2^exponent`.
    ///
    /// # Errors
    ///
    /// - [`GeneratorError::ArgumentOutOfBounds`] if `numerator == 0`,
    ///   `exponent` is outside `[1, 64]`, or `numerator >= 2^exponent`
    /// - [`GeneratorError::AllocationFailure`] if the buffer cannot be reserved
    pub fn bias(&mut self, count: usize, numerator: u64, exponent: u32) -> Result<Vec<u64>> {
        let probability = Dyadic::new(numerator, exponent)?;
        let mut dest = sampling::allocate(count)?;
        bias::fill_biased(&mut self.engine, &mut dest, probability);
        Ok(dest)
    }

    /// Fills `dest` with biased words.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::ArgumentOutOfBounds`] for an invalid
    /// probability; `dest` is left untouched.
    pub fn fill_bias(&mut self, dest: &mut [u64], numerator: u64, exponent: u32) -> Result<()> {
        let probability = Dyadic::new(numerator, exponent)?;
        bias::fill_biased(&mut self.engine, dest, probability);
        Ok(())
    }

    /// Returns `count` reals uniformly distributed over `[0, 1)`.
    ///
    /// Raw outputs are drawn into a scratch buffer, then converted element by
    /// element.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::AllocationFailure`] if either buffer cannot
    /// be reserved.
    pub fn unid(&mut self, count: usize) -> Result<Vec<f64>> {
        uniform::unit_batch(&mut self.engine, count)
    }

    /// Fills `dest` with reals in `[0, 1)`, converting while streaming.
    #[inline]
    pub fn fill_unid(&mut self, dest: &mut [f64]) {
        uniform::fill_unit(&mut self.engine, dest);
    }

    /// Returns `count` binomial variates: successes in `trials` Bernoulli
    /// trials with probability `numerator / 2^exponent`.
    ///
    /// Trials are simulated 64 at a time with the bias sampler.
    ///
    /// # Errors
    ///
    /// Same conditions as [`bias`](Self::bias).
    pub fn binomial(
        &mut self,
        count: usize,
        trials: u64,
        numerator: u64,
        exponent: u32,
    ) -> Result<Vec<u64>> {
        let probability = Dyadic::new(numerator, exponent)?;
        let mut dest = sampling::allocate(count)?;
        for value in dest.iter_mut() {
            *value = bias::binomial_count(&mut self.engine, trials, probability);
        }
        Ok(dest)
    }
}

impl BitStream for Generator {
    #[inline]
    fn advance(&mut self) -> u64 {
        self.engine.advance()
    }

    #[inline]
    fn fill(&mut self, dest: &mut [u64]) {
        self.engine.fill(dest);
    }
}
