//! Non-deterministic seed acquisition.
//!
//! When a generator is constructed with seed `0`, its initial state is drawn
//! from a hardware entropy source. On x86-64 this is the `RDRAND`
//! instruction, which may transiently underflow; Intel's guidance is to retry
//! up to ten times before treating the source as failed. Platforms without
//! `RDRAND` fall back to the operating-system entropy pool.
//!
//! The retry policy is separated from the source through [`EntropySource`],
//! so construction can be exercised against scripted sources in tests.

use rand::rngs::OsRng;
use rand::RngCore;
use tracing::{debug, trace, warn};

use crate::error::{GeneratorError, Result};

/// Maximum number of hardware attempts per requested value.
pub const RDRAND_RETRY_LIMIT: usize = 10;

/// A source of non-deterministic 64-bit values.
///
/// Each call to [`try_draw`](Self::try_draw) models a single hardware
/// instruction attempt and returns `None` on underflow. Closures of type
/// `FnMut() -> Option<u64>` implement the trait, which keeps test doubles
/// short.
pub trait EntropySource {
    /// Makes one attempt to obtain a random value.
    fn try_draw(&mut self) -> Option<u64>;
}

impl<F> EntropySource for F
where
    F: FnMut() -> Option<u64>,
{
    #[inline]
    fn try_draw(&mut self) -> Option<u64> {
        self()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Backend {
    #[cfg(target_arch = "x86_64")]
    Rdrand,
    OperatingSystem,
}

/// Production entropy source.
///
/// Uses `RDRAND` when the CPU reports it at runtime, otherwise reads from the
/// operating system through [`rand::rngs::OsRng`].
#[derive(Clone, Copy, Debug)]
pub struct HardwareEntropy {
    backend: Backend,
}

impl HardwareEntropy {
    /// Detects the best available backend.
    pub fn new() -> Self {
        #[cfg(target_arch = "x86_64")]
        {
            if std::is_x86_feature_detected!("rdrand") {
                return Self {
                    backend: Backend::Rdrand,
                };
            }
        }

        Self {
            backend: Backend::OperatingSystem,
        }
    }

    /// Returns a short name of the active backend, for diagnostics.
    pub fn backend_name(&self) -> &'static str {
        match self.backend {
            #[cfg(target_arch = "x86_64")]
            Backend::Rdrand => "rdrand",
            Backend::OperatingSystem => "os",
        }
    }
}

impl Default for HardwareEntropy {
    fn default() -> Self {
        Self::new()
    }
}

impl EntropySource for HardwareEntropy {
    fn try_draw(&mut self) -> Option<u64> {
        match self.backend {
            #[cfg(target_arch = "x86_64")]
            Backend::Rdrand => rdrand64(),
            Backend::OperatingSystem => {
                let mut bytes = [0u8; 8];
                OsRng.try_fill_bytes(&mut bytes).ok()?;
                Some(u64::from_le_bytes(bytes))
            }
        }
    }
}

#[cfg(target_arch = "x86_64")]
fn rdrand64() -> Option<u64> {
    let mut value = 0u64;
    // SAFETY: the Rdrand backend is only selected after runtime detection.
    let status = unsafe { rdrand64_step(&mut value) };
    (status == 1).then_some(value)
}

#[cfg(target_arch = "x86_64")]
#[target_feature(enable = "rdrand")]
unsafe fn rdrand64_step(value: &mut u64) -> i32 {
    core::arch::x86_64::_rdrand64_step(value)
}

/// Draws one value, retrying up to [`RDRAND_RETRY_LIMIT`] attempts.
///
/// # Errors
///
/// Returns [`GeneratorError::HardwareEntropyExhausted`] if every attempt
/// underflows.
pub fn draw_entropy<E>(source: &mut E) -> Result<u64>
where
    E: EntropySource + ?Sized,
{
    draw_accepted(source, |_| true)
}

/// Draws one non-zero value, retrying up to [`RDRAND_RETRY_LIMIT`] attempts.
///
/// A zero draw counts as a failed attempt, exactly like an underflow.
///
/// # Errors
///
/// Returns [`GeneratorError::HardwareEntropyExhausted`] if no attempt yields
/// a non-zero value.
pub fn draw_nonzero_entropy<E>(source: &mut E) -> Result<u64>
where
    E: EntropySource + ?Sized,
{
    draw_accepted(source, |value| value != 0)
}

fn draw_accepted<E, A>(source: &mut E, accept: A) -> Result<u64>
where
    E: EntropySource + ?Sized,
    A: Fn(u64) -> bool,
{
    for attempt in 1..=RDRAND_RETRY_LIMIT {
        match source.try_draw() {
            Some(value) if accept(value) => {
                trace!(attempt, "entropy draw succeeded");
                return Ok(value);
            }
            Some(_) => debug!(attempt, "entropy draw rejected"),
            None => debug!(attempt, "entropy source underflow"),
        }
    }

    warn!(
        attempts = RDRAND_RETRY_LIMIT,
        "hardware entropy source exhausted"
    );
    Err(GeneratorError::HardwareEntropyExhausted {
        attempts: RDRAND_RETRY_LIMIT,
    })
}
