//! Generator construction and teardown.
//!
//! [`construct`] is the single entry point that turns a kind and a raw seed
//! into a ready [`Generator`]. A seed of `0` draws the initial state from
//! [`HardwareEntropy`]; any other seed is expanded through [`mix`].

use tracing::debug;

use crate::entropy::{EntropySource, HardwareEntropy};
use crate::error::{GeneratorError, Result};
use crate::generator::{Engine, Generator, GeneratorKind, Pcg64i, Xorshift64};
use crate::seed::{mix, SeedMode};

/// Creates a generator of `kind` from a raw seed.
///
/// # Arguments
///
/// * `kind` - Generator algorithm
/// * `seed` - `0` for hardware seeding, otherwise a deterministic seed
///
/// # Errors
///
/// Returns [`GeneratorError::HardwareEntropyExhausted`](crate::GeneratorError)
/// if `seed == 0` and the entropy source fails every attempt.
///
/// # Examples
///
/// ```rust
/// use scipack_random::{construct, GeneratorKind};
///
/// let mut rng = construct(GeneratorKind::Pcg64i, 1).unwrap();
/// assert_eq!(rng.next_u64(), 0x575c_9ef2_b858_0b68);
/// ```
pub fn construct(kind: GeneratorKind, seed: u64) -> Result<Generator> {
    let mut entropy = HardwareEntropy::new();
    construct_with_entropy(kind, seed, &mut entropy)
}

/// Creates a generator, drawing any hardware seed material from `source`.
///
/// `source` is consulted only when `seed == 0`.
///
/// # Errors
///
/// Returns [`GeneratorError::HardwareEntropyExhausted`](crate::GeneratorError)
/// if `source` fails every attempt.
pub fn construct_with_entropy<E>(kind: GeneratorKind, seed: u64, source: &mut E) -> Result<Generator>
where
    E: EntropySource + ?Sized,
{
    let mode = SeedMode::from_raw(seed);

    let engine = match (kind, mode) {
        (GeneratorKind::Pcg64i, SeedMode::Deterministic(seed)) => {
            Engine::Pcg64i(Pcg64i::seeded(seed))
        }
        (GeneratorKind::Pcg64i, SeedMode::Hardware) => Engine::Pcg64i(Pcg64i::from_entropy(source)?),
        (GeneratorKind::Xorshift64, SeedMode::Deterministic(seed)) => {
            Engine::Xorshift64(Xorshift64::seeded(seed))
        }
        (GeneratorKind::Xorshift64, SeedMode::Hardware) => {
            Engine::Xorshift64(Xorshift64::from_entropy(source)?)
        }
    };

    debug!(kind = %kind, deterministic = mode.is_deterministic(), "generator constructed");
    Ok(Generator::from_engine(engine, mode))
}

/// Creates a generator from a numeric kind identifier.
///
/// # Errors
///
/// - [`GeneratorError::InvalidKind`](crate::GeneratorError) for an unknown
///   identifier
/// - Any error of [`construct`]
pub fn construct_by_id(identifier: u32, seed: u64) -> Result<Generator> {
    let kind = GeneratorKind::from_identifier(identifier)?;
    construct(kind, seed)
}

/// Releases a generator and clears the handle.
///
/// Calling this on an already cleared handle is a no-op.
pub fn destroy(handle: &mut Option<Generator>) {
    if let Some(generator) = handle.take() {
        debug!(kind = %generator.kind(), "generator destroyed");
    }
}

/// Creates `count` generators for use on separate threads.
///
/// With a non-zero seed, stream `i` is seeded with the `i + 1`-th value of
/// the [`mix`] chain started at `seed`, so the whole family is reproducible.
/// With a zero seed every stream is hardware seeded independently.
///
/// # Errors
///
/// - [`GeneratorError::AllocationFailure`](crate::GeneratorError) if the
///   handle vector cannot be reserved
/// - [`GeneratorError::HardwareEntropyExhausted`](crate::GeneratorError) if
///   hardware seeding fails for any stream
///
/// # Examples
///
/// ```rust
/// use scipack_random::{spawn_streams, GeneratorKind};
///
/// let mut streams = spawn_streams(GeneratorKind::Xorshift64, 9, 4).unwrap();
/// let first: Vec<u64> = streams.iter_mut().map(|rng| rng.next_u64()).collect();
/// assert_eq!(first.len(), 4);
/// assert_ne!(first[0], first[1]);
/// ```
pub fn spawn_streams(kind: GeneratorKind, seed: u64, count: usize) -> Result<Vec<Generator>> {
    let mut streams = Vec::new();
    streams
        .try_reserve_exact(count)
        .map_err(|_| GeneratorError::AllocationFailure { requested: count })?;

    let mut entropy = HardwareEntropy::new();
    let mut chain = seed;

    for _ in 0..count {
        // mix is a bijection fixing zero, so a non-zero chain stays non-zero.
        let sub_seed = if seed == 0 { 0 } else { mix(&mut chain) };
        streams.push(construct_with_entropy(kind, sub_seed, &mut entropy)?);
    }

    debug!(kind = %kind, count, "streams spawned");
    Ok(streams)
}
