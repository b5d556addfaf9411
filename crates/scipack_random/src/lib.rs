//! # SCIPACK Random
//!
//! Pseudo-random bit-stream generators behind one uniform interface, plus the
//! sampling algorithms built on that stream.
//!
//! This crate provides:
//! - Two reproducible generators: PCG 64-bit insecure ([`GeneratorKind::Pcg64i`])
//!   and Marsaglia's xorshift64 ([`GeneratorKind::Xorshift64`])
//! - Unbiased bounded integers via bitmask rejection
//! - Vectors of 64 biased Bernoulli trials built from the binary expansion of
//!   a dyadic probability
//! - Uniform reals in `[0, 1)`
//! - Deterministic seeding through a SplitMix64 finaliser, or hardware seeding
//!   with bounded retry
//!
//! ## Seeding Convention
//!
//! A seed of `0` is reserved: it requests non-deterministic seeding from the
//! hardware entropy source. Every other seed is deterministic, and two
//! generators of the same kind built from the same non-zero seed produce
//! identical streams.
//!
//! ## Usage Example
//!
//! ```rust
//! use scipack_random::{construct, GeneratorKind};
//!
//! let mut rng = construct(GeneratorKind::Pcg64i, 42).unwrap();
//!
//! let raw = rng.next(4).unwrap();
//! let dice = rng.rand(10, 1, 6).unwrap();
//! let quarter = rng.bias(1, 1, 2).unwrap(); // p = 1/4 on each bit
//! let reals = rng.unid(8).unwrap();
//!
//! assert_eq!(raw.len(), 4);
//! assert!(dice.iter().all(|&d| (1..=6).contains(&d)));
//! assert_eq!(quarter.len(), 1);
//! assert!(reals.iter().all(|&u| (0.0..1.0).contains(&u)));
//! ```
//!
//! ## Safety
//!
//! The generators are statistical, not cryptographic. A [`Generator`] must
//! not be shared between threads without external synchronisation; use one
//! instance per thread (see [`spawn_streams`]).

#![warn(missing_docs)]

pub mod entropy;
pub mod error;
pub mod generator;
pub mod lifecycle;
pub mod sampling;
pub mod seed;

pub use entropy::{EntropySource, HardwareEntropy, RDRAND_RETRY_LIMIT};
pub use error::{GeneratorError, Result, ResultCode};
pub use generator::{BitStream, Generator, GeneratorKind};
pub use lifecycle::{construct, construct_by_id, construct_with_entropy, destroy, spawn_streams};
pub use sampling::Dyadic;
pub use seed::{mix, SeedMode};
