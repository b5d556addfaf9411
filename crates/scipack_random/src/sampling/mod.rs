//! # Sampling Algorithms
//!
//! Distributions built exclusively on a generator's raw output stream.
//!
//! - [`bounded`]: unbiased integers in an inclusive range (bitmask rejection)
//! - [`bias`]: 64-wide vectors of Bernoulli trials at a dyadic probability,
//!   and binomial counts built from them
//! - [`uniform`]: reals in `[0, 1)`
//!
//! Every algorithm is generic over [`BitStream`](crate::BitStream) and can be
//! driven by any of the concrete generators directly.

pub mod bias;
pub mod bounded;
pub mod uniform;

pub use bias::Dyadic;

use crate::error::{GeneratorError, Result};

/// Reserves a zero-initialised output buffer of exactly `count` elements.
///
/// Reservation failure is reported instead of aborting the process.
pub(crate) fn allocate<T: Default + Clone>(count: usize) -> Result<Vec<T>> {
    let mut buffer = Vec::new();
    buffer
        .try_reserve_exact(count)
        .map_err(|_| GeneratorError::AllocationFailure { requested: count })?;
    buffer.resize(count, T::default());
    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allocate_exact_length() {
        let buffer: Vec<u64> = allocate(17).unwrap();
        assert_eq!(buffer.len(), 17);
        assert!(buffer.iter().all(|&v| v == 0));
    }

    #[test]
    fn test_allocate_empty() {
        let buffer: Vec<f64> = allocate(0).unwrap();
        assert!(buffer.is_empty());
    }

    #[test]
    fn test_allocate_failure_is_reported() {
        let result: Result<Vec<u64>> = allocate(usize::MAX);
        assert_eq!(
            result,
            Err(GeneratorError::AllocationFailure {
                requested: usize::MAX
            })
        );
    }
}
