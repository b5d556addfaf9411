//! Uniform reals in `[0, 1)`.
//!
//! A raw output is scaled into the unit interval by a power-of-two multiply,
//! never by modulo or division. Multiplying all 64 bits by 2^-64 would round
//! the largest 2^10 outputs up to exactly `1.0`, so the top 53 bits are kept
//! instead: the result is `raw * 2^-64` truncated to double precision.

use crate::error::Result;
use crate::generator::BitStream;

use super::allocate;

/// 2^-53, the spacing of doubles in `[0.5, 1)`.
const UNIT_SCALE: f64 = 1.0 / (1u64 << 53) as f64;

/// Converts a raw output to a real in `[0, 1)`.
#[inline]
pub fn to_unit_interval(raw: u64) -> f64 {
    (raw >> 11) as f64 * UNIT_SCALE
}

/// Fills `dest` with reals in `[0, 1)`, one raw draw per element.
pub fn fill_unit<S>(stream: &mut S, dest: &mut [f64])
where
    S: BitStream + ?Sized,
{
    for value in dest.iter_mut() {
        *value = to_unit_interval(stream.advance());
    }
}

/// Draws `count` raw outputs into a scratch buffer, then converts them.
///
/// # Errors
///
/// Returns [`GeneratorError::AllocationFailure`](crate::GeneratorError) if
/// either buffer cannot be reserved.
pub fn unit_batch<S>(stream: &mut S, count: usize) -> Result<Vec<f64>>
where
    S: BitStream + ?Sized,
{
    let mut scratch: Vec<u64> = allocate(count)?;
    stream.fill(&mut scratch);

    let mut dest: Vec<f64> = allocate(count)?;
    for (real, &raw) in dest.iter_mut().zip(scratch.iter()) {
        *real = to_unit_interval(raw);
    }
    Ok(dest)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    struct Counter(u64);

    impl BitStream for Counter {
        fn advance(&mut self) -> u64 {
            self.0 = self.0.wrapping_add(1 << 60);
            self.0
        }
    }

    #[test]
    fn test_extremes() {
        assert_eq!(to_unit_interval(0), 0.0);
        assert!(to_unit_interval(u64::MAX) < 1.0);
        assert_relative_eq!(to_unit_interval(u64::MAX), 1.0 - UNIT_SCALE);
    }

    #[test]
    fn test_exact_powers_of_two() {
        assert_eq!(to_unit_interval(1 << 63), 0.5);
        assert_eq!(to_unit_interval(1 << 62), 0.25);
        assert_eq!(to_unit_interval(3 << 62), 0.75);
    }

    #[test]
    fn test_low_bits_ignored() {
        assert_eq!(to_unit_interval(0x7FF), 0.0);
        assert_eq!(to_unit_interval(0x800), UNIT_SCALE);
    }

    #[test]
    fn test_batch_matches_streaming() {
        let batch = unit_batch(&mut Counter(0), 8).unwrap();

        let mut streamed = [0.0; 8];
        fill_unit(&mut Counter(0), &mut streamed);

        assert_eq!(batch.as_slice(), &streamed);
        assert_relative_eq!(batch[0], 0.0625);
        assert_relative_eq!(batch[7], 0.5);
    }
}
