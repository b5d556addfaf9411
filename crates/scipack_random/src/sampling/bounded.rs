//! Unbiased bounded integers.
//!
//! Bitmask rejection after the 2008 Apple `arc4random_uniform`, with a
//! variable lower bound. A draw is masked down to the bit length of the range
//! and rejected whole if it lands above the range; the unused upper bits are
//! not recycled. Each draw is accepted with probability above one half, so
//! fewer than two draws are expected per sample.

use crate::error::{GeneratorError, Result};
use crate::generator::BitStream;

/// Smallest all-ones mask covering `range`.
///
/// A zero range gives a zero mask, so the single draw of a degenerate
/// request is always accepted.
#[inline]
pub fn bitmask(range: u64) -> u64 {
    u64::MAX.checked_shr(range.leading_zeros()).unwrap_or(0)
}

/// Validates an inclusive range.
///
/// # Errors
///
/// Returns [`GeneratorError::ArgumentOutOfBounds`] if `min > max`.
#[inline]
pub fn check_bounds(min: u64, max: u64) -> Result<()> {
    if min > max {
        return Err(GeneratorError::ArgumentOutOfBounds {
            name: "max",
            value: format!("max {} is below min {}", max, min),
        });
    }
    Ok(())
}

/// Draws one integer uniformly from `[min, max]`.
///
/// # Errors
///
/// Returns [`GeneratorError::ArgumentOutOfBounds`] if `min > max`.
pub fn bounded<S>(stream: &mut S, min: u64, max: u64) -> Result<u64>
where
    S: BitStream + ?Sized,
{
    check_bounds(min, max)?;
    let range = max - min;
    Ok(draw_masked(stream, range, bitmask(range)) + min)
}

/// Fills `dest` with integers drawn uniformly from `[min, max]`.
///
/// # Errors
///
/// Returns [`GeneratorError::ArgumentOutOfBounds`] if `min > max`, before
/// any draw is made.
pub fn fill_bounded<S>(stream: &mut S, dest: &mut [u64], min: u64, max: u64) -> Result<()>
where
    S: BitStream + ?Sized,
{
    check_bounds(min, max)?;

    let range = max - min;
    let mask = bitmask(range);

    for value in dest.iter_mut() {
        *value = draw_masked(stream, range, mask) + min;
    }
    Ok(())
}

#[inline]
fn draw_masked<S>(stream: &mut S, range: u64, mask: u64) -> u64
where
    S: BitStream + ?Sized,
{
    loop {
        let candidate = stream.advance() & mask;
        if candidate <= range {
            return candidate;
        }
    }
}
