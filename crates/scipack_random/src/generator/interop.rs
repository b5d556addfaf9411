//! [`rand::RngCore`] for [`Generator`].
//!
//! Lets a reproducible SCIPACK stream drive any consumer written against the
//! `rand` traits. `next_u32` takes the high half of a raw output; byte fills
//! consume whole raw outputs in little-endian order.

use rand::RngCore;

use super::{BitStream, Generator};

impl RngCore for Generator {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        (self.advance() >> 32) as u32
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        self.advance()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(8) {
            let bytes = self.advance().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}
