//! Streaming CRC32C accumulator.

use crc32c::crc32c_append;

/// Reusable CRC32C (Castagnoli) digest. One per worker; `reset` between inputs.
#[derive(Clone, Copy, Debug, Default)]
pub struct Digest {
    crc: u32,
}

impl Digest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear to the initial (empty input) state.
    pub fn reset(&mut self) {
        self.crc = 0;
    }

    /// Fold `chunk` into the running checksum.
    pub fn update(&mut self, chunk: &[u8]) {
        self.crc = crc32c_append(self.crc, chunk);
    }

    /// Checksum of every byte fed since the last reset. Does not change state.
    pub fn finalize(&self) -> u32 {
        self.crc
    }
}
