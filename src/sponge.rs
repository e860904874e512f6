//! Sponge absorb and squeeze over the Keccak permutation.
//!
//! The 200-byte state is held as 25 little-endian lanes; `xor_byte` and
//! `copy_out` give the flat byte view over the same buffer, so absorb and
//! squeeze address it by byte offset while the permutation addresses it by
//! lane.

use zeroize::Zeroize;

use crate::keccak::{self, WORDS};

/// Keccak sponge: the lane state, the rate in bytes, and the squeeze
/// cursor within the current output block.
pub(crate) struct Sponge {
    state: [u64; WORDS],
    rate: usize,
    pos: usize,
}

impl Sponge {
    pub(crate) const fn new(rate: usize) -> Self {
        Self {
            state: [0; WORDS],
            rate,
            pos: 0,
        }
    }

    #[inline]
    fn permute(&mut self) {
        keccak::f1600(&mut self.state);
    }

    /// XOR one byte into the state at byte offset `i`.
    #[inline]
    fn xor_byte(&mut self, i: usize, b: u8) {
        self.state[i / 8] ^= u64::from(b) << (8 * (i % 8));
    }

    /// XOR `block` into the first `block.len()` bytes of the state,
    /// word-wise for the aligned part and byte-wise for the tail.
    fn xor_in(&mut self, block: &[u8]) {
        let mut chunks = block.chunks_exact(8);
        for (s, b) in self.state.iter_mut().zip(chunks.by_ref()) {
            *s ^= u64::from_le_bytes([b[0], b[1], b[2], b[3], b[4], b[5], b[6], b[7]]);
        }
        let aligned = block.len() - block.len() % 8;
        for (i, &b) in chunks.remainder().iter().enumerate() {
            self.xor_byte(aligned + i, b);
        }
    }

    /// Copy `dst.len()` state bytes starting at byte offset `from`.
    fn copy_out(&self, from: usize, dst: &mut [u8]) {
        for (i, b) in dst.iter_mut().enumerate() {
            let j = from + i;
            *b = (self.state[j / 8] >> (8 * (j % 8))) as u8;
        }
    }

    /// Absorb the whole message, the domain suffix, and the multi-rate
    /// padding. Leaves the first output block ready for squeezing.
    pub(crate) fn absorb(&mut self, msg: &[u8], suffix: u8) {
        let mut fill = 0;
        for block in msg.chunks(self.rate) {
            self.xor_in(block);
            if block.len() == self.rate {
                self.permute();
            } else {
                fill = block.len();
            }
        }
        // The suffix lands right after the last absorbed byte. When it
        // occupies the final block byte and carries the leading pad bit in
        // its top position, the block must be flushed before the 0x80
        // terminator goes in.
        self.xor_byte(fill, suffix);
        if suffix & 0x80 != 0 && fill == self.rate - 1 {
            self.permute();
        }
        self.xor_byte(self.rate - 1, 0x80);
        self.permute();
        self.pos = 0;
    }

    /// Copy out exactly `out.len()` bytes, permuting between rate-sized
    /// blocks. The cursor survives across calls, so successive squeezes
    /// continue the same output stream.
    pub(crate) fn squeeze(&mut self, out: &mut [u8]) {
        let mut written = 0;
        while written < out.len() {
            if self.pos == self.rate {
                self.permute();
                self.pos = 0;
            }
            let n = (out.len() - written).min(self.rate - self.pos);
            self.copy_out(self.pos, &mut out[written..written + n]);
            self.pos += n;
            written += n;
        }
    }
}

impl Drop for Sponge {
    fn drop(&mut self) {
        self.state.zeroize();
    }
}
