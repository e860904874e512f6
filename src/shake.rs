//! SHAKE extendable-output functions.
//!
//! One-shot entry points fill a caller slice exactly; the readers absorb
//! once at construction and squeeze incrementally, producing the same byte
//! stream for every split of the output.

use alloc::vec;
use alloc::vec::Vec;

use crate::params::Variant;
use crate::sponge::Sponge;

/// SHAKE128(msg), squeezed to fill `out` exactly.
pub fn shake128(msg: &[u8], out: &mut [u8]) {
    xof(Variant::Shake128, msg, out);
}

/// SHAKE256(msg), squeezed to fill `out` exactly.
pub fn shake256(msg: &[u8], out: &mut [u8]) {
    xof(Variant::Shake256, msg, out);
}

/// SHAKE128(msg) into an owned buffer of `len` bytes.
#[must_use]
pub fn shake128_vec(msg: &[u8], len: usize) -> Vec<u8> {
    let mut out = vec![0u8; len];
    shake128(msg, &mut out);
    out
}

/// SHAKE256(msg) into an owned buffer of `len` bytes.
#[must_use]
pub fn shake256_vec(msg: &[u8], len: usize) -> Vec<u8> {
    let mut out = vec![0u8; len];
    shake256(msg, &mut out);
    out
}

fn xof(variant: Variant, msg: &[u8], out: &mut [u8]) {
    let mut sponge = Sponge::new(variant.rate());
    sponge.absorb(msg, variant.suffix());
    sponge.squeeze(out);
}

/// Incremental SHAKE128 squeezer.
pub struct Shake128Reader {
    sponge: Sponge,
}

impl Shake128Reader {
    /// Absorb `msg` and return a reader positioned at the start of the
    /// output stream.
    #[must_use]
    pub fn new(msg: &[u8]) -> Self {
        let mut sponge = Sponge::new(Variant::Shake128.rate());
        sponge.absorb(msg, Variant::Shake128.suffix());
        Self { sponge }
    }

    /// Fill `out` with the next `out.len()` bytes of the stream.
    pub fn read(&mut self, out: &mut [u8]) {
        self.sponge.squeeze(out);
    }
}

/// Incremental SHAKE256 squeezer.
pub struct Shake256Reader {
    sponge: Sponge,
}

impl Shake256Reader {
    /// Absorb `msg` and return a reader positioned at the start of the
    /// output stream.
    #[must_use]
    pub fn new(msg: &[u8]) -> Self {
        let mut sponge = Sponge::new(Variant::Shake256.rate());
        sponge.absorb(msg, Variant::Shake256.suffix());
        Self { sponge }
    }

    /// Fill `out` with the next `out.len()` bytes of the stream.
    pub fn read(&mut self, out: &mut [u8]) {
        self.sponge.squeeze(out);
    }
}
