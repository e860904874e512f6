//! Fixed-output SHA-3 digests and the hex conveniences.

use alloc::string::String;

use crate::params::Variant;
use crate::sponge::Sponge;

/// SHA3-224(msg) -> 28 bytes.
#[must_use]
pub fn sha3_224(msg: &[u8]) -> [u8; 28] {
    digest::<28>(Variant::Sha3_224, msg)
}

/// SHA3-256(msg) -> 32 bytes.
#[must_use]
pub fn sha3_256(msg: &[u8]) -> [u8; 32] {
    digest::<32>(Variant::Sha3_256, msg)
}

/// SHA3-384(msg) -> 48 bytes.
#[must_use]
pub fn sha3_384(msg: &[u8]) -> [u8; 48] {
    digest::<48>(Variant::Sha3_384, msg)
}

/// SHA3-512(msg) -> 64 bytes.
#[must_use]
pub fn sha3_512(msg: &[u8]) -> [u8; 64] {
    digest::<64>(Variant::Sha3_512, msg)
}

/// SHA3-256 rendered as lowercase hex, two characters per byte.
#[must_use]
pub fn sha3_256_hex(msg: &[u8]) -> String {
    hex_encode(&sha3_256(msg))
}

/// Lowercase hex encoding, no separators, no prefix.
#[must_use]
pub fn hex_encode(bytes: &[u8]) -> String {
    hex::encode(bytes)
}

fn digest<const N: usize>(variant: Variant, msg: &[u8]) -> [u8; N] {
    debug_assert!(variant.digest_len() == Some(N));
    let mut sponge = Sponge::new(variant.rate());
    sponge.absorb(msg, variant.suffix());
    let mut out = [0u8; N];
    sponge.squeeze(&mut out);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_message_is_valid_input() {
        // SHA3-256("")
        let expected = [
            0xa7, 0xff, 0xc6, 0xf8, 0xbf, 0x1e, 0xd7, 0x66, 0x51, 0xc1, 0x47, 0x56, 0xa0, 0x61,
            0xd6, 0x62, 0xf5, 0x80, 0xff, 0x4d, 0xe4, 0x3b, 0x49, 0xfa, 0x82, 0xd8, 0x0a, 0x4b,
            0x80, 0xf8, 0x43, 0x4a,
        ];
        assert_eq!(sha3_256(b""), expected);
    }

    #[test]
    fn hex_renders_two_lowercase_chars_per_byte() {
        assert_eq!(hex_encode(&[0x00, 0xAB, 0xFF]), "00abff");
        let hex = sha3_256_hex(b"abc");
        assert_eq!(hex.len(), 64);
        assert_eq!(
            hex,
            "3a985da74fe225b2045c172d6bd390bd855f086e3e9d525b46bfe24511431532"
        );
    }
}
