//! Parameter tuples for the six FIPS 202 variants.
//!
//! Rate, capacity, domain suffix and digest length exist only as this
//! closed enumeration, so an out-of-range rate or a mismatched output
//! length cannot reach the sponge from the public surface.

/// Width of the Keccak-f[1600] state in bytes.
pub const STATE_BYTES: usize = 200;

/// SHAKE128 rate in bytes (1344 bits / 8).
pub const SHAKE128_RATE: usize = 168;
/// SHAKE256 rate in bytes (1088 bits / 8).
pub const SHAKE256_RATE: usize = 136;
/// SHA3-224 rate in bytes (1152 bits / 8).
pub const SHA3_224_RATE: usize = 144;
/// SHA3-256 rate in bytes (1088 bits / 8).
pub const SHA3_256_RATE: usize = 136;
/// SHA3-384 rate in bytes (832 bits / 8).
pub const SHA3_384_RATE: usize = 104;
/// SHA3-512 rate in bytes (576 bits / 8).
pub const SHA3_512_RATE: usize = 72;

/// Domain-separation suffix for the fixed-output digests.
pub(crate) const SHA3_PAD: u8 = 0x06;
/// Domain-separation suffix for the XOFs.
pub(crate) const SHAKE_PAD: u8 = 0x1F;

/// One of the six named FIPS 202 parameter sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    Shake128,
    Shake256,
    Sha3_224,
    Sha3_256,
    Sha3_384,
    Sha3_512,
}

impl Variant {
    /// Rate in bytes: the block size absorbed or squeezed between
    /// permutations.
    #[must_use]
    pub const fn rate(self) -> usize {
        match self {
            Self::Shake128 => SHAKE128_RATE,
            Self::Shake256 => SHAKE256_RATE,
            Self::Sha3_224 => SHA3_224_RATE,
            Self::Sha3_256 => SHA3_256_RATE,
            Self::Sha3_384 => SHA3_384_RATE,
            Self::Sha3_512 => SHA3_512_RATE,
        }
    }

    /// Capacity in bytes: the state portion held back from absorb/squeeze.
    #[must_use]
    pub const fn capacity(self) -> usize {
        STATE_BYTES - self.rate()
    }

    /// Domain-separation suffix XOR-ed in after the last message byte.
    #[must_use]
    pub const fn suffix(self) -> u8 {
        match self {
            Self::Shake128 | Self::Shake256 => SHAKE_PAD,
            Self::Sha3_224 | Self::Sha3_256 | Self::Sha3_384 | Self::Sha3_512 => SHA3_PAD,
        }
    }

    /// Digest length in bytes, or `None` for the extendable-output
    /// variants.
    #[must_use]
    pub const fn digest_len(self) -> Option<usize> {
        match self {
            Self::Shake128 | Self::Shake256 => None,
            Self::Sha3_224 => Some(28),
            Self::Sha3_256 => Some(32),
            Self::Sha3_384 => Some(48),
            Self::Sha3_512 => Some(64),
        }
    }
}

const _: () = {
    macro_rules! check_rate {
        ($v:expr) => {
            assert!($v.rate() >= 1 && $v.rate() <= STATE_BYTES);
            assert!($v.rate() % 8 == 0);
            assert!($v.rate() + $v.capacity() == STATE_BYTES);
        };
    }
    check_rate!(Variant::Shake128);
    check_rate!(Variant::Shake256);
    check_rate!(Variant::Sha3_224);
    check_rate!(Variant::Sha3_256);
    check_rate!(Variant::Sha3_384);
    check_rate!(Variant::Sha3_512);

    // Fixed digests hold back twice their output length as capacity.
    assert!(Variant::Sha3_224.capacity() == 2 * 28);
    assert!(Variant::Sha3_256.capacity() == 2 * 32);
    assert!(Variant::Sha3_384.capacity() == 2 * 48);
    assert!(Variant::Sha3_512.capacity() == 2 * 64);

    // XOF security strengths pin their capacities the same way.
    assert!(Variant::Shake128.capacity() == 2 * 16);
    assert!(Variant::Shake256.capacity() == 2 * 32);
};
