//! SHA-3 and SHAKE (FIPS 202) over a single scalar Keccak-f[1600] sponge.
//!
//! One permutation and one sponge serve all six named variants; only the
//! parameter tuple differs:
//!
//! | Primitive | Rate (bytes) | Suffix | Output |
//! |-----------|--------------|--------|--------------|
//! | SHAKE128  | 168          | 0x1F   | caller-chosen |
//! | SHAKE256  | 136          | 0x1F   | caller-chosen |
//! | SHA3-224  | 144          | 0x06   | 28 bytes |
//! | SHA3-256  | 136          | 0x06   | 32 bytes |
//! | SHA3-384  | 104          | 0x06   | 48 bytes |
//! | SHA3-512  | 72           | 0x06   | 64 bytes |
//!
//! Every call owns its state, zeroed at creation and wiped on drop, so
//! concurrent hashing from separate threads needs no coordination.
//!
//! ```
//! let digest = sha3_rs::sha3_256(b"abc");
//! assert_eq!(
//!     sha3_rs::hex_encode(&digest),
//!     "3a985da74fe225b2045c172d6bd390bd855f086e3e9d525b46bfe24511431532",
//! );
//! ```

#![no_std]

extern crate alloc;

mod keccak;
mod params;
mod sha3;
mod shake;
mod sponge;

pub use params::{
    SHA3_224_RATE, SHA3_256_RATE, SHA3_384_RATE, SHA3_512_RATE, SHAKE128_RATE, SHAKE256_RATE,
    STATE_BYTES, Variant,
};
pub use sha3::{hex_encode, sha3_224, sha3_256, sha3_256_hex, sha3_384, sha3_512};
pub use shake::{
    Shake128Reader, Shake256Reader, shake128, shake128_vec, shake256, shake256_vec,
};
