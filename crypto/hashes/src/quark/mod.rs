//! The Quark proof-of-work chain: nine rounds over six 512-bit SHA-3
//! candidates, three of them picked by bit 3 of the first digest byte.

mod bmw;

pub use bmw::bmw512;

use groestl::Groestl512;
use jh::Jh512;
use sha3::{Digest, Keccak512};
use skein::{consts::U64, Skein512};

/// Bit of the first digest byte that selects the branch at rounds 3, 6 and 9.
const BRANCH_MASK: u8 = 0x08;

fn digest512<D: Digest>(data: &[u8]) -> [u8; 64] {
    let mut out = [0u8; 64];
    out.copy_from_slice(&D::digest(data));
    out
}

/// BLAKE-512 (final round-3 tweak, 16 rounds).
pub fn blake512(data: &[u8]) -> [u8; 64] {
    // blake-hash is built on the previous digest major version.
    let mut out = [0u8; 64];
    out.copy_from_slice(&<blake_hash::Blake512 as blake_hash::Digest>::digest(data));
    out
}

pub fn groestl512(data: &[u8]) -> [u8; 64] {
    digest512::<Groestl512>(data)
}

pub fn jh512(data: &[u8]) -> [u8; 64] {
    digest512::<Jh512>(data)
}

/// Skein-512 with a 512-bit output.
pub fn skein512(data: &[u8]) -> [u8; 64] {
    digest512::<Skein512<U64>>(data)
}

/// Keccak-512 with the original (pre-FIPS 202) padding.
pub fn keccak512(data: &[u8]) -> [u8; 64] {
    digest512::<Keccak512>(data)
}

/// Full 512-bit Quark digest.
pub fn quark512(data: &[u8]) -> [u8; 64] {
    let h = blake512(data);
    let h = bmw512(&h);
    let h = if h[0] & BRANCH_MASK != 0 { groestl512(&h) } else { skein512(&h) };
    let h = groestl512(&h);
    let h = jh512(&h);
    let h = if h[0] & BRANCH_MASK != 0 { blake512(&h) } else { bmw512(&h) };
    let h = keccak512(&h);
    let h = skein512(&h);
    if h[0] & BRANCH_MASK != 0 {
        keccak512(&h)
    } else {
        jh512(&h)
    }
}
