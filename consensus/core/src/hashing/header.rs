use crate::block::Header;
use crate::constants::HEADER_SIZE;
use crate::Hash;
use crypto_hashes::quark_hash;
use primitive_types::U256;

/// Expands compact difficulty bits into a 256-bit target.
///
/// Returns `None` for encodings the reference client rejects: a set sign bit
/// with a non-zero mantissa, or a value that overflows 256 bits.
pub fn compact_to_target(bits: u32) -> Option<U256> {
    let exponent = (bits >> 24) as usize;
    let mantissa = bits & 0x007f_ffff;
    let negative = bits & 0x0080_0000 != 0;

    if mantissa == 0 {
        return Some(U256::zero());
    }
    if negative {
        return None;
    }

    if exponent <= 3 {
        Some(U256::from(mantissa >> (8 * (3 - exponent))))
    } else {
        let shift = 8 * (exponent - 3);
        let significant_bits = 32 - mantissa.leading_zeros() as usize;
        if shift + significant_bits > 256 {
            return None;
        }
        Some(U256::from(mantissa) << shift)
    }
}

/// Reads a hash as the little-endian 256-bit number it encodes.
pub fn hash_to_u256(hash: &Hash) -> U256 {
    U256::from_little_endian(hash.as_bytes())
}

/// The 80-byte consensus encoding of a header.
pub fn serialize_header(header: &Header) -> [u8; HEADER_SIZE] {
    let mut bytes = [0u8; HEADER_SIZE];
    bytes[0..4].copy_from_slice(&header.version.to_le_bytes());
    bytes[4..36].copy_from_slice(header.hash_prev_block.as_bytes());
    bytes[36..68].copy_from_slice(header.hash_merkle_root.as_bytes());
    bytes[68..72].copy_from_slice(&header.time.to_le_bytes());
    bytes[72..76].copy_from_slice(&header.bits.to_le_bytes());
    bytes[76..80].copy_from_slice(&header.nonce.to_le_bytes());
    bytes
}

/// Block hash: Quark over the serialized header.
pub fn calculate_header_hash(header: &Header) -> Hash {
    quark_hash(&serialize_header(header))
}

/// Whether the header hash satisfies the target encoded in its own bits.
pub fn check_proof_of_work(header: &Header) -> bool {
    match compact_to_target(header.bits) {
        Some(target) if !target.is_zero() => hash_to_u256(&calculate_header_hash(header)) <= target,
        _ => false,
    }
}
