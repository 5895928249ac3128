pub mod checkpoints;
pub mod genesis;
pub mod params;
pub mod seeds;

use crate::errors::{ParamsError, ParamsResult};
use crate::Hash;

/// Parses a display-order hash constant such as `"0x000001ef..."`.
pub(crate) fn parse_hash(value: &str) -> ParamsResult<Hash> {
    value.parse().map_err(|e: crypto_hashes::HashError| ParamsError::InvalidHex { value: value.to_string(), reason: e.to_string() })
}

/// Parses a hex byte-string constant such as a public key.
pub(crate) fn parse_hex_bytes(value: &str) -> ParamsResult<Vec<u8>> {
    hex::decode(value).map_err(|e| ParamsError::InvalidHex { value: value.to_string(), reason: e.to_string() })
}
