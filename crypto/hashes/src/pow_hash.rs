use crate::{quark::quark512, Hash, HASH_SIZE};
use std::io::Write;

/// Quark block hash: the first 32 bytes of the 512-bit Quark digest.
pub fn quark_hash(data: &[u8]) -> Hash {
    let digest = quark512(data);
    let mut out = [0u8; HASH_SIZE];
    out.copy_from_slice(&digest[..HASH_SIZE]);
    Hash::from(out)
}

/// Streaming front end for [`quark_hash`].
///
/// The Quark primitives are not incremental, so writes are buffered and the
/// chain runs once on `finalize`. A writer loaded with the first 76 header
/// bytes can be cloned per nonce with [`QuarkHash::finalize_with_nonce`].
#[derive(Clone, Default)]
pub struct QuarkHash {
    buffer: Vec<u8>,
}

impl QuarkHash {
    pub fn new() -> Self {
        Self { buffer: Vec::with_capacity(80) }
    }

    pub fn finalize(&self) -> Hash {
        quark_hash(&self.buffer)
    }

    /// Hashes the buffered prefix followed by a little-endian nonce, leaving the prefix untouched.
    pub fn finalize_with_nonce(&self, nonce: u32) -> Hash {
        let mut data = Vec::with_capacity(self.buffer.len() + 4);
        data.extend_from_slice(&self.buffer);
        data.extend_from_slice(&nonce.to_le_bytes());
        quark_hash(&data)
    }
}

impl Write for QuarkHash {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.buffer.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}
