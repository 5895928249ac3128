use crate::tx::Transaction;
use crate::Hash;
use crypto_hashes::HashWriter;

/// Double SHA-256 over the consensus encoding, streamed without an intermediate buffer.
pub fn id(tx: &Transaction) -> Hash {
    let mut writer = HashWriter::new();
    // HashWriter::write is infallible.
    let _ = tx.consensus_encode(&mut writer);
    Hash::from(writer.finalize_double())
}
