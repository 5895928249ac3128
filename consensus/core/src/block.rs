use serde::{Deserialize, Serialize};

use crate::hashing;
use crate::tx::Transaction;
use crate::Hash;
use crypto_hashes::MerkleTree;

/// Block header in the pre-zerocoin 80-byte layout
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Header {
    pub version: i32,
    pub hash_prev_block: Hash,
    pub hash_merkle_root: Hash,
    pub time: u32,
    pub bits: u32,
    pub nonce: u32,
}

impl Header {
    pub fn new(version: i32, hash_prev_block: Hash, hash_merkle_root: Hash, time: u32, bits: u32, nonce: u32) -> Self {
        Self { version, hash_prev_block, hash_merkle_root, time, bits, nonce }
    }

    pub fn hash(&self) -> Hash {
        hashing::header::calculate_header_hash(self)
    }

    pub fn serialize(&self) -> [u8; crate::constants::HEADER_SIZE] {
        hashing::header::serialize_header(self)
    }
}

/// Complete block structure including header and transactions
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Block {
    pub header: Header,
    pub transactions: Vec<Transaction>,
}

impl Block {
    pub fn new(header: Header, transactions: Vec<Transaction>) -> Self {
        Self { header, transactions }
    }

    pub fn hash(&self) -> Hash {
        self.header.hash()
    }

    /// Merkle root over the transaction ids; a single transaction is its own root.
    pub fn calculate_merkle_root(&self) -> Hash {
        let leaves = self.transactions.iter().map(Transaction::id).collect();
        MerkleTree::from_leaves(leaves).root()
    }
}
