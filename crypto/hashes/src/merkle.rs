use crate::{hasher::HashWriter, Hash};
use log::trace;
use std::io::Write;

/// Transaction merkle tree: nodes are SHA256d(left || right), and an odd
/// node at any level is paired with itself.
pub struct MerkleTree {
    levels: Vec<Vec<Hash>>,
}

impl MerkleTree {
    /// Create a Merkle tree directly from leaf hashes
    pub fn from_leaves(leaves: Vec<Hash>) -> Self {
        let mut tree = Self { levels: vec![leaves] };
        tree.build_tree();
        tree
    }

    fn build_tree(&mut self) {
        let mut current_level = self.levels[0].clone();
        while current_level.len() > 1 {
            let next_level: Vec<Hash> = current_level
                .chunks(2)
                .map(|chunk| match chunk {
                    [left, right] => Self::hash_pair(left, right),
                    [single] => Self::hash_pair(single, single),
                    _ => unreachable!("chunks(2) yields one or two items"),
                })
                .collect();
            trace!("merkle level {} holds {} nodes", self.levels.len(), next_level.len());
            self.levels.push(next_level.clone());
            current_level = next_level;
        }
    }

    fn hash_pair(left: &Hash, right: &Hash) -> Hash {
        let mut writer = HashWriter::new();
        // Writes into a hasher never fail.
        let _ = writer.write_all(left.as_bytes());
        let _ = writer.write_all(right.as_bytes());
        Hash::from(writer.finalize_double())
    }

    /// The merkle root; a single leaf is its own root and an empty tree has the zero hash.
    pub fn root(&self) -> Hash {
        self.levels.last().and_then(|level| level.first()).copied().unwrap_or_default()
    }
}
