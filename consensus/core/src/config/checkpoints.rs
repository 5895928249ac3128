use serde::Serialize;
use std::collections::BTreeMap;

use crate::errors::{ParamsError, ParamsResult};
use crate::Hash;

/// Hand-curated block hashes at known heights, used to reject alternate
/// histories before full validation. Immutable once built.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckpointData {
    checkpoints: BTreeMap<u32, Hash>,
    /// UNIX timestamp of the last checkpoint block
    pub last_checkpoint_time: i64,
    /// Total number of transactions between genesis and the last checkpoint
    pub transactions_to_last_checkpoint: u64,
    /// Estimated number of transactions per day after the last checkpoint
    pub transactions_per_day: f64,
}

impl CheckpointData {
    /// Builds the store from `(height, hash)` pairs, which must be in strictly increasing height order.
    pub fn new(
        entries: &[(u32, Hash)],
        last_checkpoint_time: i64,
        transactions_to_last_checkpoint: u64,
        transactions_per_day: f64,
    ) -> ParamsResult<Self> {
        for pair in entries.windows(2) {
            if pair[1].0 <= pair[0].0 {
                return Err(ParamsError::CheckpointOrder { previous: pair[0].0, height: pair[1].0 });
            }
        }
        Ok(Self {
            checkpoints: entries.iter().copied().collect(),
            last_checkpoint_time,
            transactions_to_last_checkpoint,
            transactions_per_day,
        })
    }

    /// Same as [`CheckpointData::new`] with hashes written as display-order hex.
    pub fn from_hex(
        entries: &[(u32, &str)],
        last_checkpoint_time: i64,
        transactions_to_last_checkpoint: u64,
        transactions_per_day: f64,
    ) -> ParamsResult<Self> {
        let parsed =
            entries.iter().map(|(height, hash)| Ok((*height, super::parse_hash(hash)?))).collect::<ParamsResult<Vec<_>>>()?;
        Self::new(&parsed, last_checkpoint_time, transactions_to_last_checkpoint, transactions_per_day)
    }

    pub fn checkpoints(&self) -> &BTreeMap<u32, Hash> {
        &self.checkpoints
    }

    pub fn hash_at(&self, height: u32) -> Option<Hash> {
        self.checkpoints.get(&height).copied()
    }

    /// False only when a checkpoint exists at `height` and names a different block.
    pub fn check_block(&self, height: u32, hash: &Hash) -> bool {
        self.checkpoints.get(&height).map_or(true, |expected| expected == hash)
    }

    pub fn last_checkpoint_height(&self) -> u32 {
        self.checkpoints.keys().next_back().copied().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.checkpoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.checkpoints.is_empty()
    }
}
