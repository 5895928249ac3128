use thiserror::Error;

use crate::{network::NetworkId, Hash};

/// How a [`ParamsError`] should be read by the caller. Both kinds abort startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The compiled-in consensus data is inconsistent or the registry was misused before selection.
    Integrity,
    /// The calling code broke the registry's usage contract.
    Contract,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParamsError {
    #[error("{network} genesis hash mismatch: expected {expected}, computed {computed}")]
    GenesisHashMismatch { network: NetworkId, expected: Hash, computed: Hash },

    #[error("{network} genesis merkle root mismatch: expected {expected}, computed {computed}")]
    GenesisMerkleMismatch { network: NetworkId, expected: Hash, computed: Hash },

    #[error("unknown network identifier `{0}`")]
    UnknownNetwork(String),

    #[error("no network has been selected")]
    NetworkNotSelected,

    #[error("network {active} is already selected, refusing to switch to {requested}")]
    NetworkAlreadySelected { active: NetworkId, requested: NetworkId },

    #[error("modifiable parameters are only available on unittest, active network is {0}")]
    NotUnitTestNetwork(NetworkId),

    #[error("invalid hex constant `{value}`: {reason}")]
    InvalidHex { value: String, reason: String },

    #[error("checkpoint heights must strictly increase, got {height} after {previous}")]
    CheckpointOrder { previous: u32, height: u32 },

    #[error("{network} checkpoint at height 0 does not match the genesis hash {expected}")]
    CheckpointGenesisMismatch { network: NetworkId, expected: Hash },
}

impl ParamsError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ParamsError::NetworkAlreadySelected { .. } | ParamsError::NotUnitTestNetwork(_) => ErrorKind::Contract,
            _ => ErrorKind::Integrity,
        }
    }
}

pub type ParamsResult<T> = std::result::Result<T, ParamsError>;
