//! Consensus parameters for the Mnscoin networks: genesis construction and
//! verification, per-network parameter sets, checkpoints, bootstrap seeds and
//! the registry that selects the active network at startup.

pub mod block;
pub mod config;
pub mod constants;
pub mod errors;
pub mod hashing;
pub mod network;
pub mod registry;
pub mod script;
pub mod tx;

pub use crypto_hashes::Hash;

pub use block::{Block, Header};
pub use config::params::{Base58Prefixes, Base58Type, NetworkParams};
pub use errors::{ErrorKind, ParamsError, ParamsResult};
pub use network::NetworkId;
pub use registry::{ParamsRegistry, UnitTestParams};

/// The all-zero hash, used as the previous-block hash of every genesis block.
pub const ZERO_HASH: Hash = Hash::zeroed();

/// Monetary amounts in the smallest unit.
pub type Amount = i64;
