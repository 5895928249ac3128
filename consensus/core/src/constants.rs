use crate::Amount;

/// Smallest units per coin.
pub const COIN: Amount = 100_000_000;

/// Header version used by every genesis block.
pub const GENESIS_BLOCK_VERSION: i32 = 1;

/// Serialized header size in bytes (pre-zerocoin layout).
pub const HEADER_SIZE: usize = 80;

/// Coinbase scriptSig prefix value, the compact bits of the original Bitcoin genesis.
pub const GENESIS_COINBASE_BITS_PUSH: i64 = 486_604_799;

/// Block-reward eligibility marker pushed after the bits value.
pub const GENESIS_COINBASE_EXTRA_NONCE: i64 = 4;

/// Final input sequence value.
pub const SEQUENCE_FINAL: u32 = 0xffff_ffff;

/// Activation height for features a network never turns on.
pub const NO_ACTIVATION_HEIGHT: i32 = i32::MAX;

pub const ONE_DAY: i64 = 24 * 60 * 60;
pub const ONE_WEEK: i64 = 7 * ONE_DAY;
