use primitive_types::U256;
use serde::{Serialize, Serializer};

use super::checkpoints::CheckpointData;
use super::genesis::{GenesisBlock, GenesisParams, GenesisPin};
use super::seeds::{expand_seeds, expand_seeds_now, DnsSeed, SeedAddress, SeedSpec6, MAIN_FIXED_SEEDS, TEST_FIXED_SEEDS};
use super::{parse_hash, parse_hex_bytes};
use crate::constants::{COIN, GENESIS_BLOCK_VERSION, NO_ACTIVATION_HEIGHT, ONE_DAY};
use crate::errors::{ParamsError, ParamsResult};
use crate::network::NetworkId;
use crate::Amount;

/// Address and key encodings that carry a network prefix
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Base58Type {
    PubkeyAddress,
    ScriptAddress,
    SecretKey,
    ExtPublicKey,
    ExtSecretKey,
    ExtCoinType,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Base58Prefixes {
    #[serde(with = "hex::serde")]
    pub pubkey_address: Vec<u8>,
    #[serde(with = "hex::serde")]
    pub script_address: Vec<u8>,
    #[serde(with = "hex::serde")]
    pub secret_key: Vec<u8>,
    #[serde(with = "hex::serde")]
    pub ext_public_key: [u8; 4],
    #[serde(with = "hex::serde")]
    pub ext_secret_key: [u8; 4],
    #[serde(with = "hex::serde")]
    pub ext_coin_type: [u8; 4],
}

impl Base58Prefixes {
    pub fn get(&self, kind: Base58Type) -> &[u8] {
        match kind {
            Base58Type::PubkeyAddress => &self.pubkey_address,
            Base58Type::ScriptAddress => &self.script_address,
            Base58Type::SecretKey => &self.secret_key,
            Base58Type::ExtPublicKey => &self.ext_public_key,
            Base58Type::ExtSecretKey => &self.ext_secret_key,
            Base58Type::ExtCoinType => &self.ext_coin_type,
        }
    }
}

fn serialize_u256<S: Serializer>(value: &U256, serializer: S) -> Result<S::Ok, S::Error> {
    let mut bytes = [0u8; 32];
    value.to_big_endian(&mut bytes);
    serializer.serialize_str(&hex::encode(bytes))
}

/// Every consensus and protocol constant for one network.
///
/// Test is derived from Main, RegTest from Test, and UnitTest from Main, each
/// as a full copy of the parent followed by an explicit list of overrides.
/// The genesis block is rebuilt and re-verified after every override set.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkParams {
    pub network: NetworkId,
    #[serde(with = "hex::serde")]
    pub message_start: [u8; 4],
    #[serde(with = "hex::serde")]
    pub alert_pubkey: Vec<u8>,
    pub default_port: u16,
    #[serde(serialize_with = "serialize_u256")]
    pub pow_limit: U256,
    pub max_reorganization_depth: i32,
    pub miner_threads: i32,
    pub target_timespan: i64,
    pub target_spacing: i64,
    pub maturity: i32,
    pub masternode_count_drift: i32,
    pub max_money_out: Amount,
    pub subsidy_halving_interval: i32,

    // Height or time based activations
    pub last_pow_block: i32,
    pub modifier_update_block: i32,
    pub enforce_new_spork_key: i64,
    pub reject_old_spork_key: i64,
    pub block_enforce_serial_range: i32,
    pub block_recalculate_accumulators: i32,
    pub start_masternode_payments: i64,
    pub budget_fee_confirmations: i64,

    pub base58_prefixes: Base58Prefixes,

    pub mining_requires_peers: bool,
    pub allow_min_difficulty_blocks: bool,
    pub default_consistency_checks: bool,
    pub require_standard: bool,
    pub mine_blocks_on_demand: bool,
    pub skip_proof_of_work_check: bool,
    pub testnet_to_be_deprecated_field_rpc: bool,
    pub headers_first_syncing_active: bool,

    pub pool_max_transactions: i32,
    pub spork_key: String,
    pub spork_key_old: String,
    pub obfuscation_pool_dummy_address: String,

    pub genesis_params: GenesisParams,
    pub genesis_pin: GenesisPin,
    pub genesis: GenesisBlock,
    pub checkpoints: CheckpointData,
    pub fixed_seeds: Vec<SeedSpec6>,
    pub dns_seeds: Vec<DnsSeed>,
}

impl NetworkParams {
    pub fn main() -> ParamsResult<Self> {
        let network = NetworkId::Main;
        let genesis_params = GenesisParams {
            timestamp_message: "Join to crypto revolution".to_string(),
            output_pubkey: parse_hex_bytes(
                "0466f8e042492f7e1be50f8fa84bc2d39d0cea242704d219bc6d9cd7d1e20c4abc105e45b0510396978c22a7e9f35d21d6fb10005fc27febc2851ba4f051411865",
            )?,
            reward: 250 * COIN,
            version: GENESIS_BLOCK_VERSION,
            time: 1592833852,
            bits: 0x1e0ffff0,
            nonce: 471733,
        };
        let genesis_pin = GenesisPin {
            hash: parse_hash("0x000001efabad6756e1937bc1c1b98bd066b29fb4e65e750d2ff3e2ca0f7d13d2")?,
            merkle_root: parse_hash("0xa7d76d50fc3b7998b62d003f33adaa06242850e4b32b62b17691d5a4222a9145")?,
        };
        let genesis = GenesisBlock::build_verified(network, &genesis_params, &genesis_pin)?;
        let checkpoints = CheckpointData::from_hex(
            &[(0, "0x000001efabad6756e1937bc1c1b98bd066b29fb4e65e750d2ff3e2ca0f7d13d2")],
            1592833852,
            0,
            2000.0,
        )?;

        let params = Self {
            network,
            message_start: [0x1b, 0x1a, 0x12, 0xaa],
            alert_pubkey: parse_hex_bytes(
                "047be626d85831f24a14157892106cd967ad211f1375512d77dc67e47a9f5d319730922e521bc2279187df35a7b7adcf2140228d1c51c7deb6291f361376591196",
            )?,
            default_port: 24572,
            // Starting difficulty is 1 / 2^12.
            pow_limit: U256::MAX >> 20,
            max_reorganization_depth: 100,
            miner_threads: 0,
            target_timespan: 60,
            target_spacing: 60,
            maturity: 80,
            masternode_count_drift: 20,
            max_money_out: 21_000_000 * COIN,
            subsidy_halving_interval: 210_000,

            last_pow_block: 1000,
            modifier_update_block: 100,
            enforce_new_spork_key: 1592833852,
            reject_old_spork_key: 1592833852,
            block_enforce_serial_range: NO_ACTIVATION_HEIGHT,
            block_recalculate_accumulators: NO_ACTIVATION_HEIGHT,
            start_masternode_payments: 1592833852,
            budget_fee_confirmations: 6,

            base58_prefixes: Base58Prefixes {
                pubkey_address: vec![50],
                script_address: vec![72],
                secret_key: vec![178],
                ext_public_key: [0x02, 0x2d, 0x25, 0x33],
                ext_secret_key: [0x02, 0x21, 0x31, 0x2b],
                ext_coin_type: [0x80, 0x00, 0x00, 0x77],
            },

            mining_requires_peers: true,
            allow_min_difficulty_blocks: false,
            default_consistency_checks: false,
            require_standard: true,
            mine_blocks_on_demand: false,
            skip_proof_of_work_check: false,
            testnet_to_be_deprecated_field_rpc: false,
            headers_first_syncing_active: false,

            pool_max_transactions: 3,
            spork_key: "04eb6ca9d878c19e2e6553b4b98acdbd9f47f454459a7e048effc6a859a2048ca6d910c817ddd7d81b4daaf9ce9af4407f6a3b2af0999d1423961bb3ef525390ec".to_string(),
            spork_key_old: "04ed2b3d956c32a13ee185ed4e00646526770a58188ffeb308d8992c3e1c50c019aff991b49f385175973c2120561f4500f8e814d061eee163717dc6b477dafb71".to_string(),
            obfuscation_pool_dummy_address: "MGfbXEa8iaB4M5GJs3Kq4ZdQ6V97BW6hyw".to_string(),

            genesis_params,
            genesis_pin,
            genesis,
            checkpoints,
            fixed_seeds: MAIN_FIXED_SEEDS.to_vec(),
            dns_seeds: vec![
                DnsSeed::new("seed1", "144.172.91.162"),
                DnsSeed::new("seed2", "144.172.91.17"),
                DnsSeed::new("seed3", "144.172.91.18"),
                DnsSeed::new("seed4", "144.172.91.180"),
                DnsSeed::new("seed5", "144.172.91.192"),
            ],
        };
        params.check_genesis_checkpoint()?;
        Ok(params)
    }

    pub fn testnet() -> ParamsResult<Self> {
        Self::main()?.into_testnet()
    }

    pub fn regtest() -> ParamsResult<Self> {
        Self::testnet()?.into_regtest()
    }

    pub fn unittest() -> ParamsResult<Self> {
        Self::main()?.into_unittest()
    }

    pub fn for_network(network: NetworkId) -> ParamsResult<Self> {
        match network {
            NetworkId::Main => Self::main(),
            NetworkId::Test => Self::testnet(),
            NetworkId::RegTest => Self::regtest(),
            NetworkId::UnitTest => Self::unittest(),
        }
    }

    /// Test network overrides on top of a Main parameter set.
    pub fn into_testnet(self) -> ParamsResult<Self> {
        let genesis_params = GenesisParams { time: 1570470324, nonce: 1248594, ..self.genesis_params.clone() };
        let genesis_pin = GenesisPin {
            hash: parse_hash("0xa7aac5524a53ac9473d53b3263f08078c0dad0e0ec477b56063903f98dc82f0c")?,
            ..self.genesis_pin
        };
        let checkpoints = CheckpointData::from_hex(
            &[(0, "0xa7aac5524a53ac9473d53b3263f08078c0dad0e0ec477b56063903f98dc82f0c")],
            1570470324,
            0,
            250.0,
        )?;

        Self {
            network: NetworkId::Test,
            message_start: [0xd0, 0xcd, 0xa9, 0x96],
            alert_pubkey: parse_hex_bytes(
                "047702b6eb08ee32cfbd0cec8197e7287bc46aa3b9b855f268378a8e217eb1f7232dbca8f4e3459758ac2fd476a41266d8ce4ee19e3cacd5169802a9715bf572d1",
            )?,
            default_port: 31244,
            miner_threads: 0,
            target_timespan: 60,
            target_spacing: 60,
            last_pow_block: 100,
            maturity: 15,
            masternode_count_drift: 4,
            modifier_update_block: 101,
            max_money_out: 43_199_500 * COIN,
            block_enforce_serial_range: 1,
            block_recalculate_accumulators: 9_908_000,
            enforce_new_spork_key: 1521604800,
            reject_old_spork_key: 1522454400,

            base58_prefixes: Base58Prefixes {
                pubkey_address: vec![139],
                script_address: vec![19],
                secret_key: vec![239],
                ext_public_key: [0x3a, 0x80, 0x61, 0xa0],
                ext_secret_key: [0x3a, 0x80, 0x58, 0x37],
                ext_coin_type: [0x80, 0x00, 0x00, 0x01],
            },

            mining_requires_peers: true,
            allow_min_difficulty_blocks: true,
            default_consistency_checks: false,
            require_standard: true,
            mine_blocks_on_demand: false,
            testnet_to_be_deprecated_field_rpc: true,

            pool_max_transactions: 2,
            spork_key: "04A8B319388C0F8588D238B9941DC26B26D3F9465266B368A051C5C100F79306A557780101FE2192FE170D7E6DEFDCBEE4C8D533396389C0DAFFDBC842B002243C".to_string(),
            spork_key_old: "04348C2F50F90267E64FACC65BFDC9D0EB147D090872FB97ABAE92E9A36E6CA60983E28E741F8E7277B11A7479B626AC115BA31463AC48178A5075C5A9319D4A38".to_string(),
            obfuscation_pool_dummy_address: "y57cqfGRkekRyDRNeJiLtYVEbvhXrNbmox".to_string(),
            start_masternode_payments: 1420837558,
            budget_fee_confirmations: 3,

            checkpoints,
            fixed_seeds: TEST_FIXED_SEEDS.to_vec(),
            dns_seeds: Vec::new(),
            ..self
        }
        .with_genesis(genesis_params, genesis_pin)
    }

    /// Regression-test overrides on top of a Test parameter set.
    pub fn into_regtest(self) -> ParamsResult<Self> {
        let genesis_params = GenesisParams { time: 1570470444, bits: 0x207fffff, nonce: 1, ..self.genesis_params.clone() };
        let genesis_pin = GenesisPin {
            hash: parse_hash("0x7edf9887372b9aec780ef2a25bdc6164ec241da7469c5e10951730ffe69e1421")?,
            ..self.genesis_pin
        };
        let checkpoints = CheckpointData::from_hex(
            &[(0, "0x7edf9887372b9aec780ef2a25bdc6164ec241da7469c5e10951730ffe69e1421")],
            1570470444,
            0,
            100.0,
        )?;

        Self {
            network: NetworkId::RegTest,
            message_start: [0x93, 0x9f, 0xb6, 0xd8],
            subsidy_halving_interval: 150,
            miner_threads: 1,
            target_timespan: ONE_DAY,
            target_spacing: 60,
            pow_limit: U256::MAX >> 1,
            default_port: 31246,

            mining_requires_peers: false,
            allow_min_difficulty_blocks: true,
            default_consistency_checks: true,
            require_standard: false,
            mine_blocks_on_demand: true,
            testnet_to_be_deprecated_field_rpc: false,

            checkpoints,
            fixed_seeds: Vec::new(),
            dns_seeds: Vec::new(),
            ..self
        }
        .with_genesis(genesis_params, genesis_pin)
    }

    /// Unit-test overrides on top of a Main parameter set. The genesis block and
    /// checkpoints are Main's.
    pub fn into_unittest(self) -> ParamsResult<Self> {
        Ok(Self {
            network: NetworkId::UnitTest,
            default_port: 31248,
            fixed_seeds: Vec::new(),
            dns_seeds: Vec::new(),

            mining_requires_peers: false,
            default_consistency_checks: true,
            allow_min_difficulty_blocks: false,
            mine_blocks_on_demand: true,
            ..self
        })
    }

    fn with_genesis(mut self, genesis_params: GenesisParams, genesis_pin: GenesisPin) -> ParamsResult<Self> {
        self.genesis = GenesisBlock::build_verified(self.network, &genesis_params, &genesis_pin)?;
        self.genesis_params = genesis_params;
        self.genesis_pin = genesis_pin;
        self.check_genesis_checkpoint()?;
        Ok(self)
    }

    fn check_genesis_checkpoint(&self) -> ParamsResult<()> {
        match self.checkpoints.hash_at(0) {
            Some(hash) if hash == self.genesis.hash() => Ok(()),
            _ => Err(ParamsError::CheckpointGenesisMismatch { network: self.network, expected: self.genesis.hash() }),
        }
    }

    pub fn network_name(&self) -> &'static str {
        self.network.name()
    }

    pub fn base58_prefix(&self, kind: Base58Type) -> &[u8] {
        self.base58_prefixes.get(kind)
    }

    /// Target number of blocks between difficulty retargets.
    pub fn retarget_interval(&self) -> i64 {
        self.target_timespan / self.target_spacing
    }

    /// Fixed seeds with synthesized last-seen times from the wall clock.
    pub fn fixed_seed_addresses(&self) -> Vec<SeedAddress> {
        expand_seeds_now(&self.fixed_seeds)
    }

    /// Fixed seeds expanded against a caller-supplied clock and RNG.
    pub fn fixed_seed_addresses_at<R: rand::Rng + ?Sized>(&self, now: i64, rng: &mut R) -> Vec<SeedAddress> {
        expand_seeds(&self.fixed_seeds, now, rng)
    }

    /// Whether the hash at `height` agrees with any checkpoint there.
    pub fn check_checkpoint(&self, height: u32, hash: &crate::Hash) -> bool {
        self.checkpoints.check_block(height, hash)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn main_constants() {
        let main = NetworkParams::main().unwrap();
        assert_eq!(main.message_start, [0x1b, 0x1a, 0x12, 0xaa]);
        assert_eq!(main.default_port, 24572);
        assert_eq!(main.retarget_interval(), 1);
        assert_eq!(main.genesis.hash(), main.genesis_pin.hash);
        assert_eq!(main.checkpoints.hash_at(0), Some(main.genesis.hash()));
        assert_eq!(main.base58_prefix(Base58Type::PubkeyAddress), &[50]);
        assert_eq!(main.base58_prefix(Base58Type::ExtCoinType), &[0x80, 0x00, 0x00, 0x77]);
        assert_eq!(main.dns_seeds.len(), 5);
        assert_eq!(main.fixed_seeds.len(), 5);
        assert_eq!(main.alert_pubkey.len(), 65);
    }

    #[test]
    fn testnet_inherits_untouched_fields() {
        let main = NetworkParams::main().unwrap();
        let test = NetworkParams::testnet().unwrap();
        assert_eq!(test.pow_limit, main.pow_limit);
        assert_eq!(test.max_reorganization_depth, main.max_reorganization_depth);
        assert_eq!(test.subsidy_halving_interval, main.subsidy_halving_interval);
        assert_eq!(test.skip_proof_of_work_check, main.skip_proof_of_work_check);
        assert_eq!(test.headers_first_syncing_active, main.headers_first_syncing_active);
        assert_eq!(test.genesis_params.bits, main.genesis_params.bits);
        assert_eq!(test.genesis.merkle_root(), main.genesis.merkle_root());
        assert_ne!(test.genesis.hash(), main.genesis.hash());
        assert!(test.fixed_seeds.is_empty());
        assert!(test.dns_seeds.is_empty());
    }

    #[test]
    fn regtest_inherits_from_testnet() {
        let test = NetworkParams::testnet().unwrap();
        let regtest = NetworkParams::regtest().unwrap();
        assert_eq!(regtest.base58_prefixes, test.base58_prefixes);
        assert_eq!(regtest.spork_key, test.spork_key);
        assert_eq!(regtest.maturity, test.maturity);
        assert_eq!(regtest.budget_fee_confirmations, test.budget_fee_confirmations);
        assert_eq!(regtest.pow_limit, U256::MAX >> 1);
        assert_eq!(regtest.retarget_interval(), 1440);
    }

    #[test]
    fn unittest_keeps_main_genesis_and_checkpoints() {
        let main = NetworkParams::main().unwrap();
        let unit = NetworkParams::unittest().unwrap();
        assert_eq!(unit.genesis, main.genesis);
        assert_eq!(unit.checkpoints, main.checkpoints);
        assert_eq!(unit.message_start, main.message_start);
        assert_eq!(unit.default_port, 31248);
    }

    #[test]
    fn broken_pin_stops_derivation() {
        let mut main = NetworkParams::main().unwrap();
        main.genesis_params.nonce = 0;
        let err = main.clone().with_genesis(main.genesis_params.clone(), main.genesis_pin).unwrap_err();
        assert!(matches!(err, ParamsError::GenesisHashMismatch { network: NetworkId::Main, .. }));
    }

    #[test]
    fn stale_merkle_pin_stops_derivation() {
        let main = NetworkParams::main().unwrap();
        let genesis_params = GenesisParams { timestamp_message: "Another headline".to_string(), ..main.genesis_params.clone() };
        // Only the hash is re-pinned; the merkle root still names the old coinbase.
        let genesis_pin = GenesisPin { hash: GenesisBlock::build(&genesis_params).hash(), ..main.genesis_pin };
        let err = main.clone().with_genesis(genesis_params, genesis_pin).unwrap_err();
        assert!(matches!(
            err,
            ParamsError::GenesisMerkleMismatch { network: NetworkId::Main, expected, .. } if expected == main.genesis_pin.merkle_root
        ));
    }

    #[test]
    fn genesis_checkpoint_must_name_the_genesis() {
        let mut main = NetworkParams::main().unwrap();
        main.checkpoints = CheckpointData::from_hex(&[(0, "0x001")], 1592833852, 0, 2000.0).unwrap();
        let (genesis_params, genesis_pin) = (main.genesis_params.clone(), main.genesis_pin);
        let err = main.with_genesis(genesis_params, genesis_pin).unwrap_err();
        assert!(matches!(err, ParamsError::CheckpointGenesisMismatch { network: NetworkId::Main, .. }));
        assert_eq!(err.kind(), crate::ErrorKind::Integrity);
    }

    #[test]
    fn json_view() {
        let json = serde_json::to_value(NetworkParams::regtest().unwrap()).unwrap();
        assert_eq!(json["network"], "regtest");
        assert_eq!(json["messageStart"], "939fb6d8");
        assert_eq!(json["defaultPort"], 31246);
        assert_eq!(json["powLimit"], format!("7{}", "f".repeat(63)));
        let main = serde_json::to_value(NetworkParams::main().unwrap()).unwrap();
        assert_eq!(main["powLimit"], format!("00000{}", "f".repeat(59)));
        assert_eq!(json["base58Prefixes"]["extPublicKey"], "3a8061a0");
    }
}
