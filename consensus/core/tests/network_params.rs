use consensus_core::config::genesis::{GenesisBlock, GenesisPin};
use consensus_core::constants::ONE_WEEK;
use consensus_core::{ErrorKind, NetworkId, NetworkParams, ParamsError, ParamsRegistry};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde_json::{Map, Value};

fn as_object(params: &NetworkParams) -> Map<String, Value> {
    match serde_json::to_value(params).unwrap() {
        Value::Object(map) => map,
        other => panic!("expected an object, got {other}"),
    }
}

/// Every field outside `overridden` must carry the parent's value.
fn assert_inherits(parent: &NetworkParams, child: &NetworkParams, overridden: &[&str]) {
    let parent = as_object(parent);
    let child = as_object(child);
    assert_eq!(parent.len(), child.len());
    for (key, value) in &parent {
        let child_value = child.get(key).unwrap_or_else(|| panic!("missing field {key}"));
        if !overridden.contains(&key.as_str()) {
            assert_eq!(child_value, value, "field {key} should be inherited");
        }
    }
}

const GENESIS_FIELDS: [&str; 4] = ["genesisParams", "genesisPin", "genesis", "checkpoints"];

#[test]
fn pinned_genesis_for_every_network() {
    let registry = ParamsRegistry::new().unwrap();
    let expected = [
        (NetworkId::Main, "000001efabad6756e1937bc1c1b98bd066b29fb4e65e750d2ff3e2ca0f7d13d2"),
        (NetworkId::Test, "a7aac5524a53ac9473d53b3263f08078c0dad0e0ec477b56063903f98dc82f0c"),
        (NetworkId::RegTest, "7edf9887372b9aec780ef2a25bdc6164ec241da7469c5e10951730ffe69e1421"),
        (NetworkId::UnitTest, "000001efabad6756e1937bc1c1b98bd066b29fb4e65e750d2ff3e2ca0f7d13d2"),
    ];
    for (network, hash) in expected {
        let params = registry.params_for(network);
        assert_eq!(params.network, network);
        assert_eq!(params.genesis.hash().to_string(), hash);
        assert_eq!(params.genesis.merkle_root().to_string(), "a7d76d50fc3b7998b62d003f33adaa06242850e4b32b62b17691d5a4222a9145");
        assert_eq!(params.genesis.hash(), params.genesis_pin.hash);
        assert!(params.genesis.header().hash_prev_block.is_zero());
        assert_eq!(params.genesis.block().transactions.len(), 1);
    }
}

#[test]
fn changing_a_parameter_without_the_pin_fails() {
    let main = NetworkParams::main().unwrap();
    let mut params = main.genesis_params.clone();
    params.time += 1;
    let err = GenesisBlock::build_verified(NetworkId::Main, &params, &main.genesis_pin).unwrap_err();
    assert!(matches!(err, ParamsError::GenesisHashMismatch { .. }));
    assert_eq!(err.kind(), ErrorKind::Integrity);

    // Re-pinning the new hash alone is accepted since the merkle root is unchanged.
    let rebuilt = GenesisBlock::build(&params);
    let pin = GenesisPin { hash: rebuilt.hash(), merkle_root: main.genesis_pin.merkle_root };
    assert!(GenesisBlock::build_verified(NetworkId::Main, &params, &pin).is_ok());
}

#[test]
fn testnet_derivation_is_total() {
    let main = NetworkParams::main().unwrap();
    let test = NetworkParams::testnet().unwrap();
    let mut overridden = vec![
        "network",
        "messageStart",
        "alertPubkey",
        "defaultPort",
        "lastPowBlock",
        "maturity",
        "masternodeCountDrift",
        "modifierUpdateBlock",
        "maxMoneyOut",
        "blockEnforceSerialRange",
        "blockRecalculateAccumulators",
        "enforceNewSporkKey",
        "rejectOldSporkKey",
        "base58Prefixes",
        "allowMinDifficultyBlocks",
        "testnetToBeDeprecatedFieldRpc",
        "poolMaxTransactions",
        "sporkKey",
        "sporkKeyOld",
        "obfuscationPoolDummyAddress",
        "startMasternodePayments",
        "budgetFeeConfirmations",
        "fixedSeeds",
        "dnsSeeds",
    ];
    overridden.extend(GENESIS_FIELDS);
    assert_inherits(&main, &test, &overridden);

    assert_eq!(test.message_start, [0xd0, 0xcd, 0xa9, 0x96]);
    assert_eq!(test.default_port, 31244);
    assert_eq!(test.max_money_out, 43_199_500 * consensus_core::constants::COIN);
    assert_eq!(test.base58_prefixes.pubkey_address, vec![139]);
    assert_eq!(test.genesis_params.time, 1570470324);
    assert_eq!(test.genesis_params.nonce, 1248594);
}

#[test]
fn regtest_derivation_is_total() {
    let test = NetworkParams::testnet().unwrap();
    let regtest = NetworkParams::regtest().unwrap();
    let mut overridden = vec![
        "network",
        "messageStart",
        "subsidyHalvingInterval",
        "minerThreads",
        "targetTimespan",
        "powLimit",
        "defaultPort",
        "miningRequiresPeers",
        "defaultConsistencyChecks",
        "requireStandard",
        "mineBlocksOnDemand",
        "testnetToBeDeprecatedFieldRpc",
    ];
    overridden.extend(GENESIS_FIELDS);
    assert_inherits(&test, &regtest, &overridden);

    assert_eq!(regtest.subsidy_halving_interval, 150);
    assert_eq!(regtest.miner_threads, 1);
    assert_eq!(regtest.target_timespan, 86_400);
    assert_eq!(regtest.genesis_params.bits, 0x207fffff);
}

#[test]
fn unittest_derivation_is_total() {
    let main = NetworkParams::main().unwrap();
    let unit = NetworkParams::unittest().unwrap();
    let overridden = [
        "network",
        "defaultPort",
        "fixedSeeds",
        "dnsSeeds",
        "miningRequiresPeers",
        "defaultConsistencyChecks",
        "mineBlocksOnDemand",
    ];
    assert_inherits(&main, &unit, &overridden);
    assert!(!unit.allow_min_difficulty_blocks);
}

#[test]
fn no_field_left_empty() {
    let registry = ParamsRegistry::new().unwrap();
    for network in NetworkId::iter() {
        let params = registry.params_for(network);
        assert_ne!(params.message_start, [0; 4]);
        assert_ne!(params.default_port, 0);
        assert!(!params.pow_limit.is_zero());
        assert!(!params.alert_pubkey.is_empty());
        assert!(params.target_spacing > 0 && params.target_timespan > 0);
        assert!(params.maturity > 0 && params.max_money_out > 0);
        assert!(params.subsidy_halving_interval > 0);
        assert!(params.last_pow_block > 0 && params.modifier_update_block > 0);
        assert!(params.enforce_new_spork_key > 0 && params.reject_old_spork_key > 0);
        assert!(params.budget_fee_confirmations > 0);
        assert!(!params.base58_prefixes.pubkey_address.is_empty());
        assert!(!params.spork_key.is_empty() && !params.spork_key_old.is_empty());
        assert!(!params.obfuscation_pool_dummy_address.is_empty());
        assert!(params.pool_max_transactions > 0);
    }
}

#[test]
fn checkpoints_start_at_genesis_and_increase() {
    let registry = ParamsRegistry::new().unwrap();
    for network in NetworkId::iter() {
        let params = registry.params_for(network);
        let heights: Vec<u32> = params.checkpoints.checkpoints().keys().copied().collect();
        assert_eq!(heights.first(), Some(&0));
        assert!(heights.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(params.checkpoints.hash_at(0), Some(params.genesis.hash()));
        assert!(params.check_checkpoint(0, &params.genesis.hash()));
    }
    let main = registry.params_for(NetworkId::Main);
    assert_eq!(main.checkpoints.last_checkpoint_time, 1592833852);
    assert_eq!(main.checkpoints.transactions_per_day, 2000.0);
    assert_eq!(registry.params_for(NetworkId::Test).checkpoints.transactions_per_day, 250.0);
    assert_eq!(registry.params_for(NetworkId::RegTest).checkpoints.transactions_per_day, 100.0);
    assert_eq!(registry.params_for(NetworkId::UnitTest).checkpoints, main.checkpoints);
}

#[test]
fn modifiable_touches_exactly_four_fields() {
    let mut registry = ParamsRegistry::new().unwrap();
    registry.select_network(NetworkId::UnitTest).unwrap();
    let before = as_object(registry.active().unwrap());

    {
        let mut handle = registry.modifiable().unwrap();
        handle.set_subsidy_halving_interval(77);
        handle.set_default_consistency_checks(false);
        handle.set_allow_min_difficulty_blocks(true);
        handle.set_skip_proof_of_work_check(true);
        assert_eq!(handle.params().subsidy_halving_interval, 77);
    }

    let after = as_object(registry.active().unwrap());
    let mut changed: Vec<&str> = before.iter().filter(|(k, v)| after.get(*k) != Some(*v)).map(|(k, _)| k.as_str()).collect();
    changed.sort_unstable();
    assert_eq!(changed, vec!["allowMinDifficultyBlocks", "defaultConsistencyChecks", "skipProofOfWorkCheck", "subsidyHalvingInterval"]);

    // Main is untouched.
    assert_eq!(registry.params_for(NetworkId::Main).subsidy_halving_interval, 210_000);
}

#[test]
fn modifiable_refused_off_unittest() {
    for network in [NetworkId::Main, NetworkId::Test, NetworkId::RegTest] {
        let mut registry = ParamsRegistry::new().unwrap();
        registry.select_network(network).unwrap();
        let err = registry.modifiable().err().unwrap();
        assert_eq!(err, ParamsError::NotUnitTestNetwork(network));
        assert_eq!(err.kind(), ErrorKind::Contract);
    }
}

#[test]
fn seed_expansion_window() {
    let main = NetworkParams::main().unwrap();
    let now = 1_750_000_000;
    let mut rng = StdRng::seed_from_u64(2024);
    let seeds = main.fixed_seed_addresses_at(now, &mut rng);
    assert_eq!(seeds.len(), main.fixed_seeds.len());
    for seed in &seeds {
        assert!(seed.last_seen > now - 2 * ONE_WEEK && seed.last_seen <= now - ONE_WEEK);
        assert_eq!(seed.addr.port(), main.default_port);
    }
    assert!(NetworkParams::regtest().unwrap().fixed_seed_addresses().is_empty());
}

#[test]
fn selection_exposes_ports_and_magic() {
    let mut registry = ParamsRegistry::new().unwrap();
    let main = registry.select_network_by_name("main").unwrap();
    assert_eq!(main.default_port, 24572);
    assert_eq!(main.message_start, [0x1b, 0x1a, 0x12, 0xaa]);

    let mut registry = ParamsRegistry::new().unwrap();
    let regtest = registry.select_network(NetworkId::RegTest).unwrap().clone();
    assert_eq!(regtest.default_port, 31246);
    assert_eq!(regtest.message_start, [0x93, 0x9f, 0xb6, 0xd8]);

    let ports: std::collections::HashSet<u16> = NetworkId::iter().map(|n| registry.params_for(n).default_port).collect();
    assert_eq!(ports.len(), 4);
}

#[test]
fn unknown_network_name_is_fatal() {
    let mut registry = ParamsRegistry::new().unwrap();
    let err = registry.select_network_by_name("devnet").unwrap_err();
    assert_eq!(err, ParamsError::UnknownNetwork("devnet".to_string()));
    assert_eq!(err.kind(), ErrorKind::Integrity);
    assert!(!registry.is_selected());
}

#[test]
fn registry_is_shareable() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ParamsRegistry>();

    let mut registry = ParamsRegistry::new().unwrap();
    registry.select_network(NetworkId::Test).unwrap();
    let shared = std::sync::Arc::new(registry);
    let handle = {
        let shared = shared.clone();
        std::thread::spawn(move || shared.active().unwrap().default_port)
    };
    assert_eq!(handle.join().unwrap(), 31244);
}
