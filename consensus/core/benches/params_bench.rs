//! Chain parameter construction benchmarks
//!
//! Measures genesis construction and verification, per-network derivation and
//! full registry startup.

use consensus_core::config::genesis::GenesisBlock;
use consensus_core::{NetworkId, NetworkParams, ParamsRegistry};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn bench_genesis(c: &mut Criterion) {
    let main = NetworkParams::main().unwrap();
    let mut group = c.benchmark_group("genesis");

    group.bench_function("build", |b| b.iter(|| GenesisBlock::build(black_box(&main.genesis_params))));
    group.bench_function("build_verified", |b| {
        b.iter(|| GenesisBlock::build_verified(NetworkId::Main, black_box(&main.genesis_params), &main.genesis_pin))
    });

    group.finish();
}

fn bench_derivation(c: &mut Criterion) {
    let mut group = c.benchmark_group("derivation");
    for network in NetworkId::iter() {
        group.bench_with_input(BenchmarkId::from_parameter(network), &network, |b, &network| {
            b.iter(|| NetworkParams::for_network(network))
        });
    }
    group.finish();
}

fn bench_registry(c: &mut Criterion) {
    c.bench_function("registry_startup", |b| {
        b.iter(|| {
            let mut registry = ParamsRegistry::new().unwrap();
            registry.select_network(black_box(NetworkId::Main)).map(|params| params.default_port).unwrap()
        })
    });
}

criterion_group!(benches, bench_genesis, bench_derivation, bench_registry);
criterion_main!(benches);
