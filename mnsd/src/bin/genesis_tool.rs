use clap::Parser;
use consensus_core::config::genesis::GenesisBlock;
use consensus_core::hashing::header::{compact_to_target, hash_to_u256};
use consensus_core::{NetworkId, NetworkParams};
use crypto_hashes::QuarkHash;
use mnsd::ui;
use std::io::Write;
use std::process;
use std::time::Instant;

/// Prints a network's genesis block and can search for a nonce after overriding its header fields.
#[derive(Parser, Debug)]
#[command(name = "genesis_tool")]
struct Opts {
    /// Network whose genesis parameters are used as the starting point
    #[arg(short, long, default_value = "main")]
    network: NetworkId,

    /// Override bits (compact representation). Accepts decimal or 0x-prefixed hex.
    #[arg(long)]
    bits: Option<String>,

    /// Override block time (UNIX seconds)
    #[arg(long)]
    time: Option<u32>,

    /// Search for a nonce whose Quark hash meets the header's bits
    #[arg(long)]
    mine: bool,

    /// Maximum nonces to try when mining
    #[arg(long, default_value_t = 10_000_000u64)]
    max_iterations: u64,

    /// Print the serialized header and coinbase as hex
    #[arg(long)]
    hex: bool,
}

fn parse_bits(s: &str) -> Option<u32> {
    match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(digits) => u32::from_str_radix(digits, 16).ok(),
        None => s.parse::<u32>().ok(),
    }
}

fn fail(message: &str) -> ! {
    ui::print_status("✗", message, ui::StatusType::Error);
    process::exit(1);
}

fn main() {
    let opts = Opts::parse();

    let params = NetworkParams::for_network(opts.network).unwrap_or_else(|e| fail(&format!("{e}")));
    let mut genesis_params = params.genesis_params.clone();

    if let Some(bits_str) = opts.bits.as_deref() {
        match parse_bits(bits_str) {
            Some(bits) => genesis_params.bits = bits,
            None => fail(&format!("Failed to parse bits '{bits_str}'")),
        }
    }
    if let Some(time) = opts.time {
        genesis_params.time = time;
    }

    if opts.mine {
        let Some(target) = compact_to_target(genesis_params.bits) else {
            fail(&format!("Bits 0x{:08x} do not encode a valid target", genesis_params.bits));
        };
        println!("Starting one-shot mine (max_iterations={})...", opts.max_iterations);

        let header = GenesisBlock::build(&genesis_params).header().serialize();
        let mut prefix = QuarkHash::new();
        prefix.write_all(&header[..76]).unwrap_or_else(|e| fail(&format!("{e}")));

        let start = Instant::now();
        let found = (0..opts.max_iterations.min(u32::MAX as u64 + 1)).map(|n| n as u32).find(|&nonce| {
            if nonce > 0 && nonce % 1_000_000 == 0 {
                let rate = nonce as f64 / start.elapsed().as_secs_f64().max(1e-6);
                println!("Tried {} nonces (rate {:.2} kH/s)", nonce, rate / 1000.0);
            }
            hash_to_u256(&prefix.finalize_with_nonce(nonce)) <= target
        });

        match found {
            Some(nonce) => {
                println!("Found valid nonce {} in {:.2}s", nonce, start.elapsed().as_secs_f64());
                genesis_params.nonce = nonce;
            }
            None => fail(&format!(
                "Failed to find a valid nonce within {} iterations (elapsed {:.2}s)",
                opts.max_iterations,
                start.elapsed().as_secs_f64()
            )),
        }
    }

    let genesis = GenesisBlock::build(&genesis_params);
    let header = genesis.header();

    ui::print_section(&format!("Genesis ({})", opts.network));
    ui::print_kv("Hash", &genesis.hash().to_string());
    ui::print_kv("Merkle Root", &genesis.merkle_root().to_string());
    ui::print_kv("Coinbase", &genesis.coinbase().id().to_string());
    ui::print_kv("Time", &header.time.to_string());
    ui::print_kv("Bits", &format!("0x{:08x}", header.bits));
    ui::print_kv("Nonce", &header.nonce.to_string());
    ui::print_kv("Message", &genesis_params.timestamp_message);

    if opts.hex {
        ui::print_kv("Header", &hex::encode(header.serialize()));
        ui::print_kv("Coinbase Tx", &hex::encode(genesis.coinbase().serialize()));
    }

    if genesis.hash() == params.genesis_pin.hash {
        ui::print_status("✓", "Matches the pinned genesis hash", ui::StatusType::Success);
    } else {
        ui::print_status("!", "Differs from the pinned genesis hash", ui::StatusType::Warning);
    }
    if !genesis.meets_target() {
        ui::print_status("!", "Hash does not meet the header's own bits", ui::StatusType::Warning);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bits_formats() {
        assert_eq!(parse_bits("0x207fffff"), Some(0x207fffff));
        assert_eq!(parse_bits("0X1e0ffff0"), Some(0x1e0ffff0));
        assert_eq!(parse_bits("486604799"), Some(486604799));
        assert_eq!(parse_bits("0xzz"), None);
    }

    #[test]
    fn network_argument() {
        let opts = Opts::try_parse_from(["genesis_tool", "-n", "regtest", "--mine"]).unwrap();
        assert_eq!(opts.network, NetworkId::RegTest);
        assert!(opts.mine);
        assert!(Opts::try_parse_from(["genesis_tool", "-n", "devnet"]).is_err());
    }
}
