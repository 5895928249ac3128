use log::trace;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::net::{IpAddr, Ipv6Addr, SocketAddr};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::constants::ONE_WEEK;

/// One compiled-in fixed seed: an IPv6 (or IPv4-mapped) address and port.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedSpec6 {
    pub addr: [u8; 16],
    pub port: u16,
}

impl SeedSpec6 {
    pub const fn ipv4(octets: [u8; 4], port: u16) -> Self {
        let [a, b, c, d] = octets;
        Self { addr: [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0xff, 0xff, a, b, c, d], port }
    }

    pub fn socket_addr(&self) -> SocketAddr {
        let ip = Ipv6Addr::from(self.addr);
        match ip.to_ipv4_mapped() {
            Some(v4) => SocketAddr::new(IpAddr::V4(v4), self.port),
            None => SocketAddr::new(IpAddr::V6(ip), self.port),
        }
    }
}

/// A fixed seed ready for the address manager.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeedAddress {
    pub addr: SocketAddr,
    /// Synthesized "last seen" UNIX time, between one and two weeks ago.
    pub last_seen: i64,
}

/// A DNS seed, resolved by the networking layer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DnsSeed {
    pub name: String,
    pub host: String,
}

impl DnsSeed {
    pub fn new(name: &str, host: &str) -> Self {
        Self { name: name.to_string(), host: host.to_string() }
    }
}

/// Fixed seeds for the production network.
pub const MAIN_FIXED_SEEDS: &[SeedSpec6] = &[
    SeedSpec6::ipv4([144, 172, 91, 162], 24572),
    SeedSpec6::ipv4([144, 172, 91, 17], 24572),
    SeedSpec6::ipv4([144, 172, 91, 18], 24572),
    SeedSpec6::ipv4([144, 172, 91, 180], 24572),
    SeedSpec6::ipv4([144, 172, 91, 192], 24572),
];

pub const TEST_FIXED_SEEDS: &[SeedSpec6] = &[];

/// Expands a seed table, giving each address a last-seen time of
/// `now - rand[0, 1 week) - 1 week` so fresh nodes do not prefer them over
/// addresses learned from peers.
pub fn expand_seeds<R: Rng + ?Sized>(table: &[SeedSpec6], now: i64, rng: &mut R) -> Vec<SeedAddress> {
    table
        .iter()
        .map(|spec| {
            let seed = SeedAddress { addr: spec.socket_addr(), last_seen: now - rng.gen_range(0..ONE_WEEK) - ONE_WEEK };
            trace!("fixed seed {} last seen {}", seed.addr, seed.last_seen);
            seed
        })
        .collect()
}

/// [`expand_seeds`] against the wall clock and the thread-local RNG.
pub fn expand_seeds_now(table: &[SeedSpec6]) -> Vec<SeedAddress> {
    let now = SystemTime::now().duration_since(UNIX_EPOCH).map(|d| d.as_secs() as i64).unwrap_or_default();
    expand_seeds(table, now, &mut rand::thread_rng())
}
