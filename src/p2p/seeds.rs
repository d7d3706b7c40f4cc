//! Seed Node Configuration
//!
//! Bootstrap peers for initial discovery: DNS seed hostnames, resolved
//! elsewhere, and fixed IPv4 seeds that are expanded into peer address records.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::net::{Ipv4Addr, SocketAddr, SocketAddrV4};
use tracing::debug;

/// Seconds in one week
pub const ONE_WEEK: i64 = 7 * 24 * 60 * 60;

/// Service bit advertised for full nodes
pub const NODE_NETWORK: u64 = 1;

/// A DNS seed: display label and the hostname to resolve
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DnsSeed {
    pub name: String,
    pub host: String,
}

impl DnsSeed {
    pub fn new(name: &str, host: &str) -> Self {
        Self {
            name: name.to_string(),
            host: host.to_string(),
        }
    }
}

/// A peer address with its "last seen" time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeerAddress {
    pub addr: SocketAddr,
    pub services: u64,
    /// Last seen, seconds since Unix epoch
    pub time: i64,
}

/// Unpack a fixed seed stored as the in-memory image of an IPv4 address
///
/// The packed words were written on a little-endian host, so the first
/// octet sits in the lowest byte.
pub fn unpack_seed(packed: u32) -> Ipv4Addr {
    Ipv4Addr::from(packed.to_le_bytes())
}

/// Expand packed fixed seeds into peer addresses on `port`
///
/// Each record is stamped between one and two weeks before `now` so a fresh
/// node prefers the newer addresses it learns from its first peers.
pub fn materialize_fixed_seeds<R: Rng + ?Sized>(
    seeds: &[u32],
    port: u16,
    now: i64,
    rng: &mut R,
) -> Vec<PeerAddress> {
    let addresses: Vec<PeerAddress> = seeds
        .iter()
        .map(|&packed| PeerAddress {
            addr: SocketAddr::V4(SocketAddrV4::new(unpack_seed(packed), port)),
            services: NODE_NETWORK,
            time: now - rng.gen_range(0..ONE_WEEK) - ONE_WEEK,
        })
        .collect();

    debug!(count = addresses.len(), port, "materialized fixed seeds");
    addresses
}
