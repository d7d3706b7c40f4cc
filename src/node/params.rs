//! Chain parameters
//!
//! One immutable `ChainParams` per network. Each network starts from a named
//! base profile (`main`, then `testnet` on top of it, then `regtest` on top of
//! that) and applies an explicit list of overrides, so every field's source is
//! visible in one place. Construction recomputes the genesis block and refuses
//! to produce a parameter set whose genesis commitment does not match the
//! hard-coded literals.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::debug;
use crate::consensus::{pow_limit, Block, EmissionSchedule, Target};
use crate::constants::MESSAGE_START_SIZE;
use crate::crypto::Hash;
use crate::error::{ParamsError, Result};
use crate::p2p::{materialize_fixed_seeds, DnsSeed, PeerAddress};
use super::genesis::{create_genesis_block, genesis_payout_script, GenesisSpec};
use super::NetworkId;

/// Wire message prefix identifying a network
pub type MessageStart = [u8; MESSAGE_START_SIZE];

/// Packed IPv4 fixed seeds for the main network
pub const MAIN_FIXED_SEEDS: [u32; 3] = [0xac1f1f0a, 0xae240982, 0x253b1359];

/// Kinds of base58-encoded data, each with its own per-network prefix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Base58Type {
    PubkeyAddress,
    ScriptAddress,
    SecretKey,
    ExtPublicKey,
    ExtSecretKey,
}

impl Base58Type {
    pub const ALL: [Base58Type; 5] = [
        Base58Type::PubkeyAddress,
        Base58Type::ScriptAddress,
        Base58Type::SecretKey,
        Base58Type::ExtPublicKey,
        Base58Type::ExtSecretKey,
    ];

    fn index(self) -> usize {
        match self {
            Base58Type::PubkeyAddress => 0,
            Base58Type::ScriptAddress => 1,
            Base58Type::SecretKey => 2,
            Base58Type::ExtPublicKey => 3,
            Base58Type::ExtSecretKey => 4,
        }
    }
}

/// Prefix table with exactly one entry per `Base58Type`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Base58Prefixes([Vec<u8>; 5]);

impl Base58Prefixes {
    pub fn new(
        pubkey_address: Vec<u8>,
        script_address: Vec<u8>,
        secret_key: Vec<u8>,
        ext_public_key: Vec<u8>,
        ext_secret_key: Vec<u8>,
    ) -> Self {
        Self([
            pubkey_address,
            script_address,
            secret_key,
            ext_public_key,
            ext_secret_key,
        ])
    }

    pub fn get(&self, kind: Base58Type) -> &[u8] {
        &self.0[kind.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (Base58Type, &[u8])> {
        Base58Type::ALL.into_iter().map(move |kind| (kind, self.get(kind)))
    }

    /// Reject empty entries and two kinds sharing a prefix
    pub fn validate(&self, network: NetworkId) -> Result<()> {
        for (i, (kind, prefix)) in self.iter().enumerate() {
            if prefix.is_empty() {
                return Err(ParamsError::EmptyBase58Prefix { network, kind });
            }
            if let Some((other, _)) = self.iter().skip(i + 1).find(|(_, p)| *p == prefix) {
                return Err(ParamsError::Base58PrefixCollision {
                    network,
                    first: kind,
                    second: other,
                });
            }
        }
        Ok(())
    }
}

/// The active constants of one network
///
/// Immutable once built; share it by reference.
#[derive(Debug, Clone)]
pub struct ChainParams {
    network_id: NetworkId,
    message_start: MessageStart,
    alert_pubkey: Vec<u8>,
    default_port: u16,
    rpc_port: u16,
    pow_limit: Target,
    emission: EmissionSchedule,
    strict_chain_id: bool,
    auxpow_chain_id: i16,
    equihash_n: u32,
    equihash_k: u32,
    mine_blocks_on_demand: bool,
    base58_prefixes: Base58Prefixes,
    dns_seeds: Vec<DnsSeed>,
    fixed_seeds: Vec<PeerAddress>,
    data_dir: String,
    requires_rpc_password: bool,
    genesis: Block,
    genesis_hash: Hash,
}

impl ChainParams {
    /// Build the parameters of `network` using the system clock and RNG
    pub fn new(network: NetworkId) -> Result<Self> {
        ParamsBuilder::for_network(network).build()
    }

    pub fn network_id(&self) -> NetworkId {
        self.network_id
    }

    pub fn message_start(&self) -> &MessageStart {
        &self.message_start
    }

    /// Raw public key that signs broadcast alerts
    pub fn alert_key(&self) -> &[u8] {
        &self.alert_pubkey
    }

    pub fn default_port(&self) -> u16 {
        self.default_port
    }

    pub fn rpc_port(&self) -> u16 {
        self.rpc_port
    }

    /// Easiest target a block may claim
    pub fn pow_limit(&self) -> &Target {
        &self.pow_limit
    }

    pub fn emission(&self) -> &EmissionSchedule {
        &self.emission
    }

    pub fn subsidy_halving_interval(&self) -> u32 {
        self.emission.halving_interval
    }

    pub fn subsidy_interim_interval(&self) -> u32 {
        self.emission.interim_interval()
    }

    pub fn fork2_height(&self) -> u64 {
        self.emission.fork2_height
    }

    pub fn on_fork2(&self, height: u64) -> bool {
        self.emission.on_fork2(height)
    }

    pub fn cem_window_length(&self, height: u64) -> u32 {
        self.emission.cem_window_length(height)
    }

    pub fn cem_max_native_block_reward_reduction(&self, height: u64) -> u32 {
        self.emission.cem_max_native_block_reward_reduction(height)
    }

    pub fn strict_chain_id(&self) -> bool {
        self.strict_chain_id
    }

    /// Chain id merge-mined blocks must carry
    pub fn auxpow_chain_id(&self) -> i16 {
        self.auxpow_chain_id
    }

    pub fn equihash_n(&self) -> u32 {
        self.equihash_n
    }

    pub fn equihash_k(&self) -> u32 {
        self.equihash_k
    }

    pub fn mine_blocks_on_demand(&self) -> bool {
        self.mine_blocks_on_demand
    }

    pub fn base58_prefix(&self, kind: Base58Type) -> &[u8] {
        self.base58_prefixes.get(kind)
    }

    pub fn base58_prefixes(&self) -> &Base58Prefixes {
        &self.base58_prefixes
    }

    pub fn dns_seeds(&self) -> &[DnsSeed] {
        &self.dns_seeds
    }

    pub fn fixed_seeds(&self) -> &[PeerAddress] {
        &self.fixed_seeds
    }

    /// Subdirectory of the data directory; empty for the main network
    pub fn data_dir(&self) -> &str {
        &self.data_dir
    }

    pub fn requires_rpc_password(&self) -> bool {
        self.requires_rpc_password
    }

    pub fn genesis_block(&self) -> &Block {
        &self.genesis
    }

    pub fn genesis_hash(&self) -> Hash {
        self.genesis_hash
    }

    /// True only for the public test network, not for regtest
    pub fn is_test_network(&self) -> bool {
        self.network_id == NetworkId::Test
    }

    pub fn is_regression_network(&self) -> bool {
        self.network_id == NetworkId::Regression
    }
}

/// Unbuilt parameter profile
///
/// Profiles are plain data; `build` turns one into `ChainParams`, checking the
/// genesis literals and materializing fixed seeds.
#[derive(Debug, Clone)]
pub struct ParamsBuilder {
    network_id: NetworkId,
    message_start: MessageStart,
    alert_pubkey: &'static str,
    default_port: u16,
    rpc_port: u16,
    pow_limit_shift: u32,
    halving_interval: u32,
    fork2_height: u64,
    strict_chain_id: bool,
    auxpow_chain_id: i16,
    equihash_n: u32,
    equihash_k: u32,
    mine_blocks_on_demand: bool,
    base58_prefixes: Base58Prefixes,
    dns_seeds: Vec<DnsSeed>,
    fixed_seeds: Vec<u32>,
    data_dir: String,
    requires_rpc_password: bool,
    genesis_message: String,
    genesis_time: u32,
    genesis_bits: u32,
    genesis_nonce: u32,
    expected_genesis_hash: String,
    expected_merkle_root: String,
}

impl ParamsBuilder {
    pub fn for_network(network: NetworkId) -> Self {
        match network {
            NetworkId::Main => Self::main(),
            NetworkId::Test => Self::testnet(),
            NetworkId::Regression => Self::regtest(),
        }
    }

    /// Production network, the base every other profile starts from
    pub fn main() -> Self {
        Self {
            network_id: NetworkId::Main,
            // Rarely used upper ASCII, not valid UTF-8, a large int at any alignment
            message_start: [0xf9, 0xbe, 0xb4, 0xd9],
            alert_pubkey: "04bf5a75ff0f823840ef512b08add20bb4275ff6e097f2830ad28645e28cb5ea4dc2cfd0972b94019ad46f331b45ef4ba679f2e6c87fd19c864365fadb4f8d2269",
            default_port: 9265,
            rpc_port: 9266,
            pow_limit_shift: 32,
            halving_interval: 788_000,
            fork2_height: 450_000,
            strict_chain_id: false,
            auxpow_chain_id: 0x005B,
            equihash_n: 0,
            equihash_k: 0,
            mine_blocks_on_demand: true,
            base58_prefixes: Base58Prefixes::new(
                vec![85], // b
                vec![5],
                vec![213],
                vec![0x04, 0x88, 0xB2, 0x1E],
                vec![0x04, 0x88, 0xAD, 0xE4],
            ),
            dns_seeds: vec![DnsSeed::new("bitmark.co", "seed.bitmark.co")],
            fixed_seeds: MAIN_FIXED_SEEDS.to_vec(),
            data_dir: String::new(),
            requires_rpc_password: true,
            genesis_message: "13/July/2014, with memory of the past, we look to the future. TDR".to_string(),
            genesis_time: 1405274442,
            genesis_bits: 0x1d00ffff,
            genesis_nonce: 14385103,
            expected_genesis_hash: "c1fb746e87e89ae75bdec2ef0639a1f6786744639ce3d0ece1dcf979b79137cb".to_string(),
            expected_merkle_root: "d4715adf41222fae3d4bf41af30c675bc27228233d0f3cfd4ae0ae1d3e760ba8".to_string(),
        }
    }

    /// Public test network (v4)
    ///
    /// Kept from `main`: halving interval, chain ids, equihash, mining on
    /// demand, RPC password requirement.
    pub fn testnet() -> Self {
        Self {
            network_id: NetworkId::Test,
            message_start: [0x0b, 0x11, 0x09, 0x07],
            alert_pubkey: "0468770c9d451dd5d6d373ae6096d4ab0705c4ab66e55cc25c40788580039bd04b7672322b9bd26ce22a3ad95f490d7d188a905ce30246b2425eca8cc5102190d0",
            default_port: 19265,
            rpc_port: 19266,
            pow_limit_shift: 8,
            fork2_height: 2_000,
            base58_prefixes: Base58Prefixes::new(
                vec![130], // u
                vec![196],
                vec![2],
                vec![0x04, 0x35, 0x87, 0xCF],
                vec![0x04, 0x35, 0x83, 0x94],
            ),
            dns_seeds: vec![
                DnsSeed::new("bitmark.io", "us.bitmark.io"),
                DnsSeed::new("bitmark.co", "explorer.bitmark.co"),
            ],
            fixed_seeds: Vec::new(),
            data_dir: "testnet4".to_string(),
            genesis_message: "Testing Testnet".to_string(),
            genesis_time: 1509891419,
            genesis_bits: 0x1e0ffff0,
            genesis_nonce: 1291475,
            expected_genesis_hash: "572f069d470350b8facc52a0866671d2d3071230e4df45d193394ae153fa891d".to_string(),
            expected_merkle_root: "f3a49f9a57255e02f1984ffd4d9523c0afb883a06535c7e5fcc501f77217bf10".to_string(),
            ..Self::main()
        }
    }

    /// Private regression-test network with trivial difficulty
    ///
    /// Kept from `testnet`: alert key, RPC port, base58 prefixes, fixed seeds
    /// (none), genesis coinbase message and therefore its merkle root.
    pub fn regtest() -> Self {
        Self {
            network_id: NetworkId::Regression,
            message_start: [0xfa, 0xbf, 0xb5, 0xda],
            default_port: 18444,
            pow_limit_shift: 1,
            halving_interval: 150,
            fork2_height: 200,
            dns_seeds: Vec::new(),
            data_dir: "regtest".to_string(),
            requires_rpc_password: false,
            genesis_time: 1405274400,
            genesis_bits: 0x207fffff,
            genesis_nonce: 713058,
            expected_genesis_hash: "168329a349fc93768bfb02e536bbe1e1847d77a65764564552122fa9268d8841".to_string(),
            ..Self::testnet()
        }
    }

    pub fn network_id(&self) -> NetworkId {
        self.network_id
    }

    pub fn genesis_nonce(mut self, nonce: u32) -> Self {
        self.genesis_nonce = nonce;
        self
    }

    pub fn genesis_message(mut self, message: &str) -> Self {
        self.genesis_message = message.to_string();
        self
    }

    pub fn expected_genesis_hash(mut self, hash: &str) -> Self {
        self.expected_genesis_hash = hash.to_string();
        self
    }

    pub fn expected_merkle_root(mut self, root: &str) -> Self {
        self.expected_merkle_root = root.to_string();
        self
    }

    pub fn base58_prefixes(mut self, prefixes: Base58Prefixes) -> Self {
        self.base58_prefixes = prefixes;
        self
    }

    pub fn fixed_seeds(mut self, seeds: Vec<u32>) -> Self {
        self.fixed_seeds = seeds;
        self
    }

    /// The genesis inputs this profile describes
    pub fn genesis_spec(&self) -> Result<GenesisSpec> {
        Ok(GenesisSpec::new(
            &self.genesis_message,
            genesis_payout_script()?,
            self.genesis_time,
            self.genesis_bits,
            self.genesis_nonce,
        ))
    }

    /// Build with the system clock and thread RNG for seed timestamps
    pub fn build(self) -> Result<ChainParams> {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs() as i64)
            .unwrap_or(0);
        self.build_with(now, &mut rand::thread_rng())
    }

    /// Build with explicit time and random sources
    pub fn build_with<R: Rng + ?Sized>(self, now: i64, rng: &mut R) -> Result<ChainParams> {
        let network = self.network_id;
        let expected_hash = Hash::from_hex(&self.expected_genesis_hash)?;
        let expected_root = Hash::from_hex(&self.expected_merkle_root)?;

        let genesis = create_genesis_block(&self.genesis_spec()?);
        let merkle_root = genesis.header.merkle_root;
        if merkle_root != expected_root {
            return Err(ParamsError::MerkleRootMismatch {
                network,
                expected: expected_root,
                computed: merkle_root,
            });
        }

        let genesis_hash = genesis.hash();
        if genesis_hash != expected_hash {
            return Err(ParamsError::GenesisHashMismatch {
                network,
                expected: expected_hash,
                computed: genesis_hash,
            });
        }

        self.base58_prefixes.validate(network)?;

        let fixed_seeds = materialize_fixed_seeds(&self.fixed_seeds, self.default_port, now, rng);

        debug!(%network, %genesis_hash, "chain parameters constructed");

        Ok(ChainParams {
            network_id: network,
            message_start: self.message_start,
            alert_pubkey: hex::decode(self.alert_pubkey)?,
            default_port: self.default_port,
            rpc_port: self.rpc_port,
            pow_limit: pow_limit(self.pow_limit_shift),
            emission: EmissionSchedule::new(self.halving_interval, self.fork2_height),
            strict_chain_id: self.strict_chain_id,
            auxpow_chain_id: self.auxpow_chain_id,
            equihash_n: self.equihash_n,
            equihash_k: self.equihash_k,
            mine_blocks_on_demand: self.mine_blocks_on_demand,
            base58_prefixes: self.base58_prefixes,
            dns_seeds: self.dns_seeds,
            fixed_seeds,
            data_dir: self.data_dir,
            requires_rpc_password: self.requires_rpc_password,
            genesis,
            genesis_hash,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consensus::is_within_limit;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn build(network: NetworkId) -> ChainParams {
        ParamsBuilder::for_network(network)
            .build_with(1_700_000_000, &mut StdRng::seed_from_u64(1))
            .unwrap()
    }

    #[test]
    fn test_main_params() {
        let params = build(NetworkId::Main);
        assert_eq!(params.network_id(), NetworkId::Main);
        assert_eq!(params.message_start(), &[0xf9, 0xbe, 0xb4, 0xd9]);
        assert_eq!(params.default_port(), 9265);
        assert_eq!(params.rpc_port(), 9266);
        assert_eq!(params.subsidy_halving_interval(), 788_000);
        assert_eq!(params.subsidy_interim_interval(), 394_000);
        assert_eq!(params.auxpow_chain_id(), 0x005B);
        assert_eq!(params.alert_key().len(), 65);
        assert_eq!(params.data_dir(), "");
        assert_eq!(params.dns_seeds().len(), 1);
        assert_eq!(params.fixed_seeds().len(), MAIN_FIXED_SEEDS.len());
        assert!(params.requires_rpc_password());
        assert!(!params.is_test_network());
        assert!(!params.is_regression_network());
    }

    #[test]
    fn test_testnet_overrides_and_inherits() {
        let main = build(NetworkId::Main);
        let test = build(NetworkId::Test);

        assert_eq!(test.message_start(), &[0x0b, 0x11, 0x09, 0x07]);
        assert_eq!(test.default_port(), 19265);
        assert_eq!(test.rpc_port(), 19266);
        assert_eq!(test.data_dir(), "testnet4");
        assert!(test.fixed_seeds().is_empty());
        assert_eq!(test.dns_seeds().len(), 2);
        assert_ne!(test.alert_key(), main.alert_key());

        assert_eq!(test.subsidy_halving_interval(), main.subsidy_halving_interval());
        assert_eq!(test.auxpow_chain_id(), main.auxpow_chain_id());
        assert!(test.requires_rpc_password());
        assert!(test.is_test_network());
    }

    #[test]
    fn test_regtest_overrides_and_inherits() {
        let test = build(NetworkId::Test);
        let regtest = build(NetworkId::Regression);

        assert_eq!(regtest.message_start(), &[0xfa, 0xbf, 0xb5, 0xda]);
        assert_eq!(regtest.default_port(), 18444);
        assert_eq!(regtest.rpc_port(), test.rpc_port());
        assert_eq!(regtest.subsidy_halving_interval(), 150);
        assert_eq!(regtest.subsidy_interim_interval(), 75);
        assert_eq!(regtest.data_dir(), "regtest");
        assert!(regtest.dns_seeds().is_empty());
        assert!(regtest.fixed_seeds().is_empty());
        assert!(!regtest.requires_rpc_password());
        assert_eq!(regtest.alert_key(), test.alert_key());
        assert_eq!(regtest.base58_prefixes(), test.base58_prefixes());
        assert_eq!(
            regtest.genesis_block().header.merkle_root,
            test.genesis_block().header.merkle_root
        );
        assert!(regtest.is_regression_network());
        assert!(!regtest.is_test_network());
    }

    #[test]
    fn test_message_starts_unique() {
        let starts: Vec<MessageStart> = NetworkId::ALL
            .iter()
            .map(|&id| *build(id).message_start())
            .collect();
        assert_ne!(starts[0], starts[1]);
        assert_ne!(starts[0], starts[2]);
        assert_ne!(starts[1], starts[2]);
    }

    #[test]
    fn test_genesis_bits_within_pow_limit() {
        for id in NetworkId::ALL {
            let params = build(id);
            let bits = params.genesis_block().header.bits;
            assert!(is_within_limit(bits, params.pow_limit()), "{id}");
        }
    }

    #[test]
    fn test_wrong_nonce_is_hash_mismatch() {
        let err = ParamsBuilder::main()
            .genesis_nonce(0)
            .build_with(0, &mut StdRng::seed_from_u64(0))
            .unwrap_err();
        assert!(matches!(err, ParamsError::GenesisHashMismatch { network: NetworkId::Main, .. }));
        assert!(err.is_invariant_violation());
    }

    #[test]
    fn test_wrong_message_is_merkle_mismatch() {
        let err = ParamsBuilder::testnet()
            .genesis_message("Tampered")
            .build_with(0, &mut StdRng::seed_from_u64(0))
            .unwrap_err();
        assert!(matches!(err, ParamsError::MerkleRootMismatch { network: NetworkId::Test, .. }));
    }

    #[test]
    fn test_bad_literal_is_hex_error() {
        let err = ParamsBuilder::regtest()
            .expected_genesis_hash("not hex")
            .build_with(0, &mut StdRng::seed_from_u64(0))
            .unwrap_err();
        assert!(matches!(err, ParamsError::InvalidHex(_)));
    }

    #[test]
    fn test_prefix_collision_rejected() {
        let prefixes = Base58Prefixes::new(vec![1], vec![2], vec![1], vec![3], vec![4]);
        let err = ParamsBuilder::main()
            .base58_prefixes(prefixes)
            .build_with(0, &mut StdRng::seed_from_u64(0))
            .unwrap_err();
        assert!(matches!(
            err,
            ParamsError::Base58PrefixCollision {
                first: Base58Type::PubkeyAddress,
                second: Base58Type::SecretKey,
                ..
            }
        ));
    }

    #[test]
    fn test_empty_prefix_rejected() {
        let prefixes = Base58Prefixes::new(vec![1], vec![], vec![3], vec![4], vec![5]);
        assert!(matches!(
            prefixes.validate(NetworkId::Main),
            Err(ParamsError::EmptyBase58Prefix { kind: Base58Type::ScriptAddress, .. })
        ));
    }

    #[test]
    fn test_fixed_seeds_use_default_port() {
        let params = build(NetworkId::Main);
        assert!(params.fixed_seeds().iter().all(|s| s.addr.port() == 9265));

        let custom = ParamsBuilder::regtest()
            .fixed_seeds(vec![0x0100007f])
            .build_with(0, &mut StdRng::seed_from_u64(0))
            .unwrap();
        assert_eq!(custom.fixed_seeds()[0].addr.to_string(), "127.0.0.1:18444");
    }
}
