//! Printable view of a parameter set

use serde::Serialize;
use super::{Base58Type, ChainParams, NetworkId};
use crate::p2p::{DnsSeed, PeerAddress};

#[derive(Debug, Clone, Serialize)]
pub struct ParamsSummary {
    pub network: NetworkId,
    pub message_start: String,
    pub default_port: u16,
    pub rpc_port: u16,
    pub pow_limit: String,
    pub subsidy_halving_interval: u32,
    pub subsidy_interim_interval: u32,
    pub fork2_height: u64,
    pub auxpow_chain_id: i16,
    pub strict_chain_id: bool,
    pub data_dir: String,
    pub requires_rpc_password: bool,
    pub base58_prefixes: Vec<(Base58Type, String)>,
    pub dns_seeds: Vec<DnsSeed>,
    pub fixed_seeds: Vec<PeerAddress>,
    pub genesis_hash: String,
    pub genesis_merkle_root: String,
    pub genesis_time: u32,
    pub genesis_bits: String,
    pub genesis_nonce: u32,
}

impl From<&ChainParams> for ParamsSummary {
    fn from(params: &ChainParams) -> Self {
        let mut pow_limit_bytes = [0u8; 32];
        params.pow_limit().to_big_endian(&mut pow_limit_bytes);
        let genesis = &params.genesis_block().header;

        Self {
            network: params.network_id(),
            message_start: hex::encode(params.message_start()),
            default_port: params.default_port(),
            rpc_port: params.rpc_port(),
            pow_limit: hex::encode(pow_limit_bytes),
            subsidy_halving_interval: params.subsidy_halving_interval(),
            subsidy_interim_interval: params.subsidy_interim_interval(),
            fork2_height: params.fork2_height(),
            auxpow_chain_id: params.auxpow_chain_id(),
            strict_chain_id: params.strict_chain_id(),
            data_dir: params.data_dir().to_string(),
            requires_rpc_password: params.requires_rpc_password(),
            base58_prefixes: params
                .base58_prefixes()
                .iter()
                .map(|(kind, prefix)| (kind, hex::encode(prefix)))
                .collect(),
            dns_seeds: params.dns_seeds().to_vec(),
            fixed_seeds: params.fixed_seeds().to_vec(),
            genesis_hash: params.genesis_hash().to_hex(),
            genesis_merkle_root: genesis.merkle_root.to_hex(),
            genesis_time: genesis.time,
            genesis_bits: format!("0x{:08x}", genesis.bits),
            genesis_nonce: genesis.nonce,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::params_for;

    #[test]
    fn test_summary_json() {
        let summary = ParamsSummary::from(params_for(NetworkId::Regression));
        let json = serde_json::to_value(&summary).unwrap();

        assert_eq!(json["network"], "regression");
        assert_eq!(json["message_start"], "fabfb5da");
        assert_eq!(json["default_port"], 18444);
        assert_eq!(json["requires_rpc_password"], false);
        assert_eq!(json["base58_prefixes"].as_array().unwrap().len(), 5);
        assert!(json["pow_limit"].as_str().unwrap().starts_with("7fff"));
        assert_eq!(
            json["genesis_hash"],
            "168329a349fc93768bfb02e536bbe1e1847d77a65764564552122fa9268d8841"
        );
        assert_eq!(json["genesis_bits"], "0x207fffff");
        assert_eq!(json["fixed_seeds"].as_array().unwrap().len(), 0);
    }

    #[test]
    fn test_main_pow_limit_format() {
        let summary = ParamsSummary::from(params_for(NetworkId::Main));
        assert_eq!(summary.pow_limit.len(), 64);
        assert!(summary.pow_limit.starts_with("00000000ffff"));
    }
}
