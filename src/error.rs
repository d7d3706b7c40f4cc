//! Error types for parameter construction and network selection

use thiserror::Error;
use crate::crypto::Hash;
use crate::node::{Base58Type, NetworkId};

/// Parameter and startup errors
#[derive(Debug, Error)]
pub enum ParamsError {
    #[error("{network} genesis hash mismatch: expected {expected}, computed {computed}")]
    GenesisHashMismatch {
        network: NetworkId,
        expected: Hash,
        computed: Hash,
    },
    #[error("{network} genesis merkle root mismatch: expected {expected}, computed {computed}")]
    MerkleRootMismatch {
        network: NetworkId,
        expected: Hash,
        computed: Hash,
    },
    #[error("{network} base58 prefix for {kind:?} is empty")]
    EmptyBase58Prefix { network: NetworkId, kind: Base58Type },
    #[error("{network} base58 prefixes for {first:?} and {second:?} collide")]
    Base58PrefixCollision {
        network: NetworkId,
        first: Base58Type,
        second: Base58Type,
    },
    #[error("-testnet and -regtest are mutually exclusive")]
    ConflictingNetworkSelection,
    #[error("Unknown network: {0}")]
    UnknownNetwork(String),
    #[error("Invalid hex literal: {0}")]
    InvalidHex(#[from] hex::FromHexError),
    #[error("Config error: {0}")]
    Config(String),
    #[error("Invalid address: {0}")]
    Address(String),
}

impl ParamsError {
    /// Whether this error means the binary carries inconsistent consensus constants
    pub fn is_invariant_violation(&self) -> bool {
        matches!(
            self,
            ParamsError::GenesisHashMismatch { .. }
                | ParamsError::MerkleRootMismatch { .. }
                | ParamsError::EmptyBase58Prefix { .. }
                | ParamsError::Base58PrefixCollision { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, ParamsError>;
