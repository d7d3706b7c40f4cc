//! Block structure
//!
//! Defines the block and the 80-byte block header.

use serde::{Deserialize, Serialize};
use crate::crypto::{compute_merkle_root, double_sha256, Hash};
use crate::validation::Transaction;

/// Serialized header length in bytes
pub const HEADER_SIZE: usize = 80;

/// The 80 bytes that commit to a block and are hashed for proof of work
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct BlockHeader {
    /// Block version (signed, as on the wire)
    pub version: i32,
    /// Hash of the previous block
    pub prev_hash: Hash,
    /// Merkle root over the block's txids
    pub merkle_root: Hash,
    /// Unix time, 32-bit on the wire
    pub time: u32,
    /// Compact target ("nBits")
    pub bits: u32,
    pub nonce: u32,
}

impl BlockHeader {
    pub fn new(
        version: i32,
        prev_hash: Hash,
        merkle_root: Hash,
        time: u32,
        bits: u32,
        nonce: u32,
    ) -> Self {
        Self {
            version,
            prev_hash,
            merkle_root,
            time,
            bits,
            nonce,
        }
    }

    /// Serialize the header for hashing
    pub fn to_bytes(&self) -> [u8; HEADER_SIZE] {
        let mut bytes = [0u8; HEADER_SIZE];
        bytes[0..4].copy_from_slice(&self.version.to_le_bytes());
        bytes[4..36].copy_from_slice(&self.prev_hash.0);
        bytes[36..68].copy_from_slice(&self.merkle_root.0);
        bytes[68..72].copy_from_slice(&self.time.to_le_bytes());
        bytes[72..76].copy_from_slice(&self.bits.to_le_bytes());
        bytes[76..80].copy_from_slice(&self.nonce.to_le_bytes());
        bytes
    }

    /// Calculate the hash of this header
    pub fn hash(&self) -> Hash {
        double_sha256(&self.to_bytes())
    }
}

/// Header plus the transactions it commits to
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Block {
    pub header: BlockHeader,
    pub transactions: Vec<Transaction>,
}

impl Block {
    pub fn new(header: BlockHeader, transactions: Vec<Transaction>) -> Self {
        Self { header, transactions }
    }

    pub fn hash(&self) -> Hash {
        self.header.hash()
    }

    /// Recompute the merkle root over the block's transactions
    pub fn build_merkle_root(&self) -> Hash {
        let tx_hashes: Vec<Hash> = self.transactions.iter().map(|tx| tx.hash()).collect();
        compute_merkle_root(&tx_hashes)
    }

    /// No parent: the previous hash is all zeros
    pub fn is_genesis(&self) -> bool {
        self.header.prev_hash == Hash::zero()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_header(nonce: u32) -> BlockHeader {
        BlockHeader::new(1, Hash::zero(), Hash::zero(), 1234567890, 0x1d00ffff, nonce)
    }

    #[test]
    fn test_block_header_serialization() {
        let bytes = sample_header(0).to_bytes();
        assert_eq!(bytes.len(), HEADER_SIZE);
        assert_eq!(&bytes[72..76], &0x1d00ffffu32.to_le_bytes());
    }

    #[test]
    fn test_nonce_changes_hash() {
        assert_ne!(sample_header(0).hash(), sample_header(1).hash());
    }

    #[test]
    fn test_genesis_block_detection() {
        let block = Block::new(sample_header(0), vec![]);
        assert!(block.is_genesis());
        assert_eq!(block.build_merkle_root(), Hash::zero());
    }
}
