//! Genesis block construction
//!
//! Every network's first block is rebuilt from a handful of inputs and its
//! hash compared against a hard-coded literal when the network's parameters
//! are constructed.

use serde::{Deserialize, Serialize};
use crate::consensus::{Block, BlockHeader};
use crate::constants::COIN;
use crate::crypto::Hash;
use crate::validation::{Script, Transaction, OP_CHECKSIG};

/// Genesis block version
pub const GENESIS_VERSION: i32 = 1;

/// Value of the single genesis coinbase output
pub const GENESIS_REWARD: i64 = 20 * COIN;

/// First push of the genesis spend script (0x1d00ffff as a script number)
const GENESIS_SCRIPT_BITS: i64 = 486_604_799;

/// Second push of the genesis spend script
const GENESIS_SCRIPT_EXTRA_NONCE: i64 = 4;

/// Public key the genesis coinbase pays to, shared by every network
pub const GENESIS_OUTPUT_PUBKEY: &str = "04f88a76429dad346a10ecb5d36fcbf50bc2e009870e20c1a6df8db743e0b994afc1f91e079be8acc380b0ee7765519906e3d781519e9db48259f64160104939d8";

/// Inputs that fully determine a genesis block
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenesisSpec {
    /// Text embedded in the coinbase spend script
    pub coinbase_message: String,
    /// Script the genesis reward pays to
    pub payout_script: Script,
    pub time: u32,
    pub bits: u32,
    pub nonce: u32,
}

impl GenesisSpec {
    pub fn new(coinbase_message: &str, payout_script: Script, time: u32, bits: u32, nonce: u32) -> Self {
        Self {
            coinbase_message: coinbase_message.to_string(),
            payout_script,
            time,
            bits,
            nonce,
        }
    }
}

/// Pay-to-pubkey script for the shared genesis output key
pub fn genesis_payout_script() -> Result<Script, hex::FromHexError> {
    let pubkey = hex::decode(GENESIS_OUTPUT_PUBKEY)?;
    Ok(Script::new().push_slice(&pubkey).push_opcode(OP_CHECKSIG))
}

/// Build the coinbase transaction carrying `message`
pub fn genesis_coinbase(message: &str, payout_script: Script) -> Transaction {
    let script_sig = Script::new()
        .push_int(GENESIS_SCRIPT_BITS)
        .push_script_num(GENESIS_SCRIPT_EXTRA_NONCE)
        .push_slice(message.as_bytes());
    Transaction::coinbase(script_sig, GENESIS_REWARD, payout_script)
}

/// Create a genesis block
///
/// Pure function of `spec`: the same inputs always yield a byte-for-byte
/// identical block.
pub fn create_genesis_block(spec: &GenesisSpec) -> Block {
    let coinbase = genesis_coinbase(&spec.coinbase_message, spec.payout_script.clone());
    let merkle_root = coinbase.hash();

    let header = BlockHeader::new(
        GENESIS_VERSION,
        Hash::zero(), // No previous block
        merkle_root,
        spec.time,
        spec.bits,
        spec.nonce,
    );

    Block::new(header, vec![coinbase])
}

/// Genesis block summary
#[derive(Debug, Clone, Serialize)]
pub struct GenesisInfo {
    pub hash: Hash,
    pub merkle_root: Hash,
    pub time: u32,
    pub bits: u32,
    pub nonce: u32,
    pub reward: i64,
}

impl GenesisInfo {
    pub fn from_block(genesis: &Block) -> Self {
        Self {
            hash: genesis.hash(),
            merkle_root: genesis.header.merkle_root,
            time: genesis.header.time,
            bits: genesis.header.bits,
            nonce: genesis.header.nonce,
            reward: genesis
                .transactions
                .first()
                .map(|tx| tx.total_output_value())
                .unwrap_or(0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_spec() -> GenesisSpec {
        GenesisSpec::new(
            "13/July/2014, with memory of the past, we look to the future. TDR",
            genesis_payout_script().unwrap(),
            1405274442,
            0x1d00ffff,
            14385103,
        )
    }

    #[test]
    fn test_genesis_is_deterministic() {
        let spec = sample_spec();
        let genesis1 = create_genesis_block(&spec);
        let genesis2 = create_genesis_block(&spec);
        assert_eq!(genesis1, genesis2);
        assert_eq!(genesis1.hash(), genesis2.hash());
    }

    #[test]
    fn test_main_genesis_literals() {
        let genesis = create_genesis_block(&sample_spec());
        assert_eq!(
            genesis.header.merkle_root.to_hex(),
            "d4715adf41222fae3d4bf41af30c675bc27228233d0f3cfd4ae0ae1d3e760ba8"
        );
        assert_eq!(
            genesis.hash().to_hex(),
            "c1fb746e87e89ae75bdec2ef0639a1f6786744639ce3d0ece1dcf979b79137cb"
        );
    }

    #[test]
    fn test_genesis_shape() {
        let genesis = create_genesis_block(&sample_spec());
        assert!(genesis.is_genesis());
        assert_eq!(genesis.transactions.len(), 1);
        assert!(genesis.transactions[0].is_coinbase());
        assert_eq!(genesis.transactions[0].total_output_value(), GENESIS_REWARD);
        assert_eq!(genesis.build_merkle_root(), genesis.header.merkle_root);
    }

    #[test]
    fn test_coinbase_script_sig_layout() {
        let tx = genesis_coinbase("abc", Script::new());
        assert_eq!(
            tx.inputs[0].script_sig.as_bytes(),
            &[0x04, 0xff, 0xff, 0x00, 0x1d, 0x01, 0x04, 0x03, b'a', b'b', b'c']
        );
    }

    #[test]
    fn test_nonce_changes_hash_not_merkle_root() {
        let mut spec = sample_spec();
        let base = create_genesis_block(&spec);
        spec.nonce += 1;
        let bumped = create_genesis_block(&spec);
        assert_ne!(base.hash(), bumped.hash());
        assert_eq!(base.header.merkle_root, bumped.header.merkle_root);
    }

    #[test]
    fn test_genesis_info() {
        let genesis = create_genesis_block(&sample_spec());
        let info = GenesisInfo::from_block(&genesis);
        assert_eq!(info.reward, GENESIS_REWARD);
        assert_eq!(info.time, 1405274442);
        assert_eq!(info.hash, genesis.hash());
    }
}
