//! Transaction structure
//!
//! Script-based transactions in the canonical consensus serialization.
//! The transaction id is the double SHA-256 of that serialization.

use serde::{Deserialize, Serialize};
use crate::crypto::{double_sha256, Hash};
use super::Script;

/// Output index marking a coinbase input
pub const COINBASE_OUTPUT_INDEX: u32 = 0xFFFF_FFFF;

/// Sequence number of a final input
pub const SEQUENCE_FINAL: u32 = 0xFFFF_FFFF;

/// Reference to a previous transaction output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutPoint {
    /// Hash of the transaction containing the output
    pub tx_hash: Hash,
    /// Index of the output in that transaction
    pub index: u32,
}

impl OutPoint {
    /// The null outpoint spent by coinbase inputs
    pub const fn null() -> Self {
        Self {
            tx_hash: Hash::zero(),
            index: COINBASE_OUTPUT_INDEX,
        }
    }

    pub fn is_null(&self) -> bool {
        self.tx_hash == Hash::zero() && self.index == COINBASE_OUTPUT_INDEX
    }
}

/// A transaction input
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxInput {
    pub prev_out: OutPoint,
    /// Spend script (arbitrary data for coinbase inputs)
    pub script_sig: Script,
    pub sequence: u32,
}

/// A transaction output
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxOutput {
    /// Amount in base units
    pub value: i64,
    pub script_pubkey: Script,
}

/// A complete transaction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub version: i32,
    pub inputs: Vec<TxInput>,
    pub outputs: Vec<TxOutput>,
    /// Lock time (block height or timestamp)
    pub lock_time: u32,
}

impl Transaction {
    /// Create a new version 1 transaction
    pub fn new(inputs: Vec<TxInput>, outputs: Vec<TxOutput>) -> Self {
        Self {
            version: 1,
            inputs,
            outputs,
            lock_time: 0,
        }
    }

    /// Create a coinbase transaction paying `value` to `script_pubkey`
    pub fn coinbase(script_sig: Script, value: i64, script_pubkey: Script) -> Self {
        Self::new(
            vec![TxInput {
                prev_out: OutPoint::null(),
                script_sig,
                sequence: SEQUENCE_FINAL,
            }],
            vec![TxOutput { value, script_pubkey }],
        )
    }

    /// Check if this is a coinbase transaction
    pub fn is_coinbase(&self) -> bool {
        self.inputs.len() == 1 && self.inputs[0].prev_out.is_null()
    }

    /// Calculate transaction hash (txid)
    pub fn hash(&self) -> Hash {
        double_sha256(&self.to_bytes())
    }

    /// Serialize in consensus format
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::new();
        bytes.extend_from_slice(&self.version.to_le_bytes());

        write_compact_size(&mut bytes, self.inputs.len() as u64);
        for input in &self.inputs {
            bytes.extend_from_slice(&input.prev_out.tx_hash.0);
            bytes.extend_from_slice(&input.prev_out.index.to_le_bytes());
            write_script(&mut bytes, &input.script_sig);
            bytes.extend_from_slice(&input.sequence.to_le_bytes());
        }

        write_compact_size(&mut bytes, self.outputs.len() as u64);
        for output in &self.outputs {
            bytes.extend_from_slice(&output.value.to_le_bytes());
            write_script(&mut bytes, &output.script_pubkey);
        }

        bytes.extend_from_slice(&self.lock_time.to_le_bytes());
        bytes
    }

    /// Calculate total output value
    pub fn total_output_value(&self) -> i64 {
        self.outputs.iter().map(|o| o.value).sum()
    }
}

/// Variable-length integer used for counts and script lengths
pub fn write_compact_size(bytes: &mut Vec<u8>, n: u64) {
    match n {
        0..=0xfc => bytes.push(n as u8),
        0xfd..=0xffff => {
            bytes.push(0xfd);
            bytes.extend_from_slice(&(n as u16).to_le_bytes());
        }
        0x1_0000..=0xffff_ffff => {
            bytes.push(0xfe);
            bytes.extend_from_slice(&(n as u32).to_le_bytes());
        }
        _ => {
            bytes.push(0xff);
            bytes.extend_from_slice(&n.to_le_bytes());
        }
    }
}

fn write_script(bytes: &mut Vec<u8>, script: &Script) {
    write_compact_size(bytes, script.len() as u64);
    bytes.extend_from_slice(script.as_bytes());
}
