//! Base58Check address encoding
//!
//! The active network's prefix table decides the leading bytes, so an address
//! from one network never decodes as valid on another.

use crate::error::{ParamsError, Result};
use crate::node::{Base58Type, ChainParams};

/// Encode `payload` of the given kind for `params`' network
pub fn encode_base58check(params: &ChainParams, kind: Base58Type, payload: &[u8]) -> String {
    let prefix = params.base58_prefix(kind);
    let mut data = Vec::with_capacity(prefix.len() + payload.len());
    data.extend_from_slice(prefix);
    data.extend_from_slice(payload);
    bs58::encode(data).with_check().into_string()
}

/// Decode a Base58Check string, requiring `kind`'s prefix for `params`' network
pub fn decode_base58check(params: &ChainParams, kind: Base58Type, encoded: &str) -> Result<Vec<u8>> {
    let data = bs58::decode(encoded)
        .with_check(None)
        .into_vec()
        .map_err(|e| ParamsError::Address(e.to_string()))?;

    let prefix = params.base58_prefix(kind);
    match data.strip_prefix(prefix) {
        Some(payload) => Ok(payload.to_vec()),
        None => Err(ParamsError::Address(format!(
            "not a {:?} for {}",
            kind,
            params.network_id()
        ))),
    }
}

/// Pay-to-pubkey-hash address for a 20-byte key hash
pub fn pubkey_address(params: &ChainParams, key_hash: &[u8; 20]) -> String {
    encode_base58check(params, Base58Type::PubkeyAddress, key_hash)
}

/// Pay-to-script-hash address for a 20-byte script hash
pub fn script_address(params: &ChainParams, script_hash: &[u8; 20]) -> String {
    encode_base58check(params, Base58Type::ScriptAddress, script_hash)
}
