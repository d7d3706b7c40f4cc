//! Startup network resolution
//!
//! Turns the `-testnet` / `-regtest` switches into exactly one network.

use std::collections::HashMap;
use crate::error::{ParamsError, Result};
use super::{registry, NetworkId};

pub const TESTNET_FLAG: &str = "testnet";
pub const REGTEST_FLAG: &str = "regtest";

/// Boolean option lookup by name (command line, config file, ...)
pub trait FlagSource {
    fn get_bool(&self, name: &str, default: bool) -> bool;
}

impl FlagSource for HashMap<String, bool> {
    fn get_bool(&self, name: &str, default: bool) -> bool {
        self.get(name).copied().unwrap_or(default)
    }
}

/// Resolve the two switches to a network
///
/// Both set at once is a conflict; otherwise regtest wins over testnet and
/// neither means main.
pub fn resolve_from_startup_flags(regtest: bool, testnet: bool) -> Result<NetworkId> {
    match (regtest, testnet) {
        (true, true) => Err(ParamsError::ConflictingNetworkSelection),
        (true, false) => Ok(NetworkId::Regression),
        (false, true) => Ok(NetworkId::Test),
        (false, false) => Ok(NetworkId::Main),
    }
}

/// Read both switches from `source` and resolve them
pub fn resolve_from_flags<S: FlagSource + ?Sized>(source: &S) -> Result<NetworkId> {
    let regtest = source.get_bool(REGTEST_FLAG, false);
    let testnet = source.get_bool(TESTNET_FLAG, false);
    resolve_from_startup_flags(regtest, testnet)
}

/// Resolve from `source` and select the result; nothing is selected on conflict
pub fn select_from_flags<S: FlagSource + ?Sized>(source: &S) -> Result<NetworkId> {
    let network = resolve_from_flags(source)?;
    registry::select(network);
    Ok(network)
}
