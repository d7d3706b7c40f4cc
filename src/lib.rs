//! Bitmark (BMK) Chain Parameters
//!
//! The constants that tell the main, test and regression-test networks
//! apart: message magic, ports, address prefixes, proof-of-work limit,
//! emission schedule and the genesis block every chain is anchored to.
//!
//! Exactly one parameter set is active per process. Select it once at
//! startup (`node::select_from_flags`) and read it with `node::active_params`.

pub mod cli;
pub mod config;
pub mod consensus;
pub mod crypto;
pub mod error;
pub mod node;
pub mod p2p;
pub mod validation;
pub mod wallet;

pub use error::ParamsError;

/// Protocol constants shared by every network
pub mod constants {
    /// Base units per coin (8 decimal places)
    pub const COIN: i64 = 100_000_000;

    /// Length of the wire message prefix
    pub const MESSAGE_START_SIZE: usize = 4;

    /// Chain name (short form for tickers and logs)
    pub const CHAIN_NAME: &str = "BMK";

    /// Full chain name
    pub const CHAIN_FULL_NAME: &str = "Bitmark";
}
