//! Wallet module - network-specific address encoding

mod address;

pub use address::*;
