//! Validation module - transaction and script structures

mod script;
mod transaction;

pub use script::*;
pub use transaction::*;
