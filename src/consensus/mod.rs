//! Consensus module - block structure, proof-of-work targets and emission constants

mod block;
mod emission;
mod pow;

pub use block::*;
pub use emission::*;
pub use pow::*;
