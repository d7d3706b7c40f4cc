//! Command-line arguments for the node binary

use clap::Parser;
use std::path::PathBuf;
use crate::node::{FlagSource, REGTEST_FLAG, TESTNET_FLAG};

#[derive(Parser, Debug, Default)]
#[command(name = "bmk-node")]
#[command(about = "Bitmark node: resolves and reports the active chain parameters", long_about = None)]
pub struct Args {
    /// Use the public test network
    #[arg(long)]
    pub testnet: bool,

    /// Use the private regression-test network
    #[arg(long)]
    pub regtest: bool,

    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error); RUST_LOG takes precedence
    #[arg(short, long)]
    pub log_level: Option<String>,

    /// Print the parameters as JSON
    #[arg(long)]
    pub json: bool,
}

impl FlagSource for Args {
    fn get_bool(&self, name: &str, default: bool) -> bool {
        match name {
            TESTNET_FLAG => self.testnet,
            REGTEST_FLAG => self.regtest,
            _ => default,
        }
    }
}

pub fn parse_args() -> Args {
    Args::parse()
}
