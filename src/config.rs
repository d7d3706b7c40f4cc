//! Node configuration file
//!
//! Optional TOML file; every key has a default. Command-line switches are
//! layered on top with `apply_cli_overrides`.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use crate::cli::Args;
use crate::error::{ParamsError, Result};
use crate::node::{FlagSource, REGTEST_FLAG, TESTNET_FLAG};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NodeConfig {
    pub testnet: bool,
    pub regtest: bool,
    pub log_level: String,
}

impl Default for NodeConfig {
    fn default() -> Self {
        Self {
            testnet: false,
            regtest: false,
            log_level: "info".to_string(),
        }
    }
}

impl NodeConfig {
    /// Load from `path`, falling back to defaults when the file does not exist
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .map_err(|e| ParamsError::Config(format!("Failed to read {}: {}", path.display(), e)))?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| ParamsError::Config(format!("Failed to parse config: {}", e)))
    }

    /// Switches given on the command line turn the matching setting on
    pub fn apply_cli_overrides(&mut self, args: &Args) {
        if args.testnet {
            self.testnet = true;
        }
        if args.regtest {
            self.regtest = true;
        }
        if let Some(level) = &args.log_level {
            self.log_level = level.clone();
        }
    }
}

impl FlagSource for NodeConfig {
    fn get_bool(&self, name: &str, default: bool) -> bool {
        match name {
            TESTNET_FLAG => self.testnet,
            REGTEST_FLAG => self.regtest,
            _ => default,
        }
    }
}
