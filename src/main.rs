//! Bitmark (BMK) Node
//!
//! Resolves the network from the command line and config file, checks every
//! network's genesis commitment, and reports the active chain parameters.

use bmk_core::cli::{self, Args};
use bmk_core::config::NodeConfig;
use bmk_core::constants::{CHAIN_FULL_NAME, CHAIN_NAME};
use bmk_core::node::{self, ChainParams, GenesisInfo, ParamsSummary};
use std::process;
use tracing::{error, info};

fn main() {
    let args = cli::parse_args();

    let mut config = match load_config(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            process::exit(1);
        }
    };
    config.apply_cli_overrides(&args);

    init_logging(&config.log_level);

    // Build all parameter sets before anything reads them
    if let Err(e) = node::initialize() {
        error!("Fatal: {}", e);
        eprintln!("Error: {}", e);
        process::exit(1);
    }

    let network = match node::select_from_flags(&config) {
        Ok(network) => network,
        Err(e) => {
            error!("Invalid network selection: {}", e);
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };
    info!(%network, "node starting");

    let params = node::active_params();
    if args.json {
        match serde_json::to_string_pretty(&ParamsSummary::from(params)) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                error!("Failed to serialize parameters: {}", e);
                process::exit(1);
            }
        }
    } else {
        print_banner(params);
    }
}

fn load_config(args: &Args) -> Result<NodeConfig, bmk_core::ParamsError> {
    match &args.config {
        Some(path) => NodeConfig::load(path),
        None => Ok(NodeConfig::default()),
    }
}

fn init_logging(level: &str) {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    fmt().with_env_filter(filter).with_target(true).init();
}

fn print_banner(params: &ChainParams) {
    let genesis = GenesisInfo::from_block(params.genesis_block());

    println!("{} ({}) node", CHAIN_FULL_NAME, CHAIN_NAME);
    println!();
    println!("Network:        {}", params.network_id());
    println!("Message start:  {}", hex::encode(params.message_start()));
    println!("P2P port:       {}", params.default_port());
    println!("RPC port:       {}", params.rpc_port());
    println!("Data dir:       {}", display_dir(params.data_dir()));
    println!("RPC password:   {}", if params.requires_rpc_password() { "required" } else { "optional" });
    println!();
    println!("Genesis Block Information:");
    println!("  Hash:        {}", genesis.hash);
    println!("  Merkle Root: {}", genesis.merkle_root);
    println!("  Time:        {}", genesis.time);
    println!("  Bits:        0x{:08x}", genesis.bits);
    println!("  Nonce:       {}", genesis.nonce);
    println!();
    println!("Emission:");
    println!("  Halving interval: {}", params.subsidy_halving_interval());
    println!("  Fork 2 height:    {}", params.fork2_height());
    println!();
    println!("Seeds: {} DNS, {} fixed", params.dns_seeds().len(), params.fixed_seeds().len());
    for seed in params.dns_seeds() {
        println!("  {} ({})", seed.host, seed.name);
    }
    for seed in params.fixed_seeds() {
        println!("  {}", seed.addr);
    }
}

fn display_dir(dir: &str) -> &str {
    if dir.is_empty() {
        "(root)"
    } else {
        dir
    }
}
