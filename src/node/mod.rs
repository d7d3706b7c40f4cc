//! Node module - network identity, genesis and the active chain parameters

mod genesis;
mod network;
mod params;
pub mod registry;
mod startup;
mod summary;

pub use genesis::*;
pub use network::*;
pub use params::*;
pub use registry::{
    active_network, active_params, initialize, is_regression_network, is_test_network,
    params_for, select, select_scoped, ParamsRegistry, ScopedSelection,
};
pub use startup::*;
pub use summary::*;
