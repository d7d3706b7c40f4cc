//! Process-wide parameter registry and network selector
//!
//! All three parameter sets are built once and live for the rest of the
//! process. The selector names which of them is active; it is written once at
//! startup and read freely afterwards. Components that can take a
//! `&ChainParams` argument should; the global is for top-level wiring.

use once_cell::sync::OnceCell;
use parking_lot::{ReentrantMutex, ReentrantMutexGuard};
use std::sync::atomic::{AtomicU8, Ordering};
use tracing::{debug, info};
use crate::error::Result;
use super::{ChainParams, NetworkId};

static REGISTRY: OnceCell<ParamsRegistry> = OnceCell::new();

/// Index of the active network; Main until `select` runs
static ACTIVE: AtomicU8 = AtomicU8::new(0);

/// Serializes scoped overrides across threads; nesting on one thread is allowed
static SCOPE_LOCK: ReentrantMutex<()> = parking_lot::const_reentrant_mutex(());

/// The constructed parameter sets, one per network
#[derive(Debug)]
pub struct ParamsRegistry {
    sets: [ChainParams; 3],
}

impl ParamsRegistry {
    /// Construct every network's parameters, failing on the first bad literal
    pub fn build() -> Result<Self> {
        let sets = [
            ChainParams::new(NetworkId::Main)?,
            ChainParams::new(NetworkId::Test)?,
            ChainParams::new(NetworkId::Regression)?,
        ];
        Ok(Self { sets })
    }

    pub fn get(&self, network: NetworkId) -> &ChainParams {
        &self.sets[network.index()]
    }
}

/// Build the registry if it does not exist yet
///
/// Call this during startup so an invariant violation surfaces as an error
/// instead of a panic on first use.
pub fn initialize() -> Result<&'static ParamsRegistry> {
    REGISTRY.get_or_try_init(|| {
        let registry = ParamsRegistry::build()?;
        debug!("parameter registry initialized");
        Ok(registry)
    })
}

/// The registry, built on first use
///
/// # Panics
/// If a parameter set fails its genesis checks. The constants are fixed at
/// compile time, so this means the binary itself is inconsistent.
pub fn registry() -> &'static ParamsRegistry {
    match initialize() {
        Ok(registry) => registry,
        Err(e) => panic!("chain parameters are inconsistent: {e}"),
    }
}

/// Parameters of a specific network
pub fn params_for(network: NetworkId) -> &'static ChainParams {
    registry().get(network)
}

/// Make `network` the active one
pub fn select(network: NetworkId) {
    ACTIVE.store(network.index() as u8, Ordering::Release);
    info!(%network, "selected chain parameters");
}

pub fn active_network() -> NetworkId {
    match ACTIVE.load(Ordering::Acquire) {
        1 => NetworkId::Test,
        2 => NetworkId::Regression,
        _ => NetworkId::Main,
    }
}

/// Parameters of the currently selected network
pub fn active_params() -> &'static ChainParams {
    params_for(active_network())
}

/// Public test network only; regtest reports false
pub fn is_test_network() -> bool {
    active_network() == NetworkId::Test
}

pub fn is_regression_network() -> bool {
    active_network() == NetworkId::Regression
}

/// A temporary selection that restores the previous one when dropped
///
/// Holding one blocks scoped selections on other threads until it is dropped.
pub struct ScopedSelection {
    previous: NetworkId,
    _lock: ReentrantMutexGuard<'static, ()>,
}

/// Select `network` for the lifetime of the returned guard
pub fn select_scoped(network: NetworkId) -> ScopedSelection {
    let lock = SCOPE_LOCK.lock();
    let previous = active_network();
    select(network);
    ScopedSelection {
        previous,
        _lock: lock,
    }
}

impl ScopedSelection {
    pub fn previous(&self) -> NetworkId {
        self.previous
    }
}

impl Drop for ScopedSelection {
    fn drop(&mut self) {
        debug!(network = %self.previous, "restoring chain parameter selection");
        ACTIVE.store(self.previous.index() as u8, Ordering::Release);
    }
}
