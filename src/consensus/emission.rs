//! Emission schedule parameters
//!
//! Halving cadence plus the two CEM (constant emission moderation) regimes:
//! before fork 2 the look-back window is 365 days and at most 50% of the
//! epoch reward is scaled; from the fork 2 height on, 90 days and 80%.

use serde::{Deserialize, Serialize};

/// CEM look-back window before fork 2, in days
pub const CEM_WINDOW_DAYS_V1: u32 = 365;
/// CEM look-back window from fork 2 on, in days
pub const CEM_WINDOW_DAYS_V2: u32 = 90;
/// Share of the epoch reward CEM may scale before fork 2, in percent
pub const CEM_MAX_REDUCTION_PCT_V1: u32 = 50;
/// Share of the epoch reward CEM may scale from fork 2 on, in percent
pub const CEM_MAX_REDUCTION_PCT_V2: u32 = 80;

/// Per-network emission constants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmissionSchedule {
    /// Blocks between reward halvings
    pub halving_interval: u32,
    /// First height governed by the fork 2 rules
    pub fork2_height: u64,
}

impl EmissionSchedule {
    pub const fn new(halving_interval: u32, fork2_height: u64) -> Self {
        Self {
            halving_interval,
            fork2_height,
        }
    }

    /// Half the halving interval
    pub fn interim_interval(&self) -> u32 {
        self.halving_interval / 2
    }

    pub fn on_fork2(&self, height: u64) -> bool {
        height >= self.fork2_height
    }

    /// Days CEM looks back to find the reference peak hashrate
    pub fn cem_window_length(&self, height: u64) -> u32 {
        if self.on_fork2(height) {
            CEM_WINDOW_DAYS_V2
        } else {
            CEM_WINDOW_DAYS_V1
        }
    }

    /// Percentage of the nominal block reward CEM is allowed to withhold
    pub fn cem_max_native_block_reward_reduction(&self, height: u64) -> u32 {
        if self.on_fork2(height) {
            CEM_MAX_REDUCTION_PCT_V2
        } else {
            CEM_MAX_REDUCTION_PCT_V1
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interim_interval_is_half() {
        assert_eq!(EmissionSchedule::new(788_000, 0).interim_interval(), 394_000);
        assert_eq!(EmissionSchedule::new(150, 0).interim_interval(), 75);
        assert_eq!(EmissionSchedule::new(151, 0).interim_interval(), 75);
    }

    #[test]
    fn test_fork2_boundary() {
        let schedule = EmissionSchedule::new(788_000, 1_000);

        assert!(!schedule.on_fork2(0));
        assert!(!schedule.on_fork2(999));
        assert!(schedule.on_fork2(1_000));
        assert!(schedule.on_fork2(u64::MAX));

        assert_eq!(schedule.cem_window_length(999), 365);
        assert_eq!(schedule.cem_window_length(1_000), 90);
        assert_eq!(schedule.cem_max_native_block_reward_reduction(999), 50);
        assert_eq!(schedule.cem_max_native_block_reward_reduction(1_000), 80);
    }

    #[test]
    fn test_fork2_at_genesis() {
        let schedule = EmissionSchedule::new(150, 0);
        assert!(schedule.on_fork2(0));
        assert_eq!(schedule.cem_window_length(0), 90);
    }
}
