//! Startup configuration for one machine.
//!
//! Initial stock is configuration, not behavior: two machines in the field
//! legitimately start with different refill states. Phase timings are design
//! parameters with the nominal durations as defaults; tests zero them out to
//! run the full preparation sequence without waiting.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::model::StockLevels;

/// Everything a machine needs to start serving.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MachineConfig {
    /// Quantities loaded into the machine at startup.
    pub initial_stock: StockLevels,
    /// Nominal duration of each preparation phase.
    pub timings: PhaseTimings,
}

/// Nominal duration of each timed phase of the preparation sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhaseTimings {
    pub payment: Duration,
    pub payment_confirmation: Duration,
    pub brewing: Duration,
    pub adding_milk: Duration,
    pub adding_sugar: Duration,
    pub pouring: Duration,
    /// How long the cup sits in the dispenser before the farewell.
    pub ready: Duration,
    /// How long the farewell shows before the machine resets.
    pub celebration: Duration,
}

impl Default for PhaseTimings {
    fn default() -> Self {
        Self {
            payment: Duration::from_millis(1500),
            payment_confirmation: Duration::from_millis(1000),
            brewing: Duration::from_millis(1500),
            adding_milk: Duration::from_millis(1500),
            adding_sugar: Duration::from_millis(1000),
            pouring: Duration::from_millis(1500),
            ready: Duration::from_millis(4000),
            celebration: Duration::from_millis(3000),
        }
    }
}

impl PhaseTimings {
    /// All-zero timings. Phase ordering is preserved; only the waiting goes
    /// away. Used by tests.
    pub fn instant() -> Self {
        Self {
            payment: Duration::ZERO,
            payment_confirmation: Duration::ZERO,
            brewing: Duration::ZERO,
            adding_milk: Duration::ZERO,
            adding_sugar: Duration::ZERO,
            pouring: Duration::ZERO,
            ready: Duration::ZERO,
            celebration: Duration::ZERO,
        }
    }
}
