use serde::{Deserialize, Serialize};

pub const SECONDS_PER_DAY: u64 = 24 * 60 * 60;
pub const SLOTS_PER_EPOCH: u64 = 32;
pub const SECONDS_PER_SLOT: u64 = 12;

/// Converts epoch spans into wall-clock seconds.
///
/// The clock is passed explicitly to everything that needs it, so callers can evaluate
/// reports from networks with non-standard slot timings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EpochClock {
    pub slots_per_epoch: u64,
    pub seconds_per_slot: u64,
}

impl Default for EpochClock {
    fn default() -> Self {
        Self::new(SLOTS_PER_EPOCH, SECONDS_PER_SLOT)
    }
}

impl EpochClock {
    pub const fn new(slots_per_epoch: u64, seconds_per_slot: u64) -> Self {
        Self {
            slots_per_epoch,
            seconds_per_slot,
        }
    }

    pub const fn seconds_per_epoch(&self) -> u64 {
        self.slots_per_epoch * self.seconds_per_slot
    }

    pub fn epochs_to_seconds(&self, epochs: u64) -> u64 {
        epochs.saturating_mul(self.seconds_per_epoch())
    }

    /// Number of whole epochs in a day. Zero if an epoch is longer than a day.
    pub fn epochs_per_day(&self) -> u64 {
        SECONDS_PER_DAY
            .checked_div(self.seconds_per_epoch())
            .unwrap_or_default()
    }
}
