use std::{
    fmt,
    sync::{Arc, LazyLock},
};

use serde::{Deserialize, Serialize};

use crate::clock::{EpochClock, SECONDS_PER_SLOT, SLOTS_PER_EPOCH};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    Mainnet,
    Holesky,
    Hoodi,
    Dev,
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Network::Mainnet => write!(f, "mainnet"),
            Network::Holesky => write!(f, "holesky"),
            Network::Hoodi => write!(f, "hoodi"),
            Network::Dev => write!(f, "dev"),
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct NetworkSpec {
    pub network: Network,
    pub genesis_time: u64,
    pub slots_per_epoch: u64,
    pub seconds_per_slot: u64,
}

impl NetworkSpec {
    pub fn clock(&self) -> EpochClock {
        EpochClock::new(self.slots_per_epoch, self.seconds_per_slot)
    }

    /// Unix timestamp at which `epoch` starts.
    pub fn epoch_start_time(&self, epoch: u64) -> u64 {
        self.genesis_time
            .saturating_add(self.clock().epochs_to_seconds(epoch))
    }
}

pub static MAINNET: LazyLock<Arc<NetworkSpec>> = LazyLock::new(|| {
    NetworkSpec {
        network: Network::Mainnet,
        genesis_time: 1606824023,
        slots_per_epoch: SLOTS_PER_EPOCH,
        seconds_per_slot: SECONDS_PER_SLOT,
    }
    .into()
});

pub static HOLESKY: LazyLock<Arc<NetworkSpec>> = LazyLock::new(|| {
    NetworkSpec {
        network: Network::Holesky,
        genesis_time: 1695902400,
        slots_per_epoch: SLOTS_PER_EPOCH,
        seconds_per_slot: SECONDS_PER_SLOT,
    }
    .into()
});

pub static HOODI: LazyLock<Arc<NetworkSpec>> = LazyLock::new(|| {
    NetworkSpec {
        network: Network::Hoodi,
        genesis_time: 1742213400,
        slots_per_epoch: SLOTS_PER_EPOCH,
        seconds_per_slot: SECONDS_PER_SLOT,
    }
    .into()
});

pub static DEV: LazyLock<Arc<NetworkSpec>> = LazyLock::new(|| {
    NetworkSpec {
        network: Network::Dev,
        genesis_time: 0,
        slots_per_epoch: SLOTS_PER_EPOCH,
        seconds_per_slot: SECONDS_PER_SLOT,
    }
    .into()
});
