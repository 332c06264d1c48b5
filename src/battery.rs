//! Battery state access via Linux sysfs.
//!
//! Probes the usual `/sys/class/power_supply` device names once at
//! startup and reads `capacity`/`status` on every poll.

use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum BatteryError {
    #[error("no battery device found under /sys/class/power_supply")]
    NotFound,
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse capacity {value:?} from {path}")]
    Parse { path: PathBuf, value: String },
}

/// Read access to the current charge state.
pub trait BatterySource {
    /// Current charge percentage, 0..=100.
    fn capacity(&self) -> Result<u8, BatteryError>;

    /// True if mains-connected or full.
    fn is_charging(&self) -> Result<bool, BatteryError>;
}

pub struct SysfsBattery {
    capacity_path: PathBuf,
    status_path: PathBuf,
}

impl SysfsBattery {
    /// Locate the battery device. One-shot: probes a fixed ordered list
    /// of device directories and takes the first whose `capacity` and
    /// `status` files both exist.
    pub fn discover() -> Result<Self, BatteryError> {
        let candidates = [
            PathBuf::from("/sys/class/power_supply/BAT0"),
            PathBuf::from("/sys/class/power_supply/BAT1"),
            PathBuf::from("/sys/class/power_supply/battery"),
        ];
        Self::probe(&candidates)
    }

    fn probe(candidates: &[PathBuf]) -> Result<Self, BatteryError> {
        for dir in candidates {
            let capacity_path = dir.join("capacity");
            let status_path = dir.join("status");
            if capacity_path.exists() && status_path.exists() {
                info!("Found battery at: {}", dir.display());
                return Ok(Self {
                    capacity_path,
                    status_path,
                });
            }
        }
        Err(BatteryError::NotFound)
    }

    fn read_trimmed(path: &Path) -> Result<String, BatteryError> {
        let data = std::fs::read_to_string(path).map_err(|source| BatteryError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(data.trim().to_string())
    }
}

impl BatterySource for SysfsBattery {
    fn capacity(&self) -> Result<u8, BatteryError> {
        let value = Self::read_trimmed(&self.capacity_path)?;
        value.parse().map_err(|_| BatteryError::Parse {
            path: self.capacity_path.clone(),
            value,
        })
    }

    fn is_charging(&self) -> Result<bool, BatteryError> {
        let status = Self::read_trimmed(&self.status_path)?;
        Ok(status == "Charging" || status == "Full")
    }
}
