//! Battery level classification.
//!
//! Pure mapping from (capacity, charging, thresholds) to a discrete
//! urgency level. Charging always wins; the critical threshold is
//! tested before the low one.

use crate::config::LevelSpec;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Normal,
    Low,
    Critical,
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Normal => write!(f, "normal"),
            Self::Low => write!(f, "low"),
            Self::Critical => write!(f, "critical"),
        }
    }
}

/// Classify the current charge into a level.
///
/// Critical is evaluated before low on purpose: with an inverted
/// configuration (critical threshold above low) values in the overlap
/// band classify as critical. There is no numeric clamp.
pub fn classify(capacity: u8, charging: bool, low: &LevelSpec, critical: &LevelSpec) -> Level {
    if charging {
        Level::Normal
    } else if capacity <= critical.threshold {
        Level::Critical
    } else if capacity <= low.threshold {
        Level::Low
    } else {
        Level::Normal
    }
}
