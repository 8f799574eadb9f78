//! Time abstraction.
//!
//! Providers never read the system clock directly; they ask a [`Clock`]. Tests
//! inject a [`FixedClock`] so timestamps of created posts and messages are
//! deterministic.

use std::{
    fmt,
    time::{Duration, SystemTime, UNIX_EPOCH},
};

use serde::{Deserialize, Serialize};

const SECS_PER_MINUTE: u64 = 60;
const SECS_PER_HOUR: u64 = 60 * SECS_PER_MINUTE;
const SECS_PER_DAY: u64 = 24 * SECS_PER_HOUR;

/// Wall-clock instant with one-second resolution (seconds since Unix epoch).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(u64);

impl Timestamp {
    /// Instant `secs` seconds after the Unix epoch.
    pub const fn from_unix_secs(secs: u64) -> Self {
        Self(secs)
    }

    /// Seconds since the Unix epoch.
    pub const fn as_unix_secs(self) -> u64 {
        self.0
    }

    /// Instant `ago` before `self`. Saturates at the epoch.
    pub fn before(self, ago: Duration) -> Self {
        Self(self.0.saturating_sub(ago.as_secs()))
    }

    /// Time elapsed between `self` and a later instant. Zero if `now` is
    /// earlier than `self`.
    pub fn elapsed_until(self, now: Self) -> Duration {
        Duration::from_secs(now.0.saturating_sub(self.0))
    }

    /// Compact age relative to `now`: `now`, `5m`, `2h`, `3d`.
    pub fn relative_to(self, now: Self) -> String {
        let secs = self.elapsed_until(now).as_secs();
        if secs < SECS_PER_MINUTE {
            "now".to_string()
        } else if secs < SECS_PER_HOUR {
            format!("{}m", secs / SECS_PER_MINUTE)
        } else if secs < SECS_PER_DAY {
            format!("{}h", secs / SECS_PER_HOUR)
        } else {
            format!("{}d", secs / SECS_PER_DAY)
        }
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}s", self.0)
    }
}

/// Source of the current time.
///
/// # Invariants
///
/// - `now()` never goes backwards within one process
pub trait Clock {
    /// Current wall-clock time.
    fn now(&self) -> Timestamp;
}

/// Clock backed by [`SystemTime`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        // A system clock set before 1970 is treated as the epoch.
        let secs = SystemTime::now().duration_since(UNIX_EPOCH).map_or(0, |d| d.as_secs());
        Timestamp::from_unix_secs(secs)
    }
}

/// Clock frozen at a single instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub Timestamp);

impl Clock for FixedClock {
    fn now(&self) -> Timestamp {
        self.0
    }
}
