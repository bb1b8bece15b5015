//! Local cache for API responses
//!
//! SQLite-backed so a cached response survives between CLI invocations.
//! Entries expire purely by age; the clock is injectable for tests.

pub mod key;
pub mod memo;
pub mod storage;

use chrono::{DateTime, Utc};
use std::time::Duration;

/// Cache TTL per cached endpoint
pub struct CacheTtl;

impl CacheTtl {
    /// Fleet-wide vehicle counters
    pub const VEHICLE_STATS: Duration = Duration::from_secs(5 * 60); // 5 min
}

/// Time source for cache expiry
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock that only moves when told to
#[cfg(test)]
#[derive(Debug)]
pub struct ManualClock {
    now: std::sync::Mutex<DateTime<Utc>>,
}

#[cfg(test)]
impl ManualClock {
    pub fn new() -> Self {
        Self {
            now: std::sync::Mutex::new(Utc::now()),
        }
    }

    pub fn advance(&self, by: Duration) {
        let mut now = self.now.lock().unwrap();
        *now += chrono::Duration::from_std(by).unwrap();
    }
}

#[cfg(test)]
impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().unwrap()
    }
}

pub use key::cache_key;
pub use memo::ResponseCache;
pub use storage::CacheStorage;
