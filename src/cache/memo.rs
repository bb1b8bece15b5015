//! Typed, time-boxed memoization on top of [`CacheStorage`]

use serde::{Serialize, de::DeserializeOwned};
use std::sync::Mutex;
use std::time::Duration;

use super::CacheStorage;

/// Typed view over the cache storage.
///
/// Cache failures never fail a request: a broken cache degrades to a miss
/// and the storage error is logged.
pub struct ResponseCache {
    storage: Mutex<CacheStorage>,
}

impl ResponseCache {
    pub fn new(storage: CacheStorage) -> Self {
        Self {
            storage: Mutex::new(storage),
        }
    }

    /// Fresh cached value for `key`, if any
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let guard = self.storage.lock().ok()?;
        match guard.get(key) {
            Ok(Some(data)) => serde_json::from_slice(&data)
                .map_err(|e| log::warn!("Discarding unreadable cache entry: {}", e))
                .ok(),
            Ok(None) => None,
            Err(e) => {
                log::warn!("Cache read failed: {}", e);
                None
            }
        }
    }

    /// Store `data`, overwriting whatever was there
    pub fn put<T: Serialize>(&self, key: &str, data: &T, endpoint: &str, ttl: Duration) {
        let Ok(json) = serde_json::to_vec(data) else {
            return;
        };
        if let Ok(guard) = self.storage.lock()
            && let Err(e) = guard.put(key, &json, endpoint, ttl)
        {
            log::warn!("Cache write failed: {}", e);
        }
    }
}
