//! SQLite-based cache storage

use rusqlite::{Connection, OptionalExtension, params};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use super::{Clock, SystemClock};
use crate::error::CacheError;

/// Schema version - increment to trigger nuke-and-rebuild
const SCHEMA_VERSION: i32 = 1;

type Result<T> = std::result::Result<T, CacheError>;

/// SQLite-backed cache storage
pub struct CacheStorage {
    conn: Connection,
    clock: Arc<dyn Clock>,
}

impl CacheStorage {
    /// Open or create cache storage at the default cache location
    pub fn open() -> Result<Self> {
        let cache_dir = Self::cache_dir()?;
        Self::open_at(&cache_dir, Arc::new(SystemClock))
    }

    /// Get the cache directory path (~/.cache/fleetop on Linux)
    pub fn cache_dir() -> Result<PathBuf> {
        let cache_base = dirs::cache_dir().ok_or(CacheError::NoHome)?;
        Ok(cache_base.join("fleetop"))
    }

    /// Open cache storage in a specific directory
    pub fn open_at(cache_dir: &Path, clock: Arc<dyn Clock>) -> Result<Self> {
        std::fs::create_dir_all(cache_dir)
            .map_err(|e| CacheError::Io(format!("Failed to create cache dir: {}", e)))?;

        let db_path = cache_dir.join("cache.db");
        let conn = Connection::open(&db_path)?;

        let version: i32 = conn
            .pragma_query_value(None, "user_version", |r| r.get(0))
            .unwrap_or(0);

        if version != 0 && version != SCHEMA_VERSION {
            log::info!(
                "Cache schema version mismatch ({} != {}), rebuilding",
                version,
                SCHEMA_VERSION
            );
            drop(conn);
            std::fs::remove_file(&db_path)
                .map_err(|e| CacheError::Io(format!("Failed to remove cache DB: {}", e)))?;
            return Self::open_at(cache_dir, clock);
        }

        Self::init(conn, clock)
    }

    /// Throwaway in-memory storage
    #[cfg(test)]
    pub fn open_in_memory(clock: Arc<dyn Clock>) -> Result<Self> {
        Self::init(Connection::open_in_memory()?, clock)
    }

    fn init(conn: Connection, clock: Arc<dyn Clock>) -> Result<Self> {
        conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS cache_entries (
                cache_key TEXT PRIMARY KEY NOT NULL,
                endpoint TEXT NOT NULL,
                data TEXT NOT NULL,
                created_at INTEGER NOT NULL,
                expires_at INTEGER NOT NULL,
                size_bytes INTEGER NOT NULL
            );

            CREATE INDEX IF NOT EXISTS idx_expires_at ON cache_entries(expires_at);
            "#,
        )?;

        conn.pragma_update(None, "user_version", SCHEMA_VERSION)?;

        Ok(Self { conn, clock })
    }

    fn now_millis(&self) -> i64 {
        self.clock.now().timestamp_millis()
    }

    /// Get cached data if it has not expired yet
    pub fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let now = self.now_millis();

        let data: Option<String> = self
            .conn
            .query_row(
                "SELECT data FROM cache_entries
                 WHERE cache_key = ?1 AND expires_at > ?2",
                params![key, now],
                |row| row.get(0),
            )
            .optional()?;

        Ok(data.map(String::into_bytes))
    }

    /// Store data, replacing any previous entry for the key
    pub fn put(&self, key: &str, data: &[u8], endpoint: &str, ttl: Duration) -> Result<()> {
        let now = self.now_millis();
        let ttl_millis = i64::try_from(ttl.as_millis()).unwrap_or(i64::MAX);
        let expires = now.saturating_add(ttl_millis);

        self.conn.execute(
            "INSERT OR REPLACE INTO cache_entries
             (cache_key, endpoint, data, created_at, expires_at, size_bytes)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                key,
                endpoint,
                String::from_utf8_lossy(data).to_string(),
                now,
                expires,
                data.len()
            ],
        )?;
        Ok(())
    }

    /// Get cache statistics
    pub fn stats(&self) -> Result<CacheStats> {
        let now = self.now_millis();

        let total_entries: i64 =
            self.conn
                .query_row("SELECT COUNT(*) FROM cache_entries", [], |r| r.get(0))?;

        let valid_entries: i64 = self.conn.query_row(
            "SELECT COUNT(*) FROM cache_entries WHERE expires_at > ?1",
            [now],
            |r| r.get(0),
        )?;

        let total_size: i64 = self.conn.query_row(
            "SELECT COALESCE(SUM(size_bytes), 0) FROM cache_entries",
            [],
            |r| r.get(0),
        )?;

        let newest: Option<i64> = self
            .conn
            .query_row(
                "SELECT MAX(created_at) FROM cache_entries WHERE expires_at > ?1",
                [now],
                |r| r.get(0),
            )
            .optional()?
            .flatten();

        Ok(CacheStats {
            total_entries: usize::try_from(total_entries).unwrap_or(0),
            valid_entries: usize::try_from(valid_entries).unwrap_or(0),
            total_size_bytes: usize::try_from(total_size).unwrap_or(0),
            newest_entry: newest.and_then(chrono::DateTime::from_timestamp_millis),
        })
    }
}

/// Statistics about cache state
#[derive(Debug)]
pub struct CacheStats {
    pub total_entries: usize,
    pub valid_entries: usize,
    pub total_size_bytes: usize,
    pub newest_entry: Option<chrono::DateTime<chrono::Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::ManualClock;
    use tempfile::TempDir;

    #[test]
    fn test_put_get() {
        let storage = CacheStorage::open_in_memory(Arc::new(SystemClock)).unwrap();

        storage
            .put("key1", b"small data", "test", Duration::from_secs(60))
            .unwrap();

        let result = storage.get("key1").unwrap();
        assert_eq!(result, Some(b"small data".to_vec()));
    }

    #[test]
    fn test_expiration_follows_clock() {
        let clock = Arc::new(ManualClock::new());
        let storage = CacheStorage::open_in_memory(clock.clone()).unwrap();

        storage
            .put("key", b"data", "test", Duration::from_secs(300))
            .unwrap();

        clock.advance(Duration::from_secs(299));
        assert!(storage.get("key").unwrap().is_some());

        // Exactly at the TTL the entry is no longer fresh
        clock.advance(Duration::from_secs(1));
        assert!(storage.get("key").unwrap().is_none());
    }

    #[test]
    fn test_put_overwrites() {
        let storage = CacheStorage::open_in_memory(Arc::new(SystemClock)).unwrap();

        storage.put("k", b"old", "test", Duration::from_secs(60)).unwrap();
        storage.put("k", b"new", "test", Duration::from_secs(60)).unwrap();

        assert_eq!(storage.get("k").unwrap(), Some(b"new".to_vec()));
        assert_eq!(storage.stats().unwrap().total_entries, 1);
    }

    #[test]
    fn test_stats() {
        let clock = Arc::new(ManualClock::new());
        let storage = CacheStorage::open_in_memory(clock.clone()).unwrap();

        storage.put("k1", b"data1", "test", Duration::from_secs(60)).unwrap();
        storage.put("k2", b"data2", "test", Duration::from_secs(600)).unwrap();
        clock.advance(Duration::from_secs(120));

        let stats = storage.stats().unwrap();
        assert_eq!(stats.total_entries, 2);
        assert_eq!(stats.valid_entries, 1);
        assert_eq!(stats.total_size_bytes, 10);
        assert!(stats.newest_entry.is_some());
    }

    #[test]
    fn test_open_at_persists() {
        let dir = TempDir::new().unwrap();
        {
            let storage = CacheStorage::open_at(dir.path(), Arc::new(SystemClock)).unwrap();
            storage.put("k", b"v", "test", Duration::from_secs(60)).unwrap();
        }

        let storage = CacheStorage::open_at(dir.path(), Arc::new(SystemClock)).unwrap();
        assert_eq!(storage.get("k").unwrap(), Some(b"v".to_vec()));
    }
}
