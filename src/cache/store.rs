//! Expiring key-value cache backed by the filesystem
//!
//! Provides a `ResponseCache` that stores string values as JSON files with a
//! write timestamp, evicting entries lazily once they exceed the configured
//! max age. Storage failures are logged and converted to "absent"/no-op so
//! caching never interrupts the caller's primary flow.

use chrono::{DateTime, Duration, Utc};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use tracing::warn;

/// Default max age for cache entries in seconds (10 minutes)
pub const DEFAULT_MAX_AGE_SECS: u64 = 600;

/// Wrapper struct for cached data stored on disk
#[derive(Debug, Serialize, Deserialize)]
struct CacheEntry {
    /// The cached display value
    value: String,
    /// When the value was cached
    cached_at: DateTime<Utc>,
}

/// Manages reading and writing cached display values to disk
///
/// Values are stored as JSON files in an XDG-compliant cache directory
/// (`~/.cache/chuckle/` on Linux), one file per key. The max age is fixed at
/// construction; expiry is checked at read time and expired entries are
/// deleted on read, so there is no background eviction.
#[derive(Debug, Clone)]
pub struct ResponseCache {
    /// Directory where cache files are stored
    cache_dir: PathBuf,
    /// Entries older than this are treated as absent and removed
    max_age: Duration,
}

impl ResponseCache {
    /// Creates a new ResponseCache using the XDG-compliant cache directory
    ///
    /// Returns `None` if the cache directory cannot be determined (e.g., no
    /// home directory).
    pub fn new(max_age_secs: u64) -> Option<Self> {
        let project_dirs = ProjectDirs::from("", "", "chuckle")?;
        let cache_dir = project_dirs.cache_dir().to_path_buf();
        Some(Self::with_dir(cache_dir, max_age_secs))
    }

    /// Creates a new ResponseCache with a custom cache directory
    ///
    /// Useful for testing or when a specific cache location is needed.
    pub fn with_dir(cache_dir: PathBuf, max_age_secs: u64) -> Self {
        Self {
            cache_dir,
            max_age: Duration::seconds(max_age_secs as i64),
        }
    }

    /// Returns the path to a cache file for the given key
    fn cache_path(&self, key: &str) -> PathBuf {
        self.cache_dir.join(format!("{}.json", key))
    }

    /// Reads the cached value for `key`
    ///
    /// Returns `None` if the entry doesn't exist or the stored payload cannot
    /// be parsed as a well-formed entry (corrupt entries are ignored, never a
    /// crash). An entry older than the max age is deleted and `None` is
    /// returned; otherwise the stored value is returned.
    pub fn get(&self, key: &str) -> Option<String> {
        let path = self.cache_path(key);
        let content = fs::read_to_string(&path).ok()?;
        let entry: CacheEntry = match serde_json::from_str(&content) {
            Ok(entry) => entry,
            Err(err) => {
                warn!(key, %err, "ignoring corrupt cache entry");
                return None;
            }
        };

        if Utc::now() - entry.cached_at > self.max_age {
            if let Err(err) = fs::remove_file(&path) {
                warn!(key, %err, "failed to evict expired cache entry");
            }
            return None;
        }

        Some(entry.value)
    }

    /// Writes `value` to the cache under `key` with the current timestamp
    ///
    /// Best-effort: if directory creation, serialization, or the file write
    /// fails, the failure is logged and swallowed.
    pub fn set(&self, key: &str, value: &str) {
        let entry = CacheEntry {
            value: value.to_string(),
            cached_at: Utc::now(),
        };

        let result = fs::create_dir_all(&self.cache_dir)
            .map_err(|e| e.to_string())
            .and_then(|()| serde_json::to_string_pretty(&entry).map_err(|e| e.to_string()))
            .and_then(|json| fs::write(self.cache_path(key), json).map_err(|e| e.to_string()));

        if let Err(err) = result {
            warn!(key, %err, "failed to write cache entry");
        }
    }
}
