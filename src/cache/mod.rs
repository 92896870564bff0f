//! Cache module for storing API responses to disk
//!
//! This module provides an expiring key-value store that persists fetched
//! display values to the filesystem. Entries older than the configured max
//! age are evicted lazily when read. The cache is advisory: every read path
//! has a network fallback and every write is best-effort, so storage
//! failures are absorbed here and never reach callers.

mod store;

pub use store::{ResponseCache, DEFAULT_MAX_AGE_SECS};
