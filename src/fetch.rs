//! Resource fetch controllers
//!
//! Each displayed resource (meme, joke) is driven by a `ResourceController`
//! that owns its display state and runs the fetch sequence: check the cache,
//! hit the network, update the cache, and fall back to a cached value when
//! the network fails. The `loading` flag doubles as a busy guard so at most
//! one fetch per resource is in flight at a time.

use tracing::{debug, warn};

use crate::cache::ResponseCache;
use crate::data::{JokeClient, JokeError, MemeClient, MemeError, ResourceKind};

/// Display state for one resource
///
/// `error` being set means the last attempt failed; it does not imply `value`
/// is empty, since a fallback read may have populated it from the cache.
#[derive(Debug, Clone, Default)]
pub struct ResourceState {
    /// The current display value, if any fetch or cache read has produced one
    pub value: Option<String>,
    /// True strictly between fetch start and fetch completion
    pub loading: bool,
    /// Short message from the last failed attempt, cleared on the next fetch
    pub error: Option<String>,
}

/// A source of fresh display values for one resource kind
///
/// The seam between the controller and the API clients; controllers only need
/// the kind (for cache keys and logs) and a way to fetch a fresh value.
#[allow(async_fn_in_trait)]
pub trait ResourceSource {
    /// Error type surfaced when a fresh fetch fails; its `Display` string is
    /// shown verbatim next to the affected card
    type Error: std::error::Error;

    /// Which resource this source produces
    fn kind(&self) -> ResourceKind;

    /// Fetches a fresh display value from the network
    async fn fetch_fresh(&self) -> Result<String, Self::Error>;
}

impl ResourceSource for MemeClient {
    type Error = MemeError;

    fn kind(&self) -> ResourceKind {
        ResourceKind::Meme
    }

    async fn fetch_fresh(&self) -> Result<String, MemeError> {
        self.fetch_meme().await
    }
}

impl ResourceSource for JokeClient {
    type Error = JokeError;

    fn kind(&self) -> ResourceKind {
        ResourceKind::Joke
    }

    async fn fetch_fresh(&self) -> Result<String, JokeError> {
        self.fetch_joke().await
    }
}

/// Orchestrates fetching one resource and owns its display state
///
/// The cache is optional because the cache directory may be unavailable
/// (e.g., no home directory); everything still works without it, just with a
/// network hit on every fetch and no stale fallback.
#[derive(Debug)]
pub struct ResourceController<S: ResourceSource> {
    /// Network source for fresh values
    source: S,
    /// Shared response cache; keys are disjoint per resource kind
    cache: Option<ResponseCache>,
    /// State consumed by the presentation layer
    state: ResourceState,
}

impl<S: ResourceSource> ResourceController<S> {
    /// Creates a controller with empty initial state
    pub fn new(source: S, cache: Option<ResponseCache>) -> Self {
        Self {
            source,
            cache,
            state: ResourceState::default(),
        }
    }

    /// The display state, read by the presentation layer
    pub fn state(&self) -> &ResourceState {
        &self.state
    }

    /// Which resource this controller drives
    pub fn kind(&self) -> ResourceKind {
        self.source.kind()
    }

    /// Reads this resource's cache entry, if a cache is available
    fn cached_value(&self) -> Option<String> {
        self.cache
            .as_ref()
            .and_then(|cache| cache.get(self.kind().cache_key()))
    }

    /// Runs one fetch sequence
    ///
    /// With `force_refresh` false a fresh cache entry short-circuits the
    /// network call entirely. With `force_refresh` true the cache read is
    /// skipped and a successful fetch overwrites the entry.
    ///
    /// On failure the error message is recorded and the cache is consulted
    /// anyway, so a previously fetched value keeps the card populated. A call
    /// made while a fetch is already in flight is dropped, not queued, and
    /// leaves the in-flight fetch's `loading` flag untouched.
    pub async fn fetch(&mut self, force_refresh: bool) {
        if self.state.loading {
            return;
        }
        self.state.loading = true;
        self.state.error = None;

        if !force_refresh {
            if let Some(value) = self.cached_value() {
                debug!(kind = self.kind().label(), "serving cached value");
                self.state.value = Some(value);
                self.state.loading = false;
                return;
            }
        }

        match self.source.fetch_fresh().await {
            Ok(value) => {
                debug!(kind = self.kind().label(), "fetched fresh value");
                if let Some(cache) = &self.cache {
                    cache.set(self.kind().cache_key(), &value);
                }
                self.state.value = Some(value);
            }
            Err(err) => {
                warn!(kind = self.kind().label(), %err, "fetch failed");
                self.state.error = Some(err.to_string());
                if let Some(value) = self.cached_value() {
                    self.state.value = Some(value);
                }
            }
        }

        self.state.loading = false;
    }

    /// Marks the controller as busy, standing in for an in-flight fetch
    #[cfg(test)]
    fn mark_loading(&mut self) {
        self.state.loading = true;
    }
}
