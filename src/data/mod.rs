//! Core data models for Chuckle
//!
//! This module contains the resource model shared by the fetch layer and the
//! API clients for the two remote sources (memes and jokes).

pub mod joke;
pub mod meme;

pub use joke::{JokeClient, JokeError};
pub use meme::{MemeClient, MemeError};

/// The two kinds of resources the display shows
///
/// Each kind has its own endpoint, cache key, and state triple; the two are
/// fully independent and may be in flight simultaneously.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    /// A random image meme; the display value is the image URL
    Meme,
    /// A random two-part joke; the display value is "setup - punchline"
    Joke,
}

impl ResourceKind {
    /// The key this resource is cached under
    pub fn cache_key(self) -> &'static str {
        match self {
            ResourceKind::Meme => "meme",
            ResourceKind::Joke => "joke",
        }
    }

    /// Human-readable name used in logs and the UI
    pub fn label(self) -> &'static str {
        match self {
            ResourceKind::Meme => "meme",
            ResourceKind::Joke => "joke",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_keys_are_disjoint() {
        assert_ne!(
            ResourceKind::Meme.cache_key(),
            ResourceKind::Joke.cache_key()
        );
    }

    #[test]
    fn test_labels() {
        assert_eq!(ResourceKind::Meme.label(), "meme");
        assert_eq!(ResourceKind::Joke.label(), "joke");
    }
}
