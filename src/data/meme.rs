//! Humor API meme client
//!
//! Fetches a random image meme from the Humor API and extracts the image URL.
//! The API key is supplied by the caller (CLI flag or environment); nothing
//! is embedded in the binary.

use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;

/// Endpoint for random memes
const HUMOR_API_URL: &str = "https://api.humorapi.com/memes/random";

/// Errors that can occur when fetching a meme
///
/// The `Display` strings double as the messages shown next to the meme card,
/// so they stay short.
#[derive(Debug, Error)]
pub enum MemeError {
    /// HTTP request failed or returned a non-success status
    #[error("Failed to load meme")]
    RequestFailed(#[from] reqwest::Error),

    /// Response decoded but carried no usable image URL
    #[error("No meme found")]
    NoMeme,

    /// No API key was configured
    #[error("No API key (set HUMOR_API_KEY or --api-key)")]
    MissingApiKey,
}

/// Typed response from the Humor API
///
/// Only the `url` field is consumed; everything else is ignored. The field is
/// optional so a shape mismatch surfaces as `NoMeme` rather than trusting the
/// payload blindly.
#[derive(Debug, Deserialize)]
struct MemeResponse {
    url: Option<String>,
}

/// Client for fetching random memes from the Humor API
#[derive(Debug, Clone)]
pub struct MemeClient {
    /// HTTP client for making requests
    http_client: Client,
    /// API key sent in the `X-API-Key` header; `None` means unconfigured
    api_key: Option<String>,
    /// Base URL for the API (allows override for testing)
    base_url: String,
}

impl MemeClient {
    /// Creates a new MemeClient with the given API key
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            http_client: Client::new(),
            api_key,
            base_url: HUMOR_API_URL.to_string(),
        }
    }

    /// Creates a new MemeClient with a custom base URL (for testing)
    #[cfg(test)]
    pub fn with_base_url(api_key: Option<String>, base_url: String) -> Self {
        Self {
            http_client: Client::new(),
            api_key,
            base_url,
        }
    }

    /// Fetches a random meme and returns its image URL
    ///
    /// # Returns
    /// * `Ok(String)` - The absolute image URL
    /// * `Err(MemeError)` - If the key is missing, the request fails, the
    ///   response status is non-success, or the payload has no usable `url`
    pub async fn fetch_meme(&self) -> Result<String, MemeError> {
        let api_key = self.api_key.as_deref().ok_or(MemeError::MissingApiKey)?;

        let response = self
            .http_client
            .get(&self.base_url)
            .header("X-API-Key", api_key)
            .send()
            .await?
            .error_for_status()?;

        let payload: MemeResponse = response.json().await?;

        match payload.url {
            Some(url) if !url.is_empty() => Ok(url),
            _ => Err(MemeError::NoMeme),
        }
    }
}
