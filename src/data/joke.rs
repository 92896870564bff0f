//! Official Joke API client
//!
//! Fetches a random two-part joke and joins the setup and punchline into a
//! single display string.

use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;

/// Endpoint for random jokes
const JOKE_API_URL: &str = "https://official-joke-api.appspot.com/random_joke";

/// Errors that can occur when fetching a joke
#[derive(Debug, Error)]
pub enum JokeError {
    /// HTTP request failed or returned a non-success status
    #[error("Failed to load joke")]
    RequestFailed(#[from] reqwest::Error),

    /// Response decoded but was missing the setup or punchline
    #[error("Failed to load joke")]
    MissingField,
}

/// Typed response from the joke API
///
/// `setup` and `punchline` are the consumed fields; both are required. They
/// are optional here so a shape mismatch becomes `MissingField` instead of a
/// decode panic on a partially valid payload.
#[derive(Debug, Deserialize)]
struct JokeResponse {
    setup: Option<String>,
    punchline: Option<String>,
}

/// Client for fetching random jokes
#[derive(Debug, Clone)]
pub struct JokeClient {
    /// HTTP client for making requests
    http_client: Client,
    /// Base URL for the API (allows override for testing)
    base_url: String,
}

impl JokeClient {
    /// Creates a new JokeClient with default configuration
    pub fn new() -> Self {
        Self {
            http_client: Client::new(),
            base_url: JOKE_API_URL.to_string(),
        }
    }

    /// Creates a new JokeClient with a custom base URL (for testing)
    #[cfg(test)]
    pub fn with_base_url(base_url: String) -> Self {
        Self {
            http_client: Client::new(),
            base_url,
        }
    }

    /// Fetches a random joke as a single display string
    ///
    /// # Returns
    /// * `Ok(String)` - `"<setup> - <punchline>"`
    /// * `Err(JokeError)` - If the request fails, the response status is
    ///   non-success, or either field is absent
    pub async fn fetch_joke(&self) -> Result<String, JokeError> {
        let response = self
            .http_client
            .get(&self.base_url)
            .send()
            .await?
            .error_for_status()?;

        let payload: JokeResponse = response.json().await?;

        match (payload.setup, payload.punchline) {
            (Some(setup), Some(punchline)) => Ok(format!("{} - {}", setup, punchline)),
            _ => Err(JokeError::MissingField),
        }
    }
}

impl Default for JokeClient {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Server;

    #[tokio::test]
    async fn test_fetch_joke_joins_setup_and_punchline() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{"setup": "Why did the chicken cross the road?",
                    "punchline": "To get to the other side.",
                    "type": "general", "id": 1}"#,
            )
            .create_async()
            .await;

        let client = JokeClient::with_base_url(server.url());
        let joke = client.fetch_joke().await.unwrap();

        assert_eq!(
            joke,
            "Why did the chicken cross the road? - To get to the other side."
        );
    }

    #[tokio::test]
    async fn test_fetch_joke_missing_punchline_fails() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"setup": "An incomplete joke"}"#)
            .create_async()
            .await;

        let client = JokeClient::with_base_url(server.url());
        let err = client.fetch_joke().await.unwrap_err();

        assert!(matches!(err, JokeError::MissingField));
        assert_eq!(err.to_string(), "Failed to load joke");
    }

    #[tokio::test]
    async fn test_fetch_joke_server_error_message() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/")
            .with_status(503)
            .create_async()
            .await;

        let client = JokeClient::with_base_url(server.url());
        let err = client.fetch_joke().await.unwrap_err();

        assert_eq!(err.to_string(), "Failed to load joke");
    }
}
