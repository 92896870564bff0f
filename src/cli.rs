//! Command-line interface parsing for Chuckle
//!
//! This module handles parsing of CLI arguments using clap, including the
//! API key for the meme source (with an environment variable fallback) and
//! cache tuning flags.

use clap::Parser;

use crate::cache::DEFAULT_MAX_AGE_SECS;

/// Environment variable consulted when `--api-key` is not given
pub const API_KEY_ENV: &str = "HUMOR_API_KEY";

/// Chuckle - random memes and jokes in your terminal
#[derive(Parser, Debug)]
#[command(name = "chuckle")]
#[command(about = "Random memes and jokes in your terminal")]
#[command(version)]
pub struct Cli {
    /// Humor API key for the meme source
    ///
    /// Falls back to the HUMOR_API_KEY environment variable. Without a key
    /// the meme card shows a configuration error; jokes still work.
    #[arg(long, value_name = "KEY")]
    pub api_key: Option<String>,

    /// Bypass the cache on the initial load and fetch fresh data
    #[arg(long)]
    pub refresh: bool,

    /// Max age in seconds before cached responses are discarded
    #[arg(long, value_name = "SECS", default_value_t = DEFAULT_MAX_AGE_SECS)]
    pub max_age_secs: u64,
}

/// Configuration derived from CLI arguments for application startup
#[derive(Debug, Clone)]
pub struct StartupConfig {
    /// API key for the meme source, if configured
    pub api_key: Option<String>,
    /// Whether the initial load should bypass the cache
    pub force_refresh: bool,
    /// Cache max age in seconds
    pub max_age_secs: u64,
}

impl Default for StartupConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            force_refresh: false,
            max_age_secs: DEFAULT_MAX_AGE_SECS,
        }
    }
}

impl StartupConfig {
    /// Creates a StartupConfig from parsed CLI arguments.
    ///
    /// The API key comes from `--api-key` when given, otherwise from the
    /// `HUMOR_API_KEY` environment variable. The key is never embedded in
    /// the binary.
    pub fn from_cli(cli: &Cli) -> Self {
        let api_key = cli
            .api_key
            .clone()
            .or_else(|| std::env::var(API_KEY_ENV).ok())
            .filter(|key| !key.is_empty());

        Self {
            api_key,
            force_refresh: cli.refresh,
            max_age_secs: cli.max_age_secs,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_no_args() {
        let cli = Cli::parse_from(["chuckle"]);
        assert!(cli.api_key.is_none());
        assert!(!cli.refresh);
        assert_eq!(cli.max_age_secs, DEFAULT_MAX_AGE_SECS);
    }

    #[test]
    fn test_cli_parse_api_key() {
        let cli = Cli::parse_from(["chuckle", "--api-key", "abc123"]);
        assert_eq!(cli.api_key.as_deref(), Some("abc123"));
    }

    #[test]
    fn test_cli_parse_refresh_flag() {
        let cli = Cli::parse_from(["chuckle", "--refresh"]);
        assert!(cli.refresh);
    }

    #[test]
    fn test_cli_parse_max_age() {
        let cli = Cli::parse_from(["chuckle", "--max-age-secs", "60"]);
        assert_eq!(cli.max_age_secs, 60);
    }

    #[test]
    fn test_startup_config_default() {
        let config = StartupConfig::default();
        assert!(config.api_key.is_none());
        assert!(!config.force_refresh);
        assert_eq!(config.max_age_secs, DEFAULT_MAX_AGE_SECS);
    }

    #[test]
    fn test_startup_config_prefers_flag_over_env() {
        let cli = Cli::parse_from(["chuckle", "--api-key", "from-flag"]);
        let config = StartupConfig::from_cli(&cli);
        assert_eq!(config.api_key.as_deref(), Some("from-flag"));
    }

    #[test]
    fn test_startup_config_carries_refresh_and_max_age() {
        let cli = Cli::parse_from(["chuckle", "--refresh", "--max-age-secs", "30"]);
        let config = StartupConfig::from_cli(&cli);
        assert!(config.force_refresh);
        assert_eq!(config.max_age_secs, 30);
    }
}
