//! Configuration management for poprank.
//!
//! This module handles loading and accessing configuration values from environment
//! variables and `.env` files. Values are read in this order:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. `.env` file in the current working directory
//! 4. Application defaults (where applicable)
//!
//! Operations never read the environment themselves; they receive a [`Settings`]
//! snapshot through the session that owns them.

use std::{env, path::PathBuf, time::Duration};

use crate::{error::ApiError, types::Credentials};

pub const DEFAULT_SPOTIFY_API_URL: &str = "https://api.spotify.com/v1";
pub const DEFAULT_SPOTIFY_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";
pub const DEFAULT_YOUTUBE_API_URL: &str = "https://www.googleapis.com/youtube/v3";
pub const DEFAULT_REGION: &str = "HN";
pub const DEFAULT_SERVER_ADDRESS: &str = "127.0.0.1:8080";

/// Loads environment variables from `.env` files.
///
/// Looks for `poprank/.env` in the platform-specific local data directory
/// (creating the directory if needed) and then for `.env` in the working
/// directory. Variables already present in the environment are never
/// overwritten, and missing files are not an error.
///
/// # Directory Structure
///
/// - Linux: `~/.local/share/poprank/.env`
/// - macOS: `~/Library/Application Support/poprank/.env`
/// - Windows: `%LOCALAPPDATA%/poprank/.env`
///
/// # Errors
///
/// Returns an error if the data directory cannot be created or an existing
/// `.env` file cannot be parsed.
pub async fn load_env() -> Result<(), String> {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("poprank/.env");
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    if path.is_file() {
        dotenv::from_path(&path).map_err(|e| e.to_string())?;
    }

    match dotenv::dotenv() {
        Ok(_) => Ok(()),
        Err(e) if e.not_found() => Ok(()),
        Err(e) => Err(e.to_string()),
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Returns the Spotify client ID, or a configuration error when unset.
pub fn spotify_client_id() -> Result<String, ApiError> {
    non_empty_var("SPOTIFY_CLIENT_ID")
        .ok_or_else(|| ApiError::Config("SPOTIFY_CLIENT_ID must be set".to_string()))
}

/// Returns the Spotify client secret, or a configuration error when unset.
///
/// The secret is only ever used to build the Basic authorization header of
/// the token request and must never be logged.
pub fn spotify_client_secret() -> Result<String, ApiError> {
    non_empty_var("SPOTIFY_CLIENT_SECRET")
        .ok_or_else(|| ApiError::Config("SPOTIFY_CLIENT_SECRET must be set".to_string()))
}

/// Returns the Spotify Web API base URL (`SPOTIFY_API_URL`).
pub fn spotify_apiurl() -> String {
    non_empty_var("SPOTIFY_API_URL")
        .unwrap_or_else(|| DEFAULT_SPOTIFY_API_URL.to_string())
}

/// Returns the Spotify token endpoint (`SPOTIFY_API_TOKEN_URL`).
pub fn spotify_apitoken_url() -> String {
    non_empty_var("SPOTIFY_API_TOKEN_URL")
        .unwrap_or_else(|| DEFAULT_SPOTIFY_TOKEN_URL.to_string())
}

/// Returns the configured token lifetime override in seconds (`TOKEN_TTL_SECONDS`).
///
/// A value that is not a whole number of seconds is a configuration error.
pub fn token_ttl() -> Result<Option<u64>, ApiError> {
    parse_token_ttl(non_empty_var("TOKEN_TTL_SECONDS").as_deref())
}

pub fn parse_token_ttl(raw: Option<&str>) -> Result<Option<u64>, ApiError> {
    match raw.map(str::trim).filter(|v| !v.is_empty()) {
        None => Ok(None),
        Some(v) => v.parse().map(Some).map_err(|_| {
            ApiError::Config(format!(
                "TOKEN_TTL_SECONDS must be a number of seconds, got \"{}\"",
                v
            ))
        }),
    }
}

/// Returns the YouTube Data API key (`YOUTUBE_API_KEY`), if any.
pub fn youtube_api_key() -> Option<String> {
    non_empty_var("YOUTUBE_API_KEY")
}

/// Returns the YouTube Data API base URL (`YOUTUBE_API_URL`).
pub fn youtube_apiurl() -> String {
    non_empty_var("YOUTUBE_API_URL")
        .unwrap_or_else(|| DEFAULT_YOUTUBE_API_URL.to_string())
}

/// Returns the region code used when a command does not specify one.
pub fn default_region() -> String {
    non_empty_var("DEFAULT_REGION")
        .unwrap_or_else(|| DEFAULT_REGION.to_string())
}

/// Returns the address the JSON API binds to (`SERVER_ADDRESS`).
pub fn server_addr() -> String {
    non_empty_var("SERVER_ADDRESS")
        .unwrap_or_else(|| DEFAULT_SERVER_ADDRESS.to_string())
}

/// Returns the HTTP client timeout (`HTTP_TIMEOUT_SECONDS`). Unset means no
/// timeout beyond the client defaults.
pub fn http_timeout() -> Option<Duration> {
    non_empty_var("HTTP_TIMEOUT_SECONDS")
        .and_then(|v| v.parse().ok())
        .map(Duration::from_secs)
}

pub fn debug_enabled() -> bool {
    non_empty_var("POPRANK_DEBUG").is_some()
}

/// Snapshot of every configuration value an operation may need.
#[derive(Debug, Clone)]
pub struct Settings {
    pub spotify_client_id: Option<String>,
    pub spotify_client_secret: Option<String>,
    pub spotify_api_url: String,
    pub spotify_token_url: String,
    pub token_ttl: Option<u64>,
    pub youtube_api_key: Option<String>,
    pub youtube_api_url: String,
    pub default_region: String,
    pub server_addr: String,
    pub http_timeout: Option<Duration>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            spotify_client_id: None,
            spotify_client_secret: None,
            spotify_api_url: DEFAULT_SPOTIFY_API_URL.to_string(),
            spotify_token_url: DEFAULT_SPOTIFY_TOKEN_URL.to_string(),
            token_ttl: None,
            youtube_api_key: None,
            youtube_api_url: DEFAULT_YOUTUBE_API_URL.to_string(),
            default_region: DEFAULT_REGION.to_string(),
            server_addr: DEFAULT_SERVER_ADDRESS.to_string(),
            http_timeout: None,
        }
    }
}

impl Settings {
    /// Reads all values from the process environment.
    ///
    /// Missing credentials are kept as `None` here; they are reported as
    /// [`ApiError::Config`] by the first operation that needs them. A malformed
    /// `TOKEN_TTL_SECONDS` is reported right away.
    pub fn from_env() -> Result<Self, ApiError> {
        Ok(Self {
            spotify_client_id: spotify_client_id().ok(),
            spotify_client_secret: spotify_client_secret().ok(),
            spotify_api_url: spotify_apiurl(),
            spotify_token_url: spotify_apitoken_url(),
            token_ttl: token_ttl()?,
            youtube_api_key: youtube_api_key(),
            youtube_api_url: youtube_apiurl(),
            default_region: default_region(),
            server_addr: server_addr(),
            http_timeout: http_timeout(),
        })
    }

    /// Returns the Spotify credentials, or a configuration error naming the
    /// first missing value.
    pub fn spotify_credentials(&self) -> Result<Credentials, ApiError> {
        let client_id = self
            .spotify_client_id
            .clone()
            .filter(|v| !v.is_empty())
            .ok_or_else(|| ApiError::Config("SPOTIFY_CLIENT_ID must be set".to_string()))?;
        let client_secret = self
            .spotify_client_secret
            .clone()
            .filter(|v| !v.is_empty())
            .ok_or_else(|| ApiError::Config("SPOTIFY_CLIENT_SECRET must be set".to_string()))?;

        Ok(Credentials {
            client_id,
            client_secret,
        })
    }
}
