//! # Spotify Integration Module
//!
//! Client for the parts of the Spotify Web API that poprank reads. All calls are
//! authenticated with a client-credentials bearer token supplied by
//! [`TokenProvider`].
//!
//! ## Endpoints
//!
//! - `POST /api/token` - client-credentials exchange ([`auth`])
//! - `GET /search` - artist and playlist search ([`artists`], [`playlists`])
//! - `GET /artists/{id}` - artist details, used as enrichment fetch
//! - `GET /artists/{id}/top-tracks` - region-scoped top tracks
//! - `GET /playlists/{id}/tracks` - playlist membership
//!
//! ## Error Handling
//!
//! Every call returns [`ApiError`]. A non-2xx response becomes
//! [`ApiError::Request`] with the status code and the message of the error
//! body. A `401` additionally invalidates the cached token so the next call
//! starts with a fresh exchange; the failed call itself is not retried.

pub mod artists;
pub mod auth;
pub mod playlists;
pub mod ranking;

use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::{config::Settings, debug, error::ApiError, management::TokenProvider, utils};

/// Spotify API access for one caller: HTTP client, base URL and token cache.
pub struct SpotifySession {
    client: Client,
    api_url: String,
    pub tokens: TokenProvider,
}

impl SpotifySession {
    pub fn new(client: Client, settings: &Settings) -> Self {
        let tokens = TokenProvider::from_settings(client.clone(), settings);
        Self {
            client,
            api_url: settings.spotify_api_url.trim_end_matches('/').to_string(),
            tokens,
        }
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// `GET {api_url}{path}` with the given query parameters.
    pub async fn get_json<T: DeserializeOwned>(
        &mut self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ApiError> {
        let url = format!("{}{}", self.api_url, path);
        self.get_json_url(&url, query).await
    }

    /// `GET` of an absolute URL, e.g. the `next` link of a paging object.
    pub async fn get_json_url<T: DeserializeOwned>(
        &mut self,
        url: &str,
        query: &[(&str, String)],
    ) -> Result<T, ApiError> {
        let token = self.tokens.get_token().await?;
        debug!("GET {}", url);

        let res = self
            .client
            .get(url)
            .query(query)
            .bearer_auth(&token)
            .send()
            .await?;

        let status = res.status();
        if !status.is_success() {
            let body = res.text().await.unwrap_or_default();
            let err = ApiError::request(
                Some(status.as_u16()),
                utils::error_message_from_body(&body),
            );
            if err.is_unauthorized() {
                self.tokens.invalidate();
            }
            return Err(err);
        }

        Ok(res.json::<T>().await?)
    }
}
