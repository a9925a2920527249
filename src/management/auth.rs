use reqwest::Client;

use crate::{
    config::Settings,
    error::ApiError,
    spotify,
    types::{Credentials, Token},
    utils,
};

/// Client-credentials token cache.
///
/// The first [`get_token`](Self::get_token) performs the exchange, later calls
/// reuse the cached token until it is older than its lifetime or the caller
/// invalidates it. Nothing is persisted.
pub struct TokenProvider {
    client: Client,
    token_url: String,
    credentials: Result<Credentials, ApiError>,
    ttl: Option<u64>,
    token: Option<Token>,
}

impl TokenProvider {
    pub fn new(
        client: Client,
        token_url: impl Into<String>,
        credentials: Result<Credentials, ApiError>,
        ttl: Option<u64>,
    ) -> Self {
        TokenProvider {
            client,
            token_url: token_url.into(),
            credentials,
            ttl,
            token: None,
        }
    }

    pub fn from_settings(client: Client, settings: &Settings) -> Self {
        Self::new(
            client,
            settings.spotify_token_url.clone(),
            settings.spotify_credentials(),
            settings.token_ttl,
        )
    }

    /// Returns a bearer token, exchanging the credentials if none is cached.
    ///
    /// Missing credentials are reported as [`ApiError::Config`] without any
    /// network access. A failed exchange is reported as [`ApiError::Auth`] and
    /// is not retried.
    pub async fn get_token(&mut self) -> Result<String, ApiError> {
        if let Some(token) = &self.token {
            if !token.is_expired_at(utils::now_timestamp()) {
                return Ok(token.access_token.clone());
            }
        }

        let credentials = self.credentials.clone()?;
        let token = spotify::auth::request_client_credentials_token(
            &self.client,
            &self.token_url,
            &credentials,
            self.ttl,
        )
        .await?;

        let access_token = token.access_token.clone();
        self.token = Some(token);
        Ok(access_token)
    }

    /// Drops the cached token so the next call exchanges the credentials again.
    pub fn invalidate(&mut self) {
        self.token = None;
    }

    pub fn current_token(&self) -> Option<&Token> {
        self.token.as_ref()
    }
}
