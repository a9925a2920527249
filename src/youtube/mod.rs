//! # YouTube Integration Module
//!
//! Read-only client for the YouTube Data API v3. Requests are authorized with
//! an API key passed as the `key` query parameter; a missing key is reported as
//! [`ApiError::Config`] before anything is sent.
//!
//! - [`videos`] - chart listing, video search and video details
//! - [`ranking`] - "top videos by genre" built on the aggregation pipeline

pub mod ranking;
pub mod videos;

use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::{config::Settings, debug, error::ApiError, utils};

/// YouTube category id of "Music".
pub const MUSIC_CATEGORY_ID: &str = "10";

pub struct YouTubeClient {
    client: Client,
    api_url: String,
    api_key: Option<String>,
}

impl YouTubeClient {
    pub fn new(client: Client, settings: &Settings) -> Self {
        Self {
            client,
            api_url: settings.youtube_api_url.trim_end_matches('/').to_string(),
            api_key: settings.youtube_api_key.clone().filter(|k| !k.is_empty()),
        }
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    pub async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ApiError> {
        let key = self
            .api_key
            .as_deref()
            .ok_or_else(|| ApiError::Config("YOUTUBE_API_KEY must be set".to_string()))?;

        let url = format!("{}{}", self.api_url, path);
        debug!("GET {}", url);

        let res = self
            .client
            .get(&url)
            .query(query)
            .query(&[("key", key)])
            .send()
            .await?;

        let status = res.status();
        if !status.is_success() {
            let body = res.text().await.unwrap_or_default();
            return Err(ApiError::request(
                Some(status.as_u16()),
                utils::error_message_from_body(&body),
            ));
        }

        Ok(res.json::<T>().await?)
    }
}
