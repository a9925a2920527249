use reqwest::Client;

use crate::{
    config::Settings,
    error::ApiError,
    management::SelectionManager,
    popularity::{self, Comparison, PopularitySummary},
    spotify::{
        SpotifySession, artists,
        ranking::{self, ArtistRankingQuery},
    },
    types::{Artist, Entity},
    youtube::{
        YouTubeClient,
        ranking::{self as video_ranking, VideoQuery},
    },
};

/// Everything one caller needs: configuration, API clients, the token cache
/// and the current comparison selection.
///
/// A session is owned by a single caller. Sharing one between concurrent
/// callers requires wrapping it in a lock, as the JSON server does.
pub struct Session {
    pub settings: Settings,
    pub spotify: SpotifySession,
    pub youtube: YouTubeClient,
    pub selection: SelectionManager,
}

pub fn build_http_client(settings: &Settings) -> Result<Client, ApiError> {
    let mut builder = Client::builder().user_agent(concat!(
        env!("CARGO_PKG_NAME"),
        "/",
        env!("CARGO_PKG_VERSION")
    ));
    if let Some(timeout) = settings.http_timeout {
        builder = builder.timeout(timeout);
    }
    builder
        .build()
        .map_err(|e| ApiError::Config(format!("cannot build HTTP client: {}", e)))
}

impl Session {
    pub fn new(settings: Settings) -> Result<Self, ApiError> {
        let client = build_http_client(&settings)?;
        Ok(Self {
            spotify: SpotifySession::new(client.clone(), &settings),
            youtube: YouTubeClient::new(client, &settings),
            selection: SelectionManager::new(),
            settings,
        })
    }

    pub fn default_region(&self) -> &str {
        &self.settings.default_region
    }

    pub async fn search_artists(
        &mut self,
        query: &str,
        limit: u32,
    ) -> Result<Vec<Artist>, ApiError> {
        artists::search_artists(&mut self.spotify, query, limit).await
    }

    pub async fn find_artist(&mut self, name: &str) -> Result<Artist, ApiError> {
        artists::find_artist(&mut self.spotify, name).await
    }

    pub async fn get_artist(&mut self, artist_id: &str) -> Result<Artist, ApiError> {
        artists::get_artist(&mut self.spotify, artist_id).await
    }

    /// Adds an artist to the comparison selection; see [`SelectionManager::add`].
    pub fn select_artist(&mut self, artist: Artist) -> Result<Option<Comparison>, ApiError> {
        self.selection.add(artist)
    }

    pub fn compare_selected(&self) -> Result<Comparison, ApiError> {
        popularity::compare_two(self.selection.get_selected())
    }

    pub fn reset_selection(&mut self) {
        self.selection.clear();
    }

    /// Region popularity of `artist`; `None` uses the configured default region.
    pub async fn country_popularity(
        &mut self,
        artist: &Artist,
        region: Option<&str>,
    ) -> Result<PopularitySummary, ApiError> {
        let region = region
            .map(str::to_string)
            .unwrap_or_else(|| self.settings.default_region.clone());
        popularity::country_popularity(&mut self.spotify, artist, &region).await
    }

    pub async fn top_artists(
        &mut self,
        query: &ArtistRankingQuery,
    ) -> Result<Vec<Entity>, ApiError> {
        ranking::top_artists(&mut self.spotify, query).await
    }

    pub async fn top_videos(&self, query: &VideoQuery) -> Result<Vec<Entity>, ApiError> {
        video_ranking::top_videos(&self.youtube, query).await
    }

    pub async fn video_chart(
        &self,
        region: &str,
        category_id: &str,
        top_n: usize,
    ) -> Result<Vec<Entity>, ApiError> {
        video_ranking::most_popular_chart(&self.youtube, region, category_id, top_n).await
    }
}
