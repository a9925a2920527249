use std::collections::BTreeSet;

use base64::{Engine, engine::general_purpose::STANDARD};
use serde::{Deserialize, Serialize};
use tabled::Tabled;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub client_id: String,
    pub client_secret: String,
}

impl Credentials {
    /// `base64(client_id:client_secret)`, the value of a Basic authorization header.
    pub fn basic_auth(&self) -> String {
        STANDARD.encode(format!("{}:{}", self.client_id, self.client_secret))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    pub access_token: String,
    pub token_type: String,
    /// Lifetime in seconds counted from `obtained_at`.
    pub expires_in: u64,
    pub obtained_at: u64,
}

impl Token {
    pub fn is_expired_at(&self, now: u64) -> bool {
        now >= self.obtained_at.saturating_add(self.expires_in)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: String,
    #[serde(default)]
    pub expires_in: Option<u64>,
}

// Spotify

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Followers {
    #[serde(default)]
    pub total: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artist {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub genres: Vec<String>,
    #[serde(default)]
    pub popularity: u32,
    #[serde(default)]
    pub followers: Followers,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Paging<T> {
    #[serde(default)]
    pub items: Vec<T>,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub total: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub artists: Option<Paging<Artist>>,
    /// Spotify returns `null` entries for playlists it cannot expose.
    #[serde(default)]
    pub playlists: Option<Paging<Option<PlaylistRef>>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaylistRef {
    pub id: String,
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistItem {
    #[serde(default)]
    pub track: Option<PlaylistTrack>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistTrack {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub artists: Vec<ArtistRef>,
}

/// Simplified artist embedded in track objects. Local files carry no id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtistRef {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Track {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub popularity: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopTracksResponse {
    #[serde(default)]
    pub tracks: Vec<Track>,
}

// YouTube

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoSnippet {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub category_id: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoStatistics {
    /// The API reports counts as decimal strings.
    #[serde(default)]
    pub view_count: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Video {
    pub id: String,
    #[serde(default)]
    pub snippet: VideoSnippet,
    #[serde(default)]
    pub statistics: Option<VideoStatistics>,
}

impl Video {
    pub fn view_count(&self) -> Option<u64> {
        self.statistics
            .as_ref()
            .and_then(|s| s.view_count.as_deref())
            .and_then(crate::utils::parse_view_count)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoListResponse {
    #[serde(default)]
    pub items: Vec<Video>,
    #[serde(default)]
    pub next_page_token: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoSearchId {
    #[serde(default)]
    pub video_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VideoSearchResult {
    #[serde(default)]
    pub id: VideoSearchId,
    #[serde(default)]
    pub snippet: VideoSnippet,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoSearchResponse {
    #[serde(default)]
    pub items: Vec<VideoSearchResult>,
    #[serde(default)]
    pub next_page_token: Option<String>,
}

// Aggregation

/// Reference to an entity as found inside a raw item, before enrichment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityRef {
    pub id: String,
    pub name: String,
}

/// An artist or video being ranked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    pub id: String,
    pub name: String,
    pub tags: BTreeSet<String>,
    /// Popularity or view count, filled in by enrichment.
    pub score: u64,
    /// Number of source items the entity was observed in.
    pub count: u32,
}

impl Entity {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            tags: BTreeSet::new(),
            score: 0,
            count: 0,
        }
    }
}

// Tables

#[derive(Tabled)]
pub struct ArtistTableRow {
    pub name: String,
    pub genres: String,
    pub popularity: u32,
    pub followers: u64,
}

#[derive(Tabled)]
pub struct ArtistRankingRow {
    pub rank: usize,
    pub name: String,
    pub genres: String,
    pub appearances: u32,
}

#[derive(Tabled)]
pub struct VideoTableRow {
    pub rank: usize,
    pub title: String,
    pub views: u64,
    pub appearances: u32,
}

#[derive(Tabled)]
pub struct TrackTableRow {
    pub name: String,
    pub popularity: u32,
}
