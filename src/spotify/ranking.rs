use crate::{
    aggregate::{self, EntitySource},
    error::ApiError,
    info,
    spotify::{SpotifySession, artists, playlists},
    types::{Artist, Entity, EntityRef, PlaylistItem, PlaylistRef},
    utils,
};

pub const DEFAULT_PLAYLIST_LIMIT: u32 = 5;
pub const DEFAULT_TOP_ARTISTS: usize = 10;

/// Parameters of a "top artists" ranking built from playlist appearances.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtistRankingQuery {
    /// Playlist search term.
    pub search: String,
    pub market: Option<String>,
    /// Only keep artists tagged with this genre (case-insensitive).
    pub genre: Option<String>,
    pub playlist_limit: u32,
    pub pages_per_playlist: u32,
    pub top_n: usize,
}

impl ArtistRankingQuery {
    /// Top artists of `genre`, searched in playlists named after the genre.
    pub fn by_genre(genre: &str, market: Option<&str>) -> Self {
        Self {
            search: genre.to_string(),
            market: market.map(str::to_string),
            genre: Some(genre.to_string()),
            playlist_limit: DEFAULT_PLAYLIST_LIMIT,
            pages_per_playlist: 1,
            top_n: DEFAULT_TOP_ARTISTS,
        }
    }

    /// Top artists of a market, counted over the market's chart playlists.
    pub fn by_market(market: &str) -> Self {
        Self {
            search: format!("top 50 {}", market),
            market: Some(market.to_string()),
            genre: None,
            playlist_limit: DEFAULT_PLAYLIST_LIMIT,
            pages_per_playlist: 1,
            top_n: DEFAULT_TOP_ARTISTS,
        }
    }
}

/// Counts the first artist of every playlist track, enriched with `GET /artists/{id}`.
pub struct PlaylistArtistSource<'a> {
    session: &'a mut SpotifySession,
    pages_per_playlist: u32,
}

impl<'a> PlaylistArtistSource<'a> {
    pub fn new(session: &'a mut SpotifySession, pages_per_playlist: u32) -> Self {
        Self {
            session,
            pages_per_playlist: pages_per_playlist.max(1),
        }
    }
}

impl EntitySource for PlaylistArtistSource<'_> {
    type Collection = PlaylistRef;
    type Item = PlaylistItem;
    type Details = Artist;

    fn describe(&self, collection: &PlaylistRef) -> String {
        format!("playlist \"{}\" ({})", collection.name, collection.id)
    }

    async fn fetch_items(
        &mut self,
        collection: &PlaylistRef,
    ) -> Result<Vec<PlaylistItem>, ApiError> {
        playlists::get_playlist_tracks(self.session, &collection.id, self.pages_per_playlist).await
    }

    fn classify(&self, item: &PlaylistItem) -> Option<EntityRef> {
        let artist = item.track.as_ref()?.artists.first()?;
        Some(EntityRef {
            id: artist.id.clone()?,
            name: artist.name.clone(),
        })
    }

    async fn fetch_details(&mut self, entity_id: &str) -> Result<Artist, ApiError> {
        artists::get_artist(self.session, entity_id).await
    }

    fn apply_details(&self, entity: &mut Entity, details: &Artist) {
        entity.tags = details.genres.iter().cloned().collect();
        entity.score = details.popularity as u64;
    }
}

/// Ranks artists by how often they appear in the playlists found for the query.
///
/// The playlist search itself must succeed; afterwards single playlists or
/// artist lookups that fail are skipped.
pub async fn top_artists(
    session: &mut SpotifySession,
    query: &ArtistRankingQuery,
) -> Result<Vec<Entity>, ApiError> {
    let found = playlists::search_playlists(
        session,
        &query.search,
        query.market.as_deref(),
        query.playlist_limit,
    )
    .await?;
    info!("Found {} playlists for \"{}\"", found.len(), query.search);

    let genre = query.genre.clone();
    let mut source = PlaylistArtistSource::new(session, query.pages_per_playlist);

    aggregate::aggregate(
        &mut source,
        &found,
        |artist: &Artist| match &genre {
            Some(genre) => utils::matches_tag(&artist.genres, genre),
            None => true,
        },
        |entity: &Entity| entity.count as u64,
        query.top_n,
    )
    .await
}
