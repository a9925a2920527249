use crate::{
    error::ApiError,
    spotify::SpotifySession,
    types::{Artist, SearchResponse, TopTracksResponse, Track},
};

/// Number of search results shown when looking up artists.
pub const SEARCH_LIMIT: u32 = 3;

/// Upper bound of region top tracks taken into account.
pub const TOP_TRACKS_LIMIT: usize = 10;

/// Searches the catalog for artists matching `query`.
///
/// # Arguments
///
/// * `session` - Spotify session used for authentication
/// * `query` - Free text search term
/// * `limit` - Maximum number of artists to return (1-50)
///
/// # Errors
///
/// Returns [`ApiError::Precondition`] for an empty query, otherwise whatever
/// the token exchange or the search request reports.
pub async fn search_artists(
    session: &mut SpotifySession,
    query: &str,
    limit: u32,
) -> Result<Vec<Artist>, ApiError> {
    let query = query.trim();
    if query.is_empty() {
        return Err(ApiError::Precondition(
            "search query must not be empty".to_string(),
        ));
    }

    let res: SearchResponse = session
        .get_json(
            "/search",
            &[
                ("q", query.to_string()),
                ("type", "artist".to_string()),
                ("limit", limit.clamp(1, 50).to_string()),
            ],
        )
        .await?;

    Ok(res.artists.map(|p| p.items).unwrap_or_default())
}

/// Returns the best search match for `name`.
pub async fn find_artist(session: &mut SpotifySession, name: &str) -> Result<Artist, ApiError> {
    search_artists(session, name, 1)
        .await?
        .into_iter()
        .next()
        .ok_or_else(|| ApiError::Precondition(format!("no artist found for \"{}\"", name)))
}

/// Fetches the full artist object, including genres and popularity.
pub async fn get_artist(session: &mut SpotifySession, artist_id: &str) -> Result<Artist, ApiError> {
    session
        .get_json(&format!("/artists/{}", artist_id), &[])
        .await
}

/// Fetches the artist's top tracks in `market`, at most [`TOP_TRACKS_LIMIT`].
pub async fn get_top_tracks(
    session: &mut SpotifySession,
    artist_id: &str,
    market: &str,
) -> Result<Vec<Track>, ApiError> {
    let res: TopTracksResponse = session
        .get_json(
            &format!("/artists/{}/top-tracks", artist_id),
            &[("market", market.to_string())],
        )
        .await?;

    let mut tracks = res.tracks;
    tracks.truncate(TOP_TRACKS_LIMIT);
    Ok(tracks)
}
