use crate::{
    error::ApiError,
    spotify::SpotifySession,
    types::{Paging, PlaylistItem, PlaylistRef, SearchResponse},
};

/// Playlist tracks requested per page (API maximum).
pub const TRACKS_PAGE_SIZE: u32 = 100;

/// Searches playlists matching `query`, optionally restricted to a market.
///
/// `null` entries in the search result are dropped.
pub async fn search_playlists(
    session: &mut SpotifySession,
    query: &str,
    market: Option<&str>,
    limit: u32,
) -> Result<Vec<PlaylistRef>, ApiError> {
    let query = query.trim();
    if query.is_empty() {
        return Err(ApiError::Precondition(
            "playlist search query must not be empty".to_string(),
        ));
    }

    let mut params = vec![
        ("q", query.to_string()),
        ("type", "playlist".to_string()),
        ("limit", limit.clamp(1, 50).to_string()),
    ];
    if let Some(market) = market {
        params.push(("market", market.to_string()));
    }

    let res: SearchResponse = session.get_json("/search", &params).await?;
    Ok(res
        .playlists
        .map(|p| p.items.into_iter().flatten().collect())
        .unwrap_or_default())
}

/// Fetches the items of a playlist, following `next` links for up to
/// `max_pages` pages.
///
/// An error on any page fails the whole playlist.
pub async fn get_playlist_tracks(
    session: &mut SpotifySession,
    playlist_id: &str,
    max_pages: u32,
) -> Result<Vec<PlaylistItem>, ApiError> {
    let mut page: Paging<PlaylistItem> = session
        .get_json(
            &format!("/playlists/{}/tracks", playlist_id),
            &[("limit", TRACKS_PAGE_SIZE.to_string())],
        )
        .await?;

    let mut items = std::mem::take(&mut page.items);
    let mut fetched_pages = 1;

    while fetched_pages < max_pages {
        let Some(next) = page.next.take() else {
            break;
        };
        page = session.get_json_url(&next, &[]).await?;
        items.append(&mut page.items);
        fetched_pages += 1;
    }

    Ok(items)
}
