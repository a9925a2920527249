use std::sync::Arc;

use axum::{
    Extension,
    extract::{Path, Query},
    response::Json,
};
use serde::Deserialize;
use tokio::sync::Mutex;

use crate::{
    error::ApiError,
    popularity::{self, Comparison, PopularitySummary},
    session::Session,
    spotify::artists::SEARCH_LIMIT,
    types::Artist,
};

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    q: String,
    limit: Option<u32>,
}

pub async fn search_artists(
    Query(params): Query<SearchParams>,
    Extension(state): Extension<Arc<Mutex<Session>>>,
) -> Result<Json<Vec<Artist>>, ApiError> {
    let mut session = state.lock().await;
    let artists = session
        .search_artists(&params.q, params.limit.unwrap_or(SEARCH_LIMIT))
        .await?;
    Ok(Json(artists))
}

#[derive(Debug, Deserialize)]
pub struct CompareParams {
    first: String,
    second: String,
}

/// Compares two artists looked up by name.
///
/// Uses its own two-element selection so concurrent clients never see each
/// other's picks.
pub async fn compare_artists(
    Query(params): Query<CompareParams>,
    Extension(state): Extension<Arc<Mutex<Session>>>,
) -> Result<Json<Comparison>, ApiError> {
    let mut session = state.lock().await;
    let first = session.find_artist(&params.first).await?;
    let second = session.find_artist(&params.second).await?;
    Ok(Json(popularity::compare_two(&[first, second])?))
}

#[derive(Debug, Deserialize)]
pub struct CountryParams {
    region: Option<String>,
}

pub async fn country_popularity(
    Path(artist_id): Path<String>,
    Query(params): Query<CountryParams>,
    Extension(state): Extension<Arc<Mutex<Session>>>,
) -> Result<Json<PopularitySummary>, ApiError> {
    let mut session = state.lock().await;
    let artist = session.get_artist(&artist_id).await?;
    let summary = session
        .country_popularity(&artist, params.region.as_deref())
        .await?;
    Ok(Json(summary))
}
