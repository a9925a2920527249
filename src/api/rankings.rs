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
    session::Session,
    spotify::ranking::ArtistRankingQuery,
    types::Entity,
    youtube::{MUSIC_CATEGORY_ID, ranking::VideoQuery},
};

#[derive(Debug, Deserialize)]
pub struct GenreParams {
    market: Option<String>,
    top: Option<usize>,
}

pub async fn genre_artists(
    Path(genre): Path<String>,
    Query(params): Query<GenreParams>,
    Extension(state): Extension<Arc<Mutex<Session>>>,
) -> Result<Json<Vec<Entity>>, ApiError> {
    let mut session = state.lock().await;
    let market = params
        .market
        .unwrap_or_else(|| session.default_region().to_string());

    let mut query = ArtistRankingQuery::by_genre(&genre, Some(&market));
    if let Some(top) = params.top {
        query.top_n = top;
    }
    Ok(Json(session.top_artists(&query).await?))
}

#[derive(Debug, Deserialize)]
pub struct MarketParams {
    search: Option<String>,
    top: Option<usize>,
}

pub async fn market_artists(
    Path(market): Path<String>,
    Query(params): Query<MarketParams>,
    Extension(state): Extension<Arc<Mutex<Session>>>,
) -> Result<Json<Vec<Entity>>, ApiError> {
    let mut session = state.lock().await;
    let mut query = ArtistRankingQuery::by_market(&market);
    if let Some(search) = params.search {
        query.search = search;
    }
    if let Some(top) = params.top {
        query.top_n = top;
    }
    Ok(Json(session.top_artists(&query).await?))
}

#[derive(Debug, Deserialize)]
pub struct VideoParams {
    genre: String,
    region: Option<String>,
    top: Option<usize>,
}

pub async fn top_videos(
    Query(params): Query<VideoParams>,
    Extension(state): Extension<Arc<Mutex<Session>>>,
) -> Result<Json<Vec<Entity>>, ApiError> {
    let session = state.lock().await;
    let region = params
        .region
        .unwrap_or_else(|| session.default_region().to_string());

    let mut query = VideoQuery::by_genre(&params.genre, &region);
    if let Some(top) = params.top {
        query.top_n = top;
    }
    Ok(Json(session.top_videos(&query).await?))
}

#[derive(Debug, Deserialize)]
pub struct ChartParams {
    region: Option<String>,
    category: Option<String>,
    top: Option<usize>,
}

pub async fn video_chart(
    Query(params): Query<ChartParams>,
    Extension(state): Extension<Arc<Mutex<Session>>>,
) -> Result<Json<Vec<Entity>>, ApiError> {
    let session = state.lock().await;
    let region = params
        .region
        .unwrap_or_else(|| session.default_region().to_string());
    let category = params
        .category
        .unwrap_or_else(|| MUSIC_CATEGORY_ID.to_string());

    Ok(Json(
        session
            .video_chart(&region, &category, params.top.unwrap_or(20))
            .await?,
    ))
}
