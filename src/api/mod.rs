//! # API Module
//!
//! JSON endpoints served by `poprank serve`. Each handler locks the shared
//! [`Session`](crate::session::Session), runs one library operation and returns
//! its typed result as JSON.
//!
//! ## Endpoints
//!
//! - `GET /health` - status, version and which providers are configured
//! - `GET /artists/search?q=..&limit=..` - artist search
//! - `GET /artists/compare?first=..&second=..` - two-artist comparison
//! - `GET /artists/{id}/country?region=..` - region popularity summary
//! - `GET /genres/{genre}/artists?market=..&top=..` - top artists of a genre
//! - `GET /markets/{market}/artists?search=..&top=..` - top artists of a market
//! - `GET /videos/top?genre=..&region=..&top=..` - top videos of a genre
//! - `GET /videos/chart?region=..&category=..&top=..` - most popular chart
//!
//! Failures are returned as `{"error": "..."}` with a status derived from the
//! [`ApiError`] kind.

mod artists;
mod health;
mod rankings;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde_json::json;

use crate::error::ApiError;

pub use artists::compare_artists;
pub use artists::country_popularity;
pub use artists::search_artists;
pub use health::health;
pub use rankings::genre_artists;
pub use rankings::market_artists;
pub use rankings::top_videos;
pub use rankings::video_chart;

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Auth(_) | ApiError::Request { .. } => StatusCode::BAD_GATEWAY,
            ApiError::Precondition(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status_code(),
            Json(json!({ "error": self.to_string() })),
        )
            .into_response()
    }
}
