use axum::{Extension, Router, routing::get};
use std::{net::SocketAddr, str::FromStr, sync::Arc};
use tokio::sync::Mutex;

use crate::{api, info, session::Session};

/// Routes of the JSON API, sharing one session behind a lock.
pub fn router(state: Arc<Mutex<Session>>) -> Router {
    Router::new()
        .route("/health", get(api::health))
        .route("/artists/search", get(api::search_artists))
        .route("/artists/compare", get(api::compare_artists))
        .route("/artists/{id}/country", get(api::country_popularity))
        .route("/genres/{genre}/artists", get(api::genre_artists))
        .route("/markets/{market}/artists", get(api::market_artists))
        .route("/videos/top", get(api::top_videos))
        .route("/videos/chart", get(api::video_chart))
        .layer(Extension(state))
}

pub async fn start_api_server(state: Arc<Mutex<Session>>) -> crate::Res<()> {
    let addr = {
        let session = state.lock().await;
        SocketAddr::from_str(&session.settings.server_addr)?
    };

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Listening on http://{}", listener.local_addr()?);
    axum::serve(listener, router(state)).await?;
    Ok(())
}
