use std::sync::Arc;

use axum::{Extension, response::Json};
use serde_json::{Value, json};
use tokio::sync::Mutex;

use crate::session::Session;

pub async fn health(Extension(state): Extension<Arc<Mutex<Session>>>) -> Json<Value> {
    let session = state.lock().await;
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "spotify_configured": session.settings.spotify_credentials().is_ok(),
        "youtube_configured": session.youtube.has_api_key(),
    }))
}
