//! Local fake of the Spotify and YouTube endpoints used by the integration tests.

#![allow(dead_code)]

use std::{
    collections::HashMap,
    sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    },
};

use axum::{
    Form, Json, Router,
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use poprank::config::Settings;
use serde_json::{Value, json};

pub const CLIENT_ID: &str = "test-id";
pub const CLIENT_SECRET: &str = "test-secret";
pub const ACCESS_TOKEN: &str = "token-1";
pub const YOUTUBE_KEY: &str = "yt-key";

#[derive(Default)]
pub struct Hits {
    pub token: AtomicUsize,
    pub artist: AtomicUsize,
    pub playlist: AtomicUsize,
    pub youtube: AtomicUsize,
}

impl Hits {
    pub fn count(counter: &AtomicUsize) -> usize {
        counter.load(Ordering::SeqCst)
    }
}

pub struct FakeApi {
    pub base_url: String,
    pub hits: Arc<Hits>,
}

impl FakeApi {
    pub async fn start() -> Self {
        let hits = Arc::new(Hits::default());
        let app = Router::new()
            .route("/api/token", post(token))
            .route("/v1/search", get(spotify_search))
            .route("/v1/playlists/{id}/tracks", get(playlist_tracks))
            .route("/v1/artists/{id}", get(artist))
            .route("/v1/artists/{id}/top-tracks", get(top_tracks))
            .route("/yt/search", get(youtube_search))
            .route("/yt/videos", get(youtube_videos))
            .with_state(hits.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url: format!("http://{}", addr),
            hits,
        }
    }

    pub fn settings(&self) -> Settings {
        Settings {
            spotify_client_id: Some(CLIENT_ID.to_string()),
            spotify_client_secret: Some(CLIENT_SECRET.to_string()),
            spotify_api_url: format!("{}/v1", self.base_url),
            spotify_token_url: format!("{}/api/token", self.base_url),
            youtube_api_key: Some(YOUTUBE_KEY.to_string()),
            youtube_api_url: format!("{}/yt", self.base_url),
            ..Settings::default()
        }
    }
}

fn error(status: StatusCode, message: &str) -> Response {
    (
        status,
        Json(json!({ "error": { "status": status.as_u16(), "message": message } })),
    )
        .into_response()
}

fn authorized(headers: &HeaderMap) -> bool {
    let expected = format!("Bearer {}", ACCESS_TOKEN);
    headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        == Some(expected.as_str())
}

async fn token(
    State(hits): State<Arc<Hits>>,
    headers: HeaderMap,
    Form(form): Form<HashMap<String, String>>,
) -> Response {
    hits.token.fetch_add(1, Ordering::SeqCst);

    // base64("test-id:test-secret")
    let expected = "Basic dGVzdC1pZDp0ZXN0LXNlY3JldA==";
    let auth = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok());
    let grant = form.get("grant_type").map(String::as_str);

    if auth != Some(expected) || grant != Some("client_credentials") {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "error": "invalid_client", "error_description": "Invalid client" })),
        )
            .into_response();
    }

    Json(json!({
        "access_token": ACCESS_TOKEN,
        "token_type": "Bearer",
        "expires_in": 3600
    }))
    .into_response()
}

async fn spotify_search(
    headers: HeaderMap,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    if !authorized(&headers) {
        return error(StatusCode::UNAUTHORIZED, "Invalid access token");
    }

    match params.get("type").map(String::as_str) {
        Some("playlist") => Json(json!({
            "playlists": {
                "items": [
                    { "id": "p1", "name": "Metal Essentials" },
                    null,
                    { "id": "p2", "name": "Metal Hits" },
                    { "id": "broken", "name": "Removed" }
                ],
                "next": null,
                "total": 4
            }
        }))
        .into_response(),
        Some("artist") => Json(json!({
            "artists": {
                "items": [
                    {
                        "id": "a1",
                        "name": "Alpha",
                        "genres": ["heavy metal"],
                        "popularity": 80,
                        "followers": { "total": 1200 }
                    },
                    { "id": "a2", "name": "Beta", "popularity": 80 }
                ],
                "next": null,
                "total": 2
            }
        }))
        .into_response(),
        _ => error(StatusCode::BAD_REQUEST, "unsupported type"),
    }
}

fn track(name: &str, artists: Value) -> Value {
    json!({ "track": { "id": format!("{}_id", name), "name": name, "artists": artists } })
}

async fn playlist_tracks(
    State(hits): State<Arc<Hits>>,
    headers: HeaderMap,
    Path(id): Path<String>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    hits.playlist.fetch_add(1, Ordering::SeqCst);
    if !authorized(&headers) {
        return error(StatusCode::UNAUTHORIZED, "Invalid access token");
    }

    let host = headers
        .get(header::HOST)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();

    match (id.as_str(), params.get("offset").map(String::as_str)) {
        ("p1", _) => Json(json!({
            "items": [
                track("t1", json!([{ "id": "a1", "name": "Alpha" }])),
                { "track": null },
                track(
                    "t2",
                    json!([{ "id": "a2", "name": "Beta" }, { "id": "a1", "name": "Alpha" }])
                ),
                track("local", json!([{ "id": null, "name": "Local Band" }])),
                track("t3", json!([{ "id": "a3", "name": "Gamma" }]))
            ],
            "next": null
        }))
        .into_response(),
        ("p2", Some("100")) => Json(json!({
            "items": [track("t9", json!([{ "id": "a3", "name": "Gamma" }]))],
            "next": null
        }))
        .into_response(),
        ("p2", _) => Json(json!({
            "items": [
                track("t4", json!([{ "id": "a2", "name": "Beta" }])),
                track("t5", json!([{ "id": "a2", "name": "Beta" }])),
                track("t6", json!([{ "id": "a1", "name": "Alpha" }])),
                track("t7", json!([{ "id": "missing", "name": "Ghost" }]))
            ],
            "next": format!("http://{}/v1/playlists/p2/tracks?offset=100&limit=100", host)
        }))
        .into_response(),
        _ => error(StatusCode::NOT_FOUND, "Resource not found"),
    }
}

async fn artist(
    State(hits): State<Arc<Hits>>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Response {
    hits.artist.fetch_add(1, Ordering::SeqCst);
    if !authorized(&headers) {
        return error(StatusCode::UNAUTHORIZED, "Invalid access token");
    }

    let body = match id.as_str() {
        "a1" => json!({
            "id": "a1",
            "name": "Alpha",
            "genres": ["Heavy Metal", "thrash metal"],
            "popularity": 70,
            "followers": { "total": 1000 }
        }),
        "a2" => json!({ "id": "a2", "name": "Beta", "genres": ["heavy metal"], "popularity": 60 }),
        "a3" => json!({ "id": "a3", "name": "Gamma", "popularity": 90 }),
        "revoked" => return error(StatusCode::UNAUTHORIZED, "The access token expired"),
        _ => return error(StatusCode::INTERNAL_SERVER_ERROR, "Server error"),
    };
    Json(body).into_response()
}

async fn top_tracks(
    headers: HeaderMap,
    Path(id): Path<String>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    if !authorized(&headers) {
        return error(StatusCode::UNAUTHORIZED, "Invalid access token");
    }

    match (id.as_str(), params.get("market").map(String::as_str)) {
        ("a1", Some("HN")) => Json(json!({
            "tracks": [
                { "id": "x", "name": "Song A", "popularity": 55 },
                { "id": "y", "name": "Song B", "popularity": 60 },
                { "id": "z", "name": "Song C", "popularity": 58 }
            ]
        }))
        .into_response(),
        (_, Some(_)) => Json(json!({ "tracks": [] })).into_response(),
        _ => error(StatusCode::BAD_REQUEST, "market required"),
    }
}

fn youtube_key_ok(params: &HashMap<String, String>) -> bool {
    params.get("key").map(String::as_str) == Some(YOUTUBE_KEY)
}

async fn youtube_search(
    State(hits): State<Arc<Hits>>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    hits.youtube.fetch_add(1, Ordering::SeqCst);
    if !youtube_key_ok(&params) {
        return error(StatusCode::FORBIDDEN, "API key not valid");
    }

    let item = |id: &str, title: &str| {
        json!({ "id": { "kind": "youtube#video", "videoId": id }, "snippet": { "title": title } })
    };

    match params.get("q").map(String::as_str) {
        Some("rock") => Json(json!({
            "items": [
                item("v1", "First"),
                item("v2", "Podcast"),
                item("v3", "Deleted"),
                { "id": { "kind": "youtube#channel" }, "snippet": { "title": "A channel" } },
                item("v4", "Fourth")
            ]
        }))
        .into_response(),
        Some("punk") => Json(json!({ "items": [item("v1", "First")] })).into_response(),
        _ => error(StatusCode::BAD_REQUEST, "unsupported query"),
    }
}

fn video(id: &str, title: &str, category: &str, views: &str) -> Value {
    json!({
        "id": id,
        "snippet": {
            "title": title,
            "channelTitle": "Channel",
            "categoryId": category,
            "tags": ["live"]
        },
        "statistics": { "viewCount": views }
    })
}

async fn youtube_videos(
    State(hits): State<Arc<Hits>>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    hits.youtube.fetch_add(1, Ordering::SeqCst);
    if !youtube_key_ok(&params) {
        return error(StatusCode::FORBIDDEN, "API key not valid");
    }

    if params.get("chart").map(String::as_str) == Some("mostPopular") {
        return Json(json!({
            "items": [
                video("c1", "Chart One", "10", "100"),
                video("c2", "Chart Two", "10", "300"),
                video("c3", "Chart Three", "10", "200")
            ]
        }))
        .into_response();
    }

    let items = match params.get("id").map(String::as_str) {
        Some("v1") => vec![video("v1", "First (Official Video)", "10", "500")],
        Some("v2") => vec![video("v2", "Podcast", "24", "10000")],
        Some("v4") => vec![video("v4", "Fourth", "10", "900")],
        _ => Vec::new(),
    };
    Json(json!({ "items": items })).into_response()
}
