mod common;

use common::{FakeApi, Hits};
use poprank::config::Settings;
use poprank::error::ApiError;
use poprank::session::Session;
use poprank::youtube::{MUSIC_CATEGORY_ID, ranking::VideoQuery, videos};

#[tokio::test]
async fn test_missing_api_key_fails_before_request() {
    let api = FakeApi::start().await;
    let settings = Settings {
        youtube_api_key: None,
        ..api.settings()
    };
    let session = Session::new(settings).unwrap();

    assert!(!session.youtube.has_api_key());
    let result = session
        .top_videos(&VideoQuery::by_genre("rock", "US"))
        .await;

    assert!(matches!(result, Err(ApiError::Config(_))));
    assert_eq!(Hits::count(&api.hits.youtube), 0);
}

#[tokio::test]
async fn test_rejected_api_key_is_request_error() {
    let api = FakeApi::start().await;
    let settings = Settings {
        youtube_api_key: Some("bad".to_string()),
        ..api.settings()
    };
    let session = Session::new(settings).unwrap();

    let result = session.video_chart("US", MUSIC_CATEGORY_ID, 5).await;

    assert!(matches!(
        result,
        Err(ApiError::Request { status: Some(403), cause }) if cause == "API key not valid"
    ));
}

#[tokio::test]
async fn test_top_videos_filters_category_and_ranks_by_views() {
    let api = FakeApi::start().await;
    let session = Session::new(api.settings()).unwrap();

    let result = session
        .top_videos(&VideoQuery::by_genre("rock", "US"))
        .await
        .unwrap();

    let ids: Vec<&str> = result.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, vec!["v4", "v1"]);
    assert_eq!(result[0].score, 900);
    assert_eq!(result[1].name, "First (Official Video)");
    assert!(result[1].tags.contains("live"));
}

#[tokio::test]
async fn test_top_videos_counts_across_terms() {
    let api = FakeApi::start().await;
    let session = Session::new(api.settings()).unwrap();

    let query = VideoQuery {
        terms: vec!["rock".to_string(), "punk".to_string()],
        ..VideoQuery::by_genre("rock", "US")
    };
    let result = session.top_videos(&query).await.unwrap();

    let first = result.iter().find(|e| e.id == "v1").unwrap();
    assert_eq!(first.count, 2);
}

#[tokio::test]
async fn test_top_videos_requires_a_term() {
    let api = FakeApi::start().await;
    let session = Session::new(api.settings()).unwrap();

    let query = VideoQuery {
        terms: vec!["  ".to_string()],
        ..VideoQuery::by_genre("rock", "US")
    };

    assert!(matches!(
        session.top_videos(&query).await,
        Err(ApiError::Precondition(_))
    ));
    assert_eq!(Hits::count(&api.hits.youtube), 0);
}

#[tokio::test]
async fn test_chart_is_ranked_by_views() {
    let api = FakeApi::start().await;
    let session = Session::new(api.settings()).unwrap();

    let result = session.video_chart("US", MUSIC_CATEGORY_ID, 2).await.unwrap();

    let ids: Vec<&str> = result.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, vec!["c2", "c3"]);
    assert!(result.iter().all(|e| e.count == 1));
}

#[tokio::test]
async fn test_get_videos_skips_request_for_no_ids() {
    let api = FakeApi::start().await;
    let session = Session::new(api.settings()).unwrap();

    let found = videos::get_videos(&session.youtube, &[]).await.unwrap();

    assert!(found.is_empty());
    assert_eq!(Hits::count(&api.hits.youtube), 0);
}
