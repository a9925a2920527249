use crate::{
    error::ApiError,
    types::{Video, VideoListResponse, VideoSearchResponse},
    youtube::YouTubeClient,
};

/// Largest page size accepted by the API.
pub const MAX_RESULTS: u32 = 50;

/// One page of the `mostPopular` chart of a region and category.
pub async fn most_popular(
    client: &YouTubeClient,
    region: &str,
    category_id: &str,
    max_results: u32,
    page_token: Option<&str>,
) -> Result<VideoListResponse, ApiError> {
    let mut params = vec![
        ("part", "snippet,statistics".to_string()),
        ("chart", "mostPopular".to_string()),
        ("regionCode", region.to_string()),
        ("videoCategoryId", category_id.to_string()),
        ("maxResults", max_results.clamp(1, MAX_RESULTS).to_string()),
    ];
    if let Some(token) = page_token {
        params.push(("pageToken", token.to_string()));
    }

    client.get_json("/videos", &params).await
}

/// One page of video search results for `query`.
pub async fn search_videos(
    client: &YouTubeClient,
    query: &str,
    region: &str,
    category_id: &str,
    page_token: Option<&str>,
) -> Result<VideoSearchResponse, ApiError> {
    let mut params = vec![
        ("part", "snippet".to_string()),
        ("type", "video".to_string()),
        ("q", query.to_string()),
        ("regionCode", region.to_string()),
        ("videoCategoryId", category_id.to_string()),
        ("maxResults", MAX_RESULTS.to_string()),
    ];
    if let Some(token) = page_token {
        params.push(("pageToken", token.to_string()));
    }

    client.get_json("/search", &params).await
}

/// Snippet and statistics of the given videos. Unknown ids are simply absent.
pub async fn get_videos(client: &YouTubeClient, ids: &[String]) -> Result<Vec<Video>, ApiError> {
    if ids.is_empty() {
        return Ok(Vec::new());
    }

    let res: VideoListResponse = client
        .get_json(
            "/videos",
            &[
                ("part", "snippet,statistics".to_string()),
                ("id", ids.join(",")),
            ],
        )
        .await?;

    Ok(res.items)
}
