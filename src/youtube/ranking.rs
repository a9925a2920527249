use crate::{
    aggregate::{self, AggregateTable, EntitySource},
    error::ApiError,
    types::{Entity, EntityRef, Video, VideoSearchResult},
    youtube::{MUSIC_CATEGORY_ID, YouTubeClient, videos},
};

pub const DEFAULT_TOP_VIDEOS: usize = 20;

/// Parameters of a "top videos" ranking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoQuery {
    /// One search is run per term; each is a collection of the aggregation.
    pub terms: Vec<String>,
    pub region: String,
    pub category_id: String,
    pub pages_per_term: u32,
    pub top_n: usize,
}

impl VideoQuery {
    pub fn by_genre(genre: &str, region: &str) -> Self {
        Self {
            terms: vec![genre.to_string()],
            region: region.to_string(),
            category_id: MUSIC_CATEGORY_ID.to_string(),
            pages_per_term: 1,
            top_n: DEFAULT_TOP_VIDEOS,
        }
    }
}

/// Collects videos from search pages and enriches each with its statistics.
pub struct VideoSearchSource<'a> {
    client: &'a YouTubeClient,
    region: String,
    category_id: String,
    pages_per_term: u32,
}

impl<'a> VideoSearchSource<'a> {
    pub fn new(client: &'a YouTubeClient, query: &VideoQuery) -> Self {
        Self {
            client,
            region: query.region.clone(),
            category_id: query.category_id.clone(),
            pages_per_term: query.pages_per_term.max(1),
        }
    }
}

impl EntitySource for VideoSearchSource<'_> {
    type Collection = String;
    type Item = VideoSearchResult;
    type Details = Video;

    fn describe(&self, collection: &String) -> String {
        format!("video search \"{}\"", collection)
    }

    async fn fetch_items(
        &mut self,
        collection: &String,
    ) -> Result<Vec<VideoSearchResult>, ApiError> {
        let mut items = Vec::new();
        let mut page_token: Option<String> = None;

        for _ in 0..self.pages_per_term {
            let mut page = videos::search_videos(
                self.client,
                collection,
                &self.region,
                &self.category_id,
                page_token.as_deref(),
            )
            .await?;
            items.append(&mut page.items);

            page_token = page.next_page_token;
            if page_token.is_none() {
                break;
            }
        }

        Ok(items)
    }

    fn classify(&self, item: &VideoSearchResult) -> Option<EntityRef> {
        Some(EntityRef {
            id: item.id.video_id.clone()?,
            name: item.snippet.title.clone(),
        })
    }

    async fn fetch_details(&mut self, entity_id: &str) -> Result<Video, ApiError> {
        videos::get_videos(self.client, &[entity_id.to_string()])
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| ApiError::request(Some(404), format!("video {} not found", entity_id)))
    }

    fn apply_details(&self, entity: &mut Entity, details: &Video) {
        entity.name = details.snippet.title.clone();
        entity.tags = details.snippet.tags.iter().cloned().collect();
        entity.score = details.view_count().unwrap_or(0);
    }
}

/// Ranks videos found by the query terms by view count.
///
/// A video qualifies when its details confirm the requested category.
pub async fn top_videos(
    client: &YouTubeClient,
    query: &VideoQuery,
) -> Result<Vec<Entity>, ApiError> {
    if query.terms.iter().all(|t| t.trim().is_empty()) {
        return Err(ApiError::Precondition(
            "at least one search term is required".to_string(),
        ));
    }

    let category_id = query.category_id.clone();
    let mut source = VideoSearchSource::new(client, query);

    aggregate::aggregate(
        &mut source,
        &query.terms,
        |video: &Video| video.snippet.category_id.as_deref() == Some(category_id.as_str()),
        |entity: &Entity| entity.score,
        query.top_n,
    )
    .await
}

/// The region's most popular videos of a category, ranked by view count.
///
/// Reads the chart directly, so every video counts once and no enrichment
/// fetch is needed.
pub async fn most_popular_chart(
    client: &YouTubeClient,
    region: &str,
    category_id: &str,
    top_n: usize,
) -> Result<Vec<Entity>, ApiError> {
    let max_results = top_n.clamp(1, videos::MAX_RESULTS as usize) as u32;
    let chart = videos::most_popular(client, region, category_id, max_results, None).await?;

    let mut table = AggregateTable::new();
    for video in &chart.items {
        table.observe(EntityRef {
            id: video.id.clone(),
            name: video.snippet.title.clone(),
        });
    }

    let mut entities = table.into_entities();
    for entity in entities.iter_mut() {
        if let Some(video) = chart.items.iter().find(|v| v.id == entity.id) {
            entity.tags = video.snippet.tags.iter().cloned().collect();
            entity.score = video.view_count().unwrap_or(0);
        }
    }

    Ok(aggregate::rank(entities, |e| e.score, top_n))
}
