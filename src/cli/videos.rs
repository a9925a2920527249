use tabled::Table;

use crate::{
    error,
    session::Session,
    success,
    types::{Entity, VideoTableRow},
    utils, warning,
    youtube::{MUSIC_CATEGORY_ID, ranking::VideoQuery},
};

pub async fn top_videos(
    session: &mut Session,
    genre: String,
    region: Option<String>,
    top: Option<usize>,
) {
    let region = region.unwrap_or_else(|| session.default_region().to_string());
    let mut query = VideoQuery::by_genre(&genre, &region);
    if let Some(top) = top {
        query.top_n = top;
    }

    let pb = utils::spinner(format!("Ranking {} videos in {}...", genre, region));
    let result = session.top_videos(&query).await;
    pb.finish_and_clear();

    render(result, &format!("{} in {}", genre, region));
}

pub async fn video_chart(
    session: &mut Session,
    region: Option<String>,
    category: Option<String>,
    top: Option<usize>,
) {
    let region = region.unwrap_or_else(|| session.default_region().to_string());
    let category = category.unwrap_or_else(|| MUSIC_CATEGORY_ID.to_string());

    let pb = utils::spinner(format!("Fetching most popular videos in {}...", region));
    let result = session
        .video_chart(&region, &category, top.unwrap_or(20))
        .await;
    pb.finish_and_clear();

    render(result, &format!("the {} chart", region));
}

fn render(result: Result<Vec<Entity>, crate::error::ApiError>, label: &str) {
    match result {
        Ok(videos) if videos.is_empty() => warning!("No videos found for {}.", label),
        Ok(videos) => {
            let rows: Vec<VideoTableRow> = videos
                .iter()
                .enumerate()
                .map(|(i, v)| VideoTableRow {
                    rank: i + 1,
                    title: v.name.clone(),
                    views: v.score,
                    appearances: v.count,
                })
                .collect();
            println!("{}", Table::new(rows));
            success!("Top {} videos for {}", videos.len(), label);
        }
        Err(e) => error!("Cannot rank videos for {}: {}", label, e),
    }
}
