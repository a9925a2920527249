use tabled::Table;

use crate::{
    error, info,
    popularity::PopularitySummary,
    session::Session,
    spotify::artists::SEARCH_LIMIT,
    success,
    types::{ArtistTableRow, TrackTableRow},
    utils, warning,
};

pub async fn search_artists(session: &mut Session, query: String) {
    let pb = utils::spinner(format!("Searching artists for \"{}\"...", query));
    let result = session.search_artists(&query, SEARCH_LIMIT).await;
    pb.finish_and_clear();

    let artists = match result {
        Ok(artists) => artists,
        Err(e) => error!("Artist search failed: {}", e),
    };

    if artists.is_empty() {
        warning!("No artists found for \"{}\"", query);
        return;
    }

    let rows: Vec<ArtistTableRow> = artists
        .into_iter()
        .map(|a| ArtistTableRow {
            genres: utils::format_tags(&a.genres, 3),
            name: a.name,
            popularity: a.popularity,
            followers: a.followers.total,
        })
        .collect();

    println!("{}", Table::new(rows));
}

/// Looks up both artists and compares them through the session's selection.
pub async fn compare_artists(session: &mut Session, first: String, second: String) {
    session.reset_selection();

    for name in [first, second] {
        let artist = match session.find_artist(&name).await {
            Ok(a) => a,
            Err(e) => error!("{}", e),
        };
        info!("Selected {} (popularity {})", artist.name, artist.popularity);

        match session.select_artist(artist) {
            Ok(Some(comparison)) => success!("{}", comparison.message),
            Ok(None) => {}
            Err(e) => error!("{}", e),
        }
    }
}

pub async fn country_popularity(session: &mut Session, name: String, region: Option<String>) {
    let artist = match session.find_artist(&name).await {
        Ok(a) => a,
        Err(e) => error!("{}", e),
    };

    let pb = utils::spinner(format!("Fetching top tracks of {}...", artist.name));
    let result = session.country_popularity(&artist, region.as_deref()).await;
    pb.finish_and_clear();

    match result {
        Ok(summary @ PopularitySummary::NoData { .. }) => warning!("{}", summary),
        Ok(PopularitySummary::Summary(s)) => {
            let rows: Vec<TrackTableRow> = s
                .tracks
                .iter()
                .map(|t| TrackTableRow {
                    name: t.name.clone(),
                    popularity: t.popularity,
                })
                .collect();
            println!("{}", Table::new(rows));
            success!("{}", PopularitySummary::Summary(s));
        }
        Err(e) => error!("Cannot fetch region popularity: {}", e),
    }
}
