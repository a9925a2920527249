use tabled::Table;

use crate::{
    error,
    session::Session,
    spotify::ranking::ArtistRankingQuery,
    success,
    types::{ArtistRankingRow, Entity},
    utils, warning,
};

pub async fn genre_artists(
    session: &mut Session,
    genre: String,
    market: Option<String>,
    top: Option<usize>,
) {
    let market = market.unwrap_or_else(|| session.default_region().to_string());
    let mut query = ArtistRankingQuery::by_genre(&genre, Some(&market));
    if let Some(top) = top {
        query.top_n = top;
    }

    run_ranking(session, &query, &format!("genre {}", genre)).await;
}

pub async fn market_artists(
    session: &mut Session,
    market: Option<String>,
    search: Option<String>,
    top: Option<usize>,
) {
    let market = market.unwrap_or_else(|| session.default_region().to_string());
    let mut query = ArtistRankingQuery::by_market(&market);
    if let Some(search) = search {
        query.search = search;
    }
    if let Some(top) = top {
        query.top_n = top;
    }

    run_ranking(session, &query, &format!("market {}", market)).await;
}

async fn run_ranking(session: &mut Session, query: &ArtistRankingQuery, label: &str) {
    let pb = utils::spinner(format!("Ranking artists for {}...", label));
    let result = session.top_artists(query).await;
    pb.finish_and_clear();

    match result {
        Ok(entities) if entities.is_empty() => warning!("No artists found for {}.", label),
        Ok(entities) => {
            println!("{}", Table::new(ranking_rows(&entities)));
            success!("Top {} artists for {}", entities.len(), label);
        }
        Err(e) => error!("Cannot rank artists for {}: {}", label, e),
    }
}

fn ranking_rows(entities: &[Entity]) -> Vec<ArtistRankingRow> {
    entities
        .iter()
        .enumerate()
        .map(|(i, e)| ArtistRankingRow {
            rank: i + 1,
            name: e.name.clone(),
            genres: utils::format_tags(&e.tags, 3),
            appearances: e.count,
        })
        .collect()
}
