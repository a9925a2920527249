//! Popularity comparisons derived from artist data.
//!
//! - [`compare_two`] decides which of two selected artists is more popular.
//! - [`country_popularity`] summarizes an artist's region top tracks into a
//!   [`Tier`] and the most popular track.

use std::fmt;

use serde::Serialize;

use crate::{
    error::ApiError,
    spotify::{SpotifySession, artists},
    types::{Artist, Track},
    utils,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComparedArtist {
    pub id: String,
    pub name: String,
    pub popularity: u32,
}

impl From<&Artist> for ComparedArtist {
    fn from(artist: &Artist) -> Self {
        Self {
            id: artist.id.clone(),
            name: artist.name.clone(),
            popularity: artist.popularity,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "name", rename_all = "snake_case")]
pub enum Verdict {
    Winner(String),
    Tie,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Comparison {
    pub first: ComparedArtist,
    pub second: ComparedArtist,
    pub verdict: Verdict,
    pub message: String,
}

/// Compares the global popularity of exactly two artists.
///
/// # Errors
///
/// Returns [`ApiError::Precondition`] unless `artists` holds exactly two entries.
pub fn compare_two(artists: &[Artist]) -> Result<Comparison, ApiError> {
    let [first, second] = artists else {
        return Err(ApiError::Precondition(format!(
            "select exactly two artists to compare, got {}",
            artists.len()
        )));
    };

    let verdict = match first.popularity.cmp(&second.popularity) {
        std::cmp::Ordering::Greater => Verdict::Winner(first.name.clone()),
        std::cmp::Ordering::Less => Verdict::Winner(second.name.clone()),
        std::cmp::Ordering::Equal => Verdict::Tie,
    };

    let outcome = match &verdict {
        Verdict::Winner(name) => format!("{} is more popular globally.", name),
        Verdict::Tie => "Both artists have the same global popularity.".to_string(),
    };
    let message = format!(
        "{} (popularity {}) vs {} (popularity {}). {}",
        first.name, first.popularity, second.name, second.popularity, outcome
    );

    Ok(Comparison {
        first: first.into(),
        second: second.into(),
        verdict,
        message,
    })
}

/// Popularity bucket of an averaged score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    VeryHigh,
    High,
    Moderate,
    Low,
}

impl Tier {
    pub fn from_average(average: f64) -> Self {
        if average > 70.0 {
            Tier::VeryHigh
        } else if average > 50.0 {
            Tier::High
        } else if average > 30.0 {
            Tier::Moderate
        } else {
            Tier::Low
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Tier::VeryHigh => "very high",
            Tier::High => "high",
            Tier::Moderate => "moderate",
            Tier::Low => "low",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegionPopularity {
    pub artist: String,
    pub region: String,
    pub average: f64,
    pub tier: Tier,
    pub top_track: Track,
    pub tracks: Vec<Track>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PopularitySummary {
    /// The region reports no top tracks for the artist.
    NoData { artist: String, region: String },
    Summary(RegionPopularity),
}

impl fmt::Display for PopularitySummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PopularitySummary::NoData { artist, region } => {
                write!(f, "No popular tracks found in {} for {}.", region, artist)
            }
            PopularitySummary::Summary(s) => write!(
                f,
                "The popularity of {} in {} is {} (average {:.2}). Their most popular track there is '{}' with a popularity of {}.",
                s.artist, s.region, s.tier, s.average, s.top_track.name, s.top_track.popularity
            ),
        }
    }
}

/// Summarizes region top tracks: mean popularity, tier and best track.
///
/// Among tracks with the same highest popularity the first one wins.
pub fn summarize_top_tracks(artist: &str, region: &str, tracks: Vec<Track>) -> PopularitySummary {
    let scores: Vec<u32> = tracks.iter().map(|t| t.popularity).collect();
    let Some(average) = utils::mean(&scores) else {
        return PopularitySummary::NoData {
            artist: artist.to_string(),
            region: region.to_string(),
        };
    };

    let mut top_track = &tracks[0];
    for track in &tracks[1..] {
        if track.popularity > top_track.popularity {
            top_track = track;
        }
    }

    PopularitySummary::Summary(RegionPopularity {
        artist: artist.to_string(),
        region: region.to_string(),
        average,
        tier: Tier::from_average(average),
        top_track: top_track.clone(),
        tracks,
    })
}

/// Fetches the artist's top tracks in `region` and summarizes them.
///
/// An empty top-track list is a [`PopularitySummary::NoData`] value, not an error.
pub async fn country_popularity(
    session: &mut SpotifySession,
    artist: &Artist,
    region: &str,
) -> Result<PopularitySummary, ApiError> {
    let region = region.trim().to_uppercase();
    if region.is_empty() {
        return Err(ApiError::Precondition(
            "a region code is required".to_string(),
        ));
    }

    let tracks = artists::get_top_tracks(session, &artist.id, &region).await?;
    Ok(summarize_top_tracks(&artist.name, &region, tracks))
}
