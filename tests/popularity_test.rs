use poprank::error::ApiError;
use poprank::management::SelectionManager;
use poprank::popularity::*;
use poprank::types::{Artist, Followers, Track};

fn artist(id: &str, name: &str, popularity: u32) -> Artist {
    Artist {
        id: id.to_string(),
        name: name.to_string(),
        genres: Vec::new(),
        popularity,
        followers: Followers::default(),
    }
}

fn track(name: &str, popularity: u32) -> Track {
    Track {
        id: Some(format!("{}_id", name)),
        name: name.to_string(),
        popularity,
    }
}

#[test]
fn test_compare_two_declares_winner() {
    let result = compare_two(&[artist("1", "X", 62), artist("2", "Y", 80)]).unwrap();

    assert_eq!(result.verdict, Verdict::Winner("Y".to_string()));
    assert!(result.message.contains("Y is more popular globally."));
    assert_eq!(result.first.popularity, 62);
    assert_eq!(result.second.popularity, 80);
}

#[test]
fn test_compare_two_tie() {
    let result = compare_two(&[artist("1", "X", 80), artist("2", "Y", 80)]).unwrap();

    assert_eq!(result.verdict, Verdict::Tie);
    assert!(result.message.contains("same global popularity"));
}

#[test]
fn test_compare_two_requires_exactly_two() {
    assert!(matches!(compare_two(&[]), Err(ApiError::Precondition(_))));
    assert!(matches!(
        compare_two(&[artist("1", "X", 10)]),
        Err(ApiError::Precondition(_))
    ));
    assert!(matches!(
        compare_two(&[artist("1", "X", 10), artist("2", "Y", 20), artist("3", "Z", 30)]),
        Err(ApiError::Precondition(_))
    ));
}

#[test]
fn test_tier_thresholds() {
    assert_eq!(Tier::from_average(70.01), Tier::VeryHigh);
    assert_eq!(Tier::from_average(70.0), Tier::High);
    assert_eq!(Tier::from_average(50.5), Tier::High);
    assert_eq!(Tier::from_average(50.0), Tier::Moderate);
    assert_eq!(Tier::from_average(30.5), Tier::Moderate);
    assert_eq!(Tier::from_average(30.0), Tier::Low);
    assert_eq!(Tier::from_average(0.0), Tier::Low);
    assert_eq!(Tier::VeryHigh.to_string(), "very high");
}

#[test]
fn test_summary_of_region_tracks() {
    let summary = summarize_top_tracks(
        "Band",
        "HN",
        vec![track("a", 55), track("b", 60), track("c", 58)],
    );

    let PopularitySummary::Summary(s) = summary else {
        panic!("expected a summary");
    };
    assert!((s.average - 57.67).abs() < 0.01);
    assert_eq!(s.tier, Tier::High);
    assert_eq!(s.top_track.name, "b");
    assert_eq!(s.top_track.popularity, 60);
    assert_eq!(s.tracks.len(), 3);
}

#[test]
fn test_summary_without_tracks_is_no_data() {
    let summary = summarize_top_tracks("Band", "HN", Vec::new());

    assert_eq!(
        summary,
        PopularitySummary::NoData {
            artist: "Band".to_string(),
            region: "HN".to_string()
        }
    );
    assert_eq!(summary.to_string(), "No popular tracks found in HN for Band.");
}

#[test]
fn test_summary_top_track_tie_keeps_first() {
    let summary = summarize_top_tracks(
        "Band",
        "HN",
        vec![track("first", 70), track("second", 75), track("third", 75)],
    );

    let PopularitySummary::Summary(s) = summary else {
        panic!("expected a summary");
    };
    assert_eq!(s.top_track.name, "second");
    assert_eq!(s.tier, Tier::VeryHigh);
}

#[test]
fn test_selection_compares_on_second_artist() {
    let mut selection = SelectionManager::new();

    assert_eq!(selection.add(artist("1", "X", 40)).unwrap(), None);
    let comparison = selection.add(artist("2", "Y", 30)).unwrap().unwrap();
    assert_eq!(comparison.verdict, Verdict::Winner("X".to_string()));
    assert!(selection.is_full());
}

#[test]
fn test_selection_refuses_third_and_duplicate() {
    let mut selection = SelectionManager::new();
    selection.add(artist("1", "X", 40)).unwrap();

    assert!(matches!(
        selection.add(artist("1", "X", 40)),
        Err(ApiError::Precondition(_))
    ));

    selection.add(artist("2", "Y", 30)).unwrap();
    assert!(matches!(
        selection.add(artist("3", "Z", 20)),
        Err(ApiError::Precondition(_))
    ));
    assert_eq!(selection.get_selected().len(), 2);

    selection.clear();
    assert!(selection.get_selected().is_empty());
    assert!(!selection.has("1"));
}
