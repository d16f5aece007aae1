use akshun::rdio::catalog::{TRACKS_PER_ARTIST, sample_track_keys};
use akshun::types::{PlaylistRef, TrackRef, Venue};
use akshun::workflow::{PLAYLIST_NAME, find_owned_playlist, playlist_description, venue_location};
use chrono::NaiveDate;

// Helper function to create a test playlist reference
fn create_test_playlist(key: &str, name: &str) -> PlaylistRef {
    PlaylistRef {
        key: key.to_string(),
        name: name.to_string(),
    }
}

// Helper function to create a list of track references
fn create_test_tracks(keys: &[&str]) -> Vec<TrackRef> {
    keys.iter()
        .map(|k| TrackRef { key: k.to_string() })
        .collect()
}

#[test]
fn test_sample_track_keys_caps_at_two() {
    assert_eq!(TRACKS_PER_ARTIST, 2);

    // More tracks than the cap: only the first two survive, in order
    let keys = sample_track_keys(create_test_tracks(&["t1", "t2", "t3", "t4"]));
    assert_eq!(keys, vec!["t1".to_string(), "t2".to_string()]);
}

#[test]
fn test_sample_track_keys_short_listings() {
    // Fewer tracks than the cap: min(2, available)
    let keys = sample_track_keys(create_test_tracks(&["t1"]));
    assert_eq!(keys, vec!["t1".to_string()]);

    // No tracks at all is an ordinary empty contribution
    let keys = sample_track_keys(Vec::new());
    assert!(keys.is_empty());
}

#[test]
fn test_find_owned_playlist_exact_match_only() {
    let playlists = vec![
        create_test_playlist("p1", "Road Trip"),
        create_test_playlist("p2", "Akshun Classics"),
        create_test_playlist("p3", "Akshun"),
    ];

    let found = find_owned_playlist(&playlists, PLAYLIST_NAME).unwrap();
    assert_eq!(found.key, "p3");

    // Partial or prefixed names never match
    assert!(find_owned_playlist(&playlists, "akshun").is_none());
    assert!(find_owned_playlist(&[], PLAYLIST_NAME).is_none());
}

#[test]
fn test_playlist_description_long_form_dates() {
    let from = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    let to = NaiveDate::from_ymd_opt(2024, 1, 8).unwrap();

    let description = playlist_description("12mi", "90210", from, to);
    assert_eq!(
        description,
        "Artists performing within 12mi of 90210 between Monday January 01, 2024 and Monday January 08, 2024"
    );
}

#[test]
fn test_venue_location_joins_present_parts() {
    let venue = Venue {
        name: "The Fillmore".to_string(),
        address: Some("1805 Geary Blvd".to_string()),
        city: Some("San Francisco".to_string()),
    };
    assert_eq!(venue_location(&venue), "1805 Geary Blvd, San Francisco");

    let venue = Venue {
        name: "The Fillmore".to_string(),
        address: None,
        city: Some("San Francisco".to_string()),
    };
    assert_eq!(venue_location(&venue), "San Francisco");

    let venue = Venue {
        name: "The Fillmore".to_string(),
        address: None,
        city: None,
    };
    assert_eq!(venue_location(&venue), "");
}

#[test]
fn test_flattened_contributions_keep_processing_order() {
    // One matched performer with two tracks, one miss: the playlist gets
    // exactly the two tracks, in listed order.
    let mut track_keys: Vec<String> = Vec::new();
    let contributions = vec![
        sample_track_keys(create_test_tracks(&["t1", "t2"])),
        sample_track_keys(Vec::new()),
    ];

    for contribution in contributions {
        track_keys.extend(contribution);
    }

    assert_eq!(track_keys, vec!["t1".to_string(), "t2".to_string()]);
}
