//! The end-to-end run, phase by phase.
//!
//! Control flow is strictly linear: fetch events, resolve tracks performer by
//! performer, then reset and repopulate the playlist. The Rdio session is
//! only constructed after the events fetch succeeded, so a provider failure
//! aborts the run before any Rdio call is made.

use chrono::NaiveDate;

use crate::{
    Res, error, info,
    rdio::{RdioSession, catalog, playlist},
    seatgeek, success,
    types::{Event, Geolocation, PlaylistRef, SearchParameters, Venue},
};

/// Reserved playlist name. At most one live playlist with this name exists
/// on the service after a run; the program enforces that by deletion.
pub const PLAYLIST_NAME: &str = "Akshun";

/// Runs the whole workflow for one set of resolved search parameters.
pub async fn run(search: SearchParameters) -> Res<()> {
    let results = match seatgeek::find_events(&search).await {
        Ok(results) => results,
        Err(e) => error!("{}", e),
    };

    println!(
        "{} events found within {} of {} between {} and {}",
        results.meta.total,
        results.meta.geolocation.range,
        results
            .meta
            .geolocation
            .postal_code
            .as_deref()
            .unwrap_or("unknown"),
        search.from.format("%Y-%m-%d"),
        search.to.format("%Y-%m-%d"),
    );

    let mut session = RdioSession::new();
    let track_keys = resolve_tracks(&session, &results.events).await?;

    let playlist_key =
        reset_playlist(&mut session, &results.meta.geolocation, search.from, search.to).await?;

    if !track_keys.is_empty() {
        info!("Adding {} tracks to {} playlist", track_keys.len(), PLAYLIST_NAME);
        let raw = playlist::add_to_playlist(&session, &playlist_key, &track_keys).await?;
        println!("{}", raw);
        success!("Playlist populated");
    }

    Ok(())
}

/// Resolves sample tracks for every performer of every event, in listed
/// order, printing the formatted event block along the way.
///
/// Misses are local: a performer without a catalog match or without tracks
/// contributes an empty sub-sequence and processing continues. The returned
/// keys are flattened in processing order, which becomes the playlist order.
pub async fn resolve_tracks(session: &RdioSession, events: &[Event]) -> Res<Vec<String>> {
    let mut track_keys: Vec<String> = Vec::new();

    for event in events {
        println!("# {}", event.title.to_uppercase());

        for performer in &event.performers {
            let contribution = resolve_performer(session, &performer.name).await?;
            println!(
                "* {} ({} tracks on Rdio)",
                performer.name,
                contribution.len()
            );
            track_keys.extend(contribution);
        }

        println!();
        println!("{}", event.datetime_local);
        println!("{}", event.venue.name);
        println!("{}", venue_location(&event.venue));
        println!("----");
    }

    Ok(track_keys)
}

async fn resolve_performer(
    session: &RdioSession,
    name: &str,
) -> Result<Vec<String>, reqwest::Error> {
    match catalog::search_artist(session, name).await? {
        Some(artist_key) => catalog::tracks_for_artist(session, &artist_key).await,
        None => Ok(Vec::new()),
    }
}

/// Deletes any pre-existing playlist with the reserved name and creates a
/// fresh, published, initially empty one. Gates on authorization first.
pub async fn reset_playlist(
    session: &mut RdioSession,
    geolocation: &Geolocation,
    from: NaiveDate,
    to: NaiveDate,
) -> Res<String> {
    session.ensure_authorized().await?;

    let playlists = playlist::get_playlists(session).await?;
    if let Some(existing) = find_owned_playlist(&playlists, PLAYLIST_NAME) {
        info!("Found Playlist. Deleting");
        playlist::delete_playlist(session, &existing.key).await?;
    }

    info!("Creating Playlist");
    let description = playlist_description(
        &geolocation.range,
        geolocation.postal_code.as_deref().unwrap_or("unknown"),
        from,
        to,
    );

    Ok(playlist::create_playlist(session, PLAYLIST_NAME, &description).await?)
}

/// Exact-name lookup among the user's owned playlists.
pub fn find_owned_playlist<'a>(
    playlists: &'a [PlaylistRef],
    name: &str,
) -> Option<&'a PlaylistRef> {
    playlists.iter().find(|p| p.name == name)
}

/// Builds the playlist description embedding the echoed radius and postal
/// code and the long-form date range, e.g. "Monday January 01, 2024".
pub fn playlist_description(range: &str, postal_code: &str, from: NaiveDate, to: NaiveDate) -> String {
    format!(
        "Artists performing within {} of {} between {} and {}",
        range,
        postal_code,
        from.format("%A %B %d, %Y"),
        to.format("%A %B %d, %Y"),
    )
}

/// Venue address and city joined with ", ", skipping whichever is missing.
pub fn venue_location(venue: &Venue) -> String {
    [venue.address.as_deref(), venue.city.as_deref()]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join(", ")
}
