use super::RdioSession;
use crate::types::{ArtistSearchResult, RpcEnvelope, TrackRef};

/// Number of sample tracks collected per matched artist.
pub const TRACKS_PER_ARTIST: usize = 2;

/// Resolves a performer name to an artist key.
///
/// Policy: take the first search result if any are returned. An empty result
/// list means the performer has no catalog match, which is an ordinary
/// outcome and yields `None`.
pub async fn search_artist(
    session: &RdioSession,
    name: &str,
) -> Result<Option<String>, reqwest::Error> {
    let envelope: RpcEnvelope<ArtistSearchResult> = session
        .call(
            "search",
            &[
                ("query", name.to_string()),
                ("types", "artist".to_string()),
            ],
        )
        .await?;

    Ok(envelope
        .result
        .and_then(|r| r.results.into_iter().next())
        .map(|artist| artist.key))
}

/// Fetches up to [`TRACKS_PER_ARTIST`] sample track keys for an artist.
///
/// An empty or absent result yields an empty vector, not an error.
pub async fn tracks_for_artist(
    session: &RdioSession,
    artist_key: &str,
) -> Result<Vec<String>, reqwest::Error> {
    let envelope: RpcEnvelope<Vec<TrackRef>> = session
        .call(
            "getTracksForArtist",
            &[
                ("artist", artist_key.to_string()),
                ("count", TRACKS_PER_ARTIST.to_string()),
            ],
        )
        .await?;

    Ok(sample_track_keys(envelope.result.unwrap_or_default()))
}

/// Caps a track listing at [`TRACKS_PER_ARTIST`] and keeps only the keys,
/// preserving the listed order.
pub fn sample_track_keys(tracks: Vec<TrackRef>) -> Vec<String> {
    tracks
        .into_iter()
        .take(TRACKS_PER_ARTIST)
        .map(|t| t.key)
        .collect()
}
