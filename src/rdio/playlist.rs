use serde_json::Value;

use super::RdioSession;
use crate::types::{CreatePlaylistResult, PlaylistRef, PlaylistsResult, RpcEnvelope};

/// Lists the playlists owned by the authenticated user.
pub async fn get_playlists(session: &RdioSession) -> Result<Vec<PlaylistRef>, String> {
    let envelope: RpcEnvelope<PlaylistsResult> = session
        .call("getPlaylists", &[])
        .await
        .map_err(|e| e.to_string())?;

    match envelope.result {
        Some(result) => Ok(result.owned),
        None => Err(envelope
            .message
            .unwrap_or_else(|| "getPlaylists failed".to_string())),
    }
}

/// Deletes a playlist by key. A failure here propagates as fatal: leaving a
/// stale playlist behind would break the one-live-instance invariant.
pub async fn delete_playlist(session: &RdioSession, playlist_key: &str) -> Result<(), String> {
    let envelope: RpcEnvelope<Value> = session
        .call("deletePlaylist", &[("playlist", playlist_key.to_string())])
        .await
        .map_err(|e| e.to_string())?;

    if envelope.is_ok() {
        Ok(())
    } else {
        Err(envelope
            .message
            .unwrap_or_else(|| "deletePlaylist failed".to_string()))
    }
}

/// Creates a published playlist with an empty initial track list.
pub async fn create_playlist(
    session: &RdioSession,
    name: &str,
    description: &str,
) -> Result<String, String> {
    let envelope: RpcEnvelope<CreatePlaylistResult> = session
        .call(
            "createPlaylist",
            &[
                ("name", name.to_string()),
                ("description", description.to_string()),
                ("isPublished", "true".to_string()),
                ("tracks", String::new()),
            ],
        )
        .await
        .map_err(|e| e.to_string())?;

    match envelope.result {
        Some(result) => Ok(result.key),
        None => Err(envelope
            .message
            .unwrap_or_else(|| "createPlaylist failed".to_string())),
    }
}

/// Appends tracks to a playlist in one call and returns the raw result for
/// the caller to print.
pub async fn add_to_playlist(
    session: &RdioSession,
    playlist_key: &str,
    track_keys: &[String],
) -> Result<Value, String> {
    let envelope: RpcEnvelope<Value> = session
        .call(
            "addToPlaylist",
            &[
                ("playlist", playlist_key.to_string()),
                ("tracks", track_keys.join(",")),
            ],
        )
        .await
        .map_err(|e| e.to_string())?;

    match envelope.result {
        Some(result) => Ok(result),
        None => Err(envelope
            .message
            .unwrap_or_else(|| "addToPlaylist failed".to_string())),
    }
}
