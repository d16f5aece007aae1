use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Fully resolved search input for one run. Built once by the parameter
/// resolver and immutable afterwards; `to >= from` always holds.
#[derive(Debug, Clone)]
pub struct SearchParameters {
    pub location: String,
    pub range_miles: u32,
    pub from: NaiveDate,
    pub to: NaiveDate,
}

impl SearchParameters {
    /// The radius formatted the way the events API expects it, e.g. "12mi".
    pub fn range(&self) -> String {
        format!("{}mi", self.range_miles)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventsResponse {
    pub meta: EventsMeta,
    pub events: Vec<Event>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventsMeta {
    pub total: u64,
    pub geolocation: Geolocation,
}

/// Geolocation as echoed back by the events provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Geolocation {
    pub postal_code: Option<String>,
    pub range: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    pub title: String,
    pub datetime_local: String,
    pub venue: Venue,
    pub performers: Vec<Performer>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Venue {
    pub name: String,
    pub address: Option<String>,
    pub city: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Performer {
    pub name: String,
}

/// Envelope around every Rdio RPC response. `status` is "ok" on success;
/// anything else is an application-level failure and `result` is absent.
#[derive(Debug, Clone, Deserialize)]
pub struct RpcEnvelope<T> {
    pub status: String,
    pub result: Option<T>,
    pub message: Option<String>,
}

impl<T> RpcEnvelope<T> {
    pub fn is_ok(&self) -> bool {
        self.status == "ok"
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtistSearchResult {
    pub results: Vec<ArtistRef>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtistRef {
    pub key: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackRef {
    pub key: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistsResult {
    pub owned: Vec<PlaylistRef>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistRef {
    pub key: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePlaylistResult {
    pub key: String,
}

/// First leg of the out-of-band authorization handshake: where to send the
/// user, and the request token the completing call must present.
#[derive(Debug, Clone, Deserialize)]
pub struct BeginAuthResult {
    pub authorization_url: String,
    pub request_token: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CompleteAuthResult {
    pub access_token: String,
}
