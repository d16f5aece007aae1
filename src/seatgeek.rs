//! Seatgeek events API client.
//!
//! One request per run: concerts within a radius of a location, inside a date
//! window, first 400 results. Events past that single page are silently
//! dropped; the provider reporting any failure aborts the run before any
//! Rdio call is made.

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use reqwest::Client;

use crate::{config, types::{EventsResponse, SearchParameters}};

/// Single fixed page size; no pagination beyond this.
pub const EVENTS_PER_PAGE: u32 = 400;

/// Error raised when the events provider reports a failure status or an
/// undecodable body. Always fatal to the run.
#[derive(Debug)]
pub struct ServiceUnavailable;

impl std::fmt::Display for ServiceUnavailable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Seatgeek service unavailable")
    }
}

impl std::error::Error for ServiceUnavailable {}

/// Fetches all concert events matching the search parameters.
///
/// Issues one GET to the events endpoint with the geo center, radius,
/// category filter, date-range filters and page size. Any provider failure
/// maps to [`ServiceUnavailable`]; there is no retry.
pub async fn find_events(search: &SearchParameters) -> Result<EventsResponse, ServiceUnavailable> {
    let pb = ProgressBar::new_spinner();
    pb.set_message("Searching Seatgeek for concerts...");
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );

    let range = search.range();
    let from = search.from.format("%Y-%m-%d").to_string();
    let to = search.to.format("%Y-%m-%d").to_string();
    let per_page = EVENTS_PER_PAGE.to_string();

    let client = Client::new();
    let response = client
        .get(config::seatgeek_events_url())
        .query(&[
            ("geoip", search.location.as_str()),
            ("range", range.as_str()),
            ("taxonomies.name", "concert"),
            ("datetime_utc.gte", from.as_str()),
            ("datetime_utc.lte", to.as_str()),
            ("per_page", per_page.as_str()),
        ])
        .send()
        .await;

    let response = match response {
        Ok(resp) => match resp.error_for_status() {
            Ok(valid_response) => valid_response,
            Err(_) => {
                pb.finish_and_clear();
                return Err(ServiceUnavailable);
            }
        },
        Err(_) => {
            pb.finish_and_clear();
            return Err(ServiceUnavailable);
        }
    };

    let events = response.json::<EventsResponse>().await;
    pb.finish_and_clear();

    events.map_err(|_| ServiceUnavailable)
}
