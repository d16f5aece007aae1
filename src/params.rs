use chrono::{Duration, Local, NaiveDate};
use chrono_english::{Dialect, parse_date_string};
use reqwest::Client;

use crate::{Res, config, types::SearchParameters};

/// Parses a free-form date string the way a human would write it.
///
/// Accepts anything the natural-language parser understands ("today",
/// "next friday", "2024-01-01", "March 5"). A parse failure is a
/// configuration error and is propagated; there is no silent fallback.
pub fn parse_from_date(input: &str) -> Result<NaiveDate, String> {
    parse_date_string(input, Local::now(), Dialect::Us)
        .map(|dt| dt.date_naive())
        .map_err(|e| format!("Cannot parse from-date '{}': {}", input, e))
}

/// Computes the end of the search window from its start.
pub fn end_of_window(from: NaiveDate, period_days: u32) -> NaiveDate {
    from + Duration::days(period_days as i64)
}

/// Resolves all search parameters from CLI input and defaults.
///
/// Defaults: location = the caller's public IP (one request to the IP echo
/// service), from-date = today, window = `period_days` days after the
/// from-date. The IP lookup is the only network call this function makes,
/// and only when no location was given.
pub async fn resolve(
    location: Option<String>,
    range_miles: u32,
    from: Option<String>,
    period_days: u32,
) -> Res<SearchParameters> {
    // Parse the date first: a bad from-date must fail before any network call.
    let from = match from {
        Some(s) => parse_from_date(&s)?,
        None => Local::now().date_naive(),
    };
    let to = end_of_window(from, period_days);

    let location = match location {
        Some(l) => l,
        None => public_ip().await?,
    };

    Ok(SearchParameters {
        location,
        range_miles,
        from,
        to,
    })
}

/// Fetches the caller's public IP as plain text.
async fn public_ip() -> Res<String> {
    let client = Client::new();
    let response = client
        .get(config::ip_lookup_url())
        .send()
        .await?
        .error_for_status()?;

    Ok(response.text().await?.trim().to_string())
}
