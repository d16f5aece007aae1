//! Configuration management for Akshun.
//!
//! This module handles loading and accessing configuration values from
//! environment variables and `.env` files. Developer credentials for the Rdio
//! API are required; the service endpoints have compiled-in defaults that can
//! be overridden for testing against a different host.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. Compiled-in endpoint defaults

use dotenv;
use std::{env, path::PathBuf};

/// Loads environment variables from a `.env` file in the local data directory.
///
/// Creates the necessary directory structure if it doesn't exist and loads
/// environment variables from a `.env` file located in the platform-specific
/// local data directory under `akshun/.env`. This allows users to store
/// credentials without hardcoding sensitive values.
///
/// # Directory Structure
///
/// The function looks for the `.env` file in:
/// - Linux: `~/.local/share/akshun/.env`
/// - macOS: `~/Library/Application Support/akshun/.env`
/// - Windows: `%LOCALAPPDATA%/akshun/.env`
///
/// # Returns
///
/// Returns `Ok(())` if the environment file is successfully loaded or absent
/// (credentials may come straight from the environment), or an error string
/// if directory creation fails or the file exists but cannot be parsed.
pub async fn load_env() -> Result<(), String> {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("akshun/.env");
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    // No file is fine; only an unreadable or malformed one is worth a warning.
    if async_fs::metadata(&path).await.is_err() {
        return Ok(());
    }

    dotenv::from_path(path).map_err(|e| e.to_string())?;
    Ok(())
}

/// Returns the Rdio consumer key for API authentication.
///
/// # Panics
///
/// Panics if the `RDIO_CONSUMER_KEY` environment variable is not set.
pub fn rdio_consumer_key() -> String {
    env::var("RDIO_CONSUMER_KEY").expect("RDIO_CONSUMER_KEY must be set")
}

/// Returns the Rdio consumer secret for API authentication.
///
/// # Panics
///
/// Panics if the `RDIO_CONSUMER_SECRET` environment variable is not set.
///
/// # Security Note
///
/// The consumer secret should be kept confidential and never exposed in logs
/// or version control.
pub fn rdio_consumer_secret() -> String {
    env::var("RDIO_CONSUMER_SECRET").expect("RDIO_CONSUMER_SECRET must be set")
}

/// Returns the Rdio RPC endpoint URL.
pub fn rdio_apiurl() -> String {
    env::var("RDIO_API_URL").unwrap_or_else(|_| "https://api.rdio.com/1/".to_string())
}

/// Returns the endpoint that starts the out-of-band authorization handshake.
pub fn rdio_auth_begin_url() -> String {
    env::var("RDIO_AUTH_BEGIN_URL")
        .unwrap_or_else(|_| "https://api.rdio.com/oauth/request_token".to_string())
}

/// Returns the endpoint that completes the out-of-band authorization handshake.
pub fn rdio_auth_complete_url() -> String {
    env::var("RDIO_AUTH_COMPLETE_URL")
        .unwrap_or_else(|_| "https://api.rdio.com/oauth/access_token".to_string())
}

/// Returns the Seatgeek events endpoint URL.
pub fn seatgeek_events_url() -> String {
    env::var("SEATGEEK_EVENTS_URL")
        .unwrap_or_else(|_| "https://api.seatgeek.com/2/events".to_string())
}

/// Returns the URL of the plain-text public IP echo service used when no
/// location is given on the command line.
pub fn ip_lookup_url() -> String {
    env::var("IP_LOOKUP_URL").unwrap_or_else(|_| "http://whatismyip.akamai.com".to_string())
}
