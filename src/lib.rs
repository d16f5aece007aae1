//! Akshun CLI Library
//!
//! This library implements a one-shot workflow that finds live-music events
//! near a location via the Seatgeek API, matches the performers against the
//! Rdio catalog, and rebuilds a named Rdio playlist with sample tracks for
//! those performers.
//!
//! # Modules
//!
//! - `config` - Configuration management and environment variables
//! - `params` - Resolution of location/date search parameters
//! - `rdio` - Rdio RPC client (session, catalog lookups, playlists)
//! - `seatgeek` - Seatgeek events API client
//! - `types` - Data structures and type definitions
//! - `workflow` - The end-to-end run, phase by phase
//!
//! # Example
//!
//! ```
//! use akshun::{config, params, workflow};
//!
//! #[tokio::main]
//! async fn main() -> akshun::Res<()> {
//!     let _ = config::load_env().await;
//!     let search = params::resolve(None, 12, None, 7).await?;
//!     workflow::run(search).await
//! }
//! ```

pub mod config;
pub mod params;
pub mod rdio;
pub mod seatgeek;
pub mod types;
pub mod workflow;

/// A convenient Result type alias for operations that may fail.
///
/// Provides a standard error handling pattern throughout the application
/// using a boxed dynamic error trait object. This allows for flexible
/// error handling while maintaining Send + Sync bounds for async contexts.
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints an informational message with a blue bullet point.
///
/// # Example
///
/// ```
/// info!("Creating Playlist");
/// info!("Found {} events", count);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
///
/// # Example
///
/// ```
/// success!("Added {} tracks to the playlist", count);
/// ```
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// This macro will cause the program to exit immediately after printing
/// the error message. It should only be used for fatal errors where
/// recovery is not possible.
///
/// # Example
///
/// ```
/// error!("Seatgeek service unavailable");
/// // Program exits here - code after this will not execute
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// Used for recoverable issues or important information that users should
/// notice without terminating the run.
///
/// # Example
///
/// ```
/// warning!("Failed to open browser. Please visit the URL manually.");
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
