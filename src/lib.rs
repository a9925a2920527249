//! Popularity ranking library for Spotify artists and YouTube videos.
//!
//! This library exchanges client credentials for Spotify bearer tokens, walks
//! paginated search and playlist results, and folds them into ranked lists of
//! artists or videos. It also provides the small derived operations built on
//! top of the same data: comparing the popularity of two artists and
//! summarizing how popular one artist is in a given region.
//!
//! # Modules
//!
//! - `aggregate` - Generic entity aggregation pipeline (count, enrich, filter, rank)
//! - `api` - HTTP API endpoints for the local JSON server
//! - `cli` - Command-line interface implementations
//! - `config` - Configuration management and environment variables
//! - `error` - Error taxonomy shared by all operations
//! - `management` - Token lifecycle and comparison selection state
//! - `popularity` - Two-artist comparison and region popularity summaries
//! - `server` - Local HTTP server exposing the operations as JSON
//! - `session` - Explicit per-caller context passed to every operation
//! - `spotify` - Spotify Web API client implementation
//! - `types` - Data structures and type definitions
//! - `utils` - Utility functions and helpers
//! - `youtube` - YouTube Data API client implementation
//!
//! # Example
//!
//! ```
//! use poprank::{config, session::Session};
//!
//! #[tokio::main]
//! async fn main() -> poprank::Res<()> {
//!     config::load_env().await?;
//!     let mut session = Session::new(config::Settings::from_env()?)?;
//!     let token = session.spotify.tokens.get_token().await?;
//!     Ok(())
//! }
//! ```

pub mod aggregate;
pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod management;
pub mod popularity;
pub mod server;
pub mod session;
pub mod spotify;
pub mod types;
pub mod utils;
pub mod youtube;

/// A convenient Result type alias for top-level glue code.
///
/// Library operations return `Result<_, error::ApiError>`; this alias is used
/// where several unrelated error types meet, such as startup in `main`.
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints an informational message with a blue bullet point.
///
/// # Example
///
/// ```
/// info!("Searching playlists for {}", genre);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Only the binary and the CLI handlers use this macro. Library operations
/// report failures through `ApiError` instead.
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
/// Used for recoverable problems, e.g. a playlist that could not be read
/// while the rest of a ranking continues.
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a dimmed diagnostic line when `POPRANK_DEBUG` is set.
#[macro_export]
macro_rules! debug {
  ($($arg:tt)*) => ({
    if $crate::config::debug_enabled() {
      use colored::Colorize;
      println!("[{}] {}", "~".dimmed(), std::format_args!($($arg)*).to_string().dimmed());
    }
  })
}
