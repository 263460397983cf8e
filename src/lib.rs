//! Concert Prep Library
//!
//! This library builds a "concert prep" playlist on Spotify: the artist's most
//! popular tracks plus the songs from a fan-curated setlist playlist, minus
//! everything the listener already has in their liked songs or top tracks.
//!
//! # Modules
//!
//! - `api` - HTTP endpoints for login, the OAuth redirect and health checks
//! - `config` - Configuration management and environment variables
//! - `error` - Error types shared by the catalog client and the endpoints
//! - `management` - In-memory login session bookkeeping
//! - `prep` - Setlist resolution and unheard-track calculation
//! - `server` - Local HTTP server wiring
//! - `spotify` - Spotify Web API client implementation
//! - `types` - Data structures and type definitions
//! - `utils` - Utility functions and helpers
//!
//! # Example
//!
//! ```
//! use concertprep::{config, server};
//!
//! #[tokio::main]
//! async fn main() -> concertprep::Res<()> {
//!     config::load_env().await?;
//!     let settings = config::Settings::from_env()?;
//!     server::start_api_server(settings, &config::server_addr()).await
//! }
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod management;
pub mod prep;
pub mod server;
pub mod spotify;
pub mod types;
pub mod utils;

/// A convenient Result type alias for operations that may fail.
///
/// Used for process plumbing (environment loading, binding the listener)
/// where any error simply ends the program.
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints an informational message with a blue bullet point.
///
/// # Example
///
/// ```
/// info!("Listening on {}", addr);
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
/// success!("Created playlist {}", url);
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
/// Only meant for startup failures. Request handlers report errors through
/// [`error::ApiError`] and never call this macro.
///
/// # Example
///
/// ```
/// error!("Missing required environment variable: {}", var_name);
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
/// Used for every downstream failure that is reported back to the browser,
/// so the full status and body end up in the server console.
///
/// # Example
///
/// ```
/// warning!("Error fetching user profile: {}", e);
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
