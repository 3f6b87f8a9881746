//! Weekly Top 50 chart history library.
//!
//! This library maps picked dates onto weekly chart publications, fetches the
//! ranked tracks of a week from a document store and saves a week as a
//! Spotify playlist. The `chartlist` binary is a thin presentation layer on
//! top of it.
//!
//! # Modules
//!
//! - `app` - Combined operations used by the presentation layer
//! - `calendar` - Publication and display date arithmetic
//! - `cli` - Command-line interface implementations
//! - `config` - Configuration management and environment variables
//! - `error` - Error kinds shared by every remote operation
//! - `management` - Access token handling
//! - `playlist` - Playlist save state machine
//! - `repository` - Chart lookup with degraded entries
//! - `session` - Explicit sessions for the remote services
//! - `spotify` - Spotify Web API client implementation
//! - `state` - Application state, actions and the snapshot store
//! - `store` - Chart document store access
//! - `types` - Data structures and type definitions
//!
//! # Example
//!
//! ```
//! use chartlist::calendar;
//! use chrono::NaiveDate;
//!
//! let picked = NaiveDate::from_ymd_opt(2021, 3, 15).unwrap();
//! let today = NaiveDate::from_ymd_opt(2021, 3, 16).unwrap();
//! let week = calendar::snap_to_publication_date(picked, today);
//! assert_eq!(calendar::to_display_date(week), "2021-03-13");
//! ```

pub mod app;
pub mod calendar;
pub mod cli;
pub mod config;
pub mod error;
pub mod http;
pub mod management;
pub mod playlist;
pub mod repository;
pub mod session;
pub mod spotify;
pub mod state;
pub mod store;
pub mod types;

pub use error::{ChartError, Result};

/// Prints an informational message with a blue bullet point.
///
/// Creates a formatted output line with a distinctive blue "o" indicator
/// followed by the provided message. Used for general information and
/// status updates throughout the application.
///
/// # Arguments
///
/// The macro accepts the same arguments as `println!`, supporting format
/// strings and interpolation.
///
/// # Example
///
/// ```
/// info!("Fetching chart...");
/// info!("Found {} entries", count);
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
/// Creates a formatted output line with a green "✓" indicator to signify
/// successful completion of operations. Used to provide positive feedback
/// when operations complete successfully.
///
/// # Arguments
///
/// The macro accepts the same arguments as `println!`, supporting format
/// strings and interpolation.
///
/// # Example
///
/// ```
/// success!("Playlist created");
/// success!("Added {} tracks", count);
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
/// Creates a formatted error output with a red "!" indicator and immediately
/// terminates the program with exit code 1. Used for unrecoverable errors
/// that require immediate program termination.
///
/// # Arguments
///
/// The macro accepts the same arguments as `println!`, supporting format
/// strings and interpolation.
///
/// # Behavior
///
/// This macro will cause the program to exit immediately after printing
/// the error message. It should only be used for fatal errors where
/// recovery is not possible.
///
/// # Example
///
/// ```
/// error!("Failed to load configuration");
/// error!("Invalid date: {}", input);
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
/// Creates a formatted output line with a yellow "!" indicator to highlight
/// potential issues or important notices that don't require program termination.
/// Used for recoverable issues or important information that users should notice.
///
/// # Arguments
///
/// The macro accepts the same arguments as `println!`, supporting format
/// strings and interpolation.
///
/// # Example
///
/// ```
/// warning!("Chart unavailable");
/// warning!("{} of {} tracks are not on Spotify", missing, total);
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
