//! Agenda - a terminal contact book
//!
//! This library provides an in-memory contact list with a multi-screen
//! terminal user interface: add, search, delete and list-with-confirmation
//! screens reached from a main menu over a named-route navigation stack.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod contacts;
pub mod router;
pub mod tui;

/// Result type alias for Agenda operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for Agenda operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Route identifier outside the known route set
    #[error("Unknown route: {0}")]
    UnknownRoute(String),

    /// General I/O error (terminal setup and teardown)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Initialize the Agenda library with logging
///
/// Installs the default `tracing` subscriber on stderr. The TUI binary does
/// not call this, since stderr output would corrupt the alternate screen.
pub fn init() {
    tracing_subscriber::fmt::init();
}
