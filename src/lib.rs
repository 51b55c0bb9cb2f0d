//! HyperSerp: terminal search client for a HyperSerp search backend.
//!
//! A single-screen search UI for the terminal: type a query, press Enter,
//! and results render below the input. Escape clears the query.
//!
//! # Architecture
//!
//! The UI is split into small, independently testable pieces:
//! - **State** (`ui::state`): query text, result list, and the loading /
//!   has-searched flags; the visible state is derived, never stored
//! - **Dispatch** (`ui::dispatch`): runs each search on a background tokio
//!   task and delivers the outcome over an mpsc channel, so the event loop
//!   never blocks on the network
//! - **View** (`ui::view`): crossterm rendering over any `io::Write`
//! - **Controller** (`ui::controller`): raw-mode lifecycle and the key
//!   event loop
//!
//! The HTTP side lives in the `hyperserp-client` crate: one GET per search,
//! with every failure mode collapsed to an empty result list.

pub mod config;
pub mod error;
pub mod paths;
pub mod ui;

pub use config::AppConfig;
pub use error::{AppError, Result};
