//! TUI frontend for synctrig
//!
//! This module is only compiled when the 'tui' feature is enabled.
//! It renders the sync button as a focusable terminal control, activated
//! with Enter, using the ratatui framework.

mod app;
mod bridge;
mod event;
mod state;
mod views;

pub use app::run_tui;
pub use event::TriggerEvent;
pub use state::LogLevel;

// vim: ts=4
