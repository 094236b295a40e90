//! # synctrig - Remote Sync-Hook Trigger
//!
//! synctrig binds a single button to a server-side database synchronization
//! hook. Activating the button issues one `GET` to the hook, reflects
//! progress through four discrete button states (Available, Busy, Failed,
//! Success) and reloads the owning surface on success.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use synctrig::config::Config;
//! use synctrig::controller::{PressOutcome, SyncButtonController};
//! use synctrig::surface::ConsoleSurface;
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = Config::default();
//!     let surface = ConsoleSurface::new(config.labels.clone());
//!     let mut controller = SyncButtonController::from_config(&config, surface);
//!     match controller.press().await {
//!         PressOutcome::Synced => println!("database synchronized"),
//!         outcome => println!("sync did not complete: {:?}", outcome),
//!     }
//! }
//! ```

pub mod config;
pub mod controller;
pub mod error;
pub mod hook;
pub mod logging;
pub mod state;
pub mod surface;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export commonly used types and functions
pub use config::{Config, Labels};
pub use controller::{PressOutcome, SyncButtonController};
pub use error::TriggerError;
pub use hook::HookClient;
pub use state::{ButtonEvent, ButtonState, Effect, StatusLabel, Timing};

// vim: ts=4
