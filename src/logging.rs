//! Logging prelude module for convenient access to tracing macros.
//!
//! This module provides convenient re-exports of common tracing macros
//! to reduce verbosity and maintain consistency across the codebase.
//!
//! # Usage
//!
//! ```ignore
//! use crate::logging::*;
//!
//! info!("This is an info message");
//! warn!("This is a warning");
//! error!("An error occurred");
//! debug!("Debug information");
//! ```

pub use tracing::{debug, error, info, warn};

/// Initialize the tracing subscriber with environment filter support.
///
/// By default, logs at INFO level and above are displayed. Control the log
/// level with the `RUST_LOG` environment variable:
///
/// ```bash
/// RUST_LOG=debug synctrig trigger
/// RUST_LOG=synctrig=trace synctrig trigger
/// ```
pub fn init_tracing() {
	tracing_subscriber::fmt()
		.with_env_filter(
			tracing_subscriber::EnvFilter::try_from_default_env()
				.unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
		)
		.with_writer(std::io::stderr)
		.init();
}

/// Initialize a tracing subscriber that forwards events into the TUI's
/// broadcast channel instead of writing to stderr, which would corrupt the
/// alternate screen.
#[cfg(feature = "tui")]
pub fn init_tui_tracing(event_tx: tokio::sync::broadcast::Sender<crate::tui::TriggerEvent>) {
	use tracing_subscriber::layer::SubscriberExt;
	use tracing_subscriber::util::SubscriberInitExt;

	let filter = tracing_subscriber::EnvFilter::try_from_default_env()
		.unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

	// Ignore the error if a subscriber is already installed (tests)
	let _ = tracing_subscriber::registry()
		.with(filter)
		.with(tui_layer::TuiLogLayer { event_tx })
		.try_init();
}

#[cfg(feature = "tui")]
mod tui_layer {
	use tokio::sync::broadcast;
	use tracing::field::{Field, Visit};
	use tracing_subscriber::layer::Context;
	use tracing_subscriber::Layer;

	use crate::tui::{LogLevel, TriggerEvent};

	/// Layer that turns tracing events into TUI log entries
	pub struct TuiLogLayer {
		pub event_tx: broadcast::Sender<TriggerEvent>,
	}

	impl<S: tracing::Subscriber> Layer<S> for TuiLogLayer {
		fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
			let mut visitor = MessageVisitor::default();
			event.record(&mut visitor);

			let level = match *event.metadata().level() {
				tracing::Level::ERROR => LogLevel::Error,
				tracing::Level::WARN => LogLevel::Warning,
				tracing::Level::INFO => LogLevel::Info,
				_ => LogLevel::Debug,
			};

			// Ignore send errors - means no receivers listening (which is ok)
			let _ = self.event_tx.send(TriggerEvent::Log { level, message: visitor.message });
		}
	}

	#[derive(Default)]
	struct MessageVisitor {
		message: String,
	}

	impl Visit for MessageVisitor {
		fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
			if field.name() == "message" {
				self.message = format!("{:?}", value);
			}
		}

		fn record_str(&mut self, field: &Field, value: &str) {
			if field.name() == "message" {
				self.message = value.to_string();
			}
		}
	}
}

// vim: ts=4
