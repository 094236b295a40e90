//! Surface traits for rendering button state
//!
//! The controller never touches a concrete UI. Whatever owns the button
//! implements `ButtonSurface`: the one-shot CLI logs transitions, the TUI
//! forwards them over a channel, tests record them.

use crate::config::Labels;
use crate::logging::info;
use crate::state::ButtonState;

/// The UI seam: receives state transitions and the reload effect
pub trait ButtonSurface: Send {
	/// Apply a new button state to the surface
	fn apply(&mut self, state: &ButtonState);

	/// Reload the surface. The web original reloads the whole page here,
	/// discarding all client-side state; implementations do the closest
	/// equivalent (the TUI resets its session, the CLI just returns).
	fn reload(&mut self);
}

/// Surface for one-shot CLI use: renders transitions as log lines
pub struct ConsoleSurface {
	labels: Labels,
}

impl ConsoleSurface {
	pub fn new(labels: Labels) -> Self {
		ConsoleSurface { labels }
	}
}

impl ButtonSurface for ConsoleSurface {
	fn apply(&mut self, state: &ButtonState) {
		info!("{}", self.labels.text(state.label));
	}

	fn reload(&mut self) {
		info!("Reloading");
	}
}

/// Surface that ignores everything (headless use)
pub struct NullSurface;

impl ButtonSurface for NullSurface {
	fn apply(&mut self, _state: &ButtonState) {}

	fn reload(&mut self) {}
}

// vim: ts=4
