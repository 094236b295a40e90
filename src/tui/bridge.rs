//! Bridge between the button controller and the TUI
//!
//! Translates surface callbacks to TUI events sent over a broadcast channel.

use tokio::sync::broadcast;

use super::event::TriggerEvent;
use crate::state::ButtonState;
use crate::surface::ButtonSurface;

/// Surface implementation that forwards to the TUI event loop
#[derive(Clone)]
pub struct ChannelSurface {
	event_tx: broadcast::Sender<TriggerEvent>,
}

impl ChannelSurface {
	/// Create a new bridge with an event sender
	pub fn new(event_tx: broadcast::Sender<TriggerEvent>) -> Self {
		ChannelSurface { event_tx }
	}

	/// Send an event to the TUI (ignores errors if no receivers)
	pub fn send(&self, event: TriggerEvent) {
		// Ignore send errors - means no receivers listening (which is ok)
		let _ = self.event_tx.send(event);
	}
}

impl ButtonSurface for ChannelSurface {
	fn apply(&mut self, state: &ButtonState) {
		self.send(TriggerEvent::StateChanged { state: *state });
	}

	fn reload(&mut self) {
		self.send(TriggerEvent::ReloadRequested);
	}
}

// vim: ts=4
