//! Event types and handling for the TUI

use std::time::Duration;

use super::state::LogLevel;
use crate::controller::PressOutcome;
use crate::state::ButtonState;

/// Events from the controller bridge, delivered over a broadcast channel
#[derive(Debug, Clone)]
pub enum TriggerEvent {
	/// The button state changed
	StateChanged { state: ButtonState },

	/// The surface should reload, discarding session state
	ReloadRequested,

	/// A press ran to completion
	PressFinished { outcome: PressOutcome },

	/// Log line forwarded from tracing
	Log { level: LogLevel, message: String },
}

/// Generates ticks for UI animations
pub struct TickGenerator {
	interval: Duration,
}

impl TickGenerator {
	/// Create a new tick generator with target FPS
	pub fn new(fps: u32) -> Self {
		let interval = Duration::from_millis(1000 / fps.max(1) as u64);
		TickGenerator { interval }
	}

	/// Wait for next tick
	pub async fn next_tick(&self) {
		tokio::time::sleep(self.interval).await;
	}
}


// vim: ts=4
