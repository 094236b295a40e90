//! Button controller driving the trigger flow
//!
//! Owns the button state, the hook client and the surface handle. A press
//! runs the whole flow to one of its terminal branches: Success followed by
//! a surface reload, or Failed followed by a timed reset to Available.

use std::collections::VecDeque;
use tokio::time::sleep;

use crate::config::Config;
use crate::hook::HookClient;
use crate::logging::{error, info};
use crate::state::{step, ButtonEvent, ButtonState, Effect, Timing};
use crate::surface::ButtonSurface;

/// Outcome of a single button press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PressOutcome {
	/// The button was disabled; nothing happened
	Ignored,

	/// The hook reported success and the surface was reloaded
	Synced,

	/// The hook failed; the button is Available again after the cooldown
	Failed,
}

/// Controller binding a button surface to the sync hook
pub struct SyncButtonController<S: ButtonSurface> {
	state: ButtonState,
	timing: Timing,
	client: HookClient,
	surface: S,
}

impl<S: ButtonSurface> SyncButtonController<S> {
	/// Create a controller with explicit parts
	pub fn new(client: HookClient, timing: Timing, surface: S) -> Self {
		SyncButtonController { state: ButtonState::available(), timing, client, surface }
	}

	/// Create a controller from a loaded configuration
	pub fn from_config(config: &Config, surface: S) -> Self {
		let client = HookClient::new(&config.base_url).with_hook_path(&config.hook_path);
		SyncButtonController::new(client, config.timing(), surface)
	}

	/// Current button state
	pub fn state(&self) -> ButtonState {
		self.state
	}

	/// Handle a button activation.
	///
	/// Applies Busy to the surface before any network activity, issues the
	/// hook request, and runs the resulting effect chain to completion.
	/// A press while the button is disabled is ignored.
	pub async fn press(&mut self) -> PressOutcome {
		let (next, effects) = step(self.state, ButtonEvent::Pressed, self.timing);
		if effects.is_empty() {
			info!("Press ignored: button is disabled");
			return PressOutcome::Ignored;
		}
		self.apply(next);

		let mut outcome = PressOutcome::Failed;
		let mut pending: VecDeque<Effect> = effects.into();

		while let Some(effect) = pending.pop_front() {
			match effect {
				Effect::SendRequest => {
					let event = match self.client.trigger().await {
						Ok(()) => {
							info!("Sync hook succeeded");
							outcome = PressOutcome::Synced;
							ButtonEvent::HookSucceeded
						}
						Err(e) => {
							error!("{}", e);
							ButtonEvent::HookFailed
						}
					};
					self.feed(event, &mut pending);
				}
				Effect::Reload { delay } => {
					if !delay.is_zero() {
						sleep(delay).await;
					}
					self.surface.reload();
				}
				Effect::ScheduleCooldown { delay } => {
					sleep(delay).await;
					self.feed(ButtonEvent::CooldownElapsed, &mut pending);
				}
			}
		}

		outcome
	}

	fn feed(&mut self, event: ButtonEvent, pending: &mut VecDeque<Effect>) {
		let (next, effects) = step(self.state, event, self.timing);
		self.apply(next);
		pending.extend(effects);
	}

	fn apply(&mut self, next: ButtonState) {
		if next != self.state {
			self.state = next;
			self.surface.apply(&self.state);
		}
	}

	#[cfg(test)]
	pub(crate) fn set_state(&mut self, state: ButtonState) {
		self.state = state;
	}
}


// vim: ts=4
