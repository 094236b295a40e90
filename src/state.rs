//! Pure button state machine
//!
//! The button is the only piece of mutable UI this tool owns. All transitions
//! are expressed as a pure function from (state, event) to (next state,
//! effects), so the controller and the tests can drive it without a live
//! surface attached.

use std::time::Duration;

/// The four discrete labels the button can show
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLabel {
	/// Idle, ready to trigger a sync
	Available,

	/// Hook request in flight
	Busy,

	/// Hook request failed, cooling down before re-enabling
	Failed,

	/// Hook request succeeded, reload pending
	Success,
}

/// Visible state of the button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonState {
	pub label: StatusLabel,
	pub enabled: bool,
}

impl ButtonState {
	/// Initial state at "page load"
	pub fn available() -> Self {
		ButtonState { label: StatusLabel::Available, enabled: true }
	}

	fn busy() -> Self {
		ButtonState { label: StatusLabel::Busy, enabled: false }
	}

	fn failed() -> Self {
		ButtonState { label: StatusLabel::Failed, enabled: false }
	}

	fn success() -> Self {
		ButtonState { label: StatusLabel::Success, enabled: false }
	}
}

impl Default for ButtonState {
	fn default() -> Self {
		ButtonState::available()
	}
}

/// Events that drive the state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonEvent {
	/// The button was activated by the user
	Pressed,

	/// The hook request settled with a 2xx status
	HookSucceeded,

	/// The hook request settled with a non-2xx status or a transport error
	HookFailed,

	/// The failure cooldown timer elapsed
	CooldownElapsed,
}

/// Side effects requested by a transition, executed by the controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
	/// Issue the hook request
	SendRequest,

	/// Reload the surface after the given delay (zero means immediately)
	Reload { delay: Duration },

	/// Re-enable the button after the given delay
	ScheduleCooldown { delay: Duration },
}

/// Fixed delays fed into transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
	/// Delay between showing Success and reloading the surface
	pub reload_delay: Duration,

	/// How long the Failed label stays up before the button re-enables
	pub cooldown: Duration,
}

impl Default for Timing {
	fn default() -> Self {
		Timing { reload_delay: Duration::ZERO, cooldown: Duration::from_secs(3) }
	}
}

/// Apply one event to the current state.
///
/// A press while the button is disabled is a no-op: this is the only
/// re-entrancy guard, mirroring `disabled=true` being set before the request
/// goes out. Unknown (state, event) pairs leave the state untouched.
pub fn step(state: ButtonState, event: ButtonEvent, timing: Timing) -> (ButtonState, Vec<Effect>) {
	match (state.label, event) {
		(StatusLabel::Available, ButtonEvent::Pressed) if state.enabled => {
			(ButtonState::busy(), vec![Effect::SendRequest])
		}
		(StatusLabel::Busy, ButtonEvent::HookSucceeded) => {
			(ButtonState::success(), vec![Effect::Reload { delay: timing.reload_delay }])
		}
		(StatusLabel::Busy, ButtonEvent::HookFailed) => {
			(ButtonState::failed(), vec![Effect::ScheduleCooldown { delay: timing.cooldown }])
		}
		(StatusLabel::Failed, ButtonEvent::CooldownElapsed) => {
			(ButtonState::available(), Vec::new())
		}
		_ => (state, Vec::new()),
	}
}


// vim: ts=4
