/// End-to-end controller flow tests
/// Drives a SyncButtonController against a wiremock server and asserts the
/// exact surface sequences from the original button behavior:
///   200  -> [Busy, Success], then reload
///   500  -> [Busy, Failed, Available] with enabled [false, false, true]
///   transport error -> identical to 500
use std::sync::{Arc, Mutex};
use std::time::Duration;

use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use synctrig::controller::{PressOutcome, SyncButtonController};
use synctrig::hook::{HookClient, DEFAULT_HOOK_PATH};
use synctrig::state::{ButtonState, StatusLabel, Timing};
use synctrig::surface::ButtonSurface;

/// What the surface observed, in order
#[derive(Debug, Clone, PartialEq, Eq)]
enum Observed {
	State(StatusLabel, bool),
	Reload,
}

/// Surface that records every callback for later assertions
#[derive(Clone)]
struct RecordingSurface {
	observed: Arc<Mutex<Vec<Observed>>>,
}

impl RecordingSurface {
	fn new() -> Self {
		RecordingSurface { observed: Arc::new(Mutex::new(Vec::new())) }
	}

	fn observed(&self) -> Vec<Observed> {
		self.observed.lock().expect("observation lock").clone()
	}
}

impl ButtonSurface for RecordingSurface {
	fn apply(&mut self, state: &ButtonState) {
		self.observed.lock().expect("observation lock").push(Observed::State(state.label, state.enabled));
	}

	fn reload(&mut self) {
		self.observed.lock().expect("observation lock").push(Observed::Reload);
	}
}

/// Short timings so the tests do not sit through real cooldowns
fn fast_timing() -> Timing {
	Timing { reload_delay: Duration::ZERO, cooldown: Duration::from_millis(50) }
}

async fn mock_hook(status: u16) -> MockServer {
	let server = MockServer::start().await;
	Mock::given(method("GET"))
		.and(path(DEFAULT_HOOK_PATH))
		.respond_with(ResponseTemplate::new(status))
		.mount(&server)
		.await;
	server
}

#[tokio::test]
async fn test_scenario_success_busy_then_success_then_reload() {
	let server = mock_hook(200).await;
	let surface = RecordingSurface::new();
	let client = HookClient::new(&server.uri());
	let mut controller = SyncButtonController::new(client, fast_timing(), surface.clone());

	let outcome = controller.press().await;

	assert_eq!(outcome, PressOutcome::Synced);
	assert_eq!(
		surface.observed(),
		vec![
			Observed::State(StatusLabel::Busy, false),
			Observed::State(StatusLabel::Success, false),
			Observed::Reload,
		]
	);
}

#[tokio::test]
async fn test_reload_waits_for_configured_delay() {
	let server = mock_hook(200).await;
	let surface = RecordingSurface::new();
	let client = HookClient::new(&server.uri());
	let timing = Timing { reload_delay: Duration::from_millis(100), cooldown: Duration::from_millis(50) };
	let mut controller = SyncButtonController::new(client, timing, surface.clone());

	let started = std::time::Instant::now();
	controller.press().await;
	let elapsed = started.elapsed();

	// Reload still follows the Success display, never precedes it
	assert_eq!(
		surface.observed().last(),
		Some(&Observed::Reload),
	);
	assert!(elapsed >= Duration::from_millis(100), "reload came too early: {:?}", elapsed);
}

#[tokio::test]
async fn test_scenario_server_error_busy_failed_available() {
	let server = mock_hook(500).await;
	let surface = RecordingSurface::new();
	let client = HookClient::new(&server.uri());
	let mut controller = SyncButtonController::new(client, fast_timing(), surface.clone());

	let outcome = controller.press().await;

	assert_eq!(outcome, PressOutcome::Failed);
	assert_eq!(
		surface.observed(),
		vec![
			Observed::State(StatusLabel::Busy, false),
			Observed::State(StatusLabel::Failed, false),
			Observed::State(StatusLabel::Available, true),
		]
	);
	assert_eq!(controller.state(), ButtonState::available());
}

#[tokio::test]
async fn test_scenario_transport_error_matches_server_error() {
	// Nothing listens on the discard port
	let surface = RecordingSurface::new();
	let client = HookClient::new("http://127.0.0.1:9");
	let mut controller = SyncButtonController::new(client, fast_timing(), surface.clone());

	let outcome = controller.press().await;

	assert_eq!(outcome, PressOutcome::Failed);
	assert_eq!(
		surface.observed(),
		vec![
			Observed::State(StatusLabel::Busy, false),
			Observed::State(StatusLabel::Failed, false),
			Observed::State(StatusLabel::Available, true),
		]
	);
}

#[tokio::test]
async fn test_failed_cooldown_takes_configured_time() {
	let server = mock_hook(503).await;
	let surface = RecordingSurface::new();
	let client = HookClient::new(&server.uri());
	let timing = Timing { reload_delay: Duration::ZERO, cooldown: Duration::from_millis(150) };
	let mut controller = SyncButtonController::new(client, timing, surface.clone());

	let started = std::time::Instant::now();
	controller.press().await;
	let elapsed = started.elapsed();

	assert!(elapsed >= Duration::from_millis(150), "cooldown cut short: {:?}", elapsed);
	assert!(controller.state().enabled);
}

#[tokio::test]
async fn test_retry_cycles_behave_identically() {
	let server = mock_hook(500).await;
	let surface = RecordingSurface::new();
	let client = HookClient::new(&server.uri());
	let mut controller = SyncButtonController::new(client, fast_timing(), surface.clone());

	assert_eq!(controller.press().await, PressOutcome::Failed);
	let first_cycle = surface.observed();

	assert_eq!(controller.press().await, PressOutcome::Failed);
	let both_cycles = surface.observed();

	// The second cycle is an exact repeat of the first
	assert_eq!(both_cycles.len(), first_cycle.len() * 2);
	assert_eq!(&both_cycles[first_cycle.len()..], &first_cycle[..]);
}

#[tokio::test]
async fn test_failure_then_success_after_retry() {
	// First attempt hits a failing hook, the retry a healthy one
	let failing = mock_hook(500).await;
	let healthy = mock_hook(200).await;

	let surface = RecordingSurface::new();
	let client = HookClient::new(&failing.uri());
	let mut controller = SyncButtonController::new(client, fast_timing(), surface.clone());
	assert_eq!(controller.press().await, PressOutcome::Failed);

	let surface2 = RecordingSurface::new();
	let client = HookClient::new(&healthy.uri());
	let mut controller = SyncButtonController::new(client, fast_timing(), surface2.clone());
	assert_eq!(controller.press().await, PressOutcome::Synced);
	assert_eq!(surface2.observed().last(), Some(&Observed::Reload));
}

// vim: ts=4
