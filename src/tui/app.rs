//! Main TUI application and event loop

use crossterm::{
	event::{self, DisableMouseCapture, EnableMouseCapture, Event as CEvent},
	execute,
	terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::error::Error;
use std::io::{self, Write};
use tokio::sync::{broadcast, mpsc};

use crate::config::Config;
use crate::controller::{PressOutcome, SyncButtonController};

use super::{
	bridge::ChannelSurface,
	event::{TickGenerator, TriggerEvent},
	state::{AppState, LogLevel, ViewType},
	views,
};

/// RAII guard for TUI terminal state
/// Ensures terminal is properly cleaned up even if panic occurs or signal is received
struct TuiGuard;

impl TuiGuard {
	/// Setup terminal in raw mode with alternate screen
	fn new() -> Result<Self, Box<dyn Error>> {
		enable_raw_mode()?;
		Ok(TuiGuard)
	}
}

impl Drop for TuiGuard {
	fn drop(&mut self) {
		// Restore terminal even if panic occurs or signal is received

		// Disable raw mode
		let _ = disable_raw_mode();

		// Restore alternate screen and mouse
		let mut stdout = io::stdout();
		let _ = execute!(stdout, LeaveAlternateScreen, DisableMouseCapture);

		// Show cursor if it's hidden
		let _ = write!(io::stdout(), "\x1B[?25h");
		let _ = io::stdout().flush();
	}
}

/// Commands sent from the TUI to the controller task
#[derive(Debug, Clone)]
pub enum TuiCommand {
	Press,
}

/// Main TUI application
pub struct TuiApp {
	state: AppState,
	event_rx: broadcast::Receiver<TriggerEvent>,
	command_tx: mpsc::Sender<TuiCommand>,
}

impl TuiApp {
	/// Create a new TUI application
	pub fn new(
		config: Config,
		event_rx: broadcast::Receiver<TriggerEvent>,
		command_tx: mpsc::Sender<TuiCommand>,
	) -> Self {
		TuiApp { state: AppState::new(config), event_rx, command_tx }
	}

	/// Run the TUI application event loop
	pub async fn run<B: ratatui::backend::Backend>(
		&mut self,
		terminal: &mut Terminal<B>,
	) -> Result<(), Box<dyn Error>> {
		let tick_gen = TickGenerator::new(30);

		loop {
			// Increment animation frame for the Busy spinner
			self.state.animation_frame = self.state.animation_frame.wrapping_add(1);

			// Render current state
			terminal.draw(|f| self.render(f))?;

			// Wait for next event with timeout
			// Use biased to prioritize ticks for animation
			tokio::select! {
				biased;

				// Tick for animations - check this FIRST to ensure animation continues
				_ = tick_gen.next_tick() => {
					// Animation frame already incremented at top of loop
				}

				// Check for controller events (broadcast)
				result = self.event_rx.recv() => {
					match result {
						Ok(trigger_event) => {
							self.handle_trigger_event(trigger_event);
						}
						Err(broadcast::error::RecvError::Lagged(_)) => {
							// Receiver lagged, drop old messages
						}
						Err(broadcast::error::RecvError::Closed) => {
							// Channel closed, controller task stopped
							break;
						}
					}
				}

				// Check for terminal input
				result = async {
					if event::poll(std::time::Duration::from_millis(10)).unwrap_or(false) {
						event::read().ok()
					} else {
						None
					}
				} => {
					if let Some(cevent) = result {
						match cevent {
							CEvent::Key(key) => self.handle_key(key).await?,
							CEvent::Resize(_, _) => {
								// Terminal resized, will redraw automatically
							}
							_ => {}
						}
					}
				}
			}

			// Check if should quit
			if self.state.should_quit {
				break;
			}
		}

		Ok(())
	}

	/// Handle keyboard input
	async fn handle_key(&mut self, key: crossterm::event::KeyEvent) -> Result<(), Box<dyn Error>> {
		use crossterm::event::{KeyCode, KeyModifiers};

		// Global shortcuts
		match (key.code, key.modifiers) {
			(KeyCode::Char('c'), KeyModifiers::CONTROL)
			| (KeyCode::Char('q'), KeyModifiers::NONE) => {
				self.state.should_quit = true;
				return Ok(());
			}
			(KeyCode::Char('?'), KeyModifiers::NONE) => {
				self.state.change_view(ViewType::Help);
				return Ok(());
			}
			_ => {}
		}

		// View-specific handling
		match self.state.current_view {
			ViewType::Trigger => {
				views::trigger::handle_key(&mut self.state, key, &self.command_tx).await?
			}
			ViewType::Help => views::help::handle_key(&mut self.state, key),
		}

		Ok(())
	}

	/// Handle events from the controller task
	fn handle_trigger_event(&mut self, event: TriggerEvent) {
		match event {
			TriggerEvent::StateChanged { state } => {
				self.state.button = state;
			}

			TriggerEvent::ReloadRequested => {
				self.state.reload();
			}

			TriggerEvent::PressFinished { outcome } => match outcome {
				PressOutcome::Synced => {
					self.state.stats.syncs += 1;
				}
				PressOutcome::Failed => {
					self.state.stats.failures += 1;
					self.state.add_log(
						LogLevel::Warning,
						"Sync failed - button re-enabled for retry".to_string(),
					);
				}
				PressOutcome::Ignored => {}
			},

			TriggerEvent::Log { level, message } => {
				self.state.add_log(level, message);
			}
		}
	}

	/// Render the current view
	fn render(&mut self, frame: &mut ratatui::Frame) {
		match self.state.current_view {
			ViewType::Trigger => views::trigger::render(frame, &self.state),
			ViewType::Help => views::help::render(frame, &self.state),
		}
	}
}

/// Spawn the long-lived controller task. It owns the controller and serializes
/// presses: at most one trigger is ever in flight.
fn spawn_controller(
	config: &Config,
	event_tx: broadcast::Sender<TriggerEvent>,
) -> mpsc::Sender<TuiCommand> {
	let (command_tx, mut command_rx) = mpsc::channel(8);
	let config = config.clone();

	tokio::spawn(async move {
		let surface = ChannelSurface::new(event_tx.clone());
		let mut controller = SyncButtonController::from_config(&config, surface);

		while let Some(command) = command_rx.recv().await {
			match command {
				TuiCommand::Press => {
					let outcome = controller.press().await;
					let _ = event_tx.send(TriggerEvent::PressFinished { outcome });

					if outcome == PressOutcome::Synced {
						// The reload produced a fresh page; the controller
						// starts over from Available like everything else
						controller = SyncButtonController::from_config(
							&config,
							ChannelSurface::new(event_tx.clone()),
						);
					}
				}
			}
		}
	});

	command_tx
}

/// Entry point for TUI mode
pub async fn run_tui(config: Config) -> Result<(), Box<dyn Error>> {
	// Setup terminal with automatic cleanup on drop
	// This guard ensures the terminal is restored even if panic occurs
	let _tui_guard = TuiGuard::new()?;

	// Create broadcast channel for controller events FIRST
	// This must happen before initializing tracing
	let (event_tx, event_rx) = broadcast::channel(100);

	// Initialize tracing subscriber that forwards to TUI
	crate::logging::init_tui_tracing(event_tx.clone());

	// Setup alternate screen and mouse capture
	let mut stdout = io::stdout();
	execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
	let backend = CrosstermBackend::new(stdout);
	let mut terminal = Terminal::new(backend)?;

	// Spawn the controller task and create the TUI app
	let command_tx = spawn_controller(&config, event_tx.clone());
	let mut app = TuiApp::new(config, event_rx, command_tx);

	// Run TUI event loop
	// Terminal cleanup (raw mode, alternate screen) happens automatically when _tui_guard drops
	app.run(&mut terminal).await
}

// vim: ts=4
