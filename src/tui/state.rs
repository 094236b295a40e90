//! Application state management

use std::collections::VecDeque;

use crate::config::Config;
use crate::state::ButtonState;

/// Maximum number of log entries kept in the ring buffer
const MAX_LOGS: usize = 200;

/// Available view types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewType {
	Trigger,
	Help,
}

/// Severity of a log entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
	Debug,
	Info,
	Success,
	Warning,
	Error,
}

/// A single log line shown in the log panel
#[derive(Debug, Clone)]
pub struct LogEntry {
	pub level: LogLevel,
	pub message: String,
}

/// Per-session statistics, discarded on reload like the web page's
/// client-side state
#[derive(Debug, Clone, Copy, Default)]
pub struct SessionStats {
	pub presses: u64,
	pub syncs: u64,
	pub failures: u64,
}

/// Main application state
pub struct AppState {
	/// Current view being displayed
	pub current_view: ViewType,

	/// Mirrored button state (the controller owns the authoritative copy)
	pub button: ButtonState,

	/// Session statistics
	pub stats: SessionStats,

	/// Configuration
	pub config: Config,

	/// Log entries (ring buffer style)
	pub logs: VecDeque<LogEntry>,

	/// Animation frame counter
	pub animation_frame: u64,

	/// How many reloads happened this run
	pub reloads: u64,

	/// Should the application quit?
	pub should_quit: bool,
}

impl AppState {
	/// Create the initial state ("page load")
	pub fn new(config: Config) -> Self {
		AppState {
			current_view: ViewType::Trigger,
			button: ButtonState::available(),
			stats: SessionStats::default(),
			config,
			logs: VecDeque::new(),
			animation_frame: 0,
			reloads: 0,
			should_quit: false,
		}
	}

	/// Switch to a different view
	pub fn change_view(&mut self, view: ViewType) {
		self.current_view = view;
	}

	/// Append a log entry, dropping the oldest beyond the buffer cap
	pub fn add_log(&mut self, level: LogLevel, message: String) {
		self.logs.push_back(LogEntry { level, message });
		while self.logs.len() > MAX_LOGS {
			self.logs.pop_front();
		}
	}

	/// Reload the surface: everything session-scoped is discarded, exactly
	/// like the full page reload in the web original
	pub fn reload(&mut self) {
		let reloads = self.reloads + 1;
		let config = self.config.clone();
		*self = AppState::new(config);
		self.reloads = reloads;
		self.add_log(LogLevel::Success, format!("Surface reloaded (#{})", reloads));
	}
}


// vim: ts=4
