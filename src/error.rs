//! Error types for sync trigger operations

use std::error::Error;
use std::fmt;
use std::io;

/// Main error type for trigger operations
#[derive(Debug)]
pub enum TriggerError {
	/// The sync hook request did not succeed. Covers both a non-2xx response
	/// and a transport-level failure; the user-visible outcome is the same.
	SyncFailed { detail: String },

	/// Invalid configuration
	InvalidConfig { message: String },

	/// I/O error
	Io(io::Error),
}

impl fmt::Display for TriggerError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			TriggerError::SyncFailed { detail } => {
				write!(f, "Sync request did not succeed: {}", detail)
			}
			TriggerError::InvalidConfig { message } => {
				write!(f, "Invalid configuration: {}", message)
			}
			TriggerError::Io(e) => write!(f, "I/O error: {}", e),
		}
	}
}

impl Error for TriggerError {}

impl From<io::Error> for TriggerError {
	fn from(e: io::Error) -> Self {
		TriggerError::Io(e)
	}
}

impl From<reqwest::Error> for TriggerError {
	fn from(e: reqwest::Error) -> Self {
		TriggerError::SyncFailed { detail: e.to_string() }
	}
}

impl From<String> for TriggerError {
	fn from(e: String) -> Self {
		TriggerError::InvalidConfig { message: e }
	}
}

// vim: ts=4
