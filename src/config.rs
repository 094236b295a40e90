//! Configuration for the sync trigger
//!
//! The configuration follows a priority chain:
//! 1. Built-in defaults (Config::default())
//! 2. Profile file (~/.synctrig/<profile>.toml)
//! 3. CLI flags (highest priority)

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use std::{fs, io};

use crate::error::TriggerError;
use crate::hook::DEFAULT_HOOK_PATH;
use crate::state::Timing;

/// Button copy for the four states. Kept in the config so localized
/// deployments can swap the labels without a rebuild.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct Labels {
	pub available: String,
	pub busy: String,
	pub failed: String,
	pub success: String,
}

impl Labels {
	/// Copy for a given button label
	pub fn text(&self, label: crate::state::StatusLabel) -> &str {
		use crate::state::StatusLabel;

		match label {
			StatusLabel::Available => &self.available,
			StatusLabel::Busy => &self.busy,
			StatusLabel::Failed => &self.failed,
			StatusLabel::Success => &self.success,
		}
	}
}

impl Default for Labels {
	fn default() -> Self {
		Labels {
			available: "\u{1F501} Synchronize database".to_string(),
			busy: "\u{23F3} Synchronizing".to_string(),
			failed: "\u{274E} Synchronization failed".to_string(),
			success: "\u{2705} Synchronization succeeded".to_string(),
		}
	}
}

/// Unified configuration for sync trigger operations
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
	/// Base URL of the server hosting the sync hook
	pub base_url: String,

	/// Path of the sync hook on the server
	pub hook_path: String,

	/// Delay in milliseconds between showing Success and reloading the
	/// surface. 0 reloads immediately; the "delayed" variant uses 1000.
	pub reload_delay_ms: u64,

	/// How long in milliseconds the Failed label stays up before the button
	/// re-enables for a manual retry
	pub cooldown_ms: u64,

	/// Button copy
	pub labels: Labels,
}

impl Default for Config {
	fn default() -> Self {
		Config {
			base_url: "http://localhost:8000".to_string(),
			hook_path: DEFAULT_HOOK_PATH.to_string(),
			reload_delay_ms: 0,
			cooldown_ms: 3000,
			labels: Labels::default(),
		}
	}
}

impl Config {
	/// Load the configuration for a profile from the given state directory.
	/// Looks for `<profile>.toml`, then `<profile>.json`. A missing profile
	/// file is not an error - defaults apply.
	pub fn load(state_dir: &Path, profile: &str) -> Result<Self, TriggerError> {
		for ext in ["toml", "json"] {
			let path = state_dir.join(format!("{}.{}", profile, ext));

			match fs::read_to_string(&path) {
				Ok(content) => {
					let result = if ext == "toml" {
						toml::from_str::<Config>(&content).map_err(|e| e.to_string())
					} else {
						serde_json::from_str::<Config>(&content).map_err(|e| e.to_string())
					};
					let config = result.map_err(|e| TriggerError::InvalidConfig {
						message: format!("{}: {}", path.display(), e),
					})?;
					config.validate()?;
					return Ok(config);
				}
				Err(e) if e.kind() == io::ErrorKind::NotFound => continue,
				Err(e) => return Err(TriggerError::Io(e)),
			}
		}

		Ok(Config::default())
	}

	/// Validate the configuration
	pub fn validate(&self) -> Result<(), TriggerError> {
		if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
			return Err(TriggerError::InvalidConfig {
				message: format!("baseUrl must be an http(s) URL, got '{}'", self.base_url),
			});
		}
		if !self.hook_path.starts_with('/') {
			return Err(TriggerError::InvalidConfig {
				message: format!("hookPath must start with '/', got '{}'", self.hook_path),
			});
		}
		if self.labels.available.is_empty()
			|| self.labels.busy.is_empty()
			|| self.labels.failed.is_empty()
			|| self.labels.success.is_empty()
		{
			return Err(TriggerError::InvalidConfig {
				message: "labels must not be empty".to_string(),
			});
		}
		Ok(())
	}

	/// Timing knobs for the state machine
	pub fn timing(&self) -> Timing {
		Timing {
			reload_delay: Duration::from_millis(self.reload_delay_ms),
			cooldown: Duration::from_millis(self.cooldown_ms),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn defaults_match_the_original_deployment() {
		let config = Config::default();
		assert_eq!(config.hook_path, "/api/accounting/hooks/sync_database");
		assert_eq!(config.reload_delay_ms, 0);
		assert_eq!(config.cooldown_ms, 3000);
		assert!(config.validate().is_ok());
	}

	#[test]
	fn rejects_non_http_base_url() {
		let config = Config { base_url: "ftp://example.com".to_string(), ..Config::default() };
		assert!(config.validate().is_err());
	}

	#[test]
	fn rejects_relative_hook_path() {
		let config = Config { hook_path: "hooks/sync".to_string(), ..Config::default() };
		assert!(config.validate().is_err());
	}

	#[test]
	fn timing_is_derived_from_millis() {
		let config = Config { reload_delay_ms: 1000, cooldown_ms: 250, ..Config::default() };
		let timing = config.timing();
		assert_eq!(timing.reload_delay, Duration::from_secs(1));
		assert_eq!(timing.cooldown, Duration::from_millis(250));
	}
}

// vim: ts=4
