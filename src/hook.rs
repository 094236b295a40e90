//! HTTP client for the server-side sync hook
//!
//! The hook is opaque: only the response status is inspected, the body is
//! never read. A non-2xx status and a transport error collapse into the
//! single `SyncFailed` error kind.

use reqwest::Client;

use crate::error::TriggerError;
use crate::logging::{debug, warn};

/// Default location of the sync hook on the server
pub const DEFAULT_HOOK_PATH: &str = "/api/accounting/hooks/sync_database";

/// Client for triggering the remote synchronization hook
#[derive(Debug, Clone)]
pub struct HookClient {
	base_url: String,
	hook_path: String,
	client: Client,
}

impl HookClient {
	/// Create a new client for the given server base URL
	pub fn new(base_url: &str) -> Self {
		HookClient {
			base_url: base_url.trim_end_matches('/').to_string(),
			hook_path: DEFAULT_HOOK_PATH.to_string(),
			client: Client::new(),
		}
	}

	/// Override the hook path (must start with '/')
	pub fn with_hook_path(mut self, path: &str) -> Self {
		self.hook_path = path.to_string();
		self
	}

	/// Full URL the trigger request is sent to
	pub fn hook_url(&self) -> String {
		format!("{}{}", self.base_url, self.hook_path)
	}

	/// Issue the hook request. No request body, no timeout of our own; the
	/// platform's transport semantics decide when an unreachable server fails.
	pub async fn trigger(&self) -> Result<(), TriggerError> {
		let url = self.hook_url();
		debug!("Triggering sync hook: GET {}", url);

		let response = self.client.get(url.as_str()).send().await.map_err(|e| {
			warn!("Sync hook transport error: {}", e);
			TriggerError::SyncFailed { detail: e.to_string() }
		})?;

		let status = response.status();
		if !status.is_success() {
			warn!("Sync hook returned {}", status);
			return Err(TriggerError::SyncFailed {
				detail: format!("response status {}", status),
			});
		}

		debug!("Sync hook returned {}", status);
		Ok(())
	}

	/// Probe whether the server behind the hook is reachable at all, without
	/// triggering a sync. Any response at all counts as reachable.
	pub async fn probe(&self) -> Result<u16, TriggerError> {
		let response = self.client.get(self.base_url.as_str()).send().await?;
		Ok(response.status().as_u16())
	}
}

// vim: ts=4
