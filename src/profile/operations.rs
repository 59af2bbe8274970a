//! Profile document loading and sub-profile selection.

use super::model::{PlatformDocument, PlatformProfile};
use crate::error::{Result, VsgenError};
use crate::host::HostOs;
use std::path::Path;

impl PlatformDocument {
    /// Load the profile document from a JSON file.
    ///
    /// This is the only fatal input of the generator: a missing or
    /// malformed document aborts the run before any output is touched.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            VsgenError::ConfigError(format!(
                "failed to read platform profile '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_json(&content).map_err(|e| {
            VsgenError::ConfigError(format!(
                "failed to parse platform profile '{}': {}",
                path.display(),
                e
            ))
        })
    }

    /// Parse a profile document from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| VsgenError::ConfigError(format!("invalid platform profile JSON: {}", e)))
    }

    /// Select the sub-profile for an OS class.
    ///
    /// Falls back to the `linux` entry when the host's key is absent, and to
    /// an empty all-defaults profile when that is absent too. Never fails.
    pub fn select(&self, host: HostOs) -> PlatformProfile {
        let entry = match host {
            HostOs::Windows => self.windows.as_ref().or(self.linux.as_ref()),
            HostOs::Linux => self.linux.as_ref(),
        };
        entry.cloned().unwrap_or_default()
    }
}
