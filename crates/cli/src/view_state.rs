//! Per-screen view state kept between runs.
//!
//! Each screen's last view survives the process exiting, the way a screen
//! survives being destroyed and recreated. The lookup screen keeps the raw
//! catalog payload so it can be re-rendered and saved later; the other two
//! screens keep their rendered text.

use std::fs;
use std::io;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ViewState {
    /// Raw payload of the last successful title lookup.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub displayed_movie: Option<Value>,
    /// Text last shown by the substring search screen.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub substring_results: Option<String>,
    /// Text last shown by the actor search screen.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actor_results: Option<String>,
    /// When this state was last written.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub saved_at: Option<DateTime<Utc>>,
}

impl ViewState {
    pub fn from_bytes(bytes: &[u8]) -> serde_json::Result<Self> {
        serde_json::from_slice(bytes)
    }

    pub fn to_bytes(&self) -> serde_json::Result<Vec<u8>> {
        serde_json::to_vec_pretty(self)
    }

    /// Load state from `path`.
    ///
    /// A missing file is a fresh start. An unreadable one is logged and
    /// replaced by the empty state.
    pub fn load(path: &Path) -> Self {
        let bytes = match fs::read(path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("No view state at {:?}, starting fresh", path);
                return Self::default();
            }
            Err(e) => {
                warn!("Failed to read view state {:?}: {}", path, e);
                return Self::default();
            }
        };

        match Self::from_bytes(&bytes) {
            Ok(state) => {
                debug!("Restored view state saved at {:?}", state.saved_at);
                state
            }
            Err(e) => {
                warn!("Discarding unreadable view state {:?}: {}", path, e);
                Self::default()
            }
        }
    }

    /// Stamp and write state to `path`, replacing the previous file.
    pub fn save(&mut self, path: &Path) -> Result<()> {
        self.saved_at = Some(Utc::now());
        let bytes = self.to_bytes().context("Failed to serialize view state")?;

        let tmp = path.with_extension("tmp");
        fs::write(&tmp, bytes)
            .with_context(|| format!("Failed to write view state to {:?}", tmp))?;
        fs::rename(&tmp, path)
            .with_context(|| format!("Failed to replace view state at {:?}", path))?;
        Ok(())
    }
}
