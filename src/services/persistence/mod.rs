// Picker persistence
// Snapshot that survives a suspend/resume cycle, stored as JSON

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::{self, Error as SerdeError, Value};

use crate::models::range::{DurationPad, RangeSnapshot};
use crate::models::settings::PickerConfig;
use crate::models::side::Side;
use crate::services::picker::PickerView;

/// Everything needed to rebuild an open picker after the host pauses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedState {
    pub config: PickerConfig,
    pub range: RangeSnapshot,
    /// State a later cancel returns to.
    pub committed: RangeSnapshot,
    pub view: PickerView,
    pub focus: Side,
    pub duration_pad: DurationPad,
    /// Opaque to the picker; owned by the presentation layer (list scroll
    /// positions and the like).
    #[serde(default)]
    pub presentation: BTreeMap<String, Value>,
}

impl SavedState {
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("failed to serialize picker state")
    }

    pub fn from_json(data: &str) -> Result<Self> {
        serde_json::from_str(data).context("failed to deserialize picker state")
    }
}

/// Load a saved picker state. A missing file means nothing was saved.
pub fn load_state(path: &Path) -> Result<Option<SavedState>> {
    if !path.exists() {
        return Ok(None);
    }

    let data = fs::read_to_string(path)
        .with_context(|| format!("failed to read picker state from {}", path.display()))?;
    let state = serde_json::from_str(&data).map_err(|err| map_deser_error(err, path))?;
    Ok(Some(state))
}

pub fn save_state(path: &Path, state: &SavedState) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create dir {}", parent.display()))?;
    }

    let data = state.to_json()?;
    fs::write(path, data)
        .with_context(|| format!("failed to write picker state to {}", path.display()))?;
    Ok(())
}

fn map_deser_error(err: SerdeError, path: &Path) -> anyhow::Error {
    anyhow::Error::new(err).context(format!(
        "failed to deserialize picker state from {}",
        path.display()
    ))
}
