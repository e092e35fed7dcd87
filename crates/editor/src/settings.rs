//! Editor behavior settings

use serde::{Deserialize, Serialize};

/// Host-tunable editor knobs
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorSettings {
    /// Apply the ∓1 cursor adjustment on horizontal arrow keydown.
    ///
    /// Some host input widgets report `selection_end` one character behind
    /// the key event that moved it; the compensation keeps the tracked
    /// offset correct on those widgets. Hosts whose caret reporting is
    /// synchronous should turn this off and rely on `caret_moved` alone.
    pub arrow_key_caret_compensation: bool,

    /// Cap on suggestion rows handed to the suggestion box.
    pub max_suggestions: usize,
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            arrow_key_caret_compensation: true,
            max_suggestions: 20,
        }
    }
}
