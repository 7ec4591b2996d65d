use serde::{Deserialize, Serialize};

/// Days configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Tracing filter used when RUST_LOG is not set
    pub log_level: String,

    /// Store file names inside the data directory
    pub files: Files,

    /// Life progress rendering
    pub life: LifeDisplay,
}

/// Store file names
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Files {
    /// Habit tracker document
    pub tracker: String,

    /// Journal document
    pub journal: String,
}

/// Widths and glyphs for `life end`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LifeDisplay {
    /// Cells in the progress bar
    pub progress_width: usize,

    /// Total line width of the detail grid, including the row label
    pub grid_width: usize,

    /// Columns reserved for the row label
    pub grid_margin: usize,

    pub filled: String,
    pub empty: String,
    pub passed: String,
    pub future: String,
}

impl LifeDisplay {
    /// Day cells per grid row
    pub fn cells_per_row(&self) -> usize {
        self.grid_width.saturating_sub(self.grid_margin).max(1)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
            files: Files::default(),
            life: LifeDisplay::default(),
        }
    }
}

impl Default for Files {
    fn default() -> Self {
        Self {
            tracker: "track.json".to_string(),
            journal: "journal.json".to_string(),
        }
    }
}

impl Default for LifeDisplay {
    fn default() -> Self {
        Self {
            progress_width: 50,
            grid_width: 90,
            grid_margin: 8,
            filled: "#".to_string(),
            empty: "=".to_string(),
            passed: "*".to_string(),
            future: "o".to_string(),
        }
    }
}
