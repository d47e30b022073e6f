//! User settings for finsight
//!
//! Display preferences shared by the reports and exports: the currency
//! symbol, which calendar dates are read in, and list paging.

use serde::{Deserialize, Serialize};

use super::paths::FinsightPaths;
use crate::error::FinsightError;
use crate::models::CalendarReference;
use crate::pagination::DEFAULT_PAGE_SIZE;

/// User settings for finsight
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol for terminal and HTML output
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Calendar that transaction dates are grouped and displayed in
    #[serde(default)]
    pub calendar: CalendarReference,

    /// Rows per page in the transaction register
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// How long success and error toasts stay up; 0 keeps them until dismissed
    #[serde(default = "default_toast_duration_ms")]
    pub toast_duration_ms: u64,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

fn default_toast_duration_ms() -> u64 {
    3000
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            calendar: CalendarReference::default(),
            page_size: default_page_size(),
            toast_duration_ms: default_toast_duration_ms(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or use defaults if the file doesn't exist
    pub fn load_or_create(paths: &FinsightPaths) -> Result<Self, FinsightError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            tracing::debug!(path = %settings_path.display(), "no settings file, using defaults");
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| FinsightError::Io(format!("Failed to read settings file: {}", e)))?;

        serde_json::from_str(&contents)
            .map_err(|e| FinsightError::Config(format!("Failed to parse settings file: {}", e)))
    }

    /// Save settings to disk
    pub fn save(&self, paths: &FinsightPaths) -> Result<(), FinsightError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| FinsightError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}

/// Keys accepted by [`Settings::set`]
pub const SETTING_KEYS: [&str; 4] = ["currency", "calendar", "page-size", "toast-duration"];

impl Settings {
    /// Change one setting from its command-line spelling
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), FinsightError> {
        match key {
            "currency" => self.currency_symbol = value.to_string(),
            "calendar" => self.calendar = value.parse()?,
            "page-size" => {
                self.page_size = value
                    .parse()
                    .ok()
                    .filter(|size| *size > 0)
                    .ok_or_else(|| {
                        FinsightError::Validation(format!(
                            "Invalid page size: {}. Use a whole number above 0",
                            value
                        ))
                    })?;
            }
            "toast-duration" => {
                self.toast_duration_ms = value.parse().map_err(|_| {
                    FinsightError::Validation(format!(
                        "Invalid toast duration: {}. Use milliseconds, 0 to keep toasts",
                        value
                    ))
                })?;
            }
            _ => {
                return Err(FinsightError::Validation(format!(
                    "Unknown setting: {}. Expected one of: {}",
                    key,
                    SETTING_KEYS.join(", ")
                )))
            }
        }
        Ok(())
    }
}
