//! Tracker configuration
//!
//! Holds the data file location, the allowed category set, and display
//! preferences. A config is built once at startup and handed to each
//! component explicitly.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::TrackerError;
use crate::models::CategorySet;

/// Configuration for an expense tracker session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackerConfig {
    /// Path of the JSON file holding expense records
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,

    /// Allowed expense categories, in display order
    #[serde(default = "default_categories")]
    pub categories: Vec<String>,

    /// Category used when input matches none of `categories`
    #[serde(default = "default_category")]
    pub default_category: String,

    /// Currency symbol used in summaries
    #[serde(default = "default_currency")]
    pub currency_symbol: String,
}

fn default_data_file() -> PathBuf {
    PathBuf::from("expenses.json")
}

fn default_categories() -> Vec<String> {
    ["Food", "Transportation", "Entertainment", "Other"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_category() -> String {
    "Other".to_string()
}

fn default_currency() -> String {
    "$".to_string()
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            categories: default_categories(),
            default_category: default_category(),
            currency_symbol: default_currency(),
        }
    }
}

impl TrackerConfig {
    /// Load a config from a JSON file
    ///
    /// Keys missing from the file take their default values. The loaded
    /// config is validated before it is returned.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TrackerError> {
        let path = path.as_ref();

        let contents = std::fs::read_to_string(path).map_err(|e| {
            TrackerError::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;

        let config: TrackerConfig = serde_json::from_str(&contents).map_err(|e| {
            TrackerError::Config(format!("Failed to parse {}: {}", path.display(), e))
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Override the data file location
    pub fn with_data_file(mut self, data_file: impl Into<PathBuf>) -> Self {
        self.data_file = data_file.into();
        self
    }

    /// Check that the category set is usable
    pub fn validate(&self) -> Result<(), TrackerError> {
        if self.categories.is_empty() {
            return Err(TrackerError::Config(
                "At least one category must be configured".into(),
            ));
        }

        if !self.categories.contains(&self.default_category) {
            return Err(TrackerError::Config(format!(
                "Default category '{}' is not in the category list",
                self.default_category
            )));
        }

        Ok(())
    }

    /// Build the category set used for entry validation
    pub fn category_set(&self) -> CategorySet {
        CategorySet::new(self.categories.clone(), self.default_category.clone())
    }
}
