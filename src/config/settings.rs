//! User settings for FinanzApp
//!
//! Display and sampling preferences read from `config.json`. Budget sessions
//! themselves are never saved.

use serde::{Deserialize, Serialize};

use super::paths::FinanzPaths;
use crate::error::FinanzError;
use crate::export::ReportFormat;
use crate::models::Profile;

/// User settings for FinanzApp
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol shown before amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Tips shown after an individual computation
    #[serde(default = "default_individual_tip_count")]
    pub individual_tip_count: usize,

    /// Tips shown after a couple computation
    #[serde(default = "default_couple_tip_count")]
    pub couple_tip_count: usize,

    /// Width of the terminal bar chart, in characters
    #[serde(default = "default_chart_width")]
    pub chart_width: usize,

    /// Output format used when none is given on the command line
    #[serde(default)]
    pub default_format: ReportFormat,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_individual_tip_count() -> usize {
    Profile::Individual.default_tip_count()
}

fn default_couple_tip_count() -> usize {
    Profile::Couple.default_tip_count()
}

fn default_chart_width() -> usize {
    30
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            individual_tip_count: default_individual_tip_count(),
            couple_tip_count: default_couple_tip_count(),
            chart_width: default_chart_width(),
            default_format: ReportFormat::default(),
        }
    }
}

impl Settings {
    /// Number of tips to show for a profile
    pub fn tip_count(&self, profile: Profile) -> usize {
        match profile {
            Profile::Individual => self.individual_tip_count,
            Profile::Couple => self.couple_tip_count,
        }
    }

    /// Load settings from disk, or use defaults if the file doesn't exist
    pub fn load_or_create(paths: &FinanzPaths) -> Result<Self, FinanzError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                FinanzError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                FinanzError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Not written until `init`
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &FinanzPaths) -> Result<(), FinanzError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            FinanzError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| FinanzError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}
