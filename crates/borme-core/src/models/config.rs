//! Configuration structures for the parsing pipeline.

use serde::{Deserialize, Serialize};

use crate::models::record::ActionType;

/// Main configuration for the borme pipeline.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BormeConfig {
    /// Field extraction configuration.
    pub extraction: ExtractionConfig,
}

/// Field extraction configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Maximum length kept for the object-of-business field (characters).
    pub object_max_chars: usize,

    /// Maximum length kept for the domicile field (characters).
    pub domicile_max_chars: usize,

    /// Extract officer/role records in addition to company acts.
    pub extract_officers: bool,

    /// Minimum number of multi-character tokens a captured name run must
    /// contain to be accepted as person names.
    pub min_person_tokens: usize,

    /// Action type assumed when no section heading precedes a role match.
    pub default_action: ActionType,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            object_max_chars: 500,
            domicile_max_chars: 300,
            extract_officers: true,
            min_person_tokens: 2,
            default_action: ActionType::Appointment,
        }
    }
}

impl BormeConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &std::path::Path) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &std::path::Path) -> Result<(), std::io::Error> {
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))?;
        std::fs::write(path, content)
    }
}
