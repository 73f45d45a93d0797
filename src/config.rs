//! Extractor configuration loaded from TOML

use crate::error::{ExtractError, Result};
use crate::export::ExportFormat;
use crate::extractor::ValidationMode;
use crate::types::FeatureTier;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Runtime settings; every field is optional in the file
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub tier: FeatureTier,
    pub format: ExportFormat,
    pub validation: ValidationMode,
    pub output_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tier: FeatureTier::Free,
            format: ExportFormat::Csv,
            validation: ValidationMode::Pattern,
            output_dir: PathBuf::from("."),
        }
    }
}

impl Config {
    pub fn from_toml_str(s: &str) -> Result<Self> {
        toml::from_str(s).map_err(|e| ExtractError::Config(e.to_string()))
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ExtractError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&content)
    }
}
