//! Export projections rendered as downloadable files

use crate::error::{ExtractError, Result};
use crate::types::{ExtractionResult, FeatureTier, NormalizedAddress};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::info;

const CSV_HEADER: &str = "Email Address";

/// File format of an export
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Csv,
    #[serde(alias = "txt")]
    Text,
    Json,
}

impl ExportFormat {
    #[must_use]
    pub const fn file_name(self) -> &'static str {
        match self {
            Self::Csv => "extracted-emails.csv",
            Self::Text => "extracted-emails.txt",
            Self::Json => "extracted-emails.json",
        }
    }

    #[must_use]
    pub const fn mime_type(self) -> &'static str {
        match self {
            Self::Csv => "text/csv",
            Self::Text => "text/plain",
            Self::Json => "application/json",
        }
    }

    /// Render addresses into file content
    ///
    /// CSV carries a header and terminates every line. Text is one address
    /// per line with no trailing newline.
    pub fn render(self, addresses: &[NormalizedAddress]) -> Result<String> {
        match self {
            Self::Csv => {
                let mut content = format!("{CSV_HEADER}\n");
                for address in addresses {
                    content.push_str(address.as_str());
                    content.push('\n');
                }
                Ok(content)
            }
            Self::Text => Ok(addresses
                .iter()
                .map(NormalizedAddress::as_str)
                .collect::<Vec<_>>()
                .join("\n")),
            Self::Json => Ok(serde_json::to_string_pretty(addresses)?),
        }
    }
}

impl FromStr for ExportFormat {
    type Err = ExtractError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "txt" | "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(ExtractError::UnknownValue {
                option: "format",
                value: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Csv => write!(f, "CSV"),
            Self::Text => write!(f, "TXT"),
            Self::Json => write!(f, "JSON"),
        }
    }
}

/// A rendered export ready to be saved or offered for download
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportFile {
    pub file_name: &'static str,
    pub mime_type: &'static str,
    pub content: String,

    /// Number of addresses in the file
    pub count: usize,
}

impl ExportFile {
    /// Write the file into `dir`, returning its full path
    pub fn write_to(&self, dir: impl AsRef<Path>) -> Result<PathBuf> {
        let path = dir.as_ref().join(self.file_name);
        fs::write(&path, &self.content).map_err(|source| ExtractError::Io {
            path: path.display().to_string(),
            source,
        })?;

        info!("Exported {} email(s) to {}", self.count, path.display());
        Ok(path)
    }
}

/// Project `result` for `tier` and render it as `format`
///
/// Returns `None` when the projection is empty so callers never produce
/// an empty file.
pub fn export(
    result: &ExtractionResult,
    tier: FeatureTier,
    format: ExportFormat,
) -> Result<Option<ExportFile>> {
    let addresses = result.project(tier);
    if addresses.is_empty() {
        return Ok(None);
    }

    Ok(Some(ExportFile {
        file_name: format.file_name(),
        mime_type: format.mime_type(),
        content: format.render(&addresses)?,
        count: addresses.len(),
    }))
}
