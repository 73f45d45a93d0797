//! Core types for extraction results

use crate::error::ExtractError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

/// An email address in its normalized form (lower-cased and trimmed)
///
/// Equality and occurrence counting are always performed on this form,
/// never on the substring as it appeared in the input.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct NormalizedAddress(String);

impl NormalizedAddress {
    pub fn new(raw: impl AsRef<str>) -> Self {
        Self(raw.as_ref().to_lowercase().trim().to_string())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Part before the last `@`
    #[must_use]
    pub fn local_part(&self) -> &str {
        self.0.rsplit_once('@').map_or(&self.0, |(local, _)| local)
    }

    /// Part after the last `@`
    #[must_use]
    pub fn domain(&self) -> &str {
        self.0.rsplit_once('@').map_or("", |(_, domain)| domain)
    }

    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for NormalizedAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for NormalizedAddress {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<&str> for NormalizedAddress {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Feature tier of the calling session
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum FeatureTier {
    #[default]
    Free,
    Premium,
}

impl FeatureTier {
    #[must_use]
    pub const fn is_premium(self) -> bool {
        matches!(self, Self::Premium)
    }
}

impl FromStr for FeatureTier {
    type Err = ExtractError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "free" => Ok(Self::Free),
            "premium" => Ok(Self::Premium),
            other => Err(ExtractError::UnknownValue {
                option: "tier",
                value: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for FeatureTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Free => write!(f, "Free"),
            Self::Premium => write!(f, "Premium"),
        }
    }
}

/// Categorized output of a single extraction run
///
/// Invariants:
/// - `duplicates` is a subset of `valid`
/// - `valid` and `invalid` are disjoint
/// - no address repeats within `valid`, `invalid` or `duplicates`
///
/// All sequences keep first-seen order.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExtractionResult {
    /// Addresses passing validation
    pub valid: Vec<NormalizedAddress>,

    /// Email-shaped addresses failing validation
    pub invalid: Vec<NormalizedAddress>,

    /// Valid addresses seen more than once in the input
    pub duplicates: Vec<NormalizedAddress>,

    /// Raw pattern hits before deduplication
    pub total_matches: usize,
}

impl ExtractionResult {
    /// True when nothing email-shaped was found
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.valid.is_empty() && self.invalid.is_empty()
    }

    #[must_use]
    pub fn is_duplicate(&self, address: &str) -> bool {
        self.duplicates.iter().any(|d| d.as_str() == address)
    }

    #[must_use]
    pub fn is_invalid(&self, address: &str) -> bool {
        self.invalid.iter().any(|d| d.as_str() == address)
    }

    #[must_use]
    pub const fn stats(&self) -> ExtractionStats {
        ExtractionStats {
            total_matches: self.total_matches,
            valid: self.valid.len(),
            invalid: self.invalid.len(),
            duplicates: self.duplicates.len(),
        }
    }

    /// Export projection for the given tier
    ///
    /// Free gets `valid` as-is. Premium gets `valid` with every duplicated
    /// address removed.
    #[must_use]
    pub fn project(&self, tier: FeatureTier) -> Vec<NormalizedAddress> {
        match tier {
            FeatureTier::Free => self.valid.clone(),
            FeatureTier::Premium => {
                let duplicates: HashSet<&NormalizedAddress> = self.duplicates.iter().collect();
                self.valid
                    .iter()
                    .filter(|a| !duplicates.contains(a))
                    .cloned()
                    .collect()
            }
        }
    }

    /// Whether a free-tier caller should be offered the premium cleanup
    #[must_use]
    pub const fn upsell(&self, tier: FeatureTier) -> bool {
        matches!(tier, FeatureTier::Free)
            && (!self.duplicates.is_empty() || !self.invalid.is_empty())
    }

    /// The "all emails" list: valid then invalid, one entry per address
    #[must_use]
    pub fn display_entries(&self) -> Vec<DisplayEntry> {
        let duplicates: HashSet<&NormalizedAddress> = self.duplicates.iter().collect();

        let valid = self.valid.iter().map(|address| {
            let duplicate = duplicates.contains(address);
            DisplayEntry {
                address: address.clone(),
                invalid: false,
                duplicate,
                badge: duplicate.then_some(Badge::Duplicate),
            }
        });

        let invalid = self.invalid.iter().map(|address| DisplayEntry {
            address: address.clone(),
            invalid: true,
            duplicate: false,
            badge: Some(Badge::Invalid),
        });

        valid.chain(invalid).collect()
    }
}

/// Counters shown next to the result list
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExtractionStats {
    pub total_matches: usize,
    pub valid: usize,
    pub invalid: usize,
    pub duplicates: usize,
}

impl fmt::Display for ExtractionStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} valid, {} invalid, {} duplicate ({} matches)",
            self.valid, self.invalid, self.duplicates, self.total_matches
        )
    }
}

/// One row of the rendered result list
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DisplayEntry {
    pub address: NormalizedAddress,
    pub invalid: bool,
    pub duplicate: bool,
    pub badge: Option<Badge>,
}

/// Badge attached to a result row. Invalid takes precedence.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Badge {
    Invalid,
    Duplicate,
}

impl Badge {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Invalid => "Invalid",
            Self::Duplicate => "Duplicate",
        }
    }
}

impl fmt::Display for Badge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
