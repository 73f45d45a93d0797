//! Email address extraction and categorization
//!
//! Extraction is a two-pass affair. A loose pattern scans free text for
//! anything email-shaped, then each distinct normalized hit is checked
//! against an anchored validation rule. Whatever the scan finds but the
//! validation rejects ends up in the invalid bucket.

use crate::error::ExtractError;
use crate::types::{ExtractionResult, FeatureTier, NormalizedAddress};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

// Loose scan: a lexer, not a validator
static EMAIL_REGEX: std::sync::LazyLock<Regex> = std::sync::LazyLock::new(|| {
    Regex::new(r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}").unwrap()
});

static VALID_EMAIL_REGEX: std::sync::LazyLock<Regex> = std::sync::LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").unwrap()
});

/// An email-shaped substring found by the loose scan
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate<'a> {
    /// Matched text as it appears in the input
    pub raw: &'a str,

    /// Byte offset of the match in the input
    pub position: usize,
}

impl Candidate<'_> {
    #[must_use]
    pub fn normalized(&self) -> NormalizedAddress {
        NormalizedAddress::new(self.raw)
    }
}

/// Iterate over every loose-pattern hit in `text`, in input order
pub fn candidates(text: &str) -> impl Iterator<Item = Candidate<'_>> {
    EMAIL_REGEX.find_iter(text).map(|m| Candidate {
        raw: m.as_str(),
        position: m.start(),
    })
}

/// Check a single, already isolated address against the anchored pattern
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    VALID_EMAIL_REGEX.is_match(email)
}

/// How distinct candidates are validated
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum ValidationMode {
    /// The anchored pattern only.
    ///
    /// Every loose hit also satisfies this pattern, so the invalid bucket
    /// stays empty under this mode.
    #[default]
    Pattern,

    /// The anchored pattern plus dot-atom hygiene: no leading, trailing or
    /// consecutive dots in either part, and no domain label starting or
    /// ending with a hyphen.
    DotAtom,
}

impl ValidationMode {
    #[must_use]
    pub fn accepts(self, email: &str) -> bool {
        if !is_valid_email(email) {
            return false;
        }

        match self {
            Self::Pattern => true,
            Self::DotAtom => is_dot_atom(email),
        }
    }
}

impl FromStr for ValidationMode {
    type Err = ExtractError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pattern" => Ok(Self::Pattern),
            "dot-atom" | "dotatom" => Ok(Self::DotAtom),
            other => Err(ExtractError::UnknownValue {
                option: "validation",
                value: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for ValidationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pattern => write!(f, "pattern"),
            Self::DotAtom => write!(f, "dot-atom"),
        }
    }
}

fn is_dot_atom(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    let clean_dots = |part: &str| {
        !part.starts_with('.') && !part.ends_with('.') && !part.contains("..")
    };

    clean_dots(local)
        && clean_dots(domain)
        && domain
            .split('.')
            .all(|label| !label.starts_with('-') && !label.ends_with('-'))
}

/// Extraction engine
///
/// Holds no state between calls; one instance can serve any number of
/// independent extractions.
#[derive(Debug, Clone, Copy, Default)]
pub struct Extractor {
    mode: ValidationMode,
}

impl Extractor {
    #[must_use]
    pub const fn new(mode: ValidationMode) -> Self {
        Self { mode }
    }

    #[must_use]
    pub const fn mode(&self) -> ValidationMode {
        self.mode
    }

    /// Extract and categorize every email-shaped substring of `text`
    ///
    /// Never fails; text without matches yields an empty result.
    #[must_use]
    pub fn extract(&self, text: &str) -> ExtractionResult {
        let mut seen: Vec<NormalizedAddress> = Vec::new();
        let mut counts: HashMap<NormalizedAddress, usize> = HashMap::new();
        let mut total_matches = 0;

        for candidate in candidates(text) {
            total_matches += 1;
            let address = candidate.normalized();
            let count = counts.entry(address.clone()).or_insert(0);
            if *count == 0 {
                seen.push(address);
            }
            *count += 1;
        }

        let mut result = ExtractionResult {
            total_matches,
            ..ExtractionResult::default()
        };

        for address in seen {
            let count = counts.get(&address).copied().unwrap_or_default();

            if self.mode.accepts(address.as_str()) {
                if count > 1 {
                    result.duplicates.push(address.clone());
                }
                result.valid.push(address);
            } else {
                result.invalid.push(address);
            }
        }

        debug!(
            "Extracted {} matches: {} valid, {} invalid, {} duplicate",
            total_matches,
            result.valid.len(),
            result.invalid.len(),
            result.duplicates.len()
        );

        result
    }
}

/// Extract with the default validation mode
#[must_use]
pub fn extract(text: &str) -> ExtractionResult {
    Extractor::default().extract(text)
}

/// Addresses to hand over for export at the given tier
#[must_use]
pub fn project(result: &ExtractionResult, tier: FeatureTier) -> Vec<NormalizedAddress> {
    result.project(tier)
}

/// Whether to show the premium upgrade prompt
#[must_use]
pub const fn upsell_signal(result: &ExtractionResult, tier: FeatureTier) -> bool {
    result.upsell(tier)
}
