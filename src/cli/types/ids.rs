//! ID types for players and teams.

use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Type-safe wrapper for player identifiers.
///
/// Player ids are opaque strings: the importer stores ESPN athlete ids,
/// hand-entered rows may use slugs or uuids. The engine only ever compares
/// and forwards them.
///
/// # Examples
///
/// ```rust
/// use propcast::PlayerId;
///
/// let id = PlayerId::new("3139477");
/// assert_eq!(id.as_str(), "3139477");
/// assert_eq!(id.to_string(), "3139477");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub String);

impl PlayerId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True when there is no usable identifier. Checked at engine entry,
    /// not at parse time, so programmatic construction hits the same path.
    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PlayerId {
    type Err = Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Infallible> {
        Ok(Self(s.to_string()))
    }
}

/// Type-safe wrapper for team abbreviations (e.g. `BAL`, `KC`).
///
/// Normalized to uppercase so joins against defense rows are
/// case-insensitive regardless of how the caller typed the code.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TeamAbbr(pub String);

impl TeamAbbr {
    pub fn new(abbr: impl Into<String>) -> Self {
        Self(abbr.into().trim().to_uppercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for TeamAbbr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TeamAbbr {
    type Err = Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Infallible> {
        Ok(Self::new(s))
    }
}
