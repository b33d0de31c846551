//! Proper-cased person names.

use super::RosterDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A first or last name in proper case, e.g. `Mary Ann`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PersonName(String);

impl PersonName {
    /// Proper-cases `value` and rejects blank names.
    ///
    /// Words are split on single spaces, so runs of spaces inside a name are
    /// kept as typed.
    ///
    /// # Errors
    ///
    /// Returns [`RosterDomainError::EmptyName`] naming `field` when nothing
    /// is left after trimming.
    pub fn new(value: &str, field: &'static str) -> Result<Self, RosterDomainError> {
        let cased = proper_case(value);
        let trimmed = cased.trim();
        if trimmed.is_empty() {
            return Err(RosterDomainError::EmptyName { field });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PersonName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn proper_case(value: &str) -> String {
    value
        .to_lowercase()
        .split(' ')
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}
