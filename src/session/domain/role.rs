//! User roles carried on the session's metadata.

use super::ParseRoleError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Role attribute stored on an authenticated user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Plans runs, manages drivers and par levels, reviews container logs.
    Dispatcher,
    /// Works through assigned delivery runs.
    Driver,
}

impl Role {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dispatcher => "dispatcher",
            Self::Driver => "driver",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for Role {
    type Error = ParseRoleError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "dispatcher" => Ok(Self::Dispatcher),
            "driver" => Ok(Self::Driver),
            _ => Err(ParseRoleError(value.to_owned())),
        }
    }
}
