//! Measured values of a container count.

use super::ContainerDomainError;
use crate::store::domain::SupplyQuantities;
use serde::{Deserialize, Serialize};
use std::fmt;

/// How full the trailer is, in percent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TrailerFullness(u8);

impl TrailerFullness {
    /// A full trailer.
    pub const FULL: Self = Self(100);

    /// Creates a validated percentage.
    ///
    /// # Errors
    ///
    /// Returns [`ContainerDomainError::TrailerFullnessOutOfRange`] above 100.
    pub fn new(percent: u32) -> Result<Self, ContainerDomainError> {
        u8::try_from(percent)
            .ok()
            .filter(|value| *value <= Self::FULL.0)
            .map(Self)
            .ok_or(ContainerDomainError::TrailerFullnessOutOfRange(percent))
    }

    /// Returns the percentage.
    #[must_use]
    pub const fn percent(self) -> u8 {
        self.0
    }
}

impl fmt::Display for TrailerFullness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

/// Figures reported by a store opener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContainerMetrics {
    /// Donations received.
    pub donation_count: u32,
    /// Trailer fill level.
    pub trailer_fullness: TrailerFullness,
    /// Supplies on hand.
    pub supplies: SupplyQuantities,
}
