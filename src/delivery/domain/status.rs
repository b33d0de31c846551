//! Run status, truck type, and dispatch board filter.

use super::{ParseRunFilterError, ParseRunStatusError, ParseTruckTypeError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle status of a delivery run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunStatus {
    /// Scheduled, not yet started.
    Pending,
    /// Truck is being loaded.
    Loading,
    /// Loading finished, waiting to depart.
    Preloaded,
    /// On the road to the store.
    InTransit,
    /// Delivered.
    Complete,
    /// Called off by dispatch.
    Cancelled,
}

impl RunStatus {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Loading => "loading",
            Self::Preloaded => "preloaded",
            Self::InTransit => "in_transit",
            Self::Complete => "complete",
            Self::Cancelled => "cancelled",
        }
    }

    /// Returns the badge text shown on the dashboards.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Loading => "Loading",
            Self::Preloaded => "Preloaded",
            Self::InTransit => "In Transit",
            Self::Complete => "Complete",
            Self::Cancelled => "Cancelled",
        }
    }

    /// Returns `true` for statuses no run leaves.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Complete | Self::Cancelled)
    }

    /// Returns the status the driver's single forward action leads to.
    #[must_use]
    pub const fn next(self) -> Option<Self> {
        match self {
            Self::Pending => Some(Self::Loading),
            Self::Loading => Some(Self::Preloaded),
            Self::Preloaded => Some(Self::InTransit),
            Self::InTransit => Some(Self::Complete),
            Self::Complete | Self::Cancelled => None,
        }
    }

    /// Returns the driver dashboard button for the forward action.
    #[must_use]
    pub const fn action_label(self) -> Option<&'static str> {
        match self {
            Self::Pending => Some("Start Loading"),
            Self::Loading => Some("Mark as Preloaded"),
            Self::Preloaded => Some("Start Delivery"),
            Self::InTransit => Some("Complete Delivery"),
            Self::Complete | Self::Cancelled => None,
        }
    }

    /// Returns `true` when a run may move from `self` to `target`.
    #[must_use]
    pub fn can_transition_to(self, target: Self) -> bool {
        match target {
            Self::Cancelled => !self.is_terminal(),
            _ => self.next() == Some(target),
        }
    }
}

impl fmt::Display for RunStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for RunStatus {
    type Error = ParseRunStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "pending" => Ok(Self::Pending),
            "loading" => Ok(Self::Loading),
            "preloaded" => Ok(Self::Preloaded),
            "in_transit" => Ok(Self::InTransit),
            "complete" => Ok(Self::Complete),
            "cancelled" => Ok(Self::Cancelled),
            _ => Err(ParseRunStatusError(value.to_owned())),
        }
    }
}

/// Kind of truck assigned to a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TruckType {
    /// Straight box truck.
    #[serde(rename = "Box Truck")]
    BoxTruck,
    /// Tractor with trailer.
    #[serde(rename = "Tractor Trailer")]
    TractorTrailer,
}

impl TruckType {
    /// Returns the storage representation, which is also the display text.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::BoxTruck => "Box Truck",
            Self::TractorTrailer => "Tractor Trailer",
        }
    }
}

impl fmt::Display for TruckType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for TruckType {
    type Error = ParseTruckTypeError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "box truck" => Ok(Self::BoxTruck),
            "tractor trailer" => Ok(Self::TractorTrailer),
            _ => Err(ParseTruckTypeError(value.to_owned())),
        }
    }
}

/// Truck filter buttons on the dispatch board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum RunFilter {
    /// Every run.
    #[default]
    #[serde(rename = "All Runs")]
    All,
    /// Box truck runs only.
    #[serde(rename = "Box Truck Runs")]
    BoxTruck,
    /// Tractor trailer runs only.
    #[serde(rename = "Tractor Trailer Runs")]
    TractorTrailer,
}

impl RunFilter {
    /// All filters in button order.
    pub const ALL: [Self; 3] = [Self::All, Self::BoxTruck, Self::TractorTrailer];

    /// Returns the button text.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::All => "All Runs",
            Self::BoxTruck => "Box Truck Runs",
            Self::TractorTrailer => "Tractor Trailer Runs",
        }
    }

    /// Returns `true` when runs with `truck_type` pass the filter.
    #[must_use]
    pub const fn matches(self, truck_type: TruckType) -> bool {
        match self {
            Self::All => true,
            Self::BoxTruck => matches!(truck_type, TruckType::BoxTruck),
            Self::TractorTrailer => matches!(truck_type, TruckType::TractorTrailer),
        }
    }
}

impl fmt::Display for RunFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl TryFrom<&str> for RunFilter {
    type Error = ParseRunFilterError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim();
        Self::ALL
            .into_iter()
            .find(|filter| filter.label().eq_ignore_ascii_case(normalized))
            .ok_or_else(|| ParseRunFilterError(value.to_owned()))
    }
}
