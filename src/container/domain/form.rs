//! Raw container count entry form.

use super::{ContainerDomainError, ContainerMetrics, TrailerFullness};
use crate::store::domain::{StoreId, SupplyQuantities};
use chrono::NaiveTime;

/// Format of the arrival time field.
const TIME_FORMAT: &str = "%H:%M";

/// The container count form as typed by the store opener.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContainerCountForm {
    /// Selected store, if one was picked.
    pub store_id: Option<StoreId>,
    /// Name of the person who opened the store.
    pub opener_name: String,
    /// Arrival time, `HH:MM`.
    pub arrival_time: String,
    /// Donations received.
    pub donation_count: String,
    /// Trailer fill level in percent.
    pub trailer_fullness: String,
    /// Hardlines raw on hand.
    pub hardlines_raw: String,
    /// Softlines raw on hand.
    pub softlines_raw: String,
    /// Canvases on hand.
    pub canvases: String,
    /// Sleeves on hand.
    pub sleeves: String,
    /// Caps on hand.
    pub caps: String,
    /// Totes on hand.
    pub totes: String,
}

/// A form that passed every check except the store lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedCount {
    /// Selected store.
    pub store_id: StoreId,
    /// Trimmed opener name.
    pub opener_name: String,
    /// Local arrival time.
    pub arrival_time: NaiveTime,
    /// Parsed figures.
    pub metrics: ContainerMetrics,
}

impl ContainerCountForm {
    /// Count fields in form order, paired with their values.
    fn count_fields(&self) -> [(&'static str, &str); 8] {
        [
            ("donation_count", self.donation_count.as_str()),
            ("trailer_fullness", self.trailer_fullness.as_str()),
            ("hardlines_raw", self.hardlines_raw.as_str()),
            ("softlines_raw", self.softlines_raw.as_str()),
            ("canvases", self.canvases.as_str()),
            ("sleeves", self.sleeves.as_str()),
            ("caps", self.caps.as_str()),
            ("totes", self.totes.as_str()),
        ]
    }

    /// Runs the form checks in order and stops at the first failure.
    ///
    /// # Errors
    ///
    /// Returns [`ContainerDomainError::StoreNotSelected`],
    /// [`ContainerDomainError::MissingOpenerOrArrival`],
    /// [`ContainerDomainError::MissingCounts`],
    /// [`ContainerDomainError::InvalidArrivalTime`],
    /// [`ContainerDomainError::InvalidCount`], or
    /// [`ContainerDomainError::TrailerFullnessOutOfRange`], in that order.
    pub fn validate(&self) -> Result<ValidatedCount, ContainerDomainError> {
        let store_id = self.store_id.ok_or(ContainerDomainError::StoreNotSelected)?;

        let opener_name = self.opener_name.trim();
        let arrival = self.arrival_time.trim();
        if opener_name.is_empty() || arrival.is_empty() {
            return Err(ContainerDomainError::MissingOpenerOrArrival);
        }

        let fields = self.count_fields();
        let missing: Vec<&'static str> = fields
            .iter()
            .filter(|(_, value)| value.trim().is_empty())
            .map(|(name, _)| *name)
            .collect();
        if !missing.is_empty() {
            return Err(ContainerDomainError::MissingCounts(missing));
        }

        let arrival_time = NaiveTime::parse_from_str(arrival, TIME_FORMAT)
            .map_err(|_| ContainerDomainError::InvalidArrivalTime(self.arrival_time.clone()))?;

        let mut parsed = [0_u32; 8];
        for (slot, (field, value)) in parsed.iter_mut().zip(fields) {
            *slot = parse_count(field, value)?;
        }
        let [
            donation_count,
            trailer_fullness,
            hardlines_raw,
            softlines_raw,
            canvases,
            sleeves,
            caps,
            totes,
        ] = parsed;

        Ok(ValidatedCount {
            store_id,
            opener_name: opener_name.to_owned(),
            arrival_time,
            metrics: ContainerMetrics {
                donation_count,
                trailer_fullness: TrailerFullness::new(trailer_fullness)?,
                supplies: SupplyQuantities {
                    sleeves,
                    caps,
                    canvases,
                    totes,
                    hardlines_raw,
                    softlines_raw,
                },
            },
        })
    }
}

fn parse_count(field: &'static str, value: &str) -> Result<u32, ContainerDomainError> {
    value
        .trim()
        .parse::<u32>()
        .map_err(|_| ContainerDomainError::InvalidCount {
            field,
            value: value.to_owned(),
        })
}
