//! Daily submission report.

use super::ContainerCount;
use crate::store::domain::{DepartmentNumber, Store};
use chrono::NaiveDate;
use std::collections::HashSet;

/// The day's submissions and the stores that have not reported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyReport {
    date: NaiveDate,
    submitted: Vec<ContainerCount>,
    missing: Vec<Store>,
}

impl DailyReport {
    /// Builds the report for `date`.
    ///
    /// A store is missing when no submission carries its department number.
    /// Missing stores are ordered by department number.
    #[must_use]
    pub fn build(date: NaiveDate, submitted: Vec<ContainerCount>, stores: Vec<Store>) -> Self {
        let reported: HashSet<&DepartmentNumber> = submitted
            .iter()
            .map(ContainerCount::department_number)
            .collect();
        let mut missing: Vec<Store> = stores
            .into_iter()
            .filter(|store| !reported.contains(store.department_number()))
            .collect();
        missing.sort_by(|a, b| a.department_number().cmp(b.department_number()));
        Self {
            date,
            submitted,
            missing,
        }
    }

    /// Returns the reporting day.
    #[must_use]
    pub const fn date(&self) -> NaiveDate {
        self.date
    }

    /// Returns the day's submissions.
    #[must_use]
    pub fn submitted(&self) -> &[ContainerCount] {
        &self.submitted
    }

    /// Returns the stores with no submission.
    #[must_use]
    pub fn missing(&self) -> &[Store] {
        &self.missing
    }
}
