//! Domain model for container counts.

mod count;
mod csv;
mod error;
mod form;
mod ids;
mod metrics;
mod report;
mod window;

pub use count::{ContainerCount, NewContainerCount, PersistedContainerCount};
pub use csv::CsvExport;
pub use error::ContainerDomainError;
pub use form::{ContainerCountForm, ValidatedCount};
pub use ids::ContainerCountId;
pub use metrics::{ContainerMetrics, TrailerFullness};
pub use report::DailyReport;
pub use window::DayWindow;
