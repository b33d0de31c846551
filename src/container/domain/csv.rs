//! CSV export of a daily report.

use super::{ContainerCount, DailyReport};
use crate::store::domain::Store;
use chrono::FixedOffset;

const HEADER: [&str; 14] = [
    "Status",
    "Store Number",
    "Store Name",
    "Opener Name",
    "Arrival Time",
    "Donation Count",
    "Trailer Fullness",
    "Hardlines Raw",
    "Softlines Raw",
    "Canvases",
    "Sleeves",
    "Caps",
    "Totes",
    "Time Submitted",
];

/// A rendered CSV file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvExport {
    file_name: String,
    contents: String,
}

impl CsvExport {
    /// Renders `report` with times shown in `offset`.
    ///
    /// Every cell is quoted. Submitted rows come first, then one row per
    /// missing store with only its number and name filled in.
    #[must_use]
    pub fn render(report: &DailyReport, offset: FixedOffset) -> Self {
        let mut rows: Vec<String> =
            Vec::with_capacity(1 + report.submitted().len() + report.missing().len());
        rows.push(join_row(HEADER.iter().copied()));
        rows.extend(
            report
                .submitted()
                .iter()
                .map(|count| {
                    let cells = submitted_cells(count, offset);
                    join_row(cells.iter().map(String::as_str))
                }),
        );
        rows.extend(report.missing().iter().map(missing_row));

        Self {
            file_name: format!("container-counts-{}.csv", report.date().format("%Y-%m-%d")),
            contents: rows.join("\n"),
        }
    }

    /// Returns the suggested file name.
    #[must_use]
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Returns the file contents.
    #[must_use]
    pub fn contents(&self) -> &str {
        &self.contents
    }
}

fn submitted_cells(count: &ContainerCount, offset: FixedOffset) -> [String; 14] {
    let metrics = count.metrics();
    let supplies = &metrics.supplies;
    [
        "Submitted".to_owned(),
        count.department_number().to_string(),
        count.store_name().to_string(),
        count.opener_name().to_owned(),
        count
            .arrival_time()
            .with_timezone(&offset)
            .format("%H:%M")
            .to_string(),
        metrics.donation_count.to_string(),
        metrics.trailer_fullness.to_string(),
        supplies.hardlines_raw.to_string(),
        supplies.softlines_raw.to_string(),
        supplies.canvases.to_string(),
        supplies.sleeves.to_string(),
        supplies.caps.to_string(),
        supplies.totes.to_string(),
        count
            .created_at()
            .with_timezone(&offset)
            .format("%m/%d/%Y %H:%M:%S")
            .to_string(),
    ]
}

fn missing_row(store: &Store) -> String {
    let leading = [
        "Missing",
        store.department_number().as_str(),
        store.name().as_str(),
    ];
    join_row(
        leading
            .into_iter()
            .chain(std::iter::repeat_n("", HEADER.len() - leading.len())),
    )
}

fn join_row<'a>(cells: impl Iterator<Item = &'a str>) -> String {
    cells.map(quote).collect::<Vec<_>>().join(",")
}

fn quote(cell: &str) -> String {
    format!("\"{}\"", cell.replace('"', "\"\""))
}
