use serde::Serialize;

use crate::indicator::GiniRecord;

/// Most recent usable observation in a response.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LatestGini {
    pub country_name: String,
    pub year: i32,
    pub value: f64,
}

/// Picks the row with the greatest year whose value parses as a number.
///
/// Rows without a date or value are ignored; rows whose year or value does
/// not parse are skipped with a warning. The first row wins a tie on year.
pub fn find_latest_valid(records: &[GiniRecord]) -> Option<LatestGini> {
    let mut latest: Option<LatestGini> = None;

    for record in records.iter().filter(|record| record.has_observation()) {
        let (Some(year), Some(value)) = (record.year(), record.numeric_value()) else {
            log::warn!(
                "skipping record with invalid year or value: date={:?} value={:?}",
                record.date,
                record.value
            );
            continue;
        };

        if latest.as_ref().is_none_or(|current| year > current.year) {
            latest = Some(LatestGini {
                country_name: record.country_name().unwrap_or("N/A").to_string(),
                year,
                value,
            });
        }
    }

    latest
}

/// Rows with an observation, oldest date first.
pub fn history(records: &[GiniRecord]) -> Vec<&GiniRecord> {
    let mut rows: Vec<&GiniRecord> = records
        .iter()
        .filter(|record| record.has_observation())
        .collect();
    rows.sort_by(|a, b| a.date.cmp(&b.date));
    rows
}
