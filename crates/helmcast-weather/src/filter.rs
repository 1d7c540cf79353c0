//! Target-date selection over forecast records.
//!
//! Pure functions over already-fetched data. The planner owns the decision
//! of which date to target and what an empty selection means.

use chrono::{NaiveDate, NaiveDateTime};

use crate::types::{ForecastRecord, WindSample};

/// Timestamp layout used by the forecast API ("2026-08-24 15:00:00").
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Keep the records whose timestamp falls on `target`, preserving order.
///
/// Timestamps are parsed and compared as calendar dates. Records with an
/// unparseable timestamp are skipped rather than matched.
pub fn for_date(records: &[ForecastRecord], target: NaiveDate) -> Vec<ForecastRecord> {
    records
        .iter()
        .filter(|record| record_date(record) == Some(target))
        .cloned()
        .collect()
}

/// Reduce records to the wind summary consumed by the advice prompt,
/// preserving order.
pub fn wind_summary(records: &[ForecastRecord]) -> Vec<WindSample> {
    records.iter().map(WindSample::from).collect()
}

fn record_date(record: &ForecastRecord) -> Option<NaiveDate> {
    NaiveDateTime::parse_from_str(&record.timestamp, TIMESTAMP_FORMAT)
        .map(|dt| dt.date())
        .ok()
}
