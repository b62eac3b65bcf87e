use crate::types::daily_record::DailyRecord;
use crate::types::fields::TemperatureField;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Number of qualifying days in one year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct YearCount {
    pub year: i32,
    pub count: u32,
}

/// Counts, per year, the days whose daily maximum temperature is at or above
/// `threshold`.
///
/// Years are returned in ascending order. A year with records but no
/// qualifying day is reported with a count of 0. Records whose
/// `temperature_2m_max` is missing or unparseable are skipped. Empty input
/// yields an empty result.
///
/// # Examples
///
/// ```
/// use weather_trends::{days_above_threshold, DailyRecord};
///
/// let days = vec![
///     DailyRecord::new(2020).with_value("temperature_2m_max", 90.0),
///     DailyRecord::new(2020).with_value("temperature_2m_max", 60.0),
///     DailyRecord::new(2021).with_value("temperature_2m_max", 95.0),
/// ];
/// let counts: Vec<u32> = days_above_threshold(&days, 70.0)
///     .iter()
///     .map(|c| c.count)
///     .collect();
/// assert_eq!(counts, vec![1, 1]);
/// ```
pub fn days_above_threshold(records: &[DailyRecord], threshold: f64) -> Vec<YearCount> {
    days_above_threshold_for(records, TemperatureField::Max.daily_key(), threshold)
}

/// Same as [`days_above_threshold`] but counts on an arbitrary daily field.
pub fn days_above_threshold_for(
    records: &[DailyRecord],
    field: &str,
    threshold: f64,
) -> Vec<YearCount> {
    let mut by_year: BTreeMap<i32, u32> = BTreeMap::new();
    for record in records {
        let count = by_year.entry(record.year).or_insert(0);
        if record.value(field).is_some_and(|v| v >= threshold) {
            *count += 1;
        }
    }
    by_year
        .into_iter()
        .map(|(year, count)| YearCount { year, count })
        .collect()
}
