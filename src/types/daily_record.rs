use crate::types::fields::parse_number;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One raw observation for one calendar day, as delivered by the data provider.
///
/// Apart from `year` (and an optional `date`), every column the backend sent is
/// kept verbatim in `fields`. Values may be missing, `null` or non-numeric; use
/// [`DailyRecord::value`] to read them leniently.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyRecord {
    /// The year this observation is grouped under. For windows that wrap the
    /// new year this is the year the window *started* in.
    pub year: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl DailyRecord {
    pub fn new(year: i32) -> Self {
        Self {
            year,
            date: None,
            fields: Map::new(),
        }
    }

    /// Adds or replaces a numeric field. Non-finite numbers are stored as `null`.
    pub fn with_value(mut self, key: &str, value: f64) -> Self {
        self.fields.insert(key.to_string(), Value::from(value));
        self
    }

    /// Adds or replaces a field with an arbitrary JSON value.
    pub fn with_raw(mut self, key: &str, value: Value) -> Self {
        self.fields.insert(key.to_string(), value);
        self
    }

    pub fn with_date(mut self, date: &str) -> Self {
        self.date = Some(date.to_string());
        self
    }

    /// Returns the field as a finite number, or `None` when it is absent or unparseable.
    pub fn value(&self, key: &str) -> Option<f64> {
        self.fields.get(key).and_then(parse_number)
    }

    /// Parses the leading `YYYY-MM-DD` part of `date` (the backend sends full
    /// ISO timestamps such as `2021-07-04T00:00:00`).
    pub fn calendar_date(&self) -> Option<NaiveDate> {
        let date = self.date.as_deref()?;
        let day_part = date.get(..10).unwrap_or(date);
        NaiveDate::parse_from_str(day_part, "%Y-%m-%d").ok()
    }
}
