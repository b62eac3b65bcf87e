use crate::types::fields::{parse_number, TemperatureField};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One summarized row per year of the requested window.
///
/// The backend usually pre-aggregates a year's days into columns such as
/// `temperature_2m_max_max`; single-day requests carry the raw daily names
/// instead. [`YearlyAggregate::temperature`] accepts both and prefers the
/// aggregated column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearlyAggregate {
    pub year: i32,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl YearlyAggregate {
    pub fn new(year: i32) -> Self {
        Self {
            year,
            fields: Map::new(),
        }
    }

    pub fn with_value(mut self, key: &str, value: f64) -> Self {
        self.fields.insert(key.to_string(), Value::from(value));
        self
    }

    pub fn with_raw(mut self, key: &str, value: Value) -> Self {
        self.fields.insert(key.to_string(), value);
        self
    }

    pub fn value(&self, key: &str) -> Option<f64> {
        self.fields.get(key).and_then(parse_number)
    }

    /// Temperature statistic for this year, trying the aggregated column first
    /// and falling back to the daily column.
    pub fn temperature(&self, field: TemperatureField) -> Option<f64> {
        field.candidates().iter().find_map(|key| self.value(key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_temperature_prefers_aggregated_column() {
        let row = YearlyAggregate::new(2010)
            .with_value("temperature_2m_max", 81.0)
            .with_value("temperature_2m_max_max", 95.0);
        assert_eq!(row.temperature(TemperatureField::Max), Some(95.0));
    }

    #[test]
    fn test_temperature_falls_back_to_daily_column() {
        let row = YearlyAggregate::new(2010)
            .with_raw("temperature_2m_min_min", Value::Null)
            .with_value("temperature_2m_min", 41.0);
        assert_eq!(row.temperature(TemperatureField::Min), Some(41.0));
        assert_eq!(row.temperature(TemperatureField::Mean), None);
    }

    #[test]
    fn test_field_order_survives_round_trip() -> Result<(), serde_json::Error> {
        let row: YearlyAggregate = serde_json::from_value(json!({
            "year": 1999,
            "date_start": "1999-06-01",
            "num_days": 30,
            "temperature_2m_mean_mean": 70.25
        }))?;
        let keys: Vec<&str> = row.fields.keys().map(String::as_str).collect();
        assert_eq!(keys, ["date_start", "num_days", "temperature_2m_mean_mean"]);
        assert_eq!(row.temperature(TemperatureField::Mean), Some(70.25));
        Ok(())
    }
}
