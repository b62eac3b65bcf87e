//! Field naming and lenient numeric parsing shared by daily and yearly records.

use serde_json::Value;

/// Reads a JSON value as a finite number.
///
/// Numbers are taken as-is, strings are trimmed and parsed. Anything else,
/// including `NaN`/infinite results, yields `None`.
pub fn parse_number(value: &Value) -> Option<f64> {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }?;
    parsed.is_finite().then_some(parsed)
}

/// The three temperature statistics the dashboard plots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemperatureField {
    Max,
    Min,
    Mean,
}

impl TemperatureField {
    /// Name of the field in a raw daily observation (e.g. `temperature_2m_max`).
    pub fn daily_key(self) -> &'static str {
        match self {
            TemperatureField::Max => "temperature_2m_max",
            TemperatureField::Min => "temperature_2m_min",
            TemperatureField::Mean => "temperature_2m_mean",
        }
    }

    /// Name of the field once the backend aggregated a year's window
    /// (e.g. the highest daily maximum, `temperature_2m_max_max`).
    pub fn aggregated_key(self) -> &'static str {
        match self {
            TemperatureField::Max => "temperature_2m_max_max",
            TemperatureField::Min => "temperature_2m_min_min",
            TemperatureField::Mean => "temperature_2m_mean_mean",
        }
    }

    /// Lookup order for yearly rows: aggregated name first.
    pub(crate) fn candidates(self) -> [&'static str; 2] {
        [self.aggregated_key(), self.daily_key()]
    }
}
