//! Response shapes returned by the data provider.

use crate::types::daily_record::DailyRecord;
use crate::types::yearly_aggregate::YearlyAggregate;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Answer to a [`crate::WeatherRequest`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct WeatherResponse {
    pub success: bool,
    /// One row per year, ascending.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub data: Vec<YearlyAggregate>,
    /// Every day of the window for every year, used for threshold counts.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub daily_data: Vec<DailyRecord>,
    #[serde(default)]
    pub location_name: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl WeatherResponse {
    pub fn ok(data: Vec<YearlyAggregate>, daily_data: Vec<DailyRecord>) -> Self {
        Self {
            success: true,
            data,
            daily_data,
            ..Default::default()
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(error.into()),
            ..Default::default()
        }
    }

    pub fn with_location_name(mut self, name: impl Into<String>) -> Self {
        self.location_name = Some(name.into());
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct YearRange {
    pub min_year: Option<i32>,
    pub max_year: Option<i32>,
}

/// Statistics about the backend's local weather cache.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CacheStats {
    pub total_weather_records: u64,
    pub total_locations_cached: u64,
    pub unique_zip_codes: u64,
    #[serde(default)]
    pub year_range: YearRange,
    #[serde(default)]
    pub database_path: String,
}

/// Renders the cache banner, e.g.
/// `12045 records, 3 locations (3 ZIP codes), years 1990-2020`.
impl fmt::Display for CacheStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} records, {} locations ({} ZIP codes)",
            self.total_weather_records, self.total_locations_cached, self.unique_zip_codes
        )?;
        match (self.year_range.min_year, self.year_range.max_year) {
            (Some(min), Some(max)) => write!(f, ", years {min}-{max}"),
            _ => write!(f, ", no years cached"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ClearCacheResponse {
    pub success: bool,
    #[serde(default)]
    pub error: Option<String>,
}

/// Geocoded details for a ZIP code.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LocationInfo {
    pub zip_code: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    #[serde(default)]
    pub place_name: Option<String>,
    #[serde(default)]
    pub state_name: Option<String>,
    #[serde(default)]
    pub state_code: Option<String>,
    #[serde(default)]
    pub county_name: Option<String>,
}

impl LocationInfo {
    /// `"Place, ST"`, or whichever parts are known. `None` when neither is.
    pub fn display_name(&self) -> Option<String> {
        let parts: Vec<&str> = [self.place_name.as_deref(), self.state_code.as_deref()]
            .into_iter()
            .flatten()
            .filter(|part| !part.is_empty())
            .collect();
        (!parts.is_empty()).then(|| parts.join(", "))
    }
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}
