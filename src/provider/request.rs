//! The weather request sent to the data provider and its local validation.

use crate::provider::error::RequestError;
use bon::Builder;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A month/day window repeated over a range of years for one ZIP code.
///
/// When the end month/day comes before the start month/day the window wraps
/// across the new year (e.g. Dec 15 to Jan 15); every year in
/// `start_year..=end_year` then contributes one such winter.
///
/// # Examples
///
/// ```
/// use weather_trends::WeatherRequest;
///
/// let request = WeatherRequest::builder()
///     .location_code("10001")
///     .start_month(6)
///     .start_day(1)
///     .end_month(8)
///     .end_day(31)
///     .start_year(1990)
///     .end_year(2020)
///     .build();
/// assert!(request.validate().is_ok());
/// assert_eq!(request.year_count(), 31);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Builder, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherRequest {
    #[builder(into)]
    pub location_code: String,
    pub start_month: u32,
    pub start_day: u32,
    pub end_month: u32,
    pub end_day: u32,
    pub start_year: i32,
    pub end_year: i32,
}

impl WeatherRequest {
    /// Checks the request before it reaches the provider.
    ///
    /// # Errors
    ///
    /// * [`RequestError::InvalidLocationCode`] unless the trimmed code is exactly five digits.
    /// * [`RequestError::InvalidMonth`] / [`RequestError::InvalidDay`] for impossible dates.
    ///   February 29 is accepted; the provider skips it in non-leap years.
    /// * [`RequestError::InvertedYearRange`] when `start_year > end_year`.
    pub fn validate(&self) -> Result<(), RequestError> {
        validate_location_code(&self.location_code)?;
        check_month_day(self.start_month, self.start_day)?;
        check_month_day(self.end_month, self.end_day)?;
        if self.start_year > self.end_year {
            return Err(RequestError::InvertedYearRange {
                start: self.start_year,
                end: self.end_year,
            });
        }
        Ok(())
    }

    /// Copy of the request with surrounding whitespace stripped from the ZIP code.
    pub fn normalized(&self) -> Self {
        Self {
            location_code: self.location_code.trim().to_string(),
            ..self.clone()
        }
    }

    /// True when the end month/day comes before the start month/day.
    pub fn wraps_year_boundary(&self) -> bool {
        (self.end_month, self.end_day) < (self.start_month, self.start_day)
    }

    pub fn year_count(&self) -> usize {
        usize::try_from(i64::from(self.end_year) - i64::from(self.start_year) + 1).unwrap_or(0)
    }

    /// `MM-DD to MM-DD`, as shown in status messages and chart titles.
    pub fn window_label(&self) -> String {
        format!(
            "{:02}-{:02} to {:02}-{:02}",
            self.start_month, self.start_day, self.end_month, self.end_day
        )
    }
}

/// Accepts exactly five ASCII digits once surrounding whitespace is trimmed.
pub fn validate_location_code(code: &str) -> Result<(), RequestError> {
    let trimmed = code.trim();
    if trimmed.len() != 5 || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return Err(RequestError::InvalidLocationCode(code.to_string()));
    }
    Ok(())
}

fn check_month_day(month: u32, day: u32) -> Result<(), RequestError> {
    if !(1..=12).contains(&month) {
        return Err(RequestError::InvalidMonth(month));
    }
    // 2000 is a leap year, so Feb 29 passes
    NaiveDate::from_ymd_opt(2000, month, day)
        .map(|_| ())
        .ok_or(RequestError::InvalidDay { month, day })
}
