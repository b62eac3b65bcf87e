use thiserror::Error;

/// A request rejected before anything is sent to the provider.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RequestError {
    #[error("Invalid ZIP code '{0}': expected 5 digits")]
    InvalidLocationCode(String),

    #[error("Invalid month {0}: expected a value from 1 to 12")]
    InvalidMonth(u32),

    #[error("Invalid day {day} for month {month}")]
    InvalidDay { month: u32, day: u32 },

    #[error("Start year {start} must not be after end year {end}")]
    InvertedYearRange { start: i32, end: i32 },
}

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("Failed to build HTTP client")]
    ClientBuild(#[source] reqwest::Error),

    #[error("Network request failed for {0}")]
    NetworkRequest(String, #[source] reqwest::Error),

    #[error("HTTP request failed for {url} with status {status}")]
    HttpStatus {
        url: String,
        status: reqwest::StatusCode,
        #[source]
        source: reqwest::Error,
    },

    #[error("Failed to decode response from {0}")]
    Decode(String, #[source] reqwest::Error),

    // The backend answered with `success: false`
    #[error("{0}")]
    Rejected(String),
}
