//! Messages for the status banner.

use crate::chart::error::{Advisory, ChartError};
use crate::error::TrendsError;
use crate::export::error::ExportError;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StatusLevel {
    Info,
    Success,
    Warning,
    Error,
}

impl fmt::Display for StatusLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusLevel::Info => write!(f, "info"),
            StatusLevel::Success => write!(f, "success"),
            StatusLevel::Warning => write!(f, "warning"),
            StatusLevel::Error => write!(f, "error"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub level: StatusLevel,
    pub text: String,
}

impl StatusMessage {
    pub fn new(level: StatusLevel, text: impl Into<String>) -> Self {
        Self {
            level,
            text: text.into(),
        }
    }

    pub fn info(text: impl Into<String>) -> Self {
        Self::new(StatusLevel::Info, text)
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self::new(StatusLevel::Success, text)
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self::new(StatusLevel::Warning, text)
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::new(StatusLevel::Error, text)
    }
}

impl fmt::Display for StatusMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.level, self.text)
    }
}

impl From<Advisory> for StatusMessage {
    fn from(advisory: Advisory) -> Self {
        StatusMessage::warning(advisory.message())
    }
}

/// Degenerate data is a warning, everything else an error.
impl From<&TrendsError> for StatusMessage {
    fn from(error: &TrendsError) -> Self {
        match error {
            TrendsError::Chart(ChartError::NoData) | TrendsError::Export(ExportError::NoData) => {
                StatusMessage::warning(error.to_string())
            }
            TrendsError::InvalidRequest(e) => StatusMessage::error(e.to_string()),
            other => StatusMessage::error(format!("Error: {other}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::error::{ProviderError, RequestError};

    #[test]
    fn test_error_levels() {
        let no_data = TrendsError::from(ChartError::NoData);
        assert_eq!(
            StatusMessage::from(&no_data),
            StatusMessage::warning("No data to display")
        );

        let invalid = TrendsError::from(RequestError::InvalidLocationCode("abc".into()));
        assert_eq!(
            StatusMessage::from(&invalid),
            StatusMessage::error("Invalid ZIP code 'abc': expected 5 digits")
        );

        let rejected = TrendsError::from(ProviderError::Rejected("backend down".into()));
        assert_eq!(
            StatusMessage::from(&rejected),
            StatusMessage::error("Error: backend down")
        );
    }

    #[test]
    fn test_advisory_is_warning() {
        let message = StatusMessage::from(Advisory::ThresholdDataUnavailable);
        assert_eq!(message.level, StatusLevel::Warning);
        assert!(message.to_string().starts_with("[warning] Daily data is not available"));
    }
}
