use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ChartError {
    #[error("No data to display")]
    NoData,
}

/// A non-fatal condition reported alongside a successfully built chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Advisory {
    /// Threshold days were requested but no daily records are available.
    ThresholdDataUnavailable,
}

impl Advisory {
    pub fn message(&self) -> &'static str {
        match self {
            Advisory::ThresholdDataUnavailable => {
                "Daily data is not available for threshold analysis. Try fetching the data again."
            }
        }
    }
}
