//! Application-level configuration for the dashboard and its bridge.

use crate::types::display_options::DisplayOptions;
use bon::Builder;
use std::time::Duration;

pub const DEFAULT_BRIDGE_URL: &str = "http://127.0.0.1:8000/api";

// Multi-decade requests fan out into one backend call per year.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

/// # Examples
///
/// ```
/// use std::time::Duration;
/// use weather_trends::DashboardConfig;
///
/// let config = DashboardConfig::builder()
///     .bridge_url("http://localhost:9000/api")
///     .request_timeout(Duration::from_secs(30))
///     .build();
/// assert_eq!(config.bridge_url, "http://localhost:9000/api");
/// assert_eq!(config.default_options.threshold, 90.0);
/// ```
#[derive(Debug, Clone, PartialEq, Builder)]
pub struct DashboardConfig {
    /// Base URL of the backend bridge; endpoint names are appended to it.
    #[builder(into, default = DEFAULT_BRIDGE_URL.to_string())]
    pub bridge_url: String,
    /// Applies to each bridge call. There is no retry.
    #[builder(default = DEFAULT_REQUEST_TIMEOUT)]
    pub request_timeout: Duration,
    /// Options used by [`crate::DashboardSession::redraw_default`].
    #[builder(default)]
    pub default_options: DisplayOptions,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}
