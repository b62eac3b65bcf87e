//! Historical weather trends for a ZIP code.
//!
//! The crate turns yearly aggregate rows and raw daily observations, as served
//! by a weather backend, into a renderer-agnostic [`ChartSpec`]: raw and
//! smoothed max/min/mean temperature series plus an optional
//! "days at or above threshold" series on a secondary axis.
//!
//! The core ([`build_chart_spec`], [`moving_average`], [`days_above_threshold`])
//! is pure and synchronous. [`DashboardSession`] wraps it with the async
//! fetch/redraw cycle against any [`WeatherProvider`], such as [`HttpBridge`].

mod aggregation;
mod chart;
mod config;
mod dashboard;
mod error;
mod export;
mod provider;
mod types;

pub use error::TrendsError;

pub use config::{DashboardConfig, DEFAULT_BRIDGE_URL, DEFAULT_REQUEST_TIMEOUT};

pub use aggregation::error::AggregationError;
pub use aggregation::moving_average::{
    moving_average, resolve_window, secondary_window, MAX_AUTO_WINDOW, MIN_AUTO_WINDOW,
};
pub use aggregation::threshold::{days_above_threshold, days_above_threshold_for, YearCount};
pub use aggregation::yearly_frame::aggregate_by_year;

pub use chart::builder::{build_chart_spec, ChartBuild, DEFAULT_TITLE};
pub use chart::error::{Advisory, ChartError};
pub use chart::series::TemperatureSeries;

pub use dashboard::session::{DashboardSession, LoadedData};
pub use dashboard::status::{StatusLevel, StatusMessage};

pub use export::csv::{aggregates_to_csv, write_csv};
pub use export::error::ExportError;

pub use provider::error::{ProviderError, RequestError};
pub use provider::http_bridge::HttpBridge;
pub use provider::request::{validate_location_code, WeatherRequest};
pub use provider::types::{
    CacheStats, ClearCacheResponse, LocationInfo, WeatherResponse, YearRange,
};
pub use provider::weather_provider::WeatherProvider;

pub use types::chart_spec::{
    AxisId, AxisLayout, ChartSpec, Dash, SecondaryAxis, SeriesMode, SeriesSpec, StyleHint,
};
pub use types::daily_record::DailyRecord;
pub use types::display_options::{DisplayOptions, ParseWindowError, WindowSelector};
pub use types::fields::{parse_number, TemperatureField};
pub use types::yearly_aggregate::YearlyAggregate;
