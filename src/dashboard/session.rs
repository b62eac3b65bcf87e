//! Caller-held dashboard state and the fetch/redraw cycle around it.
//!
//! The session owns the two buffers the chart is drawn from (yearly aggregates
//! and daily records). A successful fetch replaces both; a failed fetch clears
//! them so no stale chart is shown. Redraws only read them.

use crate::chart::builder::{build_chart_spec, ChartBuild};
use crate::chart::error::ChartError;
use crate::config::DashboardConfig;
use crate::dashboard::status::StatusMessage;
use crate::error::TrendsError;
use crate::export::csv::{aggregates_to_csv, write_csv};
use crate::export::error::ExportError;
use crate::provider::error::ProviderError;
use crate::provider::request::{validate_location_code, WeatherRequest};
use crate::provider::types::{CacheStats, LocationInfo};
use crate::provider::weather_provider::WeatherProvider;
use crate::types::daily_record::DailyRecord;
use crate::types::display_options::DisplayOptions;
use crate::types::yearly_aggregate::YearlyAggregate;
use log::{info, warn};
use std::path::{Path, PathBuf};

/// Data from the last successful fetch.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedData {
    pub request: WeatherRequest,
    pub aggregates: Vec<YearlyAggregate>,
    pub daily: Vec<DailyRecord>,
    pub location_name: Option<String>,
}

impl LoadedData {
    /// Location name from the provider, or the ZIP code when it sent none.
    pub fn display_location(&self) -> String {
        self.location_name
            .clone()
            .unwrap_or_else(|| format!("ZIP {}", self.request.location_code))
    }

    pub fn chart_title(&self) -> String {
        format!(
            "Weather Trends for {} ({}, {}-{})",
            self.display_location(),
            self.request.window_label(),
            self.request.start_year,
            self.request.end_year
        )
    }

    pub fn export_file_name(&self) -> String {
        format!(
            "weather_data_{}_{}-{}.csv",
            self.request.location_code, self.request.start_year, self.request.end_year
        )
    }
}

pub struct DashboardSession<P> {
    provider: P,
    config: DashboardConfig,
    loaded: Option<LoadedData>,
}

impl<P: WeatherProvider> DashboardSession<P> {
    pub fn new(provider: P, config: DashboardConfig) -> Self {
        Self {
            provider,
            config,
            loaded: None,
        }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    pub fn loaded(&self) -> Option<&LoadedData> {
        self.loaded.as_ref()
    }

    /// Drops the current buffers, clearing any visualization built from them.
    pub fn clear(&mut self) {
        self.loaded = None;
    }

    /// Validates `request`, asks the provider for data and replaces the buffers.
    ///
    /// Returns the status line to show on success.
    ///
    /// # Errors
    ///
    /// * [`TrendsError::InvalidRequest`] if validation fails. The provider is
    ///   not called and the current buffers are kept.
    /// * [`TrendsError::Provider`] if the call fails or the provider answers
    ///   with `success: false`. The current buffers are cleared.
    pub async fn fetch(&mut self, request: WeatherRequest) -> Result<StatusMessage, TrendsError> {
        request.validate()?;
        let request = request.normalized();

        let response = match self.provider.fetch_weather(&request).await {
            Ok(response) => response,
            Err(e) => {
                warn!("Fetching weather for {} failed: {}", request.location_code, e);
                self.clear();
                return Err(e.into());
            }
        };

        if !response.success {
            self.clear();
            let message = response.error.unwrap_or_else(|| {
                format!("No weather data found for ZIP code {}", request.location_code)
            });
            warn!("Provider rejected request: {}", message);
            return Err(ProviderError::Rejected(message).into());
        }

        if response.daily_data.is_empty() {
            warn!(
                "No daily records for {}; threshold analysis will be unavailable",
                request.location_code
            );
        }

        let loaded = LoadedData {
            request,
            aggregates: response.data,
            daily: response.daily_data,
            location_name: response.location_name.filter(|name| !name.trim().is_empty()),
        };
        info!(
            "Loaded {} yearly and {} daily records for {}",
            loaded.aggregates.len(),
            loaded.daily.len(),
            loaded.display_location()
        );

        let status = if loaded.aggregates.is_empty() {
            StatusMessage::warning(ChartError::NoData.to_string())
        } else {
            let mut text = format!(
                "Loaded {} years of data for {}",
                loaded.aggregates.len(),
                loaded.display_location()
            );
            if loaded.request.wraps_year_boundary() {
                text.push_str(&format!(
                    " ({} spans the new year)",
                    loaded.request.window_label()
                ));
            }
            StatusMessage::success(text)
        };
        self.loaded = Some(loaded);
        Ok(status)
    }

    /// Rebuilds the chart from the current buffers. Never calls the provider.
    pub fn redraw(&self, options: &DisplayOptions) -> Result<ChartBuild, TrendsError> {
        let loaded = self.loaded.as_ref().ok_or(ChartError::NoData)?;
        let mut build = build_chart_spec(&loaded.aggregates, &loaded.daily, options)?;
        build.spec.layout.title = loaded.chart_title();
        Ok(build)
    }

    pub fn redraw_default(&self) -> Result<ChartBuild, TrendsError> {
        self.redraw(&self.config.default_options)
    }

    pub fn export_csv(&self) -> Result<String, TrendsError> {
        let loaded = self.loaded.as_ref().ok_or(ExportError::NoData)?;
        Ok(aggregates_to_csv(&loaded.aggregates)?)
    }

    /// Writes the export into `dir` under [`LoadedData::export_file_name`].
    pub async fn export_to_dir(&self, dir: &Path) -> Result<PathBuf, TrendsError> {
        let loaded = self.loaded.as_ref().ok_or(ExportError::NoData)?;
        let path = dir.join(loaded.export_file_name());
        write_csv(&path, &loaded.aggregates).await?;
        Ok(path)
    }

    pub async fn cache_stats(&self) -> Result<CacheStats, TrendsError> {
        Ok(self.provider.cache_stats().await?)
    }

    /// Clears the provider's cache for one ZIP code, or all of it.
    /// The session's own buffers are left alone.
    pub async fn clear_cache(
        &self,
        location_code: Option<&str>,
    ) -> Result<StatusMessage, TrendsError> {
        if let Some(code) = location_code {
            validate_location_code(code)?;
        }
        let code = location_code.map(str::trim);
        let response = self.provider.clear_cache(code).await?;
        if !response.success {
            let message = response
                .error
                .unwrap_or_else(|| "Failed to clear cache".to_string());
            return Err(ProviderError::Rejected(message).into());
        }
        Ok(match code {
            Some(code) => StatusMessage::success(format!("Cache cleared for ZIP code {code}")),
            None => StatusMessage::success("Cache cleared"),
        })
    }

    pub async fn location_info(&self, location_code: &str) -> Result<LocationInfo, TrendsError> {
        validate_location_code(location_code)?;
        Ok(self.provider.location_info(location_code.trim()).await?)
    }
}
