use crate::provider::error::ProviderError;
use crate::provider::request::WeatherRequest;
use crate::provider::types::{CacheStats, ClearCacheResponse, LocationInfo, WeatherResponse};
use std::future::Future;

/// The backend that acquires, geocodes and caches weather data.
///
/// Each call is a single request/response exchange. Implementations report
/// transport failures as `Err`; a backend that answered but could not serve
/// the request reports it inside the response (`success: false`).
pub trait WeatherProvider: Send + Sync {
    fn fetch_weather(
        &self,
        request: &WeatherRequest,
    ) -> impl Future<Output = Result<WeatherResponse, ProviderError>> + Send;

    fn cache_stats(&self) -> impl Future<Output = Result<CacheStats, ProviderError>> + Send;

    /// Clears cached data for one ZIP code, or everything when `location_code` is `None`.
    fn clear_cache(
        &self,
        location_code: Option<&str>,
    ) -> impl Future<Output = Result<ClearCacheResponse, ProviderError>> + Send;

    fn location_info(
        &self,
        location_code: &str,
    ) -> impl Future<Output = Result<LocationInfo, ProviderError>> + Send;
}
