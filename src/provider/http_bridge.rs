//! JSON-over-HTTP implementation of [`WeatherProvider`].
//!
//! Endpoints, relative to the configured base URL:
//!
//! | call             | method | path                          |
//! |------------------|--------|-------------------------------|
//! | fetch weather    | POST   | `get_weather_data`            |
//! | cache statistics | GET    | `get_cache_stats`             |
//! | clear cache      | POST   | `clear_cache`                 |
//! | location info    | GET    | `get_location_info/{zip}`     |

use crate::config::DashboardConfig;
use crate::provider::error::ProviderError;
use crate::provider::request::WeatherRequest;
use crate::provider::types::{CacheStats, ClearCacheResponse, LocationInfo, WeatherResponse};
use crate::provider::weather_provider::WeatherProvider;
use log::{debug, info, warn};
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

pub struct HttpBridge {
    base_url: String,
    client: Client,
}

#[derive(Serialize)]
struct ClearCacheBody<'a> {
    zip_code: Option<&'a str>,
}

#[derive(Deserialize)]
struct LocationEnvelope {
    success: bool,
    #[serde(default)]
    data: Option<LocationInfo>,
    #[serde(default)]
    error: Option<String>,
}

impl HttpBridge {
    pub fn new(config: &DashboardConfig) -> Result<Self, ProviderError> {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(ProviderError::ClientBuild)?;
        Ok(Self {
            base_url: config.bridge_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    async fn send<T: DeserializeOwned>(
        &self,
        url: String,
        request: RequestBuilder,
    ) -> Result<T, ProviderError> {
        debug!("Calling bridge endpoint {}", url);
        let response = request
            .send()
            .await
            .map_err(|e| ProviderError::NetworkRequest(url.clone(), e))?;

        let response = match response.error_for_status() {
            Ok(resp) => resp,
            Err(e) => {
                warn!("HTTP error for {}: {:?}", url, e);
                return Err(if let Some(status) = e.status() {
                    ProviderError::HttpStatus {
                        url,
                        status,
                        source: e,
                    }
                } else {
                    ProviderError::NetworkRequest(url, e)
                });
            }
        };

        response
            .json::<T>()
            .await
            .map_err(|e| ProviderError::Decode(url, e))
    }
}

impl WeatherProvider for HttpBridge {
    async fn fetch_weather(
        &self,
        request: &WeatherRequest,
    ) -> Result<WeatherResponse, ProviderError> {
        let url = self.endpoint("get_weather_data");
        info!(
            "Requesting weather for {} {} from {} to {}",
            request.location_code,
            request.window_label(),
            request.start_year,
            request.end_year
        );
        let response: WeatherResponse = self
            .send(url.clone(), self.client.post(&url).json(request))
            .await?;
        info!(
            "Bridge returned {} aggregated and {} daily records",
            response.data.len(),
            response.daily_data.len()
        );
        Ok(response)
    }

    async fn cache_stats(&self) -> Result<CacheStats, ProviderError> {
        let url = self.endpoint("get_cache_stats");
        self.send(url.clone(), self.client.get(&url)).await
    }

    async fn clear_cache(
        &self,
        location_code: Option<&str>,
    ) -> Result<ClearCacheResponse, ProviderError> {
        let url = self.endpoint("clear_cache");
        let body = ClearCacheBody {
            zip_code: location_code,
        };
        self.send(url.clone(), self.client.post(&url).json(&body))
            .await
    }

    async fn location_info(&self, location_code: &str) -> Result<LocationInfo, ProviderError> {
        let url = self.endpoint(&format!("get_location_info/{location_code}"));
        let envelope: LocationEnvelope = self.send(url.clone(), self.client.get(&url)).await?;
        match (envelope.success, envelope.data) {
            (true, Some(info)) => Ok(info),
            (_, _) => Err(ProviderError::Rejected(envelope.error.unwrap_or_else(|| {
                format!("Could not find location for ZIP code {location_code}")
            }))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;
    use std::net::TcpListener;
    use std::time::Duration;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpStream;
    use tokio::task::JoinHandle;

    // A port that was bound and released, so nothing is listening on it.
    fn closed_port_url() -> Result<String, std::io::Error> {
        let listener = TcpListener::bind("127.0.0.1:0")?;
        let port = listener.local_addr()?.port();
        drop(listener);
        Ok(format!("http://127.0.0.1:{port}/api/"))
    }

    /// Answers a single HTTP request with a canned `status` and `body`.
    /// Returns the base URL to point the bridge at and a handle resolving to
    /// the request line the server received.
    async fn serve_once(
        status: &'static str,
        body: &'static str,
    ) -> std::io::Result<(String, JoinHandle<std::io::Result<String>>)> {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let base_url = format!("http://{}/api", listener.local_addr()?);
        let handle = tokio::spawn(async move {
            let (mut stream, _) = listener.accept().await?;
            let request_line = read_request(&mut stream).await?;
            let response = format!(
                "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            stream.write_all(response.as_bytes()).await?;
            stream.shutdown().await?;
            Ok::<_, std::io::Error>(request_line)
        });
        Ok((base_url, handle))
    }

    // Reads headers plus `Content-Length` bytes of body.
    async fn read_request(stream: &mut TcpStream) -> std::io::Result<String> {
        let mut buf = Vec::new();
        let mut chunk = [0_u8; 1024];
        loop {
            let n = stream.read(&mut chunk).await?;
            if n == 0 {
                break;
            }
            buf.extend_from_slice(&chunk[..n]);
            let text = String::from_utf8_lossy(&buf);
            if let Some(head_end) = text.find("\r\n\r\n") {
                let content_length = text[..head_end]
                    .lines()
                    .filter_map(|line| line.split_once(':'))
                    .find(|(name, _)| name.trim().eq_ignore_ascii_case("content-length"))
                    .and_then(|(_, value)| value.trim().parse::<usize>().ok())
                    .unwrap_or(0);
                if buf.len() >= head_end + 4 + content_length {
                    break;
                }
            }
        }
        let text = String::from_utf8_lossy(&buf);
        Ok(text.lines().next().unwrap_or_default().to_string())
    }

    fn bridge_at(base_url: String) -> Result<HttpBridge, ProviderError> {
        let config = DashboardConfig::builder()
            .bridge_url(base_url)
            .request_timeout(Duration::from_secs(5))
            .build();
        HttpBridge::new(&config)
    }

    fn request() -> WeatherRequest {
        WeatherRequest::builder()
            .location_code("60601")
            .start_month(7)
            .start_day(1)
            .end_month(7)
            .end_day(31)
            .start_year(2000)
            .end_year(2010)
            .build()
    }

    #[test]
    fn test_endpoint_strips_trailing_slash() -> Result<(), ProviderError> {
        let config = DashboardConfig::builder()
            .bridge_url("http://localhost:8000/api/")
            .build();
        let bridge = HttpBridge::new(&config)?;
        assert_eq!(bridge.base_url, "http://localhost:8000/api");
        assert_eq!(
            bridge.endpoint("get_cache_stats"),
            "http://localhost:8000/api/get_cache_stats"
        );
        Ok(())
    }

    #[tokio::test]
    async fn test_refused_connection_is_network_error() -> Result<(), Box<dyn std::error::Error>> {
        let config = DashboardConfig::builder()
            .bridge_url(closed_port_url()?)
            .request_timeout(Duration::from_secs(5))
            .build();
        let bridge = HttpBridge::new(&config)?;

        match bridge.fetch_weather(&request()).await {
            Err(ProviderError::NetworkRequest(url, _)) => {
                assert!(url.ends_with("/api/get_weather_data"), "unexpected url {url}");
            }
            other => panic!("expected a network error, got {other:?}"),
        }
        Ok(())
    }

    #[tokio::test]
    async fn test_error_status_is_http_status() -> Result<(), Box<dyn std::error::Error>> {
        let (base_url, server) =
            serve_once("500 Internal Server Error", r#"{"detail":"boom"}"#).await?;
        let bridge = bridge_at(base_url)?;

        match bridge.fetch_weather(&request()).await {
            Err(ProviderError::HttpStatus { url, status, .. }) => {
                assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
                assert!(url.ends_with("/api/get_weather_data"), "unexpected url {url}");
            }
            other => panic!("expected an HTTP status error, got {other:?}"),
        }
        assert!(server.await??.starts_with("POST /api/get_weather_data "));
        Ok(())
    }

    #[tokio::test]
    async fn test_malformed_body_is_decode_error() -> Result<(), Box<dyn std::error::Error>> {
        let (base_url, server) = serve_once("200 OK", "not json").await?;
        let bridge = bridge_at(base_url)?;

        match bridge.cache_stats().await {
            Err(ProviderError::Decode(url, _)) => {
                assert!(url.ends_with("/api/get_cache_stats"), "unexpected url {url}");
            }
            other => panic!("expected a decode error, got {other:?}"),
        }
        assert!(server.await??.starts_with("GET /api/get_cache_stats "));
        Ok(())
    }

    #[tokio::test]
    async fn test_fetch_weather_decodes_response() -> Result<(), Box<dyn std::error::Error>> {
        let body = r#"{
            "success": true,
            "data": [
                {"year": 2000, "temperature_2m_max_max": 95.5, "num_days": 31},
                {"year": 2001, "temperature_2m_max_max": "97.0", "num_days": 31}
            ],
            "daily_data": [
                {"year": 2000, "date": "2000-07-01", "temperature_2m_max": 91.0}
            ],
            "location_name": "Chicago, IL"
        }"#;
        let (base_url, server) = serve_once("200 OK", body).await?;
        let bridge = bridge_at(base_url)?;

        let response = bridge.fetch_weather(&request()).await?;
        assert!(response.success);
        assert_eq!(response.location_name.as_deref(), Some("Chicago, IL"));
        assert_eq!(response.data.len(), 2);
        assert_eq!(response.data[1].value("temperature_2m_max_max"), Some(97.0));
        assert_eq!(response.daily_data.len(), 1);
        assert_eq!(response.daily_data[0].value("temperature_2m_max"), Some(91.0));
        server.await??;
        Ok(())
    }

    #[tokio::test]
    async fn test_cache_stats_decodes_response() -> Result<(), Box<dyn std::error::Error>> {
        let body = r#"{
            "total_weather_records": 12045,
            "total_locations_cached": 3,
            "unique_zip_codes": 3,
            "year_range": {"min_year": 1990, "max_year": 2020},
            "database_path": "weather_cache.db"
        }"#;
        let (base_url, server) = serve_once("200 OK", body).await?;
        let bridge = bridge_at(base_url)?;

        let stats = bridge.cache_stats().await?;
        assert_eq!(
            stats.to_string(),
            "12045 records, 3 locations (3 ZIP codes), years 1990-2020"
        );
        server.await??;
        Ok(())
    }

    #[tokio::test]
    async fn test_location_failure_keeps_backend_message() -> Result<(), Box<dyn std::error::Error>>
    {
        let (base_url, server) = serve_once(
            "200 OK",
            r#"{"success": false, "error": "ZIP code 99999 not found"}"#,
        )
        .await?;
        let bridge = bridge_at(base_url)?;

        match bridge.location_info("99999").await {
            Err(ProviderError::Rejected(message)) => {
                assert_eq!(message, "ZIP code 99999 not found");
            }
            other => panic!("expected a rejection, got {other:?}"),
        }
        assert!(server.await??.starts_with("GET /api/get_location_info/99999 "));
        Ok(())
    }

    #[tokio::test]
    async fn test_location_info_unwraps_envelope() -> Result<(), Box<dyn std::error::Error>> {
        let body = r#"{
            "success": true,
            "data": {
                "zip_code": "60601",
                "latitude": 41.88,
                "longitude": -87.62,
                "place_name": "Chicago",
                "state_code": "IL"
            }
        }"#;
        let (base_url, server) = serve_once("200 OK", body).await?;
        let bridge = bridge_at(base_url)?;

        let info = bridge.location_info("60601").await?;
        assert_eq!(info.display_name().as_deref(), Some("Chicago, IL"));
        assert_eq!(info.latitude, Some(41.88));
        server.await??;
        Ok(())
    }
}
