pub mod error;
pub mod http_bridge;
pub mod request;
pub mod types;
pub mod weather_provider;
