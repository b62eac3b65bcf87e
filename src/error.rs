use crate::aggregation::error::AggregationError;
use crate::chart::error::ChartError;
use crate::export::error::ExportError;
use crate::provider::error::{ProviderError, RequestError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TrendsError {
    #[error(transparent)]
    InvalidRequest(#[from] RequestError),

    #[error(transparent)]
    Provider(#[from] ProviderError),

    #[error(transparent)]
    Chart(#[from] ChartError),

    #[error(transparent)]
    Aggregation(#[from] AggregationError),

    #[error(transparent)]
    Export(#[from] ExportError),
}
