use polars::error::PolarsError;
use std::path::PathBuf;
use std::string::FromUtf8Error;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("No data to export")]
    NoData,

    #[error("Encoding error writing CSV")]
    CsvEncode(#[from] PolarsError),

    #[error("CSV output is not valid UTF-8")]
    Utf8(#[from] FromUtf8Error),

    #[error("I/O error writing CSV file '{0}'")]
    FileWrite(PathBuf, #[source] std::io::Error),

    #[error("Background task failed to complete")]
    TaskJoin(#[from] tokio::task::JoinError),
}
