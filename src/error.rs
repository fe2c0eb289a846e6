use reqwest::StatusCode;
use std::path::PathBuf;
use thiserror::Error;

/// Error type for the fetch / parse / export pipeline.
#[derive(Debug, Error)]
pub enum SsqError {
    /// The request never completed (DNS, connection, timeout).
    #[error("request to {url} failed: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The endpoint answered with a non-success status.
    #[error("{url} returned HTTP {status}")]
    HttpStatus { status: StatusCode, url: String },

    /// The response is valid JSON but not in the expected shape.
    #[error("unexpected response shape: {0}")]
    Parse(String),

    /// The response is not valid JSON at all.
    #[error("response is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The CSV target could not be written.
    #[error("failed to write CSV {}: {source}", .path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// The XLSX target could not be written.
    #[error("failed to write XLSX {}: {source}", .path.display())]
    Xlsx {
        path: PathBuf,
        #[source]
        source: rust_xlsxwriter::XlsxError,
    },
}
