use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("Invalid report url: {0}")]
    Url(#[from] url::ParseError),

    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("HTTP error {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("Failed to read report {path}: {error}")]
    Io {
        path: PathBuf,
        #[source]
        error: std::io::Error,
    },

    #[error("Report {location} is not valid JSON: {error}")]
    Decode {
        location: String,
        #[source]
        error: serde_json::Error,
    },

    #[error("Giving up on {location} after {attempts} attempts: {last}")]
    RetriesExhausted {
        location: String,
        attempts: u32,
        #[source]
        last: Box<FetchError>,
    },
}
