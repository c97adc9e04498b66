use thiserror::Error;

use crate::version::ReportVersion;

#[derive(Error, Debug)]
pub enum PerformanceError {
    #[error("Unknown report version: {0}")]
    UnknownReportVersion(String),

    #[error("Report {source_id} was tagged {expected} but its document is {found}")]
    VersionMismatch {
        source_id: String,
        expected: ReportVersion,
        found: &'static str,
    },

    #[error("Report {source_id} has an unsupported document root: {found}")]
    UnexpectedDocument {
        source_id: String,
        found: &'static str,
    },

    #[error("Frame is missing its [start_epoch, end_epoch] marker")]
    MissingFrameBounds,

    #[error("Invalid frame bounds [{start_epoch}, {end_epoch}]: end must be after start")]
    InvalidFrameBounds { start_epoch: u64, end_epoch: u64 },

    #[error("Malformed frame marker: {0}")]
    MalformedFrameBounds(String),

    #[error("Malformed {version} report {source_id}: {error}")]
    MalformedReport {
        source_id: String,
        version: ReportVersion,
        #[source]
        error: serde_json::Error,
    },
}
