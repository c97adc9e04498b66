use std::{fs, path::Path};

use serde_json::Value;

use crate::errors::FetchError;

/// Reads a report that was already downloaded to disk.
pub fn load_report_file(path: impl AsRef<Path>) -> Result<Value, FetchError> {
    let path = path.as_ref();
    let contents = fs::read(path).map_err(|error| FetchError::Io {
        path: path.to_path_buf(),
        error,
    })?;

    serde_json::from_slice(&contents).map_err(|error| FetchError::Decode {
        location: path.display().to_string(),
        error,
    })
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_load_report_file() {
        let mut file = tempfile::NamedTempFile::new().expect("create temp file");
        write!(file, r#"{{"frame": [1, 2], "operators": {{}}}}"#).expect("write report");

        let report = load_report_file(file.path()).expect("report should load");
        assert_eq!(report["frame"][1], 2);
    }

    #[test]
    fn test_missing_file() {
        let err = load_report_file("/no/such/report.json").expect_err("missing file");
        assert!(matches!(err, FetchError::Io { .. }));
    }

    #[test]
    fn test_invalid_json() {
        let mut file = tempfile::NamedTempFile::new().expect("create temp file");
        write!(file, "not json").expect("write report");

        let err = load_report_file(file.path()).expect_err("invalid json");
        assert!(matches!(err, FetchError::Decode { .. }));
    }
}
