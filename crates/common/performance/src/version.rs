use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::PerformanceError;

/// Schema of a performance report. Selects the rule used to turn validator data into a verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportVersion {
    /// Single-frame report scored by attestation inclusion ratio against a threshold.
    V1,
    /// List of frames scored by distributed rewards.
    V2,
}

impl fmt::Display for ReportVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportVersion::V1 => write!(f, "v1"),
            ReportVersion::V2 => write!(f, "v2"),
        }
    }
}

impl FromStr for ReportVersion {
    type Err = PerformanceError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "v1" => Ok(ReportVersion::V1),
            "v2" => Ok(ReportVersion::V2),
            _ => Err(PerformanceError::UnknownReportVersion(value.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("v1", ReportVersion::V1)]
    #[case("V2", ReportVersion::V2)]
    fn test_parse_known_versions(#[case] tag: &str, #[case] expected: ReportVersion) {
        assert_eq!(tag.parse::<ReportVersion>().expect("known tag"), expected);
    }

    #[test]
    fn test_unknown_version_is_an_error() {
        let err = "v3".parse::<ReportVersion>().expect_err("v3 is unknown");
        assert!(matches!(err, PerformanceError::UnknownReportVersion(tag) if tag == "v3"));
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for version in [ReportVersion::V1, ReportVersion::V2] {
            assert_eq!(version.to_string().parse::<ReportVersion>().ok(), Some(version));
        }
    }
}
