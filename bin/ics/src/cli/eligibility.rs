use std::{num::NonZeroU64, path::PathBuf, sync::Arc, time::Duration};

use clap::Parser;
use ics_network_spec::{cli::network_parser, networks::NetworkSpec};
use ics_performance::version::ReportVersion;
use ics_report_fetcher::{ipfs::DEFAULT_IPFS_GATEWAY, retry::DEFAULT_RETRY_ATTEMPTS};
use url::Url;

const DEFAULT_NETWORK: &str = "hoodi";
const DEFAULT_MIN_DAYS: &str = "60";
const DEFAULT_REQUEST_TIMEOUT: &str = "20";
const DEFAULT_RETRY_DELAY_MS: &str = "1500";

#[derive(Debug, Parser)]
pub struct EligibilityConfig {
    #[arg(
        long,
        help = "Choose mainnet, holesky, hoodi, dev, or a path to a network YAML file",
        default_value = DEFAULT_NETWORK,
        value_parser = network_parser
    )]
    pub network: Arc<NetworkSpec>,

    #[arg(
        long = "report",
        value_name = "[v1:|v2:]PATH",
        help = "Performance report stored on disk. Repeatable. The schema is inferred unless tagged",
        value_parser = report_location_parser
    )]
    pub reports: Vec<ReportLocation>,

    #[arg(
        long = "cid",
        value_name = "[v1:|v2:]CID",
        help = "Content id of a performance report to fetch from the IPFS gateway. Repeatable",
        value_parser = report_location_parser
    )]
    pub cids: Vec<ReportLocation>,

    #[arg(long, env = "ICS_IPFS_GATEWAY", help = "IPFS HTTP gateway", default_value = DEFAULT_IPFS_GATEWAY)]
    pub ipfs_gateway: Url,

    #[arg(long, help = "HTTP request timeout in seconds", default_value = DEFAULT_REQUEST_TIMEOUT, value_parser = duration_parser)]
    pub request_timeout: Duration,

    #[arg(long, help = "Maximum download attempts per report", default_value_t = DEFAULT_RETRY_ATTEMPTS)]
    pub fetch_attempts: u32,

    #[arg(long, help = "Delay before the first download retry in milliseconds, doubled on every retry", default_value = DEFAULT_RETRY_DELAY_MS, value_parser = millis_parser)]
    pub fetch_retry_delay: Duration,

    #[arg(long, help = "Days of good performance required for eligibility", default_value = DEFAULT_MIN_DAYS, value_parser = min_days_parser)]
    pub min_days: NonZeroU64,

    #[arg(long, help = "Where to write the eligible operators JSON array")]
    pub output: Option<PathBuf>,

    #[arg(long, help = "Where to write the summary of the frames used")]
    pub frames_output: Option<PathBuf>,
}

/// A report to load, with an optional schema tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportLocation {
    pub version: Option<ReportVersion>,
    pub location: String,
}

/// Parses `[vN:]location`. A prefix shaped like a version tag must name a known version.
pub fn report_location_parser(report_string: &str) -> Result<ReportLocation, String> {
    if let Some((tag, location)) = report_string.split_once(':')
        && is_version_tag(tag)
    {
        let version = tag.parse::<ReportVersion>().map_err(|err| err.to_string())?;
        return Ok(ReportLocation {
            version: Some(version),
            location: location.to_string(),
        });
    }

    Ok(ReportLocation {
        version: None,
        location: report_string.to_string(),
    })
}

fn is_version_tag(tag: &str) -> bool {
    let mut chars = tag.chars();
    matches!(chars.next(), Some('v' | 'V'))
        && !chars.as_str().is_empty()
        && chars.all(|digit| digit.is_ascii_digit())
}

pub fn duration_parser(duration_string: &str) -> Result<Duration, String> {
    Ok(Duration::from_secs(duration_string.parse().map_err(
        |err| format!("Could not parse the request timeout: {err:?}"),
    )?))
}

pub fn millis_parser(millis_string: &str) -> Result<Duration, String> {
    Ok(Duration::from_millis(millis_string.parse().map_err(
        |err| format!("Could not parse the retry delay: {err:?}"),
    )?))
}

pub fn min_days_parser(min_days_string: &str) -> Result<NonZeroU64, String> {
    let min_days: u64 = min_days_string
        .parse()
        .map_err(|err| format!("Could not parse the minimum days: {err:?}"))?;
    NonZeroU64::new(min_days).ok_or_else(|| "Minimum days must be at least 1".to_string())
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("v1:/reports/a.json", Some(ReportVersion::V1), "/reports/a.json")]
    #[case("V2:QmCid", Some(ReportVersion::V2), "QmCid")]
    #[case("QmCid", None, "QmCid")]
    #[case("C:\\reports\\a.json", None, "C:\\reports\\a.json")]
    #[case("very:strange", None, "very:strange")]
    fn test_report_location_parser(
        #[case] input: &str,
        #[case] version: Option<ReportVersion>,
        #[case] location: &str,
    ) {
        assert_eq!(
            report_location_parser(input),
            Ok(ReportLocation {
                version,
                location: location.to_string(),
            })
        );
    }

    #[test]
    fn test_unknown_version_tag_is_fatal() {
        let err = report_location_parser("v3:QmCid").expect_err("v3 is unknown");
        assert_eq!(err, "Unknown report version: v3");
    }

    #[test]
    fn test_duration_parsers() {
        assert_eq!(duration_parser("20"), Ok(Duration::from_secs(20)));
        assert_eq!(millis_parser("1500"), Ok(Duration::from_millis(1500)));
        assert!(duration_parser("soon").is_err());
        assert!(min_days_parser("0").is_err());
        assert_eq!(min_days_parser("60").map(NonZeroU64::get), Ok(60));
    }
}
