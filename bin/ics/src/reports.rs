use anyhow::Context;
use ics_network_spec::networks::NetworkSpec;
use ics_performance::{document::frames_from_document, frame::PerformanceFrame};
use ics_report_fetcher::{ipfs::IpfsClient, local::load_report_file};
use tracing::{info, warn};

use crate::cli::eligibility::ReportLocation;

/// Loads the frames of every report stored on disk.
pub fn load_local_frames(reports: &[ReportLocation]) -> anyhow::Result<Vec<PerformanceFrame>> {
    let mut frames = vec![];
    for report in reports {
        let document = load_report_file(&report.location)?;
        let report_frames = frames_from_document(&report.location, report.version, document)
            .with_context(|| format!("Failed to read frames from {}", report.location))?;
        log_report(&report.location, &report_frames);
        frames.extend(report_frames);
    }
    Ok(frames)
}

/// Downloads every report by content id and loads its frames.
pub async fn fetch_remote_frames(
    client: &IpfsClient,
    cids: &[ReportLocation],
) -> anyhow::Result<Vec<PerformanceFrame>> {
    let mut frames = vec![];
    for cid in cids {
        let document = client.fetch_report(&cid.location).await?;
        let report_frames = frames_from_document(&cid.location, cid.version, document)
            .with_context(|| format!("Failed to read frames from {}", cid.location))?;
        log_report(&cid.location, &report_frames);
        frames.extend(report_frames);
    }
    Ok(frames)
}

fn log_report(location: &str, frames: &[PerformanceFrame]) {
    match frames.first() {
        Some(frame) => info!(
            "Loaded {} {} frame(s) from {location}",
            frames.len(),
            frame.version()
        ),
        None => warn!("Report {location} contains no usable frames"),
    }
}

/// Logs the epoch range and wall-clock span covered by sorted `frames`.
pub fn log_frame_span(frames: &[PerformanceFrame], network: &NetworkSpec) {
    let (Some(first), Some(last_end)) = (
        frames.first(),
        frames.iter().map(PerformanceFrame::end_epoch).max(),
    ) else {
        warn!("No frames to evaluate");
        return;
    };

    info!(
        "Evaluating {} frames covering epochs {}..{} (unix time {}..{}) on {}",
        frames.len(),
        first.start_epoch(),
        last_end,
        network.epoch_start_time(first.start_epoch()),
        network.epoch_start_time(last_end),
        network.network
    );
}
