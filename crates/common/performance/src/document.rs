//! Turns fetched report documents into [`PerformanceFrame`]s.
//!
//! A V1 document is a single JSON object. A V2 document is a JSON array where every item is
//! a frame of its own. Each frame carries its epoch range in a `"frame": [start, end]`
//! marker; frames whose marker is missing or unusable are dropped here, so nothing
//! downstream ever sees a frame without valid bounds.

use serde_json::Value;
use tracing::warn;

use crate::{
    error::PerformanceError,
    frame::{FramePayload, PerformanceFrame},
    report::{V1Report, V2Report},
    version::ReportVersion,
};

pub const FRAME_KEY: &str = "frame";

/// Builds the frames contained in `document`.
///
/// `version_hint` forces the schema. Without it the schema is inferred from the document
/// shape: arrays are V2, objects are V1.
pub fn frames_from_document(
    source: &str,
    version_hint: Option<ReportVersion>,
    document: Value,
) -> Result<Vec<PerformanceFrame>, PerformanceError> {
    let (version, items) = match (version_hint, document) {
        (Some(ReportVersion::V1), Value::Array(_)) => {
            return Err(PerformanceError::VersionMismatch {
                source_id: source.to_string(),
                expected: ReportVersion::V1,
                found: "an array",
            });
        }
        (None | Some(ReportVersion::V2), Value::Array(items)) => (ReportVersion::V2, items),
        (version_hint, item @ Value::Object(_)) => {
            (version_hint.unwrap_or(ReportVersion::V1), vec![item])
        }
        (_, other) => {
            return Err(PerformanceError::UnexpectedDocument {
                source_id: source.to_string(),
                found: value_kind(&other),
            });
        }
    };

    let mut frames = Vec::with_capacity(items.len());
    for (index, item) in items.into_iter().enumerate() {
        let (start_epoch, end_epoch) = match extract_frame_bounds(&item) {
            Ok(bounds) => bounds,
            Err(err) => {
                warn!("Dropping frame {index} of report {source}: {err}");
                continue;
            }
        };

        let payload = parse_payload(source, version, item)?;
        match PerformanceFrame::new(source, start_epoch, end_epoch, payload) {
            Ok(frame) => frames.push(frame),
            Err(err) => warn!("Dropping frame {index} of report {source}: {err}"),
        }
    }

    Ok(frames)
}

/// Reads the `[start_epoch, end_epoch]` marker of a frame.
///
/// Epochs may be encoded as integers or as decimal strings.
pub fn extract_frame_bounds(item: &Value) -> Result<(u64, u64), PerformanceError> {
    let marker = item
        .get(FRAME_KEY)
        .and_then(Value::as_array)
        .ok_or(PerformanceError::MissingFrameBounds)?;

    let [start, end] = marker.as_slice() else {
        return Err(PerformanceError::MalformedFrameBounds(format!(
            "expected two epochs, got {}",
            marker.len()
        )));
    };

    Ok((epoch_from_value(start)?, epoch_from_value(end)?))
}

fn epoch_from_value(value: &Value) -> Result<u64, PerformanceError> {
    match value {
        Value::Number(number) => number.as_u64(),
        Value::String(string) => string.trim().parse().ok(),
        _ => None,
    }
    .ok_or_else(|| PerformanceError::MalformedFrameBounds(format!("{value} is not an epoch")))
}

fn parse_payload(
    source: &str,
    version: ReportVersion,
    item: Value,
) -> Result<FramePayload, PerformanceError> {
    let malformed = |error| PerformanceError::MalformedReport {
        source_id: source.to_string(),
        version,
        error,
    };

    match version {
        ReportVersion::V1 => serde_json::from_value::<V1Report>(item)
            .map(FramePayload::V1)
            .map_err(malformed),
        ReportVersion::V2 => serde_json::from_value::<V2Report>(item)
            .map(FramePayload::V2)
            .map_err(malformed),
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
