use ics_network_spec::clock::EpochClock;
use serde::{Deserialize, Serialize};

use crate::{
    error::PerformanceError,
    operator::OperatorId,
    report::{V1Report, V2Report},
    version::ReportVersion,
};

/// Report body of a single frame, tagged by the schema it was published in.
#[derive(Debug, Clone, PartialEq)]
pub enum FramePayload {
    V1(V1Report),
    V2(V2Report),
}

impl FramePayload {
    pub fn version(&self) -> ReportVersion {
        match self {
            FramePayload::V1(_) => ReportVersion::V1,
            FramePayload::V2(_) => ReportVersion::V2,
        }
    }

    pub fn operator_ids(&self) -> Box<dyn Iterator<Item = &OperatorId> + '_> {
        match self {
            FramePayload::V1(report) => Box::new(report.operators.keys()),
            FramePayload::V2(report) => Box::new(report.operators.keys()),
        }
    }
}

/// A performance report covering the epoch range `[start_epoch, end_epoch)`.
///
/// Frames can only be built with `end_epoch > start_epoch`, so every frame contributes a
/// positive duration.
#[derive(Debug, Clone, PartialEq)]
pub struct PerformanceFrame {
    source: String,
    start_epoch: u64,
    end_epoch: u64,
    payload: FramePayload,
}

impl PerformanceFrame {
    pub fn new(
        source: impl Into<String>,
        start_epoch: u64,
        end_epoch: u64,
        payload: FramePayload,
    ) -> Result<Self, PerformanceError> {
        if end_epoch <= start_epoch {
            return Err(PerformanceError::InvalidFrameBounds {
                start_epoch,
                end_epoch,
            });
        }

        Ok(Self {
            source: source.into(),
            start_epoch,
            end_epoch,
            payload,
        })
    }

    /// Identifier of the report the frame came from, e.g. its content id.
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn start_epoch(&self) -> u64 {
        self.start_epoch
    }

    pub fn end_epoch(&self) -> u64 {
        self.end_epoch
    }

    pub fn payload(&self) -> &FramePayload {
        &self.payload
    }

    pub fn version(&self) -> ReportVersion {
        self.payload.version()
    }

    pub fn duration_epochs(&self) -> u64 {
        self.end_epoch - self.start_epoch
    }

    pub fn duration_seconds(&self, clock: &EpochClock) -> u64 {
        clock.epochs_to_seconds(self.duration_epochs())
    }

    pub fn operator_ids(&self) -> impl Iterator<Item = &OperatorId> {
        self.payload.operator_ids()
    }

    pub fn meta(&self) -> FrameMeta {
        FrameMeta {
            source: self.source.clone(),
            version: self.version(),
            start_epoch: self.start_epoch,
            end_epoch: self.end_epoch,
        }
    }
}

/// Summary of a frame used in an evaluation run, written out for auditing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameMeta {
    pub source: String,
    pub version: ReportVersion,
    pub start_epoch: u64,
    pub end_epoch: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_empty_and_inverted_frames() {
        for (start, end) in [(10, 10), (10, 9)] {
            let err = PerformanceFrame::new("cid", start, end, FramePayload::V2(V2Report::default()))
                .expect_err("non-positive duration must be rejected");
            assert!(matches!(
                err,
                PerformanceError::InvalidFrameBounds { start_epoch, end_epoch }
                    if start_epoch == start && end_epoch == end
            ));
        }
    }

    #[test]
    fn test_duration_and_meta() {
        let frame = PerformanceFrame::new("cid", 100, 325, FramePayload::V1(V1Report::default()))
            .expect("valid frame");

        assert_eq!(frame.duration_epochs(), 225);
        assert_eq!(frame.duration_seconds(&EpochClock::default()), 86_400);
        assert_eq!(
            frame.meta(),
            FrameMeta {
                source: "cid".to_string(),
                version: ReportVersion::V1,
                start_epoch: 100,
                end_epoch: 325,
            }
        );
    }
}
