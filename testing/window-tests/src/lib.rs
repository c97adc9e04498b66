//! Builders for realistic report documents used by the eligibility window tests.

use ics_network_spec::clock::EpochClock;
use ics_performance::{
    document::frames_from_document, frame::PerformanceFrame, version::ReportVersion,
};
use serde_json::{Map, Value, json};

pub const V1_THRESHOLD: f64 = 0.9;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Every validator performs.
    Good,
    /// One of two validators under-performs.
    Bad,
    /// Listed in the report but without validators.
    Empty,
}

fn v1_operator(status: Status) -> Value {
    match status {
        Status::Good => json!({ "validators": {
            "1": { "perf": { "assigned": 32, "included": 32 } },
            "2": { "perf": { "assigned": 0, "included": 0 } }
        }}),
        Status::Bad => json!({ "validators": {
            "1": { "perf": { "assigned": 32, "included": 32 } },
            "2": { "perf": { "assigned": 32, "included": 20 } }
        }}),
        Status::Empty => json!({ "validators": {} }),
    }
}

fn v2_operator(status: Status) -> Value {
    match status {
        Status::Good => json!({ "validators": {
            "1": { "distributed_rewards": 1_000 },
            "2": { "distributed_rewards": 250 }
        }}),
        Status::Bad => json!({ "validators": {
            "1": { "distributed_rewards": 1_000 },
            "2": { "distributed_rewards": 0 }
        }}),
        Status::Empty => json!({ "validators": {} }),
    }
}

fn operators(statuses: &[(&str, Status)], render: fn(Status) -> Value) -> Value {
    Value::Object(
        statuses
            .iter()
            .map(|(id, status)| (id.to_string(), render(*status)))
            .collect::<Map<_, _>>(),
    )
}

/// A V1 report document for `[start_epoch, end_epoch)`. Operators not listed are absent.
pub fn v1_document(start_epoch: u64, end_epoch: u64, statuses: &[(&str, Status)]) -> Value {
    json!({
        "frame": [start_epoch, end_epoch],
        "threshold": V1_THRESHOLD,
        "operators": operators(statuses, v1_operator),
    })
}

/// One item of a V2 report list for `[start_epoch, end_epoch)`.
pub fn v2_item(start_epoch: u64, end_epoch: u64, statuses: &[(&str, Status)]) -> Value {
    json!({
        "frame": [start_epoch, end_epoch],
        "operators": operators(statuses, v2_operator),
    })
}

/// Lays out consecutive frames of equal length, in publication order.
#[derive(Debug)]
pub struct FrameSequence {
    frame_epochs: u64,
    next_epoch: u64,
    frames: Vec<PerformanceFrame>,
}

impl FrameSequence {
    /// Frames lasting `days` each under `clock`.
    pub fn new(clock: EpochClock, days: u64) -> Self {
        Self {
            frame_epochs: clock.epochs_per_day() * days,
            next_epoch: 10_000,
            frames: vec![],
        }
    }

    fn next_bounds(&mut self) -> (u64, u64) {
        let start_epoch = self.next_epoch;
        self.next_epoch += self.frame_epochs;
        (start_epoch, self.next_epoch)
    }

    pub fn v1(mut self, statuses: &[(&str, Status)]) -> Self {
        let (start_epoch, end_epoch) = self.next_bounds();
        let source = format!("v1-{start_epoch}");
        self.push(&source, None, v1_document(start_epoch, end_epoch, statuses));
        self
    }

    pub fn v2(mut self, statuses: &[(&str, Status)]) -> Self {
        let (start_epoch, end_epoch) = self.next_bounds();
        let source = format!("v2-{start_epoch}");
        self.push(
            &source,
            Some(ReportVersion::V2),
            json!([v2_item(start_epoch, end_epoch, statuses)]),
        );
        self
    }

    fn push(&mut self, source: &str, version: Option<ReportVersion>, document: Value) {
        let frames = frames_from_document(source, version, document)
            .unwrap_or_else(|err| panic!("fixture {source} should build: {err}"));
        self.frames.extend(frames);
    }

    pub fn build(self) -> Vec<PerformanceFrame> {
        self.frames
    }
}
