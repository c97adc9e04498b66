use serde::{Deserialize, Serialize};

use crate::{
    frame::{FramePayload, PerformanceFrame},
    report::{V1Report, V2Report},
};

/// Outcome of evaluating one operator against one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    /// Present with at least one validator, and every validator performed acceptably.
    Good,
    /// Present, and at least one validator failed.
    Bad,
    /// Not in the frame, or in it with no validators.
    Absent,
}

pub fn derive_verdict(frame: &PerformanceFrame, operator_id: &str) -> Verdict {
    match frame.payload() {
        FramePayload::V1(report) => v1_verdict(report, operator_id),
        FramePayload::V2(report) => v2_verdict(report, operator_id),
    }
}

/// Every validator's inclusion ratio must reach the report threshold.
pub fn v1_verdict(report: &V1Report, operator_id: &str) -> Verdict {
    let Some(operator) = report.operators.get(operator_id) else {
        return Verdict::Absent;
    };
    if operator.validators.is_empty() {
        return Verdict::Absent;
    }

    match operator
        .validators
        .values()
        .all(|validator| validator.perf.meets_threshold(report.threshold))
    {
        true => Verdict::Good,
        false => Verdict::Bad,
    }
}

/// Every validator must have received a positive reward distribution.
pub fn v2_verdict(report: &V2Report, operator_id: &str) -> Verdict {
    let Some(operator) = report.operators.get(operator_id) else {
        return Verdict::Absent;
    };
    if operator.validators.is_empty() {
        return Verdict::Absent;
    }

    match operator
        .validators
        .values()
        .all(|validator| validator.distributed_rewards > 0)
    {
        true => Verdict::Good,
        false => Verdict::Bad,
    }
}
