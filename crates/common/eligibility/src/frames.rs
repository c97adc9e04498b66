use std::collections::BTreeSet;

use ics_performance::{frame::PerformanceFrame, operator::OperatorId};

/// Orders frames by start epoch. The sort is stable, so frames starting at the same epoch
/// keep the order they were loaded in.
pub fn sort_frames(frames: &mut [PerformanceFrame]) {
    frames.sort_by_key(PerformanceFrame::start_epoch);
}

/// Union of every operator id present in any frame.
pub fn discover_operators(frames: &[PerformanceFrame]) -> BTreeSet<OperatorId> {
    frames
        .iter()
        .flat_map(PerformanceFrame::operator_ids)
        .cloned()
        .collect()
}
