//! Cumulative good-performance window.
//!
//! An operator becomes eligible once the frames it performed well in add up to `min_days`
//! without an intervening failing frame. Frames the operator is absent from pause the count,
//! a failing frame resets it to zero, and once the threshold is crossed the operator stays
//! eligible for the rest of the run.

use std::{collections::BTreeSet, num::NonZeroU64};

use ics_network_spec::clock::{EpochClock, SECONDS_PER_DAY};
use ics_performance::{
    frame::PerformanceFrame,
    operator::OperatorId,
    verdict::{Verdict, derive_verdict},
};
use tracing::debug;

use crate::frames::discover_operators;

pub const DEFAULT_MIN_DAYS: u64 = 60;

/// True once `accumulated_seconds` reaches `threshold_seconds`; the boundary itself counts.
pub fn has_reached_threshold(accumulated_seconds: u64, threshold_seconds: u64) -> bool {
    accumulated_seconds >= threshold_seconds
}

/// Result of folding one operator's verdicts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OperatorProgress {
    pub eligible: bool,
    /// Good seconds accumulated since the last reset, at the point the fold stopped.
    pub accumulated_good_seconds: u64,
    pub good_frames: usize,
    pub resets: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EligibilityWindow {
    min_days: NonZeroU64,
    clock: EpochClock,
}

impl EligibilityWindow {
    pub fn new(min_days: NonZeroU64, clock: EpochClock) -> Self {
        Self { min_days, clock }
    }

    pub fn min_days(&self) -> NonZeroU64 {
        self.min_days
    }

    pub fn clock(&self) -> EpochClock {
        self.clock
    }

    pub fn threshold_seconds(&self) -> u64 {
        self.min_days.get().saturating_mul(SECONDS_PER_DAY)
    }

    /// Folds `frames` for a single operator. `frames` must be sorted by start epoch.
    ///
    /// Stops at the first frame that brings the accumulated good time to the threshold.
    pub fn evaluate_operator(
        &self,
        frames: &[PerformanceFrame],
        operator: &OperatorId,
    ) -> OperatorProgress {
        let threshold_seconds = self.threshold_seconds();
        let mut progress = OperatorProgress::default();

        for frame in frames {
            match derive_verdict(frame, operator.as_str()) {
                Verdict::Bad => {
                    debug!(
                        "Operator {operator} failed frame [{}, {}) from {}, discarding {}s of good time",
                        frame.start_epoch(),
                        frame.end_epoch(),
                        frame.source(),
                        progress.accumulated_good_seconds
                    );
                    progress.accumulated_good_seconds = 0;
                    progress.resets += 1;
                }
                Verdict::Absent => {}
                Verdict::Good => {
                    progress.accumulated_good_seconds = progress
                        .accumulated_good_seconds
                        .saturating_add(frame.duration_seconds(&self.clock));
                    progress.good_frames += 1;

                    if has_reached_threshold(progress.accumulated_good_seconds, threshold_seconds)
                    {
                        debug!(
                            "Operator {operator} reached {}s of good time at epoch {}",
                            progress.accumulated_good_seconds,
                            frame.end_epoch()
                        );
                        progress.eligible = true;
                        return progress;
                    }
                }
            }
        }

        progress.eligible =
            has_reached_threshold(progress.accumulated_good_seconds, threshold_seconds);
        progress
    }

    /// Returns the operators in `operators` whose window is satisfied by `frames`.
    ///
    /// Each operator is folded independently; `frames` must be sorted by start epoch.
    pub fn evaluate(
        &self,
        frames: &[PerformanceFrame],
        operators: &BTreeSet<OperatorId>,
    ) -> BTreeSet<OperatorId> {
        operators
            .iter()
            .filter(|operator| self.evaluate_operator(frames, operator).eligible)
            .cloned()
            .collect()
    }
}

/// Evaluates every operator that appears in any of the sorted `frames`.
pub fn evaluate_eligibility_window(
    frames: &[PerformanceFrame],
    min_days: NonZeroU64,
    clock: EpochClock,
) -> BTreeSet<OperatorId> {
    let operators = discover_operators(frames);
    EligibilityWindow::new(min_days, clock).evaluate(frames, &operators)
}

#[cfg(test)]
mod tests {
    use ics_performance::{frame::FramePayload, report::V2Report};
    use rstest::rstest;
    use serde_json::json;

    use super::*;

    const DAY_EPOCHS: u64 = 225;

    /// Builds consecutive one-day V2 frames for operator "1" from a compact pattern:
    /// `G` good, `B` bad, `A` absent.
    fn frames_from_pattern(pattern: &str) -> Vec<PerformanceFrame> {
        pattern
            .chars()
            .enumerate()
            .map(|(index, verdict)| {
                let operators = match verdict {
                    'G' => json!({ "1": { "validators": { "v": { "distributed_rewards": 1 } } } }),
                    'B' => json!({ "1": { "validators": { "v": { "distributed_rewards": 0 } } } }),
                    _ => json!({ "2": { "validators": { "v": { "distributed_rewards": 1 } } } }),
                };
                let report: V2Report =
                    serde_json::from_value(json!({ "operators": operators })).expect("v2 report");
                let start_epoch = index as u64 * DAY_EPOCHS;
                PerformanceFrame::new(
                    format!("frame-{index}"),
                    start_epoch,
                    start_epoch + DAY_EPOCHS,
                    FramePayload::V2(report),
                )
                .expect("valid frame")
            })
            .collect()
    }

    fn window(min_days: u64) -> EligibilityWindow {
        EligibilityWindow::new(
            NonZeroU64::new(min_days).expect("non-zero"),
            EpochClock::default(),
        )
    }

    #[test]
    fn test_threshold_is_inclusive() {
        assert!(has_reached_threshold(100, 100));
        assert!(has_reached_threshold(101, 100));
        assert!(!has_reached_threshold(99, 100));
    }

    #[rstest]
    #[case("GGG", true)]
    #[case("GAGAG", true)]
    #[case("GGBGGG", true)]
    #[case("GBG", false)]
    #[case("AAAAA", false)]
    #[case("GGGB", true)]
    #[case("GGAB", false)]
    #[case("BBBGG", false)]
    fn test_pattern(#[case] pattern: &str, #[case] eligible: bool) {
        let frames = frames_from_pattern(pattern);
        let progress = window(3).evaluate_operator(&frames, &OperatorId::from("1"));

        assert_eq!(progress.eligible, eligible, "pattern {pattern}");
    }

    #[test]
    fn test_stops_at_first_qualifying_frame() {
        let frames = frames_from_pattern("GGGBB");
        let progress = window(3).evaluate_operator(&frames, &OperatorId::from("1"));

        assert!(progress.eligible);
        assert_eq!(progress.accumulated_good_seconds, 3 * SECONDS_PER_DAY);
        assert_eq!(progress.good_frames, 3);
        assert_eq!(progress.resets, 0);
    }

    #[test]
    fn test_progress_counts_resets() {
        let frames = frames_from_pattern("GBGABG");
        let progress = window(3).evaluate_operator(&frames, &OperatorId::from("1"));

        assert!(!progress.eligible);
        assert_eq!(progress.resets, 2);
        assert_eq!(progress.good_frames, 3);
        assert_eq!(progress.accumulated_good_seconds, SECONDS_PER_DAY);
    }

    #[test]
    fn test_partial_days_accumulate_in_seconds() {
        let half_day = DAY_EPOCHS / 2;
        let report: V2Report = serde_json::from_value(json!({
            "operators": { "1": { "validators": { "v": { "distributed_rewards": 1 } } } }
        }))
        .expect("v2 report");
        let frames: Vec<_> = (0..3)
            .map(|index| {
                PerformanceFrame::new(
                    "half",
                    index * half_day,
                    (index + 1) * half_day,
                    FramePayload::V2(report.clone()),
                )
                .expect("valid frame")
            })
            .collect();

        // 3 * 112 epochs * 384s = 129024s, short of a day and a half but over one day.
        let progress = window(1).evaluate_operator(&frames, &OperatorId::from("1"));
        assert!(progress.eligible);
        assert_eq!(progress.good_frames, 3);

        let progress = window(2).evaluate_operator(&frames, &OperatorId::from("1"));
        assert!(!progress.eligible);
    }

    #[test]
    fn test_custom_clock_changes_duration() {
        let frames = frames_from_pattern("G");
        // Twice as long epochs turn a one-day frame into two days.
        let window = EligibilityWindow::new(
            NonZeroU64::new(2).expect("non-zero"),
            EpochClock::new(64, 12),
        );

        assert!(window.evaluate_operator(&frames, &OperatorId::from("1")).eligible);
    }

    #[test]
    fn test_evaluate_only_considers_given_operators() {
        let frames = frames_from_pattern("GGG");
        let operators = ["1", "7"].into_iter().map(OperatorId::from).collect();

        let eligible = window(3).evaluate(&frames, &operators);

        assert_eq!(eligible, BTreeSet::from([OperatorId::from("1")]));
    }

    #[test]
    fn test_evaluate_eligibility_window_discovers_operators() {
        let frames = frames_from_pattern("GGG");
        let eligible = evaluate_eligibility_window(
            &frames,
            NonZeroU64::new(3).expect("non-zero"),
            EpochClock::default(),
        );

        // Operator "2" never appears in an all-good pattern.
        assert_eq!(eligible, BTreeSet::from([OperatorId::from("1")]));
        assert!(
            evaluate_eligibility_window(&[], NonZeroU64::MIN, EpochClock::default()).is_empty()
        );
    }
}
