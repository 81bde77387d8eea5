// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Statistics
//!
//! Statistics are stored in the context and incremented by the engine as
//! stages run. Counters and failures share one flat array; failures are
//! indexed after the counters.

use crate::solver::SolveFailure;
use strum::EnumCount;
use strum_macros::EnumCount as EnumCountMacro;

#[derive(EnumCountMacro, Copy, Clone, Debug)]
#[repr(u8)]
pub enum Counters {
    /// Reduction passes (always 1 for a completed run).
    Reductions,
    /// Independent-zero selection passes.
    SelectionPasses,
    /// Line cover computations.
    CoverPasses,
    /// Matrix adjustments.
    Adjustments,
}

const COUNT: usize = Counters::COUNT + SolveFailure::COUNT;

#[derive(Debug, Default)]
pub struct Statistics {
    stats: [u64; COUNT],
}

impl Statistics {
    pub fn new() -> Self {
        Statistics::default()
    }

    /// Increment the specified counter by 1.
    pub fn increment_counter(&mut self, counter: Counters) {
        self.stats[counter as usize] += 1;
    }

    /// Get the current value of the specified counter.
    pub fn get(&self, counter: Counters) -> u64 {
        self.stats[counter as usize]
    }

    /// Record a failure in the slot reserved for its variant.
    pub fn record_failure(&mut self, failure: &SolveFailure) {
        self.stats[Counters::COUNT + failure_index(failure)] += 1;
    }

    /// Get the number of recorded failures of the same variant as `failure`.
    pub fn failures(&self, failure: &SolveFailure) -> u64 {
        self.stats[Counters::COUNT + failure_index(failure)]
    }
}

/// Stable slot for each failure variant, field values ignored.
fn failure_index(failure: &SolveFailure) -> usize {
    match failure {
        SolveFailure::EmptyMatrix => 0,
        SolveFailure::NonSquareRow { .. } => 1,
        SolveFailure::AssignmentOutOfRange { .. } => 2,
        SolveFailure::AdjustLimitExceeded { .. } => 3,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters_start_at_zero() {
        let stats = Statistics::new();
        assert_eq!(stats.get(Counters::Reductions), 0);
        assert_eq!(stats.get(Counters::Adjustments), 0);
    }

    #[test]
    fn test_increment_and_get() {
        let mut stats = Statistics::new();
        stats.increment_counter(Counters::SelectionPasses);
        stats.increment_counter(Counters::SelectionPasses);
        stats.increment_counter(Counters::CoverPasses);

        assert_eq!(stats.get(Counters::SelectionPasses), 2);
        assert_eq!(stats.get(Counters::CoverPasses), 1);
        assert_eq!(stats.get(Counters::Adjustments), 0);
    }

    #[test]
    fn test_failure_slots_are_distinct() {
        let mut stats = Statistics::new();
        let limit = SolveFailure::AdjustLimitExceeded {
            cycles: 9,
            limit: 8,
        };
        stats.record_failure(&limit);

        assert_eq!(stats.failures(&limit), 1);
        assert_eq!(stats.failures(&SolveFailure::EmptyMatrix), 0);
        // Counters are unaffected by failure recording.
        assert_eq!(stats.get(Counters::Adjustments), 0);
    }
}
