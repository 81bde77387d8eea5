// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Solve engine.
//!
//! This module drives the algorithm stages as a phase state machine. The
//! engine owns the sequencing; the stages in [`crate::solver`] own the
//! arithmetic.
//!
//! # Execution model
//!
//! 1. REDUCING: reduce the matrix once, paying the subtracted total into
//!    the context's reduction total.
//! 2. SELECTING: select independent zeros. n zeros selected means the run
//!    is COMPLETE and the reduction total is the optimal cost.
//! 3. COVERING: cover all zeros with lines (fewer than n of them, since
//!    the selection fell short).
//! 4. ADJUSTING: adjust the matrix around the cover, pay the adjustment's
//!    net reduction into the total, and go back to SELECTING.
//!
//! # Termination
//!
//! Every adjustment exposes at least one new zero reachable by the
//! matching, so a correct run needs at most n cover/adjust cycles. The
//! engine enforces a generous bound of `2 * n` cycles and surfaces an
//! exceeded bound as [`SolveFailure::AdjustLimitExceeded`] rather than
//! looping forever: on well-formed input that error indicates a defect in
//! the cover or adjustment stage, not a property of the input.
//!
//! # Example
//!
//! ```
//! use assignment_search::{solve, ZeroAssignment};
//!
//! let solution = solve(vec![
//!     vec![2, 1],
//!     vec![1, 3],
//! ]).unwrap();
//!
//! assert_eq!(solution.total_cost, 2);
//! assert_eq!(
//!     solution.assignment,
//!     ZeroAssignment::from_pairs(vec![(0, 1), (1, 0)]),
//! );
//! ```

pub mod phase;

pub use phase::{Phase, Solution};

use crate::context::SolveContext;
use crate::matrix::{CostMatrix, LineCover, ZeroAssignment};
use crate::observer::{NullObserver, SolveObserver};
use crate::solver::{
    adjust_matrix, cover_zeros, reduce_matrix, select_independent_zeros, SolveFailure,
};
use crate::state::Counters;

/// Cover/adjust cycles allowed per unit of matrix dimension.
const ADJUST_CYCLE_FACTOR: usize = 2;

/// State machine driving one solver run.
///
/// The engine can be stepped one phase at a time for inspection, or run to
/// completion with [`SolveEngine::run`]. The intermediate selection and
/// cover are held only between the phases that produce and consume them.
#[derive(Debug)]
pub struct SolveEngine {
    /// Current phase.
    phase: Phase,

    /// Cover/adjust cycles performed so far.
    adjust_cycles: usize,

    /// Cycle bound; exceeding it is an internal-invariant failure.
    adjust_limit: usize,

    /// Selection produced by the last SELECTING phase.
    assignment: Option<ZeroAssignment>,

    /// Cover produced by the last COVERING phase, consumed by ADJUSTING.
    cover: Option<LineCover>,
}

impl SolveEngine {
    /// Create an engine for a matrix of the given dimension.
    pub fn new(dimension: usize) -> Self {
        Self::with_adjust_limit(ADJUST_CYCLE_FACTOR * dimension)
    }

    /// Create an engine with an explicit cover/adjust cycle bound.
    pub fn with_adjust_limit(adjust_limit: usize) -> Self {
        Self {
            phase: Phase::Reducing,
            adjust_cycles: 0,
            adjust_limit,
            assignment: None,
            cover: None,
        }
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Cover/adjust cycles performed so far.
    pub fn adjust_cycles(&self) -> usize {
        self.adjust_cycles
    }

    /// Run one phase and return the phase the engine moved to.
    ///
    /// Stepping a `Complete` engine is a no-op. Errors leave the engine in
    /// the phase that failed; the run cannot be resumed past them.
    pub fn step(
        &mut self,
        ctx: &mut SolveContext,
        observer: &mut dyn SolveObserver,
    ) -> Result<Phase, SolveFailure> {
        match self.phase {
            Phase::Reducing => {
                let subtracted = reduce_matrix(&mut ctx.matrix);
                ctx.add_reduction(subtracted);
                ctx.statistics.increment_counter(Counters::Reductions);
                observer.on_reduced(&ctx.matrix, subtracted);
                self.phase = Phase::Selecting;
            }

            Phase::Selecting => {
                let assignment = select_independent_zeros(&ctx.matrix);
                validate_assignment(ctx, &assignment)?;
                ctx.statistics.increment_counter(Counters::SelectionPasses);
                observer.on_selected(&ctx.matrix, &assignment);
                self.phase = if assignment.len() == ctx.dimension() {
                    Phase::Complete
                } else {
                    Phase::Covering
                };
                self.assignment = Some(assignment);
            }

            Phase::Covering => {
                if self.adjust_cycles >= self.adjust_limit {
                    let failure = SolveFailure::AdjustLimitExceeded {
                        cycles: self.adjust_cycles,
                        limit: self.adjust_limit,
                    };
                    ctx.statistics.record_failure(&failure);
                    return Err(failure);
                }
                let assignment = self
                    .assignment
                    .as_ref()
                    .expect("COVERING requires a selection");
                let cover = cover_zeros(&ctx.matrix, assignment);
                debug_assert!(
                    all_zeros_covered(&ctx.matrix, &cover),
                    "line cover left a zero uncovered"
                );
                ctx.statistics.increment_counter(Counters::CoverPasses);
                observer.on_covered(&ctx.matrix, &cover);
                self.cover = Some(cover);
                self.phase = Phase::Adjusting;
            }

            Phase::Adjusting => {
                let cover = self.cover.take().expect("ADJUSTING requires a cover");
                let delta = adjust_matrix(&mut ctx.matrix, &cover);
                if delta > 0 {
                    // The adjustment subtracts delta from every uncovered
                    // row and returns it to every covered column, a net
                    // reduction of delta * (n - lines). A positive delta
                    // implies an uncovered cell, hence fewer than n lines.
                    let lines = cover.line_count();
                    debug_assert!(lines < ctx.dimension());
                    let net = delta * ctx.dimension().saturating_sub(lines) as u64;
                    ctx.add_reduction(net);
                }
                self.adjust_cycles += 1;
                ctx.statistics.increment_counter(Counters::Adjustments);
                observer.on_adjusted(&ctx.matrix, delta);
                self.phase = Phase::Selecting;
            }

            Phase::Complete => {}
        }

        Ok(self.phase)
    }

    /// Run the engine to completion.
    ///
    /// Consumes the engine and returns the solution, or the first failure
    /// encountered. The solution's cost is the context's reduction total;
    /// the selected cells are zeros of the fully reduced matrix, so the
    /// total needs no separate summation.
    pub fn run(
        mut self,
        ctx: &mut SolveContext,
        observer: &mut dyn SolveObserver,
    ) -> Result<Solution, SolveFailure> {
        while !self.phase.is_terminal() {
            self.step(ctx, observer)?;
        }
        let assignment = self
            .assignment
            .take()
            .expect("a complete run must hold a full selection");
        Ok(Solution {
            assignment,
            total_cost: ctx.reduction_total(),
        })
    }
}

/// Reject selections referencing cells outside the matrix. A failure here
/// is a selector defect, never a property of the input.
fn validate_assignment(
    ctx: &mut SolveContext,
    assignment: &ZeroAssignment,
) -> Result<(), SolveFailure> {
    let n = ctx.dimension();
    for &(row, column) in assignment.pairs() {
        if row >= n || column >= n {
            let failure = SolveFailure::AssignmentOutOfRange {
                row,
                column,
                size: n,
            };
            ctx.statistics.record_failure(&failure);
            return Err(failure);
        }
    }
    Ok(())
}

fn all_zeros_covered(matrix: &CostMatrix, cover: &LineCover) -> bool {
    (0..matrix.n()).all(|row| {
        (0..matrix.n()).all(|column| !matrix.is_zero(row, column) || cover.covers(row, column))
    })
}

/// Solve the square assignment problem for `rows`.
///
/// Returns the optimal assignment (n pairs, distinct rows and columns) and
/// its minimal total cost.
///
/// # Errors
///
/// [`SolveFailure::EmptyMatrix`] / [`SolveFailure::NonSquareRow`] for
/// malformed input; the defensive engine failures never occur on
/// well-formed input.
pub fn solve(rows: Vec<Vec<u64>>) -> Result<Solution, SolveFailure> {
    solve_with_observer(rows, &mut NullObserver)
}

/// Like [`solve`], reporting each stage's result to `observer`.
pub fn solve_with_observer(
    rows: Vec<Vec<u64>>,
    observer: &mut dyn SolveObserver,
) -> Result<Solution, SolveFailure> {
    let matrix = CostMatrix::from_rows(rows)?;
    let mut ctx = SolveContext::new(matrix);
    let engine = SolveEngine::new(ctx.dimension());
    engine.run(&mut ctx, observer)
}
