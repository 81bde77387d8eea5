// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Trace side-channel for solver runs.
//!
//! Each stage's result can be observed as it is produced: the reduced
//! matrix, the selected zeros, the cover masks and the adjusted matrix.
//! Observers are a pure side-channel - they receive shared borrows and
//! have no effect on control flow. The default implementations do nothing,
//! so an observer only implements the events it cares about.

use log::debug;

use crate::matrix::{CostMatrix, LineCover, ZeroAssignment, ZeroMark};

/// Callbacks invoked by the engine after each stage produces its result.
pub trait SolveObserver {
    /// The initial reduction finished; `subtracted` is the sum of all
    /// column and row minima removed.
    fn on_reduced(&mut self, _matrix: &CostMatrix, _subtracted: u64) {}

    /// A selection pass finished.
    fn on_selected(&mut self, _matrix: &CostMatrix, _assignment: &ZeroAssignment) {}

    /// A line cover was computed for an incomplete selection.
    fn on_covered(&mut self, _matrix: &CostMatrix, _cover: &LineCover) {}

    /// The matrix was adjusted by `delta` around the last cover.
    fn on_adjusted(&mut self, _matrix: &CostMatrix, _delta: u64) {}
}

/// Observer that ignores every event.
#[derive(Debug, Default)]
pub struct NullObserver;

impl SolveObserver for NullObserver {}

/// Observer that logs each stage at debug level via the `log` facade.
#[derive(Debug, Default)]
pub struct TraceObserver;

impl TraceObserver {
    /// Render the zero classification grid: `.` for values, `*` for
    /// independent zeros, `o` for dependent zeros.
    fn render_marks(matrix: &CostMatrix, assignment: &ZeroAssignment) -> String {
        let marks = assignment.mark_grid(matrix);
        let mut out = String::new();
        for (row, columns) in marks.iter().enumerate() {
            if row > 0 {
                out.push('\n');
            }
            for (column, mark) in columns.iter().enumerate() {
                if column > 0 {
                    out.push(' ');
                }
                out.push(match mark {
                    ZeroMark::Value => '.',
                    ZeroMark::Independent => '*',
                    ZeroMark::Dependent => 'o',
                });
            }
        }
        out
    }
}

impl SolveObserver for TraceObserver {
    fn on_reduced(&mut self, matrix: &CostMatrix, subtracted: u64) {
        debug!("reduced matrix (subtracted {}):\n{}", subtracted, matrix);
    }

    fn on_selected(&mut self, matrix: &CostMatrix, assignment: &ZeroAssignment) {
        debug!(
            "selected {} independent zeros: {:?}\n{}",
            assignment.len(),
            assignment.pairs(),
            Self::render_marks(matrix, assignment)
        );
    }

    fn on_covered(&mut self, _matrix: &CostMatrix, cover: &LineCover) {
        debug!(
            "covered zeros with {} lines: rows {:?}, columns {:?}",
            cover.line_count(),
            cover.rows(),
            cover.columns()
        );
    }

    fn on_adjusted(&mut self, matrix: &CostMatrix, delta: u64) {
        debug!("adjusted matrix by {}:\n{}", delta, matrix);
    }
}
