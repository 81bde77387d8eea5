// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Minimum line cover of zeros.
//!
//! Konig-style labeling over the bipartite graph of zero cells:
//!
//! 1. Mark every row with no selected zero.
//! 2. Saturate: mark every column containing a zero in a marked row, then
//!    mark every row whose selected zero lies in a marked column. Repeat
//!    until nothing changes.
//! 3. Draw lines through the UNmarked rows and the marked columns.
//!
//! Every zero ends up covered, and when the assignment is a maximum
//! matching the number of lines equals the matching size. The engine uses
//! that equality indirectly: fewer than n lines leaves an uncovered cell
//! for the adjuster to work on.

use crate::matrix::{CostMatrix, LineCover, ZeroAssignment};

/// Compute a line cover of all zeros in `matrix`, guided by `assignment`.
pub fn cover_zeros(matrix: &CostMatrix, assignment: &ZeroAssignment) -> LineCover {
    let n = matrix.n();

    let mut marked_rows = vec![true; n];
    for &(row, _) in assignment.pairs() {
        marked_rows[row] = false;
    }
    let mut marked_columns = vec![false; n];

    let mut changed = true;
    while changed {
        changed = false;
        for row in 0..n {
            if !marked_rows[row] {
                continue;
            }
            for column in 0..n {
                if matrix.is_zero(row, column) && !marked_columns[column] {
                    marked_columns[column] = true;
                    changed = true;
                }
            }
        }
        for column in 0..n {
            if !marked_columns[column] {
                continue;
            }
            if let Some(row) = assignment.row_in_column(column) {
                if !marked_rows[row] {
                    marked_rows[row] = true;
                    changed = true;
                }
            }
        }
    }

    let cover_rows = marked_rows.iter().map(|&marked| !marked).collect();
    LineCover::new(cover_rows, marked_columns)
}
