// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Independent-zero selection.
//!
//! Builds a maximum set of zeros no two of which share a row or column.
//! Selection happens in two steps:
//!
//! 1. **Greedy scan**: repeatedly pick the zero lying in the row (or,
//!    failing that, column) with the fewest available zeros. A row or
//!    column with exactly one available zero is taken immediately, since
//!    that zero has no competitors. Rows are scanned before columns and a
//!    row candidate is only displaced by a column with strictly fewer
//!    available zeros, so ties go to the row scan.
//! 2. **Augmentation**: the greedy scan is a heuristic and can stall below
//!    the maximum matching on degenerate zero patterns. Any rows it left
//!    unmatched are then matched via augmenting paths over zero cells.
//!    When the greedy result is already maximum - the common case - this
//!    step finds no path and returns the greedy selection unchanged.
//!
//! The maximum-matching guarantee matters downstream: the line cover built
//! from a non-maximum matching can cover every cell, making the adjustment
//! delta zero and the outer loop livelock.

use crate::matrix::{CostMatrix, ZeroAssignment};

/// A zero cell picked by the greedy scan, with the number of available
/// zeros in its line at the time of the pick.
struct Candidate {
    row: usize,
    column: usize,
    count: usize,
}

/// Select a maximum set of independent zeros from `matrix`.
///
/// Returns between 0 and n pairs; n pairs means the assignment is complete.
pub fn select_independent_zeros(matrix: &CostMatrix) -> ZeroAssignment {
    let greedy = greedy_scan(matrix);
    complete_matching(matrix, greedy)
}

/// The greedy heuristic: pick zeros one at a time,
/// preferring rows/columns with the fewest remaining zeros, until no
/// unused row or column contains an available zero.
fn greedy_scan(matrix: &CostMatrix) -> ZeroAssignment {
    let n = matrix.n();
    let mut used_rows = vec![false; n];
    let mut used_columns = vec![false; n];
    let mut assignment = ZeroAssignment::new();

    loop {
        let mut best = scan_rows(matrix, &used_rows, &used_columns);

        // The column scan only runs if no row had a single available zero;
        // a row with one zero is already the best possible candidate.
        let row_found_single = matches!(&best, Some(c) if c.count == 1);
        if !row_found_single {
            scan_columns(matrix, &used_rows, &used_columns, &mut best);
        }

        match best {
            Some(Candidate { row, column, .. }) => {
                used_rows[row] = true;
                used_columns[column] = true;
                assignment.push(row, column);
            }
            None => break,
        }
    }

    assignment
}

/// Scan unused rows for the row with the fewest available zeros, returning
/// its first available zero. Short-circuits on a count of one.
fn scan_rows(matrix: &CostMatrix, used_rows: &[bool], used_columns: &[bool]) -> Option<Candidate> {
    let n = matrix.n();
    let mut best: Option<Candidate> = None;

    for row in 0..n {
        if used_rows[row] {
            continue;
        }
        let mut count = 0;
        let mut first_column = None;
        for column in 0..n {
            if !used_columns[column] && matrix.is_zero(row, column) {
                count += 1;
                if first_column.is_none() {
                    first_column = Some(column);
                }
            }
        }
        if count > 0 && best.as_ref().map_or(true, |b| count < b.count) {
            best = Some(Candidate {
                row,
                column: first_column.unwrap(),
                count,
            });
            if count == 1 {
                break;
            }
        }
    }

    best
}

/// Scan unused columns the same way, replacing `best` only on a strictly
/// smaller count so that the row scan's candidate wins ties.
fn scan_columns(
    matrix: &CostMatrix,
    used_rows: &[bool],
    used_columns: &[bool],
    best: &mut Option<Candidate>,
) {
    let n = matrix.n();

    for column in 0..n {
        if used_columns[column] {
            continue;
        }
        let mut count = 0;
        let mut first_row = None;
        for row in 0..n {
            if !used_rows[row] && matrix.is_zero(row, column) {
                count += 1;
                if first_row.is_none() {
                    first_row = Some(row);
                }
            }
        }
        if count > 0 && best.as_ref().map_or(true, |b| count < b.count) {
            *best = Some(Candidate {
                row: first_row.unwrap(),
                column,
                count,
            });
            if count == 1 {
                break;
            }
        }
    }
}

/// Grow `greedy` to a maximum matching by augmenting paths over zero cells.
///
/// If no augmenting path exists the greedy selection is returned unchanged
/// (preserving its selection order); otherwise the grown matching is
/// returned with pairs in row order.
fn complete_matching(matrix: &CostMatrix, greedy: ZeroAssignment) -> ZeroAssignment {
    let n = matrix.n();
    let mut row_of_column: Vec<Option<usize>> = vec![None; n];
    let mut row_matched = vec![false; n];
    for &(row, column) in greedy.pairs() {
        row_of_column[column] = Some(row);
        row_matched[row] = true;
    }

    let mut grew = false;
    for row in 0..n {
        if !row_matched[row] {
            let mut visited = vec![false; n];
            if try_augment(matrix, row, &mut row_of_column, &mut visited) {
                grew = true;
            }
        }
    }

    if !grew {
        return greedy;
    }

    let mut pairs: Vec<(usize, usize)> = row_of_column
        .iter()
        .enumerate()
        .filter_map(|(column, row)| row.map(|r| (r, column)))
        .collect();
    pairs.sort_unstable();
    ZeroAssignment::from_pairs(pairs)
}

/// Depth-first search for an augmenting path starting at an unmatched row.
///
/// Visits each column at most once per search; on success the matching is
/// flipped along the path, matching `row` and growing the matching by one.
fn try_augment(
    matrix: &CostMatrix,
    row: usize,
    row_of_column: &mut [Option<usize>],
    visited: &mut [bool],
) -> bool {
    let n = matrix.n();
    for column in 0..n {
        if !matrix.is_zero(row, column) || visited[column] {
            continue;
        }
        visited[column] = true;
        let occupant = row_of_column[column];
        let free = match occupant {
            None => true,
            Some(other) => try_augment(matrix, other, row_of_column, visited),
        };
        if free {
            row_of_column[column] = Some(row);
            return true;
        }
    }
    false
}
