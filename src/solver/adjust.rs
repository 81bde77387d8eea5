// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Matrix adjustment.
//!
//! The cover partitions cells into uncovered, singly-covered and
//! doubly-covered. Subtracting the minimum uncovered value from every
//! uncovered cell and adding it to every doubly-covered cell preserves the
//! optimal assignment while exposing at least one new zero among the
//! previously uncovered cells.
//!
//! The transformation is equivalent to subtracting the delta from every
//! uncovered row and adding it to every covered column, so it is itself a
//! reduction with net value `delta * (n - lines)`; the engine accumulates
//! that into the running reduction total.

use crate::matrix::{CostMatrix, LineCover};

/// Adjust `matrix` in place around `cover`; returns the delta applied.
///
/// The delta is the minimum value among uncovered cells, or 0 when every
/// cell is covered (in which case the matrix is left untouched).
pub fn adjust_matrix(matrix: &mut CostMatrix, cover: &LineCover) -> u64 {
    let n = matrix.n();

    let mut delta = None;
    for row in 0..n {
        for column in 0..n {
            if !cover.covers(row, column) {
                let value = matrix.get(row, column);
                if delta.map_or(true, |d| value < d) {
                    delta = Some(value);
                }
            }
        }
    }

    let delta = match delta {
        Some(d) => d,
        None => return 0,
    };

    for row in 0..n {
        for column in 0..n {
            let value = matrix.get(row, column);
            if !cover.covers(row, column) {
                matrix.set(row, column, value - delta);
            } else if cover.covers_twice(row, column) {
                matrix.set(row, column, value + delta);
            }
        }
    }

    delta
}
