// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Independent-zero assignments.
//!
//! A [`ZeroAssignment`] is a set of (row, column) pairs, pairwise disjoint
//! in both components, each referencing a zero cell of the matrix version
//! it was computed against. An assignment of size n is a complete solution.

use log::warn;

use crate::matrix::CostMatrix;

/// Classification of a cell for trace rendering.
///
/// Mirrors the three-way marking used when displaying intermediate matrices:
/// ordinary values, independent zeros (the current assignment), and the
/// remaining dependent zeros.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZeroMark {
    /// Non-zero cell.
    Value,
    /// Zero cell selected into the assignment.
    Independent,
    /// Zero cell not selected (shares a row or column with a selected zero).
    Dependent,
}

/// A set of independent zeros: no two pairs share a row or a column.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ZeroAssignment {
    /// Pairs in selection order.
    pairs: Vec<(usize, usize)>,
}

impl ZeroAssignment {
    /// Create an empty assignment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an assignment from pairs.
    ///
    /// # Panics
    ///
    /// Panics if two pairs share a row or a column.
    pub fn from_pairs(pairs: Vec<(usize, usize)>) -> Self {
        let mut assignment = Self::new();
        for (row, column) in pairs {
            assignment.push(row, column);
        }
        assignment
    }

    /// Append a pair, keeping the independence invariant.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `column` already appears in the assignment.
    pub fn push(&mut self, row: usize, column: usize) {
        assert!(
            !self.has_row(row) && !self.has_column(column),
            "Zero ({}, {}) is not independent of the current assignment",
            row,
            column
        );
        self.pairs.push((row, column));
    }

    /// Number of selected zeros.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Whether no zero has been selected.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// The selected pairs, in selection order.
    pub fn pairs(&self) -> &[(usize, usize)] {
        &self.pairs
    }

    /// Whether some pair uses the given row.
    pub fn has_row(&self, row: usize) -> bool {
        self.pairs.iter().any(|&(r, _)| r == row)
    }

    /// Whether some pair uses the given column.
    pub fn has_column(&self, column: usize) -> bool {
        self.pairs.iter().any(|&(_, c)| c == column)
    }

    /// The row assigned to the given column, if any.
    pub fn row_in_column(&self, column: usize) -> Option<usize> {
        self.pairs
            .iter()
            .find(|&&(_, c)| c == column)
            .map(|&(r, _)| r)
    }

    /// Classify every cell of `matrix` for rendering.
    ///
    /// Zero cells selected into this assignment are `Independent`, the
    /// remaining zeros are `Dependent`, everything else is `Value`.
    /// Pairs falling outside the matrix are skipped with a warning rather
    /// than panicking; the engine surfaces them as a solve failure through
    /// its own validation.
    pub fn mark_grid(&self, matrix: &CostMatrix) -> Vec<Vec<ZeroMark>> {
        let n = matrix.n();
        let mut marks = vec![vec![ZeroMark::Value; n]; n];
        for row in 0..n {
            for column in 0..n {
                if matrix.is_zero(row, column) {
                    marks[row][column] = ZeroMark::Dependent;
                }
            }
        }
        for &(row, column) in &self.pairs {
            if row < n && column < n {
                marks[row][column] = ZeroMark::Independent;
            } else {
                warn!(
                    "Independent zero ({}, {}) outside {}x{} matrix",
                    row, column, n, n
                );
            }
        }
        marks
    }
}
