// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error types for the assignment solver.

use std::fmt;
use strum_macros::EnumCount as EnumCountMacro;

/// Failures the solver can surface.
///
/// The first two reject malformed input before any work happens. The last
/// two are defensive invariants: a correct implementation never triggers
/// them on well-formed input, but they are surfaced as errors rather than
/// silently looped over or recovered from.
#[derive(Debug, Clone, PartialEq, Eq, EnumCountMacro)]
pub enum SolveFailure {
    /// The input matrix has no rows.
    EmptyMatrix,

    /// A row's length differs from the number of rows.
    NonSquareRow {
        row: usize,
        expected: usize,
        actual: usize,
    },

    /// A selected independent zero falls outside the matrix bounds
    /// (selector defect).
    AssignmentOutOfRange {
        row: usize,
        column: usize,
        size: usize,
    },

    /// The cover/adjust loop exceeded its iteration bound
    /// (cover or adjuster defect).
    AdjustLimitExceeded { cycles: usize, limit: usize },
}

impl fmt::Display for SolveFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolveFailure::EmptyMatrix => {
                write!(f, "Cost matrix is empty")
            }
            SolveFailure::NonSquareRow {
                row,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "Row {} has {} columns, expected {} (matrix must be square)",
                    row, actual, expected
                )
            }
            SolveFailure::AssignmentOutOfRange { row, column, size } => {
                write!(
                    f,
                    "Independent zero ({}, {}) outside {}x{} matrix",
                    row, column, size, size
                )
            }
            SolveFailure::AdjustLimitExceeded { cycles, limit } => {
                write!(
                    f,
                    "Cover/adjust loop ran {} cycles (limit {})",
                    cycles, limit
                )
            }
        }
    }
}
