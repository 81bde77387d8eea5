// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Matrix reduction.
//!
//! Subtracting a constant from a whole row or column changes every
//! assignment's total by the same amount, so the identity of the optimal
//! assignment is preserved while zeros are exposed for selection.

use crate::matrix::CostMatrix;

/// Reduce the matrix in place and return the total amount subtracted.
///
/// Column minima are subtracted first, then row minima on the
/// column-reduced matrix. The order is contractual: it affects which cells
/// become zero first, though not the final optimal cost. After reduction
/// every row and every column contains at least one zero.
pub fn reduce_matrix(matrix: &mut CostMatrix) -> u64 {
    let n = matrix.n();
    let mut subtracted = 0;

    for column in 0..n {
        let min = matrix.min_in_column(column);
        if min > 0 {
            for row in 0..n {
                let value = matrix.get(row, column);
                matrix.set(row, column, value - min);
            }
        }
        subtracted += min;
    }

    for row in 0..n {
        let min = matrix.min_in_row(row);
        if min > 0 {
            for column in 0..n {
                let value = matrix.get(row, column);
                matrix.set(row, column, value - min);
            }
        }
        subtracted += min;
    }

    subtracted
}
