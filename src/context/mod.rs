// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Solve context: the evolving matrix and the accumulated reduction total.
//!
//! The context is the single exclusive owner of the "current" cost matrix.
//! Stages receive either a shared or an exclusive borrow from here, so no
//! two stages can ever observe inconsistent in-progress state.
//!
//! Besides the matrix, only one value survives the whole run: the
//! monotonically accumulated reduction total. The initial reduction and
//! every later adjustment pay into it; when the selection finally reaches
//! n independent zeros, the total IS the optimal assignment cost - the
//! selected cells are zeros of the fully reduced matrix, so nothing else
//! contributes.

use crate::matrix::CostMatrix;
use crate::state::Statistics;

/// Mutable state for one solver run.
#[derive(Debug)]
pub struct SolveContext {
    /// The current version of the cost matrix (reduced, then adjusted).
    pub matrix: CostMatrix,

    /// Stage counters and failure counts.
    pub statistics: Statistics,

    /// Total amount subtracted from the matrix so far.
    reduction_total: u64,
}

impl SolveContext {
    /// Create a context owning `matrix`, with an empty reduction total.
    pub fn new(matrix: CostMatrix) -> Self {
        Self {
            matrix,
            statistics: Statistics::new(),
            reduction_total: 0,
        }
    }

    /// Matrix dimension.
    pub fn dimension(&self) -> usize {
        self.matrix.n()
    }

    /// The reduction total accumulated so far.
    pub fn reduction_total(&self) -> u64 {
        self.reduction_total
    }

    /// Pay `amount` into the reduction total.
    ///
    /// The total only ever grows; stages report non-negative contributions.
    pub fn add_reduction(&mut self, amount: u64) {
        self.reduction_total += amount;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_context() {
        let matrix = CostMatrix::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
        let ctx = SolveContext::new(matrix);

        assert_eq!(ctx.dimension(), 2);
        assert_eq!(ctx.reduction_total(), 0);
    }

    #[test]
    fn test_reduction_total_accumulates() {
        let matrix = CostMatrix::from_rows(vec![vec![1]]).unwrap();
        let mut ctx = SolveContext::new(matrix);

        ctx.add_reduction(5);
        ctx.add_reduction(0);
        ctx.add_reduction(3);
        assert_eq!(ctx.reduction_total(), 8);
    }
}
