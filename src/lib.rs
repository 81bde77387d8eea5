// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Hungarian (Kuhn-Munkres) solver for the square assignment problem.
//!
//! Given an n x n matrix of non-negative integer costs, find a one-to-one
//! mapping of rows to columns with minimal total cost.
//!
//! # Architecture
//!
//! The solver is split into small, independently testable pieces:
//!
//! - [`matrix`] - the domain types: [`CostMatrix`], [`ZeroAssignment`],
//!   [`LineCover`]. These are leaf types with no algorithmic knowledge.
//! - [`solver`] - the four algorithm stages as free functions:
//!   reduction, independent-zero selection, minimum line cover, and
//!   matrix adjustment.
//! - [`engine`] - the phase state machine that drives the stages:
//!   `Reducing -> Selecting -> (Complete | Covering) -> Adjusting -> Selecting`.
//! - [`context`] - [`SolveContext`], the exclusive owner of the evolving
//!   cost matrix and the accumulated reduction total.
//! - [`observer`] - an optional trace side-channel invoked after each stage,
//!   with no effect on control flow.
//!
//! # Algorithm
//!
//! 1. **Reduce**: subtract each column's minimum, then each row's minimum.
//!    The sum of the subtracted minima is a lower bound on the optimal cost.
//! 2. **Select**: pick a maximum set of independent zeros (no two sharing a
//!    row or column). If n zeros were selected, the assignment is complete
//!    and the accumulated reduction total is the optimal cost.
//! 3. **Cover**: find a minimum set of rows and columns covering every zero.
//! 4. **Adjust**: subtract the minimum uncovered value from all uncovered
//!    cells and add it to all doubly-covered cells, then go back to step 2.
//!
//! Each adjustment is itself a net reduction, so the running total stays
//! equal to the amount subtracted from the matrix overall; on termination
//! it equals the optimal assignment cost.
//!
//! # Example
//!
//! ```
//! use assignment_search::solve;
//!
//! let solution = solve(vec![
//!     vec![4, 1, 3],
//!     vec![2, 0, 5],
//!     vec![3, 2, 2],
//! ]).unwrap();
//!
//! assert_eq!(solution.total_cost, 5);
//! assert_eq!(solution.assignment.len(), 3);
//! ```

pub mod context;
pub mod engine;
pub mod matrix;
pub mod observer;
pub mod solver;
pub mod state;

// Re-export commonly used types
pub use context::SolveContext;
pub use engine::{solve, solve_with_observer, Phase, Solution, SolveEngine};
pub use matrix::{CostMatrix, LineCover, ZeroAssignment, ZeroMark};
pub use observer::{NullObserver, SolveObserver, TraceObserver};
pub use solver::SolveFailure;
