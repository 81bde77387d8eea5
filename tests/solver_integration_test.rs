// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! End-to-end solver tests against a brute-force oracle, plus the
//! stage invariants checked mid-run on matrices that need adjustment.

mod common;

use assignment_search::solver::{
    adjust_matrix, cover_zeros, reduce_matrix, select_independent_zeros,
};
use assignment_search::{solve, CostMatrix};

#[test]
fn test_single_cell_matrix() {
    let solution = solve(vec![vec![5]]).unwrap();
    assert_eq!(solution.total_cost, 5);
    assert_eq!(solution.assignment.pairs(), &[(0, 0)]);
}

#[test]
fn test_battery_matches_brute_force() {
    let battery: Vec<Vec<Vec<u64>>> = vec![
        vec![vec![0]],
        vec![vec![3, 1], vec![1, 3]],
        vec![vec![7, 7], vec![7, 7]],
        vec![vec![4, 1, 3], vec![2, 0, 5], vec![3, 2, 2]],
        vec![vec![1, 2, 3], vec![2, 4, 6], vec![3, 6, 9]],
        vec![
            vec![10, 19, 8, 15],
            vec![10, 18, 7, 17],
            vec![13, 16, 9, 14],
            vec![12, 19, 8, 18],
        ],
        vec![
            vec![90, 75, 75, 80],
            vec![35, 85, 55, 65],
            vec![125, 95, 90, 105],
            vec![45, 110, 95, 115],
        ],
        vec![
            vec![2, 9, 2, 7, 1],
            vec![6, 8, 7, 6, 1],
            vec![4, 6, 5, 3, 1],
            vec![4, 2, 7, 3, 1],
            vec![5, 3, 9, 5, 1],
        ],
    ];

    for rows in battery {
        let solution = solve(rows.clone()).unwrap();
        common::assert_optimal(&rows, &solution);
    }
}

#[test]
fn test_degenerate_zero_patterns_match_brute_force() {
    // Zero-heavy matrices exercise the selector's augmentation step and
    // repeated cover/adjust cycles.
    let battery: Vec<Vec<Vec<u64>>> = vec![
        vec![vec![0, 0, 0], vec![0, 4, 5], vec![0, 6, 7]],
        vec![
            vec![0, 0, 1, 2],
            vec![0, 0, 2, 1],
            vec![1, 2, 0, 0],
            vec![2, 1, 0, 9],
        ],
        vec![
            vec![0, 0, 0, 1, 9, 0, 1],
            vec![0, 0, 1, 1, 0, 2, 2],
            vec![9, 1, 0, 0, 2, 0, 0],
            vec![9, 1, 2, 9, 2, 1, 2],
            vec![0, 0, 1, 9, 1, 0, 2],
            vec![9, 1, 0, 0, 0, 0, 0],
            vec![0, 9, 0, 1, 1, 2, 1],
        ],
    ];

    for rows in battery {
        let solution = solve(rows.clone()).unwrap();
        common::assert_optimal(&rows, &solution);
    }
}

#[test]
fn test_permuted_diagonal_needs_no_adjustment() {
    // A permutation-shaped optimum: reduction alone exposes it.
    let rows = vec![
        vec![9, 1, 9, 9],
        vec![9, 9, 9, 2],
        vec![3, 9, 9, 9],
        vec![9, 9, 4, 9],
    ];
    let solution = solve(rows.clone()).unwrap();
    assert_eq!(solution.total_cost, 10);
    let mut pairs = solution.assignment.pairs().to_vec();
    pairs.sort_unstable();
    assert_eq!(pairs, vec![(0, 1), (1, 3), (2, 0), (3, 2)]);
}

#[test]
fn test_stage_invariants_through_one_cycle() {
    let mut matrix = CostMatrix::from_rows(vec![
        vec![12, 14, 17, 9, 23, 21],
        vec![15, 10, 12, 18, 16, 14],
        vec![8, 13, 15, 17, 10, 22],
        vec![18, 11, 14, 13, 16, 12],
        vec![22, 16, 13, 21, 9, 15],
        vec![19, 15, 11, 20, 18, 10],
    ])
    .unwrap();
    let n = matrix.n();

    reduce_matrix(&mut matrix);

    // Reduction is idempotent once every line has a zero.
    assert_eq!(reduce_matrix(&mut matrix), 0);

    let assignment = select_independent_zeros(&matrix);
    assert!(assignment.len() < n);
    for &(row, column) in assignment.pairs() {
        assert!(matrix.is_zero(row, column));
    }

    // Every zero is covered, with one line per selected zero.
    let cover = cover_zeros(&matrix, &assignment);
    for row in 0..n {
        for column in 0..n {
            if matrix.is_zero(row, column) {
                assert!(cover.covers(row, column));
            }
        }
    }
    assert_eq!(cover.line_count(), assignment.len());

    // Adjustment exposes a new zero among the previously uncovered cells.
    let uncovered_zeros_before: Vec<(usize, usize)> = (0..n)
        .flat_map(|row| (0..n).map(move |column| (row, column)))
        .filter(|&(row, column)| !cover.covers(row, column) && matrix.is_zero(row, column))
        .collect();
    assert!(uncovered_zeros_before.is_empty());

    let delta = adjust_matrix(&mut matrix, &cover);
    assert!(delta > 0);
    let new_uncovered_zero = (0..n)
        .flat_map(|row| (0..n).map(move |column| (row, column)))
        .any(|(row, column)| !cover.covers(row, column) && matrix.is_zero(row, column));
    assert!(new_uncovered_zero);
}
