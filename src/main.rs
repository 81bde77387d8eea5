// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Demonstration driver for the assignment solver.
//!
//! Runs the solver on a fixed 6x6 cost matrix and renders every
//! intermediate stage: the reduced matrix, the zeros selected in each
//! pass, the cover lines and the adjusted matrix, followed by the final
//! assignment and its cost.

use assignment_search::{
    solve_with_observer, CostMatrix, LineCover, SolveObserver, ZeroAssignment, ZeroMark,
};

/// Observer rendering each stage to stdout.
struct ConsoleObserver {
    iteration: usize,
}

impl ConsoleObserver {
    fn new() -> Self {
        Self { iteration: 0 }
    }
}

impl SolveObserver for ConsoleObserver {
    fn on_reduced(&mut self, matrix: &CostMatrix, subtracted: u64) {
        println!("\nAfter reduction (subtracted {}):\n{}", subtracted, matrix);
    }

    fn on_selected(&mut self, matrix: &CostMatrix, assignment: &ZeroAssignment) {
        self.iteration += 1;
        println!("\n== Selection pass {} ==", self.iteration);
        println!(
            "Found {} independent zeros: {:?}",
            assignment.len(),
            assignment.pairs()
        );
        println!("Zero markings (* independent, o dependent):");
        for row in assignment.mark_grid(matrix) {
            let line: Vec<&str> = row
                .iter()
                .map(|mark| match mark {
                    ZeroMark::Value => ".",
                    ZeroMark::Independent => "*",
                    ZeroMark::Dependent => "o",
                })
                .collect();
            println!("{}", line.join(" "));
        }
    }

    fn on_covered(&mut self, _matrix: &CostMatrix, cover: &LineCover) {
        println!(
            "Covering lines ({}): rows {:?}, columns {:?}",
            cover.line_count(),
            cover.rows(),
            cover.columns()
        );
    }

    fn on_adjusted(&mut self, matrix: &CostMatrix, delta: u64) {
        println!("Adjusted matrix by {}:\n{}", delta, matrix);
    }
}

fn main() {
    let rows = vec![
        vec![12, 14, 17, 9, 23, 21],
        vec![15, 10, 12, 18, 16, 14],
        vec![8, 13, 15, 17, 10, 22],
        vec![18, 11, 14, 13, 16, 12],
        vec![22, 16, 13, 21, 9, 15],
        vec![19, 15, 11, 20, 18, 10],
    ];

    println!("=== HUNGARIAN ASSIGNMENT ===");
    println!(
        "\nInput matrix:\n{}",
        CostMatrix::from_rows(rows.clone()).expect("demo matrix is square")
    );

    let mut observer = ConsoleObserver::new();
    match solve_with_observer(rows.clone(), &mut observer) {
        Ok(solution) => {
            println!("\n--- RESULT ---");
            println!("Assignment (row -> column) with original costs:");
            for &(row, column) in solution.assignment.pairs() {
                println!("  {} -> {}  (cost {})", row, column, rows[row][column]);
            }
            println!("Minimal total cost: {}", solution.total_cost);
        }
        Err(failure) => {
            eprintln!("Solve failed: {}", failure);
            std::process::exit(1);
        }
    }
}
