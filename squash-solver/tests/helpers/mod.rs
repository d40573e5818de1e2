//! Shared utilities for the integration tests of the solver.
#![allow(
    dead_code,
    reason = "is used in integration tests but unable to find a way to silence these warnings"
)]

use squash_solver::core::branching::Brancher;
use squash_solver::core::results::solution_iterator::IteratedSolution;
use squash_solver::core::results::SolutionReference;
use squash_solver::core::termination::Indefinite;
use squash_solver::Solver;

/// Enumerates every solution of the model with the given `brancher` and maps each of them with
/// `extract`. An infeasible model yields no solutions.
pub(crate) fn collect_solutions<T>(
    solver: &mut Solver,
    mut brancher: impl Brancher,
    mut extract: impl FnMut(SolutionReference<'_>) -> T,
) -> Vec<T> {
    let mut solutions = vec![];
    let mut termination = Indefinite;
    let mut solution_iterator = solver.get_solution_iterator(&mut brancher, &mut termination);

    loop {
        match solution_iterator.next_solution() {
            IteratedSolution::Solution(solution) => solutions.push(extract(solution)),
            IteratedSolution::Finished | IteratedSolution::Unsatisfiable => break,
            IteratedSolution::Unknown => panic!("the search cannot be stopped without a limit"),
        }
    }

    solutions
}

/// Counts the solutions of the model when searching with the default brancher.
pub(crate) fn count_solutions(solver: &mut Solver) -> usize {
    let brancher = solver.default_brancher();
    collect_solutions(solver, brancher, |_| ()).len()
}
