#![cfg(test)] // workaround for https://github.com/rust-lang/rust-clippy/issues/11024

use std::cell::RefCell;

use squash_solver::core::constraints;
use squash_solver::core::options::AllDifferentStrength;
use squash_solver::core::options::OptimisationDirection;
use squash_solver::core::results::OptimisationResult;
use squash_solver::core::results::ProblemSolution;
use squash_solver::core::results::SolutionReference;
use squash_solver::core::termination::Indefinite;
use squash_solver::core::variables::TransformableVariable;
use squash_solver::core::DefaultBrancher;
use squash_solver::models::Model;
use squash_solver::models::ModelOptions;
use squash_solver::Solver;

fn ignore_solutions(_: &Solver, _: SolutionReference, _: &DefaultBrancher) {}

#[test]
fn knapsack_is_solved_to_optimality() {
    let mut solver = Solver::default();
    let a = solver.new_bounded_integer(0, 6).expect("valid bounds");
    let b = solver.new_bounded_integer(0, 6).expect("valid bounds");
    let profit = solver.new_bounded_integer(0, 100).expect("valid bounds");

    // 2a + 3b <= 12
    solver
        .add_constraint(constraints::less_than_or_equals(
            [a.scaled(2), b.scaled(3)],
            12,
        ))
        .post()
        .expect("consistent at the root");
    // profit = 3a + 4b
    solver
        .add_constraint(constraints::equals(
            [a.scaled(3), b.scaled(4), profit.scaled(-1)],
            0,
        ))
        .post()
        .expect("consistent at the root");

    let mut brancher = solver.default_brancher();
    let result = solver.optimise(
        &mut brancher,
        &mut Indefinite,
        OptimisationDirection::Maximise,
        profit,
        ignore_solutions,
    );

    match result {
        OptimisationResult::Optimal(solution) => {
            assert_eq!(18, solution.get_integer_value(profit));
            assert_eq!(6, solution.get_integer_value(a));
            assert_eq!(0, solution.get_integer_value(b));
        }
        result => panic!("expected an optimal solution, got {result:?}"),
    }
}

fn optimise_queens(direction: OptimisationDirection) -> (i32, Vec<i32>) {
    let mut solver = Solver::default();
    let instance = Model::Queens
        .build(
            &mut solver,
            ModelOptions {
                size: 6,
                all_different_strength: AllDifferentStrength::Bounds,
            },
        )
        .expect("consistent at the root");
    let objective = instance.objective.expect("queens has an objective");
    let mut brancher = instance.search;

    let improvements = RefCell::new(vec![]);
    let result = solver.optimise(
        &mut brancher,
        &mut Indefinite,
        direction,
        objective,
        |_: &Solver, solution: SolutionReference, _: &DefaultBrancher| {
            improvements
                .borrow_mut()
                .push(solution.get_integer_value(objective));
        },
    );

    match result {
        OptimisationResult::Optimal(solution) => (
            solution.get_integer_value(objective),
            improvements.into_inner(),
        ),
        result => panic!("expected an optimal solution, got {result:?}"),
    }
}

#[test]
fn first_queen_is_placed_as_far_left_as_possible() {
    let (optimum, improvements) = optimise_queens(OptimisationDirection::Minimise);

    // The solutions of six queens start in the columns 1, 2, 3 and 4
    assert_eq!(1, optimum);
    assert!(improvements.windows(2).all(|pair| pair[1] < pair[0]));
    assert_eq!(Some(&optimum), improvements.last());
}

#[test]
fn first_queen_is_placed_as_far_right_as_possible() {
    let (optimum, improvements) = optimise_queens(OptimisationDirection::Maximise);

    assert_eq!(4, optimum);
    assert!(improvements.windows(2).all(|pair| pair[1] > pair[0]));
    assert_eq!(Some(&optimum), improvements.last());
}

#[test]
fn solver_can_be_reused_after_optimisation() {
    let mut solver = Solver::default();
    let x = solver.new_bounded_integer(0, 9).expect("valid bounds");

    let mut brancher = solver.default_brancher();
    let result = solver.optimise(
        &mut brancher,
        &mut Indefinite,
        OptimisationDirection::Minimise,
        x,
        ignore_solutions,
    );
    assert!(matches!(result, OptimisationResult::Optimal(_)));

    // The objective cut of the previous optimisation does not restrict the next one
    let result = solver.optimise(
        &mut brancher,
        &mut Indefinite,
        OptimisationDirection::Maximise,
        x,
        ignore_solutions,
    );
    match result {
        OptimisationResult::Optimal(solution) => assert_eq!(9, solution.get_integer_value(x)),
        result => panic!("expected an optimal solution, got {result:?}"),
    }
}
