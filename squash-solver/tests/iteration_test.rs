#![cfg(test)] // workaround for https://github.com/rust-lang/rust-clippy/issues/11024

mod helpers;

use helpers::collect_solutions;
use squash_solver::core::branching::branchers::IndependentVariableValueBrancher;
use squash_solver::core::branching::value_selection::Ascending;
use squash_solver::core::branching::value_selection::Enumerate;
use squash_solver::core::branching::value_selection::InDomainMax;
use squash_solver::core::branching::variable_selection::InputOrder;
use squash_solver::core::constraints;
use squash_solver::core::options::AllDifferentStrength;
use squash_solver::core::results::solution_iterator::IteratedSolution;
use squash_solver::core::results::ProblemSolution;
use squash_solver::core::termination::Indefinite;
use squash_solver::core::variables::DomainId;
use squash_solver::Solver;

fn all_different_model() -> (Solver, [DomainId; 3]) {
    let mut solver = Solver::default();

    let x = solver.new_bounded_integer(0, 2).expect("valid bounds");
    let y = solver.new_bounded_integer(0, 2).expect("valid bounds");
    let z = solver.new_bounded_integer(0, 2).expect("valid bounds");

    solver
        .add_constraint(constraints::all_different(
            vec![x, y, z],
            AllDifferentStrength::Instantiation,
        ))
        .post()
        .expect("consistent at the root");

    (solver, [x, y, z])
}

#[test]
fn iterator_finds_all_solutions() {
    let (mut solver, [x, y, z]) = all_different_model();

    // We create a termination condition which allows the solver to run indefinitely
    let mut termination = Indefinite;
    // And we create a search strategy (in this case, simply the default)
    let mut brancher = solver.default_brancher();

    // Then we solve to satisfaction
    let mut solution_iterator = solver.get_solution_iterator(&mut brancher, &mut termination);

    let mut number_of_solutions = 0;

    // We keep track of a list of known solutions
    let mut known_solutions = Vec::new();

    loop {
        match solution_iterator.next_solution() {
            IteratedSolution::Solution(solution) => {
                number_of_solutions += 1;
                // We have found another solution, the same invariant should hold
                let value_x = solution.get_integer_value(x);
                let value_y = solution.get_integer_value(y);
                let value_z = solution.get_integer_value(z);
                assert!(value_x != value_y && value_x != value_z && value_y != value_z);

                // It should also be the case that we have not found this solution before
                assert!(!known_solutions.contains(&(value_x, value_y, value_z)));
                known_solutions.push((value_x, value_y, value_z));
            }
            IteratedSolution::Finished => {
                // No more solutions exist
                break;
            }
            IteratedSolution::Unknown => {
                // Our termination condition has caused the solver to terminate
                break;
            }
            IteratedSolution::Unsatisfiable => {
                panic!("Problem should be satisfiable")
            }
        }
    }
    // There are six possible solutions to this problem
    assert_eq!(number_of_solutions, 6)
}

#[test]
fn solutions_follow_the_order_of_the_search() {
    let (mut solver, variables) = all_different_model();

    let brancher = IndependentVariableValueBrancher::new(InputOrder::new(&variables), InDomainMax);
    let solutions = collect_solutions(&mut solver, brancher, |solution| {
        variables.map(|variable| solution.get_integer_value(variable))
    });

    assert_eq!(
        vec![
            [2, 1, 0],
            [2, 0, 1],
            [1, 2, 0],
            [1, 0, 2],
            [0, 2, 1],
            [0, 1, 2]
        ],
        solutions
    );
}

#[test]
fn n_ary_enumeration_finds_the_same_solutions() {
    let (mut solver, variables) = all_different_model();

    let brancher = IndependentVariableValueBrancher::new(
        InputOrder::new(&variables),
        Enumerate::new(Ascending),
    );
    let solutions = collect_solutions(&mut solver, brancher, |solution| {
        variables.map(|variable| solution.get_integer_value(variable))
    });

    assert_eq!(
        vec![
            [0, 1, 2],
            [0, 2, 1],
            [1, 0, 2],
            [1, 2, 0],
            [2, 0, 1],
            [2, 1, 0]
        ],
        solutions
    );
}

#[test]
fn model_can_be_enumerated_twice() {
    let (mut solver, _) = all_different_model();

    let brancher = solver.default_brancher();
    let first = collect_solutions(&mut solver, brancher, |_| ()).len();
    let brancher = solver.default_brancher();
    let second = collect_solutions(&mut solver, brancher, |_| ()).len();

    assert_eq!(6, first);
    assert_eq!(first, second);
    assert_eq!(12, solver.measures().num_solutions);
}

#[test]
fn iterating_an_infeasible_model_reports_unsatisfiable() {
    let mut solver = Solver::default();
    let x = solver.new_bounded_integer(0, 1).expect("valid bounds");
    let y = solver.new_bounded_integer(0, 1).expect("valid bounds");
    let z = solver.new_bounded_integer(0, 1).expect("valid bounds");
    let _ = solver
        .add_constraint(constraints::all_different(
            vec![x, y, z],
            AllDifferentStrength::Instantiation,
        ))
        .post();

    let mut brancher = solver.default_brancher();
    let mut termination = Indefinite;
    let mut solution_iterator = solver.get_solution_iterator(&mut brancher, &mut termination);

    assert!(matches!(
        solution_iterator.next_solution(),
        IteratedSolution::Unsatisfiable
    ));
}
