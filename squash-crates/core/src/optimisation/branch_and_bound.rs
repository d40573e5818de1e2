use log::debug;

use super::solution_callback::SolutionCallback;
use super::OptimisationDirection;
use crate::basic_types::CSPSolverExecutionFlag;
use crate::branching::Brancher;
use crate::predicate;
use crate::results::OptimisationResult;
use crate::results::ProblemSolution;
use crate::results::Solution;
use crate::termination::TerminationCondition;
use crate::variables::IntegerVariable;
use crate::variables::TransformableVariable;
use crate::Solver;

/// Branch-and-bound over a single search: whenever a solution is found, the search is resumed
/// with the cut `objective <= best - 1` (for minimisation) imposed at every node that is
/// propagated afterwards.
#[derive(Debug, Clone, Copy)]
pub(crate) struct BranchAndBound<Var, Callback> {
    direction: OptimisationDirection,
    objective: Var,
    solution_callback: Callback,
}

impl<Var, Callback> BranchAndBound<Var, Callback> {
    pub(crate) fn new(
        direction: OptimisationDirection,
        objective: Var,
        solution_callback: Callback,
    ) -> Self {
        Self {
            direction,
            objective,
            solution_callback,
        }
    }
}

impl<Var: IntegerVariable, Callback> BranchAndBound<Var, Callback> {
    pub(crate) fn optimise<B: Brancher>(
        &mut self,
        brancher: &mut B,
        termination: &mut impl TerminationCondition,
        solver: &mut Solver,
    ) -> OptimisationResult
    where
        Callback: SolutionCallback<B>,
    {
        // The search always minimises, so a maximisation objective is negated
        let objective = match self.direction {
            OptimisationDirection::Maximise => self.objective.scaled(-1),
            OptimisationDirection::Minimise => self.objective.scaled(1),
        };

        let mut best_solution: Option<Solution> = None;

        let result = loop {
            match solver.satisfaction_solver.solve(termination, brancher) {
                CSPSolverExecutionFlag::Feasible => {
                    let solution: Solution =
                        solver.satisfaction_solver.get_solution_reference().into();
                    debug!(
                        "Found a solution with objective value {}",
                        solution.get_integer_value(self.objective.clone())
                    );

                    self.solution_callback.on_solution_callback(
                        solver,
                        solution.as_reference(),
                        brancher,
                    );

                    let Some(bound) = solution.get_integer_value(objective.clone()).checked_sub(1)
                    else {
                        break OptimisationResult::Optimal(solution);
                    };

                    solver
                        .satisfaction_solver
                        .set_objective_cut(predicate!(objective <= bound));
                    best_solution = Some(solution);
                }
                CSPSolverExecutionFlag::Infeasible => {
                    break match best_solution.take() {
                        Some(solution) => OptimisationResult::Optimal(solution),
                        None => OptimisationResult::Unsatisfiable,
                    };
                }
                CSPSolverExecutionFlag::Timeout => {
                    break match best_solution.take() {
                        Some(solution) => OptimisationResult::Satisfiable(solution),
                        None => OptimisationResult::Unknown,
                    };
                }
            }
        };

        solver.satisfaction_solver.restore_state_at_root(brancher);

        result
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::constraints;
    use crate::results::SolutionReference;
    use crate::termination::Indefinite;
    use crate::termination::NodeBudget;
    use crate::DefaultBrancher;

    fn ignore_solutions(_: &Solver, _: SolutionReference, _: &DefaultBrancher) {}

    #[test]
    fn minimisation_proves_the_optimum() {
        let mut solver = Solver::default();
        let x = solver.new_bounded_integer(0, 10).expect("valid bounds");
        let y = solver.new_bounded_integer(0, 10).expect("valid bounds");
        let objective = solver.new_bounded_integer(0, 30).expect("valid bounds");

        // x + y >= 7
        solver
            .add_constraint(constraints::less_than_or_equals(
                [x.scaled(-1), y.scaled(-1)],
                -7,
            ))
            .post()
            .expect("satisfiable");
        // objective = x + 2y
        solver
            .add_constraint(constraints::equals(
                [x.scaled(1), y.scaled(2), objective.scaled(-1)],
                0,
            ))
            .post()
            .expect("satisfiable");

        let mut brancher = solver.default_brancher();
        let result = solver.optimise(
            &mut brancher,
            &mut Indefinite,
            OptimisationDirection::Minimise,
            objective,
            ignore_solutions,
        );

        match result {
            OptimisationResult::Optimal(solution) => {
                assert_eq!(7, solution.get_integer_value(objective));
                assert_eq!(7, solution.get_integer_value(x));
                assert_eq!(0, solution.get_integer_value(y));
            }
            result => panic!("expected an optimal solution, got {result:?}"),
        }

        assert_eq!(0, solver.lower_bound(&objective));
    }

    #[test]
    fn every_reported_solution_improves_on_the_previous() {
        let mut solver = Solver::default();
        let x = solver.new_bounded_integer(0, 5).expect("valid bounds");
        let y = solver.new_bounded_integer(0, 5).expect("valid bounds");

        solver
            .add_constraint(constraints::binary_not_equals(x, y))
            .post()
            .expect("satisfiable");

        let objective_values = RefCell::new(vec![]);
        let mut brancher = solver.default_brancher();
        let result = solver.optimise(
            &mut brancher,
            &mut Indefinite,
            OptimisationDirection::Maximise,
            x,
            |_: &Solver, solution: SolutionReference, _: &DefaultBrancher| {
                objective_values
                    .borrow_mut()
                    .push(solution.get_integer_value(x))
            },
        );

        assert!(matches!(result, OptimisationResult::Optimal(_)));

        let objective_values = objective_values.into_inner();
        assert_eq!(Some(&5), objective_values.last());
        assert!(objective_values
            .windows(2)
            .all(|window| window[0] < window[1]));
    }

    #[test]
    fn infeasible_model_has_no_optimum() {
        let mut solver = Solver::default();
        let x = solver.new_bounded_integer(0, 1).expect("valid bounds");
        let y = solver.new_bounded_integer(0, 1).expect("valid bounds");

        solver
            .add_constraint(constraints::less_than_or_equals([x, y], -1))
            .post()
            .expect_err("infeasible at the root");

        let mut brancher = solver.default_brancher();
        let result = solver.optimise(
            &mut brancher,
            &mut Indefinite,
            OptimisationDirection::Minimise,
            x,
            ignore_solutions,
        );

        assert!(matches!(result, OptimisationResult::Unsatisfiable));
    }

    #[test]
    fn interrupted_search_keeps_the_best_solution() {
        let mut solver = Solver::default();
        let variables = (0..4)
            .map(|_| solver.new_bounded_integer(0, 3).expect("valid bounds"))
            .collect::<Vec<_>>();
        let objective = solver.new_bounded_integer(0, 12).expect("valid bounds");

        let mut terms = variables
            .iter()
            .map(|variable| variable.scaled(1))
            .collect::<Vec<_>>();
        terms.push(objective.scaled(-1));
        solver
            .add_constraint(constraints::equals(terms, 0))
            .post()
            .expect("satisfiable");

        let mut brancher = solver.default_brancher();
        let result = solver.optimise(
            &mut brancher,
            &mut NodeBudget::new(6),
            OptimisationDirection::Maximise,
            objective,
            ignore_solutions,
        );

        match result {
            OptimisationResult::Satisfiable(solution) => {
                assert!(solution.get_integer_value(objective) < 12)
            }
            result => panic!("expected a non-optimal solution, got {result:?}"),
        }
    }

    #[test]
    fn exhausted_budget_without_solution_is_unknown() {
        let mut solver = Solver::default();
        let x = solver.new_bounded_integer(0, 5).expect("valid bounds");

        let mut brancher = solver.default_brancher();
        let result = solver.optimise(
            &mut brancher,
            &mut NodeBudget::new(0),
            OptimisationDirection::Minimise,
            x,
            ignore_solutions,
        );

        assert!(matches!(result, OptimisationResult::Unknown));
    }
}
