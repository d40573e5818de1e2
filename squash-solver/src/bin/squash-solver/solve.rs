use std::time::Duration;

use log::debug;
use squash_solver::core::branching::Brancher;
use squash_solver::core::optimisation::OptimisationDirection;
use squash_solver::core::options::SolverOptions;
use squash_solver::core::results::solution_iterator::IteratedSolution;
use squash_solver::core::results::OptimisationResult;
use squash_solver::core::results::ProblemSolution;
use squash_solver::core::results::SatisfactionResult;
use squash_solver::core::results::SolutionReference;
use squash_solver::core::termination::Combinator;
use squash_solver::core::termination::TerminationCondition;
use squash_solver::core::termination::TimeBudget;
use squash_solver::core::variables::DomainId;
use squash_solver::core::ConstraintOperationError;
use squash_solver::core::DefaultBrancher;
use squash_solver::models::Model;
use squash_solver::models::ModelInstance;
use squash_solver::models::ModelOptions;
use squash_solver::models::Output;
use squash_solver::Solver;

use crate::os_signal_termination::OsSignal;
use crate::result::SquashError;
use crate::result::SquashResult;

pub(crate) const MSG_UNKNOWN: &str = "=====UNKNOWN=====";
pub(crate) const MSG_UNSATISFIABLE: &str = "=====UNSATISFIABLE=====";
pub(crate) const MSG_SEPARATOR: &str = "----------";
pub(crate) const MSG_COMPLETE: &str = "==========";

#[derive(Debug, Clone, Copy)]
pub(crate) struct SolveOptions {
    pub(crate) model: Model,
    pub(crate) model_options: ModelOptions,

    /// If `true`, the solver ignores the search strategy of the model and uses the default
    /// brancher.
    pub(crate) free_search: bool,

    /// For satisfaction problems, print all solutions. For optimisation problems, this instructs
    /// the solver to print intermediate solutions.
    pub(crate) all_solutions: bool,

    /// Optimise the objective of the model in the given direction instead of satisfying it.
    pub(crate) optimise: Option<OptimisationDirection>,

    pub(crate) time_limit: Option<Duration>,
    pub(crate) random_seed: u64,
}

/// Adds the model to the `solver`; a model which is found infeasible while it is built is reported
/// as unsatisfiable, any other error is returned.
pub(crate) fn build_model(
    solver: &mut Solver,
    options: SolveOptions,
) -> SquashResult<Option<ModelInstance>> {
    match options.model.build(solver, options.model_options) {
        Ok(instance) => Ok(Some(instance)),
        Err(
            ConstraintOperationError::InfeasiblePropagator
            | ConstraintOperationError::InfeasibleState,
        ) => {
            debug!("The model {} is infeasible at the root", options.model);
            Ok(None)
        }
        Err(error) => Err(error.into()),
    }
}

pub(crate) fn solution_callback(
    objective: Option<DomainId>,
    options_all_solutions: bool,
    outputs: &[Output],
    solver: &Solver,
    solution: SolutionReference,
) {
    if options_all_solutions || objective.is_none() {
        if let Some(objective) = objective {
            solver.log_statistics_with_objective(solution.get_integer_value(objective) as i64);
        } else {
            solver.log_statistics()
        }
        print_solution(&solution, outputs);
    }
}

/// Solves the model with a single solver.
pub(crate) fn solve(options: SolveOptions, signal: OsSignal) -> SquashResult<()> {
    let mut solver = Solver::with_options(SolverOptions::with_seed(options.random_seed));

    let mut termination = Combinator::new(
        signal,
        options.time_limit.map(TimeBudget::starting_now),
    );

    let Some(instance) = build_model(&mut solver, options)? else {
        println!("{MSG_UNSATISFIABLE}");
        solver.log_statistics();
        return Ok(());
    };
    let ModelInstance {
        outputs,
        search,
        objective,
    } = instance;

    let mut brancher = if options.free_search {
        // The free search flag is active, we just use the default brancher
        solver.default_brancher()
    } else {
        search
    };

    let Some(direction) = options.optimise else {
        satisfy(options, &mut solver, brancher, termination, &outputs);
        return Ok(());
    };
    let objective = objective.ok_or(SquashError::NoObjective(options.model))?;

    let callback = |solver: &Solver, solution: SolutionReference, _: &DefaultBrancher| {
        solution_callback(
            Some(objective),
            options.all_solutions,
            &outputs,
            solver,
            solution,
        );
    };

    let result = solver.optimise(
        &mut brancher,
        &mut termination,
        direction,
        objective,
        callback,
    );

    match result {
        OptimisationResult::Optimal(optimal_solution) => {
            if !options.all_solutions {
                print_solution(&optimal_solution, &outputs)
            }
            println!("{MSG_COMPLETE}");
            solver.log_statistics();
        }
        OptimisationResult::Satisfiable(best_solution) => {
            if !options.all_solutions {
                print_solution(&best_solution, &outputs)
            }
            solver.log_statistics();
        }
        OptimisationResult::Unsatisfiable => {
            println!("{MSG_UNSATISFIABLE}");
            solver.log_statistics();
        }
        OptimisationResult::Unknown => {
            println!("{MSG_UNKNOWN}");
            solver.log_statistics();
        }
    };

    Ok(())
}

fn satisfy(
    options: SolveOptions,
    solver: &mut Solver,
    mut brancher: impl Brancher,
    mut termination: impl TerminationCondition,
    outputs: &[Output],
) {
    if options.all_solutions {
        let mut solution_iterator = solver.get_solution_iterator(&mut brancher, &mut termination);
        let outcome = loop {
            match solution_iterator.next_solution() {
                IteratedSolution::Solution(solution) => print_solution(&solution, outputs),
                IteratedSolution::Finished => break Some(MSG_COMPLETE),
                IteratedSolution::Unknown => break None,
                IteratedSolution::Unsatisfiable => break Some(MSG_UNSATISFIABLE),
            }
        };
        drop(solution_iterator);

        if let Some(message) = outcome {
            println!("{message}");
        }
        solver.log_statistics();
    } else {
        match solver.satisfy(&mut brancher, &mut termination) {
            SatisfactionResult::Satisfiable(solution) => solution_callback(
                None,
                options.all_solutions,
                outputs,
                &*solver,
                solution.as_reference(),
            ),
            SatisfactionResult::Unsatisfiable => {
                println!("{MSG_UNSATISFIABLE}");
                solver.log_statistics();
            }
            SatisfactionResult::Unknown => {
                println!("{MSG_UNKNOWN}");
                solver.log_statistics();
            }
        }
    }
}

/// Prints the current solution.
pub(crate) fn print_solution(solution: &impl ProblemSolution, outputs: &[Output]) {
    for line in format_solution(solution, outputs) {
        println!("{line}");
    }
}

pub(crate) fn format_solution(solution: &impl ProblemSolution, outputs: &[Output]) -> Vec<String> {
    outputs
        .iter()
        .map(|output| output.format(solution))
        .chain(std::iter::once(MSG_SEPARATOR.to_owned()))
        .collect()
}
