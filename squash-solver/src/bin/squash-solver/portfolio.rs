//! Runs several independent solvers on the same model, each on its own thread. The first solver
//! that reaches a conclusive result (a solution, optimality or unsatisfiability) reports it and
//! stops the others.
use std::sync::atomic::AtomicBool;
use std::sync::atomic::AtomicUsize;
use std::sync::atomic::Ordering;
use std::sync::Arc;

use log::debug;
use rayon::prelude::*;
use squash_solver::core::optimisation::OptimisationDirection;
use squash_solver::core::options::SolverOptions;
use squash_solver::core::results::OptimisationResult;
use squash_solver::core::results::ProblemSolution;
use squash_solver::core::results::SatisfactionResult;
use squash_solver::core::results::SolutionReference;
use squash_solver::core::statistics::log_statistic;
use squash_solver::core::statistics::log_statistic_postfix;
use squash_solver::core::statistics::Statistic;
use squash_solver::core::statistics::StatisticLogger;
use squash_solver::core::termination::Combinator;
use squash_solver::core::termination::TerminationCondition;
use squash_solver::core::termination::TimeBudget;
use squash_solver::core::DefaultBrancher;
use squash_solver::core::Measures;
use squash_solver::models::ModelInstance;
use squash_solver::Solver;

use crate::os_signal_termination::OsSignal;
use crate::result::SquashError;
use crate::result::SquashResult;
use crate::solve::build_model;
use crate::solve::format_solution;
use crate::solve::SolveOptions;
use crate::solve::MSG_COMPLETE;
use crate::solve::MSG_UNKNOWN;
use crate::solve::MSG_UNSATISFIABLE;

/// A [`TerminationCondition`] which triggers once another solver of the portfolio has reached a
/// conclusive result.
#[derive(Clone, Debug)]
struct StopFlag {
    stop: Arc<AtomicBool>,
}

impl TerminationCondition for StopFlag {
    fn should_stop(&mut self) -> bool {
        self.stop.load(Ordering::Relaxed)
    }
}

/// The state shared by the solvers of the portfolio.
#[derive(Debug)]
struct Race {
    stop: Arc<AtomicBool>,
    /// The index of the worker which reported first; `usize::MAX` while nobody has.
    winner: AtomicUsize,
}

impl Race {
    /// Claims the victory for `worker`; returns whether it was the first to do so.
    fn claim(&self, worker: usize) -> bool {
        let won = self
            .winner
            .compare_exchange(usize::MAX, worker, Ordering::SeqCst, Ordering::SeqCst)
            .is_ok();
        self.stop.store(true, Ordering::Relaxed);
        won
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Status {
    /// A conclusive result; it has been reported by the worker itself.
    Reported,
    /// A solution which is not proven optimal.
    Satisfiable,
    Unknown,
}

/// The result of a single worker, which is reported by the portfolio if no worker reached a
/// conclusive result.
#[derive(Debug)]
struct WorkerOutcome {
    worker: usize,
    status: Status,
    objective_value: Option<i32>,
    solution: Vec<String>,
    measures: Measures,
}

/// Solves the model with `num_workers` solvers in parallel.
///
/// The first worker follows the options exactly; the other workers use randomised search with
/// different seeds.
pub(crate) fn solve(
    options: SolveOptions,
    num_workers: usize,
    signal: OsSignal,
) -> SquashResult<()> {
    if num_workers == 0 {
        return Err(SquashError::EmptyPortfolio);
    }

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(num_workers)
        .build()?;

    let race = Race {
        stop: Arc::new(AtomicBool::new(false)),
        winner: AtomicUsize::new(usize::MAX),
    };

    let outcomes = pool.install(|| {
        (0..num_workers)
            .into_par_iter()
            .map(|worker| run_worker(worker, options, signal.clone(), &race))
            .collect::<SquashResult<Vec<_>>>()
    })?;

    if race.winner.load(Ordering::SeqCst) != usize::MAX {
        return Ok(());
    }

    // Nobody reached a conclusive result; report the best solution that was found, if any.
    let best = outcomes
        .iter()
        .filter(|outcome| outcome.status == Status::Satisfiable)
        .min_by_key(|outcome| {
            let value = outcome.objective_value.unwrap_or_default();
            match options.optimise {
                Some(OptimisationDirection::Maximise) => -i64::from(value),
                _ => i64::from(value),
            }
        });

    match best {
        Some(outcome) => {
            debug!("Reporting the best solution, found by worker {}", outcome.worker);
            print_lines(&outcome.solution);
            log_outcome_statistics(outcome);
        }
        None => {
            println!("{MSG_UNKNOWN}");
            if let Some(outcome) = outcomes.first() {
                log_outcome_statistics(outcome);
            }
        }
    }

    Ok(())
}

fn log_outcome_statistics(outcome: &WorkerOutcome) {
    if let Some(value) = outcome.objective_value {
        log_statistic("objective", value);
    }
    log_statistic("worker", outcome.worker);
    outcome.measures.log(StatisticLogger::default());
    log_statistic_postfix();
}

fn run_worker(
    worker: usize,
    options: SolveOptions,
    signal: OsSignal,
    race: &Race,
) -> SquashResult<WorkerOutcome> {
    let mut solver = Solver::with_options(SolverOptions::with_seed(
        options.random_seed.wrapping_add(worker as u64),
    ));

    let mut termination = Combinator::new(
        Combinator::new(
            signal,
            StopFlag {
                stop: Arc::clone(&race.stop),
            },
        ),
        options.time_limit.map(TimeBudget::starting_now),
    );

    let Some(instance) = build_model(&mut solver, options)? else {
        if race.claim(worker) {
            println!("{MSG_UNSATISFIABLE}");
            solver.log_statistics();
        }
        return Ok(outcome(worker, Status::Reported, &solver));
    };
    let ModelInstance {
        outputs,
        search,
        objective,
    } = instance;

    let mut brancher = if worker == 0 && !options.free_search {
        search
    } else if worker == 0 {
        solver.default_brancher()
    } else {
        solver.random_brancher()
    };

    let Some(direction) = options.optimise else {
        return Ok(match solver.satisfy(&mut brancher, &mut termination) {
            SatisfactionResult::Satisfiable(solution) => {
                if race.claim(worker) {
                    print_lines(&format_solution(&solution, &outputs));
                    solver.log_statistics();
                }
                outcome(worker, Status::Reported, &solver)
            }
            SatisfactionResult::Unsatisfiable => {
                if race.claim(worker) {
                    println!("{MSG_UNSATISFIABLE}");
                    solver.log_statistics();
                }
                outcome(worker, Status::Reported, &solver)
            }
            SatisfactionResult::Unknown => outcome(worker, Status::Unknown, &solver),
        });
    };
    let objective = objective.ok_or(SquashError::NoObjective(options.model))?;

    let result = solver.optimise(
        &mut brancher,
        &mut termination,
        direction,
        objective,
        |_: &Solver, solution: SolutionReference, _: &DefaultBrancher| {
            debug!(
                "Worker {worker} found a solution with objective value {}",
                solution.get_integer_value(objective)
            );
        },
    );

    Ok(match result {
        OptimisationResult::Optimal(solution) => {
            if race.claim(worker) {
                print_lines(&format_solution(&solution, &outputs));
                println!("{MSG_COMPLETE}");
                solver.log_statistics_with_objective(i64::from(
                    solution.get_integer_value(objective),
                ));
            }
            outcome(worker, Status::Reported, &solver)
        }
        OptimisationResult::Satisfiable(solution) => WorkerOutcome {
            objective_value: Some(solution.get_integer_value(objective)),
            solution: format_solution(&solution, &outputs),
            ..outcome(worker, Status::Satisfiable, &solver)
        },
        OptimisationResult::Unsatisfiable => {
            if race.claim(worker) {
                println!("{MSG_UNSATISFIABLE}");
                solver.log_statistics();
            }
            outcome(worker, Status::Reported, &solver)
        }
        OptimisationResult::Unknown => outcome(worker, Status::Unknown, &solver),
    })
}

fn outcome(worker: usize, status: Status, solver: &Solver) -> WorkerOutcome {
    WorkerOutcome {
        worker,
        status,
        objective_value: None,
        solution: vec![],
        measures: solver.measures(),
    }
}

fn print_lines(lines: &[String]) {
    for line in lines {
        println!("{line}");
    }
}
