mod os_signal_termination;
mod portfolio;
mod result;
mod solve;

use std::io::Write;
use std::time::Duration;

use clap::Parser;
use log::error;
use log::info;
use log::warn;
use log::LevelFilter;
use os_signal_termination::OsSignal;
use result::SquashError;
use result::SquashResult;
use solve::SolveOptions;
use squash_solver::core::convert_case::Case;
use squash_solver::core::options::AllDifferentStrength;
use squash_solver::core::options::OptimisationDirection;
use squash_solver::core::statistics::configure_statistic_logging;
use squash_solver::models::Model;
use squash_solver::models::ModelOptions;

#[derive(Debug, Parser)]
#[command(
    help_template = "\
{before-help}{name} {version}
Authors: {author}
About: {about}

{usage-heading}\n{tab}{usage}

{all-args}{after-help}
",
    author,
    version,
    about,
    arg_required_else_help = true
)]
struct Args {
    /// The model to solve.
    #[arg(value_enum)]
    model: Model,

    /// The size of the model: the number of variables of big-leq, the number of queens, or the
    /// number of nodes of the Hamiltonian path.
    ///
    /// Possible values: u32
    #[arg(short = 'n', long = "size", default_value_t = 8, verbatim_doc_comment)]
    size: u32,

    /// The time budget for the solver, given in milliseconds.
    ///
    /// Possible values: u64 (Optional)
    #[arg(short = 't', long = "time-limit", verbatim_doc_comment)]
    time_limit: Option<u64>,

    /// The random seed to use for the Pseudo Random Number Generator.
    ///
    /// Randomisation is used by the random variable/value selectors. In a portfolio, worker `i`
    /// uses the seed `random_seed + i`.
    ///
    /// Possible values: u64
    #[arg(
        short = 'r',
        long = "random-seed",
        default_value_t = 42,
        verbatim_doc_comment
    )]
    random_seed: u64,

    /// Enables log message output from the solver.
    ///
    /// For printing statistics see the option "--log-statistics", and for printing all solutions
    /// (in case of a satisfaction problem) or printing solutions of increasing quality (in case of
    /// an optimization problem) see the option "--all-solutions".
    ///
    /// Possible values: bool
    #[arg(short = 'v', long = "verbose", verbatim_doc_comment)]
    verbose: bool,

    /// Enables logging of statistics from the solver.
    ///
    /// Possible values: bool
    #[arg(short = 's', long = "log-statistics", verbatim_doc_comment)]
    log_statistics: bool,

    /// Instructs the solver to ignore the search strategy of the model and to use its default
    /// search instead.
    ///
    /// Possible values: bool
    #[arg(short = 'f', long = "free-search", verbatim_doc_comment)]
    free_search: bool,

    /// Instructs the solver to report all solutions in the case of satisfaction problems,
    /// or print intermediate solutions of increasing quality in the case of optimisation
    /// problems.
    ///
    /// Possible values: bool
    #[arg(short = 'a', long = "all-solutions", verbatim_doc_comment)]
    all_solutions: bool,

    /// The number of solvers which search the model in parallel. The first solver uses the
    /// search of the model, the others a randomised search; the first solver to reach a
    /// conclusive result stops the others.
    ///
    /// Cannot be combined with "--all-solutions".
    ///
    /// Possible values: usize
    #[arg(
        short = 'p',
        long = "portfolio",
        default_value_t = 1,
        verbatim_doc_comment
    )]
    num_workers: usize,

    /// The strength of the all-different constraints of the model.
    #[arg(long, value_enum, default_value_t)]
    all_different_strength: AllDifferentStrength,

    /// Optimise the objective of the model in the given direction instead of finding any
    /// solution.
    #[arg(long, value_enum)]
    optimise: Option<OptimisationDirection>,
}

fn configure_logging(verbose: bool, log_statistics: bool) -> std::io::Result<()> {
    if log_statistics {
        configure_statistic_logging(
            "%%%mzn-stat:",
            Some("%%%mzn-stat-end"),
            Some(Case::Camel),
            None,
        );
    }
    let level_filter = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    env_logger::Builder::new()
        .format(move |buf, record| {
            write!(buf, "% ")?;

            writeln!(buf, "{}", record.args())
        })
        .filter_level(level_filter)
        .target(env_logger::Target::Stdout)
        .init();
    info!("Logging successfully configured");
    Ok(())
}

fn main() {
    match run() {
        Ok(()) => {}
        Err(e) => {
            error!("Execution failed, error: {e}");
            std::process::exit(1);
        }
    }
}

fn run() -> SquashResult<()> {
    let args = Args::parse();

    configure_logging(args.verbose, args.log_statistics)?;

    if squash_solver::core::asserts::SQUASH_ASSERT_LEVEL_DEFINITION
        >= squash_solver::core::asserts::SQUASH_ASSERT_MODERATE
    {
        warn!(
            "Potential performance degradation: the Squash assert level is set to {}, meaning many debug asserts are active which may result in performance degradation.",
            squash_solver::core::asserts::SQUASH_ASSERT_LEVEL_DEFINITION
        );
    };

    if args.num_workers == 0 {
        return Err(SquashError::EmptyPortfolio);
    }

    let options = SolveOptions {
        model: args.model,
        model_options: ModelOptions {
            size: args.size,
            all_different_strength: args.all_different_strength,
        },
        free_search: args.free_search,
        all_solutions: args.all_solutions,
        optimise: args.optimise,
        time_limit: args.time_limit.map(Duration::from_millis),
        random_seed: args.random_seed,
    };

    let signal = OsSignal::install()?;

    if args.num_workers == 1 {
        return solve::solve(options, signal);
    }

    if args.all_solutions {
        warn!("Enumerating all solutions is not supported by a portfolio; using a single solver.");
        return solve::solve(options, signal);
    }

    portfolio::solve(options, args.num_workers, signal)
}
