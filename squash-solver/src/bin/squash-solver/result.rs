use squash_solver::core::ConstraintOperationError;
use squash_solver::models::Model;
use thiserror::Error;

pub(crate) type SquashResult<T> = Result<T, SquashError>;

#[derive(Error, Debug)]
pub(crate) enum SquashError {
    #[error("IO error, more details: {0}")]
    IOError(#[from] std::io::Error),
    #[error("Failed to build the model, more details: {0}")]
    InvalidModel(#[from] ConstraintOperationError),
    #[error("The model {0} has no objective to optimise.")]
    NoObjective(Model),
    #[error("The portfolio needs at least one worker.")]
    EmptyPortfolio,
    #[error("Failed to create the thread pool, more details: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}
