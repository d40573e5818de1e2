//! Contains structures related to optimisation.
//!
//! Optimisation is done by branch-and-bound (see [`Solver::optimise`]): every solution that is
//! found imposes a cut on the objective which the remainder of the search has to improve upon.
use std::fmt::Display;

pub(crate) mod branch_and_bound;
pub mod solution_callback;

#[cfg(doc)]
use crate::Solver;

/// The direction of the optimisation, either maximising or minimising.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum OptimisationDirection {
    Maximise,
    #[default]
    Minimise,
}

impl Display for OptimisationDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OptimisationDirection::Maximise => write!(f, "maximise"),
            OptimisationDirection::Minimise => write!(f, "minimise"),
        }
    }
}
