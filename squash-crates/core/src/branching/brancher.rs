use super::Branch;
use super::SelectionContext;
use crate::basic_types::SolutionReference;
use crate::statistics::StatisticLogger;
#[cfg(doc)]
use crate::branching::branchers::DynamicBrancher;
#[cfg(doc)]
use crate::branching::value_selection::ValueSelector;
#[cfg(doc)]
use crate::branching::variable_selection::VariableSelector;

/// A trait for definining a branching strategy (oftentimes utilising a [`VariableSelector`] and a
/// [`ValueSelector`]).
///
/// In general, implementations of this trait define how the search of the solver proceeds (i.e.
/// it controls how the solver determines which part of the search space to explore). It is
/// required that the resulting decision creates an extension of the current partial assignment.
///
/// If the [`Brancher`] (or any component thereof) is implemented incorrectly then the behaviour
/// of the solver is undefined.
pub trait Brancher {
    /// Returns the next [`Branch`]; if all variables under consideration are assigned then it
    /// should return [`None`].
    fn next_branch(&mut self, context: &mut SelectionContext) -> Option<Branch>;

    /// A function which is called after the search has undone a decision.
    fn on_backtrack(&mut self) {}

    /// This method is called when a solution is found; the solution is exposed through the
    /// [`SolutionReference`].
    fn on_solution(&mut self, _solution: SolutionReference) {}

    /// Logs statistics of the brancher using the provided [`StatisticLogger`].
    ///
    /// The [`DynamicBrancher`] forwards the logger to all of its branchers.
    fn log_statistics(&self, _statistic_logger: StatisticLogger) {}
}

impl<B: Brancher + ?Sized> Brancher for Box<B> {
    fn next_branch(&mut self, context: &mut SelectionContext) -> Option<Branch> {
        (**self).next_branch(context)
    }

    fn on_backtrack(&mut self) {
        (**self).on_backtrack()
    }

    fn on_solution(&mut self, solution: SolutionReference) {
        (**self).on_solution(solution)
    }

    fn log_statistics(&self, statistic_logger: StatisticLogger) {
        (**self).log_statistics(statistic_logger)
    }
}
