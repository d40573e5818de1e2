//! A [`TerminationCondition`] is a condition which is polled by the solver during the search
//! process. It indicates when the solver should stop, even if no definitive conclusions have been
//! made. The most common example would be [`time_budget::TimeBudget`], which gives the solver a
//! certain time budget to complete its search.
//!
//! The search loop polls the condition whenever it is about to select a new branch and whenever
//! it is about to backtrack; a search which is stopped reports an unknown outcome rather than
//! infeasibility.

pub mod combinator;
pub mod fail_budget;
pub mod indefinite;
pub mod node_budget;
pub mod solution_budget;
pub mod time_budget;

/// The central trait that defines a termination condition. A termination condition determines when
/// the solver should give up searching for solutions.
pub trait TerminationCondition {
    /// Returns `true` when the solver should stop, `false` otherwise.
    fn should_stop(&mut self) -> bool;

    /// Called whenever the search applies a branching alternative.
    fn decision_has_been_made(&mut self) {}

    /// Called whenever propagation ends in a contradiction.
    fn conflict_has_occurred(&mut self) {}

    /// Called whenever a solution is reported.
    fn solution_has_been_found(&mut self) {}
}

impl<T: TerminationCondition> TerminationCondition for Option<T> {
    fn should_stop(&mut self) -> bool {
        match self {
            Some(t) => t.should_stop(),
            None => false,
        }
    }

    fn decision_has_been_made(&mut self) {
        if let Some(t) = self {
            t.decision_has_been_made()
        }
    }

    fn conflict_has_occurred(&mut self) {
        if let Some(t) = self {
            t.conflict_has_occurred()
        }
    }

    fn solution_has_been_found(&mut self) {
        if let Some(t) = self {
            t.solution_has_been_found()
        }
    }
}

impl<T: TerminationCondition + ?Sized> TerminationCondition for Box<T> {
    fn should_stop(&mut self) -> bool {
        (**self).should_stop()
    }

    fn decision_has_been_made(&mut self) {
        (**self).decision_has_been_made()
    }

    fn conflict_has_occurred(&mut self) {
        (**self).conflict_has_occurred()
    }

    fn solution_has_been_found(&mut self) {
        (**self).solution_has_been_found()
    }
}
