use crate::basic_types::SolutionReference;
use crate::branching::Branch;
use crate::branching::SelectionContext;
use crate::engine::variables::IntegerVariable;
use crate::predicate;
use crate::propagation::ReadDomains;

/// A trait containing the interface for [`ValueSelector`]s, specifying the appropriate hooks into
/// the solver and the methods required for selecting a value for a given variable.
pub trait ValueSelector<Var> {
    /// Determines how to branch on `decision_variable`. The domain of the `decision_variable`
    /// should have at least 2 values in it (as it otherwise should not have been selected as
    /// `decision_variable`). Returns a [`Branch`] whose alternatives together cover the domain.
    fn select_value(&mut self, context: &mut SelectionContext, decision_variable: Var) -> Branch;

    /// A function which is called after the search has undone a decision.
    fn on_backtrack(&mut self) {}

    /// This method is called when a solution is found; either when iterating over all solutions in
    /// the case of a satisfiable problem or on solutions of increasing quality when solving an
    /// optimisation problem.
    fn on_solution(&mut self, _solution: SolutionReference) {}
}

/// Creates the branch which first tries `decision_variable == value` and then excludes `value`.
///
/// A bounded domain cannot remove an interior value, so for a value strictly between the bounds
/// the exclusion is split into `decision_variable < value` and `decision_variable > value`.
pub(crate) fn branch_on_value<Var: IntegerVariable>(
    context: &SelectionContext,
    decision_variable: Var,
    value: i32,
) -> Branch {
    if value == context.lower_bound(&decision_variable)
        || value == context.upper_bound(&decision_variable)
    {
        return Branch::binary(
            predicate!(decision_variable == value),
            predicate!(decision_variable != value),
        );
    }

    Branch::new(vec![
        predicate!(decision_variable == value).into(),
        predicate!(decision_variable <= value - 1).into(),
        predicate!(decision_variable >= value + 1).into(),
    ])
}
