use crate::branching::SelectionContext;

/// A trait containing the interface for [`VariableSelector`]s, specifying the appropriate hooks
/// into the solver and the methods required for selecting variables.
pub trait VariableSelector<Var> {
    /// Determines which variable to select next if there are any left to branch on. Should only
    /// return [`None`] when all variables which have been passed to the [`VariableSelector`] have
    /// been assigned. Otherwise it should return the variable to branch on next.
    fn select_variable(&mut self, context: &mut SelectionContext) -> Option<Var>;

    /// A function which is called after the search has undone a decision.
    fn on_backtrack(&mut self) {}
}
