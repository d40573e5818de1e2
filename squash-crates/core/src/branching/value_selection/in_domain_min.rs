use crate::branching::value_selection::value_selector::branch_on_value;
use crate::branching::value_selection::ValueSelector;
use crate::branching::Branch;
use crate::branching::SelectionContext;
use crate::engine::variables::IntegerVariable;
use crate::propagation::ReadDomains;

/// [`ValueSelector`] which chooses to assign the provided variable to its lowest-bound.
#[derive(Debug, Copy, Clone, Default)]
pub struct InDomainMin;

impl<Var: IntegerVariable> ValueSelector<Var> for InDomainMin {
    fn select_value(&mut self, context: &mut SelectionContext, decision_variable: Var) -> Branch {
        let value = context.lower_bound(&decision_variable);
        branch_on_value(context, decision_variable, value)
    }
}
