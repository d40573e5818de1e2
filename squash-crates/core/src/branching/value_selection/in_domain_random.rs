use crate::branching::value_selection::value_selector::branch_on_value;
use crate::branching::value_selection::ValueSelector;
use crate::branching::Branch;
use crate::branching::SelectionContext;
use crate::engine::variables::IntegerVariable;
use crate::propagation::ReadDomains;

/// A [`ValueSelector`] which chooses a value from the domain uniformly at random.
#[derive(Debug, Clone, Copy, Default)]
pub struct InDomainRandom;

impl<Var: IntegerVariable> ValueSelector<Var> for InDomainRandom {
    fn select_value(&mut self, context: &mut SelectionContext, decision_variable: Var) -> Branch {
        let size = context.domain_size(&decision_variable) as usize;
        let index = context.random().generate_usize_in_range(0..size);

        let value = context
            .iterate_domain(&decision_variable)
            .nth(index)
            .unwrap_or_else(|| context.lower_bound(&decision_variable));

        branch_on_value(context, decision_variable, value)
    }
}
