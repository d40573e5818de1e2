use super::in_domain_split::midpoint;
use crate::branching::value_selection::value_selector::branch_on_value;
use crate::branching::value_selection::ValueSelector;
use crate::branching::Branch;
use crate::branching::SelectionContext;
use crate::engine::variables::IntegerVariable;
use crate::propagation::ReadDomains;

/// [`ValueSelector`] which branches on the value of the domain closest to the middle of the
/// bounds; when two values are equally close the lower one is chosen.
#[derive(Debug, Copy, Clone, Default)]
pub struct InDomainMiddle;

impl<Var: IntegerVariable> ValueSelector<Var> for InDomainMiddle {
    fn select_value(&mut self, context: &mut SelectionContext, decision_variable: Var) -> Branch {
        let middle = midpoint(context, &decision_variable);

        let value = if context.contains(&decision_variable, middle) {
            middle
        } else {
            let below = context.previous_value(&decision_variable, middle);
            let above = context.next_value(&decision_variable, middle);

            if (middle as i64 - below as i64) <= (above as i64 - middle as i64) {
                below
            } else {
                above
            }
        };

        branch_on_value(context, decision_variable, value)
    }
}
