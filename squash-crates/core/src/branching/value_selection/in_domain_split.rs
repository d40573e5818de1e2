use crate::branching::value_selection::ValueSelector;
use crate::branching::Branch;
use crate::branching::SelectionContext;
use crate::engine::variables::IntegerVariable;
use crate::predicate;
use crate::propagation::ReadDomains;
use crate::squash_assert_advanced;

/// A [`ValueSelector`] which splits the domain in half (based on the lower-bound and upper-bound,
/// disregarding holes): it first explores the lower half `[x <= mid]` and then the upper half
/// `[x >= mid + 1]`.
///
/// Note that this strategy will not necessarily result in an equal split if there are holes in the
/// domain.
#[derive(Debug, Copy, Clone, Default)]
pub struct InDomainSplit;

impl<Var: IntegerVariable> ValueSelector<Var> for InDomainSplit {
    fn select_value(&mut self, context: &mut SelectionContext, decision_variable: Var) -> Branch {
        let bound = midpoint(context, &decision_variable);
        squash_assert_advanced!(
            bound >= context.lower_bound(&decision_variable)
                && bound < context.upper_bound(&decision_variable),
            "It should hold that {} <= {bound} < {}",
            context.lower_bound(&decision_variable),
            context.upper_bound(&decision_variable)
        );

        Branch::binary(
            predicate!(decision_variable <= bound),
            predicate!(decision_variable >= bound + 1),
        )
    }
}

/// The floor of the average of the bounds of the variable.
pub(crate) fn midpoint<Var: IntegerVariable>(context: &SelectionContext, variable: &Var) -> i32 {
    let lower_bound = context.lower_bound(variable) as i64;
    let upper_bound = context.upper_bound(variable) as i64;

    (lower_bound + upper_bound).div_euclid(2) as i32
}
