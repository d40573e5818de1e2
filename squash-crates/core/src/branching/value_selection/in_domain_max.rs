use crate::branching::value_selection::value_selector::branch_on_value;
use crate::branching::value_selection::ValueSelector;
use crate::branching::Branch;
use crate::branching::SelectionContext;
use crate::engine::variables::IntegerVariable;
use crate::propagation::ReadDomains;

/// [`ValueSelector`] which chooses to assign the provided variable to its upper-bound.
#[derive(Debug, Copy, Clone, Default)]
pub struct InDomainMax;

impl<Var: IntegerVariable> ValueSelector<Var> for InDomainMax {
    fn select_value(&mut self, context: &mut SelectionContext, decision_variable: Var) -> Branch {
        let value = context.upper_bound(&decision_variable);
        branch_on_value(context, decision_variable, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::basic_types::tests::TestRandom;
    use crate::engine::variables::TransformableVariable;
    use crate::predicate;

    #[test]
    fn test_returns_correct_branch() {
        let assignments = SelectionContext::create_for_testing(vec![(0, 10)]);
        let mut test_rng = TestRandom::default();
        let mut context = SelectionContext::new(&assignments, &mut test_rng);
        let domain_ids = context.get_domains().collect::<Vec<_>>();

        let mut selector = InDomainMax;

        let branch = selector.select_value(&mut context, domain_ids[0]);
        assert_eq!(
            Branch::binary(predicate!(domain_ids[0] == 10), predicate!(domain_ids[0] != 10)),
            branch
        );
    }

    #[test]
    fn negated_view_branches_on_the_lower_bound_of_the_domain() {
        let assignments = SelectionContext::create_for_testing(vec![(2, 10)]);
        let mut test_rng = TestRandom::default();
        let mut context = SelectionContext::new(&assignments, &mut test_rng);
        let domain_id = context.get_domains().next().unwrap();

        let mut selector = InDomainMax;

        let branch = selector.select_value(&mut context, domain_id.scaled(-1));
        assert_eq!(
            Branch::binary(predicate!(domain_id == 2), predicate!(domain_id != 2)),
            branch
        );
    }
}
