use log::warn;

use crate::branching::tie_breaking::Direction;
use crate::branching::tie_breaking::InOrderTieBreaker;
use crate::branching::tie_breaking::TieBreaker;
use crate::branching::variable_selection::VariableSelector;
use crate::branching::SelectionContext;
use crate::engine::variables::IntegerVariable;
use crate::propagation::ReadDomains;

/// A [`VariableSelector`] which selects the unfixed variable with the largest domain, breaking
/// ties in input order.
pub struct AntiFirstFail<Var> {
    variables: Vec<Var>,
    tie_breaker: InOrderTieBreaker<Var, u64>,
}

impl<Var> std::fmt::Debug for AntiFirstFail<Var> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AntiFirstFail").finish()
    }
}

impl<Var: Clone> AntiFirstFail<Var> {
    pub fn new(variables: &[Var]) -> Self {
        if variables.is_empty() {
            warn!("The AntiFirstFail variable selector was not provided with any variables");
        }
        Self {
            variables: variables.to_vec(),
            tie_breaker: InOrderTieBreaker::new(Direction::Maximum),
        }
    }
}

impl<Var: IntegerVariable> VariableSelector<Var> for AntiFirstFail<Var> {
    fn select_variable(&mut self, context: &mut SelectionContext) -> Option<Var> {
        self.variables
            .iter()
            .filter(|variable| !context.is_fixed(*variable))
            .for_each(|variable| {
                self.tie_breaker
                    .consider(variable.clone(), context.domain_size(variable));
            });
        self.tie_breaker.select()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::basic_types::tests::TestRandom;

    #[test]
    fn largest_domain_is_selected() {
        let assignments = SelectionContext::create_for_testing(vec![(0, 3), (0, 8), (1, 9)]);
        let mut test_rng = TestRandom::default();
        let mut context = SelectionContext::new(&assignments, &mut test_rng);
        let integer_variables = context.get_domains().collect::<Vec<_>>();

        let mut strategy = AntiFirstFail::new(&integer_variables);
        let selected = strategy.select_variable(&mut context);
        assert_eq!(Some(integer_variables[1]), selected);
    }
}
