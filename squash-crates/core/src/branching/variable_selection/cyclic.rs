use log::warn;

use super::VariableSelector;
use crate::branching::SelectionContext;
use crate::engine::variables::IntegerVariable;
use crate::propagation::ReadDomains;

/// A [`VariableSelector`] which cycles through the variables: it selects the first unfixed
/// variable after the previously selected one, wrapping around at the end of the list.
#[derive(Debug, Clone)]
pub struct Cyclic<Var> {
    variables: Vec<Var>,
    /// The position at which the scan for the next variable starts
    next_position: usize,
}

impl<Var: Clone> Cyclic<Var> {
    pub fn new(variables: &[Var]) -> Self {
        if variables.is_empty() {
            warn!("The Cyclic variable selector was not provided with any variables");
        }
        Self {
            variables: variables.to_vec(),
            next_position: 0,
        }
    }
}

impl<Var: IntegerVariable> VariableSelector<Var> for Cyclic<Var> {
    fn select_variable(&mut self, context: &mut SelectionContext) -> Option<Var> {
        let num_variables = self.variables.len();

        let position = (0..num_variables)
            .map(|offset| (self.next_position + offset) % num_variables)
            .find(|&position| !context.is_fixed(&self.variables[position]))?;

        self.next_position = (position + 1) % num_variables;
        Some(self.variables[position].clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::basic_types::tests::TestRandom;

    #[test]
    fn variables_are_selected_round_robin() {
        let mut assignments =
            SelectionContext::create_for_testing(vec![(0, 10), (0, 10), (0, 10)]);
        let integer_variables = assignments.get_domains().collect::<Vec<_>>();
        let mut strategy = Cyclic::new(&integer_variables);
        let mut test_rng = TestRandom::default();

        {
            let mut context = SelectionContext::new(&assignments, &mut test_rng);
            assert_eq!(
                Some(integer_variables[0]),
                strategy.select_variable(&mut context)
            );
            assert_eq!(
                Some(integer_variables[1]),
                strategy.select_variable(&mut context)
            );
        }

        let _ = assignments.make_assignment(integer_variables[2], 4);

        let mut context = SelectionContext::new(&assignments, &mut test_rng);
        assert_eq!(
            Some(integer_variables[0]),
            strategy.select_variable(&mut context)
        );
    }

    #[test]
    fn no_variable_is_selected_when_all_are_fixed() {
        let assignments = SelectionContext::create_for_testing(vec![(1, 1), (2, 2)]);
        let mut test_rng = TestRandom::default();
        let mut context = SelectionContext::new(&assignments, &mut test_rng);
        let integer_variables = context.get_domains().collect::<Vec<_>>();

        let mut strategy = Cyclic::new(&integer_variables);
        assert_eq!(None, strategy.select_variable(&mut context));
    }
}
