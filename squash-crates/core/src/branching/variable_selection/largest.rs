use log::warn;

use crate::branching::tie_breaking::Direction;
use crate::branching::tie_breaking::InOrderTieBreaker;
use crate::branching::tie_breaking::TieBreaker;
use crate::branching::variable_selection::VariableSelector;
use crate::branching::SelectionContext;
use crate::engine::variables::IntegerVariable;
use crate::propagation::ReadDomains;

/// A [`VariableSelector`] which selects the variable with the largest value in its domain.
pub struct Largest<Var> {
    variables: Vec<Var>,
    tie_breaker: InOrderTieBreaker<Var, i32>,
}

impl<Var> std::fmt::Debug for Largest<Var> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Largest").finish()
    }
}

impl<Var: Clone> Largest<Var> {
    pub fn new(variables: &[Var]) -> Self {
        if variables.is_empty() {
            warn!("The Largest variable selector was not provided with any variables");
        }
        Largest {
            variables: variables.to_vec(),
            tie_breaker: InOrderTieBreaker::new(Direction::Maximum),
        }
    }
}

impl<Var: IntegerVariable> VariableSelector<Var> for Largest<Var> {
    fn select_variable(&mut self, context: &mut SelectionContext) -> Option<Var> {
        self.variables
            .iter()
            .filter(|variable| !context.is_fixed(*variable))
            .for_each(|variable| {
                self.tie_breaker
                    .consider(variable.clone(), context.upper_bound(variable));
            });
        self.tie_breaker.select()
    }
}
