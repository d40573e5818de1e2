use log::warn;

use super::VariableSelector;
use crate::branching::SelectionContext;
use crate::engine::variables::IntegerVariable;
use crate::propagation::ReadDomains;

/// A [`VariableSelector`] which selects a random unfixed variable.
#[derive(Debug, Clone)]
pub struct RandomSelector<Var> {
    variables: Vec<Var>,
}

impl<Var: Clone> RandomSelector<Var> {
    pub fn new(variables: &[Var]) -> Self {
        if variables.is_empty() {
            warn!("The RandomSelector variable selector was not provided with any variables");
        }
        Self {
            variables: variables.to_vec(),
        }
    }
}

impl<Var: IntegerVariable> VariableSelector<Var> for RandomSelector<Var> {
    fn select_variable(&mut self, context: &mut SelectionContext) -> Option<Var> {
        let candidates = self
            .variables
            .iter()
            .filter(|variable| !context.is_fixed(*variable))
            .collect::<Vec<_>>();

        if candidates.is_empty() {
            return None;
        }

        let index = context
            .random()
            .generate_usize_in_range(0..candidates.len());
        Some(candidates[index].clone())
    }
}
