use log::warn;

use super::VariableSelector;
use crate::branching::tie_breaking::Direction;
use crate::branching::tie_breaking::InOrderTieBreaker;
use crate::branching::tie_breaking::TieBreaker;
use crate::branching::SelectionContext;
use crate::engine::variables::SetId;
use crate::propagation::ReadDomains;

/// Selects the uninstantiated set variable with the fewest undecided elements (the difference
/// between the envelope and kernel sizes).
#[derive(Debug, Clone)]
pub struct MinDelta {
    sets: Vec<SetId>,
}

/// Selects the uninstantiated set variable with the most undecided elements.
#[derive(Debug, Clone)]
pub struct MaxDelta {
    sets: Vec<SetId>,
}

impl MinDelta {
    pub fn new(sets: &[SetId]) -> Self {
        if sets.is_empty() {
            warn!("The MinDelta variable selector was not provided with any variables");
        }
        MinDelta {
            sets: sets.to_vec(),
        }
    }
}

impl MaxDelta {
    pub fn new(sets: &[SetId]) -> Self {
        if sets.is_empty() {
            warn!("The MaxDelta variable selector was not provided with any variables");
        }
        MaxDelta {
            sets: sets.to_vec(),
        }
    }
}

fn select_by_delta(
    sets: &[SetId],
    context: &SelectionContext,
    direction: Direction,
) -> Option<SetId> {
    let mut tie_breaker = InOrderTieBreaker::new(direction);

    sets.iter()
        .filter(|&&set| !context.is_set_instantiated(set))
        .for_each(|&set| {
            tie_breaker.consider(set, context.envelope_size(set) - context.kernel_size(set))
        });

    tie_breaker.select()
}

impl VariableSelector<SetId> for MinDelta {
    fn select_variable(&mut self, context: &mut SelectionContext) -> Option<SetId> {
        select_by_delta(&self.sets, context, Direction::Minimum)
    }
}

impl VariableSelector<SetId> for MaxDelta {
    fn select_variable(&mut self, context: &mut SelectionContext) -> Option<SetId> {
        select_by_delta(&self.sets, context, Direction::Maximum)
    }
}
