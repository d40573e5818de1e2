use super::TerminationCondition;

/// A [`TerminationCondition`] which triggers once the given number of contradictions has been
/// encountered.
#[derive(Debug, Copy, Clone)]
pub struct FailBudget {
    budget: u64,
    num_fails: u64,
}

impl FailBudget {
    pub fn new(budget: u64) -> Self {
        Self {
            budget,
            num_fails: 0,
        }
    }
}

impl TerminationCondition for FailBudget {
    fn should_stop(&mut self) -> bool {
        self.num_fails >= self.budget
    }

    fn conflict_has_occurred(&mut self) {
        self.num_fails += 1;
    }
}
