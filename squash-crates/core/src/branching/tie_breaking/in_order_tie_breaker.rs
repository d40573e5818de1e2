use super::Direction;
use super::TieBreaker;

/// A tie-breaker which simply selects the first variable that it receives with the "best" value
/// according to the provided [`Direction`].
///
/// For example, if the provided direction is [`Direction::Minimum`] and there are two variables
/// `x1` with value 5 and `x2` with value 5, if the tie-breaker first receives `x2` and then `x1`
/// then it will return `x2` because it was the first variable with the minimum value (of 5 in this
/// example) which was provided.
#[derive(Debug, Clone)]
pub struct InOrderTieBreaker<Var, Value> {
    /// The selected variable and its value, [`None`] if no variable has been considered yet
    selected: Option<(Var, Value)>,
    /// Whether the tie-breaker should find the variable with the maximum or minimum value
    direction: Direction,
}

impl<Var, Value> InOrderTieBreaker<Var, Value> {
    pub fn new(direction: Direction) -> Self {
        Self {
            selected: None,
            direction,
        }
    }
}

impl<Var, Value: PartialOrd> TieBreaker<Var, Value> for InOrderTieBreaker<Var, Value> {
    fn consider(&mut self, variable: Var, value: Value) {
        let improves = match &self.selected {
            None => true,
            Some((_, selected_value)) => match self.direction {
                Direction::Maximum => value > *selected_value,
                Direction::Minimum => value < *selected_value,
            },
        };

        if improves {
            self.selected = Some((variable, value));
        }
    }

    fn select(&mut self) -> Option<Var> {
        self.selected.take().map(|(variable, _)| variable)
    }

    fn get_direction(&self) -> Direction {
        self.direction
    }
}

#[cfg(test)]
mod tests {
    use super::InOrderTieBreaker;
    use crate::branching::tie_breaking::Direction;
    use crate::branching::tie_breaking::TieBreaker;
    use crate::engine::variables::DomainId;

    #[test]
    fn test_selection_first_value() {
        let mut breaker = InOrderTieBreaker::new(Direction::Minimum);

        breaker.consider(DomainId::new(0), 10);
        breaker.consider(DomainId::new(1), 10);
        breaker.consider(DomainId::new(2), 10);

        assert_eq!(Some(DomainId::new(0)), breaker.select());
    }

    #[test]
    fn test_selection_picks_lowest_value() {
        let mut breaker = InOrderTieBreaker::new(Direction::Minimum);

        breaker.consider(DomainId::new(0), 10);
        breaker.consider(DomainId::new(1), 5);
        breaker.consider(DomainId::new(2), 10);

        assert_eq!(Some(DomainId::new(1)), breaker.select());
    }

    #[test]
    fn test_selection_picks_highest_value() {
        let mut breaker = InOrderTieBreaker::new(Direction::Maximum);

        breaker.consider(DomainId::new(0), 5);
        breaker.consider(DomainId::new(1), 20);
        breaker.consider(DomainId::new(2), 20);

        assert_eq!(Some(DomainId::new(1)), breaker.select());
    }

    #[test]
    fn selecting_resets_the_tie_breaker() {
        let mut breaker = InOrderTieBreaker::new(Direction::Minimum);
        breaker.consider(DomainId::new(0), 1);

        let _ = breaker.select();

        assert_eq!(None, breaker.select());
    }
}
