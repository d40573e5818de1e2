use crate::basic_types::PropagationStatusCP;
use crate::engine::variables::IntegerVariable;
use crate::propagation::DomainEvents;
use crate::propagation::Entailment;
use crate::propagation::LocalId;
use crate::propagation::Priority;
use crate::propagation::PropagationContext;
use crate::propagation::PropagationContextMut;
use crate::propagation::Propagator;
use crate::propagation::PropagatorConstructor;
use crate::propagation::PropagatorConstructorContext;
use crate::propagation::ReadDomains;

/// The [`PropagatorConstructor`] for the [`BinaryNotEqualsPropagator`].
#[derive(Clone, Debug)]
pub(crate) struct BinaryNotEqualsPropagatorArgs<AVar, BVar> {
    pub(crate) a: AVar,
    pub(crate) b: BVar,
}

impl<AVar, BVar> PropagatorConstructor for BinaryNotEqualsPropagatorArgs<AVar, BVar>
where
    AVar: IntegerVariable + 'static,
    BVar: IntegerVariable + 'static,
{
    type PropagatorImpl = BinaryNotEqualsPropagator<AVar, BVar>;

    fn create(self, mut context: PropagatorConstructorContext) -> Self::PropagatorImpl {
        let BinaryNotEqualsPropagatorArgs { a, b } = self;

        // We only care about the case where one of the two is assigned
        context.register(a.clone(), DomainEvents::ASSIGN, LocalId::from(0));
        context.register(b.clone(), DomainEvents::ASSIGN, LocalId::from(1));

        BinaryNotEqualsPropagator { a, b }
    }
}

/// Propagator for the constraint `a != b`.
#[derive(Clone, Debug)]
pub(crate) struct BinaryNotEqualsPropagator<AVar, BVar> {
    a: AVar,
    b: BVar,
}

impl<AVar, BVar> Propagator for BinaryNotEqualsPropagator<AVar, BVar>
where
    AVar: IntegerVariable + 'static,
    BVar: IntegerVariable + 'static,
{
    fn name(&self) -> &str {
        "BinaryNotEq"
    }

    fn priority(&self) -> Priority {
        Priority::Binary
    }

    fn initial_propagate(&mut self, mut context: PropagationContextMut) -> PropagationStatusCP {
        if context.is_fixed(&self.a) {
            let _ = context.remove_value(&self.b, context.lower_bound(&self.a))?;
        }

        if context.is_fixed(&self.b) {
            let _ = context.remove_value(&self.a, context.lower_bound(&self.b))?;
        }

        Ok(())
    }

    fn is_entailed(&self, context: PropagationContext) -> Entailment {
        let a_lb = context.lower_bound(&self.a);
        let a_ub = context.upper_bound(&self.a);
        let b_lb = context.lower_bound(&self.b);
        let b_ub = context.upper_bound(&self.b);

        if a_ub < b_lb || b_ub < a_lb {
            // The domains are non-overlapping
            Entailment::True
        } else if a_lb == a_ub && b_lb == b_ub {
            // Both fixed and overlapping, hence equal
            Entailment::False
        } else if a_lb == a_ub && !context.contains(&self.b, a_lb) {
            Entailment::True
        } else if b_lb == b_ub && !context.contains(&self.a, b_lb) {
            Entailment::True
        } else {
            Entailment::Undefined
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::test_solver::TestSolver;

    #[test]
    fn detects_conflict() {
        let mut solver = TestSolver::default();
        let a = solver.new_variable(0, 0);
        let b = solver.new_variable(0, 0);

        let _ = solver
            .new_propagator(BinaryNotEqualsPropagatorArgs { a, b })
            .expect_err("Expected conflict to be detected");
    }

    #[test]
    fn propagate_when_one_is_fixed() {
        let mut solver = TestSolver::default();
        let a = solver.new_variable(0, 0);
        let b = solver.new_variable(0, 1);

        let _ = solver
            .new_propagator(BinaryNotEqualsPropagatorArgs { a, b })
            .expect("Expected no conflict to be detected");

        solver.assert_bounds(b, 1, 1);
    }

    #[test]
    fn incremental_propagation() {
        let mut solver = TestSolver::default();
        let a = solver.new_variable(0, 10);
        let b = solver.new_variable(0, 10);

        let propagator_id = solver
            .new_propagator(BinaryNotEqualsPropagatorArgs { a, b })
            .expect("Expected no conflict to be detected");
        assert!(!solver.is_passive(propagator_id));

        let _ = solver.instantiate(a, 5).expect("non-empty domain");
        solver.propagate().expect("Expected no conflict to be detected");

        assert!(!solver.contains(b, 5));
        assert!(solver.is_passive(propagator_id));
    }
}
