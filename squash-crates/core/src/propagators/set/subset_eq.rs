use crate::basic_types::PropagationStatusCP;
use crate::engine::variables::SetId;
use crate::propagation::DomainEvents;
use crate::propagation::Entailment;
use crate::propagation::LocalId;
use crate::propagation::PropagationContext;
use crate::propagation::PropagationContextMut;
use crate::propagation::Propagator;
use crate::propagation::PropagatorConstructor;
use crate::propagation::PropagatorConstructorContext;
use crate::propagation::ReadDomains;

/// The [`PropagatorConstructor`] for the [`SubsetEqPropagator`].
#[derive(Clone, Copy, Debug)]
pub(crate) struct SubsetEqPropagatorArgs {
    pub(crate) subset: SetId,
    pub(crate) superset: SetId,
}

impl PropagatorConstructor for SubsetEqPropagatorArgs {
    type PropagatorImpl = SubsetEqPropagator;

    fn create(self, mut context: PropagatorConstructorContext) -> Self::PropagatorImpl {
        let SubsetEqPropagatorArgs { subset, superset } = self;

        context.register_set(subset, DomainEvents::KERNEL_ADDITION, LocalId::from(0));
        context.register_set(superset, DomainEvents::ENVELOPE_REMOVAL, LocalId::from(1));

        SubsetEqPropagator { subset, superset }
    }
}

/// Propagator for the constraint `subset ⊆ superset`: the kernel of `subset` is added to the
/// kernel of `superset`, and elements outside the envelope of `superset` are removed from the
/// envelope of `subset`.
#[derive(Clone, Copy, Debug)]
pub(crate) struct SubsetEqPropagator {
    subset: SetId,
    superset: SetId,
}

impl Propagator for SubsetEqPropagator {
    fn name(&self) -> &str {
        "SubsetEq"
    }

    fn initial_propagate(&mut self, mut context: PropagationContextMut) -> PropagationStatusCP {
        let required = context.iterate_kernel(self.subset).collect::<Vec<_>>();
        for element in required {
            let _ = context.add_to_kernel(self.superset, element)?;
        }

        let excluded = context
            .iterate_envelope(self.subset)
            .filter(|&element| !context.envelope_contains(self.superset, element))
            .collect::<Vec<_>>();
        for element in excluded {
            let _ = context.remove_from_envelope(self.subset, element)?;
        }

        Ok(())
    }

    fn is_entailed(&self, context: PropagationContext) -> Entailment {
        if context
            .iterate_envelope(self.subset)
            .all(|element| context.kernel_contains(self.superset, element))
        {
            Entailment::True
        } else if context
            .iterate_kernel(self.subset)
            .any(|element| !context.envelope_contains(self.superset, element))
        {
            Entailment::False
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
    fn kernel_and_envelope_are_filtered() {
        let mut solver = TestSolver::default();
        let subset = solver.new_set(vec![1, 2, 3, 4]);
        let superset = solver.new_set(vec![2, 3, 4, 5]);
        let _ = solver.add_to_kernel(subset, 3).expect("in the envelope");

        let _ = solver
            .new_propagator(SubsetEqPropagatorArgs { subset, superset })
            .expect("no empty domains");

        assert_eq!(vec![2, 3, 4], solver.envelope(subset));
        assert_eq!(vec![3], solver.kernel(superset));
    }

    #[test]
    fn removal_from_the_superset_is_propagated() {
        let mut solver = TestSolver::default();
        let subset = solver.new_set(vec![1, 2, 3]);
        let superset = solver.new_set(vec![1, 2, 3]);

        let _ = solver
            .new_propagator(SubsetEqPropagatorArgs { subset, superset })
            .expect("no empty domains");

        let _ = solver
            .remove_from_envelope(superset, 2)
            .expect("not in the kernel");
        solver.propagate().expect("no empty domains");

        assert_eq!(vec![1, 3], solver.envelope(subset));
    }

    #[test]
    fn required_element_missing_from_the_superset_is_a_contradiction() {
        let mut solver = TestSolver::default();
        let subset = solver.new_set(vec![1, 2]);
        let superset = solver.new_set(vec![2, 3]);
        let _ = solver.add_to_kernel(subset, 1).expect("in the envelope");

        let _ = solver
            .new_propagator(SubsetEqPropagatorArgs { subset, superset })
            .expect_err("1 cannot be in the superset");
    }
}
