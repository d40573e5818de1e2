use crate::basic_types::PropagationStatusCP;
use crate::engine::variables::IntegerVariable;
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

/// The [`PropagatorConstructor`] for the [`MemberPropagator`].
#[derive(Clone, Debug)]
pub(crate) struct MemberPropagatorArgs<Var> {
    pub(crate) element: Var,
    pub(crate) set: SetId,
}

impl<Var> PropagatorConstructor for MemberPropagatorArgs<Var>
where
    Var: IntegerVariable + 'static,
{
    type PropagatorImpl = MemberPropagator<Var>;

    fn create(self, mut context: PropagatorConstructorContext) -> Self::PropagatorImpl {
        let MemberPropagatorArgs { element, set } = self;

        context.register(element.clone(), DomainEvents::ASSIGN, LocalId::from(0));
        context.register_set(set, DomainEvents::ENVELOPE_REMOVAL, LocalId::from(1));

        MemberPropagator { element, set }
    }
}

/// Propagator for the constraint `element ∈ set`.
///
/// Values of `element` which left the envelope of `set` are removed, and once `element` is fixed
/// its value is added to the kernel.
#[derive(Clone, Debug)]
pub(crate) struct MemberPropagator<Var> {
    element: Var,
    set: SetId,
}

impl<Var: IntegerVariable + 'static> Propagator for MemberPropagator<Var> {
    fn name(&self) -> &str {
        "Member"
    }

    fn initial_propagate(&mut self, mut context: PropagationContextMut) -> PropagationStatusCP {
        let (supported, unsupported): (Vec<i32>, Vec<i32>) = context
            .iterate_domain(&self.element)
            .partition(|&value| context.envelope_contains(self.set, value));
        let (Some(&min), Some(&max)) = (supported.first(), supported.last()) else {
            return Err(context.conflict());
        };

        // Bounded domains cannot represent holes, so the bounds are tightened first.
        let _ = context.tighten_lower_bound(&self.element, min)?;
        let _ = context.tighten_upper_bound(&self.element, max)?;
        for value in unsupported
            .into_iter()
            .filter(|&value| min < value && value < max)
        {
            let _ = context.remove_value(&self.element, value)?;
        }

        if context.is_fixed(&self.element) {
            let value = context.lower_bound(&self.element);
            let _ = context.add_to_kernel(self.set, value)?;
        }

        Ok(())
    }

    fn is_entailed(&self, context: PropagationContext) -> Entailment {
        if context.is_fixed(&self.element)
            && context.kernel_contains(self.set, context.lower_bound(&self.element))
        {
            Entailment::True
        } else if context
            .iterate_domain(&self.element)
            .all(|value| !context.envelope_contains(self.set, value))
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
    use crate::engine::variables::DomainId;

    #[test]
    fn values_outside_the_envelope_are_removed() {
        let mut solver = TestSolver::default();
        let x = solver.new_variable(0, 5);
        let set = solver.new_set(vec![1, 3, 5, 7]);

        let _ = solver
            .new_propagator(MemberPropagatorArgs { element: x, set })
            .expect("no empty domains");

        assert_eq!(vec![1, 3, 5], solver.iterate_domain(x));

        let _ = solver
            .remove_from_envelope(set, 3)
            .expect("not in the kernel");
        solver.propagate().expect("no empty domains");

        assert_eq!(vec![1, 5], solver.iterate_domain(x));
    }

    #[test]
    fn fixed_element_enters_the_kernel() {
        let mut solver = TestSolver::default();
        let x = solver.new_variable(0, 5);
        let set = solver.new_set(vec![1, 3, 5]);

        let propagator_id = solver
            .new_propagator(MemberPropagatorArgs { element: x, set })
            .expect("no empty domains");

        let _ = solver.instantiate(x, 3).expect("in the domain");
        solver.propagate().expect("no empty domains");

        assert_eq!(vec![3], solver.kernel(set));
        assert!(solver.is_passive(propagator_id));
    }

    #[test]
    fn bounded_element_is_restricted_to_the_envelope_hull() {
        let mut solver = TestSolver::default();
        let x = solver.new_bounded_variable(0, 5);
        let set = solver.new_set(vec![2, 3]);

        let propagator_id = solver
            .new_propagator(MemberPropagatorArgs { element: x, set })
            .expect("no empty domains");

        solver.assert_bounds(x, 2, 3);

        let num_entries = solver.num_trail_entries();
        let mut propagator = solver
            .engine
            .get_propagator::<MemberPropagator<DomainId>>(propagator_id)
            .expect("the propagator has this type")
            .clone();
        propagator
            .initial_propagate(PropagationContextMut::new(
                &mut solver.assignments,
                propagator_id,
            ))
            .expect("no empty domains");

        assert_eq!(num_entries, solver.num_trail_entries());
    }

    #[test]
    fn bounded_element_keeps_interior_unsupported_values() {
        let mut solver = TestSolver::default();
        let x = solver.new_bounded_variable(0, 9);
        let set = solver.new_set(vec![2, 5, 7]);

        let _ = solver
            .new_propagator(MemberPropagatorArgs { element: x, set })
            .expect("no empty domains");

        solver.assert_bounds(x, 2, 7);
    }

    #[test]
    fn no_common_value_is_a_contradiction() {
        let mut solver = TestSolver::default();
        let x = solver.new_variable(0, 2);
        let set = solver.new_set(vec![4, 5]);

        let _ = solver
            .new_propagator(MemberPropagatorArgs { element: x, set })
            .expect_err("x cannot take a value of the set");
    }
}
