use crate::basic_types::PropagationStatusCP;
use crate::engine::cp::OpaqueDomainEvent;
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

/// The [`PropagatorConstructor`] for the [`AllDifferentInstantiationPropagator`].
#[derive(Clone, Debug)]
pub(crate) struct AllDifferentInstantiationArgs<Var> {
    pub(crate) vars: Box<[Var]>,
}

impl<Var> PropagatorConstructor for AllDifferentInstantiationArgs<Var>
where
    Var: IntegerVariable + 'static,
{
    type PropagatorImpl = AllDifferentInstantiationPropagator<Var>;

    fn create(self, mut context: PropagatorConstructorContext) -> Self::PropagatorImpl {
        let AllDifferentInstantiationArgs { vars } = self;

        for (i, x_i) in vars.iter().enumerate() {
            context.register(x_i.clone(), DomainEvents::ASSIGN, LocalId::from(i as u32));
        }

        AllDifferentInstantiationPropagator {
            vars,
            to_process: vec![],
        }
    }
}

/// Propagator for the constraint `x_i != x_j` for all `i != j`, which only reacts to variables
/// becoming fixed: the value of a fixed variable is removed from every other variable.
///
/// Bound changes are ignored, so this propagator does not detect e.g. three variables sharing two
/// values until two of them are fixed.
#[derive(Clone, Debug)]
pub(crate) struct AllDifferentInstantiationPropagator<Var> {
    vars: Box<[Var]>,
    /// The positions of fixed variables whose value still has to be removed from the others.
    /// Empty between calls.
    to_process: Vec<usize>,
}

impl<Var: IntegerVariable> AllDifferentInstantiationPropagator<Var> {
    fn process_work_list(&mut self, mut context: PropagationContextMut) -> PropagationStatusCP {
        while let Some(index) = self.to_process.pop() {
            let value = context.lower_bound(&self.vars[index]);

            for (other, x_j) in self.vars.iter().enumerate() {
                if other == index {
                    continue;
                }

                let is_fixed_before = context.is_fixed(x_j);
                let result = context.remove_value(x_j, value);
                if let Err(empty_domain) = result {
                    self.to_process.clear();
                    return Err(empty_domain.into());
                }

                if !is_fixed_before && context.is_fixed(x_j) {
                    self.to_process.push(other);
                }
            }
        }

        Ok(())
    }
}

impl<Var: IntegerVariable + 'static> Propagator for AllDifferentInstantiationPropagator<Var> {
    fn name(&self) -> &str {
        "AllDiffInst"
    }

    fn priority(&self) -> Priority {
        Priority::Binary
    }

    fn initial_propagate(&mut self, context: PropagationContextMut) -> PropagationStatusCP {
        self.to_process.clear();
        self.to_process.extend(
            self.vars
                .iter()
                .enumerate()
                .filter(|(_, x_i)| context.is_fixed(*x_i))
                .map(|(i, _)| i),
        );

        self.process_work_list(context)
    }

    fn propagate(
        &mut self,
        context: PropagationContextMut,
        local_id: LocalId,
        _event: OpaqueDomainEvent,
    ) -> PropagationStatusCP {
        self.to_process.push(local_id.unpack() as usize);
        self.process_work_list(context)
    }

    fn is_entailed(&self, context: PropagationContext) -> Entailment {
        is_entailed_by_fixed_values(&self.vars, context)
    }
}

/// The entailment check shared by the all-different propagators: entailed once all variables are
/// fixed to distinct values, violated as soon as two fixed variables share a value.
pub(super) fn is_entailed_by_fixed_values<Var: IntegerVariable>(
    vars: &[Var],
    context: PropagationContext,
) -> Entailment {
    let mut fixed_values = vars
        .iter()
        .filter(|x_i| context.is_fixed(*x_i))
        .map(|x_i| context.lower_bound(x_i))
        .collect::<Vec<_>>();
    let num_fixed = fixed_values.len();

    fixed_values.sort_unstable();
    fixed_values.dedup();

    if fixed_values.len() < num_fixed {
        Entailment::False
    } else if num_fixed == vars.len() {
        Entailment::True
    } else {
        Entailment::Undefined
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::test_solver::TestSolver;
    use crate::engine::variables::DomainId;

    #[test]
    fn fixed_values_are_removed_from_the_other_variables() {
        let mut solver = TestSolver::default();
        let a = solver.new_variable(1, 1);
        let b = solver.new_variable(1, 3);
        let c = solver.new_variable(1, 3);

        let _ = solver
            .new_propagator(AllDifferentInstantiationArgs {
                vars: [a, b, c].into(),
            })
            .expect("no empty domains");

        assert_eq!(vec![2, 3], solver.iterate_domain(b));
        assert_eq!(vec![2, 3], solver.iterate_domain(c));
    }

    #[test]
    fn removals_cascade_through_instantiations() {
        let mut solver = TestSolver::default();
        let a = solver.new_variable(1, 3);
        let b = solver.new_variable(1, 2);
        let c = solver.new_variable(1, 3);

        let _ = solver
            .new_propagator(AllDifferentInstantiationArgs {
                vars: [a, b, c].into(),
            })
            .expect("no empty domains");

        let _ = solver.instantiate(a, 1).expect("non-empty domain");
        solver.propagate().expect("no empty domains");

        assert_eq!(2, solver.lower_bound(b));
        assert_eq!(vec![3], solver.iterate_domain(c));
    }

    #[test]
    fn bound_changes_are_ignored() {
        let mut solver = TestSolver::default();
        let a = solver.new_variable(1, 2);
        let b = solver.new_variable(1, 2);
        let c = solver.new_variable(1, 2);

        let _ = solver
            .new_propagator(AllDifferentInstantiationArgs {
                vars: [a, b, c].into(),
            })
            .expect("three variables over two values are not detected without instantiations");

        let _ = solver.instantiate(a, 1).expect("non-empty domain");
        let _ = solver.propagate().expect_err("b and c both become 2");
    }

    #[test]
    fn conflicting_fixed_values_are_detected_on_posting() {
        let mut solver = TestSolver::default();
        let a = solver.new_variable(1, 1);
        let b = solver.new_variable(1, 1);

        let _ = solver
            .new_propagator(AllDifferentInstantiationArgs {
                vars: [a, b].into(),
            })
            .expect_err("both variables are fixed to 1");
    }

    #[test]
    fn a_second_call_at_the_fixpoint_adds_no_trail_entries() {
        let mut solver = TestSolver::default();
        let a = solver.new_variable(1, 1);
        let b = solver.new_variable(1, 3);
        let c = solver.new_variable(2, 4);

        let propagator_id = solver
            .new_propagator(AllDifferentInstantiationArgs {
                vars: [a, b, c].into(),
            })
            .expect("no empty domains");
        let num_entries = solver.num_trail_entries();

        let mut propagator = solver
            .engine
            .get_propagator::<AllDifferentInstantiationPropagator<DomainId>>(propagator_id)
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
    fn entailment_follows_the_fixed_values() {
        let mut solver = TestSolver::default();
        let a = solver.new_variable(1, 1);
        let b = solver.new_variable(2, 2);
        let c = solver.new_variable(2, 3);

        let vars = [a, b, c];
        assert_eq!(
            Entailment::Undefined,
            is_entailed_by_fixed_values(&vars, PropagationContext::new(&solver.assignments))
        );

        let _ = solver.instantiate(c, 3).expect("non-empty domain");
        assert_eq!(
            Entailment::True,
            is_entailed_by_fixed_values(&vars, PropagationContext::new(&solver.assignments))
        );

        let d = solver.new_variable(1, 1);
        assert_eq!(
            Entailment::False,
            is_entailed_by_fixed_values(&[a, d], PropagationContext::new(&solver.assignments))
        );
    }
}
