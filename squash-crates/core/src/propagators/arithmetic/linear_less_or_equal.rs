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

/// The [`PropagatorConstructor`] for the [`LinearLessOrEqualPropagator`].
#[derive(Clone, Debug)]
pub(crate) struct LinearLessOrEqualPropagatorArgs<Var> {
    pub(crate) x: Box<[Var]>,
    pub(crate) c: i64,
}

impl<Var> PropagatorConstructor for LinearLessOrEqualPropagatorArgs<Var>
where
    Var: IntegerVariable + 'static,
{
    type PropagatorImpl = LinearLessOrEqualPropagator<Var>;

    fn create(self, mut context: PropagatorConstructorContext) -> Self::PropagatorImpl {
        let LinearLessOrEqualPropagatorArgs { x, c } = self;

        for (i, x_i) in x.iter().enumerate() {
            context.register(
                x_i.clone(),
                DomainEvents::LOWER_BOUND,
                LocalId::from(i as u32),
            );
        }

        LinearLessOrEqualPropagator { x, c }
    }
}

/// Propagator for the constraint `\sum x_i <= c`.
///
/// The sums and the right-hand side are `i64`, so the propagator cannot overflow for any number of
/// `i32` terms that fits in memory.
#[derive(Clone, Debug)]
pub(crate) struct LinearLessOrEqualPropagator<Var> {
    x: Box<[Var]>,
    c: i64,
}

impl<Var: IntegerVariable> LinearLessOrEqualPropagator<Var> {
    fn lower_bound_left_hand_side(&self, context: &impl ReadDomains) -> i64 {
        self.x
            .iter()
            .map(|x_i| context.lower_bound(x_i) as i64)
            .sum()
    }
}

impl<Var: IntegerVariable + 'static> Propagator for LinearLessOrEqualPropagator<Var> {
    fn name(&self) -> &str {
        "LinearLeq"
    }

    fn priority(&self) -> Priority {
        Priority::Linear
    }

    fn initial_propagate(&mut self, mut context: PropagationContextMut) -> PropagationStatusCP {
        let lower_bound_left_hand_side = self.lower_bound_left_hand_side(&context);
        let slack = self.c - lower_bound_left_hand_side;

        if slack < 0 {
            return Err(context.conflict());
        }

        for x_i in self.x.iter() {
            let bound = context.lower_bound(x_i) as i64 + slack;

            if bound < context.upper_bound(x_i) as i64 {
                // `bound` lies between the bounds of `x_i`, so it fits in an `i32`
                let _ = context.tighten_upper_bound(x_i, bound as i32)?;
            }
        }

        Ok(())
    }

    fn is_entailed(&self, context: PropagationContext) -> Entailment {
        let upper_bound_left_hand_side = self
            .x
            .iter()
            .map(|x_i| context.upper_bound(x_i) as i64)
            .sum::<i64>();

        if upper_bound_left_hand_side <= self.c {
            Entailment::True
        } else if self.lower_bound_left_hand_side(&context) > self.c {
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
    use crate::engine::variables::TransformableVariable;

    #[test]
    fn upper_bounds_are_propagated() {
        let mut solver = TestSolver::default();
        let x = solver.new_variable(1, 5);
        let y = solver.new_variable(0, 10);

        let _ = solver
            .new_propagator(LinearLessOrEqualPropagatorArgs {
                x: [x, y].into(),
                c: 7,
            })
            .expect("no empty domains");

        solver.assert_bounds(x, 1, 5);
        solver.assert_bounds(y, 0, 6);
    }

    #[test]
    fn lower_bounds_exceeding_the_right_hand_side_is_a_contradiction() {
        let mut solver = TestSolver::default();
        let x = solver.new_variable(4, 5);
        let y = solver.new_variable(4, 10);

        let _ = solver
            .new_propagator(LinearLessOrEqualPropagatorArgs {
                x: [x, y].into(),
                c: 7,
            })
            .expect_err("the lower bounds already exceed the right-hand side");
    }

    #[test]
    fn overflow_does_not_wrap() {
        let mut solver = TestSolver::default();
        let x = solver.new_bounded_variable(i32::MAX - 10, i32::MAX);
        let y = solver.new_bounded_variable(i32::MAX - 10, i32::MAX);

        let _ = solver
            .new_propagator(LinearLessOrEqualPropagatorArgs {
                x: [x, y].into(),
                c: i32::MAX as i64,
            })
            .expect_err("the sum of the lower bounds exceeds i32::MAX");
    }

    #[test]
    fn negated_terms_bound_the_other_side() {
        let mut solver = TestSolver::default();
        let x = solver.new_variable(0, 10);
        let y = solver.new_variable(0, 10);

        // x - y <= -3
        let _ = solver
            .new_propagator(LinearLessOrEqualPropagatorArgs {
                x: [x.scaled(1), y.scaled(-1)].into(),
                c: -3,
            })
            .expect("no empty domains");

        solver.assert_bounds(x, 0, 7);
        solver.assert_bounds(y, 3, 10);

        let _ = solver.tighten_lower_bound(x, 5).expect("non-empty domain");
        solver.propagate().expect("no empty domains");

        solver.assert_bounds(y, 8, 10);
    }
}
