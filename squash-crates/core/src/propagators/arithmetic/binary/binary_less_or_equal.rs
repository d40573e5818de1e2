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

/// The [`PropagatorConstructor`] for the [`BinaryLessOrEqualPropagator`].
#[derive(Clone, Debug)]
pub(crate) struct BinaryLessOrEqualPropagatorArgs<AVar, BVar> {
    pub(crate) a: AVar,
    pub(crate) b: BVar,
}

impl<AVar, BVar> PropagatorConstructor for BinaryLessOrEqualPropagatorArgs<AVar, BVar>
where
    AVar: IntegerVariable + 'static,
    BVar: IntegerVariable + 'static,
{
    type PropagatorImpl = BinaryLessOrEqualPropagator<AVar, BVar>;

    fn create(self, mut context: PropagatorConstructorContext) -> Self::PropagatorImpl {
        let BinaryLessOrEqualPropagatorArgs { a, b } = self;

        // Only the lower bound of `a` and the upper bound of `b` can cause pruning
        context.register(a.clone(), DomainEvents::LOWER_BOUND, LocalId::from(0));
        context.register(b.clone(), DomainEvents::UPPER_BOUND, LocalId::from(1));

        BinaryLessOrEqualPropagator { a, b }
    }
}

/// Propagator for the constraint `a <= b`.
#[derive(Clone, Debug)]
pub(crate) struct BinaryLessOrEqualPropagator<AVar, BVar> {
    a: AVar,
    b: BVar,
}

impl<AVar, BVar> Propagator for BinaryLessOrEqualPropagator<AVar, BVar>
where
    AVar: IntegerVariable + 'static,
    BVar: IntegerVariable + 'static,
{
    fn name(&self) -> &str {
        "BinaryLeq"
    }

    fn priority(&self) -> Priority {
        Priority::Binary
    }

    fn initial_propagate(&mut self, mut context: PropagationContextMut) -> PropagationStatusCP {
        let _ = context.tighten_upper_bound(&self.a, context.upper_bound(&self.b))?;
        let _ = context.tighten_lower_bound(&self.b, context.lower_bound(&self.a))?;

        Ok(())
    }

    fn is_entailed(&self, context: PropagationContext) -> Entailment {
        if context.upper_bound(&self.a) <= context.lower_bound(&self.b) {
            Entailment::True
        } else if context.lower_bound(&self.a) > context.upper_bound(&self.b) {
            Entailment::False
        } else {
            Entailment::Undefined
        }
    }
}
