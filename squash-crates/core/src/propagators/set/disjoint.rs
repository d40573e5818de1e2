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

/// The [`PropagatorConstructor`] for the [`DisjointPropagator`].
#[derive(Clone, Copy, Debug)]
pub(crate) struct DisjointPropagatorArgs {
    pub(crate) a: SetId,
    pub(crate) b: SetId,
}

impl PropagatorConstructor for DisjointPropagatorArgs {
    type PropagatorImpl = DisjointPropagator;

    fn create(self, mut context: PropagatorConstructorContext) -> Self::PropagatorImpl {
        let DisjointPropagatorArgs { a, b } = self;

        context.register_set(a, DomainEvents::KERNEL_ADDITION, LocalId::from(0));
        context.register_set(b, DomainEvents::KERNEL_ADDITION, LocalId::from(1));

        DisjointPropagator { a, b }
    }
}

/// Propagator for the constraint `a ∩ b = ∅`.
#[derive(Clone, Copy, Debug)]
pub(crate) struct DisjointPropagator {
    a: SetId,
    b: SetId,
}

impl DisjointPropagator {
    fn exclude_kernel(
        context: &mut PropagationContextMut,
        from: SetId,
        other: SetId,
    ) -> PropagationStatusCP {
        let kernel = context.iterate_kernel(from).collect::<Vec<_>>();
        for element in kernel {
            let _ = context.remove_from_envelope(other, element)?;
        }

        Ok(())
    }
}

impl Propagator for DisjointPropagator {
    fn name(&self) -> &str {
        "Disjoint"
    }

    fn initial_propagate(&mut self, mut context: PropagationContextMut) -> PropagationStatusCP {
        Self::exclude_kernel(&mut context, self.a, self.b)?;
        Self::exclude_kernel(&mut context, self.b, self.a)
    }

    fn is_entailed(&self, context: PropagationContext) -> Entailment {
        if context
            .iterate_envelope(self.a)
            .all(|element| !context.envelope_contains(self.b, element))
        {
            Entailment::True
        } else if context
            .iterate_kernel(self.a)
            .any(|element| context.kernel_contains(self.b, element))
        {
            Entailment::False
        } else {
            Entailment::Undefined
        }
    }
}
