use downcast_rs::impl_downcast;
use downcast_rs::Downcast;
use dyn_clone::clone_trait_object;
use dyn_clone::DynClone;

use super::LocalId;
use super::PropagationContext;
use super::PropagationContextMut;
use crate::basic_types::PropagationStatusCP;
#[cfg(doc)]
use crate::create_statistics_struct;
use crate::engine::cp::OpaqueDomainEvent;
#[cfg(doc)]
use crate::propagation::PropagatorConstructor;
use crate::statistics::StatisticLogger;

// Allows casting from `Box<dyn Propagator>` to a concrete propagator in tests.
impl_downcast!(Propagator);

// The solver state is cloned for portfolio search, which requires cloning the propagators.
clone_trait_object!(Propagator);

/// A propagator removes values from domains which will never be in any solution, or raises
/// explicit conflicts.
///
/// The required functions are [`Propagator::name`], [`Propagator::initial_propagate`] and
/// [`Propagator::is_entailed`]; the others have default implementations.
///
/// See the [`crate::propagation`] documentation for more details.
pub trait Propagator: Downcast + DynClone {
    /// Return the name of the propagator.
    ///
    /// This is a convenience method that is used for printing.
    fn name(&self) -> &str;

    /// Called once, when the propagator is posted. Filters the domains of the whole scope.
    ///
    /// In case no conflict has been detected this function should return [`Result::Ok`],
    /// otherwise it should return a [`Result::Err`] with the
    /// [`Contradiction`](crate::basic_types::Contradiction); either because a narrowing emptied a
    /// domain or because the propagator found the current domains to be inconsistent.
    fn initial_propagate(&mut self, context: PropagationContextMut) -> PropagationStatusCP;

    /// Reacts to `event` on the variable registered as `local_id`.
    ///
    /// The event has to be decoded through the variable registered under `local_id`, see
    /// [`IntegerVariable::unpack_event`](crate::variables::IntegerVariable::unpack_event).
    ///
    /// By default, this function calls [`Propagator::initial_propagate`].
    fn propagate(
        &mut self,
        context: PropagationContextMut,
        _local_id: LocalId,
        _event: OpaqueDomainEvent,
    ) -> PropagationStatusCP {
        self.initial_propagate(context)
    }

    /// Whether the constraint holds for every assignment of the current domains
    /// ([`Entailment::True`]), for none of them ([`Entailment::False`]), or neither.
    fn is_entailed(&self, context: PropagationContext) -> Entailment;

    /// Returns the [`Priority`] of the propagator, used for determining the order in which
    /// propagators are called.
    ///
    /// By default the priority is set to [`Priority::General`].
    fn priority(&self) -> Priority {
        Priority::General
    }

    /// Logs statistics of the propagator using the provided [`StatisticLogger`].
    ///
    /// It is recommended to create a struct through the [`create_statistics_struct!`] macro!
    fn log_statistics(&self, _statistic_logger: StatisticLogger) {}
}

/// The outcome of [`Propagator::is_entailed`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Entailment {
    True,
    False,
    Undefined,
}

/// The priority class of a propagator, used for determining the order in which propagators will be
/// called.
///
/// Classes are named after the cost of the filtering algorithm; cheaper classes are called first,
/// and propagators in the same class are called in the order in which they were enqueued.
#[derive(Default, Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[repr(u8)]
pub enum Priority {
    Unary = 0,
    Binary = 1,
    Linear = 2,
    #[default]
    General = 3,
}

impl Priority {
    pub(crate) const NUM_PRIORITIES: u32 = 4;
}
