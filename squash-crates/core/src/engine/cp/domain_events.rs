use std::fmt::Display;

use enumset::enum_set;
use enumset::EnumSet;
use enumset::EnumSetType;

/// The kinds of changes a narrowing operation can make to a domain.
///
/// Integer domains raise the first four kinds; set and graph domains raise
/// [`DomainEvent::EnvelopeRemoval`] and [`DomainEvent::KernelAddition`].
#[derive(Debug, EnumSetType, Hash)]
pub enum DomainEvent {
    /// The variable became fixed to a single value.
    Assign,
    /// The lower bound increased.
    LowerBound,
    /// The upper bound decreased.
    UpperBound,
    /// A value was removed from the domain.
    Removal,
    /// An element, node or arc was removed from the envelope.
    EnvelopeRemoval,
    /// An element, node or arc was added to the kernel.
    KernelAddition,
}

impl DomainEvent {
    /// The event kinds whose subscribers are woken up by this event.
    ///
    /// An assignment implies that the bounds moved and values were removed, and a bound change
    /// implies that values were removed.
    pub(crate) fn woken_subscriptions(self) -> EnumSet<DomainEvent> {
        match self {
            DomainEvent::Assign => {
                DomainEvent::Assign
                    | DomainEvent::LowerBound
                    | DomainEvent::UpperBound
                    | DomainEvent::Removal
            }
            DomainEvent::LowerBound => DomainEvent::LowerBound | DomainEvent::Removal,
            DomainEvent::UpperBound => DomainEvent::UpperBound | DomainEvent::Removal,
            DomainEvent::Removal => enum_set!(DomainEvent::Removal),
            DomainEvent::EnvelopeRemoval => enum_set!(DomainEvent::EnvelopeRemoval),
            DomainEvent::KernelAddition => enum_set!(DomainEvent::KernelAddition),
        }
    }
}

impl Display for DomainEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DomainEvent::Assign => write!(f, "[Event:Assign]"),
            DomainEvent::LowerBound => write!(f, "[Event:LowerBound]"),
            DomainEvent::UpperBound => write!(f, "[Event:UpperBound]"),
            DomainEvent::Removal => write!(f, "[Event:Removal]"),
            DomainEvent::EnvelopeRemoval => write!(f, "[Event:EnvelopeRemoval]"),
            DomainEvent::KernelAddition => write!(f, "[Event:KernelAddition]"),
        }
    }
}

/// A set of [`DomainEvent`]s a propagator can subscribe to.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct DomainEvents {
    events: EnumSet<DomainEvent>,
}

impl DomainEvents {
    /// Lower and upper bound tightening (and therefore also assignment).
    pub const BOUNDS: DomainEvents =
        DomainEvents::create(enum_set!(DomainEvent::LowerBound | DomainEvent::UpperBound));
    /// Every change of an integer domain.
    pub const ANY_INT: DomainEvents = DomainEvents::create(enum_set!(
        DomainEvent::Assign | DomainEvent::LowerBound | DomainEvent::UpperBound | DomainEvent::Removal
    ));
    pub const LOWER_BOUND: DomainEvents = DomainEvents::create(enum_set!(DomainEvent::LowerBound));
    pub const UPPER_BOUND: DomainEvents = DomainEvents::create(enum_set!(DomainEvent::UpperBound));
    /// Only the variable becoming fixed.
    pub const ASSIGN: DomainEvents = DomainEvents::create(enum_set!(DomainEvent::Assign));
    pub const REMOVAL: DomainEvents = DomainEvents::create(enum_set!(DomainEvent::Removal));
    pub const ENVELOPE_REMOVAL: DomainEvents =
        DomainEvents::create(enum_set!(DomainEvent::EnvelopeRemoval));
    pub const KERNEL_ADDITION: DomainEvents =
        DomainEvents::create(enum_set!(DomainEvent::KernelAddition));
    /// Every change of a set or graph domain.
    pub const ANY_STRUCTURE: DomainEvents = DomainEvents::create(enum_set!(
        DomainEvent::EnvelopeRemoval | DomainEvent::KernelAddition
    ));

    pub(crate) const fn create(events: EnumSet<DomainEvent>) -> DomainEvents {
        DomainEvents { events }
    }

    pub(crate) fn events(&self) -> EnumSet<DomainEvent> {
        self.events
    }
}

/// A domain event as raised on the base variable.
///
/// Propagators have to decode it through the variable they registered with (see
/// [`IntegerVariable::unpack_event`](crate::variables::IntegerVariable::unpack_event)), since a
/// view may have to translate it; e.g. a lower-bound event on `x` is an upper-bound event on `-x`.
#[derive(Clone, Debug, Copy, PartialEq, Eq)]
pub struct OpaqueDomainEvent(DomainEvent);

impl From<DomainEvent> for OpaqueDomainEvent {
    fn from(event: DomainEvent) -> Self {
        OpaqueDomainEvent(event)
    }
}

impl OpaqueDomainEvent {
    pub(crate) fn unwrap(self) -> DomainEvent {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn an_assignment_wakes_every_integer_subscription() {
        assert_eq!(
            DomainEvents::ANY_INT.events(),
            DomainEvent::Assign.woken_subscriptions()
        );
    }

    #[test]
    fn a_bound_change_does_not_wake_assignment_subscriptions() {
        assert!(!DomainEvent::LowerBound
            .woken_subscriptions()
            .contains(DomainEvent::Assign));
        assert!(DomainEvent::UpperBound
            .woken_subscriptions()
            .contains(DomainEvent::Removal));
    }
}
