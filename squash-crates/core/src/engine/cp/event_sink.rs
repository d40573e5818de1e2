use enumset::EnumSet;

use super::DomainEvent;
use crate::containers::HashMap;
use crate::engine::variables::VariableId;

/// While the domains are narrowed, the changes are captured as events in the event sink. Between
/// propagator calls, the sink is drained to notify the propagators that subscribe to those events.
///
/// Events are given in the order in which they first occurred; the same event on the same variable
/// is only recorded once until the sink is drained.
#[derive(Default, Clone, Debug)]
pub(crate) struct EventSink {
    present: HashMap<VariableId, EnumSet<DomainEvent>>,
    events: Vec<(DomainEvent, VariableId)>,
}

impl EventSink {
    pub(crate) fn event_occurred(&mut self, event: DomainEvent, variable: VariableId) {
        let elem = self.present.entry(variable).or_default();

        if elem.contains(event) {
            // The event was already triggered.
            return;
        }

        elem.insert(event);
        self.events.push((event, variable));
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub(crate) fn drain(&mut self) -> impl Iterator<Item = (DomainEvent, VariableId)> + '_ {
        self.present.clear();
        self.events.drain(..)
    }

    pub(crate) fn clear(&mut self) {
        self.present.clear();
        self.events.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::variables::DomainId;
    use crate::engine::variables::SetId;

    #[test]
    fn the_default_sink_is_empty() {
        let mut sink = EventSink::default();

        let events = sink.drain().collect::<Vec<_>>();
        assert!(events.is_empty());
    }

    #[test]
    fn a_captured_event_is_observed_in_the_drain() {
        let mut sink = EventSink::default();
        let x = VariableId::Integer(DomainId::new(0));
        let s = VariableId::Set(SetId::new(0));

        sink.event_occurred(DomainEvent::LowerBound, x);
        sink.event_occurred(DomainEvent::KernelAddition, s);
        sink.event_occurred(DomainEvent::UpperBound, x);

        let events = sink.drain().collect::<Vec<_>>();

        assert_eq!(
            vec![
                (DomainEvent::LowerBound, x),
                (DomainEvent::KernelAddition, s),
                (DomainEvent::UpperBound, x)
            ],
            events
        );
    }

    #[test]
    fn after_draining_the_event_sink_is_empty() {
        let mut sink = EventSink::default();
        let x = VariableId::Integer(DomainId::new(0));

        sink.event_occurred(DomainEvent::LowerBound, x);
        let _ = sink.drain().collect::<Vec<_>>();

        assert!(sink.is_empty());
        sink.event_occurred(DomainEvent::LowerBound, x);
        assert_eq!(1, sink.drain().count());
    }

    #[test]
    fn duplicate_events_are_ignored() {
        let mut sink = EventSink::default();
        let x = VariableId::Integer(DomainId::new(0));

        sink.event_occurred(DomainEvent::Removal, x);
        sink.event_occurred(DomainEvent::Removal, x);

        let events = sink.drain().collect::<Vec<_>>();

        assert_eq!(events.len(), 1);
    }
}
