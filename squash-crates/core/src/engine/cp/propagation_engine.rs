use std::fmt::Debug;
use std::fmt::Formatter;

use log::trace;

use super::Assignments;
use super::DomainEvent;
use super::OpaqueDomainEvent;
use super::PropagatorQueue;
use super::WatchListCP;
use crate::basic_types::Contradiction;
use crate::basic_types::PropagationStatusCP;
use crate::containers::KeyedVec;
use crate::create_statistics_struct;
use crate::engine::variables::VariableId;
use crate::propagation::Entailment;
use crate::propagation::LocalId;
use crate::propagation::PropagationContext;
use crate::propagation::PropagationContextMut;
use crate::propagation::Propagator;
use crate::propagation::PropagatorConstructor;
use crate::propagation::PropagatorConstructorContext;
use crate::propagation::PropagatorId;
use crate::squash_assert_moderate;
use crate::statistics::Statistic;
use crate::statistics::StatisticLogger;

create_statistics_struct!(
    /// Counters kept by the [`PropagationEngine`].
    EngineStatistics {
        /// The number of times a propagator was called.
        num_propagator_calls: u64,
        /// The number of fixpoint computations which ended in a contradiction.
        num_propagation_failures: u64,
        /// The number of times a propagator was found entailed and made passive.
        num_passivations: u64,
});

/// The state of the [`PropagationEngine`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) enum EngineState {
    #[default]
    Idle,
    Propagating,
    Failed,
}

/// Schedules the propagators and drives them to a common fixpoint.
///
/// Domain events raised in the [`Assignments`] are matched against the subscriptions of the
/// propagators; every matching (propagator, local id) pair receives the event in its pending list
/// and the propagator is enqueued according to its [`Priority`](crate::propagation::Priority).
/// Propagators are then called, one pending event at a time, until the queue runs dry or one of
/// them reports a [`Contradiction`].
#[derive(Clone, Default)]
pub(crate) struct PropagationEngine {
    propagators: KeyedVec<PropagatorId, Box<dyn Propagator>>,
    watch_list: WatchListCP,
    queue: PropagatorQueue,
    pending: KeyedVec<PropagatorId, Vec<(LocalId, OpaqueDomainEvent)>>,
    event_buffer: Vec<(DomainEvent, VariableId)>,
    state: EngineState,
    statistics: EngineStatistics,
}

impl Debug for PropagationEngine {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let names = self
            .propagators
            .iter()
            .map(|propagator| propagator.name())
            .collect::<Vec<_>>();

        f.debug_struct("PropagationEngine")
            .field("propagators", &names)
            .field("queue", &self.queue)
            .field("state", &self.state)
            .finish()
    }
}

impl PropagationEngine {
    pub(crate) fn iter_propagators(&self) -> impl Iterator<Item = &dyn Propagator> + '_ {
        self.propagators.iter().map(|propagator| propagator.as_ref())
    }

    /// Get the propagator with the given id as its concrete type.
    pub(crate) fn get_propagator<P: Propagator>(&self, propagator_id: PropagatorId) -> Option<&P> {
        self.propagators
            .get(propagator_id)
            .and_then(|propagator| propagator.downcast_ref())
    }

    /// Creates the propagator, performs its initial propagation and then the fixpoint over every
    /// propagator woken by it.
    ///
    /// The propagator is registered even if the propagation fails.
    pub(crate) fn add_propagator<Constructor>(
        &mut self,
        constructor: Constructor,
        assignments: &mut Assignments,
    ) -> Result<PropagatorId, Contradiction>
    where
        Constructor: PropagatorConstructor,
        Constructor::PropagatorImpl: 'static,
    {
        let propagator_id = self.propagators.next_key();
        let constructor_context =
            PropagatorConstructorContext::new(&mut self.watch_list, assignments, propagator_id);
        let propagator = constructor.create(constructor_context);

        let _ = self.propagators.push(Box::new(propagator));
        self.pending.accomodate(propagator_id, vec![]);

        trace!(
            "posting propagator {} as {propagator_id}",
            self.propagators[propagator_id].name()
        );

        self.state = EngineState::Propagating;
        self.statistics.num_propagator_calls += 1;
        let context = PropagationContextMut::new(assignments, propagator_id);
        if let Err(contradiction) = self.propagators[propagator_id].initial_propagate(context) {
            return Err(self.fail(assignments, contradiction));
        }
        self.passivate_if_entailed(propagator_id, assignments);

        self.propagate(assignments)?;
        Ok(propagator_id)
    }

    /// Runs the propagators until no more domain events are pending.
    pub(crate) fn propagate(&mut self, assignments: &mut Assignments) -> PropagationStatusCP {
        self.state = EngineState::Propagating;
        self.dispatch_events(assignments);

        while let Some(propagator_id) = self.queue.pop() {
            let pending = std::mem::take(&mut self.pending[propagator_id]);

            if assignments.is_passive(propagator_id) {
                continue;
            }

            for (local_id, event) in pending {
                self.statistics.num_propagator_calls += 1;

                let context = PropagationContextMut::new(assignments, propagator_id);
                let result = self.propagators[propagator_id].propagate(context, local_id, event);

                if let Err(contradiction) = result {
                    return Err(self.fail(assignments, contradiction));
                }

                self.dispatch_events(assignments);
            }

            self.passivate_if_entailed(propagator_id, assignments);
        }

        squash_assert_moderate!(!assignments.has_pending_domain_events());
        self.state = EngineState::Idle;
        Ok(())
    }

    /// Resets the engine after the assignments were restored to an earlier checkpoint.
    pub(crate) fn notify_backtrack(&mut self) {
        self.clear_pending();
        self.state = EngineState::Idle;
    }

    pub(crate) fn log_statistics(&self, statistic_logger: StatisticLogger) {
        self.statistics.log(statistic_logger.clone());

        for (index, propagator) in self.propagators.iter().enumerate() {
            propagator.log_statistics(
                statistic_logger.attach_to_prefix(format!("{}_{index}", propagator.name())),
            );
        }
    }

    fn dispatch_events(&mut self, assignments: &mut Assignments) {
        self.event_buffer.extend(assignments.drain_domain_events());

        for (event, variable) in self.event_buffer.drain(..) {
            for propagator_var in self.watch_list.get_affected_propagators(event, variable) {
                let propagator_id = propagator_var.propagator;
                if assignments.is_passive(propagator_id) {
                    continue;
                }

                let entry = (propagator_var.variable, OpaqueDomainEvent::from(event));
                let pending = &mut self.pending[propagator_id];
                if !pending.contains(&entry) {
                    pending.push(entry);
                }

                self.queue
                    .enqueue_propagator(propagator_id, self.propagators[propagator_id].priority());
            }
        }
    }

    fn passivate_if_entailed(&mut self, propagator_id: PropagatorId, assignments: &mut Assignments) {
        let context = PropagationContext::new(assignments);
        if self.propagators[propagator_id].is_entailed(context) == Entailment::True {
            trace!("{propagator_id} is entailed");
            self.statistics.num_passivations += 1;
            assignments.passivate(propagator_id);
        }
    }

    fn fail(&mut self, assignments: &mut Assignments, contradiction: Contradiction) -> Contradiction {
        self.statistics.num_propagation_failures += 1;
        self.clear_pending();
        assignments.discard_domain_events();
        self.state = EngineState::Failed;

        contradiction
    }

    fn clear_pending(&mut self) {
        self.queue.clear();
        self.event_buffer.clear();
        self.pending.iter_mut().for_each(Vec::clear);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::cp::DomainEvents;
    use crate::engine::variables::DomainId;
    use crate::propagation::Priority;
    use crate::propagation::ReadDomains;

    /// Enforces `a <= b` and counts its calls.
    #[derive(Clone, Debug)]
    struct LessOrEqual {
        a: DomainId,
        b: DomainId,
        calls: usize,
    }

    impl PropagatorConstructor for LessOrEqual {
        type PropagatorImpl = Self;

        fn create(self, mut context: PropagatorConstructorContext) -> Self {
            context.register(self.a, DomainEvents::LOWER_BOUND, LocalId::from(0));
            context.register(self.b, DomainEvents::UPPER_BOUND, LocalId::from(1));
            self
        }
    }

    impl Propagator for LessOrEqual {
        fn name(&self) -> &str {
            "LessOrEqual"
        }

        fn priority(&self) -> Priority {
            Priority::Binary
        }

        fn initial_propagate(&mut self, mut context: PropagationContextMut) -> PropagationStatusCP {
            self.calls += 1;
            let _ = context.tighten_lower_bound(&self.b, context.lower_bound(&self.a))?;
            let _ = context.tighten_upper_bound(&self.a, context.upper_bound(&self.b))?;
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

    fn less_or_equal(a: DomainId, b: DomainId) -> LessOrEqual {
        LessOrEqual { a, b, calls: 0 }
    }

    #[test]
    fn posting_reaches_the_fixpoint_of_a_chain() {
        let mut assignments = Assignments::default();
        let mut engine = PropagationEngine::default();
        let x = assignments.grow_bounded(3, 10);
        let y = assignments.grow_bounded(0, 10);
        let z = assignments.grow_bounded(0, 10);

        let _ = engine
            .add_propagator(less_or_equal(y, z), &mut assignments)
            .expect("no conflict");
        let _ = engine
            .add_propagator(less_or_equal(x, y), &mut assignments)
            .expect("no conflict");

        assert_eq!(3, assignments.get_lower_bound(y));
        assert_eq!(3, assignments.get_lower_bound(z));
        assert_eq!(EngineState::Idle, engine.state);
    }

    #[test]
    fn a_contradiction_clears_the_engine() {
        let mut assignments = Assignments::default();
        let mut engine = PropagationEngine::default();
        let x = assignments.grow_bounded(0, 10);
        let y = assignments.grow_bounded(0, 10);
        let _ = engine
            .add_propagator(less_or_equal(x, y), &mut assignments)
            .expect("no conflict");
        let _ = engine
            .add_propagator(less_or_equal(y, x), &mut assignments)
            .expect("no conflict");

        let checkpoint = assignments.checkpoint();
        let _ = assignments.tighten_lower_bound(x, 5).expect("non-empty");
        let _ = assignments.tighten_upper_bound(y, 4).expect("non-empty");

        let result = engine.propagate(&mut assignments);

        assert_eq!(Err(Contradiction::EmptyDomain), result);
        assert_eq!(EngineState::Failed, engine.state);
        assert!(!assignments.has_pending_domain_events());

        assignments.undo_to(checkpoint);
        engine.notify_backtrack();
        assert_eq!(EngineState::Idle, engine.state);
        assert_eq!(Ok(()), engine.propagate(&mut assignments));
    }

    #[test]
    fn entailed_propagators_are_passive_until_backtracking() {
        let mut assignments = Assignments::default();
        let mut engine = PropagationEngine::default();
        let x = assignments.grow_bounded(0, 10);
        let y = assignments.grow_bounded(0, 10);
        let propagator = engine
            .add_propagator(less_or_equal(x, y), &mut assignments)
            .expect("no conflict");

        let checkpoint = assignments.checkpoint();
        let _ = assignments.tighten_upper_bound(x, 2).expect("non-empty");
        let _ = assignments.tighten_lower_bound(y, 2).expect("non-empty");
        engine.propagate(&mut assignments).expect("no conflict");
        // Neither event is subscribed to, so the propagator has not been called yet.
        assert!(!assignments.is_passive(propagator));

        let _ = assignments.tighten_lower_bound(x, 1).expect("non-empty");
        engine.propagate(&mut assignments).expect("no conflict");
        assert!(assignments.is_passive(propagator));
        assert_eq!(1, engine.statistics.num_passivations);

        let calls = engine
            .get_propagator::<LessOrEqual>(propagator)
            .expect("registered")
            .calls;
        let _ = assignments.tighten_lower_bound(x, 2).expect("non-empty");
        engine.propagate(&mut assignments).expect("no conflict");
        assert_eq!(
            calls,
            engine
                .get_propagator::<LessOrEqual>(propagator)
                .expect("registered")
                .calls
        );

        assignments.undo_to(checkpoint);
        engine.notify_backtrack();
        assert!(!assignments.is_passive(propagator));
    }

    #[test]
    fn a_second_fixpoint_adds_no_trail_entries() {
        let mut assignments = Assignments::default();
        let mut engine = PropagationEngine::default();
        let x = assignments.grow_bounded(4, 10);
        let y = assignments.grow_bounded(0, 6);
        let _ = engine
            .add_propagator(less_or_equal(x, y), &mut assignments)
            .expect("no conflict");

        let trail_length = assignments.num_trail_entries();
        engine.propagate(&mut assignments).expect("no conflict");

        assert_eq!(trail_length, assignments.num_trail_entries());
    }
}
