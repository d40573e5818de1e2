use enumset::EnumSet;

use super::DomainEvent;
use crate::containers::KeyedVec;
use crate::engine::variables::DomainId;
use crate::engine::variables::GraphId;
use crate::engine::variables::SetId;
use crate::engine::variables::VariableId;
use crate::propagation::PropagatorVarId;

/// For every variable, the propagator variables which subscribed to its events.
#[derive(Default, Debug, Clone)]
pub(crate) struct WatchListCP {
    integer_watchers: KeyedVec<DomainId, Watcher>,
    set_watchers: KeyedVec<SetId, Watcher>,
    graph_watchers: KeyedVec<GraphId, Watcher>,
}

/// Used to register a single propagator variable to domain events.
#[derive(Debug)]
pub struct Watchers<'a> {
    propagator_var: PropagatorVarId,
    watch_list: &'a mut WatchListCP,
}

impl<'a> Watchers<'a> {
    pub(crate) fn new(propagator_var: PropagatorVarId, watch_list: &'a mut WatchListCP) -> Self {
        Watchers {
            propagator_var,
            watch_list,
        }
    }

    pub(crate) fn watch_all(&mut self, variable: VariableId, events: EnumSet<DomainEvent>) {
        let watcher = self.watch_list.watcher_mut(variable);

        // A propagator variable which registers twice is notified once, for the union.
        if let Some((_, subscribed)) = watcher
            .subscriptions
            .iter_mut()
            .find(|(propagator_var, _)| *propagator_var == self.propagator_var)
        {
            *subscribed |= events;
        } else {
            watcher.subscriptions.push((self.propagator_var, events));
        }
    }
}

impl WatchListCP {
    /// Get the propagator variables which should be notified of `event` on `variable`.
    ///
    /// An assignment also notifies the bound and removal subscribers, a bound change also notifies
    /// the removal subscribers.
    pub(crate) fn get_affected_propagators(
        &self,
        event: DomainEvent,
        variable: VariableId,
    ) -> impl Iterator<Item = PropagatorVarId> + '_ {
        let woken = event.woken_subscriptions();

        self.watcher(variable)
            .into_iter()
            .flat_map(|watcher| watcher.subscriptions.iter())
            .filter(move |(_, subscribed)| !subscribed.is_disjoint(woken))
            .map(|&(propagator_var, _)| propagator_var)
    }

    fn watcher(&self, variable: VariableId) -> Option<&Watcher> {
        match variable {
            VariableId::Integer(domain_id) => self.integer_watchers.get(domain_id),
            VariableId::Set(set_id) => self.set_watchers.get(set_id),
            VariableId::Graph(graph_id) => self.graph_watchers.get(graph_id),
        }
    }

    fn watcher_mut(&mut self, variable: VariableId) -> &mut Watcher {
        match variable {
            VariableId::Integer(domain_id) => {
                self.integer_watchers
                    .accomodate(domain_id, Watcher::default());
                &mut self.integer_watchers[domain_id]
            }
            VariableId::Set(set_id) => {
                self.set_watchers.accomodate(set_id, Watcher::default());
                &mut self.set_watchers[set_id]
            }
            VariableId::Graph(graph_id) => {
                self.graph_watchers.accomodate(graph_id, Watcher::default());
                &mut self.graph_watchers[graph_id]
            }
        }
    }
}

#[derive(Default, Debug, Clone)]
struct Watcher {
    subscriptions: Vec<(PropagatorVarId, EnumSet<DomainEvent>)>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::cp::DomainEvents;
    use crate::propagation::LocalId;
    use crate::propagation::PropagatorId;

    fn propagator_var(propagator: u32, variable: u32) -> PropagatorVarId {
        PropagatorVarId {
            propagator: PropagatorId(propagator),
            variable: LocalId::from(variable),
        }
    }

    #[test]
    fn assignments_wake_bound_subscribers_but_not_vice_versa() {
        let mut watch_list = WatchListCP::default();
        let x = VariableId::Integer(DomainId::new(0));

        Watchers::new(propagator_var(0, 0), &mut watch_list)
            .watch_all(x, DomainEvents::LOWER_BOUND.events());
        Watchers::new(propagator_var(1, 0), &mut watch_list)
            .watch_all(x, DomainEvents::ASSIGN.events());

        let on_assign = watch_list
            .get_affected_propagators(DomainEvent::Assign, x)
            .collect::<Vec<_>>();
        let on_lower_bound = watch_list
            .get_affected_propagators(DomainEvent::LowerBound, x)
            .collect::<Vec<_>>();

        assert_eq!(vec![propagator_var(0, 0), propagator_var(1, 0)], on_assign);
        assert_eq!(vec![propagator_var(0, 0)], on_lower_bound);
    }

    #[test]
    fn repeated_registrations_are_merged() {
        let mut watch_list = WatchListCP::default();
        let x = VariableId::Integer(DomainId::new(2));

        let mut watchers = Watchers::new(propagator_var(0, 1), &mut watch_list);
        watchers.watch_all(x, DomainEvents::LOWER_BOUND.events());
        watchers.watch_all(x, DomainEvents::UPPER_BOUND.events());

        assert_eq!(
            1,
            watch_list
                .get_affected_propagators(DomainEvent::Assign, x)
                .count()
        );
        assert_eq!(
            1,
            watch_list
                .get_affected_propagators(DomainEvent::UpperBound, x)
                .count()
        );
    }

    #[test]
    fn unwatched_variables_notify_nobody() {
        let watch_list = WatchListCP::default();

        assert_eq!(
            0,
            watch_list
                .get_affected_propagators(
                    DomainEvent::KernelAddition,
                    VariableId::Graph(GraphId::new(3))
                )
                .count()
        );
    }
}
