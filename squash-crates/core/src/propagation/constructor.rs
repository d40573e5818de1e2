use super::LocalId;
use super::Propagator;
use super::PropagatorId;
use super::PropagatorVarId;
use crate::engine::cp::DomainEvents;
use crate::engine::cp::WatchListCP;
use crate::engine::cp::Watchers;
use crate::engine::variables::GraphId;
use crate::engine::variables::SetId;
use crate::engine::variables::VariableId;
use crate::engine::Assignments;
use crate::propagation::HasAssignments;
use crate::variables::IntegerVariable;

/// A propagator constructor creates a fully initialized instance of a [`Propagator`].
///
/// The constructor is responsible for indicating on which events the propagator should be
/// notified. Additionally, the propagator can be initialized with values that come from the
/// current domains.
pub trait PropagatorConstructor {
    /// The propagator that is produced by this constructor.
    type PropagatorImpl: Propagator + Clone;

    /// Create the propagator instance from `Self`.
    fn create(self, context: PropagatorConstructorContext) -> Self::PropagatorImpl;
}

/// [`PropagatorConstructorContext`] is used when [`Propagator`]s are initialised after creation.
///
/// Propagators use it to register to domain changes of variables and to retrieve the current
/// domains through [`ReadDomains`](super::ReadDomains).
#[derive(Debug)]
pub struct PropagatorConstructorContext<'a> {
    watch_list: &'a mut WatchListCP,
    assignments: &'a Assignments,
    pub(crate) propagator_id: PropagatorId,
}

impl<'a> PropagatorConstructorContext<'a> {
    pub(crate) fn new(
        watch_list: &'a mut WatchListCP,
        assignments: &'a Assignments,
        propagator_id: PropagatorId,
    ) -> Self {
        PropagatorConstructorContext {
            watch_list,
            assignments,
            propagator_id,
        }
    }

    /// Subscribes the propagator to the given [`DomainEvents`] of an integer variable.
    ///
    /// The [`LocalId`] is passed to [`Propagator::propagate`] to identify the variable. Each
    /// variable *must* have a unique [`LocalId`]; most often this is the position of the variable
    /// in the scope of the propagator. Registering the same variable twice under different local
    /// ids is allowed, the propagator is then notified once per local id.
    pub fn register(
        &mut self,
        var: impl IntegerVariable,
        domain_events: DomainEvents,
        local_id: LocalId,
    ) {
        let mut watchers = Watchers::new(self.propagator_var(local_id), self.watch_list);
        var.watch_all(&mut watchers, domain_events.events());
    }

    /// Subscribes the propagator to the given [`DomainEvents`] of a set variable.
    pub fn register_set(&mut self, set: SetId, domain_events: DomainEvents, local_id: LocalId) {
        let mut watchers = Watchers::new(self.propagator_var(local_id), self.watch_list);
        watchers.watch_all(VariableId::Set(set), domain_events.events());
    }

    /// Subscribes the propagator to the given [`DomainEvents`] of a graph variable.
    pub fn register_graph(
        &mut self,
        graph: GraphId,
        domain_events: DomainEvents,
        local_id: LocalId,
    ) {
        let mut watchers = Watchers::new(self.propagator_var(local_id), self.watch_list);
        watchers.watch_all(VariableId::Graph(graph), domain_events.events());
    }

    fn propagator_var(&self, local_id: LocalId) -> PropagatorVarId {
        PropagatorVarId {
            propagator: self.propagator_id,
            variable: local_id,
        }
    }
}

impl HasAssignments for PropagatorConstructorContext<'_> {
    fn assignments(&self) -> &Assignments {
        self.assignments
    }
}
