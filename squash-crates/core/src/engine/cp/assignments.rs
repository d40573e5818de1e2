use thiserror::Error;

use super::domains::GraphDomain;
use super::domains::IntegerDomain;
use super::domains::SetDomain;
use super::event_sink::EventSink;
use super::DomainEvent;
use crate::basic_types::Checkpoint;
use crate::basic_types::Trail;
use crate::containers::KeyedVec;
use crate::engine::predicates::Predicate;
use crate::engine::variables::DomainId;
use crate::engine::variables::GraphId;
use crate::engine::variables::SetId;
use crate::engine::variables::VariableId;
use crate::propagation::PropagatorId;

/// Raised when a narrowing operation would leave a domain empty.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("a domain became empty")]
pub struct EmptyDomain;

/// A reversible change of the solver state; undoing it restores the state from before the change.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum TrailEntry {
    LowerBound {
        domain: DomainId,
        old_lower_bound: i32,
        old_size: u64,
    },
    UpperBound {
        domain: DomainId,
        old_upper_bound: i32,
        old_size: u64,
    },
    Removal {
        domain: DomainId,
        value: i32,
    },
    SetEnvelopeRemoval {
        set: SetId,
        index: usize,
    },
    SetKernelAddition {
        set: SetId,
        index: usize,
    },
    NodeEnvelopeRemoval {
        graph: GraphId,
        node: u32,
    },
    NodeKernelAddition {
        graph: GraphId,
        node: u32,
    },
    ArcEnvelopeRemoval {
        graph: GraphId,
        from: u32,
        to: u32,
    },
    ArcKernelAddition {
        graph: GraphId,
        from: u32,
        to: u32,
    },
    Passivation(PropagatorId),
}

/// The reversible state of the solver: the domains of all variables, the passivity of the
/// propagators and the single trail through which every change to them can be undone.
///
/// Every successful narrowing records the implied [`DomainEvent`], which the propagation engine
/// collects through [`Assignments::drain_domain_events`]. Undoing changes raises no events.
#[derive(Clone, Debug, Default)]
pub struct Assignments {
    integer_domains: KeyedVec<DomainId, IntegerDomain>,
    set_domains: KeyedVec<SetId, SetDomain>,
    graph_domains: KeyedVec<GraphId, GraphDomain>,
    passive: KeyedVec<PropagatorId, bool>,
    trail: Trail<TrailEntry>,
    events: EventSink,
}

// Variable creation and trail management.
impl Assignments {
    pub(crate) fn grow_bounded(&mut self, lower_bound: i32, upper_bound: i32) -> DomainId {
        self.integer_domains
            .push(IntegerDomain::bounded(lower_bound, upper_bound))
    }

    /// `values` has to be sorted, deduplicated and non-empty.
    pub(crate) fn grow_enumerated(&mut self, values: &[i32]) -> DomainId {
        self.integer_domains.push(IntegerDomain::enumerated(values))
    }

    /// `universe` has to be sorted and deduplicated.
    pub(crate) fn grow_set(&mut self, universe: Vec<i32>) -> SetId {
        self.set_domains.push(SetDomain::new(universe))
    }

    pub(crate) fn grow_graph(
        &mut self,
        num_nodes: u32,
        arcs: impl IntoIterator<Item = (u32, u32)>,
    ) -> GraphId {
        self.graph_domains.push(GraphDomain::new(num_nodes, arcs))
    }

    pub fn num_integer_domains(&self) -> usize {
        self.integer_domains.len()
    }

    pub fn num_set_domains(&self) -> usize {
        self.set_domains.len()
    }

    pub fn num_graph_domains(&self) -> usize {
        self.graph_domains.len()
    }

    pub fn get_domains(&self) -> impl Iterator<Item = DomainId> {
        self.integer_domains.keys()
    }

    pub fn get_sets(&self) -> impl Iterator<Item = SetId> {
        self.set_domains.keys()
    }

    pub fn get_graphs(&self) -> impl Iterator<Item = GraphId> {
        self.graph_domains.keys()
    }

    pub(crate) fn checkpoint(&self) -> Checkpoint {
        self.trail.checkpoint()
    }

    pub(crate) fn num_trail_entries(&self) -> usize {
        self.trail.len()
    }

    /// Undoes every change made after `checkpoint`, newest first. No events are raised, and
    /// events which were recorded but not yet drained are discarded.
    pub(crate) fn undo_to(&mut self, checkpoint: Checkpoint) {
        for entry in self.trail.undo_to(checkpoint) {
            match entry {
                TrailEntry::LowerBound {
                    domain,
                    old_lower_bound,
                    old_size,
                } => self.integer_domains[domain].undo_lower_bound(old_lower_bound, old_size),
                TrailEntry::UpperBound {
                    domain,
                    old_upper_bound,
                    old_size,
                } => self.integer_domains[domain].undo_upper_bound(old_upper_bound, old_size),
                TrailEntry::Removal { domain, value } => {
                    self.integer_domains[domain].undo_removal(value)
                }
                TrailEntry::SetEnvelopeRemoval { set, index } => {
                    self.set_domains[set].undo_envelope_removal(index)
                }
                TrailEntry::SetKernelAddition { set, index } => {
                    self.set_domains[set].undo_kernel_addition(index)
                }
                TrailEntry::NodeEnvelopeRemoval { graph, node } => {
                    self.graph_domains[graph].undo_node_envelope_removal(node)
                }
                TrailEntry::NodeKernelAddition { graph, node } => {
                    self.graph_domains[graph].undo_node_kernel_addition(node)
                }
                TrailEntry::ArcEnvelopeRemoval { graph, from, to } => {
                    self.graph_domains[graph].undo_arc_envelope_removal(from, to)
                }
                TrailEntry::ArcKernelAddition { graph, from, to } => {
                    self.graph_domains[graph].undo_arc_kernel_addition(from, to)
                }
                TrailEntry::Passivation(propagator_id) => self.passive[propagator_id] = false,
            }
        }

        self.events.clear();
    }

    pub(crate) fn drain_domain_events(
        &mut self,
    ) -> impl Iterator<Item = (DomainEvent, VariableId)> + '_ {
        self.events.drain()
    }

    pub(crate) fn discard_domain_events(&mut self) {
        self.events.clear();
    }

    pub(crate) fn has_pending_domain_events(&self) -> bool {
        !self.events.is_empty()
    }

    fn record(&mut self, variable: VariableId, event: Option<DomainEvent>) -> bool {
        match event {
            Some(event) => {
                self.events.event_occurred(event, variable);
                true
            }
            None => false,
        }
    }
}

// Passive propagators.
impl Assignments {
    pub(crate) fn is_passive(&self, propagator_id: PropagatorId) -> bool {
        self.passive
            .get(propagator_id)
            .copied()
            .unwrap_or_default()
    }

    /// Marks the propagator as passive until the state is restored to before this call.
    pub(crate) fn passivate(&mut self, propagator_id: PropagatorId) {
        if self.is_passive(propagator_id) {
            return;
        }

        self.passive.accomodate(propagator_id, false);
        self.passive[propagator_id] = true;
        self.trail.push(TrailEntry::Passivation(propagator_id));
    }
}

// Integer domains.
impl Assignments {
    pub fn get_lower_bound(&self, domain_id: DomainId) -> i32 {
        self.integer_domains[domain_id].lower_bound()
    }

    pub fn get_upper_bound(&self, domain_id: DomainId) -> i32 {
        self.integer_domains[domain_id].upper_bound()
    }

    pub fn get_domain_size(&self, domain_id: DomainId) -> u64 {
        self.integer_domains[domain_id].size()
    }

    pub fn is_value_in_domain(&self, domain_id: DomainId, value: i32) -> bool {
        self.integer_domains[domain_id].contains(value)
    }

    pub fn is_domain_assigned(&self, domain_id: DomainId) -> bool {
        self.get_lower_bound(domain_id) == self.get_upper_bound(domain_id)
    }

    /// Returns the value of the domain if it is assigned.
    pub fn get_assigned_value(&self, domain_id: DomainId) -> Option<i32> {
        self.is_domain_assigned(domain_id)
            .then(|| self.get_lower_bound(domain_id))
    }

    pub fn is_enumerated(&self, domain_id: DomainId) -> bool {
        self.integer_domains[domain_id].is_enumerated()
    }

    pub fn get_next_value(&self, domain_id: DomainId, value: i32) -> i32 {
        self.integer_domains[domain_id].next_value(value)
    }

    pub fn get_previous_value(&self, domain_id: DomainId, value: i32) -> i32 {
        self.integer_domains[domain_id].previous_value(value)
    }

    pub(crate) fn tighten_lower_bound(
        &mut self,
        domain_id: DomainId,
        value: i32,
    ) -> Result<bool, EmptyDomain> {
        let event =
            self.integer_domains[domain_id].tighten_lower_bound(domain_id, value, &mut self.trail)?;
        Ok(self.record(VariableId::Integer(domain_id), event))
    }

    pub(crate) fn tighten_upper_bound(
        &mut self,
        domain_id: DomainId,
        value: i32,
    ) -> Result<bool, EmptyDomain> {
        let event =
            self.integer_domains[domain_id].tighten_upper_bound(domain_id, value, &mut self.trail)?;
        Ok(self.record(VariableId::Integer(domain_id), event))
    }

    pub(crate) fn remove_value_from_domain(
        &mut self,
        domain_id: DomainId,
        value: i32,
    ) -> Result<bool, EmptyDomain> {
        let event =
            self.integer_domains[domain_id].remove_value(domain_id, value, &mut self.trail)?;
        Ok(self.record(VariableId::Integer(domain_id), event))
    }

    pub(crate) fn remove_interval_from_domain(
        &mut self,
        domain_id: DomainId,
        lower: i32,
        upper: i32,
    ) -> Result<bool, EmptyDomain> {
        let event = self.integer_domains[domain_id].remove_interval(
            domain_id,
            lower,
            upper,
            &mut self.trail,
        )?;
        Ok(self.record(VariableId::Integer(domain_id), event))
    }

    pub(crate) fn make_assignment(
        &mut self,
        domain_id: DomainId,
        value: i32,
    ) -> Result<bool, EmptyDomain> {
        let event = self.integer_domains[domain_id].instantiate(domain_id, value, &mut self.trail)?;
        Ok(self.record(VariableId::Integer(domain_id), event))
    }

    /// Applies the predicate to its domain.
    pub(crate) fn post_predicate(&mut self, predicate: Predicate) -> Result<bool, EmptyDomain> {
        match predicate {
            Predicate::LowerBound {
                domain_id,
                lower_bound,
            } => self.tighten_lower_bound(domain_id, lower_bound),
            Predicate::UpperBound {
                domain_id,
                upper_bound,
            } => self.tighten_upper_bound(domain_id, upper_bound),
            Predicate::NotEqual {
                domain_id,
                not_equal_constant,
            } => self.remove_value_from_domain(domain_id, not_equal_constant),
            Predicate::Equal {
                domain_id,
                equality_constant,
            } => self.make_assignment(domain_id, equality_constant),
            Predicate::True => Ok(false),
            Predicate::False => Err(EmptyDomain),
        }
    }

    /// Returns `Some(truth value)` if the predicate is decided by the current domains.
    ///
    /// A disequality on a bounded domain is only decided once the value is outside the bounds or
    /// the domain is assigned, since holes cannot be represented.
    pub fn evaluate_predicate(&self, predicate: Predicate) -> Option<bool> {
        match predicate {
            Predicate::LowerBound {
                domain_id,
                lower_bound,
            } => {
                if self.get_lower_bound(domain_id) >= lower_bound {
                    Some(true)
                } else if self.get_upper_bound(domain_id) < lower_bound {
                    Some(false)
                } else {
                    None
                }
            }
            Predicate::UpperBound {
                domain_id,
                upper_bound,
            } => {
                if self.get_upper_bound(domain_id) <= upper_bound {
                    Some(true)
                } else if self.get_lower_bound(domain_id) > upper_bound {
                    Some(false)
                } else {
                    None
                }
            }
            Predicate::NotEqual {
                domain_id,
                not_equal_constant,
            } => {
                if !self.is_value_in_domain(domain_id, not_equal_constant) {
                    Some(true)
                } else if self.get_assigned_value(domain_id) == Some(not_equal_constant) {
                    Some(false)
                } else {
                    None
                }
            }
            Predicate::Equal {
                domain_id,
                equality_constant,
            } => {
                if !self.is_value_in_domain(domain_id, equality_constant) {
                    Some(false)
                } else if self.get_assigned_value(domain_id) == Some(equality_constant) {
                    Some(true)
                } else {
                    None
                }
            }
            Predicate::True => Some(true),
            Predicate::False => Some(false),
        }
    }
}

// Set domains.
impl Assignments {
    pub fn set_envelope_contains(&self, set_id: SetId, element: i32) -> bool {
        self.set_domains[set_id].envelope_contains(element)
    }

    pub fn set_kernel_contains(&self, set_id: SetId, element: i32) -> bool {
        self.set_domains[set_id].kernel_contains(element)
    }

    pub fn set_envelope_size(&self, set_id: SetId) -> u32 {
        self.set_domains[set_id].envelope_size()
    }

    pub fn set_kernel_size(&self, set_id: SetId) -> u32 {
        self.set_domains[set_id].kernel_size()
    }

    pub fn is_set_instantiated(&self, set_id: SetId) -> bool {
        self.set_domains[set_id].is_instantiated()
    }

    pub fn iter_set_envelope(&self, set_id: SetId) -> impl Iterator<Item = i32> + '_ {
        self.set_domains[set_id].iter_envelope()
    }

    pub fn iter_set_kernel(&self, set_id: SetId) -> impl Iterator<Item = i32> + '_ {
        self.set_domains[set_id].iter_kernel()
    }

    pub(crate) fn remove_from_envelope(
        &mut self,
        set_id: SetId,
        element: i32,
    ) -> Result<bool, EmptyDomain> {
        let event = self.set_domains[set_id].remove_from_envelope(set_id, element, &mut self.trail)?;
        Ok(self.record(VariableId::Set(set_id), event))
    }

    pub(crate) fn add_to_kernel(&mut self, set_id: SetId, element: i32) -> Result<bool, EmptyDomain> {
        let event = self.set_domains[set_id].add_to_kernel(set_id, element, &mut self.trail)?;
        Ok(self.record(VariableId::Set(set_id), event))
    }
}

// Graph domains.
impl Assignments {
    pub fn graph_num_nodes(&self, graph_id: GraphId) -> u32 {
        self.graph_domains[graph_id].num_nodes()
    }

    pub fn graph_node_in_envelope(&self, graph_id: GraphId, node: u32) -> bool {
        self.graph_domains[graph_id].node_in_envelope(node)
    }

    pub fn graph_node_in_kernel(&self, graph_id: GraphId, node: u32) -> bool {
        self.graph_domains[graph_id].node_in_kernel(node)
    }

    pub fn graph_arc_in_envelope(&self, graph_id: GraphId, from: u32, to: u32) -> bool {
        self.graph_domains[graph_id].arc_in_envelope(from, to)
    }

    pub fn graph_arc_in_kernel(&self, graph_id: GraphId, from: u32, to: u32) -> bool {
        self.graph_domains[graph_id].arc_in_kernel(from, to)
    }

    pub fn graph_node_envelope_size(&self, graph_id: GraphId) -> u32 {
        self.graph_domains[graph_id].node_envelope_size()
    }

    pub fn graph_node_kernel_size(&self, graph_id: GraphId) -> u32 {
        self.graph_domains[graph_id].node_kernel_size()
    }

    pub fn graph_arc_envelope_size(&self, graph_id: GraphId) -> u32 {
        self.graph_domains[graph_id].arc_envelope_size()
    }

    pub fn graph_arc_kernel_size(&self, graph_id: GraphId) -> u32 {
        self.graph_domains[graph_id].arc_kernel_size()
    }

    pub fn is_graph_instantiated(&self, graph_id: GraphId) -> bool {
        self.graph_domains[graph_id].is_instantiated()
    }

    pub fn graph_successors_in_envelope(
        &self,
        graph_id: GraphId,
        node: u32,
    ) -> impl Iterator<Item = u32> + '_ {
        self.graph_domains[graph_id].successors_in_envelope(node)
    }

    pub fn graph_predecessors_in_envelope(
        &self,
        graph_id: GraphId,
        node: u32,
    ) -> impl Iterator<Item = u32> + '_ {
        self.graph_domains[graph_id].predecessors_in_envelope(node)
    }

    pub fn graph_successors_in_kernel(
        &self,
        graph_id: GraphId,
        node: u32,
    ) -> impl Iterator<Item = u32> + '_ {
        self.graph_domains[graph_id].successors_in_kernel(node)
    }

    pub fn graph_predecessors_in_kernel(
        &self,
        graph_id: GraphId,
        node: u32,
    ) -> impl Iterator<Item = u32> + '_ {
        self.graph_domains[graph_id].predecessors_in_kernel(node)
    }

    pub fn graph_envelope_nodes(&self, graph_id: GraphId) -> impl Iterator<Item = u32> + '_ {
        self.graph_domains[graph_id].iter_envelope_nodes()
    }

    pub fn graph_kernel_nodes(&self, graph_id: GraphId) -> impl Iterator<Item = u32> + '_ {
        self.graph_domains[graph_id].iter_kernel_nodes()
    }

    /// The arcs of the kernel, ordered by their source node and then by their target node.
    pub fn graph_kernel_arcs(&self, graph_id: GraphId) -> impl Iterator<Item = (u32, u32)> + '_ {
        let domain = &self.graph_domains[graph_id];
        (0..domain.num_nodes()).flat_map(move |from| {
            domain
                .successors_in_kernel(from)
                .map(move |to| (from, to))
        })
    }

    /// The arcs of the envelope, ordered by their source node and then by their target node.
    pub fn graph_envelope_arcs(&self, graph_id: GraphId) -> impl Iterator<Item = (u32, u32)> + '_ {
        let domain = &self.graph_domains[graph_id];
        (0..domain.num_nodes()).flat_map(move |from| {
            domain
                .successors_in_envelope(from)
                .map(move |to| (from, to))
        })
    }

    pub(crate) fn remove_node_from_envelope(
        &mut self,
        graph_id: GraphId,
        node: u32,
    ) -> Result<bool, EmptyDomain> {
        let event =
            self.graph_domains[graph_id].remove_node_from_envelope(graph_id, node, &mut self.trail)?;
        Ok(self.record(VariableId::Graph(graph_id), event))
    }

    pub(crate) fn add_node_to_kernel(
        &mut self,
        graph_id: GraphId,
        node: u32,
    ) -> Result<bool, EmptyDomain> {
        let event =
            self.graph_domains[graph_id].add_node_to_kernel(graph_id, node, &mut self.trail)?;
        Ok(self.record(VariableId::Graph(graph_id), event))
    }

    pub(crate) fn remove_arc_from_envelope(
        &mut self,
        graph_id: GraphId,
        from: u32,
        to: u32,
    ) -> Result<bool, EmptyDomain> {
        let event = self.graph_domains[graph_id].remove_arc_from_envelope(
            graph_id,
            from,
            to,
            &mut self.trail,
        )?;
        Ok(self.record(VariableId::Graph(graph_id), event))
    }

    pub(crate) fn add_arc_to_kernel(
        &mut self,
        graph_id: GraphId,
        from: u32,
        to: u32,
    ) -> Result<bool, EmptyDomain> {
        let event =
            self.graph_domains[graph_id].add_arc_to_kernel(graph_id, from, to, &mut self.trail)?;
        Ok(self.record(VariableId::Graph(graph_id), event))
    }

    /// Whether every variable of every kind is assigned.
    pub(crate) fn all_variables_assigned(&self) -> bool {
        self.get_domains()
            .all(|domain_id| self.is_domain_assigned(domain_id))
            && self.get_sets().all(|set_id| self.is_set_instantiated(set_id))
            && self
                .get_graphs()
                .all(|graph_id| self.is_graph_instantiated(graph_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn narrowings_raise_the_implied_events() {
        let mut assignments = Assignments::default();
        let x = assignments.grow_enumerated(&[1, 2, 3, 4]);

        assert_eq!(Ok(true), assignments.remove_value_from_domain(x, 3));
        assert_eq!(Ok(true), assignments.tighten_lower_bound(x, 2));
        assert_eq!(Ok(true), assignments.tighten_upper_bound(x, 3));

        let events = assignments.drain_domain_events().collect::<Vec<_>>();
        assert_eq!(
            vec![
                (DomainEvent::Removal, VariableId::Integer(x)),
                (DomainEvent::LowerBound, VariableId::Integer(x)),
                (DomainEvent::Assign, VariableId::Integer(x)),
            ],
            events
        );
    }

    #[test]
    fn no_op_narrowings_raise_nothing() {
        let mut assignments = Assignments::default();
        let x = assignments.grow_bounded(0, 10);

        assert_eq!(Ok(false), assignments.tighten_lower_bound(x, -5));
        assert_eq!(Ok(false), assignments.remove_value_from_domain(x, 11));

        assert!(!assignments.has_pending_domain_events());
        assert_eq!(0, assignments.num_trail_entries());
    }

    #[test]
    fn undoing_restores_the_trail_length_and_raises_nothing() {
        let mut assignments = Assignments::default();
        let x = assignments.grow_enumerated(&[0, 1, 2, 3, 4, 5]);
        let s = assignments.grow_set(vec![1, 2, 3]);
        let g = assignments.grow_graph(2, [(0, 1), (1, 0)]);

        let checkpoint = assignments.checkpoint();
        let _ = assignments.remove_value_from_domain(x, 2);
        let _ = assignments.make_assignment(x, 4);
        let _ = assignments.add_to_kernel(s, 2);
        let _ = assignments.remove_from_envelope(s, 3);
        let _ = assignments.add_arc_to_kernel(g, 0, 1);
        let _ = assignments.remove_arc_from_envelope(g, 1, 0);
        assignments.passivate(PropagatorId(0));

        assignments.undo_to(checkpoint);

        assert_eq!(checkpoint.trail_length(), assignments.num_trail_entries());
        assert!(!assignments.has_pending_domain_events());
        assert_eq!(6, assignments.get_domain_size(x));
        assert!(assignments.is_value_in_domain(x, 2));
        assert_eq!(0, assignments.set_kernel_size(s));
        assert_eq!(3, assignments.set_envelope_size(s));
        assert_eq!(0, assignments.graph_arc_kernel_size(g));
        assert_eq!(0, assignments.graph_node_kernel_size(g));
        assert_eq!(2, assignments.graph_arc_envelope_size(g));
        assert!(!assignments.is_passive(PropagatorId(0)));
    }

    #[test]
    fn predicates_are_evaluated_against_the_domains() {
        let mut assignments = Assignments::default();
        let x = assignments.grow_enumerated(&[1, 3, 5]);

        assert_eq!(
            Some(true),
            assignments.evaluate_predicate(Predicate::NotEqual {
                domain_id: x,
                not_equal_constant: 2
            })
        );
        assert_eq!(
            None,
            assignments.evaluate_predicate(Predicate::LowerBound {
                domain_id: x,
                lower_bound: 3
            })
        );

        assert_eq!(
            Ok(true),
            assignments.post_predicate(Predicate::LowerBound {
                domain_id: x,
                lower_bound: 2
            })
        );
        assert_eq!(3, assignments.get_lower_bound(x));
        assert_eq!(Err(EmptyDomain), assignments.post_predicate(Predicate::False));
    }
}
