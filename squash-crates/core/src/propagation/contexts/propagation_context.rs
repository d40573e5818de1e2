use crate::basic_types::Contradiction;
use crate::engine::predicates::Predicate;
use crate::engine::variables::GraphId;
use crate::engine::variables::IntegerVariable;
use crate::engine::variables::SetId;
use crate::engine::Assignments;
use crate::engine::EmptyDomain;
use crate::propagation::PropagatorId;

pub trait HasAssignments {
    fn assignments(&self) -> &Assignments;
}

/// Read access to the current domains, available on every context handed to propagators and
/// branchers.
pub trait ReadDomains: HasAssignments {
    fn lower_bound<Var: IntegerVariable>(&self, var: &Var) -> i32 {
        var.lower_bound(self.assignments())
    }

    fn upper_bound<Var: IntegerVariable>(&self, var: &Var) -> i32 {
        var.upper_bound(self.assignments())
    }

    fn contains<Var: IntegerVariable>(&self, var: &Var, value: i32) -> bool {
        var.contains(self.assignments(), value)
    }

    fn domain_size<Var: IntegerVariable>(&self, var: &Var) -> u64 {
        var.size(self.assignments())
    }

    fn is_fixed<Var: IntegerVariable>(&self, var: &Var) -> bool {
        var.is_fixed(self.assignments())
    }

    fn next_value<Var: IntegerVariable>(&self, var: &Var, value: i32) -> i32 {
        var.next_value(self.assignments(), value)
    }

    fn previous_value<Var: IntegerVariable>(&self, var: &Var, value: i32) -> i32 {
        var.previous_value(self.assignments(), value)
    }

    fn iterate_domain<Var: IntegerVariable>(&self, var: &Var) -> impl Iterator<Item = i32> {
        var.iterate_domain(self.assignments())
    }

    fn envelope_contains(&self, set: SetId, element: i32) -> bool {
        self.assignments().set_envelope_contains(set, element)
    }

    fn kernel_contains(&self, set: SetId, element: i32) -> bool {
        self.assignments().set_kernel_contains(set, element)
    }

    fn envelope_size(&self, set: SetId) -> u32 {
        self.assignments().set_envelope_size(set)
    }

    fn kernel_size(&self, set: SetId) -> u32 {
        self.assignments().set_kernel_size(set)
    }

    fn is_set_instantiated(&self, set: SetId) -> bool {
        self.assignments().is_set_instantiated(set)
    }

    fn iterate_envelope(&self, set: SetId) -> impl Iterator<Item = i32> {
        self.assignments().iter_set_envelope(set)
    }

    fn iterate_kernel(&self, set: SetId) -> impl Iterator<Item = i32> {
        self.assignments().iter_set_kernel(set)
    }

    fn num_nodes(&self, graph: GraphId) -> u32 {
        self.assignments().graph_num_nodes(graph)
    }

    fn node_in_envelope(&self, graph: GraphId, node: u32) -> bool {
        self.assignments().graph_node_in_envelope(graph, node)
    }

    fn node_in_kernel(&self, graph: GraphId, node: u32) -> bool {
        self.assignments().graph_node_in_kernel(graph, node)
    }

    fn arc_in_envelope(&self, graph: GraphId, from: u32, to: u32) -> bool {
        self.assignments().graph_arc_in_envelope(graph, from, to)
    }

    fn arc_in_kernel(&self, graph: GraphId, from: u32, to: u32) -> bool {
        self.assignments().graph_arc_in_kernel(graph, from, to)
    }

    fn successors_in_envelope(&self, graph: GraphId, node: u32) -> impl Iterator<Item = u32> {
        self.assignments().graph_successors_in_envelope(graph, node)
    }

    fn predecessors_in_envelope(&self, graph: GraphId, node: u32) -> impl Iterator<Item = u32> {
        self.assignments()
            .graph_predecessors_in_envelope(graph, node)
    }

    fn successors_in_kernel(&self, graph: GraphId, node: u32) -> impl Iterator<Item = u32> {
        self.assignments().graph_successors_in_kernel(graph, node)
    }

    fn predecessors_in_kernel(&self, graph: GraphId, node: u32) -> impl Iterator<Item = u32> {
        self.assignments().graph_predecessors_in_kernel(graph, node)
    }

    fn is_graph_instantiated(&self, graph: GraphId) -> bool {
        self.assignments().is_graph_instantiated(graph)
    }
}

impl<T: HasAssignments> ReadDomains for T {}

/// Read-only view on the domains, given to [`Propagator::is_entailed`](super::super::Propagator).
#[derive(Clone, Copy, Debug)]
pub struct PropagationContext<'a> {
    pub(crate) assignments: &'a Assignments,
}

impl<'a> PropagationContext<'a> {
    pub(crate) fn new(assignments: &'a Assignments) -> Self {
        PropagationContext { assignments }
    }
}

impl HasAssignments for PropagationContext<'_> {
    fn assignments(&self) -> &Assignments {
        self.assignments
    }
}

/// Provides information about the domains to a propagator, and is the only way in which a
/// propagator can narrow them.
///
/// Every narrowing returns `Ok(true)` when the domain changed, `Ok(false)` when the change was
/// already implied, and `Err(EmptyDomain)` when it would empty the domain. The error converts into
/// a [`Contradiction`] so it can be propagated with `?`.
#[derive(Debug)]
pub struct PropagationContextMut<'a> {
    pub(crate) assignments: &'a mut Assignments,
    pub(crate) propagator_id: PropagatorId,
}

impl<'a> PropagationContextMut<'a> {
    pub(crate) fn new(assignments: &'a mut Assignments, propagator_id: PropagatorId) -> Self {
        PropagationContextMut {
            assignments,
            propagator_id,
        }
    }

    pub fn as_readonly(&self) -> PropagationContext<'_> {
        PropagationContext {
            assignments: self.assignments,
        }
    }

    pub fn reborrow(&mut self) -> PropagationContextMut<'_> {
        PropagationContextMut {
            assignments: self.assignments,
            propagator_id: self.propagator_id,
        }
    }

    /// The contradiction to report when the propagator itself finds the domains inconsistent.
    pub fn conflict(&self) -> Contradiction {
        Contradiction::Propagator(self.propagator_id)
    }

    pub fn tighten_lower_bound<Var: IntegerVariable>(
        &mut self,
        var: &Var,
        value: i32,
    ) -> Result<bool, EmptyDomain> {
        var.tighten_lower_bound(self.assignments, value)
    }

    pub fn tighten_upper_bound<Var: IntegerVariable>(
        &mut self,
        var: &Var,
        value: i32,
    ) -> Result<bool, EmptyDomain> {
        var.tighten_upper_bound(self.assignments, value)
    }

    pub fn remove_value<Var: IntegerVariable>(
        &mut self,
        var: &Var,
        value: i32,
    ) -> Result<bool, EmptyDomain> {
        var.remove_value(self.assignments, value)
    }

    pub fn remove_interval<Var: IntegerVariable>(
        &mut self,
        var: &Var,
        lower: i32,
        upper: i32,
    ) -> Result<bool, EmptyDomain> {
        var.remove_interval(self.assignments, lower, upper)
    }

    pub fn instantiate<Var: IntegerVariable>(
        &mut self,
        var: &Var,
        value: i32,
    ) -> Result<bool, EmptyDomain> {
        var.instantiate(self.assignments, value)
    }

    pub fn post(&mut self, predicate: Predicate) -> Result<bool, EmptyDomain> {
        self.assignments.post_predicate(predicate)
    }

    pub fn remove_from_envelope(&mut self, set: SetId, element: i32) -> Result<bool, EmptyDomain> {
        self.assignments.remove_from_envelope(set, element)
    }

    pub fn add_to_kernel(&mut self, set: SetId, element: i32) -> Result<bool, EmptyDomain> {
        self.assignments.add_to_kernel(set, element)
    }

    pub fn remove_node_from_envelope(
        &mut self,
        graph: GraphId,
        node: u32,
    ) -> Result<bool, EmptyDomain> {
        self.assignments.remove_node_from_envelope(graph, node)
    }

    pub fn add_node_to_kernel(&mut self, graph: GraphId, node: u32) -> Result<bool, EmptyDomain> {
        self.assignments.add_node_to_kernel(graph, node)
    }

    pub fn remove_arc_from_envelope(
        &mut self,
        graph: GraphId,
        from: u32,
        to: u32,
    ) -> Result<bool, EmptyDomain> {
        self.assignments.remove_arc_from_envelope(graph, from, to)
    }

    pub fn add_arc_to_kernel(
        &mut self,
        graph: GraphId,
        from: u32,
        to: u32,
    ) -> Result<bool, EmptyDomain> {
        self.assignments.add_arc_to_kernel(graph, from, to)
    }
}

impl HasAssignments for PropagationContextMut<'_> {
    fn assignments(&self) -> &Assignments {
        self.assignments
    }
}
