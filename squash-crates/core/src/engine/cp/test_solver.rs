#![cfg(test)]
//! This module exposes helpers that aid testing of propagators. The [`TestSolver`] allows setting
//! up specific scenarios under which to test the various operations of a propagator.

use super::Assignments;
use super::EmptyDomain;
use super::PropagationEngine;
use crate::basic_types::Checkpoint;
use crate::basic_types::Contradiction;
use crate::basic_types::PropagationStatusCP;
use crate::engine::variables::DomainId;
use crate::engine::variables::GraphId;
use crate::engine::variables::IntegerVariable;
use crate::engine::variables::SetId;
use crate::propagation::PropagatorConstructor;
use crate::propagation::PropagatorId;

/// A container for variables and propagators, which can be used to test propagators.
///
/// Narrowing a domain through the test solver only raises the domain events; they are dispatched
/// by the next call to [`TestSolver::propagate`].
#[derive(Debug, Default)]
pub(crate) struct TestSolver {
    pub(crate) assignments: Assignments,
    pub(crate) engine: PropagationEngine,
}

impl TestSolver {
    /// Creates an enumerated variable over `[lb, ub]`.
    pub(crate) fn new_variable(&mut self, lb: i32, ub: i32) -> DomainId {
        let values = (lb..=ub).collect::<Vec<_>>();
        self.assignments.grow_enumerated(&values)
    }

    pub(crate) fn new_bounded_variable(&mut self, lb: i32, ub: i32) -> DomainId {
        self.assignments.grow_bounded(lb, ub)
    }

    pub(crate) fn new_sparse_variable(&mut self, mut values: Vec<i32>) -> DomainId {
        values.sort_unstable();
        values.dedup();
        self.assignments.grow_enumerated(&values)
    }

    pub(crate) fn new_set(&mut self, mut universe: Vec<i32>) -> SetId {
        universe.sort_unstable();
        universe.dedup();
        self.assignments.grow_set(universe)
    }

    pub(crate) fn new_graph(
        &mut self,
        num_nodes: u32,
        arcs: impl IntoIterator<Item = (u32, u32)>,
    ) -> GraphId {
        self.assignments.grow_graph(num_nodes, arcs)
    }

    pub(crate) fn new_propagator<Constructor>(
        &mut self,
        constructor: Constructor,
    ) -> Result<PropagatorId, Contradiction>
    where
        Constructor: PropagatorConstructor,
        Constructor::PropagatorImpl: 'static,
    {
        self.engine
            .add_propagator(constructor, &mut self.assignments)
    }

    /// Dispatches the pending domain events and runs the propagators to their fixpoint.
    pub(crate) fn propagate(&mut self) -> PropagationStatusCP {
        self.engine.propagate(&mut self.assignments)
    }

    pub(crate) fn checkpoint(&self) -> Checkpoint {
        self.assignments.checkpoint()
    }

    pub(crate) fn undo_to(&mut self, checkpoint: Checkpoint) {
        self.assignments.undo_to(checkpoint);
        self.engine.notify_backtrack();
    }

    pub(crate) fn num_trail_entries(&self) -> usize {
        self.assignments.num_trail_entries()
    }

    pub(crate) fn is_passive(&self, propagator_id: PropagatorId) -> bool {
        self.assignments.is_passive(propagator_id)
    }

    pub(crate) fn contains<Var: IntegerVariable>(&self, var: Var, value: i32) -> bool {
        var.contains(&self.assignments, value)
    }

    pub(crate) fn lower_bound<Var: IntegerVariable>(&self, var: Var) -> i32 {
        var.lower_bound(&self.assignments)
    }

    pub(crate) fn upper_bound<Var: IntegerVariable>(&self, var: Var) -> i32 {
        var.upper_bound(&self.assignments)
    }

    pub(crate) fn size<Var: IntegerVariable>(&self, var: Var) -> u64 {
        var.size(&self.assignments)
    }

    pub(crate) fn next_value<Var: IntegerVariable>(&self, var: Var, value: i32) -> i32 {
        var.next_value(&self.assignments, value)
    }

    pub(crate) fn previous_value<Var: IntegerVariable>(&self, var: Var, value: i32) -> i32 {
        var.previous_value(&self.assignments, value)
    }

    pub(crate) fn iterate_domain<Var: IntegerVariable>(&self, var: Var) -> Vec<i32> {
        var.iterate_domain(&self.assignments).collect()
    }

    pub(crate) fn assert_bounds<Var: IntegerVariable>(&self, var: Var, lb: i32, ub: i32) {
        let actual_lb = self.lower_bound(var.clone());
        let actual_ub = self.upper_bound(var.clone());

        assert_eq!(
            (lb, ub),
            (actual_lb, actual_ub),
            "The expected bounds [{lb}..{ub}] did not match the actual bounds [{actual_lb}..{actual_ub}] of {var:?}"
        );
    }

    pub(crate) fn tighten_lower_bound<Var: IntegerVariable>(
        &mut self,
        var: Var,
        value: i32,
    ) -> Result<bool, EmptyDomain> {
        var.tighten_lower_bound(&mut self.assignments, value)
    }

    pub(crate) fn tighten_upper_bound<Var: IntegerVariable>(
        &mut self,
        var: Var,
        value: i32,
    ) -> Result<bool, EmptyDomain> {
        var.tighten_upper_bound(&mut self.assignments, value)
    }

    pub(crate) fn remove_value<Var: IntegerVariable>(
        &mut self,
        var: Var,
        value: i32,
    ) -> Result<bool, EmptyDomain> {
        var.remove_value(&mut self.assignments, value)
    }

    pub(crate) fn remove_interval<Var: IntegerVariable>(
        &mut self,
        var: Var,
        lower: i32,
        upper: i32,
    ) -> Result<bool, EmptyDomain> {
        var.remove_interval(&mut self.assignments, lower, upper)
    }

    pub(crate) fn instantiate<Var: IntegerVariable>(
        &mut self,
        var: Var,
        value: i32,
    ) -> Result<bool, EmptyDomain> {
        var.instantiate(&mut self.assignments, value)
    }

    pub(crate) fn envelope(&self, set: SetId) -> Vec<i32> {
        self.assignments.iter_set_envelope(set).collect()
    }

    pub(crate) fn kernel(&self, set: SetId) -> Vec<i32> {
        self.assignments.iter_set_kernel(set).collect()
    }

    pub(crate) fn remove_from_envelope(
        &mut self,
        set: SetId,
        element: i32,
    ) -> Result<bool, EmptyDomain> {
        self.assignments.remove_from_envelope(set, element)
    }

    pub(crate) fn add_to_kernel(&mut self, set: SetId, element: i32) -> Result<bool, EmptyDomain> {
        self.assignments.add_to_kernel(set, element)
    }

    pub(crate) fn arc_in_envelope(&self, graph: GraphId, from: u32, to: u32) -> bool {
        self.assignments.graph_arc_in_envelope(graph, from, to)
    }

    pub(crate) fn arc_in_kernel(&self, graph: GraphId, from: u32, to: u32) -> bool {
        self.assignments.graph_arc_in_kernel(graph, from, to)
    }

    pub(crate) fn kernel_arcs(&self, graph: GraphId) -> Vec<(u32, u32)> {
        self.assignments.graph_kernel_arcs(graph).collect()
    }

    pub(crate) fn remove_arc_from_envelope(
        &mut self,
        graph: GraphId,
        from: u32,
        to: u32,
    ) -> Result<bool, EmptyDomain> {
        self.assignments.remove_arc_from_envelope(graph, from, to)
    }

    pub(crate) fn add_arc_to_kernel(
        &mut self,
        graph: GraphId,
        from: u32,
        to: u32,
    ) -> Result<bool, EmptyDomain> {
        self.assignments.add_arc_to_kernel(graph, from, to)
    }
}
