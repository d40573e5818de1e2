use super::Constraint;
use crate::propagators::graph::OneNeighbourPropagatorArgs;
use crate::propagators::graph::Orientation;
use crate::propagators::graph::PathNoCyclePropagatorArgs;
use crate::variables::GraphId;
use crate::ConstraintOperationError;
use crate::Solver;

/// Creates the [`Constraint`] that every node in the graph except `but` has exactly one
/// successor, and `but` has none.
pub fn one_successor_but(graph: GraphId, but: u32) -> impl Constraint {
    OneNeighbour {
        graph,
        but,
        orientation: Orientation::Successors,
    }
}

/// Creates the [`Constraint`] that every node in the graph except `but` has exactly one
/// predecessor, and `but` has none.
pub fn one_predecessor_but(graph: GraphId, but: u32) -> impl Constraint {
    OneNeighbour {
        graph,
        but,
        orientation: Orientation::Predecessors,
    }
}

/// Creates the [`Constraint`] that the graph contains no cycle, no arc entering `source` and no
/// arc leaving `sink`.
pub fn path_no_cycle(graph: GraphId, source: u32, sink: u32) -> impl Constraint {
    PathNoCycle {
        graph,
        source,
        sink,
    }
}

/// Creates the [`Constraint`] that the graph is a single path from `source` to `sink` which
/// visits every node.
pub fn hamiltonian_path(graph: GraphId, source: u32, sink: u32) -> impl Constraint {
    HamiltonianPath {
        graph,
        source,
        sink,
    }
}

fn check_node(solver: &Solver, graph: GraphId, node: u32) -> Result<(), ConstraintOperationError> {
    let num_nodes = solver.num_nodes(graph);
    if node < num_nodes {
        Ok(())
    } else {
        Err(ConstraintOperationError::NodeOutOfRange { node, num_nodes })
    }
}

struct OneNeighbour {
    graph: GraphId,
    but: u32,
    orientation: Orientation,
}

impl Constraint for OneNeighbour {
    fn post(self, solver: &mut Solver) -> Result<(), ConstraintOperationError> {
        check_node(solver, self.graph, self.but)?;

        solver.add_propagator(OneNeighbourPropagatorArgs {
            graph: self.graph,
            but: self.but,
            orientation: self.orientation,
        })
    }
}

struct PathNoCycle {
    graph: GraphId,
    source: u32,
    sink: u32,
}

impl Constraint for PathNoCycle {
    fn post(self, solver: &mut Solver) -> Result<(), ConstraintOperationError> {
        check_node(solver, self.graph, self.source)?;
        check_node(solver, self.graph, self.sink)?;

        solver.add_propagator(PathNoCyclePropagatorArgs {
            graph: self.graph,
            source: self.source,
            sink: self.sink,
        })
    }
}

struct HamiltonianPath {
    graph: GraphId,
    source: u32,
    sink: u32,
}

impl Constraint for HamiltonianPath {
    fn post(self, solver: &mut Solver) -> Result<(), ConstraintOperationError> {
        let HamiltonianPath {
            graph,
            source,
            sink,
        } = self;

        check_node(solver, graph, source)?;
        check_node(solver, graph, sink)?;

        for node in 0..solver.num_nodes(graph) {
            solver.add_node_to_kernel(graph, node)?;
        }

        one_successor_but(graph, sink).post(solver)?;
        one_predecessor_but(graph, source).post(solver)?;
        path_no_cycle(graph, source, sink).post(solver)
    }
}
