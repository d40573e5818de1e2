use crate::basic_types::PropagationStatusCP;
use crate::engine::variables::GraphId;
use crate::propagation::DomainEvents;
use crate::propagation::Entailment;
use crate::propagation::LocalId;
use crate::propagation::PropagationContext;
use crate::propagation::PropagationContextMut;
use crate::propagation::Propagator;
use crate::propagation::PropagatorConstructor;
use crate::propagation::PropagatorConstructorContext;
use crate::propagation::ReadDomains;

/// Which neighbours of a node are restricted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Orientation {
    Successors,
    Predecessors,
}

impl Orientation {
    fn envelope_neighbours(
        self,
        context: &impl ReadDomains,
        graph: GraphId,
        node: u32,
    ) -> Vec<u32> {
        match self {
            Orientation::Successors => context.successors_in_envelope(graph, node).collect(),
            Orientation::Predecessors => context.predecessors_in_envelope(graph, node).collect(),
        }
    }

    fn kernel_neighbours(
        self,
        context: &impl ReadDomains,
        graph: GraphId,
        node: u32,
    ) -> Vec<u32> {
        match self {
            Orientation::Successors => context.successors_in_kernel(graph, node).collect(),
            Orientation::Predecessors => context.predecessors_in_kernel(graph, node).collect(),
        }
    }

    /// The arc between `node` and its `neighbour`, as `(from, to)`.
    fn arc(self, node: u32, neighbour: u32) -> (u32, u32) {
        match self {
            Orientation::Successors => (node, neighbour),
            Orientation::Predecessors => (neighbour, node),
        }
    }
}

/// The [`PropagatorConstructor`] for the [`OneNeighbourPropagator`].
#[derive(Clone, Copy, Debug)]
pub(crate) struct OneNeighbourPropagatorArgs {
    pub(crate) graph: GraphId,
    pub(crate) but: u32,
    pub(crate) orientation: Orientation,
}

impl PropagatorConstructor for OneNeighbourPropagatorArgs {
    type PropagatorImpl = OneNeighbourPropagator;

    fn create(self, mut context: PropagatorConstructorContext) -> Self::PropagatorImpl {
        let OneNeighbourPropagatorArgs {
            graph,
            but,
            orientation,
        } = self;

        context.register_graph(graph, DomainEvents::ANY_STRUCTURE, LocalId::from(0));

        OneNeighbourPropagator {
            graph,
            but,
            orientation,
        }
    }
}

/// Every node in the graph, except `but`, has exactly one successor (or predecessor, depending on
/// the [`Orientation`]); `but` has none.
///
/// A node which can no longer get a neighbour is removed from the graph, or causes a conflict when
/// it is in the kernel. A kernel node with a single candidate neighbour gets that arc in the
/// kernel.
#[derive(Clone, Copy, Debug)]
pub(crate) struct OneNeighbourPropagator {
    graph: GraphId,
    but: u32,
    orientation: Orientation,
}

impl OneNeighbourPropagator {
    fn filter_node(&self, context: &mut PropagationContextMut, node: u32) -> PropagationStatusCP {
        let envelope = self.orientation.envelope_neighbours(&*context, self.graph, node);

        if node == self.but {
            for neighbour in envelope {
                let (from, to) = self.orientation.arc(node, neighbour);
                let _ = context.remove_arc_from_envelope(self.graph, from, to)?;
            }
            return Ok(());
        }

        let kernel = self.orientation.kernel_neighbours(&*context, self.graph, node);
        match kernel.as_slice() {
            [] => {}
            [chosen] => {
                for &neighbour in envelope.iter().filter(|&neighbour| neighbour != chosen) {
                    let (from, to) = self.orientation.arc(node, neighbour);
                    let _ = context.remove_arc_from_envelope(self.graph, from, to)?;
                }
                return Ok(());
            }
            _ => return Err(context.conflict()),
        }

        match envelope.as_slice() {
            [] if context.node_in_kernel(self.graph, node) => Err(context.conflict()),
            [] => {
                let _ = context.remove_node_from_envelope(self.graph, node)?;
                Ok(())
            }
            [only] if context.node_in_kernel(self.graph, node) => {
                let (from, to) = self.orientation.arc(node, *only);
                let _ = context.add_arc_to_kernel(self.graph, from, to)?;
                Ok(())
            }
            _ => Ok(()),
        }
    }
}

impl Propagator for OneNeighbourPropagator {
    fn name(&self) -> &str {
        match self.orientation {
            Orientation::Successors => "OneSuccessorBut",
            Orientation::Predecessors => "OnePredecessorBut",
        }
    }

    fn initial_propagate(&mut self, mut context: PropagationContextMut) -> PropagationStatusCP {
        for node in 0..context.num_nodes(self.graph) {
            if context.node_in_envelope(self.graph, node) {
                self.filter_node(&mut context, node)?;
            }
        }

        Ok(())
    }

    fn is_entailed(&self, context: PropagationContext) -> Entailment {
        if !context.is_graph_instantiated(self.graph) {
            return Entailment::Undefined;
        }

        let satisfied = (0..context.num_nodes(self.graph))
            .filter(|&node| context.node_in_kernel(self.graph, node))
            .all(|node| {
                let expected = if node == self.but { 0 } else { 1 };
                self.orientation
                    .kernel_neighbours(&context, self.graph, node)
                    .len()
                    == expected
            });

        if satisfied {
            Entailment::True
        } else {
            Entailment::False
        }
    }
}
