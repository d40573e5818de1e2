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

/// The [`PropagatorConstructor`] for the [`PathNoCyclePropagator`].
#[derive(Clone, Copy, Debug)]
pub(crate) struct PathNoCyclePropagatorArgs {
    pub(crate) graph: GraphId,
    pub(crate) source: u32,
    pub(crate) sink: u32,
}

impl PropagatorConstructor for PathNoCyclePropagatorArgs {
    type PropagatorImpl = PathNoCyclePropagator;

    fn create(self, mut context: PropagatorConstructorContext) -> Self::PropagatorImpl {
        let PathNoCyclePropagatorArgs {
            graph,
            source,
            sink,
        } = self;

        context.register_graph(graph, DomainEvents::KERNEL_ADDITION, LocalId::from(0));

        PathNoCyclePropagator {
            graph,
            source,
            sink,
        }
    }
}

/// Forbids cycles in a graph which should form a path from `source` to `sink`.
///
/// No arc may enter `source` or leave `sink`, and for every chain of kernel arcs the arc closing
/// it into a cycle is removed. The chains are followed through the first kernel neighbour, which
/// is exact when every node has at most one successor and one predecessor in the kernel.
#[derive(Clone, Copy, Debug)]
pub(crate) struct PathNoCyclePropagator {
    graph: GraphId,
    source: u32,
    sink: u32,
}

impl PathNoCyclePropagator {
    /// Follows the kernel arcs backwards from `node`, returning the first node of the chain or
    /// `None` when the chain loops back to `node`.
    fn chain_start(&self, context: &impl ReadDomains, node: u32) -> Option<u32> {
        let mut current = node;
        for _ in 0..context.num_nodes(self.graph) {
            match context.predecessors_in_kernel(self.graph, current).next() {
                Some(predecessor) if predecessor == node => return None,
                Some(predecessor) => current = predecessor,
                None => return Some(current),
            }
        }

        // More steps than nodes, so the walk ended up in a cycle which does not contain `node`
        None
    }

    fn chain_end(&self, context: &impl ReadDomains, node: u32) -> Option<u32> {
        let mut current = node;
        for _ in 0..context.num_nodes(self.graph) {
            match context.successors_in_kernel(self.graph, current).next() {
                Some(successor) if successor == node => return None,
                Some(successor) => current = successor,
                None => return Some(current),
            }
        }

        None
    }

    fn has_kernel_cycle(&self, context: &impl ReadDomains) -> bool {
        (0..context.num_nodes(self.graph))
            .filter(|&node| context.node_in_kernel(self.graph, node))
            .any(|node| self.chain_start(context, node).is_none())
    }
}

impl Propagator for PathNoCyclePropagator {
    fn name(&self) -> &str {
        "PathNoCycle"
    }

    fn initial_propagate(&mut self, mut context: PropagationContextMut) -> PropagationStatusCP {
        let into_source = context
            .predecessors_in_envelope(self.graph, self.source)
            .collect::<Vec<_>>();
        for predecessor in into_source {
            let _ = context.remove_arc_from_envelope(self.graph, predecessor, self.source)?;
        }

        let out_of_sink = context
            .successors_in_envelope(self.graph, self.sink)
            .collect::<Vec<_>>();
        for successor in out_of_sink {
            let _ = context.remove_arc_from_envelope(self.graph, self.sink, successor)?;
        }

        for node in 0..context.num_nodes(self.graph) {
            let _ = context.remove_arc_from_envelope(self.graph, node, node)?;

            // Only the first node of every chain closes it
            let has_successor = context.successors_in_kernel(self.graph, node).next().is_some();
            let has_predecessor = context
                .predecessors_in_kernel(self.graph, node)
                .next()
                .is_some();
            if !has_successor || has_predecessor {
                continue;
            }

            let Some(end) = self.chain_end(&context, node) else {
                return Err(context.conflict());
            };
            let _ = context.remove_arc_from_envelope(self.graph, end, node)?;
        }

        if self.has_kernel_cycle(&context) {
            return Err(context.conflict());
        }

        Ok(())
    }

    fn is_entailed(&self, context: PropagationContext) -> Entailment {
        if !context.is_graph_instantiated(self.graph) {
            return Entailment::Undefined;
        }

        let enters_source = context
            .predecessors_in_kernel(self.graph, self.source)
            .next()
            .is_some();
        let leaves_sink = context
            .successors_in_kernel(self.graph, self.sink)
            .next()
            .is_some();

        if enters_source || leaves_sink || self.has_kernel_cycle(&context) {
            Entailment::False
        } else {
            Entailment::True
        }
    }
}
