use crate::basic_types::Trail;
use crate::containers::BitSet;
use crate::engine::cp::DomainEvent;
use crate::engine::cp::TrailEntry;
use crate::engine::variables::GraphId;
use crate::engine::EmptyDomain;
use crate::squash_assert_simple;

/// The domain of a directed graph variable over the nodes `0..num_nodes`.
///
/// Nodes and arcs each have an envelope (still possible) and a kernel (certainly present). An arc
/// can only be in the envelope while both of its end points are, and an arc in the kernel forces
/// both of its end points into the kernel.
#[derive(Clone, Debug)]
pub(crate) struct GraphDomain {
    num_nodes: u32,
    node_envelope: BitSet,
    node_kernel: BitSet,
    successor_envelope: Vec<BitSet>,
    predecessor_envelope: Vec<BitSet>,
    successor_kernel: Vec<BitSet>,
    predecessor_kernel: Vec<BitSet>,
    node_envelope_size: u32,
    node_kernel_size: u32,
    arc_envelope_size: u32,
    arc_kernel_size: u32,
}

impl GraphDomain {
    /// Creates a domain with every node and the given arcs in the envelope, and an empty kernel.
    /// The arcs have to be between existing nodes.
    pub(crate) fn new(num_nodes: u32, arcs: impl IntoIterator<Item = (u32, u32)>) -> GraphDomain {
        let size = num_nodes as usize;
        let empty_adjacency = vec![BitSet::new(size, false); size];

        let mut domain = GraphDomain {
            num_nodes,
            node_envelope: BitSet::new(size, true),
            node_kernel: BitSet::new(size, false),
            successor_envelope: empty_adjacency.clone(),
            predecessor_envelope: empty_adjacency.clone(),
            successor_kernel: empty_adjacency.clone(),
            predecessor_kernel: empty_adjacency,
            node_envelope_size: num_nodes,
            node_kernel_size: 0,
            arc_envelope_size: 0,
            arc_kernel_size: 0,
        };

        for (from, to) in arcs {
            squash_assert_simple!(from < num_nodes && to < num_nodes);
            if domain.successor_envelope[from as usize].insert(to as usize) {
                let _ = domain.predecessor_envelope[to as usize].insert(from as usize);
                domain.arc_envelope_size += 1;
            }
        }

        domain
    }

    pub(crate) fn num_nodes(&self) -> u32 {
        self.num_nodes
    }

    pub(crate) fn node_in_envelope(&self, node: u32) -> bool {
        self.node_envelope.contains(node as usize)
    }

    pub(crate) fn node_in_kernel(&self, node: u32) -> bool {
        self.node_kernel.contains(node as usize)
    }

    pub(crate) fn arc_in_envelope(&self, from: u32, to: u32) -> bool {
        from < self.num_nodes && self.successor_envelope[from as usize].contains(to as usize)
    }

    pub(crate) fn arc_in_kernel(&self, from: u32, to: u32) -> bool {
        from < self.num_nodes && self.successor_kernel[from as usize].contains(to as usize)
    }

    pub(crate) fn node_envelope_size(&self) -> u32 {
        self.node_envelope_size
    }

    pub(crate) fn node_kernel_size(&self) -> u32 {
        self.node_kernel_size
    }

    pub(crate) fn arc_envelope_size(&self) -> u32 {
        self.arc_envelope_size
    }

    pub(crate) fn arc_kernel_size(&self) -> u32 {
        self.arc_kernel_size
    }

    pub(crate) fn is_instantiated(&self) -> bool {
        self.node_envelope_size == self.node_kernel_size
            && self.arc_envelope_size == self.arc_kernel_size
    }

    pub(crate) fn successors_in_envelope(&self, node: u32) -> impl Iterator<Item = u32> + '_ {
        self.successor_envelope[node as usize]
            .iter()
            .map(|successor| successor as u32)
    }

    pub(crate) fn predecessors_in_envelope(&self, node: u32) -> impl Iterator<Item = u32> + '_ {
        self.predecessor_envelope[node as usize]
            .iter()
            .map(|predecessor| predecessor as u32)
    }

    pub(crate) fn successors_in_kernel(&self, node: u32) -> impl Iterator<Item = u32> + '_ {
        self.successor_kernel[node as usize]
            .iter()
            .map(|successor| successor as u32)
    }

    pub(crate) fn predecessors_in_kernel(&self, node: u32) -> impl Iterator<Item = u32> + '_ {
        self.predecessor_kernel[node as usize]
            .iter()
            .map(|predecessor| predecessor as u32)
    }

    pub(crate) fn iter_envelope_nodes(&self) -> impl Iterator<Item = u32> + '_ {
        self.node_envelope.iter().map(|node| node as u32)
    }

    pub(crate) fn iter_kernel_nodes(&self) -> impl Iterator<Item = u32> + '_ {
        self.node_kernel.iter().map(|node| node as u32)
    }

    pub(crate) fn remove_node_from_envelope(
        &mut self,
        graph_id: GraphId,
        node: u32,
        trail: &mut Trail<TrailEntry>,
    ) -> Result<Option<DomainEvent>, EmptyDomain> {
        squash_assert_simple!(node < self.num_nodes);

        if !self.node_in_envelope(node) {
            return Ok(None);
        }
        if self.node_in_kernel(node) {
            return Err(EmptyDomain);
        }

        // None of these arcs can be in the kernel since the node is not.
        let successors = self.successors_in_envelope(node).collect::<Vec<_>>();
        for successor in successors {
            self.remove_arc(graph_id, node, successor, trail);
        }
        let predecessors = self.predecessors_in_envelope(node).collect::<Vec<_>>();
        for predecessor in predecessors {
            self.remove_arc(graph_id, predecessor, node, trail);
        }

        let _ = self.node_envelope.remove(node as usize);
        self.node_envelope_size -= 1;
        trail.push(TrailEntry::NodeEnvelopeRemoval {
            graph: graph_id,
            node,
        });

        Ok(Some(DomainEvent::EnvelopeRemoval))
    }

    pub(crate) fn add_node_to_kernel(
        &mut self,
        graph_id: GraphId,
        node: u32,
        trail: &mut Trail<TrailEntry>,
    ) -> Result<Option<DomainEvent>, EmptyDomain> {
        squash_assert_simple!(node < self.num_nodes);

        if !self.node_in_envelope(node) {
            return Err(EmptyDomain);
        }
        if self.node_in_kernel(node) {
            return Ok(None);
        }

        self.add_node(graph_id, node, trail);

        Ok(Some(DomainEvent::KernelAddition))
    }

    pub(crate) fn remove_arc_from_envelope(
        &mut self,
        graph_id: GraphId,
        from: u32,
        to: u32,
        trail: &mut Trail<TrailEntry>,
    ) -> Result<Option<DomainEvent>, EmptyDomain> {
        if !self.arc_in_envelope(from, to) {
            return Ok(None);
        }
        if self.arc_in_kernel(from, to) {
            return Err(EmptyDomain);
        }

        self.remove_arc(graph_id, from, to, trail);

        Ok(Some(DomainEvent::EnvelopeRemoval))
    }

    pub(crate) fn add_arc_to_kernel(
        &mut self,
        graph_id: GraphId,
        from: u32,
        to: u32,
        trail: &mut Trail<TrailEntry>,
    ) -> Result<Option<DomainEvent>, EmptyDomain> {
        if !self.arc_in_envelope(from, to) {
            return Err(EmptyDomain);
        }
        if self.arc_in_kernel(from, to) {
            return Ok(None);
        }

        if !self.node_in_kernel(from) {
            self.add_node(graph_id, from, trail);
        }
        if !self.node_in_kernel(to) {
            self.add_node(graph_id, to, trail);
        }

        let _ = self.successor_kernel[from as usize].insert(to as usize);
        let _ = self.predecessor_kernel[to as usize].insert(from as usize);
        self.arc_kernel_size += 1;
        trail.push(TrailEntry::ArcKernelAddition {
            graph: graph_id,
            from,
            to,
        });

        Ok(Some(DomainEvent::KernelAddition))
    }

    pub(crate) fn undo_node_envelope_removal(&mut self, node: u32) {
        let _ = self.node_envelope.insert(node as usize);
        self.node_envelope_size += 1;
    }

    pub(crate) fn undo_node_kernel_addition(&mut self, node: u32) {
        let _ = self.node_kernel.remove(node as usize);
        self.node_kernel_size -= 1;
    }

    pub(crate) fn undo_arc_envelope_removal(&mut self, from: u32, to: u32) {
        let _ = self.successor_envelope[from as usize].insert(to as usize);
        let _ = self.predecessor_envelope[to as usize].insert(from as usize);
        self.arc_envelope_size += 1;
    }

    pub(crate) fn undo_arc_kernel_addition(&mut self, from: u32, to: u32) {
        let _ = self.successor_kernel[from as usize].remove(to as usize);
        let _ = self.predecessor_kernel[to as usize].remove(from as usize);
        self.arc_kernel_size -= 1;
    }

    fn add_node(&mut self, graph_id: GraphId, node: u32, trail: &mut Trail<TrailEntry>) {
        let _ = self.node_kernel.insert(node as usize);
        self.node_kernel_size += 1;
        trail.push(TrailEntry::NodeKernelAddition {
            graph: graph_id,
            node,
        });
    }

    fn remove_arc(&mut self, graph_id: GraphId, from: u32, to: u32, trail: &mut Trail<TrailEntry>) {
        let _ = self.successor_envelope[from as usize].remove(to as usize);
        let _ = self.predecessor_envelope[to as usize].remove(from as usize);
        self.arc_envelope_size -= 1;
        trail.push(TrailEntry::ArcEnvelopeRemoval {
            graph: graph_id,
            from,
            to,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ID: GraphId = GraphId::new(0);

    fn triangle() -> GraphDomain {
        GraphDomain::new(3, [(0, 1), (1, 2), (2, 0), (0, 2)])
    }

    #[test]
    fn removing_a_node_removes_its_arcs() {
        let mut trail = Trail::default();
        let mut domain = triangle();

        assert_eq!(
            Ok(Some(DomainEvent::EnvelopeRemoval)),
            domain.remove_node_from_envelope(ID, 2, &mut trail)
        );

        assert!(!domain.arc_in_envelope(1, 2));
        assert!(!domain.arc_in_envelope(2, 0));
        assert!(!domain.arc_in_envelope(0, 2));
        assert!(domain.arc_in_envelope(0, 1));
        assert_eq!(1, domain.arc_envelope_size());
        assert_eq!(2, domain.node_envelope_size());
    }

    #[test]
    fn a_kernel_arc_forces_its_end_points() {
        let mut trail = Trail::default();
        let mut domain = triangle();

        let _ = domain.add_arc_to_kernel(ID, 1, 2, &mut trail);

        assert!(domain.node_in_kernel(1));
        assert!(domain.node_in_kernel(2));
        assert!(!domain.node_in_kernel(0));
        assert_eq!(Err(EmptyDomain), domain.remove_node_from_envelope(ID, 2, &mut trail));
        assert_eq!(Err(EmptyDomain), domain.remove_arc_from_envelope(ID, 1, 2, &mut trail));
    }

    #[test]
    fn arcs_outside_the_envelope_cannot_join_the_kernel() {
        let mut trail = Trail::default();
        let mut domain = triangle();

        assert_eq!(Err(EmptyDomain), domain.add_arc_to_kernel(ID, 1, 0, &mut trail));
        assert!(trail.is_empty());
    }

    #[test]
    fn undoing_a_node_removal_restores_its_arcs() {
        let mut trail = Trail::default();
        let mut domain = triangle();

        let _ = domain.remove_node_from_envelope(ID, 0, &mut trail);
        for entry in trail.undo_to(Default::default()) {
            match entry {
                TrailEntry::NodeEnvelopeRemoval { node, .. } => {
                    domain.undo_node_envelope_removal(node)
                }
                TrailEntry::ArcEnvelopeRemoval { from, to, .. } => {
                    domain.undo_arc_envelope_removal(from, to)
                }
                _ => unreachable!(),
            }
        }

        assert_eq!(4, domain.arc_envelope_size());
        assert_eq!(3, domain.node_envelope_size());
        assert_eq!(vec![1, 2], domain.successors_in_envelope(0).collect::<Vec<_>>());
        assert_eq!(vec![2], domain.predecessors_in_envelope(0).collect::<Vec<_>>());
    }
}
