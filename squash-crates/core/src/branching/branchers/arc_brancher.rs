use crate::branching::Branch;
use crate::branching::Brancher;
use crate::branching::Decision;
use crate::branching::SelectionContext;
use crate::engine::variables::GraphId;
use crate::engine::Assignments;
use crate::propagation::HasAssignments;
use crate::propagation::ReadDomains;

/// Determines which undecided arc the [`ArcBrancher`] branches on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArcSelection {
    /// The undecided arc `(i, j)` with the smallest `i`, and then the smallest `j`.
    Lexicographic,
    /// Follows the kernel path starting at `source` and branches on an undecided arc leaving its
    /// last node; falls back to [`ArcSelection::Lexicographic`] when that node has none.
    PathExtension { source: u32 },
    /// An undecided arc chosen uniformly at random.
    Random,
}

/// A [`Brancher`] over a single graph variable. An undecided arc (in the envelope but not in the
/// kernel) is first added to the kernel and otherwise removed from the envelope. Once all arcs are
/// decided, the remaining undecided nodes are branched on in ascending order.
#[derive(Debug, Clone)]
pub struct ArcBrancher {
    graph: GraphId,
    selection: ArcSelection,
}

impl ArcBrancher {
    pub fn new(graph: GraphId, selection: ArcSelection) -> Self {
        ArcBrancher { graph, selection }
    }

    fn end_of_kernel_path(&self, context: &SelectionContext, source: u32) -> u32 {
        let mut current = source;

        // Bounded by the number of nodes; the kernel may contain a cycle.
        for _ in 0..context.num_nodes(self.graph) {
            match context.successors_in_kernel(self.graph, current).next() {
                Some(next) if next != source => current = next,
                _ => break,
            }
        }

        current
    }

    fn select_arc(&self, context: &mut SelectionContext) -> Option<(u32, u32)> {
        match self.selection {
            ArcSelection::Lexicographic => {
                undecided_arcs(context.assignments(), self.graph).next()
            }
            ArcSelection::PathExtension { source } => {
                let end = self.end_of_kernel_path(context, source);

                context
                    .successors_in_envelope(self.graph, end)
                    .find(|&to| !context.arc_in_kernel(self.graph, end, to))
                    .map(|to| (end, to))
                    .or_else(|| undecided_arcs(context.assignments(), self.graph).next())
            }
            ArcSelection::Random => {
                let arcs = undecided_arcs(context.assignments(), self.graph).collect::<Vec<_>>();
                if arcs.is_empty() {
                    return None;
                }

                let index = context.random().generate_usize_in_range(0..arcs.len());
                Some(arcs[index])
            }
        }
    }
}

/// The arcs in the envelope but not in the kernel, in lexicographic order.
fn undecided_arcs(
    assignments: &Assignments,
    graph: GraphId,
) -> impl Iterator<Item = (u32, u32)> + '_ {
    assignments
        .graph_envelope_arcs(graph)
        .filter(move |&(from, to)| !assignments.graph_arc_in_kernel(graph, from, to))
}

impl Brancher for ArcBrancher {
    fn next_branch(&mut self, context: &mut SelectionContext) -> Option<Branch> {
        let graph = self.graph;

        if let Some((from, to)) = self.select_arc(context) {
            return Some(Branch::binary(
                Decision::ArcIn { graph, from, to },
                Decision::ArcOut { graph, from, to },
            ));
        }

        let node = context
            .assignments()
            .graph_envelope_nodes(graph)
            .find(|&node| !context.node_in_kernel(graph, node))?;

        Some(Branch::binary(
            Decision::NodeIn { graph, node },
            Decision::NodeOut { graph, node },
        ))
    }
}
