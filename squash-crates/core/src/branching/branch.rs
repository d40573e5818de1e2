use std::fmt::Display;

use crate::engine::predicates::Predicate;
use crate::engine::variables::GraphId;
use crate::engine::variables::SetId;
use crate::engine::Assignments;
use crate::engine::EmptyDomain;
use crate::squash_assert_simple;

/// A single search decision; applying it narrows exactly one domain.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Decision {
    /// Post a predicate over an integer domain, e.g. `[x == 5]` or `[x <= 3]`.
    Integer(Predicate),
    /// Add `element` to the kernel of `set`.
    Include { set: SetId, element: i32 },
    /// Remove `element` from the envelope of `set`.
    Exclude { set: SetId, element: i32 },
    /// Add `node` to the kernel of `graph`.
    NodeIn { graph: GraphId, node: u32 },
    /// Remove `node` (and its incident arcs) from the envelope of `graph`.
    NodeOut { graph: GraphId, node: u32 },
    /// Add the arc `(from, to)` to the kernel of `graph`.
    ArcIn { graph: GraphId, from: u32, to: u32 },
    /// Remove the arc `(from, to)` from the envelope of `graph`.
    ArcOut { graph: GraphId, from: u32, to: u32 },
}

impl Decision {
    /// Applies the decision to the domains. A decision which empties a domain reports
    /// [`EmptyDomain`]; this is a regular failure of the search, not an error.
    pub(crate) fn apply(self, assignments: &mut Assignments) -> Result<bool, EmptyDomain> {
        match self {
            Decision::Integer(predicate) => assignments.post_predicate(predicate),
            Decision::Include { set, element } => assignments.add_to_kernel(set, element),
            Decision::Exclude { set, element } => assignments.remove_from_envelope(set, element),
            Decision::NodeIn { graph, node } => assignments.add_node_to_kernel(graph, node),
            Decision::NodeOut { graph, node } => assignments.remove_node_from_envelope(graph, node),
            Decision::ArcIn { graph, from, to } => assignments.add_arc_to_kernel(graph, from, to),
            Decision::ArcOut { graph, from, to } => {
                assignments.remove_arc_from_envelope(graph, from, to)
            }
        }
    }
}

impl From<Predicate> for Decision {
    fn from(predicate: Predicate) -> Self {
        Decision::Integer(predicate)
    }
}

impl Display for Decision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Decision::Integer(predicate) => write!(f, "{predicate}"),
            Decision::Include { set, element } => write!(f, "[{element} in {set}]"),
            Decision::Exclude { set, element } => write!(f, "[{element} notin {set}]"),
            Decision::NodeIn { graph, node } => write!(f, "[node {node} in {graph}]"),
            Decision::NodeOut { graph, node } => write!(f, "[node {node} notin {graph}]"),
            Decision::ArcIn { graph, from, to } => write!(f, "[({from}, {to}) in {graph}]"),
            Decision::ArcOut { graph, from, to } => write!(f, "[({from}, {to}) notin {graph}]"),
        }
    }
}

/// An ordered list of alternatives which together cover the part of the search space below the
/// current node; the search loop tries them one after the other.
///
/// A branch always has at least two alternatives.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Branch {
    alternatives: Vec<Decision>,
}

impl Branch {
    pub fn new(alternatives: Vec<Decision>) -> Branch {
        squash_assert_simple!(
            alternatives.len() >= 2,
            "A branch requires at least two alternatives, got {alternatives:?}"
        );

        Branch { alternatives }
    }

    /// Creates the two-way branch `[first, second]`, e.g. `[x == v, x != v]`.
    pub fn binary(first: impl Into<Decision>, second: impl Into<Decision>) -> Branch {
        Branch {
            alternatives: vec![first.into(), second.into()],
        }
    }

    pub fn alternatives(&self) -> &[Decision] {
        &self.alternatives
    }

    pub(crate) fn get(&self, index: usize) -> Option<Decision> {
        self.alternatives.get(index).copied()
    }
}
