use crate::engine::variables::DomainId;
use crate::engine::variables::GraphId;
use crate::engine::variables::SetId;
use crate::engine::Assignments;
use crate::propagation::HasAssignments;
use crate::variables::IntegerVariable;

/// A trait which specifies the common behaviours of [`Solution`] and [`SolutionReference`].
pub trait ProblemSolution {
    /// Returns the number of defined [`DomainId`]s.
    fn num_domains(&self) -> usize;

    /// The value of an integer variable; the variable has to be fixed.
    fn get_integer_value<Var: IntegerVariable>(&self, var: Var) -> i32;

    /// The elements of a set variable, in ascending order.
    fn get_set_value(&self, set: SetId) -> Vec<i32>;

    /// The arcs of a graph variable, ordered by source and then by target.
    fn get_graph_arcs(&self, graph: GraphId) -> Vec<(u32, u32)>;

    /// The nodes of a graph variable, in ascending order.
    fn get_graph_nodes(&self, graph: GraphId) -> Vec<u32>;
}

impl<T: HasAssignments> ProblemSolution for T {
    fn num_domains(&self) -> usize {
        self.assignments().num_integer_domains()
    }

    fn get_integer_value<Var: IntegerVariable>(&self, var: Var) -> i32 {
        let assignments = self.assignments();
        let lower_bound = var.lower_bound(assignments);
        assert_eq!(
            lower_bound,
            var.upper_bound(assignments),
            "Expected retrieved integer variable from solution to be assigned"
        );

        lower_bound
    }

    fn get_set_value(&self, set: SetId) -> Vec<i32> {
        self.assignments().iter_set_kernel(set).collect()
    }

    fn get_graph_arcs(&self, graph: GraphId) -> Vec<(u32, u32)> {
        self.assignments().graph_kernel_arcs(graph).collect()
    }

    fn get_graph_nodes(&self, graph: GraphId) -> Vec<u32> {
        self.assignments().graph_kernel_nodes(graph).collect()
    }
}

/// A solution which keeps reference to its inner structures.
#[derive(Debug, Copy, Clone)]
pub struct SolutionReference<'a> {
    assignments: &'a Assignments,
}

impl<'a> SolutionReference<'a> {
    pub(crate) fn new(assignments: &'a Assignments) -> SolutionReference<'a> {
        SolutionReference { assignments }
    }

    pub fn get_domains(&self) -> impl Iterator<Item = DomainId> + 'a {
        self.assignments.get_domains()
    }
}

/// A solution which takes ownership of its inner structures.
///
/// Implements [`ProblemSolution`].
#[derive(Clone, Debug, Default)]
pub struct Solution {
    assignments: Assignments,
}

impl Solution {
    pub fn get_domains(&self) -> impl Iterator<Item = DomainId> + '_ {
        self.assignments.get_domains()
    }

    pub fn as_reference(&self) -> SolutionReference<'_> {
        SolutionReference {
            assignments: &self.assignments,
        }
    }

    pub fn contains_domain_id(&self, domain_id: DomainId) -> bool {
        (domain_id.id as usize) < self.assignments.num_integer_domains()
    }
}

impl From<SolutionReference<'_>> for Solution {
    fn from(value: SolutionReference) -> Self {
        Self {
            assignments: value.assignments.clone(),
        }
    }
}

impl<'a> HasAssignments for SolutionReference<'a> {
    fn assignments(&self) -> &'a Assignments {
        self.assignments
    }
}

impl HasAssignments for Solution {
    fn assignments(&self) -> &Assignments {
        &self.assignments
    }
}
