use crate::basic_types::Random;
use crate::engine::variables::DomainId;
use crate::engine::variables::GraphId;
use crate::engine::variables::SetId;
use crate::engine::Assignments;
use crate::propagation::HasAssignments;
#[cfg(doc)]
use crate::propagation::ReadDomains;

/// The context provided to the [`Brancher`](super::Brancher), it allows the retrieval of domain
/// values of variables (through [`ReadDomains`]) and access to the random generator of the solver.
#[derive(Debug)]
pub struct SelectionContext<'a> {
    assignments: &'a Assignments,
    random_generator: &'a mut dyn Random,
}

impl<'a> SelectionContext<'a> {
    pub(crate) fn new(assignments: &'a Assignments, random_generator: &'a mut dyn Random) -> Self {
        SelectionContext {
            assignments,
            random_generator,
        }
    }

    pub fn random(&mut self) -> &mut dyn Random {
        self.random_generator
    }

    /// Returns all currently defined integer domains.
    pub fn get_domains(&self) -> impl Iterator<Item = DomainId> {
        self.assignments.get_domains()
    }

    pub fn get_sets(&self) -> impl Iterator<Item = SetId> {
        self.assignments.get_sets()
    }

    pub fn get_graphs(&self) -> impl Iterator<Item = GraphId> {
        self.assignments.get_graphs()
    }

    #[cfg(test)]
    pub(crate) fn create_for_testing(domains: Vec<(i32, i32)>) -> Assignments {
        let mut assignments = Assignments::default();

        for (lower_bound, upper_bound) in domains {
            let values = (lower_bound..=upper_bound).collect::<Vec<_>>();
            let _ = assignments.grow_enumerated(&values);
        }

        assignments
    }
}

impl HasAssignments for SelectionContext<'_> {
    fn assignments(&self) -> &Assignments {
        self.assignments
    }
}
