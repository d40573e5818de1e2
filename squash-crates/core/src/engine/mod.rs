pub(crate) mod constraint_satisfaction_solver;
pub(crate) mod cp;
pub(crate) mod predicates;
mod solver_statistics;
pub(crate) mod termination;
pub(crate) mod variable_names;
pub(crate) mod variables;

pub use constraint_satisfaction_solver::ConstraintSatisfactionSolver;
pub use constraint_satisfaction_solver::SolverOptions;
#[cfg(test)]
pub(crate) use cp::test_solver;
pub use cp::Assignments;
pub use cp::EmptyDomain;
pub(crate) use cp::PropagationEngine;
pub use solver_statistics::Measures;
