use thiserror::Error;

#[cfg(doc)]
use crate::Solver;

/// Errors related to building a model in the [`Solver`].
///
/// These errors are fatal for the model: the solver does not attempt to recover from them, and
/// once a root-level infeasibility has been detected every later operation reports
/// [`ConstraintOperationError::InfeasibleState`].
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum ConstraintOperationError {
    /// A constraint was attempted to be added while the [`Solver`] was in an infeasible state.
    #[error("Adding constraint failed because the solver is in an infeasible state")]
    InfeasibleState,
    /// Adding a propagator led to infeasibility at the root.
    #[error("Adding the constraint failed because it is infeasible at the root")]
    InfeasiblePropagator,
    /// A variable was created with a lower bound exceeding its upper bound.
    #[error("Cannot create a variable with lower bound {lower_bound} and upper bound {upper_bound}")]
    InvalidBounds { lower_bound: i32, upper_bound: i32 },
    /// A variable was created from an empty collection of values.
    #[error("Cannot create a variable without any values")]
    EmptyValueList,
    /// A constraint was created without any variables in its scope.
    #[error("Cannot create a constraint over an empty scope")]
    EmptyScope,
    /// The same variable occurs twice in a scope which requires distinct variables.
    #[error("The scope of the constraint contains a duplicate variable")]
    DuplicateVariable,
    /// A graph node outside of the graph was referenced.
    #[error("Node {node} does not exist in a graph with {num_nodes} nodes")]
    NodeOutOfRange { node: u32, num_nodes: u32 },
}
