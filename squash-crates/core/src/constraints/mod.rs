//! Defines the constraints that Squash provides out of the box which can be added to the
//! [`Solver`].
//!
//! A constraint is a relation over variables. In the solver, constraints are enforced through
//! propagators, and therefore constraints can be viewed as a collection of propagators.
//!
//! # Example
//! ```
//! # use squash_core::constraints;
//! # use squash_core::Solver;
//! let mut solver = Solver::default();
//!
//! let a = solver.new_bounded_integer(0, 3).expect("valid bounds");
//! let b = solver.new_bounded_integer(0, 3).expect("valid bounds");
//!
//! solver
//!     .add_constraint(constraints::equals([a, b], 0))
//!     .post()
//!     .expect("the constraint is satisfiable at the root");
//! ```

mod all_different;
mod arithmetic;
mod constraint_poster;
mod graph;
mod set;

pub use all_different::*;
pub use arithmetic::*;
pub use constraint_poster::*;
pub use graph::*;
pub use set::*;

use crate::propagation::PropagatorConstructor;
use crate::ConstraintOperationError;
use crate::Solver;

/// A [`Constraint`] is a relation over variables. It disqualifies certain partial assignments of
/// making it into a solution of the problem.
///
/// For example, the constraint `a = b` over two variables `a` and `b` only allows assignments to
/// `a` and `b` of the same value, and rejects any assignment where `a` and `b` differ.
pub trait Constraint {
    /// Add the [`Constraint`] to the [`Solver`].
    ///
    /// This method returns a [`ConstraintOperationError`] if the constraint is malformed or if
    /// its addition led to a root-level conflict.
    fn post(self, solver: &mut Solver) -> Result<(), ConstraintOperationError>;
}

impl<Constructor> Constraint for Constructor
where
    Constructor: PropagatorConstructor,
    Constructor::PropagatorImpl: 'static,
{
    fn post(self, solver: &mut Solver) -> Result<(), ConstraintOperationError> {
        solver.add_propagator(self)
    }
}

impl<C: Constraint> Constraint for Vec<C> {
    fn post(self, solver: &mut Solver) -> Result<(), ConstraintOperationError> {
        self.into_iter().try_for_each(|c| c.post(solver))
    }
}
