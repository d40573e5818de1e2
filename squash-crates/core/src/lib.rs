//! # Squash
//! Squash is a constraint programming solver which combines propagation with depth-first search.
//! Problems are modelled over integer variables (and affine views over them), set variables and
//! graph variables, and can be solved for a single solution, for all solutions or to optimality.
//!
//! # Example
//! ```rust
//! # use squash_core::constraints;
//! # use squash_core::results::ProblemSolution;
//! # use squash_core::results::SatisfactionResult;
//! # use squash_core::termination::Indefinite;
//! # use squash_core::Solver;
//! // We create the solver with default options
//! let mut solver = Solver::default();
//!
//! // We create 3 variables
//! let x = solver.new_bounded_integer(5, 10).expect("valid bounds");
//! let y = solver.new_bounded_integer(-3, 15).expect("valid bounds");
//! let z = solver.new_bounded_integer(7, 25).expect("valid bounds");
//!
//! // We create the constraint:
//! // - x + y + z = 17
//! solver
//!     .add_constraint(constraints::equals([x, y, z], 17))
//!     .post()
//!     .expect("satisfiable at the root");
//!
//! // We create a brancher which searches over all variables of the solver
//! let mut brancher = solver.default_brancher();
//!
//! let result = solver.satisfy(&mut brancher, &mut Indefinite);
//! if let SatisfactionResult::Satisfiable(solution) = result {
//!     let value_x = solution.get_integer_value(x);
//!     let value_y = solution.get_integer_value(y);
//!     let value_z = solution.get_integer_value(z);
//!
//!     // The constraint should hold for this solution
//!     assert_eq!(value_x + value_y + value_z, 17);
//! } else {
//!     panic!("This problem should have a solution")
//! }
//! ```
pub(crate) mod basic_types;
pub mod containers;
pub(crate) mod engine;
pub(crate) mod math;
pub(crate) mod propagators;
pub(crate) mod squash_asserts;

pub mod branching;
pub mod constraints;
pub mod optimisation;
pub mod propagation;
pub mod statistics;

pub use convert_case;
pub use rand;

// We declare a private module with public use, so that all exports from API are exports directly
// from the crate.
//
// Example:
// `use squash_core::Solver;`
// vs.
// `use squash_core::api::Solver;`
mod api;

pub use api::*;

pub use crate::api::solver::DefaultBrancher;
pub use crate::api::solver::Solver;
pub use crate::basic_types::ConstraintOperationError;
pub use crate::basic_types::Contradiction;
pub use crate::basic_types::Random;
pub use crate::engine::Measures;
