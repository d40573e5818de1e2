//! # Squash
//! Squash is a constraint programming solver which interleaves propagation with depth-first
//! search. This crate bundles the engine ([`core`]) with a number of sample models which are
//! solved by the `squash-solver` binary.
//!
//! The solver supports integer variables (and affine views over them), set variables and graph
//! variables together with the following constraints:
//! * [All-different][crate::core::constraints::all_different], with a configurable
//!   [strength][crate::core::constraints::AllDifferentStrength].
//! * Arithmetic constraints: [linear inequalities][crate::core::constraints::less_than_or_equals],
//!   [linear equalities][crate::core::constraints::equals] and
//!   [disequalities][crate::core::constraints::binary_not_equals].
//! * Set constraints: [subset][crate::core::constraints::subset_eq],
//!   [disjointness][crate::core::constraints::disjoint] and
//!   [membership][crate::core::constraints::member].
//! * Graph constraints, most notably the [Hamiltonian
//!   path][crate::core::constraints::hamiltonian_path].
//!
//! # Using Squash
//! ```rust
//! # use squash_solver::core::constraints;
//! # use squash_solver::core::results::ProblemSolution;
//! # use squash_solver::core::results::SatisfactionResult;
//! # use squash_solver::core::termination::Indefinite;
//! # use squash_solver::Solver;
//! let mut solver = Solver::default();
//!
//! let x = solver.new_bounded_integer(0, 3).expect("valid bounds");
//! let y = solver.new_bounded_integer(0, 3).expect("valid bounds");
//!
//! solver
//!     .add_constraint(constraints::binary_not_equals(x, y))
//!     .post()
//!     .expect("satisfiable");
//!
//! let mut brancher = solver.default_brancher();
//! match solver.satisfy(&mut brancher, &mut Indefinite) {
//!     SatisfactionResult::Satisfiable(solution) => {
//!         assert_ne!(solution.get_integer_value(x), solution.get_integer_value(y))
//!     }
//!     _ => panic!("the problem has a solution"),
//! }
//! ```
pub mod models;

pub use squash_core as core;
pub use squash_core::Solver;
