mod outputs;
pub(crate) mod solver;

pub mod results {
    //! Contains the outputs of solving using the [`Solver`].
    //!
    //! We differentiate between 3 different types of results:
    //! - For a **satisfaction** problem ([`SatisfactionResult`])
    //! - For an **optimisation** problem ([`OptimisationResult`])
    //! - For the **enumeration** of solutions ([`solution_iterator::IteratedSolution`])
    //!
    //! Solutions are read through the [`ProblemSolution`] trait, which is implemented both by the
    //! owned [`Solution`] and by the borrowed [`SolutionReference`].
    pub use crate::api::outputs::solution_iterator;
    pub use crate::api::outputs::OptimisationResult;
    pub use crate::api::outputs::ProblemSolution;
    pub use crate::api::outputs::SatisfactionResult;
    pub use crate::api::outputs::SolutionReference;
    pub use crate::basic_types::Solution;
    #[cfg(doc)]
    use crate::Solver;
}

pub mod variables {
    //! Contains the variables which are used by the [`Solver`].
    //!
    //! A variable, in the context of the solver, is a view onto a domain. It may forward domain
    //! information unaltered, or apply transformations which can be performed without the need of
    //! constraints.
    //!
    //! We define 3 types of variables:
    //! - Integer Variables ([`IntegerVariable`]) - These are represented by [`DomainId`]s when
    //!   interacting with the [`Solver`]. These variables can be created using
    //!   [`Solver::new_bounded_integer`] when creating a variable with the domain between a
    //!   lower-bound and an upper-bound or using [`Solver::new_enumerated_integer`] when creating
    //!   a variable with holes in the domain. These variables can be transformed (according to the
    //!   trait [`TransformableVariable`]) to create an [`AffineView`].
    //! - Set Variables ([`SetId`]) - A set of integers between a kernel (the elements which are
    //!   certainly included) and an envelope (the elements which may still be included), created
    //!   using [`Solver::new_set`].
    //! - Graph Variables ([`GraphId`]) - A directed graph over a fixed number of nodes, again
    //!   between a kernel and an envelope of nodes and arcs, created using [`Solver::new_graph`].
    pub use crate::engine::variables::AffineView;
    pub use crate::engine::variables::DomainId;
    pub use crate::engine::variables::GraphId;
    pub use crate::engine::variables::IntegerVariable;
    pub use crate::engine::variables::SetId;
    pub use crate::engine::variables::TransformableVariable;
    pub use crate::engine::variables::VariableId;
    #[cfg(doc)]
    use crate::Solver;
}

pub mod options {
    //! Contains the options which can be passed to the [`Solver`].
    //!
    //! These influence the following aspects:
    //! - The random generator used by randomised branching strategies
    //! - The strength of the all-different constraint
    //! - The direction of optimisation
    pub use crate::constraints::AllDifferentStrength;
    pub use crate::engine::SolverOptions;
    pub use crate::optimisation::OptimisationDirection;
    #[cfg(doc)]
    use crate::Solver;
}

pub mod termination {
    //! Contains the conditions which are used to determine when the [`Solver`] should terminate
    //! even when the state of the satisfaction/optimization problem is unknown.
    //!
    //! The main [`TerminationCondition`] is a condition which is polled by the [`Solver`] during
    //! the search process. It indicates when the [`Solver`] should stop, even if no definitive
    //! conclusions have been made.
    //!
    //! The most common example would be [`TimeBudget`], which terminates the [`Solver`] whenever
    //! the time budget is exceeded. Conditions can be joined with a [`Combinator`].
    pub use crate::engine::termination::combinator::*;
    pub use crate::engine::termination::fail_budget::*;
    pub use crate::engine::termination::indefinite::*;
    pub use crate::engine::termination::node_budget::*;
    pub use crate::engine::termination::solution_budget::*;
    pub use crate::engine::termination::time_budget::*;
    pub use crate::engine::termination::TerminationCondition;
    #[cfg(doc)]
    use crate::Solver;
}

pub mod predicates {
    //! Containts structures which represent certain [predicates](https://en.wikipedia.org/wiki/Predicate_(mathematical_logic)).
    //!
    //! The solver only utilizes atomic constraints over integer variables, of the form
    //! `[x >= v]`, `[x <= v]`, `[x == v]`, and `[x != v]`. They are used as the alternatives of a
    //! branching decision and as the objective cut of branch-and-bound, and they are most easily
    //! created with the [`predicate!`](crate::predicate) macro.
    pub use crate::engine::predicates::Predicate;
    pub use crate::engine::predicates::PredicateConstructor;
}

#[doc(hidden)]
pub mod asserts {
    pub use crate::squash_assert_advanced;
    pub use crate::squash_assert_eq_simple;
    pub use crate::squash_assert_extreme;
    pub use crate::squash_assert_moderate;
    pub use crate::squash_assert_simple;
    pub use crate::squash_asserts::SQUASH_ASSERT_ADVANCED;
    pub use crate::squash_asserts::SQUASH_ASSERT_EXTREME;
    pub use crate::squash_asserts::SQUASH_ASSERT_LEVEL_DEFINITION;
    pub use crate::squash_asserts::SQUASH_ASSERT_MODERATE;
    pub use crate::squash_asserts::SQUASH_ASSERT_SIMPLE;
}
