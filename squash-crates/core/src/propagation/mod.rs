//! Contains the main building blocks for propagators.
//!
//! # Background
//!
//! A propagator takes as input a set of variables (<code>x<sub>i</sub> ∈ X</code>) and for each
//! variable a corresponding domain (<code>D<sub>i</sub> ∈ D</code>); it can then be seen as a
//! function which maps `D ↦ D'` such that <code>D'<sub>i</sub> ⊆ D<sub>i</sub></code> for all
//! variables (i.e. the domain of a variable either remains the same after applying the propagator
//! or it becomes a subset of the domain before applying the propagator).
//!
//! A propagator is said to be at fix-point if applying it once more does not change any domain.
//!
//! # Practical
//!
//! Each concrete propagator implements [`Propagator`]. [`Propagator::initial_propagate`] is called
//! once when the propagator is posted and filters over the whole scope;
//! [`Propagator::propagate`] is called for every event the propagator subscribed to, together
//! with the [`LocalId`] of the variable on which it happened. By default it performs the initial
//! propagation again.
//!
//! A propagator is created by a [`PropagatorConstructor`], which registers the propagator for the
//! [`DomainEvents`] it is interested in through the [`PropagatorConstructorContext`].
//!
//! Propagators do not have to reach their fix-point in a single call: the engine calls them again
//! as long as their own changes keep raising events they subscribed to. When
//! [`Propagator::is_entailed`] reports [`Entailment::True`], the propagator is made passive until
//! the search backtracks past that point.
//!
//! # Bibliography
//!
//! \[1\] C. Schulte and P. J. Stuckey, ‘Efficient constraint propagation engines’, ACM Transactions
//! on Programming Languages and Systems (TOPLAS), vol. 31, no. 1, pp. 1–43, 2008.
//!
//! \[2\] C. Schulte and G. Tack, ‘Views and iterators for generic constraint implementations’, in
//! International Workshop on Constraint Solving and Constraint Logic Programming, 2005, pp.
//! 118–132.

mod constructor;
mod contexts;
mod local_id;
mod propagator;

pub(crate) mod propagator_id;
pub(crate) mod propagator_var_id;

pub use constructor::PropagatorConstructor;
pub use constructor::PropagatorConstructorContext;
pub use contexts::HasAssignments;
pub use contexts::PropagationContext;
pub use contexts::PropagationContextMut;
pub use contexts::ReadDomains;
pub use local_id::LocalId;
pub use propagator::Entailment;
pub use propagator::Priority;
pub use propagator::Propagator;
pub use propagator_id::PropagatorId;
pub(crate) use propagator_var_id::PropagatorVarId;

pub use crate::engine::cp::DomainEvent;
pub use crate::engine::cp::DomainEvents;
pub use crate::engine::cp::OpaqueDomainEvent;
