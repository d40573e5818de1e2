//! Atomic constraints over integer domains, used for decisions and for the objective cut of
//! branch-and-bound.
pub(crate) mod predicate;
pub(crate) mod predicate_constructor;

pub use predicate::Predicate;
pub use predicate_constructor::PredicateConstructor;
