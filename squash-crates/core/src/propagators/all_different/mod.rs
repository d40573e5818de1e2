//! Propagators for the all-different constraint, at two strengths.
mod bounds;
mod instantiation;

pub(crate) use bounds::AllDifferentBoundsArgs;
pub(crate) use instantiation::AllDifferentInstantiationArgs;
