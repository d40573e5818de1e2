//! Contains tie-breaking strategies used by the [`VariableSelector`]s.
//!
//! Several variables may share the "best" value of a selector (e.g. two variables with the same
//! domain size for [`FirstFail`]); a [`TieBreaker`] decides between them.

mod in_order_tie_breaker;
mod tie_breaker;

pub use in_order_tie_breaker::InOrderTieBreaker;
pub use tie_breaker::Direction;
pub use tie_breaker::TieBreaker;

#[cfg(doc)]
use crate::branching::variable_selection::FirstFail;
#[cfg(doc)]
use crate::branching::variable_selection::VariableSelector;
