//! The propagators behind the constraints in [`crate::constraints`].
//!
//! Every propagator recomputes its filtering from the current domains when it is called, so none
//! of them has to restore internal state on backtracking.

pub(crate) mod all_different;
pub(crate) mod arithmetic;
pub(crate) mod graph;
pub(crate) mod set;
