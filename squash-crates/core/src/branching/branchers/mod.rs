//! Provides several implementations of [`Brancher`]s.
//!
//! [`IndependentVariableValueBrancher`] combines a variable selector with a value selector over
//! integer variables, [`SetBrancher`] and [`ArcBrancher`] branch on set and graph variables, and
//! [`DynamicBrancher`] chains any number of them.

mod arc_brancher;
mod dynamic_brancher;
mod independent_variable_value_brancher;
mod set_brancher;

pub use arc_brancher::ArcBrancher;
pub use arc_brancher::ArcSelection;
pub use dynamic_brancher::DynamicBrancher;
pub use independent_variable_value_brancher::IndependentVariableValueBrancher;
pub use set_brancher::SetBrancher;

#[cfg(doc)]
use crate::branching::Brancher;
