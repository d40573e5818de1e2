//! Provides the [`VariableSelector`] trait which is required for variable selectors to implement;
//! the main method in this trait is the [`VariableSelector::select_variable`] method.
//!
//! Furthermore, it defines several implementations of the [`VariableSelector`] trait. Any
//! [`VariableSelector`] should only select variables which have a domain of size 2 or larger.

mod anti_first_fail;
mod cyclic;
mod first_fail;
mod input_order;
mod largest;
mod random;
mod set_selectors;
mod smallest;
mod variable_selector;

pub use anti_first_fail::AntiFirstFail;
pub use cyclic::Cyclic;
pub use first_fail::FirstFail;
pub use input_order::InputOrder;
pub use largest::Largest;
pub use random::RandomSelector;
pub use set_selectors::MaxDelta;
pub use set_selectors::MinDelta;
pub use smallest::Smallest;
pub use variable_selector::VariableSelector;
