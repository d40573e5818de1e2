//! Provides the [`ValueSelector`] trait which is required for value selectors to implement; the
//! main method in this trait is the [`ValueSelector::select_value`] method.
//!
//! The binary selectors branch on a single value (`[x == v]`, then the remainder of the domain) or
//! split the domain; [`Enumerate`] creates one alternative per value of the domain.

mod enumerate;
mod in_domain_max;
mod in_domain_middle;
mod in_domain_min;
mod in_domain_random;
mod in_domain_split;
mod value_selector;

pub use enumerate::Ascending;
pub use enumerate::Descending;
pub use enumerate::DropN;
pub use enumerate::Enumerate;
pub use enumerate::MiddleOut;
pub use enumerate::ValueOrdering;
pub use in_domain_max::InDomainMax;
pub use in_domain_middle::InDomainMiddle;
pub use in_domain_min::InDomainMin;
pub use in_domain_random::InDomainRandom;
pub use in_domain_split::InDomainSplit;
pub use value_selector::ValueSelector;
