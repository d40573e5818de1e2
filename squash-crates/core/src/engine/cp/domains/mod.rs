//! The storage behind the variables: one domain per variable, mutated in place and restored
//! through the entries these domains push onto the trail.
mod graph_domain;
mod integer_domain;
mod set_domain;

pub(crate) use graph_domain::GraphDomain;
pub(crate) use integer_domain::IntegerDomain;
pub(crate) use set_domain::SetDomain;
