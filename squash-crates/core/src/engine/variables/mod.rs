//! A variable, in the context of the solver, is a view onto a domain. It may forward domain
//! information unaltered, or apply transformations which can be performed without the need of
//! constraints.
//!
//! Integer variables come as [`DomainId`]s and as [`AffineView`]s over them; set and graph
//! variables are only available as [`SetId`]s and [`GraphId`]s.

mod affine_view;
mod domain_id;
mod graph_id;
mod integer_variable;
mod set_id;
mod transformable_variable;

pub use affine_view::AffineView;
pub use domain_id::DomainId;
pub use graph_id::GraphId;
pub use integer_variable::IntegerVariable;
pub use set_id::SetId;
pub use transformable_variable::TransformableVariable;

/// Identifies the domain of any kind of variable, used where the solver has to treat integer, set
/// and graph variables uniformly (e.g. when buffering and dispatching domain events).
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub enum VariableId {
    Integer(DomainId),
    Set(SetId),
    Graph(GraphId),
}

impl From<DomainId> for VariableId {
    fn from(domain_id: DomainId) -> Self {
        VariableId::Integer(domain_id)
    }
}

impl From<SetId> for VariableId {
    fn from(set_id: SetId) -> Self {
        VariableId::Set(set_id)
    }
}

impl From<GraphId> for VariableId {
    fn from(graph_id: GraphId) -> Self {
        VariableId::Graph(graph_id)
    }
}

impl std::fmt::Display for VariableId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VariableId::Integer(domain_id) => write!(f, "{domain_id}"),
            VariableId::Set(set_id) => write!(f, "{set_id}"),
            VariableId::Graph(graph_id) => write!(f, "{graph_id}"),
        }
    }
}
