mod assignments;
mod domain_events;
mod domains;
mod event_sink;
mod propagation_engine;
mod propagator_queue;
pub(crate) mod test_solver;
mod watch_list_cp;

pub use assignments::Assignments;
pub use assignments::EmptyDomain;
pub(crate) use assignments::TrailEntry;
pub use domain_events::DomainEvent;
pub use domain_events::DomainEvents;
pub use domain_events::OpaqueDomainEvent;
pub(crate) use propagation_engine::PropagationEngine;
pub(crate) use propagator_queue::PropagatorQueue;
pub(crate) use watch_list_cp::WatchListCP;
pub use watch_list_cp::Watchers;
