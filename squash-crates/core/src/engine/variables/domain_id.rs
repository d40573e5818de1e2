use enumset::EnumSet;

use super::TransformableVariable;
use crate::containers::StorageKey;
use crate::engine::cp::DomainEvent;
use crate::engine::cp::OpaqueDomainEvent;
use crate::engine::cp::Watchers;
use crate::engine::variables::AffineView;
use crate::engine::variables::IntegerVariable;
use crate::engine::variables::VariableId;
use crate::engine::Assignments;
use crate::engine::EmptyDomain;

/// The most basic [`IntegerVariable`]; it is simply the id which links to a domain (hence the
/// name).
#[derive(Clone, PartialEq, Eq, Copy, Hash, PartialOrd, Ord)]
pub struct DomainId {
    pub id: u32,
}

impl DomainId {
    pub const fn new(id: u32) -> Self {
        DomainId { id }
    }
}

impl IntegerVariable for DomainId {
    type AffineView = AffineView<Self>;

    fn lower_bound(&self, assignments: &Assignments) -> i32 {
        assignments.get_lower_bound(*self)
    }

    fn upper_bound(&self, assignments: &Assignments) -> i32 {
        assignments.get_upper_bound(*self)
    }

    fn contains(&self, assignments: &Assignments, value: i32) -> bool {
        assignments.is_value_in_domain(*self, value)
    }

    fn size(&self, assignments: &Assignments) -> u64 {
        assignments.get_domain_size(*self)
    }

    fn next_value(&self, assignments: &Assignments, value: i32) -> i32 {
        assignments.get_next_value(*self, value)
    }

    fn previous_value(&self, assignments: &Assignments, value: i32) -> i32 {
        assignments.get_previous_value(*self, value)
    }

    fn tighten_lower_bound(
        &self,
        assignments: &mut Assignments,
        value: i32,
    ) -> Result<bool, EmptyDomain> {
        assignments.tighten_lower_bound(*self, value)
    }

    fn tighten_upper_bound(
        &self,
        assignments: &mut Assignments,
        value: i32,
    ) -> Result<bool, EmptyDomain> {
        assignments.tighten_upper_bound(*self, value)
    }

    fn remove_value(&self, assignments: &mut Assignments, value: i32) -> Result<bool, EmptyDomain> {
        assignments.remove_value_from_domain(*self, value)
    }

    fn remove_interval(
        &self,
        assignments: &mut Assignments,
        lower: i32,
        upper: i32,
    ) -> Result<bool, EmptyDomain> {
        assignments.remove_interval_from_domain(*self, lower, upper)
    }

    fn instantiate(&self, assignments: &mut Assignments, value: i32) -> Result<bool, EmptyDomain> {
        assignments.make_assignment(*self, value)
    }

    fn watch_all(&self, watchers: &mut Watchers<'_>, events: EnumSet<DomainEvent>) {
        watchers.watch_all(VariableId::Integer(*self), events);
    }

    fn unpack_event(&self, event: OpaqueDomainEvent) -> DomainEvent {
        event.unwrap()
    }
}

impl TransformableVariable<AffineView<DomainId>> for DomainId {
    fn scaled(&self, scale: i32) -> AffineView<DomainId> {
        AffineView::new(*self, scale, 0)
    }

    fn offset(&self, offset: i32) -> AffineView<DomainId> {
        AffineView::new(*self, 1, offset)
    }
}

impl StorageKey for DomainId {
    fn index(&self) -> usize {
        self.id as usize
    }

    fn create_from_index(index: usize) -> Self {
        DomainId { id: index as u32 }
    }
}

impl std::fmt::Display for DomainId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "x{}", self.id)
    }
}

impl std::fmt::Debug for DomainId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "x{}", self.id)
    }
}
