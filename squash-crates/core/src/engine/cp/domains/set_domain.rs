use crate::basic_types::Trail;
use crate::containers::BitSet;
use crate::engine::cp::DomainEvent;
use crate::engine::cp::TrailEntry;
use crate::engine::variables::SetId;
use crate::engine::EmptyDomain;

/// The domain of a set variable over a fixed universe of integers.
///
/// The envelope holds the elements which may still be in the set, the kernel the elements which
/// are certainly in it; the kernel is always contained in the envelope. The set is instantiated
/// once both coincide.
#[derive(Clone, Debug)]
pub(crate) struct SetDomain {
    universe: Vec<i32>,
    envelope: BitSet,
    kernel: BitSet,
    envelope_size: u32,
    kernel_size: u32,
}

impl SetDomain {
    /// Creates a domain with every element of the (sorted, deduplicated) universe in the envelope
    /// and an empty kernel.
    pub(crate) fn new(universe: Vec<i32>) -> SetDomain {
        let size = universe.len();

        SetDomain {
            universe,
            envelope: BitSet::new(size, true),
            kernel: BitSet::new(size, false),
            envelope_size: size as u32,
            kernel_size: 0,
        }
    }

    fn index_of(&self, element: i32) -> Option<usize> {
        self.universe.binary_search(&element).ok()
    }

    pub(crate) fn envelope_contains(&self, element: i32) -> bool {
        self.index_of(element)
            .is_some_and(|index| self.envelope.contains(index))
    }

    pub(crate) fn kernel_contains(&self, element: i32) -> bool {
        self.index_of(element)
            .is_some_and(|index| self.kernel.contains(index))
    }

    pub(crate) fn envelope_size(&self) -> u32 {
        self.envelope_size
    }

    pub(crate) fn kernel_size(&self) -> u32 {
        self.kernel_size
    }

    pub(crate) fn is_instantiated(&self) -> bool {
        self.envelope_size == self.kernel_size
    }

    pub(crate) fn iter_envelope(&self) -> impl Iterator<Item = i32> + '_ {
        self.envelope.iter().map(|index| self.universe[index])
    }

    pub(crate) fn iter_kernel(&self) -> impl Iterator<Item = i32> + '_ {
        self.kernel.iter().map(|index| self.universe[index])
    }

    pub(crate) fn remove_from_envelope(
        &mut self,
        set_id: SetId,
        element: i32,
        trail: &mut Trail<TrailEntry>,
    ) -> Result<Option<DomainEvent>, EmptyDomain> {
        let Some(index) = self.index_of(element) else {
            return Ok(None);
        };
        if !self.envelope.contains(index) {
            return Ok(None);
        }
        if self.kernel.contains(index) {
            return Err(EmptyDomain);
        }

        let _ = self.envelope.remove(index);
        self.envelope_size -= 1;
        trail.push(TrailEntry::SetEnvelopeRemoval { set: set_id, index });

        Ok(Some(DomainEvent::EnvelopeRemoval))
    }

    pub(crate) fn add_to_kernel(
        &mut self,
        set_id: SetId,
        element: i32,
        trail: &mut Trail<TrailEntry>,
    ) -> Result<Option<DomainEvent>, EmptyDomain> {
        let Some(index) = self.index_of(element) else {
            return Err(EmptyDomain);
        };
        if !self.envelope.contains(index) {
            return Err(EmptyDomain);
        }
        if self.kernel.contains(index) {
            return Ok(None);
        }

        let _ = self.kernel.insert(index);
        self.kernel_size += 1;
        trail.push(TrailEntry::SetKernelAddition { set: set_id, index });

        Ok(Some(DomainEvent::KernelAddition))
    }

    pub(crate) fn undo_envelope_removal(&mut self, index: usize) {
        let _ = self.envelope.insert(index);
        self.envelope_size += 1;
    }

    pub(crate) fn undo_kernel_addition(&mut self, index: usize) {
        let _ = self.kernel.remove(index);
        self.kernel_size -= 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ID: SetId = SetId::new(0);

    #[test]
    fn kernel_elements_cannot_leave_the_envelope() {
        let mut trail = Trail::default();
        let mut domain = SetDomain::new(vec![1, 3, 5]);

        assert_eq!(
            Ok(Some(DomainEvent::KernelAddition)),
            domain.add_to_kernel(ID, 3, &mut trail)
        );
        assert_eq!(Err(EmptyDomain), domain.remove_from_envelope(ID, 3, &mut trail));
        assert_eq!(1, trail.len());
    }

    #[test]
    fn removed_elements_cannot_join_the_kernel() {
        let mut trail = Trail::default();
        let mut domain = SetDomain::new(vec![1, 3, 5]);

        let _ = domain.remove_from_envelope(ID, 5, &mut trail);

        assert_eq!(Err(EmptyDomain), domain.add_to_kernel(ID, 5, &mut trail));
        assert_eq!(Err(EmptyDomain), domain.add_to_kernel(ID, 4, &mut trail));
        assert_eq!(Ok(None), domain.remove_from_envelope(ID, 4, &mut trail));
    }

    #[test]
    fn instantiated_once_kernel_meets_envelope() {
        let mut trail = Trail::default();
        let mut domain = SetDomain::new(vec![1, 3]);

        let _ = domain.add_to_kernel(ID, 1, &mut trail);
        assert!(!domain.is_instantiated());
        let _ = domain.remove_from_envelope(ID, 3, &mut trail);

        assert!(domain.is_instantiated());
        assert_eq!(vec![1], domain.iter_kernel().collect::<Vec<_>>());
        assert_eq!(vec![1], domain.iter_envelope().collect::<Vec<_>>());
    }
}
