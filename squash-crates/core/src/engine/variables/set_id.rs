use crate::containers::StorageKey;

/// Links to the domain of a set variable, which is described by an envelope (the elements which
/// may still be in the set) and a kernel (the elements which are certainly in the set).
#[derive(Clone, PartialEq, Eq, Copy, Hash, PartialOrd, Ord)]
pub struct SetId {
    pub id: u32,
}

impl SetId {
    pub const fn new(id: u32) -> Self {
        SetId { id }
    }
}

impl StorageKey for SetId {
    fn index(&self) -> usize {
        self.id as usize
    }

    fn create_from_index(index: usize) -> Self {
        SetId { id: index as u32 }
    }
}

impl std::fmt::Display for SetId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "s{}", self.id)
    }
}

impl std::fmt::Debug for SetId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "s{}", self.id)
    }
}
