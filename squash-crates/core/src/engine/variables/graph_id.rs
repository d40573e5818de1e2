use crate::containers::StorageKey;

/// Links to the domain of a directed graph variable over a fixed number of nodes.
#[derive(Clone, PartialEq, Eq, Copy, Hash, PartialOrd, Ord)]
pub struct GraphId {
    pub id: u32,
}

impl GraphId {
    pub const fn new(id: u32) -> Self {
        GraphId { id }
    }
}

impl StorageKey for GraphId {
    fn index(&self) -> usize {
        self.id as usize
    }

    fn create_from_index(index: usize) -> Self {
        GraphId { id: index as u32 }
    }
}

impl std::fmt::Display for GraphId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "g{}", self.id)
    }
}

impl std::fmt::Debug for GraphId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "g{}", self.id)
    }
}
