use std::iter::Rev;
use std::ops::Deref;
use std::vec::Drain;

use crate::squash_assert_simple;

/// A position on a [`Trail`]; it is the length the trail had when the checkpoint was taken.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Checkpoint(usize);

impl Checkpoint {
    pub fn trail_length(self) -> usize {
        self.0
    }
}

/// An append-only log of reversible changes.
///
/// Taking a checkpoint is free; undoing to a checkpoint drains every entry pushed after it, in
/// reverse order of creation, so that the owner of the trail can apply their inverses.
#[derive(Clone, Debug)]
pub(crate) struct Trail<T> {
    trail: Vec<T>,
}

// Implemented by hand to avoid imposing Default on T.
impl<T> Default for Trail<T> {
    fn default() -> Self {
        Trail {
            trail: Default::default(),
        }
    }
}

impl<T> Trail<T> {
    pub(crate) fn checkpoint(&self) -> Checkpoint {
        Checkpoint(self.trail.len())
    }

    /// Removes every entry beyond `checkpoint`, newest first.
    ///
    /// A checkpoint which lies beyond the current end of the trail has already been undone; undoing
    /// to it again is a programming error.
    pub(crate) fn undo_to(&mut self, checkpoint: Checkpoint) -> Rev<Drain<'_, T>> {
        squash_assert_simple!(
            checkpoint.0 <= self.trail.len(),
            "cannot undo to checkpoint {} on a trail of length {}",
            checkpoint.0,
            self.trail.len()
        );

        self.trail.drain(checkpoint.0..).rev()
    }

    pub(crate) fn push(&mut self, elem: T) {
        self.trail.push(elem)
    }

    /// Entries pushed after the given checkpoint, oldest first.
    pub(crate) fn entries_since(&self, checkpoint: Checkpoint) -> &[T] {
        &self.trail[checkpoint.0.min(self.trail.len())..]
    }
}

impl<T> Deref for Trail<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        &self.trail
    }
}
