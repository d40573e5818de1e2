const WORD_SIZE: usize = u64::BITS as usize;

/// A fixed-capacity set of indices in `[0, capacity)` backed by 64-bit words.
///
/// Scanning for the next or previous present index skips whole words at a time, which is what
/// gives the enumerated domains their cheap forward and backward iteration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct BitSet {
    words: Vec<u64>,
    capacity: usize,
}

impl BitSet {
    /// Creates a set with the given capacity which is either empty or contains every index.
    pub(crate) fn new(capacity: usize, filled: bool) -> BitSet {
        let num_words = capacity.div_ceil(WORD_SIZE);
        let mut words = vec![if filled { u64::MAX } else { 0 }; num_words];

        if filled && capacity % WORD_SIZE != 0 {
            if let Some(last) = words.last_mut() {
                *last = (1_u64 << (capacity % WORD_SIZE)) - 1;
            }
        }

        BitSet { words, capacity }
    }

    pub(crate) fn capacity(&self) -> usize {
        self.capacity
    }

    pub(crate) fn contains(&self, index: usize) -> bool {
        index < self.capacity && self.words[index / WORD_SIZE] & (1 << (index % WORD_SIZE)) != 0
    }

    /// Returns whether the index was absent before.
    pub(crate) fn insert(&mut self, index: usize) -> bool {
        let was_present = self.contains(index);
        self.words[index / WORD_SIZE] |= 1 << (index % WORD_SIZE);
        !was_present
    }

    /// Returns whether the index was present before.
    pub(crate) fn remove(&mut self, index: usize) -> bool {
        let was_present = self.contains(index);
        self.words[index / WORD_SIZE] &= !(1 << (index % WORD_SIZE));
        was_present
    }

    /// The smallest present index which is at least `from`.
    pub(crate) fn next_set_bit(&self, from: usize) -> Option<usize> {
        if from >= self.capacity {
            return None;
        }

        let mut word_index = from / WORD_SIZE;
        let mut word = self.words[word_index] & (u64::MAX << (from % WORD_SIZE));

        loop {
            if word != 0 {
                let index = word_index * WORD_SIZE + word.trailing_zeros() as usize;
                return (index < self.capacity).then_some(index);
            }

            word_index += 1;
            if word_index >= self.words.len() {
                return None;
            }
            word = self.words[word_index];
        }
    }

    /// The largest present index which is at most `from`.
    pub(crate) fn previous_set_bit(&self, from: usize) -> Option<usize> {
        if self.capacity == 0 {
            return None;
        }

        let from = from.min(self.capacity - 1);
        let mut word_index = from / WORD_SIZE;
        let shift = WORD_SIZE - 1 - from % WORD_SIZE;
        let mut word = self.words[word_index] & (u64::MAX >> shift);

        loop {
            if word != 0 {
                return Some(word_index * WORD_SIZE + WORD_SIZE - 1 - word.leading_zeros() as usize);
            }

            if word_index == 0 {
                return None;
            }
            word_index -= 1;
            word = self.words[word_index];
        }
    }

    /// The number of present indices in `[lower, upper]`.
    pub(crate) fn count_in_range(&self, lower: usize, upper: usize) -> usize {
        let mut count = 0;
        let mut current = self.next_set_bit(lower);

        while let Some(index) = current {
            if index > upper {
                break;
            }
            count += 1;
            current = self.next_set_bit(index + 1);
        }

        count
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        let mut next = self.next_set_bit(0);

        std::iter::from_fn(move || {
            let current = next?;
            next = self.next_set_bit(current + 1);
            Some(current)
        })
    }
}
