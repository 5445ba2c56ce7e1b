//! Bit set of gate identifiers.
//!
//! Used for reachability during pruning: one bit per gate of the circuit,
//! iterated in increasing identifier order.

use std::fmt::{Debug, Formatter};

use crate::types::GateId;

/// A set of gate identifiers backed by a vector of u64 words.
#[derive(Clone, Default)]
pub struct GateSet {
    /// Storage: each u64 holds 64 bits
    words: Vec<u64>,
    /// Number of set bits (cached for O(1) len())
    count: usize,
}

impl GateSet {
    /// Number of bits per word.
    const BITS_PER_WORD: usize = 64;

    /// Creates a new empty set able to hold `capacity` gates without growing.
    pub fn new(capacity: usize) -> Self {
        let num_words = (capacity + Self::BITS_PER_WORD - 1) / Self::BITS_PER_WORD;
        Self {
            words: vec![0; num_words],
            count: 0,
        }
    }

    /// Returns the number of gates in the set.
    #[inline]
    pub fn len(&self) -> usize {
        self.count
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    #[inline]
    fn word_and_bit(id: GateId) -> (usize, usize) {
        let index = id.index();
        (index / Self::BITS_PER_WORD, index % Self::BITS_PER_WORD)
    }

    #[inline]
    pub fn contains(&self, id: GateId) -> bool {
        let (word_idx, bit_idx) = Self::word_and_bit(id);
        match self.words.get(word_idx) {
            Some(word) => word & (1u64 << bit_idx) != 0,
            None => false,
        }
    }

    /// Adds a gate. Returns true if it was not already present.
    #[inline]
    pub fn insert(&mut self, id: GateId) -> bool {
        let (word_idx, bit_idx) = Self::word_and_bit(id);

        // Grow if necessary
        if word_idx >= self.words.len() {
            self.words.resize(word_idx + 1, 0);
        }

        let mask = 1u64 << bit_idx;
        let was_clear = self.words[word_idx] & mask == 0;
        if was_clear {
            self.words[word_idx] |= mask;
            self.count += 1;
        }
        was_clear
    }

    /// Returns an iterator over the gates, in increasing identifier order.
    pub fn iter(&self) -> GateSetIter<'_> {
        GateSetIter {
            set: self,
            word_idx: 0,
            current_word: self.words.first().copied().unwrap_or(0),
        }
    }
}

impl PartialEq for GateSet {
    fn eq(&self, other: &Self) -> bool {
        self.count == other.count && self.iter().eq(other.iter())
    }
}

impl Eq for GateSet {}

impl Debug for GateSet {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl Extend<GateId> for GateSet {
    fn extend<I: IntoIterator<Item = GateId>>(&mut self, iter: I) {
        for id in iter {
            self.insert(id);
        }
    }
}

impl FromIterator<GateId> for GateSet {
    fn from_iter<I: IntoIterator<Item = GateId>>(iter: I) -> Self {
        let mut set = GateSet::default();
        set.extend(iter);
        set
    }
}

/// Iterator over the gates of a [`GateSet`].
pub struct GateSetIter<'a> {
    set: &'a GateSet,
    word_idx: usize,
    current_word: u64,
}

impl Iterator for GateSetIter<'_> {
    type Item = GateId;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if self.current_word != 0 {
                let bit_idx = self.current_word.trailing_zeros() as usize;
                self.current_word &= self.current_word - 1; // Clear lowest set bit
                return Some(GateId::new(self.word_idx * GateSet::BITS_PER_WORD + bit_idx));
            }

            self.word_idx += 1;
            if self.word_idx >= self.set.words.len() {
                return None;
            }
            self.current_word = self.set.words[self.word_idx];
        }
    }
}
