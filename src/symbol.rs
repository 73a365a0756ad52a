use std::hash::Hash;

use get_size::GetSize;

/// Identifier of a stored sequence, assigned densely starting at 0
pub type SequenceId = usize;

/// Types that can be used as the symbols of an indexed sequence.
/// Symbols are only compared for equality and used as keys of the edge maps, so every
/// cloneable, hashable type qualifies.
pub trait Alphabet: Clone + Eq + Hash {}

impl<T: Clone + Eq + Hash> Alphabet for T {}

/// A symbol as it is stored in the tree: either a symbol of the caller's alphabet
/// or the terminator that closes one specific sequence.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Symbol<K> {
    Char(K),
    /// Never equal to a `Char` and never shared between two sequences
    Terminator(usize),
}

impl<K: PartialEq> Symbol<K> {
    /// Returns true if this is the alphabet symbol `other`. A terminator never matches.
    pub fn matches(&self, other: &K) -> bool {
        matches!(self, Symbol::Char(character) if character == other)
    }

    pub fn is_terminator(&self) -> bool {
        matches!(self, Symbol::Terminator(_))
    }

    pub fn as_char(&self) -> Option<&K> {
        match self {
            Symbol::Char(character) => Some(character),
            Symbol::Terminator(_) => None,
        }
    }
}

impl<K: GetSize> GetSize for Symbol<K> {
    fn get_heap_size(&self) -> usize {
        match self {
            Symbol::Char(character) => character.get_heap_size(),
            Symbol::Terminator(_) => 0,
        }
    }
}
