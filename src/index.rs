use get_size::GetSize;

use crate::duplicate_terminator_error::DuplicateTerminatorError;
use crate::match_kind::MatchKind;
use crate::searcher::Searcher;
use crate::symbol::{Alphabet, SequenceId, Symbol};
use crate::tree::Tree;
use crate::tree_builder::{TreeBuilder, UkkonenBuilder};

/// One matching sequence of a query
#[derive(Debug, PartialEq)]
pub struct Hit<'a, T> {
    pub sequence_id: SequenceId,
    pub kind: MatchKind,
    pub value: &'a T,
}

/// Result of a query: the kind that describes the complete result (None if nothing matched) and
/// one hit per matching sequence, sorted on sequence id
#[derive(Debug, PartialEq)]
pub struct MatchResult<'a, T> {
    pub kind: Option<MatchKind>,
    pub hits: Vec<Hit<'a, T>>,
}

impl<'a, T> MatchResult<'a, T> {
    pub fn is_match(&self) -> bool {
        self.kind.is_some()
    }

    pub fn values(&self) -> impl Iterator<Item = &'a T> + '_ {
        self.hits.iter().map(|hit| hit.value)
    }
}

/// Generalized suffix tree over sequences of `K`, where every sequence has an associated value `T`.
///
/// Queries see every sequence that was added before them. Adding requires `&mut self`, so the
/// borrow checker already keeps queries and insertions apart. Sharing an index between threads
/// needs an external `RwLock`.
pub struct GeneralizedIndex<K, T, B = UkkonenBuilder> {
    tree: Tree<K>,
    values: Vec<T>,
    builder: B,
    /// None once every terminator is handed out, the last one being usize::MAX
    next_terminator: Option<usize>,
}

impl<K: Alphabet, T> Default for GeneralizedIndex<K, T, UkkonenBuilder> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Alphabet, T> GeneralizedIndex<K, T, UkkonenBuilder> {
    pub fn new() -> Self {
        Self::with_builder(UkkonenBuilder::new())
    }
}

impl<K: Alphabet, T, B: TreeBuilder> GeneralizedIndex<K, T, B> {
    pub fn with_builder(builder: B) -> Self {
        GeneralizedIndex {
            tree: Tree::new(),
            values: vec![],
            builder,
            next_terminator: Some(0),
        }
    }

    /// Stores `sequence` with its own terminator, associates `value` with it and inserts all its
    /// suffixes into the tree. An empty sequence gets an id, but nothing is inserted for it.
    ///
    /// # Arguments
    /// * `sequence` - The symbols of the new sequence
    /// * `value` - The value returned for every query that matches the sequence
    ///
    /// # Returns
    ///
    /// The id of the sequence, ids are handed out in insertion order starting at 0
    pub fn add<I: IntoIterator<Item = K>>(&mut self, sequence: I, value: T) -> Result<SequenceId, DuplicateTerminatorError> {
        // usize::MAX is the last terminator that was handed out
        let terminator = self.next_terminator.ok_or(DuplicateTerminatorError::new(usize::MAX))?;
        let mut text: Vec<Symbol<K>> = sequence.into_iter().map(Symbol::Char).collect();
        let is_empty = text.is_empty();
        text.push(Symbol::Terminator(terminator));

        let sequence_id = self.tree.add_text(text)?;
        self.next_terminator = terminator.checked_add(1);
        self.values.push(value);

        if !is_empty {
            self.builder.build(&mut self.tree, sequence_id);
        }
        Ok(sequence_id)
    }

    /// Every sequence that contains `probe`, with its value and how it matches
    pub fn find(&self, probe: &[K]) -> MatchResult<'_, T> {
        let kinds = Searcher::new(&self.tree).search(probe);
        self.match_result(kinds)
    }

    /// Like `find`, but sequences that contain `probe` with at most `max_mismatches` substituted
    /// symbols are reported as well, as `Partial` hits
    pub fn find_approximate(&self, probe: &[K], max_mismatches: usize) -> MatchResult<'_, T> {
        let kinds = Searcher::new(&self.tree).search_approximate(probe, max_mismatches);
        self.match_result(kinds)
    }

    /// Every `(sequence id, start)` where `probe` occurs, sorted
    pub fn find_occurrences(&self, probe: &[K]) -> Vec<(SequenceId, usize)> {
        Searcher::new(&self.tree).find_all_suffix_indices(probe)
    }

    pub fn contains(&self, probe: &[K]) -> bool {
        Searcher::new(&self.tree).search_if_match(probe)
    }

    fn match_result(&self, kinds: Vec<(SequenceId, MatchKind)>) -> MatchResult<'_, T> {
        let hits: Vec<Hit<T>> = kinds
            .into_iter()
            .map(|(sequence_id, kind)| Hit {
                sequence_id,
                kind,
                value: &self.values[sequence_id],
            })
            .collect();
        MatchResult {
            kind: MatchKind::aggregate(hits.iter().map(|hit| hit.kind)),
            hits,
        }
    }

    pub fn value(&self, sequence_id: SequenceId) -> Option<&T> {
        self.values.get(sequence_id)
    }

    /// The symbols of a stored sequence, without its terminator
    pub fn sequence(&self, sequence_id: SequenceId) -> impl Iterator<Item = &K> + '_ {
        self.tree.text(sequence_id).iter().filter_map(Symbol::as_char)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn node_count(&self) -> usize {
        self.tree.node_count()
    }

    pub fn tree(&self) -> &Tree<K> {
        &self.tree
    }
}

impl<K: Alphabet + GetSize, T: GetSize, B> GeneralizedIndex<K, T, B> {
    /// Bytes allocated on the heap by the tree and the values
    pub fn heap_size(&self) -> usize {
        self.tree.get_heap_size() + self.values.get_heap_size()
    }
}
