use std::error::Error;

use crate::duplicate_terminator_error::DuplicateTerminatorError;
use crate::index::{GeneralizedIndex, MatchResult};
use crate::symbol::{Alphabet, SequenceId};
use crate::tree_builder::TreeBuilder;

/// Shared vocabulary of the indexes that map sequences of `K` to values of `T`
pub trait SequenceIndex<K, T> {
    type AddError: Error;

    fn add_sequence(&mut self, sequence: Vec<K>, value: T) -> Result<SequenceId, Self::AddError>;

    fn find_sequence(&self, probe: &[K]) -> MatchResult<'_, T>;
}

impl<K: Alphabet, T, B: TreeBuilder> SequenceIndex<K, T> for GeneralizedIndex<K, T, B> {
    type AddError = DuplicateTerminatorError;

    fn add_sequence(&mut self, sequence: Vec<K>, value: T) -> Result<SequenceId, Self::AddError> {
        self.add(sequence, value)
    }

    fn find_sequence(&self, probe: &[K]) -> MatchResult<'_, T> {
        self.find(probe)
    }
}
