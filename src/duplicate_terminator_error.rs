use std::error::Error;
use std::fmt::{Display, Formatter};

/// Custom error type to indicate that a sequence was closed with a terminator that another sequence in the tree already uses
#[derive(Debug, PartialEq)]
pub struct DuplicateTerminatorError {
    terminator: usize,
}

impl Error for DuplicateTerminatorError {}

impl Display for DuplicateTerminatorError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "terminator {} is already used by another sequence in the index", self.terminator)
    }
}

impl DuplicateTerminatorError {
    pub fn new(terminator: usize) -> Self {
        Self { terminator }
    }

    pub fn terminator(&self) -> usize {
        self.terminator
    }
}
