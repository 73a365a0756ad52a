use crate::cursor::CursorIterator;
use crate::symbol::{Alphabet, Symbol};
use crate::tree::{Edge, NodeIndex, Tree, ROOT};

/// Cursor that walks a probe down a completely built tree without changing it
pub struct ReadOnlyCursor<'a, K> {
    pub current_node_index_in_arena: NodeIndex,
    /// The edge the cursor is on, if any, and how many of its symbols are matched
    pub edge: Option<Edge>,
    pub index: usize,
    pub tree: &'a Tree<K>,
}

impl<'a, K: Alphabet> ReadOnlyCursor<'a, K> {
    pub fn new(tree: &'a Tree<K>) -> ReadOnlyCursor<'a, K> {
        Self {
            current_node_index_in_arena: ROOT,
            edge: None,
            index: 0,
            tree,
        }
    }

    pub fn next(&mut self, next_character: &K) -> CursorIterator {
        if let Some(edge) = self.edge {
            if self.index < self.tree.label_length(&edge.label, None) {
                if self.tree.label_symbol(&edge.label, self.index).matches(next_character) {
                    self.index += 1;
                    return CursorIterator::Ok;
                }
                return CursorIterator::InWord;
            }
            // the edge is completely matched, continue from its target
            self.current_node_index_in_arena = edge.target;
            self.edge = None;
            self.index = 0;
        }

        match self.tree.edge(self.current_node_index_in_arena, &Symbol::Char(next_character.clone())) {
            Some(edge) => {
                self.edge = Some(*edge);
                self.index = 1;
                CursorIterator::Ok
            }
            None => CursorIterator::AtEnd,
        }
    }

    /// The node whose subtree contains every suffix that starts with the symbols matched so far
    pub fn landing_node(&self) -> NodeIndex {
        self.edge.map_or(self.current_node_index_in_arena, |edge| edge.target)
    }

    pub fn reset(&mut self) {
        self.index = 0;
        self.edge = None;
        self.current_node_index_in_arena = ROOT;
    }
}
