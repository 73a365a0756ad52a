use crate::symbol::{Alphabet, SequenceId};
use crate::tree::{Edge, Label, LabelEnd, NodeIndex, Nullable, Tree, ROOT};

/// Result of trying to move a cursor one symbol further
#[derive(Debug, PartialEq)]
pub enum CursorIterator {
    /// The symbol was found, the cursor moved past it
    Ok,
    /// The cursor is in a node that has no edge for the symbol
    AtEnd,
    /// The cursor is inside an edge and the next symbol on the edge is different
    InWord,
}

/// The position up to which all the open edges of `sequence` currently extend.
/// Advancing it extends every leaf of the sequence at once.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlobalEnd {
    pub sequence: SequenceId,
    pub position: usize,
}

/// The active point of Ukkonen's algorithm while inserting one sequence.
/// The active edge is the edge of `current_node_index_in_arena` that starts with the symbol at
/// `edge` in the sequence, `length` symbols of it are already matched.
pub struct Cursor<'a, K> {
    pub current_node_index_in_arena: NodeIndex,
    pub edge: usize,
    pub length: usize,
    pub global_end: GlobalEnd,
    sequence: SequenceId,
    pub tree: &'a mut Tree<K>,
}

impl<'a, K: Alphabet> Cursor<'a, K> {
    pub fn new(tree: &'a mut Tree<K>, sequence: SequenceId) -> Cursor<'a, K> {
        Cursor {
            current_node_index_in_arena: ROOT,
            edge: 0,
            length: 0,
            global_end: GlobalEnd { sequence, position: 0 },
            sequence,
            tree,
        }
    }

    /// Rule 1: every leaf of the current sequence grows with one symbol
    pub fn advance_end(&mut self, position: usize) {
        self.global_end.position = position;
    }

    pub fn reset(&mut self) {
        self.current_node_index_in_arena = ROOT;
        self.edge = 0;
        self.length = 0;
    }

    pub fn at_node(&self) -> bool {
        self.length == 0
    }

    fn active_edge(&self) -> Edge {
        let symbol = self.tree.symbol(self.sequence, self.edge);
        *self
            .tree
            .edge(self.current_node_index_in_arena, symbol)
            .expect("the active edge must exist while the active length is positive")
    }

    /// Skip/count trick: moves down as long as the active length covers the complete active edge
    fn walk_down(&mut self) {
        while self.length > 0 {
            let edge = self.active_edge();
            let edge_length = self.tree.label_length(&edge.label, Some(&self.global_end));
            if self.length < edge_length {
                return;
            }
            self.current_node_index_in_arena = edge.target;
            self.edge += edge_length;
            self.length -= edge_length;
        }
    }

    /// Tries to extend the active point with the symbol at `position` in the sequence.
    /// `Ok` is rule 3: the extension is already in the tree and the phase can stop.
    pub fn next(&mut self, position: usize) -> CursorIterator {
        self.walk_down();
        let next_symbol = self.tree.symbol(self.sequence, position);

        if self.at_node() {
            if self.tree.edge(self.current_node_index_in_arena, next_symbol).is_some() {
                self.edge = position;
                self.length = 1;
                return CursorIterator::Ok;
            }
            return CursorIterator::AtEnd;
        }

        let edge = self.active_edge();
        if self.tree.label_symbol(&edge.label, self.length) == self.tree.symbol(self.sequence, position) {
            self.length += 1;
            return CursorIterator::Ok;
        }
        CursorIterator::InWord
    }

    pub fn add_link(&mut self, receiver: NodeIndex, link_to: NodeIndex) {
        self.tree.set_link(receiver, link_to);
    }

    /// Rule 2 in a node: add an open leaf for the suffix starting at `suffix_start`
    pub fn add_leaf_from_position(&mut self, position: usize, suffix_start: usize) {
        self.add_leaf_below(self.current_node_index_in_arena, position, suffix_start);
    }

    /// Rule 2 inside an edge: split the active edge at the active length and hang an open leaf
    /// below the new internal node. Returns the index of the new internal node.
    pub fn split_edge(&mut self, position: usize, suffix_start: usize) -> NodeIndex {
        let symbol = self.tree.symbol(self.sequence, self.edge).clone();
        let new_internal_node_index_in_arena =
            self.tree
                .split_edge(self.current_node_index_in_arena, &symbol, self.length, Some(&self.global_end));
        self.add_leaf_below(new_internal_node_index_in_arena, position, suffix_start);
        new_internal_node_index_in_arena
    }

    fn add_leaf_below(&mut self, node: NodeIndex, position: usize, suffix_start: usize) {
        let label = Label::new(self.sequence, position, LabelEnd::Open);
        self.tree.add_leaf(node, label, (self.sequence, suffix_start));
    }

    /// Moves the active point to the next shorter suffix after an extension is complete.
    /// `remaining` is the number of suffixes that still have to be added in this phase.
    pub fn follow_link(&mut self, position: usize, remaining: usize) {
        if self.current_node_index_in_arena == ROOT {
            if self.length > 0 {
                self.length -= 1;
                self.edge = position + 1 - remaining;
            }
            return;
        }

        let link = self.tree.arena[self.current_node_index_in_arena].link;
        assert!(!link.is_null(), "internal node {} has no suffix link", self.current_node_index_in_arena);
        self.current_node_index_in_arena = link;
    }
}
