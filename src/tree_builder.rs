use crate::cursor::{Cursor, CursorIterator};
use crate::symbol::{Alphabet, SequenceId};
use crate::tree::{Label, LabelEnd, NodeIndex, Tree, ROOT};

pub trait TreeBuilder {
    fn new() -> Self;

    /// Adds every suffix of the text of `sequence`, terminator included, to the tree.
    /// The text must already be stored in the tree with `Tree::add_text`.
    fn build<K: Alphabet>(&self, tree: &mut Tree<K>, sequence: SequenceId);
}

/// Inserts every suffix on its own by walking down from the root, O(n^2) per sequence.
/// Does not create suffix links.
pub struct NaiveBuilder;

impl TreeBuilder for NaiveBuilder {
    fn new() -> Self {
        Self
    }

    fn build<K: Alphabet>(&self, tree: &mut Tree<K>, sequence: SequenceId) {
        let end_index = tree.text(sequence).len() - 1;
        for suffix_start in 0..=end_index {
            let mut current_node = ROOT;
            let mut index_in_entry = suffix_start;
            // the terminator guarantees that every suffix stops in a mismatch before it runs out
            loop {
                let symbol = tree.symbol(sequence, index_in_entry).clone();
                let Some(edge) = tree.edge(current_node, &symbol).copied() else {
                    tree.add_leaf(current_node, Label::new(sequence, index_in_entry, LabelEnd::Fixed(end_index)), (sequence, suffix_start));
                    break;
                };

                let edge_length = tree.label_length(&edge.label, None);
                let mut matched = 1;
                while matched < edge_length && tree.label_symbol(&edge.label, matched) == tree.symbol(sequence, index_in_entry + matched) {
                    matched += 1;
                }

                if matched == edge_length {
                    current_node = edge.target;
                    index_in_entry += edge_length;
                    continue;
                }

                let new_internal_node = tree.split_edge(current_node, &symbol, matched, None);
                tree.add_leaf(
                    new_internal_node,
                    Label::new(sequence, index_in_entry + matched, LabelEnd::Fixed(end_index)),
                    (sequence, suffix_start),
                );
                break;
            }
        }
    }
}

/// Online construction with Ukkonen's algorithm, amortized O(n) per sequence.
pub struct UkkonenBuilder;

impl TreeBuilder for UkkonenBuilder {
    fn new() -> Self {
        Self
    }

    fn build<K: Alphabet>(&self, tree: &mut Tree<K>, sequence: SequenceId) {
        let end_index = tree.text(sequence).len();
        let mut cursor = Cursor::new(tree, sequence);
        // number of suffixes that are implicitly present but do not have their own leaf yet
        let mut remaining: usize = 0;
        for position in 0..end_index {
            cursor.advance_end(position);
            remaining += 1;
            let mut prev_internal_node: Option<NodeIndex> = None;

            while remaining > 0 {
                let suffix_start = position + 1 - remaining;
                match cursor.next(position) {
                    CursorIterator::Ok => {
                        // rule 3 : do nothing + show stopper
                        if let Some(prev_internal_node_index) = prev_internal_node.take() {
                            cursor.add_link(prev_internal_node_index, cursor.current_node_index_in_arena);
                        }
                        break;
                    }
                    CursorIterator::AtEnd => {
                        cursor.add_leaf_from_position(position, suffix_start);
                        if let Some(prev_internal_node_index) = prev_internal_node.take() {
                            cursor.add_link(prev_internal_node_index, cursor.current_node_index_in_arena);
                        }
                    }
                    CursorIterator::InWord => {
                        let new_internal_node_index = cursor.split_edge(position, suffix_start);
                        if let Some(prev_internal_node_index) = prev_internal_node {
                            cursor.add_link(prev_internal_node_index, new_internal_node_index);
                        }
                        prev_internal_node = Some(new_internal_node_index);
                    }
                }

                remaining -= 1;
                // follow the suffix link since the extension is complete
                cursor.follow_link(position, remaining);
            }

            if let Some(prev_internal_node_index) = prev_internal_node {
                cursor.add_link(prev_internal_node_index, ROOT);
            }
        }

        // the terminator is unique, so its phase always ends with every suffix in its own leaf
        assert_eq!(remaining, 0, "sequence {} has suffixes without a leaf", sequence);
        assert!(cursor.at_node(), "the active point must be back in a node after the terminator");
        cursor.reset();
    }
}
