use std::collections::BTreeMap;

use crate::cursor::CursorIterator;
use crate::match_kind::MatchKind;
use crate::read_only_cursor::ReadOnlyCursor;
use crate::symbol::{Alphabet, SequenceId};
use crate::tree::{NodeIndex, Tree, ROOT};

pub struct Searcher<'a, K> {
    cursor: ReadOnlyCursor<'a, K>,
}

impl<'a, K: Alphabet> Searcher<'a, K> {
    pub fn new(tree: &'a Tree<K>) -> Self {
        Self {
            cursor: ReadOnlyCursor::new(tree),
        }
    }

    /// Walks `search_string` from the root. Returns the node below the end of the walk if the
    /// complete string could be matched. An empty string never matches.
    fn find_end_node(&mut self, search_string: &[K]) -> Option<NodeIndex> {
        if search_string.is_empty() {
            return None;
        }

        for character in search_string {
            if self.cursor.next(character) != CursorIterator::Ok {
                self.cursor.reset(); // prepare cursor for next search
                return None;
            }
        }

        let end_node = self.cursor.landing_node();
        self.cursor.reset(); // prepare cursor for next search
        Some(end_node)
    }

    /// All the `(sequence, start)` markers in the subtree of `node`
    fn collect_markers(&self, node: NodeIndex) -> Vec<(SequenceId, usize)> {
        let tree = self.cursor.tree;
        let mut markers = vec![];
        let mut stack = vec![node];
        while let Some(current_node) = stack.pop() {
            markers.extend_from_slice(&tree.arena[current_node].markers);
            stack.extend(tree.arena[current_node].edges.values().map(|edge| edge.target));
        }
        markers
    }

    fn sequence_length(&self, sequence: SequenceId) -> usize {
        self.cursor.tree.text(sequence).len() - 1
    }

    /// Every position where `search_string` occurs, as sorted `(sequence, start)` pairs
    pub fn find_all_suffix_indices(&mut self, search_string: &[K]) -> Vec<(SequenceId, usize)> {
        let Some(end_node) = self.find_end_node(search_string) else {
            return vec![];
        };
        let mut suffix_indices_list = self.collect_markers(end_node);
        suffix_indices_list.sort_unstable();
        suffix_indices_list
    }

    pub fn search_if_match(&mut self, search_string: &[K]) -> bool {
        self.find_end_node(search_string).is_some()
    }

    /// Every sequence that contains `search_string`, once, with the strongest way it matches
    pub fn search(&mut self, search_string: &[K]) -> Vec<(SequenceId, MatchKind)> {
        let occurrences = self.find_all_suffix_indices(search_string);
        self.classify(occurrences.into_iter().map(|(sequence, start)| (sequence, start, 0)), search_string.len())
    }

    /// Like `search`, but also follows every path that differs from `search_string` in at most
    /// `max_mismatches` substituted symbols. Sequences that are only reached through substitutions
    /// are reported as `Partial`.
    pub fn search_approximate(&mut self, search_string: &[K], max_mismatches: usize) -> Vec<(SequenceId, MatchKind)> {
        if search_string.is_empty() {
            return vec![];
        }

        let mut end_nodes = vec![];
        self.approximate_walk(ROOT, search_string, 0, 0, max_mismatches, &mut end_nodes);

        let mut occurrences = vec![];
        for (end_node, mismatches) in end_nodes {
            occurrences.extend(
                self.collect_markers(end_node)
                    .into_iter()
                    .map(|(sequence, start)| (sequence, start, mismatches)),
            );
        }
        self.classify(occurrences.into_iter(), search_string.len())
    }

    /// Depth first walk over all the edges below `node` that can be matched with the rest of
    /// `search_string` (from `depth` on) while staying within the mismatch budget.
    /// Terminators are never substituted.
    fn approximate_walk(
        &self,
        node: NodeIndex,
        search_string: &[K],
        depth: usize,
        mismatches: usize,
        max_mismatches: usize,
        end_nodes: &mut Vec<(NodeIndex, usize)>,
    ) {
        let tree = self.cursor.tree;
        for edge in tree.arena[node].edges.values() {
            let edge_length = tree.label_length(&edge.label, None);
            let mut used = mismatches;
            let mut matched = 0;
            while matched < edge_length && depth + matched < search_string.len() {
                let symbol = tree.label_symbol(&edge.label, matched);
                if symbol.is_terminator() {
                    break;
                }
                if !symbol.matches(&search_string[depth + matched]) {
                    used += 1;
                    if used > max_mismatches {
                        break;
                    }
                }
                matched += 1;
            }

            if depth + matched == search_string.len() {
                end_nodes.push((edge.target, used));
            } else if matched == edge_length {
                self.approximate_walk(edge.target, search_string, depth + matched, used, max_mismatches, end_nodes);
            }
        }
    }

    /// Reduces `(sequence, start, mismatches)` occurrences to one kind per sequence, sorted on sequence
    fn classify(&self, occurrences: impl Iterator<Item = (SequenceId, usize, usize)>, probe_length: usize) -> Vec<(SequenceId, MatchKind)> {
        let mut kinds: BTreeMap<SequenceId, MatchKind> = BTreeMap::new();
        for (sequence, start, mismatches) in occurrences {
            let kind = if mismatches == 0 {
                MatchKind::classify(start, probe_length, self.sequence_length(sequence))
            } else {
                MatchKind::Partial
            };
            kinds
                .entry(sequence)
                .and_modify(|current| *current = current.strongest(kind))
                .or_insert(kind);
        }
        kinds.into_iter().collect()
    }
}
