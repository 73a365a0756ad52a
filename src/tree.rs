use std::collections::{HashMap, HashSet};
use std::mem::size_of;

use get_size::GetSize;

use crate::cursor::GlobalEnd;
use crate::duplicate_terminator_error::DuplicateTerminatorError;
use crate::symbol::{Alphabet, SequenceId, Symbol};

/// Custom trait implemented by types that have a value that represents NULL
pub trait Nullable<T> {
    const NULL: T;

    fn is_null(&self) -> bool;
}

/// Type that represents the index of a node in the arena part of the tree
pub type NodeIndex = usize;

impl Nullable<NodeIndex> for NodeIndex {
    /// Use usize::MAX as NULL value since this will in practice never be reached.
    /// It is not possible to create 2^64-1 nodes (on a 64-bit machine).
    /// This would simply never fit in memory
    const NULL: NodeIndex = usize::MAX;

    fn is_null(&self) -> bool {
        *self == NodeIndex::NULL
    }
}

/// The root is always the first node in the arena
pub const ROOT: NodeIndex = 0;

/// End of an edge label. `Open` edges are the leaves of a sequence: while that sequence is being
/// inserted they end at the global end of the construction, afterwards at its terminator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, GetSize)]
pub enum LabelEnd {
    Fixed(usize),
    Open,
}

/// Inclusive range `start..=end` into the text of `sequence`
#[derive(Debug, Clone, Copy, PartialEq, Eq, GetSize)]
pub struct Label {
    pub sequence: SequenceId,
    pub start: usize,
    pub end: LabelEnd,
}

impl Label {
    pub fn new(sequence: SequenceId, start: usize, end: LabelEnd) -> Self {
        Label { sequence, start, end }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, GetSize)]
pub struct Edge {
    pub target: NodeIndex,
    pub label: Label,
}

#[derive(Debug)]
pub struct Node<K> {
    /// Outgoing edges, keyed on the first symbol of their label
    pub edges: HashMap<Symbol<K>, Edge>,
    /// Suffix link, only used for lookups during construction. NULL for the root and the leaves.
    pub link: NodeIndex,
    /// `(sequence, start)` of every suffix that ends in this node
    pub markers: Vec<(SequenceId, usize)>,
}

impl<K> Node<K> {
    pub fn create_root() -> Self {
        Node {
            edges: HashMap::new(),
            link: NodeIndex::NULL,
            markers: vec![],
        }
    }

    pub fn new_internal() -> Self {
        Self::create_root()
    }

    pub fn new_leaf(marker: (SequenceId, usize)) -> Self {
        Node {
            edges: HashMap::new(),
            link: NodeIndex::NULL,
            markers: vec![marker],
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.edges.is_empty()
    }
}

/// Arena based generalized suffix tree. The tree owns the terminated texts of all the stored
/// sequences since the edge labels only refer to ranges in them.
#[derive(Debug)]
pub struct Tree<K> {
    pub arena: Vec<Node<K>>,
    texts: Vec<Vec<Symbol<K>>>,
    terminators: HashSet<usize>,
}

impl<K: Alphabet> Default for Tree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Alphabet> Tree<K> {
    pub fn new() -> Self {
        Tree {
            arena: vec![Node::create_root()],
            texts: vec![],
            terminators: HashSet::new(),
        }
    }

    /// Stores a terminated text so that edge labels can refer to it. The text is not inserted yet,
    /// that is the job of a `TreeBuilder`.
    pub fn add_text(&mut self, text: Vec<Symbol<K>>) -> Result<SequenceId, DuplicateTerminatorError> {
        let terminator = match text.last() {
            Some(Symbol::Terminator(terminator)) => *terminator,
            _ => panic!("a stored text must end with its terminator"),
        };
        assert!(
            !text[..text.len() - 1].iter().any(Symbol::is_terminator),
            "a terminator can only be the last symbol of a text"
        );
        if !self.terminators.insert(terminator) {
            return Err(DuplicateTerminatorError::new(terminator));
        }
        self.texts.push(text);
        Ok(self.texts.len() - 1)
    }

    /// The terminated text of `sequence`
    pub fn text(&self, sequence: SequenceId) -> &[Symbol<K>] {
        &self.texts[sequence]
    }

    pub fn sequence_count(&self) -> usize {
        self.texts.len()
    }

    pub fn node_count(&self) -> usize {
        self.arena.len()
    }

    pub fn leaf_count(&self) -> usize {
        self.arena.iter().filter(|node| node.is_leaf()).count() - usize::from(self.arena[ROOT].is_leaf())
    }

    pub fn symbol(&self, sequence: SequenceId, position: usize) -> &Symbol<K> {
        &self.texts[sequence][position]
    }

    /// Resolves the (inclusive) end of `label`. `global_end` is only given while a sequence is
    /// being inserted.
    pub fn label_end(&self, label: &Label, global_end: Option<&GlobalEnd>) -> usize {
        match label.end {
            LabelEnd::Fixed(end) => end,
            LabelEnd::Open => match global_end {
                Some(global_end) if global_end.sequence == label.sequence => global_end.position,
                _ => self.texts[label.sequence].len() - 1,
            },
        }
    }

    pub fn label_length(&self, label: &Label, global_end: Option<&GlobalEnd>) -> usize {
        self.label_end(label, global_end) - label.start + 1
    }

    pub fn label_symbol(&self, label: &Label, offset: usize) -> &Symbol<K> {
        &self.texts[label.sequence][label.start + offset]
    }

    pub fn edge(&self, node: NodeIndex, symbol: &Symbol<K>) -> Option<&Edge> {
        self.arena[node].edges.get(symbol)
    }

    /// Adds a new leaf below `node`. Panics if `node` already has an edge starting with the same
    /// symbol, since that would break the tree.
    pub fn add_leaf(&mut self, node: NodeIndex, label: Label, marker: (SequenceId, usize)) -> NodeIndex {
        let leading_symbol = self.label_symbol(&label, 0).clone();
        assert!(
            !self.arena[node].edges.contains_key(&leading_symbol),
            "node {} already has an outgoing edge for the first symbol of the new leaf",
            node
        );
        let leaf = self.arena.len();
        self.arena.push(Node::new_leaf(marker));
        self.arena[node].edges.insert(leading_symbol, Edge { target: leaf, label });
        leaf
    }

    /// Splits the edge of `node` that starts with `symbol` after `offset` symbols.
    /// Returns the index of the new internal node, which has the tail of the old edge as its only child.
    pub fn split_edge(&mut self, node: NodeIndex, symbol: &Symbol<K>, offset: usize, global_end: Option<&GlobalEnd>) -> NodeIndex {
        let edge = *self.edge(node, symbol).expect("the edge that is split must exist");
        assert!(
            offset > 0 && offset < self.label_length(&edge.label, global_end),
            "an edge can only be split strictly inside its label"
        );

        let new_internal_node = self.arena.len();
        let upper = Edge {
            target: new_internal_node,
            label: Label { end: LabelEnd::Fixed(edge.label.start + offset - 1), ..edge.label },
        };
        let lower = Edge {
            target: edge.target,
            label: Label { start: edge.label.start + offset, ..edge.label },
        };

        let mut internal_node = Node::new_internal();
        internal_node.edges.insert(self.label_symbol(&lower.label, 0).clone(), lower);
        self.arena.push(internal_node);
        self.arena[node].edges.insert(symbol.clone(), upper);

        new_internal_node
    }

    pub fn set_link(&mut self, node: NodeIndex, link: NodeIndex) {
        self.arena[node].link = link;
    }

    /// Checks the structural invariants of a completely built tree and panics on the first violation:
    /// every edge is keyed on the first symbol of its non-empty label, every node except the root
    /// has exactly one parent and, when `require_links` is set, every internal node has a suffix link.
    pub fn assert_well_formed(&self, require_links: bool) {
        let mut parent_count = vec![0usize; self.arena.len()];
        for (index, node) in self.arena.iter().enumerate() {
            for (symbol, edge) in &node.edges {
                assert!(edge.target != ROOT && edge.target < self.arena.len(), "node {} has an edge to an invalid target", index);
                parent_count[edge.target] += 1;
                assert!(edge.label.start <= self.label_end(&edge.label, None), "node {} has an edge with an empty label", index);
                assert!(
                    self.label_symbol(&edge.label, 0) == symbol,
                    "node {} has an edge that is not keyed on the first symbol of its label",
                    index
                );
            }
            if require_links && index != ROOT && !node.is_leaf() {
                assert!(!node.link.is_null(), "internal node {} has no suffix link", index);
            }
        }
        for (index, count) in parent_count.iter().enumerate().skip(1) {
            assert_eq!(*count, 1, "node {} must have exactly one parent", index);
        }
    }
}

impl<K: GetSize> GetSize for Node<K> {
    fn get_heap_size(&self) -> usize {
        let edges = self.edges.capacity() * size_of::<(Symbol<K>, Edge)>()
            + self
                .edges
                .iter()
                .map(|(symbol, edge)| symbol.get_heap_size() + edge.get_heap_size())
                .sum::<usize>();
        edges + self.markers.capacity() * size_of::<(SequenceId, usize)>()
    }
}

impl<K: GetSize> GetSize for Tree<K> {
    fn get_heap_size(&self) -> usize {
        self.arena.get_heap_size() + self.texts.get_heap_size() + self.terminators.capacity() * size_of::<usize>()
    }
}
