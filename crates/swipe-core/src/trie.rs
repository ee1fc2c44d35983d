//! Prefix tree of the lexicon.
//!
//! Nodes live in a flat arena and are addressed by [`NodeId`]. Each node keeps
//! a dense 26-slot table for `A`..`Z`; the rare non-ASCII letters that appear
//! in word lists go to a side table keyed by `(parent, char)` so that ordinary
//! nodes stay small. Keys are always stored uppercased.

use std::collections::HashMap;

use crate::unicode::{ascii_slot, is_word_char, to_upper};

const ALPHABET: usize = 26;
/// Slot value meaning "no child". The root is never anybody's child.
const NO_CHILD: u32 = 0;

/// Handle to a trie node. Only meaningful for the [`Trie`] that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(u32);

impl NodeId {
    pub const ROOT: NodeId = NodeId(0);

    pub fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Debug, Clone)]
struct Node {
    children: [u32; ALPHABET],
    terminal: bool,
}

impl Node {
    fn new() -> Self {
        Self {
            children: [NO_CHILD; ALPHABET],
            terminal: false,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Trie {
    nodes: Vec<Node>,
    extended: HashMap<(NodeId, char), NodeId>,
    words: usize,
}

impl Default for Trie {
    fn default() -> Self {
        Self::new()
    }
}

impl Trie {
    /// An empty trie: only the root, which is not terminal.
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::new()],
            extended: HashMap::new(),
            words: 0,
        }
    }

    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut trie = Self::new();
        for w in words {
            trie.insert(w.as_ref());
        }
        trie
    }

    pub fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    /// Insert a word, case-insensitively. Non-letters are skipped, so
    /// "Jack-o'-lantern" is stored as `JACKOLANTERN`.
    ///
    /// Returns `true` if a new word was added. Input without any letters adds
    /// nothing (the root never becomes terminal).
    pub fn insert(&mut self, word: &str) -> bool {
        let mut node = NodeId::ROOT;
        let mut letters = 0usize;
        for ch in word.chars().filter(|&c| is_word_char(c)) {
            node = self.child_or_insert(node, to_upper(ch));
            letters += 1;
        }
        if letters == 0 {
            return false;
        }
        let n = &mut self.nodes[node.index()];
        if n.terminal {
            return false;
        }
        n.terminal = true;
        self.words += 1;
        true
    }

    fn child_or_insert(&mut self, node: NodeId, upper: char) -> NodeId {
        if let Some(existing) = self.child_upper(node, upper) {
            return existing;
        }
        debug_assert!(self.nodes.len() < u32::MAX as usize);
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(Node::new());
        match ascii_slot(upper) {
            Some(slot) => self.nodes[node.index()].children[slot] = id.0,
            None => {
                self.extended.insert((node, upper), id);
            }
        }
        id
    }

    fn child_upper(&self, node: NodeId, upper: char) -> Option<NodeId> {
        match ascii_slot(upper) {
            Some(slot) => match self.nodes[node.index()].children[slot] {
                NO_CHILD => None,
                id => Some(NodeId(id)),
            },
            None => self.extended.get(&(node, upper)).copied(),
        }
    }

    /// The node reached from `node` by consuming `ch` (uppercased first).
    pub fn child(&self, node: NodeId, ch: char) -> Option<NodeId> {
        self.child_upper(node, to_upper(ch))
    }

    pub fn is_terminal(&self, node: NodeId) -> bool {
        self.nodes[node.index()].terminal
    }

    /// Walk `s` from the root, skipping non-letters exactly like [`insert`].
    ///
    /// [`insert`]: Trie::insert
    pub fn walk(&self, s: &str) -> Option<NodeId> {
        s.chars()
            .filter(|&c| is_word_char(c))
            .try_fold(NodeId::ROOT, |node, ch| self.child(node, ch))
    }

    pub fn contains_word(&self, word: &str) -> bool {
        self.walk(word).is_some_and(|n| n != NodeId::ROOT && self.is_terminal(n))
    }

    pub fn contains_prefix(&self, prefix: &str) -> bool {
        self.walk(prefix).is_some()
    }

    /// Number of distinct words.
    pub fn word_count(&self) -> usize {
        self.words
    }

    /// Number of nodes, including the root.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words == 0
    }
}
