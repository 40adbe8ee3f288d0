use std::collections::HashMap;

/// Handle to a node inside a [`WordIndex`] arena.
///
/// Handles are only meaningful for the index (or builder) that produced them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

impl NodeId {
    pub const ROOT: NodeId = NodeId(0);

    fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone)]
struct Node {
    children: HashMap<char, NodeId>,
    /// 0 = not a complete word.
    score: u64,
    /// Non-owning link one character up; `None` only at the root.
    parent: Option<NodeId>,
    ch: char,
}

impl Node {
    fn root() -> Self {
        Self {
            children: HashMap::new(),
            score: 0,
            parent: None,
            ch: '\0',
        }
    }

    fn child_of(parent: NodeId, ch: char) -> Self {
        Self {
            children: HashMap::new(),
            score: 0,
            parent: Some(parent),
            ch,
        }
    }
}

/// Insert-only construction stage of a [`WordIndex`].
///
/// All mutation happens here; [`build`](Self::build) freezes the nodes into
/// an index that can be shared between threads.
#[derive(Debug, Clone)]
pub struct WordIndexBuilder {
    nodes: Vec<Node>,
}

impl Default for WordIndexBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl WordIndexBuilder {
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::root()],
        }
    }

    /// Insert `word` with `score`, overwriting the score of an earlier insert.
    ///
    /// Returns `false` (and leaves the trie untouched) for the empty word,
    /// which would otherwise mark the root as terminal.
    pub fn insert(&mut self, word: &str, score: u64) -> bool {
        if word.is_empty() {
            return false;
        }
        let mut current = NodeId::ROOT;
        for ch in word.chars() {
            current = match self.nodes[current.index()].children.get(&ch) {
                Some(&id) => id,
                None => {
                    let id = NodeId(self.nodes.len());
                    self.nodes.push(Node::child_of(current, ch));
                    self.nodes[current.index()].children.insert(ch, id);
                    id
                }
            };
        }
        self.nodes[current.index()].score = score;
        true
    }

    pub fn build(self) -> WordIndex {
        WordIndex { nodes: self.nodes }
    }
}

/// Node and word counts of a built index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexStats {
    /// Including the root.
    pub nodes: usize,
    /// Terminal nodes with a positive score.
    pub words: usize,
}

/// Immutable character trie over dictionary words, each terminal node
/// carrying a popularity score.
///
/// Nodes live in a single `Vec` and refer to children and parents by
/// [`NodeId`], so the parent links never participate in ownership.
#[derive(Debug, Clone)]
pub struct WordIndex {
    nodes: Vec<Node>,
}

impl WordIndex {
    /// Build an index from `(word, score)` pairs; later duplicates win.
    pub fn from_entries<'a>(entries: impl IntoIterator<Item = (&'a str, u64)>) -> Self {
        let mut builder = WordIndexBuilder::new();
        for (word, score) in entries {
            builder.insert(word, score);
        }
        builder.build()
    }

    pub fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    /// Child of `node` along `ch`, if that edge exists.
    pub fn child(&self, node: NodeId, ch: char) -> Option<NodeId> {
        self.nodes[node.index()].children.get(&ch).copied()
    }

    /// Terminal score stored at `node` (`0` for non-words).
    pub fn score_at(&self, node: NodeId) -> u64 {
        self.nodes[node.index()].score
    }

    /// Node reached by spelling `prefix` from the root.
    pub fn find(&self, prefix: &str) -> Option<NodeId> {
        let mut node = NodeId::ROOT;
        for ch in prefix.chars() {
            node = self.child(node, ch)?;
        }
        Some(node)
    }

    /// True iff `word` was inserted with a positive score. A prefix of a
    /// longer word is not a word by itself.
    pub fn contains(&self, word: &str) -> bool {
        self.score(word).is_some()
    }

    /// Score of `word` if it is a complete word.
    pub fn score(&self, word: &str) -> Option<u64> {
        self.find(word)
            .map(|id| self.score_at(id))
            .filter(|&score| score > 0)
    }

    /// Spell the path from the root to `node` by walking parent links.
    pub fn reconstruct_word(&self, node: NodeId) -> String {
        let mut chars = Vec::new();
        let mut current = node;
        while let Some(parent) = self.nodes[current.index()].parent {
            chars.push(self.nodes[current.index()].ch);
            current = parent;
        }
        chars.iter().rev().collect()
    }

    pub fn stats(&self) -> IndexStats {
        IndexStats {
            nodes: self.nodes.len(),
            words: self.nodes.iter().filter(|n| n.score > 0).count(),
        }
    }
}
