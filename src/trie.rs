//! Prefix tree over the filtered dictionary.
//!
//! Nodes live in one arena owned by the [`Trie`] and are addressed by
//! [`NodeId`]. Children are owning edges in the tree; the parent link is only
//! used to step back up during the search.

use crate::anagram::ClassId;
use crate::error::{Error, Result};
use crate::letters::{letter_char, letter_index, ALPHABET_SIZE};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(u32);

impl NodeId {
    pub const ROOT: NodeId = NodeId(0);

    fn index(self) -> usize {
        self.0 as usize
    }
}

/// The representative stored where a word ends.
#[derive(Debug, Clone)]
pub struct Terminal {
    pub word: String,
    pub class: ClassId,
}

#[derive(Debug)]
struct TrieNode {
    letter: Option<u8>,
    parent: Option<NodeId>,
    children: [Option<NodeId>; ALPHABET_SIZE],
    terminal: Option<Terminal>,
}

impl TrieNode {
    fn new(letter: Option<u8>, parent: Option<NodeId>) -> Self {
        TrieNode {
            letter,
            parent,
            children: [None; ALPHABET_SIZE],
            terminal: None,
        }
    }
}

#[derive(Debug)]
pub struct Trie {
    nodes: Vec<TrieNode>,
    words: usize,
}

impl Default for Trie {
    fn default() -> Self {
        Self::new()
    }
}

impl Trie {
    /// An empty trie: a root with no letter and no word.
    pub fn new() -> Self {
        Trie {
            nodes: vec![TrieNode::new(None, None)],
            words: 0,
        }
    }

    /// Adds `word` as the representative of `class`.
    ///
    /// Every byte must be in `a..=z`; the trie is left untouched otherwise.
    pub fn insert(&mut self, word: &str, class: ClassId) -> Result<NodeId> {
        let letters = word
            .bytes()
            .map(|b| {
                letter_index(b).ok_or_else(|| Error::InvalidLetter {
                    word: word.to_owned(),
                    letter: b as char,
                })
            })
            .collect::<Result<Vec<u8>>>()?;

        let mut node = NodeId::ROOT;
        for letter in letters {
            node = match self.child(node, letter) {
                Some(child) => child,
                None => {
                    let child = NodeId(self.nodes.len() as u32);
                    self.nodes.push(TrieNode::new(Some(letter), Some(node)));
                    self.nodes[node.index()].children[letter as usize] = Some(child);
                    child
                }
            };
        }

        let slot = &mut self.nodes[node.index()].terminal;
        if slot.is_none() {
            self.words += 1;
        }
        *slot = Some(Terminal {
            word: word.to_owned(),
            class,
        });
        Ok(node)
    }

    pub fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    pub fn child(&self, node: NodeId, letter: u8) -> Option<NodeId> {
        self.nodes[node.index()].children[letter as usize]
    }

    /// Present children in ascending letter order.
    pub fn children(&self, node: NodeId) -> impl Iterator<Item = (u8, NodeId)> + '_ {
        self.nodes[node.index()]
            .children
            .iter()
            .enumerate()
            .filter_map(|(letter, child)| child.map(|c| (letter as u8, c)))
    }

    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.nodes[node.index()].parent
    }

    pub fn letter(&self, node: NodeId) -> Option<u8> {
        self.nodes[node.index()].letter
    }

    pub fn terminal(&self, node: NodeId) -> Option<&Terminal> {
        self.nodes[node.index()].terminal.as_ref()
    }

    /// Follows `prefix` from the root.
    pub fn find(&self, prefix: &str) -> Option<NodeId> {
        prefix
            .bytes()
            .try_fold(NodeId::ROOT, |node, b| self.child(node, letter_index(b)?))
    }

    /// Number of stored words.
    pub fn len(&self) -> usize {
        self.words
    }

    pub fn is_empty(&self) -> bool {
        self.words == 0
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// All stored words, depth first in ascending letter order.
    pub fn words(&self) -> Vec<String> {
        let mut words = Vec::with_capacity(self.words);
        let mut prefix = String::new();
        self.collect_words(NodeId::ROOT, &mut prefix, &mut words);
        words
    }

    fn collect_words(&self, node: NodeId, prefix: &mut String, words: &mut Vec<String>) {
        if self.terminal(node).is_some() {
            words.push(prefix.clone());
        }
        for (letter, child) in self.children(node) {
            prefix.push(letter_char(letter));
            self.collect_words(child, prefix, words);
            prefix.pop();
        }
    }
}
