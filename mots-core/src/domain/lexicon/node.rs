//! Arena nodes of the lexicon trie

use crate::domain::morphology::Word;
use smallvec::SmallVec;
use std::fmt;

/// Index of a node inside its lexicon's arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(u32);

impl NodeId {
    /// The root node; carries no letter
    pub const ROOT: NodeId = NodeId(0);

    #[inline]
    pub(crate) fn from_index(index: usize) -> Self {
        debug_assert!(index <= u32::MAX as usize);
        NodeId(index as u32)
    }

    /// Position in the arena
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Child edges sorted by code point; most nodes have few children
pub(crate) type Children = SmallVec<[(char, NodeId); 4]>;

/// One code point of the trie
#[derive(Debug, Clone)]
pub struct LexiconNode {
    pub(crate) letter: Option<char>,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Children,
    pub(crate) word: Option<Word>,
}

impl LexiconNode {
    pub(crate) fn root() -> Self {
        Self {
            letter: None,
            parent: None,
            children: Children::new(),
            word: None,
        }
    }

    pub(crate) fn child_of(parent: NodeId, letter: char) -> Self {
        Self {
            letter: Some(letter),
            parent: Some(parent),
            children: Children::new(),
            word: None,
        }
    }

    /// Code point on the edge into this node, `None` for the root
    pub fn letter(&self) -> Option<char> {
        self.letter
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Terminal word, if a spelling ends here
    pub fn word(&self) -> Option<&Word> {
        self.word.as_ref()
    }

    /// Child edges in ascending code point order
    pub fn children(&self) -> impl ExactSizeIterator<Item = (char, NodeId)> + '_ {
        self.children.iter().copied()
    }

    /// Child reached through `letter`
    pub fn child(&self, letter: char) -> Option<NodeId> {
        self.children
            .binary_search_by_key(&letter, |&(c, _)| c)
            .ok()
            .map(|i| self.children[i].1)
    }

    /// Slot where `letter` is or would be inserted
    pub(crate) fn child_slot(&self, letter: char) -> Result<NodeId, usize> {
        self.children
            .binary_search_by_key(&letter, |&(c, _)| c)
            .map(|i| self.children[i].1)
    }
}
