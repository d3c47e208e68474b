//! Lexicon trie keyed by Unicode code point
//!
//! Nodes live in an arena owned by the [`Lexicon`]; edges and parent links
//! are [`NodeId`] indices, so no node owns another. A spelling is the path
//! from the root to the node holding its [`Word`].

mod builtin;
mod node;
mod walk;

pub use builtin::BUILTIN_ENTRIES;
pub use node::{LexiconNode, NodeId};
pub use walk::{CancellationToken, Walk};

use crate::domain::morphology::{Word, WordVariant};
use crate::domain::text;
use crate::error::{Error, Result};

/// Result of an exact lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lookup<'a> {
    /// Terminal word at the end of the path
    pub word: Option<&'a Word>,
    /// Whether every code point of the spelling has a node, terminal or not
    pub path_exists: bool,
}

impl Lookup<'_> {
    const MISSING: Lookup<'static> = Lookup {
        word: None,
        path_exists: false,
    };
}

/// Spelling to variant-set mapping stored as a trie
#[derive(Debug, Clone)]
pub struct Lexicon {
    nodes: Vec<LexiconNode>,
    word_count: usize,
    max_spelling_len: usize,
    max_entry_tokens: usize,
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::new()
    }
}

impl Lexicon {
    /// Empty lexicon holding only the root
    pub fn new() -> Self {
        Self {
            nodes: vec![LexiconNode::root()],
            word_count: 0,
            max_spelling_len: 0,
            max_entry_tokens: 0,
        }
    }

    /// Empty lexicon with the builtin punctuation entries
    pub fn with_builtins() -> Self {
        let mut lexicon = Self::new();
        lexicon.add_builtins();
        lexicon
    }

    /// Register `variants` under `spelling`
    ///
    /// Variants are merged into an existing word by set union; otherwise a
    /// new word is installed at the end node. Returns that node.
    pub fn insert<I>(&mut self, spelling: &str, variants: I) -> Result<NodeId>
    where
        I: IntoIterator<Item = WordVariant>,
    {
        if spelling.is_empty() {
            return Err(Error::EmptySpelling);
        }
        Ok(self.insert_nonempty(spelling, variants))
    }

    fn insert_nonempty<I>(&mut self, spelling: &str, variants: I) -> NodeId
    where
        I: IntoIterator<Item = WordVariant>,
    {
        let mut current = NodeId::ROOT;
        let mut length = 0;
        for letter in spelling.chars() {
            length += 1;
            current = match self.nodes[current.index()].child_slot(letter) {
                Ok(child) => child,
                Err(slot) => {
                    let child = NodeId::from_index(self.nodes.len());
                    self.nodes.push(LexiconNode::child_of(current, letter));
                    self.nodes[current.index()]
                        .children
                        .insert(slot, (letter, child));
                    child
                }
            };
        }

        let node = &mut self.nodes[current.index()];
        let word_count = &mut self.word_count;
        node.word
            .get_or_insert_with(|| {
                *word_count += 1;
                Word::new(current)
            })
            .add_variants(variants);

        self.max_spelling_len = self.max_spelling_len.max(length);
        self.max_entry_tokens = self.max_entry_tokens.max(text::extra_tokens(spelling));
        current
    }

    /// Insert the builtin punctuation, whitespace and symbol entries
    pub fn add_builtins(&mut self) {
        for &(spelling, tag) in BUILTIN_ENTRIES {
            self.insert_nonempty(spelling, [WordVariant::tagged(tag)]);
        }
    }

    /// Exact lookup that also reports whether the path exists
    pub fn lookup(&self, spelling: &str) -> Lookup<'_> {
        let mut current = NodeId::ROOT;
        for letter in spelling.chars() {
            match self.node(current).child(letter) {
                Some(child) => current = child,
                None => return Lookup::MISSING,
            }
        }
        Lookup {
            word: self.node(current).word(),
            path_exists: true,
        }
    }

    /// Exact lookup of a terminal word
    pub fn get(&self, spelling: &str) -> Option<&Word> {
        self.lookup(spelling).word
    }

    /// Longest entry whose spelling is a prefix of `spelling`
    pub fn longest_prefix(&self, spelling: &str) -> Option<&Word> {
        let mut current = NodeId::ROOT;
        let mut found = None;
        for letter in spelling.chars() {
            let Some(child) = self.node(current).child(letter) else {
                break;
            };
            current = child;
            if let Some(word) = self.node(current).word() {
                found = Some(word);
            }
        }
        found
    }

    /// Node reached by following `spelling`, terminal or not
    ///
    /// The empty spelling reaches no node.
    pub fn find_path(&self, spelling: &str) -> Option<NodeId> {
        if spelling.is_empty() {
            return None;
        }
        spelling
            .chars()
            .try_fold(NodeId::ROOT, |current, letter| self.node(current).child(letter))
    }

    /// Node by id
    ///
    /// # Panics
    ///
    /// Panics if `id` was not produced by this lexicon.
    pub fn node(&self, id: NodeId) -> &LexiconNode {
        &self.nodes[id.index()]
    }

    /// Every word in the subtree at `find_path(prefix)`, prefix entry included
    pub fn prefix_walk(&self, prefix: &str) -> Walk<'_> {
        match self.find_path(prefix) {
            Some(start) => Walk::subtree(&self.nodes, start),
            None => Walk::empty(&self.nodes),
        }
    }

    /// Every word whose spelling is exactly `length` code points long
    pub fn fixed_length_walk(&self, length: usize) -> Walk<'_> {
        Walk::at_depth(&self.nodes, NodeId::ROOT, length)
    }

    /// Every word of the lexicon
    pub fn walk(&self) -> Walk<'_> {
        Walk::subtree(&self.nodes, NodeId::ROOT)
    }

    /// Walk below `start`, optionally restricted to words `depth` code
    /// points below it
    pub(crate) fn walk_from(&self, start: NodeId, depth: Option<usize>) -> Walk<'_> {
        match depth {
            Some(depth) => Walk::at_depth(&self.nodes, start, depth),
            None => Walk::subtree(&self.nodes, start),
        }
    }

    /// Rebuild the spelling of `word` from its node's parent chain
    pub fn spelling(&self, word: &Word) -> String {
        self.spelling_at(word.node())
    }

    /// Spelling of the path ending at `id`
    pub fn spelling_at(&self, id: NodeId) -> String {
        let mut letters = Vec::new();
        let mut current = Some(id);
        while let Some(node) = current.map(|id| self.node(id)) {
            letters.extend(node.letter());
            current = node.parent();
        }
        letters.iter().rev().collect()
    }

    /// Number of terminal words
    pub fn word_count(&self) -> usize {
        self.word_count
    }

    /// Number of nodes, root included
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.word_count == 0
    }

    /// Longest inserted spelling in code points
    pub fn max_spelling_len(&self) -> usize {
        self.max_spelling_len
    }

    /// Most primary-split tokens beyond the first spanned by one entry
    pub fn max_entry_tokens(&self) -> usize {
        self.max_entry_tokens
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::morphology::{Language, Tag};

    fn noun(language: Language) -> WordVariant {
        WordVariant::new(Tag::Noun, language)
    }

    fn sample() -> Lexicon {
        let mut lexicon = Lexicon::new();
        for spelling in ["test", "tester", "testament", "table", "été"] {
            lexicon.insert(spelling, [noun(Language::French)]).unwrap();
        }
        lexicon
    }

    fn spellings<'a>(lexicon: &Lexicon, walk: impl Iterator<Item = &'a Word>) -> Vec<String> {
        walk.map(|w| lexicon.spelling(w)).collect()
    }

    #[test]
    fn test_insert_is_idempotent() {
        let mut lexicon = Lexicon::new();
        let first = lexicon.insert("chat", [noun(Language::French)]).unwrap();
        let second = lexicon.insert("chat", [noun(Language::French)]).unwrap();
        assert_eq!(first, second);
        assert_eq!(lexicon.word_count(), 1);
        assert_eq!(lexicon.get("chat").unwrap().variants().len(), 1);
    }

    #[test]
    fn test_insert_merges_homographs() {
        let mut lexicon = Lexicon::new();
        lexicon.insert("chat", [noun(Language::French)]).unwrap();
        lexicon.insert("chat", [WordVariant::new(Tag::Verb, Language::English)]).unwrap();
        let word = lexicon.get("chat").unwrap();
        assert_eq!(word.variants().len(), 2);
        assert_eq!(word.variants()[0], noun(Language::French));
    }

    #[test]
    fn test_empty_spelling_is_rejected() {
        let mut lexicon = Lexicon::new();
        assert!(matches!(
            lexicon.insert("", [noun(Language::French)]),
            Err(Error::EmptySpelling)
        ));
        assert_eq!(lexicon.node_count(), 1);
    }

    #[test]
    fn test_lookup_reports_path() {
        let lexicon = sample();
        let hit = lexicon.lookup("test");
        assert!(hit.word.is_some() && hit.path_exists);

        let inner = lexicon.lookup("tes");
        assert!(inner.word.is_none());
        assert!(inner.path_exists);

        assert_eq!(lexicon.lookup("tesla"), Lookup::MISSING);
    }

    #[test]
    fn test_longest_prefix() {
        let lexicon = sample();
        let word = lexicon.longest_prefix("testeraient").unwrap();
        assert_eq!(lexicon.spelling(word), "tester");
        let word = lexicon.longest_prefix("testx").unwrap();
        assert_eq!(lexicon.spelling(word), "test");
        assert!(lexicon.longest_prefix("tes").is_none());
        assert!(lexicon.longest_prefix("").is_none());
    }

    #[test]
    fn test_find_path() {
        let lexicon = sample();
        assert!(lexicon.find_path("").is_none());
        assert!(lexicon.find_path("xyz").is_none());
        let node = lexicon.find_path("tab").unwrap();
        assert_eq!(lexicon.spelling_at(node), "tab");
        assert!(lexicon.node(node).word().is_none());
    }

    #[test]
    fn test_walks_are_depth_first_in_code_point_order() {
        let lexicon = sample();
        assert_eq!(
            spellings(&lexicon, lexicon.walk()),
            vec!["table", "test", "testament", "tester", "été"]
        );
        assert_eq!(
            spellings(&lexicon, lexicon.prefix_walk("test")),
            vec!["test", "testament", "tester"]
        );
        assert!(lexicon.prefix_walk("z").next().is_none());
        assert_eq!(
            spellings(&lexicon, lexicon.fixed_length_walk(3)),
            vec!["été"]
        );
        assert_eq!(
            spellings(&lexicon, lexicon.fixed_length_walk(6)),
            vec!["tester"]
        );
        assert!(lexicon.fixed_length_walk(0).next().is_none());
    }

    #[test]
    fn test_cancelled_walk_stops() {
        let lexicon = sample();
        let token = CancellationToken::new();
        let mut walk = lexicon.walk().with_cancellation(token.clone());
        assert!(walk.next().is_some());
        token.cancel();
        assert!(walk.next().is_none());
        assert!(walk.was_cancelled());
    }

    #[test]
    fn test_aggregates() {
        let mut lexicon = sample();
        assert_eq!(lexicon.max_spelling_len(), 9);
        assert_eq!(lexicon.max_entry_tokens(), 0);
        lexicon
            .insert("aujourd'hui", [WordVariant::new(Tag::Adverb, Language::French)])
            .unwrap();
        assert_eq!(lexicon.max_entry_tokens(), 2);
        assert_eq!(lexicon.max_spelling_len(), 11);
        lexicon.insert("a", [noun(Language::French)]).unwrap();
        assert_eq!(lexicon.max_spelling_len(), 11);
    }

    #[test]
    fn test_builtins() {
        let lexicon = Lexicon::with_builtins();
        assert!(lexicon.get(".").unwrap().is_tagged(Tag::Dot));
        assert!(lexicon.get("...").unwrap().is_punctuation());
        assert!(lexicon.get(" ").unwrap().is_tagged(Tag::Space));
        assert!(lexicon.get("\u{a0}").unwrap().is_tagged(Tag::Nbsp));
        assert_eq!(lexicon.word_count(), BUILTIN_ENTRIES.len());
        assert_eq!(lexicon.max_entry_tokens(), 2);
    }
}
