//! Terminal payload of a lexicon entry

use super::{Language, Tag, WordVariant};
use crate::domain::lexicon::NodeId;
use smallvec::SmallVec;

/// Variant storage; most spellings carry one or two readings
pub type Variants = SmallVec<[WordVariant; 2]>;

/// Ordered set of readings registered under one spelling
///
/// A word lives inside the lexicon node that ends its spelling; `node`
/// points back at that node so the spelling can be rebuilt with
/// [`Lexicon::spelling`](crate::Lexicon::spelling).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    variants: Variants,
    node: NodeId,
}

impl Word {
    pub(crate) fn new(node: NodeId) -> Self {
        Self {
            variants: Variants::new(),
            node,
        }
    }

    /// Readings in first-seen order
    #[inline]
    pub fn variants(&self) -> &[WordVariant] {
        &self.variants
    }

    /// Trie node ending this word's spelling
    #[inline]
    pub fn node(&self) -> NodeId {
        self.node
    }

    /// Set union by structural equality, keeping first-seen order
    pub fn add_variants<I>(&mut self, variants: I)
    where
        I: IntoIterator<Item = WordVariant>,
    {
        for variant in variants {
            if !self.variants.contains(&variant) {
                self.variants.push(variant);
            }
        }
    }

    /// Exactly one reading, and it is a punctuation or symbol tag
    pub fn is_punctuation(&self) -> bool {
        match self.variants.as_slice() {
            [only] => only.tag.is_punctuation(),
            _ => false,
        }
    }

    /// Whether any reading belongs to `language`
    pub fn has_language(&self, language: Language) -> bool {
        self.variants.iter().any(|v| v.language == language)
    }

    /// Whether any reading carries `tag`
    pub fn is_tagged(&self, tag: Tag) -> bool {
        self.variants.iter().any(|v| v.tag == tag)
    }

    /// Readings with the given tag and language
    pub fn variants_by_tag(
        &self,
        tag: Tag,
        language: Language,
    ) -> impl Iterator<Item = &WordVariant> + '_ {
        self.variants
            .iter()
            .filter(move |v| v.tag == tag && v.language == language)
    }
}
