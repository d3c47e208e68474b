//! Shallow phrase matching on tag sequences

use crate::application::tokenizer::Token;
use crate::domain::morphology::Tag;
use serde::{Deserialize, Serialize};
use std::ops::Range;

/// Phrase kinds recognised by the built-in definitions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PhraseKind {
    /// Bare noun
    Noun,
    /// Determiner and noun
    DeterminerNoun,
    /// Determiner, adjective and noun
    DeterminerAdjectiveNoun,
    /// Determiner, noun and adjective
    DeterminerNounAdjective,
}

/// Tag sequence that makes up a phrase
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhraseDef {
    pub tags: Vec<Tag>,
    pub kind: PhraseKind,
}

impl PhraseDef {
    pub fn new(kind: PhraseKind, tags: impl Into<Vec<Tag>>) -> Self {
        Self {
            tags: tags.into(),
            kind,
        }
    }

    /// Match at the start of `tokens`; whitespace tokens are skipped
    fn matches(&self, tokens: &[Token<'_>]) -> Option<Phrase> {
        let mut tags = self.tags.iter().peekable();
        for (index, token) in tokens.iter().enumerate() {
            if token.is_whitespace() {
                continue;
            }
            let tag = *tags.next()?;
            if !token.is_tagged(tag) {
                return None;
            }
            if tags.peek().is_none() {
                return Some(Phrase {
                    kind: self.kind,
                    range: 0..index + 1,
                });
            }
        }
        None
    }
}

/// Matched phrase as a range of token indices
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Phrase {
    pub kind: PhraseKind,
    /// Every consumed token: starts at 0, so leading whitespace is included
    pub range: Range<usize>,
}

/// Ordered phrase definitions; the first full match wins
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grammar {
    pub defs: Vec<PhraseDef>,
}

impl Grammar {
    pub fn new(defs: Vec<PhraseDef>) -> Self {
        Self { defs }
    }

    /// Noun phrase definitions, longest first
    pub fn noun_phrases() -> Self {
        Self::new(vec![
            PhraseDef::new(
                PhraseKind::DeterminerAdjectiveNoun,
                [Tag::Determiner, Tag::Adjective, Tag::Noun],
            ),
            PhraseDef::new(
                PhraseKind::DeterminerNounAdjective,
                [Tag::Determiner, Tag::Noun, Tag::Adjective],
            ),
            PhraseDef::new(PhraseKind::DeterminerNoun, [Tag::Determiner, Tag::Noun]),
            PhraseDef::new(PhraseKind::Noun, [Tag::Noun]),
        ])
    }

    /// Match the definitions in order against the start of `tokens`
    pub fn match_tokens(&self, tokens: &[Token<'_>]) -> Option<Phrase> {
        self.defs.iter().find_map(|def| def.matches(tokens))
    }
}
