//! Tokens produced by the tokenizer

use super::classifier::PatternClass;
use crate::domain::morphology::{Tag, Word};
use std::ops::Range;

/// How a token span was resolved
///
/// A span resolves to at most one outcome: a lexicon word or one pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenClass<'a> {
    Word(&'a Word),
    Number,
    Time,
    Date,
    Temperature,
    Url,
    Unresolved,
}

impl From<PatternClass> for TokenClass<'_> {
    fn from(class: PatternClass) -> Self {
        match class {
            PatternClass::Number => TokenClass::Number,
            PatternClass::Time => TokenClass::Time,
            PatternClass::Date => TokenClass::Date,
            PatternClass::Temperature => TokenClass::Temperature,
            PatternClass::Url => TokenClass::Url,
        }
    }
}

impl TokenClass<'_> {
    /// Short label used in reports
    pub fn label(&self) -> &'static str {
        match self {
            TokenClass::Word(_) => "word",
            TokenClass::Number => "number",
            TokenClass::Time => "time",
            TokenClass::Date => "date",
            TokenClass::Temperature => "temperature",
            TokenClass::Url => "url",
            TokenClass::Unresolved => "unresolved",
        }
    }
}

/// Half-open byte span of the source text with its classification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    start: usize,
    end: usize,
    class: TokenClass<'a>,
    is_upper: bool,
}

impl<'a> Token<'a> {
    pub fn new(span: Range<usize>, class: TokenClass<'a>, is_upper: bool) -> Self {
        debug_assert!(span.start < span.end, "tokens are never empty");
        Self {
            start: span.start,
            end: span.end,
            class,
            is_upper,
        }
    }

    #[inline]
    pub fn start(&self) -> usize {
        self.start
    }

    #[inline]
    pub fn end(&self) -> usize {
        self.end
    }

    #[inline]
    pub fn span(&self) -> Range<usize> {
        self.start..self.end
    }

    /// Slice of `source` covered by the token
    pub fn text<'s>(&self, source: &'s str) -> &'s str {
        &source[self.span()]
    }

    #[inline]
    pub fn class(&self) -> TokenClass<'a> {
        self.class
    }

    /// Lexicon word, if the span resolved to one
    pub fn word(&self) -> Option<&'a Word> {
        match self.class {
            TokenClass::Word(word) => Some(word),
            _ => None,
        }
    }

    pub fn is_number(&self) -> bool {
        self.class == TokenClass::Number
    }

    pub fn is_time(&self) -> bool {
        self.class == TokenClass::Time
    }

    pub fn is_date(&self) -> bool {
        self.class == TokenClass::Date
    }

    pub fn is_temperature(&self) -> bool {
        self.class == TokenClass::Temperature
    }

    pub fn is_url(&self) -> bool {
        self.class == TokenClass::Url
    }

    /// Initial code point is uppercase
    pub fn is_upper(&self) -> bool {
        self.is_upper
    }

    /// Word or pattern match
    pub fn is_resolved(&self) -> bool {
        self.class != TokenClass::Unresolved
    }

    /// Whether the resolved word carries `tag`
    pub fn is_tagged(&self, tag: Tag) -> bool {
        self.word().is_some_and(|w| w.is_tagged(tag))
    }

    /// Dot, exclamation or question mark
    pub fn is_sentence_end(&self) -> bool {
        self.word().is_some_and(|w| {
            w.is_tagged(Tag::Dot)
                || w.is_tagged(Tag::ExclamationMark)
                || w.is_tagged(Tag::QuestionMark)
        })
    }

    /// Space, non-breaking space, end of line or carriage return
    pub fn is_whitespace(&self) -> bool {
        self.word()
            .is_some_and(|w| w.variants().iter().any(|v| v.tag.is_whitespace()))
    }

    pub fn is_tab(&self) -> bool {
        self.is_tagged(Tag::Tab)
    }

    pub fn is_open_paren(&self) -> bool {
        self.is_tagged(Tag::BeginParenthesis)
    }

    pub fn is_close_paren(&self) -> bool {
        self.is_tagged(Tag::EndParenthesis)
    }
}
