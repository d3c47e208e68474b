//! Sentence segmentation over a compounded token stream

use crate::application::tokenizer::Token;
use serde::{Deserialize, Serialize};
use std::ops::Range;

/// Kind of a sentence-level span
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SentenceKind {
    /// Closed by a dot, exclamation or question mark, or left open at the end
    Sentence,
    /// Run closed by a tab without terminal punctuation
    NoSentence,
    /// Whitespace between sentences
    Separator,
    /// Standalone parenthesised group
    Parenthetical,
}

impl SentenceKind {
    /// Snake-case name, as serialized
    pub fn label(&self) -> &'static str {
        match self {
            SentenceKind::Sentence => "sentence",
            SentenceKind::NoSentence => "no_sentence",
            SentenceKind::Separator => "separator",
            SentenceKind::Parenthetical => "parenthetical",
        }
    }
}

/// Sentence as a range of token indices
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentenceSpan {
    pub kind: SentenceKind,
    pub range: Range<usize>,
}

impl SentenceSpan {
    fn new(kind: SentenceKind, range: Range<usize>) -> Self {
        Self { kind, range }
    }
}

/// Contiguous tokens forming one sentence-level span
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenSentence<'a> {
    tokens: Vec<Token<'a>>,
    kind: SentenceKind,
}

impl<'a> TokenSentence<'a> {
    pub fn new(tokens: Vec<Token<'a>>, kind: SentenceKind) -> Self {
        Self { tokens, kind }
    }

    pub fn tokens(&self) -> &[Token<'a>] {
        &self.tokens
    }

    pub fn kind(&self) -> SentenceKind {
        self.kind
    }

    /// Byte span from the first token's start to the last token's end
    pub fn span(&self) -> Range<usize> {
        match (self.tokens.first(), self.tokens.last()) {
            (Some(first), Some(last)) => first.start()..last.end(),
            _ => 0..0,
        }
    }

    /// Source text covered by the sentence
    pub fn text<'s>(&self, source: &'s str) -> &'s str {
        &source[self.span()]
    }
}

/// Group tokens into sentence spans in one forward pass
///
/// - a dot, `!` or `?` closes a sentence unless the open span starts with
///   an opening parenthesis;
/// - whitespace at the start of a span is consumed as a separator run;
/// - an opening parenthesis jumps to the first closing one after it, and is
///   emitted as a parenthetical when it starts a span; without a closing
///   parenthesis it is an ordinary token;
/// - a tab closes the open run as a non-sentence and is dropped;
/// - whatever remains at the end is flushed.
pub fn segment(tokens: &[Token<'_>]) -> Vec<SentenceSpan> {
    let n = tokens.len();
    let mut spans = Vec::new();
    let mut start = 0;
    let mut i = 0;

    while i < n {
        let token = &tokens[i];

        if token.is_sentence_end() && !tokens[start].is_open_paren() {
            spans.push(SentenceSpan::new(SentenceKind::Sentence, start..i + 1));
            i += 1;
            start = i;
            continue;
        }

        if token.is_whitespace() && i == start {
            let run_end = tokens[i..]
                .iter()
                .position(|t| !t.is_whitespace())
                .map_or(n, |offset| i + offset);
            spans.push(SentenceSpan::new(SentenceKind::Separator, i..run_end));
            i = run_end;
            start = i;
            continue;
        }

        if token.is_open_paren() {
            let close = tokens[i + 1..]
                .iter()
                .position(Token::is_close_paren)
                .map(|offset| i + 1 + offset);
            if let Some(close) = close {
                if i == start {
                    spans.push(SentenceSpan::new(
                        SentenceKind::Parenthetical,
                        start..close + 1,
                    ));
                    start = close + 1;
                }
                i = close + 1;
                continue;
            }
        }

        if token.is_tab() {
            if i > start {
                spans.push(SentenceSpan::new(SentenceKind::NoSentence, start..i));
            }
            i += 1;
            start = i;
            continue;
        }

        i += 1;
    }

    if start < n {
        let kind = if tokens[start].is_open_paren() && tokens[n - 1].is_close_paren() {
            SentenceKind::Parenthetical
        } else {
            SentenceKind::Sentence
        };
        spans.push(SentenceSpan::new(kind, start..n));
    }
    spans
}
