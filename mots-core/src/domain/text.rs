//! Character predicates shared by the lexicon and the tokenizer

use regex::Regex;
use std::ops::Range;
use std::sync::OnceLock;

static PUNCTUATION: OnceLock<Regex> = OnceLock::new();

/// Unicode general category P (all punctuation)
pub fn is_punctuation(c: char) -> bool {
    if c.is_ascii() {
        return matches!(
            c,
            '!' | '"'
                | '#'
                | '%'
                | '&'
                | '\''
                | '('
                | ')'
                | '*'
                | ','
                | '-'
                | '.'
                | '/'
                | ':'
                | ';'
                | '?'
                | '@'
                | '['
                | '\\'
                | ']'
                | '_'
                | '{'
                | '}'
        );
    }
    let re = PUNCTUATION
        .get_or_init(|| Regex::new(r"^\p{P}$").expect("punctuation class is a valid pattern"));
    let mut buf = [0u8; 4];
    re.is_match(c.encode_utf8(&mut buf))
}

/// Code points that end a run in the primary split
///
/// Punctuation and whitespace split, except `&` so that entity-like text
/// such as `AT&T` stays in one run.
#[inline]
pub fn is_separator(c: char) -> bool {
    c != '&' && (c.is_whitespace() || is_punctuation(c))
}

/// Primary split: separator code points stand alone, runs between them are
/// kept whole
///
/// The produced ranges are byte offsets that tile `text` exactly.
pub fn split_runs(text: &str) -> SplitRuns<'_> {
    SplitRuns {
        text,
        chars: text.char_indices().peekable(),
    }
}

/// Iterator returned by [`split_runs`]
#[derive(Debug, Clone)]
pub struct SplitRuns<'a> {
    text: &'a str,
    chars: std::iter::Peekable<std::str::CharIndices<'a>>,
}

impl Iterator for SplitRuns<'_> {
    type Item = Range<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        let (start, first) = self.chars.next()?;
        if is_separator(first) {
            return Some(start..start + first.len_utf8());
        }
        while let Some(&(index, c)) = self.chars.peek() {
            if is_separator(c) {
                return Some(start..index);
            }
            self.chars.next();
        }
        Some(start..self.text.len())
    }
}

/// Number of primary-split tokens beyond the first that `spelling` spans
pub fn extra_tokens(spelling: &str) -> usize {
    split_runs(spelling).count().saturating_sub(1)
}

/// Lowercase letters and hyphens only
pub fn is_plain_word(s: &str) -> bool {
    s.chars()
        .all(|c| (c.is_alphabetic() || c == '-') && !c.is_uppercase())
}

/// Capitalised run of letters and hyphens that is not entirely uppercase
pub fn is_proper_noun_shape(s: &str) -> bool {
    let Some(first) = s.chars().next() else {
        return false;
    };
    if !(first.is_uppercase() && first.is_alphabetic()) {
        return false;
    }
    let mut all_upper = true;
    for c in s.chars() {
        if !c.is_alphabetic() && c != '-' {
            return false;
        }
        if !c.is_uppercase() && c != '-' {
            all_upper = false;
        }
    }
    !all_upper
}

/// Whether the first code point is uppercase
#[inline]
pub fn starts_uppercase(s: &str) -> bool {
    s.chars().next().is_some_and(char::is_uppercase)
}
