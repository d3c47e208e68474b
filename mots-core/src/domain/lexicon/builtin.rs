//! Punctuation, whitespace and symbol entries every lexicon needs

use crate::domain::morphology::Tag;

/// Spellings registered by [`Lexicon::add_builtins`](super::Lexicon::add_builtins)
pub const BUILTIN_ENTRIES: &[(&str, Tag)] = &[
    ("\t", Tag::Tab),
    ("\n", Tag::Eol),
    ("\r", Tag::CarriageReturn),
    (" ", Tag::Space),
    ("\u{a0}", Tag::Nbsp),
    ("/", Tag::Slash),
    (">", Tag::GreaterThan),
    ("<", Tag::LessThan),
    ("&", Tag::Ampersand),
    ("|", Tag::Pipe),
    ("[", Tag::BeginBracket),
    ("]", Tag::EndBracket),
    ("#", Tag::NumberSign),
    ("$", Tag::DollarSign),
    ("@", Tag::AtSign),
    ("©", Tag::CopyrightSign),
    (",", Tag::Comma),
    (";", Tag::Semicolon),
    (".", Tag::Dot),
    ("...", Tag::Dot),
    ("…", Tag::Dot),
    (":", Tag::Colon),
    ("!", Tag::ExclamationMark),
    ("?", Tag::QuestionMark),
    ("(", Tag::BeginParenthesis),
    (")", Tag::EndParenthesis),
    ("'", Tag::Apostrophe),
    ("’", Tag::Apostrophe),
    ("\"", Tag::QuotationMark),
    ("«", Tag::BeginQuotation),
    ("»", Tag::EndQuotation),
    ("“", Tag::BeginQuotation),
    ("”", Tag::EndQuotation),
    ("-", Tag::Dash),
    ("–", Tag::Dash),
    ("—", Tag::Dash),
];
