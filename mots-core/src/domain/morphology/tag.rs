//! Closed part-of-speech and punctuation tag set
//!
//! Codes are stable: they are written as-is into binary lexicon archives.

use crate::error::{Error, Result, VocabularyKind};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Part-of-speech, punctuation or symbol class of a word variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum Tag {
    /// No tag recorded
    #[default]
    Untagged = 0,
    Noun = 1,
    Preposition = 2,
    Adverb = 3,
    Verb = 4,
    Adjective = 5,
    NominalDeterminer = 6,
    Prefix = 7,
    /// Proper noun group
    Gnp = 8,
    /// Extended proper noun group
    Gnpx = 9,
    SubordinatingConjunction = 10,
    Conjunction = 11,
    /// Noun group
    Gn = 12,
    CoordinatingConjunction = 13,
    Pronoun = 14,
    PrepositionAdjective = 15,
    PrepositionDeterminer = 16,
    PrepositionPronoun = 17,
    Interjection = 18,
    Determiner = 19,
    /// English pronoun class
    Pron = 20,
    /// Verb-adjective
    Va = 21,
    /// Noun-adjective
    Na = 22,
    ClarkN = 23,
    GheryN = 24,
    GWellsN = 25,
    MayerN = 26,
    Nes = 27,
    MaughamN = 28,
    /// Adverb-adjective
    Adva = 29,
    CFieldsN = 30,
    X = 31,
    Pcdn3 = 32,
    Xi = 33,
    Particle = 34,
    Predicate = 35,
    HartN = 36,
    Abbreviation = 37,
    // punctuation
    Tab = 38,
    QuotationMark = 39,
    BeginQuotation = 40,
    EndQuotation = 41,
    Apostrophe = 42,
    Slash = 43,
    Dash = 44,
    GreaterThan = 45,
    LessThan = 46,
    Space = 47,
    Comma = 48,
    Semicolon = 49,
    Dot = 50,
    Colon = 51,
    ExclamationMark = 52,
    QuestionMark = 53,
    BeginParenthesis = 54,
    EndParenthesis = 55,
    BeginBracket = 56,
    EndBracket = 57,
    // symbols
    NumberSign = 58,
    DollarSign = 59,
    CopyrightSign = 60,
    AtSign = 61,
    /// Non-breaking space
    Nbsp = 62,
    Ampersand = 63,
    Pipe = 64,
    Eol = 65,
    CarriageReturn = 66,
}

impl Tag {
    /// First tag of the punctuation and symbol range
    pub const FIRST_PUNCTUATION: Tag = Tag::Tab;

    /// Every tag, indexed by code
    pub const ALL: [Tag; 67] = [
        Tag::Untagged,
        Tag::Noun,
        Tag::Preposition,
        Tag::Adverb,
        Tag::Verb,
        Tag::Adjective,
        Tag::NominalDeterminer,
        Tag::Prefix,
        Tag::Gnp,
        Tag::Gnpx,
        Tag::SubordinatingConjunction,
        Tag::Conjunction,
        Tag::Gn,
        Tag::CoordinatingConjunction,
        Tag::Pronoun,
        Tag::PrepositionAdjective,
        Tag::PrepositionDeterminer,
        Tag::PrepositionPronoun,
        Tag::Interjection,
        Tag::Determiner,
        Tag::Pron,
        Tag::Va,
        Tag::Na,
        Tag::ClarkN,
        Tag::GheryN,
        Tag::GWellsN,
        Tag::MayerN,
        Tag::Nes,
        Tag::MaughamN,
        Tag::Adva,
        Tag::CFieldsN,
        Tag::X,
        Tag::Pcdn3,
        Tag::Xi,
        Tag::Particle,
        Tag::Predicate,
        Tag::HartN,
        Tag::Abbreviation,
        Tag::Tab,
        Tag::QuotationMark,
        Tag::BeginQuotation,
        Tag::EndQuotation,
        Tag::Apostrophe,
        Tag::Slash,
        Tag::Dash,
        Tag::GreaterThan,
        Tag::LessThan,
        Tag::Space,
        Tag::Comma,
        Tag::Semicolon,
        Tag::Dot,
        Tag::Colon,
        Tag::ExclamationMark,
        Tag::QuestionMark,
        Tag::BeginParenthesis,
        Tag::EndParenthesis,
        Tag::BeginBracket,
        Tag::EndBracket,
        Tag::NumberSign,
        Tag::DollarSign,
        Tag::CopyrightSign,
        Tag::AtSign,
        Tag::Nbsp,
        Tag::Ampersand,
        Tag::Pipe,
        Tag::Eol,
        Tag::CarriageReturn,
    ];

    /// Archive code of the tag
    #[inline]
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Decode an archive code
    pub fn from_code(code: u8) -> Result<Self> {
        Self::ALL
            .get(code as usize)
            .copied()
            .ok_or_else(|| Error::unknown(VocabularyKind::Tag, code))
    }

    /// True for the punctuation and symbol sub-range
    #[inline]
    pub fn is_punctuation(self) -> bool {
        self >= Self::FIRST_PUNCTUATION
    }

    /// True for tags that mark inter-word whitespace
    #[inline]
    pub fn is_whitespace(self) -> bool {
        matches!(
            self,
            Tag::Space | Tag::Nbsp | Tag::Eol | Tag::CarriageReturn
        )
    }

    /// Map a part-of-speech name of the dictionary source format
    ///
    /// The empty name maps to [`Tag::Untagged`]; any other name outside the
    /// table is reported as unknown vocabulary.
    pub fn from_source_name(name: &str) -> Result<Self> {
        let tag = match name {
            "" => Tag::Untagged,
            "noun" => Tag::Noun,
            "prep" => Tag::Preposition,
            "adverb" => Tag::Adverb,
            "verb" => Tag::Verb,
            "adj" => Tag::Adjective,
            "nominaldet" => Tag::NominalDeterminer,
            "prefix" => Tag::Prefix,
            "GNP" => Tag::Gnp,
            "GNPX" => Tag::Gnpx,
            "conjs" => Tag::SubordinatingConjunction,
            "conj" => Tag::Conjunction,
            "GN" => Tag::Gn,
            "conjc" => Tag::CoordinatingConjunction,
            "pronoun" => Tag::Pronoun,
            "prepadj" => Tag::PrepositionAdjective,
            "prepdet" => Tag::PrepositionDeterminer,
            "preppro" => Tag::PrepositionPronoun,
            "intj" => Tag::Interjection,
            "det" => Tag::Determiner,
            "PRON" => Tag::Pron,
            "VA" => Tag::Va,
            "NA" => Tag::Na,
            " Clark.N" => Tag::ClarkN,
            " Ghery.N" => Tag::GheryN,
            " G\\. Wells.N" => Tag::GWellsN,
            " Mayer.N" => Tag::MayerN,
            "NES" => Tag::Nes,
            " Maugham.N" => Tag::MaughamN,
            "ADVA" => Tag::Adva,
            " C\\. Fields.N" => Tag::CFieldsN,
            "X" => Tag::X,
            "PCDN3" => Tag::Pcdn3,
            "XI" => Tag::Xi,
            "PART" => Tag::Particle,
            "PRED" => Tag::Predicate,
            " Hart.N" => Tag::HartN,
            "abbr" => Tag::Abbreviation,
            "tab" => Tag::Tab,
            "quotationmark" => Tag::QuotationMark,
            "beginquotation" => Tag::BeginQuotation,
            "endquotation" => Tag::EndQuotation,
            "apos" => Tag::Apostrophe,
            "dash" => Tag::Dash,
            "space" => Tag::Space,
            "comma" => Tag::Comma,
            "dot" => Tag::Dot,
            "colon" => Tag::Colon,
            "exclamationmark" => Tag::ExclamationMark,
            "questionmark" => Tag::QuestionMark,
            "beginparenthesis" => Tag::BeginParenthesis,
            "endparenthesis" => Tag::EndParenthesis,
            other => return Err(Error::unknown(VocabularyKind::Tag, other)),
        };
        Ok(tag)
    }
}

impl TryFrom<u8> for Tag {
    type Error = Error;

    fn try_from(code: u8) -> Result<Self> {
        Tag::from_code(code)
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:?}")
    }
}
