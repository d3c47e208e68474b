//! One morphological reading of a spelling

use super::{Tag, Word};
use crate::error::{Error, Result, VocabularyKind};
use bitflags::bitflags;
use serde::{Deserialize, Serialize};

/// Language of a reading
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum Language {
    /// Shared entries: punctuation, proper nouns, acronyms
    #[default]
    Unspecified = 0,
    English = 1,
    French = 2,
}

impl Language {
    /// Decode an archive code
    pub fn from_code(code: u8) -> Result<Self> {
        match code {
            0 => Ok(Language::Unspecified),
            1 => Ok(Language::English),
            2 => Ok(Language::French),
            other => Err(Error::unknown(VocabularyKind::Language, other)),
        }
    }

    /// Parse a language code such as `fr` or `english`
    pub fn from_name(name: &str) -> Result<Self> {
        match name.to_lowercase().as_str() {
            "en" | "eng" | "english" => Ok(Language::English),
            "fr" | "fra" | "french" => Ok(Language::French),
            "" | "none" | "any" => Ok(Language::Unspecified),
            _ => Err(Error::unknown(VocabularyKind::Language, name)),
        }
    }

    /// Short code
    pub fn code(&self) -> &'static str {
        match self {
            Language::Unspecified => "",
            Language::English => "en",
            Language::French => "fr",
        }
    }
}

/// Grammatical gender
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum Gender {
    #[default]
    None = 0,
    Male = 1,
    Female = 2,
}

impl Gender {
    /// Decode an archive code
    pub fn from_code(code: u8) -> Result<Self> {
        match code {
            0 => Ok(Gender::None),
            1 => Ok(Gender::Male),
            2 => Ok(Gender::Female),
            other => Err(Error::unknown(VocabularyKind::Gender, other)),
        }
    }
}

/// Semantic subcategory of nouns and pronouns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum Subcategory {
    #[default]
    None = 0,
    Human = 1,
    Animal = 2,
    Concrete = 3,
    Abstract = 4,
    Unit = 5,
    Indefinite = 6,
    Temporal = 7,
    Demonstrative = 8,
}

impl Subcategory {
    /// Decode an archive code
    pub fn from_code(code: u8) -> Result<Self> {
        let subcategory = match code {
            0 => Subcategory::None,
            1 => Subcategory::Human,
            2 => Subcategory::Animal,
            3 => Subcategory::Concrete,
            4 => Subcategory::Abstract,
            5 => Subcategory::Unit,
            6 => Subcategory::Indefinite,
            7 => Subcategory::Temporal,
            8 => Subcategory::Demonstrative,
            other => return Err(Error::unknown(VocabularyKind::Subcategory, other)),
        };
        Ok(subcategory)
    }
}

/// Verb tense or mood
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum Tense {
    #[default]
    None = 0,
    Indicative = 1,
    Gerund = 2,
    Subjunctive = 3,
    PastParticiple = 4,
    Imperative = 5,
    Conditional = 6,
    Infinitive = 7,
}

impl Tense {
    /// Decode an archive code
    pub fn from_code(code: u8) -> Result<Self> {
        let tense = match code {
            0 => Tense::None,
            1 => Tense::Indicative,
            2 => Tense::Gerund,
            3 => Tense::Subjunctive,
            4 => Tense::PastParticiple,
            5 => Tense::Imperative,
            6 => Tense::Conditional,
            7 => Tense::Infinitive,
            other => return Err(Error::unknown(VocabularyKind::Tense, other)),
        };
        Ok(tense)
    }
}

bitflags! {
    /// Lexical flags of a reading
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    #[serde(transparent)]
    pub struct VariantFlags: u8 {
        const PROPER = 0x01;
        const SUBCAT = 0x02;
        const COMPOUND = 0x04;
        const COLLECTIVE_DETERMINER = 0x08;
        const POSTPOSED = 0x10;
        const COLLECTIVE = 0x20;
        const DEMONSTRATIVE_PROCATEGORY = 0x40;
    }
}

bitflags! {
    /// Grammatical number bits; archives may carry both
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    #[serde(transparent)]
    pub struct Number: u8 {
        const SINGULAR = 0x1;
        const PLURAL = 0x2;
    }
}

/// One morphological reading of a spelling
///
/// Equality is structural over all eight fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct WordVariant {
    pub tag: Tag,
    pub language: Language,
    pub flags: VariantFlags,
    pub subcategory: Subcategory,
    pub gender: Gender,
    pub number: Number,
    /// Verb person, 0 when not applicable
    pub person: u8,
    pub tense: Tense,
}

impl WordVariant {
    /// Size of a variant in the binary archive
    pub const ENCODED_LEN: usize = 8;

    /// Reading with only a tag set
    pub fn tagged(tag: Tag) -> Self {
        Self {
            tag,
            ..Self::default()
        }
    }

    /// Reading with a tag and a language
    pub fn new(tag: Tag, language: Language) -> Self {
        Self {
            tag,
            language,
            ..Self::default()
        }
    }

    pub fn with_gender(mut self, gender: Gender) -> Self {
        self.gender = gender;
        self
    }

    pub fn with_number(mut self, number: Number) -> Self {
        self.number = number;
        self
    }

    pub fn with_person(mut self, person: u8) -> Self {
        self.person = person;
        self
    }

    pub fn with_tense(mut self, tense: Tense) -> Self {
        self.tense = tense;
        self
    }

    pub fn with_subcategory(mut self, subcategory: Subcategory) -> Self {
        self.subcategory = subcategory;
        self
    }

    pub fn with_flags(mut self, flags: VariantFlags) -> Self {
        self.flags |= flags;
        self
    }

    /// Archive layout: tag, language, flags, subcategory, person, gender, number, tense
    pub fn to_bytes(&self) -> [u8; Self::ENCODED_LEN] {
        [
            self.tag.code(),
            self.language as u8,
            self.flags.bits(),
            self.subcategory as u8,
            self.person,
            self.gender as u8,
            self.number.bits(),
            self.tense as u8,
        ]
    }

    /// Inverse of [`WordVariant::to_bytes`]
    ///
    /// Flag and number bits outside the known set are retained so that
    /// archives round-trip byte for byte.
    pub fn from_bytes(bytes: [u8; Self::ENCODED_LEN]) -> Result<Self> {
        let [tag, language, flags, subcategory, person, gender, number, tense] = bytes;
        if person > 3 {
            return Err(Error::unknown(VocabularyKind::Person, person));
        }
        Ok(Self {
            tag: Tag::from_code(tag)?,
            language: Language::from_code(language)?,
            flags: VariantFlags::from_bits_retain(flags),
            subcategory: Subcategory::from_code(subcategory)?,
            gender: Gender::from_code(gender)?,
            number: Number::from_bits_retain(number),
            person,
            tense: Tense::from_code(tense)?,
        })
    }

    /// Whether `word` has a reading compatible with this query
    ///
    /// Tag and language must match exactly. Person and tense are only
    /// compared for verb queries, and only when set. Number and gender are
    /// compared when set. The subcategory test rejects a reading whose
    /// subcategory differs from an unset query subcategory, so a query that
    /// leaves it unset only accepts readings without one.
    pub fn filter(&self, word: &Word) -> bool {
        word.variants_by_tag(self.tag, self.language).any(|variant| {
            if self.tag == Tag::Verb {
                if self.person != 0 && self.person != variant.person {
                    return false;
                }
                if self.tense != Tense::None && self.tense != variant.tense {
                    return false;
                }
            }
            if !self.number.is_empty() && self.number != variant.number {
                return false;
            }
            if self.gender != Gender::None && self.gender != variant.gender {
                return false;
            }
            if self.subcategory == Subcategory::None && self.subcategory != variant.subcategory {
                return false;
            }
            true
        })
    }
}
