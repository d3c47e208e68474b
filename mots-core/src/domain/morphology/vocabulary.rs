//! Mapping from the dictionary source format onto typed variant fields
//!
//! A source entry names its part of speech, carries entry-level features
//! (shared by all forms) and lists inflected forms with their own features.
//! Loaders build one [`WordVariant`] per form through [`VariantBuilder`].

use super::{Gender, Language, Number, Subcategory, Tag, Tense, VariantFlags, WordVariant};
use crate::error::{Error, Result, VocabularyKind};

/// Incremental decoder for one inflected form
#[derive(Debug, Clone, Copy)]
pub struct VariantBuilder {
    variant: WordVariant,
}

impl VariantBuilder {
    /// Start from the entry's part-of-speech name
    pub fn new(tag_name: &str, language: Language) -> Result<Self> {
        Ok(Self {
            variant: WordVariant::new(Tag::from_source_name(tag_name)?, language),
        })
    }

    /// Apply an entry-level feature
    pub fn entry_feature(mut self, name: &str, value: &str) -> Result<Self> {
        let v = &mut self.variant;
        match (name, value) {
            ("proper", "true") => v.flags |= VariantFlags::PROPER,
            ("subcat", value) => v.subcategory = parse_subcategory(value)?,
            ("compound", "comp") => v.flags |= VariantFlags::COMPOUND,
            ("coll", "true") => v.flags |= VariantFlags::COLLECTIVE_DETERMINER,
            ("postpos", "true") => v.flags |= VariantFlags::POSTPOSED,
            ("collective", "true") => v.flags |= VariantFlags::COLLECTIVE,
            ("procat", "demonstrative") => v.flags |= VariantFlags::DEMONSTRATIVE_PROCATEGORY,
            ("proper" | "compound" | "coll" | "postpos" | "collective" | "procat", value) => {
                return Err(Error::unknown(VocabularyKind::Feature, value))
            }
            (name, _) => return Err(Error::unknown(VocabularyKind::Feature, name)),
        }
        Ok(self)
    }

    /// Apply a form-level feature
    pub fn form_feature(mut self, name: &str, value: &str) -> Result<Self> {
        let v = &mut self.variant;
        match name {
            "gender" => {
                v.gender = match value {
                    "masculine" => Gender::Male,
                    "feminine" => Gender::Female,
                    _ => return Err(Error::unknown(VocabularyKind::Gender, value)),
                }
            }
            "number" => {
                v.number = match value {
                    "singular" => Number::SINGULAR,
                    "plural" => Number::PLURAL,
                    _ => return Err(Error::unknown(VocabularyKind::Number, value)),
                }
            }
            "person" => {
                v.person = match value {
                    "1" => 1,
                    "2" => 2,
                    "3" => 3,
                    _ => return Err(Error::unknown(VocabularyKind::Person, value)),
                }
            }
            "tense" => {
                v.tense = match value {
                    "ind" => Tense::Indicative,
                    "gerondif" => Tense::Gerund,
                    "subj" => Tense::Subjunctive,
                    "ppast" => Tense::PastParticiple,
                    "imp" => Tense::Imperative,
                    "cond" => Tense::Conditional,
                    "inf" => Tense::Infinitive,
                    _ => return Err(Error::unknown(VocabularyKind::Tense, value)),
                }
            }
            other => return Err(Error::unknown(VocabularyKind::Feature, other)),
        }
        Ok(self)
    }

    /// Finish the variant
    pub fn build(self) -> WordVariant {
        self.variant
    }
}

fn parse_subcategory(value: &str) -> Result<Subcategory> {
    let subcategory = match value {
        "human" => Subcategory::Human,
        "animal" => Subcategory::Animal,
        "concret" => Subcategory::Concrete,
        "abstract" => Subcategory::Abstract,
        "unit" => Subcategory::Unit,
        "indefinite" => Subcategory::Indefinite,
        "temporal" => Subcategory::Temporal,
        "demonstrative" => Subcategory::Demonstrative,
        other => return Err(Error::unknown(VocabularyKind::Subcategory, other)),
    };
    Ok(subcategory)
}

/// Normalize a source-format form spelling (escaped hyphens)
pub fn normalize_form(form: &str) -> String {
    form.replace("\\-", "-")
}
