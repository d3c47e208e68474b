//! Grammatical payload attached to lexicon spellings

mod tag;
mod variant;
mod vocabulary;
mod word;

pub use tag::Tag;
pub use variant::{Gender, Language, Number, Subcategory, Tense, VariantFlags, WordVariant};
pub use vocabulary::{normalize_form, VariantBuilder};
pub use word::{Variants, Word};
