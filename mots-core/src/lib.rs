//! Morphological lexicon, tokenizer and sentence segmenter for French and
//! English text
//!
//! The crate is organised in layers:
//! - **Domain layer**: the morphology model, the character trie holding the
//!   lexicon, and its binary archive format
//! - **Application layer**: tokenization with compounding, sentence
//!   segmentation, spelling suggestions and noun phrase matching
//! - **API layer**: an owning [`Processor`] driven by a TOML-friendly
//!   [`Config`]
//!
//! # Example
//!
//! ```rust
//! use mots_core::{Language, Lexicon, Tag, Tokenizer, WordVariant};
//!
//! let mut lexicon = Lexicon::with_builtins();
//! for (spelling, tag) in [("la", Tag::Determiner), ("vie", Tag::Noun)] {
//!     lexicon
//!         .insert(spelling, [WordVariant::new(tag, Language::French)])
//!         .unwrap();
//! }
//!
//! let tokenizer = Tokenizer::new(&lexicon).unwrap();
//! let text = "La vie.";
//! let tokens = tokenizer.tokenize(text, true);
//! assert_eq!(tokens.len(), 4);
//! assert!(tokens[2].is_tagged(Tag::Noun));
//! ```

pub mod api;
pub mod application;
pub mod domain;
pub mod error;

pub use api::{Analysis, Config, ConfigBuilder, Input, Processor};
pub use application::{
    Grammar, PatternClass, Phrase, PhraseKind, SentenceKind, Suggester, Token, TokenClass,
    TokenSentence, Tokenizer,
};
pub use domain::{
    CancellationToken, Gender, Language, Lexicon, NodeId, Number, Subcategory, Tag, Tense,
    VariantFlags, Word, WordVariant,
};
pub use error::{Error, Result};
