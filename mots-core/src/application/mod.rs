//! Application layer: tokenization, sentence segmentation, suggestions and
//! phrase matching on top of a frozen lexicon

pub mod config;
pub mod grammar;
pub mod sentence;
pub mod suggest;
pub mod tokenizer;

pub use config::{TokenizerConfig, TraversalConfig};
pub use grammar::{Grammar, Phrase, PhraseDef, PhraseKind};
pub use sentence::{segment, SentenceKind, SentenceSpan, TokenSentence};
pub use suggest::{count_substitutions, replace_at, Suggester};
pub use tokenizer::{Classifiers, PatternClass, Token, TokenClass, Tokenizer};
