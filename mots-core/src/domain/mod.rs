//! Domain layer: morphology model, lexicon trie and its archive format
//!
//! Everything here is independent of tokenization; the application layer
//! builds on these types.

pub mod codec;
pub mod lexicon;
pub mod morphology;
pub mod text;

pub use codec::{read_lexicon, write_lexicon};
pub use lexicon::{CancellationToken, Lexicon, LexiconNode, Lookup, NodeId, Walk};
pub use morphology::*;
