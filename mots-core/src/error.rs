//! Error types for lexicon loading, configuration and traversal

use std::fmt;
use thiserror::Error;

/// Which closed vocabulary a value failed to decode into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VocabularyKind {
    /// Part-of-speech or punctuation tag
    Tag,
    /// Language code
    Language,
    /// Semantic subcategory
    Subcategory,
    /// Grammatical gender
    Gender,
    /// Grammatical number
    Number,
    /// Verb person
    Person,
    /// Verb tense or mood
    Tense,
    /// Feature name in the source format
    Feature,
}

impl fmt::Display for VocabularyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            VocabularyKind::Tag => "tag",
            VocabularyKind::Language => "language",
            VocabularyKind::Subcategory => "subcategory",
            VocabularyKind::Gender => "gender",
            VocabularyKind::Number => "number",
            VocabularyKind::Person => "person",
            VocabularyKind::Tense => "tense",
            VocabularyKind::Feature => "feature",
        };
        f.write_str(name)
    }
}

/// Error type for all fallible operations of the crate
#[derive(Debug, Error)]
pub enum Error {
    /// Underlying reader or writer failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Stream ended in the middle of a record
    #[error("truncated lexicon record at byte {offset}: missing {context}")]
    Truncated {
        /// Byte offset where the incomplete field starts
        offset: u64,
        /// Name of the field that could not be read
        context: &'static str,
    },

    /// Structurally invalid record (negative length, empty spelling)
    #[error("invalid lexicon record at byte {offset}: {reason}")]
    InvalidRecord {
        /// Byte offset of the offending field
        offset: u64,
        /// Human readable reason
        reason: String,
    },

    /// Spelling bytes are not UTF-8
    #[error("invalid UTF-8 spelling at byte {offset}")]
    InvalidSpelling {
        /// Byte offset of the spelling
        offset: u64,
        /// Decoding failure
        #[source]
        source: std::string::FromUtf8Error,
    },

    /// Value outside of a closed morphological vocabulary
    #[error("unrecognized {kind} value '{value}'")]
    UnknownVocabulary {
        /// Vocabulary the value was decoded into
        kind: VocabularyKind,
        /// Offending value as found in the input
        value: String,
    },

    /// Lexicon entries must spell at least one code point
    #[error("cannot insert an empty spelling")]
    EmptySpelling,

    /// Classifier pattern failed to compile
    #[error("pattern error: {0}")]
    Pattern(#[from] regex::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Traversal was stopped through its cancellation token
    #[error("traversal cancelled")]
    Cancelled,
}

impl Error {
    pub(crate) fn unknown(kind: VocabularyKind, value: impl ToString) -> Self {
        Error::UnknownVocabulary {
            kind,
            value: value.to_string(),
        }
    }
}

/// Result type for crate operations
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_vocabulary_display() {
        let error = Error::unknown(VocabularyKind::Tense, "futur");
        assert_eq!(error.to_string(), "unrecognized tense value 'futur'");
    }

    #[test]
    fn test_truncated_display() {
        let error = Error::Truncated {
            offset: 12,
            context: "variant record",
        };
        assert_eq!(
            error.to_string(),
            "truncated lexicon record at byte 12: missing variant record"
        );
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let error: Error = io.into();
        assert!(matches!(error, Error::Io(_)));
        assert!(error.to_string().starts_with("I/O error"));
    }
}
