use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by the library. Gameplay rejections are not errors; see
/// [`Rejection`](crate::Rejection).
#[derive(Debug, Error)]
pub enum WordleError {
    /// The dictionary had no usable five-letter words, so no secret can be drawn.
    #[error("dictionary contains no valid {len}-letter words")]
    EmptyDictionary { len: usize },

    /// The dictionary file could not be read.
    #[error("failed to read dictionary from {}", path.display())]
    DictionaryRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A secret word was supplied that the dictionary does not contain.
    #[error("'{word}' is not in the dictionary")]
    UnknownWord { word: String },

    #[error("'{word}' is not a {len}-letter word")]
    InvalidWord { word: String, len: usize },
}

impl WordleError {
    pub fn invalid_word(word: impl Into<String>) -> Self {
        Self::InvalidWord {
            word: word.into(),
            len: crate::WORD_LENGTH,
        }
    }
}
