//! The set of valid guesses and the pool secret words are drawn from.

use std::collections::HashSet;
use std::path::Path;

use rand::Rng;

use crate::error::WordleError;
use crate::WORD_LENGTH;

/// Immutable word list. Words are stored uppercase; lookups are
/// case-insensitive.
#[derive(Debug, Clone)]
pub struct Dictionary {
    words: HashSet<String>,
    pool: Vec<String>,
}

impl Dictionary {
    /// Build a dictionary from any list of words. Entries that are not exactly
    /// [`WORD_LENGTH`] ASCII letters are skipped and duplicates collapse.
    ///
    /// Fails with [`WordleError::EmptyDictionary`] when nothing usable is left,
    /// since a game could never draw a secret from it.
    pub fn from_words<I, S>(words: I) -> Result<Self, WordleError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = HashSet::new();
        let mut pool = Vec::new();
        let mut skipped = 0usize;

        for word in words {
            match normalize(word.as_ref()) {
                Some(word) => {
                    if set.insert(word.clone()) {
                        pool.push(word);
                    }
                }
                None => skipped += 1,
            }
        }

        if pool.is_empty() {
            return Err(WordleError::EmptyDictionary { len: WORD_LENGTH });
        }
        if skipped > 0 {
            tracing::debug!(skipped, "ignored dictionary entries of the wrong length");
        }

        Ok(Self { words: set, pool })
    }

    /// Parse a newline-separated word list. Blank lines are ignored.
    pub fn parse(text: &str) -> Result<Self, WordleError> {
        Self::from_words(text.lines().map(str::trim).filter(|line| !line.is_empty()))
    }

    pub fn load_from_path(path: &Path) -> Result<Self, WordleError> {
        let text = std::fs::read_to_string(path).map_err(|source| WordleError::DictionaryRead {
            path: path.to_path_buf(),
            source,
        })?;
        let dictionary = Self::parse(&text)?;
        tracing::info!(path = %path.display(), words = dictionary.len(), "loaded dictionary");
        Ok(dictionary)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&word.to_ascii_uppercase())
    }

    pub fn len(&self) -> usize {
        self.pool.len()
    }

    /// Always false: construction rejects empty word lists.
    pub fn is_empty(&self) -> bool {
        self.pool.is_empty()
    }

    /// Words in load order.
    pub fn words(&self) -> &[String] {
        &self.pool
    }

    /// Draw a word uniformly at random.
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> &str {
        &self.pool[rng.random_range(0..self.pool.len())]
    }
}

/// Uppercase `word` if it is a playable entry.
pub fn normalize(word: &str) -> Option<String> {
    let word = word.trim();
    if word.len() == WORD_LENGTH && word.bytes().all(|b| b.is_ascii_alphabetic()) {
        Some(word.to_ascii_uppercase())
    } else {
        None
    }
}
