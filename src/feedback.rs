//! Feedback calculation for submitted rows.
//!
//! Each cell of a submitted guess is classified against the secret word as
//! correct (green), present (yellow) or absent (gray).

use crate::WORD_LENGTH;

/// Represents the feedback for a single letter position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feedback {
    /// Correct letter in correct position (green)
    Correct,
    /// Letter occurs elsewhere in the secret (yellow)
    Present,
    /// Letter not in word (gray)
    Absent,
}

impl Feedback {
    /// Convert to a character for display
    pub fn to_char(self) -> char {
        match self {
            Feedback::Correct => '🟩',
            Feedback::Present => '🟨',
            Feedback::Absent => '⬛',
        }
    }

    /// How much this feedback reveals about a letter. Used to pick the
    /// strongest hint when the same letter was guessed more than once.
    pub fn strength(self) -> u8 {
        match self {
            Feedback::Absent => 0,
            Feedback::Present => 1,
            Feedback::Correct => 2,
        }
    }
}

/// Feedback for a complete submitted row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RowFeedback([Feedback; WORD_LENGTH]);

impl RowFeedback {
    pub const ALL_CORRECT: Self = Self([Feedback::Correct; WORD_LENGTH]);

    pub fn new(cells: [Feedback; WORD_LENGTH]) -> Self {
        Self(cells)
    }

    /// Classify every cell of `guess` against `secret`.
    ///
    /// A letter in the right position is [`Feedback::Correct`]. Any other
    /// letter that occurs anywhere in the secret is [`Feedback::Present`],
    /// with no cap on how many cells a single secret letter can mark. A guess
    /// with a repeated letter can therefore show more yellows than the secret
    /// has copies of that letter.
    pub fn evaluate(guess: &str, secret: &str) -> Self {
        let guess_bytes = guess.as_bytes();
        let secret_bytes = secret.as_bytes();

        debug_assert_eq!(guess_bytes.len(), WORD_LENGTH);
        debug_assert_eq!(secret_bytes.len(), WORD_LENGTH);

        let mut cells = [Feedback::Absent; WORD_LENGTH];
        for (i, cell) in cells.iter_mut().enumerate() {
            let letter = guess_bytes[i];
            *cell = if secret_bytes[i] == letter {
                Feedback::Correct
            } else if secret_bytes.contains(&letter) {
                Feedback::Present
            } else {
                Feedback::Absent
            };
        }

        Self(cells)
    }

    pub fn cells(&self) -> &[Feedback; WORD_LENGTH] {
        &self.0
    }

    /// Check if this row represents a win (all correct)
    pub fn is_win(&self) -> bool {
        *self == Self::ALL_CORRECT
    }

    /// Display as emoji string
    pub fn to_emoji_string(&self) -> String {
        self.0.iter().map(|f| f.to_char()).collect()
    }
}

impl std::fmt::Display for RowFeedback {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_emoji_string())
    }
}
