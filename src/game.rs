//! Grid, cursor and turn state for one game.
//!
//! Every mutation goes through [`GameState::write_letter`],
//! [`GameState::delete_letter`], [`GameState::submit_row`] or
//! [`GameState::restart`]. Operations that cannot apply return a
//! [`Rejection`] and leave the state untouched.

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::dictionary::{normalize, Dictionary};
use crate::error::WordleError;
use crate::feedback::RowFeedback;
use crate::{MAX_GUESSES, WORD_LENGTH};

/// A grid cell: empty, or one uppercase letter.
pub type Cell = Option<char>;

pub type Grid = [[Cell; WORD_LENGTH]; MAX_GUESSES];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    Playing,
    /// A submitted row matched the secret.
    Won,
    /// All rows were used without finding the secret.
    Exhausted,
}

impl GameStatus {
    pub fn is_finished(self) -> bool {
        !matches!(self, GameStatus::Playing)
    }
}

/// Why an operation was ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rejection {
    /// The game is won or exhausted; only a restart is accepted.
    GameFinished,
    NotALetter,
    RowFull,
    RowEmpty,
    RowIncomplete,
    /// Full row, but the word is not in the dictionary.
    NotInDictionary,
}

/// Result of an accepted [`GameState::submit_row`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submission {
    /// Valid guess, not the secret. The cursor moved to the next row.
    Advanced(RowFeedback),
    Won(RowFeedback),
    /// Valid guess on the last row, not the secret.
    Exhausted(RowFeedback),
}

impl Submission {
    pub fn feedback(&self) -> &RowFeedback {
        match self {
            Submission::Advanced(fb) | Submission::Won(fb) | Submission::Exhausted(fb) => fb,
        }
    }
}

#[derive(Debug, Clone)]
pub struct GameState {
    dictionary: Dictionary,
    rng: StdRng,
    secret: String,
    grid: Grid,
    feedback: [Option<RowFeedback>; MAX_GUESSES],
    row: usize,
    col: usize,
    game_over: bool,
}

impl GameState {
    /// Start a game with a secret drawn using OS entropy.
    pub fn new(dictionary: Dictionary) -> Self {
        Self::with_rng(dictionary, StdRng::from_os_rng())
    }

    /// Start a game whose secret draws are reproducible for a given seed.
    pub fn with_seed(dictionary: Dictionary, seed: u64) -> Self {
        Self::with_rng(dictionary, StdRng::seed_from_u64(seed))
    }

    pub fn with_rng(dictionary: Dictionary, mut rng: StdRng) -> Self {
        let secret = dictionary.choose(&mut rng).to_string();
        let game = Self::blank(dictionary, rng, secret);
        tracing::debug!(words = game.dictionary.len(), "new game started");
        game
    }

    /// Start a game with a known secret. The secret must be in the dictionary.
    /// Later restarts draw randomly again.
    pub fn with_secret(dictionary: Dictionary, secret: &str) -> Result<Self, WordleError> {
        let secret = normalize(secret).ok_or_else(|| WordleError::invalid_word(secret))?;
        if !dictionary.contains(&secret) {
            return Err(WordleError::UnknownWord { word: secret });
        }
        Ok(Self::blank(dictionary, StdRng::from_os_rng(), secret))
    }

    fn blank(dictionary: Dictionary, rng: StdRng, secret: String) -> Self {
        Self {
            dictionary,
            rng,
            secret,
            grid: [[None; WORD_LENGTH]; MAX_GUESSES],
            feedback: [None; MAX_GUESSES],
            row: 0,
            col: 0,
            game_over: false,
        }
    }

    /// Put `letter` at the cursor and move the cursor right.
    pub fn write_letter(&mut self, letter: char) -> Result<(), Rejection> {
        self.ensure_playing()?;
        if !letter.is_ascii_alphabetic() {
            return Err(Rejection::NotALetter);
        }
        if self.col == WORD_LENGTH {
            return Err(Rejection::RowFull);
        }

        self.grid[self.row][self.col] = Some(letter.to_ascii_uppercase());
        self.col += 1;
        Ok(())
    }

    /// Clear the cell left of the cursor and move the cursor onto it.
    pub fn delete_letter(&mut self) -> Result<(), Rejection> {
        self.ensure_playing()?;
        if self.col == 0 {
            return Err(Rejection::RowEmpty);
        }

        self.col -= 1;
        self.grid[self.row][self.col] = None;
        Ok(())
    }

    /// Evaluate the current row once all of its cells are filled.
    pub fn submit_row(&mut self) -> Result<Submission, Rejection> {
        self.ensure_playing()?;
        if self.col != WORD_LENGTH {
            return Err(Rejection::RowIncomplete);
        }

        let row = self.row;
        let word: String = self.grid[row].iter().flatten().collect();

        if word == self.secret {
            self.feedback[row] = Some(RowFeedback::ALL_CORRECT);
            self.game_over = true;
            tracing::info!(guesses = row + 1, "secret word found");
            return Ok(Submission::Won(RowFeedback::ALL_CORRECT));
        }

        if !self.dictionary.contains(&word) {
            tracing::debug!(row, word = %word, "guess is not in the dictionary");
            return Err(Rejection::NotInDictionary);
        }

        let feedback = RowFeedback::evaluate(&word, &self.secret);
        self.feedback[row] = Some(feedback);
        self.row += 1;
        self.col = 0;
        tracing::debug!(row, word = %word, feedback = %feedback, "guess accepted");

        if self.row == MAX_GUESSES {
            tracing::info!(secret = %self.secret, "out of guesses");
            Ok(Submission::Exhausted(feedback))
        } else {
            Ok(Submission::Advanced(feedback))
        }
    }

    /// Clear the board and draw a new secret.
    pub fn restart(&mut self) {
        self.grid = [[None; WORD_LENGTH]; MAX_GUESSES];
        self.feedback = [None; MAX_GUESSES];
        self.row = 0;
        self.col = 0;
        self.game_over = false;
        self.secret = self.dictionary.choose(&mut self.rng).to_string();
        tracing::debug!("game restarted");
    }

    fn ensure_playing(&self) -> Result<(), Rejection> {
        if self.status().is_finished() {
            Err(Rejection::GameFinished)
        } else {
            Ok(())
        }
    }

    pub fn status(&self) -> GameStatus {
        if self.game_over {
            GameStatus::Won
        } else if self.row == MAX_GUESSES {
            GameStatus::Exhausted
        } else {
            GameStatus::Playing
        }
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// `(row, col)` of the next cell to write.
    pub fn cursor(&self) -> (usize, usize) {
        (self.row, self.col)
    }

    pub fn secret(&self) -> &str {
        &self.secret
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn cell(&self, row: usize, col: usize) -> Cell {
        self.grid.get(row).and_then(|cells| cells.get(col)).copied().flatten()
    }

    /// Feedback for `row` if it has been submitted since the last restart.
    pub fn row_feedback(&self, row: usize) -> Option<&RowFeedback> {
        self.feedback.get(row).and_then(Option::as_ref)
    }

    /// Number of rows submitted and accepted, including a winning row.
    pub fn guesses_used(&self) -> usize {
        self.feedback.iter().filter(|fb| fb.is_some()).count()
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }
}
