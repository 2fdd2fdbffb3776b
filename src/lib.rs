//! # Wordle Game
//!
//! The game-state core of a single-player Wordle clone.
//!
//! A [`GameState`] owns the 6x5 letter grid, the cursor, the secret word and
//! the dictionary. A [`Session`] wraps it as the single input-handling path and
//! turns key presses into state transitions, while [`GameView`] maps the state
//! into something a renderer can draw.

pub mod dictionary;
pub mod error;
pub mod feedback;
pub mod game;
pub mod input;
pub mod session;
pub mod view;

pub use dictionary::Dictionary;
pub use error::WordleError;
pub use feedback::{Feedback, RowFeedback};
pub use game::{GameState, GameStatus, Rejection, Submission};
pub use input::InputEvent;
pub use session::{Notification, Session};
pub use view::GameView;

/// Word length for Wordle
pub const WORD_LENGTH: usize = 5;

/// Number of guesses a player gets before the game is exhausted
pub const MAX_GUESSES: usize = 6;

/// Load the dictionary from the embedded file
pub fn load_dictionary() -> Result<Dictionary, WordleError> {
    Dictionary::parse(include_str!("../dictionary/dictionary.txt"))
}
