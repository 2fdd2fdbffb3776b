//! Renderable snapshot of a game.
//!
//! [`GameView::from_state`] is a pure function of the [`GameState`]; renderers
//! map the cell states to colors and never look at the game directly.

use crate::feedback::Feedback;
use crate::game::{GameState, GameStatus};
use crate::input::KEYBOARD;
use crate::{MAX_GUESSES, WORD_LENGTH};

/// Display state of one grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellState {
    Empty,
    /// Typed into the current row, not yet submitted.
    Filled,
    Correct,
    Present,
    Absent,
}

impl From<Feedback> for CellState {
    fn from(feedback: Feedback) -> Self {
        match feedback {
            Feedback::Correct => CellState::Correct,
            Feedback::Present => CellState::Present,
            Feedback::Absent => CellState::Absent,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellView {
    pub letter: Option<char>,
    pub state: CellState,
}

/// One on-screen key and the strongest hint known for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyView {
    pub label: &'static str,
    /// `None` until the letter appears in a submitted row.
    pub hint: Option<Feedback>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameView {
    pub rows: [[CellView; WORD_LENGTH]; MAX_GUESSES],
    pub keyboard: Vec<Vec<KeyView>>,
    pub cursor: (usize, usize),
    pub status: GameStatus,
    pub secret: String,
}

impl GameView {
    pub fn from_state(game: &GameState) -> Self {
        let mut rows = [[CellView {
            letter: None,
            state: CellState::Empty,
        }; WORD_LENGTH]; MAX_GUESSES];

        for (r, row) in rows.iter_mut().enumerate() {
            let feedback = game.row_feedback(r);
            for (c, cell) in row.iter_mut().enumerate() {
                let letter = game.cell(r, c);
                let state = match (letter, feedback) {
                    (_, Some(fb)) => CellState::from(fb.cells()[c]),
                    (Some(_), None) => CellState::Filled,
                    (None, None) => CellState::Empty,
                };
                *cell = CellView { letter, state };
            }
        }

        let keyboard = KEYBOARD
            .iter()
            .map(|keys| {
                keys.iter()
                    .map(|&label| KeyView {
                        label,
                        hint: letter_hint(game, label),
                    })
                    .collect()
            })
            .collect();

        Self {
            rows,
            keyboard,
            cursor: game.cursor(),
            status: game.status(),
            secret: game.secret().to_string(),
        }
    }
}

/// Strongest feedback any submitted cell gave for the key's letter.
fn letter_hint(game: &GameState, label: &str) -> Option<Feedback> {
    let mut chars = label.chars();
    let letter = match (chars.next(), chars.next()) {
        (Some(c), None) => c,
        _ => return None,
    };

    (0..MAX_GUESSES)
        .filter_map(|r| game.row_feedback(r).map(|fb| (r, fb)))
        .flat_map(|(r, fb)| {
            fb.cells()
                .iter()
                .enumerate()
                .filter(move |&(c, _)| game.cell(r, c) == Some(letter))
                .map(|(_, &feedback)| feedback)
        })
        .max_by_key(|feedback| feedback.strength())
}
