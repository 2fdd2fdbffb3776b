//! The single input-handling path of a running game.
//!
//! A [`Session`] owns the [`GameState`] and a [`KeyboardListener`] guard.
//! Physical key presses only reach the game while the guard is held. The
//! guard is released when the game is won, acquired again on restart, and
//! dropped with the session.

use crate::game::{GameState, GameStatus, Rejection, Submission};
use crate::input::InputEvent;

/// Registration of the physical keyboard with a session. Dropping it
/// unregisters the keyboard.
#[derive(Debug)]
pub struct KeyboardListener {
    generation: u32,
}

impl KeyboardListener {
    fn register(generation: u32) -> Self {
        tracing::debug!(generation, "keyboard listener registered");
        Self { generation }
    }
}

impl Drop for KeyboardListener {
    fn drop(&mut self) {
        tracing::debug!(generation = self.generation, "keyboard listener released");
    }
}

/// End-of-game signal for the renderer. Each one is produced once, at the
/// submission that ends the game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    Won { secret: String, guesses: usize },
    Exhausted { secret: String },
}

/// What handling one input event did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Update {
    /// The event had no effect. Carries the reason when the game refused it.
    Ignored(Option<Rejection>),
    /// The grid or cursor changed.
    Changed,
    Restarted,
    Notify(Notification),
    Quit,
}

#[derive(Debug)]
pub struct Session {
    game: GameState,
    listener: Option<KeyboardListener>,
    registrations: u32,
}

impl Session {
    pub fn new(game: GameState) -> Self {
        let mut session = Self {
            game,
            listener: None,
            registrations: 0,
        };
        session.register_listener();
        session
    }

    fn register_listener(&mut self) {
        if self.listener.is_none() {
            self.registrations += 1;
            self.listener = Some(KeyboardListener::register(self.registrations));
        }
    }

    /// Handle a key from the physical keyboard.
    pub fn handle_key(&mut self, event: InputEvent) -> Update {
        if event.is_game_key() && self.listener.is_none() {
            return Update::Ignored(None);
        }
        self.dispatch(event)
    }

    /// Handle a click on an on-screen key.
    pub fn click(&mut self, label: &str) -> Update {
        let Some(event) = InputEvent::from_label(label) else {
            return Update::Ignored(None);
        };
        if self.game.status().is_finished() {
            return Update::Ignored(Some(Rejection::GameFinished));
        }
        self.dispatch(event)
    }

    fn dispatch(&mut self, event: InputEvent) -> Update {
        let result = match event {
            InputEvent::Letter(c) => self.game.write_letter(c).map(|()| Update::Changed),
            InputEvent::Delete => self.game.delete_letter().map(|()| Update::Changed),
            InputEvent::Submit => self.game.submit_row().map(|submission| self.submitted(submission)),
            InputEvent::Restart => {
                self.restart();
                Ok(Update::Restarted)
            }
            InputEvent::Quit => Ok(Update::Quit),
        };

        result.unwrap_or_else(|rejection| {
            tracing::trace!(?event, ?rejection, "input ignored");
            Update::Ignored(Some(rejection))
        })
    }

    fn submitted(&mut self, submission: Submission) -> Update {
        match submission {
            Submission::Advanced(_) => Update::Changed,
            Submission::Won(_) => {
                self.listener = None;
                Update::Notify(Notification::Won {
                    secret: self.game.secret().to_string(),
                    guesses: self.game.guesses_used(),
                })
            }
            Submission::Exhausted(_) => Update::Notify(Notification::Exhausted {
                secret: self.game.secret().to_string(),
            }),
        }
    }

    pub fn restart(&mut self) {
        self.game.restart();
        self.register_listener();
    }

    pub fn game(&self) -> &GameState {
        &self.game
    }

    pub fn status(&self) -> GameStatus {
        self.game.status()
    }

    pub fn is_listening(&self) -> bool {
        self.listener.is_some()
    }

    /// How many times the keyboard listener has been registered.
    pub fn registrations(&self) -> u32 {
        self.registrations
    }
}
