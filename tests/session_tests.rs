use wordle_game::session::Update;
use wordle_game::{
    Dictionary, GameState, GameStatus, InputEvent, Notification, Rejection, Session,
};

fn session_with_secret(secret: &str) -> Session {
    let dictionary =
        Dictionary::from_words(["crane", "trace", "crate", "slate", "raise", "arise", "stare"])
            .unwrap();
    Session::new(GameState::with_secret(dictionary, secret).unwrap())
}

fn press_word(session: &mut Session, word: &str) -> Update {
    for c in word.chars() {
        session.handle_key(InputEvent::Letter(c));
    }
    session.handle_key(InputEvent::Submit)
}

#[test]
fn test_session_starts_listening() {
    let session = session_with_secret("crane");
    assert!(session.is_listening());
    assert_eq!(session.registrations(), 1);
    assert_eq!(session.status(), GameStatus::Playing);
}

#[test]
fn test_keys_drive_the_game() {
    let mut session = session_with_secret("crane");

    assert_eq!(session.handle_key(InputEvent::Letter('t')), Update::Changed);
    assert_eq!(session.handle_key(InputEvent::Delete), Update::Changed);
    assert_eq!(
        session.handle_key(InputEvent::Delete),
        Update::Ignored(Some(Rejection::RowEmpty))
    );
    assert_eq!(
        session.handle_key(InputEvent::Submit),
        Update::Ignored(Some(Rejection::RowIncomplete))
    );
    assert_eq!(press_word(&mut session, "trace"), Update::Changed);
    assert_eq!(session.game().cursor(), (1, 0));
}

#[test]
fn test_win_notifies_once_and_releases_listener() {
    let mut session = session_with_secret("crane");
    press_word(&mut session, "trace");

    let update = press_word(&mut session, "crane");
    assert_eq!(
        update,
        Update::Notify(Notification::Won {
            secret: "CRANE".to_string(),
            guesses: 2,
        })
    );
    assert!(!session.is_listening());

    // Further key presses never reach the game, so the signal cannot repeat.
    assert_eq!(session.handle_key(InputEvent::Submit), Update::Ignored(None));
    assert_eq!(session.handle_key(InputEvent::Letter('a')), Update::Ignored(None));
    assert_eq!(session.game().cursor(), (1, 5));
}

#[test]
fn test_clicks_are_gated_after_win() {
    let mut session = session_with_secret("crane");
    press_word(&mut session, "crane");

    assert_eq!(
        session.click("A"),
        Update::Ignored(Some(Rejection::GameFinished))
    );
    assert_eq!(
        session.click("ENTER"),
        Update::Ignored(Some(Rejection::GameFinished))
    );
}

#[test]
fn test_restart_reregisters_listener() {
    let mut session = session_with_secret("crane");
    press_word(&mut session, "crane");
    assert!(!session.is_listening());

    assert_eq!(session.handle_key(InputEvent::Restart), Update::Restarted);

    assert!(session.is_listening());
    assert_eq!(session.registrations(), 2);
    assert_eq!(session.status(), GameStatus::Playing);
    assert_eq!(session.game().cursor(), (0, 0));
    assert_eq!(session.handle_key(InputEvent::Letter('c')), Update::Changed);
}

#[test]
fn test_restart_while_listening_keeps_single_registration() {
    let mut session = session_with_secret("crane");
    session.restart();
    assert_eq!(session.registrations(), 1);
    assert!(session.is_listening());
}

#[test]
fn test_exhaustion_notifies_with_secret() {
    let mut session = session_with_secret("crane");
    let misses = ["trace", "crate", "slate", "raise", "arise"];
    for word in misses {
        assert_eq!(press_word(&mut session, word), Update::Changed);
    }

    assert_eq!(
        press_word(&mut session, "stare"),
        Update::Notify(Notification::Exhausted {
            secret: "CRANE".to_string()
        })
    );
    assert_eq!(session.status(), GameStatus::Exhausted);
    assert_eq!(
        session.handle_key(InputEvent::Letter('a')),
        Update::Ignored(Some(Rejection::GameFinished))
    );
    assert_eq!(
        session.click("DEL"),
        Update::Ignored(Some(Rejection::GameFinished))
    );
}

#[test]
fn test_on_screen_keyboard_plays() {
    let mut session = session_with_secret("crane");

    for label in ["T", "R", "A", "C", "E"] {
        assert_eq!(session.click(label), Update::Changed);
    }
    assert_eq!(session.click("DEL"), Update::Changed);
    assert_eq!(session.click("E"), Update::Changed);
    assert_eq!(session.click("ENTER"), Update::Changed);
    assert_eq!(session.game().cursor(), (1, 0));

    assert_eq!(session.click("SPACE"), Update::Ignored(None));
}

#[test]
fn test_quit() {
    let mut session = session_with_secret("crane");
    assert_eq!(session.handle_key(InputEvent::Quit), Update::Quit);

    press_word(&mut session, "crane");
    assert_eq!(session.handle_key(InputEvent::Quit), Update::Quit);
}
