//! Terminal front end.
//!
//! Draws a [`GameView`] with ratatui and feeds key presses and clicks on the
//! on-screen keyboard into the [`Session`].

use std::io;

use anyhow::Result;
use ratatui::crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind, MouseButton, MouseEvent,
    MouseEventKind,
};
use ratatui::crossterm::execute;
use ratatui::layout::{Constraint, Flex, Layout, Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Borders, Clear, Paragraph};
use ratatui::{DefaultTerminal, Frame};

use wordle_game::game::GameStatus;
use wordle_game::session::Update;
use wordle_game::view::{CellState, CellView, KeyView};
use wordle_game::{Feedback, GameView, InputEvent, Notification, Session, MAX_GUESSES, WORD_LENGTH};

const CELL_WIDTH: u16 = 5;
const CELL_HEIGHT: u16 = 3;
const GAP: u16 = 1;
const GRID_WIDTH: u16 = CELL_WIDTH * WORD_LENGTH as u16 + GAP * (WORD_LENGTH as u16 - 1);
const GRID_HEIGHT: u16 = CELL_HEIGHT * MAX_GUESSES as u16;
const KEY_HEIGHT: u16 = 3;
const KEYBOARD_HEIGHT: u16 = KEY_HEIGHT * 3;

const HELP: &str = "letters type · Enter submit · Backspace delete · Ctrl+R restart · Esc quit";

/// Run the game until the player quits.
pub fn run(session: Session, reveal: bool) -> Result<()> {
    let mut app = App::new(session, reveal);
    let mut terminal = ratatui::init();

    let result = execute!(io::stdout(), EnableMouseCapture)
        .map_err(anyhow::Error::from)
        .and_then(|()| app.event_loop(&mut terminal));

    if let Err(err) = execute!(io::stdout(), DisableMouseCapture) {
        tracing::warn!(%err, "failed to disable mouse capture");
    }
    ratatui::restore();
    result
}

struct App {
    session: Session,
    reveal: bool,
    /// Modal shown after the game ends; the next key press dismisses it.
    notification: Option<Notification>,
    /// Screen areas of the on-screen keys from the last frame.
    key_areas: Vec<(Rect, &'static str)>,
}

impl App {
    fn new(session: Session, reveal: bool) -> Self {
        Self {
            session,
            reveal,
            notification: None,
            key_areas: Vec::new(),
        }
    }

    fn event_loop(&mut self, terminal: &mut DefaultTerminal) -> Result<()> {
        loop {
            terminal.draw(|frame| self.draw(frame))?;

            let update = match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    let dismissed = self.notification.take().is_some();
                    match InputEvent::from_key_event(key) {
                        Some(input) if !(dismissed && input.is_game_key()) => {
                            self.session.handle_key(input)
                        }
                        _ => continue,
                    }
                }
                Event::Mouse(mouse) => match self.clicked_key(mouse) {
                    Some(label) => {
                        self.notification = None;
                        self.session.click(label)
                    }
                    None => continue,
                },
                _ => continue,
            };

            match update {
                Update::Quit => return Ok(()),
                Update::Notify(notification) => self.notification = Some(notification),
                Update::Restarted => self.notification = None,
                Update::Changed | Update::Ignored(_) => {}
            }
        }
    }

    fn clicked_key(&self, mouse: MouseEvent) -> Option<&'static str> {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return None;
        }
        let position = Position::new(mouse.column, mouse.row);
        self.key_areas
            .iter()
            .find(|(area, _)| area.contains(position))
            .map(|&(_, label)| label)
    }

    fn draw(&mut self, frame: &mut Frame) {
        let view = GameView::from_state(self.session.game());

        let [header, board, _, keys, footer] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(GRID_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(KEYBOARD_HEIGHT),
            Constraint::Length(1),
        ])
        .flex(Flex::Center)
        .areas(frame.area());

        frame.render_widget(
            Paragraph::new(self.status_line(&view)).centered(),
            header,
        );
        draw_grid(frame, board, &view);
        self.key_areas = draw_keyboard(frame, keys, &view);
        frame.render_widget(
            Paragraph::new(HELP)
                .centered()
                .style(Style::default().fg(Color::DarkGray)),
            footer,
        );

        if let Some(notification) = &self.notification {
            draw_notification(frame, notification);
        }
    }

    fn status_line(&self, view: &GameView) -> String {
        let (row, col) = view.cursor;
        let mut line = match view.status {
            GameStatus::Playing => format!("Row {}, Col {}", row + 1, col),
            GameStatus::Won => "Solved!".to_string(),
            GameStatus::Exhausted => format!("Out of guesses. The word was {}", view.secret),
        };
        if self.reveal && view.status == GameStatus::Playing {
            line.push_str(&format!(" · Word: {}", view.secret));
        }
        line
    }
}

fn draw_grid(frame: &mut Frame, area: Rect, view: &GameView) {
    let [board] = Layout::horizontal([Constraint::Length(GRID_WIDTH)])
        .flex(Flex::Center)
        .areas(area);
    let rows: [Rect; MAX_GUESSES] =
        Layout::vertical([Constraint::Length(CELL_HEIGHT); MAX_GUESSES]).areas(board);

    for (r, row_area) in rows.into_iter().enumerate() {
        let cells: [Rect; WORD_LENGTH] =
            Layout::horizontal([Constraint::Length(CELL_WIDTH); WORD_LENGTH])
                .spacing(GAP)
                .areas(row_area);
        for (c, cell_area) in cells.into_iter().enumerate() {
            let at_cursor = view.status == GameStatus::Playing && view.cursor == (r, c);
            draw_cell(frame, cell_area, view.rows[r][c], at_cursor);
        }
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, cell: CellView, at_cursor: bool) {
    let style = cell_style(cell.state);
    let border = if at_cursor {
        Style::default().fg(Color::Yellow)
    } else {
        match cell.state {
            CellState::Empty => Style::default().fg(Color::DarkGray),
            CellState::Filled => Style::default().fg(Color::Gray),
            _ => style,
        }
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border);
    let letter = cell.letter.map(String::from).unwrap_or_default();

    frame.render_widget(
        Paragraph::new(letter).centered().style(style).block(block),
        area,
    );
}

fn cell_style(state: CellState) -> Style {
    match state {
        CellState::Empty => Style::default(),
        CellState::Filled => Style::default().add_modifier(Modifier::BOLD),
        CellState::Correct => feedback_style(Feedback::Correct),
        CellState::Present => feedback_style(Feedback::Present),
        CellState::Absent => feedback_style(Feedback::Absent),
    }
}

fn feedback_style(feedback: Feedback) -> Style {
    let bg = match feedback {
        Feedback::Correct => Color::Green,
        Feedback::Present => Color::Yellow,
        Feedback::Absent => Color::DarkGray,
    };
    Style::default()
        .bg(bg)
        .fg(Color::Black)
        .add_modifier(Modifier::BOLD)
}

fn draw_keyboard(frame: &mut Frame, area: Rect, view: &GameView) -> Vec<(Rect, &'static str)> {
    let rows = Layout::vertical([Constraint::Length(KEY_HEIGHT); 3]).split(area);
    let mut areas = Vec::new();

    for (keys, row_area) in view.keyboard.iter().zip(rows.iter()) {
        let widths = keys
            .iter()
            .map(|key| Constraint::Length(key.label.len() as u16 + 4));
        let key_rects = Layout::horizontal(widths)
            .spacing(GAP)
            .flex(Flex::Center)
            .split(*row_area);

        for (key, &rect) in keys.iter().zip(key_rects.iter()) {
            draw_key(frame, rect, key);
            areas.push((rect, key.label));
        }
    }

    areas
}

fn draw_key(frame: &mut Frame, area: Rect, key: &KeyView) {
    let style = match key.hint {
        Some(feedback) => feedback_style(feedback),
        None => Style::default().fg(Color::White),
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    frame.render_widget(
        Paragraph::new(key.label).centered().style(style).block(block),
        area,
    );
}

fn draw_notification(frame: &mut Frame, notification: &Notification) {
    let (title, lines) = match notification {
        Notification::Won { secret, guesses } => (
            " Correct word! ",
            vec![
                Line::from(format!("{secret} in {guesses}/{MAX_GUESSES}")),
                Line::from("Ctrl+R to play again"),
            ],
        ),
        Notification::Exhausted { secret } => (
            " Out of guesses ",
            vec![
                Line::from(format!("The word was {secret}")),
                Line::from("Ctrl+R to play again"),
            ],
        ),
    };

    let area = centered(frame.area(), 32, lines.len() as u16 + 2);
    frame.render_widget(Clear, area);
    frame.render_widget(
        Paragraph::new(lines).centered().block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double),
        ),
        area,
    );
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    let [rect] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(row);
    rect
}
