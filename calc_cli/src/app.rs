//! Interactive application state and update logic.
//!
//! `App` wraps a [`Session`] with the raw text typed into each operand field.
//! Every [`Message`] goes through [`App::update`], which recomputes the
//! outcome so the results panel always reflects the current input.

use std::collections::HashMap;

use calc_core::calculations::Outcome;
use calc_core::{OperandField, Operation, Session, Theme};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tracing::info;

/// User intents, produced from key presses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    NextOperation,
    PreviousOperation,
    NextField,
    PreviousField,
    Input(char),
    Backspace,
    ClearField,
    ToggleTheme,
    Quit,
}

/// Characters accepted inside a numeric field
fn is_numeric_char(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, '.' | '-' | '+' | 'e' | 'E')
}

/// Map a key press to a message
pub fn message_for_key(key: KeyEvent) -> Option<Message> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return matches!(key.code, KeyCode::Char('c')).then_some(Message::Quit);
    }
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => Some(Message::Quit),
        KeyCode::Left => Some(Message::PreviousOperation),
        KeyCode::Right => Some(Message::NextOperation),
        KeyCode::Up | KeyCode::BackTab => Some(Message::PreviousField),
        KeyCode::Down | KeyCode::Tab | KeyCode::Enter => Some(Message::NextField),
        KeyCode::Backspace => Some(Message::Backspace),
        KeyCode::Delete => Some(Message::ClearField),
        KeyCode::Char('t') => Some(Message::ToggleTheme),
        KeyCode::Char(c) if is_numeric_char(c) => Some(Message::Input(c)),
        _ => None,
    }
}

/// Field contents when the UI opens
const INITIAL_INPUTS: [(OperandField, &str); 5] = [
    (OperandField::N1, "0"),
    (OperandField::N2, "0"),
    (OperandField::A, "1"),
    (OperandField::B, "0"),
    (OperandField::C, "0"),
];

fn parse_operand(text: &str) -> Option<f64> {
    text.trim().parse().ok()
}

pub struct App {
    pub session: Session,
    inputs: HashMap<OperandField, String>,
    /// Index into the current operation's visible fields
    focus: usize,
    outcome: Outcome,
    pub status: String,
    pub should_quit: bool,
}

impl App {
    pub fn new(operation: Operation, theme: Theme) -> Self {
        let mut session = Session::new(operation, theme);
        let mut inputs = HashMap::new();
        for (field, text) in INITIAL_INPUTS {
            session.set_operand(field, parse_operand(text));
            inputs.insert(field, text.to_string());
        }
        let outcome = session.evaluate();

        App {
            session,
            inputs,
            focus: 0,
            outcome,
            status: String::new(),
            should_quit: false,
        }
    }

    pub fn outcome(&self) -> &Outcome {
        &self.outcome
    }

    pub fn field_text(&self, field: OperandField) -> &str {
        self.inputs.get(&field).map(String::as_str).unwrap_or("")
    }

    pub fn focused_field(&self) -> Option<OperandField> {
        self.session.visible_fields().get(self.focus).copied()
    }

    pub fn update(&mut self, message: Message) {
        match message {
            Message::NextOperation => self.change_operation(self.session.operation().next()),
            Message::PreviousOperation => {
                self.change_operation(self.session.operation().previous())
            }
            Message::NextField => {
                let count = self.session.visible_fields().len();
                self.focus = (self.focus + 1) % count;
            }
            Message::PreviousField => {
                let count = self.session.visible_fields().len();
                self.focus = (self.focus + count - 1) % count;
            }
            Message::Input(c) => self.edit_focused(|text| text.push(c)),
            Message::Backspace => self.edit_focused(|text| {
                text.pop();
            }),
            Message::ClearField => self.edit_focused(String::clear),
            Message::ToggleTheme => {
                let theme = self.session.toggle_theme();
                info!(theme = ?theme, "theme toggled");
                self.status = format!("Tema: {}", theme.display_name());
            }
            Message::Quit => self.should_quit = true,
        }
    }

    fn change_operation(&mut self, operation: Operation) {
        self.session.select_operation(operation);
        // Field sets differ in length; keep focus in range
        self.focus = self.focus.min(self.session.visible_fields().len() - 1);
        self.recompute();
    }

    fn edit_focused(&mut self, edit: impl FnOnce(&mut String)) {
        let Some(field) = self.focused_field() else {
            return;
        };
        let mut text = self.field_text(field).to_string();
        edit(&mut text);
        self.set_text(field, text);
        self.recompute();
    }

    /// Store the raw text and the parsed operand. Unparseable text counts as
    /// a missing operand.
    fn set_text(&mut self, field: OperandField, text: String) {
        self.session.set_operand(field, parse_operand(&text));
        self.inputs.insert(field, text);
    }

    fn recompute(&mut self) {
        self.outcome = self.session.evaluate();
    }
}
