//! # Session State
//!
//! Per-session UI state: the selected operation, the selected theme and the
//! operand values typed so far. A `Session` belongs to exactly one front end
//! instance, so it is plain owned data.
//!
//! ```rust
//! use calc_core::operation::{Operation, OperandField};
//! use calc_core::session::{Session, Theme};
//!
//! let mut session = Session::new(Operation::SquareRoot, Theme::Light);
//! session.set_operand(OperandField::N1, Some(81.0));
//! assert_eq!(session.evaluate().text(), "√81.0 = 9.0");
//!
//! session.toggle_theme();
//! assert_eq!(session.theme(), Theme::Dark);
//! ```

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::calculations::{evaluate, Outcome};
use crate::operands::Operands;
use crate::operation::{OperandField, Operation};

/// Visual theme. Affects presentation only, never computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Theme::Light => "Claro",
            Theme::Dark => "Escuro",
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Theme::Light
    }
}

/// State owned by one interactive session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    id: Uuid,
    operation: Operation,
    theme: Theme,
    operands: Operands,
}

impl Session {
    pub fn new(operation: Operation, theme: Theme) -> Self {
        Session {
            id: Uuid::new_v4(),
            operation,
            theme,
            operands: Operands::default(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn operation(&self) -> Operation {
        self.operation
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn operands(&self) -> &Operands {
        &self.operands
    }

    /// Switch operation. Entered operand values are kept.
    pub fn select_operation(&mut self, operation: Operation) {
        self.operation = operation;
    }

    pub fn toggle_theme(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        self.theme
    }

    pub fn set_operand(&mut self, field: OperandField, value: Option<f64>) {
        self.operands.set(field, value);
    }

    pub fn operand(&self, field: OperandField) -> Option<f64> {
        self.operands.get(field)
    }

    /// Fields the current operation needs, in display order
    pub fn visible_fields(&self) -> &'static [OperandField] {
        self.operation.required_fields()
    }

    /// Evaluate the current operation against the entered operands
    pub fn evaluate(&self) -> Outcome {
        Outcome::from_result(evaluate(self.operation, &self.operands))
    }
}

impl Default for Session {
    fn default() -> Self {
        Session::new(Operation::default(), Theme::default())
    }
}
