//! # Operations
//!
//! The `Operation` tag selected by the user and the operand fields each one
//! needs. The presentation layer consults [`Operation::required_fields`] to
//! decide which inputs are visible.
//!
//! ## Wire Tags
//!
//! Operations serialize as short Portuguese tags, the same keys the
//! operation selector has always used:
//!
//! | Operation           | Tag             |
//! |---------------------|-----------------|
//! | Add                 | `soma`          |
//! | Subtract            | `subtracao`     |
//! | Multiply            | `multiplicacao` |
//! | Divide              | `divisao`       |
//! | SquareRoot          | `raiz`          |
//! | QuadraticEquation   | `equacao2grau`  |
//! | QuadraticFunction   | `funcao2grau`   |
//!
//! ```rust
//! use calc_core::operation::{Operation, OperandField};
//!
//! let op: Operation = "raiz".parse().unwrap();
//! assert_eq!(op, Operation::SquareRoot);
//! assert_eq!(op.required_fields(), &[OperandField::N1]);
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::CalcError;

/// Calculator operation selected per request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operation {
    #[serde(rename = "soma")]
    Add,
    #[serde(rename = "subtracao")]
    Subtract,
    #[serde(rename = "multiplicacao")]
    Multiply,
    #[serde(rename = "divisao")]
    Divide,
    #[serde(rename = "raiz")]
    SquareRoot,
    #[serde(rename = "equacao2grau")]
    QuadraticEquation,
    #[serde(rename = "funcao2grau")]
    QuadraticFunction,
}

const BINARY_FIELDS: &[OperandField] = &[OperandField::N1, OperandField::N2];
const UNARY_FIELDS: &[OperandField] = &[OperandField::N1];
const COEFFICIENT_FIELDS: &[OperandField] = &[OperandField::A, OperandField::B, OperandField::C];

impl Operation {
    /// All operations in selector order
    pub const ALL: [Operation; 7] = [
        Operation::Add,
        Operation::Subtract,
        Operation::Multiply,
        Operation::Divide,
        Operation::SquareRoot,
        Operation::QuadraticEquation,
        Operation::QuadraticFunction,
    ];

    /// Wire tag (also accepted by `FromStr`)
    pub fn tag(&self) -> &'static str {
        match self {
            Operation::Add => "soma",
            Operation::Subtract => "subtracao",
            Operation::Multiply => "multiplicacao",
            Operation::Divide => "divisao",
            Operation::SquareRoot => "raiz",
            Operation::QuadraticEquation => "equacao2grau",
            Operation::QuadraticFunction => "funcao2grau",
        }
    }

    /// Label shown in the operation selector
    pub fn display_name(&self) -> &'static str {
        match self {
            Operation::Add => "Adição (+)",
            Operation::Subtract => "Subtração (-)",
            Operation::Multiply => "Multiplicação (×)",
            Operation::Divide => "Divisão (÷)",
            Operation::SquareRoot => "Raiz Quadrada (√)",
            Operation::QuadraticEquation => "Equação do 2º Grau",
            Operation::QuadraticFunction => "Função do 2º Grau",
        }
    }

    /// Operand fields this operation reads. Everything else is ignored.
    pub fn required_fields(&self) -> &'static [OperandField] {
        match self {
            Operation::Add | Operation::Subtract | Operation::Multiply | Operation::Divide => {
                BINARY_FIELDS
            }
            Operation::SquareRoot => UNARY_FIELDS,
            Operation::QuadraticEquation | Operation::QuadraticFunction => COEFFICIENT_FIELDS,
        }
    }

    /// Whether evaluating this operation yields a plot
    pub fn produces_plot(&self) -> bool {
        matches!(self, Operation::QuadraticFunction)
    }

    /// Next operation in selector order (wraps around)
    pub fn next(&self) -> Operation {
        let idx = self.index();
        Operation::ALL[(idx + 1) % Operation::ALL.len()]
    }

    /// Previous operation in selector order (wraps around)
    pub fn previous(&self) -> Operation {
        let idx = self.index();
        Operation::ALL[(idx + Operation::ALL.len() - 1) % Operation::ALL.len()]
    }

    fn index(&self) -> usize {
        Operation::ALL.iter().position(|op| op == self).unwrap_or(0)
    }
}

impl Default for Operation {
    fn default() -> Self {
        Operation::Add
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Operation {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim();
        Operation::ALL
            .iter()
            .copied()
            .find(|op| op.tag() == tag)
            .ok_or_else(|| CalcError::invalid_operation(tag))
    }
}

/// A named numeric input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OperandField {
    N1,
    N2,
    A,
    B,
    C,
}

impl OperandField {
    /// Key used in JSON and on the command line
    pub fn key(&self) -> &'static str {
        match self {
            OperandField::N1 => "n1",
            OperandField::N2 => "n2",
            OperandField::A => "a",
            OperandField::B => "b",
            OperandField::C => "c",
        }
    }

    /// Input label
    pub fn display_name(&self) -> &'static str {
        match self {
            OperandField::N1 => "Número 1",
            OperandField::N2 => "Número 2",
            OperandField::A => "Coeficiente a",
            OperandField::B => "Coeficiente b",
            OperandField::C => "Coeficiente c",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_roundtrip() {
        for op in Operation::ALL {
            let parsed: Operation = op.tag().parse().unwrap();
            assert_eq!(parsed, op);
            assert_eq!(op.to_string(), op.tag());
        }
    }

    #[test]
    fn test_serde_uses_tags() {
        let json = serde_json::to_string(&Operation::QuadraticEquation).unwrap();
        assert_eq!(json, "\"equacao2grau\"");
        let op: Operation = serde_json::from_str("\"divisao\"").unwrap();
        assert_eq!(op, Operation::Divide);
    }

    #[test]
    fn test_unknown_tag_is_invalid_operation() {
        let err = "potencia".parse::<Operation>().unwrap_err();
        assert_eq!(err, CalcError::invalid_operation("potencia"));
        assert!("".parse::<Operation>().is_err());
        assert!("Soma".parse::<Operation>().is_err());
    }

    #[test]
    fn test_required_fields() {
        for op in [Operation::Add, Operation::Subtract, Operation::Multiply, Operation::Divide] {
            assert_eq!(op.required_fields(), &[OperandField::N1, OperandField::N2]);
        }
        assert_eq!(Operation::SquareRoot.required_fields(), &[OperandField::N1]);
        assert_eq!(
            Operation::QuadraticFunction.required_fields(),
            &[OperandField::A, OperandField::B, OperandField::C]
        );
        assert_eq!(
            Operation::QuadraticEquation.required_fields(),
            Operation::QuadraticFunction.required_fields()
        );
    }

    #[test]
    fn test_selector_cycle() {
        assert_eq!(Operation::Add.next(), Operation::Subtract);
        assert_eq!(Operation::QuadraticFunction.next(), Operation::Add);
        assert_eq!(Operation::Add.previous(), Operation::QuadraticFunction);
        for op in Operation::ALL {
            assert_eq!(op.next().previous(), op);
        }
    }

    #[test]
    fn test_only_function_plots() {
        let plotting: Vec<_> = Operation::ALL.iter().filter(|op| op.produces_plot()).collect();
        assert_eq!(plotting, vec![&Operation::QuadraticFunction]);
    }
}
