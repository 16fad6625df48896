//! # Calculations
//!
//! The calculation engine. Every operation follows the same pattern:
//!
//! - [`Operands`] in, validated per operation
//! - `CalcResult<Evaluation>` out, where the error side is a [`CalcError`]
//!
//! [`evaluate`] dispatches on the [`Operation`] tag; [`evaluate_tag`] accepts
//! an unvalidated tag string. [`Outcome`] is the display-ready form handed to
//! a front end: every failure becomes a message, nothing escapes as a panic.
//!
//! ## Available Calculations
//!
//! - [`arithmetic`] - Add, Subtract, Multiply, Divide, SquareRoot
//! - [`quadratic`] - Quadratic equation roots and quadratic function sampling
//!
//! ## Example
//!
//! ```rust
//! use calc_core::calculations::{evaluate, Value};
//! use calc_core::operands::Operands;
//! use calc_core::operation::Operation;
//!
//! let eval = evaluate(Operation::Add, &Operands::pair(2.0, 3.0)).unwrap();
//! assert_eq!(eval.text, "2.0 + 3.0 = 5.0");
//! assert_eq!(eval.value, Value::Scalar { value: 5.0 });
//! ```

pub mod arithmetic;
pub mod quadratic;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::{CalcError, CalcResult};
use crate::operands::Operands;
use crate::operation::Operation;
use crate::plot::PlotSample;

pub use quadratic::Roots;

/// Structured numeric outcome of a successful evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Value {
    /// Single number (arithmetic and square root)
    Scalar { value: f64 },
    /// Quadratic equation: discriminant and its root case
    Roots { discriminant: f64, roots: Roots },
    /// Quadratic function coefficients
    Function { a: f64, b: f64, c: f64 },
}

/// A successful evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    pub operation: Operation,
    /// Human-readable description of the computation and its outcome
    pub text: String,
    pub value: Value,
    /// Only present for [`Operation::QuadraticFunction`]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plot: Option<PlotSample>,
}

impl Evaluation {
    pub(crate) fn scalar(operation: Operation, text: String, value: f64) -> Self {
        Evaluation {
            operation,
            text,
            value: Value::Scalar { value },
            plot: None,
        }
    }

    /// The scalar result, if this evaluation produced one
    pub fn scalar_value(&self) -> Option<f64> {
        match self.value {
            Value::Scalar { value } => Some(value),
            _ => None,
        }
    }
}

/// Evaluate an operation.
///
/// Deterministic and side-effect free apart from a debug log line.
pub fn evaluate(operation: Operation, operands: &Operands) -> CalcResult<Evaluation> {
    debug!(operation = %operation, ?operands, "evaluating");

    let result = match operation {
        Operation::Add => arithmetic::add(operands),
        Operation::Subtract => arithmetic::subtract(operands),
        Operation::Multiply => arithmetic::multiply(operands),
        Operation::Divide => arithmetic::divide(operands),
        Operation::SquareRoot => arithmetic::square_root(operands),
        Operation::QuadraticEquation => quadratic::solve_equation(operands),
        Operation::QuadraticFunction => quadratic::describe_function(operands),
    };

    if let Err(ref e) = result {
        debug!(operation = %operation, code = e.error_code(), "evaluation failed");
    }
    result
}

/// Evaluate an operation given by its wire tag.
///
/// Unknown tags yield [`CalcError::InvalidOperation`].
pub fn evaluate_tag(tag: &str, operands: &Operands) -> CalcResult<Evaluation> {
    let operation: Operation = tag.parse()?;
    evaluate(operation, operands)
}

/// A request as it arrives from a JSON consumer. The operation stays a raw
/// string so unknown tags surface as `InvalidOperation` rather than a
/// deserialization error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CalculationRequest {
    pub operation: String,
    #[serde(default)]
    pub operands: Operands,
}

impl CalculationRequest {
    pub fn evaluate(&self) -> Outcome {
        Outcome::from_result(evaluate_tag(&self.operation, &self.operands))
    }
}

/// Display-ready result of one request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum Outcome {
    Success {
        text: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        plot: Option<PlotSample>,
    },
    Failure {
        code: String,
        message: String,
    },
}

impl Outcome {
    pub fn from_result(result: CalcResult<Evaluation>) -> Self {
        match result {
            Ok(eval) => Outcome::Success {
                text: eval.text,
                plot: eval.plot,
            },
            Err(e) => Outcome::from_error(&e),
        }
    }

    pub fn from_error(error: &CalcError) -> Self {
        Outcome::Failure {
            code: error.error_code().to_string(),
            message: error.to_string(),
        }
    }

    /// Text to render verbatim
    pub fn text(&self) -> &str {
        match self {
            Outcome::Success { text, .. } => text,
            Outcome::Failure { message, .. } => message,
        }
    }

    pub fn plot(&self) -> Option<&PlotSample> {
        match self {
            Outcome::Success { plot, .. } => plot.as_ref(),
            Outcome::Failure { .. } => None,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success { .. })
    }
}

/// Format a number for result text.
///
/// Shortest round-trip form, always with a fractional part or exponent.
/// Exponents carry a sign and at least two digits: `2.0`, `0.5`, `1e-05`,
/// `1e+16`, `inf`, `nan`.
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    let repr = format!("{:?}", value);
    match repr.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            format!("{}e{}{:0>2}", mantissa, sign, digits)
        }
        None => repr,
    }
}
