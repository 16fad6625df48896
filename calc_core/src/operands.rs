//! # Operands
//!
//! The named numeric inputs of a request. Every member is optional; an
//! operation only requires the members listed by
//! [`Operation::required_fields`](crate::operation::Operation::required_fields).
//!
//! ## JSON Example
//!
//! ```json
//! { "a": 1.0, "b": -3.0, "c": 2.0 }
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::operation::OperandField;

/// Operand set for one evaluation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Operands {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub n1: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub n2: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub a: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub b: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub c: Option<f64>,
}

impl Operands {
    /// Operands for the binary operations
    pub fn pair(n1: f64, n2: f64) -> Self {
        Operands {
            n1: Some(n1),
            n2: Some(n2),
            ..Default::default()
        }
    }

    /// Operand for square root
    pub fn single(n1: f64) -> Self {
        Operands {
            n1: Some(n1),
            ..Default::default()
        }
    }

    /// Coefficients of a·x² + b·x + c
    pub fn coefficients(a: f64, b: f64, c: f64) -> Self {
        Operands {
            a: Some(a),
            b: Some(b),
            c: Some(c),
            ..Default::default()
        }
    }

    pub fn get(&self, field: OperandField) -> Option<f64> {
        match field {
            OperandField::N1 => self.n1,
            OperandField::N2 => self.n2,
            OperandField::A => self.a,
            OperandField::B => self.b,
            OperandField::C => self.c,
        }
    }

    pub fn set(&mut self, field: OperandField, value: Option<f64>) {
        let slot = match field {
            OperandField::N1 => &mut self.n1,
            OperandField::N2 => &mut self.n2,
            OperandField::A => &mut self.a,
            OperandField::B => &mut self.b,
            OperandField::C => &mut self.c,
        };
        *slot = value;
    }

    /// Builder-style setter
    pub fn with(mut self, field: OperandField, value: f64) -> Self {
        self.set(field, Some(value));
        self
    }

    /// Fetch a required operand.
    ///
    /// Fails with a computation error when the member is absent or NaN.
    /// Infinities are numbers and pass through to IEEE arithmetic.
    pub fn require(&self, field: OperandField) -> CalcResult<f64> {
        let value = self
            .get(field)
            .ok_or_else(|| CalcError::missing_operand(field.key()))?;
        if value.is_nan() {
            return Err(CalcError::not_a_number(field.key()));
        }
        Ok(value)
    }
}
