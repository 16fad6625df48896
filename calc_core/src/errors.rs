//! # Error Types
//!
//! Structured error types for calc_core. The evaluation variants carry the
//! exact message shown to the user, so `to_string()` on an error is already
//! display-ready. Each variant also has a stable code for programmatic
//! handling.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::errors::{CalcError, CalcResult};
//!
//! fn divide(n1: f64, n2: f64) -> CalcResult<f64> {
//!     if n2 == 0.0 {
//!         return Err(CalcError::DivisionByZero);
//!     }
//!     Ok(n1 / n2)
//! }
//!
//! let err = divide(1.0, 0.0).unwrap_err();
//! assert_eq!(err.to_string(), "Erro: divisão por zero!");
//! assert_eq!(err.error_code(), "DIVISION_BY_ZERO");
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for calc_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for calculator operations.
///
/// Every variant is recoverable by the caller choosing different inputs.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// Second operand is zero under Divide
    #[error("Erro: divisão por zero!")]
    DivisionByZero,

    /// Operand is negative under SquareRoot
    #[error("Erro: não existe raiz quadrada real de número negativo!")]
    NegativeSquareRoot { value: f64 },

    /// Leading coefficient is zero under QuadraticEquation
    #[error("Erro: isso não é uma equação de 2º grau (a = 0).")]
    NotAQuadraticEquation,

    /// Operation tag not recognized
    #[error("Operação inválida.")]
    InvalidOperation { tag: String },

    /// Any other evaluation-time numeric fault
    #[error("Erro: {details}")]
    ComputationError { details: String },
}

impl CalcError {
    /// Create an InvalidOperation error
    pub fn invalid_operation(tag: impl Into<String>) -> Self {
        CalcError::InvalidOperation { tag: tag.into() }
    }

    /// Create a ComputationError
    pub fn computation(details: impl Into<String>) -> Self {
        CalcError::ComputationError {
            details: details.into(),
        }
    }

    /// A required operand was not supplied
    pub fn missing_operand(field: &str) -> Self {
        CalcError::computation(format!("operando '{}' ausente ou inválido", field))
    }

    /// An operand was NaN
    pub fn not_a_number(field: &str) -> Self {
        CalcError::computation(format!("operando '{}' não é um número", field))
    }

    /// A result left the representable range
    pub fn out_of_range(what: &str) -> Self {
        CalcError::computation(format!("resultado fora do intervalo numérico ({})", what))
    }

    /// Usage errors are the caller's fault (bad tag), not a numeric fault
    pub fn is_usage_error(&self) -> bool {
        matches!(self, CalcError::InvalidOperation { .. })
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::DivisionByZero => "DIVISION_BY_ZERO",
            CalcError::NegativeSquareRoot { .. } => "NEGATIVE_SQUARE_ROOT",
            CalcError::NotAQuadraticEquation => "NOT_A_QUADRATIC_EQUATION",
            CalcError::InvalidOperation { .. } => "INVALID_OPERATION",
            CalcError::ComputationError { .. } => "COMPUTATION_ERROR",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = CalcError::NegativeSquareRoot { value: -4.0 };
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"type\":\"NegativeSquareRoot\""));
        let roundtrip: CalcError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_unit_variant_serialization() {
        let json = serde_json::to_string(&CalcError::DivisionByZero).unwrap();
        assert_eq!(json, r#"{"type":"DivisionByZero"}"#);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(CalcError::DivisionByZero.error_code(), "DIVISION_BY_ZERO");
        assert_eq!(CalcError::invalid_operation("pow").error_code(), "INVALID_OPERATION");
        assert_eq!(CalcError::missing_operand("n2").error_code(), "COMPUTATION_ERROR");
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            CalcError::NotAQuadraticEquation.to_string(),
            "Erro: isso não é uma equação de 2º grau (a = 0)."
        );
        assert_eq!(CalcError::invalid_operation("xyz").to_string(), "Operação inválida.");
        assert_eq!(CalcError::computation("boom").to_string(), "Erro: boom");
    }

    #[test]
    fn test_usage_error_is_distinct() {
        assert!(CalcError::invalid_operation("xyz").is_usage_error());
        assert!(!CalcError::DivisionByZero.is_usage_error());
        assert!(!CalcError::computation("x").is_usage_error());
    }
}
