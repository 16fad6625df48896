//! # Arithmetic
//!
//! The four basic operations and the real square root, in IEEE-754 double
//! precision. Add, Subtract and Multiply never fail for numeric operands;
//! infinite operands and overflowing results are reported as `inf` like any
//! other float.
//!
//! | Operation  | Text                      | Failure                      |
//! |------------|---------------------------|------------------------------|
//! | Add        | `{n1} + {n2} = {sum}`     | -                            |
//! | Subtract   | `{n1} - {n2} = {diff}`    | -                            |
//! | Multiply   | `{n1} × {n2} = {product}` | -                            |
//! | Divide     | `{n1} ÷ {n2} = {quot}`    | n2 == 0: `DivisionByZero`    |
//! | SquareRoot | `√{n1} = {root}`          | n1 < 0: `NegativeSquareRoot` |

use crate::errors::{CalcError, CalcResult};
use crate::operands::Operands;
use crate::operation::{OperandField, Operation};

use super::{format_number, Evaluation};

fn binary_operands(operands: &Operands) -> CalcResult<(f64, f64)> {
    Ok((operands.require(OperandField::N1)?, operands.require(OperandField::N2)?))
}

fn binary(operation: Operation, symbol: &str, n1: f64, n2: f64, result: f64) -> Evaluation {
    let text = format!(
        "{} {} {} = {}",
        format_number(n1),
        symbol,
        format_number(n2),
        format_number(result)
    );
    Evaluation::scalar(operation, text, result)
}

/// n1 + n2
pub fn add(operands: &Operands) -> CalcResult<Evaluation> {
    let (n1, n2) = binary_operands(operands)?;
    Ok(binary(Operation::Add, "+", n1, n2, n1 + n2))
}

/// n1 − n2
pub fn subtract(operands: &Operands) -> CalcResult<Evaluation> {
    let (n1, n2) = binary_operands(operands)?;
    Ok(binary(Operation::Subtract, "-", n1, n2, n1 - n2))
}

/// n1 × n2
pub fn multiply(operands: &Operands) -> CalcResult<Evaluation> {
    let (n1, n2) = binary_operands(operands)?;
    Ok(binary(Operation::Multiply, "×", n1, n2, n1 * n2))
}

/// n1 ÷ n2, rejecting a zero divisor (either sign of zero)
pub fn divide(operands: &Operands) -> CalcResult<Evaluation> {
    let (n1, n2) = binary_operands(operands)?;
    if n2 == 0.0 {
        return Err(CalcError::DivisionByZero);
    }
    Ok(binary(Operation::Divide, "÷", n1, n2, n1 / n2))
}

/// Non-negative real square root of n1
pub fn square_root(operands: &Operands) -> CalcResult<Evaluation> {
    let n1 = operands.require(OperandField::N1)?;
    if n1 < 0.0 {
        return Err(CalcError::NegativeSquareRoot { value: n1 });
    }
    let root = n1.sqrt();
    let text = format!("√{} = {}", format_number(n1), format_number(root));
    Ok(Evaluation::scalar(Operation::SquareRoot, text, root))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::evaluate;

    const SAMPLES: [f64; 9] = [0.0, -0.0, 1.0, -1.0, 2.5, -7.25, 1e-9, 123456.789, -1e12];

    #[test]
    fn test_add_subtract_multiply_all_pairs() {
        for &n1 in &SAMPLES {
            for &n2 in &SAMPLES {
                let ops = Operands::pair(n1, n2);
                assert_eq!(evaluate(Operation::Add, &ops).unwrap().scalar_value(), Some(n1 + n2));
                assert_eq!(evaluate(Operation::Subtract, &ops).unwrap().scalar_value(), Some(n1 - n2));
                assert_eq!(evaluate(Operation::Multiply, &ops).unwrap().scalar_value(), Some(n1 * n2));
            }
        }
    }

    #[test]
    fn test_texts() {
        let ops = Operands::pair(6.0, 3.0);
        assert_eq!(add(&ops).unwrap().text, "6.0 + 3.0 = 9.0");
        assert_eq!(subtract(&ops).unwrap().text, "6.0 - 3.0 = 3.0");
        assert_eq!(multiply(&ops).unwrap().text, "6.0 × 3.0 = 18.0");
        assert_eq!(divide(&ops).unwrap().text, "6.0 ÷ 3.0 = 2.0");
        assert_eq!(square_root(&Operands::single(2.25)).unwrap().text, "√2.25 = 1.5");
    }

    #[test]
    fn test_divide_by_zero() {
        for &n1 in &SAMPLES {
            assert_eq!(divide(&Operands::pair(n1, 0.0)).unwrap_err(), CalcError::DivisionByZero);
            assert_eq!(divide(&Operands::pair(n1, -0.0)).unwrap_err(), CalcError::DivisionByZero);
        }
    }

    #[test]
    fn test_divide_nonzero() {
        for &n1 in &SAMPLES {
            for &n2 in SAMPLES.iter().filter(|v| **v != 0.0) {
                assert_eq!(divide(&Operands::pair(n1, n2)).unwrap().scalar_value(), Some(n1 / n2));
            }
        }
    }

    #[test]
    fn test_square_root_negative() {
        for n1 in [-1.0, -0.25, -1e-12, -1e300] {
            let err = square_root(&Operands::single(n1)).unwrap_err();
            assert_eq!(err, CalcError::NegativeSquareRoot { value: n1 });
            assert_eq!(
                err.to_string(),
                "Erro: não existe raiz quadrada real de número negativo!"
            );
        }
    }

    #[test]
    fn test_square_root_non_negative() {
        for n1 in [0.0, -0.0, 1e-12, 0.5, 2.0, 16.0, 1e300] {
            let root = square_root(&Operands::single(n1)).unwrap().scalar_value().unwrap();
            assert!(root >= 0.0);
            let tolerance = 1e-12 * n1.abs().max(1.0);
            assert!((root * root - n1).abs() <= tolerance, "sqrt({}) = {}", n1, root);
        }
    }

    #[test]
    fn test_square_root_ignores_second_operand() {
        let eval = square_root(&Operands::pair(9.0, -100.0)).unwrap();
        assert_eq!(eval.scalar_value(), Some(3.0));
    }

    #[test]
    fn test_overflow_reports_infinity() {
        let eval = multiply(&Operands::pair(1e200, 1e200)).unwrap();
        assert_eq!(eval.scalar_value(), Some(f64::INFINITY));
        assert_eq!(eval.text, "1e+200 × 1e+200 = inf");
    }

    #[test]
    fn test_infinite_operands() {
        let eval = add(&Operands::pair(f64::INFINITY, 1.0)).unwrap();
        assert_eq!(eval.scalar_value(), Some(f64::INFINITY));
        assert_eq!(eval.text, "inf + 1.0 = inf");

        let eval = subtract(&Operands::pair(1.0, f64::INFINITY)).unwrap();
        assert_eq!(eval.scalar_value(), Some(f64::NEG_INFINITY));

        let eval = square_root(&Operands::single(f64::INFINITY)).unwrap();
        assert_eq!(eval.text, "√inf = inf");

        assert_eq!(
            square_root(&Operands::single(f64::NEG_INFINITY)).unwrap_err(),
            CalcError::NegativeSquareRoot { value: f64::NEG_INFINITY }
        );
    }

    #[test]
    fn test_nan_operand_is_computation_error() {
        let err = add(&Operands::pair(f64::NAN, 1.0)).unwrap_err();
        assert_eq!(err.error_code(), "COMPUTATION_ERROR");
    }

    #[test]
    fn test_missing_second_operand() {
        let err = divide(&Operands::single(4.0)).unwrap_err();
        assert_eq!(err.error_code(), "COMPUTATION_ERROR");
    }
}
