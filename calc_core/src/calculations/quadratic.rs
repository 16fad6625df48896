//! # Quadratic Equation and Function
//!
//! Solves a·x² + b·x + c = 0 by discriminant case analysis, and describes
//! f(x) = a·x² + b·x + c together with a sampled curve for plotting.
//!
//! ## Root Cases
//!
//! With Δ = b² − 4ac (a ≠ 0):
//!
//! - Δ < 0: no real roots
//! - Δ = 0: one root, x = −b / 2a
//! - Δ > 0: x₁ = (−b + √Δ) / 2a and x₂ = (−b − √Δ) / 2a
//!
//! x₁ is always the `+` branch. Callers rely on that order.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::calculations::quadratic::{solve_equation, Roots};
//! use calc_core::calculations::Value;
//! use calc_core::operands::Operands;
//!
//! let eval = solve_equation(&Operands::coefficients(1.0, -3.0, 2.0)).unwrap();
//! assert_eq!(
//!     eval.value,
//!     Value::Roots { discriminant: 1.0, roots: Roots::Pair { x1: 2.0, x2: 1.0 } }
//! );
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::operands::Operands;
use crate::operation::{OperandField, Operation};
use crate::plot::{PlotSample, SampleGrid};

use super::{format_number, Evaluation, Value};

/// Real roots of a quadratic equation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "case", rename_all = "snake_case")]
pub enum Roots {
    /// Δ < 0
    NoReal,
    /// Δ = 0
    Single { x: f64 },
    /// Δ > 0, `x1` from the `+` branch
    Pair { x1: f64, x2: f64 },
}

fn coefficients(operands: &Operands) -> CalcResult<(f64, f64, f64)> {
    Ok((
        operands.require(OperandField::A)?,
        operands.require(OperandField::B)?,
        operands.require(OperandField::C)?,
    ))
}

/// Δ = b² − 4ac
///
/// Fails only when b² overflows for a finite b. An overflowing 4ac, or an
/// infinite coefficient, follows IEEE arithmetic (Δ may be ±inf or NaN).
pub fn discriminant(a: f64, b: f64, c: f64) -> CalcResult<f64> {
    let b_squared = b * b;
    if b.is_finite() && !b_squared.is_finite() {
        return Err(CalcError::out_of_range("b²"));
    }
    Ok(b_squared - 4.0 * a * c)
}

/// Root case for a ≠ 0
pub fn roots(a: f64, b: f64, delta: f64) -> Roots {
    if delta < 0.0 {
        Roots::NoReal
    } else if delta == 0.0 {
        Roots::Single { x: -b / (2.0 * a) }
    } else {
        let sqrt_delta = delta.sqrt();
        Roots::Pair {
            x1: (-b + sqrt_delta) / (2.0 * a),
            x2: (-b - sqrt_delta) / (2.0 * a),
        }
    }
}

/// Solve a·x² + b·x + c = 0.
///
/// Fails with `NotAQuadraticEquation` when a = 0.
pub fn solve_equation(operands: &Operands) -> CalcResult<Evaluation> {
    let (a, b, c) = coefficients(operands)?;
    if a == 0.0 {
        return Err(CalcError::NotAQuadraticEquation);
    }

    let delta = discriminant(a, b, c)?;
    let roots = roots(a, b, delta);

    let detail = match roots {
        Roots::NoReal => "Não existem raízes reais.".to_string(),
        Roots::Single { x } => format!("Raiz única: x = {}", format_number(x)),
        Roots::Pair { x1, x2 } => {
            format!("x₁ = {}\nx₂ = {}", format_number(x1), format_number(x2))
        }
    };

    Ok(Evaluation {
        operation: Operation::QuadraticEquation,
        text: format!("Δ = {}\n{}", format_number(delta), detail),
        value: Value::Roots {
            discriminant: delta,
            roots,
        },
        plot: None,
    })
}

/// `f(x) = {a}x² + {b}x + {c}`
pub fn function_label(a: f64, b: f64, c: f64) -> String {
    format!(
        "f(x) = {}x² + {}x + {}",
        format_number(a),
        format_number(b),
        format_number(c)
    )
}

/// Sample f(x) = a·x² + b·x + c over `grid`
pub fn sample_function(a: f64, b: f64, c: f64, grid: &SampleGrid) -> PlotSample {
    PlotSample {
        label: function_label(a, b, c),
        points: grid.sample(|x| a * x * x + b * x + c),
    }
}

/// Describe f(x) = a·x² + b·x + c and sample it over the default grid.
///
/// Fails only for a missing or NaN coefficient; a = 0 is a valid (linear) curve.
pub fn describe_function(operands: &Operands) -> CalcResult<Evaluation> {
    let (a, b, c) = coefficients(operands)?;
    let plot = sample_function(a, b, c, &SampleGrid::default());

    Ok(Evaluation {
        operation: Operation::QuadraticFunction,
        text: format!("Função: {}", plot.label),
        value: Value::Function { a, b, c },
        plot: Some(plot),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::evaluate;
    use crate::plot::DEFAULT_SAMPLE_COUNT;

    fn solve(a: f64, b: f64, c: f64) -> CalcResult<Evaluation> {
        evaluate(Operation::QuadraticEquation, &Operands::coefficients(a, b, c))
    }

    #[test]
    fn test_leading_zero_is_not_quadratic() {
        for (b, c) in [(0.0, 0.0), (1.0, 2.0), (-3.0, 0.5), (0.0, -7.0)] {
            assert_eq!(solve(0.0, b, c).unwrap_err(), CalcError::NotAQuadraticEquation);
            assert_eq!(solve(-0.0, b, c).unwrap_err(), CalcError::NotAQuadraticEquation);
        }
    }

    #[test]
    fn test_two_roots_plus_branch_first() {
        let eval = solve(1.0, 0.0, -4.0).unwrap();
        assert_eq!(
            eval.value,
            Value::Roots {
                discriminant: 16.0,
                roots: Roots::Pair { x1: 2.0, x2: -2.0 },
            }
        );
        assert_eq!(eval.text, "Δ = 16.0\nx₁ = 2.0\nx₂ = -2.0");
    }

    #[test]
    fn test_plus_branch_first_with_negative_leading_coefficient() {
        // a < 0 flips which root is larger; x1 is still the + branch
        let eval = solve(-1.0, 0.0, 4.0).unwrap();
        assert_eq!(
            eval.value,
            Value::Roots {
                discriminant: 16.0,
                roots: Roots::Pair { x1: -2.0, x2: 2.0 },
            }
        );
    }

    #[test]
    fn test_single_root() {
        let eval = solve(1.0, 2.0, 1.0).unwrap();
        assert_eq!(
            eval.value,
            Value::Roots {
                discriminant: 0.0,
                roots: Roots::Single { x: -1.0 },
            }
        );
        assert_eq!(eval.text, "Δ = 0.0\nRaiz única: x = -1.0");
    }

    #[test]
    fn test_no_real_roots() {
        let eval = solve(1.0, 0.0, 1.0).unwrap();
        assert_eq!(
            eval.value,
            Value::Roots {
                discriminant: -4.0,
                roots: Roots::NoReal,
            }
        );
        assert_eq!(eval.text, "Δ = -4.0\nNão existem raízes reais.");
    }

    #[test]
    fn test_b_squared_overflow_is_computation_error() {
        let err = solve(1.0, 1e200, 1.0).unwrap_err();
        assert_eq!(err.error_code(), "COMPUTATION_ERROR");
        assert_eq!(err.to_string(), "Erro: resultado fora do intervalo numérico (b²)");
    }

    #[test]
    fn test_four_ac_overflow_gives_infinite_discriminant() {
        let eval = solve(1e300, 0.0, 1e300).unwrap();
        assert_eq!(
            eval.value,
            Value::Roots {
                discriminant: f64::NEG_INFINITY,
                roots: Roots::NoReal,
            }
        );
        assert_eq!(eval.text, "Δ = -inf\nNão existem raízes reais.");
    }

    #[test]
    fn test_infinite_b_is_not_an_overflow() {
        assert_eq!(discriminant(1.0, f64::INFINITY, 1.0).unwrap(), f64::INFINITY);
    }

    #[test]
    fn test_roots_satisfy_equation() {
        for (a, b, c) in [(2.0, -7.0, 3.0), (0.5, 1.5, -2.0), (-3.0, 1.0, 10.0)] {
            if let Value::Roots { roots: Roots::Pair { x1, x2 }, .. } = solve(a, b, c).unwrap().value {
                for x in [x1, x2] {
                    assert!((a * x * x + b * x + c).abs() < 1e-9);
                }
            } else {
                panic!("expected two roots for ({}, {}, {})", a, b, c);
            }
        }
    }

    #[test]
    fn test_function_samples_parabola() {
        let eval = evaluate(Operation::QuadraticFunction, &Operands::coefficients(1.0, 0.0, 0.0)).unwrap();
        let plot = eval.plot.expect("function mode produces a plot");

        assert_eq!(plot.points.len(), DEFAULT_SAMPLE_COUNT);
        assert_eq!(plot.points.first().unwrap().0, -10.0);
        assert_eq!(plot.points.last().unwrap().0, 10.0);
        for &(x, y) in &plot.points {
            assert_eq!(y, x * x);
        }
    }

    #[test]
    fn test_function_text_and_label() {
        let eval = describe_function(&Operands::coefficients(2.0, -1.0, 0.5)).unwrap();
        assert_eq!(eval.text, "Função: f(x) = 2.0x² + -1.0x + 0.5");
        assert_eq!(eval.plot.unwrap().label, "f(x) = 2.0x² + -1.0x + 0.5");
        assert_eq!(eval.value, Value::Function { a: 2.0, b: -1.0, c: 0.5 });
    }

    #[test]
    fn test_function_accepts_zero_leading_coefficient() {
        let eval = describe_function(&Operands::coefficients(0.0, 2.0, 1.0)).unwrap();
        let plot = eval.plot.unwrap();
        assert_eq!(plot.points[0], (-10.0, -19.0));
        assert_eq!(*plot.points.last().unwrap(), (10.0, 21.0));
    }

    #[test]
    fn test_equation_has_no_plot() {
        assert!(solve(1.0, 0.0, -1.0).unwrap().plot.is_none());
    }

    #[test]
    fn test_roots_json() {
        let json = serde_json::to_string(&Roots::Pair { x1: 1.0, x2: -1.0 }).unwrap();
        assert_eq!(json, r#"{"case":"pair","x1":1.0,"x2":-1.0}"#);
        let json = serde_json::to_string(&Roots::NoReal).unwrap();
        assert_eq!(json, r#"{"case":"no_real"}"#);
    }
}
