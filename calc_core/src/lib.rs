//! # calc_core - Calculator Engine
//!
//! `calc_core` is the computational heart of Calculadora: the four basic
//! operations, square root, quadratic equation solving and quadratic function
//! sampling. All inputs and outputs are JSON-serializable so any front end
//! (terminal UI, command line, web page) can drive it.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types whose text is display-ready
//!
//! ## Quick Start
//!
//! ```rust
//! use calc_core::{evaluate, Operands, Operation, Outcome};
//!
//! let result = evaluate(Operation::QuadraticEquation, &Operands::coefficients(1.0, 0.0, -4.0));
//! let outcome = Outcome::from_result(result);
//! assert_eq!(outcome.text(), "Δ = 16.0\nx₁ = 2.0\nx₂ = -2.0");
//! ```
//!
//! ## Modules
//!
//! - [`operation`] - Operation tags and required operand fields
//! - [`operands`] - Operand sets
//! - [`calculations`] - The evaluation engine
//! - [`plot`] - Curve sampling for the function mode
//! - [`session`] - Per-session state (operation, theme, entered values)
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod errors;
pub mod operands;
pub mod operation;
pub mod plot;
pub mod session;

// Re-export commonly used types at crate root for convenience
pub use calculations::{evaluate, evaluate_tag, CalculationRequest, Evaluation, Outcome, Value};
pub use errors::{CalcError, CalcResult};
pub use operands::Operands;
pub use operation::{OperandField, Operation};
pub use plot::{PlotSample, SampleGrid};
pub use session::{Session, Theme};
