//! One-shot commands: `eval`, `operations` and `plot`.
//!
//! Each command renders to a `String` so `main` only prints.

use std::fmt::Write as _;

use anyhow::{ensure, Context};
use calc_core::calculations::{evaluate_tag, quadratic, Outcome};
use calc_core::{Operation, SampleGrid};
use serde::Serialize;
use tracing::info;

use crate::cli::{EvalArgs, PlotArgs};

/// Evaluate one request.
///
/// Calculation failures are results, not process errors: they render as
/// their message (or a `failure` JSON document).
pub fn run_eval(args: &EvalArgs) -> anyhow::Result<String> {
    let outcome = Outcome::from_result(evaluate_tag(&args.operation, &args.operands.to_operands()));
    info!(operation = %args.operation, success = outcome.is_success(), "eval");

    if args.json {
        serde_json::to_string_pretty(&outcome).context("serializing outcome")
    } else {
        Ok(outcome.text().to_string())
    }
}

#[derive(Serialize)]
struct OperationInfo {
    tag: &'static str,
    label: &'static str,
    fields: Vec<&'static str>,
}

/// Table (or JSON list) of operations and their operand fields
pub fn render_operations(json: bool) -> anyhow::Result<String> {
    let infos: Vec<OperationInfo> = Operation::ALL
        .iter()
        .map(|op| OperationInfo {
            tag: op.tag(),
            label: op.display_name(),
            fields: op.required_fields().iter().map(|f| f.key()).collect(),
        })
        .collect();

    if json {
        return serde_json::to_string_pretty(&infos).context("serializing operations");
    }

    let mut out = String::new();
    for info in &infos {
        writeln!(out, "{:<15}{:<22}{}", info.tag, info.label, info.fields.join(", "))?;
    }
    Ok(out.trim_end().to_string())
}

/// Sampled curve of f(x) = a·x² + b·x + c as CSV or JSON
pub fn render_plot(args: &PlotArgs) -> anyhow::Result<String> {
    ensure!(args.samples > 0, "--samples must be at least 1");
    ensure!(
        args.x_min.is_finite() && args.x_max.is_finite() && args.x_min < args.x_max,
        "--x-min must be finite and smaller than --x-max"
    );

    let grid = SampleGrid {
        x_min: args.x_min,
        x_max: args.x_max,
        count: args.samples,
    };
    let plot = quadratic::sample_function(args.a, args.b, args.c, &grid);

    if !args.csv {
        return serde_json::to_string_pretty(&plot).context("serializing plot");
    }

    let mut out = String::from("x,y\n");
    for (x, y) in &plot.points {
        writeln!(out, "{},{}", x, y)?;
    }
    Ok(out.trim_end().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::OperandArgs;

    fn eval_args(operation: &str, operands: OperandArgs, json: bool) -> EvalArgs {
        EvalArgs {
            operation: operation.to_string(),
            operands,
            json,
        }
    }

    fn plot_args(csv: bool) -> PlotArgs {
        PlotArgs {
            a: 1.0,
            b: 0.0,
            c: 0.0,
            samples: 3,
            x_min: -1.0,
            x_max: 1.0,
            csv,
        }
    }

    #[test]
    fn test_eval_text() {
        let operands = OperandArgs {
            n1: Some(7.0),
            n2: Some(2.0),
            ..Default::default()
        };
        assert_eq!(run_eval(&eval_args("divisao", operands, false)).unwrap(), "7.0 ÷ 2.0 = 3.5");
    }

    #[test]
    fn test_eval_failure_is_not_a_process_error() {
        let operands = OperandArgs {
            n1: Some(7.0),
            n2: Some(0.0),
            ..Default::default()
        };
        assert_eq!(
            run_eval(&eval_args("divisao", operands, false)).unwrap(),
            "Erro: divisão por zero!"
        );
        assert_eq!(
            run_eval(&eval_args("potencia", OperandArgs::default(), false)).unwrap(),
            "Operação inválida."
        );
    }

    #[test]
    fn test_eval_json() {
        let operands = OperandArgs {
            a: Some(1.0),
            b: Some(0.0),
            c: Some(0.0),
            ..Default::default()
        };
        let out = run_eval(&eval_args("funcao2grau", operands, true)).unwrap();
        let json: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(json["status"], "success");
        assert_eq!(json["plot"]["points"].as_array().unwrap().len(), 400);
        assert_eq!(json["plot"]["label"], "f(x) = 1.0x² + 0.0x + 0.0");
    }

    #[test]
    fn test_operations_table() {
        let out = render_operations(false).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), Operation::ALL.len());
        assert!(lines[0].starts_with("soma"));
        assert!(lines[4].contains("Raiz Quadrada (√)"));
        assert!(lines[6].ends_with("a, b, c"));
    }

    #[test]
    fn test_operations_json() {
        let out = render_operations(true).unwrap();
        let json: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(json[4]["tag"], "raiz");
        assert_eq!(json[4]["fields"], serde_json::json!(["n1"]));
    }

    #[test]
    fn test_plot_csv() {
        assert_eq!(render_plot(&plot_args(true)).unwrap(), "x,y\n-1,1\n0,0\n1,1");
    }

    #[test]
    fn test_plot_json() {
        let out = render_plot(&plot_args(false)).unwrap();
        let json: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(json["points"], serde_json::json!([[-1.0, 1.0], [0.0, 0.0], [1.0, 1.0]]));
    }

    #[test]
    fn test_plot_rejects_bad_range() {
        let mut args = plot_args(true);
        args.x_min = 5.0;
        assert!(render_plot(&args).is_err());

        let mut args = plot_args(true);
        args.samples = 0;
        assert!(render_plot(&args).is_err());
    }
}
