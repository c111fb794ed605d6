//! `z8calc`: one-shot calculator over an eight-symbol ring.
//!
//! Runs a single engine operation or evaluates expressions, using the
//! standard ring or one loaded from a TOML table.
//!
//! **Usage:**
//! ```text
//! z8calc [--config <ring.toml>] [--json] info
//! z8calc [--config <ring.toml>] [--json] add|sub|mul|div|pow|gcd|lcm <A> <B>
//! z8calc [--config <ring.toml>] [--json] eval <EXPR>...
//! ```
//!
//! Logging goes to stderr and is controlled with `RUST_LOG`.
//! Exits non-zero if any expression fails to evaluate.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde_json::json;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use z8::{
    DivisionResult, Engine, EngineConfig, EngineError, Evaluator, Number, OperationResult, Quotient,
};

/// Finite-alphabet calculator.
#[derive(Parser)]
#[command(
    name = "z8calc",
    version,
    about = "Arithmetic over an eight-symbol successor cycle"
)]
struct Args {
    /// Ring table to load (TOML). Defaults to the standard ring.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Print results as JSON.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

/// Two operands for a binary operation.
#[derive(clap::Args)]
struct Operands {
    /// Left operand.
    #[arg(allow_hyphen_values = true)]
    a: String,

    /// Right operand.
    #[arg(allow_hyphen_values = true)]
    b: String,
}

#[derive(Subcommand)]
enum Command {
    /// Show the alphabet, identities, and successor table.
    Info,
    /// A + B
    Add(Operands),
    /// A - B
    Sub(Operands),
    /// A * B
    Mul(Operands),
    /// A / B, with the remainder
    Div(Operands),
    /// A ^ B
    Pow(Operands),
    /// gcd(A, B)
    Gcd(Operands),
    /// lcm(A, B)
    Lcm(Operands),
    /// Evaluate each expression independently.
    Eval {
        /// Expressions using + - * / and parentheses.
        #[arg(required = true, allow_hyphen_values = true)]
        expressions: Vec<String>,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let engine = match &args.config {
        Some(path) => EngineConfig::load(path)
            .and_then(|config| config.build())
            .with_context(|| format!("failed to load ring table {}", path.display()))?,
        None => Engine::standard(),
    };

    match args.command {
        Command::Info => info(&engine, args.json),
        Command::Add(ops) => binary(&engine, &ops, args.json, Engine::add),
        Command::Sub(ops) => binary(&engine, &ops, args.json, Engine::subtract),
        Command::Mul(ops) => binary(&engine, &ops, args.json, Engine::multiply),
        Command::Pow(ops) => binary(&engine, &ops, args.json, Engine::power),
        Command::Gcd(ops) => binary(&engine, &ops, args.json, Engine::gcd),
        Command::Lcm(ops) => binary(&engine, &ops, args.json, Engine::lcm),
        Command::Div(ops) => divide(&engine, &ops, args.json),
        Command::Eval { expressions } => {
            let failed = eval(&engine, &expressions, args.json)?;
            if failed > 0 {
                eprintln!("{failed} expression(s) failed.");
                process::exit(1);
            }
            Ok(())
        }
    }
}

/// Prints the ring description.
fn info(engine: &Engine, as_json: bool) -> Result<()> {
    let ring = engine.ring();
    let alphabet: String = engine.alphabet().iter().collect();
    let cycle: String = ring.cycle().into_iter().collect();

    if as_json {
        let successor: serde_json::Map<String, serde_json::Value> = ring
            .successor_table()
            .map(|(from, to)| (from.to_string(), json!(to.to_string())))
            .collect();
        let value = json!({
            "alphabet": alphabet,
            "zero": engine.zero_symbol().to_string(),
            "one": engine.one_symbol().to_string(),
            "base": engine.base(),
            "max_digits": engine.max_digits(),
            "cycle": cycle,
            "successor": successor,
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    println!("alphabet:   {alphabet}");
    println!("zero:       {}", engine.zero_symbol());
    println!("one:        {}", engine.one_symbol());
    println!("base:       {}", engine.base());
    println!("max digits: {}", engine.max_digits());
    println!("cycle:      {cycle}");
    println!();
    println!("+1 table:");
    for (from, to) in ring.successor_table() {
        println!("  {from} -> {to}");
    }
    Ok(())
}

/// Parses both operands with the input digit cap.
fn parse_operands(engine: &Engine, ops: &Operands) -> Result<(Number, Number)> {
    let a = engine
        .parse_input(&ops.a)
        .with_context(|| format!("invalid operand {:?}", ops.a))?;
    let b = engine
        .parse_input(&ops.b)
        .with_context(|| format!("invalid operand {:?}", ops.b))?;
    Ok((a, b))
}

/// Runs one of the operations that return an `OperationResult`.
fn binary(
    engine: &Engine,
    ops: &Operands,
    as_json: bool,
    op: impl Fn(&Engine, &Number, &Number) -> Result<OperationResult, EngineError>,
) -> Result<()> {
    let (a, b) = parse_operands(engine, ops)?;
    let result = op(engine, &a, &b)?;
    if as_json {
        println!("{}", serde_json::to_string(&result)?);
    } else {
        println!("{result}");
    }
    Ok(())
}

fn divide(engine: &Engine, ops: &Operands, as_json: bool) -> Result<()> {
    let (a, b) = parse_operands(engine, ops)?;
    let result = engine.divide(&a, &b)?;
    if as_json {
        println!("{}", serde_json::to_string(&result)?);
    } else {
        println!("{}", format_division(engine, &result));
    }
    Ok(())
}

/// `q`, `q(r)`, `OVERFLOW (q)(r)`, or one of the two sentinels.
fn format_division(engine: &Engine, result: &DivisionResult) -> String {
    let quotient = match &result.quotient {
        Quotient::EmptySet => return format!("{} (division by zero)", result.quotient),
        Quotient::Range { .. } => return format!("{} (indeterminate 0/0)", result.quotient),
        Quotient::Value { value } if result.is_overflow => format!("OVERFLOW ({value})"),
        Quotient::Value { value } => value.to_string(),
    };
    match &result.remainder {
        Some(r) if !engine.is_zero_number(r) => format!("{quotient}({r})"),
        _ => quotient,
    }
}

/// Evaluates every expression and returns how many failed.
fn eval(engine: &Engine, expressions: &[String], as_json: bool) -> Result<usize> {
    let evaluator = Evaluator::new(engine);
    let mut failed = 0usize;

    for expression in expressions {
        match evaluator.evaluate(expression) {
            Ok(out) if as_json => {
                let line = json!({ "expression": expression, "result": out });
                println!("{}", serde_json::to_string(&line)?);
            }
            Ok(out) => {
                println!("{expression} = {out}");
                for note in &out.remainders {
                    println!("    remainder: {note}");
                }
            }
            Err(err) => {
                failed += 1;
                tracing::debug!(%expression, error = ?err, "evaluation failed");
                if as_json {
                    let line = json!({ "expression": expression, "error": err.to_string() });
                    println!("{}", serde_json::to_string(&line)?);
                } else {
                    eprintln!("{expression}: error: {err}");
                }
            }
        }
    }

    Ok(failed)
}
