//! Infix expression evaluation over an [`Engine`].
//!
//! Expressions use `+ - * /`, parentheses, and unary minus in front of a
//! literal or a parenthesized group. `*` and `/` bind tighter than `+` and
//! `-`; operators of equal precedence associate to the left.
//!
//! Division keeps only the quotient as the running value. Nonzero remainders
//! are collected as [`RemainderNote`]s. Division by zero and `0/0` abort the
//! expression, as does dividing a value that has already grown past the
//! digit cap.
//!
//! Parentheses nest at most [`MAX_NESTING`](crate::constants::MAX_NESTING)
//! deep.
//!
//! # Example
//!
//! ```
//! use z8::{Engine, Evaluator};
//!
//! let engine = Engine::standard();
//! let eval = Evaluator::new(&engine);
//!
//! // 2 * (1 + 3) = 8
//! let out = eval.evaluate("g*(b+d)").unwrap();
//! assert_eq!(out.value.to_string(), "ba");
//! assert!(!out.is_overflow);
//!
//! assert!(eval.evaluate("h/a").is_err());
//! assert!(eval.evaluate("b+b").is_ok());
//! ```

mod cursor;
mod parser;

use std::fmt;

use serde::Serialize;

use crate::engine::{Engine, Number};
use crate::error::EvalError;
use parser::Parser;

/// A division inside an expression that left a nonzero remainder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RemainderNote {
    /// Left operand of the division.
    pub dividend: Number,
    /// Right operand of the division.
    pub divisor: Number,
    /// The quotient that replaced the running value.
    pub quotient: Number,
    /// The discarded remainder.
    pub remainder: Number,
    /// Byte offset of the `/` token.
    pub offset: usize,
}

impl fmt::Display for RemainderNote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} / {} = {}({})",
            self.dividend, self.divisor, self.quotient, self.remainder
        )
    }
}

/// Outcome of one expression.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Evaluation {
    /// Final value, uncapped.
    pub value: Number,
    /// Some intermediate or final result exceeded the digit cap.
    pub is_overflow: bool,
    /// Divisions that left a remainder, in evaluation order.
    pub remainders: Vec<RemainderNote>,
}

impl fmt::Display for Evaluation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_overflow {
            write!(f, "OVERFLOW ({})", self.value)
        } else {
            write!(f, "{}", self.value)
        }
    }
}

/// Evaluates expressions against a borrowed engine.
///
/// Each call starts from fresh state, so a failed expression never affects
/// the next one.
#[derive(Debug, Clone, Copy)]
pub struct Evaluator<'e> {
    engine: &'e Engine,
}

impl<'e> Evaluator<'e> {
    /// Creates an evaluator over `engine`.
    #[must_use]
    pub fn new(engine: &'e Engine) -> Self {
        Self { engine }
    }

    /// The engine expressions are evaluated with.
    #[must_use]
    pub fn engine(&self) -> &'e Engine {
        self.engine
    }

    /// Evaluates one complete expression.
    ///
    /// # Errors
    ///
    /// Returns [`EvalError`] for malformed input, an invalid or too long
    /// literal, division by zero, `0/0`, parentheses nested too deep, or a
    /// division whose dividend exceeds the digit cap. Any other overflow is
    /// reported through [`Evaluation::is_overflow`] instead.
    #[tracing::instrument(level = "debug", skip(self), err(level = "debug"))]
    pub fn evaluate(&self, expression: &str) -> Result<Evaluation, EvalError> {
        let (value, is_overflow, remainders) = Parser::new(self.engine, expression).parse()?;
        Ok(Evaluation {
            value,
            is_overflow,
            remainders,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_does_not_leak_into_next_call() {
        let engine = Engine::standard();
        let eval = Evaluator::new(&engine);
        assert_eq!(
            eval.evaluate("c/g+(h/a)"),
            Err(EvalError::DivisionByZero { offset: 6 })
        );
        let out = eval.evaluate("c/g").unwrap();
        assert_eq!(out.remainders.len(), 1);
        assert!(!out.is_overflow);
    }

    #[test]
    fn test_display() {
        let engine = Engine::standard();
        let eval = Evaluator::new(&engine);
        assert_eq!(eval.evaluate("-c/g").unwrap().to_string(), "-h");
        assert_eq!(
            eval.evaluate("cccccccc*g").unwrap().to_string(),
            "OVERFLOW (bcccccccf)"
        );
        let out = eval.evaluate("c/g").unwrap();
        assert_eq!(out.remainders[0].to_string(), "c / g = d(b)");
    }

    #[test]
    fn test_serializes_with_text_numbers() {
        let engine = Engine::standard();
        let out = Evaluator::new(&engine).evaluate("c/g").unwrap();
        let json = serde_json::to_value(&out).unwrap();
        assert_eq!(json["value"], "d");
        assert_eq!(json["is_overflow"], false);
        assert_eq!(json["remainders"][0]["remainder"], "b");
        assert_eq!(json["remainders"][0]["offset"], 1);
    }
}
