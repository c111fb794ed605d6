//! Recursive-descent evaluation.
//!
//! ```text
//! expression := term (('+' | '-') term)*
//! term       := factor (('*' | '/') factor)*
//! factor     := '-'? '(' expression ')' | number
//! number     := '-'? symbol+
//! ```
//!
//! There is no separate token stream: each rule reads directly from the
//! cursor and calls the engine as soon as both operands are known.

use super::cursor::Cursor;
use super::RemainderNote;
use crate::core::constants::MAX_NESTING;
use crate::engine::{Engine, Number, OperationResult, Quotient};
use crate::error::EvalError;

/// Per-expression parser state.
pub(crate) struct Parser<'e, 'a> {
    engine: &'e Engine,
    cursor: Cursor<'a>,
    depth: usize,
    is_overflow: bool,
    remainders: Vec<RemainderNote>,
}

impl<'e, 'a> Parser<'e, 'a> {
    pub(crate) fn new(engine: &'e Engine, input: &'a str) -> Self {
        Self {
            engine,
            cursor: Cursor::new(input),
            depth: 0,
            is_overflow: false,
            remainders: Vec::new(),
        }
    }

    /// Parses the whole input as one expression.
    pub(crate) fn parse(mut self) -> Result<(Number, bool, Vec<RemainderNote>), EvalError> {
        let value = self.expression()?;
        self.cursor.skip_whitespace();
        if let Some(found) = self.cursor.peek() {
            return Err(self.unexpected(found));
        }
        Ok((value, self.is_overflow, self.remainders))
    }

    fn expression(&mut self) -> Result<Number, EvalError> {
        let mut left = self.term()?;
        loop {
            self.cursor.skip_whitespace();
            if self.cursor.eat('+') {
                let right = self.term()?;
                left = self.record(self.engine.add(&left, &right)?);
            } else if self.cursor.eat('-') {
                let right = self.term()?;
                left = self.record(self.engine.subtract(&left, &right)?);
            } else {
                return Ok(left);
            }
        }
    }

    fn term(&mut self) -> Result<Number, EvalError> {
        let mut left = self.factor()?;
        loop {
            self.cursor.skip_whitespace();
            let offset = self.cursor.offset();
            if self.cursor.eat('*') {
                let right = self.factor()?;
                left = self.record(self.engine.multiply(&left, &right)?);
            } else if self.cursor.eat('/') {
                let right = self.factor()?;
                left = self.quotient(left, right, offset)?;
            } else {
                return Ok(left);
            }
        }
    }

    fn factor(&mut self) -> Result<Number, EvalError> {
        self.cursor.skip_whitespace();
        let negative = self.cursor.eat('-');
        if negative {
            self.cursor.skip_whitespace();
        }

        let offset = self.cursor.offset();
        let value = match self.cursor.peek() {
            Some('(') => {
                if self.depth == MAX_NESTING {
                    return Err(EvalError::NestingTooDeep {
                        offset,
                        max: MAX_NESTING,
                    });
                }
                self.depth += 1;
                self.cursor.bump();
                let inner = self.expression()?;
                self.cursor.skip_whitespace();
                if !self.cursor.eat(')') {
                    return Err(match self.cursor.peek() {
                        None => EvalError::UnclosedParen { offset },
                        Some(found) => self.unexpected(found),
                    });
                }
                self.depth -= 1;
                inner
            }
            Some(c) if self.engine.is_valid_char(c) => {
                let engine = self.engine;
                let literal = self.cursor.take_while(|c| engine.is_valid_char(c));
                self.engine.parse_input(literal)?
            }
            _ => return Err(EvalError::MissingOperand { offset }),
        };

        Ok(if negative {
            self.engine.negate(&value)
        } else {
            value
        })
    }

    fn quotient(
        &mut self,
        dividend: Number,
        divisor: Number,
        offset: usize,
    ) -> Result<Number, EvalError> {
        let max = self.engine.max_digits();
        if dividend.len() > max && !self.engine.is_zero_number(&divisor) {
            tracing::debug!(%dividend, offset, "refusing to divide an overflowed dividend");
            return Err(EvalError::DividendOverflow { offset, max });
        }

        let result = self.engine.divide(&dividend, &divisor)?;
        self.is_overflow |= result.is_overflow;

        let quotient = match result.quotient {
            Quotient::Value { value } => value,
            Quotient::EmptySet => return Err(EvalError::DivisionByZero { offset }),
            Quotient::Range { .. } => return Err(EvalError::ZeroByZero { offset }),
        };

        if let Some(remainder) = result.remainder {
            if !self.engine.is_zero_number(&remainder) {
                tracing::debug!(
                    %dividend,
                    %divisor,
                    %quotient,
                    %remainder,
                    offset,
                    "division left a remainder"
                );
                self.remainders.push(RemainderNote {
                    dividend,
                    divisor,
                    quotient: quotient.clone(),
                    remainder,
                    offset,
                });
            }
        }

        Ok(quotient)
    }

    fn record(&mut self, result: OperationResult) -> Number {
        self.is_overflow |= result.is_overflow;
        result.value
    }

    /// Classifies a character left over where an operator or the end of
    /// input was expected.
    fn unexpected(&self, found: char) -> EvalError {
        let offset = self.cursor.offset();
        if found == ')' {
            EvalError::UnmatchedParen { offset }
        } else if found == '(' || self.engine.is_valid_char(found) {
            EvalError::TrailingInput { offset, found }
        } else {
            EvalError::UnknownOperator { offset, found }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(input: &str) -> Result<(Number, bool, Vec<RemainderNote>), EvalError> {
        let engine = Engine::standard();
        Parser::new(&engine, input).parse()
    }

    fn value(input: &str) -> String {
        parse(input).unwrap().0.to_string()
    }

    #[test]
    fn test_precedence_and_associativity() {
        // 1 + 2 * 3 = 7
        assert_eq!(value("b+g*d"), "c");
        // (1 + 2) * 3 = 9 → octal 11
        assert_eq!(value("(b+g)*d"), "bb");
        // 7 - 2 - 1 = 4, left to right
        assert_eq!(value("c-g-b"), "h");
        // 6 / 3 * 2 = 4
        assert_eq!(value("f/d*g"), "h");
    }

    #[test]
    fn test_unary_minus() {
        assert_eq!(value("-d"), "-d");
        assert_eq!(value("-(b+g)"), "-d");
        assert_eq!(value("b--b"), "g");
        assert_eq!(value("- ( d )"), "-d");
        assert_eq!(value("-(-b)"), "b");
    }

    #[test]
    fn test_whitespace_between_tokens() {
        assert_eq!(value("  b +\tg * d  "), "c");
    }

    #[test]
    fn test_remainders_are_recorded() {
        // 7 / 2 = 3 r 1, then 3 + 1 = 4
        let (v, overflow, notes) = parse("c/g+b").unwrap();
        assert_eq!(v.to_string(), "h");
        assert!(!overflow);
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].quotient.to_string(), "d");
        assert_eq!(notes[0].remainder.to_string(), "b");
        assert_eq!(notes[0].offset, 1);
        // exact division leaves no note
        assert!(parse("f/g").unwrap().2.is_empty());
    }

    #[test]
    fn test_division_sentinels_abort() {
        assert_eq!(parse("h/a"), Err(EvalError::DivisionByZero { offset: 1 }));
        assert_eq!(parse("a / a"), Err(EvalError::ZeroByZero { offset: 2 }));
        assert_eq!(
            parse("b+(h/(b-b))"),
            Err(EvalError::DivisionByZero { offset: 4 })
        );
    }

    #[test]
    fn test_syntax_errors() {
        assert_eq!(parse(""), Err(EvalError::MissingOperand { offset: 0 }));
        assert_eq!(parse("b+"), Err(EvalError::MissingOperand { offset: 2 }));
        assert_eq!(parse("b+*g"), Err(EvalError::MissingOperand { offset: 2 }));
        assert_eq!(parse("(b+g"), Err(EvalError::UnclosedParen { offset: 0 }));
        assert_eq!(parse("b+g)"), Err(EvalError::UnmatchedParen { offset: 3 }));
        assert_eq!(
            parse("b % g"),
            Err(EvalError::UnknownOperator {
                offset: 2,
                found: '%'
            })
        );
        assert_eq!(
            parse("b g"),
            Err(EvalError::TrailingInput {
                offset: 2,
                found: 'g'
            })
        );
        assert_eq!(
            parse("(b x)"),
            Err(EvalError::UnknownOperator {
                offset: 3,
                found: 'x'
            })
        );
    }

    #[test]
    fn test_literal_length_is_checked() {
        assert!(matches!(
            parse("bbbbbbbbb+b"),
            Err(EvalError::Number(crate::NumberError::TooLong { len: 9, max: 8 }))
        ));
    }

    #[test]
    fn test_nesting_limit_boundary() {
        let nested = |d: usize| format!("{}b{}", "(".repeat(d), ")".repeat(d));
        assert_eq!(value(&nested(MAX_NESTING)), "b");
        assert_eq!(
            parse(&nested(MAX_NESTING + 1)),
            Err(EvalError::NestingTooDeep {
                offset: MAX_NESTING,
                max: MAX_NESTING
            })
        );
        // sibling groups do not accumulate depth
        let siblings = vec!["(b)"; MAX_NESTING + 10].join("+");
        assert!(parse(&siblings).is_ok());
        // unary minus does not open a level
        assert_eq!(value(&format!("-{}", nested(MAX_NESTING))), "-b");
    }

    #[test]
    fn test_overflowed_dividend_is_rejected() {
        assert_eq!(
            parse("cccccccc*ba/b"),
            Err(EvalError::DividendOverflow { offset: 11, max: 8 })
        );
        // a zero divisor is still reported as such
        assert_eq!(
            parse("cccccccc*ba/a"),
            Err(EvalError::DivisionByZero { offset: 11 })
        );
        // back under the cap, division proceeds
        assert_eq!(value("(cccccccc+b-b)/cccccccc"), "b");
    }

    #[test]
    fn test_overflow_is_sticky() {
        // cccccccc + b overflows, then subtracting b brings it back in range
        let (v, overflow, _) = parse("cccccccc+b-b").unwrap();
        assert_eq!(v.to_string(), "cccccccc");
        assert!(overflow);
    }
}
