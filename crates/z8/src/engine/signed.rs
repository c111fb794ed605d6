//! Signed entry points: sign dispatch over the magnitude primitives.

use std::cmp::Ordering;

use super::number::Number;
use super::result::{DivisionResult, OperationResult, Quotient};
use super::Engine;
use crate::error::Result;

impl Engine {
    /// `a + b`.
    ///
    /// Same signs add magnitudes; opposite signs subtract the smaller
    /// magnitude from the larger and take the larger operand's sign.
    ///
    /// # Errors
    ///
    /// Returns [`crate::EngineError::Ring`] if a symbol is outside the alphabet.
    ///
    /// # Example
    ///
    /// ```
    /// use z8::Engine;
    ///
    /// let engine = Engine::standard();
    /// let b = engine.normalize("b").unwrap();
    /// assert_eq!(engine.add(&b, &b).unwrap().value.to_string(), "g");
    ///
    /// let minus_seven = engine.normalize("-c").unwrap();
    /// let r = engine.add(&b, &minus_seven).unwrap();
    /// assert_eq!(r.value.to_string(), "-f"); // 1 - 7 = -6
    /// ```
    pub fn add(&self, a: &Number, b: &Number) -> Result<OperationResult> {
        let (neg_a, abs_a) = self.canonical(a.is_negative(), a.digits().to_vec()).into_parts();
        let (neg_b, abs_b) = self.canonical(b.is_negative(), b.digits().to_vec()).into_parts();

        let (negative, digits) = if neg_a == neg_b {
            (neg_a, self.add_positive(&abs_a, &abs_b)?)
        } else {
            match self.compare_digits(&abs_a, &abs_b)? {
                Ordering::Less => (neg_b, self.subtract_positive(&abs_b, &abs_a)?),
                Ordering::Equal | Ordering::Greater => {
                    (neg_a, self.subtract_positive(&abs_a, &abs_b)?)
                }
            }
        };

        Ok(self.finish(negative, digits))
    }

    /// `a - b`, computed as `a + (-b)`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::EngineError::Ring`] if a symbol is outside the alphabet.
    pub fn subtract(&self, a: &Number, b: &Number) -> Result<OperationResult> {
        self.add(a, &self.negate(b))
    }

    /// `a * b`.
    ///
    /// The sign is the XOR of the operand signs; a zero operand gives
    /// unsigned zero.
    ///
    /// # Errors
    ///
    /// Returns [`crate::EngineError::Ring`] if a symbol is outside the alphabet.
    pub fn multiply(&self, a: &Number, b: &Number) -> Result<OperationResult> {
        if self.is_zero_number(a) || self.is_zero_number(b) {
            return Ok(OperationResult {
                value: self.zero(),
                is_overflow: false,
            });
        }

        let digits = self.multiply_positive(a.digits(), b.digits())?;
        Ok(self.finish(a.is_negative() != b.is_negative(), digits))
    }

    /// `a / b` with a non-negative remainder.
    ///
    /// The quotient magnitude is found by repeatedly subtracting `|b|`. When
    /// the dividend is negative and the remainder nonzero, the quotient
    /// magnitude is incremented and the remainder replaced by
    /// `|b| - remainder`, so that `quotient * b + remainder == a` always holds.
    /// With a positive divisor this is floor division.
    ///
    /// Division by zero does not fail: nonzero / zero yields the empty-set
    /// quotient and no remainder, zero / zero yields the full representable
    /// range and a zero remainder.
    ///
    /// # Errors
    ///
    /// Returns [`crate::EngineError::Ring`] if a symbol is outside the alphabet.
    ///
    /// # Example
    ///
    /// ```
    /// use z8::Engine;
    ///
    /// let engine = Engine::standard();
    /// let minus_seven = engine.normalize("-c").unwrap();
    /// let two = engine.normalize("g").unwrap();
    ///
    /// // -7 / 2 = -4 remainder 1
    /// let r = engine.divide(&minus_seven, &two).unwrap();
    /// assert_eq!(r.quotient.to_string(), "-h");
    /// assert_eq!(r.remainder.unwrap().to_string(), "b");
    ///
    /// let zero = engine.zero();
    /// assert!(engine.divide(&two, &zero).unwrap().is_div_by_zero());
    /// assert!(engine.divide(&zero, &zero).unwrap().is_zero_by_zero());
    /// ```
    pub fn divide(&self, a: &Number, b: &Number) -> Result<DivisionResult> {
        let a = self.canonical(a.is_negative(), a.digits().to_vec());
        let b = self.canonical(b.is_negative(), b.digits().to_vec());

        if self.is_zero_number(&b) {
            if self.is_zero_number(&a) {
                tracing::debug!(dividend = %a, "zero divided by zero");
                return Ok(DivisionResult {
                    quotient: Quotient::Range {
                        low: self.max_negative(),
                        high: self.max_positive(),
                    },
                    remainder: Some(self.zero()),
                    is_overflow: false,
                });
            }
            tracing::debug!(dividend = %a, "division by zero");
            return Ok(DivisionResult {
                quotient: Quotient::EmptySet,
                remainder: None,
                is_overflow: false,
            });
        }

        if self.is_zero_number(&a) {
            return Ok(DivisionResult {
                quotient: Quotient::Value { value: self.zero() },
                remainder: Some(self.zero()),
                is_overflow: false,
            });
        }

        let divisor = b.digits();
        let mut quotient = vec![self.ring.zero()];
        let mut remainder = a.digits().to_vec();

        while self.compare_digits(&remainder, divisor)? != Ordering::Less {
            remainder = self.subtract_positive(&remainder, divisor)?;
            quotient = self.increment_digits(&quotient)?;
        }

        let has_remainder = !remainder.iter().all(|&c| self.ring.is_zero(c));
        if a.is_negative() && has_remainder {
            quotient = self.increment_digits(&quotient)?;
            remainder = self.subtract_positive(divisor, &remainder)?;
        }

        let quotient = self.canonical(a.is_negative() != b.is_negative(), quotient);
        let is_overflow = self.overflows(quotient.digits());
        if is_overflow {
            tracing::debug!(%quotient, max_digits = self.max_digits, "quotient overflow");
        }

        Ok(DivisionResult {
            quotient: Quotient::Value { value: quotient },
            remainder: Some(self.canonical(false, remainder)),
            is_overflow,
        })
    }

    /// Wraps a raw result: canonical form plus the overflow check.
    pub(crate) fn finish(&self, negative: bool, digits: Vec<char>) -> OperationResult {
        let value = self.canonical(negative, digits);
        let is_overflow = self.overflows(value.digits());
        if is_overflow {
            tracing::debug!(%value, max_digits = self.max_digits, "result overflow");
        }
        OperationResult { value, is_overflow }
    }
}
