//! Exponentiation, GCD, and LCM on top of the signed operations.

use super::number::Number;
use super::result::OperationResult;
use super::Engine;
use crate::error::Result;

impl Engine {
    /// `base ^ exponent` for integer results only.
    ///
    /// - negative exponent: one if `|base|` is one, otherwise zero
    /// - zero exponent: one
    /// - zero base: zero
    ///
    /// Otherwise `|base|` is multiplied in once per decrement of the exponent.
    /// The loop stops at the first multiplication that overflows and returns
    /// that partial product with `is_overflow` set. The result is negative
    /// when the base is negative and the exponent is odd.
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
    /// let minus_two = engine.normalize("-g").unwrap();
    /// let three = engine.normalize("d").unwrap();
    /// let r = engine.power(&minus_two, &three).unwrap();
    /// assert_eq!(r.value.to_string(), "-ba"); // -8
    /// ```
    pub fn power(&self, base: &Number, exponent: &Number) -> Result<OperationResult> {
        let base = self.canonical(base.is_negative(), base.digits().to_vec());
        let exponent = self.canonical(exponent.is_negative(), exponent.digits().to_vec());

        if exponent.is_negative() {
            let value = if self.abs(&base) == self.one() {
                self.one()
            } else {
                self.zero()
            };
            return Ok(OperationResult {
                value,
                is_overflow: false,
            });
        }
        if self.is_zero_number(&exponent) {
            return Ok(self.finish(false, vec![self.ring.one()]));
        }
        if self.is_zero_number(&base) {
            return Ok(self.finish(false, vec![self.ring.zero()]));
        }

        let negative = base.is_negative() && self.is_odd(&exponent)?;
        if exponent == self.one() {
            return Ok(self.finish(negative, base.digits().to_vec()));
        }

        let magnitude = self.abs(&base);
        let mut result = self.one();
        let mut counter = exponent;

        while !self.is_zero_number(&counter) {
            let step = self.multiply(&result, &magnitude)?;
            if step.is_overflow {
                tracing::debug!(
                    partial = %step.value,
                    remaining = %counter,
                    "power overflow, stopping early"
                );
                return Ok(OperationResult {
                    value: self.canonical(negative, step.value.digits().to_vec()),
                    is_overflow: true,
                });
            }
            result = step.value;
            counter = self.decrement(&counter)?;
        }

        Ok(self.finish(negative, result.digits().to_vec()))
    }

    /// Greatest common divisor of `|a|` and `|b|` by Euclid's algorithm.
    ///
    /// `gcd(a, 0) = |a|` and `gcd(0, b) = |b|`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::EngineError::Ring`] if a symbol is outside the alphabet.
    pub fn gcd(&self, a: &Number, b: &Number) -> Result<OperationResult> {
        let mut x = self.canonical(false, a.digits().to_vec());
        let mut y = self.canonical(false, b.digits().to_vec());

        while !self.is_zero_number(&y) {
            let step = self.divide(&x, &y)?;
            x = y;
            y = step.remainder.unwrap_or_else(|| self.zero());
        }

        Ok(self.finish(false, x.digits().to_vec()))
    }

    /// Least common multiple of `|a|` and `|b|`, as `(|a| / gcd) * |b|`.
    ///
    /// Dividing first keeps the intermediate no larger than the result.
    /// Overflow from either step is reported.
    ///
    /// # Errors
    ///
    /// Returns [`crate::EngineError::Ring`] if a symbol is outside the alphabet.
    pub fn lcm(&self, a: &Number, b: &Number) -> Result<OperationResult> {
        let x = self.abs(a);
        let y = self.abs(b);

        if self.is_zero_number(&x) || self.is_zero_number(&y) {
            return Ok(self.finish(false, vec![self.ring.zero()]));
        }

        let divisor = self.gcd(&x, &y)?.value;
        let reduced = self.divide(&x, &divisor)?;
        let quotient = reduced.quotient.value().cloned().unwrap_or_else(|| self.zero());
        if reduced.is_overflow {
            return Ok(OperationResult {
                value: quotient,
                is_overflow: true,
            });
        }

        self.multiply(&quotient, &y)
    }

    /// Parity via `divide(n, two)`, where two is `next(one)`.
    fn is_odd(&self, n: &Number) -> Result<bool> {
        let two = self.canonical(false, vec![self.ring.next(self.ring.one())?]);
        let halved = self.divide(&self.abs(n), &two)?;
        Ok(halved
            .remainder
            .is_some_and(|r| !self.is_zero_number(&r)))
    }
}
