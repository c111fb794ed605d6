//! Magnitude primitives: unsigned symbol sequences, most significant first.
//!
//! Every primitive here is a composition of the ring's generators:
//!
//! ```text
//! increment          next on the last symbol, carry while it wraps to Z
//! decrement          prev on the last symbol, borrow while it was Z
//! add_positive       per position: walk_forward by b[i], then by the inbound carry
//! subtract_positive  per position: walk_backward by b[i], then by the inbound borrow
//! multiply_by_digit  add_positive repeated while a counter steps prev down to Z
//! multiply_positive  multiply_by_digit per symbol of b, shifted, accumulated
//! ```
//!
//! Carry and borrow accumulators are themselves magnitudes advanced with
//! `increment`, so no native integer ever holds a digit value.

use std::cmp::Ordering;

use super::number::Number;
use super::Engine;
use crate::core::traits::SuccessorCycle;
use crate::error::{EngineError, Result};

impl Engine {
    /// Compares `|a|` and `|b|`.
    ///
    /// A longer canonical magnitude is larger; equal lengths are compared
    /// symbol by symbol in cycle order.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Ring`] if a symbol is outside the alphabet.
    pub fn compare_abs(&self, a: &Number, b: &Number) -> Result<Ordering> {
        self.compare_digits(a.digits(), b.digits())
    }

    pub(crate) fn compare_digits(&self, a: &[char], b: &[char]) -> Result<Ordering> {
        let a = self.trim_leading_zeros(a.to_vec());
        let b = self.trim_leading_zeros(b.to_vec());

        if a.len() != b.len() {
            return Ok(a.len().cmp(&b.len()));
        }
        for (&x, &y) in a.iter().zip(&b) {
            if x != y {
                return Ok(self.ring.compare(x, y)?);
            }
        }
        Ok(Ordering::Equal)
    }

    /// `m + 1` on a magnitude.
    pub(crate) fn increment_digits(&self, digits: &[char]) -> Result<Vec<char>> {
        let mut result = digits.to_vec();
        for slot in result.iter_mut().rev() {
            *slot = self.ring.next(*slot)?;
            if !self.ring.is_zero(*slot) {
                return Ok(result);
            }
        }
        result.insert(0, self.ring.one());
        Ok(result)
    }

    /// `m - 1` on a nonzero magnitude, trimmed.
    pub(crate) fn decrement_digits(&self, digits: &[char]) -> Result<Vec<char>> {
        let mut result = digits.to_vec();
        for slot in result.iter_mut().rev() {
            let was_zero = self.ring.is_zero(*slot);
            *slot = self.ring.prev(*slot)?;
            if !was_zero {
                break;
            }
        }
        Ok(self.trim_leading_zeros(result))
    }

    /// `n + 1`.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Ring`] if a symbol is outside the alphabet.
    ///
    /// # Example
    ///
    /// ```
    /// use z8::Engine;
    ///
    /// let engine = Engine::standard();
    /// let seven = engine.normalize("c").unwrap();
    /// assert_eq!(engine.increment(&seven).unwrap().to_string(), "ba");
    ///
    /// let minus_one = engine.normalize("-b").unwrap();
    /// assert_eq!(engine.increment(&minus_one).unwrap().to_string(), "a");
    /// ```
    pub fn increment(&self, n: &Number) -> Result<Number> {
        if n.is_negative() {
            let digits = self.decrement_digits(n.digits())?;
            return Ok(self.canonical(true, digits));
        }
        let digits = self.increment_digits(n.digits())?;
        Ok(self.canonical(false, digits))
    }

    /// `n - 1`; decrementing zero gives negative one.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Ring`] if a symbol is outside the alphabet.
    pub fn decrement(&self, n: &Number) -> Result<Number> {
        if self.is_zero_number(n) {
            return Ok(self.negate(&self.one()));
        }
        if n.is_negative() {
            let digits = self.increment_digits(n.digits())?;
            return Ok(self.canonical(true, digits));
        }
        let digits = self.decrement_digits(n.digits())?;
        Ok(self.canonical(false, digits))
    }

    /// `|a| + |b|` on raw magnitudes.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Ring`] if a symbol is outside the alphabet.
    pub fn add_positive(&self, a: &[char], b: &[char]) -> Result<Vec<char>> {
        let (a, b) = self.aligned(a, b);
        let zero = self.ring.zero();

        let mut result = vec![zero; a.len()];
        let mut carry = vec![zero];

        for i in (0..a.len()).rev() {
            let inbound = self.take_low_digit(&mut carry);

            let first = self.ring.walk_forward(a[i], b[i])?;
            if first.crossed_zero {
                carry = self.increment_digits(&carry)?;
            }
            let second = self.ring.walk_forward(first.symbol, inbound)?;
            if second.crossed_zero {
                carry = self.increment_digits(&carry)?;
            }

            result[i] = second.symbol;
        }

        if !carry.iter().all(|&c| self.ring.is_zero(c)) {
            carry.extend(result);
            result = carry;
        }

        Ok(self.trim_leading_zeros(result))
    }

    /// `|a| - |b|` on raw magnitudes.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::MagnitudePrecondition`] if `|a| < |b|`, or
    /// [`EngineError::Ring`] if a symbol is outside the alphabet.
    pub fn subtract_positive(&self, a: &[char], b: &[char]) -> Result<Vec<char>> {
        if self.compare_digits(a, b)? == Ordering::Less {
            return Err(EngineError::MagnitudePrecondition);
        }

        let (a, b) = self.aligned(a, b);
        let zero = self.ring.zero();

        let mut result = vec![zero; a.len()];
        let mut borrow = vec![zero];

        for i in (0..a.len()).rev() {
            let inbound = self.take_low_digit(&mut borrow);

            let first = self.ring.walk_backward(a[i], b[i])?;
            if first.crossed_zero {
                borrow = self.increment_digits(&borrow)?;
            }
            let second = self.ring.walk_backward(first.symbol, inbound)?;
            if second.crossed_zero {
                borrow = self.increment_digits(&borrow)?;
            }

            result[i] = second.symbol;
        }

        Ok(self.trim_leading_zeros(result))
    }

    /// `|m| * d` for a single symbol `d`, by repeated addition.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Ring`] if a symbol is outside the alphabet.
    pub fn multiply_by_digit(&self, m: &[char], digit: char) -> Result<Vec<char>> {
        if self.ring.is_zero(digit) {
            return Ok(vec![self.ring.zero()]);
        }
        if self.ring.is_one(digit) {
            return Ok(self.trim_leading_zeros(m.to_vec()));
        }

        let mut result = vec![self.ring.zero()];
        let mut counter = digit;
        while !self.ring.is_zero(counter) {
            result = self.add_positive(&result, m)?;
            counter = self.ring.prev(counter)?;
        }
        Ok(result)
    }

    /// `|a| * |b|` by long multiplication.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Ring`] if a symbol is outside the alphabet.
    pub fn multiply_positive(&self, a: &[char], b: &[char]) -> Result<Vec<char>> {
        let zero = self.ring.zero();
        let a = self.trim_leading_zeros(a.to_vec());
        let b = self.trim_leading_zeros(b.to_vec());

        let mut result = vec![zero];
        let mut shift: Vec<char> = Vec::new();

        for &digit in b.iter().rev() {
            if !self.ring.is_zero(digit) {
                let mut partial = self.multiply_by_digit(&a, digit)?;
                partial.extend_from_slice(&shift);
                result = self.add_positive(&result, &partial)?;
            }
            shift.push(zero);
        }

        Ok(self.trim_leading_zeros(result))
    }

    /// Pads the shorter magnitude with leading zeros.
    fn aligned(&self, a: &[char], b: &[char]) -> (Vec<char>, Vec<char>) {
        let width = a.len().max(b.len());
        let pad = |digits: &[char]| {
            let mut padded = vec![self.ring.zero(); width - digits.len()];
            padded.extend_from_slice(digits);
            padded
        };
        (pad(a), pad(b))
    }

    /// Removes and returns the least significant symbol of an accumulator.
    fn take_low_digit(&self, accumulator: &mut Vec<char>) -> char {
        let low = accumulator.pop().unwrap_or(self.ring.zero());
        if accumulator.is_empty() {
            accumulator.push(self.ring.zero());
        }
        low
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn digits(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    fn text(d: &[char]) -> String {
        d.iter().collect()
    }

    #[test]
    fn test_increment_carries() {
        let e = Engine::standard();
        // 7 + 1 = 10
        assert_eq!(text(&e.increment_digits(&digits("c")).unwrap()), "ba");
        // 77 + 1 = 100
        assert_eq!(text(&e.increment_digits(&digits("cc")).unwrap()), "baa");
        // 12 + 1 = 13
        assert_eq!(text(&e.increment_digits(&digits("bg")).unwrap()), "bd");
    }

    #[test]
    fn test_decrement_borrows_and_trims() {
        let e = Engine::standard();
        // 10 - 1 = 7
        assert_eq!(text(&e.decrement_digits(&digits("ba")).unwrap()), "c");
        // 100 - 1 = 77
        assert_eq!(text(&e.decrement_digits(&digits("baa")).unwrap()), "cc");
        // 1 - 1 = 0
        assert_eq!(text(&e.decrement_digits(&digits("b")).unwrap()), "a");
    }

    #[test]
    fn test_decrement_zero_is_negative_one() {
        let e = Engine::standard();
        assert_eq!(e.decrement(&e.zero()).unwrap().to_string(), "-b");
    }

    #[test]
    fn test_add_positive_with_carry() {
        let e = Engine::standard();
        // 1 + 7 = 10
        assert_eq!(text(&e.add_positive(&digits("b"), &digits("c")).unwrap()), "ba");
        // 77 + 1 = 100
        assert_eq!(text(&e.add_positive(&digits("cc"), &digits("b")).unwrap()), "baa");
        // 77 + 77 = 176
        assert_eq!(text(&e.add_positive(&digits("cc"), &digits("cc")).unwrap()), "bcf");
    }

    #[test]
    fn test_subtract_positive_with_borrow() {
        let e = Engine::standard();
        // 10 - 1 = 7
        assert_eq!(text(&e.subtract_positive(&digits("ba"), &digits("b")).unwrap()), "c");
        // 100 - 1 = 77
        assert_eq!(text(&e.subtract_positive(&digits("baa"), &digits("b")).unwrap()), "cc");
        // 42 - 42 = 0
        assert_eq!(text(&e.subtract_positive(&digits("hg"), &digits("hg")).unwrap()), "a");
    }

    #[test]
    fn test_subtract_positive_precondition() {
        let e = Engine::standard();
        assert_eq!(
            e.subtract_positive(&digits("b"), &digits("g")),
            Err(EngineError::MagnitudePrecondition)
        );
    }

    #[test]
    fn test_multiply() {
        let e = Engine::standard();
        // 7 * 7 = 61
        assert_eq!(text(&e.multiply_by_digit(&digits("c"), 'c').unwrap()), "fb");
        // 12 * 12 = 144 (octal)
        assert_eq!(text(&e.multiply_positive(&digits("bg"), &digits("bg")).unwrap()), "bhh");
        // anything * 0 = 0
        assert_eq!(text(&e.multiply_positive(&digits("hg"), &digits("a")).unwrap()), "a");
    }

    #[test]
    fn test_compare_abs_ignores_sign_and_padding() {
        let e = Engine::standard();
        let a = e.normalize("-g").unwrap();
        let b = e.normalize("c").unwrap();
        assert_eq!(e.compare_abs(&a, &b).unwrap(), Ordering::Less);
        assert_eq!(e.compare_digits(&digits("aab"), &digits("b")).unwrap(), Ordering::Equal);
        assert_eq!(e.compare_digits(&digits("ba"), &digits("c")).unwrap(), Ordering::Greater);
    }
}
