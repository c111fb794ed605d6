//! The arithmetic engine.
//!
//! All arithmetic is derived from the ring's generators. The layers, leaves
//! first:
//!
//! | Layer | Operations | Built from |
//! |-------|------------|------------|
//! | magnitude | `increment`, `decrement`, `add_positive`, `subtract_positive`, `multiply_by_digit`, `multiply_positive` | `next`, `prev`, walks |
//! | signed | `add`, `subtract`, `multiply`, `divide` | magnitude layer |
//! | number theory | `power`, `gcd`, `lcm` | signed layer |
//!
//! # Overflow
//!
//! Results whose magnitude is longer than the digit cap are returned in full
//! with `is_overflow` set; the engine never truncates.
//!
//! # Example
//!
//! ```
//! use z8::Engine;
//!
//! let engine = Engine::standard();
//! let one = engine.normalize("b").unwrap();
//! let two = engine.add(&one, &one).unwrap();
//! assert_eq!(two.value.to_string(), "g");
//!
//! let seven = engine.normalize("c").unwrap();
//! let q = engine.divide(&seven, &two.value).unwrap();
//! assert_eq!(q.quotient.to_string(), "d"); // 3
//! assert_eq!(q.remainder.unwrap().to_string(), "b"); // 1
//! ```

mod magnitude;
mod number;
mod result;
mod signed;
mod theory;

pub use number::Number;
pub use result::{DivisionResult, OperationResult, Quotient};

use crate::core::constants::{MAX_DIGITS, SIGN};
use crate::core::ring::Ring;
use crate::error::NumberError;

/// Symbol-sequence arithmetic over a [`Ring`] with a fixed digit cap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Engine {
    ring: Ring,
    max_digits: usize,
}

impl Engine {
    /// Creates an engine over `ring` that flags results longer than
    /// `max_digits` symbols.
    #[must_use]
    pub fn new(ring: Ring, max_digits: usize) -> Self {
        Self { ring, max_digits }
    }

    /// The standard ring with the default digit cap.
    #[must_use]
    pub fn standard() -> Self {
        Self::new(Ring::standard(), MAX_DIGITS)
    }

    /// The underlying ring.
    #[inline]
    #[must_use]
    pub fn ring(&self) -> &Ring {
        &self.ring
    }

    /// The digit cap.
    #[inline]
    #[must_use]
    pub fn max_digits(&self) -> usize {
        self.max_digits
    }

    /// The ordered alphabet.
    #[inline]
    #[must_use]
    pub fn alphabet(&self) -> &[char] {
        self.ring.alphabet()
    }

    /// The zero symbol.
    #[inline]
    #[must_use]
    pub fn zero_symbol(&self) -> char {
        self.ring.zero()
    }

    /// The one symbol.
    #[inline]
    #[must_use]
    pub fn one_symbol(&self) -> char {
        self.ring.one()
    }

    /// The positional base.
    #[inline]
    #[must_use]
    pub fn base(&self) -> usize {
        self.ring.base()
    }

    /// Returns `true` if `c` is an alphabet symbol.
    #[inline]
    #[must_use]
    pub fn is_valid_char(&self, c: char) -> bool {
        self.ring.is_valid_char(c)
    }

    /// Returns `true` if `text` is an optional sign followed by one or more
    /// alphabet symbols.
    #[must_use]
    pub fn is_valid_number(&self, text: &str) -> bool {
        self.validate(text).is_ok()
    }

    /// Validates `text` and returns it in canonical form.
    ///
    /// Leading zero symbols are stripped and a negative zero loses its sign.
    /// The digit cap is not enforced here; see [`Engine::parse_input`].
    ///
    /// # Errors
    ///
    /// Returns [`NumberError`] for empty input, a bare sign, or a character
    /// outside the alphabet.
    ///
    /// # Example
    ///
    /// ```
    /// use z8::{Engine, NumberError};
    ///
    /// let engine = Engine::standard();
    /// assert_eq!(engine.normalize("-aaa").unwrap().to_string(), "a");
    /// assert_eq!(engine.normalize("-"), Err(NumberError::BareSign));
    /// ```
    pub fn normalize(&self, text: &str) -> Result<Number, NumberError> {
        let (negative, digits) = self.validate(text)?;
        Ok(self.canonical(negative, digits))
    }

    /// Like [`Engine::normalize`], but also rejects magnitudes longer than
    /// the digit cap.
    ///
    /// # Errors
    ///
    /// Returns [`NumberError::TooLong`] in addition to the errors of
    /// [`Engine::normalize`].
    pub fn parse_input(&self, text: &str) -> Result<Number, NumberError> {
        let number = self.normalize(text)?;
        if number.len() > self.max_digits {
            return Err(NumberError::TooLong {
                len: number.len(),
                max: self.max_digits,
            });
        }
        Ok(number)
    }

    /// The zero number.
    #[must_use]
    pub fn zero(&self) -> Number {
        Number::from_parts(false, vec![self.ring.zero()])
    }

    /// The one number.
    #[must_use]
    pub fn one(&self) -> Number {
        Number::from_parts(false, vec![self.ring.one()])
    }

    /// Largest representable value: the digit cap filled with `prev(zero)`.
    #[must_use]
    pub fn max_positive(&self) -> Number {
        Number::from_parts(false, vec![self.ring.max_digit(); self.max_digits])
    }

    /// Smallest representable value, `-max_positive`.
    #[must_use]
    pub fn max_negative(&self) -> Number {
        self.negate(&self.max_positive())
    }

    /// Returns `true` if `n` denotes zero.
    #[must_use]
    pub fn is_zero_number(&self, n: &Number) -> bool {
        n.digits().iter().all(|&c| self.ring.is_zero(c))
    }

    /// `|n|`.
    #[must_use]
    pub fn abs(&self, n: &Number) -> Number {
        Number::from_parts(false, n.digits().to_vec())
    }

    /// `-n`; zero stays unsigned.
    #[must_use]
    pub fn negate(&self, n: &Number) -> Number {
        if self.is_zero_number(n) {
            return self.zero();
        }
        Number::from_parts(!n.is_negative(), n.digits().to_vec())
    }

    /// Returns `true` if `n` carries the sign marker.
    #[inline]
    #[must_use]
    pub fn is_negative(&self, n: &Number) -> bool {
        n.is_negative()
    }

    /// Canonical number from a sign and a raw magnitude.
    pub(crate) fn canonical(&self, negative: bool, digits: Vec<char>) -> Number {
        let digits = self.trim_leading_zeros(digits);
        let is_zero = digits.len() == 1 && self.ring.is_zero(digits[0]);
        Number::from_parts(negative && !is_zero, digits)
    }

    /// Strips leading zero symbols, keeping at least one symbol.
    pub(crate) fn trim_leading_zeros(&self, mut digits: Vec<char>) -> Vec<char> {
        let leading = digits
            .iter()
            .take_while(|&&c| self.ring.is_zero(c))
            .count();
        if leading == digits.len() {
            return vec![self.ring.zero()];
        }
        digits.drain(..leading);
        digits
    }

    /// Whether a magnitude exceeds the digit cap.
    #[inline]
    pub(crate) fn overflows(&self, digits: &[char]) -> bool {
        digits.len() > self.max_digits
    }

    fn validate(&self, text: &str) -> Result<(bool, Vec<char>), NumberError> {
        if text.is_empty() {
            return Err(NumberError::Empty);
        }
        let (negative, body, offset) = match text.strip_prefix(SIGN) {
            Some(rest) => (true, rest, 1),
            None => (false, text, 0),
        };
        if body.is_empty() {
            return Err(NumberError::BareSign);
        }
        let mut digits = Vec::with_capacity(body.len());
        for (i, c) in body.chars().enumerate() {
            if !self.ring.is_valid_char(c) {
                return Err(NumberError::InvalidSymbol {
                    symbol: c,
                    position: i + offset,
                });
            }
            digits.push(c);
        }
        Ok((negative, digits))
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_strips_leading_zeros() {
        let e = Engine::standard();
        assert_eq!(e.normalize("aab").unwrap().to_string(), "b");
        assert_eq!(e.normalize("-aahg").unwrap().to_string(), "-hg");
        assert_eq!(e.normalize("aaaa").unwrap().to_string(), "a");
    }

    #[test]
    fn test_negative_zero_is_unsigned() {
        let e = Engine::standard();
        let z = e.normalize("-a").unwrap();
        assert!(!z.is_negative());
        assert!(e.is_zero_number(&z));
        assert_eq!(e.negate(&z), e.zero());
    }

    #[test]
    fn test_validation_errors() {
        let e = Engine::standard();
        assert_eq!(e.normalize(""), Err(NumberError::Empty));
        assert_eq!(e.normalize("-"), Err(NumberError::BareSign));
        assert_eq!(
            e.normalize("-abz"),
            Err(NumberError::InvalidSymbol {
                symbol: 'z',
                position: 3
            })
        );
        assert!(!e.is_valid_number("b+b"));
        assert!(e.is_valid_number("-hhh"));
    }

    #[test]
    fn test_parse_input_enforces_digit_cap() {
        let e = Engine::standard();
        assert!(e.parse_input("bbbbbbbb").is_ok());
        assert_eq!(
            e.parse_input("bbbbbbbbb"),
            Err(NumberError::TooLong { len: 9, max: 8 })
        );
        // leading zeros do not count
        assert!(e.parse_input("aaaabbbbbbbb").is_ok());
    }

    #[test]
    fn test_abs_and_negate() {
        let e = Engine::standard();
        let n = e.normalize("-hg").unwrap();
        assert_eq!(e.abs(&n).to_string(), "hg");
        assert_eq!(e.negate(&n).to_string(), "hg");
        assert_eq!(e.negate(&e.abs(&n)).to_string(), "-hg");
        assert!(e.is_negative(&n));
    }

    #[test]
    fn test_extremes() {
        let e = Engine::standard();
        assert_eq!(e.max_positive().to_string(), "cccccccc");
        assert_eq!(e.max_negative().to_string(), "-cccccccc");
    }

    #[test]
    fn test_accessors() {
        let e = Engine::standard();
        assert_eq!(e.alphabet(), &['a', 'b', 'c', 'd', 'e', 'f', 'g', 'h']);
        assert_eq!(e.zero_symbol(), 'a');
        assert_eq!(e.one_symbol(), 'b');
        assert_eq!(e.base(), 8);
        assert_eq!(e.max_digits(), 8);
        assert!(e.is_valid_char('h'));
        assert!(!e.is_valid_char('i'));
    }
}
