//! The generator seam: everything the engine needs from a ring.
//!
//! A type implementing [`SuccessorCycle`] supplies the two generators
//! (`next`, `prev`) and the zero symbol. The walks and the symbol order are
//! derived from those alone, so any alternative cycle representation gets
//! them for free.
//!
//! # Derived Operations
//!
//! ```text
//! walk_forward(s, k)   = next^k(s)
//! walk_backward(s, k)  = prev^k(s)
//! compare(a, b)        = which of a, b is reached first stepping next from Z
//! ```

use std::cmp::Ordering;

use super::constants::BASE;
use crate::error::RingError;

/// Outcome of a generator walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Walk {
    /// Symbol the walk landed on.
    pub symbol: char,
    /// Whether the walk wrapped through zero (a carry forward, a borrow backward).
    pub crossed_zero: bool,
}

/// A single cycle over an alphabet, with a distinguished zero.
///
/// # Example
///
/// ```
/// use z8::{Ring, SuccessorCycle};
///
/// let ring = Ring::standard();
///
/// // 7 + 1 wraps to 0 with a carry
/// let w = ring.walk_forward('c', 'b').unwrap();
/// assert_eq!(w.symbol, 'a');
/// assert!(w.crossed_zero);
///
/// // 0 - 1 wraps to 7 with a borrow
/// let w = ring.walk_backward('a', 'b').unwrap();
/// assert_eq!(w.symbol, 'c');
/// assert!(w.crossed_zero);
/// ```
pub trait SuccessorCycle {
    /// Successor of `c`.
    ///
    /// # Errors
    ///
    /// Returns [`RingError::InvalidSymbol`] if `c` is not on the cycle.
    fn next(&self, c: char) -> Result<char, RingError>;

    /// Predecessor of `c`.
    ///
    /// # Errors
    ///
    /// Returns [`RingError::InvalidSymbol`] if `c` is not on the cycle.
    fn prev(&self, c: char) -> Result<char, RingError>;

    /// The additive identity.
    fn zero(&self) -> char;

    /// Returns `true` if `c` is on the cycle.
    fn contains(&self, c: char) -> bool;

    /// Walks `from` forward once per step of `steps` above zero.
    ///
    /// `crossed_zero` is set when a step lands on zero. Since `steps` is a
    /// single symbol the walk is shorter than the cycle and crosses zero at
    /// most once.
    ///
    /// # Errors
    ///
    /// Returns [`RingError::InvalidSymbol`] if either symbol is not on the
    /// cycle.
    fn walk_forward(&self, from: char, steps: char) -> Result<Walk, RingError> {
        let mut symbol = checked(self, from)?;
        let mut counter = checked(self, steps)?;
        let mut crossed_zero = false;

        while counter != self.zero() {
            symbol = self.next(symbol)?;
            if symbol == self.zero() {
                crossed_zero = true;
            }
            counter = self.prev(counter)?;
        }

        Ok(Walk {
            symbol,
            crossed_zero,
        })
    }

    /// Walks `from` backward once per step of `steps` above zero.
    ///
    /// `crossed_zero` is set when a step leaves zero downward.
    ///
    /// # Errors
    ///
    /// Returns [`RingError::InvalidSymbol`] if either symbol is not on the
    /// cycle.
    fn walk_backward(&self, from: char, steps: char) -> Result<Walk, RingError> {
        let mut symbol = checked(self, from)?;
        let mut counter = checked(self, steps)?;
        let mut crossed_zero = false;

        while counter != self.zero() {
            if symbol == self.zero() {
                crossed_zero = true;
            }
            symbol = self.prev(symbol)?;
            counter = self.prev(counter)?;
        }

        Ok(Walk {
            symbol,
            crossed_zero,
        })
    }

    /// Orders two symbols by their distance from zero along the cycle.
    ///
    /// # Errors
    ///
    /// Returns [`RingError::InvalidSymbol`] if either symbol is not on the
    /// cycle.
    fn compare(&self, a: char, b: char) -> Result<Ordering, RingError> {
        checked(self, a)?;
        checked(self, b)?;

        let mut cursor = self.zero();
        for _ in 0..BASE {
            match (cursor == a, cursor == b) {
                (true, true) => return Ok(Ordering::Equal),
                (true, false) => return Ok(Ordering::Less),
                (false, true) => return Ok(Ordering::Greater),
                (false, false) => cursor = self.next(cursor)?,
            }
        }

        // Only reachable when the cycle through zero is shorter than the alphabet.
        Err(RingError::NotSingleCycle(BASE))
    }
}

#[inline]
fn checked<C: SuccessorCycle + ?Sized>(cycle: &C, c: char) -> Result<char, RingError> {
    if cycle.contains(c) {
        Ok(c)
    } else {
        Err(RingError::InvalidSymbol(c))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Natural-order digits `'0'..='7'`, stepped with native arithmetic.
    ///
    /// Serves as a reference: walks derived from the generators must agree
    /// with plain modular addition.
    struct Octal;

    impl SuccessorCycle for Octal {
        fn next(&self, c: char) -> Result<char, RingError> {
            match c.to_digit(8) {
                Some(d) => Ok(char::from_digit((d + 1) % 8, 8).unwrap_or('0')),
                None => Err(RingError::InvalidSymbol(c)),
            }
        }

        fn prev(&self, c: char) -> Result<char, RingError> {
            match c.to_digit(8) {
                Some(d) => Ok(char::from_digit((d + 7) % 8, 8).unwrap_or('0')),
                None => Err(RingError::InvalidSymbol(c)),
            }
        }

        fn zero(&self) -> char {
            '0'
        }

        fn contains(&self, c: char) -> bool {
            c.to_digit(8).is_some()
        }
    }

    #[test]
    fn test_walks_match_modular_arithmetic() {
        let octal = Octal;
        for a in 0..8u32 {
            for b in 0..8u32 {
                let ca = char::from_digit(a, 8).unwrap();
                let cb = char::from_digit(b, 8).unwrap();

                let fwd = octal.walk_forward(ca, cb).unwrap();
                assert_eq!(fwd.symbol.to_digit(8).unwrap(), (a + b) % 8);
                assert_eq!(fwd.crossed_zero, a + b >= 8, "carry for {a}+{b}");

                let back = octal.walk_backward(ca, cb).unwrap();
                assert_eq!(back.symbol.to_digit(8).unwrap(), (a + 8 - b) % 8);
                assert_eq!(back.crossed_zero, a < b, "borrow for {a}-{b}");
            }
        }
    }

    #[test]
    fn test_compare_matches_numeric_order() {
        let octal = Octal;
        for a in 0..8u32 {
            for b in 0..8u32 {
                let ca = char::from_digit(a, 8).unwrap();
                let cb = char::from_digit(b, 8).unwrap();
                assert_eq!(octal.compare(ca, cb).unwrap(), a.cmp(&b));
            }
        }
    }

    #[test]
    fn test_rejects_symbols_off_the_cycle() {
        let octal = Octal;
        assert_eq!(octal.walk_forward('8', '1'), Err(RingError::InvalidSymbol('8')));
        assert_eq!(octal.walk_backward('1', 'x'), Err(RingError::InvalidSymbol('x')));
        assert_eq!(octal.compare('1', '9'), Err(RingError::InvalidSymbol('9')));
    }
}
