//! The symbol ring: an eight-symbol alphabet with a successor cycle.
//!
//! The ring fixes which symbol is zero, which is one, and the "+1 rule":
//! a permutation of the alphabet that forms a single cycle. Everything the
//! engine computes is derived from stepping along this cycle with
//! [`Ring::next`] and [`Ring::prev`].
//!
//! # Generator Walks
//!
//! ```text
//! walk_forward(s, k)  = next^k(s)    crossed_zero if the walk lands on or passes Z
//! walk_backward(s, k) = prev^k(s)    crossed_zero if the walk leaves Z downward
//! ```
//!
//! `k` is itself a symbol: the walk takes one step per `prev` needed to bring
//! `k` down to zero. No native integer arithmetic is involved.
//!
//! # Standard Ring
//!
//! | x   | a | b | c | d | e | f | g | h |
//! |-----|---|---|---|---|---|---|---|---|
//! | x+1 | b | g | a | h | f | c | d | e |
//!
//! which is the cycle `a → b → g → d → h → e → f → c → a`.
//!
//! # Example
//!
//! ```
//! use z8::{Ring, SuccessorCycle};
//!
//! let ring = Ring::standard();
//! assert_eq!(ring.next('b').unwrap(), 'g');
//! assert_eq!(ring.prev('a').unwrap(), 'c');
//!
//! let walk = ring.walk_forward('h', 'd').unwrap(); // 4 + 3
//! assert_eq!(walk.symbol, 'c');
//! assert!(!walk.crossed_zero);
//! ```


use std::collections::BTreeMap;

use super::constants::{is_reserved, BASE};
use super::traits::SuccessorCycle;
use crate::error::RingError;

/// Alphabet of the standard ring, in declaration order.
pub const STANDARD_ALPHABET: [char; BASE] = ['a', 'b', 'c', 'd', 'e', 'f', 'g', 'h'];

/// Successor of each [`STANDARD_ALPHABET`] symbol, in the same order.
pub const STANDARD_SUCCESSOR: [char; BASE] = ['b', 'g', 'a', 'h', 'f', 'c', 'd', 'e'];

/// Additive identity of the standard ring.
pub const STANDARD_ZERO: char = 'a';

/// Multiplicative identity of the standard ring.
pub const STANDARD_ONE: char = 'b';

/// An eight-symbol alphabet with identities and a successor cycle.
///
/// Immutable after construction; share it by reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ring {
    alphabet: [char; BASE],
    plus_one: BTreeMap<char, char>,
    minus_one: BTreeMap<char, char>,
    zero: char,
    one: char,
}

impl Ring {
    /// The standard ring over `a..=h` with zero `a` and one `b`.
    #[must_use]
    pub fn standard() -> Self {
        Self::from_table(
            STANDARD_ALPHABET,
            &STANDARD_SUCCESSOR,
            STANDARD_ZERO,
            STANDARD_ONE,
        )
    }

    /// Builds a ring from an alphabet and its successor row.
    ///
    /// `successor[i]` is `next(alphabet[i])`.
    ///
    /// # Errors
    ///
    /// Returns a [`RingError`] if the alphabet is not eight distinct,
    /// non-reserved symbols, if the successor row is not a single-cycle
    /// permutation of the alphabet, or if `one` is not `next(zero)`.
    ///
    /// # Example
    ///
    /// ```
    /// use z8::{Ring, RingError};
    ///
    /// // digits in natural order: 0 → 1 → ... → 7 → 0
    /// let ring = Ring::new(
    ///     &['0', '1', '2', '3', '4', '5', '6', '7'],
    ///     &['1', '2', '3', '4', '5', '6', '7', '0'],
    ///     '0',
    ///     '1',
    /// )
    /// .unwrap();
    /// assert_eq!(ring.next('7').unwrap(), '0');
    ///
    /// // two 4-cycles are rejected
    /// let err = Ring::new(
    ///     &['0', '1', '2', '3', '4', '5', '6', '7'],
    ///     &['1', '2', '3', '0', '5', '6', '7', '4'],
    ///     '0',
    ///     '1',
    /// )
    /// .unwrap_err();
    /// assert_eq!(err, RingError::NotSingleCycle(4));
    /// ```
    pub fn new(alphabet: &[char], successor: &[char], zero: char, one: char) -> Result<Self, RingError> {
        let alphabet: [char; BASE] = alphabet
            .try_into()
            .map_err(|_| RingError::AlphabetSize(alphabet.len()))?;

        for (i, &c) in alphabet.iter().enumerate() {
            if is_reserved(c) {
                return Err(RingError::ReservedSymbol(c));
            }
            if alphabet[..i].contains(&c) {
                return Err(RingError::DuplicateSymbol(c));
            }
        }

        if successor.len() != BASE {
            return Err(RingError::SuccessorSize(successor.len()));
        }
        let mut seen: Vec<char> = Vec::with_capacity(BASE);
        for &s in successor {
            if !alphabet.contains(&s) {
                return Err(RingError::InvalidSymbol(s));
            }
            if seen.contains(&s) {
                return Err(RingError::NotPermutation(s));
            }
            seen.push(s);
        }

        for identity in [zero, one] {
            if !alphabet.contains(&identity) {
                return Err(RingError::IdentityOutsideAlphabet(identity));
            }
        }

        let ring = Self::from_table(alphabet, successor, zero, one);

        let cycle = ring.cycle();
        if cycle.len() != BASE {
            return Err(RingError::NotSingleCycle(cycle.len()));
        }

        let successor_of_zero = ring.next(zero)?;
        if successor_of_zero != one {
            return Err(RingError::OneNotSuccessorOfZero {
                zero,
                one,
                successor: successor_of_zero,
            });
        }

        Ok(ring)
    }

    fn from_table(alphabet: [char; BASE], successor: &[char], zero: char, one: char) -> Self {
        let mut plus_one = BTreeMap::new();
        let mut minus_one = BTreeMap::new();
        for (&from, &to) in alphabet.iter().zip(successor) {
            plus_one.insert(from, to);
            minus_one.insert(to, from);
        }
        Self {
            alphabet,
            plus_one,
            minus_one,
            zero,
            one,
        }
    }

    /// Successor of `c` along the cycle (the "+1 rule").
    ///
    /// # Errors
    ///
    /// Returns [`RingError::InvalidSymbol`] if `c` is not in the alphabet.
    #[inline]
    pub fn next(&self, c: char) -> Result<char, RingError> {
        self.plus_one
            .get(&c)
            .copied()
            .ok_or(RingError::InvalidSymbol(c))
    }

    /// Predecessor of `c` along the cycle (the "-1 rule").
    ///
    /// # Errors
    ///
    /// Returns [`RingError::InvalidSymbol`] if `c` is not in the alphabet.
    #[inline]
    pub fn prev(&self, c: char) -> Result<char, RingError> {
        self.minus_one
            .get(&c)
            .copied()
            .ok_or(RingError::InvalidSymbol(c))
    }

    /// Symbols in cycle order starting at zero.
    ///
    /// For a valid ring this has [`BASE`] entries; position `k` holds the
    /// symbol that denotes the digit `k`.
    #[must_use]
    pub fn cycle(&self) -> Vec<char> {
        let mut cycle = Vec::with_capacity(BASE);
        let mut cursor = self.zero;
        loop {
            cycle.push(cursor);
            match self.plus_one.get(&cursor) {
                Some(&next) if next != self.zero && cycle.len() <= BASE => cursor = next,
                _ => break,
            }
        }
        cycle
    }

    /// `(x, x+1)` pairs in alphabet order.
    pub fn successor_table(&self) -> impl Iterator<Item = (char, char)> + '_ {
        self.alphabet
            .iter()
            .filter_map(|&c| self.plus_one.get(&c).map(|&n| (c, n)))
    }

    /// Returns `true` if `c` is the additive identity.
    #[inline]
    #[must_use]
    pub fn is_zero(&self, c: char) -> bool {
        c == self.zero
    }

    /// Returns `true` if `c` is the multiplicative identity.
    #[inline]
    #[must_use]
    pub fn is_one(&self, c: char) -> bool {
        c == self.one
    }

    /// The additive identity.
    #[inline]
    #[must_use]
    pub fn zero(&self) -> char {
        self.zero
    }

    /// The multiplicative identity.
    #[inline]
    #[must_use]
    pub fn one(&self) -> char {
        self.one
    }

    /// The largest digit, `prev(zero)`.
    #[inline]
    #[must_use]
    pub fn max_digit(&self) -> char {
        self.minus_one.get(&self.zero).copied().unwrap_or(self.zero)
    }

    /// The ordered alphabet.
    #[inline]
    #[must_use]
    pub fn alphabet(&self) -> &[char] {
        &self.alphabet
    }

    /// The positional base (always [`BASE`]).
    #[inline]
    #[must_use]
    pub fn base(&self) -> usize {
        self.alphabet.len()
    }

    /// Returns `true` if `c` belongs to the alphabet.
    #[inline]
    #[must_use]
    pub fn is_valid_char(&self, c: char) -> bool {
        self.plus_one.contains_key(&c)
    }
}

impl SuccessorCycle for Ring {
    #[inline]
    fn next(&self, c: char) -> Result<char, RingError> {
        Ring::next(self, c)
    }

    #[inline]
    fn prev(&self, c: char) -> Result<char, RingError> {
        Ring::prev(self, c)
    }

    #[inline]
    fn zero(&self) -> char {
        self.zero
    }

    #[inline]
    fn contains(&self, c: char) -> bool {
        self.is_valid_char(c)
    }
}

impl Default for Ring {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::traits::Walk;
    use std::cmp::Ordering;

    const DIGITS: [char; BASE] = ['0', '1', '2', '3', '4', '5', '6', '7'];

    #[test]
    fn test_standard_matches_validated_construction() {
        let validated =
            Ring::new(&STANDARD_ALPHABET, &STANDARD_SUCCESSOR, STANDARD_ZERO, STANDARD_ONE)
                .unwrap();
        assert_eq!(validated, Ring::standard());
    }

    #[test]
    fn test_standard_cycle() {
        let ring = Ring::standard();
        assert_eq!(ring.cycle(), vec!['a', 'b', 'g', 'd', 'h', 'e', 'f', 'c']);
    }

    #[test]
    fn test_next_prev_inverse() {
        let ring = Ring::standard();
        for &c in ring.alphabet() {
            assert_eq!(ring.prev(ring.next(c).unwrap()).unwrap(), c);
            assert_eq!(ring.next(ring.prev(c).unwrap()).unwrap(), c);
        }
    }

    #[test]
    fn test_next_eight_times_is_identity() {
        let ring = Ring::standard();
        for &start in ring.alphabet() {
            let mut c = start;
            for _ in 0..BASE {
                c = ring.next(c).unwrap();
            }
            assert_eq!(c, start);
        }
    }

    #[test]
    fn test_invalid_symbol() {
        let ring = Ring::standard();
        assert_eq!(ring.next('z'), Err(RingError::InvalidSymbol('z')));
        assert_eq!(ring.prev('-'), Err(RingError::InvalidSymbol('-')));
        assert_eq!(ring.walk_forward('a', 'q'), Err(RingError::InvalidSymbol('q')));
    }

    #[test]
    fn test_identities() {
        let ring = Ring::standard();
        assert!(ring.is_zero('a'));
        assert!(ring.is_one('b'));
        assert!(!ring.is_zero('b'));
        assert_eq!(ring.max_digit(), 'c');
        assert_eq!(ring.base(), 8);
    }

    #[test]
    fn test_walk_forward_carry() {
        let ring = Ring::standard();
        // 7 + 1 = 10
        let w = ring.walk_forward('c', 'b').unwrap();
        assert_eq!(w, Walk { symbol: 'a', crossed_zero: true });
        // 5 + 5 = 12 → digit 2, carry
        let w = ring.walk_forward('e', 'e').unwrap();
        assert_eq!(w, Walk { symbol: 'g', crossed_zero: true });
        // x + 0 = x
        let w = ring.walk_forward('h', 'a').unwrap();
        assert_eq!(w, Walk { symbol: 'h', crossed_zero: false });
    }

    #[test]
    fn test_walk_backward_borrow() {
        let ring = Ring::standard();
        // 0 - 1 = 7 with borrow
        let w = ring.walk_backward('a', 'b').unwrap();
        assert_eq!(w, Walk { symbol: 'c', crossed_zero: true });
        // 4 - 4 = 0 without borrow
        let w = ring.walk_backward('h', 'h').unwrap();
        assert_eq!(w, Walk { symbol: 'a', crossed_zero: false });
        // 2 - 5 = 5 with borrow (2 + 8 - 5)
        let w = ring.walk_backward('g', 'e').unwrap();
        assert_eq!(w, Walk { symbol: 'e', crossed_zero: true });
    }

    #[test]
    fn test_compare_uses_cycle_order() {
        let ring = Ring::standard();
        // 'g' is 2, 'c' is 7: alphabet order would say c < g
        assert_eq!(ring.compare('g', 'c').unwrap(), Ordering::Less);
        assert_eq!(ring.compare('c', 'g').unwrap(), Ordering::Greater);
        assert_eq!(ring.compare('h', 'h').unwrap(), Ordering::Equal);
        assert_eq!(ring.compare('a', 'b').unwrap(), Ordering::Less);
    }

    #[test]
    fn test_successor_table_order() {
        let ring = Ring::standard();
        let table: Vec<_> = ring.successor_table().collect();
        assert_eq!(table.len(), BASE);
        assert_eq!(table[0], ('a', 'b'));
        assert_eq!(table[2], ('c', 'a'));
        assert_eq!(table[7], ('h', 'e'));
    }

    #[test]
    fn test_rejects_wrong_alphabet_size() {
        let err = Ring::new(&['a', 'b'], &['b', 'a'], 'a', 'b').unwrap_err();
        assert_eq!(err, RingError::AlphabetSize(2));
    }

    #[test]
    fn test_rejects_duplicates_and_reserved() {
        let dup = ['0', '1', '2', '3', '4', '5', '6', '0'];
        assert_eq!(
            Ring::new(&dup, &DIGITS, '0', '1').unwrap_err(),
            RingError::DuplicateSymbol('0')
        );

        let reserved = ['0', '1', '2', '3', '4', '5', '6', '+'];
        assert_eq!(
            Ring::new(&reserved, &DIGITS, '0', '1').unwrap_err(),
            RingError::ReservedSymbol('+')
        );
    }

    #[test]
    fn test_rejects_non_permutation() {
        let successor = ['1', '1', '3', '4', '5', '6', '7', '0'];
        assert_eq!(
            Ring::new(&DIGITS, &successor, '0', '1').unwrap_err(),
            RingError::NotPermutation('1')
        );
    }

    #[test]
    fn test_rejects_identity_mismatch() {
        let successor = ['1', '2', '3', '4', '5', '6', '7', '0'];
        assert_eq!(
            Ring::new(&DIGITS, &successor, '0', '2').unwrap_err(),
            RingError::OneNotSuccessorOfZero {
                zero: '0',
                one: '2',
                successor: '1',
            }
        );
        assert_eq!(
            Ring::new(&DIGITS, &successor, 'x', '1').unwrap_err(),
            RingError::IdentityOutsideAlphabet('x')
        );
    }
}
