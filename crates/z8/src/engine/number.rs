//! Signed numbers over a ring's alphabet.

use std::fmt;

use serde::{Serialize, Serializer};

use crate::core::constants::SIGN;

/// A signed digit sequence, most significant symbol first.
///
/// Numbers are only produced by an [`crate::Engine`], which keeps them in
/// canonical form: no leading zero symbols unless the value is zero, and zero
/// is never negative.
///
/// # Example
///
/// ```
/// use z8::Engine;
///
/// let engine = Engine::standard();
/// let n = engine.normalize("-aahg").unwrap();
/// assert!(n.is_negative());
/// assert_eq!(n.magnitude(), "hg");
/// assert_eq!(n.to_string(), "-hg");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Number {
    negative: bool,
    digits: Vec<char>,
}

impl Number {
    /// Builds a number from already-canonical parts.
    pub(crate) fn from_parts(negative: bool, digits: Vec<char>) -> Self {
        Self { negative, digits }
    }

    /// Returns `true` if the sign marker is present.
    #[inline]
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.negative
    }

    /// The magnitude's symbols, most significant first.
    #[inline]
    #[must_use]
    pub fn digits(&self) -> &[char] {
        &self.digits
    }

    /// The magnitude as text, without the sign marker.
    #[must_use]
    pub fn magnitude(&self) -> String {
        self.digits.iter().collect()
    }

    /// Number of symbols in the magnitude.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.digits.len()
    }

    /// Always `false`: a number has at least one symbol.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }

    pub(crate) fn into_parts(self) -> (bool, Vec<char>) {
        (self.negative, self.digits)
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negative {
            write!(f, "{SIGN}")?;
        }
        for c in &self.digits {
            write!(f, "{c}")?;
        }
        Ok(())
    }
}

impl Serialize for Number {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
