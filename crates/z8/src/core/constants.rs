//! Fixed sizes of the number system.
//!
//! The alphabet size is not configurable: every ring has exactly [`BASE`]
//! symbols. The digit cap is only a default; engines may be built with a
//! different cap through [`crate::config::EngineConfig`].

/// Number of symbols in every alphabet (the positional base).
pub const BASE: usize = 8;

/// Default maximum magnitude length, in symbols.
///
/// Inputs longer than this are rejected; results longer than this are
/// returned with the overflow flag set.
pub const MAX_DIGITS: usize = 8;

/// Deepest parenthesis nesting the evaluator accepts.
pub const MAX_NESTING: usize = 256;

/// Sign marker prefixed to negative numbers.
pub const SIGN: char = '-';

/// Characters that can never be alphabet symbols.
///
/// They are evaluator tokens (operators, parentheses) or the sign marker.
/// Whitespace is rejected separately.
pub const RESERVED: [char; 6] = ['-', '+', '*', '/', '(', ')'];

/// Marker printed for the empty-set quotient of a division by zero.
pub const EMPTY_SET: &str = "Ø";

/// Returns `true` if `c` may not appear in an alphabet.
#[inline]
#[must_use]
pub fn is_reserved(c: char) -> bool {
    c.is_whitespace() || RESERVED.contains(&c)
}
