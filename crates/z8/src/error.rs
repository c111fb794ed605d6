//! Error types for ring construction, number parsing, the engine, and the
//! expression evaluator.

use thiserror::Error;

use crate::core::constants::BASE;

/// Errors raised by the ring: invalid symbols and invalid ring tables.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RingError {
    /// A symbol outside the alphabet was passed to `next`, `prev`, or a walk.
    #[error("symbol '{0}' does not belong to the alphabet")]
    InvalidSymbol(char),

    /// The alphabet does not have exactly [`BASE`] symbols.
    #[error("alphabet must have exactly {BASE} symbols, found {0}")]
    AlphabetSize(usize),

    /// A symbol appears more than once in the alphabet.
    #[error("symbol '{0}' appears more than once in the alphabet")]
    DuplicateSymbol(char),

    /// A symbol collides with the sign marker, an operator, or whitespace.
    #[error("symbol {0:?} is reserved and cannot be used as a digit")]
    ReservedSymbol(char),

    /// The successor row is not the same length as the alphabet.
    #[error("successor row must have exactly {BASE} entries, found {0}")]
    SuccessorSize(usize),

    /// The successor row maps two symbols to the same successor.
    #[error("successor row is not a permutation: '{0}' is reached twice")]
    NotPermutation(char),

    /// The successor permutation splits into more than one cycle.
    #[error("successor permutation must be a single cycle of length {BASE}, the cycle through the zero symbol has length {0}")]
    NotSingleCycle(usize),

    /// The additive or multiplicative identity is not an alphabet symbol.
    #[error("identity symbol '{0}' does not belong to the alphabet")]
    IdentityOutsideAlphabet(char),

    /// The multiplicative identity must be the successor of zero.
    #[error("one symbol '{one}' must be the successor of zero symbol '{zero}' (which is '{successor}')")]
    OneNotSuccessorOfZero {
        /// Configured zero symbol.
        zero: char,
        /// Configured one symbol.
        one: char,
        /// Actual successor of zero.
        successor: char,
    },
}

/// Errors raised while turning text into a [`crate::Number`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NumberError {
    /// The input was empty.
    #[error("number is empty")]
    Empty,

    /// The input was a sign marker with no digits after it.
    #[error("sign marker without digits")]
    BareSign,

    /// The input contains a character that is not an alphabet symbol.
    #[error("invalid symbol '{symbol}' at position {position}")]
    InvalidSymbol {
        /// The offending character.
        symbol: char,
        /// Character index within the input.
        position: usize,
    },

    /// The magnitude is longer than the engine accepts as input.
    #[error("number has {len} digits, at most {max} are allowed")]
    TooLong {
        /// Normalized magnitude length.
        len: usize,
        /// The engine's digit cap.
        max: usize,
    },
}

/// Contract violations inside the arithmetic engine.
///
/// None of these are reachable through the signed entry points with numbers
/// produced by the same engine; they surface misuse of the magnitude
/// primitives or numbers built against a different alphabet.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// A ring lookup failed.
    #[error(transparent)]
    Ring(#[from] RingError),

    /// `subtract_positive` was called with a minuend smaller than the subtrahend.
    #[error("magnitude subtraction requires minuend >= subtrahend")]
    MagnitudePrecondition,
}

/// Errors raised while evaluating an expression.
///
/// Every variant aborts the current expression only.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// A number literal was malformed.
    #[error("invalid number: {0}")]
    Number(#[from] NumberError),

    /// The engine reported a contract violation.
    #[error(transparent)]
    Engine(#[from] EngineError),

    /// An operand was expected but not found.
    #[error("missing operand at offset {offset}")]
    MissingOperand {
        /// Byte offset where the operand should start.
        offset: usize,
    },

    /// A parenthesized sub-expression was not closed.
    #[error("unclosed parenthesis opened at offset {offset}")]
    UnclosedParen {
        /// Byte offset of the opening parenthesis.
        offset: usize,
    },

    /// A closing parenthesis has no matching opening one.
    #[error("unmatched ')' at offset {offset}")]
    UnmatchedParen {
        /// Byte offset of the closing parenthesis.
        offset: usize,
    },

    /// A character appeared where an operator was expected.
    #[error("unknown operator '{found}' at offset {offset}")]
    UnknownOperator {
        /// Byte offset of the character.
        offset: usize,
        /// The character found.
        found: char,
    },

    /// Input remained after a complete expression.
    #[error("unexpected '{found}' at offset {offset} after end of expression")]
    TrailingInput {
        /// Byte offset of the first unconsumed character.
        offset: usize,
        /// The first unconsumed character.
        found: char,
    },

    /// Parentheses are nested deeper than [`crate::constants::MAX_NESTING`].
    #[error("parentheses nested more than {max} deep at offset {offset}")]
    NestingTooDeep {
        /// Byte offset of the opening parenthesis past the limit.
        offset: usize,
        /// The nesting limit.
        max: usize,
    },

    /// The dividend of a division is longer than the digit cap.
    ///
    /// An overflowed dividend is never passed to `divide`.
    #[error("dividend exceeds {max} digits at offset {offset}")]
    DividendOverflow {
        /// Byte offset of the `/` token.
        offset: usize,
        /// The engine's digit cap.
        max: usize,
    },

    /// A nonzero value was divided by zero.
    #[error("division by zero at offset {offset}")]
    DivisionByZero {
        /// Byte offset of the `/` token.
        offset: usize,
    },

    /// Zero was divided by zero.
    #[error("indeterminate 0/0 at offset {offset}")]
    ZeroByZero {
        /// Byte offset of the `/` token.
        offset: usize,
    },
}

/// Errors raised while loading a configuration table.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read configuration: {0}")]
    Io(#[from] std::io::Error),

    /// The configuration is not valid TOML or has the wrong shape.
    #[error("failed to parse configuration: {0}")]
    Parse(#[from] toml::de::Error),

    /// A field that must hold a single symbol holds zero or several.
    #[error("field `{field}` must be a single symbol, found {value:?}")]
    NotASymbol {
        /// Field name.
        field: &'static str,
        /// Raw value.
        value: String,
    },

    /// The digit cap must be at least one.
    #[error("max_digits must be at least 1")]
    ZeroMaxDigits,

    /// The ring table is invalid.
    #[error(transparent)]
    Ring(#[from] RingError),
}

/// Result alias for engine operations.
pub type Result<T, E = EngineError> = std::result::Result<T, E>;
