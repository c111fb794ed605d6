//! Result shapes returned by the engine.

use std::fmt;

use serde::Serialize;

use super::number::Number;
use crate::core::constants::EMPTY_SET;

/// Result of `add`, `subtract`, `multiply`, `power`, `gcd`, and `lcm`.
///
/// On overflow the full, untruncated value is kept alongside the flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OperationResult {
    /// The signed result.
    pub value: Number,
    /// The magnitude is longer than the engine's digit cap.
    pub is_overflow: bool,
}

impl OperationResult {
    /// Returns `true` if the value carries the sign marker.
    #[inline]
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.value.is_negative()
    }

    /// The unsigned magnitude.
    #[must_use]
    pub fn magnitude(&self) -> String {
        self.value.magnitude()
    }
}

impl fmt::Display for OperationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_overflow {
            write!(f, "OVERFLOW ({})", self.value)
        } else {
            write!(f, "{}", self.value)
        }
    }
}

/// The quotient part of a [`DivisionResult`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Quotient {
    /// An ordinary quotient.
    Value {
        /// The signed quotient.
        value: Number,
    },
    /// Nonzero divided by zero: no value satisfies the division.
    EmptySet,
    /// Zero divided by zero: every representable value satisfies it.
    Range {
        /// Most negative representable value.
        low: Number,
        /// Most positive representable value.
        high: Number,
    },
}

impl Quotient {
    /// The quotient value, if the division had one.
    #[must_use]
    pub fn value(&self) -> Option<&Number> {
        match self {
            Self::Value { value } => Some(value),
            Self::EmptySet | Self::Range { .. } => None,
        }
    }
}

impl fmt::Display for Quotient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value { value } => write!(f, "{value}"),
            Self::EmptySet => f.write_str(EMPTY_SET),
            Self::Range { low, high } => write!(f, "[{low}; {high}]"),
        }
    }
}

/// Result of `divide`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DivisionResult {
    /// The quotient or a sentinel.
    pub quotient: Quotient,
    /// The non-negative remainder; `None` for a division by zero.
    pub remainder: Option<Number>,
    /// The quotient's magnitude is longer than the engine's digit cap.
    pub is_overflow: bool,
}

impl DivisionResult {
    /// Nonzero dividend, zero divisor.
    #[inline]
    #[must_use]
    pub fn is_div_by_zero(&self) -> bool {
        matches!(self.quotient, Quotient::EmptySet)
    }

    /// Zero dividend, zero divisor.
    #[inline]
    #[must_use]
    pub fn is_zero_by_zero(&self) -> bool {
        matches!(self.quotient, Quotient::Range { .. })
    }
}
