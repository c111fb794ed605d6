//! Configuration tables for rings and engines.
//!
//! A ring is described by its alphabet and a successor row: the `i`-th
//! character of `successor` is `next` of the `i`-th character of `alphabet`.
//! Tables are plain serde structs, usually read from TOML:
//!
//! ```toml
//! alphabet = "abcdefgh"
//! successor = "bgahfcde"
//! zero = "a"
//! one = "b"
//! max_digits = 8
//! ```
//!
//! # Example
//!
//! ```
//! use z8::config::EngineConfig;
//!
//! let config = EngineConfig::from_toml_str(r#"
//!     alphabet = "01234567"
//!     successor = "12345670"
//!     zero = "0"
//!     one = "1"
//!     max_digits = 4
//! "#).unwrap();
//!
//! let engine = config.build().unwrap();
//! let two = engine.normalize("2").unwrap();
//! assert_eq!(engine.multiply(&two, &two).unwrap().value.to_string(), "4");
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::constants::MAX_DIGITS;
use crate::core::ring::{
    Ring, STANDARD_ALPHABET, STANDARD_ONE, STANDARD_SUCCESSOR, STANDARD_ZERO,
};
use crate::engine::Engine;
use crate::error::ConfigError;

/// Textual description of a ring.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RingTable {
    /// The eight alphabet symbols, in declaration order.
    pub alphabet: String,
    /// `next` of each alphabet symbol, in the same order.
    pub successor: String,
    /// The additive identity.
    pub zero: String,
    /// The multiplicative identity.
    pub one: String,
}

impl RingTable {
    /// The table of [`Ring::standard`].
    #[must_use]
    pub fn standard() -> Self {
        Self {
            alphabet: STANDARD_ALPHABET.iter().collect(),
            successor: STANDARD_SUCCESSOR.iter().collect(),
            zero: STANDARD_ZERO.to_string(),
            one: STANDARD_ONE.to_string(),
        }
    }

    /// Validates the table and builds the ring.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NotASymbol`] if `zero` or `one` is not a single
    /// character, or [`ConfigError::Ring`] if the ring itself is invalid.
    pub fn build(&self) -> Result<Ring, ConfigError> {
        let alphabet: Vec<char> = self.alphabet.chars().collect();
        let successor: Vec<char> = self.successor.chars().collect();
        let zero = single_symbol("zero", &self.zero)?;
        let one = single_symbol("one", &self.one)?;
        Ok(Ring::new(&alphabet, &successor, zero, one)?)
    }
}

impl Default for RingTable {
    fn default() -> Self {
        Self::standard()
    }
}

/// A ring table plus the engine's digit cap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// The ring.
    #[serde(flatten)]
    pub ring: RingTable,
    /// Longest magnitude accepted as input and produced without overflow.
    #[serde(default = "default_max_digits")]
    pub max_digits: usize,
}

fn default_max_digits() -> usize {
    MAX_DIGITS
}

impl EngineConfig {
    /// Parses a configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] if the text is not valid TOML or lacks
    /// a required field.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Reads and parses a TOML configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, or
    /// [`ConfigError::Parse`] if its contents are invalid.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Validates the configuration and builds an engine.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ZeroMaxDigits`] for a zero digit cap, or any
    /// error from [`RingTable::build`].
    pub fn build(&self) -> Result<Engine, ConfigError> {
        if self.max_digits == 0 {
            return Err(ConfigError::ZeroMaxDigits);
        }
        let ring = self.ring.build()?;
        tracing::debug!(
            alphabet = %self.ring.alphabet,
            zero = %self.ring.zero,
            max_digits = self.max_digits,
            "built engine from configuration"
        );
        Ok(Engine::new(ring, self.max_digits))
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            ring: RingTable::standard(),
            max_digits: MAX_DIGITS,
        }
    }
}

fn single_symbol(field: &'static str, value: &str) -> Result<char, ConfigError> {
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(ConfigError::NotASymbol {
            field,
            value: value.to_string(),
        }),
    }
}
