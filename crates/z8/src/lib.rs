//! Z8 - finite-alphabet positional arithmetic
//!
//! Integers are written as sequences over an eight-symbol alphabet. The
//! symbols carry no numeric meaning of their own: the only arithmetic fact
//! the engine knows is the **successor cycle**, a single cycle through all
//! eight symbols with one of them marked as zero. Every operation, from
//! `increment` up to `lcm`, is composed from stepping forward (`next`) and
//! backward (`prev`) around that cycle.
//!
//! # Standard Ring
//!
//! | Symbol | `next` | Value |
//! |--------|--------|-------|
//! | `a` | `b` | 0 |
//! | `b` | `g` | 1 |
//! | `g` | `d` | 2 |
//! | `d` | `h` | 3 |
//! | `h` | `e` | 4 |
//! | `e` | `f` | 5 |
//! | `f` | `c` | 6 |
//! | `c` | `a` | 7 |
//!
//! The value column is informational: the engine never converts a symbol to
//! a machine integer.
//!
//! # Layers
//!
//! ```text
//! Ring          next, prev, walks, compare         core::ring, core::traits
//! Engine        magnitude, signed, number theory    engine
//! Evaluator     infix expressions over an Engine    eval
//! EngineConfig  TOML ring tables                    config
//! ```
//!
//! # Overflow
//!
//! Numbers carry at most [`MAX_DIGITS`] symbols on input. Results that grow
//! past the cap are returned untruncated with an overflow flag.
//!
//! # Example
//!
//! ```
//! use z8::{Engine, Evaluator};
//!
//! let engine = Engine::standard();
//! let b = engine.normalize("b").unwrap();
//! assert_eq!(engine.add(&b, &b).unwrap().value.to_string(), "g");
//!
//! let out = Evaluator::new(&engine).evaluate("c / g").unwrap();
//! assert_eq!(out.value.to_string(), "d");
//! assert_eq!(out.remainders[0].remainder.to_string(), "b");
//! ```

// Core data types (constants, ring, generator trait)
mod core;

// Arithmetic over symbol sequences
pub mod engine;

// Recursive-descent expression evaluation
pub mod eval;

// Ring and engine tables
pub mod config;

// Error types
pub mod error;

// Re-export submodules for external access
pub use core::constants;
pub use core::ring;
pub use core::traits;

// Re-export core types at crate root
pub use core::constants::{BASE, MAX_DIGITS};
pub use core::ring::Ring;
pub use core::traits::{SuccessorCycle, Walk};

pub use config::{EngineConfig, RingTable};
pub use engine::{DivisionResult, Engine, Number, OperationResult, Quotient};
pub use error::{ConfigError, EngineError, EvalError, NumberError, RingError};
pub use eval::{Evaluation, Evaluator, RemainderNote};
