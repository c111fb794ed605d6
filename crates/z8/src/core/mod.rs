//! Core data types and constants.
//!
//! - [`ring::Ring`]: eight-symbol alphabet with identities and successor table
//! - [`traits::SuccessorCycle`]: the generator seam and the walks derived from it
//! - [`constants`]: base, default digit cap, reserved characters

pub mod constants;
pub mod ring;
pub mod traits;
