//! Error taxonomy for the measurement core.
//!
//! Deliberately small: "no data to show", "module unknown" and "reference
//! value missing" are ordinary outcomes expressed as empty lists or
//! `Option::None`, never as errors. The only fallible surface is decoding
//! a collaborator-supplied unit-system integer.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// A unit-system selector integer outside the family's enum range.
    /// Unit settings come from collaborator configuration, so a stale or
    /// corrupted value must surface as a recoverable error.
    #[error("unknown unit system {index} for family {family}")]
    UnknownUnitSystem { family: &'static str, index: u8 },
}
