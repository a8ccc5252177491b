//! Error types for the Stellar3D spatial core
//!
//! This module defines the error types used throughout the crate,
//! covering engine lifecycle and scene management. Contract-level
//! failures of the tree operations themselves (inserting a dead item,
//! growing a bound volume) are reported through boolean returns, not
//! through this enum.

use std::fmt;

/// Result type for Stellar3D operations
pub type Result<T> = std::result::Result<T, Error>;

/// Stellar3D errors
#[derive(Debug, Clone)]
pub enum Error {
    /// Initialization failed (engine, subsystems)
    InitializationFailed(String),

    /// Invalid resource (rejected scene item, unknown scene name)
    InvalidResource(String),

    /// A lock guarding shared state was poisoned
    LockPoisoned(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InitializationFailed(msg) => write!(f, "Initialization failed: {}", msg),
            Error::InvalidResource(msg) => write!(f, "Invalid resource: {}", msg),
            Error::LockPoisoned(msg) => write!(f, "Lock poisoned: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
