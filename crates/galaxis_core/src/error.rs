//! # Galaxy Error Types
//!
//! Errors raised by generation and configuration loading.
//!
//! Missing data is never an error: "no faction", "no custom override" and
//! "no government weighting" are plain `Option`s or sentinels.

use thiserror::Error;

use crate::path::SystemPath;

/// Errors that can occur while generating or configuring the galaxy.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GalaxyError {
    /// A path addressed a system slot the sector does not have.
    #[error("system index out of range: {path} addresses a sector with {count} systems")]
    SystemIndexOutOfRange {
        /// The offending path.
        path: SystemPath,
        /// Number of systems in the sector.
        count: usize,
    },

    /// A system declared a star count outside 1-4.
    #[error("invalid star count {count} for system '{name}' (expected 1-4)")]
    InvalidStarCount {
        /// System name.
        name: String,
        /// Declared star count.
        count: usize,
    },

    /// A star type name was not recognised.
    #[error("unknown star type: {0}")]
    UnknownStarType(String),

    /// Invalid configuration file.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type for galaxy operations.
pub type GalaxyResult<T> = Result<T, GalaxyError>;
