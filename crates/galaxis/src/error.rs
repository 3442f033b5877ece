//! # Error Types

use galaxis_core::GalaxyError;
use galaxis_factions::FactionError;
use thiserror::Error;

/// Errors from loading or surveying a galaxy.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GalaxisError {
    /// Generation or universe configuration failed.
    #[error(transparent)]
    Galaxy(#[from] GalaxyError),

    /// Faction definitions failed to load.
    #[error(transparent)]
    Faction(#[from] FactionError),
}

/// Result type for galaxy operations.
pub type GalaxisResult<T> = Result<T, GalaxisError>;
