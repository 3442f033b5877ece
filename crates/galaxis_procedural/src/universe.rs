//! # Universe
//!
//! Read-only generation context shared by every generator: the universe-wide
//! seed, the current epoch and the custom system catalog.
//!
//! ```toml
//! seed = 2882400820          # 0xabcd1234
//! current_year = 3200.0
//! lighter_star_attempts = 16
//! ```

use std::path::Path;

use galaxis_core::{GalaxyError, GalaxyResult};
use serde::{Deserialize, Serialize};

use crate::custom_system::CustomSystemCatalog;

/// Default universe-wide seed.
pub const UNIVERSE_SEED: u32 = 0xabcd_1234;

/// Default epoch, in years.
pub const DEFAULT_CURRENT_YEAR: f64 = 3200.0;

/// Default number of redraws when a companion must be lighter than its
/// primary.
pub const DEFAULT_LIGHTER_STAR_ATTEMPTS: u32 = 16;

/// Tunable generation parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct UniverseConfig {
    /// Universe-wide seed mixed into every sector and body generator.
    pub seed: u32,
    /// Current year; drives faction border growth.
    pub current_year: f64,
    /// Redraw cap for lighter companion stars.
    pub lighter_star_attempts: u32,
}

impl Default for UniverseConfig {
    fn default() -> Self {
        Self {
            seed: UNIVERSE_SEED,
            current_year: DEFAULT_CURRENT_YEAR,
            lighter_star_attempts: DEFAULT_LIGHTER_STAR_ATTEMPTS,
        }
    }
}

impl UniverseConfig {
    /// Parses a configuration document. Missing keys keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns `GalaxyError::InvalidConfig` on malformed TOML, unknown keys
    /// or a zero retry cap.
    pub fn from_toml_str(source: &str) -> GalaxyResult<Self> {
        let config: Self =
            toml::from_str(source).map_err(|e| GalaxyError::InvalidConfig(e.to_string()))?;
        if config.lighter_star_attempts == 0 {
            return Err(GalaxyError::InvalidConfig(
                "lighter_star_attempts must be at least 1".to_string(),
            ));
        }
        Ok(config)
    }

    /// Reads and parses a configuration file.
    ///
    /// # Errors
    ///
    /// Returns `GalaxyError::InvalidConfig` if the file cannot be read or
    /// parsed.
    pub fn from_toml_file(path: impl AsRef<Path>) -> GalaxyResult<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path)
            .map_err(|e| GalaxyError::InvalidConfig(format!("{}: {e}", path.display())))?;
        Self::from_toml_str(&source)
    }
}

/// Generation context: configuration plus authored overrides.
#[derive(Clone, Debug, Default)]
pub struct Universe {
    /// Generation parameters.
    config: UniverseConfig,
    /// Authored systems.
    customs: CustomSystemCatalog,
}

impl Universe {
    /// Creates a universe without custom systems.
    #[must_use]
    pub fn new(config: UniverseConfig) -> Self {
        Self::with_customs(config, CustomSystemCatalog::new())
    }

    /// Creates a universe with a custom system catalog.
    #[must_use]
    pub fn with_customs(config: UniverseConfig, customs: CustomSystemCatalog) -> Self {
        Self { config, customs }
    }

    /// Generation parameters.
    #[inline]
    #[must_use]
    pub const fn config(&self) -> &UniverseConfig {
        &self.config
    }

    /// Universe-wide seed.
    #[inline]
    #[must_use]
    pub const fn seed(&self) -> u32 {
        self.config.seed
    }

    /// Current year.
    #[inline]
    #[must_use]
    pub const fn current_year(&self) -> f64 {
        self.config.current_year
    }

    /// Authored systems.
    #[inline]
    #[must_use]
    pub const fn customs(&self) -> &CustomSystemCatalog {
        &self.customs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = UniverseConfig::default();
        assert_eq!(config.seed, 0xabcd_1234);
        assert!((config.current_year - 3200.0).abs() < f64::EPSILON);
        assert_eq!(config.lighter_star_attempts, 16);
    }

    #[test]
    fn test_partial_document_keeps_defaults() {
        let config = UniverseConfig::from_toml_str("current_year = 3300.0").unwrap();
        assert_eq!(config.seed, UNIVERSE_SEED);
        assert!((config.current_year - 3300.0).abs() < f64::EPSILON);

        let config = UniverseConfig::from_toml_str("").unwrap();
        assert_eq!(config, UniverseConfig::default());
    }

    #[test]
    fn test_rejects_unknown_keys() {
        let err = UniverseConfig::from_toml_str("sed = 4").unwrap_err();
        assert!(matches!(err, GalaxyError::InvalidConfig(_)));
    }

    #[test]
    fn test_rejects_zero_attempts() {
        assert!(UniverseConfig::from_toml_str("lighter_star_attempts = 0").is_err());
    }

    #[test]
    fn test_universe_accessors() {
        let universe = Universe::new(UniverseConfig {
            seed: 7,
            ..UniverseConfig::default()
        });
        assert_eq!(universe.seed(), 7);
        assert!(universe.customs().is_empty());
    }
}
