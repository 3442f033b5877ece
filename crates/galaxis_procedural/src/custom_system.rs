//! # Custom System Catalog
//!
//! Hand-authored systems that replace procedural output for a sector slot.
//!
//! Custom systems always occupy the first slots of their sector, in the order
//! they appear in the catalog. Procedural systems are appended after them.
//!
//! ## File Format
//!
//! ```toml
//! [[system]]
//! name = "Sol"
//! sector = [0, 0, 0]
//! position = [0.5, 0.5, 0.1]     # fraction of the sector edge
//! star_types = ["STAR_G"]
//! seed = 0
//! explored = true
//! faction = "Solar Federation"
//! population = 17.0               # billions
//! ```

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use galaxis_core::{Fixed, GalaxyError, GalaxyResult};
use serde::Deserialize;

use crate::star_type::BodyType;

/// Maximum stars in one system.
pub const MAX_STARS: usize = 4;

/// An authored system override.
#[derive(Clone, Debug, PartialEq)]
pub struct CustomSystem {
    /// Display name.
    pub name: String,
    /// Sector coordinates.
    pub sector: [i32; 3],
    /// Offset within the sector, as a fraction of the sector edge.
    pub position: [f32; 3],
    /// Star types, primary first (1-4 entries).
    pub star_types: Vec<BodyType>,
    /// Derivation seed for body generation.
    pub seed: u32,
    /// Whether the system has been explored.
    pub explored: bool,
    /// When set, exploration status is decided procedurally and `explored`
    /// is ignored.
    pub random_explored: bool,
    /// Name of the faction that owns the system, overriding territory.
    pub faction: Option<String>,
    /// Population estimate, billions.
    pub population: Option<Fixed>,
    /// Short description.
    pub short_description: Option<String>,
}

impl CustomSystem {
    /// Creates an explored single-star system with default fields.
    ///
    /// # Errors
    ///
    /// Returns `GalaxyError::InvalidStarCount` if `star_types` is empty or
    /// holds more than four entries, and `GalaxyError::UnknownStarType` if one
    /// of them is not a star.
    pub fn new(
        name: impl Into<String>,
        sector: [i32; 3],
        star_types: Vec<BodyType>,
    ) -> GalaxyResult<Self> {
        let name = name.into();
        if star_types.is_empty() || star_types.len() > MAX_STARS {
            return Err(GalaxyError::InvalidStarCount {
                name,
                count: star_types.len(),
            });
        }
        if let Some(bad) = star_types.iter().find(|kind| !kind.is_star()) {
            return Err(GalaxyError::UnknownStarType(bad.name().to_string()));
        }
        Ok(Self {
            name,
            sector,
            position: [0.5; 3],
            star_types,
            seed: 0,
            explored: true,
            random_explored: false,
            faction: None,
            population: None,
            short_description: None,
        })
    }

    /// Sets the position within the sector (fractions of the edge).
    ///
    /// # Errors
    ///
    /// Returns `GalaxyError::InvalidConfig` unless every fraction lies in
    /// `[0, 1)`.
    pub fn with_position(mut self, position: [f32; 3]) -> GalaxyResult<Self> {
        if !position.iter().all(|fraction| (0.0..1.0).contains(fraction)) {
            return Err(GalaxyError::InvalidConfig(format!(
                "{}: position {position:?} lies outside its sector",
                self.name
            )));
        }
        self.position = position;
        Ok(self)
    }

    /// Sets the derivation seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u32) -> Self {
        self.seed = seed;
        self
    }

    /// Sets the explored flag and clears random exploration.
    #[must_use]
    pub fn with_explored(mut self, explored: bool) -> Self {
        self.explored = explored;
        self.random_explored = false;
        self
    }

    /// Lets the generator decide exploration status.
    #[must_use]
    pub fn with_random_explored(mut self) -> Self {
        self.random_explored = true;
        self
    }

    /// Assigns an owning faction by name.
    #[must_use]
    pub fn with_faction(mut self, faction: impl Into<String>) -> Self {
        self.faction = Some(faction.into());
        self
    }

    /// Sets the population estimate.
    #[must_use]
    pub fn with_population(mut self, population: Fixed) -> Self {
        self.population = Some(population);
        self
    }

    /// Number of stars.
    #[inline]
    #[must_use]
    pub fn num_stars(&self) -> usize {
        self.star_types.len()
    }
}

/// On-disk representation of one `[[system]]` table.
#[derive(Debug, Deserialize)]
struct CustomSystemDef {
    name: String,
    sector: [i32; 3],
    #[serde(default = "default_position")]
    position: [f32; 3],
    star_types: Vec<String>,
    #[serde(default)]
    seed: u32,
    #[serde(default = "default_explored")]
    explored: bool,
    #[serde(default)]
    random_explored: bool,
    faction: Option<String>,
    population: Option<f64>,
    short_description: Option<String>,
}

const fn default_position() -> [f32; 3] {
    [0.5; 3]
}

const fn default_explored() -> bool {
    true
}

/// Whole catalog file.
#[derive(Debug, Default, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    system: Vec<CustomSystemDef>,
}

impl TryFrom<CustomSystemDef> for CustomSystem {
    type Error = GalaxyError;

    fn try_from(def: CustomSystemDef) -> GalaxyResult<Self> {
        let star_types = def
            .star_types
            .iter()
            .map(|name| BodyType::from_name(name))
            .collect::<GalaxyResult<Vec<_>>>()?;
        let mut system = Self::new(def.name, def.sector, star_types)?
            .with_position(def.position)?
            .with_seed(def.seed)
            .with_explored(def.explored);
        system.random_explored = def.random_explored;
        system.faction = def.faction;
        system.population = def.population.map(Fixed::from_f64);
        system.short_description = def.short_description;
        Ok(system)
    }
}

/// All custom systems, grouped by sector.
#[derive(Clone, Debug, Default)]
pub struct CustomSystemCatalog {
    /// Systems per sector, in declaration order.
    by_sector: HashMap<[i32; 3], Vec<Arc<CustomSystem>>>,
    /// Total number of systems.
    count: usize,
}

impl CustomSystemCatalog {
    /// Creates an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a TOML catalog.
    ///
    /// # Errors
    ///
    /// Returns `GalaxyError::InvalidConfig` on malformed TOML, or the
    /// validation error of the first invalid system.
    pub fn from_toml_str(source: &str) -> GalaxyResult<Self> {
        let file: CatalogFile =
            toml::from_str(source).map_err(|e| GalaxyError::InvalidConfig(e.to_string()))?;
        let mut catalog = Self::new();
        for def in file.system {
            catalog.add(CustomSystem::try_from(def)?);
        }
        Ok(catalog)
    }

    /// Reads and parses a TOML catalog file.
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

    /// Appends a system to its sector.
    pub fn add(&mut self, system: CustomSystem) {
        self.by_sector
            .entry(system.sector)
            .or_default()
            .push(Arc::new(system));
        self.count += 1;
    }

    /// Custom systems of one sector, in slot order.
    #[must_use]
    pub fn in_sector(&self, x: i32, y: i32, z: i32) -> &[Arc<CustomSystem>] {
        self.by_sector.get(&[x, y, z]).map_or(&[], Vec::as_slice)
    }

    /// Total number of custom systems.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.count
    }

    /// Returns true if the catalog holds no systems.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}
