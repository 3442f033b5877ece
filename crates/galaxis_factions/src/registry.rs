//! # Faction Registry
//!
//! Ordered, name-indexed store of every registered faction, and the territory
//! resolver built on it.
//!
//! ## Ownership Rules
//!
//! A system belongs to:
//!
//! 1. The faction named by its custom override, if that name is registered.
//! 2. Otherwise, the faction with the closest homeworld whose border contains
//!    it. Ties go to the faction registered last.
//! 3. Otherwise, a faction without a homeworld, if one exists.
//!
//! The registry is populated once and then shared read-only; homeworld sector
//! caches are the only interior mutability.

use std::collections::HashMap;
use std::sync::Arc;

use galaxis_core::SystemPath;
use galaxis_procedural::{FactionIndex, FactionResolver, Sector, Universe};

use crate::faction::{Color, Faction};

/// Alpha applied to faction colours on the territory map.
pub const FACTION_BASE_ALPHA: f32 = 0.30;

/// All registered factions.
#[derive(Debug)]
pub struct FactionRegistry {
    /// Universe the factions live in.
    universe: Arc<Universe>,
    /// Factions in registration order.
    factions: Vec<Faction>,
    /// First index registered under each name.
    by_name: HashMap<String, FactionIndex>,
}

impl FactionRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new(universe: Arc<Universe>) -> Self {
        Self {
            universe,
            factions: Vec::new(),
            by_name: HashMap::new(),
        }
    }

    /// Universe the factions live in.
    #[inline]
    #[must_use]
    pub const fn universe(&self) -> &Arc<Universe> {
        &self.universe
    }

    #[allow(clippy::cast_possible_truncation)]
    pub(crate) fn push(&mut self, faction: Faction) -> FactionIndex {
        let index = self.factions.len() as FactionIndex;
        self.by_name.entry(faction.name.clone()).or_insert(index);
        self.factions.push(faction);
        index
    }

    /// Index of the first faction registered as `name`.
    #[must_use]
    pub fn index_of(&self, name: &str) -> Option<FactionIndex> {
        self.by_name.get(name).copied()
    }

    /// Faction at `index`.
    #[must_use]
    pub fn get(&self, index: FactionIndex) -> Option<&Faction> {
        self.factions.get(index as usize)
    }

    /// Number of registered factions.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.factions.len()
    }

    /// Returns true if no faction is registered.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.factions.is_empty()
    }

    /// Iterates factions in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Faction> {
        self.factions.iter()
    }

    /// Removes every faction.
    pub fn clear(&mut self) {
        self.factions.clear();
        self.by_name.clear();
    }

    /// Faction owning system `index` of `sector`.
    ///
    /// Returns `None` for unclaimed systems and out-of-range indices.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn nearest_faction_index(&self, sector: &Sector, index: usize) -> Option<FactionIndex> {
        let system = sector.system(index)?;
        if let Some(owner) = system
            .custom
            .as_ref()
            .and_then(|custom| custom.faction.as_deref())
            .and_then(|name| self.index_of(name))
        {
            return Some(owner);
        }

        let mut closest = f64::INFINITY;
        let mut nearest = None;
        for (candidate, faction) in self.factions.iter().enumerate() {
            if faction.is_closer_and_contains(&self.universe, &mut closest, sector, index) {
                nearest = Some(candidate as FactionIndex);
            }
        }
        nearest
    }

    /// Faction owning the system at `path`.
    #[must_use]
    pub fn nearest_faction_index_for_path(&self, path: SystemPath) -> Option<FactionIndex> {
        let sector = Sector::new(&self.universe, path.sector_x, path.sector_y, path.sector_z);
        self.nearest_faction_index(&sector, path.system_index as usize)
    }

    /// Map colour of the system's owner, or the neutral colour.
    #[must_use]
    pub fn nearest_faction_colour(&self, sector: &Sector, index: usize) -> Color {
        self.colour_of(self.nearest_faction_index(sector, index))
    }

    /// Map colour of `owner`, or the neutral colour.
    #[must_use]
    pub fn colour_of(&self, owner: Option<FactionIndex>) -> Color {
        owner
            .and_then(|index| self.get(index))
            .map_or(Color::NEUTRAL, |faction| {
                faction.colour.with_alpha(FACTION_BASE_ALPHA)
            })
    }
}

impl FactionResolver for FactionRegistry {
    fn nearest_faction(&self, sector: &Sector, system_index: usize) -> Option<FactionIndex> {
        self.nearest_faction_index(sector, system_index)
    }
}
