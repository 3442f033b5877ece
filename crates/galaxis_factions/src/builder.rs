//! # Faction Builder
//!
//! Assembles a [`Faction`] field by field, then hands it to the registry.
//!
//! Bad values never abort the definition. Each one is logged, recorded in
//! [`FactionBuilder::warnings`], and the offending call leaves the faction
//! unchanged. A homeworld that resolves to no system marks the faction as
//! skipped; registering it then logs and does nothing.

use galaxis_core::SystemPath;
use galaxis_procedural::{FactionIndex, Sector, Universe};
use tracing::{info, warn};

use crate::equip::EquipType;
use crate::error::{FactionError, FactionResult};
use crate::faction::{Color, Faction};
use crate::polit::GovType;
use crate::registry::FactionRegistry;

/// Outcome of [`FactionBuilder::add_to_factions`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Registration {
    /// Faction was added at this index.
    Added(FactionIndex),
    /// Homeworld was invalid; nothing was added.
    Skipped,
}

/// Incremental faction definition.
#[derive(Debug)]
pub struct FactionBuilder {
    /// Pending faction; taken on registration.
    faction: Option<Faction>,
    /// Name, kept for messages after registration.
    name: String,
    /// Homeworld resolved to no system.
    skip: bool,
    /// Recoverable problems seen so far.
    warnings: Vec<FactionError>,
}

impl FactionBuilder {
    /// Starts a faction definition.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            faction: Some(Faction::new(name.clone())),
            name,
            skip: false,
            warnings: Vec::new(),
        }
    }

    /// Faction name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Warnings recorded so far.
    #[must_use]
    pub fn warnings(&self) -> &[FactionError] {
        &self.warnings
    }

    /// Returns true if the homeworld was invalid.
    #[inline]
    #[must_use]
    pub const fn is_skipped(&self) -> bool {
        self.skip
    }

    /// Returns true once the faction has been handed to a registry.
    #[inline]
    #[must_use]
    pub const fn is_registered(&self) -> bool {
        self.faction.is_none()
    }

    /// Sets the one-line description.
    pub fn description_short(&mut self, text: impl Into<String>) -> &mut Self {
        if let Some(faction) = self.faction.as_mut() {
            faction.description_short = text.into();
        }
        self
    }

    /// Sets the full description.
    pub fn description(&mut self, text: impl Into<String>) -> &mut Self {
        if let Some(faction) = self.faction.as_mut() {
            faction.description = text.into();
        }
        self
    }

    /// Adds a government weight.
    ///
    /// Unknown or non-assignable types, negative weights and weights that
    /// push the total past `i32::MAX` are warnings.
    pub fn govtype_weight(&mut self, gov: &str, weight: i64) -> &mut Self {
        let faction = self.name.clone();
        let Some(gov_type) = GovType::from_name(gov) else {
            return self.warn(FactionError::UnknownGovType {
                faction,
                gov: gov.to_owned(),
                weight,
            });
        };
        if !gov_type.is_random_assignable() {
            return self.warn(FactionError::GovTypeOutOfRange {
                faction,
                gov: gov.to_owned(),
                weight,
            });
        }
        if weight < 0 {
            return self.warn(FactionError::NegativeWeight {
                faction,
                gov: gov.to_owned(),
                weight,
            });
        }

        let Some(target) = self.faction.as_mut() else {
            return self;
        };
        let total = i32::try_from(weight).ok().and_then(|weight| {
            target
                .govtype_weights_total
                .checked_add(weight)
                .map(|total| (weight, total))
        });
        let Some((weight, total)) = total else {
            return self.warn(FactionError::WeightOverflow {
                faction,
                gov: gov.to_owned(),
                weight,
            });
        };
        target.govtype_weights.push((gov_type, weight));
        target.govtype_weights_total = total;
        self
    }

    /// Sets the homeworld.
    ///
    /// A negative `system_index` picks the first system of the sector. The
    /// faction is skipped if the sector has no such system, or if any value
    /// does not fit a sector coordinate or body index.
    pub fn homeworld(
        &mut self,
        universe: &Universe,
        x: i64,
        y: i64,
        z: i64,
        system_index: i64,
        body_index: i64,
    ) -> &mut Self {
        let path = Self::resolve_homeworld(universe, [x, y, z], system_index, body_index);
        self.skip = path.is_none();

        if self.skip {
            let faction = self.name.clone();
            self.warn(FactionError::InvalidHomeworld {
                faction,
                sector: [x, y, z],
                system_index,
            });
        }
        if let Some(faction) = self.faction.as_mut() {
            faction.homeworld = path;
        }
        self
    }

    /// Sets the founding year.
    pub fn founding_date(&mut self, year: f64) -> &mut Self {
        if let Some(faction) = self.faction.as_mut() {
            faction.founding_date = year;
        }
        self
    }

    /// Sets the border growth rate in light years per year.
    pub fn expansion_rate(&mut self, rate: f64) -> &mut Self {
        if let Some(faction) = self.faction.as_mut() {
            faction.expansion_rate = rate;
        }
        self
    }

    /// Sets the name of the armed forces.
    pub fn military_name(&mut self, name: impl Into<String>) -> &mut Self {
        if let Some(faction) = self.faction.as_mut() {
            faction.military_name = name.into();
        }
        self
    }

    /// Sets the name of the police.
    pub fn police_name(&mut self, name: impl Into<String>) -> &mut Self {
        if let Some(faction) = self.faction.as_mut() {
            faction.police_name = name.into();
        }
        self
    }

    /// Sets the probability (0-100) that a commodity is illegal.
    ///
    /// Unknown items, non-commodities and probabilities outside 0-100 are
    /// warnings.
    pub fn illegal_goods_probability(&mut self, item: &str, probability: i64) -> &mut Self {
        let faction = self.name.clone();
        let Some(equip) = EquipType::from_name(item) else {
            return self.warn(FactionError::UnknownCommodity {
                faction,
                item: item.to_owned(),
                probability,
            });
        };
        if !equip.is_commodity() {
            return self.warn(FactionError::CommodityOutOfRange {
                faction,
                item: item.to_owned(),
                probability,
            });
        }
        let Some(percent) = u32::try_from(probability).ok().filter(|p| *p <= 100) else {
            return self.warn(FactionError::ProbabilityOutOfRange {
                faction,
                item: item.to_owned(),
                probability,
            });
        };
        if let Some(target) = self.faction.as_mut() {
            target.illegal_goods.insert(equip, percent);
        }
        self
    }

    /// Sets the map colour.
    pub fn colour(&mut self, r: f32, g: f32, b: f32) -> &mut Self {
        if let Some(faction) = self.faction.as_mut() {
            faction.colour = Color::rgb(r, g, b);
        }
        self
    }

    /// Hands the faction to `registry`.
    ///
    /// # Errors
    ///
    /// Returns `FactionError::AlreadyRegistered` if this builder was already
    /// added.
    pub fn add_to_factions(&mut self, registry: &mut FactionRegistry) -> FactionResult<Registration> {
        if self.skip {
            warn!(faction = %self.name, "invalid homeworld, skipped");
            return Ok(Registration::Skipped);
        }
        let Some(faction) = self.faction.take() else {
            return Err(FactionError::AlreadyRegistered(self.name.clone()));
        };

        match faction.homeworld {
            Some(home) => info!(
                faction = %faction.name,
                homeworld = %home,
                founded = faction.founding_date,
                expansion = faction.expansion_rate,
                "added faction"
            ),
            None => info!(faction = %faction.name, "added faction"),
        }
        Ok(Registration::Added(registry.push(faction)))
    }

    fn resolve_homeworld(
        universe: &Universe,
        sector: [i64; 3],
        system_index: i64,
        body_index: i64,
    ) -> Option<SystemPath> {
        let [x, y, z] = sector.map(i32::try_from);
        let (x, y, z) = (x.ok()?, y.ok()?, z.ok()?);
        let body_index = u32::try_from(body_index).ok()?;

        let system_index = u32::try_from(system_index.max(0)).ok()?;
        let sector = Sector::new(universe, x, y, z);
        if sector.system(system_index as usize).is_none() {
            return None;
        }
        Some(SystemPath::new(x, y, z, system_index, body_index))
    }

    fn warn(&mut self, warning: FactionError) -> &mut Self {
        warn!(faction = %self.name, "{warning}");
        self.warnings.push(warning);
        self
    }
}
