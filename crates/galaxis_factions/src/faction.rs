//! # Factions
//!
//! A faction claims every system within its border radius of its homeworld.
//! The radius grows linearly from the founding date:
//!
//! ```text
//! radius = (current_year - founding_date) * expansion_rate    (light years)
//! ```
//!
//! A faction without a homeworld has an unbounded border but the weakest
//! possible claim: any faction with a homeworld in range beats it.

use std::collections::HashMap;
use std::sync::Arc;

use galaxis_core::{SeededRng, SystemPath};
use galaxis_procedural::{Sector, Universe};
use parking_lot::{RwLock, RwLockUpgradableReadGuard};

use crate::equip::EquipType;
use crate::polit::GovType;

/// RGBA display colour, components in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    /// Red.
    pub r: f32,
    /// Green.
    pub g: f32,
    /// Blue.
    pub b: f32,
    /// Alpha.
    pub a: f32,
}

impl Color {
    /// Colour of unclaimed space.
    pub const NEUTRAL: Self = Self::new(0.8, 0.8, 0.8, 0.5);

    /// Opaque white.
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);

    /// Creates a colour.
    #[inline]
    #[must_use]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Creates an opaque colour.
    #[inline]
    #[must_use]
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::new(r, g, b, 1.0)
    }

    /// Same colour with a different alpha.
    #[inline]
    #[must_use]
    pub const fn with_alpha(self, a: f32) -> Self {
        Self::new(self.r, self.g, self.b, a)
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

/// A political faction.
///
/// Built through [`FactionBuilder`](crate::FactionBuilder) and owned by the
/// [`FactionRegistry`](crate::FactionRegistry).
#[derive(Debug)]
pub struct Faction {
    /// Unique display name.
    pub name: String,
    /// One-line description.
    pub description_short: String,
    /// Full description.
    pub description: String,
    /// Home system, if the faction has one.
    pub homeworld: Option<SystemPath>,
    /// Year the faction was founded.
    pub founding_date: f64,
    /// Border growth, light years per year.
    pub expansion_rate: f64,
    /// Government weights, in declaration order.
    pub govtype_weights: Vec<(GovType, i32)>,
    /// Sum of `govtype_weights`.
    pub govtype_weights_total: i32,
    /// Probability (0-100) that a commodity is illegal.
    pub illegal_goods: HashMap<EquipType, u32>,
    /// Name of the armed forces.
    pub military_name: String,
    /// Name of the police.
    pub police_name: String,
    /// Map colour.
    pub colour: Color,
    /// Homeworld sector, generated on first use.
    home_sector: RwLock<Option<Arc<Sector>>>,
}

impl Faction {
    /// Creates a faction with no homeworld and no weights.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description_short: String::new(),
            description: String::new(),
            homeworld: None,
            founding_date: 0.0,
            expansion_rate: 0.0,
            govtype_weights: Vec::new(),
            govtype_weights_total: 0,
            illegal_goods: HashMap::new(),
            military_name: String::new(),
            police_name: String::new(),
            colour: Color::default(),
            home_sector: RwLock::new(None),
        }
    }

    /// Border radius in light years at `current_year`.
    #[inline]
    #[must_use]
    pub fn radius(&self, current_year: f64) -> f64 {
        (current_year - self.founding_date) * self.expansion_rate
    }

    /// Homeworld sector, generated once and shared afterwards.
    #[must_use]
    pub fn home_sector(&self, universe: &Universe) -> Option<Arc<Sector>> {
        let home = self.homeworld?;
        if let Some(sector) = self.home_sector.read().as_ref() {
            return Some(Arc::clone(sector));
        }

        // only one upgradable reader at a time, so the sector is built once
        let guard = self.home_sector.upgradable_read();
        if let Some(sector) = guard.as_ref() {
            return Some(Arc::clone(sector));
        }
        let sector = Arc::new(Sector::new(
            universe,
            home.sector_x,
            home.sector_y,
            home.sector_z,
        ));
        let mut guard = RwLockUpgradableReadGuard::upgrade(guard);
        *guard = Some(Arc::clone(&sector));
        Some(sector)
    }

    /// Returns true if the home sector has been generated.
    #[must_use]
    pub fn is_home_sector_cached(&self) -> bool {
        self.home_sector.read().is_some()
    }

    /// Tests whether this faction claims system `index` of `sector` more
    /// strongly than the best claim so far.
    ///
    /// `closest` holds the distance of the best claim; it is lowered when this
    /// faction wins. Systems in the homeworld's own sector are claimed at
    /// distance zero.
    pub fn is_closer_and_contains(
        &self,
        universe: &Universe,
        closest: &mut f64,
        sector: &Sector,
        index: usize,
    ) -> bool {
        let (distance, inside) = match self.homeworld {
            None => (f64::INFINITY, true),
            Some(home) if sector.contains(home) => (0.0, true),
            Some(home) => {
                let Some(home_sector) = self.home_sector(universe) else {
                    return false;
                };
                let home_index = home.system_index as usize;
                if home_index >= home_sector.len() || index >= sector.len() {
                    return false;
                }
                let distance = f64::from(Sector::distance_between(
                    &home_sector,
                    home_index,
                    sector,
                    index,
                ));
                (distance, distance < self.radius(universe.current_year()))
            }
        };

        if inside && distance <= *closest {
            *closest = distance;
            true
        } else {
            false
        }
    }

    /// Picks a government type by weight.
    ///
    /// Rolls in `[1, total]` and returns the first type whose cumulative
    /// weight reaches the roll. Returns `GovType::Invalid` when the faction
    /// has no positive weights.
    pub fn pick_gov_type<R: SeededRng + ?Sized>(&self, rng: &mut R) -> GovType {
        if self.govtype_weights.is_empty() || self.govtype_weights_total <= 0 {
            return GovType::Invalid;
        }
        let roll = rng.int32_range(1, self.govtype_weights_total);
        let mut cumulative = 0;
        for (gov, weight) in &self.govtype_weights {
            cumulative += weight;
            if roll <= cumulative {
                return *gov;
            }
        }
        GovType::Invalid
    }

    /// Probability (0-100) that `item` is illegal here.
    #[must_use]
    pub fn illegal_goods_probability(&self, item: EquipType) -> u32 {
        self.illegal_goods.get(&item).copied().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use galaxis_core::BodyRng;
    use galaxis_procedural::UniverseConfig;

    fn universe() -> Universe {
        Universe::new(UniverseConfig::default())
    }

    #[test]
    fn test_radius_grows_with_time() {
        let mut faction = Faction::new("Federation");
        faction.founding_date = 3000.0;
        faction.expansion_rate = 2.0;
        assert!((faction.radius(3200.0) - 400.0).abs() < f64::EPSILON);
        assert!(faction.radius(3000.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_no_homeworld_claims_only_unclaimed() {
        let universe = universe();
        let sector = Sector::new(&universe, 0, 0, 0);
        let nomads = Faction::new("Nomads");

        let mut closest = f64::INFINITY;
        assert!(nomads.is_closer_and_contains(&universe, &mut closest, &sector, 0));
        assert!(closest.is_infinite());

        let mut closest = 12.0;
        assert!(!nomads.is_closer_and_contains(&universe, &mut closest, &sector, 0));
        assert!((closest - 12.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_same_sector_claims_at_zero() {
        let universe = universe();
        let sector = Sector::new(&universe, 0, 0, 0);
        let mut faction = Faction::new("Locals");
        faction.homeworld = Some(SystemPath::new(0, 0, 0, 0, 0));

        let mut closest = f64::INFINITY;
        assert!(faction.is_closer_and_contains(&universe, &mut closest, &sector, 1));
        assert!(closest.abs() < f64::EPSILON);
        // same-sector claims never need the home sector
        assert!(!faction.is_home_sector_cached());
    }

    #[test]
    fn test_border_limits_claim() {
        let universe = universe();
        let target = Sector::new(&universe, 3, 0, 0);
        let mut faction = Faction::new("Small");
        faction.homeworld = Some(SystemPath::new(0, 0, 0, 0, 0));
        faction.founding_date = 3199.0;
        faction.expansion_rate = 1.0;

        let mut closest = f64::INFINITY;
        assert!(!faction.is_closer_and_contains(&universe, &mut closest, &target, 0));
        assert!(faction.is_home_sector_cached());

        faction.expansion_rate = 100.0;
        assert!(faction.is_closer_and_contains(&universe, &mut closest, &target, 0));
        assert!(closest > 8.0 && closest < 40.0, "distance {closest}");
    }

    #[test]
    fn test_home_sector_is_shared() {
        let universe = universe();
        let mut faction = Faction::new("Cached");
        faction.homeworld = Some(SystemPath::new(2, 2, 0, 0, 0));
        let first = faction.home_sector(&universe).unwrap();
        let second = faction.home_sector(&universe).unwrap();
        assert!(Arc::ptr_eq(&first, &second));
        assert!(Faction::new("Homeless").home_sector(&universe).is_none());
    }

    #[test]
    fn test_pick_gov_type_without_weights() {
        let mut rng = BodyRng::from_key([0; 6]);
        assert_eq!(Faction::new("Empty").pick_gov_type(&mut rng), GovType::Invalid);
    }

    #[test]
    fn test_pick_gov_type_single_weight() {
        let mut faction = Faction::new("Corp");
        faction.govtype_weights = vec![(GovType::Corporate, 5)];
        faction.govtype_weights_total = 5;
        let mut rng = BodyRng::from_key([1; 6]);
        for _ in 0..50 {
            assert_eq!(faction.pick_gov_type(&mut rng), GovType::Corporate);
        }
    }

    #[test]
    fn test_zero_weight_never_picked() {
        let mut faction = Faction::new("Zeroes");
        faction.govtype_weights = vec![(GovType::Communist, 0), (GovType::LibDem, 3)];
        faction.govtype_weights_total = 3;
        let mut rng = BodyRng::from_key([2; 6]);
        for _ in 0..200 {
            assert_eq!(faction.pick_gov_type(&mut rng), GovType::LibDem);
        }
    }

    #[test]
    fn test_colour_alpha() {
        let colour = Color::rgb(0.2, 0.4, 0.6).with_alpha(0.3);
        assert!((colour.a - 0.3).abs() < f32::EPSILON);
        assert!((colour.g - 0.4).abs() < f32::EPSILON);
        assert!((Color::NEUTRAL.a - 0.5).abs() < f32::EPSILON);
    }
}
