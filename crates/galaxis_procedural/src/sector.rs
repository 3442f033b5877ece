//! # Sector Generation
//!
//! A sector is an 8 ly cube at integer coordinates. Its system list is a pure
//! function of the coordinates and the universe seed.
//!
//! ## Slot Order
//!
//! 1. Custom systems registered for the sector, in catalog order.
//! 2. Procedural systems, drawn from a [`XorshiftRand`] seeded with
//!    `[x, y, z, universe_seed]`.
//!
//! ## Draw Order (per procedural system)
//!
//! star count, position (x, y, z), seed, primary class, companions, giant
//! promotion, name. Changing this order changes every sector in the galaxy.

use std::sync::Arc;

use galaxis_core::{Fixed, SeededRng, SystemPath, XorshiftRand};
use tracing::debug;

use crate::custom_system::{CustomSystem, MAX_STARS};
use crate::galaxy::sector_density;
use crate::star_type::{BodyType, GiantTier};
use crate::universe::Universe;

/// Sector edge length in light years.
pub const SECTOR_SIZE: f32 = 8.0;

/// Index of a registered faction.
pub type FactionIndex = u32;

/// Resolves the owning faction of a sector system.
///
/// Implemented by the faction registry; kept here so sectors can be labelled
/// without depending on it.
pub trait FactionResolver {
    /// Returns the faction owning system `system_index` of `sector`, if any.
    fn nearest_faction(&self, sector: &Sector, system_index: usize) -> Option<FactionIndex>;
}

/// Syllables for generated proper names.
const NAME_FRAGMENTS: [&str; 32] = [
    "en", "la", "can", "be", "and", "phi", "eth", "ol", "ve", "ho", "a", "lia", "an", "ar", "ur",
    "mi", "in", "ti", "qu", "so", "ed", "ess", "ex", "io", "ce", "ze", "fa", "ay", "wa", "da",
    "ack", "gre",
];

/// Cumulative spectral-class frequencies per million systems.
const PRIMARY_FREQUENCIES: [(f64, BodyType); 8] = [
    (1.0, BodyType::StarO),
    (1_300.0, BodyType::StarB),
    (7_300.0, BodyType::StarA),
    (37_300.0, BodyType::StarF),
    (113_300.0, BodyType::StarG),
    (234_300.0, BodyType::StarK),
    (250_000.0, BodyType::WhiteDwarf),
    (900_000.0, BodyType::StarM),
];

/// One system slot in a sector.
#[derive(Clone, Debug, PartialEq)]
pub struct SectorSystem {
    /// Display name.
    pub name: String,
    /// Offset within the sector, light years.
    pub position: [f32; 3],
    /// Number of stars (1-4).
    pub num_stars: usize,
    /// Coarse star types, primary first; unused slots hold `Gravpoint`.
    pub star_types: [BodyType; MAX_STARS],
    /// Seed for body generation.
    pub seed: u32,
    /// Authored override, if this slot is a custom system.
    pub custom: Option<Arc<CustomSystem>>,
    /// Owning faction, set by [`Sector::assign_factions`].
    pub faction: Option<FactionIndex>,
    /// Population estimate in billions, when known.
    pub population: Option<Fixed>,
    /// Coordinates of the sector holding this system.
    pub sector: [i32; 3],
}

impl SectorSystem {
    /// Absolute position in light years.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn full_position(&self) -> [f32; 3] {
        std::array::from_fn(|axis| SECTOR_SIZE * self.sector[axis] as f32 + self.position[axis])
    }

    /// Returns the primary star type.
    #[inline]
    #[must_use]
    pub const fn primary(&self) -> BodyType {
        self.star_types[0]
    }

    /// Star types actually present.
    #[inline]
    #[must_use]
    pub fn stars(&self) -> &[BodyType] {
        &self.star_types[..self.num_stars]
    }
}

/// The systems of one sector.
#[derive(Clone, Debug, PartialEq)]
pub struct Sector {
    /// Sector coordinates.
    coords: [i32; 3],
    /// Systems in slot order.
    systems: Vec<SectorSystem>,
}

impl Sector {
    /// Generates the sector at `(x, y, z)`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use galaxis_procedural::{Sector, Universe, UniverseConfig};
    ///
    /// let universe = Universe::new(UniverseConfig::default());
    /// let a = Sector::new(&universe, 1, 2, 0);
    /// let b = Sector::new(&universe, 1, 2, 0);
    /// assert_eq!(a, b);
    /// ```
    #[must_use]
    pub fn new(universe: &Universe, x: i32, y: i32, z: i32) -> Self {
        let mut sector = Self {
            coords: [x, y, z],
            systems: Vec::new(),
        };
        sector.add_custom_systems(universe);
        sector.add_procedural_systems(universe);
        debug!(
            x,
            y,
            z,
            systems = sector.systems.len(),
            "generated sector"
        );
        sector
    }

    fn add_custom_systems(&mut self, universe: &Universe) {
        let [x, y, z] = self.coords;
        for custom in universe.customs().in_sector(x, y, z) {
            let mut star_types = [BodyType::Gravpoint; MAX_STARS];
            star_types[..custom.num_stars()].copy_from_slice(&custom.star_types);
            self.systems.push(SectorSystem {
                name: custom.name.clone(),
                position: custom.position.map(|fraction| fraction * SECTOR_SIZE),
                num_stars: custom.num_stars(),
                star_types,
                seed: custom.seed,
                custom: Some(Arc::clone(custom)),
                faction: None,
                population: custom.population,
                sector: self.coords,
            });
        }
    }

    fn add_procedural_systems(&mut self, universe: &Universe) {
        let [x, y, z] = self.coords;
        #[allow(clippy::cast_possible_wrap)]
        let mut rng = XorshiftRand::from_sector_seed([x, y, z, universe.seed() as i32]);

        let density = sector_density(x, y, z);
        #[allow(clippy::cast_sign_loss)]
        let count = (rng.int32_range(4, 20) as u32 * density) >> 8;

        for _ in 0..count {
            let num_stars = match rng.int32_below(15) {
                0 => 4,
                1 | 2 => 3,
                3..=6 => 2,
                _ => 1,
            };

            #[allow(clippy::cast_possible_truncation)]
            let position: [f32; 3] =
                std::array::from_fn(|_| rng.double_max(f64::from(SECTOR_SIZE)) as f32);
            let seed = rng.int32();

            let mut star_types = [BodyType::Gravpoint; MAX_STARS];
            star_types[0] = Self::roll_primary(&mut rng);
            if num_stars > 1 {
                star_types[1] = Self::roll_companion(&mut rng, star_types[0]);
            }
            if num_stars > 2 {
                star_types[2] = Self::roll_companion(&mut rng, star_types[0]);
            }
            if num_stars > 3 {
                star_types[3] = Self::roll_companion(&mut rng, star_types[2]);
            }
            if star_types[0].can_become_giant() && rng.int32_below(10) == 0 {
                let tier = match rng.int32_below(1000) {
                    0 => GiantTier::HyperGiant,
                    1..=9 => GiantTier::SuperGiant,
                    _ => GiantTier::Giant,
                };
                star_types[0] = star_types[0].promoted(tier);
            }

            let mut system = SectorSystem {
                name: String::new(),
                position,
                num_stars,
                star_types,
                seed,
                custom: None,
                faction: None,
                population: None,
                sector: self.coords,
            };
            system.name = self.generate_name(&system, self.systems.len(), &mut rng);
            self.systems.push(system);
        }
    }

    fn roll_primary(rng: &mut XorshiftRand) -> BodyType {
        let roll = rng.double_max(1_000_000.0);
        PRIMARY_FREQUENCIES
            .iter()
            .find(|(threshold, _)| roll < *threshold)
            .map_or(BodyType::BrownDwarf, |(_, kind)| *kind)
    }

    /// Companion no hotter than `bound`.
    fn roll_companion(rng: &mut XorshiftRand, bound: BodyType) -> BodyType {
        let ordinal = rng.int32_range(BodyType::STAR_MIN.ordinal(), bound.ordinal());
        BodyType::from_ordinal(ordinal).unwrap_or(BodyType::STAR_MIN)
    }

    #[allow(clippy::cast_possible_wrap, clippy::cast_possible_truncation)]
    fn generate_name(&self, system: &SectorSystem, index: usize, rng: &mut XorshiftRand) -> String {
        let [x, y, z] = self.coords;
        let dist = x.unsigned_abs().max(y.unsigned_abs()).max(z.unsigned_abs());
        let mut chance = 100 + dist.min(5000) * 8;
        if system.primary().is_bright() {
            chance /= 2;
        }

        if rng.int32_below(chance as i32) < 500 {
            let fragments = 2 + rng.int32_below(2);
            let mut name = String::new();
            for _ in 0..fragments {
                let pick = rng.int32_below(NAME_FRAGMENTS.len() as i32) as usize;
                name.push_str(NAME_FRAGMENTS[pick]);
            }
            capitalise(&name)
        } else if chance < 800 {
            format!("MJBN {index}{x:+}{y:+}{z:+}")
        } else {
            format!("SC {index}{x:+}{y:+}{z:+}")
        }
    }

    /// Sector X coordinate.
    #[inline]
    #[must_use]
    pub const fn x(&self) -> i32 {
        self.coords[0]
    }

    /// Sector Y coordinate.
    #[inline]
    #[must_use]
    pub const fn y(&self) -> i32 {
        self.coords[1]
    }

    /// Sector Z coordinate.
    #[inline]
    #[must_use]
    pub const fn z(&self) -> i32 {
        self.coords[2]
    }

    /// Sector coordinates.
    #[inline]
    #[must_use]
    pub const fn coords(&self) -> [i32; 3] {
        self.coords
    }

    /// Systems in slot order.
    #[inline]
    #[must_use]
    pub fn systems(&self) -> &[SectorSystem] {
        &self.systems
    }

    /// Returns the system in slot `index`, if present.
    #[inline]
    #[must_use]
    pub fn system(&self, index: usize) -> Option<&SectorSystem> {
        self.systems.get(index)
    }

    /// Number of systems.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.systems.len()
    }

    /// Returns true if the sector holds no systems.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.systems.is_empty()
    }

    /// Returns true if the sector lies inside the box (inclusive on every
    /// axis).
    #[must_use]
    pub const fn within_box(
        &self,
        x_min: i32,
        x_max: i32,
        y_min: i32,
        y_max: i32,
        z_min: i32,
        z_max: i32,
    ) -> bool {
        let [x, y, z] = self.coords;
        x >= x_min && x <= x_max && y >= y_min && y <= y_max && z >= z_min && z <= z_max
    }

    /// Returns true if `path` addresses this sector.
    #[inline]
    #[must_use]
    pub const fn contains(&self, path: SystemPath) -> bool {
        let [x, y, z] = self.coords;
        path.sector_x == x && path.sector_y == y && path.sector_z == z
    }

    /// Distance in light years between two sector systems.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of range for its sector.
    #[must_use]
    pub fn distance_between(a: &Self, index_a: usize, b: &Self, index_b: usize) -> f32 {
        let sys_a = &a.systems[index_a];
        let sys_b = &b.systems[index_b];
        let squared: f32 = (0..3)
            .map(|axis| {
                let sector_delta = i64::from(a.coords[axis]) - i64::from(b.coords[axis]);
                #[allow(clippy::cast_precision_loss)]
                let delta = sector_delta as f32 * SECTOR_SIZE
                    + (sys_a.position[axis] - sys_b.position[axis]);
                delta * delta
            })
            .sum();
        squared.sqrt()
    }

    /// Labels every system with its owning faction.
    pub fn assign_factions(&mut self, resolver: &dyn FactionResolver) {
        let labels: Vec<Option<FactionIndex>> = (0..self.systems.len())
            .map(|index| resolver.nearest_faction(self, index))
            .collect();
        for (system, faction) in self.systems.iter_mut().zip(labels) {
            system.faction = faction;
        }
    }
}

fn capitalise(name: &str) -> String {
    let mut chars = name.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::custom_system::CustomSystemCatalog;
    use crate::universe::UniverseConfig;

    fn universe() -> Universe {
        Universe::new(UniverseConfig::default())
    }

    #[test]
    fn test_sector_is_deterministic() {
        let universe = universe();
        for (x, y, z) in [(0, 0, 0), (3, -4, 1), (-20, 11, -2)] {
            assert_eq!(Sector::new(&universe, x, y, z), Sector::new(&universe, x, y, z));
        }
    }

    #[test]
    fn test_universe_seed_changes_output() {
        let a = Sector::new(&universe(), 5, 5, 0);
        let b = Sector::new(
            &Universe::new(UniverseConfig {
                seed: 1,
                ..UniverseConfig::default()
            }),
            5,
            5,
            0,
        );
        assert_ne!(a, b);
    }

    #[test]
    fn test_system_invariants() {
        let universe = universe();
        let mut seen = 0;
        for x in -3..3 {
            for y in -3..3 {
                let sector = Sector::new(&universe, x, y, 0);
                for system in sector.systems() {
                    seen += 1;
                    assert!((1..=4).contains(&system.num_stars));
                    assert!(system.stars().iter().all(|kind| kind.is_star()));
                    assert!(system.star_types[system.num_stars..]
                        .iter()
                        .all(|kind| *kind == BodyType::Gravpoint));
                    for axis in 0..3 {
                        assert!((0.0..=SECTOR_SIZE).contains(&system.position[axis]));
                    }
                    assert!(!system.name.is_empty());
                    assert_eq!(system.sector, [x, y, 0]);
                    assert!(system.faction.is_none());
                }
            }
        }
        assert!(seen > 0, "no systems generated around the origin");
    }

    #[test]
    fn test_companions_do_not_outrank_primary() {
        let universe = universe();
        for x in 0..8 {
            let sector = Sector::new(&universe, x, 0, 0);
            for system in sector.systems() {
                let stars = system.stars();
                if stars.len() > 1 && !stars[0].can_become_giant() {
                    assert!(stars[1..].iter().all(|kind| *kind <= stars[0]));
                }
                if stars.len() == 4 {
                    assert!(stars[3] <= stars[2]);
                }
            }
        }
    }

    #[test]
    fn test_empty_outside_disc() {
        let sector = Sector::new(&universe(), 0, 0, 400);
        assert!(sector.is_empty());
        assert!(sector.system(0).is_none());
    }

    #[test]
    fn test_custom_systems_come_first() {
        let mut catalog = CustomSystemCatalog::new();
        catalog.add(
            CustomSystem::new("Sol", [0, 0, 0], vec![BodyType::StarG])
                .unwrap()
                .with_position([0.5, 0.25, 0.0])
                .unwrap()
                .with_population(Fixed::from_int(17)),
        );
        let universe = Universe::with_customs(UniverseConfig::default(), catalog);
        let sector = Sector::new(&universe, 0, 0, 0);
        let plain = Sector::new(&self::universe(), 0, 0, 0);

        let sol = sector.system(0).unwrap();
        assert_eq!(sol.name, "Sol");
        assert_eq!(sol.position, [4.0, 2.0, 0.0]);
        assert_eq!(sol.stars(), &[BodyType::StarG]);
        assert!(sol.custom.is_some());
        assert_eq!(sol.population, Some(Fixed::from_int(17)));
        assert_eq!(sector.len(), plain.len() + 1);
        assert_eq!(sector.systems()[1..], plain.systems()[..]);
    }

    #[test]
    fn test_within_box_and_contains() {
        let sector = Sector::new(&universe(), 2, -1, 0);
        assert!(sector.within_box(2, 2, -1, -1, 0, 0));
        assert!(sector.within_box(-5, 5, -5, 5, -5, 5));
        assert!(!sector.within_box(3, 5, -5, 5, -5, 5));
        assert!(sector.contains(SystemPath::new(2, -1, 0, 9, 3)));
        assert!(!sector.contains(SystemPath::new(2, -1, 1, 0, 0)));
    }

    #[test]
    fn test_distance_between() {
        let universe = universe();
        let a = Sector::new(&universe, 0, 0, 0);
        let b = Sector::new(&universe, 1, 0, 0);
        assert!(!a.is_empty() && !b.is_empty());

        assert!(Sector::distance_between(&a, 0, &a, 0).abs() < f32::EPSILON);
        let ab = Sector::distance_between(&a, 0, &b, 0);
        let ba = Sector::distance_between(&b, 0, &a, 0);
        assert!((ab - ba).abs() < 1e-4);

        let pa = a.systems()[0].full_position();
        let pb = b.systems()[0].full_position();
        let direct = (0..3)
            .map(|axis| (pa[axis] - pb[axis]).powi(2))
            .sum::<f32>()
            .sqrt();
        assert!((ab - direct).abs() < 1e-3);
    }

    #[test]
    #[should_panic]
    fn test_distance_between_rejects_bad_index() {
        let sector = Sector::new(&universe(), 0, 0, 0);
        let _ = Sector::distance_between(&sector, sector.len(), &sector, 0);
    }

    struct EvenSlots;

    impl FactionResolver for EvenSlots {
        fn nearest_faction(&self, _sector: &Sector, system_index: usize) -> Option<FactionIndex> {
            (system_index % 2 == 0).then_some(7)
        }
    }

    #[test]
    fn test_assign_factions() {
        let mut sector = Sector::new(&universe(), 0, 0, 0);
        sector.assign_factions(&EvenSlots);
        for (index, system) in sector.systems().iter().enumerate() {
            assert_eq!(system.faction, (index % 2 == 0).then_some(7));
        }
    }

    #[test]
    fn test_names_near_origin_are_proper() {
        let sector = Sector::new(&universe(), 0, 0, 0);
        for system in sector.systems() {
            let first = system.name.chars().next().unwrap();
            assert!(first.is_uppercase());
            assert!(!system.name.contains(' '), "{}", system.name);
        }
    }

    #[test]
    fn test_far_names_are_catalogue_designations() {
        let sector = Sector::new(&universe(), 3000, 0, 0);
        let catalogued = sector
            .systems()
            .iter()
            .filter(|system| system.name.starts_with("SC "))
            .count();
        assert!(catalogued * 2 > sector.len());
    }

    #[test]
    fn test_capitalise() {
        assert_eq!(capitalise("lia"), "Lia");
        assert_eq!(capitalise(""), "");
    }
}
