//! # System Generator
//!
//! Builds the star hierarchy of one sector system.
//!
//! ## Pipeline
//!
//! ```text
//! SystemPath ──► Sector ──► SectorSystem (star types, seed)
//!                               │
//!                               ▼
//!                  BodyRng {index, x, y, z, universe seed, system seed}
//!                               │
//!             unexplored? ──► stars ──► binary pairs ──► SystemBodyTree
//! ```
//!
//! Draw order is fixed: exploration status first, then stars in slot order,
//! each followed by the pairings that consume it.
//!
//! ## Star Layouts
//!
//! | stars | tree                          |
//! |-------|-------------------------------|
//! | 1     | `A`                           |
//! | 2     | `(A, B)`                      |
//! | 3     | `((A, B), C)`                 |
//! | 4     | `((A, B), (C, D))`            |

use std::f64::consts::{FRAC_PI_2, PI};

use galaxis_core::{BodyRng, Fixed, GalaxyError, GalaxyResult, SeededRng, SystemPath};
use tracing::{debug, trace};

use crate::galaxy::isqrt;
use crate::sector::{Sector, SectorSystem};
use crate::star_type::BodyType;
use crate::system_body::{BodyId, SystemBody, SystemBodyTree};
use crate::universe::Universe;

/// Metres per astronomical unit.
pub const AU: f64 = 149_598_000_000.0;

/// Seconds per 365-day year.
pub const SECONDS_PER_YEAR: f64 = 31_536_000.0;

/// One solar radius in AU.
pub const AU_SOL_RADIUS: Fixed = Fixed::from_ratio(305, 65_536);

/// Widest separation allowed for an orbit-limited inner pair, AU.
pub const INNER_PAIR_LIMIT: Fixed = Fixed::from_int(100);

/// Counters for retry loops that hit their fallback path.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GenerationStats {
    /// Companions left heavier than their bound after every redraw.
    pub lighter_star_fallbacks: u32,
    /// Inner-pair orbits re-rolled for exceeding the separation limit.
    pub orbit_rerolls: u32,
}

/// A fully generated system.
#[derive(Clone, Debug, PartialEq)]
pub struct GeneratedSystem {
    /// Path of the system.
    pub path: SystemPath,
    /// System name.
    pub name: String,
    /// Whether the system lies outside explored space.
    pub unexplored: bool,
    /// Root body of the hierarchy.
    pub root: BodyId,
    /// All bodies.
    pub bodies: SystemBodyTree,
    /// Retry counters.
    pub stats: GenerationStats,
}

impl GeneratedSystem {
    /// Root body.
    #[must_use]
    pub fn root_body(&self) -> &SystemBody {
        &self.bodies[self.root]
    }

    /// Number of stars.
    #[must_use]
    pub fn star_count(&self) -> usize {
        self.bodies.stars().count()
    }
}

/// Generates one system from its path.
///
/// # Example
///
/// ```rust
/// use galaxis_core::SystemPath;
/// use galaxis_procedural::{SystemGenerator, Universe, UniverseConfig};
///
/// let universe = Universe::new(UniverseConfig::default());
/// let system = SystemGenerator::new(&universe, SystemPath::system(0, 0, 0, 0))?
///     .generate()?;
/// assert!(system.star_count() >= 1);
/// # Ok::<(), galaxis_core::GalaxyError>(())
/// ```
#[derive(Debug)]
pub struct SystemGenerator<'u> {
    universe: &'u Universe,
    path: SystemPath,
    system: SectorSystem,
    rng: BodyRng,
    stats: GenerationStats,
}

impl<'u> SystemGenerator<'u> {
    /// Generates the sector of `path` and selects the addressed system.
    ///
    /// # Errors
    ///
    /// Returns `GalaxyError::SystemIndexOutOfRange` if the sector has no
    /// system at `path.system_index`.
    pub fn new(universe: &'u Universe, path: SystemPath) -> GalaxyResult<Self> {
        let sector = Sector::new(universe, path.sector_x, path.sector_y, path.sector_z);
        Self::from_sector(universe, &sector, path.system_index as usize)
    }

    /// Selects a system of an already generated sector.
    ///
    /// # Errors
    ///
    /// Returns `GalaxyError::SystemIndexOutOfRange` if `index` is not a slot
    /// of `sector`.
    pub fn from_sector(universe: &'u Universe, sector: &Sector, index: usize) -> GalaxyResult<Self> {
        #[allow(clippy::cast_possible_truncation)]
        let path = SystemPath::system(sector.x(), sector.y(), sector.z(), index as u32);
        let system = sector
            .system(index)
            .cloned()
            .ok_or(GalaxyError::SystemIndexOutOfRange {
                path,
                count: sector.len(),
            })?;
        Ok(Self::from_system(universe, path, system))
    }

    /// Uses a caller-supplied system summary for `path`.
    #[must_use]
    pub fn from_system(universe: &'u Universe, path: SystemPath, system: SectorSystem) -> Self {
        #[allow(clippy::cast_sign_loss)]
        let key = [
            path.system_index,
            path.sector_x as u32,
            path.sector_y as u32,
            path.sector_z as u32,
            universe.seed(),
            system.seed,
        ];
        Self {
            universe,
            path,
            system,
            rng: BodyRng::from_key(key),
            stats: GenerationStats::default(),
        }
    }

    /// System name.
    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.system.name
    }

    /// Path of the system.
    #[inline]
    #[must_use]
    pub const fn path(&self) -> SystemPath {
        self.path
    }

    /// Decides exploration status.
    ///
    /// Authored systems keep their flag unless they ask for a random one.
    /// Otherwise everything within 65 sectors is explored, everything beyond
    /// 90 is not, and the band in between is rolled.
    #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    pub fn unexplored(&mut self) -> bool {
        if let Some(custom) = &self.system.custom {
            if !custom.random_explored {
                return !custom.explored;
            }
        }
        let squared = [self.path.sector_x, self.path.sector_y, self.path.sector_z]
            .iter()
            .map(|c| {
                let c = u64::from(c.unsigned_abs());
                c * c
            })
            .fold(1u64, u64::wrapping_add);
        let dist = isqrt(squared);
        dist > 90 || (dist > 65 && self.rng.int32_below(dist as i32) > 40)
    }

    /// Runs the whole pipeline.
    ///
    /// # Errors
    ///
    /// Returns `GalaxyError::InvalidStarCount` if the system summary holds
    /// fewer than one or more than four stars.
    pub fn generate(mut self) -> GalaxyResult<GeneratedSystem> {
        let unexplored = self.unexplored();
        let mut bodies = SystemBodyTree::new();
        let root = self.add_stars_to(&mut bodies)?;

        debug!(
            path = %self.path,
            stars = self.system.num_stars,
            unexplored,
            "generated system"
        );

        Ok(GeneratedSystem {
            path: self.path,
            name: self.system.name,
            unexplored,
            root,
            bodies,
            stats: self.stats,
        })
    }

    /// Adds the system's stars and gravpoints to `bodies`, returning the
    /// root.
    ///
    /// # Errors
    ///
    /// Returns `GalaxyError::InvalidStarCount` for star counts outside 1-4.
    pub fn add_stars_to(&mut self, bodies: &mut SystemBodyTree) -> GalaxyResult<BodyId> {
        let name = self.system.name.clone();
        let types = self.system.star_types;

        let root = match self.system.num_stars {
            1 => self.add_star(bodies, name, types[0]),
            2 => {
                let a = self.add_star(bodies, format!("{name} A"), types[0]);
                let max = bodies[a].mass;
                let b = self.add_star_lighter_than(bodies, format!("{name} B"), types[1], max);
                self.add_grav_point(bodies, format!("{name} A,B"), a, b, false, None)
            }
            3 => {
                let a = self.add_star(bodies, format!("{name} A"), types[0]);
                let max = bodies[a].mass;
                let b = self.add_star_lighter_than(bodies, format!("{name} B"), types[1], max);
                let c = self.add_star_lighter_than(bodies, format!("{name} C"), types[2], max);
                let ab = self.add_grav_point(bodies, format!("{name} A,B"), a, b, true, None);
                let min_dist = (bodies[a].orb_max + bodies[c].orb_max) * 4;
                self.add_grav_point(bodies, name, ab, c, false, Some(min_dist))
            }
            4 => {
                let a = self.add_star(bodies, format!("{name} A"), types[0]);
                let max = bodies[a].mass;
                let b = self.add_star_lighter_than(bodies, format!("{name} B"), types[1], max);
                let c = self.add_star_lighter_than(bodies, format!("{name} C"), types[2], max);
                let max_d = bodies[c].mass;
                let d = self.add_star_lighter_than(bodies, format!("{name} D"), types[3], max_d);
                let ab = self.add_grav_point(bodies, format!("{name} A,B"), a, b, true, None);
                let cd = self.add_grav_point(bodies, format!("{name} C,D"), c, d, false, None);
                let min_dist = (bodies[a].orb_max + bodies[c].orb_max) * 4;
                self.add_grav_point(bodies, name, ab, cd, false, Some(min_dist))
            }
            count => return Err(GalaxyError::InvalidStarCount { name, count }),
        };
        Ok(root)
    }

    fn make_star(&mut self, body: &mut SystemBody) {
        let info = body.body_type.info();
        body.seed = self.rng.int32();
        body.radius = Fixed::from_ratio(
            i64::from(self.rng.int32_range(info.radius[0], info.radius[1])),
            100,
        );
        body.mass = Fixed::from_ratio(
            i64::from(self.rng.int32_range(info.mass[0], info.mass[1])),
            100,
        );
        body.average_temp = self.rng.int32_range(info.temp[0], info.temp[1]);
    }

    fn add_star(&mut self, bodies: &mut SystemBodyTree, name: String, kind: BodyType) -> BodyId {
        let mut star = SystemBody::new(name, kind);
        self.make_star(&mut star);
        bodies.add(star)
    }

    /// Redraws up to `lighter_star_attempts` times until the star is no
    /// heavier than `max_mass`; the last draw is kept either way.
    fn add_star_lighter_than(
        &mut self,
        bodies: &mut SystemBodyTree,
        name: String,
        kind: BodyType,
        max_mass: Fixed,
    ) -> BodyId {
        let mut star = SystemBody::new(name, kind);
        let mut tries = self.universe.config().lighter_star_attempts.max(1);
        loop {
            self.make_star(&mut star);
            tries -= 1;
            if star.mass <= max_mass || tries == 0 {
                break;
            }
        }
        if star.mass > max_mass {
            self.stats.lighter_star_fallbacks += 1;
            trace!(
                star = %star.name,
                mass = %star.mass,
                max = %max_mass,
                "companion heavier than primary after all attempts"
            );
        }
        bodies.add(star)
    }

    fn add_grav_point(
        &mut self,
        bodies: &mut SystemBodyTree,
        name: String,
        a: BodyId,
        b: BodyId,
        limit_orbit: bool,
        min_dist: Option<Fixed>,
    ) -> BodyId {
        let mut grav = SystemBody::new(name, BodyType::Gravpoint);
        grav.mass = bodies[a].mass + bodies[b].mass;
        let min_dist =
            min_dist.unwrap_or_else(|| (bodies[a].radius + bodies[b].radius) * AU_SOL_RADIUS);

        let grav = bodies.add(grav);
        bodies.attach(grav, a);
        bodies.attach(grav, b);

        while let Some((body_a, body_b)) = bodies.pair_mut(a, b) {
            make_binary_pair(&mut self.rng, body_a, body_b, min_dist);
            if !limit_orbit || body_a.orb_max <= INNER_PAIR_LIMIT {
                break;
            }
            self.stats.orbit_rerolls += 1;
            trace!(pair = %bodies[grav].name, "inner pair too wide, re-rolling");
        }
        grav
    }
}

/// Puts `a` and `b` on a shared binary orbit at least `min_dist` AU apart.
///
/// Both bodies receive the same eccentricity, separation, period and
/// `orb_min`/`orb_max`. Each body's metric semi-major axis is its share of
/// the separation, weighted by the other body's mass, so the heavier body
/// sits closer to the centre of mass.
pub fn make_binary_pair<R: SeededRng>(
    rng: &mut R,
    a: &mut SystemBody,
    b: &mut SystemBody,
    min_dist: Fixed,
) {
    let total = a.mass + b.mass;
    let share_a = b.mass / total;
    let share_b = a.mass / total;

    let eccentricity = rng.n_fixed(3);
    let mut mul: i64 = 1;
    let separation = loop {
        let percent = match rng.int32_below(3) {
            2 => rng.int32_range(100, 10_000),
            1 => rng.int32_range(10, 1000),
            _ => rng.int32_range(1, 100),
        };
        let candidate = Fixed::from_ratio(i64::from(percent), 100) * mul;
        mul *= 2;
        if candidate >= min_dist {
            break candidate;
        }
    };

    let sma = separation.to_f64();
    let period = SECONDS_PER_YEAR * sma * (sma / total.to_f64()).sqrt();
    let tilt = -FRAC_PI_2;
    let yaw = rng.double_max(PI);

    let orb_min = separation - eccentricity * separation;
    let orb_max = separation * 2 - orb_min;

    for (body, share, yaw) in [(&mut *a, share_a, yaw), (&mut *b, share_b, yaw - PI)] {
        body.eccentricity = eccentricity;
        body.semi_major_axis = separation;
        body.orb_min = orb_min;
        body.orb_max = orb_max;
        body.orbit.eccentricity = eccentricity.to_f64();
        body.orbit.semi_major_axis = AU * (separation * share).to_f64();
        body.orbit.period = period;
        body.orbit.rotation.tilt = tilt;
        body.orbit.rotation.yaw = yaw;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::custom_system::{CustomSystem, CustomSystemCatalog};
    use crate::universe::UniverseConfig;

    fn universe() -> Universe {
        Universe::new(UniverseConfig::default())
    }

    fn system_with_stars(universe: &Universe, stars: usize) -> Option<(Sector, usize)> {
        for x in 0..40 {
            let sector = Sector::new(universe, x, 0, 0);
            if let Some(index) = sector.systems().iter().position(|s| s.num_stars == stars) {
                return Some((sector, index));
            }
        }
        None
    }

    #[test]
    fn test_out_of_range_index() {
        let universe = universe();
        let sector = Sector::new(&universe, 0, 0, 0);
        let path = SystemPath::system(0, 0, 0, sector.len() as u32);
        let err = SystemGenerator::new(&universe, path).unwrap_err();
        assert_eq!(
            err,
            GalaxyError::SystemIndexOutOfRange {
                path,
                count: sector.len()
            }
        );
    }

    #[test]
    fn test_each_star_count_builds_expected_tree() {
        let universe = universe();
        for stars in 1..=4 {
            let (sector, index) = system_with_stars(&universe, stars)
                .unwrap_or_else(|| panic!("no {stars}-star system found"));
            let system = SystemGenerator::from_sector(&universe, &sector, index)
                .unwrap()
                .generate()
                .unwrap();

            assert_eq!(system.star_count(), stars);
            assert_eq!(system.bodies.gravpoints().count(), stars - 1);
            assert_eq!(system.bodies.len(), 2 * stars - 1);
            assert_eq!(system.bodies.parent(system.root), None);
            assert_eq!(system.root_body().name, system.name);
            for body in system.bodies.iter() {
                if body.body_type == BodyType::Gravpoint {
                    assert_eq!(body.children.len(), 2);
                } else {
                    assert!(body.children.is_empty());
                }
                if body.id != system.root {
                    assert!(body.parent.is_some(), "{} is detached", body.name);
                }
            }
        }
    }

    #[test]
    fn test_generation_is_deterministic() {
        let universe = universe();
        let path = SystemPath::system(2, 1, 0, 0);
        let a = SystemGenerator::new(&universe, path).unwrap().generate().unwrap();
        let b = SystemGenerator::new(&universe, path).unwrap().generate().unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_invalid_star_count() {
        let universe = universe();
        let sector = Sector::new(&universe, 0, 0, 0);
        let mut summary = sector.systems()[0].clone();
        summary.num_stars = 5;
        let name = summary.name.clone();
        let err = SystemGenerator::from_system(&universe, SystemPath::system(0, 0, 0, 0), summary)
            .generate()
            .unwrap_err();
        assert_eq!(err, GalaxyError::InvalidStarCount { name, count: 5 });
    }

    #[test]
    fn test_binary_pair_shares_orbit() {
        let mut rng = BodyRng::from_key([1, 2, 3, 4, 5, 6]);
        let mut a = SystemBody::new("A", BodyType::StarG);
        let mut b = SystemBody::new("B", BodyType::StarM);
        a.mass = Fixed::from_int(1);
        b.mass = Fixed::from_ratio(1, 4);
        let min_dist = Fixed::from_int(3);

        for _ in 0..200 {
            make_binary_pair(&mut rng, &mut a, &mut b, min_dist);
            assert!(a.semi_major_axis >= min_dist);
            assert!(a.eccentricity >= Fixed::ZERO && a.eccentricity < Fixed::ONE);
            assert_eq!(a.semi_major_axis, b.semi_major_axis);
            assert_eq!(a.orb_min, b.orb_min);
            assert_eq!(a.orb_max, b.orb_max);
            assert!(a.orb_min <= a.semi_major_axis && a.semi_major_axis <= a.orb_max);
            assert!((a.orbit.period - b.orbit.period).abs() < f64::EPSILON);
            // heavier body sits closer to the barycentre
            assert!(a.orbit.semi_major_axis < b.orbit.semi_major_axis);
            let yaw_gap = a.orbit.rotation.yaw - b.orbit.rotation.yaw;
            assert!((yaw_gap - PI).abs() < 1e-12);
        }
    }

    #[test]
    fn test_custom_explored_flag_wins() {
        let mut catalog = CustomSystemCatalog::new();
        catalog.add(
            CustomSystem::new("Frontier", [200, 0, 0], vec![BodyType::StarK])
                .unwrap()
                .with_explored(true),
        );
        let universe = Universe::with_customs(UniverseConfig::default(), catalog);
        let system = SystemGenerator::new(&universe, SystemPath::system(200, 0, 0, 0))
            .unwrap()
            .generate()
            .unwrap();
        assert_eq!(system.name, "Frontier");
        assert!(!system.unexplored);
    }

    #[test]
    fn test_exploration_bands() {
        let universe = universe();
        let near = SystemGenerator::new(&universe, SystemPath::system(0, 0, 0, 0))
            .unwrap()
            .generate()
            .unwrap();
        assert!(!near.unexplored);

        let far = Sector::new(&universe, 100, 0, 0);
        assert!(!far.is_empty());
        let far = SystemGenerator::from_sector(&universe, &far, 0)
            .unwrap()
            .generate()
            .unwrap();
        assert!(far.unexplored);
    }
}
