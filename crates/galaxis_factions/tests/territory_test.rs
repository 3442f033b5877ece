//! # Territory Resolution Tests
//!
//! End-to-end checks of faction borders over generated sectors:
//!
//! 1. **Border growth**: radius follows founding date and expansion rate
//! 2. **Claims**: closest containing homeworld wins, homeless factions lose
//! 3. **Government**: weighted picks follow the declared weights
//! 4. **Concurrency**: shared registries resolve identically from many threads
//!
//! Run with: cargo test -p galaxis_factions --test territory_test -- --nocapture

use std::sync::{Arc, Barrier};

use galaxis_core::{BodyRng, SystemPath};
use galaxis_factions::{FactionBuilder, FactionRegistry, GovType, Registration};
use galaxis_procedural::{FactionIndex, Sector, Universe, UniverseConfig};

fn federation_registry() -> FactionRegistry {
    let universe = Arc::new(Universe::new(UniverseConfig::default()));
    let mut registry = FactionRegistry::new(Arc::clone(&universe));
    let mut federation = FactionBuilder::new("Federation");
    federation
        .homeworld(&universe, 0, 0, 0, 0, 0)
        .founding_date(3000.0)
        .expansion_rate(2.0)
        .colour(0.3, 0.3, 1.0);
    assert_eq!(
        federation.add_to_factions(&mut registry).unwrap(),
        Registration::Added(0)
    );
    registry
}

fn resolve_all(registry: &FactionRegistry, sectors: &[Sector]) -> Vec<Vec<Option<FactionIndex>>> {
    sectors
        .iter()
        .map(|sector| {
            (0..sector.len())
                .map(|index| registry.nearest_faction_index(sector, index))
                .collect()
        })
        .collect()
}

// ============================================================================
// BORDER GROWTH
// ============================================================================

/// Test: A faction founded in 3000 growing 2 ly/year spans 400 ly in 3200,
/// and owns its home sector at distance zero.
#[test]
fn test_federation_scenario() {
    let registry = federation_registry();
    let universe = Arc::clone(registry.universe());
    let federation = registry.get(0).unwrap();

    let radius = federation.radius(universe.current_year());
    assert!((radius - 400.0).abs() < f64::EPSILON);

    let home = Sector::new(&universe, 0, 0, 0);
    let mut closest = f64::INFINITY;
    assert!(federation.is_closer_and_contains(&universe, &mut closest, &home, 0));
    assert!(closest.abs() < f64::EPSILON);

    // 40 sectors = 320 ly, inside; 60 sectors = 480 ly, outside
    let inside = Sector::new(&universe, 40, 0, 0);
    let outside = Sector::new(&universe, 60, 0, 0);
    assert_eq!(registry.nearest_faction_index(&inside, 0), Some(0));
    assert_eq!(registry.nearest_faction_index(&outside, 0), None);
}

// ============================================================================
// CLAIMS
// ============================================================================

/// Test: Between two overlapping borders the closer homeworld wins.
#[test]
fn test_closest_homeworld_wins() {
    let mut registry = federation_registry();
    let universe = Arc::clone(registry.universe());
    let mut rivals = FactionBuilder::new("Rivals");
    rivals
        .homeworld(&universe, 30, 0, 0, 0, 0)
        .founding_date(3000.0)
        .expansion_rate(2.0);
    rivals.add_to_factions(&mut registry).unwrap();

    let near_home = Sector::new(&universe, 5, 0, 0);
    let near_rivals = Sector::new(&universe, 25, 0, 0);
    assert_eq!(registry.nearest_faction_index(&near_home, 0), Some(0));
    assert_eq!(registry.nearest_faction_index(&near_rivals, 0), Some(1));
    assert_eq!(
        registry.nearest_faction_index_for_path(SystemPath::system(30, 0, 0, 0)),
        Some(1)
    );
}

/// Test: A homeless faction only owns space no homeworld reaches.
#[test]
fn test_homeless_faction_takes_leftovers() {
    let mut registry = federation_registry();
    let universe = Arc::clone(registry.universe());
    FactionBuilder::new("Wanderers")
        .add_to_factions(&mut registry)
        .unwrap();

    let inside = Sector::new(&universe, 10, 0, 0);
    let outside = Sector::new(&universe, 80, 0, 0);
    for index in 0..inside.len() {
        assert_eq!(registry.nearest_faction_index(&inside, index), Some(0));
    }
    for index in 0..outside.len() {
        assert_eq!(registry.nearest_faction_index(&outside, index), Some(1));
    }
}

// ============================================================================
// GOVERNMENT
// ============================================================================

/// Test: Weights 1 and 3 yield roughly 25% and 75% of picks.
#[test]
fn test_gov_type_weights_sample() {
    let universe = Arc::new(Universe::new(UniverseConfig::default()));
    let mut registry = FactionRegistry::new(universe);
    let mut split = FactionBuilder::new("Split");
    split
        .govtype_weight("CORPORATE", 1)
        .govtype_weight("COMMUNIST", 3);
    split.add_to_factions(&mut registry).unwrap();
    let faction = registry.get(0).unwrap();

    let mut rng = BodyRng::from_key([7, 1, 2, 3, 4, 5]);
    let samples = 40_000u32;
    let mut corporate = 0u32;
    for _ in 0..samples {
        match faction.pick_gov_type(&mut rng) {
            GovType::Corporate => corporate += 1,
            GovType::Communist => {}
            other => panic!("unexpected government {other:?}"),
        }
    }

    let share = f64::from(corporate) / f64::from(samples);
    println!("Corporate share: {share:.4}");
    assert!((share - 0.25).abs() < 0.02, "share {share}");
}

// ============================================================================
// CONCURRENCY
// ============================================================================

/// Test: Threads sharing one registry agree with a serial pass.
#[test]
fn test_concurrent_resolution() {
    let registry = Arc::new(federation_registry());
    let universe = Arc::clone(registry.universe());
    let sectors: Vec<Sector> = (0..8)
        .map(|x| Sector::new(&universe, x * 7, 3, 0))
        .collect();

    let shared: &FactionRegistry = &registry;
    let shared_sectors = sectors.as_slice();
    let threaded: Vec<_> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(move |_| scope.spawn(move || resolve_all(shared, shared_sectors)))
            .collect();
        handles
            .into_iter()
            .map(|handle| handle.join().unwrap())
            .collect()
    });

    assert!(registry.get(0).unwrap().is_home_sector_cached());

    let serial = resolve_all(&registry, &sectors);
    for result in threaded {
        assert_eq!(result, serial);
    }
}

/// Test: Threads racing on a cold cache all receive the same home sector.
#[test]
fn test_home_sector_built_once_under_contention() {
    let registry = federation_registry();
    let universe = Arc::clone(registry.universe());
    let home = registry.get(0).unwrap();
    assert!(!home.is_home_sector_cached());

    let threads = 8;
    let barrier = &Barrier::new(threads);
    let shared_universe: &Universe = &universe;
    let built: Vec<Arc<Sector>> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..threads)
            .map(move |_| {
                scope.spawn(move || {
                    barrier.wait();
                    home.home_sector(shared_universe).unwrap()
                })
            })
            .collect();
        handles
            .into_iter()
            .map(|handle| handle.join().unwrap())
            .collect()
    });

    let first = &built[0];
    assert!(built.iter().all(|sector| Arc::ptr_eq(sector, first)));
    assert!(Arc::ptr_eq(first, &home.home_sector(&universe).unwrap()));
}
