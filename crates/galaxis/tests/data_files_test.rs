//! # Data Directory Tests
//!
//! Loads the shipped `data/` directory and checks that authored systems and
//! factions come through generation intact.
//!
//! Run with: cargo test -p galaxis --test data_files_test -- --nocapture

use std::path::PathBuf;

use galaxis::core::{Fixed, SystemPath};
use galaxis::factions::GovType;
use galaxis::procedural::BodyType;
use galaxis::Galaxy;

fn data_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../data")
}

fn load() -> Galaxy {
    let (galaxy, report) = Galaxy::load(data_dir()).unwrap();
    assert_eq!(report.added, 3);
    assert!(report.skipped.is_empty(), "skipped: {:?}", report.skipped);
    assert!(report.warnings.is_empty(), "warnings: {:?}", report.warnings);
    galaxy
}

/// Test: The shipped files load without warnings.
#[test]
fn test_data_directory_loads() {
    let galaxy = load();
    assert_eq!(galaxy.universe().seed(), 0xabcd_1234);
    assert!((galaxy.universe().current_year() - 3200.0).abs() < f64::EPSILON);
    assert_eq!(galaxy.universe().customs().len(), 5);
    assert_eq!(galaxy.factions().index_of("Solar Federation"), Some(0));

    let haber = galaxy.factions().get(2).unwrap();
    // best-effort homeworld resolves to the first system
    assert_eq!(haber.homeworld, Some(SystemPath::new(-3, 2, 0, 0, 0)));
}

/// Test: Sol is the first system of its sector and belongs to the
/// Federation.
#[test]
fn test_sol_survey() {
    let galaxy = load();
    let survey = galaxy.survey(0, 0, 0).unwrap();
    let sol = &survey.entries[0];

    assert_eq!(sol.system.name, "Sol");
    assert!(!sol.system.unexplored);
    assert_eq!(sol.system.star_count(), 1);
    assert_eq!(sol.system.root_body().body_type, BodyType::StarG);
    assert_eq!(sol.faction, Some(0));
    assert_eq!(sol.population, Some(Fixed::from_int(17)));
    let authored = survey.sector.systems()[0].custom.as_ref().unwrap();
    assert_eq!(
        authored.short_description.as_deref(),
        Some("The historical heart of human space")
    );
    assert!(matches!(
        sol.government,
        GovType::EarthDemoc | GovType::EarthColonial
    ));

    // the home sector belongs to the Federation throughout
    assert!(survey.entries.iter().all(|entry| entry.faction == Some(0)));
}

/// Test: Authored multi-star systems keep their stars and owners.
#[test]
fn test_authored_multiples() {
    let galaxy = load();

    let centauri = galaxy.system(SystemPath::system(-1, 0, 0, 0)).unwrap();
    assert_eq!(centauri.name, "Alpha Centauri");
    let stars: Vec<_> = centauri.bodies.stars().map(|star| star.name.as_str()).collect();
    assert_eq!(stars, vec!["Alpha Centauri A", "Alpha Centauri B", "Alpha Centauri C"]);

    let gliese = galaxy.system(SystemPath::system(2, -1, 0, 0)).unwrap();
    assert_eq!(gliese.star_count(), 4);
    assert_eq!(gliese.bodies.gravpoints().count(), 3);

    let eridani = galaxy.survey(1, 0, -1).unwrap();
    let confederation = galaxy
        .factions()
        .index_of("Confederation of Independent Systems");
    assert_eq!(eridani.entries[0].system.name, "Epsilon Eridani");
    assert_eq!(eridani.entries[0].faction, confederation);
}
