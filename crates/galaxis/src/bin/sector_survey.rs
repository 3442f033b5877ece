//! # Sector Survey
//!
//! Prints every system of one sector: position, star hierarchy and owner.
//!
//! ## Usage
//!
//! ```bash
//! # Sol's sector, procedural systems only
//! sector_survey 0 0 0
//!
//! # With factions and custom systems
//! sector_survey 0 0 0 data/factions.toml data/systems.toml
//! ```

use std::process;

use galaxis::factions::FactionRegistry;
use galaxis::procedural::{
    BodyId, CustomSystemCatalog, SectorSystem, SystemBodyTree, Universe, UniverseConfig,
};
use galaxis::{Galaxy, SurveyEntry};

const SECONDS_PER_DAY: f64 = 86_400.0;

fn usage() -> ! {
    eprintln!("usage: sector_survey <x> <y> <z> [factions.toml] [systems.toml]");
    process::exit(2);
}

fn parse_coord(arg: Option<&String>) -> i32 {
    let Some(arg) = arg else { usage() };
    arg.parse().unwrap_or_else(|_| {
        eprintln!("   ✗ not a sector coordinate: {arg}");
        usage()
    })
}

fn print_tree(bodies: &SystemBodyTree, id: BodyId, depth: usize) {
    let body = &bodies[id];
    let indent = "  ".repeat(depth + 2);
    if body.is_star() {
        println!(
            "{indent}★ {} [{}] {} Msol, {} Rsol, {} K",
            body.name,
            body.body_type.name(),
            body.mass,
            body.radius,
            body.average_temp
        );
    } else {
        println!("{indent}◎ {} [{}] {} Msol", body.name, body.body_type.name(), body.mass);
    }
    if body.parent.is_some() {
        println!(
            "{indent}  a = {} AU, e = {}, period = {:.1} days",
            body.semi_major_axis,
            body.eccentricity,
            body.orbit.period / SECONDS_PER_DAY
        );
    }
    for child in &body.children {
        print_tree(bodies, *child, depth + 1);
    }
}

fn print_entry(index: usize, slot: &SectorSystem, entry: &SurveyEntry, factions: &FactionRegistry) {
    let system = &entry.system;
    let owner = entry
        .faction
        .and_then(|faction| factions.get(faction))
        .map_or("unclaimed", |faction| faction.name.as_str());

    println!(
        "  [{index:>2}] {} {}",
        system.name,
        if system.unexplored { "(unexplored)" } else { "" }
    );
    if let Some(text) = slot
        .custom
        .as_ref()
        .and_then(|custom| custom.short_description.as_deref())
    {
        println!("       {text}");
    }
    let [px, py, pz] = slot.position;
    println!("       position: ({px:.2}, {py:.2}, {pz:.2}) ly");
    println!(
        "       owner: {owner}, government: {}",
        entry.government.description()
    );
    if let Some(population) = entry.population {
        println!("       population: {population} billion");
    }
    print_tree(&system.bodies, system.root, 1);
    if system.stats.lighter_star_fallbacks > 0 || system.stats.orbit_rerolls > 0 {
        println!(
            "       retries: {} star fallbacks, {} orbit re-rolls",
            system.stats.lighter_star_fallbacks, system.stats.orbit_rerolls
        );
    }
}

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.len() < 3 || args.len() > 5 {
        usage();
    }
    let (x, y, z) = (
        parse_coord(args.first()),
        parse_coord(args.get(1)),
        parse_coord(args.get(2)),
    );

    let customs = match args.get(4) {
        Some(path) => CustomSystemCatalog::from_toml_file(path).unwrap_or_else(|e| {
            eprintln!("   ✗ FATAL: {e}");
            process::exit(1);
        }),
        None => CustomSystemCatalog::new(),
    };
    let mut galaxy = Galaxy::new(Universe::with_customs(UniverseConfig::default(), customs));

    if let Some(path) = args.get(3) {
        match galaxy.factions_mut().load_toml_file(path) {
            Ok(report) => {
                for warning in &report.warnings {
                    eprintln!("   ⚠ {warning}");
                }
                for name in &report.skipped {
                    eprintln!("   ⚠ skipped faction '{name}': invalid homeworld");
                }
            }
            Err(e) => {
                eprintln!("   ✗ FATAL: {e}");
                process::exit(1);
            }
        }
    }

    println!("═══════════════════════════════════════════════════════════════════");
    println!("                    GALAXIS SECTOR SURVEY");
    println!("═══════════════════════════════════════════════════════════════════");
    println!();
    println!("  Sector:    ({x}, {y}, {z})");
    println!("  Seed:      {:#010x}", galaxy.universe().seed());
    println!("  Year:      {}", galaxy.universe().current_year());
    println!("  Factions:  {}", galaxy.factions().len());
    println!("  Customs:   {}", galaxy.universe().customs().len());
    println!();

    let survey = galaxy.survey(x, y, z).unwrap_or_else(|e| {
        eprintln!("   ✗ FATAL: {e}");
        process::exit(1);
    });
    println!("  {} systems", survey.entries.len());
    println!();
    for (index, (slot, entry)) in survey
        .sector
        .systems()
        .iter()
        .zip(&survey.entries)
        .enumerate()
    {
        print_entry(index, slot, entry, galaxy.factions());
        println!();
    }
}
