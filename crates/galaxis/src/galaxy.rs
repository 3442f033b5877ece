//! # Galaxy
//!
//! A universe, its custom systems and its factions, loaded together.
//!
//! ## Data Directory
//!
//! | File            | Contents                       | Missing file      |
//! |-----------------|--------------------------------|-------------------|
//! | `universe.toml` | seed, current year, retries    | default universe  |
//! | `systems.toml`  | `[[system]]` custom systems    | no custom systems |
//! | `factions.toml` | `[[faction]]` definitions      | no factions       |

use std::path::Path;
use std::sync::Arc;

use galaxis_core::{BodyRng, Fixed, SystemPath};
use galaxis_factions::{Color, FactionRegistry, GovType, IngestReport};
use galaxis_procedural::{
    CustomSystemCatalog, FactionIndex, GeneratedSystem, Sector, SystemGenerator, Universe,
    UniverseConfig,
};
use tracing::debug;

use crate::error::GalaxisResult;

/// Salt mixed into the government roll so it never shares a stream with
/// body generation.
const POLIT_SALT: u32 = 0x504f_4c54;

/// One system of a survey.
#[derive(Debug, Clone, PartialEq)]
pub struct SurveyEntry {
    /// Generated star hierarchy.
    pub system: GeneratedSystem,
    /// Owning faction.
    pub faction: Option<FactionIndex>,
    /// Map colour of the owner.
    pub colour: Color,
    /// Government picked by the owner.
    pub government: GovType,
    /// Population estimate in billions, when authored.
    pub population: Option<Fixed>,
}

/// Every system of one sector, generated and labelled.
#[derive(Debug, Clone, PartialEq)]
pub struct SectorSurvey {
    /// Sector with faction labels assigned.
    pub sector: Sector,
    /// One entry per system, in slot order.
    pub entries: Vec<SurveyEntry>,
}

/// Universe plus factions.
#[derive(Debug)]
pub struct Galaxy {
    universe: Arc<Universe>,
    factions: FactionRegistry,
}

impl Galaxy {
    /// Creates a galaxy with no factions.
    #[must_use]
    pub fn new(universe: Universe) -> Self {
        let universe = Arc::new(universe);
        Self {
            factions: FactionRegistry::new(Arc::clone(&universe)),
            universe,
        }
    }

    /// Loads a galaxy from a data directory.
    ///
    /// # Errors
    ///
    /// Returns an error if a present file cannot be read or parsed.
    pub fn load(dir: impl AsRef<Path>) -> GalaxisResult<(Self, IngestReport)> {
        let dir = dir.as_ref();
        let universe_file = dir.join("universe.toml");
        let config = if universe_file.exists() {
            UniverseConfig::from_toml_file(&universe_file)?
        } else {
            UniverseConfig::default()
        };

        let systems_file = dir.join("systems.toml");
        let customs = if systems_file.exists() {
            CustomSystemCatalog::from_toml_file(&systems_file)?
        } else {
            CustomSystemCatalog::new()
        };

        let mut galaxy = Self::new(Universe::with_customs(config, customs));
        let factions_file = dir.join("factions.toml");
        let report = if factions_file.exists() {
            galaxy.factions.load_toml_file(&factions_file)?
        } else {
            IngestReport::default()
        };
        debug!(dir = %dir.display(), factions = galaxy.factions.len(), "loaded galaxy");
        Ok((galaxy, report))
    }

    /// Shared universe.
    #[inline]
    #[must_use]
    pub const fn universe(&self) -> &Arc<Universe> {
        &self.universe
    }

    /// Registered factions.
    #[inline]
    #[must_use]
    pub const fn factions(&self) -> &FactionRegistry {
        &self.factions
    }

    /// Registered factions, for further definitions.
    #[inline]
    pub fn factions_mut(&mut self) -> &mut FactionRegistry {
        &mut self.factions
    }

    /// Generates a sector and labels its systems with their owners.
    #[must_use]
    pub fn sector(&self, x: i32, y: i32, z: i32) -> Sector {
        let mut sector = Sector::new(&self.universe, x, y, z);
        sector.assign_factions(&self.factions);
        sector
    }

    /// Generates the system at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the path does not name a system.
    pub fn system(&self, path: SystemPath) -> GalaxisResult<GeneratedSystem> {
        Ok(SystemGenerator::new(&self.universe, path)?.generate()?)
    }

    /// Generates every system of a sector with owner, colour and government.
    ///
    /// # Errors
    ///
    /// Returns an error if a system cannot be generated.
    pub fn survey(&self, x: i32, y: i32, z: i32) -> GalaxisResult<SectorSurvey> {
        let sector = self.sector(x, y, z);
        let mut entries = Vec::with_capacity(sector.len());

        for (index, slot) in sector.systems().iter().enumerate() {
            let system = SystemGenerator::from_sector(&self.universe, &sector, index)?.generate()?;
            let owner = slot.faction.and_then(|faction| self.factions.get(faction));
            let government = owner.map_or(GovType::None, |faction| {
                faction.pick_gov_type(&mut self.polit_rng(system.path))
            });

            entries.push(SurveyEntry {
                faction: slot.faction,
                colour: self.factions.colour_of(slot.faction),
                government,
                population: slot.population,
                system,
            });
        }
        Ok(SectorSurvey { sector, entries })
    }

    #[allow(clippy::cast_sign_loss)]
    fn polit_rng(&self, path: SystemPath) -> BodyRng {
        BodyRng::from_key([
            path.sector_x as u32,
            path.sector_y as u32,
            path.sector_z as u32,
            path.system_index,
            self.universe.seed(),
            POLIT_SALT,
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use galaxis_factions::FactionBuilder;

    #[test]
    fn test_empty_galaxy_survey_is_neutral() {
        let galaxy = Galaxy::new(Universe::new(UniverseConfig::default()));
        let survey = galaxy.survey(0, 0, 0).unwrap();
        assert_eq!(survey.entries.len(), survey.sector.len());
        for entry in &survey.entries {
            assert_eq!(entry.faction, None);
            assert_eq!(entry.colour, Color::NEUTRAL);
            assert_eq!(entry.government, GovType::None);
        }
    }

    #[test]
    fn test_survey_labels_owner_and_government() {
        let mut galaxy = Galaxy::new(Universe::new(UniverseConfig::default()));
        let universe = Arc::clone(galaxy.universe());
        let mut builder = FactionBuilder::new("Corp");
        builder
            .homeworld(&universe, 0, 0, 0, 0, 0)
            .govtype_weight("CORPORATE", 1)
            .colour(0.0, 1.0, 0.0);
        builder.add_to_factions(galaxy.factions_mut()).unwrap();

        let first = galaxy.survey(0, 0, 0).unwrap();
        assert!(first
            .entries
            .iter()
            .all(|entry| entry.faction == Some(0) && entry.government == GovType::Corporate));
        assert_eq!(first, galaxy.survey(0, 0, 0).unwrap());
    }

    #[test]
    fn test_system_matches_survey() {
        let galaxy = Galaxy::new(Universe::new(UniverseConfig::default()));
        let survey = galaxy.survey(1, -1, 0).unwrap();
        let path = SystemPath::system(1, -1, 0, 0);
        assert_eq!(galaxy.system(path).unwrap(), survey.entries[0].system);
    }

    #[test]
    fn test_load_missing_directory_uses_defaults() {
        let (galaxy, report) = Galaxy::load("/nonexistent/galaxis").unwrap();
        assert_eq!(galaxy.universe().seed(), galaxis_procedural::UNIVERSE_SEED);
        assert!(galaxy.universe().customs().is_empty());
        assert!(galaxy.factions().is_empty());
        assert_eq!(report, IngestReport::default());
    }
}
