//! # Faction Definition Files
//!
//! Loads `[[faction]]` tables into a [`FactionRegistry`] through the
//! [`FactionBuilder`], so file data gets the same warnings and skip rules as
//! programmatic definitions.
//!
//! ```toml
//! [[faction]]
//! name = "Solar Federation"
//! homeworld = [0, 0, 0, 0, 4]          # sector x, y, z, system, body
//! founding_date = 3050.0
//! expansion_rate = 1.0
//! colour = [0.4, 0.4, 1.0]
//! govtype_weights = [
//!     { gov = "EARTHDEMOC", weight = 60 },
//!     { gov = "EARTHCOLONIAL", weight = 40 },
//! ]
//! illegal_goods = [{ commodity = "HAND_WEAPONS", probability = 50 }]
//! ```

use std::path::Path;
use std::sync::Arc;

use serde::Deserialize;
use tracing::info;

use crate::builder::{FactionBuilder, Registration};
use crate::error::{FactionError, FactionResult};
use crate::registry::FactionRegistry;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct GovWeightDef {
    gov: String,
    weight: i64,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct IllegalGoodDef {
    commodity: String,
    probability: i64,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FactionDef {
    name: String,
    #[serde(default)]
    description_short: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    homeworld: Option<(i64, i64, i64, i64, i64)>,
    #[serde(default)]
    founding_date: Option<f64>,
    #[serde(default)]
    expansion_rate: Option<f64>,
    #[serde(default)]
    military_name: Option<String>,
    #[serde(default)]
    police_name: Option<String>,
    #[serde(default)]
    colour: Option<[f32; 3]>,
    #[serde(default)]
    govtype_weights: Vec<GovWeightDef>,
    #[serde(default)]
    illegal_goods: Vec<IllegalGoodDef>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FactionFile {
    #[serde(default)]
    faction: Vec<FactionDef>,
}

/// Summary of one definition file.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct IngestReport {
    /// Number of factions added.
    pub added: usize,
    /// Names of factions skipped for an invalid homeworld.
    pub skipped: Vec<String>,
    /// Recoverable problems, in file order.
    pub warnings: Vec<FactionError>,
}

impl FactionRegistry {
    /// Loads faction definitions from TOML text.
    ///
    /// # Errors
    ///
    /// Returns `FactionError::InvalidConfig` if the text does not parse.
    /// Nothing is registered in that case. Values of the right type but out
    /// of range are warnings, and loading continues.
    pub fn load_toml_str(&mut self, source: &str) -> FactionResult<IngestReport> {
        let file: FactionFile =
            toml::from_str(source).map_err(|e| FactionError::InvalidConfig(e.to_string()))?;
        let universe = Arc::clone(self.universe());
        let mut report = IngestReport::default();

        for def in file.faction {
            let mut builder = FactionBuilder::new(def.name);
            if let Some(text) = def.description_short {
                builder.description_short(text);
            }
            if let Some(text) = def.description {
                builder.description(text);
            }
            for weight in &def.govtype_weights {
                builder.govtype_weight(&weight.gov, weight.weight);
            }
            if let Some((x, y, z, system, body)) = def.homeworld {
                builder.homeworld(&universe, x, y, z, system, body);
            }
            if let Some(year) = def.founding_date {
                builder.founding_date(year);
            }
            if let Some(rate) = def.expansion_rate {
                builder.expansion_rate(rate);
            }
            if let Some(name) = def.military_name {
                builder.military_name(name);
            }
            if let Some(name) = def.police_name {
                builder.police_name(name);
            }
            for good in &def.illegal_goods {
                builder.illegal_goods_probability(&good.commodity, good.probability);
            }
            if let Some([r, g, b]) = def.colour {
                builder.colour(r, g, b);
            }

            match builder.add_to_factions(self)? {
                Registration::Added(_) => report.added += 1,
                Registration::Skipped => report.skipped.push(builder.name().to_owned()),
            }
            report.warnings.extend_from_slice(builder.warnings());
        }

        info!(
            added = report.added,
            skipped = report.skipped.len(),
            warnings = report.warnings.len(),
            total = self.len(),
            "loaded faction definitions"
        );
        Ok(report)
    }

    /// Loads faction definitions from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns `FactionError::InvalidConfig` if the file cannot be read or
    /// parsed.
    pub fn load_toml_file(&mut self, path: impl AsRef<Path>) -> FactionResult<IngestReport> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path)
            .map_err(|e| FactionError::InvalidConfig(format!("{}: {e}", path.display())))?;
        self.load_toml_str(&source)
    }
}
