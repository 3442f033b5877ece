//! # GALAXIS Factions
//!
//! Political territory on top of the procedural galaxy.
//!
//! ## Core Components
//!
//! - `Faction`: homeworld, border growth, government weights, contraband
//! - `FactionBuilder`: field-by-field definition with recoverable warnings
//! - `FactionRegistry`: ordered store and territory resolver
//! - `GovType` / `EquipType`: government and commodity identifiers
//!
//! ## Territory
//!
//! A faction's border is a sphere around its homeworld that grows with time.
//! Systems in the homeworld's sector always belong to it. Elsewhere, the
//! closest containing homeworld wins, and factions without a homeworld pick
//! up whatever nobody else claims.
//!
//! ## Example
//!
//! ```rust
//! use std::sync::Arc;
//! use galaxis_factions::{FactionBuilder, FactionRegistry};
//! use galaxis_procedural::{Sector, Universe, UniverseConfig};
//!
//! let universe = Arc::new(Universe::new(UniverseConfig::default()));
//! let mut registry = FactionRegistry::new(Arc::clone(&universe));
//!
//! let mut federation = FactionBuilder::new("Federation");
//! federation
//!     .homeworld(&universe, 0, 0, 0, 0, 0)
//!     .founding_date(3000.0)
//!     .expansion_rate(2.0)
//!     .govtype_weight("EARTHDEMOC", 1);
//! federation.add_to_factions(&mut registry)?;
//!
//! let sector = Sector::new(&universe, 1, 0, 0);
//! assert_eq!(registry.nearest_faction_index(&sector, 0), Some(0));
//! # Ok::<(), galaxis_factions::FactionError>(())
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod builder;
pub mod equip;
pub mod error;
pub mod faction;
pub mod ingest;
pub mod polit;
pub mod registry;

pub use builder::{FactionBuilder, Registration};
pub use equip::EquipType;
pub use error::{FactionError, FactionResult};
pub use faction::{Color, Faction};
pub use ingest::IngestReport;
pub use polit::GovType;
pub use registry::{FactionRegistry, FACTION_BASE_ALPHA};
