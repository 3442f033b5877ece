//! # GALAXIS
//!
//! Deterministic galaxy generation, integrating all units.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                          GALAXIS                             │
//! ├──────────────────────────────────────────────────────────────┤
//! │                                                              │
//! │  ┌────────────────┐    ┌────────────────┐    ┌────────────┐  │
//! │  │  core          │    │  procedural    │    │  factions  │  │
//! │  │                │───>│                │<───│            │  │
//! │  │  • Fixed point │    │  • Sectors     │    │  • Borders │  │
//! │  │  • Paths       │    │  • Star trees  │    │  • Govts   │  │
//! │  │  • Seeded RNGs │    │  • Customs     │    │  • Loading │  │
//! │  └────────────────┘    └────────────────┘    └────────────┘  │
//! │                                                              │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust
//! use galaxis::Galaxy;
//! use galaxis::procedural::{Universe, UniverseConfig};
//!
//! let galaxy = Galaxy::new(Universe::new(UniverseConfig::default()));
//! let survey = galaxy.survey(0, 0, 0)?;
//! assert_eq!(survey.entries.len(), survey.sector.len());
//! # Ok::<(), galaxis::GalaxisError>(())
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod error;
pub mod galaxy;

// Re-export the units
pub use galaxis_core as core;
pub use galaxis_factions as factions;
pub use galaxis_procedural as procedural;

pub use error::{GalaxisError, GalaxisResult};
pub use galaxy::{Galaxy, SectorSurvey, SurveyEntry};
