//! # GALAXIS Procedural Generation
//!
//! Deterministic galaxy generation: which systems exist in a sector, and what
//! their stars look like.
//!
//! ## Design Principles
//!
//! 1. **Deterministic**: same coordinates + seed always produce the same galaxy
//! 2. **Sectored**: space is generated in independent 8 ly cubes
//! 3. **Disposable**: sectors and systems are cheap to discard and regenerate
//! 4. **Overridable**: authored systems replace procedural slots
//!
//! ## Core Components
//!
//! - `Universe`: seed, epoch and custom system catalog
//! - `Sector`: the system list of one cube of space
//! - `SystemGenerator`: star hierarchy of one system
//! - `SystemBodyTree`: arena holding stars and gravpoints
//! - `BodyType`: star classes and their synthesis ranges
//!
//! ## Example
//!
//! ```rust
//! use galaxis_core::SystemPath;
//! use galaxis_procedural::{Sector, SystemGenerator, Universe, UniverseConfig};
//!
//! let universe = Universe::new(UniverseConfig::default());
//! let sector = Sector::new(&universe, 0, 0, 0);
//! assert!(!sector.is_empty());
//!
//! let system = SystemGenerator::from_sector(&universe, &sector, 0)?.generate()?;
//! assert_eq!(system.star_count(), sector.systems()[0].num_stars);
//! # Ok::<(), galaxis_core::GalaxyError>(())
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod custom_system;
pub mod galaxy;
pub mod sector;
pub mod star_type;
pub mod system_body;
pub mod system_generator;
pub mod universe;

pub use custom_system::{CustomSystem, CustomSystemCatalog};
pub use sector::{FactionIndex, FactionResolver, Sector, SectorSystem, SECTOR_SIZE};
pub use star_type::{BodySuperType, BodyType, GiantTier, StarTypeInfo};
pub use system_body::{BodyId, Orbit, OrbitRotation, SystemBody, SystemBodyTree};
pub use system_generator::{make_binary_pair, GeneratedSystem, GenerationStats, SystemGenerator};
pub use universe::{Universe, UniverseConfig, UNIVERSE_SEED};
