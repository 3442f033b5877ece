//! # GALAXIS Core
//!
//! Deterministic primitives shared by every generation stage.
//!
//! ## Design Principles
//!
//! 1. **Reproducible**: same seed words always produce the same stream
//! 2. **Platform independent**: no floating point in generation decisions
//! 3. **Self-contained**: no OS entropy, no global state
//!
//! ## Core Components
//!
//! - `Fixed`: signed Q32.32 fixed-point arithmetic
//! - `SystemPath`: sector/system/body coordinate key
//! - `SeededRng`: shared draw interface
//! - `XorshiftRand`: sector-level generator
//! - `BodyRng`: body-level generator
//!
//! ## Example
//!
//! ```rust
//! use galaxis_core::{BodyRng, SeededRng, SystemPath};
//!
//! let path = SystemPath::system(0, 0, 0, 0);
//! let key = [path.system_index, 0, 0, 0, 0xabcd_1234, 42];
//! let mut rng = BodyRng::from_key(key);
//! let mass_percent = rng.int32_range(80, 110);
//! assert!((80..=110).contains(&mass_percent));
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod error;
pub mod fixed_point;
pub mod path;
pub mod rng;

pub use error::{GalaxyError, GalaxyResult};
pub use fixed_point::Fixed;
pub use path::SystemPath;
pub use rng::{BodyRng, SeededRng, XorshiftRand};
