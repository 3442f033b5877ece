//! # Coordinate Keys
//!
//! Everything in the galaxy is addressed by a `SystemPath`: the sector cube,
//! the system slot inside that sector, and a body inside that system.
//! Paths are plain values and are fed directly into generator seeds.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Immutable 5-component coordinate key.
///
/// Ordering is lexicographic by component, in declaration order.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct SystemPath {
    /// Sector X coordinate.
    pub sector_x: i32,
    /// Sector Y coordinate.
    pub sector_y: i32,
    /// Sector Z coordinate.
    pub sector_z: i32,
    /// System slot within the sector.
    pub system_index: u32,
    /// Body within the system.
    pub body_index: u32,
}

impl SystemPath {
    /// Creates a full body path.
    #[inline]
    #[must_use]
    pub const fn new(
        sector_x: i32,
        sector_y: i32,
        sector_z: i32,
        system_index: u32,
        body_index: u32,
    ) -> Self {
        Self {
            sector_x,
            sector_y,
            sector_z,
            system_index,
            body_index,
        }
    }

    /// Creates a path to a system (body index 0).
    #[inline]
    #[must_use]
    pub const fn system(sector_x: i32, sector_y: i32, sector_z: i32, system_index: u32) -> Self {
        Self::new(sector_x, sector_y, sector_z, system_index, 0)
    }

    /// Returns the sector coordinates as an array.
    #[inline]
    #[must_use]
    pub const fn sector(self) -> [i32; 3] {
        [self.sector_x, self.sector_y, self.sector_z]
    }

    /// Returns true if both paths lie in the same sector.
    #[inline]
    #[must_use]
    pub const fn is_same_sector(self, other: Self) -> bool {
        self.sector_x == other.sector_x
            && self.sector_y == other.sector_y
            && self.sector_z == other.sector_z
    }

    /// Returns the same path with system and body cleared.
    #[inline]
    #[must_use]
    pub const fn sector_only(self) -> Self {
        Self::new(self.sector_x, self.sector_y, self.sector_z, 0, 0)
    }

    /// Returns the same path with the body cleared.
    #[inline]
    #[must_use]
    pub const fn system_only(self) -> Self {
        Self::system(self.sector_x, self.sector_y, self.sector_z, self.system_index)
    }
}

impl fmt::Display for SystemPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({},{},{}):{}:{}",
            self.sector_x, self.sector_y, self.sector_z, self.system_index, self.body_index
        )
    }
}
