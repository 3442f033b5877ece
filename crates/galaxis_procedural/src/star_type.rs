//! # Body Types
//!
//! Classification of system bodies and the per-class synthesis ranges.
//!
//! Star classes are ordered from coolest to hottest within each luminosity
//! family, and the ordinal is meaningful: companions are drawn from
//! `[STAR_MIN, primary]`, so a companion never outranks its primary.

use galaxis_core::{GalaxyError, GalaxyResult};

/// Broad family of a body type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BodySuperType {
    /// Non-physical node (gravitational centre).
    None,
    /// Any star, remnant or black hole.
    Star,
}

/// Body types, in generation order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum BodyType {
    /// Common centre of mass of two child bodies.
    Gravpoint = 0,
    /// Brown dwarf.
    BrownDwarf = 1,
    /// White dwarf.
    WhiteDwarf = 2,
    /// Main sequence M.
    StarM = 3,
    /// Main sequence K.
    StarK = 4,
    /// Main sequence G.
    StarG = 5,
    /// Main sequence F.
    StarF = 6,
    /// Main sequence A.
    StarA = 7,
    /// Main sequence B.
    StarB = 8,
    /// Main sequence O.
    StarO = 9,
    /// M giant.
    StarMGiant = 10,
    /// K giant.
    StarKGiant = 11,
    /// G giant.
    StarGGiant = 12,
    /// F giant.
    StarFGiant = 13,
    /// A giant.
    StarAGiant = 14,
    /// B giant.
    StarBGiant = 15,
    /// O giant.
    StarOGiant = 16,
    /// M supergiant.
    StarMSuperGiant = 17,
    /// K supergiant.
    StarKSuperGiant = 18,
    /// G supergiant.
    StarGSuperGiant = 19,
    /// F supergiant.
    StarFSuperGiant = 20,
    /// A supergiant.
    StarASuperGiant = 21,
    /// B supergiant.
    StarBSuperGiant = 22,
    /// O supergiant.
    StarOSuperGiant = 23,
    /// M hypergiant.
    StarMHyperGiant = 24,
    /// K hypergiant.
    StarKHyperGiant = 25,
    /// G hypergiant.
    StarGHyperGiant = 26,
    /// F hypergiant.
    StarFHyperGiant = 27,
    /// A hypergiant.
    StarAHyperGiant = 28,
    /// B hypergiant.
    StarBHyperGiant = 29,
    /// O hypergiant.
    StarOHyperGiant = 30,
    /// M Wolf-Rayet.
    StarMWolfRayet = 31,
    /// B Wolf-Rayet.
    StarBWolfRayet = 32,
    /// O Wolf-Rayet.
    StarOWolfRayet = 33,
    /// Stellar-mass black hole.
    StellarBlackHole = 34,
    /// Intermediate-mass black hole.
    IntermediateBlackHole = 35,
    /// Supermassive black hole.
    SupermassiveBlackHole = 36,
}

/// Synthesis ranges for one body type.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StarTypeInfo {
    /// Family of the type.
    pub super_type: BodySuperType,
    /// Mass range, percent of a solar mass.
    pub mass: [i32; 2],
    /// Radius range, percent of a solar radius.
    pub radius: [i32; 2],
    /// Surface temperature range, Kelvin.
    pub temp: [i32; 2],
}

const fn star(mass: [i32; 2], radius: [i32; 2], temp: [i32; 2]) -> StarTypeInfo {
    StarTypeInfo {
        super_type: BodySuperType::Star,
        mass,
        radius,
        temp,
    }
}

/// Indexed by `BodyType as usize`.
static STAR_TYPE_INFO: [StarTypeInfo; 37] = [
    StarTypeInfo {
        super_type: BodySuperType::None,
        mass: [0, 0],
        radius: [0, 0],
        temp: [0, 0],
    },
    star([2, 8], [10, 30], [1000, 2000]),
    star([20, 100], [1, 2], [4000, 40000]),
    star([10, 47], [30, 60], [2000, 3500]),
    star([50, 78], [60, 100], [3500, 5000]),
    star([80, 110], [80, 120], [5000, 6000]),
    star([115, 170], [110, 150], [6000, 7500]),
    star([180, 320], [120, 220], [7500, 10000]),
    star([200, 300], [120, 290], [10000, 30000]),
    star([300, 400], [200, 310], [30000, 60000]),
    // giants
    star([60, 357], [2000, 5000], [2500, 3500]),
    star([125, 500], [1500, 3000], [3500, 5000]),
    star([200, 800], [1000, 2000], [5000, 6000]),
    star([250, 900], [800, 1500], [6000, 7500]),
    star([400, 1000], [600, 1000], [7500, 10000]),
    star([500, 1000], [600, 1000], [10000, 30000]),
    star([600, 1200], [600, 1000], [30000, 60000]),
    // supergiants
    star([1050, 5000], [7000, 15000], [2500, 3500]),
    star([1100, 5000], [5000, 9000], [3500, 5000]),
    star([1200, 5000], [4000, 8000], [5000, 6000]),
    star([1500, 6000], [3500, 7000], [6000, 7500]),
    star([2000, 8000], [3000, 6000], [7500, 10000]),
    star([3000, 9000], [2500, 5000], [10000, 30000]),
    star([5000, 10000], [2000, 4000], [30000, 60000]),
    // hypergiants
    star([5000, 15000], [20000, 40000], [2500, 3500]),
    star([5000, 17000], [17000, 25000], [3500, 5000]),
    star([5000, 18000], [14000, 20000], [5000, 6000]),
    star([5000, 19000], [12000, 17500], [6000, 7500]),
    star([5000, 20000], [10000, 15000], [7500, 10000]),
    star([5000, 23000], [6000, 10000], [10000, 30000]),
    star([10000, 30000], [4000, 7000], [30000, 60000]),
    // Wolf-Rayet
    star([2000, 5000], [2500, 5000], [25000, 35000]),
    star([2000, 7500], [2500, 5000], [35000, 45000]),
    star([2000, 10000], [2500, 5000], [45000, 60000]),
    // black holes; a stellar black hole has no meaningful radius
    star([20, 2000], [0, 0], [10, 24]),
    star([900_000, 1_000_000], [100, 500], [1, 10]),
    star([2_000_000, 5_000_000], [10000, 20000], [10, 24]),
];

/// Giant promotion tiers for a main-sequence primary.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GiantTier {
    /// Giant.
    Giant,
    /// Supergiant.
    SuperGiant,
    /// Hypergiant.
    HyperGiant,
}

impl BodyType {
    /// Coolest star type.
    pub const STAR_MIN: Self = Self::BrownDwarf;

    /// Hottest/heaviest star type.
    pub const STAR_MAX: Self = Self::SupermassiveBlackHole;

    /// Every body type in ordinal order.
    pub const ALL: [Self; 37] = [
        Self::Gravpoint,
        Self::BrownDwarf,
        Self::WhiteDwarf,
        Self::StarM,
        Self::StarK,
        Self::StarG,
        Self::StarF,
        Self::StarA,
        Self::StarB,
        Self::StarO,
        Self::StarMGiant,
        Self::StarKGiant,
        Self::StarGGiant,
        Self::StarFGiant,
        Self::StarAGiant,
        Self::StarBGiant,
        Self::StarOGiant,
        Self::StarMSuperGiant,
        Self::StarKSuperGiant,
        Self::StarGSuperGiant,
        Self::StarFSuperGiant,
        Self::StarASuperGiant,
        Self::StarBSuperGiant,
        Self::StarOSuperGiant,
        Self::StarMHyperGiant,
        Self::StarKHyperGiant,
        Self::StarGHyperGiant,
        Self::StarFHyperGiant,
        Self::StarAHyperGiant,
        Self::StarBHyperGiant,
        Self::StarOHyperGiant,
        Self::StarMWolfRayet,
        Self::StarBWolfRayet,
        Self::StarOWolfRayet,
        Self::StellarBlackHole,
        Self::IntermediateBlackHole,
        Self::SupermassiveBlackHole,
    ];

    /// Configuration names, parallel to [`ALL`](Self::ALL).
    const NAMES: [&'static str; 37] = [
        "GRAVPOINT",
        "BROWN_DWARF",
        "WHITE_DWARF",
        "STAR_M",
        "STAR_K",
        "STAR_G",
        "STAR_F",
        "STAR_A",
        "STAR_B",
        "STAR_O",
        "STAR_M_GIANT",
        "STAR_K_GIANT",
        "STAR_G_GIANT",
        "STAR_F_GIANT",
        "STAR_A_GIANT",
        "STAR_B_GIANT",
        "STAR_O_GIANT",
        "STAR_M_SUPER_GIANT",
        "STAR_K_SUPER_GIANT",
        "STAR_G_SUPER_GIANT",
        "STAR_F_SUPER_GIANT",
        "STAR_A_SUPER_GIANT",
        "STAR_B_SUPER_GIANT",
        "STAR_O_SUPER_GIANT",
        "STAR_M_HYPER_GIANT",
        "STAR_K_HYPER_GIANT",
        "STAR_G_HYPER_GIANT",
        "STAR_F_HYPER_GIANT",
        "STAR_A_HYPER_GIANT",
        "STAR_B_HYPER_GIANT",
        "STAR_O_HYPER_GIANT",
        "STAR_M_WF",
        "STAR_B_WF",
        "STAR_O_WF",
        "STAR_S_BH",
        "STAR_IM_BH",
        "STAR_SM_BH",
    ];

    /// Converts from the ordinal, if in range.
    #[must_use]
    pub const fn from_ordinal(value: i32) -> Option<Self> {
        if value >= 0 && value < Self::ALL.len() as i32 {
            Some(Self::ALL[value as usize])
        } else {
            None
        }
    }

    /// Returns the ordinal.
    #[inline]
    #[must_use]
    pub const fn ordinal(self) -> i32 {
        self as i32
    }

    /// Returns the configuration name (`STAR_G`, `WHITE_DWARF`, ...).
    #[must_use]
    pub const fn name(self) -> &'static str {
        Self::NAMES[self as usize]
    }

    /// Parses a configuration name.
    ///
    /// # Errors
    ///
    /// Returns `GalaxyError::UnknownStarType` if the name is not a star type.
    pub fn from_name(name: &str) -> GalaxyResult<Self> {
        Self::NAMES
            .iter()
            .position(|candidate| *candidate == name)
            .map(|index| Self::ALL[index])
            .filter(|kind| kind.is_star())
            .ok_or_else(|| GalaxyError::UnknownStarType(name.to_string()))
    }

    /// Synthesis ranges for this type.
    #[inline]
    #[must_use]
    pub fn info(self) -> &'static StarTypeInfo {
        &STAR_TYPE_INFO[self as usize]
    }

    /// Returns the family of this type.
    #[inline]
    #[must_use]
    pub fn super_type(self) -> BodySuperType {
        self.info().super_type
    }

    /// Returns true for stars, remnants and black holes.
    #[inline]
    #[must_use]
    pub fn is_star(self) -> bool {
        matches!(self.super_type(), BodySuperType::Star)
    }

    /// Returns true for main-sequence classes that can swell into giants.
    #[inline]
    #[must_use]
    pub const fn can_become_giant(self) -> bool {
        matches!(
            self,
            Self::StarM | Self::StarK | Self::StarG | Self::StarF | Self::StarA
        )
    }

    /// Returns true for the classes that attract proper names: hot main
    /// sequence stars and everything larger.
    #[inline]
    #[must_use]
    pub const fn is_bright(self) -> bool {
        (self as u8) >= (Self::StarA as u8)
    }

    /// Promotes a main-sequence class into the matching giant family.
    ///
    /// Types that cannot become giants are returned unchanged.
    #[must_use]
    pub const fn promoted(self, tier: GiantTier) -> Self {
        if !self.can_become_giant() {
            return self;
        }
        let offset = (self as u8 - Self::StarM as u8) as usize;
        let base = match tier {
            GiantTier::Giant => Self::StarMGiant,
            GiantTier::SuperGiant => Self::StarMSuperGiant,
            GiantTier::HyperGiant => Self::StarMHyperGiant,
        };
        Self::ALL[base as usize + offset]
    }
}
