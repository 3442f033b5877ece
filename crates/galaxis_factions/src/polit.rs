//! # Government Types
//!
//! Political systems a faction may impose on its worlds. Only the range
//! `EarthColonial..=Disorder` can be picked at random; `Invalid` and `None`
//! are sentinels.

/// Government of a system.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum GovType {
    /// No government could be determined.
    Invalid = 0,
    /// Uninhabited or ungoverned.
    None,
    /// Earth Federation colonial rule.
    EarthColonial,
    /// Earth Federation democracy.
    EarthDemoc,
    /// Imperial rule.
    EmpireRule,
    /// Confederal liberal democracy.
    CisLibDem,
    /// Confederal social democracy.
    CisSocDem,
    /// Liberal democracy.
    LibDem,
    /// Corporate system.
    Corporate,
    /// Social democracy.
    SocDem,
    /// Earth Federation military dictatorship.
    EarthMilDict,
    /// Military dictatorship.
    MilDict1,
    /// Military dictatorship (variant).
    MilDict2,
    /// Imperial military dictatorship.
    EmpireMilDict,
    /// Communist.
    Communist,
    /// Plutocratic dictatorship.
    Plutocratic,
    /// Contested by armed factions.
    Disorder,
}

impl GovType {
    /// First randomly assignable type.
    pub const RAND_MIN: Self = Self::EarthColonial;

    /// Last randomly assignable type.
    pub const RAND_MAX: Self = Self::Disorder;

    /// Every government type in ordinal order.
    pub const ALL: [Self; 17] = [
        Self::Invalid,
        Self::None,
        Self::EarthColonial,
        Self::EarthDemoc,
        Self::EmpireRule,
        Self::CisLibDem,
        Self::CisSocDem,
        Self::LibDem,
        Self::Corporate,
        Self::SocDem,
        Self::EarthMilDict,
        Self::MilDict1,
        Self::MilDict2,
        Self::EmpireMilDict,
        Self::Communist,
        Self::Plutocratic,
        Self::Disorder,
    ];

    const NAMES: [&'static str; 17] = [
        "INVALID",
        "NONE",
        "EARTHCOLONIAL",
        "EARTHDEMOC",
        "EMPIRERULE",
        "CISLIBDEM",
        "CISSOCDEM",
        "LIBDEM",
        "CORPORATE",
        "SOCDEM",
        "EARTHMILDICT",
        "MILDICT1",
        "MILDICT2",
        "EMPIREMILDICT",
        "COMMUNIST",
        "PLUTOCRATIC",
        "DISORDER",
    ];

    /// Parses a configuration name such as `"CORPORATE"`.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::NAMES
            .iter()
            .position(|candidate| *candidate == name)
            .map(|index| Self::ALL[index])
    }

    /// Configuration name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        Self::NAMES[self as usize]
    }

    /// Returns true if the type may be assigned by weighted selection.
    #[inline]
    #[must_use]
    pub const fn is_random_assignable(self) -> bool {
        (self as u8) >= (Self::RAND_MIN as u8) && (self as u8) <= (Self::RAND_MAX as u8)
    }

    /// Human-readable description.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Invalid => "Invalid",
            Self::None => "No central governance",
            Self::EarthColonial => "Earth Federation Colonial Rule",
            Self::EarthDemoc => "Earth Federation Democracy",
            Self::EmpireRule => "Imperial Rule",
            Self::CisLibDem | Self::LibDem => "Liberal democracy",
            Self::CisSocDem | Self::SocDem => "Social democracy",
            Self::Corporate => "Corporate system",
            Self::EarthMilDict => "Earth Federation Military Dictatorship",
            Self::MilDict1 | Self::MilDict2 => "Military dictatorship",
            Self::EmpireMilDict => "Imperial military dictatorship",
            Self::Communist => "Communist",
            Self::Plutocratic => "Plutocratic dictatorship",
            Self::Disorder => "Disorder - Overall governance contested by armed factions",
        }
    }
}
