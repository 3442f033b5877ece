//! # Equipment Types
//!
//! Trade goods and ship equipment. Only commodities can be declared illegal
//! by a faction.

/// Trade good or ship equipment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum EquipType {
    /// No equipment.
    None = 0,
    /// Hydrogen.
    Hydrogen,
    /// Liquid oxygen.
    LiquidOxygen,
    /// Metal ore.
    MetalOre,
    /// Carbon ore.
    CarbonOre,
    /// Metal alloys.
    MetalAlloys,
    /// Plastics.
    Plastics,
    /// Fruit and vegetables.
    FruitAndVeg,
    /// Animal meat.
    AnimalMeat,
    /// Live animals.
    LiveAnimals,
    /// Liquor.
    Liquor,
    /// Grain.
    Grain,
    /// Textiles.
    Textiles,
    /// Fertilizer.
    Fertilizer,
    /// Water.
    Water,
    /// Medicines.
    Medicines,
    /// Consumer goods.
    ConsumerGoods,
    /// Computers.
    Computers,
    /// Robots.
    Robots,
    /// Precious metals.
    PreciousMetals,
    /// Industrial machinery.
    IndustrialMachinery,
    /// Farm machinery.
    FarmMachinery,
    /// Mining machinery.
    MiningMachinery,
    /// Air processors.
    AirProcessors,
    /// Slaves.
    Slaves,
    /// Hand weapons.
    HandWeapons,
    /// Battle weapons.
    BattleWeapons,
    /// Nerve gas.
    NerveGas,
    /// Narcotics.
    Narcotics,
    /// Military fuel.
    MilitaryFuel,
    /// Rubbish.
    Rubbish,
    /// Radioactive waste.
    Radioactives,
    /// Unguided missile.
    MissileUnguided,
    /// Guided missile.
    MissileGuided,
    /// Scanner.
    Scanner,
    /// Basic ECM.
    EcmBasic,
    /// Hypercloud analyzer.
    HypercloudAnalyzer,
    /// Atmospheric shielding.
    AtmosphericShielding,
    /// Autopilot.
    Autopilot,
    /// Class 1 hyperdrive.
    Drive1,
}

impl EquipType {
    /// First tradeable commodity.
    pub const FIRST_COMMODITY: Self = Self::Hydrogen;

    /// Last tradeable commodity.
    pub const LAST_COMMODITY: Self = Self::Radioactives;

    /// Every equipment type in ordinal order.
    pub const ALL: [Self; 40] = [
        Self::None,
        Self::Hydrogen,
        Self::LiquidOxygen,
        Self::MetalOre,
        Self::CarbonOre,
        Self::MetalAlloys,
        Self::Plastics,
        Self::FruitAndVeg,
        Self::AnimalMeat,
        Self::LiveAnimals,
        Self::Liquor,
        Self::Grain,
        Self::Textiles,
        Self::Fertilizer,
        Self::Water,
        Self::Medicines,
        Self::ConsumerGoods,
        Self::Computers,
        Self::Robots,
        Self::PreciousMetals,
        Self::IndustrialMachinery,
        Self::FarmMachinery,
        Self::MiningMachinery,
        Self::AirProcessors,
        Self::Slaves,
        Self::HandWeapons,
        Self::BattleWeapons,
        Self::NerveGas,
        Self::Narcotics,
        Self::MilitaryFuel,
        Self::Rubbish,
        Self::Radioactives,
        Self::MissileUnguided,
        Self::MissileGuided,
        Self::Scanner,
        Self::EcmBasic,
        Self::HypercloudAnalyzer,
        Self::AtmosphericShielding,
        Self::Autopilot,
        Self::Drive1,
    ];

    const NAMES: [&'static str; 40] = [
        "NONE",
        "HYDROGEN",
        "LIQUID_OXYGEN",
        "METAL_ORE",
        "CARBON_ORE",
        "METAL_ALLOYS",
        "PLASTICS",
        "FRUIT_AND_VEG",
        "ANIMAL_MEAT",
        "LIVE_ANIMALS",
        "LIQUOR",
        "GRAIN",
        "TEXTILES",
        "FERTILIZER",
        "WATER",
        "MEDICINES",
        "CONSUMER_GOODS",
        "COMPUTERS",
        "ROBOTS",
        "PRECIOUS_METALS",
        "INDUSTRIAL_MACHINERY",
        "FARM_MACHINERY",
        "MINING_MACHINERY",
        "AIR_PROCESSORS",
        "SLAVES",
        "HAND_WEAPONS",
        "BATTLE_WEAPONS",
        "NERVE_GAS",
        "NARCOTICS",
        "MILITARY_FUEL",
        "RUBBISH",
        "RADIOACTIVES",
        "MISSILE_UNGUIDED",
        "MISSILE_GUIDED",
        "SCANNER",
        "ECM_BASIC",
        "HYPERCLOUD_ANALYZER",
        "ATMOSPHERIC_SHIELDING",
        "AUTOPILOT",
        "DRIVE_CLASS1",
    ];

    /// Parses a configuration name such as `"HAND_WEAPONS"`.
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

    /// Returns true for tradeable commodities.
    #[inline]
    #[must_use]
    pub const fn is_commodity(self) -> bool {
        (self as u8) >= (Self::FIRST_COMMODITY as u8) && (self as u8) <= (Self::LAST_COMMODITY as u8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_round_trip() {
        for item in EquipType::ALL {
            assert_eq!(EquipType::from_name(item.name()), Some(item));
        }
        assert_eq!(EquipType::from_name("SPICE"), None);
    }

    #[test]
    fn test_commodity_range() {
        assert!(EquipType::Hydrogen.is_commodity());
        assert!(EquipType::Narcotics.is_commodity());
        assert!(EquipType::Radioactives.is_commodity());
        assert!(!EquipType::None.is_commodity());
        assert!(!EquipType::Scanner.is_commodity());
        assert!(!EquipType::Drive1.is_commodity());
    }
}
