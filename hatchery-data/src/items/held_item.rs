use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

use crate::Stat;

/// An item held by a parent during breeding.
///
/// Item effects are fully partitioned: the Destiny Knot raises the inherited-IV count, a Power
/// item pins one stat to always be inherited, and the Everstone passes the holder's nature. No
/// item does more than one of these.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    SerializeLabeledStringEnum,
    DeserializeLabeledStringEnum,
)]
pub enum HeldItem {
    #[string = "none"]
    #[default]
    None,
    #[string = "Destiny Knot"]
    #[alias = "destiny_knot"]
    #[alias = "destiny-knot"]
    DestinyKnot,
    #[string = "Power Weight"]
    #[alias = "power_hp"]
    #[alias = "power-weight"]
    PowerWeight,
    #[string = "Power Bracer"]
    #[alias = "power_atk"]
    #[alias = "power-bracer"]
    PowerBracer,
    #[string = "Power Belt"]
    #[alias = "power_def"]
    #[alias = "power-belt"]
    PowerBelt,
    #[string = "Power Lens"]
    #[alias = "power_spa"]
    #[alias = "power-lens"]
    PowerLens,
    #[string = "Power Band"]
    #[alias = "power_spd"]
    #[alias = "power-band"]
    PowerBand,
    #[string = "Power Anklet"]
    #[alias = "power_spe"]
    #[alias = "power-anklet"]
    PowerAnklet,
    #[string = "Everstone"]
    #[alias = "everstone"]
    Everstone,
}

impl HeldItem {
    /// The stat a Power item guarantees to be an inherited slot.
    pub fn forced_stat(&self) -> Option<Stat> {
        match self {
            Self::PowerWeight => Some(Stat::HP),
            Self::PowerBracer => Some(Stat::Atk),
            Self::PowerBelt => Some(Stat::Def),
            Self::PowerLens => Some(Stat::SpAtk),
            Self::PowerBand => Some(Stat::SpDef),
            Self::PowerAnklet => Some(Stat::Spe),
            _ => None,
        }
    }

    /// Whether the item raises the number of inherited IVs from 3 to 5.
    pub fn boosts_inheritance(&self) -> bool {
        match self {
            Self::DestinyKnot => true,
            _ => false,
        }
    }

    /// Whether the item passes the holder's nature to the offspring.
    pub fn passes_nature(&self) -> bool {
        match self {
            Self::Everstone => true,
            _ => false,
        }
    }
}
