use anyhow::Error;
use serde::{
    Deserialize,
    Serialize,
};
use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

/// A single stat value.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    SerializeLabeledStringEnum,
    DeserializeLabeledStringEnum,
)]
pub enum Stat {
    #[string = "hp"]
    HP,
    #[string = "atk"]
    #[alias = "Attack"]
    Atk,
    #[string = "def"]
    #[alias = "Defense"]
    Def,
    #[string = "spa"]
    #[alias = "spatk"]
    #[alias = "Sp.Atk"]
    #[alias = "Special Attack"]
    SpAtk,
    #[string = "spd"]
    #[alias = "spdef"]
    #[alias = "Sp.Def"]
    #[alias = "Special Defense"]
    SpDef,
    #[string = "spe"]
    #[alias = "Speed"]
    Spe,
}

impl Stat {
    /// All stats, in canonical order.
    ///
    /// Every per-stat table in a calculation shares this order.
    pub const ALL: [Stat; 6] = [
        Stat::HP,
        Stat::Atk,
        Stat::Def,
        Stat::SpAtk,
        Stat::SpDef,
        Stat::Spe,
    ];

    /// Position of the stat in canonical order.
    pub fn index(&self) -> usize {
        match self {
            Self::HP => 0,
            Self::Atk => 1,
            Self::Def => 2,
            Self::SpAtk => 3,
            Self::SpDef => 4,
            Self::Spe => 5,
        }
    }

    /// Short display name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::HP => "HP",
            Self::Atk => "Atk",
            Self::Def => "Def",
            Self::SpAtk => "SpA",
            Self::SpDef => "SpD",
            Self::Spe => "Spe",
        }
    }
}

/// A full table of perfect-IV flags, one per stat.
///
/// A flag is set when the corresponding IV is perfect (equal to 31).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IvSpread {
    #[serde(default)]
    pub hp: bool,
    #[serde(default)]
    pub atk: bool,
    #[serde(default)]
    pub def: bool,
    #[serde(default)]
    pub spa: bool,
    #[serde(default)]
    pub spd: bool,
    #[serde(default)]
    pub spe: bool,
}

impl IvSpread {
    /// Returns the flag for the given stat.
    pub fn get(&self, stat: Stat) -> bool {
        match stat {
            Stat::HP => self.hp,
            Stat::Atk => self.atk,
            Stat::Def => self.def,
            Stat::SpAtk => self.spa,
            Stat::SpDef => self.spd,
            Stat::Spe => self.spe,
        }
    }

    /// Sets the flag for the given stat.
    pub fn set(&mut self, stat: Stat, value: bool) {
        let flag = match stat {
            Stat::HP => &mut self.hp,
            Stat::Atk => &mut self.atk,
            Stat::Def => &mut self.def,
            Stat::SpAtk => &mut self.spa,
            Stat::SpDef => &mut self.spd,
            Stat::Spe => &mut self.spe,
        };
        *flag = value;
    }

    /// Creates an iterator over all stats and their flags, in canonical order.
    pub fn entries(self) -> impl Iterator<Item = (Stat, bool)> {
        Stat::ALL.into_iter().map(move |stat| (stat, self.get(stat)))
    }

    /// Counts stats flagged perfect.
    pub fn perfect_count(&self) -> u64 {
        self.entries().filter(|(_, perfect)| *perfect).count() as u64
    }

    /// Stats flagged perfect, in canonical order.
    pub fn perfect_stats(&self) -> Vec<Stat> {
        self.entries()
            .filter(|(_, perfect)| *perfect)
            .map(|(stat, _)| stat)
            .collect()
    }
}

impl FromIterator<(Stat, bool)> for IvSpread {
    fn from_iter<T: IntoIterator<Item = (Stat, bool)>>(iter: T) -> Self {
        let mut out = IvSpread::default();
        for (stat, value) in iter {
            out.set(stat, value);
        }
        out
    }
}

impl TryFrom<&[bool]> for IvSpread {
    type Error = Error;
    fn try_from(values: &[bool]) -> Result<Self, Self::Error> {
        if values.len() != Stat::ALL.len() {
            return Err(Error::msg(format!(
                "expected {} stat flags, got {}",
                Stat::ALL.len(),
                values.len()
            )));
        }
        Ok(Stat::ALL
            .into_iter()
            .zip(values.iter().copied())
            .collect())
    }
}
