use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

/// The nature of a specific Mon.
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
pub enum Nature {
    #[string = "Hardy"]
    #[alias = "hardy"]
    Hardy,
    #[string = "Lonely"]
    #[alias = "lonely"]
    Lonely,
    #[string = "Brave"]
    #[alias = "brave"]
    Brave,
    #[string = "Adamant"]
    #[alias = "adamant"]
    Adamant,
    #[string = "Naughty"]
    #[alias = "naughty"]
    Naughty,
    #[string = "Bold"]
    #[alias = "bold"]
    Bold,
    #[string = "Docile"]
    #[alias = "docile"]
    Docile,
    #[string = "Relaxed"]
    #[alias = "relaxed"]
    Relaxed,
    #[string = "Impish"]
    #[alias = "impish"]
    Impish,
    #[string = "Lax"]
    #[alias = "lax"]
    Lax,
    #[string = "Timid"]
    #[alias = "timid"]
    Timid,
    #[string = "Hasty"]
    #[alias = "hasty"]
    Hasty,
    #[string = "Serious"]
    #[alias = "serious"]
    Serious,
    #[string = "Jolly"]
    #[alias = "jolly"]
    Jolly,
    #[string = "Naive"]
    #[alias = "naive"]
    Naive,
    #[string = "Modest"]
    #[alias = "modest"]
    Modest,
    #[string = "Mild"]
    #[alias = "mild"]
    Mild,
    #[string = "Quiet"]
    #[alias = "quiet"]
    Quiet,
    #[string = "Bashful"]
    #[alias = "bashful"]
    Bashful,
    #[string = "Rash"]
    #[alias = "rash"]
    Rash,
    #[string = "Calm"]
    #[alias = "calm"]
    Calm,
    #[string = "Gentle"]
    #[alias = "gentle"]
    Gentle,
    #[string = "Sassy"]
    #[alias = "sassy"]
    Sassy,
    #[string = "Careful"]
    #[alias = "careful"]
    Careful,
    #[string = "Quirky"]
    #[alias = "quirky"]
    Quirky,
}

impl Nature {
    /// All natures an offspring can hatch with.
    pub const ALL: [Nature; 25] = [
        Nature::Hardy,
        Nature::Lonely,
        Nature::Brave,
        Nature::Adamant,
        Nature::Naughty,
        Nature::Bold,
        Nature::Docile,
        Nature::Relaxed,
        Nature::Impish,
        Nature::Lax,
        Nature::Timid,
        Nature::Hasty,
        Nature::Serious,
        Nature::Jolly,
        Nature::Naive,
        Nature::Modest,
        Nature::Mild,
        Nature::Quiet,
        Nature::Bashful,
        Nature::Rash,
        Nature::Calm,
        Nature::Gentle,
        Nature::Sassy,
        Nature::Careful,
        Nature::Quirky,
    ];

    /// Display name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Hardy => "Hardy",
            Self::Lonely => "Lonely",
            Self::Brave => "Brave",
            Self::Adamant => "Adamant",
            Self::Naughty => "Naughty",
            Self::Bold => "Bold",
            Self::Docile => "Docile",
            Self::Relaxed => "Relaxed",
            Self::Impish => "Impish",
            Self::Lax => "Lax",
            Self::Timid => "Timid",
            Self::Hasty => "Hasty",
            Self::Serious => "Serious",
            Self::Jolly => "Jolly",
            Self::Naive => "Naive",
            Self::Modest => "Modest",
            Self::Mild => "Mild",
            Self::Quiet => "Quiet",
            Self::Bashful => "Bashful",
            Self::Rash => "Rash",
            Self::Calm => "Calm",
            Self::Gentle => "Gentle",
            Self::Sassy => "Sassy",
            Self::Careful => "Careful",
            Self::Quirky => "Quirky",
        }
    }
}

#[cfg(test)]
mod nature_test {
    use crate::{
        mons::Nature,
        test_util::{
            test_string_deserialization,
            test_string_serialization,
        },
    };

    #[test]
    fn serializes_to_string() {
        test_string_serialization(Nature::Adamant, "Adamant");
        test_string_serialization(Nature::Timid, "Timid");
        test_string_serialization(Nature::Quirky, "Quirky");
    }

    #[test]
    fn deserializes_lowercase() {
        test_string_deserialization("adamant", Nature::Adamant);
        test_string_deserialization("jolly", Nature::Jolly);
        test_string_deserialization("bashful", Nature::Bashful);
    }

    #[test]
    fn lists_all_natures() {
        assert_eq!(Nature::ALL.len(), 25);
    }
}
