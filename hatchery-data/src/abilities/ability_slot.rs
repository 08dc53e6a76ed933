use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

/// The slot a Mon's ability occupies on its species.
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
pub enum AbilitySlot {
    #[string = "first"]
    #[alias = "0"]
    #[default]
    First,
    #[string = "second"]
    #[alias = "1"]
    Second,
    #[string = "hidden"]
    #[alias = "H"]
    Hidden,
}

impl AbilitySlot {
    /// Whether this slot holds a Hidden Ability.
    pub fn is_hidden(&self) -> bool {
        match self {
            Self::Hidden => true,
            _ => false,
        }
    }
}
