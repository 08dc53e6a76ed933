use hatchery_data::{
    AbilitySlot,
    HeldItem,
    IvSpread,
    Nature,
};
use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

/// A parent in a breeding pair.
#[derive(Debug, Default, Clone)]
pub struct Parent {
    pub name: String,
    /// Which of the parent's IVs are perfect.
    pub ivs: IvSpread,
    pub item: HeldItem,
    pub nature: Option<Nature>,
    pub ability: Option<String>,
    pub ability_slot: AbilitySlot,
}

/// Which of the two parents is being referenced.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    SerializeLabeledStringEnum,
    DeserializeLabeledStringEnum,
)]
pub enum ParentType {
    #[string = "A"]
    #[default]
    A,
    #[string = "B"]
    B,
}

/// A breeding pair.
#[derive(Debug, Default, Clone)]
pub struct Pair {
    pub parent_a: Parent,
    pub parent_b: Parent,
    /// One of the parents is a Ditto.
    pub with_ditto: bool,
    /// The parent whose ability can pass down to the offspring.
    ///
    /// Must be resolved by the caller: the female parent, or the non-Ditto parent when breeding
    /// with a Ditto.
    pub ability_source: ParentType,
}

impl Pair {
    /// The referenced parent.
    pub fn parent(&self, parent_type: ParentType) -> &Parent {
        match parent_type {
            ParentType::A => &self.parent_a,
            ParentType::B => &self.parent_b,
        }
    }
}
