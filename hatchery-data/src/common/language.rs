use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

/// A language for generated explanation text.
///
/// Cosmetic only: selects the templates that render a calculation into text, and never changes
/// the computed values.
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
pub enum Language {
    #[string = "en"]
    #[alias = "English"]
    #[default]
    English,
    #[string = "vi"]
    #[alias = "Vietnamese"]
    Vietnamese,
}
