use hatchery_data::{
    Fraction,
    Language,
    Nature,
};
use serde::{
    Deserialize,
    Serialize,
};
use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

use crate::state::{
    Pair,
    ParentType,
};

/// The rule that decides the offspring's nature.
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
pub enum NatureMethod {
    /// No Everstone held: uniformly random across all natures.
    #[string = "random"]
    #[default]
    Random,
    /// A single Everstone guarantees its holder's nature.
    #[string = "everstone"]
    Everstone,
    /// Both parents hold an Everstone: a coin flip between their natures.
    #[string = "everstone-both"]
    EverstoneBoth,
}

/// Output of the nature inheritance calculator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NatureInheritance {
    /// The nature passed down, when a single Everstone guarantees it.
    pub nature: Option<Nature>,
    /// The parent passing its nature down.
    pub from_parent: Option<ParentType>,
    /// Chance the offspring hatches with the relevant nature.
    pub probability: f64,
    /// The rule that decided the outcome.
    pub method: NatureMethod,
    /// Human-readable breakdown of the rule applied.
    pub description: Vec<String>,
}

fn nature_name(nature: Option<Nature>) -> &'static str {
    nature.map(|nature| nature.name()).unwrap_or("?")
}

/// Calculates how the pair passes a nature to the offspring.
///
/// The Everstone affects nature only; it never changes IV inheritance.
pub fn calculate_nature_inheritance(pair: &Pair, lang: Language) -> NatureInheritance {
    let a_everstone = pair.parent_a.item.passes_nature();
    let b_everstone = pair.parent_b.item.passes_nature();
    match (a_everstone, b_everstone) {
        (true, true) => {
            let a_nature = nature_name(pair.parent_a.nature);
            let b_nature = nature_name(pair.parent_b.nature);
            let description = match lang {
                Language::English => Vec::from_iter([
                    "Both parents hold an Everstone.".to_owned(),
                    format!(
                        "50% chance of Parent A's nature ({a_nature}), 50% chance of Parent B's nature ({b_nature})."
                    ),
                ]),
                Language::Vietnamese => Vec::from_iter([
                    "Cả hai bố mẹ đều giữ Đá Bất Biến.".to_owned(),
                    format!(
                        "50% cơ hội tính cách của Bố/Mẹ A ({a_nature}), 50% cơ hội tính cách của Bố/Mẹ B ({b_nature})."
                    ),
                ]),
            };
            NatureInheritance {
                nature: None,
                from_parent: None,
                probability: Fraction::new(1, 2).to_f64(),
                method: NatureMethod::EverstoneBoth,
                description,
            }
        }
        (true, false) => everstone_nature(pair, ParentType::A, lang),
        (false, true) => everstone_nature(pair, ParentType::B, lang),
        (false, false) => {
            let natures = Nature::ALL.len() as u64;
            let chance = Fraction::new(1, natures);
            let pct = chance.to_f64() * 100.0;
            let description = match lang {
                Language::English => Vec::from_iter([
                    "No Everstone held.".to_owned(),
                    format!("Nature is randomly chosen from {natures} natures ({pct}% each)."),
                ]),
                Language::Vietnamese => Vec::from_iter([
                    "Không có Đá Bất Biến.".to_owned(),
                    format!("Tính cách được chọn ngẫu nhiên từ {natures} loại (mỗi loại {pct}%)."),
                ]),
            };
            NatureInheritance {
                nature: None,
                from_parent: None,
                probability: chance.to_f64(),
                method: NatureMethod::Random,
                description,
            }
        }
    }
}

fn everstone_nature(pair: &Pair, parent_type: ParentType, lang: Language) -> NatureInheritance {
    let nature = pair.parent(parent_type).nature;
    let description = match lang {
        Language::English => Vec::from_iter([
            format!("Parent {parent_type} holds an Everstone."),
            format!(
                "Offspring is guaranteed to have the {} nature.",
                nature_name(nature)
            ),
        ]),
        Language::Vietnamese => Vec::from_iter([
            format!("Bố/Mẹ {parent_type} giữ Đá Bất Biến."),
            format!("Con chắc chắn có tính cách {}.", nature_name(nature)),
        ]),
    };
    NatureInheritance {
        nature,
        from_parent: Some(parent_type),
        probability: Fraction::from(1u64).to_f64(),
        method: NatureMethod::Everstone,
        description,
    }
}
