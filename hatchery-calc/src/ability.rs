use hatchery_data::{
    AbilitySlot,
    Fraction,
    Language,
};
use serde::{
    Deserialize,
    Serialize,
};

use crate::state::Pair;

/// Output of the ability inheritance calculator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AbilityInheritance {
    /// Name of the ability that can pass down.
    pub ability: Option<String>,
    /// The slot the passing ability occupies on the source parent.
    pub slot: AbilitySlot,
    /// Chance the offspring hatches with this ability.
    pub probability: f64,
    /// Human-readable breakdown of the rule applied.
    pub description: Vec<String>,
}

/// Calculates how the pair passes an ability to the offspring.
///
/// Reads the pair's resolved ability source: the female parent, or the non-Ditto parent when
/// breeding with a Ditto. The remainder of the probability mass stays split across the regular
/// slots and is not resolved into a named ability.
pub fn calculate_ability_inheritance(pair: &Pair, lang: Language) -> AbilityInheritance {
    let source = pair.parent(pair.ability_source);
    let hidden = source.ability_slot.is_hidden();
    let ability = source.ability.as_deref().unwrap_or("?");

    let probability = if pair.with_ditto || hidden {
        Fraction::new(3, 5)
    } else {
        Fraction::new(4, 5)
    };

    let description = match lang {
        Language::English => match (pair.with_ditto, hidden) {
            (true, true) => Vec::from_iter([
                format!("Breeding with Ditto. The non-Ditto parent has a Hidden Ability ({ability})."),
                "60% chance the offspring gets the Hidden Ability, 40% chance it gets a regular ability.".to_owned(),
            ]),
            (true, false) => Vec::from_iter([
                format!("Breeding with Ditto. The non-Ditto parent has a regular ability ({ability})."),
                "60% chance the offspring gets the same ability, 40% chance it gets the other regular ability slot.".to_owned(),
            ]),
            (false, true) => Vec::from_iter([
                format!("The female parent has a Hidden Ability ({ability})."),
                "60% chance the offspring gets the Hidden Ability. 20% chance for each regular ability slot.".to_owned(),
            ]),
            (false, false) => Vec::from_iter([
                format!("The female parent has a regular ability ({ability})."),
                "80% chance the offspring gets the same ability. 20% chance it gets the other regular ability.".to_owned(),
            ]),
        },
        Language::Vietnamese => match (pair.with_ditto, hidden) {
            (true, true) => Vec::from_iter([
                format!("Lai với Ditto. Bố/Mẹ không phải Ditto có Đặc tính ẩn ({ability})."),
                "60% cơ hội con nhận Đặc tính ẩn, 40% cơ hội con nhận đặc tính thường.".to_owned(),
            ]),
            (true, false) => Vec::from_iter([
                format!("Lai với Ditto. Bố/Mẹ không phải Ditto có đặc tính thường ({ability})."),
                "60% cơ hội con nhận cùng đặc tính, 40% cơ hội con nhận đặc tính thường còn lại.".to_owned(),
            ]),
            (false, true) => Vec::from_iter([
                format!("Bố/Mẹ cái có Đặc tính ẩn ({ability})."),
                "60% cơ hội con nhận Đặc tính ẩn. 20% cơ hội cho mỗi đặc tính thường.".to_owned(),
            ]),
            (false, false) => Vec::from_iter([
                format!("Bố/Mẹ cái có đặc tính thường ({ability})."),
                "80% cơ hội con nhận cùng đặc tính. 20% cơ hội con nhận đặc tính thường còn lại.".to_owned(),
            ]),
        },
    };

    AbilityInheritance {
        ability: source.ability.clone(),
        slot: source.ability_slot,
        probability: probability.to_f64(),
        description,
    }
}
