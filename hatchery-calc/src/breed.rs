use hatchery_data::{
    HeldItem,
    IvSpread,
    Language,
};
use serde::{
    Deserialize,
    Serialize,
};

use crate::{
    ability::{
        AbilityInheritance,
        calculate_ability_inheritance,
    },
    inheritance::{
        IvInheritance,
        TargetSpreadChance,
        calculate_iv_inheritance,
        calculate_target_spread,
    },
    nature::{
        NatureInheritance,
        calculate_nature_inheritance,
    },
    state::Pair,
};

/// Input for the breeding calculator.
#[derive(Debug, Default, Clone)]
pub struct BreedingCalculatorInput {
    /// The breeding pair.
    pub pair: Pair,
    /// Stats the offspring must hatch with perfect, if an exact spread is wanted.
    pub target: Option<IvSpread>,
    /// Language for explanation text.
    pub lang: Language,
}

/// Combined output of all breeding calculators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreedingSummary {
    /// Name of parent A.
    pub parent_a: String,
    /// Name of parent B.
    pub parent_b: String,
    /// Item held by parent A.
    pub held_item_a: HeldItem,
    /// Item held by parent B.
    pub held_item_b: HeldItem,
    /// Distribution of perfect IV counts.
    pub ivs: IvInheritance,
    /// Nature inheritance outcome.
    pub nature: NatureInheritance,
    /// Ability inheritance outcome.
    pub ability: AbilityInheritance,
    /// Exact-target-spread outcome, when a target was requested.
    pub target: Option<TargetSpreadChance>,
}

/// Calculates every breeding outcome probability for a pair.
pub fn calculate_breeding(input: &BreedingCalculatorInput) -> BreedingSummary {
    log::debug!(
        "calculating breeding outcome for {} and {}",
        input.pair.parent_a.name,
        input.pair.parent_b.name
    );
    BreedingSummary {
        parent_a: input.pair.parent_a.name.clone(),
        parent_b: input.pair.parent_b.name.clone(),
        held_item_a: input.pair.parent_a.item,
        held_item_b: input.pair.parent_b.item,
        ivs: calculate_iv_inheritance(&input.pair, input.lang),
        nature: calculate_nature_inheritance(&input.pair, input.lang),
        ability: calculate_ability_inheritance(&input.pair, input.lang),
        target: input
            .target
            .as_ref()
            .map(|target| calculate_target_spread(&input.pair, target, input.lang)),
    }
}
