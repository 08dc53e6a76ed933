use hatchery_data::{
    Fraction,
    IvSpread,
    Language,
    Stat,
};
use indexmap::IndexMap;
use itertools::Itertools;
use num::integer::binomial;
use serde::{
    Deserialize,
    Serialize,
};

use crate::state::Pair;

/// Probability entries below this are omitted from results.
const NEGLIGIBLE_PROBABILITY: f64 = 1e-10;

/// Chance an inherited stat lands perfect, given which parents are perfect there.
fn perfect_source_chance(a_perfect: bool, b_perfect: bool) -> Fraction {
    match (a_perfect, b_perfect) {
        (true, true) => Fraction::from(1u64),
        (false, false) => Fraction::from(0u64),
        _ => Fraction::new(1, 2),
    }
}

/// Precomputed inheritance state shared by the IV distribution and target spread calculators.
pub(crate) struct InheritanceContext {
    /// Number of stats inherited from the parents (3, or 5 with a Destiny Knot).
    pub inherited_slots: u64,
    /// Chance each stat lands perfect when inherited, in canonical stat order.
    pub inherit_chance: [Fraction; 6],
    /// Stats pinned by Power items, with the chance each lands perfect.
    pub forced: IndexMap<Stat, Fraction>,
    /// Stats not pinned by a Power item, in canonical order.
    pub free: Vec<Stat>,
    /// Inherited slots filled by random selection over the free stats.
    pub open_slots: usize,
    /// Number of equally likely ways to fill the open slots.
    pub combinations: u64,
}

impl InheritanceContext {
    pub fn new(pair: &Pair) -> Self {
        let a = &pair.parent_a;
        let b = &pair.parent_b;

        let inherited_slots = if a.item.boosts_inheritance() || b.item.boosts_inheritance() {
            5
        } else {
            3
        };

        let mut inherit_chance = [Fraction::default(); 6];
        for (i, stat) in Stat::ALL.into_iter().enumerate() {
            inherit_chance[i] = perfect_source_chance(a.ivs.get(stat), b.ivs.get(stat));
        }

        let mut forced = IndexMap::new();
        match (a.item.forced_stat(), b.item.forced_stat()) {
            (Some(stat_a), Some(stat_b)) if stat_a == stat_b => {
                // Both Power items pin the same stat: a single forced slot, filled by a coin
                // flip between the two holders.
                forced.insert(
                    stat_a,
                    perfect_source_chance(a.ivs.get(stat_a), b.ivs.get(stat_b)),
                );
            }
            (stat_a, stat_b) => {
                for stat in [stat_a, stat_b].into_iter().flatten() {
                    forced.insert(stat, inherit_chance[stat.index()]);
                }
            }
        }

        let free = Stat::ALL
            .into_iter()
            .filter(|stat| !forced.contains_key(stat))
            .collect::<Vec<_>>();
        let open_slots = (inherited_slots as usize)
            .saturating_sub(forced.len())
            .min(free.len());
        let combinations = binomial(free.len() as u64, open_slots as u64).max(1);

        Self {
            inherited_slots,
            inherit_chance,
            forced,
            free,
            open_slots,
            combinations,
        }
    }

    /// Stats pinned by Power items, in canonical order.
    pub fn forced_stats(&self) -> Vec<Stat> {
        Stat::ALL
            .into_iter()
            .filter(|stat| self.forced.contains_key(stat))
            .collect()
    }

    /// Chance each stat lands perfect, for one choice of freely inherited stats.
    pub fn stat_chances(&self, chosen: &[Stat]) -> [Fraction; 6] {
        let mut chances = [Fraction::default(); 6];
        for (i, stat) in Stat::ALL.into_iter().enumerate() {
            chances[i] = if let Some(chance) = self.forced.get(&stat) {
                *chance
            } else if chosen.contains(&stat) {
                self.inherit_chance[i]
            } else {
                // An IV that is not inherited rolls uniformly in 0..=31.
                Fraction::new(1, 32)
            };
        }
        chances
    }
}

/// Distribution over the number of perfect stats, given each stat's independent chance of
/// landing perfect.
fn perfect_count_distribution(chances: &[Fraction; 6]) -> [Fraction; 7] {
    let mut counts = [Fraction::default(); 7];
    counts[0] = Fraction::from(1u64);
    for chance in chances {
        let mut next = [Fraction::default(); 7];
        for (count, mass) in counts.iter().enumerate() {
            if mass.is_zero() {
                continue;
            }
            next[count] = next[count] + *mass * (Fraction::from(1u64) - *chance);
            if count + 1 < next.len() {
                next[count + 1] = next[count + 1] + *mass * *chance;
            }
        }
        counts = next;
    }
    counts
}

fn percentage(chance: Fraction) -> String {
    format!("{:.4}%", chance.to_f64() * 100.0)
}

fn stat_names(stats: &[Stat]) -> String {
    stats.iter().map(|stat| stat.name()).join(", ")
}

/// Chance of hatching an offspring with an exact number of perfect IVs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerfectCountChance {
    /// Number of perfect stats.
    pub perfect_stats: u64,
    /// Probability of exactly this many perfect stats.
    pub probability: f64,
    /// Probability rendered as a percentage.
    pub percentage: String,
    /// Human-readable breakdown of the calculation.
    pub description: Vec<String>,
}

/// Output of the IV inheritance calculator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IvInheritance {
    /// Number of stats inherited from the parents (3, or 5 with a Destiny Knot).
    pub inherited_slots: u64,
    /// Stats guaranteed to be inherited by Power items.
    pub forced_stats: Vec<Stat>,
    /// Chance of each perfect-stat count, for counts with nonnegligible probability.
    pub distribution: Vec<PerfectCountChance>,
}

/// Calculates the distribution of perfect IV counts for an offspring of the pair.
///
/// Averages the per-stat perfect chances over every equally likely choice of inherited stats,
/// so the result is exact, not sampled.
pub fn calculate_iv_inheritance(pair: &Pair, lang: Language) -> IvInheritance {
    let context = InheritanceContext::new(pair);

    let mut totals = [Fraction::default(); 7];
    for chosen in context
        .free
        .iter()
        .copied()
        .combinations(context.open_slots)
    {
        let distribution = perfect_count_distribution(&context.stat_chances(&chosen));
        for (total, mass) in totals.iter_mut().zip(distribution) {
            *total = *total + mass / context.combinations;
        }
    }

    let distribution = totals
        .iter()
        .enumerate()
        .filter(|(_, mass)| mass.to_f64() >= NEGLIGIBLE_PROBABILITY)
        .map(|(count, mass)| PerfectCountChance {
            perfect_stats: count as u64,
            probability: mass.to_f64(),
            percentage: percentage(*mass),
            description: describe_count_chance(pair, &context, count as u64, *mass, lang),
        })
        .collect();

    IvInheritance {
        inherited_slots: context.inherited_slots,
        forced_stats: context.forced_stats(),
        distribution,
    }
}

fn describe_count_chance(
    pair: &Pair,
    context: &InheritanceContext,
    perfect_stats: u64,
    chance: Fraction,
    lang: Language,
) -> Vec<String> {
    let a_perfect = pair.parent_a.ivs.perfect_count();
    let b_perfect = pair.parent_b.ivs.perfect_count();
    let both_perfect = Stat::ALL
        .into_iter()
        .filter(|stat| pair.parent_a.ivs.get(*stat) && pair.parent_b.ivs.get(*stat))
        .count();
    let forced = context.forced_stats();
    let pct = chance.to_f64() * 100.0;
    let eggs = chance.inverse().round();

    let mut lines = Vec::new();
    match lang {
        Language::English => {
            lines.push(format!("Target: {perfect_stats} perfect IVs out of 6."));
            lines.push(format!(
                "Parent A has {a_perfect} perfect IVs, Parent B has {b_perfect} perfect IVs."
            ));
            lines.push(format!(
                "Stats where BOTH parents are perfect: {both_perfect} (100% if inherited)."
            ));
            if context.inherited_slots == 5 {
                lines.push("Destiny Knot: 5 of 6 IVs inherited (instead of 3).".to_owned());
            } else {
                lines.push("No Destiny Knot: only 3 of 6 IVs inherited.".to_owned());
            }
            if !forced.is_empty() {
                lines.push(format!(
                    "Power item forces: {} always inherited.",
                    stat_names(&forced)
                ));
            }
            lines.push(
                "Non-inherited stats: each has a 1/32 (3.125%) chance of being 31.".to_owned(),
            );
            lines.push(format!(
                "Probability: {pct:.4}% (about 1 in {eggs} eggs)."
            ));
        }
        Language::Vietnamese => {
            lines.push(format!(
                "Mục tiêu: {perfect_stats} IVs hoàn hảo trong 6."
            ));
            lines.push(format!(
                "Bố/Mẹ A có {a_perfect} IVs hoàn hảo, Bố/Mẹ B có {b_perfect} IVs hoàn hảo."
            ));
            lines.push(format!(
                "Chỉ số mà CẢ HAI bố mẹ đều hoàn hảo: {both_perfect} (100% nếu được di truyền)."
            ));
            if context.inherited_slots == 5 {
                lines.push("Dây Chỉ Đỏ: 5 trong 6 IVs được di truyền (thay vì 3).".to_owned());
            } else {
                lines.push("Không có Dây Chỉ Đỏ: chỉ 3 trong 6 IVs được di truyền.".to_owned());
            }
            if !forced.is_empty() {
                lines.push(format!(
                    "Vật phẩm Sức Mạnh ép: {} luôn được di truyền.",
                    stat_names(&forced)
                ));
            }
            lines.push(
                "Chỉ số không di truyền: mỗi chỉ số có 1/32 (3.125%) cơ hội đạt 31.".to_owned(),
            );
            lines.push(format!(
                "Xác suất: {pct:.4}% (khoảng 1 trong {eggs} trứng)."
            ));
        }
    }
    lines
}

/// Output of the exact-target-spread calculator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TargetSpreadChance {
    /// The stats that must land perfect.
    pub target: IvSpread,
    /// Targeted stats, in canonical order.
    pub target_stats: Vec<Stat>,
    /// Number of targeted stats.
    pub target_count: u64,
    /// Targeted stats parent A already has perfect.
    pub parent_a_coverage: u64,
    /// Targeted stats parent B already has perfect.
    pub parent_b_coverage: u64,
    /// Targeted stats both parents have perfect (guaranteed when inherited).
    pub shared_coverage: u64,
    /// Probability all targeted stats land perfect at once.
    pub probability: f64,
    /// Probability rendered as a percentage.
    pub percentage: String,
    /// Estimated eggs needed to hatch the target, or 0 when impossible.
    pub eggs_estimate: u64,
    /// Human-readable breakdown of the calculation.
    pub description: Vec<String>,
}

/// Calculates the chance that every targeted stat lands perfect at once.
///
/// Non-targeted stats are unconstrained: the calculation marginalizes over them.
pub fn calculate_target_spread(pair: &Pair, target: &IvSpread, lang: Language) -> TargetSpreadChance {
    let context = InheritanceContext::new(pair);

    let mut total = Fraction::default();
    for chosen in context
        .free
        .iter()
        .copied()
        .combinations(context.open_slots)
    {
        let chances = context.stat_chances(&chosen);
        let mut combo = Fraction::from(1u64);
        for (i, stat) in Stat::ALL.into_iter().enumerate() {
            if target.get(stat) {
                combo = combo * chances[i];
            }
        }
        total = total + combo / context.combinations;
    }

    let target_stats = target.perfect_stats();
    let target_count = target_stats.len() as u64;
    let parent_a_coverage = target_stats
        .iter()
        .filter(|stat| pair.parent_a.ivs.get(**stat))
        .count() as u64;
    let parent_b_coverage = target_stats
        .iter()
        .filter(|stat| pair.parent_b.ivs.get(**stat))
        .count() as u64;
    let shared_coverage = target_stats
        .iter()
        .filter(|stat| pair.parent_a.ivs.get(**stat) && pair.parent_b.ivs.get(**stat))
        .count() as u64;
    let eggs_estimate = if total.is_zero() {
        0
    } else {
        total.inverse().round().max(1)
    };

    let description = describe_target_spread(
        &context,
        &target_stats,
        target,
        [parent_a_coverage, parent_b_coverage, shared_coverage],
        total,
        eggs_estimate,
        lang,
    );

    TargetSpreadChance {
        target: *target,
        target_stats,
        target_count,
        parent_a_coverage,
        parent_b_coverage,
        shared_coverage,
        probability: total.to_f64(),
        percentage: percentage(total),
        eggs_estimate,
        description,
    }
}

fn describe_target_spread(
    context: &InheritanceContext,
    target_stats: &[Stat],
    target: &IvSpread,
    coverage: [u64; 3],
    chance: Fraction,
    eggs: u64,
    lang: Language,
) -> Vec<String> {
    let [a_coverage, b_coverage, shared_coverage] = coverage;
    let target_count = target_stats.len();
    let forced = context.forced_stats();
    let ignored = Stat::ALL
        .into_iter()
        .filter(|stat| !target.get(*stat))
        .collect::<Vec<_>>();
    let pct = chance.to_f64() * 100.0;

    let mut lines = Vec::new();
    match lang {
        Language::English => {
            lines.push(format!(
                "Target: {} = 31 ({target_count} stats).",
                stat_names(target_stats)
            ));
            lines.push(format!(
                "Parent A covers {a_coverage}/{target_count} target stats."
            ));
            lines.push(format!(
                "Parent B covers {b_coverage}/{target_count} target stats."
            ));
            lines.push(format!(
                "Both parents cover {shared_coverage}/{target_count} target stats (100% if inherited)."
            ));
            if context.inherited_slots == 5 {
                lines.push("Destiny Knot: 5 of 6 IVs inherited.".to_owned());
            } else {
                lines.push("No Destiny Knot: only 3 of 6 IVs inherited.".to_owned());
            }
            if !forced.is_empty() {
                lines.push(format!("Power item forces: {}.", stat_names(&forced)));
            }
            if !ignored.is_empty() {
                lines.push(format!("Don't care about: {}.", stat_names(&ignored)));
            }
            if chance.is_zero() {
                lines.push("Probability: 0% -- impossible with these parents and items.".to_owned());
            } else {
                lines.push(format!(
                    "Probability: {pct:.4}% (about 1 in {eggs} eggs)."
                ));
            }
        }
        Language::Vietnamese => {
            lines.push(format!(
                "Mục tiêu: {} = 31 ({target_count} chỉ số).",
                stat_names(target_stats)
            ));
            lines.push(format!(
                "Bố/Mẹ A đáp ứng {a_coverage}/{target_count} chỉ số mục tiêu."
            ));
            lines.push(format!(
                "Bố/Mẹ B đáp ứng {b_coverage}/{target_count} chỉ số mục tiêu."
            ));
            lines.push(format!(
                "Cả hai bố mẹ đáp ứng {shared_coverage}/{target_count} chỉ số (100% nếu được di truyền)."
            ));
            if context.inherited_slots == 5 {
                lines.push("Dây Chỉ Đỏ: 5 trong 6 IVs được di truyền.".to_owned());
            } else {
                lines.push("Không có Dây Chỉ Đỏ: chỉ 3 trong 6 IVs được di truyền.".to_owned());
            }
            if !forced.is_empty() {
                lines.push(format!("Vật phẩm Sức Mạnh ép: {}.", stat_names(&forced)));
            }
            if !ignored.is_empty() {
                lines.push(format!("Không quan tâm: {}.", stat_names(&ignored)));
            }
            if chance.is_zero() {
                lines.push(
                    "Xác suất: 0% -- không thể với bố mẹ và vật phẩm hiện tại.".to_owned(),
                );
            } else {
                lines.push(format!(
                    "Xác suất: {pct:.4}% (khoảng 1 trong {eggs} trứng)."
                ));
            }
        }
    }
    lines
}

#[cfg(test)]
mod inheritance_test {
    use hatchery_data::{
        HeldItem,
        IvSpread,
        Language,
        Stat,
    };

    use crate::{
        inheritance::{
            IvInheritance,
            calculate_iv_inheritance,
        },
        state::{
            Pair,
            Parent,
        },
    };

    fn pair(a_ivs: [bool; 6], a_item: HeldItem, b_ivs: [bool; 6], b_item: HeldItem) -> Pair {
        Pair {
            parent_a: Parent {
                name: "Dragonite".to_owned(),
                ivs: IvSpread::try_from(a_ivs.as_slice()).unwrap(),
                item: a_item,
                ..Default::default()
            },
            parent_b: Parent {
                name: "Dragapult".to_owned(),
                ivs: IvSpread::try_from(b_ivs.as_slice()).unwrap(),
                item: b_item,
                ..Default::default()
            },
            ..Default::default()
        }
    }

    fn total_probability(inheritance: &IvInheritance) -> f64 {
        inheritance
            .distribution
            .iter()
            .map(|entry| entry.probability)
            .sum()
    }

    fn probability_at(inheritance: &IvInheritance, perfect_stats: u64) -> Option<f64> {
        inheritance
            .distribution
            .iter()
            .find(|entry| entry.perfect_stats == perfect_stats)
            .map(|entry| entry.probability)
    }

    fn mass_at_least(inheritance: &IvInheritance, perfect_stats: u64) -> f64 {
        inheritance
            .distribution
            .iter()
            .filter(|entry| entry.perfect_stats >= perfect_stats)
            .map(|entry| entry.probability)
            .sum()
    }

    #[test]
    fn distribution_sums_to_one() {
        let scenarios = [
            pair([false; 6], HeldItem::None, [false; 6], HeldItem::None),
            pair([true; 6], HeldItem::DestinyKnot, [true; 6], HeldItem::None),
            pair(
                [true, true, false, true, false, false],
                HeldItem::PowerBracer,
                [false, true, true, false, true, false],
                HeldItem::PowerAnklet,
            ),
            pair(
                [true, false, false, false, false, false],
                HeldItem::PowerWeight,
                [false; 6],
                HeldItem::PowerWeight,
            ),
            pair(
                [true, true, true, true, true, false],
                HeldItem::Everstone,
                [true, true, true, true, false, false],
                HeldItem::DestinyKnot,
            ),
        ];
        for pair in scenarios {
            let inheritance = calculate_iv_inheritance(&pair, Language::English);
            assert!(
                (total_probability(&inheritance) - 1.0).abs() < 1e-6,
                "distribution does not sum to 1 for {} holding {:?}",
                pair.parent_a.name,
                pair.parent_a.item,
            );
        }
    }

    #[test]
    fn peaks_between_three_and_four_for_strong_parents() {
        let pair = pair(
            [true, true, true, true, true, false],
            HeldItem::None,
            [true, true, true, true, false, false],
            HeldItem::None,
        );
        let inheritance = calculate_iv_inheritance(&pair, Language::English);

        assert_eq!(inheritance.inherited_slots, 3);
        assert_eq!(inheritance.forced_stats, Vec::new());

        // Three inherited slots over mostly perfect parents: no way to hatch zero perfect IVs.
        assert_eq!(probability_at(&inheritance, 0), None);
        for perfect_stats in 1..=6 {
            assert_matches::assert_matches!(
                probability_at(&inheritance, perfect_stats),
                Some(probability) if probability > 0.0
            );
        }
        assert!(probability_at(&inheritance, 3).unwrap() > 0.0);
    }

    #[test]
    fn destiny_knot_raises_high_count_mass() {
        let without = pair([true; 6], HeldItem::None, [false; 6], HeldItem::None);
        let with = pair([true; 6], HeldItem::DestinyKnot, [false; 6], HeldItem::None);

        let without = calculate_iv_inheritance(&without, Language::English);
        let with = calculate_iv_inheritance(&with, Language::English);

        assert_eq!(without.inherited_slots, 3);
        assert_eq!(with.inherited_slots, 5);
        assert!(mass_at_least(&with, 5) > mass_at_least(&without, 5));
    }

    #[test]
    fn power_item_and_destiny_knot_force_one_stat() {
        let pair = pair(
            [false, true, false, false, false, false],
            HeldItem::DestinyKnot,
            [false, true, false, false, false, false],
            HeldItem::PowerBracer,
        );
        let inheritance = calculate_iv_inheritance(&pair, Language::English);

        assert_eq!(inheritance.inherited_slots, 5);
        assert_eq!(inheritance.forced_stats, Vec::from_iter([Stat::Atk]));
        assert!((total_probability(&inheritance) - 1.0).abs() < 1e-6);
        // Both parents are perfect at the forced stat, so at least one perfect IV is guaranteed.
        assert_eq!(probability_at(&inheritance, 0), None);
    }

    #[test]
    fn same_stat_power_items_collapse_to_one_forced_slot() {
        let pair = pair(
            [true, false, false, false, false, false],
            HeldItem::PowerWeight,
            [false; 6],
            HeldItem::PowerWeight,
        );
        let inheritance = calculate_iv_inheritance(&pair, Language::English);

        assert_eq!(inheritance.forced_stats, Vec::from_iter([Stat::HP]));
        // Hatching zero perfect IVs requires the coin flip to miss and the three uninherited
        // stats to each miss their 1/32 roll (the two inherited slots have no perfect source).
        let expect = 0.5 * (31.0f64 / 32.0).powi(3);
        assert!((probability_at(&inheritance, 0).unwrap() - expect).abs() < 1e-12);
    }

    #[test]
    fn reports_localized_descriptions() {
        let pair = pair(
            [true, true, true, true, true, false],
            HeldItem::DestinyKnot,
            [true, true, true, true, false, false],
            HeldItem::None,
        );
        let english = calculate_iv_inheritance(&pair, Language::English);
        let vietnamese = calculate_iv_inheritance(&pair, Language::Vietnamese);

        for (english, vietnamese) in english.distribution.iter().zip(&vietnamese.distribution) {
            assert_eq!(english.perfect_stats, vietnamese.perfect_stats);
            assert_eq!(english.probability, vietnamese.probability);
            assert_eq!(english.percentage, vietnamese.percentage);
            assert_ne!(english.description, vietnamese.description);
        }

        let top = english
            .distribution
            .iter()
            .find(|entry| entry.perfect_stats == 5)
            .unwrap();
        assert!(
            top.description
                .contains(&"Destiny Knot: 5 of 6 IVs inherited (instead of 3).".to_owned())
        );
    }
}
