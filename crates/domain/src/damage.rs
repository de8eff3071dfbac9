//! Damage estimation - a pure function over a character's stats and skills
//!
//! The calculator never fails and never touches external state: a missing
//! character or an empty skill list yields a zero result. Negative or extreme
//! inputs are not clamped; they propagate arithmetically.

use serde::{Deserialize, Serialize};

use crate::entities::Character;

/// Name used when a skill has no name yet
pub const UNNAMED_SKILL: &str = "Unnamed skill";

/// Damage estimate for one skill
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillDamage {
    pub name: String,
    pub damage: i64,
}

/// Full damage breakdown for a character
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DamageResult {
    pub total_damage: i64,
    /// Per-skill estimates, in skill-list order
    pub skills: Vec<SkillDamage>,
}

/// Estimate the expected damage of every skill on `character`.
///
/// Per skill, `expected = base_attack * multiplier * (1 + crit_rate * crit_damage)`,
/// rounded half away from zero. The total is the sum of the rounded per-skill
/// values; the sum is already exact over integers, and the per-skill rounding
/// is what downstream consumers compare against.
///
/// The rounded value is reported as an `i64`, so inputs whose product exceeds
/// the `i64` range saturate at `i64::MIN`/`i64::MAX` instead of carrying the
/// float magnitude further.
pub fn calculate_damage(character: Option<&Character>) -> DamageResult {
    let Some(character) = character else {
        return DamageResult::default();
    };
    if character.skills.is_empty() {
        return DamageResult::default();
    }

    let crit_factor = 1.0 + character.crit_rate * character.crit_damage;
    let mut total_damage = 0i64;

    let skills = character
        .skills
        .iter()
        .map(|skill| {
            let expected = character.base_attack * skill.multiplier * crit_factor;
            let damage = expected.round() as i64;
            total_damage += damage;

            let name = if skill.name.is_empty() {
                UNNAMED_SKILL.to_string()
            } else {
                skill.name.clone()
            };
            SkillDamage { name, damage }
        })
        .collect();

    DamageResult {
        total_damage,
        skills,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{Skill, SkillKind};
    use chrono::Utc;

    fn character_with(
        base_attack: f64,
        crit_rate: f64,
        crit_damage: f64,
        multipliers: &[f64],
    ) -> Character {
        let mut character =
            Character::new(Utc::now()).with_stats(base_attack, crit_rate, crit_damage);
        for m in multipliers {
            character.skills.push(Skill::new(SkillKind::Normal).with_multiplier(*m));
        }
        character
    }

    #[test]
    fn no_character_yields_zero() {
        let result = calculate_damage(None);
        assert_eq!(result.total_damage, 0);
        assert!(result.skills.is_empty());
    }

    #[test]
    fn empty_skill_list_yields_zero() {
        let character = character_with(1000.0, 0.5, 1.5, &[]);
        let result = calculate_damage(Some(&character));
        assert_eq!(result.total_damage, 0);
        assert!(result.skills.is_empty());
    }

    #[test]
    fn documented_example_yields_1750() {
        // 1000 * 1 * (1 + 0.5 * 1.5) = 1750
        let character = character_with(1000.0, 0.5, 1.5, &[1.0]);
        let result = calculate_damage(Some(&character));
        assert_eq!(result.total_damage, 1750);
        assert_eq!(result.skills.len(), 1);
        assert_eq!(result.skills[0].damage, 1750);
    }

    #[test]
    fn total_is_sum_of_rounded_per_skill_values() {
        let character = character_with(333.0, 0.31, 1.27, &[0.7, 1.3, 2.1]);
        let result = calculate_damage(Some(&character));
        let sum: i64 = result.skills.iter().map(|s| s.damage).sum();
        assert_eq!(result.total_damage, sum);
    }

    #[test]
    fn output_order_matches_skill_order() {
        let mut character = character_with(1000.0, 0.0, 0.0, &[]);
        character.skills.push(
            Skill::new(SkillKind::Red)
                .with_name("alpha")
                .with_multiplier(1.0),
        );
        character.skills.push(
            Skill::new(SkillKind::Ultimate)
                .with_name("omega")
                .with_multiplier(2.0),
        );
        let result = calculate_damage(Some(&character));
        assert_eq!(result.skills[0].name, "alpha");
        assert_eq!(result.skills[1].name, "omega");
    }

    #[test]
    fn unnamed_skill_gets_placeholder() {
        let character = character_with(100.0, 0.0, 0.0, &[1.0]);
        let result = calculate_damage(Some(&character));
        assert_eq!(result.skills[0].name, UNNAMED_SKILL);
    }

    #[test]
    fn calculation_is_idempotent() {
        let character = character_with(812.0, 0.43, 1.9, &[0.6, 3.2]);
        let first = calculate_damage(Some(&character));
        let second = calculate_damage(Some(&character));
        assert_eq!(first, second);
    }

    #[test]
    fn negative_inputs_propagate_without_clamping() {
        let character = character_with(-500.0, 0.5, 1.5, &[1.0]);
        let result = calculate_damage(Some(&character));
        assert_eq!(result.total_damage, -875);
    }

    #[test]
    fn out_of_range_products_saturate_at_i64_bounds() {
        let character = character_with(1e300, 0.5, 1.5, &[1.0]);
        let result = calculate_damage(Some(&character));
        assert_eq!(result.total_damage, i64::MAX);

        let character = character_with(-1e300, 0.5, 1.5, &[1.0]);
        let result = calculate_damage(Some(&character));
        assert_eq!(result.total_damage, i64::MIN);
    }

    #[test]
    fn crit_rate_above_one_is_accepted() {
        // 100 * 1 * (1 + 1.2 * 2.0) = 340
        let character = character_with(100.0, 1.2, 2.0, &[1.0]);
        let result = calculate_damage(Some(&character));
        assert_eq!(result.total_damage, 340);
    }
}
