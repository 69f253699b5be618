//! Goal-adjusted calorie targets and the protein/carb/fat split

use serde::Serialize;

use crate::domain::engine;
use crate::domain::profile::{AthleteProfile, Goal};

pub const PROTEIN_KCAL_PER_GRAM: f64 = 4.0;
pub const CARB_KCAL_PER_GRAM: f64 = 4.0;
pub const FAT_KCAL_PER_GRAM: f64 = 9.0;

/// Roughly one pound of body weight per week in either direction.
pub const LOSE_DEFICIT_KCAL: f64 = 500.0;
pub const GAIN_SURPLUS_KCAL: f64 = 500.0;

/// Share of the kcal remaining after protein. Must sum to 1 so that the
/// macro kcal reconstruct the target exactly.
const CARB_SHARE: f64 = 0.6;
const FAT_SHARE: f64 = 0.4;

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Macro {
    pub grams: f64,
    pub kcal: f64,
}

impl Macro {
    fn from_kcal(kcal: f64, kcal_per_gram: f64) -> Self {
        Self {
            grams: kcal / kcal_per_gram,
            kcal,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct MacroPlan {
    pub target_kcal: f64,
    pub protein: Macro,
    pub carb: Macro,
    pub fat: Macro,
}

pub fn target_kcal(goal: Goal, tdee: f64) -> f64 {
    match goal {
        Goal::Lose => tdee - LOSE_DEFICIT_KCAL,
        Goal::Maintain => tdee,
        Goal::Gain => tdee + GAIN_SURPLUS_KCAL,
    }
}

/// Allocates the goal-adjusted TDEE across the three macros. Protein is fixed
/// by the profile's protein requirement; carbs and fat share the remainder.
/// Uses the unrounded TDEE so the split is exact.
pub fn plan(profile: &AthleteProfile) -> MacroPlan {
    let tdee = engine::total_daily_energy_expenditure(profile);
    let target = target_kcal(profile.goal, tdee);

    let protein_kcal = engine::protein_requirement(profile) * PROTEIN_KCAL_PER_GRAM;
    let remaining = target - protein_kcal;

    MacroPlan {
        target_kcal: target,
        protein: Macro::from_kcal(protein_kcal, PROTEIN_KCAL_PER_GRAM),
        carb: Macro::from_kcal(remaining * CARB_SHARE, CARB_KCAL_PER_GRAM),
        fat: Macro::from_kcal(remaining * FAT_SHARE, FAT_KCAL_PER_GRAM),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::profile::Sex;

    fn profile_with_goal(goal: Goal) -> AthleteProfile {
        AthleteProfile {
            height: 6.0,
            weight: 180.0,
            age: 30,
            sex: Sex::Male,
            body_fat: 15.0,
            active_job: true,
            exercise_freq: 1,
            goal,
        }
    }

    #[test]
    fn target_shifts_by_goal() {
        assert_eq!(target_kcal(Goal::Lose, 2500.0), 2000.0);
        assert_eq!(target_kcal(Goal::Maintain, 2500.0), 2500.0);
        assert_eq!(target_kcal(Goal::Gain, 2500.0), 3000.0);
    }

    #[test]
    fn grams_reconstruct_kcal_for_every_goal() {
        for goal in [Goal::Lose, Goal::Maintain, Goal::Gain] {
            let plan = plan(&profile_with_goal(goal));
            assert!((plan.protein.grams * PROTEIN_KCAL_PER_GRAM - plan.protein.kcal).abs() < 1e-9);
            assert!((plan.carb.grams * CARB_KCAL_PER_GRAM - plan.carb.kcal).abs() < 1e-9);
            assert!((plan.fat.grams * FAT_KCAL_PER_GRAM - plan.fat.kcal).abs() < 1e-9);
        }
    }

    #[test]
    fn macro_kcal_sum_to_target_for_every_goal() {
        for goal in [Goal::Lose, Goal::Maintain, Goal::Gain] {
            let plan = plan(&profile_with_goal(goal));
            let sum = plan.protein.kcal + plan.carb.kcal + plan.fat.kcal;
            assert!((sum - plan.target_kcal).abs() < 1e-6);
        }
    }

    #[test]
    fn protein_kcal_is_four_per_required_gram() {
        let profile = profile_with_goal(Goal::Maintain);
        let plan = plan(&profile);
        assert!((plan.protein.kcal - 153.0 * PROTEIN_KCAL_PER_GRAM).abs() < 1e-9);
        assert!((plan.protein.grams - 153.0).abs() < 1e-9);
    }

    #[test]
    fn remainder_splits_sixty_forty() {
        let plan = plan(&profile_with_goal(Goal::Maintain));
        let remaining = plan.target_kcal - plan.protein.kcal;
        assert!((plan.carb.kcal - remaining * 0.6).abs() < 1e-9);
        assert!((plan.fat.kcal - remaining * 0.4).abs() < 1e-9);
    }
}
