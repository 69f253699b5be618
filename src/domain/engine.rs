//! Closed-form calculations derived from a validated profile
//!
//! BMI keeps the raw weight/height² quotient of the supplied units. BMR uses
//! Mifflin-St Jeor with inputs taken as pounds and feet, matching the
//! validation ranges.

use crate::domain::profile::{AthleteProfile, Sex};

pub const KG_PER_LB: f64 = 0.453_592_37;
pub const CM_PER_FT: f64 = 30.48;

/// Minimum protein in grams per unit of lean body mass.
const PROTEIN_PER_LEAN_UNIT: f64 = 1.0;

/// Body fat assumed when the request omits `bf`.
const APPROX_BODY_FAT_MALE: f64 = 20.0;
const APPROX_BODY_FAT_FEMALE: f64 = 28.0;

pub fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}

pub fn body_mass_index(profile: &AthleteProfile) -> f64 {
    profile.weight / (profile.height * profile.height)
}

/// 18.5 is already "normal" and 30 is already "obese".
pub fn bmi_status(bmi: f64) -> &'static str {
    if bmi < 18.5 {
        "underweight"
    } else if bmi < 25.0 {
        "normal"
    } else if bmi < 30.0 {
        "overweight"
    } else {
        "obese"
    }
}

pub fn basal_metabolic_rate(profile: &AthleteProfile) -> f64 {
    let weight_kg = profile.weight * KG_PER_LB;
    let height_cm = profile.height * CM_PER_FT;
    let sex_offset = match profile.sex {
        Sex::Male => 5.0,
        Sex::Female => -161.0,
    };

    10.0 * weight_kg + 6.25 * height_cm - 5.0 * f64::from(profile.age) + sex_offset
}

/// An active job shifts the multiplier one exercise-frequency step up.
pub fn activity_multiplier(active_job: bool, exercise_freq: u8) -> f64 {
    match (active_job, exercise_freq) {
        (false, 1) => 1.2,
        (false, 2) => 1.375,
        (false, _) => 1.55,
        (true, 1) => 1.375,
        (true, 2) => 1.55,
        (true, _) => 1.725,
    }
}

pub fn total_daily_energy_expenditure(profile: &AthleteProfile) -> f64 {
    basal_metabolic_rate(profile) * activity_multiplier(profile.active_job, profile.exercise_freq)
}

pub fn lean_body_mass(profile: &AthleteProfile) -> f64 {
    profile.weight * (1.0 - profile.body_fat / 100.0)
}

pub fn protein_requirement(profile: &AthleteProfile) -> f64 {
    lean_body_mass(profile) * PROTEIN_PER_LEAN_UNIT
}

pub fn approximate_body_fat(sex: Sex) -> f64 {
    match sex {
        Sex::Male => APPROX_BODY_FAT_MALE,
        Sex::Female => APPROX_BODY_FAT_FEMALE,
    }
}
