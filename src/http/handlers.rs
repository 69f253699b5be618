//! Axum HTTP handlers for the web server
//!
//! Provides the calculation endpoint, a usage page, and a health probe, plus
//! the response assembly from a validated profile.

use axum::{extract::Query, response::Html, Json};
use serde::Serialize;

use crate::domain::diet::{self, Macro};
use crate::domain::engine;
use crate::domain::profile::{AthleteProfile, Goal, Sex};
use crate::domain::validate::{build_profile, CalculateParams};
use crate::errors::AppError;

const USAGE_PAGE: &str = r#"<h1>MacrosCalculator API</h1>

<p>Send a GET request to <code>/api/v1/calculate</code> with the following query strings:</p>

<ul>
    <li>height = (float, exclusive range 3.0-10.0)</li>
    <li>weight = (float, at most 1000)</li>
    <li>age = (integer, 0-125)</li>
    <li>sex = (male, female)</li>
    <li>active = (true, false; optional, default false)</li>
    <li>bf = (float, 0-100; optional, approximated from sex when absent)</li>
    <li>ef = (1, 2, 3; optional, default 1)</li>
    <li>goal = (lose, maintain, gain; optional, default maintain)</li>
</ul>

<hr>

<strong>Example:</strong> /api/v1/calculate?height=6&weight=180&sex=male&age=30&goal=maintain&ef=1&active=true&bf=15.0

<hr>

<p>Parameter order does not matter. Invalid fields are reported back with the reason.</p>
"#;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

#[derive(Debug, Serialize)]
pub struct BaseStats {
    pub height: f64,
    pub weight: f64,
    pub age: u32,
    pub sex: Sex,
    #[serde(rename = "bodyFat")]
    pub body_fat: f64,
    #[serde(rename = "activeJob")]
    pub active_job: bool,
    #[serde(rename = "exerciseFrequency")]
    pub exercise_frequency: u8,
    pub goal: Goal,
}

#[derive(Debug, Serialize)]
pub struct Macros {
    pub protein: Macro,
    pub carb: Macro,
    pub fat: Macro,
}

#[derive(Debug, Serialize)]
pub struct Calculations {
    #[serde(rename = "BMI")]
    pub bmi: f64,
    #[serde(rename = "BMIstatus")]
    pub bmi_status: &'static str,
    #[serde(rename = "TDEE")]
    pub tdee: f64,
    #[serde(rename = "LBM")]
    pub lbm: f64,
    #[serde(rename = "BMR")]
    pub bmr: f64,
    #[serde(rename = "minProtein")]
    pub min_protein: f64,
    pub macros: Macros,
}

#[derive(Debug, Serialize)]
pub struct StatsResponse {
    #[serde(rename = "baseStats")]
    pub base_stats: BaseStats,
    pub calculations: Calculations,
}

pub async fn usage() -> Html<&'static str> {
    Html(USAGE_PAGE)
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

pub async fn calculate(
    Query(params): Query<CalculateParams>,
) -> Result<Json<StatsResponse>, AppError> {
    let profile = build_profile(&params).map_err(AppError::validation)?;
    Ok(Json(build_stats(&profile)))
}

/// Assembles the response for a validated profile. Derived numbers are
/// rounded to 4 decimal places; macro grams/kcal keep full precision.
pub fn build_stats(profile: &AthleteProfile) -> StatsResponse {
    let bmi = engine::body_mass_index(profile);
    let plan = diet::plan(profile);

    StatsResponse {
        base_stats: BaseStats {
            height: profile.height,
            weight: profile.weight,
            age: profile.age,
            sex: profile.sex,
            body_fat: profile.body_fat,
            active_job: profile.active_job,
            exercise_frequency: profile.exercise_freq,
            goal: profile.goal,
        },
        calculations: Calculations {
            bmi: engine::round4(bmi),
            bmi_status: engine::bmi_status(bmi),
            tdee: engine::round4(engine::total_daily_energy_expenditure(profile)),
            lbm: engine::round4(engine::lean_body_mass(profile)),
            bmr: engine::round4(engine::basal_metabolic_rate(profile)),
            min_protein: engine::round4(engine::protein_requirement(profile)),
            macros: Macros {
                protein: plan.protein,
                carb: plan.carb,
                fat: plan.fat,
            },
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn example_profile() -> AthleteProfile {
        AthleteProfile {
            height: 6.0,
            weight: 180.0,
            age: 30,
            sex: Sex::Male,
            body_fat: 15.0,
            active_job: true,
            exercise_freq: 1,
            goal: Goal::Maintain,
        }
    }

    #[test]
    fn build_stats_echoes_profile_and_rounds_calculations() {
        let stats = build_stats(&example_profile());

        assert_eq!(stats.base_stats.height, 6.0);
        assert_eq!(stats.base_stats.weight, 180.0);
        assert_eq!(stats.base_stats.sex, Sex::Male);
        assert_eq!(stats.base_stats.goal, Goal::Maintain);

        assert_eq!(stats.calculations.bmi, 5.0);
        assert_eq!(stats.calculations.bmi_status, "underweight");
        assert!((stats.calculations.bmr - 1814.4663).abs() < 1e-6);
        assert!((stats.calculations.tdee - 2494.8911).abs() < 1e-6);
        assert_eq!(stats.calculations.lbm, 153.0);
        assert_eq!(stats.calculations.min_protein, 153.0);
    }

    #[test]
    fn build_stats_macros_keep_full_precision() {
        let stats = build_stats(&example_profile());
        let macros = &stats.calculations.macros;

        assert!((macros.protein.kcal - 612.0).abs() < 1e-6);
        assert!((macros.protein.grams - 153.0).abs() < 1e-6);
        assert!((macros.carb.grams * 4.0 - macros.carb.kcal).abs() < 1e-9);
        assert!((macros.fat.grams * 9.0 - macros.fat.kcal).abs() < 1e-9);
    }
}
