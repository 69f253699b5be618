//! Validated athlete attributes used by the calculation engine

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Male,
    Female,
}

/// Weight goal. Serialized with the long-form labels the API echoes back
/// in `baseStats.goal`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Goal {
    #[serde(rename = "Lose Weight")]
    Lose,
    #[serde(rename = "Maintain Weight")]
    Maintain,
    #[serde(rename = "Gain Weight")]
    Gain,
}

/// A fully validated profile. Every field is concrete: optional request
/// parameters have already been defaulted or approximated by the validator.
#[derive(Debug, Clone, PartialEq)]
pub struct AthleteProfile {
    pub height: f64,
    pub weight: f64,
    pub age: u32,
    pub sex: Sex,
    pub body_fat: f64,
    pub active_job: bool,
    pub exercise_freq: u8,
    pub goal: Goal,
}
