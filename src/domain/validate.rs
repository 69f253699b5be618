//! Field parsing and range validation for calculation requests
//!
//! Every checker is a pure function that either returns the validated value
//! or a `FieldError` naming the field and the reason. `build_profile` runs
//! all checkers and reports every failing field at once.

use serde::{Deserialize, Serialize};

use crate::domain::engine;
use crate::domain::profile::{AthleteProfile, Goal, Sex};

pub const MIN_HEIGHT: f64 = 3.0;
pub const MAX_HEIGHT: f64 = 10.0;
pub const MAX_WEIGHT: f64 = 1000.0;
pub const MAX_AGE: i64 = 125;

/// Raw query parameters of `GET /api/v1/calculate`. Everything arrives as an
/// optional string so that type mismatches surface as per-field errors
/// instead of a framework-level rejection.
#[derive(Debug, Default, Deserialize)]
pub struct CalculateParams {
    pub height: Option<String>,
    pub weight: Option<String>,
    pub age: Option<String>,
    pub sex: Option<String>,
    pub active: Option<String>,
    pub bf: Option<String>,
    pub ef: Option<String>,
    pub goal: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub reason: String,
}

impl FieldError {
    fn new(field: &'static str, reason: impl Into<String>) -> Self {
        Self {
            field,
            reason: reason.into(),
        }
    }
}

fn parse_required_f64(field: &'static str, raw: Option<&str>) -> Result<f64, FieldError> {
    let Some(raw) = raw.map(str::trim).filter(|value| !value.is_empty()) else {
        return Err(FieldError::new(field, format!("{field} is required")));
    };

    let value = raw
        .parse::<f64>()
        .map_err(|_| FieldError::new(field, format!("{field} must be a number")))?;

    if !value.is_finite() {
        return Err(FieldError::new(
            field,
            format!("{field} must be a finite number"),
        ));
    }

    Ok(value)
}

pub fn validate_height(raw: Option<&str>) -> Result<f64, FieldError> {
    let height = parse_required_f64("height", raw)?;
    if height <= MIN_HEIGHT || height >= MAX_HEIGHT {
        return Err(FieldError::new(
            "height",
            "height must be between 3.0 and 10.0 exclusive",
        ));
    }
    Ok(height)
}

pub fn validate_weight(raw: Option<&str>) -> Result<f64, FieldError> {
    let weight = parse_required_f64("weight", raw)?;
    if weight <= 0.0 || weight > MAX_WEIGHT {
        return Err(FieldError::new(
            "weight",
            "weight must be positive and at most 1000",
        ));
    }
    Ok(weight)
}

pub fn validate_age(raw: Option<&str>) -> Result<u32, FieldError> {
    let Some(raw) = raw.map(str::trim).filter(|value| !value.is_empty()) else {
        return Err(FieldError::new("age", "age is required"));
    };

    let age = raw
        .parse::<i64>()
        .map_err(|_| FieldError::new("age", "age must be an integer"))?;

    if !(0..=MAX_AGE).contains(&age) {
        return Err(FieldError::new("age", "age must be between 0 and 125"));
    }

    Ok(age as u32)
}

pub fn validate_sex(raw: Option<&str>) -> Result<Sex, FieldError> {
    match raw.map(str::trim) {
        Some("male") => Ok(Sex::Male),
        Some("female") => Ok(Sex::Female),
        Some(_) => Err(FieldError::new("sex", "sex must be male or female")),
        None => Err(FieldError::new("sex", "sex is required")),
    }
}

pub fn validate_body_fat(raw: &str) -> Result<f64, FieldError> {
    let body_fat = parse_required_f64("bf", Some(raw))?;
    if !(0.0..=100.0).contains(&body_fat) {
        return Err(FieldError::new("bf", "bf must be between 0 and 100"));
    }
    Ok(body_fat)
}

pub fn validate_active(raw: Option<&str>) -> Result<bool, FieldError> {
    match raw.map(str::trim) {
        None => Ok(false),
        Some("true") => Ok(true),
        Some("false") => Ok(false),
        Some(_) => Err(FieldError::new("active", "active must be true or false")),
    }
}

pub fn validate_exercise_freq(raw: Option<&str>) -> Result<u8, FieldError> {
    match raw.map(str::trim) {
        None => Ok(1),
        Some("1") => Ok(1),
        Some("2") => Ok(2),
        Some("3") => Ok(3),
        Some(_) => Err(FieldError::new("ef", "ef must be one of: 1, 2, 3")),
    }
}

pub fn validate_goal(raw: Option<&str>) -> Result<Goal, FieldError> {
    match raw.map(str::trim) {
        None => Ok(Goal::Maintain),
        Some("lose") => Ok(Goal::Lose),
        Some("maintain") => Ok(Goal::Maintain),
        Some("gain") => Ok(Goal::Gain),
        Some(_) => Err(FieldError::new(
            "goal",
            "goal must be one of: lose, maintain, gain",
        )),
    }
}

fn collect<T>(result: Result<T, FieldError>, errors: &mut Vec<FieldError>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(error) => {
            errors.push(error);
            None
        }
    }
}

/// Validates every field of the request and builds a complete profile.
/// Collects errors across all fields so a single response can name each
/// failing field. A missing `bf` is approximated from sex.
pub fn build_profile(params: &CalculateParams) -> Result<AthleteProfile, Vec<FieldError>> {
    let mut errors = Vec::new();

    let height = collect(validate_height(params.height.as_deref()), &mut errors);
    let weight = collect(validate_weight(params.weight.as_deref()), &mut errors);
    let age = collect(validate_age(params.age.as_deref()), &mut errors);
    let sex = collect(validate_sex(params.sex.as_deref()), &mut errors);
    let active_job = collect(validate_active(params.active.as_deref()), &mut errors);
    let exercise_freq = collect(validate_exercise_freq(params.ef.as_deref()), &mut errors);
    let goal = collect(validate_goal(params.goal.as_deref()), &mut errors);

    let body_fat = match params.bf.as_deref().map(str::trim) {
        Some(raw) if !raw.is_empty() => collect(validate_body_fat(raw), &mut errors),
        _ => sex.map(engine::approximate_body_fat),
    };

    match (
        height,
        weight,
        age,
        sex,
        body_fat,
        active_job,
        exercise_freq,
        goal,
    ) {
        (
            Some(height),
            Some(weight),
            Some(age),
            Some(sex),
            Some(body_fat),
            Some(active_job),
            Some(exercise_freq),
            Some(goal),
        ) if errors.is_empty() => Ok(AthleteProfile {
            height,
            weight,
            age,
            sex,
            body_fat,
            active_job,
            exercise_freq,
            goal,
        }),
        _ => Err(errors),
    }
}
