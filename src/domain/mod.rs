//! Core macro-calculator logic
//!
//! Validates raw request fields into an `AthleteProfile` and derives the
//! energy and macronutrient numbers returned by the API.

pub mod diet;
pub mod engine;
pub mod profile;
pub mod validate;
