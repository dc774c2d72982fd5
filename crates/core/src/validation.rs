//! Input validation utilities.
//!
//! These checks run before any rule is evaluated, so a rejected request never produces a partial
//! result.

use crate::{EngineError, EngineResult};

/// Validates that a symptom check names at least one symptom.
///
/// Individual entries are not inspected: an empty entry simply matches no rule.
///
/// # Errors
///
/// Returns `EngineError::InvalidInput` if `symptoms` is empty.
pub fn validate_symptoms(symptoms: &[String]) -> EngineResult<()> {
    if symptoms.is_empty() {
        return Err(EngineError::InvalidInput(
            "at least one symptom is required".into(),
        ));
    }
    Ok(())
}

/// Validates an optional hospital budget.
///
/// A missing budget or any budget `<= 0` is accepted; these select the configured default.
///
/// # Errors
///
/// Returns `EngineError::InvalidInput` if the budget is NaN or infinite.
pub fn validate_budget(budget: Option<f64>) -> EngineResult<()> {
    match budget {
        Some(b) if !b.is_finite() => Err(EngineError::InvalidInput(format!(
            "budget must be a finite number, got {b}"
        ))),
        _ => Ok(()),
    }
}
