//! Core runtime configuration.
//!
//! Configuration is resolved once at process startup and then passed into the
//! [`RuleEngine`](crate::RuleEngine). Request handling never reads environment variables.

use crate::constants::DEFAULT_BUDGET;
use crate::{EngineError, EngineResult};

/// Core configuration resolved at startup.
#[derive(Clone, Debug, PartialEq)]
pub struct CoreConfig {
    default_budget: f64,
}

impl CoreConfig {
    /// Create a new `CoreConfig`.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::InvalidInput` if `default_budget` is not a finite number greater
    /// than zero.
    pub fn new(default_budget: f64) -> EngineResult<Self> {
        if !default_budget.is_finite() || default_budget <= 0.0 {
            return Err(EngineError::InvalidInput(format!(
                "default budget must be a positive number, got {default_budget}"
            )));
        }

        Ok(Self { default_budget })
    }

    /// Budget used for hospital filtering when a request does not supply one.
    pub fn default_budget(&self) -> f64 {
        self.default_budget
    }
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            default_budget: DEFAULT_BUDGET,
        }
    }
}

/// Parse the default hospital budget from an optional string value.
///
/// If `value` is `None` or empty/whitespace, returns [`DEFAULT_BUDGET`].
pub fn default_budget_from_env_value(value: Option<String>) -> EngineResult<f64> {
    let value = value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty());

    let Some(raw) = value else {
        return Ok(DEFAULT_BUDGET);
    };

    let budget = raw.parse::<f64>().map_err(|e| {
        EngineError::InvalidInput(format!("default budget '{raw}' is not a number: {e}"))
    })?;
    CoreConfig::new(budget).map(|cfg| cfg.default_budget())
}
