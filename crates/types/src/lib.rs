//! # Dhanvantri Types
//!
//! Small value types shared by the rule engine and its API surfaces.
//!
//! The enumerations here are part of the wire contract: their lowercase string forms
//! (`low`/`medium`/`high`, `mild`/`moderate`/`severe`) are reproduced verbatim in every response.

use serde::{Deserialize, Serialize};

/// Priority of a specialist consultation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }
}

/// Coarse triage classification of a set of symptoms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UrgencyLevel {
    Low,
    Medium,
    High,
}

impl UrgencyLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            UrgencyLevel::Low => "low",
            UrgencyLevel::Medium => "medium",
            UrgencyLevel::High => "high",
        }
    }

    /// The severity that is always reported alongside this urgency level.
    pub fn severity(&self) -> Severity {
        match self {
            UrgencyLevel::Low => Severity::Mild,
            UrgencyLevel::Medium => Severity::Moderate,
            UrgencyLevel::High => Severity::Severe,
        }
    }
}

/// Severity classification, computed in lockstep with [`UrgencyLevel`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Mild,
    Moderate,
    Severe,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Mild => "mild",
            Severity::Moderate => "moderate",
            Severity::Severe => "severe",
        }
    }
}

macro_rules! display_as_str {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl std::fmt::Display for $ty {
                fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                    f.write_str(self.as_str())
                }
            }
        )+
    };
}

display_as_str!(Priority, UrgencyLevel, Severity);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enums_serialise_as_lowercase_strings() {
        assert_eq!(serde_json::to_string(&Priority::High).unwrap(), "\"high\"");
        assert_eq!(
            serde_json::to_string(&UrgencyLevel::Medium).unwrap(),
            "\"medium\""
        );
        assert_eq!(serde_json::to_string(&Severity::Mild).unwrap(), "\"mild\"");
    }

    #[test]
    fn urgency_level_maps_to_severity() {
        assert_eq!(UrgencyLevel::Low.severity(), Severity::Mild);
        assert_eq!(UrgencyLevel::Medium.severity(), Severity::Moderate);
        assert_eq!(UrgencyLevel::High.severity(), Severity::Severe);
    }

    #[test]
    fn display_matches_wire_form() {
        assert_eq!(Priority::Medium.to_string(), "medium");
        assert_eq!(UrgencyLevel::High.to_string(), "high");
        assert_eq!(Severity::Severe.to_string(), "severe");
    }
}
