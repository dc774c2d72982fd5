//! Constants used throughout the rule engine.
//!
//! Caps, defaults and fixed scores that shape every response. The reference tables themselves
//! live in [`crate::reference`].

/// Hospital budget applied when a request omits one (or sends zero).
pub const DEFAULT_BUDGET: f64 = 2000.0;

/// Maximum number of hospitals returned by a symptom check.
pub const MAX_SUGGESTED_HOSPITALS: usize = 3;

/// Maximum number of first-aid tips returned by a symptom check.
pub const MAX_FIRST_AID_TIPS: usize = 5;

/// Symptom count above which a non-urgent check is classified as medium urgency.
pub const MEDIUM_URGENCY_SYMPTOM_COUNT: usize = 2;

/// Markers that make any symptom check high urgency.
pub const URGENT_MARKERS: [&str; 3] = ["chest pain", "breathing difficulty", "severe headache"];

/// Cost units per kilometre used to derive the displayed hospital distance.
pub const COST_PER_KM: f64 = 300.0;

/// Consultation fee of the fallback General Physician recommendation.
pub const FALLBACK_CONSULTATION_FEE: f64 = 800.0;

/// Confidence reported when at least one medicine was recognised.
pub const CONFIDENCE_MEDICINES_FOUND: f64 = 0.75;

/// Confidence reported when no medicine was recognised.
pub const CONFIDENCE_NO_MEDICINES: f64 = 0.3;

/// Category used when a health tips request names none.
pub const DEFAULT_TIPS_CATEGORY: &str = "general";
