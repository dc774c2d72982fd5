//! Symptom analysis.
//!
//! Maps a list of free-text symptoms to an urgency classification, a deduplicated list of
//! specialists, a budget-filtered list of hospitals and a set of first-aid tips. All matching is
//! lowercase substring containment against the [`ReferenceData`] tables, so "feverish" matches
//! the "fever" rule.

use std::collections::HashSet;

use dhanvantri_types::{Priority, Severity, UrgencyLevel};
use serde::{Deserialize, Serialize};

use crate::config::CoreConfig;
use crate::constants::{
    COST_PER_KM, FALLBACK_CONSULTATION_FEE, MAX_FIRST_AID_TIPS, MAX_SUGGESTED_HOSPITALS,
    MEDIUM_URGENCY_SYMPTOM_COUNT, URGENT_MARKERS,
};
use crate::reference::ReferenceData;
use crate::validation::{validate_budget, validate_symptoms};
use crate::EngineResult;

/// A symptom check request.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SymptomCheck {
    pub symptoms: Vec<String>,
    /// Accepted for compatibility; not used by any rule.
    pub age: Option<u32>,
    /// Accepted for compatibility; not used by any rule.
    pub gender: Option<String>,
    /// Hospital budget. `None` or any value `<= 0` selects the configured default.
    pub budget: Option<f64>,
}

impl SymptomCheck {
    pub fn new<I, S>(symptoms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            symptoms: symptoms.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    pub fn with_budget(mut self, budget: f64) -> Self {
        self.budget = Some(budget);
        self
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DoctorRecommendation {
    pub specialization: String,
    pub priority: Priority,
    pub reason: String,
    pub estimated_consultation_fee: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HospitalRecommendation {
    pub name: String,
    pub rating: f64,
    pub estimated_cost: f64,
    /// Display distance such as `"5 km"`.
    pub distance: String,
}

/// Outcome of a symptom check.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SymptomCheckResult {
    pub severity: Severity,
    pub urgency_level: UrgencyLevel,
    pub recommended_specialists: Vec<DoctorRecommendation>,
    pub suggested_hospitals: Vec<HospitalRecommendation>,
    /// Unique tips; only set membership is meaningful, not order.
    pub first_aid_tips: Vec<String>,
}

/// Consultation fee charged for a given priority.
pub fn consultation_fee(priority: Priority) -> f64 {
    match priority {
        Priority::High => 1500.0,
        Priority::Medium => 1000.0,
        Priority::Low => 800.0,
    }
}

/// Classify urgency from lowercased symptoms.
///
/// Any urgent marker wins; otherwise the raw symptom count decides, regardless of which
/// symptoms matched a rule.
pub fn classify_urgency(symptoms: &[String]) -> UrgencyLevel {
    let urgent = symptoms
        .iter()
        .any(|symptom| URGENT_MARKERS.iter().any(|&marker| symptom.contains(marker)));

    if urgent {
        UrgencyLevel::High
    } else if symptoms.len() > MEDIUM_URGENCY_SYMPTOM_COUNT {
        UrgencyLevel::Medium
    } else {
        UrgencyLevel::Low
    }
}

/// Match lowercased symptoms against the specialist table.
///
/// Symptoms are scanned in input order and rules in table order. A specialization is added at
/// most once. If nothing matched, a single General Physician recommendation is returned.
pub fn recommend_specialists(
    data: &ReferenceData,
    symptoms: &[String],
) -> Vec<DoctorRecommendation> {
    let mut recommendations = Vec::new();
    let mut seen: HashSet<&str> = HashSet::new();

    for symptom in symptoms {
        for rule in data.specialists {
            if symptom.contains(rule.keyword) && seen.insert(rule.specialization) {
                recommendations.push(DoctorRecommendation {
                    specialization: rule.specialization.to_string(),
                    priority: rule.priority,
                    reason: rule.reason.to_string(),
                    estimated_consultation_fee: consultation_fee(rule.priority),
                });
            }
        }
    }

    if recommendations.is_empty() {
        recommendations.push(DoctorRecommendation {
            specialization: "General Physician".into(),
            priority: Priority::Medium,
            reason: "General health evaluation recommended".into(),
            estimated_consultation_fee: FALLBACK_CONSULTATION_FEE,
        });
    }

    recommendations
}

/// Hospitals affordable within `budget`, in catalog order, capped at
/// [`MAX_SUGGESTED_HOSPITALS`].
pub fn suggest_hospitals(data: &ReferenceData, budget: f64) -> Vec<HospitalRecommendation> {
    data.hospitals
        .iter()
        .filter(|hospital| hospital.base_cost <= budget)
        .take(MAX_SUGGESTED_HOSPITALS)
        .map(|hospital| HospitalRecommendation {
            name: hospital.name.to_string(),
            rating: hospital.rating,
            estimated_cost: hospital.base_cost,
            distance: format!("{} km", (hospital.base_cost / COST_PER_KM).floor() as u64),
        })
        .collect()
}

/// Gather first-aid tips for lowercased symptoms.
///
/// Tips are deduplicated (first occurrence kept) and capped at [`MAX_FIRST_AID_TIPS`]. When no
/// rule matched, the fallback tips are returned.
pub fn collect_first_aid_tips(data: &ReferenceData, symptoms: &[String]) -> Vec<String> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut tips = Vec::new();

    for symptom in symptoms {
        for rule in data.first_aid {
            if !symptom.contains(rule.keyword) {
                continue;
            }
            for &tip in rule.tips {
                if seen.insert(tip) {
                    tips.push(tip.to_string());
                }
            }
        }
    }

    if tips.is_empty() {
        return data
            .fallback_first_aid
            .iter()
            .take(MAX_FIRST_AID_TIPS)
            .map(|tip| tip.to_string())
            .collect();
    }

    tips.truncate(MAX_FIRST_AID_TIPS);
    tips
}

pub(crate) fn check_symptoms(
    data: &ReferenceData,
    cfg: &CoreConfig,
    request: &SymptomCheck,
) -> EngineResult<SymptomCheckResult> {
    validate_symptoms(&request.symptoms)?;
    validate_budget(request.budget)?;

    let symptoms: Vec<String> = request.symptoms.iter().map(|s| s.to_lowercase()).collect();

    let budget = match request.budget {
        Some(b) if b > 0.0 => b,
        _ => cfg.default_budget(),
    };

    let urgency_level = classify_urgency(&symptoms);
    let recommended_specialists = recommend_specialists(data, &symptoms);
    let suggested_hospitals = suggest_hospitals(data, budget);
    let first_aid_tips = collect_first_aid_tips(data, &symptoms);

    tracing::debug!(
        symptom_count = symptoms.len(),
        age = ?request.age,
        gender = ?request.gender,
        budget,
        urgency = %urgency_level,
        specialists = recommended_specialists.len(),
        hospitals = suggested_hospitals.len(),
        "symptom check evaluated"
    );

    Ok(SymptomCheckResult {
        severity: urgency_level.severity(),
        urgency_level,
        recommended_specialists,
        suggested_hospitals,
        first_aid_tips,
    })
}
