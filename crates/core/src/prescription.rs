//! Prescription analysis.
//!
//! Recognises known medicines in free prescription text and suggests follow-up tests. The text is
//! lowercased and searched for substrings; there is no tokenisation.

use serde::{Deserialize, Serialize};

use crate::constants::{CONFIDENCE_MEDICINES_FOUND, CONFIDENCE_NO_MEDICINES};
use crate::reference::ReferenceData;
use crate::EngineResult;

/// A prescription analysis request.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PrescriptionReview {
    pub prescription_text: String,
    /// Accepted for compatibility; not used by any rule.
    pub patient_age: Option<u32>,
    /// Accepted for forward compatibility; not used by any rule.
    pub existing_conditions: Vec<String>,
}

impl PrescriptionReview {
    pub fn new(prescription_text: impl Into<String>) -> Self {
        Self {
            prescription_text: prescription_text.into(),
            ..Self::default()
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Medicine {
    pub name: String,
    pub dosage: String,
    pub frequency: String,
}

impl Medicine {
    fn placeholder() -> Self {
        Self {
            name: "No medicines detected".into(),
            dosage: "-".into(),
            frequency: "-".into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PrescriptionAnalysis {
    /// Never empty: holds a placeholder entry when nothing was recognised.
    pub medicines: Vec<Medicine>,
    pub suggested_tests: Vec<String>,
    pub precautions: Vec<String>,
    pub side_effects: Vec<String>,
    pub confidence: f64,
}

/// Uppercase the first character and lowercase the rest.
fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

/// Medicines whose name occurs in the lowercased `text`, in table order.
pub fn extract_medicines(data: &ReferenceData, text: &str) -> Vec<Medicine> {
    data.medicines
        .iter()
        .filter(|rule| text.contains(rule.name))
        .map(|rule| Medicine {
            name: capitalize(rule.name),
            dosage: rule.dosage.to_string(),
            frequency: rule.frequency.to_string(),
        })
        .collect()
}

/// Tests suggested by every rule with a trigger in the lowercased `text`.
///
/// Falls back to the default tests when no rule fired.
pub fn suggest_tests(data: &ReferenceData, text: &str) -> Vec<String> {
    let tests: Vec<String> = data
        .test_rules
        .iter()
        .filter(|rule| rule.triggers.iter().any(|&trigger| text.contains(trigger)))
        .flat_map(|rule| rule.tests.iter().map(|test| test.to_string()))
        .collect();

    if tests.is_empty() {
        return data.default_tests.iter().map(|t| t.to_string()).collect();
    }
    tests
}

pub(crate) fn analyze_prescription(
    data: &ReferenceData,
    request: &PrescriptionReview,
) -> EngineResult<PrescriptionAnalysis> {
    let text = request.prescription_text.to_lowercase();

    let medicines = extract_medicines(data, &text);
    let suggested_tests = suggest_tests(data, &text);
    let confidence = if medicines.is_empty() {
        CONFIDENCE_NO_MEDICINES
    } else {
        CONFIDENCE_MEDICINES_FOUND
    };

    tracing::debug!(
        text_len = text.len(),
        patient_age = ?request.patient_age,
        existing_conditions = request.existing_conditions.len(),
        medicines = medicines.len(),
        tests = suggested_tests.len(),
        "prescription analysed"
    );

    Ok(PrescriptionAnalysis {
        medicines: if medicines.is_empty() {
            vec![Medicine::placeholder()]
        } else {
            medicines
        },
        suggested_tests,
        precautions: data.precautions.iter().map(|p| p.to_string()).collect(),
        side_effects: data.side_effects.iter().map(|s| s.to_string()).collect(),
        confidence,
    })
}
