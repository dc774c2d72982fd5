//! Static reference tables.
//!
//! Every table is constant data compiled into the binary. Table order is significant: analyzers
//! scan the tables front to back, so the order below is the order in which specialists,
//! medicines and hospitals appear in responses.

use dhanvantri_types::Priority;

use crate::constants::DEFAULT_TIPS_CATEGORY;
use crate::{EngineError, EngineResult};

/// Association between a symptom keyword and a recommended specialization.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpecialistRule {
    pub keyword: &'static str,
    pub specialization: &'static str,
    pub priority: Priority,
    pub reason: &'static str,
}

/// First-aid tips offered when a symptom contains `keyword`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FirstAidRule {
    pub keyword: &'static str,
    pub tips: &'static [&'static str],
}

/// Catalog entry for a hospital.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hospital {
    pub name: &'static str,
    /// Rating in `[0, 5]`.
    pub rating: f64,
    pub base_cost: f64,
}

/// A medicine recognisable in prescription text, with its usual regimen.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MedicineRule {
    /// Lowercase name, matched as a substring of the lowercased prescription.
    pub name: &'static str,
    pub dosage: &'static str,
    pub frequency: &'static str,
}

/// Tests suggested when any of `triggers` occurs in prescription text.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TestRule {
    pub triggers: &'static [&'static str],
    pub tests: &'static [&'static str],
}

/// Named list of general health tips.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HealthTipSet {
    pub category: &'static str,
    pub tips: &'static [&'static str],
}

pub static SPECIALIST_RULES: &[SpecialistRule] = &[
    SpecialistRule {
        keyword: "chest pain",
        specialization: "Cardiologist",
        priority: Priority::High,
        reason: "Chest pain requires immediate cardiac evaluation",
    },
    SpecialistRule {
        keyword: "headache",
        specialization: "Neurologist",
        priority: Priority::Medium,
        reason: "Persistent headaches should be examined by a neurologist",
    },
    SpecialistRule {
        keyword: "fever",
        specialization: "General Physician",
        priority: Priority::Medium,
        reason: "Fever evaluation by general physician",
    },
    SpecialistRule {
        keyword: "cough",
        specialization: "Pulmonologist",
        priority: Priority::Low,
        reason: "Respiratory symptoms check",
    },
    SpecialistRule {
        keyword: "stomach pain",
        specialization: "Gastroenterologist",
        priority: Priority::Medium,
        reason: "Abdominal pain evaluation",
    },
    SpecialistRule {
        keyword: "skin rash",
        specialization: "Dermatologist",
        priority: Priority::Low,
        reason: "Skin condition examination",
    },
    SpecialistRule {
        keyword: "joint pain",
        specialization: "Orthopedic",
        priority: Priority::Medium,
        reason: "Joint and bone specialist consultation",
    },
    SpecialistRule {
        keyword: "breathing difficulty",
        specialization: "Pulmonologist",
        priority: Priority::High,
        reason: "Breathing issues require immediate attention",
    },
    SpecialistRule {
        keyword: "dizziness",
        specialization: "Neurologist",
        priority: Priority::Medium,
        reason: "Neurological assessment needed",
    },
];

pub static FIRST_AID_RULES: &[FirstAidRule] = &[
    FirstAidRule {
        keyword: "chest pain",
        tips: &[
            "Call emergency services immediately",
            "Keep the person calm and seated",
            "Loosen tight clothing",
            "Do not leave the person alone",
        ],
    },
    FirstAidRule {
        keyword: "fever",
        tips: &[
            "Drink plenty of fluids",
            "Rest adequately",
            "Take paracetamol if needed",
            "Monitor temperature regularly",
        ],
    },
    FirstAidRule {
        keyword: "headache",
        tips: &[
            "Rest in a quiet, dark room",
            "Stay hydrated",
            "Apply cold compress on forehead",
            "Avoid screen time",
        ],
    },
    FirstAidRule {
        keyword: "breathing difficulty",
        tips: &[
            "Sit upright in a comfortable position",
            "Practice slow, deep breathing",
            "Loosen tight clothing",
            "Seek immediate medical help",
        ],
    },
];

/// Returned when no first-aid rule matched any symptom.
pub static FALLBACK_FIRST_AID_TIPS: &[&str] = &[
    "Rest adequately",
    "Stay hydrated",
    "Monitor symptoms",
    "Consult a doctor if symptoms persist",
];

pub static HOSPITALS: &[Hospital] = &[
    Hospital {
        name: "Apollo Hospital",
        rating: 4.8,
        base_cost: 1500.0,
    },
    Hospital {
        name: "Fortis Healthcare",
        rating: 4.6,
        base_cost: 1200.0,
    },
    Hospital {
        name: "Max Hospital",
        rating: 4.7,
        base_cost: 1400.0,
    },
    Hospital {
        name: "AIIMS",
        rating: 4.9,
        base_cost: 800.0,
    },
    Hospital {
        name: "Medanta",
        rating: 4.7,
        base_cost: 1600.0,
    },
];

pub static MEDICINE_RULES: &[MedicineRule] = &[
    MedicineRule {
        name: "paracetamol",
        dosage: "500mg",
        frequency: "3 times daily",
    },
    MedicineRule {
        name: "amoxicillin",
        dosage: "250mg",
        frequency: "2 times daily",
    },
    MedicineRule {
        name: "ibuprofen",
        dosage: "400mg",
        frequency: "As needed",
    },
    MedicineRule {
        name: "metformin",
        dosage: "500mg",
        frequency: "2 times daily",
    },
];

pub static TEST_RULES: &[TestRule] = &[
    TestRule {
        triggers: &["metformin"],
        tests: &["Blood Sugar Test", "HbA1c Test"],
    },
    TestRule {
        triggers: &["antibiotic", "amoxicillin"],
        tests: &["Complete Blood Count"],
    },
    TestRule {
        triggers: &["thyroid"],
        tests: &["TSH Test", "T3/T4 Levels"],
    },
];

/// Suggested when no test rule fired.
pub static DEFAULT_TESTS: &[&str] = &["Complete Blood Count", "Basic Metabolic Panel"];

pub static PRECAUTIONS: &[&str] = &[
    "Take medicines as prescribed",
    "Complete the full course of antibiotics",
    "Avoid alcohol while on medication",
    "Consult doctor if side effects occur",
    "Store medicines in cool, dry place",
];

pub static SIDE_EFFECTS: &[&str] = &[
    "Nausea or upset stomach",
    "Drowsiness",
    "Allergic reactions (rash, itching)",
    "Headache",
    "Dizziness",
];

pub static HEALTH_TIPS: &[HealthTipSet] = &[
    HealthTipSet {
        category: "general",
        tips: &[
            "Drink at least 8 glasses of water daily",
            "Exercise for 30 minutes daily",
            "Get 7-8 hours of sleep",
            "Eat a balanced diet with fruits and vegetables",
            "Practice stress management techniques",
        ],
    },
    HealthTipSet {
        category: "nutrition",
        tips: &[
            "Include protein in every meal",
            "Eat colorful fruits and vegetables",
            "Limit processed foods and sugar",
            "Choose whole grains over refined grains",
            "Stay hydrated throughout the day",
        ],
    },
    HealthTipSet {
        category: "exercise",
        tips: &[
            "Start with 10-15 minutes of exercise daily",
            "Include both cardio and strength training",
            "Warm up before and cool down after exercise",
            "Listen to your body and rest when needed",
            "Stay consistent with your routine",
        ],
    },
    HealthTipSet {
        category: "mental_health",
        tips: &[
            "Practice meditation or mindfulness",
            "Maintain social connections",
            "Take breaks from screen time",
            "Seek professional help when needed",
            "Practice gratitude daily",
        ],
    },
];

/// The full set of tables an engine evaluates requests against.
///
/// [`ReferenceData::builtin`] returns the compiled-in tables. Fields are public so alternative
/// tables can be assembled with struct update syntax.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ReferenceData {
    pub specialists: &'static [SpecialistRule],
    pub first_aid: &'static [FirstAidRule],
    pub fallback_first_aid: &'static [&'static str],
    pub hospitals: &'static [Hospital],
    pub medicines: &'static [MedicineRule],
    pub test_rules: &'static [TestRule],
    pub default_tests: &'static [&'static str],
    pub precautions: &'static [&'static str],
    pub side_effects: &'static [&'static str],
    pub health_tips: &'static [HealthTipSet],
}

impl ReferenceData {
    pub const fn builtin() -> Self {
        Self {
            specialists: SPECIALIST_RULES,
            first_aid: FIRST_AID_RULES,
            fallback_first_aid: FALLBACK_FIRST_AID_TIPS,
            hospitals: HOSPITALS,
            medicines: MEDICINE_RULES,
            test_rules: TEST_RULES,
            default_tests: DEFAULT_TESTS,
            precautions: PRECAUTIONS,
            side_effects: SIDE_EFFECTS,
            health_tips: HEALTH_TIPS,
        }
    }

    /// Look up the tip list for an exact category name.
    pub fn tips_for(&self, category: &str) -> Option<&'static [&'static str]> {
        self.health_tips
            .iter()
            .find(|set| set.category == category)
            .map(|set| set.tips)
    }

    /// Check the tables for inconsistencies that would make matching misbehave.
    ///
    /// Keywords are matched against lowercased input, so an uppercase keyword could never match.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::Internal` describing the first inconsistency found.
    pub fn validate(&self) -> EngineResult<()> {
        let specialist_keywords = self.specialists.iter().map(|r| r.keyword);
        let first_aid_keywords = self.first_aid.iter().map(|r| r.keyword);
        let medicine_names = self.medicines.iter().map(|r| r.name);
        let test_triggers = self.test_rules.iter().flat_map(|r| r.triggers.iter().copied());

        for keyword in specialist_keywords
            .chain(first_aid_keywords)
            .chain(medicine_names)
            .chain(test_triggers)
        {
            if keyword.trim().is_empty() {
                return Err(EngineError::Internal(
                    "reference table contains an empty keyword".into(),
                ));
            }
            if keyword != keyword.to_lowercase() {
                return Err(EngineError::Internal(format!(
                    "reference keyword '{keyword}' must be lowercase"
                )));
            }
        }

        for hospital in self.hospitals {
            if !(0.0..=5.0).contains(&hospital.rating) {
                return Err(EngineError::Internal(format!(
                    "hospital '{}' has rating {} outside [0, 5]",
                    hospital.name, hospital.rating
                )));
            }
            if !hospital.base_cost.is_finite() || hospital.base_cost < 0.0 {
                return Err(EngineError::Internal(format!(
                    "hospital '{}' has invalid base cost {}",
                    hospital.name, hospital.base_cost
                )));
            }
        }

        if self.fallback_first_aid.is_empty() || self.default_tests.is_empty() {
            return Err(EngineError::Internal(
                "fallback first-aid tips and default tests must not be empty".into(),
            ));
        }

        if self.tips_for(DEFAULT_TIPS_CATEGORY).is_none() {
            return Err(EngineError::Internal(format!(
                "health tips are missing the '{DEFAULT_TIPS_CATEGORY}' category"
            )));
        }

        Ok(())
    }
}

impl Default for ReferenceData {
    fn default() -> Self {
        Self::builtin()
    }
}
