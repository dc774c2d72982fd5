//! Request and response bodies of the public API.
//!
//! Field names are the wire contract and must not change. Enumerations travel as their lowercase
//! string forms.

use dhanvantri_core::{
    AssistantReply, DoctorRecommendation, HealthTips, HospitalRecommendation, Medicine,
    PrescriptionAnalysis, PrescriptionReview, SymptomCheck, SymptomCheckResult,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SymptomCheckReq {
    pub symptoms: Vec<String>,
    #[serde(default)]
    pub age: Option<u32>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub budget: Option<f64>,
}

impl From<SymptomCheckReq> for SymptomCheck {
    fn from(req: SymptomCheckReq) -> Self {
        SymptomCheck {
            symptoms: req.symptoms,
            age: req.age,
            gender: req.gender,
            budget: req.budget,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DoctorRecommendationRes {
    pub specialization: String,
    /// One of `low`, `medium`, `high`.
    pub priority: String,
    pub reason: String,
    pub estimated_consultation_fee: f64,
}

impl From<DoctorRecommendation> for DoctorRecommendationRes {
    fn from(d: DoctorRecommendation) -> Self {
        Self {
            specialization: d.specialization,
            priority: d.priority.as_str().to_string(),
            reason: d.reason,
            estimated_consultation_fee: d.estimated_consultation_fee,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct HospitalRecommendationRes {
    pub name: String,
    pub rating: f64,
    pub estimated_cost: f64,
    pub distance: Option<String>,
}

impl From<HospitalRecommendation> for HospitalRecommendationRes {
    fn from(h: HospitalRecommendation) -> Self {
        Self {
            name: h.name,
            rating: h.rating,
            estimated_cost: h.estimated_cost,
            distance: Some(h.distance),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SymptomCheckRes {
    /// One of `mild`, `moderate`, `severe`.
    pub severity: String,
    pub recommended_specialists: Vec<DoctorRecommendationRes>,
    pub suggested_hospitals: Vec<HospitalRecommendationRes>,
    pub first_aid_tips: Vec<String>,
    /// One of `low`, `medium`, `high`.
    pub urgency_level: String,
}

impl From<SymptomCheckResult> for SymptomCheckRes {
    fn from(r: SymptomCheckResult) -> Self {
        Self {
            severity: r.severity.as_str().to_string(),
            recommended_specialists: r
                .recommended_specialists
                .into_iter()
                .map(Into::into)
                .collect(),
            suggested_hospitals: r.suggested_hospitals.into_iter().map(Into::into).collect(),
            first_aid_tips: r.first_aid_tips,
            urgency_level: r.urgency_level.as_str().to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PrescriptionAnalysisReq {
    pub prescription_text: String,
    #[serde(default)]
    pub patient_age: Option<u32>,
    #[serde(default)]
    pub existing_conditions: Option<Vec<String>>,
}

impl From<PrescriptionAnalysisReq> for PrescriptionReview {
    fn from(req: PrescriptionAnalysisReq) -> Self {
        PrescriptionReview {
            prescription_text: req.prescription_text,
            patient_age: req.patient_age,
            existing_conditions: req.existing_conditions.unwrap_or_default(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MedicineRes {
    pub name: String,
    pub dosage: String,
    pub frequency: String,
}

impl From<Medicine> for MedicineRes {
    fn from(m: Medicine) -> Self {
        Self {
            name: m.name,
            dosage: m.dosage,
            frequency: m.frequency,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PrescriptionAnalysisRes {
    pub medicines: Vec<MedicineRes>,
    pub suggested_tests: Vec<String>,
    pub precautions: Vec<String>,
    pub side_effects: Vec<String>,
    pub confidence: f64,
}

impl From<PrescriptionAnalysis> for PrescriptionAnalysisRes {
    fn from(p: PrescriptionAnalysis) -> Self {
        Self {
            medicines: p.medicines.into_iter().map(Into::into).collect(),
            suggested_tests: p.suggested_tests,
            precautions: p.precautions,
            side_effects: p.side_effects,
            confidence: p.confidence,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct HealthTipsRes {
    pub category: String,
    pub tips: Vec<String>,
}

impl From<HealthTips> for HealthTipsRes {
    fn from(t: HealthTips) -> Self {
        Self {
            category: t.category,
            tips: t.tips,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AssistantChatReq {
    pub message: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AssistantChatRes {
    pub success: bool,
    pub response: String,
}

impl From<AssistantReply> for AssistantChatRes {
    fn from(r: AssistantReply) -> Self {
        Self {
            success: true,
            response: r.response,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct HealthRes {
    pub status: String,
    /// RFC 3339 timestamp of the check.
    pub timestamp: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct EndpointsRes {
    pub symptom_check: String,
    pub prescription_analysis: String,
    pub health_tips: String,
    pub assistant_chat: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ServiceInfoRes {
    pub service: String,
    pub version: String,
    pub status: String,
    pub endpoints: EndpointsRes,
}

/// Body of every 4xx/5xx response.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ErrorRes {
    pub detail: String,
}
