//! # Dhanvantri Core
//!
//! Deterministic health rule engine.
//!
//! This crate turns free-text symptoms and prescription text into structured recommendations:
//! - Symptom triage, specialist and hospital recommendations, first-aid tips
//! - Medicine extraction and test suggestions from prescription text
//! - Health tips by category and keyword-based assistant replies
//!
//! Everything is substring matching against the static tables in [`reference`]; there is no
//! inference, I/O or persistence.
//!
//! **No API concerns**: HTTP servers, OpenAPI schemas and CLI parsing belong in `api-rest`,
//! `api-shared` and `dhanvantri-cli`.

pub mod assistant;
pub mod config;
pub mod constants;
pub mod engine;
pub mod error;
pub mod health_tips;
pub mod prescription;
pub mod reference;
pub mod symptoms;
pub mod validation;

pub use assistant::AssistantReply;
pub use config::CoreConfig;
pub use constants::{DEFAULT_BUDGET, DEFAULT_TIPS_CATEGORY};
pub use dhanvantri_types::{Priority, Severity, UrgencyLevel};
pub use engine::RuleEngine;
pub use error::{EngineError, EngineResult};
pub use health_tips::HealthTips;
pub use prescription::{Medicine, PrescriptionAnalysis, PrescriptionReview};
pub use reference::ReferenceData;
pub use symptoms::{
    DoctorRecommendation, HospitalRecommendation, SymptomCheck, SymptomCheckResult,
};
