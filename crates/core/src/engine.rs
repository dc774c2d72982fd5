//! The rule engine service.
//!
//! `RuleEngine` bundles the startup configuration with the reference tables and exposes every
//! operation of the core. It holds no mutable state, so a single instance can be cloned into any
//! number of concurrent request handlers.

use std::sync::Arc;

use crate::assistant::{self, AssistantReply};
use crate::config::CoreConfig;
use crate::health_tips::{self, HealthTips};
use crate::prescription::{self, PrescriptionAnalysis, PrescriptionReview};
use crate::reference::ReferenceData;
use crate::symptoms::{self, SymptomCheck, SymptomCheckResult};
use crate::{EngineError, EngineResult};

/// Pure rule evaluation - no API concerns
#[derive(Clone, Debug)]
pub struct RuleEngine {
    cfg: Arc<CoreConfig>,
    data: ReferenceData,
    reference_fault: Option<String>,
}

impl RuleEngine {
    /// Creates a rule engine over the builtin reference tables.
    pub fn new(cfg: Arc<CoreConfig>) -> Self {
        Self::with_reference(cfg, ReferenceData::builtin())
    }

    /// Creates a rule engine over the given reference tables.
    ///
    /// The tables are validated once here. If they are inconsistent the engine is still built,
    /// but symptom and prescription requests fail with `EngineError::Internal`.
    pub fn with_reference(cfg: Arc<CoreConfig>, data: ReferenceData) -> Self {
        let reference_fault = match data.validate() {
            Ok(()) => None,
            Err(EngineError::Internal(msg)) | Err(EngineError::InvalidInput(msg)) => {
                tracing::error!("reference data failed validation: {}", msg);
                Some(msg)
            }
        };

        Self {
            cfg,
            data,
            reference_fault,
        }
    }

    pub fn config(&self) -> &CoreConfig {
        &self.cfg
    }

    pub fn reference(&self) -> &ReferenceData {
        &self.data
    }

    fn ensure_consistent(&self) -> EngineResult<()> {
        match &self.reference_fault {
            Some(msg) => Err(EngineError::Internal(format!(
                "reference data is inconsistent: {msg}"
            ))),
            None => Ok(()),
        }
    }

    /// Classifies symptoms and recommends specialists, hospitals and first aid.
    ///
    /// # Errors
    ///
    /// Returns an `EngineError` if:
    /// - the symptom list is empty or the budget is not finite (`InvalidInput`),
    /// - the reference tables are inconsistent (`Internal`).
    pub fn check_symptoms(&self, request: &SymptomCheck) -> EngineResult<SymptomCheckResult> {
        self.ensure_consistent()?;
        symptoms::check_symptoms(&self.data, &self.cfg, request)
    }

    /// Extracts medicines and suggests tests for prescription text.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::Internal` if the reference tables are inconsistent.
    pub fn analyze_prescription(
        &self,
        request: &PrescriptionReview,
    ) -> EngineResult<PrescriptionAnalysis> {
        self.ensure_consistent()?;
        prescription::analyze_prescription(&self.data, request)
    }

    /// Looks up health tips, serving the general tips for unknown categories.
    pub fn health_tips(&self, category: &str) -> HealthTips {
        health_tips::health_tips(&self.data, category)
    }

    /// Produces a canned reply for a chat message.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::InvalidInput` if the message is empty.
    pub fn assistant_reply(&self, message: &str) -> EngineResult<AssistantReply> {
        assistant::assistant_reply(message)
    }
}

impl Default for RuleEngine {
    fn default() -> Self {
        Self::new(Arc::new(CoreConfig::default()))
    }
}
