use crate::dto::{EndpointsRes, HealthRes, ServiceInfoRes};

/// Display name of the service.
pub const SERVICE_NAME: &str = "Dhanvantri AI Health Assistant";

/// Simple health service shared by every API surface
///
/// Provides the liveness check and the service description served at the API root.
#[derive(Clone, Default)]
pub struct HealthService;

impl HealthService {
    pub fn new() -> Self {
        Self
    }

    /// Returns a healthy status stamped with the current time.
    ///
    /// # Returns
    /// A `HealthRes` with status `healthy` and an RFC 3339 timestamp.
    pub fn check_health() -> HealthRes {
        HealthRes {
            status: "healthy".into(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }

    /// Describes the service and where its operations live.
    pub fn service_info() -> ServiceInfoRes {
        ServiceInfoRes {
            service: SERVICE_NAME.into(),
            version: env!("CARGO_PKG_VERSION").into(),
            status: "active".into(),
            endpoints: EndpointsRes {
                symptom_check: "/ai/symptom-check".into(),
                prescription_analysis: "/ai/analyze-prescription".into(),
                health_tips: "/ai/health-tips".into(),
                assistant_chat: "/ai/assistant/chat".into(),
            },
        }
    }
}
