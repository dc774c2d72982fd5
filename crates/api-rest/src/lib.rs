//! # API REST
//!
//! REST API implementation for Dhanvantri.
//!
//! Handles:
//! - HTTP endpoints with axum
//! - OpenAPI/Swagger documentation
//! - REST-specific concerns (JSON serialization, CORS, status codes, request tracing)
//!
//! Uses `api-shared` for request/response bodies and `dhanvantri-core` for the rules.

#![warn(rust_2018_idioms)]

use std::sync::Arc;

use api_shared::{
    AssistantChatReq, AssistantChatRes, DoctorRecommendationRes, EndpointsRes, ErrorRes,
    HealthRes, HealthService, HealthTipsRes, HospitalRecommendationRes, MedicineRes,
    PrescriptionAnalysisReq, PrescriptionAnalysisRes, ServiceInfoRes, SymptomCheckReq,
    SymptomCheckRes,
};
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use dhanvantri_core::{
    config::default_budget_from_env_value, CoreConfig, EngineError, RuleEngine,
    DEFAULT_TIPS_CATEGORY,
};
use serde::Deserialize;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Default REST listen address.
pub const DEFAULT_REST_ADDR: &str = "0.0.0.0:8000";

/// Application state shared across REST API handlers
///
/// Holds the rule engine, which is immutable and cheap to clone.
#[derive(Clone)]
pub struct AppState {
    engine: RuleEngine,
}

impl AppState {
    pub fn new(engine: RuleEngine) -> Self {
        Self { engine }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        service_info,
        health,
        symptom_check,
        analyze_prescription,
        health_tips,
        assistant_chat,
    ),
    components(schemas(
        ServiceInfoRes,
        EndpointsRes,
        HealthRes,
        SymptomCheckReq,
        SymptomCheckRes,
        DoctorRecommendationRes,
        HospitalRecommendationRes,
        PrescriptionAnalysisReq,
        PrescriptionAnalysisRes,
        MedicineRes,
        HealthTipsRes,
        AssistantChatReq,
        AssistantChatRes,
        ErrorRes,
    ))
)]
pub struct ApiDoc;

type ApiError = (StatusCode, Json<ErrorRes>);

/// Map a rule engine error onto an HTTP status and JSON detail.
fn engine_error(context: &str, err: EngineError) -> ApiError {
    match err {
        EngineError::InvalidInput(detail) => {
            tracing::warn!("{} rejected: {}", context, detail);
            (StatusCode::UNPROCESSABLE_ENTITY, Json(ErrorRes { detail }))
        }
        EngineError::Internal(detail) => {
            tracing::error!("{} error: {}", context, detail);
            (StatusCode::INTERNAL_SERVER_ERROR, Json(ErrorRes { detail }))
        }
    }
}

/// Build the REST router with documentation, CORS and request tracing.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(service_info))
        .route("/health", get(health))
        .route("/ai/symptom-check", post(symptom_check))
        .route("/ai/analyze-prescription", post(analyze_prescription))
        .route("/ai/health-tips", get(health_tips))
        .route("/ai/assistant/chat", post(assistant_chat))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Install the global tracing subscriber.
///
/// `RUST_LOG` is honoured; each of `directives` (e.g. `"api_rest=info"`) is always added.
///
/// # Errors
/// Returns an error if a directive cannot be parsed.
pub fn init_tracing(directives: &[&str]) -> anyhow::Result<()> {
    let mut filter = tracing_subscriber::EnvFilter::from_default_env();
    for directive in directives {
        filter = filter.add_directive(directive.parse()?);
    }

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
    Ok(())
}

/// Resolve the core configuration from the process environment.
///
/// # Environment Variables
/// - `DHANVANTRI_DEFAULT_BUDGET`: hospital budget used when a request omits one (default: 2000)
///
/// # Errors
/// Returns an error if the budget is not a positive number.
pub fn core_config_from_env() -> anyhow::Result<CoreConfig> {
    let default_budget =
        default_budget_from_env_value(std::env::var("DHANVANTRI_DEFAULT_BUDGET").ok())?;
    Ok(CoreConfig::new(default_budget)?)
}

/// Bind `addr` and serve the REST API until Ctrl-C.
///
/// # Errors
/// Returns an error if the address cannot be bound or the server fails while running.
pub async fn serve(addr: &str, state: AppState) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("-- Dhanvantri REST API listening on {}", listener.local_addr()?);

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("-- Dhanvantri REST API stopped");
    Ok(())
}

/// Build the application state from a resolved configuration.
pub fn state_from_config(cfg: CoreConfig) -> AppState {
    AppState::new(RuleEngine::new(Arc::new(cfg)))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {}", e);
    }
}

#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Service description", body = ServiceInfoRes)
    )
)]
/// Describe the service and list its operation endpoints.
#[axum::debug_handler]
async fn service_info() -> Json<ServiceInfoRes> {
    Json(HealthService::service_info())
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Health check response", body = HealthRes)
    )
)]
/// Health check endpoint for the REST API
///
/// Used for monitoring and load balancer health checks.
#[axum::debug_handler]
async fn health() -> Json<HealthRes> {
    Json(HealthService::check_health())
}

#[utoipa::path(
    post,
    path = "/ai/symptom-check",
    request_body = SymptomCheckReq,
    responses(
        (status = 200, description = "Symptom triage and recommendations", body = SymptomCheckRes),
        (status = 422, description = "Invalid symptoms or budget", body = ErrorRes),
        (status = 500, description = "Internal server error", body = ErrorRes)
    )
)]
/// Rule-based symptom checker
///
/// Classifies urgency and suggests specialists, hospitals within budget and first-aid tips.
///
/// # Errors
/// Returns `422 Unprocessable Entity` for an empty symptom list or a non-finite budget, and
/// `500 Internal Server Error` if the rule tables are inconsistent.
#[axum::debug_handler]
async fn symptom_check(
    State(state): State<AppState>,
    Json(req): Json<SymptomCheckReq>,
) -> Result<Json<SymptomCheckRes>, ApiError> {
    state
        .engine
        .check_symptoms(&req.into())
        .map(|result| Json(result.into()))
        .map_err(|e| engine_error("Symptom check", e))
}

#[utoipa::path(
    post,
    path = "/ai/analyze-prescription",
    request_body = PrescriptionAnalysisReq,
    responses(
        (status = 200, description = "Extracted medicines and suggested tests", body = PrescriptionAnalysisRes),
        (status = 500, description = "Internal server error", body = ErrorRes)
    )
)]
/// Rule-based prescription analyzer
///
/// Extracts known medicines from the text and suggests follow-up tests.
///
/// # Errors
/// Returns `500 Internal Server Error` if the rule tables are inconsistent.
#[axum::debug_handler]
async fn analyze_prescription(
    State(state): State<AppState>,
    Json(req): Json<PrescriptionAnalysisReq>,
) -> Result<Json<PrescriptionAnalysisRes>, ApiError> {
    state
        .engine
        .analyze_prescription(&req.into())
        .map(|result| Json(result.into()))
        .map_err(|e| engine_error("Prescription analysis", e))
}

#[derive(Debug, Deserialize)]
struct HealthTipsQuery {
    category: Option<String>,
}

#[utoipa::path(
    get,
    path = "/ai/health-tips",
    params(
        ("category" = Option<String>, Query, description = "general, nutrition, exercise or mental_health")
    ),
    responses(
        (status = 200, description = "Tips for the category (general tips if unknown)", body = HealthTipsRes)
    )
)]
/// Get health tips by category
#[axum::debug_handler]
async fn health_tips(
    State(state): State<AppState>,
    Query(query): Query<HealthTipsQuery>,
) -> Json<HealthTipsRes> {
    let category = query.category.as_deref().unwrap_or(DEFAULT_TIPS_CATEGORY);
    Json(state.engine.health_tips(category).into())
}

#[utoipa::path(
    post,
    path = "/ai/assistant/chat",
    request_body = AssistantChatReq,
    responses(
        (status = 200, description = "Assistant reply", body = AssistantChatRes),
        (status = 422, description = "Message is required", body = ErrorRes)
    )
)]
/// Keyword-based assistant chat
///
/// # Errors
/// Returns `422 Unprocessable Entity` if the message is empty.
#[axum::debug_handler]
async fn assistant_chat(
    State(state): State<AppState>,
    Json(req): Json<AssistantChatReq>,
) -> Result<Json<AssistantChatRes>, ApiError> {
    state
        .engine
        .assistant_reply(&req.message)
        .map(|reply| Json(reply.into()))
        .map_err(|e| engine_error("Assistant chat", e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, Request};
    use dhanvantri_core::reference::{Hospital, ReferenceData};
    use http_body_util::BodyExt;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    fn test_app() -> Router {
        router(AppState::new(RuleEngine::default()))
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder()
            .method("GET")
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    }

    async fn send(app: Router, req: Request<Body>) -> (StatusCode, Value) {
        let response = app.oneshot(req).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, body)
    }

    #[tokio::test]
    async fn root_describes_service() {
        let (status, body) = send(test_app(), get("/")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["service"], "Dhanvantri AI Health Assistant");
        assert_eq!(body["endpoints"]["health_tips"], "/ai/health-tips");
    }

    #[tokio::test]
    async fn health_is_healthy() {
        let (status, body) = send(test_app(), get("/health")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");
        assert!(body["timestamp"].is_string());
    }

    #[tokio::test]
    async fn symptom_check_chest_pain() {
        let (status, body) = send(
            test_app(),
            post_json("/ai/symptom-check", json!({ "symptoms": ["Chest Pain"] })),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["severity"], "severe");
        assert_eq!(body["urgency_level"], "high");
        assert_eq!(
            body["recommended_specialists"][0]["specialization"],
            "Cardiologist"
        );
        assert_eq!(
            body["recommended_specialists"][0]["estimated_consultation_fee"],
            1500.0
        );
    }

    #[tokio::test]
    async fn symptom_check_respects_budget() {
        let (status, body) = send(
            test_app(),
            post_json(
                "/ai/symptom-check",
                json!({ "symptoms": ["headache", "fever", "cough"], "budget": 1300 }),
            ),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["urgency_level"], "medium");
        let hospitals = body["suggested_hospitals"].as_array().unwrap();
        assert_eq!(hospitals.len(), 2);
        assert_eq!(hospitals[0]["name"], "Fortis Healthcare");
        assert_eq!(hospitals[1]["name"], "AIIMS");
        assert_eq!(hospitals[1]["distance"], "2 km");
    }

    #[tokio::test]
    async fn symptom_check_negative_budget_uses_default() {
        let (status, body) = send(
            test_app(),
            post_json(
                "/ai/symptom-check",
                json!({ "symptoms": ["fever"], "budget": -100 }),
            ),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        let hospitals = body["suggested_hospitals"].as_array().unwrap();
        assert_eq!(hospitals.len(), 3);
        assert_eq!(hospitals[0]["name"], "Apollo Hospital");
    }

    #[tokio::test]
    async fn symptom_check_rejects_empty_list() {
        let (status, body) = send(
            test_app(),
            post_json("/ai/symptom-check", json!({ "symptoms": [] })),
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(body["detail"]
            .as_str()
            .unwrap()
            .contains("at least one symptom"));
    }

    #[tokio::test]
    async fn symptom_check_rejects_missing_symptoms_field() {
        let (status, _) = send(
            test_app(),
            post_json("/ai/symptom-check", json!({ "age": 30 })),
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn inconsistent_tables_surface_as_internal_error() {
        let data = ReferenceData {
            hospitals: &[Hospital {
                name: "Broken Ward",
                rating: -1.0,
                base_cost: 10.0,
            }],
            ..ReferenceData::builtin()
        };
        let engine = RuleEngine::with_reference(Arc::new(CoreConfig::default()), data);
        let app = router(AppState::new(engine));

        let (status, body) = send(
            app,
            post_json("/ai/symptom-check", json!({ "symptoms": ["fever"] })),
        )
        .await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body["detail"].as_str().unwrap().contains("Broken Ward"));
    }

    #[tokio::test]
    async fn analyze_prescription_metformin() {
        let (status, body) = send(
            test_app(),
            post_json(
                "/ai/analyze-prescription",
                json!({ "prescription_text": "Take Metformin 500mg twice daily" }),
            ),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body["medicines"],
            json!([{ "name": "Metformin", "dosage": "500mg", "frequency": "2 times daily" }])
        );
        assert_eq!(
            body["suggested_tests"],
            json!(["Blood Sugar Test", "HbA1c Test"])
        );
        assert_eq!(body["confidence"], 0.75);
    }

    #[tokio::test]
    async fn analyze_prescription_without_medicines() {
        let (status, body) = send(
            test_app(),
            post_json(
                "/ai/analyze-prescription",
                json!({ "prescription_text": "rest and fluids", "existing_conditions": ["asthma"] }),
            ),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["medicines"][0]["name"], "No medicines detected");
        assert_eq!(body["confidence"], 0.3);
    }

    #[tokio::test]
    async fn health_tips_default_and_unknown_categories() {
        let (_, general) = send(test_app(), get("/ai/health-tips")).await;
        assert_eq!(general["category"], "general");

        let (status, unknown) =
            send(test_app(), get("/ai/health-tips?category=unknown_category")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(unknown["category"], "unknown_category");
        assert_eq!(unknown["tips"], general["tips"]);
    }

    #[tokio::test]
    async fn health_tips_known_category() {
        let (_, body) = send(test_app(), get("/ai/health-tips?category=nutrition")).await;
        assert_eq!(body["tips"][0], "Include protein in every meal");
    }

    #[tokio::test]
    async fn assistant_chat_replies_and_rejects_empty() {
        let (status, body) = send(
            test_app(),
            post_json("/ai/assistant/chat", json!({ "message": "I have a fever" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert!(body["response"].as_str().unwrap().starts_with("For fever"));

        let (status, body) = send(
            test_app(),
            post_json("/ai/assistant/chat", json!({ "message": "" })),
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["detail"], "Message is required");
    }

    #[tokio::test]
    async fn openapi_document_is_served() {
        let (status, body) = send(test_app(), get("/api-docs/openapi.json")).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["paths"]["/ai/symptom-check"].is_object());
    }
}
