//! # API Shared
//!
//! Shared definitions for the Dhanvantri APIs.
//!
//! Contains:
//! - Request/response bodies with OpenAPI schemas (`dto` module)
//! - Conversions from `dhanvantri-core` results into those bodies
//! - `HealthService` for liveness and service description
//!
//! Used by `api-rest` and by the workspace runner.

pub mod dto;
pub mod health;

pub use dto::*;
pub use health::{HealthService, SERVICE_NAME};
