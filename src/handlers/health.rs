/// Liveness, health, and store diagnostics endpoints
use actix_web::{web, HttpResponse};
use serde::Serialize;
use utoipa::ToSchema;

use crate::db::Store;

#[derive(Debug, Clone, Copy, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ComponentStatus {
    Healthy,
    Degraded,
    Unhealthy,
}

/// Store connectivity diagnostics for the `/test` endpoint.
#[derive(Debug, Serialize, ToSchema)]
pub struct StoreDiagnostics {
    pub backend: ComponentStatus,
    pub database: ComponentStatus,
    pub database_url_set: bool,
    pub database_name_set: bool,
    pub connection_status: String,
    /// First collections found, capped at 10.
    pub collections: Vec<String>,
}

/// Liveness probe; never touches the store.
pub async fn root() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "message": "VibeHunt API running"
    }))
}

/// Health summary backed by a store round-trip.
pub async fn health(store: web::Data<Store>) -> HttpResponse {
    match store.ping().await {
        Ok(()) => HttpResponse::Ok().json(serde_json::json!({
            "status": "ok",
            "service": "vibehunt",
            "version": env!("CARGO_PKG_VERSION"),
        })),
        Err(e) => HttpResponse::ServiceUnavailable().json(serde_json::json!({
            "status": "unhealthy",
            "error": e.to_string(),
            "service": "vibehunt",
        })),
    }
}

/// Store connectivity diagnostic. Always answers 200; failures are reported
/// in the body rather than as an error response.
pub async fn store_diagnostics(store: web::Data<Store>) -> HttpResponse {
    let mut diagnostics = StoreDiagnostics {
        backend: ComponentStatus::Healthy,
        database: ComponentStatus::Unhealthy,
        database_url_set: std::env::var("DATABASE_URL").is_ok(),
        database_name_set: std::env::var("DATABASE_NAME").is_ok(),
        connection_status: "not_connected".to_string(),
        collections: Vec::new(),
    };

    if store.is_configured() {
        match store.collection_names().await {
            Ok(mut names) => {
                names.truncate(10);
                diagnostics.database = ComponentStatus::Healthy;
                diagnostics.connection_status = "connected".to_string();
                diagnostics.collections = names;
            }
            Err(err) => {
                diagnostics.database = ComponentStatus::Degraded;
                diagnostics.connection_status = format!("error: {}", err);
            }
        }
    }

    HttpResponse::Ok().json(diagnostics)
}
