use axum::Json;
use serde::Serialize;

pub const API_VERSION: &str = "1.0.0";

#[derive(Debug, Serialize)]
pub struct IndexResponse {
    pub status: &'static str,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub services: ServiceStatus,
}

#[derive(Debug, Serialize)]
pub struct ServiceStatus {
    pub ai_models: &'static str,
    pub data_feed: &'static str,
}

pub fn index(banner: &'static str) -> Json<IndexResponse> {
    Json(IndexResponse { status: banner })
}

/// `GET /api/health`. Nothing can be down, so this is static.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: API_VERSION,
        services: ServiceStatus {
            ai_models: "operational",
            data_feed: "operational",
        },
    })
}
