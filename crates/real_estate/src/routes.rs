use axum::{
    extract::{rejection::JsonRejection, State},
    routing::{get, post},
    Json, Router,
};
use std::sync::Arc;

use analyst_core::analysis::{Analyzer, Latency};
use analyst_core::config::Settings;
use analyst_core::domain::contract::{optional_key, require_batch_identifiers, require_identifier};
use analyst_core::scoring::scorer_for;
use analyst_core::web::error::{method_not_allowed, ApiResult};
use analyst_core::web::health::{self, IndexResponse};
use analyst_core::web::server::with_middleware;

use crate::dto::{
    ModelAnalysisResponse, ModelRequest, ModelsResponse, PropertiesAnalysisResponse,
    PropertiesRequest,
};
use crate::models;

const BANNER: &str = "Real Estate Analysis API is running";

pub type AppState = Arc<Analyzer>;

pub fn build_analyzer(settings: &Settings, seed: Option<u64>) -> anyhow::Result<Analyzer> {
    Ok(Analyzer::new(
        models::PROFILE,
        models::registry()?,
        scorer_for(seed.or(settings.scorer_seed)),
        Latency::from_settings(settings),
    ))
}

pub fn router(state: AppState) -> Router {
    let api = Router::new()
        .route("/", get(index).fallback(method_not_allowed))
        .route("/api/health", get(health::health).fallback(method_not_allowed))
        .route("/api/property/analysis", post(property_analysis).fallback(method_not_allowed))
        .route("/api/model/analysis", post(model_analysis).fallback(method_not_allowed))
        .route("/api/models", get(list_models).fallback(method_not_allowed))
        .with_state(state);

    with_middleware(api)
}

async fn index() -> Json<IndexResponse> {
    health::index(BANNER)
}

async fn property_analysis(
    State(analyzer): State<AppState>,
    payload: Result<Json<PropertiesRequest>, JsonRejection>,
) -> ApiResult<PropertiesAnalysisResponse> {
    let Json(req) = payload?;

    let addresses = require_batch_identifiers(
        "properties",
        "address",
        req.properties
            .as_ref()
            .map(|items| items.iter().map(|p| p.address.as_deref())),
    )?;

    let batch = analyzer.analyze_batch(addresses).await;
    Ok(Json(batch.into()))
}

async fn model_analysis(
    State(analyzer): State<AppState>,
    payload: Result<Json<ModelRequest>, JsonRejection>,
) -> ApiResult<ModelAnalysisResponse> {
    let Json(req) = payload?;

    let address = require_identifier("address", req.address.as_deref())?;
    let model = optional_key(req.model.as_deref());

    let analysis = analyzer.analyze_with_model(address, model).await;
    Ok(Json(analysis.into()))
}

async fn list_models(State(analyzer): State<AppState>) -> Json<ModelsResponse> {
    Json(analyzer.registry().into())
}
