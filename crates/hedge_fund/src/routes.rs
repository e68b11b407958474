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
    InvestorAnalysisResponse, InvestorRequest, InvestorsResponse, PortfolioAnalysisResponse,
    PortfolioRequest,
};
use crate::investors;

const BANNER: &str = "AI Hedge Fund API is running";

pub type AppState = Arc<Analyzer>;

pub fn build_analyzer(settings: &Settings, seed: Option<u64>) -> anyhow::Result<Analyzer> {
    Ok(Analyzer::new(
        investors::PROFILE,
        investors::registry()?,
        scorer_for(seed.or(settings.scorer_seed)),
        Latency::from_settings(settings),
    ))
}

pub fn router(state: AppState) -> Router {
    let api = Router::new()
        .route("/", get(index).fallback(method_not_allowed))
        .route("/api/health", get(health::health).fallback(method_not_allowed))
        .route("/api/portfolio/analysis", post(portfolio_analysis).fallback(method_not_allowed))
        .route("/api/investor/analysis", post(investor_analysis).fallback(method_not_allowed))
        .route("/api/investors", get(list_investors).fallback(method_not_allowed))
        .with_state(state);

    with_middleware(api)
}

async fn index() -> Json<IndexResponse> {
    health::index(BANNER)
}

async fn portfolio_analysis(
    State(analyzer): State<AppState>,
    payload: Result<Json<PortfolioRequest>, JsonRejection>,
) -> ApiResult<PortfolioAnalysisResponse> {
    let Json(req) = payload?;

    let symbols = require_batch_identifiers(
        "portfolio",
        "symbol",
        req.portfolio
            .as_ref()
            .map(|items| items.iter().map(|h| h.symbol.as_deref())),
    )?;

    let batch = analyzer.analyze_batch(symbols).await;
    Ok(Json(batch.into()))
}

async fn investor_analysis(
    State(analyzer): State<AppState>,
    payload: Result<Json<InvestorRequest>, JsonRejection>,
) -> ApiResult<InvestorAnalysisResponse> {
    let Json(req) = payload?;

    let symbol = require_identifier("symbol", req.symbol.as_deref())?;
    let investor = optional_key(req.investor.as_deref());

    let analysis = analyzer.analyze_with_model(symbol, investor).await;
    Ok(Json(analysis.into()))
}

async fn list_investors(State(analyzer): State<AppState>) -> Json<InvestorsResponse> {
    Json(analyzer.registry().into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use analyst_core::analysis::{BATCH_CONFIDENCE, MODEL_CONFIDENCE};
    use analyst_core::scoring::SeededScorer;
    use axum::body::Body;
    use axum::http::{header, Method, Request, StatusCode};
    use serde_json::{json, Value};
    use std::collections::BTreeSet;
    use tower::ServiceExt;

    fn app() -> Router {
        let analyzer = Analyzer::new(
            investors::PROFILE,
            investors::registry().unwrap(),
            Arc::new(SeededScorer::new(2024)),
            Latency::NONE,
        );
        router(Arc::new(analyzer))
    }

    async fn send(req: Request<Body>) -> (StatusCode, Value) {
        let res = app().oneshot(req).await.unwrap();
        let status = res.status();
        let bytes = axum::body::to_bytes(res.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    async fn get_json(uri: &str) -> (StatusCode, Value) {
        send(Request::builder().uri(uri).body(Body::empty()).unwrap()).await
    }

    async fn post_json(uri: &str, body: Value) -> (StatusCode, Value) {
        send(
            Request::builder()
                .method(Method::POST)
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
    }

    fn keys(obj: &Value) -> BTreeSet<String> {
        obj.as_object().unwrap().keys().cloned().collect()
    }

    fn in_range(v: &Value, low: f64, high: f64) -> bool {
        v.as_f64().is_some_and(|x| (low..=high).contains(&x))
    }

    #[tokio::test]
    async fn index_reports_running() {
        let (status, body) = get_json("/").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"status": "AI Hedge Fund API is running"}));
    }

    #[tokio::test]
    async fn health_is_operational() {
        let (status, body) = get_json("/api/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["version"], "1.0.0");
        assert_eq!(body["services"]["ai_models"], "operational");
        assert_eq!(body["services"]["data_feed"], "operational");
    }

    #[tokio::test]
    async fn portfolio_results_follow_input_order() {
        let (status, body) = post_json(
            "/api/portfolio/analysis",
            json!({"portfolio": [
                {"symbol": "AAPL", "name": "Apple Inc.", "shares": 10},
                {"symbol": "MSFT"},
            ]}),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert!(body["timestamp"].is_f64());

        let results = body["results"].as_array().unwrap();
        assert_eq!(results.len(), 2);
        assert_eq!(results[0]["symbol"], "AAPL");
        assert_eq!(results[1]["symbol"], "MSFT");

        let expected: BTreeSet<String> = ["sentiment", "fundamentals", "technicals", "risk"]
            .into_iter()
            .map(String::from)
            .collect();
        for r in results {
            assert_eq!(keys(&r["analysis"]), expected);
            assert!(r["analysis"]
                .as_object()
                .unwrap()
                .values()
                .all(|v| in_range(v, 0.0, 1.0)));
            assert!(in_range(&r["confidence"], BATCH_CONFIDENCE.low, BATCH_CONFIDENCE.high));
            assert!(["BUY", "HOLD", "SELL"].contains(&r["recommendation"].as_str().unwrap()));
        }
        assert_eq!(
            results[1]["reasoning"],
            "Analysis based on current market conditions and MSFT's performance metrics."
        );
    }

    #[tokio::test]
    async fn symbols_are_echoed_exactly() {
        let (status, body) = post_json(
            "/api/portfolio/analysis",
            json!({"portfolio": [{"symbol": " AAPL "}, {"symbol": "msft\n"}]}),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["results"][0]["symbol"], " AAPL ");
        assert_eq!(body["results"][1]["symbol"], "msft\n");
        assert_eq!(
            body["results"][0]["reasoning"],
            "Analysis based on current market conditions and  AAPL 's performance metrics."
        );

        let (status, body) = post_json(
            "/api/investor/analysis",
            json!({"symbol": "  tsla", "investor": "cathie_wood"}),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["symbol"], "  tsla");
    }

    #[tokio::test]
    async fn wrong_method_is_json_405() {
        let (status, body) = get_json("/api/portfolio/analysis").await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(body["error"], "method_not_allowed");
        assert_eq!(body["message"], "GET is not supported on /api/portfolio/analysis");

        let (status, body) = post_json("/api/investors", json!({})).await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(body["error"], "method_not_allowed");
    }

    #[tokio::test]
    async fn missing_portfolio_is_empty() {
        let (status, body) = post_json("/api/portfolio/analysis", json!({})).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["results"], json!([]));
    }

    #[tokio::test]
    async fn holding_without_symbol_is_rejected() {
        let (status, body) = post_json(
            "/api/portfolio/analysis",
            json!({"portfolio": [{"symbol": "AAPL"}, {"shares": 3}]}),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "bad_request");
        assert_eq!(body["message"], "portfolio[1].symbol is required");
    }

    #[tokio::test]
    async fn non_list_portfolio_is_rejected() {
        let (status, body) =
            post_json("/api/portfolio/analysis", json!({"portfolio": "AAPL"})).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "bad_request");
    }

    #[tokio::test]
    async fn unparsable_body_is_rejected() {
        let (status, body) = send(
            Request::builder()
                .method(Method::POST)
                .uri("/api/investor/analysis")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from("{not json"))
                .unwrap(),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "bad_request");
    }

    #[tokio::test]
    async fn unknown_investor_falls_back_to_buffett() {
        let (status, body) = post_json(
            "/api/investor/analysis",
            json!({"symbol": "TSLA", "investor": "unknown_key"}),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["symbol"], "TSLA");
        assert_eq!(body["investor"], "Warren Buffett");
        assert_eq!(body["style"], "Value Investing");

        let metrics: BTreeSet<String> = investors::INVESTORS[0]
            .descriptor
            .metrics
            .iter()
            .map(|m| m.to_string())
            .collect();
        assert_eq!(keys(&body["analysis"]), metrics);
        assert!(in_range(&body["confidence"], MODEL_CONFIDENCE.low, MODEL_CONFIDENCE.high));
    }

    #[tokio::test]
    async fn fallback_matches_default_shape() {
        let (_, fallback) = post_json(
            "/api/investor/analysis",
            json!({"symbol": "TSLA", "investor": "warren_bufet"}),
        )
        .await;
        let (_, default) =
            post_json("/api/investor/analysis", json!({"symbol": "TSLA"})).await;

        assert_eq!(keys(&fallback), keys(&default));
        assert_eq!(keys(&fallback["analysis"]), keys(&default["analysis"]));
        assert_eq!(fallback["investor"], default["investor"]);
    }

    #[tokio::test]
    async fn known_investor_is_used() {
        let (status, body) = post_json(
            "/api/investor/analysis",
            json!({"symbol": "NVDA", "investor": "charlie_munger"}),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["investor"], "Charlie Munger");
        assert_eq!(
            body["reasoning"],
            "Charlie Munger would evaluate NVDA primarily on Long-term Outlook, \
             Management Quality, Business Model, Competitive Moat."
        );
    }

    #[tokio::test]
    async fn investor_request_needs_symbol() {
        let (status, body) =
            post_json("/api/investor/analysis", json!({"investor": "cathie_wood"})).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "symbol is required");
    }

    #[tokio::test]
    async fn lists_investors() {
        let (status, body) = get_json("/api/investors").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["default"], "warren_buffett");

        let ids: Vec<&str> = body["investors"]
            .as_array()
            .unwrap()
            .iter()
            .map(|i| i["id"].as_str().unwrap())
            .collect();
        assert_eq!(ids, ["warren_buffett", "cathie_wood", "charlie_munger"]);
        assert_eq!(body["investors"][1]["style"], "Disruptive Innovation");
    }

    #[tokio::test]
    async fn unknown_route_is_404() {
        let (status, body) = get_json("/api/property/analysis").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "not_found");
    }

    #[test]
    fn build_analyzer_uses_settings() {
        let settings = Settings::from_lookup(|key| match key {
            "BATCH_LATENCY_MS" => Some("0".into()),
            "MODEL_LATENCY_MS" => Some("0".into()),
            _ => None,
        })
        .unwrap();
        let analyzer = build_analyzer(&settings, Some(1)).unwrap();
        assert_eq!(analyzer.latency(), Latency::NONE);
        assert_eq!(analyzer.registry().default_key(), investors::DEFAULT_INVESTOR);
    }
}
