use analyst_core::analysis::ModelAnalysis;
use analyst_core::domain::recommendation::{
    AnalysisResult, BatchAnalysis, MetricScores, Recommendation,
};
use analyst_core::registry::Registry;
use serde::{Deserialize, Serialize};

/// `POST /api/portfolio/analysis`
#[derive(Debug, Deserialize)]
pub struct PortfolioRequest {
    pub portfolio: Option<Vec<Holding>>,
}

/// Only `symbol` is used; `name`, `shares` and friends are ignored.
#[derive(Debug, Deserialize)]
pub struct Holding {
    pub symbol: Option<String>,
}

/// `POST /api/investor/analysis`
#[derive(Debug, Deserialize)]
pub struct InvestorRequest {
    pub symbol: Option<String>,
    pub investor: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct StockAnalysis {
    pub symbol: String,
    pub analysis: MetricScores,
    pub recommendation: Recommendation,
    pub confidence: f64,
    pub reasoning: String,
}

impl From<AnalysisResult> for StockAnalysis {
    fn from(r: AnalysisResult) -> Self {
        Self {
            symbol: r.identifier,
            analysis: r.analysis,
            recommendation: r.recommendation,
            confidence: r.confidence,
            reasoning: r.reasoning,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PortfolioAnalysisResponse {
    pub results: Vec<StockAnalysis>,
    pub timestamp: f64,
}

impl From<BatchAnalysis> for PortfolioAnalysisResponse {
    fn from(batch: BatchAnalysis) -> Self {
        Self {
            results: batch.results.into_iter().map(StockAnalysis::from).collect(),
            timestamp: batch.timestamp,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct InvestorAnalysisResponse {
    pub symbol: String,
    pub investor: &'static str,
    pub style: &'static str,
    pub analysis: MetricScores,
    pub recommendation: Recommendation,
    pub confidence: f64,
    pub reasoning: String,
}

impl From<ModelAnalysis> for InvestorAnalysisResponse {
    fn from(m: ModelAnalysis) -> Self {
        let investor = m.descriptor();
        Self {
            symbol: m.result.identifier,
            investor: investor.name,
            style: investor.focus,
            analysis: m.result.analysis,
            recommendation: m.result.recommendation,
            confidence: m.result.confidence,
            reasoning: m.result.reasoning,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct InvestorSummary {
    pub id: &'static str,
    pub name: &'static str,
    pub style: &'static str,
    pub metrics: &'static [&'static str],
}

/// `GET /api/investors`
#[derive(Debug, Serialize)]
pub struct InvestorsResponse {
    pub default: &'static str,
    pub investors: Vec<InvestorSummary>,
}

impl From<&Registry> for InvestorsResponse {
    fn from(registry: &Registry) -> Self {
        Self {
            default: registry.default_key(),
            investors: registry
                .entries()
                .iter()
                .map(|e| InvestorSummary {
                    id: e.key,
                    name: e.descriptor.name,
                    style: e.descriptor.focus,
                    metrics: e.descriptor.metrics,
                })
                .collect(),
        }
    }
}
