use analyst_core::analysis::ModelAnalysis;
use analyst_core::domain::recommendation::{
    AnalysisResult, BatchAnalysis, MetricScores, Recommendation,
};
use analyst_core::registry::Registry;
use serde::{Deserialize, Serialize};

/// `POST /api/property/analysis`
#[derive(Debug, Deserialize)]
pub struct PropertiesRequest {
    pub properties: Option<Vec<Property>>,
}

#[derive(Debug, Deserialize)]
pub struct Property {
    pub address: Option<String>,
}

/// `POST /api/model/analysis`
#[derive(Debug, Deserialize)]
pub struct ModelRequest {
    pub address: Option<String>,
    pub model: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct PropertyAnalysis {
    pub address: String,
    pub analysis: MetricScores,
    pub recommendation: Recommendation,
    pub confidence: f64,
    pub reasoning: String,
}

impl From<AnalysisResult> for PropertyAnalysis {
    fn from(r: AnalysisResult) -> Self {
        Self {
            address: r.identifier,
            analysis: r.analysis,
            recommendation: r.recommendation,
            confidence: r.confidence,
            reasoning: r.reasoning,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PropertiesAnalysisResponse {
    pub results: Vec<PropertyAnalysis>,
    pub timestamp: f64,
}

impl From<BatchAnalysis> for PropertiesAnalysisResponse {
    fn from(batch: BatchAnalysis) -> Self {
        Self {
            results: batch.results.into_iter().map(PropertyAnalysis::from).collect(),
            timestamp: batch.timestamp,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ModelAnalysisResponse {
    pub address: String,
    pub model: &'static str,
    pub focus: &'static str,
    pub analysis: MetricScores,
    pub recommendation: Recommendation,
    pub confidence: f64,
    pub reasoning: String,
}

impl From<ModelAnalysis> for ModelAnalysisResponse {
    fn from(m: ModelAnalysis) -> Self {
        let model = m.descriptor();
        Self {
            address: m.result.identifier,
            model: model.name,
            focus: model.focus,
            analysis: m.result.analysis,
            recommendation: m.result.recommendation,
            confidence: m.result.confidence,
            reasoning: m.result.reasoning,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ModelSummary {
    pub id: &'static str,
    pub name: &'static str,
    pub focus: &'static str,
    pub metrics: &'static [&'static str],
}

/// `GET /api/models`
#[derive(Debug, Serialize)]
pub struct ModelsResponse {
    pub default: &'static str,
    pub models: Vec<ModelSummary>,
}

impl From<&Registry> for ModelsResponse {
    fn from(registry: &Registry) -> Self {
        Self {
            default: registry.default_key(),
            models: registry
                .entries()
                .iter()
                .map(|e| ModelSummary {
                    id: e.key,
                    name: e.descriptor.name,
                    focus: e.descriptor.focus,
                    metrics: e.descriptor.metrics,
                })
                .collect(),
        }
    }
}
