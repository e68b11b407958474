//! Synthetic analysis engine shared by both services.
//!
//! An [`Analyzer`] owns the read-only registry, a [`Scorer`] and the
//! simulated latency. Services differ only in their [`AnalysisProfile`].

use crate::config::Settings;
use crate::domain::recommendation::{
    AnalysisResult, BatchAnalysis, MetricScores, Recommendation,
};
use crate::registry::{Registry, Resolution, Selection, StyleDescriptor};
use crate::scoring::Scorer;
use std::sync::Arc;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreRange {
    pub low: f64,
    pub high: f64,
}

impl ScoreRange {
    pub const fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    pub fn contains(&self, value: f64) -> bool {
        (self.low..=self.high).contains(&value)
    }
}

pub const BATCH_CONFIDENCE: ScoreRange = ScoreRange::new(0.5, 0.95);
pub const MODEL_CONFIDENCE: ScoreRange = ScoreRange::new(0.6, 0.9);

/// Per-service vocabulary: fixed batch metrics, recommendation set and
/// reasoning templates.
#[derive(Clone, Copy)]
pub struct AnalysisProfile {
    pub batch_metrics: [&'static str; 4],
    pub recommendations: [Recommendation; 3],
    pub batch_reasoning: fn(&str) -> String,
    pub model_reasoning: fn(&StyleDescriptor, &str) -> String,
}

/// Simulated processing time. Applied once per request, whatever its size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Latency {
    pub batch: Duration,
    pub model: Duration,
}

impl Latency {
    pub const NONE: Latency = Latency {
        batch: Duration::ZERO,
        model: Duration::ZERO,
    };

    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            batch: settings.batch_latency,
            model: settings.model_latency,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ModelAnalysis {
    pub resolution: Resolution,
    pub result: AnalysisResult,
}

impl ModelAnalysis {
    pub fn descriptor(&self) -> &'static StyleDescriptor {
        self.resolution.descriptor
    }
}

pub struct Analyzer {
    profile: AnalysisProfile,
    registry: Registry,
    scorer: Arc<dyn Scorer>,
    latency: Latency,
}

impl Analyzer {
    pub fn new(
        profile: AnalysisProfile,
        registry: Registry,
        scorer: Arc<dyn Scorer>,
        latency: Latency,
    ) -> Self {
        Self {
            profile,
            registry,
            scorer,
            latency,
        }
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn latency(&self) -> Latency {
        self.latency
    }

    /// Scores every identifier against the fixed batch metrics.
    pub async fn analyze_batch(&self, identifiers: Vec<String>) -> BatchAnalysis {
        tracing::debug!(items = identifiers.len(), "batch analysis started");
        pause(self.latency.batch).await;

        let results = identifiers
            .into_iter()
            .map(|id| self.score_batch_item(id))
            .collect();

        BatchAnalysis {
            results,
            timestamp: crate::time::now_epoch_seconds(),
        }
    }

    /// Scores one identifier under the registry entry picked by `key`.
    pub async fn analyze_with_model(&self, identifier: String, key: Option<&str>) -> ModelAnalysis {
        let resolution = self.registry.resolve(key);
        match &resolution.selection {
            Selection::Unrecognized(requested) => tracing::warn!(
                requested = %requested,
                resolved = resolution.key,
                "unknown registry key; using default"
            ),
            Selection::Requested | Selection::Defaulted => {
                tracing::debug!(resolved = resolution.key, "model analysis started")
            }
        }

        pause(self.latency.model).await;

        let result = self.score_with(identifier, resolution.descriptor);
        ModelAnalysis { resolution, result }
    }

    fn score_batch_item(&self, identifier: String) -> AnalysisResult {
        let analysis = self
            .profile
            .batch_metrics
            .iter()
            .map(|metric| (metric.to_string(), self.scorer.unit()))
            .collect();

        AnalysisResult {
            reasoning: (self.profile.batch_reasoning)(&identifier),
            analysis,
            recommendation: self.recommend(),
            confidence: self.draw(BATCH_CONFIDENCE),
            identifier,
        }
    }

    fn score_with(&self, identifier: String, descriptor: &StyleDescriptor) -> AnalysisResult {
        let analysis: MetricScores = descriptor
            .metrics
            .iter()
            .map(|metric| (metric.to_string(), self.scorer.unit()))
            .collect();

        AnalysisResult {
            reasoning: (self.profile.model_reasoning)(descriptor, &identifier),
            analysis,
            recommendation: self.recommend(),
            confidence: self.draw(MODEL_CONFIDENCE),
            identifier,
        }
    }

    fn recommend(&self) -> Recommendation {
        let choices = &self.profile.recommendations;
        choices[self.scorer.pick(choices.len())]
    }

    fn draw(&self, range: ScoreRange) -> f64 {
        self.scorer.uniform(range.low, range.high)
    }
}

async fn pause(latency: Duration) {
    if !latency.is_zero() {
        tokio::time::sleep(latency).await;
    }
}
