use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Recommendation {
    Buy,
    Hold,
    Sell,
    Pass,
}

impl Recommendation {
    pub fn as_str(self) -> &'static str {
        match self {
            Recommendation::Buy => "BUY",
            Recommendation::Hold => "HOLD",
            Recommendation::Sell => "SELL",
            Recommendation::Pass => "PASS",
        }
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Choices offered for listed equities.
pub const EQUITY_RECOMMENDATIONS: [Recommendation; 3] = [
    Recommendation::Buy,
    Recommendation::Hold,
    Recommendation::Sell,
];

/// Choices offered for properties: you pass on a deal rather than sell it.
pub const PROPERTY_RECOMMENDATIONS: [Recommendation; 3] = [
    Recommendation::Buy,
    Recommendation::Hold,
    Recommendation::Pass,
];

/// Metric name to score, in the order the metrics were scored.
///
/// Serializes as a JSON object.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MetricScores(Vec<(String, f64)>);

impl MetricScores {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, metric: impl Into<String>, score: f64) {
        self.0.push((metric.into(), score));
    }

    pub fn get(&self, metric: &str) -> Option<f64> {
        self.0
            .iter()
            .find(|(name, _)| name == metric)
            .map(|(_, score)| *score)
    }

    pub fn metrics(&self) -> impl Iterator<Item = &str> + '_ {
        self.0.iter().map(|(name, _)| name.as_str())
    }

    pub fn scores(&self) -> impl Iterator<Item = f64> + '_ {
        self.0.iter().map(|(_, score)| *score)
    }
}

impl FromIterator<(String, f64)> for MetricScores {
    fn from_iter<I: IntoIterator<Item = (String, f64)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Serialize for MetricScores {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (metric, score) in &self.0 {
            map.serialize_entry(metric, score)?;
        }
        map.end()
    }
}

/// One synthetic analysis of a single subject (a ticker or an address).
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisResult {
    pub identifier: String,
    pub analysis: MetricScores,
    pub recommendation: Recommendation,
    pub confidence: f64,
    pub reasoning: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BatchAnalysis {
    /// Same order as the request items.
    pub results: Vec<AnalysisResult>,
    /// Seconds since the Unix epoch, taken when the batch finished.
    pub timestamp: f64,
}
