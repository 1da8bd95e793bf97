//! assessment.rs — Output shape for a full engagement assessment.
//!
//! Goal: a standardized result for score + trend + churn risk with
//! explainability (reasons and top contributors), so callers can render or
//! transmit the verdict without recomputing anything.

use serde::{Deserialize, Serialize};

use crate::metric::MetricTrend;
use crate::risk::RiskBand;
use crate::trend::Trend;

/// Reason shown to the caller (explainability).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reason {
    /// Human-readable description (e.g. "feature_usage carries 42% of the score").
    pub message: String,
    /// Optional weight of the reason in [0.0, 1.0], when it makes sense.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<f32>,
    /// Optional category (metric_weight, metric_movement, trend_shift, ...).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<ReasonKind>,
}

/// Coarse reason categories — keeps UI and tests consistent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReasonKind {
    MetricWeight,
    MetricMovement,
    TrendShift,
    RiskLevel,
    DegenerateInput,
    Other,
}

/// A metric with a large weighted share of the aggregate score.
/// Lets callers show "evidence": which signal mattered, how much, and why.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contributor {
    /// Metric name/key, e.g. "feature_usage".
    pub metric: String,
    /// Raw observed value.
    pub value: f32,
    /// Normalized contribution in [0,1].
    pub normalized: f32,
    /// Importance weight that was applied.
    pub importance: f32,
    /// Fraction of the total weighted score carried by this metric, [0,1].
    pub share: f32,
    /// Collector-reported movement tag, when present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trend: Option<MetricTrend>,
}

/// Complete assessment including explainability.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assessment {
    /// Engagement score, a whole number in [0,100].
    pub score: f32,
    /// Present when the caller supplied a baseline score.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trend: Option<Trend>,
    /// Predicted churn risk, a whole number in [0,100].
    pub risk: f32,
    pub band: RiskBand,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub reasons: Vec<Reason>,
    /// Top N contributors (typically 1–3).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub top_contributors: Vec<Contributor>,
}

impl Assessment {
    /// Skeletal assessment; the band is derived from the risk value.
    pub fn new(score: f32, trend: Option<Trend>, risk: f32) -> Self {
        Self {
            score,
            trend,
            risk,
            band: RiskBand::from_risk(risk),
            reasons: Vec::new(),
            top_contributors: Vec::new(),
        }
    }

    /// Adds one reason (builder style).
    pub fn with_reason(mut self, reason: Reason) -> Self {
        self.reasons.push(reason);
        self
    }

    /// Adds one contributor (builder style).
    pub fn with_contributor(mut self, c: Contributor) -> Self {
        self.top_contributors.push(c);
        self
    }
}

impl Reason {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            weight: None,
            kind: None,
        }
    }

    pub fn weighted(mut self, w: f32) -> Self {
        self.weight = Some(clamp01(w));
        self
    }

    pub fn kind(mut self, kind: ReasonKind) -> Self {
        self.kind = Some(kind);
        self
    }
}

impl Contributor {
    pub fn new(
        metric: impl Into<String>,
        value: f32,
        normalized: f32,
        importance: f32,
        share: f32,
    ) -> Self {
        Self {
            metric: metric.into(),
            value,
            normalized,
            importance,
            share: clamp01(share),
            trend: None,
        }
    }

    pub fn trend(mut self, trend: MetricTrend) -> Self {
        self.trend = Some(trend);
        self
    }
}

fn clamp01(x: f32) -> f32 {
    if x < 0.0 {
        0.0
    } else if x > 1.0 {
        1.0
    } else {
        x
    }
}
