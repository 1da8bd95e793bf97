//! Input model for the scoring engine.
//!
//! An `EngagementMetric` is one observed behavioral signal about a customer
//! (logins, feature usage, support tickets, ...). Raw values are expected to
//! be domain-scaled roughly to 0–100; normalization bounds each contribution
//! to [0,1] regardless of what the collector reports.

use serde::{Deserialize, Serialize};

/// Whether higher raw values indicate healthier engagement.
///
/// Assigned at metric-definition time (see the catalog); latency- and
/// ticket-style metrics are `LowerIsBetter`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    #[default]
    HigherIsBetter,
    LowerIsBetter,
}

/// Movement tag reported with a metric by the collector.
///
/// Informational only — never consulted by the scoring formula. It may
/// surface in assessment reasons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricTrend {
    Increasing,
    Decreasing,
    #[default]
    Stable,
}

/// One observed signal about a customer's behavior.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngagementMetric {
    /// Identifying name/key, e.g. "feature_usage".
    pub metric: String,
    /// Raw observation, expected roughly in 0–100 (not enforced).
    pub value: f32,
    #[serde(default)]
    pub trend: MetricTrend,
    /// Positive weight (nominally 1–10). Non-positive weights contribute
    /// nothing to the aggregate.
    pub importance: f32,
    #[serde(default)]
    pub direction: Direction,
}

impl EngagementMetric {
    pub fn new(metric: impl Into<String>, value: f32, importance: f32) -> Self {
        Self {
            metric: metric.into(),
            value,
            trend: MetricTrend::Stable,
            importance,
            direction: Direction::HigherIsBetter,
        }
    }

    /// Builder-style direction override.
    pub fn direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    /// Builder-style trend tag.
    pub fn trend(mut self, trend: MetricTrend) -> Self {
        self.trend = trend;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_and_trend_default_on_deserialize() {
        let m: EngagementMetric =
            serde_json::from_str(r#"{"metric":"logins","value":60.0,"importance":8.0}"#).unwrap();
        assert_eq!(m.direction, Direction::HigherIsBetter);
        assert_eq!(m.trend, MetricTrend::Stable);
    }

    #[test]
    fn lower_is_better_round_trips() {
        let m = EngagementMetric::new("support_tickets", 12.0, 8.0)
            .direction(Direction::LowerIsBetter)
            .trend(MetricTrend::Increasing);

        let v = serde_json::to_value(&m).unwrap();
        assert_eq!(v["direction"], serde_json::json!("lower_is_better"));
        assert_eq!(v["trend"], serde_json::json!("increasing"));

        let back: EngagementMetric = serde_json::from_value(v).unwrap();
        assert_eq!(back, m);
    }
}
