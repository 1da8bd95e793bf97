//! # Trend Classification
//! Maps `(current, previous)` engagement scores to a closed label via
//! percent change, with inclusive thresholds at exactly ±5%.

use serde::{Deserialize, Serialize};

/// Inclusive percent-change thresholds for the label boundaries.
const IMPROVING_PCT_MIN: f32 = 5.0;
const DECLINING_PCT_MAX: f32 = -5.0;

/// Direction of score movement between two observations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Trend {
    Improving,
    Stable,
    Declining,
}

impl Trend {
    pub fn as_str(&self) -> &'static str {
        match self {
            Trend::Improving => "IMPROVING",
            Trend::Stable => "STABLE",
            Trend::Declining => "DECLINING",
        }
    }

    /// Directional glyph for display. Cosmetic only, not part of the contract.
    pub fn glyph(&self) -> &'static str {
        match self {
            Trend::Improving => "↑",
            Trend::Stable => "→",
            Trend::Declining => "↓",
        }
    }
}

/// Classify score movement against a baseline.
///
/// A previous score of zero makes the percent-change formula undefined; the
/// documented fallback treats any positive current score as improving and
/// everything else as stable. Negative baselines fall into the same branch
/// (out-of-range inputs clamp, they are not rejected).
pub fn classify_engagement_trend(current: f32, previous: f32) -> Trend {
    if previous <= 0.0 {
        return if current > 0.0 {
            Trend::Improving
        } else {
            Trend::Stable
        };
    }

    let percent_change = (current - previous) / previous * 100.0;
    if percent_change >= IMPROVING_PCT_MIN {
        Trend::Improving
    } else if percent_change <= DECLINING_PCT_MAX {
        Trend::Declining
    } else {
        Trend::Stable
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn improving_on_clear_gain() {
        // +14.3% over the baseline.
        assert_eq!(classify_engagement_trend(80.0, 70.0), Trend::Improving);
    }

    #[test]
    fn declining_on_clear_loss() {
        // -12.5%.
        assert_eq!(classify_engagement_trend(70.0, 80.0), Trend::Declining);
    }

    #[test]
    fn stable_on_small_move() {
        // +2.86%.
        assert_eq!(classify_engagement_trend(72.0, 70.0), Trend::Stable);
    }

    #[test]
    fn boundaries_are_inclusive() {
        // Exactly +5% and -5% belong to the outer labels.
        assert_eq!(classify_engagement_trend(105.0, 100.0), Trend::Improving);
        assert_eq!(classify_engagement_trend(95.0, 100.0), Trend::Declining);
        // One point inside the band is stable on both sides.
        assert_eq!(classify_engagement_trend(104.0, 100.0), Trend::Stable);
        assert_eq!(classify_engagement_trend(96.0, 100.0), Trend::Stable);
    }

    #[test]
    fn zero_baseline_fallback() {
        assert_eq!(classify_engagement_trend(40.0, 0.0), Trend::Improving);
        assert_eq!(classify_engagement_trend(0.0, 0.0), Trend::Stable);
    }

    #[test]
    fn negative_baseline_uses_the_fallback_branch() {
        assert_eq!(classify_engagement_trend(40.0, -10.0), Trend::Improving);
        assert_eq!(classify_engagement_trend(0.0, -10.0), Trend::Stable);
    }

    #[test]
    fn serializes_uppercase_like_a_verdict() {
        assert_eq!(
            serde_json::to_value(Trend::Declining).unwrap(),
            serde_json::json!("DECLINING")
        );
    }
}
