//! # Churn Risk
//! Naive linear inversion of the engagement score. This is an explicit
//! placeholder for a real predictive model; it stays deterministic and
//! explainable until one exists.

use serde::{Deserialize, Serialize};

/// Predicted churn risk: a whole number in [0,100].
///
/// Clamped after the inversion, so out-of-range scores still yield a
/// bounded risk (150 → 0, -50 → 100). Monotonically decreasing in the
/// score: a healthier customer is never at higher risk.
pub fn predict_churn_risk(engagement_score: f32) -> f32 {
    (100.0 - engagement_score).round().clamp(0.0, 100.0)
}

/// Display band for a risk value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskBand {
    Low,      // < 25
    Moderate, // 25–49
    High,     // 50–74
    Critical, // >= 75
}

impl RiskBand {
    pub fn from_risk(risk: f32) -> Self {
        if risk < 25.0 {
            RiskBand::Low
        } else if risk < 50.0 {
            RiskBand::Moderate
        } else if risk < 75.0 {
            RiskBand::High
        } else {
            RiskBand::Critical
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskBand::Low => "low",
            RiskBand::Moderate => "moderate",
            RiskBand::High => "high",
            RiskBand::Critical => "critical",
        }
    }
}
