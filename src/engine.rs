//! # Assessment Engine
//! Pure, testable logic that maps `(metrics, previous score)` → `Assessment`.
//! No I/O, suitable for unit tests and offline evaluation.
//!
//! Policy: the score is the importance-weighted average from `scoring`;
//! trend is only classified when the caller supplies a baseline; risk is
//! the linear inversion from `risk`. Reasons explain degenerate inputs,
//! dominant metrics, and collector-reported declines.

use std::cmp::Ordering;

use crate::assessment::{Assessment, Contributor, Reason, ReasonKind};
use crate::metric::{EngagementMetric, MetricTrend};
use crate::risk::RiskBand;
use crate::scoring::{compute_engagement_score, normalized_value};
use crate::trend::classify_engagement_trend;

/// Contributors and citation reasons surfaced per assessment.
const TOP_N: usize = 3;

/// Same composition a serving layer would run, purely functional for testing.
pub fn assess(metrics: &[EngagementMetric], previous_score: Option<f32>) -> Assessment {
    let score = compute_engagement_score(metrics);
    let trend = previous_score.map(|prev| classify_engagement_trend(score, prev));
    let risk = crate::risk::predict_churn_risk(score);

    let mut assessment = Assessment::new(score, trend, risk);

    // 1) Weighted mass per metric; basis for shares, citations and ranking.
    let weighted: Vec<(usize, f32)> = metrics
        .iter()
        .enumerate()
        .map(|(i, m)| (i, normalized_value(m) * m.importance.max(0.0)))
        .collect();
    let weighted_sum: f32 = weighted.iter().map(|(_, w)| w).sum();
    let total_importance: f32 = metrics.iter().map(|m| m.importance.max(0.0)).sum();

    // 2) Reasons for degenerate inputs first, citations otherwise.
    if metrics.is_empty() {
        assessment.reasons.push(
            Reason::new("No engagement metrics supplied; score falls back to 0.")
                .kind(ReasonKind::DegenerateInput),
        );
    } else if total_importance <= 0.0 {
        assessment.reasons.push(
            Reason::new("All metric importances are zero or negative; score falls back to 0.")
                .kind(ReasonKind::DegenerateInput),
        );
    } else {
        let mut ranked = weighted.clone();
        ranked.sort_by(|(_, a), (_, b)| b.partial_cmp(a).unwrap_or(Ordering::Equal));

        for &(i, w) in ranked.iter().take(TOP_N) {
            let m = &metrics[i];
            let share = if weighted_sum > 0.0 {
                w / weighted_sum
            } else {
                0.0
            };
            let msg = format!(
                "{}: value {:.0} -> normalized {:.2} at importance {:.0} ({:.0}% of weighted score)",
                m.metric,
                m.value,
                normalized_value(m),
                m.importance.max(0.0),
                share * 100.0
            );
            assessment.reasons.push(
                Reason::new(msg)
                    .kind(ReasonKind::MetricWeight)
                    .weighted(share),
            );
        }

        // Collector-reported declines on weighty metrics are worth a callout.
        for m in metrics
            .iter()
            .filter(|m| m.trend == MetricTrend::Decreasing && m.importance > 0.0)
            .take(TOP_N)
        {
            assessment.reasons.push(
                Reason::new(format!("{} is trending down at the collector.", m.metric))
                    .kind(ReasonKind::MetricMovement),
            );
        }
    }

    // 3) Trend shift explanation, when a baseline exists.
    if let (Some(t), Some(prev)) = (trend, previous_score) {
        let msg = if prev > 0.0 {
            let pct = (score - prev) / prev * 100.0;
            format!(
                "Score moved {:.0} -> {:.0} ({:+.1}%): {}",
                prev,
                score,
                pct,
                t.as_str()
            )
        } else {
            format!(
                "No usable baseline (previous {:.0}); treating movement as {}",
                prev,
                t.as_str()
            )
        };
        assessment
            .reasons
            .push(Reason::new(msg).kind(ReasonKind::TrendShift));
    }

    // 4) Risk framing.
    assessment.reasons.push(
        Reason::new(format!(
            "Churn risk {:.0} ({})",
            risk,
            RiskBand::from_risk(risk).as_str()
        ))
        .kind(ReasonKind::RiskLevel),
    );

    // 5) Top contributors by weighted mass.
    let mut ranked = weighted;
    ranked.sort_by(|(_, a), (_, b)| b.partial_cmp(a).unwrap_or(Ordering::Equal));
    for (i, w) in ranked.into_iter().take(TOP_N) {
        let m = &metrics[i];
        let share = if weighted_sum > 0.0 {
            w / weighted_sum
        } else {
            0.0
        };
        assessment.top_contributors.push(
            Contributor::new(
                &m.metric,
                m.value,
                normalized_value(m),
                m.importance.max(0.0),
                share,
            )
            .trend(m.trend),
        );
    }

    assessment
}
