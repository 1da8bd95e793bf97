// tests/engine_flow.rs
//
// End-to-end flow over the public surface: catalog-built metrics → assess →
// history/rolling bookkeeping, the way a consuming app wires it up.

use churn_risk_analyzer::{
    assess, History, MetricCatalog, MetricTrend, ReasonKind, RiskBand, RollingWindow, Trend,
};

// Quiet by default; RUST_LOG surfaces the engine's degenerate-input warnings.
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn sample_metrics(catalog: &MetricCatalog) -> Vec<churn_risk_analyzer::EngagementMetric> {
    vec![
        catalog.metric("logins", 72.0, MetricTrend::Stable),
        catalog.metric("feature_usage", 85.0, MetricTrend::Increasing),
        catalog.metric("support_tickets", 20.0, MetricTrend::Stable),
        catalog.metric("response_time", 35.0, MetricTrend::Decreasing),
    ]
}

#[test]
fn catalog_to_assessment_flow() {
    init_tracing();
    let catalog = MetricCatalog::default();
    let metrics = sample_metrics(&catalog);

    let a = assess(&metrics, Some(60.0));

    // Weighted average of normalized values; all components are healthy, so
    // the score lands in the upper half and the risk in the lower.
    assert!(a.score >= 50.0 && a.score <= 100.0);
    assert_eq!(a.risk, 100.0 - a.score);
    assert_eq!(a.band, RiskBand::from_risk(a.risk));
    assert_eq!(a.score, a.score.round());

    // Explainability: citations plus a trend shift and a risk framing line.
    assert!(a
        .reasons
        .iter()
        .any(|r| r.kind == Some(ReasonKind::MetricWeight)));
    assert!(a
        .reasons
        .iter()
        .any(|r| r.kind == Some(ReasonKind::TrendShift)));
    assert!(a
        .reasons
        .iter()
        .any(|r| r.kind == Some(ReasonKind::RiskLevel)));
    assert!(!a.top_contributors.is_empty());
    assert!(a.top_contributors.len() <= 3);
}

#[test]
fn lower_is_better_metrics_resolve_from_the_catalog() {
    let catalog = MetricCatalog::default();

    // Healthy ticket load (few tickets) must raise the score, not sink it.
    let few_tickets = vec![catalog.metric("support_tickets", 5.0, MetricTrend::Stable)];
    let many_tickets = vec![catalog.metric("support_tickets", 95.0, MetricTrend::Stable)];

    let healthy = assess(&few_tickets, None);
    let unhealthy = assess(&many_tickets, None);
    assert!(healthy.score > unhealthy.score);
    assert!(healthy.risk < unhealthy.risk);
}

#[test]
fn history_and_rolling_provide_the_baseline() {
    let catalog = MetricCatalog::default();
    let history = History::with_capacity(100);
    let rolling = RollingWindow::new_30d();

    // First observation: no baseline yet.
    let first = assess(&sample_metrics(&catalog), history.last_score());
    assert_eq!(first.trend, None);
    history.push(&first);
    rolling.record(first.score, None);

    // Second observation: baseline comes from history.
    let second = assess(&sample_metrics(&catalog), history.last_score());
    assert_eq!(second.trend, Some(Trend::Stable));
    history.push(&second);
    rolling.record(second.score, None);

    let (avg, n) = rolling.average_and_count();
    assert_eq!(n, 2);
    assert!((avg - first.score).abs() < 1e-4);

    let snap = history.snapshot_last_n(10);
    assert_eq!(snap.len(), 2);
    assert_eq!(snap[1].score, second.score);
    assert!(!snap[1].top_metrics.is_empty());
}

#[test]
fn assessment_serializes_for_the_caller() {
    let catalog = MetricCatalog::default();
    let a = assess(&sample_metrics(&catalog), Some(40.0));

    let v = serde_json::to_value(&a).unwrap();
    assert!(v["score"].is_number());
    assert!(v["risk"].is_number());
    assert!(v["band"].is_string());
    assert!(v["reasons"].is_array());
    assert!(v["top_contributors"].is_array());
}
