//! history.rs — bounded in-memory log of recent assessments for diagnostics
//! and baseline lookups.

use std::sync::Mutex;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::assessment::Assessment;
use crate::trend::Trend;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub ts: DateTime<Utc>,
    pub score: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trend: Option<Trend>,
    pub risk: f32,
    // short explainability fingerprint for quick diagnostics:
    pub top_metrics: Vec<String>, // e.g. ["feature_usage", "support_tickets"]
}

#[derive(Debug)]
pub struct History {
    inner: Mutex<Vec<HistoryEntry>>,
    cap: usize,
}

impl History {
    pub fn with_capacity(cap: usize) -> Self {
        Self {
            inner: Mutex::new(Vec::with_capacity(cap.min(10_000))),
            cap: cap.min(10_000),
        }
    }

    pub fn push(&self, a: &Assessment) {
        let top_metrics = a
            .top_contributors
            .iter()
            .take(3)
            .map(|c| c.metric.clone())
            .collect();

        let entry = HistoryEntry {
            ts: Utc::now(),
            score: a.score,
            trend: a.trend,
            risk: a.risk,
            top_metrics,
        };

        let mut v = self.inner.lock().expect("history mutex poisoned");
        v.push(entry);
        if v.len() > self.cap {
            let excess = v.len() - self.cap;
            v.drain(0..excess);
        }
    }

    pub fn snapshot_last_n(&self, n: usize) -> Vec<HistoryEntry> {
        let v = self.inner.lock().expect("history mutex poisoned");
        let len = v.len();
        let start = len.saturating_sub(n);
        v[start..].to_vec()
    }

    /// Most recent score, if any — a convenient trend baseline.
    pub fn last_score(&self) -> Option<f32> {
        let v = self.inner.lock().expect("history mutex poisoned");
        v.last().map(|e| e.score)
    }
}
