//! # Metric Catalog
//!
//! Configurable definitions for engagement metrics: a mapping from canonical
//! metric names (e.g. "feature usage", "support tickets") to a normalization
//! direction and a default importance in `[0, 10]`.
//!
//! - Loads from JSON config (definitions + aliases).
//! - Case-insensitive lookup with normalization of punctuation, dashes, etc.
//! - Aliases map alternative spellings/keys to canonical metrics.
//! - Fallback order: aliases → exact match → substring match → default.
//! - Ships a built-in seed (`metric_catalog.json`) with common product metrics.
//!
//! This is where a metric's direction is decided — at definition time, as
//! explicit data, not by guessing from the name at scoring time.

use anyhow::Context;
use once_cell::sync::Lazy;
use serde::Deserialize;
use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
    sync::RwLock,
    time::SystemTime,
};
use tracing::{debug, warn};

use crate::metric::{Direction, EngagementMetric, MetricTrend};

static BUILT_IN: Lazy<MetricCatalog> = Lazy::new(|| {
    let raw = include_str!("../metric_catalog.json");
    serde_json::from_str::<MetricCatalog>(raw).expect("valid built-in metric catalog")
});

/// Nominal ceiling for importance weights.
const IMPORTANCE_MAX: f32 = 10.0;

fn default_importance() -> f32 {
    1.0
}

/// Definition of one canonical metric.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct MetricDefinition {
    #[serde(default = "default_importance")]
    pub importance: f32,
    #[serde(default)]
    pub direction: Direction,
}

impl MetricDefinition {
    fn clamped(self) -> Self {
        Self {
            importance: clamp_importance(self.importance),
            direction: self.direction,
        }
    }
}

/// Catalog of metric definitions, loaded from JSON or the built-in seed.
#[derive(Debug, Clone, Deserialize)]
pub struct MetricCatalog {
    /// Importance assigned when no definition matches.
    #[serde(default = "default_importance")]
    pub default_importance: f32,
    /// Definitions for canonical metric names (stored normalized).
    #[serde(default)]
    pub definitions: HashMap<String, MetricDefinition>,
    /// Aliases mapping non-canonical names → canonical names.
    #[serde(default)]
    pub aliases: HashMap<String, String>,
}

impl Default for MetricCatalog {
    fn default() -> Self {
        BUILT_IN.clone()
    }
}

impl MetricCatalog {
    /// Load a catalog from a JSON file.
    /// Falls back to the built-in seed on any error.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Self {
        match fs::read_to_string(path) {
            Ok(s) => serde_json::from_str(&s).unwrap_or_else(|e| {
                warn!("metric catalog parse failed, using built-in seed: {e}");
                Self::default()
            }),
            Err(_) => Self::default(),
        }
    }

    /// Strict variant for callers that need the error instead of a fallback.
    pub fn from_path<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)
            .with_context(|| format!("read metric catalog {}", path.display()))?;
        let catalog: MetricCatalog = serde_json::from_str(&raw)
            .with_context(|| format!("parse metric catalog {}", path.display()))?;
        Ok(catalog)
    }

    /// Resolve the definition for a metric name.
    ///
    /// Steps:
    /// 1. Alias lookup (normalized) → canonical → definition.
    /// 2. Exact definition match.
    /// 3. Substring fallback (e.g. "weekly feature usage" → "feature usage").
    /// 4. Default importance, `HigherIsBetter`.
    pub fn definition_for(&self, metric: &str) -> MetricDefinition {
        let s = normalize(metric);

        // 1) Alias resolution.
        if let Some(canon) = self.aliases.get(&s) {
            let c = normalize(canon);
            if let Some(def) = self.definitions.get(&c) {
                return def.clamped();
            }
        }

        // 2) Exact definition match.
        if let Some(def) = self.definitions.get(&s) {
            return def.clamped();
        }

        // 3) Substring fallback.
        for (k, def) in &self.definitions {
            if s.contains(k.as_str()) {
                return def.clamped();
            }
        }

        // 4) Default.
        MetricDefinition {
            importance: clamp_importance(self.default_importance),
            direction: Direction::HigherIsBetter,
        }
    }

    /// Construct a metric with catalog-resolved direction and importance.
    pub fn metric(&self, name: &str, value: f32, trend: MetricTrend) -> EngagementMetric {
        let def = self.definition_for(name);
        EngagementMetric {
            metric: name.to_string(),
            value,
            trend,
            importance: def.importance,
            direction: def.direction,
        }
    }
}

/// Hot-reload wrapper: reloads when the config file mtime changes.
#[derive(Debug)]
pub struct HotReloadCatalog {
    path: PathBuf,
    inner: RwLock<State>,
}

#[derive(Debug)]
struct State {
    catalog: MetricCatalog,
    last_modified: Option<SystemTime>,
}

impl HotReloadCatalog {
    /// Create with a path (defaults to "config/metric_catalog.json" if `None`).
    pub fn new(path: Option<&Path>) -> Self {
        let path = path
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("config/metric_catalog.json"));
        Self {
            path,
            inner: RwLock::new(State {
                catalog: MetricCatalog::default(),
                last_modified: None,
            }),
        }
    }

    /// Get the latest catalog, reloading if the config file changed.
    pub fn current(&self) -> MetricCatalog {
        // Fast path: check metadata without grabbing the write lock yet.
        let needs_reload = match fs::metadata(&self.path).and_then(|m| m.modified()) {
            Ok(mtime) => {
                let guard = self.inner.read().expect("catalog lock poisoned");
                guard.last_modified != Some(mtime)
            }
            // If the file isn't there, keep the current catalog; no reload.
            Err(_) => false,
        };

        if !needs_reload {
            return self.inner.read().expect("catalog lock poisoned").catalog.clone();
        }

        // Slow path: reload with the write lock, double-checking for races.
        let mut guard = self.inner.write().expect("catalog lock poisoned");
        if let Ok(meta) = fs::metadata(&self.path) {
            if let Ok(mtime) = meta.modified() {
                if guard.last_modified != Some(mtime) {
                    match MetricCatalog::from_path(&self.path) {
                        Ok(catalog) => {
                            debug!(path = %self.path.display(), "metric catalog reloaded");
                            guard.catalog = catalog;
                            guard.last_modified = Some(mtime);
                        }
                        Err(e) => warn!("metric catalog reload failed: {e:#}"),
                    }
                }
            }
        }
        guard.catalog.clone()
    }
}

/// Normalize input string: lowercase, replace punctuation/dashes with spaces,
/// collapse multiple spaces into one.
fn normalize(s: &str) -> String {
    let mut out = s.trim().to_ascii_lowercase();

    // Replace common separators with spaces.
    for ch in ['—', '–', '-', '_', '/', '\\'] {
        out = out.replace(ch, " ");
    }

    // Replace disruptive punctuation/whitespace with spaces.
    out = out.replace(['\n', '\r', '\t', '.', ','], " ");

    // Collapse multiple spaces.
    out.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Clamp to [0.0, IMPORTANCE_MAX].
fn clamp_importance(x: f32) -> f32 {
    if x < 0.0 {
        0.0
    } else if x > IMPORTANCE_MAX {
        IMPORTANCE_MAX
    } else {
        x
    }
}
