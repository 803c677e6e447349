use std::sync::{Arc, RwLock};

use crate::analysis::cache::AnalysisCache;
use crate::analysis::ResumeAnalyzer;
use crate::config::Config;

/// An analyzer together with the results memoized under its profile.
///
/// The pair is swapped as one value, so a result computed with an old profile can
/// only ever land in the old profile's cache.
pub struct Engine {
    pub analyzer: ResumeAnalyzer,
    pub cache: AnalysisCache,
}

impl Engine {
    fn new(analyzer: ResumeAnalyzer, cache_capacity: usize) -> Self {
        Self {
            analyzer,
            cache: AnalysisCache::new(cache_capacity),
        }
    }
}

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Active engine. Swapped wholesale on profile reload; in-flight requests keep
    /// the `Arc` they already cloned.
    engine: Arc<RwLock<Arc<Engine>>>,
}

impl AppState {
    pub fn new(config: Config, analyzer: ResumeAnalyzer) -> Self {
        let engine = Engine::new(analyzer, config.cache_capacity);
        Self {
            config,
            engine: Arc::new(RwLock::new(Arc::new(engine))),
        }
    }

    pub fn engine(&self) -> Arc<Engine> {
        let guard = self.engine.read().unwrap_or_else(|e| e.into_inner());
        Arc::clone(&guard)
    }

    /// Installs a new analyzer with an empty cache and returns the retired engine.
    pub fn replace_analyzer(&self, analyzer: ResumeAnalyzer) -> Arc<Engine> {
        let engine = Arc::new(Engine::new(analyzer, self.config.cache_capacity));
        let mut guard = self.engine.write().unwrap_or_else(|e| e.into_inner());
        std::mem::replace(&mut *guard, engine)
    }
}
