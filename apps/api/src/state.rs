use std::sync::Arc;

use crate::config::Config;
use crate::matching::ranking::RankingEngine;
use crate::models::catalog::SkillCatalog;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub catalog: Arc<SkillCatalog>,
    /// Catalog, similarity backend and weights bundled for ranking runs.
    /// Default backend: TfidfCosine.
    pub engine: RankingEngine,
}
