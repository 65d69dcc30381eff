//! Application context shared across request handlers

use std::sync::Arc;

use waylog_core::BreakScheduler;
use waylog_domain::PlannerConfig;

/// Application context - holds the services handlers depend on
///
/// Cloned per request by the router, so everything inside is cheap to
/// clone and safe to share.
#[derive(Clone)]
pub struct AppContext {
    /// Break scheduler shared by the trip routes
    pub scheduler: Arc<BreakScheduler>,
}

impl AppContext {
    /// Context with the default planning heuristics.
    pub fn new() -> Self {
        Self::with_planner_config(PlannerConfig::default())
    }

    /// Context with custom planning heuristics.
    pub fn with_planner_config(config: PlannerConfig) -> Self {
        Self {
            scheduler: Arc::new(BreakScheduler::with_config(config)),
        }
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}
