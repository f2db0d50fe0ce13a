//! Plan memoization.
//!
//! A plan is a pure function of the catalog snapshot and the visitor
//! profile, so identical requests against the same catalog revision can
//! share one computed plan. Keying on the revision means a catalog change
//! never serves a stale plan; old entries simply age out.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache as MokaCache;

use crate::catalog::CatalogSnapshot;
use crate::domain::VisitorProfile;
use crate::planner::{Plan, PlanError, Planner, PlannerConfig};

/// Cache key: (catalog revision, visitor profile).
type PlanKey = (u64, VisitorProfile);

/// Configuration for the plan cache.
#[derive(Debug, Clone)]
pub struct PlanCacheConfig {
    /// TTL for cached plans.
    pub ttl: Duration,

    /// Maximum number of cached plans.
    pub max_capacity: u64,
}

impl Default for PlanCacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(300),
            max_capacity: 1000,
        }
    }
}

/// Planner with memoized results.
pub struct CachedPlanner {
    config: PlannerConfig,
    plans: MokaCache<PlanKey, Arc<Plan>>,
}

impl CachedPlanner {
    /// Create a new cached planner.
    pub fn new(config: PlannerConfig, cache_config: &PlanCacheConfig) -> Self {
        let plans = MokaCache::builder()
            .time_to_live(cache_config.ttl)
            .max_capacity(cache_config.max_capacity)
            .build();

        Self { config, plans }
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Plan for `profile`, using the cache if available.
    pub async fn plan(
        &self,
        snapshot: &CatalogSnapshot,
        profile: &VisitorProfile,
    ) -> Result<Arc<Plan>, PlanError> {
        let key = (snapshot.revision(), profile.clone());

        if let Some(cached) = self.plans.get(&key).await {
            return Ok(cached);
        }

        let plan = Arc::new(Planner::new(&self.config).plan(snapshot, profile)?);
        self.plans.insert(key, Arc::clone(&plan)).await;

        Ok(plan)
    }

    /// Get cache statistics (for monitoring).
    pub fn entry_count(&self) -> u64 {
        self.plans.entry_count()
    }
}
