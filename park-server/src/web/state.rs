//! Application state for the web layer.

use std::sync::Arc;

use crate::auth::{StaffDirectory, TokenSigner};
use crate::cache::CachedPlanner;
use crate::catalog::RideCatalog;

/// Shared application state.
///
/// Contains all the services needed to handle requests.
#[derive(Clone)]
pub struct AppState {
    /// Ride catalog (copy-on-write snapshots)
    pub catalog: Arc<RideCatalog>,

    /// Plan optimizer with memoized results
    pub planner: Arc<CachedPlanner>,

    /// Staff accounts for login
    pub staff: Arc<StaffDirectory>,

    /// Bearer token issuer/verifier
    pub signer: Arc<TokenSigner>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(
        catalog: RideCatalog,
        planner: CachedPlanner,
        staff: StaffDirectory,
        signer: TokenSigner,
    ) -> Self {
        Self {
            catalog: Arc::new(catalog),
            planner: Arc::new(planner),
            staff: Arc::new(staff),
            signer: Arc::new(signer),
        }
    }
}
