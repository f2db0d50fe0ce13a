use std::time::{SystemTime, UNIX_EPOCH};

use sha2::{Digest, Sha256};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use park_server::auth::{Role, StaffDirectory, TokenSigner};
use park_server::cache::CachedPlanner;
use park_server::catalog::{CatalogStore, RideCatalog};
use park_server::settings::ServerSettings;
use park_server::web::{AppState, create_router};

/// Signing key for when none is configured. Tokens die with the process.
fn ephemeral_secret() -> Vec<u8> {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or_default();

    let mut hasher = Sha256::new();
    hasher.update(nanos.to_le_bytes());
    hasher.update(std::process::id().to_le_bytes());
    hasher.finalize().to_vec()
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("shutting down");
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("park_server=info,tower_http=info")),
        )
        .init();

    let settings = ServerSettings::from_env()?;

    // Open the catalog (seeds the default rides on first run)
    let catalog = RideCatalog::open(CatalogStore::new(&settings.catalog_path));

    let planner = CachedPlanner::new(settings.planner.clone(), &settings.plan_cache);

    let mut staff = StaffDirectory::new();
    match &settings.admin {
        Some(admin) => {
            staff.insert(&admin.staff_id, &admin.password, Role::Admin);
            info!(staff_id = %admin.staff_id, "admin account configured");
        }
        None => warn!("PARK_ADMIN_PASSWORD not set: the ride catalog is read-only"),
    }

    let secret = match &settings.auth_secret {
        Some(secret) => secret.as_bytes().to_vec(),
        None => {
            warn!("PARK_AUTH_SECRET not set: using a per-process key, tokens will not survive a restart");
            ephemeral_secret()
        }
    };
    let signer = TokenSigner::new(secret, settings.token_ttl);

    // Build app state
    let state = AppState::new(catalog, planner, staff, signer);

    // Spawn background task to reload the catalog from disk
    let catalog_refresh = state.catalog.clone();
    let refresh_interval = settings.catalog_refresh;
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(refresh_interval);
        interval.tick().await; // First tick is immediate, skip it
        loop {
            interval.tick().await;
            match catalog_refresh.refresh().await {
                Ok(count) => info!(rides = count, "refreshed ride catalog"),
                Err(e) => error!(error = %e, "failed to refresh ride catalog"),
            }
        }
    });

    // Create router
    let app = create_router(state, &settings.static_dir.to_string_lossy());

    // Bind and serve
    let listener = tokio::net::TcpListener::bind(settings.addr).await?;
    info!(addr = %settings.addr, "park planner listening");
    info!("open http://{} in your browser for the web interface", settings.addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}
